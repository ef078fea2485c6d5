use std::collections::HashSet;

use anyhow::{Result, bail};

const TOKEN_CHARS: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.";

/// Checks that a webhook token is non-empty and only uses URL-safe characters.
pub fn webhook_token(token: &str) -> Result<()> {
    if token.is_empty() {
        bail!("Token is empty");
    }
    if token.bytes().all(|b| TOKEN_CHARS.contains(&b)) {
        return Ok(());
    }

    let set = token
        .bytes()
        .filter(|b| !TOKEN_CHARS.contains(b))
        .map(char::from)
        .collect::<HashSet<char>>();
    bail!("Token contains invalid characters: {set:?}");
}
