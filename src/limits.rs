//! Discord's documented size limits for webhook payloads.
//!
//! These are advisory constants for callers' own bookkeeping; nothing in this
//! crate enforces them. Discord rejects oversized payloads server-side with a
//! 400 response, which [`WebhookClient::execute`](crate::WebhookClient::execute)
//! surfaces as a status code like any other.
//!
//! See: <https://discord.com/developers/docs/resources/channel#embed-limits>

/// Maximum length of the plain message content.
pub const CONTENT: usize = 4000;

/// Maximum length of an embed title.
pub const EMBED_TITLE: usize = 256;

/// Maximum length of an embed description.
pub const EMBED_DESCRIPTION: usize = 2048;

/// Maximum number of fields per embed.
pub const EMBED_FIELDS: usize = 25;

/// Maximum length of a field name.
pub const FIELD_NAME: usize = 256;

/// Maximum length of a field value.
pub const FIELD_VALUE: usize = 1024;

/// Maximum length of the footer text.
pub const FOOTER_TEXT: usize = 2048;

/// Maximum length of the author name.
pub const AUTHOR_NAME: usize = 256;

/// Maximum number of embeds per message.
pub const EMBEDS: usize = 10;

/// Maximum combined length of all text across the payload.
pub const TOTAL: usize = 6000;
