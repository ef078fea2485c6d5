mod logging;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use discord_webhook::{
    Color, Embed, Field, WebhookClient, WebhookMessage, validate_webhook_url,
};
use reqwest::Url;

/// Sends a message to a Discord webhook
#[derive(Parser)]
struct Args {
    /// The webhook URL (https://discord.com/api/webhooks/{id}/{token})
    #[arg(short = 'u', long)]
    webhook_url: Url,

    /// Plain message text
    #[arg(short, long)]
    content: Option<String>,

    /// Display-name override for this message
    #[arg(short = 'n', long)]
    username: Option<String>,

    /// Avatar override for this message
    #[arg(short, long)]
    avatar_url: Option<String>,

    /// Request text-to-speech playback
    #[arg(long)]
    tts: bool,

    /// Embed title
    #[arg(short = 't', long)]
    embed_title: Option<String>,

    /// Embed body text
    #[arg(short = 'd', long)]
    embed_description: Option<String>,

    /// Embed accent color as a hex literal, e.g. "#5865f2"
    #[arg(long)]
    embed_color: Option<String>,

    /// Embed field, as "name=value" or "name=value=inline" (repeatable)
    #[arg(short = 'f', long = "field")]
    fields: Vec<String>,

    /// Stamp the embed with the current time
    #[arg(long)]
    timestamp: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    validate_webhook_url(&args.webhook_url).context("Invalid WebHook URL")?;
    let client = WebhookClient::new(args.webhook_url.clone())?;

    let mut message = WebhookMessage::new();
    if let Some(content) = args.content.clone() {
        message.set_content(content);
    }
    if let Some(username) = args.username.clone() {
        message.set_username(username);
    }
    if let Some(avatar_url) = args.avatar_url.clone() {
        message.set_avatar_url(avatar_url);
    }
    message.set_tts(args.tts);

    if let Some(embed) = build_embed(&args)? {
        message.add_embed(embed);
    }

    if message.to_object().is_empty() {
        bail!("Nothing to send; pass --content or embed options");
    }

    let status = client.execute(&message)?;
    if !status.is_success() {
        bail!("Webhook rejected the message with status {status}");
    }
    log::info!("Message delivered ({status})");
    Ok(())
}

fn build_embed(args: &Args) -> Result<Option<Embed>> {
    let wanted = args.embed_title.is_some()
        || args.embed_description.is_some()
        || args.embed_color.is_some()
        || !args.fields.is_empty();
    if !wanted {
        return Ok(None);
    }

    let mut embed = Embed::new();
    if let Some(title) = &args.embed_title {
        embed.set_title(title);
    }
    if let Some(description) = &args.embed_description {
        embed.set_description(description);
    }
    if let Some(hex) = &args.embed_color {
        embed.set_color(Color::from_hex(hex)?);
    }
    if args.timestamp {
        embed.set_timestamp(Utc::now());
    }
    for spec in &args.fields {
        embed.add_field(parse_field(spec)?);
    }
    Ok(Some(embed))
}

fn parse_field(spec: &str) -> Result<Field> {
    let mut parts = spec.splitn(3, '=');
    let name = parts.next().unwrap_or_default();
    let value = parts
        .next()
        .with_context(|| format!("Field {spec:?} is missing a value (expected name=value)"))?;
    let inline = match parts.next() {
        None => false,
        Some("inline") => true,
        Some(other) => bail!("Unknown field flag {other:?} in {spec:?} (expected \"inline\")"),
    };
    Ok(Field::new(name, value, inline))
}
