#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

mod json;
mod validate;

pub mod client;
pub mod embed;
pub mod limits;
pub mod message;

pub use client::{WebhookClient, validate_webhook_url};
pub use embed::{Color, Embed, Field};
pub use message::WebhookMessage;
