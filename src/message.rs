use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::embed::Embed;
use crate::json::{insert_array, insert_opt};

/// One webhook execution payload.
///
/// Built up through chained setters and consumed by
/// [`WebhookClient::execute`](crate::WebhookClient::execute). None of the
/// [`limits`](crate::limits) are checked here; Discord enforces them
/// server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookMessage {
    content: Option<String>,
    username: Option<String>,
    avatar_url: Option<String>,
    tts: bool,
    embeds: Vec<Embed>,
}

impl WebhookMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    /// The per-message display-name override, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = Some(username.into());
        self
    }

    /// The per-message avatar override, if any.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn set_avatar_url(&mut self, avatar_url: impl Into<String>) -> &mut Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    #[must_use]
    pub const fn tts(&self) -> bool {
        self.tts
    }

    pub const fn set_tts(&mut self, tts: bool) -> &mut Self {
        self.tts = tts;
        self
    }

    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    /// Appends an embed; insertion order is serialization order.
    pub fn add_embed(&mut self, embed: Embed) -> &mut Self {
        self.embeds.push(embed);
        self
    }

    pub fn clear_embeds(&mut self) -> &mut Self {
        self.embeds.clear();
        self
    }

    /// Builds the sparse top-level record. `tts` is emitted only when true,
    /// matching what the endpoint treats as the default.
    #[must_use]
    pub fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        insert_opt(&mut obj, "content", self.content.as_deref());
        insert_opt(&mut obj, "username", self.username.as_deref());
        insert_opt(&mut obj, "avatar_url", self.avatar_url.as_deref());
        if self.tts {
            obj.insert("tts".to_owned(), Value::Bool(true));
        }

        let embeds = self.embeds.iter().map(|e| Value::Object(e.to_object()));
        insert_array(&mut obj, "embeds", embeds.collect());

        obj
    }

    /// Renders the record as the JSON document POSTed to the endpoint.
    #[must_use]
    pub fn to_json(&self) -> String {
        Value::Object(self.to_object()).to_string()
    }
}

impl Serialize for WebhookMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::WebhookMessage;
    use crate::embed::{Color, Embed};

    #[test]
    fn content_only_message() {
        let mut message = WebhookMessage::new();
        message.set_content("hi");
        assert_eq!(message.to_json(), r#"{"content":"hi"}"#);
    }

    #[test]
    fn tts_is_omitted_when_false() {
        let mut message = WebhookMessage::new();
        message.set_content("hi").set_tts(false);
        assert!(!message.to_object().contains_key("tts"));
    }

    #[test]
    fn tts_is_emitted_when_true() {
        let mut message = WebhookMessage::new();
        message.set_tts(true);
        let obj = serde_json::to_value(&message).unwrap();
        assert_eq!(obj, json!({"tts": true}));
    }

    #[test]
    fn overrides_appear_when_set() {
        let mut message = WebhookMessage::new();
        message
            .set_username("Notifier")
            .set_avatar_url("https://example.com/a.png");
        let obj = serde_json::to_value(&message).unwrap();
        assert_eq!(
            obj,
            json!({"username": "Notifier", "avatar_url": "https://example.com/a.png"})
        );
    }

    #[test]
    fn embed_record_nests_under_embeds() {
        let mut embed = Embed::new();
        embed.set_title("T").set_color(Color::from_int(0xff0000));
        let mut message = WebhookMessage::new();
        message.add_embed(embed);
        let obj = serde_json::to_value(&message).unwrap();
        assert_eq!(obj, json!({"embeds": [{"title": "T", "color": 16711680}]}));
    }

    #[test]
    fn embeds_keep_insertion_order() {
        let mut first = Embed::new();
        first.set_title("first");
        let mut second = Embed::new();
        second.set_title("second");

        let mut message = WebhookMessage::new();
        message.add_embed(first).add_embed(second);
        let obj = serde_json::to_value(&message).unwrap();
        assert_eq!(
            obj["embeds"],
            json!([{"title": "first"}, {"title": "second"}])
        );
    }

    #[test]
    fn clear_embeds_resets_to_empty_record() {
        let mut message = WebhookMessage::new();
        message.add_embed(Embed::new());
        message.clear_embeds();
        assert!(message.embeds().is_empty());
        assert_eq!(message.to_json(), "{}");
    }
}
