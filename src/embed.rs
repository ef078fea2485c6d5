mod color;
mod field;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

pub use color::Color;
pub use field::Field;

use crate::json::{insert_array, insert_object, insert_opt};

/// A rich sub-block of a webhook message.
///
/// Every part is optional; serialization emits only what was set. Footer,
/// image, thumbnail and author are stored flat and grouped into nested
/// objects at serialization time, each group appearing only when at least
/// one of its members is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    timestamp: Option<String>,
    color: Option<Color>,
    footer_text: Option<String>,
    footer_icon_url: Option<String>,
    image_url: Option<String>,
    thumbnail_url: Option<String>,
    author_name: Option<String>,
    author_url: Option<String>,
    author_icon_url: Option<String>,
    fields: Vec<Field>,
}

impl Embed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// The timestamp as stored: an ISO-8601 string, whatever setter produced it.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.timestamp = Some(timestamp.to_rfc3339_opts(SecondsFormat::Secs, true));
        self
    }

    /// Stores a pre-formatted ISO-8601 timestamp verbatim.
    pub fn set_timestamp_str(&mut self, timestamp: impl Into<String>) -> &mut Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Converts a unix epoch to ISO-8601 immediately, so [`timestamp`](Self::timestamp)
    /// always reads back a string. Epochs outside chrono's representable
    /// range leave the timestamp unset.
    pub fn set_timestamp_unix(&mut self, secs: i64) -> &mut Self {
        if let Some(dt) = DateTime::from_timestamp(secs, 0) {
            self.set_timestamp(dt);
        }
        self
    }

    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    pub const fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn footer_text(&self) -> Option<&str> {
        self.footer_text.as_deref()
    }

    pub fn set_footer_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.footer_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn footer_icon_url(&self) -> Option<&str> {
        self.footer_icon_url.as_deref()
    }

    pub fn set_footer_icon_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.footer_icon_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn set_image(&mut self, url: impl Into<String>) -> &mut Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn set_thumbnail(&mut self, url: impl Into<String>) -> &mut Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        self.author_name.as_deref()
    }

    pub fn set_author_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.author_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn author_url(&self) -> Option<&str> {
        self.author_url.as_deref()
    }

    pub fn set_author_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.author_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn author_icon_url(&self) -> Option<&str> {
        self.author_icon_url.as_deref()
    }

    pub fn set_author_icon_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.author_icon_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Appends a field; insertion order is serialization order.
    pub fn add_field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn clear_fields(&mut self) -> &mut Self {
        self.fields.clear();
        self
    }

    /// Builds the sparse embed record. An embed with nothing set yields an
    /// empty object.
    #[must_use]
    pub fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        insert_opt(&mut obj, "title", self.title.as_deref());
        insert_opt(&mut obj, "description", self.description.as_deref());
        insert_opt(&mut obj, "url", self.url.as_deref());
        insert_opt(&mut obj, "timestamp", self.timestamp.as_deref());
        insert_opt(&mut obj, "color", self.color.map(Color::to_int));

        let mut footer = Map::new();
        insert_opt(&mut footer, "text", self.footer_text.as_deref());
        insert_opt(&mut footer, "icon_url", self.footer_icon_url.as_deref());
        insert_object(&mut obj, "footer", footer);

        let mut image = Map::new();
        insert_opt(&mut image, "url", self.image_url.as_deref());
        insert_object(&mut obj, "image", image);

        let mut thumbnail = Map::new();
        insert_opt(&mut thumbnail, "url", self.thumbnail_url.as_deref());
        insert_object(&mut obj, "thumbnail", thumbnail);

        let mut author = Map::new();
        insert_opt(&mut author, "name", self.author_name.as_deref());
        insert_opt(&mut author, "url", self.author_url.as_deref());
        insert_opt(&mut author, "icon_url", self.author_icon_url.as_deref());
        insert_object(&mut obj, "author", author);

        let fields = self.fields.iter().map(|f| Value::Object(f.to_object()));
        insert_array(&mut obj, "fields", fields.collect());

        obj
    }
}

impl Serialize for Embed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Color, Embed, Field};

    #[test]
    fn empty_embed_yields_empty_record() {
        assert!(Embed::new().to_object().is_empty());
    }

    #[test]
    fn scalars_appear_when_set() {
        let mut embed = Embed::new();
        embed.set_title("T").set_color(Color::from_int(0xff0000));
        let obj = serde_json::to_value(&embed).unwrap();
        assert_eq!(obj, json!({"title": "T", "color": 16711680}));
    }

    #[test]
    fn footer_group_appears_with_text_only() {
        let mut embed = Embed::new();
        embed.set_footer_text("sent by the bot");
        let obj = serde_json::to_value(&embed).unwrap();
        assert_eq!(obj, json!({"footer": {"text": "sent by the bot"}}));
    }

    #[test]
    fn footer_group_appears_with_icon_only() {
        let mut embed = Embed::new();
        embed.set_footer_icon_url("https://example.com/icon.png");
        let obj = serde_json::to_value(&embed).unwrap();
        assert_eq!(
            obj,
            json!({"footer": {"icon_url": "https://example.com/icon.png"}})
        );
    }

    #[test]
    fn author_group_appears_iff_any_member_set() {
        let mut embed = Embed::new();
        assert!(!embed.to_object().contains_key("author"));

        embed.set_author_name("WebUntis Bot");
        let obj = serde_json::to_value(&embed).unwrap();
        assert_eq!(obj, json!({"author": {"name": "WebUntis Bot"}}));
    }

    #[test]
    fn image_and_thumbnail_wrap_their_url() {
        let mut embed = Embed::new();
        embed
            .set_image("https://example.com/i.png")
            .set_thumbnail("https://example.com/t.png");
        let obj = serde_json::to_value(&embed).unwrap();
        assert_eq!(
            obj,
            json!({
                "image": {"url": "https://example.com/i.png"},
                "thumbnail": {"url": "https://example.com/t.png"},
            })
        );
    }

    #[test]
    fn fields_keep_insertion_order() {
        let mut embed = Embed::new();
        embed
            .add_field(Field::new("first", "1", false))
            .add_field(Field::new("second", "2", true));
        let obj = serde_json::to_value(&embed).unwrap();
        assert_eq!(
            obj["fields"],
            json!([
                {"name": "first", "value": "1", "inline": false},
                {"name": "second", "value": "2", "inline": true},
            ])
        );
    }

    #[test]
    fn clear_fields_drops_the_array() {
        let mut embed = Embed::new();
        embed.add_field(Field::new("n", "v", false));
        embed.clear_fields();
        assert!(embed.to_object().is_empty());
    }

    #[test]
    fn unix_timestamp_converts_at_set_time() {
        let mut embed = Embed::new();
        embed.set_timestamp_unix(0);
        assert_eq!(embed.timestamp(), Some("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn out_of_range_epoch_leaves_timestamp_unset() {
        let mut embed = Embed::new();
        embed.set_timestamp_unix(i64::MAX);
        assert_eq!(embed.timestamp(), None);
    }

    #[test]
    fn raw_timestamp_string_is_kept_verbatim() {
        let mut embed = Embed::new();
        embed.set_timestamp_str("2026-08-29T12:00:00+02:00");
        let obj = embed.to_object();
        assert_eq!(obj["timestamp"], "2026-08-29T12:00:00+02:00");
    }

    #[test]
    fn empty_string_counts_as_set() {
        let mut embed = Embed::new();
        embed.set_title("");
        let obj = serde_json::to_value(&embed).unwrap();
        assert_eq!(obj, json!({"title": ""}));
    }
}
