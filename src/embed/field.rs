use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A name/value pair rendered inside an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: String,
    inline: bool,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub const fn inline(&self) -> bool {
        self.inline
    }

    pub const fn set_inline(&mut self, inline: bool) -> &mut Self {
        self.inline = inline;
        self
    }

    /// Unlike every other record in this model, a field always emits all
    /// three keys, even for empty strings.
    #[must_use]
    pub fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        obj.insert("name".to_owned(), Value::from(self.name.as_str()));
        obj.insert("value".to_owned(), Value::from(self.value.as_str()));
        obj.insert("inline".to_owned(), Value::from(self.inline));
        obj
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Field;

    #[test]
    fn record_always_has_all_keys() {
        let field = Field::new("n", "v", true);
        let obj = serde_json::to_value(&field).unwrap();
        assert_eq!(obj, json!({"name": "n", "value": "v", "inline": true}));
    }

    #[test]
    fn empty_strings_are_still_emitted() {
        let field = Field::default();
        let obj = serde_json::to_value(&field).unwrap();
        assert_eq!(obj, json!({"name": "", "value": "", "inline": false}));
    }

    #[test]
    fn setters_chain() {
        let mut field = Field::default();
        field.set_name("Subject").set_value("Maths").set_inline(true);
        assert_eq!(field.name(), "Subject");
        assert_eq!(field.value(), "Maths");
        assert!(field.inline());
    }
}
