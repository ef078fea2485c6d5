use serde_json::{Map, Value};

/// Inserts `key` only if the value is set; unset fields are omitted entirely.
pub fn insert_opt<T: Into<Value>>(obj: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        obj.insert(key.to_owned(), value.into());
    }
}

/// Inserts a nested object only if at least one of its keys is populated.
pub fn insert_object(obj: &mut Map<String, Value>, key: &str, nested: Map<String, Value>) {
    if !nested.is_empty() {
        obj.insert(key.to_owned(), Value::Object(nested));
    }
}

/// Inserts an array only if it is non-empty.
pub fn insert_array(obj: &mut Map<String, Value>, key: &str, items: Vec<Value>) {
    if !items.is_empty() {
        obj.insert(key.to_owned(), Value::Array(items));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_scalar_is_omitted() {
        let mut obj = Map::new();
        insert_opt(&mut obj, "title", None::<&str>);
        insert_opt(&mut obj, "color", Some(0xff0000_u32));
        assert!(!obj.contains_key("title"));
        assert_eq!(obj["color"], 0xff0000);
    }

    #[test]
    fn empty_group_is_omitted() {
        let mut obj = Map::new();
        insert_object(&mut obj, "footer", Map::new());
        insert_array(&mut obj, "fields", vec![]);
        assert!(obj.is_empty());
    }
}
