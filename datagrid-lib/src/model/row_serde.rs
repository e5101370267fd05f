//! Serde support for Row
//!
//! A row travels as a flat JSON object whose `id` member is a string:
//! `{"id": "row-1", "name": "Ada", "age": 36}`.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;
use serde::ser::SerializeMap;

use super::ID_COLUMN;
use super::Row;
use super::Value;

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort();

        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            map.serialize_entry(key, &self.fields[key])?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = HashMap::<String, Value>::deserialize(deserializer)?;
        let id = match fields.remove(ID_COLUMN) {
            Some(Value::Text(id)) if !id.is_empty() => id,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "row 'id' must be a non-empty string, got {}",
                    other.type_name()
                )));
            }
            None => return Err(D::Error::missing_field("id")),
        };
        fields.insert(ID_COLUMN.to_string(), Value::Text(id.clone()));
        Ok(Row { id, fields })
    }
}
