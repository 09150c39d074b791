//! Serialization and deserialization for rolls

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::rolls_types::Roll;

// Rolls travel as their symbol; an empty slot is `null` on the wire.
impl Serialize for Roll {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Roll::Empty => serializer.serialize_none(),
            other => serializer.serialize_str(other.symbol()),
        }
    }
}

impl<'de> Deserialize<'de> for Roll {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            None => Ok(Roll::Empty),
            Some(s) => s
                .parse::<Roll>()
                .map_err(|e| serde::de::Error::custom(e.to_string())),
        }
    }
}
