//! Decode stream record payloads into typed items.
//!
//! A payload is a utf-8 json object carrying `id`, `description` and `count`:
//!
//! ```rust
//!   use gateway_item::Item;
//!
//!   let item = Item::decode(br#"{"id": 1, "description": "blah", "count": 0}"#).unwrap();
//!   assert_eq!(1, item.id);
//! ```

mod errors;

use serde::{Deserialize, Serialize};

pub use errors::{ItemDecodeError, Result};

/// One row worth of data, keyed by `id`.
/// Both integers map onto 32 bit cql `int` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub description: String,
    pub count: i32,
}

impl Item {
    pub fn new(id: i32, description: impl Into<String>, count: i32) -> Self {
        Self {
            id,
            description: description.into(),
            count,
        }
    }

    /// Decode a complete item or fail, there is no partially decoded item.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(payload)?;
        Ok(serde_json::from_str(text)?)
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(ItemDecodeError::Encode)
    }
}

impl TryFrom<&[u8]> for Item {
    type Error = ItemDecodeError;

    fn try_from(payload: &[u8]) -> Result<Self> {
        Item::decode(payload)
    }
}
