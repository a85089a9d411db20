use std::str::Utf8Error;

use serde_json::error::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemDecodeError {
    #[error("Payload is not utf-8: {0}")]
    NotUtf8(#[from] Utf8Error),

    #[error("Malformed payload: {0}")]
    Malformed(serde_json::Error),

    #[error("Payload does not describe an item: {0}")]
    InvalidField(serde_json::Error),

    #[error("Couldn't encode item: {0}")]
    Encode(serde_json::Error),
}

/// Syntax and truncation problems are malformed text, anything the parser
/// accepted but couldn't map onto an item is a field problem.
impl From<serde_json::Error> for ItemDecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::InvalidField(err),
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed(err),
        }
    }
}

pub type Result<T> = core::result::Result<T, ItemDecodeError>;
