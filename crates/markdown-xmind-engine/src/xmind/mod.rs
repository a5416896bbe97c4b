//! XMind container codec.
//!
//! The outline core only deals in [`Tree`](crate::models::Tree)s. This module maps
//! them to and from the zip-of-JSON workbook format written by XMind 2020 and later.

pub mod decode;
pub mod encode;
pub mod model;

pub use decode::{read_xmind, read_xmind_from, sheet_to_tree};
pub use encode::{IdGenerator, SequentialIds, UuidIds, encode_workbook, write_xmind, write_xmind_to};
pub use model::{Sheet, Topic, Workbook};

use std::path::PathBuf;

pub const CONTENT_ENTRY: &str = "content.json";
pub const METADATA_ENTRY: &str = "metadata.json";
pub const MANIFEST_ENTRY: &str = "manifest.json";

/// Title substituted for topics that carry none.
pub const UNTITLED_TOPIC: &str = "未命名主题";

#[derive(Debug, thiserror::Error)]
pub enum XmindError {
    #[error("XMind file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid XMind archive {path}: {source}")]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },
    #[error("No content.json in {0} (legacy XML workbooks are not supported)")]
    MissingContent(PathBuf),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
