//! Typed records for the JSON documents inside an XMind 2020+ archive.
//!
//! Field names follow the on-disk schema; unknown fields written by XMind itself
//! (styles, markers, extensions) are ignored on read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SHEET_CLASS: &str = "sheet";
pub const TOPIC_CLASS: &str = "topic";

/// One sheet of `content.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub id: String,
    #[serde(default = "sheet_class")]
    pub class: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "rootTopic")]
    pub root_topic: Topic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub id: String,
    #[serde(default = "topic_class")]
    pub class: String,
    /// Absent in some files; readers substitute a placeholder.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain: Option<PlainNote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainNote {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Children {
    #[serde(default)]
    pub attached: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub data_structure_version: String,
    pub creator: Creator,
    pub layout_engine_version: String,
    pub family_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub version: String,
}

/// Empty object marking an archive entry in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "file-entries")]
    pub file_entries: BTreeMap<String, FileEntry>,
}

/// Everything that goes into one `.xmind` archive.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
    pub metadata: Metadata,
    pub manifest: Manifest,
}

fn sheet_class() -> String {
    SHEET_CLASS.to_string()
}

fn topic_class() -> String {
    TOPIC_CLASS.to_string()
}

impl Topic {
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    /// Plain-text note, if any.
    pub fn plain_note(&self) -> Option<&str> {
        self.notes
            .as_ref()?
            .plain
            .as_ref()
            .map(|plain| plain.content.as_str())
    }

    pub fn attached(&self) -> &[Topic] {
        self.children
            .as_ref()
            .map(|children| children.attached.as_slice())
            .unwrap_or_default()
    }
}
