use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::Path;

use serde::Serialize;
use uuid::Uuid;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use super::model::{
    Children, Creator, FileEntry, Manifest, Metadata, Notes, PlainNote, SHEET_CLASS, Sheet,
    TOPIC_CLASS, Topic, Workbook,
};
use super::{CONTENT_ENTRY, MANIFEST_ENTRY, METADATA_ENTRY, XmindError};
use crate::models::{NodeId, Tree};

const CREATOR_NAME: &str = "XMindConverter";
const CREATOR_VERSION: &str = "1.0";

/// Source of unique identifiers for sheets and topics.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs in 32-character hex form.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic ids (`id-0`, `id-1`, ...), handy for tests and reproducible output.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: usize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("id-{}", self.next);
        self.next += 1;
        id
    }
}

/// Build a single-sheet workbook whose root topic is the tree's root.
pub fn encode_workbook(tree: &Tree, ids: &mut impl IdGenerator) -> Workbook {
    let root_topic = encode_topic(tree, tree.root(), ids);
    let sheet = Sheet {
        id: ids.next_id(),
        class: SHEET_CLASS.to_string(),
        title: tree.node(tree.root()).title.clone(),
        root_topic,
    };

    let metadata = Metadata {
        data_structure_version: "2".to_string(),
        creator: Creator {
            name: CREATOR_NAME.to_string(),
            version: CREATOR_VERSION.to_string(),
        },
        layout_engine_version: "3".to_string(),
        family_id: format!("local-{}", ids.next_id()),
    };

    let manifest = Manifest {
        file_entries: [CONTENT_ENTRY, METADATA_ENTRY]
            .into_iter()
            .map(|name| (name.to_string(), FileEntry {}))
            .collect(),
    };

    Workbook {
        sheets: vec![sheet],
        metadata,
        manifest,
    }
}

fn encode_topic(tree: &Tree, id: NodeId, ids: &mut impl IdGenerator) -> Topic {
    let node = tree.node(id);
    let topic_id = ids.next_id();
    let attached: Vec<Topic> = node
        .children
        .iter()
        .map(|&child| encode_topic(tree, child, ids))
        .collect();

    Topic {
        id: topic_id,
        class: TOPIC_CLASS.to_string(),
        title: Some(node.title.clone()),
        notes: node.note.as_ref().map(|content| Notes {
            plain: Some(PlainNote {
                content: content.clone(),
            }),
        }),
        children: (!attached.is_empty()).then_some(Children { attached }),
    }
}

/// Write `workbook` to `path`, creating parent directories as needed.
pub fn write_xmind(workbook: &Workbook, path: &Path) -> Result<(), XmindError> {
    let io_err = |source: std::io::Error| XmindError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    write_xmind_to(workbook, file, path)?;
    log::debug!("Wrote XMind archive {}", path.display());
    Ok(())
}

/// Write `workbook` as a zip archive into `writer`; `label` names it in errors.
pub fn write_xmind_to<W: Write + Seek>(
    workbook: &Workbook,
    writer: W,
    label: &Path,
) -> Result<W, XmindError> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_json_entry(&mut zip, CONTENT_ENTRY, &workbook.sheets, options, label)?;
    add_json_entry(&mut zip, METADATA_ENTRY, &workbook.metadata, options, label)?;
    add_json_entry(&mut zip, MANIFEST_ENTRY, &workbook.manifest, options, label)?;

    zip.finish().map_err(|source| XmindError::Archive {
        path: label.to_path_buf(),
        source,
    })
}

fn add_json_entry<W: Write + Seek, T: Serialize>(
    zip: &mut ZipWriter<W>,
    name: &str,
    value: &T,
    options: SimpleFileOptions,
    label: &Path,
) -> Result<(), XmindError> {
    let json = serde_json::to_vec(value).map_err(|source| XmindError::Json {
        path: label.to_path_buf(),
        source,
    })?;
    zip.start_file(name, options)
        .map_err(|source| XmindError::Archive {
            path: label.to_path_buf(),
            source,
        })?;
    zip.write_all(&json).map_err(|source| XmindError::Io {
        path: label.to_path_buf(),
        source,
    })
}
