use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use super::model::{Sheet, Topic};
use super::{CONTENT_ENTRY, UNTITLED_TOPIC, XmindError};
use crate::models::{NodeId, Tree};

/// Read every sheet of an `.xmind` archive as a tree.
pub fn read_xmind(path: &Path) -> Result<Vec<Tree>, XmindError> {
    if !path.exists() {
        return Err(XmindError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| XmindError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sheets = read_xmind_from(file, path)?;
    log::debug!("Read {} sheet(s) from {}", sheets.len(), path.display());
    Ok(sheets.iter().map(sheet_to_tree).collect())
}

/// Read the sheets of an archive from any seekable reader; `label` names it in errors.
pub fn read_xmind_from<R: Read + Seek>(reader: R, label: &Path) -> Result<Vec<Sheet>, XmindError> {
    let mut archive = ZipArchive::new(reader).map_err(|source| XmindError::Archive {
        path: label.to_path_buf(),
        source,
    })?;

    let content = match archive.by_name(CONTENT_ENTRY) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(XmindError::MissingContent(label.to_path_buf())),
        Err(source) => {
            return Err(XmindError::Archive {
                path: label.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_reader(content).map_err(|source| XmindError::Json {
        path: label.to_path_buf(),
        source,
    })
}

/// Convert a sheet's root topic (and all attached descendants) into a tree.
pub fn sheet_to_tree(sheet: &Sheet) -> Tree {
    let root = &sheet.root_topic;
    let mut tree = Tree::new(root.title_or(UNTITLED_TOPIC));
    let root_id = tree.root();
    copy_note(&mut tree, root_id, root);
    copy_children(&mut tree, root_id, root);
    tree
}

fn copy_children(tree: &mut Tree, parent: NodeId, topic: &Topic) {
    for child in topic.attached() {
        let id = tree.add_child(parent, child.title_or(UNTITLED_TOPIC));
        copy_note(tree, id, child);
        copy_children(tree, id, child);
    }
}

fn copy_note(tree: &mut Tree, id: NodeId, topic: &Topic) {
    if let Some(note) = topic.plain_note() {
        tree.set_note(id, Some(note.to_string()));
    }
}
