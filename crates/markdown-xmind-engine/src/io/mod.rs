use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a text document and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content to a file, creating parent directories if they don't exist
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    let io_err = |source: std::io::Error| IoError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    fs::write(path, content).map_err(io_err)
}

/// Derive an output path beside `input`: `<stem><suffix>.<extension>`.
///
/// ```
/// use markdown_xmind_engine::io::default_output_path;
/// use std::path::Path;
///
/// let out = default_output_path(Path::new("notes/map.xmind"), "_list", "md");
/// assert_eq!(out, Path::new("notes/map_list.md"));
/// ```
pub fn default_output_path(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    input.with_file_name(default_output_name(input, suffix, extension))
}

/// Derive a bare output file name, `<stem><suffix>.<extension>`, which resolves
/// against the current directory rather than the input's.
///
/// ```
/// use markdown_xmind_engine::io::default_output_name;
/// use std::path::Path;
///
/// let out = default_output_name(Path::new("notes/map.md"), "", "xmind");
/// assert_eq!(out, Path::new("map.xmind"));
/// ```
pub fn default_output_name(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    PathBuf::from(format!("{stem}{suffix}.{extension}"))
}
