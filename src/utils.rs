use std::{
    fs::read_dir,
    io,
    path::{Path, PathBuf},
};

use tracing::trace;

use crate::data::{DATA_FOLDER_NAME, DATA_FOLDER_NAME_PRISM, MARKER_FILE_NAME};

/// Returns an Option containing the given `PathBuf`, if the `PathBuf` points to an actual file
pub fn some_if_file(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Returns an Option containing the given `PathBuf`, if the `PathBuf` points to an actual directory
pub fn some_if_dir(path: PathBuf) -> Option<PathBuf> {
    path.is_dir().then_some(path)
}

/// Makes a path absolute without touching the file system, keeping it as-is if that fails
pub fn to_absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|e| {
        trace!("Could not make {path:?} absolute: {e}");
        path.to_path_buf()
    })
}

/// Paths of all immediate children of the given directory
pub fn list_dir(path: &Path) -> Result<Vec<PathBuf>, io::Error> {
    Ok(read_dir(path)?.flatten().map(|entry| entry.path()).collect())
}

/// Whether the given directory holds the instance marker file
pub fn has_marker_file(path: &Path) -> bool {
    path.join(MARKER_FILE_NAME).exists()
}

/// Returns the data folder of an instance root, preferring `.minecraft` over `minecraft`
pub fn get_data_folder(path_instance: &Path) -> Option<PathBuf> {
    some_if_dir(path_instance.join(DATA_FOLDER_NAME))
        .or_else(|| some_if_dir(path_instance.join(DATA_FOLDER_NAME_PRISM)))
}
