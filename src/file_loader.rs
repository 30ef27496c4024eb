//! File loading utilities for labyrinth map files.

use std::{fs, path::Path};

use color_eyre::eyre::{OptionExt as _, Result, WrapErr as _};
use log::{info, warn};

use crate::map::Map;

/// Extension of labyrinth map files.
pub(crate) const MAP_EXTENSION: &str = "labmap";

/// Loads a single `.labmap` file.
///
/// # Errors
///
/// This function may return errors if the file cannot be read, its name lacks the `.labmap`
/// extension or its contents are not a valid maze.
pub(crate) fn load_file(path: &Path) -> Result<Map> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read map file {}", path.display()))?;
    let file_name = path
        .file_name()
        .ok_or_eyre("failed to retrieve file name of map path")?;

    Map::new(file_name.to_owned(), &contents)
        .wrap_err_with(|| format!("failed to load map file {}", path.display()))
}

/// Scans a directory for .labmap files and loads them.
///
/// This function searches for files with the .labmap extension in the given directory and parses
/// each of them. Files that fail to load are skipped with a warning and the scan continues with the
/// remaining ones. Maps are returned sorted by key.
///
/// # Errors
///
/// This function may return errors if the directory or one of its entries cannot be read.
pub(crate) fn fetch_files(dir: &Path) -> Result<Vec<Map>> {
    let mut maps = Vec::new();
    for entry in fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read map directory {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir()
            || path.extension().map_or(true, |ext| ext != MAP_EXTENSION)
        {
            continue;
        }

        match load_file(&path) {
            Ok(map) => {
                info!("loaded map {} ({}x{})", map.key, map.maze.width(), map.maze.height());
                maps.push(map);
            }
            Err(err) => warn!("skipping {}: {err:#}", path.display()),
        }
    }

    maps.sort_by(|left, right| left.key.cmp(&right.key));
    Ok(maps)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_file_valid_map() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("small.labmap");
        fs::write(&path, "0 0\n9 0\n").expect("Failed to write map");

        let map = load_file(&path).expect("Failed to load map");

        assert_eq!(map.key, "small");
        assert_eq!(map.maze.height(), 2);
    }

    #[test]
    fn test_load_file_missing() {
        let dir = TempDir::new().expect("Failed to create temp directory");

        assert!(load_file(&dir.path().join("absent.labmap")).is_err());
    }

    #[test]
    fn test_load_file_invalid_contents() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("broken.labmap");
        fs::write(&path, "0 0\n0\n").expect("Failed to write map");

        assert!(load_file(&path).is_err());
    }

    #[test]
    fn test_load_file_wrong_extension() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("maze.txt");
        fs::write(&path, "0 0\n0 0\n").expect("Failed to write map");

        assert!(load_file(&path).is_err());
    }

    #[test]
    fn test_fetch_files_skips_invalid_and_foreign_files() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let root = dir.path();
        fs::write(root.join("b.labmap"), "0 0\n0 0").expect("Failed to write map");
        fs::write(root.join("a.labmap"), "0").expect("Failed to write map");
        fs::write(root.join("broken.labmap"), "0 x").expect("Failed to write map");
        fs::write(root.join("notes.txt"), "0 0").expect("Failed to write file");
        fs::create_dir_all(root.join("nested.labmap")).expect("Failed to create directory");

        let maps = fetch_files(root).expect("Failed to scan directory");

        let keys: Vec<&str> = maps.iter().map(|map| map.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_fetch_files_empty_directory() {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let maps = fetch_files(dir.path()).expect("Failed to scan directory");

        assert!(maps.is_empty());
    }

    #[test]
    fn test_fetch_files_missing_directory() {
        let dir = TempDir::new().expect("Failed to create temp directory");

        assert!(fetch_files(&dir.path().join("does-not-exist")).is_err());
    }
}
