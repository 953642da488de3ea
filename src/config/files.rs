// ABOUTME: Locating configuration blobs on disk.
// ABOUTME: Resolves operator-supplied names and lists candidates for interactive choice.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolve a blob argument: an existing path wins, then `config_dir/arg`.
pub fn resolve_config_path(arg: &str, config_dir: &Path) -> Result<PathBuf> {
    let direct = PathBuf::from(arg);
    if direct.is_file() {
        return Ok(direct);
    }

    let in_dir = config_dir.join(arg);
    if in_dir.is_file() {
        return Ok(in_dir);
    }

    Err(Error::ConfigFileNotFound(arg.to_string()))
}

/// Sorted names of the `*.json` files in `dir`.
pub fn list_config_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".json") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolves_direct_path_first() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("live.json");
        fs::write(&file, "{}").unwrap();

        let resolved = resolve_config_path(file.to_str().unwrap(), Path::new("/nonexistent")).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn falls_back_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("live.json"), "{}").unwrap();

        let resolved = resolve_config_path("live.json", dir.path()).unwrap();
        assert_eq!(resolved, dir.path().join("live.json"));
    }

    #[test]
    fn missing_file_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_config_path("nope.json", dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigFileNotFound(ref name) if name == "nope.json"));
    }

    #[test]
    fn lists_only_json_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub.json")).unwrap();

        assert_eq!(list_config_files(dir.path()).unwrap(), vec!["a.json", "b.json"]);
    }
}
