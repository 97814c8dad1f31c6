use blinder_core::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::pattern::FilePattern;

/// Suffix replacing the extension of every output file
pub const BLINDED_SUFFIX: &str = ".blinded.xml";

/// Directory to scan and the pattern selecting files in it
#[derive(Debug, Clone)]
pub struct InputSelection {
    pub directory: PathBuf,
    pub pattern: FilePattern,
}

/// Resolve the input location into a directory and a file pattern.
///
/// A directory uses `pattern` as given; a single file selects exactly
/// itself within its parent directory.
pub fn resolve_input(input: &Path, pattern: &str) -> Result<InputSelection> {
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let absolute = std::path::absolute(input).map_err(|e| Error::file_io(input, e))?;

    if absolute.is_dir() {
        Ok(InputSelection {
            directory: absolute,
            pattern: FilePattern::new(pattern)?,
        })
    } else if absolute.is_file() {
        let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) else {
            return Err(Error::Internal(absolute));
        };
        let Some(name) = name.to_str() else {
            return Err(Error::file_io(
                &absolute,
                io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
            ));
        };

        Ok(InputSelection {
            directory: parent.to_path_buf(),
            pattern: FilePattern::literal(name)?,
        })
    } else {
        Err(Error::Internal(absolute))
    }
}

/// Absolute form of the output location, without touching the file system
pub fn output_directory(output: &Path) -> Result<PathBuf> {
    std::path::absolute(output).map_err(|e| Error::DirectoryCreation {
        path: output.to_path_buf(),
        source: e,
    })
}

/// Absolute output directory, created (one level only) if missing
pub fn ensure_output_directory(output: &Path) -> Result<PathBuf> {
    let path = output_directory(output)?;

    if !path.exists() {
        debug!(path = %path.display(), "Creating output directory");
        fs::create_dir(&path).map_err(|source| Error::DirectoryCreation {
            path: path.clone(),
            source,
        })?;
    } else if !path.is_dir() {
        return Err(Error::DirectoryCreation {
            source: io::Error::new(io::ErrorKind::AlreadyExists, "exists and is not a directory"),
            path,
        });
    }

    Ok(path)
}

/// Whether two locations name the same directory, following `..` and symlinks.
///
/// A path that cannot be canonicalized (such as an output directory that
/// does not exist yet) is compared by its absolute form.
pub fn same_directory(a: &Path, b: &Path) -> bool {
    let resolve = |p: &Path| {
        fs::canonicalize(p)
            .or_else(|_| std::path::absolute(p))
            .unwrap_or_else(|_| p.to_path_buf())
    };
    resolve(a) == resolve(b)
}

/// Names of the files directly in `directory` matching `pattern`, sorted
pub fn enumerate_matches(directory: &Path, pattern: &FilePattern) -> Result<Vec<String>> {
    let mut names = Vec::new();

    let entries = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
            Err(e) => return Err(Error::file_io(directory, e.into())),
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "Skipping file with non UTF-8 name");
            continue;
        };

        if pattern.matches(name) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// `run.xml` -> `run.blinded.xml`; only the last extension is dropped
pub fn blinded_file_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    };
    format!("{}{}", stem, BLINDED_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<beast/>").unwrap();
    }

    #[test]
    fn test_resolve_directory() {
        let temp = TempDir::new().unwrap();

        let selection = resolve_input(temp.path(), "*.xml").unwrap();

        assert!(selection.directory.is_absolute());
        assert_eq!(selection.pattern.as_str(), "*.xml");
    }

    #[test]
    fn test_resolve_single_file() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "one.xml");
        touch(temp.path(), "two.xml");

        let selection = resolve_input(&temp.path().join("one.xml"), "*.xml").unwrap();
        let names = enumerate_matches(&selection.directory, &selection.pattern).unwrap();

        assert_eq!(selection.directory, std::path::absolute(temp.path()).unwrap());
        assert_eq!(names, vec!["one.xml".to_string()]);
    }

    #[test]
    fn test_resolve_missing_input() {
        let err = resolve_input(Path::new("/nonexistent/path"), "*.xml").unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn test_enumerate_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.xml");
        touch(temp.path(), "a.xml");
        touch(temp.path(), "c.txt");
        fs::create_dir(temp.path().join("d.xml")).unwrap();

        let pattern = FilePattern::new("*.xml").unwrap();
        let names = enumerate_matches(temp.path(), &pattern).unwrap();

        assert_eq!(names, vec!["a.xml".to_string(), "b.xml".to_string()]);
    }

    #[test]
    fn test_enumerate_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        touch(&temp.path().join("nested"), "deep.xml");
        touch(temp.path(), "top.xml");

        let pattern = FilePattern::new("*.xml").unwrap();
        let names = enumerate_matches(temp.path(), &pattern).unwrap();

        assert_eq!(names, vec!["top.xml".to_string()]);
    }

    #[test]
    fn test_ensure_output_creates_one_level() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");

        let path = ensure_output_directory(&out).unwrap();

        assert!(path.is_dir());
        assert!(path.is_absolute());
        // Existing directory is fine
        ensure_output_directory(&out).unwrap();
    }

    #[test]
    fn test_ensure_output_missing_parent() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("missing").join("out");

        let err = ensure_output_directory(&out).unwrap_err();

        assert!(matches!(err, Error::DirectoryCreation { .. }));
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn test_ensure_output_is_a_file() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "out");

        let err = ensure_output_directory(&temp.path().join("out")).unwrap_err();
        assert!(matches!(err, Error::DirectoryCreation { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join(OsStr::from_bytes(b"run\xff.xml"));
        fs::write(&path, "<beast/>").unwrap();

        let err = resolve_input(&path, "*.xml").unwrap_err();

        assert!(matches!(err, Error::FileIo { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_same_directory_through_parent_alias() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        fs::create_dir(&input).unwrap();

        assert!(same_directory(&input, &input.join("..").join("in")));
        assert!(!same_directory(&input, temp.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_same_directory_through_symlink() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        fs::create_dir(&input).unwrap();
        std::os::unix::fs::symlink(&input, temp.path().join("link")).unwrap();

        assert!(same_directory(&input, &temp.path().join("link")));
    }

    #[test]
    fn test_same_directory_missing_output() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("out");

        assert!(same_directory(&missing, &missing));
        assert!(!same_directory(temp.path(), &missing));
    }

    #[test]
    fn test_blinded_file_name() {
        assert_eq!(blinded_file_name("sample.xml"), "sample.blinded.xml");
        assert_eq!(blinded_file_name("run.v2.beast"), "run.v2.blinded.xml");
        assert_eq!(blinded_file_name("noext"), "noext.blinded.xml");
    }
}
