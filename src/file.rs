//! Config sources and loading them from disk.
//!
//! A [`ConfigSource`] names one file as a directory plus a file name. Sources
//! are loaded in the order given; each file is opened, parsed, and closed
//! before the next one is touched.
//!
//! A missing file is skipped when the source is optional and is an error
//! ([`FlatfigError::NotFound`]) when it is required. Any other I/O problem
//! is always an error.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::FlatfigError;
use crate::parse;
use crate::table::KeyValueTable;

/// One file contributing key/value pairs to a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    path: PathBuf,
    name: String,
    required: bool,
}

impl ConfigSource {
    /// A required source: `{path}/{name}` must exist.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        ConfigSource {
            path: path.into(),
            name: name.into(),
            required: true,
        }
    }

    /// An optional source: skipped without error if `{path}/{name}` is absent.
    pub fn optional(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        ConfigSource {
            required: false,
            ..Self::new(path, name)
        }
    }

    /// A required source given as a single file path.
    pub fn from_file(file: impl AsRef<Path>) -> Self {
        let file = file.as_ref();
        let dir = file.parent().unwrap_or_else(|| Path::new(""));
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(dir, name)
    }

    /// Same source with `required` replaced.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The full path of the file: `{path}/{name}`.
    pub fn file_path(&self) -> PathBuf {
        self.path.join(&self.name)
    }
}

/// Open and parse one source.
///
/// Returns `Ok(None)` for a missing optional source.
pub fn load_source(source: &ConfigSource) -> Result<Option<KeyValueTable>, FlatfigError> {
    let path = source.file_path();

    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if source.required {
                return Err(FlatfigError::NotFound { path });
            }
            log::debug!("skipping missing optional config {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(FlatfigError::IoError { path, source: e }),
    };

    let table = parse::parse(BufReader::new(file)).map_err(|e| FlatfigError::IoError {
        path: path.clone(),
        source: e,
    })?;
    log::debug!("read {} keys from {}", table.len(), path.display());
    Ok(Some(table))
}

/// Load every source in order, skipping missing optional ones.
///
/// The result keeps the input order (first = lowest priority) and pairs each
/// table with the file it came from.
pub fn load_sources(
    sources: &[ConfigSource],
) -> Result<Vec<(PathBuf, KeyValueTable)>, FlatfigError> {
    let mut results = Vec::new();
    for source in sources {
        if let Some(table) = load_source(source)? {
            results.push((source.file_path(), table));
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_path_joins_dir_and_name() {
        let s = ConfigSource::new("/etc/myapp", "app.conf");
        assert_eq!(s.file_path(), PathBuf::from("/etc/myapp/app.conf"));
        assert!(s.is_required());
    }

    #[test]
    fn from_file_splits_path() {
        let s = ConfigSource::from_file("/etc/myapp/app.conf");
        assert_eq!(s.path(), Path::new("/etc/myapp"));
        assert_eq!(s.name(), "app.conf");
        assert_eq!(s.file_path(), PathBuf::from("/etc/myapp/app.conf"));
    }

    #[test]
    fn from_file_without_directory() {
        let s = ConfigSource::from_file("app.conf");
        assert_eq!(s.file_path(), PathBuf::from("app.conf"));
    }

    #[test]
    fn optional_flag() {
        assert!(!ConfigSource::optional(".", "a.conf").is_required());
        assert!(ConfigSource::optional(".", "a.conf").required(true).is_required());
    }

    #[test]
    fn load_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.conf"), "port = 3000\n").unwrap();
        let table = load_source(&ConfigSource::new(dir.path(), "app.conf"))
            .unwrap()
            .unwrap();
        assert_eq!(table.get("port"), Some("3000"));
    }

    #[test]
    fn missing_required_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_source(&ConfigSource::new(dir.path(), "nope.conf")).unwrap_err();
        match err {
            FlatfigError::NotFound { path } => assert_eq!(path, dir.path().join("nope.conf")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_optional_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let loaded = load_source(&ConfigSource::optional(dir.path(), "nope.conf")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_sources_keeps_order_and_skips_optional() {
        let dir1 = TempDir::new().unwrap();
        let dir2 = TempDir::new().unwrap();
        fs::write(dir1.path().join("app.conf"), "host = a\n").unwrap();
        fs::write(dir2.path().join("app.conf"), "port = 1000\n").unwrap();

        let sources = vec![
            ConfigSource::new(dir1.path(), "app.conf"),
            ConfigSource::optional(dir1.path(), "app.local.conf"),
            ConfigSource::new(dir2.path(), "app.conf"),
        ];
        let tables = load_sources(&sources).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].0, dir1.path().join("app.conf"));
        assert_eq!(tables[0].1.get("host"), Some("a"));
        assert_eq!(tables[1].1.get("port"), Some("1000"));
    }

    #[test]
    fn directory_instead_of_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("app.conf")).unwrap();
        let result = load_source(&ConfigSource::optional(dir.path(), "app.conf"));
        assert!(matches!(result, Err(FlatfigError::IoError { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_returns_io_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("app.conf");
        fs::write(&file_path, "port = 1\n").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o000)).unwrap();

        let result = load_source(&ConfigSource::new(dir.path(), "app.conf"));
        // Running as root bypasses permission bits.
        if fs::read(&file_path).is_err() {
            assert!(matches!(result, Err(FlatfigError::IoError { .. })));
        }

        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o644)).unwrap();
    }
}
