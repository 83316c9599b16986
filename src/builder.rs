use std::path::{Path, PathBuf};

use crate::defaults::AppliedDefaults;
use crate::error::FlatfigError;
use crate::file::{self, ConfigSource};
use crate::resolve;
use crate::schema::Record;
use crate::table::KeyValueTable;

/// An ordered list of config sources and the entry point for merging them.
///
/// Sources are applied in the order they were added: a key in a later file
/// overrides the same key in an earlier one.
///
/// ```no_run
/// # use flatfig::{Flatfig, Record, Visitor, Field, FlatfigError};
/// # #[derive(Default)] struct Settings { port: i64 }
/// # impl Record for Settings {
/// #     fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
/// #         v.field(Field::new("port").default("8080"), &mut self.port)
/// #     }
/// # }
/// let (settings, defaults) = Flatfig::new()
///     .add_source("/etc/myapp", "myapp.conf")
///     .add_optional_source("/etc/myapp", "myapp.local.conf")
///     .load::<Settings>()?;
/// # Ok::<(), FlatfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Flatfig {
    sources: Vec<ConfigSource>,
}

impl Flatfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required source. Merging fails if `{path}/{name}` is missing.
    pub fn add_source(self, path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        self.add(ConfigSource::new(path, name))
    }

    /// Append an optional source, silently skipped if `{path}/{name}` is missing.
    pub fn add_optional_source(self, path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        self.add(ConfigSource::optional(path, name))
    }

    /// Append a prepared source.
    pub fn add(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// The sources in merge order.
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Load all sources and fold them into one table, without touching any
    /// record.
    pub fn load_table(&self) -> Result<KeyValueTable, FlatfigError> {
        let tables = file::load_sources(&self.sources)?;
        Ok(resolve::fold_tables(tables))
    }

    /// Load all sources and populate `record`.
    ///
    /// Returns the keys whose declared default ended up in the record. On
    /// error the record may be partially populated.
    pub fn merge_into<R: Record + ?Sized>(
        &self,
        record: &mut R,
    ) -> Result<AppliedDefaults, FlatfigError> {
        let tables = file::load_sources(&self.sources)?;
        resolve::resolve(tables, record)
    }

    /// Like [`merge_into`](Self::merge_into), starting from `R::default()`.
    pub fn load<R: Record + Default>(&self) -> Result<(R, AppliedDefaults), FlatfigError> {
        let mut record = R::default();
        let defaults = self.merge_into(&mut record)?;
        Ok((record, defaults))
    }
}

/// Populate `record` from a single, required config file.
pub fn load_config_into<R: Record + ?Sized>(
    file: impl AsRef<Path>,
    record: &mut R,
) -> Result<AppliedDefaults, FlatfigError> {
    Flatfig::new()
        .add(ConfigSource::from_file(file))
        .merge_into(record)
}
