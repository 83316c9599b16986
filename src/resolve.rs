//! Core resolution pipeline: fold loaded tables and populate a record.
//!
//! Operates on pre-loaded tables with no I/O, so the whole pipeline is
//! testable with synthetic input. Steps:
//!
//! 1. Fold the tables in order (later overrides earlier)
//! 2. Walk the record against the folded table
//! 3. Apply pending defaults level by level and return the audit

use std::path::PathBuf;

use crate::defaults::AppliedDefaults;
use crate::error::FlatfigError;
use crate::merge::overlay;
use crate::schema::Record;
use crate::table::KeyValueTable;
use crate::walk;

/// Fold tables in precedence order: first = lowest priority, last = highest.
pub fn fold_tables(tables: Vec<(PathBuf, KeyValueTable)>) -> KeyValueTable {
    tables
        .into_iter()
        .fold(KeyValueTable::new(), |merged, (path, table)| {
            for (key, _) in table.iter().filter(|(k, _)| merged.contains_key(k)) {
                log::debug!("key [{key}] overridden by {}", path.display());
            }
            overlay(merged, table)
        })
}

/// Populate `record` from an already loaded table.
///
/// Returns the keys whose declared default ended up in the record.
pub fn merge_table_into<R: Record + ?Sized>(
    table: &KeyValueTable,
    record: &mut R,
) -> Result<AppliedDefaults, FlatfigError> {
    let mut defaults = AppliedDefaults::default();
    walk::walk(table, record, &mut defaults)?;
    Ok(defaults)
}

/// Fold `tables` and populate `record` from the result.
pub fn resolve<R: Record + ?Sized>(
    tables: Vec<(PathBuf, KeyValueTable)>,
    record: &mut R,
) -> Result<AppliedDefaults, FlatfigError> {
    let merged = fold_tables(tables);
    merge_table_into(&merged, record)
}
