//! Structural walk over a [`Record`] and default resolution.
//!
//! Each record level is visited twice:
//!
//! 1. **Assign**: every field with a default is registered as pending, then
//!    the table value (if any) is decoded into it. Success clears the pending
//!    entry. A failure is swallowed when the field has a default and is fatal
//!    otherwise. Nested records are walked completely (both passes) at the
//!    point they are reported.
//! 2. **Defaults**: every field of this level that is still pending gets its
//!    default decoded. A default that does not decode is always fatal.

use crate::decode::Decode;
use crate::defaults::AppliedDefaults;
use crate::error::FlatfigError;
use crate::schema::{Field, Record};
use crate::table::KeyValueTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Assign,
    Defaults,
}

/// Receives the fields of a [`Record`] and populates them from the table.
pub struct Visitor<'a> {
    table: &'a KeyValueTable,
    defaults: &'a mut AppliedDefaults,
    pass: Pass,
}

impl Visitor<'_> {
    /// Populate one leaf field.
    pub fn field<T: Decode + ?Sized>(
        &mut self,
        field: Field<'_>,
        slot: &mut T,
    ) -> Result<(), FlatfigError> {
        let Some(key) = field.resolved_key() else {
            return Ok(());
        };
        match self.pass {
            Pass::Assign => self.assign(key, field.default_value(), slot),
            Pass::Defaults => self.apply_default(key, field.default_value(), slot),
        }
    }

    /// Walk a nested record against the same flat table.
    pub fn nested<R: Record + ?Sized>(&mut self, record: &mut R) -> Result<(), FlatfigError> {
        match self.pass {
            Pass::Assign => walk(self.table, record, self.defaults),
            Pass::Defaults => Ok(()),
        }
    }

    fn assign<T: Decode + ?Sized>(
        &mut self,
        key: &str,
        default: Option<&str>,
        slot: &mut T,
    ) -> Result<(), FlatfigError> {
        if let Some(default) = default {
            self.defaults.register(key, default);
        }

        let Some(value) = self.table.get(key) else {
            return Ok(());
        };

        match slot.decode(value) {
            Ok(()) => {
                self.defaults.resolve(key);
                Ok(())
            }
            Err(e) if default.is_some() => {
                log::warn!("invalid value [{value}] for key [{key}] ({e}), using default");
                Ok(())
            }
            Err(source) => Err(FlatfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                source,
            }),
        }
    }

    fn apply_default<T: Decode + ?Sized>(
        &mut self,
        key: &str,
        default: Option<&str>,
        slot: &mut T,
    ) -> Result<(), FlatfigError> {
        let Some(default) = default else {
            return Ok(());
        };
        if !self.defaults.contains_key(key) {
            return Ok(());
        }

        slot.decode(default)
            .map_err(|source| FlatfigError::InvalidDefault {
                key: key.to_string(),
                value: default.to_string(),
                source,
            })?;
        log::debug!("applied default [{default}] for key [{key}]");
        Ok(())
    }
}

/// Populate `record` from `table`, recording applied defaults in `defaults`.
pub(crate) fn walk<R: Record + ?Sized>(
    table: &KeyValueTable,
    record: &mut R,
    defaults: &mut AppliedDefaults,
) -> Result<(), FlatfigError> {
    let mut visitor = Visitor {
        table,
        defaults,
        pass: Pass::Assign,
    };
    record.visit(&mut visitor)?;

    visitor.pass = Pass::Defaults;
    record.visit(&mut visitor)
}
