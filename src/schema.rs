//! Field descriptors: how a struct tells the walker about its fields.
//!
//! A config struct implements [`Record`] by reporting each field, in
//! declaration order, to the [`Visitor`] it is handed:
//!
//! ```
//! use flatfig::{ByteSize, Field, FlatfigError, Record, Visitor};
//!
//! #[derive(Default)]
//! struct Settings {
//!     server_port: i64,
//!     filesize: ByteSize,
//!     scratch: String,
//!     log: Log,
//! }
//!
//! #[derive(Default)]
//! struct Log {
//!     file: String,
//! }
//!
//! impl Record for Settings {
//!     fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
//!         v.field(Field::new("ServerPort").key("server_port").default("8080"), &mut self.server_port)?;
//!         v.field(Field::new("filesize"), &mut self.filesize)?;
//!         v.field(Field::new("scratch").key("-"), &mut self.scratch)?;
//!         v.nested(&mut self.log)
//!     }
//! }
//!
//! impl Record for Log {
//!     fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
//!         v.field(Field::new("File").key("log_file"), &mut self.file)
//!     }
//! }
//! ```
//!
//! Nested records do not introduce a key prefix: `log_file` above is looked up
//! in the same flat namespace as `server_port`.

use crate::error::FlatfigError;
use crate::walk::Visitor;

/// Key used to exclude a field from configuration.
pub const EXCLUDED: &str = "-";

/// A struct whose fields can be populated from a key/value table.
pub trait Record {
    /// Report every field, in declaration order, to `v`.
    ///
    /// Implementations must report the same fields each time they are called,
    /// and must propagate the visitor's errors with `?`.
    fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError>;
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
        (**self).visit(v)
    }
}

/// Declarative metadata for one leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'f> {
    name: &'f str,
    key: Option<&'f str>,
    default: Option<&'f str>,
}

impl<'f> Field<'f> {
    /// A field looked up by its own name unless [`key`](Self::key) says otherwise.
    pub const fn new(name: &'f str) -> Self {
        Field {
            name,
            key: None,
            default: None,
        }
    }

    /// Look the field up under `key` instead of its name. [`EXCLUDED`] (`"-"`)
    /// skips the field entirely.
    pub const fn key(mut self, key: &'f str) -> Self {
        self.key = Some(key);
        self
    }

    /// Raw value used when the table has no usable value for this field.
    ///
    /// An empty string is a declared default like any other: the field is
    /// reset to whatever `""` decodes to and shows up in the audit. Leave
    /// `default` uncalled for a field without one.
    pub const fn default(mut self, raw: &'f str) -> Self {
        self.default = Some(raw);
        self
    }

    pub const fn name(&self) -> &'f str {
        self.name
    }

    pub const fn default_value(&self) -> Option<&'f str> {
        self.default
    }

    /// The key this field is read from, or `None` if it is excluded.
    pub fn resolved_key(&self) -> Option<&'f str> {
        match self.key {
            Some(EXCLUDED) => None,
            Some(key) if !key.is_empty() => Some(key),
            _ => Some(self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_field_uses_name() {
        assert_eq!(Field::new("Address").resolved_key(), Some("Address"));
    }

    #[test]
    fn tag_overrides_name() {
        let f = Field::new("SessionName").key("session_name");
        assert_eq!(f.resolved_key(), Some("session_name"));
    }

    #[test]
    fn empty_tag_falls_back_to_name() {
        assert_eq!(Field::new("Size").key("").resolved_key(), Some("Size"));
    }

    #[test]
    fn dash_excludes_field() {
        assert_eq!(Field::new("Internal").key("-").resolved_key(), None);
    }

    #[test]
    fn empty_default_is_still_declared() {
        let f = Field::new("Motd").default("");
        assert_eq!(f.default_value(), Some(""));
    }

    #[test]
    fn default_is_recorded() {
        let f = Field::new("Port").default("2000");
        assert_eq!(f.default_value(), Some("2000"));
        assert_eq!(f.name(), "Port");
    }
}
