//! Flat `key = value` configuration files merged into typed, nested Rust
//! structs. Describe your fields, point at your files, and go.
//!
//! ```ignore
//! let (settings, defaults) = Flatfig::new()
//!     .add_source("/etc/myapp", "myapp.conf")
//!     .add_optional_source("/etc/myapp", "myapp.local.conf")
//!     .load::<Settings>()?;
//! ```
//!
//! That call reads both files, lets the second override the first key by
//! key, decodes each value into the matching field of `Settings`, fills in
//! declared defaults, and reports which fields ended up with their default.
//!
//! # The file format
//!
//! ```text
//! # comments start with '#'
//! server_port = 8080
//! filesize    = 10MB
//! log_file    = /var/log/my.log
//! greeting    = "kept verbatim, quotes included"
//! ```
//!
//! One pair per line, split on the first `=`. Keys and values are trimmed;
//! everything else in the value is kept as is. Lines without `=` are skipped.
//! There is no quoting, escaping, sectioning or line continuation: the key
//! namespace is flat. See the `parse` module for the exact rules.
//!
//! # Describing a record
//!
//! A struct takes part in a merge by implementing [`Record`]: it reports each
//! field to a [`Visitor`] together with a [`Field`] descriptor.
//!
//! - **`Field::new(name)`**: the field is read from the key `name`.
//! - **`.key("server_port")`**: read it from another key instead. The key
//!   `"-"` excludes the field.
//! - **`.default("8080")`**: raw value used when the files do not provide a
//!   usable one.
//! - **`v.nested(&mut self.log)`**: walk a nested struct. Its fields live in
//!   the same flat namespace as the outer ones, so pick distinct keys.
//!
//! Each leaf field's type must implement [`Decode`]. The crate covers
//! strings, paths, integers, floats, booleans (`yes`/`no` included),
//! [`Duration`](std::time::Duration), `Option<T>` and [`ByteSize`]. Implement
//! `Decode` for your own types (enums, newtypes, ...) to parse them yourself.
//!
//! # Defaults and the audit
//!
//! A field ends a merge holding one of:
//!
//! 1. the value from the highest-priority file that sets its key,
//! 2. its declared default, if no file sets the key **or the file value does
//!    not decode**,
//! 3. whatever it held before, if it has neither a file value nor a default.
//!
//! Case 2 means a malformed value for a defaulted field is not an error: the
//! default silently replaces it (a `warn` is logged). The returned
//! [`AppliedDefaults`] lists every key that ended up with its default, so
//! callers can report it. A malformed value for a field *without* a default
//! aborts the merge, and so does a declared default that does not decode.
//!
//! # Sources
//!
//! Sources are applied in the order they are added, later ones winning.
//! [`add_source`](Flatfig::add_source) files must exist;
//! [`add_optional_source`](Flatfig::add_optional_source) files are skipped
//! when missing, which suits per-host or per-environment overlays.
//!
//! # Clap adapter
//!
//! With the `clap` feature (default), [`ConfigArgs`] adds `--config FILE` and
//! `--config-if-exists FILE` flags to your parser and converts them into
//! sources.
//!
//! # Error handling
//!
//! All fallible operations return [`FlatfigError`]. Decode failures name the
//! key and the offending raw value.
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never
//! installs a logger: `debug` for loaded/skipped files and applied defaults,
//! `warn` for file values replaced by their default.

pub mod error;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod decode;
mod defaults;
mod file;
pub(crate) mod merge;
mod parse;
mod resolve;
mod schema;
mod size;
mod table;
mod walk;

#[cfg(test)]
mod fixtures;

pub use builder::{Flatfig, load_config_into};
#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use decode::Decode;
pub use defaults::{AppliedDefault, AppliedDefaults};
pub use error::{DecodeError, FlatfigError};
pub use file::ConfigSource;
pub use parse::parse;
pub use resolve::merge_table_into;
pub use schema::{EXCLUDED, Field, Record};
pub use size::ByteSize;
pub use table::KeyValueTable;
pub use walk::Visitor;
