//! Settings for the flatfig demo application.
//!
//! [`Settings`] holds a nested [`LogSettings`] record. Its fields are read
//! from the same flat namespace, which is why they carry a `log_` prefix in
//! their keys.
//!
//! | Key               | Field                     | Default |
//! |-------------------|---------------------------|---------|
//! | `server_port`     | `Settings::server_port`   | `8080`  |
//! | `max_connections` | `Settings::max_connections` | `100` |
//! | `filesize`        | `Settings::filesize`      |         |
//! | `log_file`        | `LogSettings::file`       |         |
//! | `log_level`       | `LogSettings::level`      | `info`  |

use std::fmt;

use flatfig::{ByteSize, Decode, DecodeError, Field, FlatfigError, Record, Visitor};

#[derive(Debug, Default)]
pub struct Settings {
    pub server_port: i64,
    pub max_connections: u32,
    pub filesize: ByteSize,
    pub log: LogSettings,
}

#[derive(Debug, Default)]
pub struct LogSettings {
    pub file: String,
    pub level: LogLevel,
}

/// Verbosity, configured as `info` or `debug` and stored as an integer code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    #[default]
    Info = 0,
    Debug = 1,
}

impl Decode for LogLevel {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = match raw.to_lowercase().as_str() {
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            _ => {
                return Err(DecodeError::new(format!(
                    "unexpected config value '{raw}' for log level"
                )));
            }
        };
        Ok(())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as i32)
    }
}

impl Record for Settings {
    fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
        v.field(
            Field::new("ServerPort").key("server_port").default("8080"),
            &mut self.server_port,
        )?;
        v.field(
            Field::new("MaxConnections")
                .key("max_connections")
                .default("100"),
            &mut self.max_connections,
        )?;
        v.field(Field::new("Filesize").key("filesize"), &mut self.filesize)?;
        v.nested(&mut self.log)
    }
}

impl Record for LogSettings {
    fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
        v.field(Field::new("File").key("log_file"), &mut self.file)?;
        v.field(
            Field::new("Level").key("log_level").default("info"),
            &mut self.level,
        )
    }
}
