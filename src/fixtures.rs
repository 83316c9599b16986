#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use crate::{ByteSize, Decode, DecodeError, Field, FlatfigError, Record, Visitor};

    #[derive(Debug, Default, PartialEq)]
    pub struct StandardConfig {
        pub session_name: String,
        pub file_location: String,
        pub address: String,
        pub port: i64,
        pub size: i32,
        pub ssl: bool,
        pub verbose: bool,
        pub session_timeout: Duration,
        pub internal: String,
    }

    impl Record for StandardConfig {
        fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
            v.field(Field::new("SessionName").key("session_name"), &mut self.session_name)?;
            v.field(
                Field::new("FileLocation")
                    .key("file_location")
                    .default("/dev/null"),
                &mut self.file_location,
            )?;
            v.field(Field::new("Address"), &mut self.address)?;
            v.field(Field::new("Port").key("port").default("2000"), &mut self.port)?;
            v.field(Field::new("Size").default("30"), &mut self.size)?;
            v.field(Field::new("SSL").key("ssl"), &mut self.ssl)?;
            v.field(Field::new("Verbose").key("verbose").default("yes"), &mut self.verbose)?;
            v.field(
                Field::new("SessionTimeout").key("session_timeout"),
                &mut self.session_timeout,
            )?;
            v.field(Field::new("Internal").key("-"), &mut self.internal)
        }
    }

    // -- Nested record without a key prefix -------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct InnerConfig {
        pub server: Server,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Server {
        pub address: String,
        pub port: i32,
    }

    impl Record for InnerConfig {
        fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
            v.nested(&mut self.server)
        }
    }

    impl Record for Server {
        fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
            v.field(Field::new("Address").key("server_address"), &mut self.address)?;
            v.field(Field::new("Port").key("server_port"), &mut self.port)
        }
    }

    // -- Embedded record with a custom decoded type -----------------------------

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

    #[derive(Debug, Default, PartialEq)]
    pub struct Settings {
        pub server_port: i64,
        pub filesize: ByteSize,
        pub log: Log,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Log {
        pub file: String,
        pub level: LogLevel,
        pub format: String,
    }

    impl Record for Settings {
        fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
            v.field(
                Field::new("ServerPort").key("server_port").default("8080"),
                &mut self.server_port,
            )?;
            v.field(Field::new("Filesize").key("filesize"), &mut self.filesize)?;
            v.nested(&mut self.log)
        }
    }

    impl Record for Log {
        fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
            v.field(Field::new("File").key("log_file"), &mut self.file)?;
            v.field(Field::new("Level").key("log_level"), &mut self.level)?;
            v.field(Field::new("Format").key("log_format").default("text"), &mut self.format)
        }
    }

    // -- Schema bug: a default that cannot decode -------------------------------

    #[derive(Debug, Default)]
    pub struct Broken {
        pub retries: u32,
    }

    impl Record for Broken {
        fn visit(&mut self, v: &mut Visitor<'_>) -> Result<(), FlatfigError> {
            v.field(Field::new("retries").default("many"), &mut self.retries)
        }
    }

    #[test]
    fn log_level_decodes_case_insensitively() {
        let mut level = LogLevel::default();
        level.decode("DEBUG").unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert!(level.decode("trace").is_err());
        assert_eq!(level, LogLevel::Debug);
    }
}
