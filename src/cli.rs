//! Clap adapter for flatfig.
//!
//! Compiled only with the `clap` Cargo feature (on by default). It provides
//! [`ConfigArgs`], a clap derive struct that lets users of your binary point it
//! at config files:
//!
//! ```text
//! myapp --config /etc/myapp/myapp.conf --config-if-exists ./myapp.local.conf
//! ```
//!
//! The only bridge to the core is [`ConfigArgs::into_sources()`] (or
//! [`into_flatfig()`](ConfigArgs::into_flatfig)), which turns the parsed flags
//! into [`ConfigSource`]s. Apps that use another argument parser can build
//! sources directly instead.

use std::path::PathBuf;

use clap::Args;

use crate::builder::Flatfig;
use crate::file::ConfigSource;

/// Clap-derived config file flags.
///
/// Flatten this into your app's parser:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     config: ConfigArgs,
/// }
/// ```
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Config file to load. Repeatable; later files override earlier ones.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Config file to load if it exists. Applied after all `--config` files.
    #[arg(long = "config-if-exists", value_name = "FILE")]
    pub optional_files: Vec<PathBuf>,
}

impl ConfigArgs {
    /// Required files first, then optional ones, each in command-line order.
    pub fn into_sources(self) -> Vec<ConfigSource> {
        let required = self.files.into_iter().map(ConfigSource::from_file);
        let optional = self
            .optional_files
            .into_iter()
            .map(|f| ConfigSource::from_file(f).required(false));
        required.chain(optional).collect()
    }

    /// Append the parsed sources to `base`, after anything it already has.
    pub fn into_flatfig(self, base: Flatfig) -> Flatfig {
        self.into_sources().into_iter().fold(base, Flatfig::add)
    }
}
