//! # flatfig demo application
//!
//! A sample CLI that loads a `key = value` file into a nested settings struct
//! and prints the result together with the default audit.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example flatfig_demo
//! cargo run --example flatfig_demo -- --config demos/flatfig_demo/myconfig.conf --config-if-exists local.conf
//! RUST_LOG=flatfig=debug cargo run --example flatfig_demo -- --json
//! ```
//!
//! Without `--config` the bundled `myconfig.conf` is used.

mod config;

use std::path::Path;

use clap::Parser;

use flatfig::{ConfigArgs, Flatfig};

use config::Settings;

/// flatfig demo: load a config file and show what ended up where.
#[derive(Parser, Debug)]
#[command(name = "flatfig-demo")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print the default audit as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut base = Flatfig::new();
    if cli.config.files.is_empty() {
        let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/flatfig_demo");
        base = base.add_source(sample, "myconfig.conf");
    }
    let flatfig = cli.config.into_flatfig(base);

    let (settings, defaults) = flatfig.load::<Settings>().unwrap_or_else(|e| {
        eprintln!("Failed to load config:\n{e}");
        std::process::exit(2);
    });

    println!("server_port      {}", settings.server_port);
    println!("max_connections  {}", settings.max_connections);
    println!(
        "filesize         {} ({})",
        settings.filesize.bytes(),
        settings.filesize
    );
    println!("log_file         {}", settings.log.file);
    println!("log_level        {}", settings.log.level);
    println!();

    if cli.json {
        match serde_json::to_string_pretty(&defaults) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to render defaults: {e}");
                std::process::exit(1);
            }
        }
    } else if defaults.is_empty() {
        println!("no defaults applied");
    } else {
        println!("defaults applied:");
        for (key, default) in defaults.iter() {
            println!("  {key} = {}", default.value);
        }
    }
}
