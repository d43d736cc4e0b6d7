//! `magma-config`: inspect the playout platform's configuration.
//!
//! ```sh
//! magma-config                      # list every resolved key=value
//! magma-config get redis_server_port
//! magma-config gen -o sample.conf
//! magma-config --file /srv/magma/playout.conf path
//! ```
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` to see
//! ignored keys and keys the file does not set.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use magma_config::{ConfigArgs, ConfigLocation, ConfigProvider, TracingSink};

/// Inspect the Magma playout configuration.
#[derive(Parser, Debug)]
#[command(name = "magma-config", version)]
struct Cli {
    /// Use this config file instead of ~/.magma-playout.conf.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Also log the resolved configuration at info level.
    #[arg(long, global = true)]
    print: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = ConfigProvider::builder();
    if let Some(path) = cli.file {
        builder = builder.location(ConfigLocation::Path(path));
    }
    let provider = builder.build();

    let action = cli.config.into_action();
    match magma_config::handle(&provider, &action, &TracingSink) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("Config error:\n{e}");
            std::process::exit(1);
        }
    }

    if cli.print {
        provider.init(&TracingSink);
        provider.print_config(&TracingSink);
    }
}
