//! Pizza Order CLI - compose, save and load pizza orders from the terminal

use anyhow::Result;
use clap::Parser;
use pizza_core::{RunArgs, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pizza-order")]
#[command(about = "Interactive console for composing and saving pizza orders")]
#[command(version)]
pub struct Args {
    /// Catalog config file (created with the default menu if missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

impl From<Args> for RunArgs {
    fn from(args: Args) -> Self {
        RunArgs {
            config_path: args.config,
        }
    }
}

/// Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more,
/// so they don't interleave with the prompts.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging();

    let result = pizza_core::run(args.into());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
