mod app;
mod config;
mod event;
mod help;
mod util;

use app::Emitter;
use clap::Parser;
use config::{Config, EmitterOptions, Invocation};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PROGRESSTEST_LOG";

fn log_filter() -> EnvFilter {
    // stderr carries the progress output, so diagnostics stay off unless asked for
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return EnvFilter::new("off");
    };
    EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("ignoring invalid {LOG_ENV}={directives:?}: {err}; logging at warn");
        EnvFilter::new("warn")
    })
}

fn exit_with_help() -> color_eyre::Result<()> {
    help::render(&mut std::io::stdout().lock())?;
    std::process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let invocation = Invocation::from_args(std::env::args_os());
    if invocation.help {
        return exit_with_help();
    }

    let config = Config::parse_from(invocation.args);
    if config.help {
        return exit_with_help();
    }

    let mut emitter = Emitter::new(EmitterOptions::from(&config), tokio::io::stderr());
    emitter.run().await?;

    Ok(())
}
