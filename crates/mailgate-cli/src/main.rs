//! Mailgate CLI - entrypoint for the SendGrid gateway server

mod commands;

use clap::{Parser, Subcommand};
use commands::ServeCommand;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "MAILGATE_LOG_LEVEL", global = true)]
    log_level: String,

    /// Log format: compact, full
    #[arg(
        long,
        default_value = "compact",
        env = "MAILGATE_LOG_FORMAT",
        global = true
    )]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve(ServeCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // If RUST_LOG is set, use it directly; otherwise filter to our crates at
    // the requested level and keep noisy dependencies at warn.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG environment variable: {}", e))?
    } else {
        tracing_subscriber::EnvFilter::new(format!(
            "mailgate_cli={level},\
             mailgate_email={level},\
             mailgate_core={level},\
             tower_http=warn,\
             hyper=warn",
            level = cli.log_level
        ))
    };

    match cli.log_format.as_str() {
        "full" => tracing_subscriber::fmt().with_env_filter(filter).init(),
        _ => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .init(),
    }

    match cli.command {
        Commands::Serve(cmd) => cmd.execute(),
    }
}
