//! QuickNote process entry point.
//!
//! # Responsibility
//! - Merge environment config with CLI flags and start logging.
//! - Construct the single process-wide note store and serve it over HTTP.
//! - Keep `ping`/`version` probes for quick linkage checks.

use clap::{Args, Parser, Subcommand};
use log::error;
use quicknote_core::{init_logging, NoteService, NoteStore, ServerConfig};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "quicknote", version, about = "In-memory note-taking REST service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Print a core linkage probe.
    Ping,
    /// Print the core crate version.
    Version,
}

/// Flags override `QUICKNOTE_*` environment values.
#[derive(Debug, Default, Args)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    /// Path prefix for note routes, e.g. `/api/v1`.
    #[arg(long)]
    api_prefix: Option<String>,
    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; stderr when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(prefix) = self.api_prefix {
            config.api_prefix = prefix;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = Some(dir);
        }
    }
}

#[actix_web::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => serve(args).await,
        Commands::Ping => {
            println!("quicknote_core ping={}", quicknote_core::ping());
            Ok(())
        }
        Commands::Version => {
            println!("quicknote_core version={}", quicknote_core::core_version());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error reason={err}");
            eprintln!("quicknote: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(args: ServeArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args)?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let service = NoteService::new(NoteStore::new());
    quicknote_api::run_server(&config, service).await?;
    Ok(())
}

fn load_config(args: ServeArgs) -> Result<ServerConfig, Box<dyn Error>> {
    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, ServeArgs};
    use clap::Parser;
    use quicknote_core::ServerConfig;
    use std::path::PathBuf;

    #[test]
    fn serve_flags_override_config() {
        let cli = Cli::try_parse_from([
            "quicknote",
            "serve",
            "--port",
            "9000",
            "--api-prefix",
            "/notes-api",
            "--log-dir",
            "/tmp/quicknote-logs",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve subcommand");
        };

        let mut config = ServerConfig::default();
        args.apply(&mut config);
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_prefix, "/notes-api");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/quicknote-logs")));
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn empty_flags_keep_config() {
        let mut config = ServerConfig::default();
        ServeArgs::default().apply(&mut config);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn invalid_port_flag_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["quicknote", "serve", "--port", "http"]).is_err());
    }
}
