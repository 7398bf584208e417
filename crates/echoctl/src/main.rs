mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use echoctl_config::FileStore;
use echoctl_core::{ApiBackend, CredentialStore, SessionManager, TransportConfig, keys};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Default regional endpoint; override via `--service-host` or the
/// `serviceHost` store key.
const DEFAULT_SERVICE_HOST: &str = "alexa.amazon.co.uk";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let store = FileStore::open_default();

    match cli.command {
        // Credential commands don't need a session
        Command::Auth(args) => commands::auth::store_credentials(args, &store, &cli.global),
        Command::Logout => commands::auth::logout(&store, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "echoctl", &mut std::io::stdout());
            Ok(())
        }

        // Everything else goes through the session manager
        cmd => {
            let session = build_session(&cli.global, store)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &session, &cli.global).await
        }
    }
}

/// Assemble the session manager from CLI flags and the credential store.
fn build_session(
    global: &cli::GlobalOpts,
    store: FileStore,
) -> Result<commands::CliSession, CliError> {
    let host = global
        .service_host
        .clone()
        .or_else(|| store.get(keys::SERVICE_HOST))
        .unwrap_or_else(|| DEFAULT_SERVICE_HOST.to_owned());

    let base_url: url::Url =
        format!("https://{host}/")
            .parse()
            .map_err(|_| CliError::Validation {
                field: "service-host".into(),
                reason: format!("invalid host: {host}"),
            })?;

    let transport = TransportConfig {
        timeout: std::time::Duration::from_secs(global.timeout),
    };

    Ok(SessionManager::new(ApiBackend::new(base_url, transport), store))
}
