use anyhow::Result;
use clap::{Parser, Subcommand};
use mockauth::auth::TokenService;
use mockauth::{Config, identity};

/// mockauth - Mock authentication API
#[derive(Parser)]
#[command(name = "mockauth")]
#[command(about = "Mock authentication API issuing signed tokens for fake users", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a freshly issued token
    Token {
        /// Identity to embed, a random mock user when omitted
        #[arg(long)]
        username: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mockauth::observability::init_observability(
        "mockauth",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => mockauth::server::serve(config, host, port).await,
        Commands::Token { username } => token_command(config, username),
    }
}

fn token_command(config: Config, username: Option<String>) -> Result<()> {
    let (username, token) = issue_cli_token(&config, username)?;

    tracing::info!(%username, "Issued token");
    println!("{token}");

    Ok(())
}

/// Issue a token the same way `/login` does, for the given or a random identity.
fn issue_cli_token(config: &Config, username: Option<String>) -> Result<(String, String)> {
    let tokens = TokenService::new(&config.jwt);
    let username = username.unwrap_or_else(|| identity::pick_random().to_string());
    let token = tokens.issue(&username)?;

    Ok((username, token))
}
