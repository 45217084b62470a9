use clap::{Parser, Subcommand};
use quizdash_client::client::ApiClient;
use quizdash_client::credentials::CredentialStore;
use quizdash_client::loader::{LoadOutcome, ProfileLoader};
use quizdash_client::page::TerminalPage;
use tracing_subscriber::{EnvFilter, prelude::*};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "quizdash", version, about = "Dashboard client for the quizdash backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and store the bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Load and render the dashboard (the default)
    Dashboard,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_filter(
                            EnvFilter::try_from_default_env()
                                .unwrap_or_else(|_| EnvFilter::new("info")),
                        ),
                )
                .init();

            let cli = Cli::parse();

            let base_url = match std::env::var("QUIZDASH_API_URL") {
                Ok(url) => {
                    tracing::info!("Using backend URL from QUIZDASH_API_URL: {}", url);
                    url
                }
                Err(_) => DEFAULT_API_URL.to_string(),
            };

            let store = CredentialStore::from_env()?;
            let client = ApiClient::new(base_url);

            match cli.command.unwrap_or(Command::Dashboard) {
                Command::Login { email, password } => {
                    let token = client.login(&email, &password).await?;
                    store.store(&token)?;
                    println!("Logged in as {email}.");
                    Ok(())
                }
                Command::Dashboard => {
                    let loader = ProfileLoader::new(store, client);
                    let mut page = TerminalPage;

                    match loader.run(&mut page).await {
                        LoadOutcome::Failed => std::process::exit(1),
                        LoadOutcome::Rendered | LoadOutcome::RedirectedToLogin => Ok(()),
                    }
                }
            }
        })
}
