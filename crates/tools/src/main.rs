use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use deploy_tools::{logging, DeployConfig, FileSecretsStore, SECRETS_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deploy-config")]
#[command(about = "Resolve contract deployment networks and compiler settings")]
struct Cli {
    /// Secrets file holding the mnemonic and gateway API key
    #[arg(short, long, global = true, default_value = SECRETS_FILE)]
    secrets: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of the resolved configuration
    Show,
    /// Print the configuration with secrets redacted
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Check that the configuration loads
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn main() -> Result<()> {
    // Load .env file if it exists (non-fatal)
    let _ = dotenvy::dotenv();
    logging::init();

    let cli = Cli::parse();
    let store = FileSecretsStore::new(&cli.secrets);
    let config = DeployConfig::load_from(&store).with_context(|| {
        format!(
            "failed to load deployment configuration from {}",
            cli.secrets.display()
        )
    })?;

    match cli.command {
        Commands::Show => config.print_summary(),
        Commands::Export { format } => {
            let rendered = match format {
                Format::Json => config.to_json()?,
                Format::Toml => config.to_toml()?,
            };
            println!("{}", rendered);
        }
        Commands::Check => {
            println!(
                "Configuration OK: {} network(s), solc {}",
                config.networks.len(),
                config.compilers.solc.version
            );
        }
    }

    Ok(())
}
