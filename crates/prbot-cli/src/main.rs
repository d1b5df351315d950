mod cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prbot_core::config::{Config, DEFAULT_API_BASE, DEFAULT_IGNORE_LABEL};

#[derive(Parser)]
#[command(
    name = "prbot",
    about = "Pull-request bot — prefixes story links on open, reviews descriptions on edit",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook listener
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, env = "PORT", default_value = "5000")]
        port: u16,

        /// GitHub username used for basic auth
        #[arg(long, env = "GITHUB_USERNAME")]
        username: String,

        /// GitHub token used for basic auth
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Default repository owner when the payload names no repository
        #[arg(long, env = "GITHUB_OWNER")]
        owner: String,

        /// Default repository name when the payload names no repository
        #[arg(long, env = "GITHUB_REPO")]
        repo: String,

        /// Label that disables all description checks for a pull request
        #[arg(long, env = "GITHUB_IGNORE_LABEL", default_value = DEFAULT_IGNORE_LABEL)]
        ignore_label: String,

        /// GitHub REST API base URL (override for GitHub Enterprise)
        #[arg(long, env = "GITHUB_API_BASE", default_value = DEFAULT_API_BASE)]
        api_base: String,
    },

    /// Check a description file against the rules without talking to GitHub
    Check {
        /// Path to the description file, or '-' for stdin
        file: PathBuf,

        /// Rule name to skip (repeatable)
        #[arg(long = "skip")]
        skip: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve {
            port,
            username,
            token,
            owner,
            repo,
            ignore_label,
            api_base,
        } => {
            let config = Config::new(username, token, owner, repo)
                .with_ignore_label(ignore_label)
                .with_api_base(api_base);
            cmd::serve::run(config, port)
        }
        Commands::Check { file, skip } => cmd::check::run(&file, &skip),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
