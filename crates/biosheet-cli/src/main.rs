//! BioSheet CLI - Main entry point

use biosheet_cli::{Cli, Commands, Config};
use biosheet_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use clap::Parser;
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle markdown help generation
    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Ensure a command is provided
    if cli.command.is_none() {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    }

    let _ = dotenvy::dotenv();

    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("biosheet-cli")
        .build();

    // Environment variables take precedence over the flag
    let log_config = log_config.clone().with_env_overrides().unwrap_or(log_config);

    // CLI works without logging
    let _ = init_logging(&log_config);

    // Errors are reported but never change the exit status
    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> biosheet_cli::Result<()> {
    let Some(ref command) = cli.command else {
        return Ok(());
    };

    let mut config = Config::from_env()?;
    if let Some(dir) = &cli.output_dir {
        config.set_output_dir(dir.clone());
    }

    match command {
        Commands::Fetch {
            entity_type,
            output_format,
            generate_report,
        } => {
            biosheet_cli::commands::fetch::run(&config, entity_type, output_format, *generate_report)
                .await
        },

        Commands::FetchAll {
            output_format,
            generate_report,
        } => biosheet_cli::commands::fetch_all::run(&config, output_format, *generate_report).await,

        Commands::List => biosheet_cli::commands::list::run(),

        Commands::Interactive => biosheet_cli::commands::interactive::run(&config).await,
    }
}
