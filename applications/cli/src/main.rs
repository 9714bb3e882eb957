/// Taskdeck - manage a personal task list from the terminal
use clap::Parser;
use std::io;
use taskdeck_cli::{
    cli::{Cli, Command},
    config::CliConfig,
    views::{AssumeYes, Confirm, PromptConfirm},
    App,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let mut confirm: Box<dyn Confirm> = match &cli.command {
        Command::Delete { yes: true, .. } => Box::new(AssumeYes),
        _ => Box::new(PromptConfirm::stdio()),
    };

    let mut app = App::connect(&config).await?;
    let mut stdout = io::stdout().lock();
    app.run(cli.command, &mut stdout, confirm.as_mut()).await
}
