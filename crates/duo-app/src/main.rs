use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use duo_config::Config;
use duo_core::{ErrorResult, LanguageSettings};
use tokio::signal;

mod cli;
mod controller;
mod display;
mod events;
mod logging;
mod service;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let cli = Cli::parse();

    // Nothing is processed without a valid configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", ErrorResult::configuration(&e));
            eprintln!(
                "Please create a .env file with your GEMINI_API_KEY or pass --config <file>."
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    let state = Arc::new(AppState::new(config));
    let mut settings = state.language_settings()?;

    if let Some(target) = &cli.target {
        if let Err(e) = settings.set_target_language(target) {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    }

    match cli.command {
        Some(command) => {
            let ok = cli::run_command(&state, &settings, command, cli.json).await?;
            Ok(if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            run(state, settings).await;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Interactive session until the user quits or Ctrl+C
async fn run(state: Arc<AppState>, settings: LanguageSettings) {
    let pair = settings.pair();
    tracing::info!("Starting Duo Helper - {} ↔ {}", pair.source, pair.target);

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(settings);

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("session task exited"),
                Ok(Err(e)) => tracing::error!("session task failed: {e}"),
                Err(e) => tracing::error!("session task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::debug!("task ended with: {e}");
        }
    }
}
