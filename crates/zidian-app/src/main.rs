use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use zidian_core::SearchForm;

mod cli;
mod controller;
mod events;
mod io;
mod logging;
mod render;
mod state;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::AppController;
use self::logging::init_logging;
use self::render::Renderer;
use self::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    };

    init_logging(&config.log);

    // Only interactive terminal sessions get a prompt
    let prompt = cli.query.is_none() && atty::is(atty::Stream::Stdin);
    let renderer = Renderer::new(config.ui.clone(), cli.json, cli.thumbnail_dir.clone())
        .with_prompt(prompt);
    let state = Arc::new(AppState::new(&config, renderer));

    let code = match cli.query {
        Some(query) => run_once(state, query).await,
        None => run_interactive(state).await,
    };

    // A pending stdin read would otherwise hold the runtime open
    std::process::exit(code);
}

/// Single lookup from the command line
async fn run_once(state: Arc<AppState>, query: String) -> i32 {
    let mut form = SearchForm::new(state.service.clone());
    form.set_input(query);

    if let Err(e) = form.submit().await {
        state.renderer.print_validation(e);
        return 2;
    }

    let result = state.service.current();
    state.renderer.print(&result);

    if result.is_error() { 1 } else { 0 }
}

/// One lookup per stdin line until EOF or Ctrl+C
async fn run_interactive(state: Arc<AppState>) -> i32 {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(tokio::io::stdin());

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        _ = controller.stopped() => {}
    }

    let mut code = 0;
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!("Task failed: {e:#}");
                code = 1;
            }
            Err(e) => {
                tracing::error!("Task panicked: {e}");
                code = 1;
            }
        }
    }

    code
}
