//! Native to-do list app.
//!
//! Storage I/O runs on a small tokio runtime; the egui update loop owns all
//! state and never waits on it.

mod app;
mod components;
mod error;
mod style;

use eframe::egui;
use todo_core::config::AppConfig;
use todo_core::seed::resolve_seed;
use tracing_subscriber::EnvFilter;

use crate::app::TodoApp;
use crate::error::AppError;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::default_config_path() {
        Some(path) => AppConfig::load_or_default(&path),
        None => AppConfig::default(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("todo-io")
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    let seed = resolve_seed(config.seed_path.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Todo List")
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "todo-list",
        options,
        Box::new(move |cc| Ok(Box::new(TodoApp::new(cc, runtime, &config, seed)))),
    )?;

    Ok(())
}
