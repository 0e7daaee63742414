use std::sync::Arc;
use std::sync::mpsc::{Receiver, channel};

use eframe::egui;
use tokio::runtime::Runtime;
use todo_core::config::AppConfig;
use todo_core::model::TodoItem;
use todo_core::persist::{LoadedState, Persister, load_initial, spawn_writer};
use todo_core::route::Route;
use todo_core::screen::TodoScreen;
use todo_core::storage::{FileStore, KeyValueStore, MemoryStore};
use todo_core::theme::ColorScheme;

use crate::components::{header, todo_detail, todo_input, todo_list};
use crate::style;

pub struct TodoApp {
    screen: TodoScreen<Persister>,
    load_rx: Receiver<LoadedState>,
    /// Scheme currently installed in the egui visuals.
    applied_scheme: Option<ColorScheme>,
    runtime: Runtime,
}

impl TodoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        config: &AppConfig,
        seed: Vec<TodoItem>,
    ) -> Self {
        match config.resolved_data_dir() {
            Some(dir) => {
                tracing::info!(data_dir = %dir.display(), "using file storage");
                Self::with_store(cc, runtime, config, seed, Arc::new(FileStore::new(dir)))
            }
            None => {
                tracing::warn!("no data directory available, changes will not survive a restart");
                Self::with_store(cc, runtime, config, seed, Arc::new(MemoryStore::new()))
            }
        }
    }

    fn with_store<S: KeyValueStore>(
        cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        config: &AppConfig,
        seed: Vec<TodoItem>,
        store: Arc<S>,
    ) -> Self {
        let persister = spawn_writer(runtime.handle(), store.clone(), config.save_debounce());
        let screen = TodoScreen::new(config.screen_config(), persister);

        let (tx, rx) = channel();
        let ctx = cc.egui_ctx.clone();
        let policy = config.seed_policy();
        runtime.spawn(async move {
            let loaded = load_initial(&*store, &seed, policy).await;
            let _ = tx.send(loaded);
            ctx.request_repaint();
        });

        Self {
            screen,
            load_rx: rx,
            applied_scheme: None,
            runtime,
        }
    }

    fn process_load(&mut self) {
        while let Ok(loaded) = self.load_rx.try_recv() {
            self.screen.apply_loaded(loaded);
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let scheme = self.screen.theme().scheme();
        if self.applied_scheme != Some(scheme) {
            ctx.set_visuals(style::visuals(self.screen.theme()));
            self.applied_scheme = Some(scheme);
        }
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_load();
        self.apply_theme(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            header(ui, &mut self.screen);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.screen.route() {
            Route::List => {
                todo_input(ui, &mut self.screen);
                ui.add_space(10.0);
                todo_list(ui, &mut self.screen);
            }
            Route::Detail { .. } => todo_detail(ui, &mut self.screen),
        });
    }
}

impl Drop for TodoApp {
    fn drop(&mut self) {
        self.runtime.block_on(self.screen.sink().flush());
        tracing::debug!("flushed pending writes");
    }
}
