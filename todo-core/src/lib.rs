//! todo-core: state and persistence for a single-screen to-do list.
//!
//! The crate owns everything except drawing pixels:
//!
//! - [`model`]: the `TodoItem` record and the list helpers (ids, titles, ordering)
//! - [`screen`]: the screen state machine with the add / toggle / delete operations
//! - [`storage`]: the key-value store seam plus file and in-memory adapters
//! - [`persist`]: loading the list at startup and the debounced background writer
//! - [`theme`], [`route`], [`seed`], [`config`]: the values the screen is built from
//!
//! # Example
//!
//! ```ignore
//! use todo_core::prelude::*;
//!
//! let store = Arc::new(MemoryStore::new());
//! let writer = spawn_writer(&tokio::runtime::Handle::current(), store.clone(), Duration::from_millis(300));
//! let mut screen = TodoScreen::new(ScreenConfig::default(), writer);
//!
//! let loaded = load_initial(&*store, &default_seed(), SeedPolicy::WhenEmpty).await;
//! screen.apply_loaded(loaded);
//!
//! screen.input_mut().push_str("Buy milk");
//! screen.add_item();
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod persist;
pub mod route;
pub mod screen;
pub mod seed;
pub mod storage;
pub mod theme;

pub use error::{Error, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::error::{Error, Result};
    pub use crate::model::TodoItem;
    pub use crate::persist::{
        LoadSource, LoadedState, Persister, SaveSink, SeedPolicy, load_initial, spawn_writer,
    };
    pub use crate::route::Route;
    pub use crate::screen::{ScreenConfig, TodoScreen};
    pub use crate::seed::default_seed;
    pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};
    pub use crate::theme::{ColorScheme, Rgb, Theme, ThemeState};
}
