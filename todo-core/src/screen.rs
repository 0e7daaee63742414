//! The to-do screen: input buffer, item list, theme and route.
//!
//! All mutations go through [`TodoScreen`]. Each one returns whether it
//! changed anything, and only changes are handed to the [`SaveSink`].

use crate::model::{MAX_TITLE_LEN, TodoItem, next_id, normalize_title};
use crate::persist::{LoadedState, SaveSink};
use crate::route::Route;
use crate::theme::{ColorScheme, ThemeState};

/// Lifecycle of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting for the startup load.
    Loading,
    Ready,
}

/// Values the screen is constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    pub color_scheme: ColorScheme,
    pub max_title_len: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            max_title_len: MAX_TITLE_LEN,
        }
    }
}

pub struct TodoScreen<P> {
    input: String,
    items: Vec<TodoItem>,
    phase: Phase,
    theme: ThemeState,
    /// Set when the user picks a scheme before the stored one has loaded.
    theme_touched: bool,
    route: Route,
    max_title_len: usize,
    sink: P,
}

impl<P: SaveSink> TodoScreen<P> {
    pub fn new(config: ScreenConfig, sink: P) -> Self {
        Self {
            input: String::new(),
            items: Vec::new(),
            phase: Phase::Loading,
            theme: ThemeState::new(config.color_scheme),
            theme_touched: false,
            route: Route::List,
            max_title_len: config.max_title_len.max(1),
            sink,
        }
    }

    /// Install the result of the startup load.
    ///
    /// Only the first call has any effect. Nothing is written back. A scheme
    /// chosen while loading wins over the stored one, since it is the one
    /// already queued for saving.
    pub fn apply_loaded(&mut self, loaded: LoadedState) -> bool {
        if self.phase != Phase::Loading {
            tracing::warn!("ignoring second load result");
            return false;
        }

        self.items = loaded.items;
        match loaded.color_scheme {
            Some(scheme) if !self.theme_touched => self.theme.set(scheme),
            _ => {}
        }
        self.phase = Phase::Ready;
        true
    }

    /// Add the input text as a new item at the top of the list.
    ///
    /// Blank input is ignored and left in place.
    pub fn add_item(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        let Some(title) = normalize_title(&self.input, self.max_title_len) else {
            return false;
        };

        let Some(id) = next_id(&self.items) else {
            tracing::warn!("no ids left, ignoring new item");
            return false;
        };

        let item = TodoItem::new(id, title);
        tracing::debug!(id = item.id, "added item");
        self.items.insert(0, item);
        self.input.clear();
        self.sink.save_items(&self.items);
        true
    }

    /// Flip the completed flag of item `id`.
    pub fn toggle_item(&mut self, id: u64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        item.completed = !item.completed;
        tracing::debug!(id, completed = item.completed, "toggled item");
        self.sink.save_items(&self.items);
        true
    }

    /// Remove item `id`.
    pub fn delete_item(&mut self, id: u64) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };

        self.items.remove(index);
        tracing::debug!(id, "deleted item");
        if self.route == (Route::Detail { id }) {
            self.route = Route::List;
        }
        self.sink.save_items(&self.items);
        true
    }

    /// Switch between light and dark.
    pub fn toggle_color_scheme(&mut self) -> ColorScheme {
        let scheme = self.theme.toggle();
        self.theme_touched = true;
        self.sink.save_color_scheme(scheme);
        scheme
    }

    /// Show the detail page for item `id`.
    pub fn open_item(&mut self, id: u64) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.route = Route::Detail { id };
        tracing::debug!(path = %self.route, "navigated");
        true
    }

    /// Return to the list.
    pub fn go_back(&mut self) {
        self.route = Route::List;
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text field buffer, edited in place by the UI.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn max_title_len(&self) -> usize {
        self.max_title_len
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Item shown by the detail route, if it still exists.
    pub fn selected_item(&self) -> Option<&TodoItem> {
        match self.route {
            Route::List => None,
            Route::Detail { id } => self.items.iter().find(|item| item.id == id),
        }
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }
}
