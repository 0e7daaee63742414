//! Loading the list at startup and writing it back after mutations.
//!
//! # Loading
//!
//! [`load_initial`] runs once. It reads the stored list and falls back to the
//! seed when nothing usable is stored. A failed read leaves the list empty;
//! the failure is logged and never reaches the screen.
//!
//! # Saving
//!
//! [`spawn_writer`] starts a background task that owns all writes. Mutations
//! hand it the full serialized value through a [`Persister`]; values are
//! coalesced per key and written once the debounce window passes without a
//! newer value, or at the latest [`MAX_WRITE_DELAY`] after the first pending
//! save. Write failures are logged and dropped: the in-memory list
//! stays as it is and the next successful write brings storage up to date.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;

use crate::model::{TodoItem, decode_items, encode_items, sort_newest_first};
use crate::storage::{COLOR_SCHEME_KEY, ITEMS_KEY, KeyValueStore};
use crate::theme::ColorScheme;

/// When the seed list replaces stored data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Seed whenever the stored list is absent or empty.
    #[default]
    WhenEmpty,
    /// Seed only when nothing was ever stored; an empty stored list stays empty.
    FirstRunOnly,
}

impl SeedPolicy {
    pub fn from_reseed_flag(reseed_when_empty: bool) -> Self {
        if reseed_when_empty {
            SeedPolicy::WhenEmpty
        } else {
            SeedPolicy::FirstRunOnly
        }
    }
}

/// Where the loaded list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Stored,
    Seed,
    /// Storage could not be read; the list starts empty.
    Failed,
}

/// Result of the startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    /// Items, newest first.
    pub items: Vec<TodoItem>,
    pub source: LoadSource,
    /// Stored color scheme, if one was saved earlier.
    pub color_scheme: Option<ColorScheme>,
}

/// Read the list and color scheme from `store`.
pub async fn load_initial<S: KeyValueStore>(
    store: &S,
    seed: &[TodoItem],
    policy: SeedPolicy,
) -> LoadedState {
    let (items, source) = load_items(store, seed, policy).await;
    let color_scheme = load_color_scheme(store).await;

    tracing::info!(count = items.len(), ?source, "loaded to-do list");

    LoadedState {
        items,
        source,
        color_scheme,
    }
}

async fn load_items<S: KeyValueStore>(
    store: &S,
    seed: &[TodoItem],
    policy: SeedPolicy,
) -> (Vec<TodoItem>, LoadSource) {
    let stored = match store.get(ITEMS_KEY).await {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!(key = ITEMS_KEY, error = %e, "failed to read stored items");
            return (Vec::new(), LoadSource::Failed);
        }
    };

    let (mut items, source) = match stored.as_deref().map(decode_items) {
        Some(Ok(items)) if !items.is_empty() => (items, LoadSource::Stored),
        Some(Ok(items)) if policy == SeedPolicy::FirstRunOnly => (items, LoadSource::Stored),
        Some(Ok(_)) | None => (seed.to_vec(), LoadSource::Seed),
        Some(Err(e)) => {
            tracing::warn!(key = ITEMS_KEY, error = %e, "stored items are malformed, using seed");
            (seed.to_vec(), LoadSource::Seed)
        }
    };

    sort_newest_first(&mut items);

    let before = items.len();
    items.dedup_by_key(|item| item.id);
    if items.len() != before {
        tracing::warn!(dropped = before - items.len(), "dropped items with duplicate ids");
    }

    (items, source)
}

async fn load_color_scheme<S: KeyValueStore>(store: &S) -> Option<ColorScheme> {
    match store.get(COLOR_SCHEME_KEY).await {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(scheme) => Some(scheme),
            Err(e) => {
                tracing::warn!(key = COLOR_SCHEME_KEY, error = %e, "ignoring stored color scheme");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::error!(key = COLOR_SCHEME_KEY, error = %e, "failed to read color scheme");
            None
        }
    }
}

/// Receives state that should survive a restart.
///
/// Implementations must not block: they are called from the UI thread.
pub trait SaveSink {
    fn save_items(&self, items: &[TodoItem]);
    fn save_color_scheme(&self, scheme: ColorScheme);
}

/// Longest a value waits while saves keep arriving inside the debounce window.
pub const MAX_WRITE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug)]
enum Command {
    Write { key: String, value: String },
    Flush(oneshot::Sender<()>),
}

/// Handle to the background writer started by [`spawn_writer`].
///
/// Each save restarts the debounce window, but a pending value is written
/// no later than `max(debounce, MAX_WRITE_DELAY)` after it was first queued,
/// so a steady stream of edits still reaches storage.
///
/// Cloning is cheap. When the last handle is dropped the writer stores any
/// pending values and exits.
#[derive(Debug, Clone)]
pub struct Persister {
    tx: mpsc::UnboundedSender<Command>,
}

impl Persister {
    /// Queue `value` for `key`, replacing any value still waiting to be written.
    pub fn save(&self, key: impl Into<String>, value: String) {
        let key = key.into();
        if self.tx.send(Command::Write { key, value }).is_err() {
            tracing::warn!("writer has stopped, dropping save");
        }
    }

    /// Write everything pending now. Resolves once the writes have been attempted.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(Command::Flush(ack)).is_err() {
            return;
        }
        let _ = done.await;
    }
}

impl SaveSink for Persister {
    fn save_items(&self, items: &[TodoItem]) {
        match encode_items(items) {
            Ok(json) => self.save(ITEMS_KEY, json),
            Err(e) => tracing::error!(error = %e, "failed to encode items"),
        }
    }

    fn save_color_scheme(&self, scheme: ColorScheme) {
        match serde_json::to_string(&scheme) {
            Ok(json) => self.save(COLOR_SCHEME_KEY, json),
            Err(e) => tracing::error!(error = %e, "failed to encode color scheme"),
        }
    }
}

/// Start the writer task on `handle`.
pub fn spawn_writer<S: KeyValueStore>(
    handle: &Handle,
    store: Arc<S>,
    debounce: Duration,
) -> Persister {
    let (tx, rx) = mpsc::unbounded_channel();
    handle.spawn(run_writer(store, rx, debounce));
    Persister { tx }
}

async fn run_writer<S: KeyValueStore>(
    store: Arc<S>,
    mut rx: mpsc::UnboundedReceiver<Command>,
    debounce: Duration,
) {
    let max_delay = debounce.max(MAX_WRITE_DELAY);
    let mut pending: BTreeMap<String, String> = BTreeMap::new();
    // Latest time the oldest pending value may wait; `Some` iff `pending` is non-empty.
    let mut deadline: Option<Instant> = None;

    loop {
        let command = match deadline {
            None => match rx.recv().await {
                Some(command) => command,
                None => break,
            },
            Some(deadline_at) => {
                let wake = (Instant::now() + debounce).min(deadline_at);
                match tokio::time::timeout_at(wake, rx.recv()).await {
                    Ok(Some(command)) => command,
                    Ok(None) => break,
                    Err(_) => {
                        write_pending(&*store, &mut pending).await;
                        deadline = None;
                        continue;
                    }
                }
            }
        };

        match command {
            Command::Write { key, value } => {
                pending.insert(key, value);
                deadline.get_or_insert_with(|| Instant::now() + max_delay);
            }
            Command::Flush(ack) => {
                write_pending(&*store, &mut pending).await;
                deadline = None;
                let _ = ack.send(());
            }
        }
    }

    write_pending(&*store, &mut pending).await;
    tracing::debug!("writer stopped");
}

async fn write_pending<S: KeyValueStore>(store: &S, pending: &mut BTreeMap<String, String>) {
    for (key, value) in std::mem::take(pending) {
        match store.set(&key, value).await {
            Ok(()) => tracing::debug!(key = %key, "persisted"),
            Err(e) => tracing::error!(key = %key, error = %e, "failed to persist value"),
        }
    }
}
