//! End-to-end flow: load, mutate, persist, reload.

use std::sync::Arc;
use std::time::Duration;

use todo_core::prelude::*;
use todo_core::storage::ITEMS_KEY;
use tokio::runtime::Handle;

fn walk_the_dog() -> Vec<TodoItem> {
    vec![TodoItem::new(1, "Walk the dog")]
}

#[tokio::test]
async fn add_toggle_delete_then_reload() {
    let store = Arc::new(MemoryStore::new());
    let persister = spawn_writer(&Handle::current(), store.clone(), Duration::from_millis(10));
    let mut screen = TodoScreen::new(ScreenConfig::default(), persister.clone());

    let loaded = load_initial(&*store, &walk_the_dog(), SeedPolicy::WhenEmpty).await;
    assert_eq!(loaded.source, LoadSource::Seed);
    screen.apply_loaded(loaded);
    assert_eq!(screen.items(), walk_the_dog().as_slice());

    screen.input_mut().push_str("Buy milk");
    assert!(screen.add_item());
    assert_eq!(
        screen.items(),
        &[TodoItem::new(2, "Buy milk"), TodoItem::new(1, "Walk the dog")]
    );

    assert!(screen.toggle_item(1));
    assert!(screen.items()[1].completed);

    assert!(screen.delete_item(2));
    let expected = vec![TodoItem {
        id: 1,
        title: "Walk the dog".to_string(),
        completed: true,
    }];
    assert_eq!(screen.items(), expected.as_slice());

    persister.flush().await;

    // A fresh start sees exactly what was left on screen.
    let reloaded = load_initial(&*store, &default_seed(), SeedPolicy::WhenEmpty).await;
    assert_eq!(reloaded.source, LoadSource::Stored);
    assert_eq!(reloaded.items, expected);
}

#[tokio::test]
async fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = Arc::new(FileStore::new(dir.path()));
        let persister = spawn_writer(&Handle::current(), store.clone(), Duration::from_millis(10));
        let mut screen = TodoScreen::new(ScreenConfig::default(), persister.clone());
        screen.apply_loaded(load_initial(&*store, &[], SeedPolicy::WhenEmpty).await);

        for title in ["one", "two", "three"] {
            screen.input_mut().push_str(title);
            screen.add_item();
        }
        screen.toggle_item(2);
        screen.toggle_color_scheme();
        persister.flush().await;
    }

    let store = FileStore::new(dir.path());
    let loaded = load_initial(&store, &default_seed(), SeedPolicy::WhenEmpty).await;

    let titles: Vec<&str> = loaded.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["three", "two", "one"]);
    assert!(loaded.items[1].completed);
    assert_eq!(loaded.color_scheme, Some(ColorScheme::Light));
    assert!(store.path_for(ITEMS_KEY).exists());
}

#[tokio::test]
async fn deleting_everything_reseeds_unless_configured_not_to() {
    let store = Arc::new(MemoryStore::new());
    let persister = spawn_writer(&Handle::current(), store.clone(), Duration::from_millis(10));
    let mut screen = TodoScreen::new(ScreenConfig::default(), persister.clone());
    screen.apply_loaded(load_initial(&*store, &walk_the_dog(), SeedPolicy::WhenEmpty).await);

    screen.delete_item(1);
    assert!(screen.items().is_empty());
    persister.flush().await;

    let reseeded = load_initial(&*store, &walk_the_dog(), SeedPolicy::WhenEmpty).await;
    assert_eq!(reseeded.items, walk_the_dog());

    let kept_empty = load_initial(&*store, &walk_the_dog(), SeedPolicy::FirstRunOnly).await;
    assert!(kept_empty.items.is_empty());
}
