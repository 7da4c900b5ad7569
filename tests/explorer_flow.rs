//! End-to-end flows through the public API: favorites on disk, the spawned
//! fetch worker and the event handler, with a scripted launch source.

use async_trait::async_trait;
use spacex_explorer::domain::{Launch, Rocket};
use spacex_explorer::source::LaunchSource;
use spacex_explorer::storage::{FavoritesStore, JsonFileStore, KeyValueStore, MemoryStore, FAVORITES_KEY};
use spacex_explorer::ui::{render, render_plain};
use spacex_explorer::worker::{FetchWorker, WorkerHandle};
use spacex_explorer::{handle_event, initialize, open_store, Action, AppState, Config, Event, ExplorerError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

#[derive(Default)]
struct ScriptedSource {
    offline: AtomicBool,
}

fn launch(id: &str, name: &str, date: &str, success: Option<bool>) -> Launch {
    let mut launch = Launch::new(id, name, date);
    launch.success = success;
    launch.rocket = "5e9d0d95eda69973a809d1ec".to_string();
    launch
}

#[async_trait]
impl LaunchSource for ScriptedSource {
    async fn fetch_launches(&self) -> Result<Vec<Launch>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ExplorerError::Source("HTTP 503 from /launches".to_string()));
        }
        Ok(vec![
            launch("s6", "Starlink-6", "2021-03-04T08:24:00.000Z", Some(true)),
            launch("s5", "Starlink-5", "2022-01-06T21:49:00.000Z", Some(true)),
            launch("amos", "Amos-6", "2016-09-01T13:07:00.000Z", Some(false)),
        ])
    }

    async fn fetch_rocket(&self, id: &str) -> Result<Rocket> {
        Ok(Rocket {
            id: id.to_string(),
            name: "Falcon 9".to_string(),
            rocket_type: "rocket".to_string(),
            company: "SpaceX".to_string(),
            success_rate_pct: 98.0,
            cost_per_launch: 50_000_000,
            ..Rocket::default()
        })
    }
}

/// Handles `event`, forwards worker requests and feeds responses back until
/// the exchange settles.
async fn drive<S: KeyValueStore>(state: &mut AppState<S>, worker: &mut WorkerHandle, event: Event) {
    let mut in_flight = 0;
    let mut next = Some(event);
    while let Some(event) = next.take() {
        let (_, actions) = handle_event(state, &event).expect("handle event");
        for action in actions {
            if let Action::PostToWorker(message) = action {
                worker.post(message).expect("post to worker");
                in_flight += 1;
            }
        }
        if in_flight > 0 {
            let response = worker.recv().await.expect("worker response");
            in_flight -= 1;
            next = Some(Event::WorkerResponse(response));
        }
    }
}

fn names<S: KeyValueStore>(state: &AppState<S>) -> Vec<&str> {
    state.filtered_launches.iter().map(|l| l.name.as_str()).collect()
}

#[tokio::test]
async fn browse_session_filters_and_opens_details() {
    let mut worker = FetchWorker::new(ScriptedSource::default()).spawn();
    let mut state = initialize(&Config::default(), MemoryStore::default());

    drive(&mut state, &mut worker, Event::Load).await;
    assert_eq!(names(&state), vec!["Starlink-5", "Starlink-6", "Amos-6"]);

    drive(&mut state, &mut worker, Event::ToggleSuccessfulOnly).await;
    assert_eq!(state.summary(), "Showing 2 of 3 launches (successful only)");

    let t0 = Instant::now();
    drive(&mut state, &mut worker, Event::SearchInput { query: "link-6".into(), at: t0 }).await;
    drive(&mut state, &mut worker, Event::Tick(t0 + Duration::from_millis(300))).await;
    assert_eq!(names(&state), vec!["Starlink-6"]);

    drive(&mut state, &mut worker, Event::OpenDetails).await;
    assert!(state.rockets.contains_key("5e9d0d95eda69973a809d1ec"));

    let frame = render(&state, 30, 100);
    assert!(frame.contains("Starlink-6"));
    assert!(frame.contains("$50,000,000"));
    assert!(frame.contains("98%"));

    worker.shutdown();
}

#[tokio::test]
async fn failed_load_then_refresh_recovers() {
    let source = ScriptedSource::default();
    source.offline.store(true, Ordering::SeqCst);
    let mut worker = FetchWorker::new(source).spawn();
    let mut state = initialize(&Config::default(), MemoryStore::default());

    drive(&mut state, &mut worker, Event::Load).await;
    assert!(state.filtered_launches.is_empty());
    let out = render_plain(&state, 80);
    assert!(out.contains("Failed to load SpaceX launches."));
    assert!(out.contains("HTTP 503"));

    worker.shutdown();

    let mut worker = FetchWorker::new(ScriptedSource::default()).spawn();
    drive(&mut state, &mut worker, Event::Refresh).await;
    assert_eq!(state.filtered_launches.len(), 3);
    worker.shutdown();
}

#[test]
fn favorites_survive_restart_through_the_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };

    {
        let mut state = initialize(&config, open_store(&config, false).expect("open store"));
        state.favorites.toggle("s5").expect("toggle s5");
        state.favorites.toggle("amos").expect("toggle amos");
        state.favorites.toggle("s5").expect("untoggle s5");
    }

    let state = initialize(&config, open_store(&config, false).expect("reopen store"));
    assert_eq!(state.favorites.ids(), vec!["amos"]);

    let raw = JsonFileStore::new(dir.path().join("favorites.json"))
        .expect("open file")
        .read(FAVORITES_KEY)
        .expect("read");
    assert_eq!(raw.as_deref(), Some(r#"["amos"]"#));
}

#[test]
fn ephemeral_store_leaves_no_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        data_dir: Some(dir.path().join("data")),
        ..Config::default()
    };

    let mut favorites = FavoritesStore::load(open_store(&config, true).expect("memory store"));
    favorites.toggle("s6").expect("toggle");
    assert_eq!(favorites.count(), 1);
    assert!(!dir.path().join("data").exists());
}

#[test]
fn binary_favorites_file_does_not_block_startup() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let path = spacex_explorer::infrastructure::favorites_file(dir.path());
    std::fs::write(&path, [0xff, 0xfe, b'[', b']']).expect("seed binary file");

    let state = initialize(&config, open_store(&config, false).expect("file store"));
    assert_eq!(state.favorites.count(), 0);
    assert!(path.with_extension("corrupt").exists());
}
