use chrono::{Duration, Utc};
use jump_core::models::{Entry, Options, Weight};
use jump_store::WeightStore;
use proptest::prelude::*;

fn always_dir(_: &str) -> bool {
    true
}

fn make_dirs(root: &std::path::Path, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let dir = root.join(name);
            std::fs::create_dir_all(&dir).unwrap();
            dir.to_str().unwrap().to_string()
        })
        .collect()
}

#[test]
fn keeps_the_heaviest_entries() {
    let dir = tempfile::tempdir().unwrap();
    let paths = make_dirs(dir.path(), &["one", "two", "three"]);
    let mut store = WeightStore::open(dir.path().join("db.json"), Options::default());
    store.adjust_weight(&paths[0], 1.0);
    store.adjust_weight(&paths[1], 2.0);
    store.adjust_weight(&paths[2], 3.0);

    let report = store.prune(2, &[]);
    assert_eq!(store.len(), 2);
    assert!(store.get(&paths[0]).is_none());
    assert_eq!(store.get(&paths[1]).unwrap().value, 2.0);
    assert_eq!(store.get(&paths[2]).unwrap().value, 3.0);
    assert_eq!(report.overflow, vec![paths[0].clone()]);
}

#[test]
fn removes_missing_and_non_directory_paths_regardless_of_limit() {
    let dir = tempfile::tempdir().unwrap();
    let paths = make_dirs(dir.path(), &["live"]);
    let file = dir.path().join("file.txt");
    std::fs::write(&file, "x").unwrap();
    let file = file.to_str().unwrap().to_string();
    let missing = dir.path().join("missing").to_str().unwrap().to_string();

    let mut store = WeightStore::open(dir.path().join("db.json"), Options::default());
    store.adjust_weight(&paths[0], 1.0);
    store.adjust_weight(&file, 1.0);
    store.adjust_weight(&missing, 1.0);

    let report = store.prune(100, &[]);
    assert_eq!(store.len(), 1);
    assert!(store.get(&paths[0]).is_some());
    assert_eq!(report.invalid.len(), 2);
    assert!(report.overflow.is_empty());
}

#[test]
fn zero_limit_only_runs_validity_pass() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = WeightStore::open(dir.path().join("db.json"), Options::default())
        .with_dir_check(always_dir);
    for i in 0..10 {
        store.adjust_weight(&format!("/d/{i}"), 1.0 + i as f64);
    }
    let report = store.prune(0, &[]);
    assert_eq!(report.total_removed(), 0);
    assert_eq!(store.len(), 10);
}

#[test]
fn exclude_patterns_remove_matching_paths() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = WeightStore::open(dir.path().join("db.json"), Options::default())
        .with_dir_check(always_dir);
    store.adjust_weight("/home/me/src/app", 1.0);
    store.adjust_weight("/home/me/src/app/node_modules/x", 1.0);
    store.adjust_weight("/home/me/.git/hooks", 1.0);

    let report = store.prune(0, &["node_modules".to_string(), "/.git".to_string(), String::new()]);
    assert_eq!(report.excluded.len(), 2);
    assert_eq!(store.len(), 1);
    assert!(store.get("/home/me/src/app").is_some());
}

#[test]
fn equal_weights_drop_oldest_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = WeightStore::open(dir.path().join("db.json"), Options::default())
        .with_dir_check(always_dir);
    let now = Utc::now();
    store.replace(vec![
        Entry::new("/newer", Weight::at(1.0, now)),
        Entry::new("/older", Weight::at(1.0, now - Duration::hours(1))),
        Entry::new("/heavy", Weight::at(9.0, now - Duration::days(9))),
    ]);

    let report = store.prune(2, &[]);
    assert_eq!(report.overflow, vec!["/older".to_string()]);
    assert!(store.get("/newer").is_some());
    assert!(store.get("/heavy").is_some());
}

#[test]
fn dirty_only_when_something_was_removed() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = WeightStore::open(dir.path().join("db.json"), Options::default())
        .with_dir_check(always_dir);
    store.adjust_weight("/a", 1.0);
    store.save().unwrap();
    assert!(!store.dirty());

    store.prune(10, &[]);
    assert!(!store.dirty());

    store.adjust_weight("/b", 1.0);
    store.save().unwrap();
    store.prune(1, &[]);
    assert!(store.dirty());
    assert_eq!(store.len(), 1);
}

proptest! {
    #[test]
    fn never_exceeds_limit(
        weights in proptest::collection::vec(0.1f64..100.0, 0..60),
        max in 1usize..30,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WeightStore::open(dir.path().join("db.json"), Options::default())
            .with_dir_check(always_dir);
        for (i, w) in weights.iter().enumerate() {
            store.adjust_weight(&format!("/p/{i}"), *w);
        }
        let before = store.len();
        let report = store.prune(max, &[]);
        prop_assert!(store.len() <= max);
        prop_assert_eq!(store.len(), before.min(max));
        prop_assert_eq!(report.overflow.len(), before.saturating_sub(max));

        // Everything kept weighs at least as much as everything dropped.
        let kept_min = store.entries().iter().map(|e| e.weight).fold(f64::INFINITY, f64::min);
        for (i, w) in weights.iter().enumerate() {
            if report.overflow.contains(&format!("/p/{i}")) {
                prop_assert!(*w <= kept_min);
            }
        }
    }
}

struct WarnCounter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        if *event.metadata().level() <= tracing::Level::WARN {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }
    }
}

#[test]
fn pruning_many_stale_paths_does_not_warn_per_path() {
    use tracing_subscriber::layer::SubscriberExt;

    let dir = tempfile::tempdir().unwrap();
    let mut store = WeightStore::open(dir.path().join("db.json"), Options::default());
    for i in 0..50 {
        store.adjust_weight(&dir.path().join(format!("gone-{i}")).to_string_lossy(), 1.0);
    }

    let warnings = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
    let report = tracing::subscriber::with_default(subscriber, || store.prune(0, &[]));

    assert_eq!(report.invalid.len(), 50);
    assert!(store.is_empty());
    assert_eq!(warnings.load(std::sync::atomic::Ordering::SeqCst), 0);
}
