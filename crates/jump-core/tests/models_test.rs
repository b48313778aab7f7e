use std::path::Path;

use chrono::{Duration, TimeZone, Utc};
use jump_core::models::{Entry, Weight};
use jump_core::paths;

fn entry(path: &str, weight: f64, secs: i64) -> Entry {
    let t = Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();
    Entry::new(path, Weight::at(weight, t))
}

#[test]
fn descending_breaks_ties_newest_first() {
    let mut entries = vec![
        entry("/old", 2.0, 0),
        entry("/low", 1.0, 50),
        entry("/new", 2.0, 100),
    ];
    entries.sort_by(Entry::cmp_descending);
    let order: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(order, ["/new", "/old", "/low"]);
}

#[test]
fn ascending_breaks_ties_oldest_first() {
    let mut entries = vec![
        entry("/new", 1.0, 100),
        entry("/high", 3.0, 0),
        entry("/old", 1.0, 0),
    ];
    entries.sort_by(Entry::cmp_ascending);
    let order: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(order, ["/old", "/new", "/high"]);
}

#[test]
fn full_ties_fall_back_to_path() {
    let mut a = vec![entry("/b", 1.0, 0), entry("/a", 1.0, 0)];
    let mut b = vec![entry("/a", 1.0, 0), entry("/b", 1.0, 0)];
    a.sort_by(Entry::cmp_descending);
    b.sort_by(Entry::cmp_descending);
    assert_eq!(a, b);
}

#[test]
fn seconds_since_update_never_negative() {
    let now = Utc::now();
    let future = Weight::at(1.0, now + Duration::seconds(30));
    assert_eq!(future.seconds_since_update(now), 0.0);
    let past = Weight::at(1.0, now - Duration::seconds(90));
    assert_eq!(past.seconds_since_update(now), 90.0);
}

#[test]
fn entry_serializes_time_field() {
    let json = serde_json::to_value(entry("/a", 1.5, 0)).unwrap();
    assert_eq!(json["path"], "/a");
    assert_eq!(json["weight"], 1.5);
    assert!(json.get("time").is_some());
}

#[test]
fn shorten_path_only_matches_whole_components() {
    let home = Path::new("/home/bob");
    assert_eq!(paths::shorten_path(home, "/home/bob/src"), "~/src");
    assert_eq!(paths::shorten_path(home, "/home/bob"), "~");
    assert_eq!(paths::shorten_path(home, "/home/bobby"), "/home/bobby");
    assert_eq!(paths::shorten_path(home, "/etc"), "/etc");
}
