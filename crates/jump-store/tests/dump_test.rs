use chrono::{TimeZone, Utc};
use jump_core::models::{Entry, Options, Weight};
use jump_store::dump::{self, DumpOpts};
use jump_store::WeightStore;

#[test]
fn dump_lists_highest_weight_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = WeightStore::open(dir.path().join("db.json"), Options::default());
    store.adjust_weight("/low", 1.0);
    store.adjust_weight("/high", 9.0);
    store.adjust_weight("/mid", 4.0);

    let output = store.dump(&DumpOpts::default());
    assert_eq!(output.format, "json");
    let order: Vec<&str> = output.weights.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(order, ["/high", "/mid", "/low"]);

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["weights"][0]["path"], "/high");
}

#[test]
fn short_paths_abbreviate_home() {
    let home = jump_core::paths::home_dir().unwrap_or_else(|| "/root".into());
    let inside = home.join("src").to_str().unwrap().to_string();
    let entries = vec![
        Entry::new(inside, Weight::new(2.0)),
        Entry::new("/etc", Weight::new(1.0)),
    ];

    let output = dump::dump(entries, &DumpOpts { short: true });
    if jump_core::paths::home_dir().is_some() {
        assert_eq!(output.weights[0].path, "~/src");
    }
    if home != std::path::Path::new("/") {
        assert_eq!(output.weights[1].path, "/etc");
    }
}

#[test]
fn table_lines_are_aligned() {
    let t = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
    let entries = vec![Entry::new("/a/b", Weight::at(1.5, t))];
    let mut out = Vec::new();
    dump::write_table(&entries, &mut out).unwrap();
    let line = String::from_utf8(out).unwrap();
    assert_eq!(line, "1.500000     2024-03-09 14:05 UTC      /a/b\n");
}
