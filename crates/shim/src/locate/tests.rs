use super::*;
use crate::paths;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SUFFIX: &[&str] = &["bin", "runtime", "runtime-exe"];

fn text(p: &Path) -> String {
    p.to_str().unwrap().to_string()
}

fn touch(p: &Path) {
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, b"").unwrap();
}

#[test]
fn fixed_path_found_when_file_exists() {
    let dir = tempdir().unwrap();
    let base = text(dir.path());
    touch(&dir.path().join("bin/runtime/runtime-exe"));
    let got = FixedPath::new(SUFFIX).locate(&base, "app").unwrap();
    assert_eq!(got, paths::join(&base, SUFFIX));
}

#[test]
fn fixed_path_reports_the_probed_path() {
    let dir = tempdir().unwrap();
    let base = text(dir.path());
    let err = FixedPath::new(SUFFIX).locate(&base, "app").unwrap_err();
    assert_eq!(err.searched, vec![paths::join(&base, SUFFIX)]);
}

#[test]
fn version_pattern_rules() {
    let p = PatternSearch::new("python-", '.', &["python.exe"]);
    assert!(p.matches("python-3.10"));
    assert!(p.matches("python-2.7"));
    assert!(p.matches("python-3.1-embed-amd64"));
    assert!(!p.matches("notpython"));
    assert!(!p.matches("python-3"));
    assert!(!p.matches("python-3."));
    assert!(!p.matches("python-3_1"));
    assert!(!p.matches("python-x.1"));
    assert!(!p.matches("Python-3.1"));
}

#[test]
fn pattern_search_accepts_versioned_sibling() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    for name in ["python-3.10", "python-2.7", "notpython", "launcher"] {
        fs::create_dir(root.join(name)).unwrap();
    }
    let base = text(&root.join("launcher"));
    let strategy = PatternSearch::new("python-", '.', &["python.exe"]);
    let got = strategy.locate(&base, "app").unwrap();

    let parent = paths::join(&base, &[".."]);
    let accepted: Vec<String> = ["python-3.10", "python-2.7"]
        .iter()
        .map(|d| paths::join(&parent, &[*d, "python.exe"]))
        .collect();
    assert!(accepted.contains(&got), "unexpected match {got}");
}

#[test]
fn pattern_search_ignores_files_and_non_matching_dirs() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("notpython")).unwrap();
    fs::create_dir(root.join("launcher")).unwrap();
    touch(&root.join("python-3.9"));
    let base = text(&root.join("launcher"));
    let err = PatternSearch::new("python-", '.', &["python.exe"])
        .locate(&base, "app")
        .unwrap_err();
    assert_eq!(err.searched.len(), 1);
    assert!(err.searched[0].ends_with("python-<version>"));
}

#[test]
fn pattern_search_unreadable_parent_is_not_found() {
    let dir = tempdir().unwrap();
    let base = text(&dir.path().join("missing").join("launcher"));
    let err = PatternSearch::new("python-", '.', &["python.exe"])
        .locate(&base, "app")
        .unwrap_err();
    assert_eq!(err.searched.len(), 1);
}

#[test]
fn upward_probe_finds_target_in_ancestor() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    fs::create_dir_all(a.join("b/c")).unwrap();
    touch(&a.join("target/suffix"));
    let start = text(&a.join("b/c"));
    let got = UpwardProbe::new(&["target", "suffix"])
        .locate(&start, "app")
        .unwrap();
    assert_eq!(got, paths::join(&text(&a), &["target", "suffix"]));
}

#[test]
fn upward_probe_prefers_nearest_match() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    touch(&a.join("target/suffix"));
    touch(&a.join("b/target/suffix"));
    let start = text(&a.join("b"));
    let got = UpwardProbe::new(&["target", "suffix"])
        .locate(&start, "app")
        .unwrap();
    assert_eq!(got, paths::join(&start, &["target", "suffix"]));
}

#[test]
fn upward_probe_walks_to_root_then_gives_up() {
    let dir = tempdir().unwrap();
    let start = dir.path().join("x/y");
    fs::create_dir_all(&start).unwrap();
    let start = text(&start);
    let suffix = ["no-such-runtime-d41d8cd9", "runtime-exe"];
    let err = UpwardProbe::new(&suffix).locate(&start, "app").unwrap_err();

    assert_eq!(err.searched.first(), Some(&paths::join(&start, &suffix)));
    // the empty prefix probes the root-level path last
    assert_eq!(err.searched.last(), Some(&paths::join("", &suffix)));
    let depth = start.matches(paths::is_separator).count();
    assert_eq!(err.searched.len(), depth + 1);
}

#[test]
fn upward_probe_respects_iteration_bound() {
    let probe = UpwardProbe {
        suffix: &["no-such-runtime-d41d8cd9"],
        max_iterations: 2,
    };
    let err = probe.locate("/a/b/c/d", "app").unwrap_err();
    assert_eq!(err.searched.len(), 2);
}

#[test]
fn upward_probe_relative_base_stops_at_first_component() {
    let err = UpwardProbe::new(&["no-such-runtime-d41d8cd9"])
        .locate(".", "app")
        .unwrap_err();
    assert_eq!(err.searched, vec![paths::join(".", &["no-such-runtime-d41d8cd9"])]);
}

#[test]
fn strategy_dispatches_and_describes() {
    let dir = tempdir().unwrap();
    let base = text(dir.path());
    touch(&dir.path().join("bin/runtime/runtime-exe"));
    let strategies = [
        Strategy::Fixed(FixedPath::new(SUFFIX)),
        Strategy::Upward(UpwardProbe::new(SUFFIX)),
    ];
    for s in strategies {
        assert_eq!(s.locate(&base, "app").unwrap(), paths::join(&base, SUFFIX));
    }
    let pattern = Strategy::Pattern(PatternSearch::new("python-", '.', &["python.exe"]));
    assert_eq!(pattern.name(), "pattern");
    assert_eq!(pattern.describe(), "<base>/../python-<d>.<d>*/python.exe");
}
