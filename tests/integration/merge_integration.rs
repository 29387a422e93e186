//! Integration tests for the color-scheme merge operation

use huesync::document::ConfigDocument;
use huesync::merge::{merge_files, MergeOutcome};
use tempfile::TempDir;

fn write(path: &std::path::Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

fn read(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_source_keys_overwrite_target_keys() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("MaterialYou.colors");
    let target = dir.path().join("kdeglobals");
    write(&source, "[Colors:Window]\nForeground=255,0,0\n");
    write(&target, "[Colors:Window]\nBackground=0,0,0\nForeground=1,1,1\n");

    merge_files(&source, &target, false).unwrap();

    assert_eq!(
        read(&target),
        "[Colors:Window]\nBackground=0,0,0\nForeground=255,0,0\n"
    );
}

#[test]
fn test_absent_section_is_created_with_exactly_the_source_keys() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("MaterialYou.colors");
    let target = dir.path().join("kdeglobals");
    write(&source, "[General]\nColorScheme=MaterialYou\n");
    write(&target, "[Icons]\nTheme=Papirus\n");

    merge_files(&source, &target, false).unwrap();

    let merged = ConfigDocument::load(&target).unwrap();
    let general = merged.section("General").unwrap();
    assert_eq!(general.len(), 1);
    assert_eq!(general.get("ColorScheme"), Some("MaterialYou"));
    // Pre-existing sections are untouched.
    assert_eq!(merged.get("Icons", "Theme"), Some("Papirus"));
}

#[test]
fn test_merge_on_files_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("MaterialYou.colors");
    let target = dir.path().join("kdeglobals");
    write(
        &source,
        "[General]\nColorScheme=MaterialYou\n[Colors:Window]\nForeground=255,0,0\n",
    );
    write(&target, "[Colors:Window]\nBackground=0,0,0\n");

    merge_files(&source, &target, false).unwrap();
    let once = read(&target);
    let outcome = merge_files(&source, &target, false).unwrap();

    assert_eq!(read(&target), once);
    match outcome {
        MergeOutcome::Merged(report) => assert!(report.is_noop()),
        other => panic!("expected merge, got {:?}", other),
    }
}

#[test]
fn test_missing_source_leaves_target_byte_identical() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("MaterialYou.colors");
    let target = dir.path().join("kdeglobals");
    let content = "[S]\nKey=value\n# trailing comment\n";
    write(&target, content);

    let outcome = merge_files(&source, &target, false).unwrap();

    assert_eq!(outcome, MergeOutcome::SourceMissing);
    assert_eq!(read(&target), content);
}

#[test]
fn test_missing_target_is_created() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("MaterialYou.colors");
    let target = dir.path().join("fresh").join("kdeglobals");
    write(&source, "[General]\nColorScheme=MaterialYou\n");

    merge_files(&source, &target, false).unwrap();

    assert_eq!(read(&target), "[General]\nColorScheme=MaterialYou\n");
}

#[test]
fn test_unaffected_regions_round_trip() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("MaterialYou.colors");
    let target = dir.path().join("kdeglobals");
    write(&source, "[Colors:Window]\nForeground=255,0,0\n");
    write(
        &target,
        "# managed by the desktop\n\n[KDE]\nSingleClick = false\n\n[Colors:Window]\nForeground=1,1,1\n",
    );

    merge_files(&source, &target, false).unwrap();

    assert_eq!(
        read(&target),
        "# managed by the desktop\n\n[KDE]\nSingleClick = false\n\n[Colors:Window]\nForeground=255,0,0\n"
    );
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("MaterialYou.colors");
    let target = dir.path().join("kdeglobals");
    write(&source, "[S]\nA=2\nB=3\n");
    write(&target, "[S]\nA=1\n");

    let outcome = merge_files(&source, &target, true).unwrap();

    match outcome {
        MergeOutcome::Merged(report) => {
            assert_eq!(report.updated(), 1);
            assert_eq!(report.inserted(), 1);
        }
        other => panic!("expected merge, got {:?}", other),
    }
    assert_eq!(read(&target), "[S]\nA=1\n");
}

#[test]
fn test_no_temp_file_left_behind() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("MaterialYou.colors");
    let target = dir.path().join("kdeglobals");
    write(&source, "[S]\nA=1\n");

    merge_files(&source, &target, false).unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
