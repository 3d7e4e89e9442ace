mod common;

use assert_fs::TempDir;
use common::{difftool, workspace, write_file};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn changed_line_prints_unified_diff(workspace: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&workspace, "old", b"a\nb\nc\n");
    write_file(&workspace, "new", b"a\nx\nc\n");

    let assert = difftool(&workspace, &["old", "new"]).assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout, "--- old\n+++ new\n@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n");
    Ok(())
}

#[rstest]
fn headers_use_base_names_only(workspace: TempDir) {
    std::fs::create_dir_all(workspace.path().join("left/deep")).unwrap();
    std::fs::create_dir_all(workspace.path().join("right")).unwrap();
    write_file(&workspace, "left/deep/config.ini", b"k=1\n");
    write_file(&workspace, "right/config.ini.new", b"k=2\n");

    difftool(&workspace, &["left/deep/config.ini", "right/config.ini.new"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "--- config.ini\n+++ config.ini.new\n@@ -1 +1 @@\n-k=1\n+k=2\n",
        ));
}

#[rstest]
fn identical_files_are_silent(workspace: TempDir) {
    write_file(&workspace, "old", b"same\ncontent\n");
    write_file(&workspace, "new", b"same\ncontent\n");

    for _ in 0..2 {
        difftool(&workspace, &["old", "new"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::is_empty());
    }
}

#[rstest]
fn empty_files_are_identical(workspace: TempDir) {
    write_file(&workspace, "old", b"");
    write_file(&workspace, "new", b"");

    difftool(&workspace, &["old", "new"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn line_endings_do_not_count_as_differences(workspace: TempDir) {
    write_file(&workspace, "old", b"one\ntwo\n");
    write_file(&workspace, "new", b"one\r\ntwo\r\n");

    difftool(&workspace, &["old", "new"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn one_changed_line_gives_one_hunk(workspace: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let old: String = (1..=40).map(|n| format!("line {n}\n")).collect();
    let new = old.replace("line 20\n", "line twenty\n");
    write_file(&workspace, "old", old.as_bytes());
    write_file(&workspace, "new", new.as_bytes());

    let assert = difftool(&workspace, &["old", "new"]).assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert_eq!(stdout.lines().filter(|l| l.starts_with("@@")).count(), 1);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("-line")).count(), 1);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("+line")).count(), 1);
    assert!(stdout.contains("@@ -17,7 +17,7 @@\n"));
    Ok(())
}

#[rstest]
fn context_width_is_configurable(workspace: TempDir) {
    write_file(&workspace, "old", b"1\n2\n3\n4\n5\n");
    write_file(&workspace, "new", b"1\n2\nthree\n4\n5\n");

    difftool(&workspace, &["-U", "1", "old", "new"])
        .assert()
        .code(1)
        .stdout("--- old\n+++ new\n@@ -2,3 +2,3 @@\n 2\n-3\n+three\n 4\n");
}

#[rstest]
fn undecodable_new_file_is_reported(workspace: TempDir) {
    write_file(&workspace, "old", b"a\n");
    write_file(&workspace, "new", b"caf\xe9\n");

    difftool(&workspace, &["old", "new"])
        .assert()
        .code(1)
        .stdout("new new file charmap decode error\n");
}

#[rstest]
fn undecodable_old_file_is_reported(workspace: TempDir) {
    write_file(&workspace, "old", b"\xff\xfe\n");
    write_file(&workspace, "new", b"a\n");

    difftool(&workspace, &["old", "new"])
        .assert()
        .code(1)
        .stdout("old old file charmap decode error\n");
}

#[rstest]
fn missing_file_fails(workspace: TempDir) {
    write_file(&workspace, "old", b"a\n");

    difftool(&workspace, &["old", "absent"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("absent"));
}

#[rstest]
fn missing_arguments_print_usage(workspace: TempDir) {
    difftool(&workspace, &["only-one"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}
