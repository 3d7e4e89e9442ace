use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::PathBuf;

#[fixture]
pub fn workspace() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let file = dir.child(name);
    file.write_binary(content).expect("Failed to write file");
    file.path().to_path_buf()
}

pub fn difftool(dir: &TempDir, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("difftool").expect("difftool binary");
    cmd.current_dir(dir.path()).args(args);
    cmd
}
