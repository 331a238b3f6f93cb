use assert_cmd::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    assert!(Command::new("git")
        .args(["init"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.email", "you@example.com"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.name", "Your Name"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn commit_file(dir: &Path, name: &str, content: &str, author: &str, date: &str) {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    assert!(Command::new("git")
        .args(["add", "."])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["commit", "-m", &format!("add {name}")])
        .arg("--author")
        .arg(format!("{author} <dev@example.com>"))
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

#[test]
fn table_has_header_and_normalized_authors() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let repo = dir.path().join("work_repo");
    init_git_repo(&repo);
    commit_file(&repo, "a.txt", "a\n", "Éric", "2025-06-03T12:00:00");
    commit_file(&repo, "b.txt", "b\n", "Alice", "2025-06-04T12:00:00");

    let mut cmd = Command::cargo_bin("burnrate").unwrap();
    cmd.current_dir(dir.path()).args(["--repo-name", "work_repo"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "Author Rate Total Index");
    assert!(text.contains("eric"));
    assert!(text.contains("alice"));
}

#[test]
fn json_reports_totals_per_author() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let repo = dir.path().join("work_repo");
    init_git_repo(&repo);
    commit_file(&repo, "a.txt", "a\n", "Éric", "2025-06-03T12:00:00");
    commit_file(&repo, "b.txt", "b\n", "éric", "2025-06-04T12:00:00");
    commit_file(&repo, "c.txt", "c\n", "Alice", "2025-06-05T12:00:00");

    let mut cmd = Command::cargo_bin("burnrate").unwrap();
    cmd.current_dir(dir.path())
        .args(["--repo-name", "work_repo", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let authors = v["authors"].as_array().unwrap();
    let eric = authors
        .iter()
        .find(|a| a["author"] == "eric")
        .expect("eric bucket present");
    assert_eq!(eric["total"].as_u64().unwrap(), 2);
    assert!(authors.iter().any(|a| a["author"] == "alice"));
}

#[test]
fn since_excludes_older_commits() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let repo = dir.path().join("work_repo");
    init_git_repo(&repo);
    commit_file(&repo, "old.txt", "o\n", "Old Hand", "2019-03-05T12:00:00");
    commit_file(&repo, "new.txt", "n\n", "Newcomer", "2025-06-04T12:00:00");

    let mut cmd = Command::cargo_bin("burnrate").unwrap();
    cmd.current_dir(dir.path())
        .args(["--repo-name", "work_repo", "--since", "2024-01-01", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let authors = v["authors"].as_array().unwrap();
    assert!(authors.iter().any(|a| a["author"] == "newcomer"));
    assert!(!authors.iter().any(|a| a["author"] == "old hand"));
}

#[test]
fn external_backend_agrees_with_embedded() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let repo = dir.path().join("work_repo");
    init_git_repo(&repo);
    commit_file(&repo, "a.txt", "a\n", "Éric", "2025-06-03T12:00:00");
    commit_file(&repo, "b.txt", "b\n", "Alice", "2025-06-04T12:00:00");

    let run = |backend: &str| -> serde_json::Value {
        let mut cmd = Command::cargo_bin("burnrate").unwrap();
        cmd.current_dir(dir.path())
            .args(["--repo-name", "work_repo", "--backend", backend, "--json"]);
        let out = cmd.assert().success().get_output().stdout.clone();
        serde_json::from_slice(&out).unwrap()
    };

    let embedded = run("gix");
    let external = run("git");

    let total = |v: &serde_json::Value| -> u64 {
        v["authors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["total"].as_u64().unwrap())
            .sum()
    };
    assert_eq!(total(&embedded), 2);
    assert_eq!(total(&embedded), total(&external));
}

#[test]
fn rejects_malformed_since() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("burnrate").unwrap();
    cmd.current_dir(dir.path()).args(["--since", "03-06-2025"]);
    cmd.assert().failure();
    // rejected before any I/O: nothing was cloned
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn rejects_unsafe_repo_name() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("burnrate").unwrap();
    cmd.current_dir(dir.path()).args(["--repo-name", "../evil"]);
    cmd.assert().failure();
}

#[test]
fn rejects_non_https_repo_url() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("burnrate").unwrap();
    cmd.current_dir(dir.path())
        .args(["--repo-url", "git@github.com:someone/repo.git"]);
    cmd.assert().failure();
}
