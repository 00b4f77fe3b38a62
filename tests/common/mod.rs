#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test helper for running geodd commands with less boilerplate
pub struct GeoddTest {
    cmd: Command,
}

pub fn geodd_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("geodd"))
}

impl GeoddTest {
    pub fn new() -> Self {
        Self {
            cmd: geodd_command(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn arg<S: AsRef<std::ffi::OsStr>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Feed text to the process on stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn assert_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    pub fn assert_success_contains(mut self, text: &str) -> assert_cmd::assert::Assert {
        self.cmd
            .assert()
            .success()
            .stdout(predicate::str::contains(text))
    }

    pub fn assert_success_contains_all(mut self, texts: &[&str]) -> assert_cmd::assert::Assert {
        let mut assertion = self.cmd.assert().success();
        for text in texts {
            assertion = assertion.stdout(predicate::str::contains(*text));
        }
        assertion
    }

    pub fn assert_failure(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().failure()
    }

    /// Assert failure with an exact `Error: ...` line on stderr
    pub fn assert_error(mut self, message: &str) -> assert_cmd::assert::Assert {
        self.cmd
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(format!("Error: {}", message)))
    }

    /// Stdout of a successful run
    pub fn stdout(mut self) -> String {
        let output = self.cmd.assert().success().get_output().stdout.clone();
        String::from_utf8(output).unwrap()
    }

    pub fn get_output(mut self) -> std::process::Output {
        self.cmd.output().unwrap()
    }
}

/// Faro to Lisbon, the reference route used across the suites
pub const FARO: [&str; 2] = ["37.165611", "-8.545786"];
pub const LISBON: [&str; 2] = ["38.737545", "-9.370047"];

pub fn faro_lisbon_distance() -> GeoddTest {
    GeoddTest::new().args([FARO[0], FARO[1], LISBON[0], LISBON[1], "distance"])
}

/// Temporary data file; the directory lives as long as the returned guard
pub fn data_file(name: &str, lines: &[&str]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    (dir, path)
}

pub fn file_arg(path: &std::path::Path) -> String {
    format!("@{}", path.to_str().unwrap())
}
