//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::OnceLock;

/// Two rounds against two enemies; the firing system shoots three times
pub const BATTLE_TRACE: &str = r#"# recorded battle
{"type":"round_started"}
{"type":"status","x":400,"y":300,"energy":100}
{"type":"scanned_robot","name":"Crazy","bearing":0.0,"distance":150,"heading":1.0,"velocity":8,"energy":100}
{"type":"next_turn"}
{"type":"bullet_hit","bullet":"bullet-1","victim":"Crazy","victim_energy":90}
{"type":"status","x":400,"y":300,"energy":100,"gun_heat":0}
{"type":"next_turn"}
{"type":"bullet_missed","bullet":"bullet-2"}
{"type":"round_ended","round":1,"turns":2}

{"type":"round_started"}
{"type":"scanned_robot","name":"Walls","bearing":1.5,"distance":300,"heading":0.0,"velocity":0,"energy":100}
{"type":"next_turn"}
{"type":"paint"}
{"type":"round_ended","round":2,"turns":1}
{"type":"battle_ended"}
"#;

/// Path to the `rb` binary, built on first use.
///
/// `rb` lives in another workspace package, so cargo does not build it or
/// set `CARGO_BIN_EXE_rb` for this test target. Build it into the same
/// target directory and profile as the running spec binary.
pub fn rb_binary() -> &'static Path {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();
    BINARY.get_or_init(|| {
        // target/<profile>/deps/specs-<hash>
        let profile_dir = std::env::current_exe()
            .unwrap()
            .parent()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .expect("spec binary lives under target/<profile>/deps");
        let target_dir = profile_dir.parent().expect("target directory");

        let mut build = std::process::Command::new(env!("CARGO"));
        build
            .args(["build", "--quiet", "--package", "rb", "--bin", "rb"])
            .arg("--target-dir")
            .arg(target_dir)
            .current_dir(env!("CARGO_MANIFEST_DIR"));
        if profile_dir.ends_with("release") {
            build.arg("--release");
        }
        let status = build.status().unwrap();
        assert!(status.success(), "cargo build --package rb failed: {status}");

        let binary = profile_dir.join(format!("rb{}", std::env::consts::EXE_SUFFIX));
        assert!(binary.exists(), "rb binary missing at {}", binary.display());
        binary
    })
}

/// A scratch directory the CLI runs in
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel`, creating parent directories
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn rb(&self) -> CliBuilder {
        let mut cmd = Command::new(rb_binary());
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let run = RunAssert::from(self.cmd.output().unwrap());
        assert!(
            run.success,
            "expected success\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }

    pub fn fails(mut self) -> RunAssert {
        let run = RunAssert::from(self.cmd.output().unwrap());
        assert!(
            !run.success,
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }
}

pub struct RunAssert {
    success: bool,
    stdout: String,
    stderr: String,
}

impl From<Output> for RunAssert {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout lacks {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout has {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr lacks {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stderr.contains(needle),
            "stderr has {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
