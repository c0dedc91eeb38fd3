use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory the CLI runs in.
pub struct SumplogWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl SumplogWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join("sumplog.db")
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `sumplog` inside the workspace with a clean environment.
pub fn run_sumplog<I, S>(workspace: &SumplogWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("sumplog")
        .expect("sumplog binary")
        .current_dir(&workspace.root)
        .env_remove("SUMPLOG_DB")
        .env_remove("SUMPLOG_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run sumplog: {e}"));

    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
