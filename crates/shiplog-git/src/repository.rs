//! Git repository access via the git binary

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use shiplog_core::{GitError, LogSource};

/// Handle to a git repository, addressed by a working directory
#[derive(Debug, Clone)]
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository at an exact path
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GitError> {
        which::which("git").map_err(|_| GitError::GitNotFound)?;

        let repo = Self { path: path.into() };
        repo.git(&["rev-parse", "--git-dir"])
            .map_err(|_| GitError::NotARepository(repo.path.clone()))?;
        Ok(repo)
    }

    /// Discover the repository containing `path`
    pub fn discover(path: &Path) -> Result<Self, GitError> {
        which::which("git").map_err(|_| GitError::GitNotFound)?;

        let probe = Self {
            path: path.to_path_buf(),
        };
        let toplevel = probe
            .git(&["rev-parse", "--show-toplevel"])
            .map_err(|_| GitError::NotARepository(path.to_path_buf()))?;

        Ok(Self {
            path: PathBuf::from(toplevel.trim_end()),
        })
    }

    /// The repository working directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a git subcommand and capture stdout
    fn git(&self, args: &[&str]) -> Result<String, GitError> {
        debug!(?args, path = %self.path.display(), "running git");

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(GitError::Spawn)?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.first().copied().unwrap_or_default().to_string(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl LogSource for GitRepo {
    #[instrument(skip(self, format))]
    fn fetch_log(&self, format: &str, committish: &str) -> Result<String, GitError> {
        let format_arg = format!("--format={format}");
        self.git(&["log", &format_arg, committish])
    }
}
