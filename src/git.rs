use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

/// The version-control operations the commit pipeline needs.
pub trait GitTool {
  /// Commits with the message read from `template`, letting the user edit
  /// it interactively first.
  fn commit_from_file(&self, template: &Path) -> Result<()>;

  /// Raw message of the most recent commit.
  fn last_commit_message(&self) -> Result<String>;
}

/// Runs the real `git` binary. The commit subprocess inherits the
/// terminal so the user's editor can take over.
#[derive(Debug, Default)]
pub struct GitCli {
  workdir: Option<PathBuf>
}

impl GitCli {
  pub fn new() -> Self {
    Self::default()
  }

  /// Runs git inside `dir` instead of the current directory.
  pub fn in_dir(dir: PathBuf) -> Self {
    Self { workdir: Some(dir) }
  }

  fn command(&self) -> Command {
    let mut command = Command::new("git");
    if let Some(dir) = &self.workdir {
      command.current_dir(dir);
    }
    command
  }
}

impl GitTool for GitCli {
  fn commit_from_file(&self, template: &Path) -> Result<()> {
    log::debug!("Running git commit with template {}", template.display());

    let status = self
      .command()
      .arg("commit")
      .arg("-F")
      .arg(template)
      .arg("-e")
      .status()
      .context("failed to run git commit")?;

    if !status.success() {
      bail!("git commit exited with {status}");
    }
    Ok(())
  }

  fn last_commit_message(&self) -> Result<String> {
    let output = self
      .command()
      .args(["log", "-1", "--pretty=%B"])
      .output()
      .context("failed to run git log")?;

    if !output.status.success() {
      bail!("git log exited with {}: {}", output.status, String::from_utf8_lossy(&output.stderr));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }
}
