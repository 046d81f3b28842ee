#![allow(dead_code)]
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Throwaway git repository with its own identity config, so commits work
/// without touching the global git setup.
pub struct TestRepo {
  pub repo:      git2::Repository,
  pub repo_path: TempDir
}

impl Default for TestRepo {
  fn default() -> Self {
    let repo_path = TempDir::new().unwrap();
    let repo = git2::Repository::init(repo_path.path()).unwrap();
    {
      let mut config = repo.config().unwrap();
      config.set_str("user.name", "Test User").unwrap();
      config.set_str("user.email", "test@example.com").unwrap();
    }

    Self { repo, repo_path }
  }
}

impl TestRepo {
  pub fn workdir(&self) -> PathBuf {
    self.repo_path.path().to_path_buf()
  }

  pub fn stage_file(&self, name: &str, content: &str) -> Result<()> {
    let file_path = self.repo_path.path().join(name);
    std::fs::write(&file_path, content)?;

    let mut index = self.repo.index()?;
    index.add_path(Path::new(name))?;
    index.write()?;
    Ok(())
  }

  pub fn commit_staged(&self, message: &str) -> Result<()> {
    let mut index = self.repo.index()?;
    let oid = index.write_tree()?;
    let signature = git2::Signature::now("Test User", "test@example.com")?;
    let tree = self.repo.find_tree(oid)?;

    match self.repo.head() {
      Ok(head) => {
        let parent = head.peel_to_commit()?;
        self
          .repo
          .commit(Some("HEAD"), &signature, &signature, message, &tree, &[&parent])?;
      },
      Err(_) => {
        self
          .repo
          .commit(Some("HEAD"), &signature, &signature, message, &tree, &[])?;
      }
    }

    Ok(())
  }
}
