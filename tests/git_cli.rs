mod common;

use common::TestRepo;
use fcm::git::{GitCli, GitTool};

fn setup() {
  // Keeps `git commit -e` from blocking on a real editor.
  std::env::set_var("GIT_EDITOR", "true");
  _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn last_commit_message_returns_head_message() {
  setup();
  let repo = TestRepo::default();
  repo.stage_file("a.txt", "a\n").unwrap();
  repo.commit_staged("fix: handle empty input\n\nDetails here").unwrap();

  let git = GitCli::in_dir(repo.workdir());
  let message = git.last_commit_message().unwrap();
  assert_eq!(message.trim(), "fix: handle empty input\n\nDetails here");
}

#[test]
fn commit_from_file_uses_template_contents() {
  setup();
  let repo = TestRepo::default();
  repo.stage_file("b.txt", "b\n").unwrap();

  let template = tempfile::NamedTempFile::new().unwrap();
  std::fs::write(template.path(), "chore: seed repository\n").unwrap();

  let git = GitCli::in_dir(repo.workdir());
  git.commit_from_file(template.path()).unwrap();

  assert_eq!(git.last_commit_message().unwrap().trim(), "chore: seed repository");
}

#[test]
fn commit_from_file_fails_with_nothing_staged() {
  setup();
  let repo = TestRepo::default();

  let template = tempfile::NamedTempFile::new().unwrap();
  std::fs::write(template.path(), "chore: nothing to do\n").unwrap();

  let git = GitCli::in_dir(repo.workdir());
  assert!(git.commit_from_file(template.path()).is_err());
}

#[test]
fn last_commit_message_fails_without_commits() {
  setup();
  let repo = TestRepo::default();

  let git = GitCli::in_dir(repo.workdir());
  assert!(git.last_commit_message().is_err());
}
