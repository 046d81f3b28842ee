use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use console::Emoji;

use crate::config::App;
use crate::error::Error;
use crate::templates;

/// Messages seeded into a fresh examples store, in the order they are
/// written. Multi-line templates use the escaped `\n` form.
const DEFAULT_EXAMPLES: &[&str] = &[
  "feat: add new feature",
  "fix: fix unexpected behavior",
  "docs: update documentation",
  "style: apply code formatting",
  "refactor: restructure code without behavior change",
  "perf: improve performance",
  "test: add missing tests",
  "chore: update build scripts",
  "feat: add new feature\\n\\nDescribe the motivation and the change in detail."
];

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// The two persistent template sources: the examples file the user edits
/// by hand, and the append-only history of committed messages.
#[derive(Debug, Clone)]
pub struct Stores {
  examples: PathBuf,
  history:  PathBuf
}

impl Stores {
  pub fn new(examples: PathBuf, history: PathBuf) -> Self {
    Self { examples, history }
  }

  pub fn from_app(app: &App) -> Self {
    Self::new(PathBuf::from(&app.examples_file), PathBuf::from(&app.history_file))
  }

  pub fn examples_path(&self) -> &Path {
    &self.examples
  }

  pub fn history_path(&self) -> &Path {
    &self.history
  }

  /// Creates any missing store. Existing files are left untouched.
  pub fn ensure(&self) -> Result<(), Error> {
    if !self.examples.exists() {
      self.seed_examples()?;
    }
    if !self.history.exists() {
      File::create(&self.history).map_err(|source| self.init_error(&self.history, source))?;
    }
    Ok(())
  }

  fn seed_examples(&self) -> Result<(), Error> {
    let mut contents = String::new();
    for example in DEFAULT_EXAMPLES {
      contents.push_str(example);
      contents.push('\n');
    }
    fs::write(&self.examples, contents).map_err(|source| self.init_error(&self.examples, source))?;
    println!("{} Seeded {} with default templates", Emoji("✨", ":-)"), self.examples.display());
    Ok(())
  }

  fn init_error(&self, path: &Path, source: io::Error) -> Error {
    Error::StoreInit { path: path.to_path_buf(), source }
  }

  /// Builds the picker list: examples lines then history lines, blanks and
  /// comment lines dropped, deduplicated, ranked descending.
  pub fn templates(&self) -> Result<Vec<String>, Error> {
    self.ensure()?;

    let mut lines = read_lines(&self.examples)?;
    lines.extend(read_lines(&self.history)?);
    lines.retain(|line| templates::is_selectable(line));

    let list = templates::rank(templates::dedupe(lines));
    log::debug!("Built {} templates from {} and {}", list.len(), self.examples.display(), self.history.display());
    Ok(list)
  }

  /// Appends one timestamped record for `message` to the history store,
  /// creating it if it went missing since [`Stores::ensure`].
  pub fn append_history(&self, message: &str) -> Result<(), Error> {
    let record = format!("# {}\n{}\n", Local::now().format(TIMESTAMP_FORMAT), templates::escape_newlines(message));

    let mut file = OpenOptions::new()
      .append(true)
      .create(true)
      .open(&self.history)
      .map_err(|source| self.history_error(source))?;
    file
      .write_all(record.as_bytes())
      .map_err(|source| self.history_error(source))?;

    log::debug!("Recorded commit message in {}", self.history.display());
    Ok(())
  }

  fn history_error(&self, source: io::Error) -> Error {
    Error::HistoryWrite { path: self.history.clone(), source }
  }
}

fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
  let read_error = |source| Error::StoreRead { path: path.to_path_buf(), source };
  let file = File::open(path).map_err(read_error)?;
  BufReader::new(file).lines().collect::<io::Result<Vec<_>>>().map_err(read_error)
}
