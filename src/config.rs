use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, FileFormat};
use lazy_static::lazy_static;
use serde::Deserialize;

// Constants
const EXAMPLES_FILE: &str = ".fcm";
const HISTORY_FILE: &str = ".fcm_history";

/// Resolved settings. Both paths fall back to dotfiles in the home
/// directory when neither the config file nor `FCM_*` environment
/// variables override them.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct App {
  pub examples_file: String,
  pub history_file:  String
}

#[derive(Debug)]
pub struct ConfigPaths {
  pub dir:  PathBuf,
  pub file: PathBuf
}

lazy_static! {
  static ref PATHS: ConfigPaths = ConfigPaths::new();
}

impl ConfigPaths {
  fn new() -> Self {
    let dir = home::home_dir()
      .expect("Failed to determine home directory")
      .join(".config/fcm");
    let file = dir.join("config.ini");
    Self { dir, file }
  }

  fn ensure_exists(&self) -> Result<()> {
    if !self.dir.exists() {
      std::fs::create_dir_all(&self.dir).with_context(|| format!("Failed to create config directory at {:?}", self.dir))?;
    }
    if !self.file.exists() {
      File::create(&self.file).with_context(|| format!("Failed to create config file at {:?}", self.file))?;
    }
    Ok(())
  }
}

impl App {
  pub fn new() -> Result<Self> {
    dotenv::dotenv().ok();
    PATHS.ensure_exists()?;

    let home = home::home_dir().expect("Failed to determine home directory");

    let config = Config::builder()
      .add_source(config::Environment::with_prefix("FCM"))
      .add_source(config::File::new(PATHS.file.to_string_lossy().as_ref(), FileFormat::Ini))
      .set_default("examples_file", home.join(EXAMPLES_FILE).to_string_lossy().into_owned())?
      .set_default("history_file", home.join(HISTORY_FILE).to_string_lossy().into_owned())?
      .build()?;

    config
      .try_deserialize()
      .context("Failed to deserialize existing config. Remove ~/.config/fcm/config.ini and try again")
  }
}
