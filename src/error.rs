use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the commit pipeline, one variant per step.
///
/// External tools (the `git` binary, the selection widget) fail with
/// opaque errors; the variants wrapping [`anyhow::Error`] carry those
/// through unchanged.
#[derive(Error, Debug)]
pub enum Error {
  #[error("failed to initialize store at {path:?}")]
  StoreInit {
    path:   PathBuf,
    #[source]
    source: io::Error
  },

  #[error("failed to read store at {path:?}")]
  StoreRead {
    path:   PathBuf,
    #[source]
    source: io::Error
  },

  #[error("no template selected")]
  SelectionCancelled,

  #[error("fuzzy selection failed")]
  Selection(#[source] anyhow::Error),

  #[error("failed to write template file")]
  TemplateWrite(#[source] io::Error),

  #[error("git commit failed")]
  CommitTool(#[source] anyhow::Error),

  #[error("failed to read last commit message")]
  HistoryQuery(#[source] anyhow::Error),

  #[error("failed to append history at {path:?}")]
  HistoryWrite {
    path:   PathBuf,
    #[source]
    source: io::Error
  },

  #[error("failed to remove template file at {path:?}")]
  Cleanup {
    path:   PathBuf,
    #[source]
    source: io::Error
  }
}
