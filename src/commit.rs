use crate::error::Error;
use crate::git::GitTool;
use crate::select::MessagePicker;
use crate::store::Stores;
use crate::templates;

/// Runs the full flow: build the template list, fuzzy-pick one, let the
/// user edit and commit it, then record the committed message in history.
///
/// Each step runs at most once and the first failure aborts the rest.
/// Once the transient template file exists its removal is attempted
/// exactly once, whatever happens afterwards; a removal failure is only
/// reported when every earlier step succeeded.
pub fn run(stores: &Stores, git: &dyn GitTool, picker: &dyn MessagePicker) -> Result<(), Error> {
  let candidates = stores.templates()?;
  if candidates.is_empty() {
    return Err(Error::SelectionCancelled);
  }

  let index = picker
    .pick(&candidates)
    .map_err(Error::Selection)?
    .ok_or(Error::SelectionCancelled)?;

  let template = templates::write_editable(&candidates[index])?;
  let path = template.path().to_path_buf();
  log::debug!("Editing template at {}", path.display());

  let outcome = git
    .commit_from_file(&path)
    .map_err(Error::CommitTool)
    .and_then(|()| record_history(stores, git));

  let cleanup = template.close().map_err(|source| Error::Cleanup { path, source });

  outcome.and(cleanup)
}

fn record_history(stores: &Stores, git: &dyn GitTool) -> Result<(), Error> {
  let message = git.last_commit_message().map_err(Error::HistoryQuery)?;
  stores.append_history(message.trim())
}
