use std::collections::HashSet;
use std::io::Write;

use tempfile::NamedTempFile;

use crate::error::Error;

/// Lines whose first character is this marker never reach the picker.
/// History timestamps rely on it to stay invisible.
const COMMENT_MARKER: char = '#';

/// True for lines that may appear in the picker list.
pub fn is_selectable(line: &str) -> bool {
  !line.is_empty() && !line.starts_with(COMMENT_MARKER)
}

/// Turns every literal `\n` escape back into a real newline.
///
/// Inverse of [`escape_newlines`] for any message that does not already
/// contain the literal escape sequence.
pub fn unescape_newlines(message: &str) -> String {
  message.replace("\\n", "\n")
}

/// Turns every real newline into the literal `\n` escape so a multi-line
/// message fits on one store line.
pub fn escape_newlines(message: &str) -> String {
  message.replace('\n', "\\n")
}

/// Drops repeated templates, keeping the first occurrence of each.
/// Equality is exact string equality on the escaped form.
pub fn dedupe(templates: Vec<String>) -> Vec<String> {
  let mut seen = HashSet::with_capacity(templates.len());
  templates
    .into_iter()
    .filter(|template| seen.insert(template.clone()))
    .collect()
}

/// Sorts templates descending by byte order. Later-sorting entries, fresh
/// history lines among them, surface near the top of the picker.
pub fn rank(mut templates: Vec<String>) -> Vec<String> {
  templates.sort_unstable_by(|a, b| b.cmp(a));
  templates
}

/// Writes the decoded message to a fresh temp file ready for editing.
/// The file lives exactly as long as the returned handle.
pub fn write_editable(message: &str) -> Result<NamedTempFile, Error> {
  let mut file = NamedTempFile::new().map_err(Error::TemplateWrite)?;
  file
    .write_all(unescape_newlines(message).as_bytes())
    .map_err(Error::TemplateWrite)?;
  file.flush().map_err(Error::TemplateWrite)?;
  Ok(file)
}
