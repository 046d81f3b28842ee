use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;

/// The interactive selection widget the commit pipeline needs.
pub trait MessagePicker {
  /// Returns the index of the chosen entry, or `None` when the user backs
  /// out without choosing.
  fn pick(&self, entries: &[String]) -> Result<Option<usize>>;
}

/// Fuzzy-matching picker rendered in the terminal. The chosen entry is
/// echoed back in full once the picker closes.
#[derive(Debug, Default)]
pub struct FuzzyPicker;

impl MessagePicker for FuzzyPicker {
  fn pick(&self, entries: &[String]) -> Result<Option<usize>> {
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
      .with_prompt("Commit message template")
      .items(entries)
      .default(0)
      .report(true)
      .interact_opt()?;
    Ok(selection)
  }
}
