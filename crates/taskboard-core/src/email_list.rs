use tracing::debug;

use crate::email::{
  invalid_emails,
  split_email_input
};
use crate::error::FormError;

/// Key that commits the pending email
/// input instead of performing the
/// field's default action.
pub const COMMIT_KEY: &str = "Enter";

/// Pending email input, the accepted
/// assignee list, and the owning form's
/// single error slot.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct EmailListEditor {
  pending: String,
  emails:  Vec<String>,
  error:   Option<FormError>
}

impl EmailListEditor {
  pub fn with_emails(
    emails: Vec<String>
  ) -> Self {
    Self {
      emails,
      ..Self::default()
    }
  }

  pub fn pending(&self) -> &str {
    &self.pending
  }

  pub fn emails(&self) -> &[String] {
    &self.emails
  }

  pub fn error(
    &self
  ) -> Option<&FormError> {
    self.error.as_ref()
  }

  /// Typing replaces the pending input
  /// and drops any error on display.
  pub fn set_pending(
    &mut self,
    value: impl Into<String>
  ) {
    self.pending = value.into();
    self.error = None;
  }

  pub fn set_error(
    &mut self,
    error: FormError
  ) {
    self.error = Some(error);
  }

  /// Adds every comma separated email
  /// from the pending input. Blank
  /// input is ignored. Returns how many
  /// emails were appended.
  pub fn add_from_input(
    &mut self
  ) -> Result<usize, FormError> {
    if self.pending.trim().is_empty() {
      return Ok(0);
    }
    self.merge_pending()
  }

  /// Like [`Self::add_from_input`] but
  /// also runs on blank input, so a
  /// submit always leaves the pending
  /// field and error slot cleared on
  /// success.
  pub fn merge_pending(
    &mut self
  ) -> Result<usize, FormError> {
    let parts =
      split_email_input(&self.pending);
    let invalid = invalid_emails(&parts);
    if !invalid.is_empty() {
      debug!(
        invalid = ?invalid,
        "rejected pending emails"
      );
      let error =
        FormError::InvalidEmails(invalid);
      self.error = Some(error.clone());
      return Err(error);
    }

    let added = parts.len();
    self.emails.extend(parts);
    self.pending.clear();
    self.error = None;
    debug!(
      added,
      total = self.emails.len(),
      "merged pending emails"
    );
    Ok(added)
  }

  pub fn remove_at(
    &mut self,
    index: usize
  ) -> Option<String> {
    (index < self.emails.len())
      .then(|| self.emails.remove(index))
  }

  /// Returns `true` when the key was
  /// consumed and the caller must
  /// suppress its default action.
  pub fn handle_key(
    &mut self,
    key: &str
  ) -> bool {
    if key != COMMIT_KEY {
      return false;
    }
    // Failures stay in the error slot.
    let _ = self.add_from_input();
    true
  }
}
