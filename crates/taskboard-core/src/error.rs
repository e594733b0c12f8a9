/// User-facing validation and storage
/// failures. A form holds at most one
/// of these at a time.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum FormError {
  #[error(
    "Invalid email format: {}",
    .0.join(", ")
  )]
  InvalidEmails(Vec<String>),
  #[error("Task title is required.")]
  TitleRequired,
  #[error("Could not save tasks: {0}")]
  Storage(String)
}

impl FormError {
  pub fn storage(
    error: &anyhow::Error
  ) -> Self {
    Self::Storage(format!("{error:#}"))
  }
}
