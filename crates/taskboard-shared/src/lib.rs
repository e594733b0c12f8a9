use std::fmt;

use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum TaskStatus {
  #[default]
  #[serde(rename = "To Do")]
  ToDo,
  #[serde(rename = "In Progress")]
  InProgress,
  #[serde(rename = "Done")]
  Done,
  #[serde(rename = "On Hold")]
  OnHold
}

impl TaskStatus {
  /// Every status in the order the
  /// selectors list them.
  pub const ALL: [Self; 4] = [
    Self::ToDo,
    Self::InProgress,
    Self::Done,
    Self::OnHold
  ];

  pub fn label(self) -> &'static str {
    match self {
      | Self::ToDo => "To Do",
      | Self::InProgress => {
        "In Progress"
      }
      | Self::Done => "Done",
      | Self::OnHold => "On Hold"
    }
  }

  pub fn from_label(
    label: &str
  ) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|status| {
        status.label() == label
      })
  }
}

impl fmt::Display for TaskStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// One persisted task. Field names on
/// the wire match the stored `tasks`
/// document.
///
/// `id` is opaque: new tasks get a v4
/// UUID string, but any stored string
/// is accepted and compared verbatim.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:          String,
  #[serde(rename = "taskTitle")]
  pub title:       String,
  #[serde(
    rename = "taskDescription",
    default
  )]
  pub description: String,
  #[serde(rename = "taskStatus", default)]
  pub status:      TaskStatus,
  #[serde(rename = "emailsList", default)]
  pub emails:      Vec<String>,
  #[serde(
    rename = "taskCompleted",
    default
  )]
  pub completed:   bool
}

impl Task {
  pub fn new(
    title: String,
    description: String,
    status: TaskStatus,
    emails: Vec<String>,
    completed: bool
  ) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      title,
      description,
      status,
      emails,
      completed
    }
  }
}
