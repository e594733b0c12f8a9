use taskboard_shared::{
  Task,
  TaskStatus
};
use tracing::{
  debug,
  info
};

use crate::store::TaskStore;

pub const EMPTY_LIST_MESSAGE: &str =
  "No tasks available.";
pub const DEFAULT_PREVIEW_CHARS: usize =
  30;
const PREVIEW_ELLIPSIS: &str = "...";

/// First `limit` characters followed by
/// `...` when the text is longer, else
/// the text unchanged.
pub fn preview_description(
  text: &str,
  limit: usize
) -> String {
  match text.char_indices().nth(limit) {
    | Some((cut, _)) => {
      format!(
        "{}{PREVIEW_ELLIPSIS}",
        &text[..cut]
      )
    }
    | None => text.to_string()
  }
}

pub fn position_of(
  tasks: &[Task],
  id: &str
) -> Option<usize> {
  tasks
    .iter()
    .position(|task| task.id == id)
}

/// Returns `false` without writing when
/// no stored task has `id`.
#[tracing::instrument(skip(store))]
pub fn change_status(
  store: &TaskStore,
  id: &str,
  status: TaskStatus
) -> anyhow::Result<bool> {
  let mut tasks = store.load_all()?;
  let Some(index) = position_of(&tasks, id)
  else {
    debug!("status change for unknown task");
    return Ok(false);
  };

  tasks[index].status = status;
  store.save_all(&tasks)?;
  info!("changed task status");
  Ok(true)
}

/// Returns `false` without writing when
/// no stored task has `id`.
#[tracing::instrument(skip(store))]
pub fn delete_task(
  store: &TaskStore,
  id: &str
) -> anyhow::Result<bool> {
  let mut tasks = store.load_all()?;
  let Some(index) = position_of(&tasks, id)
  else {
    debug!("delete for unknown task");
    return Ok(false);
  };

  let removed = tasks.remove(index);
  store.save_all(&tasks)?;
  info!(
    title = %removed.title,
    remaining = tasks.len(),
    "deleted task"
  );
  Ok(true)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_descriptions_are_unchanged() {
    assert_eq!(
      preview_description("", 30),
      ""
    );
    let exact = "a".repeat(30);
    assert_eq!(
      preview_description(&exact, 30),
      exact
    );
  }

  #[test]
  fn long_descriptions_are_cut_with_ellipsis(
  ) {
    let long = "abcdefghij".repeat(4);
    assert_eq!(
      preview_description(&long, 30),
      format!("{}...", &long[..30])
    );
  }

  #[test]
  fn preview_counts_characters_not_bytes() {
    let text = "é".repeat(31);
    let preview =
      preview_description(&text, 30);
    assert_eq!(
      preview,
      format!("{}...", "é".repeat(30))
    );
  }
}
