use anyhow::Context;
use taskboard_shared::{
  Task,
  TaskStatus
};
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::email_list::EmailListEditor;
use crate::error::FormError;
use crate::store::TaskStore;

/// In-progress field values of an open
/// form. The email editor also owns the
/// form's error slot.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String,
  pub status:      TaskStatus,
  pub completed:   bool,
  pub emails:      EmailListEditor
}

impl TaskDraft {
  pub fn from_task(task: &Task) -> Self {
    Self {
      title:       task.title.clone(),
      description: task
        .description
        .clone(),
      status:      task.status,
      completed:   task.completed,
      emails:      EmailListEditor::with_emails(
        task.emails.clone()
      )
    }
  }

  pub fn error(
    &self
  ) -> Option<&FormError> {
    self.emails.error()
  }

  fn title_is_blank(&self) -> bool {
    self.title.trim().is_empty()
  }

  fn fail(
    &mut self,
    error: FormError
  ) -> FormError {
    self.emails.set_error(error.clone());
    error
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct CreateTaskForm {
  pub draft: TaskDraft
}

impl CreateTaskForm {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pending emails are merged before
  /// the title is checked, so a blank
  /// title still leaves them in the
  /// draft.
  #[tracing::instrument(skip_all)]
  pub fn submit(
    &mut self,
    store: &TaskStore
  ) -> Result<Task, FormError> {
    self.draft.emails.merge_pending()?;

    if self.draft.title_is_blank() {
      debug!("create rejected: blank title");
      return Err(
        self
          .draft
          .fail(FormError::TitleRequired)
      );
    }

    let task = Task::new(
      self.draft.title.clone(),
      self.draft.description.clone(),
      self.draft.status,
      self.draft.emails.emails().to_vec(),
      self.draft.completed
    );

    match append_task(store, &task) {
      | Ok(total) => {
        info!(
          id = %task.id,
          total,
          "created task"
        );
        self.draft = TaskDraft::default();
        Ok(task)
      }
      | Err(err) => {
        error!(error = ?err, "failed to create task");
        Err(
          self
            .draft
            .fail(FormError::storage(&err))
        )
      }
    }
  }
}

fn append_task(
  store: &TaskStore,
  task: &Task
) -> anyhow::Result<usize> {
  let mut tasks = store.load_all()?;
  tasks.push(task.clone());
  store.save_all(&tasks)?;
  Ok(tasks.len())
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum UpdateOutcome {
  Updated(Task),
  /// No stored task carries the edited
  /// id any more; nothing was written.
  Missing
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct UpdateTaskForm {
  source:    Task,
  pub draft: TaskDraft
}

impl UpdateTaskForm {
  pub fn from_task(task: Task) -> Self {
    Self {
      draft:  TaskDraft::from_task(&task),
      source: task
    }
  }

  /// Discards every local edit and
  /// mirrors `task`.
  pub fn reset_to(&mut self, task: Task) {
    *self = Self::from_task(task);
  }

  pub fn source(&self) -> &Task {
    &self.source
  }

  #[tracing::instrument(skip_all, fields(id = %self.source.id))]
  pub fn submit(
    &mut self,
    store: &TaskStore
  ) -> Result<UpdateOutcome, FormError> {
    self.draft.emails.merge_pending()?;

    if self.draft.title_is_blank() {
      debug!("update rejected: blank title");
      self.draft.title =
        self.source.title.clone();
      return Err(
        self
          .draft
          .fail(FormError::TitleRequired)
      );
    }

    match replace_task(
      store,
      &self.source.id,
      &self.draft
    ) {
      | Ok(Some(updated)) => {
        info!("updated task");
        self.source = updated.clone();
        Ok(UpdateOutcome::Updated(updated))
      }
      | Ok(None) => {
        warn!(
          "edited task is no longer \
           stored; nothing written"
        );
        Ok(UpdateOutcome::Missing)
      }
      | Err(err) => {
        error!(error = ?err, "failed to update task");
        Err(
          self
            .draft
            .fail(FormError::storage(&err))
        )
      }
    }
  }
}

fn replace_task(
  store: &TaskStore,
  id: &str,
  draft: &TaskDraft
) -> anyhow::Result<Option<Task>> {
  let mut tasks = store.load_all()?;
  let Some(index) = tasks
    .iter()
    .position(|task| task.id == id)
  else {
    return Ok(None);
  };

  let entry = &mut tasks[index];
  entry.title = draft.title.clone();
  entry.description =
    draft.description.clone();
  entry.status = draft.status;
  entry.emails =
    draft.emails.emails().to_vec();
  entry.completed = draft.completed;
  let updated = entry.clone();

  store.save_all(&tasks).with_context(
    || format!("failed to update task {id}")
  )?;
  Ok(Some(updated))
}
