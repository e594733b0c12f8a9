use std::cell::RefCell;
use std::fmt;
use std::rc::{
  Rc,
  Weak
};

use anyhow::Context;
use taskboard_shared::Task;
use tracing::{
  debug,
  trace
};

/// Whole-document access to the stored
/// task sequence. There are no partial
/// updates: callers load everything,
/// change it, and save everything back.
pub trait TaskRepository {
  fn load_all(
    &self
  ) -> anyhow::Result<Vec<Task>>;

  fn save_all(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()>;
}

impl<R> TaskRepository for Rc<R>
where
  R: TaskRepository + ?Sized
{
  fn load_all(
    &self
  ) -> anyhow::Result<Vec<Task>> {
    (**self).load_all()
  }

  fn save_all(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    (**self).save_all(tasks)
  }
}

/// Absent or blank documents are an
/// empty store.
pub fn decode_tasks(
  raw: Option<&str>
) -> anyhow::Result<Vec<Task>> {
  let Some(raw) = raw else {
    return Ok(vec![]);
  };
  if raw.trim().is_empty() {
    return Ok(vec![]);
  }

  let tasks: Vec<Task> =
    serde_json::from_str(raw).context(
      "stored tasks are not a valid \
       JSON task array"
    )?;
  trace!(
    count = tasks.len(),
    "decoded tasks"
  );
  Ok(tasks)
}

pub fn encode_tasks(
  tasks: &[Task]
) -> anyhow::Result<String> {
  serde_json::to_string(tasks)
    .context("failed to encode tasks")
}

/// Keeps the encoded document in memory,
/// the same shape a browser storage slot
/// holds.
#[derive(Debug, Default)]
pub struct MemoryRepository {
  document: RefCell<Option<String>>
}

impl MemoryRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_document(
    raw: impl Into<String>
  ) -> Self {
    Self {
      document: RefCell::new(Some(
        raw.into()
      ))
    }
  }

  pub fn document(
    &self
  ) -> Option<String> {
    self.document.borrow().clone()
  }
}

impl TaskRepository for MemoryRepository {
  fn load_all(
    &self
  ) -> anyhow::Result<Vec<Task>> {
    decode_tasks(
      self.document.borrow().as_deref()
    )
  }

  fn save_all(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let encoded = encode_tasks(tasks)?;
    *self.document.borrow_mut() =
      Some(encoded);
    Ok(())
  }
}

type Listener = Rc<dyn Fn(&[Task])>;

#[derive(Default)]
struct Listeners {
  next_id: u64,
  entries: Vec<(u64, Listener)>
}

/// A repository plus change
/// notifications. Every successful
/// save hands the full saved sequence to
/// each subscriber.
pub struct TaskStore {
  repository: Box<dyn TaskRepository>,
  listeners:  Rc<RefCell<Listeners>>
}

impl TaskStore {
  pub fn new(
    repository: impl TaskRepository
    + 'static
  ) -> Self {
    Self {
      repository: Box::new(repository),
      listeners:  Rc::default()
    }
  }

  #[tracing::instrument(skip(self))]
  pub fn load_all(
    &self
  ) -> anyhow::Result<Vec<Task>> {
    let tasks = self
      .repository
      .load_all()
      .context("failed to load tasks")?;
    debug!(
      count = tasks.len(),
      "loaded tasks"
    );
    Ok(tasks)
  }

  #[tracing::instrument(skip(self, tasks), fields(count = tasks.len()))]
  pub fn save_all(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    self
      .repository
      .save_all(tasks)
      .context("failed to save tasks")?;
    debug!("saved tasks");
    self.notify(tasks);
    Ok(())
  }

  #[must_use = "dropping the \
                subscription \
                unsubscribes"]
  pub fn subscribe(
    &self,
    listener: impl Fn(&[Task]) + 'static
  ) -> Subscription {
    let mut listeners =
      self.listeners.borrow_mut();
    let id = listeners.next_id;
    listeners.next_id += 1;
    listeners
      .entries
      .push((id, Rc::new(listener)));
    debug!(
      id,
      active = listeners.entries.len(),
      "store subscriber added"
    );

    Subscription {
      id,
      listeners: Rc::downgrade(
        &self.listeners
      )
    }
  }

  pub fn subscriber_count(
    &self
  ) -> usize {
    self.listeners.borrow().entries.len()
  }

  fn notify(&self, tasks: &[Task]) {
    // Listeners may subscribe or drop
    // subscriptions while running.
    let snapshot: Vec<Listener> = self
      .listeners
      .borrow()
      .entries
      .iter()
      .map(|(_, listener)| {
        Rc::clone(listener)
      })
      .collect();
    for listener in snapshot {
      listener(tasks);
    }
  }
}

impl fmt::Debug for TaskStore {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("TaskStore")
      .field(
        "subscribers",
        &self.subscriber_count()
      )
      .finish_non_exhaustive()
  }
}

/// Unregisters its listener when
/// dropped.
pub struct Subscription {
  id:        u64,
  listeners: Weak<RefCell<Listeners>>
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(listeners) =
      self.listeners.upgrade()
    {
      listeners
        .borrow_mut()
        .entries
        .retain(|(id, _)| *id != self.id);
      debug!(
        id = self.id,
        "store subscriber removed"
      );
    }
  }
}

impl fmt::Debug for Subscription {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("Subscription")
      .field("id", &self.id)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use taskboard_shared::TaskStatus;

  use super::*;

  struct BrokenRepository;

  impl TaskRepository for BrokenRepository {
    fn load_all(
      &self
    ) -> anyhow::Result<Vec<Task>> {
      Ok(vec![])
    }

    fn save_all(
      &self,
      _tasks: &[Task]
    ) -> anyhow::Result<()> {
      anyhow::bail!("storage is full")
    }
  }

  fn task(title: &str) -> Task {
    Task::new(
      title.to_string(),
      String::new(),
      TaskStatus::ToDo,
      vec![],
      false
    )
  }

  #[test]
  fn absent_and_blank_documents_are_empty(
  ) {
    assert!(
      decode_tasks(None)
        .expect("absent")
        .is_empty()
    );
    assert!(
      decode_tasks(Some("  "))
        .expect("blank")
        .is_empty()
    );
    assert!(
      decode_tasks(Some("[]"))
        .expect("empty array")
        .is_empty()
    );
  }

  #[test]
  fn corrupt_documents_are_errors() {
    let repo = MemoryRepository::with_document(
      "{not json"
    );
    let error = repo
      .load_all()
      .expect_err("corrupt store");
    assert!(
      error
        .to_string()
        .contains("not a valid JSON")
    );
  }

  #[test]
  fn memory_repository_stores_a_json_array(
  ) {
    let repo = MemoryRepository::new();
    assert!(repo.document().is_none());

    let saved = vec![task("one")];
    repo.save_all(&saved).expect("save");

    let raw =
      repo.document().expect("document");
    assert!(raw.starts_with('['));
    assert!(
      raw.contains("\"taskTitle\":\"one\"")
    );
    assert_eq!(
      repo.load_all().expect("load"),
      saved
    );
  }

  #[test]
  fn subscribers_receive_saved_sequence()
  {
    let store =
      TaskStore::new(MemoryRepository::new());
    let seen = Rc::new(Cell::new(0_usize));
    let seen_in_listener = Rc::clone(&seen);
    let subscription =
      store.subscribe(move |tasks| {
        seen_in_listener.set(tasks.len());
      });

    store
      .save_all(&[task("a"), task("b")])
      .expect("save");
    assert_eq!(seen.get(), 2);
    assert_eq!(store.subscriber_count(), 1);

    drop(subscription);
    assert_eq!(store.subscriber_count(), 0);

    store
      .save_all(&[task("a")])
      .expect("save");
    assert_eq!(seen.get(), 2);
  }

  #[test]
  fn failed_saves_do_not_notify() {
    let store =
      TaskStore::new(BrokenRepository);
    let calls = Rc::new(Cell::new(0_u32));
    let calls_in_listener =
      Rc::clone(&calls);
    let _subscription =
      store.subscribe(move |_| {
        calls_in_listener
          .set(calls_in_listener.get() + 1);
      });

    let error = store
      .save_all(&[task("a")])
      .expect_err("save fails");
    assert!(
      format!("{error:#}")
        .contains("storage is full")
    );
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn shared_repository_handles_see_the_same_document(
  ) {
    let repo =
      Rc::new(MemoryRepository::new());
    let store =
      TaskStore::new(Rc::clone(&repo));

    store
      .save_all(&[task("shared")])
      .expect("save");
    assert_eq!(
      repo.load_all().expect("load").len(),
      1
    );
  }
}
