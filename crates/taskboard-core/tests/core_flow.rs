use std::cell::RefCell;
use std::rc::Rc;

use taskboard_core::file_store::JsonFileRepository;
use taskboard_core::list::{
  change_status,
  delete_task
};
use taskboard_core::{
  CreateTaskForm,
  MemoryRepository,
  Task,
  TaskRepository,
  TaskStatus,
  TaskStore,
  UpdateOutcome,
  UpdateTaskForm
};
use tempfile::tempdir;

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env()
    )
    .with_test_writer()
    .try_init();
}

fn create(
  store: &TaskStore,
  title: &str,
  emails: &str
) -> Task {
  let mut form = CreateTaskForm::new();
  form.draft.title = title.to_string();
  form.draft.emails.set_pending(emails);
  form.submit(store).expect("create task")
}

#[test]
fn file_store_round_trip_through_forms() {
  init_tracing();
  let temp = tempdir().expect("tempdir");
  let path = temp
    .path()
    .join("nested")
    .join("tasks.json");
  let store = TaskStore::new(
    JsonFileRepository::open(&path)
      .expect("open task file")
  );

  assert!(
    store.load_all().expect("load").is_empty()
  );

  let first =
    create(&store, "Write notes", "x@y.com");
  let second =
    create(&store, "Review", "a@b.io, c@d.io");

  let reopened =
    JsonFileRepository::open(&path)
      .expect("reopen task file");
  let tasks =
    reopened.load_all().expect("load");
  assert_eq!(
    tasks,
    vec![first.clone(), second]
  );

  let raw = std::fs::read_to_string(&path)
    .expect("read");
  assert!(
    raw.contains("\"taskTitle\":\"Write notes\"")
  );
  assert!(
    raw.contains("\"taskStatus\":\"To Do\"")
  );
  assert!(
    raw.contains("\"emailsList\":[\"x@y.com\"]")
  );
  assert!(
    raw.contains("\"taskCompleted\":false")
  );

  let mut edit =
    UpdateTaskForm::from_task(first.clone());
  edit.draft.description =
    "Now with details".to_string();
  let outcome =
    edit.submit(&store).expect("update");
  let UpdateOutcome::Updated(updated) = outcome
  else {
    panic!("task should still be stored");
  };
  assert_eq!(updated.id, first.id);
  assert_eq!(
    store.load_all().expect("load")[0]
      .description,
    "Now with details"
  );
}

#[test]
fn corrupt_task_file_is_reported() {
  let temp = tempdir().expect("tempdir");
  let path = temp.path().join("tasks.json");
  std::fs::write(&path, "[{").expect("write");

  let repo = JsonFileRepository::open(&path)
    .expect("open");
  let error =
    repo.load_all().expect_err("corrupt");
  assert!(
    format!("{error:#}")
      .contains("failed parsing")
  );
  assert_eq!(
    std::fs::read_to_string(&path)
      .expect("read"),
    "[{"
  );
}

#[test]
fn status_change_persists_only_for_the_matching_task(
) {
  let store =
    TaskStore::new(MemoryRepository::new());
  let a = create(&store, "A", "");
  let b = create(&store, "B", "b@b.io");
  let c = create(&store, "C", "");

  assert!(
    change_status(
      &store,
      &b.id,
      TaskStatus::InProgress
    )
    .expect("change status")
  );

  let reloaded =
    store.load_all().expect("reload");
  assert_eq!(reloaded[0], a);
  assert_eq!(
    reloaded[1].status,
    TaskStatus::InProgress
  );
  assert_eq!(reloaded[1].title, b.title);
  assert_eq!(reloaded[1].emails, b.emails);
  assert_eq!(reloaded[2], c);
}

#[test]
fn tasks_sharing_a_title_are_changed_one_at_a_time(
) {
  let store =
    TaskStore::new(MemoryRepository::new());
  let first = create(&store, "Same", "");
  let second = create(&store, "Same", "");

  assert!(
    delete_task(&store, &second.id)
      .expect("delete")
  );
  assert_eq!(
    store.load_all().expect("reload"),
    vec![first.clone()]
  );

  assert!(
    change_status(
      &store,
      &first.id,
      TaskStatus::Done
    )
    .expect("change status")
  );
  assert!(
    !change_status(
      &store,
      &second.id,
      TaskStatus::OnHold
    )
    .expect("unknown id")
  );
  assert_eq!(
    store.load_all().expect("reload")[0]
      .status,
    TaskStatus::Done
  );
}

#[test]
fn deleting_the_only_task_notifies_an_empty_list(
) {
  let repo = Rc::new(MemoryRepository::new());
  let store =
    TaskStore::new(Rc::clone(&repo));
  let only = create(&store, "Only", "");

  let seen = Rc::new(RefCell::new(Vec::new()));
  let seen_in_listener = Rc::clone(&seen);
  let _subscription =
    store.subscribe(move |tasks| {
      seen_in_listener
        .borrow_mut()
        .push(tasks.to_vec());
    });

  assert!(
    delete_task(&store, &only.id)
      .expect("delete")
  );
  assert!(
    store.load_all().expect("reload").is_empty()
  );
  assert_eq!(repo.document().as_deref(), Some("[]"));
  assert_eq!(*seen.borrow(), vec![Vec::<Task>::new()]);
}

#[test]
fn last_write_wins_between_stale_forms() {
  let store =
    TaskStore::new(MemoryRepository::new());
  let task = create(&store, "Shared", "");

  let mut left =
    UpdateTaskForm::from_task(task.clone());
  let mut right =
    UpdateTaskForm::from_task(task);
  left.draft.description = "left".to_string();
  right.draft.status = TaskStatus::OnHold;

  left.submit(&store).expect("left update");
  right.submit(&store).expect("right update");

  let stored =
    &store.load_all().expect("reload")[0];
  assert_eq!(stored.status, TaskStatus::OnHold);
  assert!(stored.description.is_empty());
}
