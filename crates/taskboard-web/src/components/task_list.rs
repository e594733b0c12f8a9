use taskboard_core::TaskStore;
use taskboard_core::list::{
  DEFAULT_PREVIEW_CHARS,
  EMPTY_LIST_MESSAGE,
  change_status,
  delete_task
};
use taskboard_shared::{
  Task,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_context,
  use_effect_with,
  use_state
};

use super::{
  TaskListRow,
  UpdateTaskOverlay
};
use crate::app::{
  AppContext,
  ui_debug
};

/// What the list area shows below the
/// error banner.
#[derive(Debug, PartialEq)]
pub(crate) enum ListBody<'a> {
  Empty(&'static str),
  Rows(&'a [Task])
}

pub(crate) fn list_body(
  tasks: &[Task]
) -> ListBody<'_> {
  if tasks.is_empty() {
    ListBody::Empty(EMPTY_LIST_MESSAGE)
  } else {
    ListBody::Rows(tasks)
  }
}

/// Reads the store for a fresh list. A
/// failed read shows as an empty list
/// plus the error text.
pub(crate) fn load_task_list(
  store: &TaskStore
) -> (Vec<Task>, Option<String>) {
  match store.load_all() {
    | Ok(loaded) => {
      tracing::info!(
        count = loaded.len(),
        "loaded task list"
      );
      (loaded, None)
    }
    | Err(error) => {
      tracing::error!(error = ?error, "failed to load task list");
      (Vec::new(), Some(format!("{error:#}")))
    }
  }
}

/// Renders every stored task. The list
/// reloads on mount and then follows the
/// store's change notifications.
#[function_component(TaskListView)]
pub fn task_list_view() -> Html {
  let context = use_context::<AppContext>();
  let tasks = use_state(Vec::<Task>::new);
  let store_error =
    use_state(|| None::<String>);
  let editing =
    use_state(|| None::<Task>);

  {
    let tasks = tasks.clone();
    let store_error = store_error.clone();
    let context = context.clone();
    use_effect_with((), move |_| {
      let subscription =
        context.as_ref().map(|context| {
          let (loaded, error) =
            load_task_list(&context.store);
          tasks.set(loaded);
          store_error.set(error);

          let tasks = tasks.clone();
          let store_error = store_error.clone();
          context.store.subscribe(move |saved| {
            tasks.set(saved.to_vec());
            store_error.set(None);
          })
        });

      move || drop(subscription)
    });
  }

  let on_status_change = {
    let context = context.clone();
    let store_error = store_error.clone();
    Callback::from(
      move |(id, status): (String, TaskStatus)| {
        let Some(context) = context.as_ref()
        else {
          return;
        };
        ui_debug(
          "task.status",
          &format!("{id} -> {status}")
        );
        if let Err(error) =
          change_status(&context.store, &id, status)
        {
          tracing::error!(error = ?error, %id, "failed to change task status");
          store_error
            .set(Some(format!("{error:#}")));
        }
      }
    )
  };

  let on_delete = {
    let context = context.clone();
    let store_error = store_error.clone();
    Callback::from(move |id: String| {
      let Some(context) = context.as_ref()
      else {
        return;
      };
      ui_debug("task.delete", &id);
      if let Err(error) =
        delete_task(&context.store, &id)
      {
        tracing::error!(error = ?error, %id, "failed to delete task");
        store_error
          .set(Some(format!("{error:#}")));
      }
    })
  };

  let on_edit = {
    let editing = editing.clone();
    Callback::from(move |task: Task| {
      ui_debug("task.edit.open", &task.id);
      editing.set(Some(task));
    })
  };

  let on_close = {
    let editing = editing.clone();
    Callback::from(move |()| {
      editing.set(None);
    })
  };

  let preview_chars = context
    .as_ref()
    .map(|context| {
      context.config.description_preview_chars
    })
    .unwrap_or(DEFAULT_PREVIEW_CHARS);

  html! {
      <>
          {
              if let Some(task) = (*editing).clone() {
                  html! { <UpdateTaskOverlay task={task} on_close={on_close} /> }
              } else {
                  html! {}
              }
          }
          <div class="tasks-container" data-testid="tasksContainer">
              {
                  if let Some(error) = (*store_error).clone() {
                      html! { <div class="store-error" data-testid="storeError">{ error }</div> }
                  } else {
                      html! {}
                  }
              }
              {
                  match list_body(&tasks) {
                      ListBody::Empty(message) => html! {
                          <div class="container">
                              <p>{ message }</p>
                          </div>
                      },
                      ListBody::Rows(rows) => html! {
                          <>
                              {
                                  for rows.iter().cloned().enumerate().map(|(index, task)| {
                                      let key = task.id.clone();
                                      html! {
                                          <TaskListRow
                                              key={key}
                                              task={task}
                                              index={index}
                                              preview_chars={preview_chars}
                                              on_status_change={on_status_change.clone()}
                                              on_edit={on_edit.clone()}
                                              on_delete={on_delete.clone()}
                                          />
                                      }
                                  })
                              }
                          </>
                      }
                  }
              }
          </div>
      </>
  }
}

#[cfg(test)]
mod tests {
  use taskboard_core::{
    CreateTaskForm,
    MemoryRepository
  };

  use super::*;

  fn create(
    store: &TaskStore,
    title: &str
  ) -> Task {
    let mut form = CreateTaskForm::new();
    form.draft.title = title.to_string();
    form.submit(store).expect("create task")
  }

  #[test]
  fn empty_store_shows_the_empty_message(
  ) {
    let store =
      TaskStore::new(MemoryRepository::new());

    let (tasks, error) =
      load_task_list(&store);

    assert!(error.is_none());
    assert_eq!(
      list_body(&tasks),
      ListBody::Empty("No tasks available.")
    );
  }

  #[test]
  fn stored_tasks_render_as_rows_in_order(
  ) {
    let store =
      TaskStore::new(MemoryRepository::new());
    let first = create(&store, "First");
    let second = create(&store, "Second");

    let (tasks, error) =
      load_task_list(&store);

    assert!(error.is_none());
    assert_eq!(
      list_body(&tasks),
      ListBody::Rows(&[first, second])
    );
  }

  #[test]
  fn deleting_the_last_row_empties_the_list(
  ) {
    let store =
      TaskStore::new(MemoryRepository::new());
    let only = create(&store, "Only");

    assert!(
      delete_task(&store, &only.id)
        .expect("delete")
    );

    let (tasks, _) = load_task_list(&store);
    assert_eq!(
      list_body(&tasks),
      ListBody::Empty(EMPTY_LIST_MESSAGE)
    );
  }

  #[test]
  fn unreadable_store_shows_error_over_empty_list(
  ) {
    let store = TaskStore::new(
      MemoryRepository::with_document(
        "{not json"
      )
    );

    let (tasks, error) =
      load_task_list(&store);

    let error = error.expect("load error");
    assert!(error.contains(
      "stored tasks are not a valid JSON task array"
    ));
    assert_eq!(
      list_body(&tasks),
      ListBody::Empty(EMPTY_LIST_MESSAGE)
    );
  }
}
