use taskboard_core::list::preview_description;
use taskboard_shared::{
  Task,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  EmailBadge,
  StatusSelect
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:             Task,
  pub index:            usize,
  pub preview_chars:    usize,
  pub on_status_change:
    Callback<(String, TaskStatus)>,
  pub on_edit:          Callback<Task>,
  pub on_delete:        Callback<String>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let index = props.index;
  let on_status_change = {
    let on_status_change =
      props.on_status_change.clone();
    let id = props.task.id.clone();
    Callback::from(
      move |status: TaskStatus| {
        on_status_change
          .emit((id.clone(), status))
      }
    )
  };
  let on_edit = {
    let on_edit = props.on_edit.clone();
    let task = props.task.clone();
    Callback::from(move |_| {
      on_edit.emit(task.clone())
    })
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = props.task.id.clone();
    Callback::from(move |_| {
      on_delete.emit(id.clone())
    })
  };

  let description = preview_description(
    &props.task.description,
    props.preview_chars
  );

  html! {
      <div class="container task-item" data-testid={format!("taskItem-{index}")}>
          <div class="info-column">
              <div class="task-row">
                  <h2 class="task-title" data-testid={format!("taskTitle-{index}")}>
                      { &props.task.title }
                  </h2>
                  <button
                      type="button"
                      class="edit-button"
                      onclick={on_edit}
                      data-testid={format!("editButton-{index}")}
                  >
                      { "Edit" }
                  </button>
              </div>
              <div class="row">
                  <p class="task-meta">
                      <span class="field-label">{ "Task Description: " }</span>
                      <span data-testid={format!("taskDescription-{index}")}>{ description }</span>
                  </p>
              </div>
              <div class="row">
                  <p class="task-meta">
                      <span class="field-label">{ "Status: " }</span>
                      <StatusSelect
                          value={props.task.status}
                          on_change={on_status_change}
                          test_id={format!("taskStatusSelect-{index}")}
                      />
                  </p>
              </div>
              <div class="row">
                  <div class="task-meta">
                      <span class="field-label">{ "Assignees: " }</span>
                      {
                          for props.task.emails.iter().enumerate().map(|(email_index, email)| html! {
                              <EmailBadge
                                  email={email.clone()}
                                  test_id={format!("emailItem-{index}-{email_index}")}
                              />
                          })
                      }
                  </div>
              </div>
              <div class="row actions">
                  <button
                      type="button"
                      class="delete-button"
                      onclick={on_delete}
                      data-testid={format!("deleteButton-{index}")}
                  >
                      { "Delete Task" }
                  </button>
              </div>
          </div>
      </div>
  }
}
