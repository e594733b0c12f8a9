use taskboard_core::{
  CreateTaskForm,
  TaskDraft
};
use yew::{
  Callback,
  Html,
  SubmitEvent,
  function_component,
  html,
  use_context,
  use_state
};
use yew_router::prelude::use_navigator;

use super::TaskFields;
use crate::app::{
  AppContext,
  Route,
  ui_debug
};

#[function_component(CreateTaskPage)]
pub fn create_task_page() -> Html {
  let context = use_context::<AppContext>();
  let navigator = use_navigator();
  let form = use_state(CreateTaskForm::new);

  let on_draft_change = {
    let form = form.clone();
    Callback::from(
      move |draft: TaskDraft| {
        let mut next = (*form).clone();
        next.draft = draft;
        form.set(next);
      }
    )
  };

  let onsubmit = {
    let form = form.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        let Some(context) = context.as_ref()
        else {
          tracing::error!("create form rendered without app context");
          return;
        };

        let mut next = (*form).clone();
        match next.submit(&context.store) {
          | Ok(task) => {
            ui_debug("task.create", &task.id);
            form.set(next);
            if let Some(navigator) =
              navigator.as_ref()
            {
              navigator.push(&Route::List);
            }
          }
          | Err(error) => {
            ui_debug(
              "task.create.rejected",
              &error.to_string()
            );
            form.set(next);
          }
        }
      }
    )
  };

  html! {
      <div class="form-container" data-testid="formContainer">
          <div class="main-form">
              <form {onsubmit}>
                  <h1 class="form-heading">{ "Add a new Task" }</h1>
                  <TaskFields draft={form.draft.clone()} on_change={on_draft_change} />
                  <div class="submit-button-row">
                      <button type="submit">{ "Create" }</button>
                  </div>
              </form>
          </div>
      </div>
  }
}
