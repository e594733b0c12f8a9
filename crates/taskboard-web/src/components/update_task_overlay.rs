use taskboard_core::{
  FormError,
  TaskDraft,
  UpdateOutcome,
  UpdateTaskForm
};
use taskboard_shared::Task;
use yew::{
  Callback,
  Html,
  Properties,
  SubmitEvent,
  function_component,
  html,
  use_context,
  use_effect_with,
  use_state
};

use super::TaskFields;
use crate::app::{
  AppContext,
  ui_debug
};

#[derive(Properties, PartialEq)]
pub struct UpdateTaskOverlayProps {
  pub task:     Task,
  pub on_close: Callback<()>
}

/// The overlay closes once nothing is
/// left to edit, including when the task
/// was deleted meanwhile. Errors keep it
/// open.
pub(crate) fn closes_overlay(
  result: &Result<UpdateOutcome, FormError>
) -> bool {
  matches!(
    result,
    Ok(UpdateOutcome::Updated(_) | UpdateOutcome::Missing)
  )
}

#[function_component(UpdateTaskOverlay)]
pub fn update_task_overlay(
  props: &UpdateTaskOverlayProps
) -> Html {
  let context = use_context::<AppContext>();
  let form = {
    let task = props.task.clone();
    use_state(move || {
      UpdateTaskForm::from_task(task)
    })
  };

  {
    let form = form.clone();
    use_effect_with(
      props.task.clone(),
      move |task| {
        if form.source() != task {
          let mut next = (*form).clone();
          next.reset_to(task.clone());
          form.set(next);
        }
      }
    );
  }

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
    let on_close = props.on_close.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        let Some(context) = context.as_ref()
        else {
          tracing::error!("update form rendered without app context");
          return;
        };

        let mut next = (*form).clone();
        let result = next.submit(&context.store);
        match &result {
          | Ok(UpdateOutcome::Updated(task)) => {
            ui_debug("task.update", &task.id);
          }
          | Ok(UpdateOutcome::Missing) => {
            ui_debug(
              "task.update.missing",
              &next.source().id
            );
          }
          | Err(error) => {
            ui_debug(
              "task.update.rejected",
              &error.to_string()
            );
          }
        }

        if closes_overlay(&result) {
          on_close.emit(());
        } else {
          form.set(next);
        }
      }
    )
  };

  let on_cancel = {
    let on_close = props.on_close.clone();
    Callback::from(move |_| {
      on_close.emit(())
    })
  };

  html! {
      <div class="update-task-overlay" data-testid="updateTaskOverlay">
          <div class="update-task-popup" data-testid="updateTaskPopup">
              <form {onsubmit} data-testid="updateTaskForm">
                  <h1 class="form-heading">{ "Update Task" }</h1>
                  <TaskFields draft={form.draft.clone()} on_change={on_draft_change} />
                  <div class="submit-button-row">
                      <button type="submit" data-testid="updateButton">{ "Update" }</button>
                      <button type="button" onclick={on_cancel} data-testid="cancelButton">
                          { "Cancel" }
                      </button>
                  </div>
              </form>
          </div>
      </div>
  }
}
