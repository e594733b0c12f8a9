use taskboard_core::TaskDraft;
use taskboard_core::email_list::EmailListEditor;
use taskboard_shared::TaskStatus;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::{
  EmailListField,
  StatusSelect
};

#[derive(Properties, PartialEq)]
pub struct TaskFieldsProps {
  pub draft:     TaskDraft,
  pub on_change: Callback<TaskDraft>
}

/// Title, description, completion,
/// status and assignee inputs shared by
/// the create and update forms.
#[function_component(TaskFields)]
pub fn task_fields(
  props: &TaskFieldsProps
) -> Html {
  let draft = props.draft.clone();
  let on_change = props.on_change.clone();

  let on_title_input = {
    let draft = draft.clone();
    let on_change = on_change.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next = draft.clone();
        next.title = input.value();
        on_change.emit(next);
      }
    )
  };
  let on_description_input = {
    let draft = draft.clone();
    let on_change = on_change.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        let mut next = draft.clone();
        next.description = input.value();
        on_change.emit(next);
      }
    )
  };
  let on_completed_change = {
    let draft = draft.clone();
    let on_change = on_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next = draft.clone();
        next.completed = input.checked();
        on_change.emit(next);
      }
    )
  };
  let on_status_change = {
    let draft = draft.clone();
    let on_change = on_change.clone();
    Callback::from(
      move |status: TaskStatus| {
        let mut next = draft.clone();
        next.status = status;
        on_change.emit(next);
      }
    )
  };
  let on_emails_change = {
    let draft = draft.clone();
    Callback::from(
      move |emails: EmailListEditor| {
        let mut next = draft.clone();
        next.emails = emails;
        on_change.emit(next);
      }
    )
  };

  html! {
      <div class="task-form">
          <div class="left-column">
              <div class="align-same-line">
                  <label>{ "Task Title:" }</label>
                  <input
                      type="text"
                      class="title-input-field"
                      value={draft.title.clone()}
                      oninput={on_title_input}
                      data-testid="titleInputField"
                  />
              </div>
              <div class="align-same-line">
                  <label>{ "Task Description:" }</label>
                  <textarea
                      class="description-text-area"
                      value={draft.description.clone()}
                      oninput={on_description_input}
                      data-testid="descriptionTextarea"
                  />
              </div>
          </div>
          <div class="right-column">
              <div class="align-same-line">
                  <label>{ "Completed:" }</label>
                  <input
                      type="checkbox"
                      class="completed-check-box"
                      checked={draft.completed}
                      onchange={on_completed_change}
                      data-testid="completedCheckbox"
                  />
              </div>
              <div class="align-same-line">
                  <label>{ "Task Status:" }</label>
                  <StatusSelect
                      value={draft.status}
                      on_change={on_status_change}
                      test_id="taskStatusSelect"
                  />
              </div>
              <EmailListField
                  editor={draft.emails.clone()}
                  on_change={on_emails_change}
              />
              {
                  if let Some(error) = draft.error() {
                      html! { <p class="error-message" data-testid="errorMessage">{ error.to_string() }</p> }
                  } else {
                      html! {}
                  }
              }
          </div>
      </div>
  }
}
