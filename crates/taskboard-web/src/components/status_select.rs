use taskboard_shared::TaskStatus;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusSelectProps {
  pub value:     TaskStatus,
  pub on_change: Callback<TaskStatus>,
  #[prop_or_default]
  pub test_id:   String
}

#[function_component(StatusSelect)]
pub fn status_select(
  props: &StatusSelectProps
) -> Html {
  let on_change = props.on_change.clone();
  let onchange =
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      let value = select.value();
      match TaskStatus::from_label(&value) {
        | Some(status) => {
          on_change.emit(status)
        }
        | None => {
          tracing::warn!(value, "ignoring unknown task status");
        }
      }
    });

  html! {
      <select {onchange} data-testid={props.test_id.clone()}>
          {
              for TaskStatus::ALL.into_iter().map(|status| html! {
                  <option value={status.label()} selected={status == props.value}>
                      { status.label() }
                  </option>
              })
          }
      </select>
  }
}
