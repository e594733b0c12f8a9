use taskboard_core::email::badge_initial;
use taskboard_core::email_list::EmailListEditor;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmailListFieldProps {
  pub editor:    EmailListEditor,
  pub on_change: Callback<EmailListEditor>
}

#[function_component(EmailListField)]
pub fn email_list_field(
  props: &EmailListFieldProps
) -> Html {
  let oninput = {
    let editor = props.editor.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        let mut next = editor.clone();
        next.set_pending(input.value());
        on_change.emit(next);
      }
    )
  };

  let onkeydown = {
    let editor = props.editor.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: web_sys::KeyboardEvent| {
        let mut next = editor.clone();
        if next.handle_key(&e.key()) {
          e.prevent_default();
          on_change.emit(next);
        }
      }
    )
  };

  html! {
      <>
          <div class="align-email-items">
              <label>{ "Emails:" }</label>
              <textarea
                  class="email-input"
                  value={props.editor.pending().to_string()}
                  placeholder="name@example.com, other@example.com"
                  {oninput}
                  {onkeydown}
                  data-testid="emailInput"
              />
          </div>
          <ul class="email-list" data-testid="emailList">
              {
                  for props.editor.emails().iter().enumerate().map(|(index, email)| {
                      let editor = props.editor.clone();
                      let on_change = props.on_change.clone();
                      let onclick = Callback::from(move |_| {
                          let mut next = editor.clone();
                          if next.remove_at(index).is_some() {
                              on_change.emit(next);
                          }
                      });
                      html! {
                          <li class="each-email" title={email.clone()} data-testid={format!("email-{index}")}>
                              { badge_initial(email) }
                              <button
                                  class="remove-email-button"
                                  type="button"
                                  {onclick}
                                  data-testid={format!("removeEmailButton-{index}")}
                              >
                                  { "×" }
                              </button>
                          </li>
                      }
                  })
              }
          </ul>
      </>
  }
}
