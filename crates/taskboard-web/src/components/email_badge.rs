use taskboard_core::email::badge_initial;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmailBadgeProps {
  pub email:   String,
  #[prop_or_default]
  pub test_id: String
}

/// Only the first letter is shown; the
/// full address stays in the tooltip.
#[function_component(EmailBadge)]
pub fn email_badge(
  props: &EmailBadgeProps
) -> Html {
  html! {
      <span class="email-badge" title={props.email.clone()} data-testid={props.test_id.clone()}>
          { badge_initial(&props.email) }
      </span>
  }
}
