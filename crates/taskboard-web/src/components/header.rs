use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[function_component(Header)]
pub fn header() -> Html {
  html! {
      <header class="header" data-testid="header">
          <div class="left">
              <Link<Route> to={Route::List} classes="nav-link">
                  <h1 class="app-title" data-testid="appTitle">{ "Task Manager" }</h1>
              </Link<Route>>
          </div>
          <div class="right">
              <Link<Route> to={Route::NewTask} classes="nav-link">
                  <p class="app-task" data-testid="appTask">{ "Add Task" }</p>
              </Link<Route>>
          </div>
      </header>
  }
}
