use std::rc::Rc;

use gloo::console::log;
use taskboard_core::{
  AppConfig,
  TaskStore
};
use yew::{
  ContextProvider,
  Html,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  Switch
};

use crate::components::{
  CreateTaskPage,
  Header,
  TaskListView
};
use crate::storage::LocalStorageRepository;

const APP_CONFIG_TOML: &str =
  include_str!("../assets/taskboard.toml");

#[derive(
  Clone, Routable, PartialEq, Debug,
)]
pub enum Route {
  #[at("/")]
  List,
  #[at("/newtask")]
  NewTask,
  #[not_found]
  #[at("/404")]
  NotFound
}

/// Shared by every view through a Yew
/// context. The store is compared by
/// identity.
#[derive(Clone)]
pub struct AppContext {
  pub store:  Rc<TaskStore>,
  pub config: Rc<AppConfig>
}

impl PartialEq for AppContext {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.store, &other.store)
      && self.config == other.config
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let context =
    use_state(build_app_context);

  html! {
      <ContextProvider<AppContext> context={(*context).clone()}>
          <BrowserRouter>
              <Header />
              <main class="content">
                  <Switch<Route> render={switch} />
              </main>
          </BrowserRouter>
      </ContextProvider<AppContext>>
  }
}

fn switch(route: Route) -> Html {
  ui_debug(
    "route.render",
    &format!("{route:?}")
  );
  match route {
    | Route::NewTask => {
      html! { <CreateTaskPage /> }
    }
    | Route::List | Route::NotFound => {
      html! { <TaskListView /> }
    }
  }
}

fn build_app_context() -> AppContext {
  let config = load_app_config();
  let store = TaskStore::new(
    LocalStorageRepository::new(
      config.storage_key.clone()
    )
  );
  AppContext {
    store:  Rc::new(store),
    config: Rc::new(config)
  }
}

fn load_app_config() -> AppConfig {
  match AppConfig::from_toml_str(
    APP_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(error = ?error, "failed parsing taskboard config; using defaults");
      AppConfig::default()
    }
  }
}

pub fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
