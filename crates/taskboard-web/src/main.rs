mod app;
mod components;
mod storage;

use web_sys::Element;

const MOUNT_ID: &str = "app";

fn mount_point() -> Option<Element> {
  web_sys::window()?
    .document()?
    .get_element_by_id(MOUNT_ID)
}

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let Some(root) = mount_point() else {
    tracing::error!(
      id = MOUNT_ID,
      "mount element missing; taskboard \
       not started"
    );
    return;
  };

  tracing::info!("mounting taskboard");
  yew::Renderer::<app::App>::with_root(root)
    .render();
}
