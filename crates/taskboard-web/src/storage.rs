use anyhow::{
  Context,
  anyhow
};
use taskboard_core::store::{
  TaskRepository,
  decode_tasks,
  encode_tasks
};
use taskboard_shared::Task;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// The task document in
/// `window.localStorage`, read and
/// written wholesale.
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
  key: String
}

impl LocalStorageRepository {
  pub fn new(
    key: impl Into<String>
  ) -> Self {
    Self {
      key: key.into()
    }
  }

  fn storage(
    &self
  ) -> anyhow::Result<Storage> {
    let window = web_sys::window()
      .ok_or_else(|| {
        anyhow!("no browser window")
      })?;
    window
      .local_storage()
      .map_err(js_error)
      .context(
        "local storage is not \
         accessible"
      )?
      .ok_or_else(|| {
        anyhow!(
          "local storage is \
           unavailable"
        )
      })
  }
}

impl TaskRepository
  for LocalStorageRepository
{
  fn load_all(
    &self
  ) -> anyhow::Result<Vec<Task>> {
    let raw = self
      .storage()?
      .get_item(&self.key)
      .map_err(js_error)
      .with_context(|| {
        format!(
          "failed reading local \
           storage key {}",
          self.key
        )
      })?;
    tracing::debug!(
      key = %self.key,
      present = raw.is_some(),
      "read task document"
    );
    decode_tasks(raw.as_deref())
  }

  fn save_all(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let encoded = encode_tasks(tasks)?;
    self
      .storage()?
      .set_item(&self.key, &encoded)
      .map_err(js_error)
      .with_context(|| {
        format!(
          "failed writing local \
           storage key {}",
          self.key
        )
      })?;
    tracing::debug!(
      key = %self.key,
      count = tasks.len(),
      bytes = encoded.len(),
      "wrote task document"
    );
    Ok(())
  }
}

fn js_error(
  value: JsValue
) -> anyhow::Error {
  anyhow!("{value:?}")
}
