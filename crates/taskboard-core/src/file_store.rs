use std::fs;
use std::io::{
  ErrorKind,
  Write
};
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use taskboard_shared::Task;
use tempfile::NamedTempFile;
use tracing::{
  debug,
  info
};

use crate::store::{
  TaskRepository,
  decode_tasks,
  encode_tasks
};

/// The browser document kept in a plain
/// file, for native tooling.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
  path: PathBuf
}

impl JsonFileRepository {
  #[tracing::instrument(skip(path))]
  pub fn open(
    path: &Path
  ) -> anyhow::Result<Self> {
    if let Some(dir) = parent_dir(path) {
      fs::create_dir_all(dir)
        .with_context(|| {
          format!(
            "failed to create {}",
            dir.display()
          )
        })?;
    }

    info!(
      file = %path.display(),
      "opened task file"
    );
    Ok(Self {
      path: path.to_path_buf()
    })
  }
}

impl TaskRepository for JsonFileRepository {
  #[tracing::instrument(skip(self), fields(file = %self.path.display()))]
  fn load_all(
    &self
  ) -> anyhow::Result<Vec<Task>> {
    let raw = match fs::read_to_string(
      &self.path
    ) {
      | Ok(raw) => raw,
      | Err(err)
        if err.kind()
          == ErrorKind::NotFound =>
      {
        debug!(
          "task file missing; treating \
           as empty"
        );
        return Ok(vec![]);
      }
      | Err(err) => {
        return Err(err).with_context(
          || {
            format!(
              "failed reading {}",
              self.path.display()
            )
          }
        );
      }
    };

    decode_tasks(Some(&raw)).with_context(
      || {
        format!(
          "failed parsing {}",
          self.path.display()
        )
      }
    )
  }

  #[tracing::instrument(skip(self, tasks), fields(file = %self.path.display(), count = tasks.len()))]
  fn save_all(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let encoded = encode_tasks(tasks)?;

    let dir = parent_dir(&self.path)
      .unwrap_or_else(|| Path::new("."));
    let mut temp =
      NamedTempFile::new_in(dir)?;
    temp.write_all(encoded.as_bytes())?;
    temp.flush()?;

    temp.persist(&self.path).map_err(
      |err| {
        anyhow!(
          "failed to persist {}: {}",
          self.path.display(),
          err
        )
      }
    )?;

    debug!("saved task file atomically");
    Ok(())
  }
}

fn parent_dir(
  path: &Path
) -> Option<&Path> {
  path
    .parent()
    .filter(|dir| {
      !dir.as_os_str().is_empty()
    })
}
