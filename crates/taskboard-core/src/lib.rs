pub mod config;
pub mod email;
pub mod email_list;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
pub mod form;
pub mod list;
pub mod store;

pub use config::AppConfig;
pub use error::FormError;
pub use form::{
  CreateTaskForm,
  TaskDraft,
  UpdateOutcome,
  UpdateTaskForm
};
pub use store::{
  MemoryRepository,
  Subscription,
  TaskRepository,
  TaskStore
};
pub use taskboard_shared::{
  Task,
  TaskStatus
};
