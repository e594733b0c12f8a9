mod create_task_page;
mod email_badge;
mod email_list_field;
mod header;
mod status_select;
mod task_fields;
mod task_list;
mod task_list_row;
mod update_task_overlay;

pub use create_task_page::CreateTaskPage;
pub use email_badge::EmailBadge;
pub use email_list_field::EmailListField;
pub use header::Header;
pub use status_select::StatusSelect;
pub use task_fields::TaskFields;
pub use task_list::TaskListView;
pub use task_list_row::TaskListRow;
pub use update_task_overlay::UpdateTaskOverlay;
