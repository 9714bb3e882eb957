//! Terminal rendering and input handling.

pub mod confirm;
pub mod navbar;
pub mod task_form;
pub mod task_list;

pub use confirm::{AssumeYes, Confirm, PromptConfirm};
pub use navbar::render_navbar;
pub use task_form::{edit_request, TaskDraft};
pub use task_list::{render_collection, render_task, render_task_list};
