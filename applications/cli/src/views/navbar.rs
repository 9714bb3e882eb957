//! Header shown above every command's output.

use taskdeck_client::User;

pub const APP_NAME: &str = "Taskdeck";

/// Render the header for the current auth state.
pub fn render_navbar(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("{} | {} (logout: taskdeck logout)", APP_NAME, user.email),
        None => format!(
            "{} | not logged in (taskdeck login | taskdeck register)",
            APP_NAME
        ),
    }
}
