//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version)]
#[command(about = "Manage your Taskdeck task list from the terminal", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Server base URL, overriding configuration
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account and log in
    Register {
        email: String,
        #[arg(short, long, env = "TASKDECK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in with an existing account
    Login {
        email: String,
        #[arg(short, long, env = "TASKDECK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Check that the server is reachable
    Status,
    /// List your tasks
    List,
    /// Show a single task
    Show { id: i64 },
    /// Create a task
    Add {
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Change fields of a task
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Flip a task between done and not done
    Toggle { id: i64 },
    /// Delete a task
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
