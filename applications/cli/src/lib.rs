//! Taskdeck terminal client.
//!
//! The binary is a thin shell over [`App`], which owns the session and the
//! task collection for one invocation and renders results through
//! [`views`].

pub mod app;
pub mod cli;
pub mod config;
pub mod views;

pub use app::App;
