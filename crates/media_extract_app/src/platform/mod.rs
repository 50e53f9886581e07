//! Terminal front end: stdin commands in, rendered text out.
mod app;
mod cli;
mod config;
mod effects;
mod ui;

pub use app::run_app;
