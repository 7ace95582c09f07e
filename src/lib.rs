#![deny(unsafe_code)]

pub mod app;
pub mod constants;
pub mod error;
pub mod event_handler;
pub mod models;
pub mod prefs;
pub mod settings;
pub mod sources;
pub mod ui;
pub mod web_page;
pub mod web_page_setting;

pub use error::{Error, Result};
