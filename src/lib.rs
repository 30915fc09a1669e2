pub mod app;
pub mod clipboard;
pub mod commands;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod pandoc;
pub mod render_cache;
pub mod session;
pub mod surfaces;
pub mod textio;
pub mod theme;
pub mod view;
