//! biblio-admin - Native admin console for the library server
//!
//! A desktop front end for the library's administration backend:
//! dashboard stats, the user table with sorting and bulk selection,
//! account status toggling and deletion behind confirmation dialogs,
//! and a validated create-user form. All server state is fetched over
//! the admin HTTP API; nothing is persisted locally.

pub mod app;
pub mod config;
pub mod effects;
pub mod net;
pub mod shortcuts;
pub mod state;
pub mod ui;
pub mod validate;

// Re-export the entry point and the types tests reach for most
pub use app::{run, BiblioAdmin, Message};
pub use config::Config;
