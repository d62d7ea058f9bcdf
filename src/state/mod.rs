/// State management module
///
/// This module holds all typed view state, including:
/// - Shared data structures fetched from the server (data.rs)
/// - The user table with sorting and selection (table.rs)
/// - The create-user form and its validation annotations (form.rs)
/// - The notification stack (alerts.rs)

pub mod alerts;
pub mod data;
pub mod form;
pub mod table;
