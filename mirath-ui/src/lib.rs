pub mod app;
pub mod form_file;
pub mod logging;
pub mod settings;
pub mod terminal;
