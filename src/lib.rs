pub mod app;
pub mod console;
pub mod native;
pub mod shell;
