pub mod rest;
pub mod state;

// Re-export the handler and router to make them easily accessible
// to the binary that will build the web server.
pub use rest::{mushaf_handler, router};
