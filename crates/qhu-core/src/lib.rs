pub mod config;
pub mod logging;

// Rewriting pipeline: classify a header line, pick the task folder and
// extension, assemble the new URL value.
pub mod header;
pub mod image_url;
pub mod rewrite;
pub mod tasks;
