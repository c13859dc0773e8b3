//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod completions;
mod man;
mod paths;
mod rewrite;
mod tasks;

pub use check::run_check;
pub use completions::run_completions;
pub use man::run_man;
pub use rewrite::run_rewrite;
pub use tasks::run_tasks;
