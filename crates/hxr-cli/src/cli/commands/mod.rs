//! CLI command handlers, one per file.

mod completions;
mod digest;
mod render;
mod save;

pub use completions::run_completions;
pub use digest::run_digest;
pub use render::run_render;
pub use save::{run_save, SaveOptions};
