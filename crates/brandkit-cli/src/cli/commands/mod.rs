//! CLI command handlers, one file per command.

mod checksum;
mod completions;
mod quick;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use quick::run_quick;

#[cfg(test)]
pub(crate) use quick::export_flags;
