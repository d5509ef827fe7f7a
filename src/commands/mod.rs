//! Bundled commands for a usable out-of-the-box console.
//!
//! `help` and `echo` are plain [`Command`](crate::registry::Command)
//! implementations with no privileged access to the interpreter; an
//! application registers them like any of its own commands, or leaves them
//! out entirely.

mod echo;
mod help;

pub use echo::{Echo, WaitFn};
pub use help::Help;
