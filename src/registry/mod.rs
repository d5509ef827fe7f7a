//! Command table and the handler contract.
//!
//! Commands are objects implementing [`Command`], registered by shared
//! reference into a fixed-capacity, insertion-ordered [`Registry`]. Because
//! registration stores a reference rather than a function pointer, a command
//! can carry its own state (interior mutability is sound under the
//! interpreter's single-threaded model) instead of relying on globals.
//!
//! Lookup is by literal prefix: the typed word resolves to the first
//! registered command whose full name starts with it. `help` therefore also
//! answers `hel`, `he`, and `h` - unless an earlier registration claimed
//! that prefix first.

use crate::interp::{Interpreter, Sink};
use crate::interp::error::Error;
use heapless::Vec;

/// Total number of registration slots.
pub const COMMAND_SLOTS: usize = 16;

/// The handler contract every command implements.
///
/// `execute` runs synchronously on the interpreter's (single) thread and
/// returns nothing: failures are texts on the sink. Through the interpreter
/// handle a command may write output, register further commands, install or
/// clear the streaming handler, toggle echo, touch the fault counter, or
/// feed synthetic input.
pub trait Command<S: Sink> {
    /// The full name the command is invoked by (and prefix-matched against).
    fn name(&self) -> &'static str;

    /// One-line description shown in the command listing.
    fn short_help(&self) -> &'static str;

    /// Detailed, typically multi-line help text.
    fn long_help(&self) -> &'static str;

    /// Run the command.
    ///
    /// `argv[0]` is the word the command was invoked by - untouched, so a
    /// leading `@` silence marker is still visible. The line buffer is
    /// already reset when this runs: feeding further input through
    /// [`Interpreter::feed_str`] is safe, and `argv` stays valid while
    /// doing so.
    fn execute<'a>(&'a self, interp: &mut Interpreter<'a, S>, argv: &[&str]);
}

/// Fixed-capacity, insertion-ordered table of registered commands.
///
/// Append-only: commands are never removed. `'a` is the lifetime of the
/// registered command objects.
pub struct Registry<'a, S: Sink> {
    entries: Vec<&'a dyn Command<S>, COMMAND_SLOTS>,
}

impl<'a, S: Sink> Registry<'a, S> {
    /// An empty table.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a command and return its slot index.
    ///
    /// Fails with [`Error::RegistryFull`] once [`COMMAND_SLOTS`] entries
    /// exist; a rejected registration leaves the table unchanged.
    pub fn register(&mut self, command: &'a dyn Command<S>) -> Result<usize, Error> {
        self.entries
            .push(command)
            .map_err(|_| Error::RegistryFull)?;
        Ok(self.entries.len() - 1)
    }

    /// Find the first command, in registration order, whose full name has
    /// `text` as a literal prefix.
    ///
    /// Ambiguous prefixes resolve to whichever match was registered first,
    /// never to the shortest or longest name. An empty `text` is a prefix of
    /// everything and yields the first registered command.
    pub fn find(&self, text: &str) -> Option<&'a dyn Command<S>> {
        self.entries
            .iter()
            .copied()
            .find(|command| command.name().starts_with(text))
    }

    /// The command in slot `index`, in registration order.
    pub fn get(&self, index: usize) -> Option<&'a dyn Command<S>> {
        self.entries.get(index).copied()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Sink> Default for Registry<'_, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sink> core::fmt::Debug for Registry<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|command| command.name()))
            .finish()
    }
}
