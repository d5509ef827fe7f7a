//! Interpreter core for byte-fed command lines.
//!
//! The [`Interpreter`] owns the line buffer, the command [`Registry`], the
//! echo flag, the streaming override, and the fault counter. It is driven
//! entirely by [`Interpreter::feed`]: the transport polls its receive buffer
//! and hands over bytes one at a time; a CR or LF fires execution of the
//! buffered line.
//!
//! # Model
//!
//! Single-threaded, cooperative, fully synchronous. No operation suspends; a
//! handler that blocks stalls the whole host loop for that duration, which is
//! an accepted trade-off for debug consoles. Nothing here allocates: the line
//! buffer, argument vector, and prompt are all statically sized.
//!
//! Before a handler runs, the executed line is copied aside and the fill
//! length reset to zero. A handler may therefore feed further synthetic input
//! (including complete lines) through [`Interpreter::feed_str`] while its own
//! argument views stay valid - one command can trigger another.
//!
//! # Example
//!
//! ```rust
//! use libcmd::interp::{Interpreter, Sink};
//! use libcmd::registry::Command;
//!
//! struct Console;
//!
//! impl Sink for Console {
//!     fn write(&mut self, text: &str) {
//!         print!("{text}");
//!     }
//! }
//!
//! struct Reset;
//!
//! impl<S: Sink> Command<S> for Reset {
//!     fn name(&self) -> &'static str {
//!         "reset"
//!     }
//!
//!     fn short_help(&self) -> &'static str {
//!         "restarts the device"
//!     }
//!
//!     fn long_help(&self) -> &'static str {
//!         "SYNTAX: reset\r\n- restarts the device\r\n"
//!     }
//!
//!     fn execute<'a>(&'a self, interp: &mut Interpreter<'a, S>, _argv: &[&str]) {
//!         interp.println("resetting");
//!     }
//! }
//!
//! static RESET: Reset = Reset;
//!
//! let mut cmd = Interpreter::new(Console);
//! cmd.register(&RESET).unwrap();
//! cmd.begin();
//! cmd.feed_str("res\r");
//! ```

pub mod error;
pub mod fault;
pub mod tokenizer;

use crate::registry::{Command, Registry};
use error::Error;
use fault::FaultCounter;
use heapless::String;

/// The maximum number of bytes the interpreter can buffer per line.
///
/// The buffer is drained when a line executes; bytes arriving on a full
/// buffer are dropped and counted as faults.
pub const LINE_CAPACITY: usize = 128;

/// The maximum number of words a line is split into.
pub const MAX_ARGS: usize = 32;

/// Capacity of the streaming-prompt string; longer prompts are truncated.
pub const PROMPT_CAPACITY: usize = 10;

/// Prompt emitted when no streaming handler is installed.
pub const DEFAULT_PROMPT: &str = ">> ";

/// ASCII carriage return; terminates a line.
pub const ASCII_CR: u8 = 0x0D;
/// ASCII line feed; terminates a line.
pub const ASCII_LF: u8 = 0x0A;
/// ASCII backspace; erases the last buffered byte.
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII delete; treated like backspace.
pub const ASCII_DEL: u8 = 0x7F;

/// One-directional text output towards the host terminal.
///
/// Receives echo, prompts, and error/help messages. Writes are infallible
/// from the interpreter's point of view; a transport with a fallible or
/// bounded output path queues or drops internally.
pub trait Sink {
    /// Write `text` to the output.
    fn write(&mut self, text: &str);
}

/// True when `argv[0]` carries the leading-`@` silence marker.
///
/// The marker asks a handler to suppress its own confirmatory output. It is
/// a convention honored per-handler, not enforced by the interpreter; the
/// marker is stripped for command lookup but `argv[0]` reaches the handler
/// untouched.
pub fn is_silent(argv0: &str) -> bool {
    argv0.starts_with('@')
}

/// A byte-fed command-line interpreter instance.
///
/// Owns its buffer, registry, counters, and the output sink, so independent
/// instances (several consoles, parallel tests) can coexist. `'a` is the
/// lifetime of the registered command objects.
pub struct Interpreter<'a, S: Sink> {
    sink: S,
    registry: Registry<'a, S>,
    line: [u8; LINE_CAPACITY],
    len: usize,
    echo: bool,
    stream: Option<&'a dyn Command<S>>,
    stream_prompt: String<PROMPT_CAPACITY>,
    faults: FaultCounter,
}

impl<'a, S: Sink> Interpreter<'a, S> {
    /// Create an interpreter writing to `sink`, with echo enabled and no
    /// commands registered. Nothing is printed until [`begin`](Self::begin).
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            registry: Registry::new(),
            line: [0; LINE_CAPACITY],
            len: 0,
            echo: true,
            stream: None,
            stream_prompt: String::new(),
            faults: FaultCounter::new(),
        }
    }

    /// Reset the input state machine and print the prompt.
    ///
    /// Clears the line buffer, re-enables echo, and drops any streaming
    /// registration. Call once after wiring up the transport.
    pub fn begin(&mut self) {
        self.len = 0;
        self.echo = true;
        self.stream = None;
        self.stream_prompt.clear();
        self.prompt();
    }

    /// Register a command and return its slot index. Fails with
    /// [`Error::RegistryFull`] - without side effects - once all slots are
    /// taken.
    pub fn register(&mut self, command: &'a dyn Command<S>) -> Result<usize, Error> {
        self.registry.register(command)
    }

    /// The command table, for enumeration and prefix lookup.
    pub fn registry(&self) -> &Registry<'a, S> {
        &self.registry
    }

    /// Feed one received byte to the input state machine.
    ///
    /// CR or LF executes the buffered line (a terminator on an empty buffer
    /// executes the empty line, a no-op) and re-emits the prompt. Backspace
    /// and DEL erase one byte. A byte arriving on a full buffer is dropped:
    /// a visible `_` marker backs over the cursor even with echo off, and
    /// the fault counter steps once per dropped byte.
    pub fn feed(&mut self, byte: u8) {
        match byte {
            ASCII_CR | ASCII_LF => {
                if self.echo {
                    self.sink.write("\r\n");
                }
                self.execute_line();
                self.prompt();
            }
            ASCII_BACKSPACE | ASCII_DEL => {
                if self.len > 0 {
                    self.len -= 1;
                    if self.echo {
                        self.sink.write("\x08 \x08");
                    }
                }
            }
            _ => {
                if self.len < LINE_CAPACITY {
                    self.line[self.len] = byte;
                    self.len += 1;
                    if self.echo {
                        let ch = [byte];
                        if let Ok(s) = core::str::from_utf8(&ch) {
                            self.sink.write(s);
                        }
                    }
                } else {
                    self.sink.write("_\x08");
                    self.faults.step();
                }
            }
        }
    }

    /// Feed a run of received bytes.
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.feed(byte);
        }
    }

    /// Feed a string, terminator included by the caller.
    ///
    /// Convenient for scripted input and for handlers that synthesize
    /// further commands.
    pub fn feed_str(&mut self, text: &str) {
        self.feed_bytes(text.as_bytes());
    }

    /// Number of buffered, not-yet-executed bytes.
    pub fn pending(&self) -> usize {
        self.len
    }

    /// Whether fed characters and erasures are mirrored to the sink.
    pub fn echo(&self) -> bool {
        self.echo
    }

    /// Enable or disable echo. Command output is unaffected.
    pub fn set_echo(&mut self, on: bool) {
        self.echo = on;
    }

    /// Route all subsequent lines to `handler` instead of name lookup.
    ///
    /// Stays in effect until [`clear_stream_handler`](Self::clear_stream_handler).
    /// Typically a command installs itself from its own `execute`.
    pub fn install_stream_handler(&mut self, handler: &'a dyn Command<S>) {
        self.stream = Some(handler);
    }

    /// Leave streaming mode and return to name-based dispatch.
    pub fn clear_stream_handler(&mut self) {
        self.stream = None;
    }

    /// The installed streaming handler, if any.
    pub fn stream_handler(&self) -> Option<&'a dyn Command<S>> {
        self.stream
    }

    /// Set the prompt shown while a streaming handler is installed.
    ///
    /// Truncated to [`PROMPT_CAPACITY`] bytes on whole-character boundaries.
    pub fn set_stream_prompt(&mut self, prompt: &str) {
        self.stream_prompt.clear();
        for ch in prompt.chars() {
            if self.stream_prompt.push(ch).is_err() {
                break;
            }
        }
    }

    /// The configured streaming prompt.
    pub fn stream_prompt(&self) -> &str {
        &self.stream_prompt
    }

    /// Write `text` to the output sink.
    pub fn print(&mut self, text: &str) {
        self.sink.write(text);
    }

    /// Write `text` followed by CRLF to the output sink.
    pub fn println(&mut self, text: &str) {
        self.sink.write(text);
        self.sink.write("\r\n");
    }

    /// Record a fault detected outside the interpreter.
    ///
    /// For transports that observe receive-buffer overruns of their own; the
    /// count lands in the same counter as line-buffer overflows.
    pub fn note_fault(&mut self) {
        self.faults.step();
    }

    /// Return the fault count and reset it to zero.
    pub fn take_faults(&mut self) -> u32 {
        self.faults.take()
    }

    /// Borrow the output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the output sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn prompt(&mut self) {
        if self.stream.is_some() {
            self.sink.write(self.stream_prompt.as_str());
        } else {
            self.sink.write(DEFAULT_PROMPT);
        }
    }

    fn report(&mut self, err: Error) {
        self.sink.write("ERROR: ");
        self.sink.write(err.message());
        self.sink.write("\r\n");
    }

    /// Execute the buffered line: comment-strip, tokenize, then either
    /// forward to the streaming handler or dispatch by prefix lookup.
    fn execute_line(&mut self) {
        // Copy the line aside and reset the fill length first, so the
        // handler can feed synthetic input while argv stays valid.
        let mut exec = [0u8; LINE_CAPACITY];
        let len = self.len;
        exec[..len].copy_from_slice(&self.line[..len]);
        self.len = 0;

        let Ok(text) = core::str::from_utf8(&exec[..len]) else {
            self.report(Error::InvalidUtf8);
            return;
        };
        let text = tokenizer::strip_comment(text);
        let argv = match tokenizer::tokenize(text) {
            Ok(argv) => argv,
            Err(err) => {
                self.report(err);
                return;
            }
        };

        // Streaming bypasses lookup entirely. The handler also sees empty
        // lines; a blank line is how upload-style commands detect the end
        // of their data.
        if let Some(handler) = self.stream {
            handler.execute(self, &argv);
            return;
        }

        let Some(&first) = argv.first() else {
            return;
        };
        // A leading '@' is stripped for lookup only; argv[0] reaches the
        // handler untouched.
        let name = first.strip_prefix('@').unwrap_or(first);
        match self.registry.find(name) {
            Some(command) => command.execute(self, &argv),
            None => self.report(Error::CommandNotFound),
        }
    }
}

impl<S: Sink> core::fmt::Debug for Interpreter<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interpreter")
            .field("pending", &self.len)
            .field("echo", &self.echo)
            .field("streaming", &self.stream.is_some())
            .field("commands", &self.registry.len())
            .finish()
    }
}
