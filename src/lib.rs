//! # libcmd - Embedded command interpreter
//!
//! A line-oriented command interpreter for firmware debug and configuration
//! consoles. The interpreter is fed one byte at a time from a host transport
//! (typically a serial link), accumulates bytes into lines, splits lines into
//! words, and dispatches the first word - matched by prefix against a fixed
//! table of registered commands - to that command's handler. It is meant for
//! device consoles, not general shells.
//!
//! ## Features
//!
//! - **Zero-allocation**: all storage is statically sized (`heapless`
//!   collections); nothing allocates on the byte-feeding or dispatch path
//! - **Instance-based**: every [`interp::Interpreter`] owns its own buffer,
//!   registry, and counters, so multiple consoles can coexist
//! - **Prefix dispatch**: typed names may be abbreviated; the first
//!   registered match wins
//! - **Streaming mode**: a command can temporarily take over all line input,
//!   e.g. to receive a data upload
//! - **Comment and silence conventions**: `//` trailing comments are
//!   stripped, and a leading `@` asks a command to keep quiet
//!
//! ## Usage
//!
//! ```rust
//! use libcmd::commands::{Echo, Help};
//! use libcmd::interp::{Interpreter, Sink};
//!
//! struct Console;
//!
//! impl Sink for Console {
//!     fn write(&mut self, text: &str) {
//!         print!("{text}");
//!     }
//! }
//!
//! static HELP: Help = Help::new();
//! static ECHO: Echo = Echo::new();
//!
//! let mut cmd = Interpreter::new(Console);
//! cmd.register(&HELP).unwrap();
//! cmd.register(&ECHO).unwrap();
//! cmd.begin();
//!
//! // Feed bytes as they arrive from the transport; a CR or LF fires the line.
//! cmd.feed_str("echo hello world\r");
//! ```
//!
//! Commands implement [`registry::Command`] and are registered by reference,
//! so they can carry their own state:
//!
//! ```rust
//! use libcmd::interp::{Interpreter, Sink};
//! use libcmd::registry::Command;
//!
//! struct Null;
//!
//! impl Sink for Null {
//!     fn write(&mut self, _text: &str) {}
//! }
//!
//! struct Ping;
//!
//! impl<S: Sink> Command<S> for Ping {
//!     fn name(&self) -> &'static str {
//!         "ping"
//!     }
//!
//!     fn short_help(&self) -> &'static str {
//!         "replies with pong"
//!     }
//!
//!     fn long_help(&self) -> &'static str {
//!         "SYNTAX: ping\r\n- replies with pong\r\n"
//!     }
//!
//!     fn execute<'a>(&'a self, interp: &mut Interpreter<'a, S>, _argv: &[&str]) {
//!         interp.println("pong");
//!     }
//! }
//!
//! static PING: Ping = Ping;
//!
//! let mut cmd = Interpreter::new(Null);
//! cmd.register(&PING).unwrap();
//! cmd.feed_str("pi\r"); // prefix dispatch
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices exposing a debug console
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt formatting of error types for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// The interpreter core: byte-fed input state machine, tokenizer, dispatcher,
/// streaming override, and fault accounting.
pub mod interp;

/// Command registration table and the `Command` handler contract.
pub mod registry;

/// Numeric argument helpers for command handlers.
pub mod parse;

/// Bundled `help` and `echo` commands.
///
/// These are ordinary consumers of the [`registry::Command`] contract and can
/// be replaced wholesale by an application.
pub mod commands;
