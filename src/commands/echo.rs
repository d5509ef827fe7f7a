//! The `echo` command

use core::fmt::Write as _;

use crate::interp::{Interpreter, Sink, is_silent};
use crate::parse;
use crate::registry::Command;
use heapless::String;

/// Hook used by `echo wait` to block for a number of milliseconds.
///
/// Blocking is acceptable under the cooperative model: the whole host loop
/// stalls for the duration.
pub type WaitFn = fn(u32);

/// Echoes words, toggles terminal echo, and exposes the fault counter.
///
/// Subcommands may be shortened like command names. A leading `@` on the
/// invoking word suppresses the confirmatory output, which scripts use for
/// silent resets (`@echo faults`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Echo {
    wait: Option<WaitFn>,
}

impl Echo {
    /// Create the command without a wait hook; `echo wait` reports an error.
    pub const fn new() -> Self {
        Self { wait: None }
    }

    /// Create the command with a blocking-wait hook for `echo wait <ms>`.
    pub const fn with_wait(wait: WaitFn) -> Self {
        Self { wait: Some(wait) }
    }

    fn print_state<S: Sink>(interp: &mut Interpreter<'_, S>) {
        if interp.echo() {
            interp.println("echo: enabled");
        } else {
            interp.println("echo: disabled");
        }
    }
}

impl<S: Sink> Command<S> for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn short_help(&self) -> &'static str {
        "echo a message (or en/disables echoing)"
    }

    fn long_help(&self) -> &'static str {
        concat!(
            "SYNTAX: echo [line] <word>...\r\n",
            "- prints all words (useful in scripts)\r\n",
            "SYNTAX: [@]echo faults [step]\r\n",
            "- without argument, shows and resets the fault counter\r\n",
            "- with argument, steps the fault counter\r\n",
            "- with @ present, no feedback is printed (for silent reset or step)\r\n",
            "- typically counts communication errors (serial rx buffer overflow)\r\n",
            "SYNTAX: [@]echo [ enable | disable ]\r\n",
            "- with arguments enables/disables terminal echoing\r\n",
            "- (disabled is useful in scripts; output is relevant, but input much less)\r\n",
            "- with @ present, no feedback is printed\r\n",
            "- without arguments shows status of terminal echoing\r\n",
            "SYNTAX: [@]echo wait <ms>\r\n",
            "- blocks for <ms> milliseconds (needs a wait hook from the host)\r\n",
            "NOTES:\r\n",
            "- 'echo line' prints a white line (there are no <word>s)\r\n",
            "- 'echo line enable' prints 'enable'\r\n",
            "- 'echo line disable' prints 'disable'\r\n",
            "- 'echo line line' prints 'line'\r\n",
        )
    }

    fn execute<'a>(&'a self, interp: &mut Interpreter<'a, S>, argv: &[&str]) {
        let silent = is_silent(argv[0]);
        if argv.len() == 1 {
            Self::print_state(interp);
            return;
        }
        let sub = argv[1];
        if "faults".starts_with(sub) {
            if argv.len() == 3 && "step".starts_with(argv[2]) {
                interp.note_fault();
                if !silent {
                    interp.println("echo: faults: stepped");
                }
                return;
            }
            if argv.len() != 2 {
                interp.println("ERROR: unexpected argument after 'faults'");
                return;
            }
            let count = interp.take_faults();
            if !silent {
                let mut line: String<24> = String::new();
                // "echo: faults: " plus a u32 always fits.
                let _ = write!(line, "echo: faults: {count}");
                interp.println(&line);
            }
            return;
        }
        if "enable".starts_with(sub) {
            if argv.len() != 2 {
                interp.println("ERROR: unexpected argument after 'enable'");
                return;
            }
            interp.set_echo(true);
            if !silent {
                Self::print_state(interp);
            }
            return;
        }
        if "disable".starts_with(sub) {
            if argv.len() != 2 {
                interp.println("ERROR: unexpected argument after 'disable'");
                return;
            }
            interp.set_echo(false);
            if !silent {
                Self::print_state(interp);
            }
            return;
        }
        if "wait".starts_with(sub) {
            if argv.len() != 3 {
                interp.println("ERROR: expected milliseconds after 'wait'");
                return;
            }
            match parse::dec(argv[2]) {
                Ok(ms) if ms >= 0 => match self.wait {
                    Some(wait) => {
                        wait(ms as u32);
                        if !silent {
                            interp.println("echo: wait: done");
                        }
                    }
                    None => interp.println("ERROR: no wait hook installed"),
                },
                _ => interp.println("ERROR: invalid wait time"),
            }
            return;
        }
        let start = if "line".starts_with(sub) { 2 } else { 1 };
        for (ix, word) in argv[start..].iter().enumerate() {
            if ix > 0 {
                interp.print(" ");
            }
            interp.print(word);
        }
        interp.println("");
    }
}
