//! The `help` command

use crate::interp::{Interpreter, Sink};
use crate::registry::Command;

/// Lists registered commands, or prints one command's long help.
///
/// The argument is prefix-resolved with the same rules as dispatch, so
/// `help ec` describes `echo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Help;

impl Help {
    /// Create the command.
    pub const fn new() -> Self {
        Self
    }
}

impl<S: Sink> Command<S> for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn short_help(&self) -> &'static str {
        "gives help (try 'help help')"
    }

    fn long_help(&self) -> &'static str {
        concat!(
            "SYNTAX: help\r\n",
            "- lists all commands\r\n",
            "SYNTAX: help <cmd>\r\n",
            "- gives detailed help on command <cmd>\r\n",
            "NOTES:\r\n",
            "- all commands may be shortened, for example 'help', 'hel', 'he', 'h'\r\n",
            "- all sub commands may be shortened, for example 'help help' to 'help h'\r\n",
            "- normal prompt is >>, other prompt indicates streaming mode\r\n",
            "- commands may be suffixed with a comment starting with //\r\n",
            "- some commands support a @ as prefix; it suppresses output of that command\r\n",
        )
    }

    fn execute<'a>(&'a self, interp: &mut Interpreter<'a, S>, argv: &[&str]) {
        match argv.len() {
            1 => {
                interp.println("Available commands");
                for slot in 0..interp.registry().len() {
                    let Some(command) = interp.registry().get(slot) else {
                        break;
                    };
                    interp.print(command.name());
                    interp.print(" - ");
                    interp.println(command.short_help());
                }
            }
            2 => match interp.registry().find(argv[1]) {
                Some(command) => interp.print(command.long_help()),
                None => interp.println("ERROR: command not found (try 'help')"),
            },
            _ => interp.println("ERROR: too many arguments"),
        }
    }
}
