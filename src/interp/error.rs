//! Common error types for interpreter operations

/// An error raised while registering or executing a command line.
///
/// All of these are non-fatal: the interpreter reports them on the output
/// sink and returns to accepting input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// Registration was rejected because every command slot is taken.
    RegistryFull,
    /// The line held more words than the argument vector can carry.
    TooManyArguments,
    /// The first word matched no registered command name.
    CommandNotFound,
    /// A byte arrived with the line buffer already full and was dropped.
    LineOverflow,
    /// The buffered line was not valid UTF-8 and cannot be tokenized.
    InvalidUtf8,
}

impl Error {
    /// Message printed on the output sink when the error is reported.
    pub fn message(&self) -> &'static str {
        match self {
            Error::RegistryFull => "command table full",
            Error::TooManyArguments => "too many arguments",
            Error::CommandNotFound => "command not found (try help)",
            Error::LineOverflow => "line buffer overflow",
            Error::InvalidUtf8 => "input is not valid text",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::RegistryFull => defmt::write!(f, "RegistryFull"),
            Error::TooManyArguments => defmt::write!(f, "TooManyArguments"),
            Error::CommandNotFound => defmt::write!(f, "CommandNotFound"),
            Error::LineOverflow => defmt::write!(f, "LineOverflow"),
            Error::InvalidUtf8 => defmt::write!(f, "InvalidUtf8"),
        }
    }
}
