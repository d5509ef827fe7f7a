//! Comment stripping and bounded whitespace tokenization

use super::MAX_ARGS;
use super::error::Error;
use heapless::Vec;

/// Cut a trailing `//` comment.
///
/// The marker and everything after it is discarded; a line that is nothing
/// but a comment becomes empty. A lone `/` is ordinary content.
pub fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(ix) => &line[..ix],
        None => line,
    }
}

/// Split a line on runs of ASCII whitespace into non-empty token views.
///
/// No quoting: embedded whitespace always separates words. More than
/// [`MAX_ARGS`] words aborts the line with [`Error::TooManyArguments`].
pub fn tokenize(line: &str) -> Result<Vec<&str, MAX_ARGS>, Error> {
    let mut argv = Vec::new();
    for word in line.split_ascii_whitespace() {
        argv.push(word).map_err(|_| Error::TooManyArguments)?;
    }
    Ok(argv)
}
