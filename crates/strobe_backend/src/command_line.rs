//! Argument vectors with platform-sensitive flattening.

use std::fmt;
use std::process::Command;

/// A toolchain invocation: the program followed by its arguments.
///
/// Some vendor tools on Windows expect arguments that already carry literal
/// double quotes. Spawning those as discrete tokens re-escapes the quotes and
/// the tool no longer understands them, so on that platform the whole vector
/// is flattened into one space-joined string up front and handed to the
/// spawner without further escaping. Everywhere else the tokens stay discrete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandLine {
    /// Discrete argument tokens, program first.
    Tokens(Vec<String>),
    /// The space-joined form used on the quote-sensitive platform.
    Joined(String),
}

impl CommandLine {
    /// Builds a command line for an explicit platform choice.
    ///
    /// `quote_sensitive` selects the flattened form. Exposed separately from
    /// [`for_host`](Self::for_host) so both paths are testable on any host.
    pub fn for_platform(tokens: Vec<String>, quote_sensitive: bool) -> Self {
        if quote_sensitive {
            CommandLine::Joined(tokens.join(" "))
        } else {
            CommandLine::Tokens(tokens)
        }
    }

    /// Builds a command line for the platform this process runs on.
    pub fn for_host(tokens: Vec<String>) -> Self {
        Self::for_platform(tokens, cfg!(windows))
    }

    /// The program (first token) of the invocation.
    pub fn program(&self) -> &str {
        match self {
            CommandLine::Tokens(tokens) => tokens.first().map(String::as_str).unwrap_or(""),
            CommandLine::Joined(line) => line.split_whitespace().next().unwrap_or(""),
        }
    }

    /// Prepares a [`std::process::Command`] for this invocation.
    ///
    /// The joined form is passed through unsplit on Windows (the reason it
    /// exists); on other platforms it falls back to whitespace splitting.
    pub fn to_command(&self) -> Command {
        match self {
            CommandLine::Tokens(tokens) => {
                let mut command = Command::new(self.program());
                command.args(tokens.iter().skip(1));
                command
            }
            CommandLine::Joined(line) => {
                let mut parts = line.splitn(2, ' ');
                let program = parts.next().unwrap_or("");
                let rest = parts.next().unwrap_or("");
                let mut command = Command::new(program);
                #[cfg(windows)]
                {
                    use std::os::windows::process::CommandExt;
                    if !rest.is_empty() {
                        command.raw_arg(rest);
                    }
                }
                #[cfg(not(windows))]
                {
                    command.args(rest.split(' ').filter(|arg| !arg.is_empty()));
                }
                command
            }
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandLine::Tokens(tokens) => f.write_str(&tokens.join(" ")),
            CommandLine::Joined(line) => f.write_str(line),
        }
    }
}
