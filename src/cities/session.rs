//! Interactive command dispatcher.
//!
//! Reads one command per line, runs it against a [`CityList`] and writes the
//! result. The vocabulary is fixed:
//!
//! | Input        | Effect                                       |
//! |--------------|----------------------------------------------|
//! | `size`       | prints `Size is N`                           |
//! | `delete [n]` | [`CityList::delete_at`]                      |
//! | `reverse`    | [`CityList::reverse`]                        |
//! | `get [n]`    | [`CityList::move_to_front`]                  |
//! | `print [n]`  | prints the first `n` cities                  |
//! | `exit`       | ends the session (`quit` is accepted too)    |
//!
//! When `delete`, `get` or `print` arrive without an inline number, a second
//! prompt asks for it on the next line. Numbers are read like C `atoi`, so
//! anything unparseable becomes 0 and falls under the no-op policy of the
//! list operations.

use std::io::{BufRead, Write};

use log::{debug, info, trace};

use super::list::CityList;
use super::types::error::Result;

/// Main prompt written before every command.
pub const PROMPT: &str = "\nsize, delete, reverse, get, or print: ";

const COMMANDS: &str = "size, delete, reverse, get, print, exit";

/// The command verbs understood by a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Size,
    Delete,
    Reverse,
    Get,
    Print,
    Exit,
}

impl Verb {
    /// Case-insensitive lookup of a verb token.
    pub fn lookup(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "size" => Some(Self::Size),
            "delete" => Some(Self::Delete),
            "reverse" => Some(Self::Reverse),
            "get" => Some(Self::Get),
            "print" => Some(Self::Print),
            "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Whether the verb needs a numeric argument.
    pub fn takes_argument(self) -> bool {
        matches!(self, Self::Delete | Self::Get | Self::Print)
    }

    /// Follow-up prompt used when the argument was not given inline.
    pub fn argument_prompt(self) -> &'static str {
        match self {
            Self::Delete => "Enter a number to delete: ",
            _ => "Enter a number: ",
        }
    }

    /// Combine the verb with its argument. The argument is ignored by verbs
    /// that take none.
    pub fn with_argument(self, n: usize) -> Command {
        match self {
            Self::Size => Command::Size,
            Self::Delete => Command::Delete(n),
            Self::Reverse => Command::Reverse,
            Self::Get => Command::Get(n),
            Self::Print => Command::Print(n),
            Self::Exit => Command::Exit,
        }
    }
}

/// A fully resolved command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Size,
    /// Delete the node at a 1-based position.
    Delete(usize),
    Reverse,
    /// Move the node at a 1-based position to the front.
    Get(usize),
    /// Print the first `n` cities.
    Print(usize),
    Exit,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing but whitespace.
    Blank,
    Ready(Command),
    /// A verb that still needs its numeric argument.
    Incomplete(Verb),
    /// The first token is not a known verb.
    Unrecognized(String),
}

impl Input {
    /// Parse a command line: a verb optionally followed by an inline number.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return Self::Blank;
        };
        let Some(verb) = Verb::lookup(token) else {
            return Self::Unrecognized(token.to_string());
        };

        if !verb.takes_argument() {
            return Self::Ready(verb.with_argument(0));
        }
        match tokens.next() {
            Some(arg) => Self::Ready(verb.with_argument(parse_position(arg))),
            None => Self::Incomplete(verb),
        }
    }
}

/// Read a position the way C `atoi` does.
///
/// Leading whitespace and an optional sign are accepted, then the leading run
/// of digits is used. No digits or a negative value gives 0. Values too large
/// for `usize` saturate, which every list operation treats as out of range.
pub fn parse_position(raw: &str) -> usize {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(usize::MAX)
}

/// Whether the session should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A single-threaded request/response loop over one list.
///
/// The session owns the list; every mutation goes through it.
pub struct Session<L, R, W> {
    list: L,
    input: R,
    output: W,
}

impl<'a, L, R, W> Session<L, R, W>
where
    L: CityList<'a>,
    R: BufRead,
    W: Write,
{
    pub fn new(list: L, input: R, output: W) -> Self {
        Self {
            list,
            input,
            output,
        }
    }

    /// The list in its current state.
    pub fn list(&self) -> &L {
        &self.list
    }

    /// Tear the session down and hand back the list and output sink.
    pub fn into_parts(self) -> (L, W) {
        (self.list, self.output)
    }

    /// Run until `exit` or end of input.
    ///
    /// Unrecognized commands print a message and re-prompt.
    ///
    /// # Errors
    /// Only I/O failures on the input or output streams are returned.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "Session started on {} list with {} cities",
            L::DEBUG_NAME,
            self.list.len()
        );

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("End of input, closing session");
                break;
            };
            trace!("Input line: {:?}", line);

            let command = match Input::parse(&line) {
                Input::Blank => continue,
                Input::Unrecognized(token) => {
                    writeln!(
                        self.output,
                        "Unrecognized command '{}'. Commands: {}",
                        token, COMMANDS
                    )?;
                    continue;
                }
                Input::Ready(command) => command,
                Input::Incomplete(verb) => {
                    write!(self.output, "{}", verb.argument_prompt())?;
                    self.output.flush()?;
                    let Some(arg) = self.read_line()? else {
                        info!("End of input while waiting for an argument");
                        break;
                    };
                    verb.with_argument(parse_position(&arg))
                }
            };

            if self.execute(command)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Run one command against the list and write its output.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!("Executing {:?}", command);
        match command {
            Command::Size => {
                writeln!(self.output, "Size is {}", self.list.len())?;
            }
            Command::Delete(n) => {
                if self.list.delete_at(n).is_none() {
                    debug!("delete {} ignored: out of range", n);
                }
            }
            Command::Reverse => self.list.reverse(),
            Command::Get(n) => {
                if !self.list.move_to_front(n) {
                    debug!("get {} ignored: out of range or already at front", n);
                }
            }
            Command::Print(n) => {
                for city in self.list.top(n) {
                    writeln!(self.output, "{}", city)?;
                }
            }
            Command::Exit => {
                writeln!(self.output, "Exiting program...")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Next input line without its line terminator, `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; such a line then fails
    /// to match any verb and is reported as unrecognized.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
