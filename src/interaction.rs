use itertools::Itertools;
use regex::Regex;

use crate::error::CommandError;

const OPEN_USAGE: &str = "/open <row> <column>";
const FLAG_USAGE: &str = "/flag <row> <column>";

pub const HELP: &str = "Available commands:
/help - Displays a list of available commands.
/quit - Quits the game.
/open <row> <column> - Opens a cell at the specified coordinates.
/flag <row> <column> - Flags a cell at the specified coordinates. If the cell is already flagged, it will be unflagged.
/hint - Reveals a random cell without a bomb.
/cheat - Reveals the entire board.
/win - Reveals the entire board and wins the game.";

/// A cell as typed: row index from the letter, column still 1-based.
/// Bounds are checked against the board later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub column: usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Open(Coord),
    Flag(Coord),
    Hint,
    Cheat,
    Win
}

pub struct CommandParser {
    row: Regex,
    column: Regex
}

impl CommandParser {
    pub fn new() -> Result<CommandParser, regex::Error> {
        Ok(CommandParser {
            row: Regex::new(r"^[A-Za-z]$")?,
            column: Regex::new(r"^\d+$")?
        })
    }

    pub fn parse(&self, input: &str) -> Result<Command, CommandError> {
        let tokens = input.split_whitespace().collect_vec();
        let (name, args) = match tokens.split_first() {
            Some((name, args)) => (*name, args),
            None => return Err(CommandError::Unknown)
        };
        match name {
            "/help" => Ok(Command::Help),
            "/quit" => Ok(Command::Quit),
            "/open" => self.coord(args, OPEN_USAGE).map(Command::Open),
            "/flag" => self.coord(args, FLAG_USAGE).map(Command::Flag),
            "/hint" => Ok(Command::Hint),
            "/cheat" => Ok(Command::Cheat),
            "/win" => Ok(Command::Win),
            _ => Err(CommandError::Unknown)
        }
    }

    fn coord(&self, args: &[&str], usage: &'static str) -> Result<Coord, CommandError> {
        let (row, column) = match args {
            [row, column] => (*row, *column),
            _ => return Err(CommandError::Usage { usage })
        };
        if !self.row.is_match(row) {
            return Err(CommandError::BadRow)
        }
        if !self.column.is_match(column) {
            return Err(CommandError::BadColumn)
        }
        let column = column.parse().map_err(|_| CommandError::BadColumn)?;
        let letter = row.bytes().next().ok_or(CommandError::BadRow)?;
        // lowercase letters land past the last row and get reported as out of range
        Ok(Coord { row: (letter - b'A') as usize, column })
    }
}
