use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn};
use rand::Rng;

use crate::board::{Board, Reveal};
use crate::config::{COLS, MINES, ROWS, WINNER_CAPACITY};
use crate::interaction::{Command, CommandParser, Coord, HELP};

/// `HHh:MMm:SSs`, hours are not wrapped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}h:{:02}m:{:02}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None)
    }
    Ok(Some(line.trim_end_matches(|c| c == '\n' || c == '\r').to_owned()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub name: String,
    pub elapsed: Duration
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.name, format_elapsed(self.elapsed))
    }
}

/// The most recent winners, oldest first. Full means the oldest one goes.
#[derive(Debug)]
pub struct Winners {
    entries: VecDeque<Winner>,
    capacity: usize
}

impl Winners {
    pub fn with_capacity(capacity: usize) -> Winners {
        Winners { entries: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn record(&mut self, name: &str, elapsed: Duration) {
        if self.capacity == 0 {
            return
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Winner { name: name.to_owned(), elapsed });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Winner> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Duration),
    Lost,
    Quit,
    /// Input ran out mid-game.
    Closed
}

/// One game: a board, the player on it and the clock.
pub struct Session {
    board: Board,
    player: String,
    started: Instant
}

impl Session {
    pub fn new(board: Board, player: &str) -> Session {
        Session { board, player: player.to_owned(), started: Instant::now() }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn play<R, W, G>(&mut self, input: &mut R, out: &mut W, parser: &CommandParser, rng: &mut G) -> Result<Outcome>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        writeln!(out, "Welcome, {}!", self.player)?;
        writeln!(out, "\n{}", self.board)?;
        loop {
            writeln!(out, "Available flags: {}", self.board.flags_remaining())?;
            writeln!(out, "\nElapsed time: {}", format_elapsed(self.elapsed()))?;
            writeln!(out, "\n[Type /help for assistance]")?;
            write!(out, "Command> ")?;
            out.flush()?;
            let line = match read_line(input)? {
                Some(line) => line,
                None => return Ok(Outcome::Closed)
            };
            let command = match parser.parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    warn!("rejected command {:?}: {}", line, err);
                    writeln!(out, "{}\n", err)?;
                    continue
                }
            };
            if let Some(outcome) = self.execute(command, out, rng)? {
                return Ok(outcome)
            }
        }
    }

    fn execute<W: Write, G: Rng + ?Sized>(&mut self, command: Command, out: &mut W, rng: &mut G) -> Result<Option<Outcome>> {
        match command {
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                writeln!(out, "\n{}", self.board)?;
            }
            Command::Quit => {
                writeln!(out, "Returning to the menu...\n")?;
                return Ok(Some(Outcome::Quit))
            }
            Command::Open(coord) => return self.open(coord, out),
            Command::Flag(coord) => return self.flag(coord, out),
            Command::Hint => {
                match self.board.hint(rng) {
                    Ok(point) => writeln!(out, "Hint: {} is safe.", point)?,
                    Err(err) => writeln!(out, "{}", err)?
                }
                writeln!(out, "\n{}", self.board)?;
                return self.check_won(out)
            }
            Command::Cheat => {
                writeln!(out, "\n{}", self.board.reveal_all())?;
            }
            Command::Win => {
                self.board.force_win()?;
                writeln!(out, "\n{}", self.board.reveal_all())?;
                return self.check_won(out)
            }
        }
        Ok(None)
    }

    fn open<W: Write>(&mut self, coord: Coord, out: &mut W) -> Result<Option<Outcome>> {
        let checked = self.board.size.locate(coord.row, coord.column)
            .and_then(|point| self.board.validate_open(&point).map(|()| point));
        let point = match checked {
            Ok(point) => point,
            Err(err) => {
                writeln!(out, "{}\n", err)?;
                return Ok(None)
            }
        };
        match self.board.reveal(&point)? {
            Reveal::Exploded => {
                writeln!(out, "\n{}", self.board)?;
                let elapsed = self.elapsed();
                info!("{} hit a mine at {} after {}", self.player, point, format_elapsed(elapsed));
                writeln!(out, "You lose! time: {}\nReturning to menu...\n", format_elapsed(elapsed))?;
                Ok(Some(Outcome::Lost))
            }
            Reveal::Opened(_) => {
                writeln!(out, "\n{}", self.board)?;
                self.check_won(out)
            }
        }
    }

    fn flag<W: Write>(&mut self, coord: Coord, out: &mut W) -> Result<Option<Outcome>> {
        let toggled = self.board.size.locate(coord.row, coord.column)
            .and_then(|point| self.board.toggle_flag(&point));
        match toggled {
            Ok(_) => writeln!(out, "\n{}", self.board)?,
            Err(err) => writeln!(out, "{}\n", err)?
        }
        self.check_won(out)
    }

    fn check_won<W: Write>(&self, out: &mut W) -> Result<Option<Outcome>> {
        if !self.board.is_won() {
            return Ok(None)
        }
        let elapsed = self.elapsed();
        info!("{} won after {}", self.player, format_elapsed(elapsed));
        writeln!(out, "You win! time: {}\nReturning to the menu...\n", format_elapsed(elapsed))?;
        Ok(Some(Outcome::Won(elapsed)))
    }
}

/// Everything that outlives a single game.
pub struct App<G> {
    winners: Winners,
    anonymous_count: usize,
    rng: G,
    parser: CommandParser
}

impl<G: Rng> App<G> {
    pub fn new(rng: G) -> Result<App<G>> {
        Ok(App {
            winners: Winners::with_capacity(WINNER_CAPACITY),
            anonymous_count: 0,
            rng,
            parser: CommandParser::new()?
        })
    }

    pub fn winners(&self) -> &Winners {
        &self.winners
    }

    /// Menu loop. Returns once the player exits or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        loop {
            writeln!(out, "MineSweeper Game")?;
            writeln!(out, "----------------")?;
            writeln!(out, "1. New Game")?;
            writeln!(out, "2. Last 10 Wins")?;
            writeln!(out, "3. Exit Game")?;
            write!(out, "Option> ")?;
            out.flush()?;
            let line = match read_line(input)? {
                Some(line) => line,
                None => return Ok(())
            };
            match line.trim().parse::<i64>() {
                Ok(1) => {
                    if self.new_game(input, out)? == Outcome::Closed {
                        return Ok(())
                    }
                }
                Ok(2) => self.show_winners(out)?,
                Ok(3) => {
                    writeln!(out, "Exiting...")?;
                    return Ok(())
                }
                Ok(_) => writeln!(out, "Invalid option, please choose a number between 1 and 3.\n")?,
                Err(_) => writeln!(out, "Invalid option, please choose a valid number.\n")?
            }
        }
    }

    fn show_winners<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.winners.is_empty() {
            writeln!(out, "\nNo winners yet.")?;
        } else {
            writeln!(out, "\nLast {} wins:", WINNER_CAPACITY)?;
            for winner in self.winners.iter() {
                writeln!(out, "{}", winner)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    fn ask_name<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Option<String>> {
        write!(out, "Username> ")?;
        out.flush()?;
        let name = match read_line(input)? {
            Some(name) => name.trim().to_owned(),
            None => return Ok(None)
        };
        if !name.is_empty() {
            return Ok(Some(name))
        }
        self.anonymous_count += 1;
        Ok(Some(format!("Anonymous {}", self.anonymous_count)))
    }

    fn new_game<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Outcome> {
        let board = Board::seeded(ROWS, COLS, MINES, &mut self.rng)?;
        let name = match self.ask_name(input, out)? {
            Some(name) => name,
            None => return Ok(Outcome::Closed)
        };
        info!("new game for {}", name);
        let mut session = Session::new(board, &name);
        let outcome = session.play(input, out, &self.parser, &mut self.rng)?;
        if let Outcome::Won(elapsed) = outcome {
            self.winners.record(&name, elapsed);
        }
        Ok(outcome)
    }
}
