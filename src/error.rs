use thiserror::Error;

/// Everything the board refuses to do. The `Display` text is what the player sees.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid row! Please enter a letter between A and {last}.")]
    InvalidRow { last: char },
    #[error("Invalid column! Please enter a number between 1 and {cols}.")]
    InvalidColumn { cols: usize },
    #[error("Cell already opened!")]
    AlreadyRevealed,
    #[error("Flag already placed!")]
    AlreadyFlagged,
    #[error("No flags left! Remove a flag before placing another.")]
    NoFlagsRemaining,
    #[error("No cell left to hint at.")]
    NoHintAvailable,
    #[error("Too many mines: {mines} do not fit on {cells} cells")]
    TooManyMines { mines: usize, cells: usize },
    #[error("Mine layout is invalid")]
    InvalidLayout,
    #[error("Mines were already placed")]
    AlreadySeeded,
    #[error("Mines have not been placed yet")]
    NotSeeded,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
}

/// Rejected command lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command! To see the list of available commands, type /help.")]
    Unknown,
    #[error("Invalid command, please use {usage}.")]
    Usage { usage: &'static str },
    #[error("Invalid row! Please enter a single letter.")]
    BadRow,
    #[error("Invalid column! Please enter a valid number.")]
    BadColumn,
}

pub type Result<T> = core::result::Result<T, BoardError>;
