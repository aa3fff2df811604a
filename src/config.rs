pub const ROWS: usize = 9;
pub const COLS: usize = 9;
pub const MINES: usize = 10;

/// How many finished games the "Last 10 Wins" menu remembers.
pub const WINNER_CAPACITY: usize = 10;

/// Environment variable read by [`crate::logging::init_logging`].
pub const LOG_ENV_VAR: &str = "MINESWEEPER_LOG";
