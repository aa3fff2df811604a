pub mod board;
pub mod config;
pub mod error;
pub mod interaction;
mod logging;
pub mod session;

pub use logging::init_logging;
pub use session::{App, Outcome, Session};
