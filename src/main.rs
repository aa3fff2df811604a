use std::io;

use log::info;
use minesweeper_console::{init_logging, App};
use rand::thread_rng;

fn main() -> anyhow::Result<()> {
    init_logging();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(thread_rng())?;
    app.run(&mut stdin.lock(), &mut stdout.lock())?;
    info!("bye");
    Ok(())
}
