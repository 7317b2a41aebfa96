#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! cardscore — score dealt card hands and write the winners to a file.

mod cli;
mod commands;
mod game;
mod logging;
mod types;

use cli::write_console;

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("{err:#}");
    }

    if let Some(message) = commands::execute(std::env::args_os()) {
        write_console(&message);
    }
}
