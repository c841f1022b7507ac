//! Dispatches a parsed [`Command`] to its handler.

use anyhow::Result;

use super::{
    args::Command,
    commands::{CommandResult, init::init, keys::keys, split::split},
};

pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Split(cmd) => split(cmd),
        Command::Keys(cmd) => keys(cmd),
        Command::Init => init(),
    }
}
