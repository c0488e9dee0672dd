//! The interactive game loop.
//!
//! The loop owns the three pieces of running state (interpreter, player,
//! map) and the two jobs the interpreter leaves to its caller: noticing
//! `quit`, and describing the tile after a move that actually went
//! somewhere.

use anyhow::Result;
use log::info;
use std::io::{self, BufRead, Write};

use crate::command::{describe_tile, Command, Interpreter};
use crate::player::Player;
use crate::world::Map;

const FAREWELL: &str = "Until next time.\n";

pub struct Game {
    interpreter: Interpreter,
    player: Player,
    map: Map,
}

impl Game {
    pub fn new(interpreter: Interpreter, player: Player, map: Map) -> Self {
        Self {
            interpreter,
            player,
            map,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Run the read-interpret-print loop until the player quits or stdin
    /// closes.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        info!(
            "starting game for {} in {}",
            self.player.name, self.map.name
        );

        print!(
            "Welcome to {}, {}.\nType 'help' for a list of commands.\n\n",
            self.map.name, self.player.name
        );
        print!("{}", describe_tile(&self.player, &self.map));

        let mut line = String::new();
        loop {
            print!("> ");
            stdout.flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                println!();
                break;
            }
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            // Quit is the loop's to notice; the interpreter treats it as a
            // silent no-op.
            if matches!(Command::parse(&line), Command::Quit) {
                break;
            }
            let before = self.player.coords;
            let response = self
                .interpreter
                .interpret(&line, &mut self.player, &mut self.map);
            print!("{response}");
            if self.player.coords != before {
                print!("{}", describe_tile(&self.player, &self.map));
            }
            stdout.flush()?;
        }

        print!("{FAREWELL}");
        stdout.flush()?;
        Ok(())
    }
}
