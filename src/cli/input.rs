//! Numbered-menu input from a line reader.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use furry_fists::{Attack, MatchSnapshot, PlayerCommand, PlayerInput, Volume};

/// Reads numbered choices, re-prompting until the answer is valid.
pub struct ConsoleInput<R, W> {
    reader: R,
    out: W,
    allow_quit: bool,
    error: Option<anyhow::Error>,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            allow_quit: true,
            error: None,
        }
    }

    /// Offer "Quit" in the attack menu.
    pub fn with_quit(mut self, allow: bool) -> Self {
        self.allow_quit = allow;
        self
    }

    /// First error hit while asking for an attack, if any.
    ///
    /// `PlayerInput` can't fail, so a closed stdin mid-match is reported as
    /// a quit and the real cause is parked here.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    /// Show `options` as a numbered list and return the chosen index.
    pub fn choose<S: AsRef<str>>(&mut self, prompt: &str, options: &[S]) -> Result<usize> {
        writeln!(self.out, "{prompt}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, option.as_ref())?;
        }
        self.read_number("Enter the number of your choice: ", 1..=options.len())
            .map(|n| n - 1)
    }

    /// Ask for a volume level on the 1-10 scale.
    pub fn choose_volume(&mut self) -> Result<Volume> {
        writeln!(self.out, "Enter a volume level (1 to 10):")?;
        writeln!(self.out, "1 = Completely off, 10 = Full volume")?;
        let level = self.read_number(
            "Enter a volume level between 1 and 10: ",
            usize::from(Volume::MIN)..=usize::from(Volume::MAX),
        )?;
        Ok(Volume::new(u8::try_from(level)?))
    }

    fn attack_menu(&mut self, snapshot: &MatchSnapshot) -> Result<PlayerCommand> {
        let player = snapshot.player();
        let opponent = snapshot.opponent();

        writeln!(self.out, "\n{}'s turn! Choose your attack:", player.name)?;
        let mut options: Vec<String> = Attack::ALL
            .iter()
            .map(|attack| match attack {
                Attack::Base => format!("{attack} (5 DMG, 0 SP)"),
                _ => format!("{attack} (Dice DMG, costs {} SP)", attack.cost()),
            })
            .collect();
        if self.allow_quit {
            options.push("Quit".to_string());
        }
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "{}. {option}", i + 1)?;
        }
        writeln!(self.out, "Your HP: {} | Your SP: {}", player.health, player.stamina)?;
        writeln!(
            self.out,
            "{}'s HP: {} | {}'s SP: {}",
            opponent.name, opponent.health, opponent.name, opponent.stamina
        )?;

        let choice = self.read_number("Enter the number of your choice: ", 1..=options.len())?;
        Ok(Attack::ALL
            .get(choice - 1)
            .map_or(PlayerCommand::Quit, |&attack| PlayerCommand::Attack(attack)))
    }

    fn read_number(
        &mut self,
        prompt: &str,
        valid: std::ops::RangeInclusive<usize>,
    ) -> Result<usize> {
        let mut line = String::new();
        loop {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;

            line.clear();
            if self.reader.read_line(&mut line).context("failed to read input")? == 0 {
                bail!("input closed");
            }
            match line.trim().parse::<usize>() {
                Ok(n) if valid.contains(&n) => return Ok(n),
                _ => writeln!(self.out, "Invalid input. Please try again.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> PlayerInput for ConsoleInput<R, W> {
    fn select_command(&mut self, snapshot: &MatchSnapshot) -> PlayerCommand {
        match self.attack_menu(snapshot) {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(error = %err, "attack input failed, quitting match");
                self.error.get_or_insert(err);
                PlayerCommand::Quit
            }
        }
    }
}
