//! Console rendering of match events.
//!
//! Narration gets a short pause after each line so a fight reads like a
//! fight. Audio cues are turned into commands at the current volume and
//! logged; no sound device is driven from here.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use furry_fists::{
    AudioCue, EventSink, GameRng, MatchEvent, MatchOutcome, MatchSnapshot, Narrative, Side,
    SideMap, Volume,
};

use super::messages::Flavor;

pub struct ConsolePresenter<W> {
    out: W,
    flavor: Flavor,
    pacing: Duration,
    volume: Volume,
    names: SideMap<String>,
    error: Option<io::Error>,
}

impl<W: Write> ConsolePresenter<W> {
    /// `rng` seeds flavor text only; it never touches gameplay draws.
    pub fn new(out: W, rng: &GameRng) -> Self {
        Self {
            out,
            flavor: Flavor::new(rng.for_context("flavor")),
            pacing: Duration::ZERO,
            volume: Volume::default(),
            names: SideMap::with_value(String::new()),
            error: None,
        }
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_volume(mut self, volume: Volume) -> Self {
        self.volume = volume;
        self
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn set_volume(&mut self, volume: Volume) {
        tracing::info!(level = volume.level(), decibels = volume.decibels(), "volume changed");
        self.volume = volume;
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// First write error since the last call.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Request a sound outside of a match (menus).
    pub fn play(&mut self, cue: AudioCue) {
        self.emit(&MatchEvent::Audio(cue));
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n====================================")?;
        writeln!(self.out, "  WELCOME TO FURRY FISTS!")?;
        writeln!(self.out, "====================================\n")
    }

    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "\n{text}\n")
    }

    fn render(&mut self, event: &MatchEvent) -> io::Result<()> {
        match event {
            MatchEvent::MatchStarted {
                level,
                player,
                opponent,
            } => {
                self.names = SideMap::new(player.clone(), opponent.clone());
                writeln!(self.out, "\n=== Level {level}: {player} vs {opponent} ===")?;
            }
            MatchEvent::TurnStarted { name, .. } => {
                writeln!(self.out, "\n{name}'s turn!")?;
            }
            MatchEvent::Substituted { side, requested } => {
                writeln!(
                    self.out,
                    "Not enough SP for {requested}! {} uses Base Attack instead.",
                    self.names[*side]
                )?;
            }
            MatchEvent::AttackUsed { side, attack } => {
                writeln!(self.out, "{} used {attack}...", self.names[*side])?;
                self.pause();
            }
            MatchEvent::Rolled { side, roll, .. } => {
                writeln!(self.out, "{} rolled a {roll}...", self.names[*side])?;
                self.pause();
            }
            MatchEvent::StaminaRefund { side, amount } if *amount > 0 => {
                writeln!(
                    self.out,
                    "{} rolled high and regained {amount} SP!",
                    self.names[*side]
                )?;
            }
            MatchEvent::Narrative {
                category,
                attacker,
                target,
                damage,
            } => {
                let line = match category {
                    Narrative::NoDamage => self.flavor.no_damage(attacker),
                    Narrative::SuccessfulHit => self.flavor.hit(attacker, target),
                };
                writeln!(self.out, "{line}")?;
                if *damage > 0 {
                    writeln!(self.out, "...and dealt {damage} damage!")?;
                }
                self.pause();
            }
            MatchEvent::StaminaBonus { side, amount } if *amount > 0 => {
                writeln!(
                    self.out,
                    "{} has {} on the ropes and gained {amount} SP!",
                    self.names[*side],
                    self.names[side.other()]
                )?;
            }
            MatchEvent::Snapshot(snapshot) => self.status(snapshot)?,
            MatchEvent::MatchOver { outcome, .. } => {
                let player = &self.names[Side::Player];
                let opponent = &self.names[Side::Opponent];
                let line = match outcome {
                    MatchOutcome::Victory => self.flavor.victory(player, opponent),
                    MatchOutcome::Defeat => self.flavor.defeat(opponent, player),
                    MatchOutcome::Quit => format!("{player} slinks out of the arena."),
                };
                writeln!(self.out, "\n{line}")?;
                match outcome {
                    MatchOutcome::Victory => writeln!(self.out, "You won!")?,
                    MatchOutcome::Defeat => writeln!(self.out, "You lost!")?,
                    MatchOutcome::Quit => {}
                }
            }
            MatchEvent::Audio(cue) => {
                let command = self.volume.command(*cue);
                tracing::debug!(
                    cue = ?command.cue,
                    file = command.cue.file_name(),
                    looping = command.cue.is_music(),
                    decibels = command.decibels,
                    "audio"
                );
            }
            MatchEvent::StaminaRefund { .. } | MatchEvent::StaminaBonus { .. } => {}
        }
        Ok(())
    }

    fn status(&mut self, snapshot: &MatchSnapshot) -> io::Result<()> {
        writeln!(self.out, "\nCurrent status:")?;
        for (_, fighter) in snapshot.fighters.iter() {
            writeln!(
                self.out,
                "{}'s HP: {} | {}'s SP: {}",
                fighter.name, fighter.health, fighter.name, fighter.stamina
            )?;
        }
        Ok(())
    }

    fn pause(&mut self) {
        if self.pacing.is_zero() {
            return;
        }
        if let Err(err) = self.out.flush() {
            tracing::error!(error = %err, "failed to flush match output");
            self.error.get_or_insert(err);
        }
        thread::sleep(self.pacing);
    }
}

impl<W: Write> EventSink for ConsolePresenter<W> {
    fn emit(&mut self, event: &MatchEvent) {
        if let Err(err) = self.render(event) {
            tracing::error!(error = %err, "failed to write match output");
            self.error.get_or_insert(err);
        }
    }
}
