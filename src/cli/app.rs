//! Menu flow around matches.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use furry_fists::{AudioCue, GameRng, Match, PostMatchChoice, Roster};

use super::config::CliConfig;
use super::input::ConsoleInput;
use super::presenter::ConsolePresenter;

const MAIN_MENU: [&str; 3] = ["Start Game", "Adjust Audio", "Quit"];

/// Where a session of matches left the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionEnd {
    MainMenu,
    Quit,
}

/// The whole game: main menu, fighter selection, matches, and the
/// post-match menu.
pub struct App<R, W, P> {
    config: CliConfig,
    roster: Roster,
    rng: GameRng,
    input: ConsoleInput<R, W>,
    presenter: ConsolePresenter<P>,
}

impl<R: BufRead, W: Write, P: Write> App<R, W, P> {
    pub fn new(config: CliConfig, reader: R, prompts: W, narration: P) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        tracing::info!(seed = rng.seed(), "session seed");

        let input = ConsoleInput::new(reader, prompts).with_quit(config.combat.allow_quit);
        let presenter = ConsolePresenter::new(narration, &rng)
            .with_pacing(config.pacing)
            .with_volume(config.volume);

        Self {
            config,
            roster: Roster::default(),
            rng,
            input,
            presenter,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.presenter.banner()?;
        self.presenter.play(AudioCue::MenuMusic);

        loop {
            let choice = self.input.choose("Choose an option:", &MAIN_MENU)?;
            self.presenter.play(AudioCue::MenuSelect);

            match choice {
                0 => {
                    if self.play_session()? == SessionEnd::Quit {
                        break;
                    }
                }
                1 => {
                    let volume = self.input.choose_volume()?;
                    self.presenter.set_volume(volume);
                    self.presenter.play(AudioCue::MenuSelect);
                    let level = self.presenter.volume().level();
                    self.presenter.message(&format!("Volume set to {level}."))?;
                }
                _ => break,
            }
        }

        self.presenter.message("Thanks for playing Furry Fists!")?;
        Ok(())
    }

    /// Pick fighters, then fight until the player leaves.
    fn play_session(&mut self) -> Result<SessionEnd> {
        let names = self.roster.names().to_vec();
        let player = names[self.input.choose("Choose your fighter:", &names)?].clone();
        self.presenter.play(AudioCue::MenuSelect);

        let rivals = self.roster.without(&player);
        let opponent = rivals[self.input.choose("Choose your opponent:", &rivals)?].clone();
        self.presenter.play(AudioCue::MenuSelect);

        let mut bout =
            Match::with_rng(self.config.combat.clone(), player, opponent, self.rng.fork())
                .context("failed to set up match")?;

        loop {
            let result = bout.run(&mut self.input, &mut self.presenter);
            if let Some(err) = self.input.take_error() {
                return Err(err);
            }
            if let Some(err) = self.presenter.take_error() {
                return Err(err).context("failed to write match output");
            }

            let options = PostMatchChoice::options_for(result?);
            if options.is_empty() {
                return Ok(SessionEnd::Quit);
            }

            let labels: Vec<&str> = options.iter().map(|choice| choice.label()).collect();
            let picked = options[self.input.choose("What would you like to do?", &labels)?];
            self.presenter.play(AudioCue::MenuSelect);

            match picked {
                PostMatchChoice::NextLevel => {
                    bout.advance_level()?;
                }
                PostMatchChoice::ReplayLevel => bout.replay()?,
                PostMatchChoice::MainMenu => {
                    self.presenter.play(AudioCue::MenuMusic);
                    return Ok(SessionEnd::MainMenu);
                }
                PostMatchChoice::Quit => return Ok(SessionEnd::Quit),
            }
        }
    }
}
