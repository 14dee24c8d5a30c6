//! The match loop.
//!
//! A `Match` owns both fighters, the level counter, the random source and
//! the opponent policy. It alternates half-turns (player first) through the
//! `TurnEngine` and stops the moment either fighter's health reaches zero.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    Attack, CombatConfig, CombatEntity, GameRng, PlayerCommand, RandomSource, Side, SideMap,
};
use crate::error::MatchError;
use crate::events::{AudioCue, EventSink, MatchEvent, MatchSnapshot};
use crate::policy::{LevelPolicy, OpponentPolicy};
use crate::rules::{TurnEngine, TurnReport};

use super::input::PlayerInput;
use super::outcome::{MatchOutcome, MatchStatus};

/// Events produced by one half-turn. Most turns fit inline.
type TurnEvents = SmallVec<[MatchEvent; 8]>;

/// A resolved half-turn with its position in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Round number, starting at 1. A round is a player half-turn followed
    /// by an opponent half-turn.
    pub round: u32,

    /// Position of this half-turn in the match, starting at 0.
    pub sequence: u32,

    pub report: TurnReport,
}

/// One player-versus-opponent match.
///
/// ## Example
///
/// ```
/// use furry_fists::core::{Attack, CombatConfig, PlayerCommand};
/// use furry_fists::events::{MatchSnapshot, RecordingSink};
/// use furry_fists::session::{Match, MatchOutcome};
///
/// let mut bout = Match::new(CombatConfig::default(), "wolf", "sloth", 7).unwrap();
/// let mut sink = RecordingSink::new();
/// let mut input = |_: &MatchSnapshot| PlayerCommand::Attack(Attack::Tertiary);
///
/// let outcome = bout.run(&mut input, &mut sink).unwrap();
/// assert_ne!(outcome, MatchOutcome::Quit);
/// assert!(!bout.player().is_alive() || !bout.opponent().is_alive());
/// ```
#[derive(Clone, Debug)]
pub struct Match<R = GameRng, P = LevelPolicy> {
    config: CombatConfig,
    engine: TurnEngine,
    fighters: SideMap<CombatEntity>,
    level: u32,
    round: u32,
    next_side: Side,
    status: MatchStatus,
    history: Vec<TurnRecord>,
    rng: R,
    policy: P,
}

impl Match<GameRng, LevelPolicy> {
    /// Set up a level-1 match with a seeded `GameRng`.
    pub fn new(
        config: CombatConfig,
        player: impl Into<String>,
        opponent: impl Into<String>,
        seed: u64,
    ) -> Result<Self, MatchError> {
        Self::with_rng(config, player, opponent, GameRng::new(seed))
    }
}

impl<R: RandomSource> Match<R, LevelPolicy> {
    /// Set up a level-1 match drawing from `rng`.
    pub fn with_rng(
        config: CombatConfig,
        player: impl Into<String>,
        opponent: impl Into<String>,
        rng: R,
    ) -> Result<Self, MatchError> {
        config.validate()?;

        let player = player.into();
        let opponent = opponent.into();
        if player == opponent {
            return Err(MatchError::DuplicateNames(player));
        }

        let fighters = SideMap::new(
            CombatEntity::new(player, Side::Player, config.starting_health, config.starting_stamina),
            CombatEntity::new(
                opponent,
                Side::Opponent,
                config.starting_health,
                config.starting_stamina,
            ),
        );

        Ok(Self {
            engine: TurnEngine::new(config.rules.clone()),
            config,
            fighters,
            level: 1,
            round: 0,
            next_side: Side::Player,
            status: MatchStatus::InProgress,
            history: Vec::new(),
            rng,
            policy: LevelPolicy,
        })
    }
}

impl<R: RandomSource, P: OpponentPolicy> Match<R, P> {
    /// Replace the opponent policy.
    pub fn with_policy<Q: OpponentPolicy>(self, policy: Q) -> Match<R, Q> {
        Match {
            config: self.config,
            engine: self.engine,
            fighters: self.fighters,
            level: self.level,
            round: self.round,
            next_side: self.next_side,
            status: self.status,
            history: self.history,
            rng: self.rng,
            policy,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Current round, 0 before the first player turn.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    /// Side whose half-turn comes next.
    #[must_use]
    pub const fn next_side(&self) -> Side {
        self.next_side
    }

    #[must_use]
    pub fn fighter(&self, side: Side) -> &CombatEntity {
        &self.fighters[side]
    }

    #[must_use]
    pub fn player(&self) -> &CombatEntity {
        self.fighter(Side::Player)
    }

    #[must_use]
    pub fn opponent(&self) -> &CombatEntity {
        self.fighter(Side::Opponent)
    }

    /// Every half-turn resolved since the last (re)start.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            level: self.level,
            fighters: self.fighters.map(CombatEntity::snapshot),
        }
    }

    // === Turns ===

    /// Announce the match: start event, combat music, initial resources.
    pub fn begin(&self, sink: &mut dyn EventSink) {
        tracing::info!(
            level = self.level,
            player = %self.player().name(),
            opponent = %self.opponent().name(),
            "match started"
        );
        sink.emit(&MatchEvent::MatchStarted {
            level: self.level,
            player: self.player().name().to_string(),
            opponent: self.opponent().name().to_string(),
        });
        sink.emit(&MatchEvent::Audio(AudioCue::GameplayMusic));
        sink.emit(&MatchEvent::Snapshot(self.snapshot()));
    }

    /// Resolve the player's half-turn.
    ///
    /// `Quit` ends the match before anything is mutated.
    pub fn player_turn(
        &mut self,
        command: PlayerCommand,
        sink: &mut dyn EventSink,
    ) -> Result<MatchStatus, MatchError> {
        self.ensure_turn(Side::Player)?;

        match command {
            PlayerCommand::Quit => {
                if !self.config.allow_quit {
                    return Err(MatchError::QuitDisabled);
                }
                let mut events = TurnEvents::new();
                self.finish(MatchOutcome::Quit, &mut events);
                emit_all(sink, &events);
                Ok(self.status)
            }
            PlayerCommand::Attack(attack) => {
                self.round += 1;
                Ok(self.half_turn(Side::Player, attack, sink))
            }
        }
    }

    /// Let the opponent policy pick an attack and resolve it.
    pub fn opponent_turn(&mut self, sink: &mut dyn EventSink) -> Result<MatchStatus, MatchError> {
        self.ensure_turn(Side::Opponent)?;

        let stamina = self.opponent().stamina();
        let attack = self.policy.choose_attack(self.level, stamina, &mut self.rng);
        Ok(self.half_turn(Side::Opponent, attack, sink))
    }

    /// Player half-turn, then opponent half-turn if the match is still on.
    pub fn play_round(
        &mut self,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<MatchStatus, MatchError> {
        let command = input.select_command(&self.snapshot());
        if self.player_turn(command, sink)?.is_finished() {
            return Ok(self.status);
        }
        self.opponent_turn(sink)
    }

    /// Announce the match and play rounds until it ends.
    pub fn run(
        &mut self,
        input: &mut dyn PlayerInput,
        sink: &mut dyn EventSink,
    ) -> Result<MatchOutcome, MatchError> {
        self.ensure_in_progress()?;
        self.begin(sink);
        loop {
            if let MatchStatus::Finished(outcome) = self.play_round(input, sink)? {
                return Ok(outcome);
            }
        }
    }

    // === Between matches ===

    /// Fight the same level again with both fighters at full resources.
    pub fn replay(&mut self) -> Result<(), MatchError> {
        if !self.status.is_finished() {
            return Err(MatchError::NotFinished);
        }
        tracing::info!(level = self.level, "replaying level");
        self.restart();
        Ok(())
    }

    /// Move to the next level after a victory. Returns the new level.
    pub fn advance_level(&mut self) -> Result<u32, MatchError> {
        match self.status {
            MatchStatus::InProgress => Err(MatchError::NotFinished),
            MatchStatus::Finished(MatchOutcome::Victory) => {
                self.level += 1;
                tracing::info!(level = self.level, "advanced to next level");
                self.restart();
                Ok(self.level)
            }
            MatchStatus::Finished(outcome) => Err(MatchError::NotAVictory(outcome)),
        }
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> Result<(), MatchError> {
        match self.status {
            MatchStatus::InProgress => Ok(()),
            MatchStatus::Finished(outcome) => Err(MatchError::MatchOver(outcome)),
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), MatchError> {
        self.ensure_in_progress()?;
        if self.next_side != side {
            return Err(MatchError::OutOfTurn(side));
        }
        Ok(())
    }

    fn restart(&mut self) {
        for (_, fighter) in self.fighters.iter_mut() {
            fighter.reset_to_full();
        }
        self.round = 0;
        self.next_side = Side::Player;
        self.status = MatchStatus::InProgress;
        self.history.clear();
    }

    fn half_turn(&mut self, side: Side, attack: Attack, sink: &mut dyn EventSink) -> MatchStatus {
        let mut events = TurnEvents::new();
        events.push(MatchEvent::TurnStarted {
            side,
            name: self.fighters[side].name().to_string(),
        });

        let (attacker, target) = self.fighters.pair_mut(side);
        let report = self.engine.resolve(attacker, target, attack, &mut self.rng);
        describe(&report, attacker, target, &mut events);
        let target_down = !target.is_alive();

        self.history.push(TurnRecord {
            round: self.round,
            sequence: self.history.len() as u32,
            report,
        });
        events.push(MatchEvent::Snapshot(self.snapshot()));

        if target_down {
            let outcome = match side {
                Side::Player => MatchOutcome::Victory,
                Side::Opponent => MatchOutcome::Defeat,
            };
            self.finish(outcome, &mut events);
        } else {
            self.next_side = side.other();
        }

        emit_all(sink, &events);
        self.status
    }

    fn finish(&mut self, outcome: MatchOutcome, events: &mut TurnEvents) {
        self.status = MatchStatus::Finished(outcome);
        let winner = outcome
            .winner()
            .map(|side| self.fighters[side].name().to_string());

        tracing::info!(?outcome, winner = ?winner, round = self.round, "match over");

        events.push(MatchEvent::MatchOver { outcome, winner });
        match outcome {
            MatchOutcome::Victory => events.push(MatchEvent::Audio(AudioCue::Victory)),
            MatchOutcome::Defeat => events.push(MatchEvent::Audio(AudioCue::Defeat)),
            MatchOutcome::Quit => {}
        }
    }
}

/// Translate a report into presentation events.
fn describe(
    report: &TurnReport,
    attacker: &CombatEntity,
    target: &CombatEntity,
    events: &mut TurnEvents,
) {
    let side = report.actor;

    if report.substituted {
        events.push(MatchEvent::Substituted {
            side,
            requested: report.requested,
        });
    }
    events.push(MatchEvent::AttackUsed {
        side,
        attack: report.performed,
    });
    if let Some(roll) = report.roll {
        events.push(MatchEvent::Rolled {
            side,
            attack: report.performed,
            roll,
        });
    }
    if let Some(amount) = report.refund {
        events.push(MatchEvent::StaminaRefund { side, amount });
    }
    if let Some(category) = report.narrative {
        events.push(MatchEvent::Narrative {
            category,
            attacker: attacker.name().to_string(),
            target: target.name().to_string(),
            damage: report.damage,
        });
    }
    if let Some(amount) = report.bonus {
        events.push(MatchEvent::StaminaBonus { side, amount });
    }
}

fn emit_all(sink: &mut dyn EventSink, events: &[MatchEvent]) {
    for event in events {
        sink.emit(event);
    }
}
