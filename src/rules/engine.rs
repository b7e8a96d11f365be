//! The turn engine.
//!
//! `TurnEngine` owns the `GameState` and is the only thing that mutates it.
//! Each command either succeeds and moves the game forward, or fails with an
//! `EngineError` and leaves the state untouched.
//!
//! ## Turn flow
//!
//! 1. `set_target` once per game
//! 2. `throw_initial` rolls both hands
//! 3. `toggle_keep` / `re_roll` up to two more times
//! 4. `score_turn` banks the human's pips and plays the computer's turn;
//!    the third roll banks automatically
//! 5. After a win, `reset` starts a new game at the same target
//!
//! The engine never resets on its own. How long a win announcement stays
//! on screen is up to the caller.
//!
//! ## Journal and replay
//!
//! `GameState::history` covers the current game only. The engine also keeps
//! a session journal: every applied command including `Reset`, plus any
//! refused command that had already drawn dice. Feeding the journal to
//! `TurnEngine::replay` with the same config and seed rebuilds the engine.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandRecord, TargetInput};
use crate::core::config::GameConfig;
use crate::core::dice::{human_pips, roll_faces, roll_human_hand, DICE_PER_HAND, MAX_ROLLS};
use crate::core::error::{CommandKind, ConfigError, EngineError, Precondition};
use crate::core::event::GameEvent;
use crate::core::outcome::Outcome;
use crate::core::rng::{DiceSource, GameRng};
use crate::core::side::{Side, SideMap};
use crate::core::state::{GameState, SessionTally};

use super::computer::{ComputerStrategy, ComputerTurn, RandomReroller};
use super::outcome::{judge, TieBreak, TurnReport, Verdict};
use super::tiebreak::sudden_death;

/// What a successfully applied `Command` produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutput {
    /// The confirmed target.
    Target(u32),
    /// State changed; read it through `TurnEngine::state`.
    Updated,
    /// A turn was banked.
    Scored(TurnReport),
}

/// Everything needed to bank a turn, computed before anything is committed.
struct ScorePlan {
    human_turn_score: u32,
    computer: ComputerTurn,
    totals: SideMap<u32>,
    tie_break: Option<TieBreak>,
    outcome: Option<Outcome>,
}

/// Rules engine for one table.
///
/// Generic over the randomness source so tests can script dice.
///
/// ## Example
///
/// ```
/// use lucky_toss::TurnEngine;
///
/// let mut engine = TurnEngine::seeded(42);
/// engine.set_target("").unwrap();
/// engine.throw_initial().unwrap();
/// engine.toggle_keep(0).unwrap();
/// engine.re_roll().unwrap();
///
/// let report = engine.score_turn().unwrap();
/// assert_eq!(engine.state().total(lucky_toss::Side::Human), report.human_turn_score);
/// ```
pub struct TurnEngine<R: DiceSource = GameRng> {
    config: GameConfig,
    state: GameState,
    source: R,
    strategy: Box<dyn ComputerStrategy>,
    events: Vec<GameEvent>,
    journal: Vector<CommandRecord>,
}

impl TurnEngine<GameRng> {
    /// Engine with the default config and a seeded RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(GameConfig::default(), GameRng::new(seed))
    }

    /// Rebuild an engine by applying a journal to a fresh seeded engine.
    ///
    /// With the config and seed of the original engine, the result has the
    /// same state, tally and journal. The computer plays the stock
    /// `RandomReroller`.
    ///
    /// ```
    /// use lucky_toss::{GameConfig, TurnEngine};
    ///
    /// let mut original = TurnEngine::seeded(11);
    /// original.set_target(40).unwrap();
    /// original.throw_initial().unwrap();
    /// original.score_turn().unwrap();
    ///
    /// let copy = TurnEngine::replay(GameConfig::default(), 11, original.journal()).unwrap();
    /// assert_eq!(copy.state(), original.state());
    /// ```
    pub fn replay<'a>(
        config: GameConfig,
        seed: u64,
        records: impl IntoIterator<Item = &'a CommandRecord>,
    ) -> Result<Self, EngineError> {
        Self::replay_with(config, GameRng::new(seed), records)
    }
}

impl<R: DiceSource> TurnEngine<R> {
    /// Create an engine and roll the opening hands.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: GameConfig, source: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, source))
    }

    fn from_parts(config: GameConfig, mut source: R) -> Self {
        let human = roll_human_hand(&mut source);
        let computer = roll_faces(&mut source);
        let strategy = Box::new(RandomReroller::from_config(&config));

        log::debug!(
            "new engine: default target {}, tie-break limit {:?}",
            config.default_target,
            config.tie_break_limit
        );

        Self {
            config,
            state: GameState::new(human, computer),
            source,
            strategy,
            events: Vec::new(),
            journal: Vector::new(),
        }
    }

    /// Like `TurnEngine::replay`, with an explicit randomness source.
    ///
    /// A refused journal entry must be refused again; if it succeeds the
    /// replay has diverged.
    pub fn replay_with<'a>(
        config: GameConfig,
        source: R,
        records: impl IntoIterator<Item = &'a CommandRecord>,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::new(config, source).map_err(|err| EngineError::InvalidConfig {
            reason: err.to_string(),
        })?;

        for (position, record) in records.into_iter().enumerate() {
            match engine.apply(record.command.clone()) {
                Ok(_) if record.refused => {
                    return Err(EngineError::ReplayDiverged { position });
                }
                Err(err) if !record.refused => return Err(err),
                _ => {}
            }
        }

        log::debug!("replayed {} journal entries", engine.journal.len());
        Ok(engine)
    }

    /// Replace the computer's roll policy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl ComputerStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    // === Accessors ===

    /// Read-only snapshot of the game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Wins across games played on this engine.
    #[must_use]
    pub fn tally(&self) -> &SessionTally {
        &self.state.tally
    }

    /// The randomness source.
    #[must_use]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// The randomness source, e.g. to script more dice in a test.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Every command of the session, refused dice-drawing ones included.
    #[must_use]
    pub fn journal(&self) -> &Vector<CommandRecord> {
        &self.journal
    }

    /// Events queued since the last drain, oldest first.
    ///
    /// Callers are expected to drain after each command. Events still
    /// queued when `reset` runs are discarded.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Commands ===

    /// Confirm the target score.
    ///
    /// Blank or missing input takes the configured default. The target can
    /// only be set once per game.
    pub fn set_target(&mut self, input: impl Into<TargetInput>) -> Result<u32, EngineError> {
        let input = input.into();
        if let Some(target) = self.state.target {
            return Err(EngineError::TargetAlreadySet { target });
        }
        let target = input.resolve(self.config.default_target)?;

        self.state.target = Some(target);
        self.record(Command::SetTarget { input }, self.state.turn_number);
        self.events.push(GameEvent::TargetSet { target });
        log::debug!("target set to {}", target);

        Ok(target)
    }

    /// Initial throw of the turn: five fresh dice for each side.
    pub fn throw_initial(&mut self) -> Result<&GameState, EngineError> {
        self.check_in_play(CommandKind::Throw)?;
        if self.state.roll_count != 0 {
            return Err(EngineError::precondition(
                CommandKind::Throw,
                Precondition::AlreadyThrown,
            ));
        }

        // Human throws first
        let human = roll_human_hand(&mut self.source);
        let computer = roll_faces(&mut self.source);
        let turn_score = human_pips(&human);

        self.state.human_dice = human;
        self.state.computer_dice = computer;
        self.state.roll_count = 1;
        self.state.turn_score = turn_score;

        self.record(Command::Throw, self.state.turn_number);
        self.events.push(GameEvent::Thrown {
            human,
            computer,
            turn_score,
        });
        log::debug!(
            "turn {}: thrown {:?} for {}",
            self.state.turn_number,
            human.map(|d| d.value),
            turn_score
        );

        Ok(&self.state)
    }

    /// Keep or release one of the human's dice.
    pub fn toggle_keep(&mut self, index: usize) -> Result<&GameState, EngineError> {
        if self.state.outcome.is_some() {
            return Err(EngineError::precondition(
                CommandKind::ToggleKeep,
                Precondition::GameOver,
            ));
        }
        if self.state.roll_count >= MAX_ROLLS {
            return Err(EngineError::precondition(
                CommandKind::ToggleKeep,
                Precondition::NoRollsLeft,
            ));
        }
        if index >= DICE_PER_HAND {
            return Err(EngineError::IndexOutOfRange { index });
        }

        let die = &mut self.state.human_dice[index];
        die.kept = !die.kept;
        let kept = die.kept;

        self.record(Command::ToggleKeep { index }, self.state.turn_number);
        self.events.push(GameEvent::KeepToggled { index, kept });
        log::debug!("die {} kept: {}", index, kept);

        Ok(&self.state)
    }

    /// Re-roll every die that is not kept.
    ///
    /// Each fresh face is added to the turn score. The third roll banks the
    /// turn at once and its report is returned.
    pub fn re_roll(&mut self) -> Result<Option<TurnReport>, EngineError> {
        self.check_in_play(CommandKind::ReRoll)?;
        match self.state.roll_count {
            0 => {
                return Err(EngineError::precondition(
                    CommandKind::ReRoll,
                    Precondition::NotThrown,
                ))
            }
            n if n >= MAX_ROLLS => {
                return Err(EngineError::precondition(
                    CommandKind::ReRoll,
                    Precondition::NoRollsLeft,
                ))
            }
            _ => {}
        }

        let mut dice = self.state.human_dice;
        let mut added = 0;
        for die in dice.iter_mut().filter(|d| !d.kept) {
            die.value = self.source.roll_die();
            added += u32::from(die.value);
        }
        let roll_count = self.state.roll_count + 1;
        let turn_score = self.state.turn_score + added;

        // Plan the automatic bank before committing so a failed tie-break
        // leaves the roll undone as well.
        let plan = if roll_count == MAX_ROLLS {
            match self.plan_score(turn_score) {
                Ok(plan) => Some(plan),
                Err(err) => {
                    self.record_refused(Command::ReRoll);
                    return Err(err);
                }
            }
        } else {
            None
        };

        let turn = self.state.turn_number;
        self.state.human_dice = dice;
        self.state.roll_count = roll_count;
        self.state.turn_score = turn_score;

        self.record(Command::ReRoll, turn);
        self.events.push(GameEvent::ReRolled {
            dice,
            added,
            roll_count,
        });
        log::debug!(
            "turn {}: roll {} shows {:?}, +{} for {}",
            turn,
            roll_count,
            dice.map(|d| d.value),
            added,
            turn_score
        );

        Ok(plan.map(|plan| self.commit_score(plan)))
    }

    /// Bank the human's turn, play the computer's turn and judge the totals.
    pub fn score_turn(&mut self) -> Result<TurnReport, EngineError> {
        self.check_in_play(CommandKind::Score)?;
        if self.state.roll_count == 0 {
            return Err(EngineError::precondition(
                CommandKind::Score,
                Precondition::NotThrown,
            ));
        }

        let plan = match self.plan_score(self.state.turn_score) {
            Ok(plan) => plan,
            Err(err) => {
                self.record_refused(Command::Score);
                return Err(err);
            }
        };
        self.record(Command::Score, self.state.turn_number);
        Ok(self.commit_score(plan))
    }

    /// Start a new game at the same target.
    ///
    /// Totals, roll count, turn score, outcome and history are cleared and
    /// both hands re-rolled. The session tally and journal carry over.
    /// Undrained events of the finished game are dropped.
    pub fn reset(&mut self) -> &GameState {
        let target = self.state.target;
        let tally = self.state.tally;

        self.journal.push_back(CommandRecord {
            command: Command::Reset,
            turn: self.state.turn_number,
            sequence: self.state.next_sequence(),
            refused: false,
        });
        if !self.events.is_empty() {
            log::debug!("dropping {} undrained events on reset", self.events.len());
            self.events.clear();
        }

        let human = roll_human_hand(&mut self.source);
        let computer = roll_faces(&mut self.source);

        self.state = GameState::new(human, computer);
        self.state.target = target;
        self.state.tally = tally;

        self.events.push(GameEvent::Reset { target });
        log::info!(
            "new game at target {:?} (played {})",
            target,
            tally.games_played()
        );

        &self.state
    }

    /// Apply a serialized command.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutput, EngineError> {
        match command {
            Command::SetTarget { input } => self.set_target(input).map(CommandOutput::Target),
            Command::Throw => self.throw_initial().map(|_| CommandOutput::Updated),
            Command::ToggleKeep { index } => {
                self.toggle_keep(index).map(|_| CommandOutput::Updated)
            }
            Command::ReRoll => self
                .re_roll()
                .map(|report| report.map_or(CommandOutput::Updated, CommandOutput::Scored)),
            Command::Score => self.score_turn().map(CommandOutput::Scored),
            Command::Reset => {
                self.reset();
                Ok(CommandOutput::Updated)
            }
        }
    }

    // === Internals ===

    /// The game must be running with a target; returns the target.
    fn check_in_play(&self, command: CommandKind) -> Result<u32, EngineError> {
        if self.state.outcome.is_some() {
            return Err(EngineError::precondition(command, Precondition::GameOver));
        }
        self.state
            .target
            .ok_or_else(|| EngineError::precondition(command, Precondition::TargetUnset))
    }

    fn record(&mut self, command: Command, turn: u32) {
        let record = CommandRecord {
            command,
            turn,
            sequence: self.state.next_sequence(),
            refused: false,
        };
        self.journal.push_back(record.clone());
        self.state.record(record);
    }

    /// Journal a command that failed after drawing dice.
    fn record_refused(&mut self, command: Command) {
        self.journal.push_back(CommandRecord {
            command,
            turn: self.state.turn_number,
            sequence: self.state.next_sequence(),
            refused: true,
        });
    }

    /// Work out the result of banking `human_turn_score` without touching the
    /// state. Only the randomness source advances.
    fn plan_score(&mut self, human_turn_score: u32) -> Result<ScorePlan, EngineError> {
        let target = self.check_in_play(CommandKind::Score)?;

        let computer = self
            .strategy
            .play_turn(self.state.computer_dice, &mut self.source);

        let mut totals = self.state.totals;
        totals[Side::Human] += human_turn_score;
        totals[Side::Computer] += computer.score;

        let (tie_break, outcome) = match judge(totals, target) {
            Verdict::Continue => (None, None),
            Verdict::Winner(side) => (None, Some(Outcome::for_winner(side))),
            Verdict::SuddenDeath => {
                log::debug!("both sides tied on {} at target {}", totals.human, target);
                let tie_break = sudden_death(&mut self.source, self.config.tie_break_limit)?;
                let outcome = Outcome::for_winner(tie_break.winner);
                (Some(tie_break), Some(outcome))
            }
        };

        Ok(ScorePlan {
            human_turn_score,
            computer,
            totals,
            tie_break,
            outcome,
        })
    }

    fn commit_score(&mut self, plan: ScorePlan) -> TurnReport {
        let turn = self.state.turn_number;
        let ScorePlan {
            human_turn_score,
            computer,
            totals,
            tie_break,
            outcome,
        } = plan;

        self.state.totals = totals;
        self.state.computer_dice = computer.dice;

        self.events.push(GameEvent::ComputerPlayed {
            dice: computer.dice,
            rolls: computer.rolls,
            turn_score: computer.score,
        });
        if let Some(tie_break) = &tie_break {
            for (i, round) in tie_break.rounds.iter().enumerate() {
                self.events.push(GameEvent::TieBreakRound {
                    round: i as u32 + 1,
                    human: round.dice.human,
                    computer: round.dice.computer,
                });
            }
        }
        self.events.push(GameEvent::TurnScored {
            turn,
            human_turn_score,
            computer_turn_score: computer.score,
            totals,
        });
        log::debug!(
            "turn {} banked: human +{} computer +{} in {} rolls, totals {}/{}",
            turn,
            human_turn_score,
            computer.score,
            computer.rolls,
            totals.human,
            totals.computer
        );

        match outcome {
            Some(outcome) => {
                let winner = outcome.winner();
                self.state.outcome = Some(outcome);
                self.state.tally.record(winner, tie_break.is_some());
                self.events.push(GameEvent::GameOver { outcome, winner });
                log::info!(
                    "{} wins {} to {} on turn {}",
                    winner,
                    totals[winner],
                    totals[winner.opponent()],
                    turn
                );
            }
            None => {
                self.state.roll_count = 0;
                self.state.turn_score = 0;
                self.state.human_dice = roll_human_hand(&mut self.source);
                self.state.computer_dice = roll_faces(&mut self.source);
                self.state.turn_number += 1;
            }
        }

        TurnReport {
            turn,
            human_turn_score,
            computer_turn_score: computer.score,
            computer_rolls: computer.rolls,
            computer_dice: computer.dice,
            totals,
            tie_break,
            outcome,
        }
    }
}
