//! Turn engine: roll, move, resolve one shortcut, detect a win.
//!
//! ## Turn Lifecycle
//!
//! ```text
//!            begin_turn                 final event delivered
//!   Idle ─────────────────▶ Resolving ─────────────────────────▶ Idle | Won
//!     ▲                         │                                     │
//!     └──────── reset ──────────┴────────────── reset ────────────────┘
//! ```
//!
//! `begin_turn` commits the roll and queues the whole turn. Each call to
//! `next_event` hands one event to the caller and applies its effect on the
//! state, so a renderer can pace the turn however it likes without the
//! engine knowing about time. `roll_turn` does both in one call.
//!
//! ## Example
//!
//! ```
//! use ladderboard::board::Board;
//! use ladderboard::core::{BoardConfig, EngineConfig, ForcedRolls, Square};
//! use ladderboard::engine::{Phase, TurnEngine};
//!
//! let board = Board::new(&BoardConfig::new(100, 10).with_descent(16, 6)).unwrap();
//! let config = EngineConfig::default().without_cosmetics();
//! let mut engine = TurnEngine::with_config(board, ForcedRolls::new([6, 3, 6]), config);
//!
//! engine.roll_turn(); // 1 -> 7
//! engine.roll_turn(); // 7 -> 10
//! engine.roll_turn(); // 10 -> 16, slide to 6
//!
//! assert_eq!(engine.position(), Square::new(6));
//! assert_eq!(engine.phase(), Phase::Idle);
//! ```

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{DiceSource, Die, EngineConfig, GameRng, GameRngState, Square, DIE_FACES};
use crate::error::TurnError;

use super::{EventKind, GameEvent, GameState, Phase};

/// Events of one turn. Ten decorative faces plus the longest resolution fit
/// inline.
type TurnQueue = SmallVec<[GameEvent; 16]>;

/// Owns one game: the board, the dice, and the token.
#[derive(Debug)]
pub struct TurnEngine<D: DiceSource = Die> {
    board: Board,
    dice: D,
    config: EngineConfig,
    cosmetic: GameRng,
    cosmetic_origin: GameRngState,
    state: GameState,
    pending: TurnQueue,
    cursor: usize,
}

impl TurnEngine<Die> {
    /// Create an engine with a seeded fair die.
    #[must_use]
    pub fn seeded(board: Board, seed: u64) -> Self {
        Self::with_config(board, Die::new(seed), EngineConfig::new(seed))
    }
}

impl<D: DiceSource> TurnEngine<D> {
    /// Create an engine with the default engine configuration.
    #[must_use]
    pub fn new(board: Board, dice: D) -> Self {
        Self::with_config(board, dice, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    #[must_use]
    pub fn with_config(board: Board, dice: D, config: EngineConfig) -> Self {
        let cosmetic = GameRng::new(config.cosmetic_seed).for_context("cosmetic");
        let cosmetic_origin = cosmetic.state();

        Self {
            board,
            dice,
            config,
            cosmetic,
            cosmetic_origin,
            state: GameState::new(),
            pending: TurnQueue::new(),
            cursor: 0,
        }
    }

    // === Accessors ===

    /// The board this game is played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Square the token stands on.
    #[must_use]
    pub fn position(&self) -> Square {
        self.state.position
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Events queued by `begin_turn` and not yet delivered.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.pending.len() - self.cursor
    }

    /// The dice, for callers that need to inspect or rewind them.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    // === Turns ===

    /// Play a whole turn and return its events in order.
    ///
    /// Outside `Idle`, or when the dice misbehave, this is a no-op and
    /// returns no events.
    pub fn roll_turn(&mut self) -> Vec<GameEvent> {
        match self.begin_turn() {
            Ok(_) => {}
            Err(err @ TurnError::InvalidTransition { .. }) => {
                log::debug!("roll ignored: {}", err);
                return Vec::new();
            }
            Err(err @ TurnError::InvalidRoll { .. }) => {
                log::warn!("roll ignored: {}", err);
                return Vec::new();
            }
        }
        std::iter::from_fn(|| self.next_event()).collect()
    }

    /// Commit a roll and queue the turn's events.
    ///
    /// Returns the number of queued events. The engine stays `Resolving`
    /// until the last one is taken with `next_event`. A die face outside
    /// `1..=6` is rejected with `InvalidRoll` and the state is left as is.
    pub fn begin_turn(&mut self) -> Result<usize, TurnError> {
        if self.state.phase != Phase::Idle {
            return Err(TurnError::InvalidTransition {
                phase: self.state.phase,
            });
        }

        let roll = self.dice.roll();
        if !(1..=DIE_FACES).contains(&roll) {
            return Err(TurnError::InvalidRoll { value: roll });
        }

        self.state.phase = Phase::Resolving;
        self.pending.clear();
        self.cursor = 0;

        let start = self.state.position;
        for _ in 0..self.config.cosmetic_rolls {
            let face = self.cosmetic.roll_face();
            self.pending
                .push(GameEvent::new(EventKind::CosmeticRoll { face }, start));
        }

        self.state.turns += 1;
        log::debug!("turn {}: rolled {} from {}", self.state.turns, roll, start);

        self.pending
            .push(GameEvent::new(EventKind::RollCommitted { value: roll }, start));
        resolve(&self.board, start, roll, &mut self.pending);

        Ok(self.pending.len())
    }

    /// Deliver the next queued event and apply it.
    ///
    /// Returns `None` once the turn is fully delivered.
    pub fn next_event(&mut self) -> Option<GameEvent> {
        let event = *self.pending.get(self.cursor)?;
        self.cursor += 1;

        self.state.position = event.position;
        if let Some(phase) = event.kind.phase_after() {
            self.state.phase = phase;
        }
        if event.kind.ends_turn() {
            self.pending.clear();
            self.cursor = 0;
        }

        log::trace!("{:?} at {}", event.kind, event.position);
        if event.kind == EventKind::Victory {
            log::info!("finished in {} turns", self.state.turns);
        }

        Some(event)
    }

    /// Return to the start from any phase.
    ///
    /// Drops any undelivered events and restarts the decorative dice, so
    /// replaying the same rolls reproduces the same events.
    pub fn reset(&mut self) -> GameEvent {
        if self.pending_events() > 0 {
            log::info!("reset abandoned {} pending events", self.pending_events());
        }

        self.pending.clear();
        self.cursor = 0;
        self.state = GameState::new();
        self.cosmetic = GameRng::from_state(&self.cosmetic_origin);

        GameEvent::new(EventKind::Reset, self.state.position)
    }
}

/// Append the movement events for `roll` from `start`.
fn resolve(board: &Board, start: Square, roll: u8, out: &mut TurnQueue) {
    let finish = board.finish();
    let candidate = match start.advanced(roll) {
        Some(candidate) if candidate <= finish => candidate,
        _ => {
            let needed = start.distance_to(finish);
            out.push(GameEvent::new(EventKind::Overshoot { needed }, start));
            return;
        }
    };

    out.push(GameEvent::new(EventKind::Moved, candidate));
    if candidate == finish {
        out.push(GameEvent::new(EventKind::Victory, candidate));
        return;
    }

    // At most one shortcut; its destination is never re-resolved
    let landed = match board.shortcut_at(candidate) {
        Some(shortcut) => {
            out.push(GameEvent::shortcut(shortcut.from, shortcut.to));
            shortcut.to
        }
        None => candidate,
    };

    let last = if landed == finish {
        EventKind::Victory
    } else {
        EventKind::AwaitingRoll
    };
    out.push(GameEvent::new(last, landed));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, ForcedRolls};

    fn quiet() -> EngineConfig {
        EngineConfig::default().without_cosmetics()
    }

    fn engine_at(config: BoardConfig, start: u16, rolls: &[u8]) -> TurnEngine<ForcedRolls> {
        let board = Board::new(&config).unwrap();
        let mut engine = TurnEngine::with_config(board, ForcedRolls::new(rolls.to_vec()), quiet());
        engine.state.position = Square::new(start);
        engine
    }

    fn kinds(events: &[GameEvent]) -> Vec<EventKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_plain_move() {
        let mut engine = engine_at(BoardConfig::new(100, 10), 1, &[4]);
        let events = engine.roll_turn();

        assert_eq!(
            kinds(&events),
            vec![
                EventKind::RollCommitted { value: 4 },
                EventKind::Moved,
                EventKind::AwaitingRoll,
            ]
        );
        assert_eq!(events[1].position, Square::new(5));
        assert_eq!(engine.position(), Square::new(5));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.state().turns, 1);
    }

    #[test]
    fn test_descent() {
        let mut engine = engine_at(BoardConfig::new(100, 10).with_descent(16, 6), 10, &[6]);
        let events = engine.roll_turn();

        assert_eq!(
            kinds(&events),
            vec![
                EventKind::RollCommitted { value: 6 },
                EventKind::Moved,
                EventKind::Descended {
                    from: Square::new(16),
                    to: Square::new(6)
                },
                EventKind::AwaitingRoll,
            ]
        );
        assert_eq!(events[1].position, Square::new(16));
        assert_eq!(engine.position(), Square::new(6));
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_ascent_to_finish_wins() {
        let mut engine = engine_at(BoardConfig::new(100, 10).with_ascent(80, 100), 74, &[6]);
        let events = engine.roll_turn();

        assert_eq!(
            kinds(&events),
            vec![
                EventKind::RollCommitted { value: 6 },
                EventKind::Moved,
                EventKind::Ascended {
                    from: Square::new(80),
                    to: Square::new(100)
                },
                EventKind::Victory,
            ]
        );
        assert_eq!(engine.position(), Square::new(100));
        assert_eq!(engine.phase(), Phase::Won);
    }

    #[test]
    fn test_exact_landing_wins() {
        let mut engine = engine_at(BoardConfig::new(100, 10), 97, &[3]);
        let events = engine.roll_turn();

        assert_eq!(
            kinds(&events),
            vec![
                EventKind::RollCommitted { value: 3 },
                EventKind::Moved,
                EventKind::Victory,
            ]
        );
        assert_eq!(engine.phase(), Phase::Won);
    }

    #[test]
    fn test_overshoot() {
        let mut engine = engine_at(BoardConfig::new(100, 10), 97, &[5]);
        let events = engine.roll_turn();

        assert_eq!(
            kinds(&events),
            vec![
                EventKind::RollCommitted { value: 5 },
                EventKind::Overshoot { needed: 3 },
            ]
        );
        assert_eq!(engine.position(), Square::new(97));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.state().turns, 1);
    }

    #[test]
    fn test_overshoot_at_largest_board() {
        let mut engine = engine_at(BoardConfig::new(u16::MAX, 10), u16::MAX - 2, &[6]);
        let events = engine.roll_turn();

        assert_eq!(
            kinds(&events),
            vec![
                EventKind::RollCommitted { value: 6 },
                EventKind::Overshoot { needed: 2 },
            ]
        );
        assert_eq!(engine.position(), Square::new(u16::MAX - 2));
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_exact_landing_at_largest_board() {
        let mut engine = engine_at(BoardConfig::new(u16::MAX, 10), u16::MAX - 2, &[2]);
        engine.roll_turn();

        assert_eq!(engine.position(), Square::new(u16::MAX));
        assert_eq!(engine.phase(), Phase::Won);
    }

    /// Die that always shows the same, possibly impossible, face.
    #[derive(Debug)]
    struct Loaded(u8);

    impl DiceSource for Loaded {
        fn roll(&mut self) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_out_of_range_roll_rejected() {
        for face in [0, 7, u8::MAX] {
            let board = Board::classic().unwrap();
            let mut engine = TurnEngine::new(board, Loaded(face));

            assert_eq!(engine.begin_turn(), Err(TurnError::InvalidRoll { value: face }));
            assert!(engine.roll_turn().is_empty());
            assert_eq!(engine.state(), GameState::new());
            assert_eq!(engine.pending_events(), 0);
        }
    }

    #[test]
    fn test_turn_queue_cleared_after_final_event() {
        let mut engine = engine_at(BoardConfig::new(100, 10), 97, &[5]);
        engine.begin_turn().unwrap();

        let mut last = None;
        while let Some(event) = engine.next_event() {
            last = Some(event.kind);
        }
        assert_eq!(last, Some(EventKind::Overshoot { needed: 3 }));
        assert_eq!(engine.pending_events(), 0);
        assert!(engine.begin_turn().is_ok());
    }

    #[test]
    fn test_roll_rejected_after_win() {
        let mut engine = engine_at(BoardConfig::new(100, 10), 99, &[1, 1]);
        engine.roll_turn();
        assert_eq!(engine.phase(), Phase::Won);

        assert!(engine.roll_turn().is_empty());
        assert_eq!(
            engine.begin_turn(),
            Err(TurnError::InvalidTransition { phase: Phase::Won })
        );
        assert_eq!(engine.position(), Square::new(100));
        assert_eq!(engine.dice_mut().consumed(), 1);
    }

    #[test]
    fn test_incremental_delivery() {
        let mut engine = engine_at(BoardConfig::new(100, 10).with_descent(16, 6), 10, &[6]);

        assert_eq!(engine.begin_turn(), Ok(4));
        assert_eq!(engine.phase(), Phase::Resolving);
        assert_eq!(engine.pending_events(), 4);

        // Rolling again mid-turn is rejected and changes nothing
        assert!(engine.roll_turn().is_empty());
        assert_eq!(engine.pending_events(), 4);

        engine.next_event();
        assert_eq!(engine.position(), Square::new(10));
        engine.next_event();
        assert_eq!(engine.position(), Square::new(16));
        assert_eq!(engine.phase(), Phase::Resolving);
        engine.next_event();
        assert_eq!(engine.position(), Square::new(6));
        let last = engine.next_event().unwrap();
        assert_eq!(last.kind, EventKind::AwaitingRoll);
        assert_eq!(engine.phase(), Phase::Idle);

        assert_eq!(engine.pending_events(), 0);
        assert_eq!(engine.next_event(), None);
    }

    #[test]
    fn test_reset_mid_turn() {
        let mut engine = engine_at(BoardConfig::new(100, 10), 40, &[2]);
        engine.begin_turn().unwrap();
        engine.next_event();
        engine.next_event();
        assert_eq!(engine.position(), Square::new(42));

        let event = engine.reset();
        assert_eq!(event.kind, EventKind::Reset);
        assert_eq!(event.position, Square::new(1));
        assert_eq!(engine.position(), Square::new(1));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.pending_events(), 0);
        assert_eq!(engine.next_event(), None);
        assert_eq!(engine.state().turns, 0);
    }

    #[test]
    fn test_cosmetic_rolls_precede_commit() {
        let board = Board::new(&BoardConfig::new(100, 10)).unwrap();
        let config = EngineConfig::new(3).with_cosmetic_rolls(10);
        let mut engine = TurnEngine::with_config(board, ForcedRolls::new([2]), config);

        let events = engine.roll_turn();
        assert_eq!(events.len(), 13);
        assert!(events[..10].iter().all(GameEvent::is_cosmetic));
        assert!(events[..10].iter().all(|e| e.position == Square::new(1)));
        assert_eq!(events[10].committed_roll(), Some(2));
        assert_eq!(engine.position(), Square::new(3));
        // Decorative faces never touch the real dice
        assert_eq!(engine.dice_mut().consumed(), 1);
    }

    #[test]
    fn test_seeded_engine_is_deterministic() {
        let mut a = TurnEngine::seeded(Board::classic().unwrap(), 99);
        let mut b = TurnEngine::seeded(Board::classic().unwrap(), 99);

        for _ in 0..20 {
            assert_eq!(a.roll_turn(), b.roll_turn());
        }
        assert_eq!(a.state(), b.state());
    }
}
