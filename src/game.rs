use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::error::GameError;
use crate::resolver::{capture_set, has_legal_move, legal_moves};
use crate::types::{Color, Coord, GameResult, GameSnapshot, Score};

/// Turn sequencing state.
///
/// `Resolving` and `SwitchingTurn` are transient: a session at rest is always
/// in `AwaitingMove` with at least one legal move, or in `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Color),
    Resolving { color: Color, at: Coord },
    /// `passed` is true when `from` was skipped for lack of a legal move.
    SwitchingTurn { from: Color, passed: bool },
    GameOver(Score),
}

/// One game: the board plus the turn state machine that owns it.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    legal: Vec<Coord>,
    passes: Vec<Color>,
    flipped: Vec<Coord>,
}

impl GameSession {
    /// Fresh game on the initial layout, Dark to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Dark)
    }

    /// Starts from an arbitrary position with `first` to move.
    ///
    /// Passes are resolved immediately, so the returned session may already be over.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, first: Color) -> Self {
        let mut session = Self {
            board,
            phase: Phase::AwaitingMove(first),
            legal: Vec::new(),
            passes: Vec::new(),
            flipped: Vec::new(),
        };
        session.settle();
        session
    }

    /// Discards the current game and starts over from the initial layout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move, or `None` once the game is over.
    pub fn current_color(&self) -> Option<Color> {
        match self.phase {
            Phase::AwaitingMove(color) => Some(color),
            _ => None,
        }
    }

    /// Legal moves for the color to move, in row-major order.
    pub fn legal_moves(&self) -> &[Coord] {
        &self.legal
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Colors skipped since the latest placement.
    pub fn passes(&self) -> &[Color] {
        &self.passes
    }

    /// Disks flipped by the latest placement, empty once a pass follows it.
    pub fn last_flipped(&self) -> &[Coord] {
        &self.flipped
    }

    pub fn score(&self) -> Score {
        self.board.tally()
    }

    /// Final result, available once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(score) => Some(GameResult::from(score)),
            _ => None,
        }
    }

    /// Plays `at` for the color to move, then advances through any passes.
    #[instrument(skip(self))]
    pub fn play(&mut self, at: Coord) -> Result<(), GameError> {
        let color = match self.phase {
            Phase::AwaitingMove(color) => color,
            Phase::GameOver(_) => return Err(GameError::GameOver),
            Phase::Resolving { .. } | Phase::SwitchingTurn { .. } => {
                unreachable!("session observed in transient phase {:?}", self.phase)
            }
        };
        if !self.legal.contains(&at) {
            return Err(GameError::IllegalMove(at));
        }

        self.phase = Phase::Resolving { color, at };
        self.settle();
        Ok(())
    }

    /// Same as [`play`](Self::play) with raw coordinates from the front end.
    pub fn play_xy(&mut self, x: u8, y: u8) -> Result<(), GameError> {
        let at = Coord::new(x, y).ok_or(GameError::OutOfRange { x, y })?;
        self.play(at)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let score = self.board.tally();
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            current: self.current_color(),
            legal_moves: self.legal.clone(),
            light_count: score.light,
            dark_count: score.dark,
            is_game_over: self.is_game_over(),
            passes: self.passes.clone(),
            flipped: self.flipped.clone(),
        }
    }

    /// Runs transitions until input is needed or the game ends.
    fn settle(&mut self) {
        loop {
            if let Phase::AwaitingMove(color) = self.phase {
                self.legal = legal_moves(&self.board, color);
                if !self.legal.is_empty() {
                    return;
                }
            }
            if self.is_game_over() {
                self.legal.clear();
                return;
            }
            self.advance();
        }
    }

    /// Performs a single phase transition.
    fn advance(&mut self) {
        let next = match self.phase {
            Phase::AwaitingMove(color) => {
                debug!(%color, "no legal move, passing");
                self.passes.push(color);
                self.flipped.clear();
                Phase::SwitchingTurn {
                    from: color,
                    passed: true,
                }
            }
            Phase::Resolving { color, at } => {
                let captures = capture_set(&self.board, at, color);
                self.board.place_and_flip(at, color, &captures);
                debug!(%color, %at, flipped = captures.len(), "disk placed");
                self.flipped = captures;
                self.passes.clear();
                Phase::SwitchingTurn {
                    from: color,
                    passed: false,
                }
            }
            Phase::SwitchingTurn { from, passed } => {
                let to = from.opponent();
                if passed && !has_legal_move(&self.board, to) {
                    self.passes.push(to);
                    let score = self.board.tally();
                    info!(light = score.light, dark = score.dark, "game over");
                    Phase::GameOver(score)
                } else {
                    debug!(%from, %to, "turn switched");
                    Phase::AwaitingMove(to)
                }
            }
            Phase::GameOver(_) => return,
        };
        self.phase = next;
    }

    #[cfg(test)]
    fn set_phase_for_test(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Input delivered by the front end while the engine waits for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Place(Coord),
    Quit,
}

/// The front end's answer after a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    NewGame,
    Quit,
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished(GameResult),
    Aborted,
}

/// Supplier of moves, typically a UI polling mouse clicks.
///
/// `next_input` must return a member of `snapshot.legal_moves` or `Quit`.
pub trait MoveSource {
    fn next_input(&mut self, snapshot: &GameSnapshot) -> Input;

    fn game_finished(&mut self, snapshot: &GameSnapshot, result: &GameResult) -> Continuation;
}

/// Drives `session` until it ends or the source quits.
///
/// Panics if the source hands back a move outside the legal set.
pub fn run_game<S: MoveSource + ?Sized>(session: &mut GameSession, source: &mut S) -> Outcome {
    loop {
        if let Some(result) = session.result() {
            return Outcome::Finished(result);
        }
        match source.next_input(&session.snapshot()) {
            Input::Place(at) => {
                if let Err(err) = session.play(at) {
                    panic!("move source violated its contract: {err}");
                }
            }
            Input::Quit => {
                debug!("move source quit mid-game");
                return Outcome::Aborted;
            }
        }
    }
}

/// Plays fresh games back to back until the source quits.
/// Returns the results of every finished game in order.
#[instrument(skip(source))]
pub fn run_match<S: MoveSource + ?Sized>(source: &mut S) -> Vec<GameResult> {
    let mut results = Vec::new();
    loop {
        let mut session = GameSession::new();
        match run_game(&mut session, source) {
            Outcome::Aborted => return results,
            Outcome::Finished(result) => {
                results.push(result);
                if source.game_finished(&session.snapshot(), &result) == Continuation::Quit {
                    return results;
                }
            }
        }
    }
}
