//! The round state machine.
//!
//! `transition` is a pure function from the current state and an event to the
//! next state plus a list of effects. It never touches the window or the
//! clock; callers pass `now` in seconds and apply the effects themselves.

use crate::config::{ROUND_SECONDS, WARNING_SECONDS};
use crate::debug_round;
use crate::puzzle::{Hint, Puzzle, sanitize_guess};
use log::info;

pub const PROMPT_MESSAGE: &str = "String together the four emojis and guess the word.";
pub const LOADING_MESSAGE: &str = "Loading puzzles. Try again in a moment.";
pub const EMPTY_GUESS_MESSAGE: &str = "Type a guess before submitting.";
pub const WRONG_GUESS_MESSAGE: &str = "Not quite. Try another guess.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    Active,
    Won,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { award: u32 },
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub round_seconds: u32,
    pub warning_seconds: u32,
}

impl Default for RoundRules {
    fn default() -> Self {
        RoundRules {
            round_seconds: ROUND_SECONDS,
            warning_seconds: WARNING_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub active_puzzle: usize,
    pub remaining_seconds: u32,
    pub deadline: f64, // Absolute time, in seconds, at which the round expires
    pub phase: RoundPhase,
    pub score: u32,
    pub rounds_played: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        RoundState {
            active_puzzle: 0,
            remaining_seconds: ROUND_SECONDS,
            deadline: 0.0,
            phase: RoundPhase::Idle,
            score: 0,
            rounds_played: 0,
        }
    }
}

impl RoundState {
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }
}

/// Which interactive controls accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub guess: bool,
    pub submit: bool,
    pub next: bool,
    pub restart: bool,
}

impl Controls {
    pub const DISABLED: Controls = Controls {
        guess: false,
        submit: false,
        next: false,
        restart: false,
    };
    pub const PLAYING: Controls = Controls {
        guess: true,
        submit: true,
        next: false,
        restart: false,
    };
    pub const BETWEEN_ROUNDS: Controls = Controls {
        guess: false,
        submit: false,
        next: true,
        restart: true,
    };
}

/// What the player is shown for the active puzzle. The answer itself is not
/// part of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleView {
    pub hints: Vec<Hint>,
    pub word_length: usize,
}

impl PuzzleView {
    pub fn of(puzzle: &Puzzle) -> Self {
        PuzzleView {
            hints: puzzle.hints.to_vec(),
            word_length: puzzle.word.len(),
        }
    }

    pub fn emoji_line(&self) -> String {
        self.hints
            .iter()
            .map(|h| h.emoji.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Countdown { seconds: u32, warning: bool },
    Score(u32),
    Message { text: String, is_error: bool },
    Controls(Controls),
    ClearGuess,
    ShowPuzzle(PuzzleView),
    RoundOver(Outcome),
}

impl Effect {
    fn message(text: impl Into<String>, is_error: bool) -> Self {
        Effect::Message {
            text: text.into(),
            is_error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    Start,
    Tick,
    Submit(String),
    Next,
    Restart,
}

/// Whole seconds left before `deadline`, rounded up and never negative.
pub fn seconds_left(deadline: f64, now: f64) -> u32 {
    (deadline - now).ceil().max(0.0) as u32
}

pub fn correct_message(word: &str) -> String {
    format!("Correct! The word was {}.", word)
}

pub fn timeout_message(word: &str) -> String {
    format!("Time's up! The word was {}.", word)
}

/// Applies `event` to `state`. `Restart` only resets the index here; the
/// caller reshuffles the puzzle list beforehand.
pub fn transition(
    state: &RoundState,
    puzzles: &[Puzzle],
    event: &RoundEvent,
    now: f64,
    rules: &RoundRules,
) -> (RoundState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        RoundEvent::Start => start(&mut next, puzzles, now, rules, &mut effects),
        RoundEvent::Tick => catch_up(&mut next, puzzles, now, rules, &mut effects),
        RoundEvent::Submit(raw) => submit(&mut next, puzzles, raw, now, rules, &mut effects),
        RoundEvent::Next => {
            if !next.is_active() {
                if !puzzles.is_empty() {
                    next.active_puzzle = (next.active_puzzle + 1) % puzzles.len();
                }
                start(&mut next, puzzles, now, rules, &mut effects);
            }
        }
        RoundEvent::Restart => {
            if !next.is_active() {
                next.active_puzzle = 0;
                start(&mut next, puzzles, now, rules, &mut effects);
            }
        }
    }

    (next, effects)
}

fn answer(puzzles: &[Puzzle], index: usize) -> String {
    puzzles
        .get(index)
        .map(|p| p.word.to_uppercase())
        .unwrap_or_default()
}

fn start(
    state: &mut RoundState,
    puzzles: &[Puzzle],
    now: f64,
    rules: &RoundRules,
    effects: &mut Vec<Effect>,
) {
    if puzzles.is_empty() {
        state.phase = RoundPhase::Idle;
        effects.push(Effect::message(LOADING_MESSAGE, true));
        effects.push(Effect::Controls(Controls::DISABLED));
        return;
    }
    if state.active_puzzle >= puzzles.len() {
        state.active_puzzle = 0;
    }

    state.phase = RoundPhase::Active;
    state.remaining_seconds = rules.round_seconds;
    state.deadline = now + rules.round_seconds as f64;
    state.rounds_played += 1;
    debug_round!(
        state.rounds_played,
        "started on puzzle {} ({} letters)",
        state.active_puzzle,
        puzzles[state.active_puzzle].word.len()
    );

    effects.push(Effect::Countdown {
        seconds: rules.round_seconds,
        warning: rules.round_seconds <= rules.warning_seconds,
    });
    effects.push(Effect::ClearGuess);
    effects.push(Effect::Controls(Controls::PLAYING));
    effects.push(Effect::message(PROMPT_MESSAGE, false));
    effects.push(Effect::ShowPuzzle(PuzzleView::of(&puzzles[state.active_puzzle])));
}

fn catch_up(
    state: &mut RoundState,
    puzzles: &[Puzzle],
    now: f64,
    rules: &RoundRules,
    effects: &mut Vec<Effect>,
) {
    if !state.is_active() {
        return;
    }

    // The countdown only ever moves down, even if the clock jumps back
    let secs = seconds_left(state.deadline, now).min(state.remaining_seconds);
    if secs != state.remaining_seconds {
        state.remaining_seconds = secs;
        effects.push(Effect::Countdown {
            seconds: secs,
            warning: secs <= rules.warning_seconds,
        });
    }

    if state.remaining_seconds == 0 {
        let word = answer(puzzles, state.active_puzzle);
        state.phase = RoundPhase::Expired;
        info!("Round {} expired; the word was {}.", state.rounds_played, word);
        effects.push(Effect::Controls(Controls::BETWEEN_ROUNDS));
        effects.push(Effect::message(timeout_message(&word), true));
        effects.push(Effect::RoundOver(Outcome::TimedOut));
    }
}

fn submit(
    state: &mut RoundState,
    puzzles: &[Puzzle],
    raw: &str,
    now: f64,
    rules: &RoundRules,
    effects: &mut Vec<Effect>,
) {
    if !state.is_active() {
        return;
    }
    // A guess that arrives after the deadline loses to the timer
    catch_up(state, puzzles, now, rules, effects);
    if !state.is_active() {
        return;
    }

    let guess = sanitize_guess(raw);
    if guess.is_empty() {
        effects.push(Effect::message(EMPTY_GUESS_MESSAGE, true));
        return;
    }

    let word = answer(puzzles, state.active_puzzle);
    if guess != word {
        debug_round!(state.rounds_played, "wrong guess {}", guess);
        effects.push(Effect::message(WRONG_GUESS_MESSAGE, true));
        return;
    }

    let award = state.remaining_seconds.max(1);
    state.score = state.score.saturating_add(award);
    state.phase = RoundPhase::Won;
    info!(
        "Round {} solved: {} for {} points (total {}).",
        state.rounds_played, word, award, state.score
    );
    effects.push(Effect::Score(state.score));
    effects.push(Effect::Controls(Controls::BETWEEN_ROUNDS));
    effects.push(Effect::message(correct_message(&word), false));
    effects.push(Effect::RoundOver(Outcome::Solved { award }));
}
