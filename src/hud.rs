//! On-screen HUD model and layout. Holds everything the renderer needs to draw
//! the 2D overlay; it changes only through round effects and typed input.

use crate::config::{HUD_PANEL_HEIGHT, MAX_GUESS_CHARS};
use crate::round::{Controls, Effect, PuzzleView};
use macroquad::math::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Submit,
    Next,
    Restart,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Submit, Button::Next, Button::Restart];

    pub fn caption(&self) -> &'static str {
        match self {
            Button::Submit => "Submit",
            Button::Next => "Next",
            Button::Restart => "Restart",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudState {
    pub countdown: u32,
    pub countdown_warning: bool,
    pub score: u32,
    pub message: String,
    pub message_is_error: bool,
    pub controls: Controls,
    pub guess: String,
    pub puzzle: Option<PuzzleView>,
}

impl HudState {
    pub fn new(round_seconds: u32) -> Self {
        HudState {
            countdown: round_seconds,
            countdown_warning: false,
            score: 0,
            message: String::new(),
            message_is_error: false,
            controls: Controls::DISABLED,
            guess: String::new(),
            puzzle: None,
        }
    }

    /// Applies round effects in order. Returns true when a new puzzle was
    /// shown and the card textures need rebaking.
    pub fn apply(&mut self, effects: &[Effect]) -> bool {
        let mut new_puzzle = false;
        for effect in effects {
            match effect {
                Effect::Countdown { seconds, warning } => {
                    self.countdown = *seconds;
                    self.countdown_warning = *warning;
                }
                Effect::Score(score) => self.score = *score,
                Effect::Message { text, is_error } => {
                    self.message = text.clone();
                    self.message_is_error = *is_error;
                }
                Effect::Controls(controls) => self.controls = *controls,
                Effect::ClearGuess => self.guess.clear(),
                Effect::ShowPuzzle(view) => {
                    self.puzzle = Some(view.clone());
                    new_puzzle = true;
                }
                Effect::RoundOver(_) => {}
            }
        }
        new_puzzle
    }

    pub fn is_enabled(&self, button: Button) -> bool {
        match button {
            Button::Submit => self.controls.submit,
            Button::Next => self.controls.next,
            Button::Restart => self.controls.restart,
        }
    }

    /// Appends a typed character to the guess field. Ignored while the field
    /// is disabled or full.
    pub fn type_char(&mut self, c: char) -> bool {
        if !self.controls.guess || c.is_control() || self.guess.chars().count() >= MAX_GUESS_CHARS {
            return false;
        }
        self.guess.push(c);
        true
    }

    pub fn backspace(&mut self) {
        if self.controls.guess {
            self.guess.pop();
        }
    }

    pub fn word_length_text(&self) -> String {
        match &self.puzzle {
            Some(view) => format!("Word length: {}", view.word_length),
            None => String::new(),
        }
    }

    pub fn emoji_line(&self) -> String {
        self.puzzle.as_ref().map(PuzzleView::emoji_line).unwrap_or_default()
    }
}

const PADDING: f32 = 20.0;
const BUTTON_WIDTH: f32 = 120.0;
const BUTTON_GAP: f32 = 10.0;
const ROW_HEIGHT: f32 = 44.0;
const MIN_INPUT_WIDTH: f32 = 140.0;

/// Screen-space rectangles of the HUD, recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    pub width: f32,
    pub height: f32,
    pub panel: Rect,
    pub input: Rect,
    pub buttons: [Rect; 3],
}

impl HudLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let panel = Rect::new(0.0, (height - HUD_PANEL_HEIGHT).max(0.0), width, HUD_PANEL_HEIGHT);
        let row_y = panel.y + 64.0;

        let buttons_width = 3.0 * BUTTON_WIDTH + 2.0 * BUTTON_GAP;
        let input_width = (width - 3.0 * PADDING - buttons_width).max(MIN_INPUT_WIDTH);
        let input = Rect::new(PADDING, row_y, input_width, ROW_HEIGHT);

        let first_x = input.right() + PADDING;
        let buttons = std::array::from_fn(|i| {
            let x = first_x + i as f32 * (BUTTON_WIDTH + BUTTON_GAP);
            Rect::new(x, row_y, BUTTON_WIDTH, ROW_HEIGHT)
        });

        HudLayout {
            width,
            height,
            panel,
            input,
            buttons,
        }
    }

    pub fn button_rect(&self, button: Button) -> Rect {
        match button {
            Button::Submit => self.buttons[0],
            Button::Next => self.buttons[1],
            Button::Restart => self.buttons[2],
        }
    }

    pub fn button_at(&self, point: Vec2) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|b| self.button_rect(*b).contains(point))
    }

    /// Height of the area above the HUD panel where the cards are drawn.
    pub fn scene_height(&self) -> f32 {
        self.panel.y
    }

    pub fn matches(&self, width: f32, height: f32) -> bool {
        self.width == width && self.height == height
    }
}
