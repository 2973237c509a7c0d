//! Puzzle construction: themed puzzles first, then generative ones clustered
//! from catalog name tokens when the themes run short.

use crate::catalog::{EmojiCatalog, EmojiEntry};
use crate::config::{
    COLOR_PALETTE, DEFAULT_LABEL, HINTS_PER_PUZZLE, MAX_LABEL_CHARS, MAX_LABEL_WORDS,
    MIN_TOKEN_LEN, PLACEHOLDER_GLYPH, STOP_WORDS,
};
use crate::debug_puzzle;
use crate::themes::{THEMES, Theme};
use log::{info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashSet};

/// One of the four visual clues of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub emoji: String,
    pub label: String,
    pub color: usize, // Index into COLOR_PALETTE
    pub locked: bool, // Locked hints keep their glyph when presented
}

impl Hint {
    pub fn new(emoji: &str, label: &str, position: usize) -> Self {
        Hint {
            emoji: emoji.to_string(),
            label: label.to_string(),
            color: position % COLOR_PALETTE.len(),
            locked: true,
        }
    }

    /// Accent colour as 0xRRGGBB.
    pub fn accent(&self) -> u32 {
        COLOR_PALETTE[self.color % COLOR_PALETTE.len()]
    }

    pub fn is_illustrated(&self) -> bool {
        !self.emoji.is_empty() && self.emoji != PLACEHOLDER_GLYPH
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub word: String,
    pub hints: [Hint; HINTS_PER_PUZZLE],
}

impl Puzzle {
    /// A puzzle is playable when its word is uppercase A-Z only and every
    /// hint carries a real glyph.
    pub fn is_valid(&self) -> bool {
        !self.word.is_empty()
            && self.word.chars().all(|c| c.is_ascii_uppercase())
            && self.hints.iter().all(Hint::is_illustrated)
    }
}

/// Strips everything but ASCII letters and uppercases the rest.
pub fn sanitize_guess(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Lowercases a name token and drops anything outside a-z.
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

fn split_name(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
}

/// Short card caption: the first two words of a name, at most 16 characters.
pub fn format_label(name: &str) -> String {
    let words: Vec<&str> = split_name(name).take(MAX_LABEL_WORDS).collect();
    if words.is_empty() {
        return DEFAULT_LABEL.to_string();
    }
    words.join(" ").chars().take(MAX_LABEL_CHARS).collect()
}

fn is_candidate_token(token: &str) -> bool {
    token.len() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(&token)
}

pub struct PuzzleBuilder<'a, R: Rng + ?Sized> {
    catalog: &'a EmojiCatalog,
    themes: &'a [Theme],
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> PuzzleBuilder<'a, R> {
    pub fn new(catalog: &'a EmojiCatalog, rng: &'a mut R) -> Self {
        PuzzleBuilder {
            catalog,
            themes: &THEMES,
            rng,
        }
    }

    pub fn with_themes(mut self, themes: &'a [Theme]) -> Self {
        self.themes = themes;
        self
    }

    /// Builds up to `target_count` puzzles with distinct words. Returns fewer
    /// when the catalog cannot supply enough.
    pub fn build(&mut self, target_count: usize) -> Vec<Puzzle> {
        if target_count == 0 || self.catalog.is_empty() {
            warn!("No puzzles built (target {}, catalog {} entries).", target_count, self.catalog.len());
            return Vec::new();
        }

        let mut puzzles = self.themed_puzzles();
        debug_puzzle!("{} of {} themes produced puzzles", puzzles.len(), self.themes.len());

        if puzzles.len() >= target_count {
            puzzles.shuffle(&mut *self.rng);
            puzzles.truncate(target_count);
            info!("Built {} themed puzzles.", puzzles.len());
            return puzzles;
        }

        let themed = puzzles.len();
        self.extend_generated(&mut puzzles, target_count);
        info!(
            "Built {} puzzles ({} themed, {} generated).",
            puzzles.len(),
            themed,
            puzzles.len() - themed
        );
        if puzzles.len() < target_count {
            warn!(
                "Catalog only supports {} of {} requested puzzles.",
                puzzles.len(),
                target_count
            );
        }
        puzzles
    }

    fn themed_puzzles(&mut self) -> Vec<Puzzle> {
        let mut puzzles = Vec::with_capacity(self.themes.len());
        for theme in self.themes {
            match self.theme_puzzle(theme) {
                Some(puzzle) => puzzles.push(puzzle),
                None => debug_puzzle!("Theme {} dropped: a keyword has no glyph", theme.word),
            }
        }
        puzzles
    }

    fn theme_puzzle(&mut self, theme: &Theme) -> Option<Puzzle> {
        let mut hints = Vec::with_capacity(HINTS_PER_PUZZLE);
        for (i, keyword) in theme.keywords.iter().enumerate() {
            let glyph = self.catalog.resolve(keyword, &mut *self.rng);
            hints.push(Hint::new(glyph, &format_label(keyword), i));
        }

        let puzzle = Puzzle {
            word: theme.word.to_uppercase(),
            hints: hints.try_into().ok()?,
        };
        puzzle.is_valid().then_some(puzzle)
    }

    /// Catalog entries grouped by normalized name token, keeping only tokens
    /// with enough distinct entries to fill a puzzle. Sorted by token.
    fn token_clusters(&self) -> Vec<(String, Vec<&'a EmojiEntry>)> {
        let catalog: &'a EmojiCatalog = self.catalog;
        let mut groups: BTreeMap<String, Vec<&'a EmojiEntry>> = BTreeMap::new();

        for entry in catalog.entries() {
            if entry.glyph.is_empty() {
                continue;
            }
            for token in split_name(&entry.name).map(normalize_token) {
                if !is_candidate_token(&token) {
                    continue;
                }
                let group = groups.entry(token).or_default();
                if !group.contains(&entry) {
                    group.push(entry);
                }
            }
        }

        groups
            .into_iter()
            .filter(|(_, entries)| entries.len() >= HINTS_PER_PUZZLE)
            .collect()
    }

    fn extend_generated(&mut self, puzzles: &mut Vec<Puzzle>, target_count: usize) {
        let mut used: HashSet<String> = puzzles.iter().map(|p| p.word.clone()).collect();
        let mut candidates = self.token_clusters();
        debug_puzzle!("{} name tokens can fill a puzzle", candidates.len());
        candidates.shuffle(&mut *self.rng);

        for (token, mut entries) in candidates {
            if puzzles.len() >= target_count {
                break;
            }
            let word = token.to_uppercase();
            if used.contains(&word) {
                continue;
            }

            entries.shuffle(&mut *self.rng);
            let hints: Vec<Hint> = entries
                .iter()
                .take(HINTS_PER_PUZZLE)
                .enumerate()
                .map(|(i, entry)| Hint::new(&entry.glyph, &format_label(&entry.name), i))
                .collect();
            let Ok(hints) = <[Hint; HINTS_PER_PUZZLE]>::try_from(hints) else {
                continue;
            };

            let puzzle = Puzzle { word: word.clone(), hints };
            if puzzle.is_valid() {
                debug_puzzle!("Generated puzzle {} from name token", word);
                puzzles.push(puzzle);
                used.insert(word);
            }
        }
    }
}
