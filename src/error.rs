// Error types: catalog loading, card baking, and the top-level game error

use thiserror::Error;

/// Catalog Errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Embedded asset '{0}' not found")]
    MissingAsset(String),
    #[error("Catalog asset is not valid UTF-8")]
    InvalidUtf8,
    #[error("Line {line}: expected `name = glyph`")]
    MissingSeparator { line: usize },
    #[error("Line {line}: entry has an empty name")]
    EmptyName { line: usize },
    #[error("Line {line}: entry '{name}' has no glyph")]
    MissingGlyph { line: usize, name: String },
}

/// Render Errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Cannot bake a card texture of size {0}x{0}")]
    TextureSize(u32),
    #[error("Hint '{0}' has no glyph to draw")]
    EmptyGlyph(String),
}

/// Errors that end the game
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Failed to load emoji catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Failed to draw hint card: {0}")]
    Render(#[from] RenderError),
}
