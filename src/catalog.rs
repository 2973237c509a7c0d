//! The emoji catalog: descriptive names mapped to unicode glyphs.
//!
//! The catalog ships as a plain text asset compiled into the binary. Each
//! non-comment line reads `name = glyph [glyph ...]`; a line with several
//! glyphs becomes one entry per glyph.

use crate::assets::{self, CATALOG_ASSET};
use crate::config::PLACEHOLDER_GLYPH;
use crate::error::CatalogError;
use rand::Rng;
use rand::seq::SliceRandom;

/// A single named glyph. Names and glyphs may both repeat across entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmojiEntry {
    pub name: String,
    pub glyph: String,
}

impl EmojiEntry {
    pub fn new(name: &str, glyph: &str) -> Self {
        EmojiEntry {
            name: name.to_string(),
            glyph: glyph.to_string(),
        }
    }

    fn has_glyph(&self) -> bool {
        !self.glyph.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    entries: Vec<EmojiEntry>,
}

impl EmojiCatalog {
    pub fn new(entries: Vec<EmojiEntry>) -> Self {
        EmojiCatalog { entries }
    }

    /// Loads the catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let bytes = assets::get_asset_bytes(CATALOG_ASSET)
            .ok_or_else(|| CatalogError::MissingAsset(CATALOG_ASSET.to_string()))?;
        let text = std::str::from_utf8(&bytes).map_err(|_| CatalogError::InvalidUtf8)?;
        let catalog = Self::parse(text)?;
        log::info!("Loaded emoji catalog with {} entries.", catalog.len());
        Ok(catalog)
    }

    /// Parses catalog text. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line_num = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, glyphs) = line
                .split_once('=')
                .ok_or(CatalogError::MissingSeparator { line: line_num })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(CatalogError::EmptyName { line: line_num });
            }

            let before = entries.len();
            entries.extend(glyphs.split_whitespace().map(|g| EmojiEntry::new(name, g)));
            if entries.len() == before {
                return Err(CatalogError::MissingGlyph {
                    line: line_num,
                    name: name.to_string(),
                });
            }
        }

        Ok(EmojiCatalog { entries })
    }

    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First glyph whose name equals `keyword`, ignoring case.
    pub fn find_exact(&self, keyword: &str) -> Option<&str> {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.has_glyph() && e.name.to_lowercase() == keyword)
            .map(|e| e.glyph.as_str())
    }

    /// First glyph whose name contains `keyword`, ignoring case.
    pub fn find_partial(&self, keyword: &str) -> Option<&str> {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.has_glyph() && e.name.to_lowercase().contains(&keyword))
            .map(|e| e.glyph.as_str())
    }

    /// All entries whose name contains `keyword`, ignoring case.
    pub fn matching(&self, keyword: &str) -> Vec<&EmojiEntry> {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&keyword))
            .collect()
    }

    /// Random glyph among entries matching `keyword`, or among the whole
    /// catalog when nothing matches.
    pub fn random_glyph<R: Rng + ?Sized>(&self, keyword: &str, rng: &mut R) -> Option<&str> {
        let matches = self.matching(keyword);
        let pick = if matches.is_empty() {
            self.entries.choose(rng)
        } else {
            matches.choose(rng).copied()
        };
        pick.filter(|e| e.has_glyph()).map(|e| e.glyph.as_str())
    }

    /// Resolves a theme keyword to a glyph: exact name, then substring, then a
    /// random pick. Yields the placeholder when the catalog has nothing at all.
    pub fn resolve<R: Rng + ?Sized>(&self, keyword: &str, rng: &mut R) -> &str {
        self.find_exact(keyword)
            .or_else(|| self.find_partial(keyword))
            .or_else(|| self.random_glyph(keyword, rng))
            .unwrap_or(PLACEHOLDER_GLYPH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_catalog() -> EmojiCatalog {
        EmojiCatalog::new(vec![
            EmojiEntry::new("sunflower", "🌻"),
            EmojiEntry::new("sun", "☀️"),
            EmojiEntry::new("night sky", "🌌"),
            EmojiEntry::new("Rainbow", "🌈"),
        ])
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "# header\n\nrainbow = 🌈\n  sun = ☀️  \n";
        let catalog = EmojiCatalog::parse(text).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0], EmojiEntry::new("rainbow", "🌈"));
        assert_eq!(catalog.entries()[1], EmojiEntry::new("sun", "☀️"));
    }

    #[test]
    fn test_parse_expands_multiple_glyphs() {
        let catalog = EmojiCatalog::parse("heart = ❤️ 💙 💚").unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.entries().iter().all(|e| e.name == "heart"));
        assert_eq!(catalog.entries()[2].glyph, "💚");
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        assert_eq!(
            EmojiCatalog::parse("ok = 👍\nbroken line").unwrap_err(),
            CatalogError::MissingSeparator { line: 2 }
        );
        assert_eq!(
            EmojiCatalog::parse(" = 👍").unwrap_err(),
            CatalogError::EmptyName { line: 1 }
        );
        assert_eq!(
            EmojiCatalog::parse("\n\nghost =   ").unwrap_err(),
            CatalogError::MissingGlyph {
                line: 3,
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = EmojiCatalog::builtin().unwrap();
        assert!(catalog.len() > 200);
        assert_eq!(catalog.find_exact("rainbow"), Some("🌈"));
        assert!(catalog.entries().iter().all(|e| !e.glyph.is_empty()));
    }

    #[test]
    fn test_exact_match_beats_partial() {
        let catalog = small_catalog();
        assert_eq!(catalog.find_exact("SUN"), Some("☀️"));
        assert_eq!(catalog.find_partial("sun"), Some("🌻"));

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.resolve("sun", &mut rng), "☀️");
    }

    #[test]
    fn test_partial_match_is_case_insensitive() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.resolve("SKY", &mut rng), "🌌");
        assert_eq!(catalog.resolve("rain", &mut rng), "🌈");
    }

    #[test]
    fn test_random_fallback_uses_whole_catalog() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let glyph = catalog.resolve("zebra", &mut rng);
        assert!(catalog.entries().iter().any(|e| e.glyph == glyph));
    }

    #[test]
    fn test_empty_catalog_resolves_to_placeholder() {
        let catalog = EmojiCatalog::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(catalog.resolve("anything", &mut rng), PLACEHOLDER_GLYPH);
        assert!(catalog.random_glyph("anything", &mut rng).is_none());
    }

    #[test]
    fn test_entries_without_glyph_are_skipped() {
        let catalog = EmojiCatalog::new(vec![
            EmojiEntry::new("moon", ""),
            EmojiEntry::new("moon", "🌙"),
        ]);
        assert_eq!(catalog.find_exact("moon"), Some("🌙"));
    }
}
