//! Site Configuration
//!
//! Page content and game tuning, embedded from `config/site.json` at build time.

use serde::Deserialize;

use packing_game::{GameSession, ItemSpec, DEFAULT_TIME_BUDGET_SECS};

use crate::models::{Memory, QuizQuestion, Wish};

const EMBEDDED: &str = include_str!("../config/site.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the hero and envelope
    pub recipient: String,
    /// Background track, played after the envelope opens
    pub music_src: String,
    pub game: GameConfig,
    pub candles: CandleConfig,
    pub quiz: Vec<QuizQuestion>,
    pub memories: Vec<Memory>,
    pub wishes: Vec<Wish>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            recipient: "Twin".to_string(),
            music_src: "/birthday-song.mp3".to_string(),
            game: GameConfig::default(),
            candles: CandleConfig::default(),
            quiz: Vec::new(),
            memories: Vec::new(),
            wishes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub time_budget_secs: u32,
    pub items: Vec<ItemSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: DEFAULT_TIME_BUDGET_SECS,
            items: default_items(),
        }
    }
}

impl GameConfig {
    pub fn new_session(&self) -> Result<GameSession, String> {
        GameSession::new(&self.items, self.time_budget_secs).map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CandleConfig {
    pub count: usize,
    /// Mean frequency-bin level (0-255) that counts as blowing
    pub blow_threshold: f64,
    pub sample_interval_ms: u64,
}

impl Default for CandleConfig {
    fn default() -> Self {
        Self {
            count: 3,
            blow_threshold: 50.0,
            sample_interval_ms: 100,
        }
    }
}

fn default_items() -> Vec<ItemSpec> {
    [
        (1, "Shirt", "👕", true),
        (2, "Jeans", "👖", true),
        (3, "Books", "📚", true),
        (4, "Backpack", "🎒", true),
        (5, "Dress", "👗", true),
        (6, "Shoes", "👟", true),
        (7, "Plant", "🪴", false),
        (8, "Frame", "🖼️", false),
        (9, "Candle", "🕯️", false),
        (10, "Teddy", "🧸", false),
    ]
    .into_iter()
    .map(|(id, label, emoji, should_pack)| ItemSpec {
        id,
        label: label.to_string(),
        emoji: emoji.to_string(),
        should_pack,
    })
    .collect()
}

/// Parse and validate a configuration document
pub fn parse(source: &str) -> Result<SiteConfig, String> {
    let config: SiteConfig = serde_json::from_str(source).map_err(|e| e.to_string())?;
    config.game.new_session()?;
    if config.candles.count == 0 {
        return Err("candle count must be at least 1".to_string());
    }
    if config.candles.sample_interval_ms == 0 {
        return Err("candle sample interval must be at least 1 ms".to_string());
    }
    for (i, q) in config.quiz.iter().enumerate() {
        if q.correct >= q.options.len() {
            return Err(format!("quiz question {} has no option {}", i + 1, q.correct));
        }
    }
    Ok(config)
}

/// Load the embedded configuration, falling back to defaults
pub fn load() -> SiteConfig {
    match parse(EMBEDDED) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("site config rejected ({}), using defaults", e);
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = parse(EMBEDDED).expect("embedded config parses");
        assert_eq!(config.game.time_budget_secs, 45);
        assert_eq!(config.game.items.iter().filter(|i| i.should_pack).count(), 6);
        assert_eq!(config.game.items.iter().filter(|i| !i.should_pack).count(), 4);
        assert!(!config.quiz.is_empty());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = parse(r#"{ "recipient": "Agrima" }"#).unwrap();
        assert_eq!(config.recipient, "Agrima");
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.candles.count, 3);
        assert_eq!(config.candles.blow_threshold, 50.0);
    }

    #[test]
    fn test_duplicate_item_ids_rejected() {
        let doc = r#"{ "game": { "items": [
            { "id": 1, "label": "Shirt", "should_pack": true },
            { "id": 1, "label": "Plant", "should_pack": false }
        ] } }"#;
        let err = parse(doc).unwrap_err();
        assert!(err.contains("duplicate item id 1"));
    }

    #[test]
    fn test_zero_time_budget_rejected() {
        let err = parse(r#"{ "game": { "time_budget_secs": 0 } }"#).unwrap_err();
        assert!(err.contains("time budget"));
    }

    #[test]
    fn test_zero_sample_interval_rejected() {
        let err = parse(r#"{ "candles": { "sample_interval_ms": 0 } }"#).unwrap_err();
        assert!(err.contains("sample interval"));
    }

    #[test]
    fn test_quiz_answer_out_of_range_rejected() {
        let doc = r#"{ "quiz": [ { "question": "?", "options": ["a", "b"], "correct": 2 } ] }"#;
        assert!(parse(doc).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(parse("{ not json").is_err());
    }
}
