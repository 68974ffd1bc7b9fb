//! Content Models
//!
//! Data structures for the configurable page content.

use serde::{Deserialize, Serialize};

/// Which side of the timeline spine a memory sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A photo on the journey timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub year: String,
    pub caption: String,
    pub image: String,
    #[serde(default)]
    pub side: Side,
    /// Polaroid tilt in degrees
    #[serde(default)]
    pub tilt_deg: f64,
}

/// A card in the wishes grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub emoji: String,
    pub message: String,
}

/// One multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct: usize,
    /// Per-option feedback line, same length as `options`
    #[serde(default)]
    pub feedback: Vec<String>,
}

impl QuizQuestion {
    pub fn feedback_for(&self, option: usize) -> &str {
        self.feedback.get(option).map(String::as_str).unwrap_or("")
    }
}
