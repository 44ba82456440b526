use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TasteCategory {
    #[serde(rename = "cineaste")]
    Cineaste,
    #[serde(rename = "ordinary")]
    Ordinary,
    #[serde(rename = "trash lover")]
    TrashLover,
    #[serde(rename = "unknown")]
    Unknown,
}

impl TasteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cineaste => "cineaste",
            Self::Ordinary => "ordinary",
            Self::TrashLover => "trash lover",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response for GET /api/taste
///
/// `average_score` is `None` when there are no favorites to average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasteResult {
    pub average_score: Option<f64>,
    pub taste_category: TasteCategory,
}
