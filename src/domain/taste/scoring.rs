use super::model::{TasteCategory, TasteResult};
use crate::domain::favorites::Favorite;

const TRASH_LOVER_MAX: f64 = 4.0;
const ORDINARY_MAX: f64 = 7.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Mean favorite score rounded to one decimal place, `None` without favorites
pub fn average_score(favorites: &[Favorite]) -> Option<f64> {
    if favorites.is_empty() {
        return None;
    }

    let total: f64 = favorites.iter().map(|favorite| favorite.score).sum();
    let mean = total / favorites.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Map a rounded average to its taste bucket.
///
/// # Panics
/// If the average lies outside `[0, 10]`. Scores are validated before they
/// are stored, so reaching that branch is a bug.
pub fn classify(average_score: Option<f64>) -> TasteCategory {
    let Some(score) = average_score else {
        return TasteCategory::Unknown;
    };

    if (MIN_SCORE..=TRASH_LOVER_MAX).contains(&score) {
        TasteCategory::TrashLover
    } else if score > TRASH_LOVER_MAX && score <= ORDINARY_MAX {
        TasteCategory::Ordinary
    } else if score > ORDINARY_MAX && score <= MAX_SCORE {
        TasteCategory::Cineaste
    } else {
        panic!(
            "average score has to be between {} and {}, but was: {}",
            MIN_SCORE, MAX_SCORE, score
        );
    }
}

pub fn determine_taste(favorites: &[Favorite]) -> TasteResult {
    let average_score = average_score(favorites);
    TasteResult {
        average_score,
        taste_category: classify(average_score),
    }
}
