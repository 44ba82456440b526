use serde::{Deserialize, Serialize};

/// A movie the user saved, with the score it had when it was saved.
///
/// Two favorites are the same entry when their ids match; title and score
/// are not compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub title: String,
    pub score: f64,
}

impl Favorite {
    pub fn new(id: impl Into<String>, title: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            score,
        }
    }
}
