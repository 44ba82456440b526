use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieType {
    #[default]
    Movie,
    Series,
    Episode,
}

/// MPAA age rating. Unrecognised ratings fall back to `G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgeRating {
    #[default]
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
}

/// A rating from a third-party source, kept verbatim ("9.0/10", "94%")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Search hit as returned by the catalog's name search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleMovie {
    pub title: String,
    pub year: Option<i32>,
    pub id: String,
    pub movie_type: MovieType,
    pub poster: String,
}

/// Full catalog record for one movie.
///
/// `rating_value` is the 0–10 score used when the movie becomes a favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedMovie {
    pub title: String,
    pub year: Option<i32>,
    pub rated: AgeRating,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub ratings: Vec<Rating>,
    pub metascore: Option<f64>,
    pub rating_value: Option<f64>,
    pub votes: Option<f64>,
    pub id: String,
    pub movie_type: MovieType,
}
