use super::movie_catalog::MovieCatalog;
use crate::domain::movie::{
    AgeRating, CatalogError, DetailedMovie, MovieType, Rating, SimpleMovie,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const OMDB_DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb answers "True"/"False" as strings
const OMDB_RESPONSE_OK: &str = "True";

/// A single search hit, as sent by OMDb
#[derive(Debug, Default, Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search")]
    search: Option<Vec<OmdbSearchItem>>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OmdbRating {
    #[serde(rename = "Source")]
    source: Option<String>,
    #[serde(rename = "Value")]
    value: Option<String>,
}

/// Detail record as sent by OMDb. DVD, BoxOffice, Production and Website
/// are not used.
#[derive(Debug, Default, Deserialize)]
struct OmdbMovie {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Rated")]
    rated: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Writer")]
    writer: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Language")]
    language: Option<String>,
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Awards")]
    awards: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Ratings", default)]
    ratings: Vec<OmdbRating>,
    #[serde(rename = "Metascore")]
    metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// OMDb implementation of the movie catalog
pub struct OmdbMovieCatalog {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl OmdbMovieCatalog {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Issue a GET against the OMDb endpoint with the api key plus `params`
    async fn fetch<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, CatalogError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "OMDb request failed");
                CatalogError::from(e)
            })?;

        if !response.status().is_success() {
            tracing::warn!(
                status = response.status().as_u16(),
                "OMDb answered with an error status"
            );
            return Err(CatalogError::Api);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MovieCatalog for OmdbMovieCatalog {
    async fn search_by_name(&self, name: &str) -> Result<Vec<SimpleMovie>, CatalogError> {
        let response: OmdbSearchResponse = self.fetch(&[("s", name)]).await?;

        match response.search {
            Some(items) => Ok(items.into_iter().map(parse_simple_movie).collect()),
            None => {
                // OMDb reports "Movie not found!" instead of an empty list
                tracing::debug!(
                    name = %name,
                    omdb_error = ?response.error,
                    "OMDb search returned no results"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<DetailedMovie, CatalogError> {
        let movie: OmdbMovie = self.fetch(&[("i", id)]).await?;

        if movie.response.as_deref() != Some(OMDB_RESPONSE_OK) {
            let message = movie
                .error
                .unwrap_or_else(|| format!("no movie with id {}", id));
            return Err(CatalogError::NotFound(message));
        }

        Ok(parse_detailed_movie(movie))
    }
}

fn parse_simple_movie(item: OmdbSearchItem) -> SimpleMovie {
    SimpleMovie {
        title: or_unknown(item.title, "UnknownTitle"),
        year: item.year.as_deref().and_then(parse_year),
        id: or_unknown(item.imdb_id, "UnknownImdbId"),
        movie_type: parse_movie_type(item.kind.as_deref()),
        poster: or_unknown(item.poster, "UnknownPoster"),
    }
}

fn parse_detailed_movie(movie: OmdbMovie) -> DetailedMovie {
    DetailedMovie {
        title: or_unknown(movie.title, "UnknownTitle"),
        year: movie.year.as_deref().and_then(parse_year),
        rated: parse_age_rating(movie.rated.as_deref()),
        released: or_unknown(movie.released, "UnknownReleased"),
        runtime: or_unknown(movie.runtime, "UnknownRuntime"),
        genre: or_unknown(movie.genre, "UnknownGenre"),
        director: or_unknown(movie.director, "UnknownDirector"),
        writer: or_unknown(movie.writer, "UnknownWriter"),
        actors: or_unknown(movie.actors, "UnknownActors"),
        plot: or_unknown(movie.plot, "UnknownPlot"),
        language: or_unknown(movie.language, "UnknownLanguage"),
        country: or_unknown(movie.country, "UnknownCountry"),
        awards: or_unknown(movie.awards, "UnknownAwards"),
        poster: or_unknown(movie.poster, "UnknownPoster"),
        ratings: movie
            .ratings
            .into_iter()
            .map(|rating| Rating {
                source: or_unknown(rating.source, "UnknownSource"),
                value: or_unknown(rating.value, "UnknownValue"),
            })
            .collect(),
        metascore: movie.metascore.as_deref().and_then(parse_number),
        rating_value: movie.imdb_rating.as_deref().and_then(parse_number),
        votes: movie.imdb_votes.as_deref().and_then(parse_number),
        id: or_unknown(movie.imdb_id, "UnknownImdbId"),
        movie_type: parse_movie_type(movie.kind.as_deref()),
    }
}

fn or_unknown(value: Option<String>, placeholder: &str) -> String {
    value.unwrap_or_else(|| placeholder.to_string())
}

/// Leading year of values like "2008" or "2008–2012"
fn parse_year(value: &str) -> Option<i32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Numbers such as "9.0", "84" or "2,234,169". "N/A" yields `None`.
fn parse_number(value: &str) -> Option<f64> {
    value
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn parse_movie_type(value: Option<&str>) -> MovieType {
    match value {
        Some("series") => MovieType::Series,
        Some("episode") => MovieType::Episode,
        _ => MovieType::Movie,
    }
}

fn parse_age_rating(value: Option<&str>) -> AgeRating {
    match value {
        Some("PG") => AgeRating::Pg,
        Some("PG-13") => AgeRating::Pg13,
        Some("R") => AgeRating::R,
        Some("NC-17") => AgeRating::Nc17,
        _ => AgeRating::G,
    }
}
