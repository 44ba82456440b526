use serde_json::{json, Value};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-omdb-key";

/// OMDb detail payload with the fields the app reads
pub fn movie_json(id: &str, title: &str, imdb_rating: &str) -> Value {
    json!({
        "Title": title,
        "Year": "2008",
        "Rated": "PG-13",
        "Released": "18 Jul 2008",
        "Runtime": "152 min",
        "Genre": "Action, Crime, Drama",
        "Director": "Christopher Nolan",
        "Writer": "Jonathan Nolan, Christopher Nolan",
        "Actors": "Christian Bale, Heath Ledger",
        "Plot": "A movie used in tests.",
        "Language": "English",
        "Country": "USA, UK",
        "Awards": "Won 2 Oscars.",
        "Poster": "link",
        "Ratings": [{ "Source": "Internet Movie Database", "Value": format!("{}/10", imdb_rating) }],
        "Metascore": "84",
        "imdbRating": imdb_rating,
        "imdbVotes": "2,234,169",
        "imdbID": id,
        "Type": "movie",
        "Response": "True"
    })
}

pub async fn mount_movie(server: &MockServer, id: &str, title: &str, imdb_rating: &str) {
    Mock::given(method("GET"))
        .and(query_param("apikey", TEST_API_KEY))
        .and(query_param("i", id))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_json(id, title, imdb_rating)))
        .mount(server)
        .await;
}

pub async fn mount_unknown_movie(server: &MockServer, id: &str) {
    Mock::given(method("GET"))
        .and(query_param("i", id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Incorrect IMDb ID."
        })))
        .mount(server)
        .await;
}

pub async fn mount_search(server: &MockServer, name: &str, hits: &[(&str, &str, &str)]) {
    let search: Vec<Value> = hits
        .iter()
        .map(|(id, title, year)| {
            json!({ "Title": title, "Year": year, "imdbID": id, "Type": "movie", "Poster": "link" })
        })
        .collect();

    Mock::given(method("GET"))
        .and(query_param("apikey", TEST_API_KEY))
        .and(query_param("s", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": search,
            "totalResults": hits.len().to_string(),
            "Response": "True"
        })))
        .mount(server)
        .await;
}

pub async fn mount_outage(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(server)
        .await;
}
