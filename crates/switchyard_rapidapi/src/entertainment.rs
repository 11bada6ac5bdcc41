//! IMDB, Steam and Spotify endpoints.

use crate::{RapidApiClient, data_array};
use derive_getters::Getters;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use switchyard_core::Params;
use switchyard_error::{InputError, SwitchyardResult};

const IMDB_SEARCH_URL: &str = "https://imdb8.p.rapidapi.com/v2/search";
const IMDB_TITLE_URL: &str = "https://imdb8.p.rapidapi.com/title/v2/get-overview";
const IMDB_ACTOR_URL: &str = "https://imdb8.p.rapidapi.com/actors/v2/get-overview";
const STEAM_BASE_URL: &str = "https://steam2.p.rapidapi.com/";
const SPOTIFY_SEARCH_URL: &str = "https://spotify23.p.rapidapi.com/search/";
const SPOTIFY_ALBUMS_URL: &str = "https://spotify23.p.rapidapi.com/albums/";
const SPOTIFY_ARTISTS_URL: &str = "https://spotify23.p.rapidapi.com/artists/";
const SPOTIFY_OVERVIEW_URL: &str = "https://spotify23.p.rapidapi.com/artist_overview/";
const SPOTIFY_RELATED_URL: &str = "https://spotify23.p.rapidapi.com/artist_related/";
const SPOTIFY_ARTIST_ALBUMS_URL: &str = "https://spotify23.p.rapidapi.com/artist_albums/";

/// Upper bound IMDB accepts for `first`.
pub const MAX_IMDB_RESULTS: u32 = 50;

/// Upper bound Steam accepts for a page of reviews.
pub const MAX_STEAM_REVIEWS: u32 = 200;

fn default_first() -> u32 {
    20
}

fn default_imdb_country() -> String {
    "US".to_string()
}

fn default_imdb_language() -> String {
    "en-US".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_review_limit() -> u32 {
    40
}

fn default_spotify_type() -> String {
    "multi".to_string()
}

fn default_spotify_limit() -> u32 {
    10
}

fn default_top_results() -> u32 {
    5
}

fn default_gl() -> String {
    "US".to_string()
}

fn default_artist_albums_limit() -> u32 {
    100
}

/// Arguments of [`RapidApiClient::search_imdb`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ImdbSearchRequest {
    /// Movie, show or person to look for.
    search_term: String,
    /// Restrict results to one kind, e.g. `TITLE` or `NAME`.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    search_type: Option<String>,
    /// Number of results, capped at [`MAX_IMDB_RESULTS`].
    #[serde(default = "default_first")]
    #[builder(default = "default_first()")]
    first: u32,
    /// Country code.
    #[serde(default = "default_imdb_country")]
    #[builder(default = "default_imdb_country()")]
    country: String,
    /// Language tag.
    #[serde(default = "default_imdb_language")]
    #[builder(default = "default_imdb_language()")]
    language: String,
}

/// Arguments of [`RapidApiClient::get_title_details`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct TitleDetailsRequest {
    /// IMDB title id, e.g. `tt0111161`.
    title_id: String,
    /// Country code.
    #[serde(default = "default_imdb_country")]
    #[builder(default = "default_imdb_country()")]
    country: String,
    /// Language tag.
    #[serde(default = "default_imdb_language")]
    #[builder(default = "default_imdb_language()")]
    language: String,
}

/// Arguments of [`RapidApiClient::get_actor_details`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ActorDetailsRequest {
    /// IMDB person id, e.g. `nm0000151`.
    person_id: String,
    /// Number of credits, capped at [`MAX_IMDB_RESULTS`].
    #[serde(default = "default_first")]
    #[builder(default = "default_first()")]
    first: u32,
    /// Country code.
    #[serde(default = "default_imdb_country")]
    #[builder(default = "default_imdb_country()")]
    country: String,
    /// Language tag.
    #[serde(default = "default_imdb_language")]
    #[builder(default = "default_imdb_language()")]
    language: String,
}

/// Arguments of [`RapidApiClient::steam_search_games`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SteamSearchRequest {
    /// Search term.
    term: String,
    /// Result page, starting at 1.
    #[serde(default = "default_page")]
    #[builder(default = "default_page()")]
    page: u32,
    /// Kind of result the caller is after. Echoed back only.
    #[serde(default, rename = "type")]
    #[builder(default, setter(strip_option, into))]
    kind: Option<String>,
}

/// Arguments of [`RapidApiClient::steam_get_app_details`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SteamAppRequest {
    /// Steam application id.
    app_id: String,
}

/// Arguments of [`RapidApiClient::steam_get_app_reviews`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SteamReviewsRequest {
    /// Steam application id.
    app_id: String,
    /// Reviews per page, capped at [`MAX_STEAM_REVIEWS`].
    #[serde(default = "default_review_limit")]
    #[builder(default = "default_review_limit()")]
    limit: u32,
    /// Paging cursor from a previous response.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    cursor: Option<String>,
}

/// Arguments of [`RapidApiClient::search_spotify`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SpotifySearchRequest {
    /// Search query.
    query: String,
    /// `multi`, `tracks`, `albums`, `artists` or `playlists`.
    #[serde(default = "default_spotify_type")]
    #[builder(default = "default_spotify_type()")]
    search_type: String,
    /// Offset for paging.
    #[serde(default)]
    #[builder(default)]
    offset: u32,
    /// Results per type.
    #[serde(default = "default_spotify_limit")]
    #[builder(default = "default_spotify_limit()")]
    limit: u32,
    /// Number of top results.
    #[serde(default = "default_top_results")]
    #[builder(default = "default_top_results()")]
    number_of_top_results: u32,
    /// Market country code.
    #[serde(default = "default_gl")]
    #[builder(default = "default_gl()")]
    gl: String,
}

/// Arguments of the Spotify lookups that take a list of ids.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SpotifyIdsRequest {
    /// Comma-separated Spotify ids.
    ids: String,
}

/// Arguments of [`RapidApiClient::get_spotify_artist_overview`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ArtistOverviewRequest {
    /// Spotify artist id.
    artist_id: String,
    /// Market country code.
    #[serde(default = "default_gl")]
    #[builder(default = "default_gl()")]
    gl: String,
}

/// Arguments of [`RapidApiClient::get_spotify_related_artists`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct RelatedArtistsRequest {
    /// Spotify artist id.
    artist_id: String,
}

/// Arguments of [`RapidApiClient::get_spotify_artist_albums`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ArtistAlbumsRequest {
    /// Spotify artist id.
    artist_id: String,
    /// Offset for paging.
    #[serde(default)]
    #[builder(default)]
    offset: u32,
    /// Albums per page.
    #[serde(default = "default_artist_albums_limit")]
    #[builder(default = "default_artist_albums_limit()")]
    limit: u32,
}

/// Steam URL with each segment percent-encoded.
#[track_caller]
fn steam_url(segments: &[&str]) -> Result<String, InputError> {
    let mut url = Url::parse(STEAM_BASE_URL)
        .map_err(|e| InputError::new(format!("Invalid Steam URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| InputError::new("Steam URL cannot take path segments"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}

/// The `data` member of a response, or the whole response when absent.
fn data_or_whole(data: Value) -> Value {
    match data.get("data") {
        Some(inner) => inner.clone(),
        None => data,
    }
}

/// Album items of an artist-albums response, which nests them in `data`
/// or returns them bare.
fn album_items(albums: &Value) -> usize {
    match albums {
        Value::Array(items) => items.len(),
        Value::Object(_) => data_array(albums, "items").len(),
        _ => 0,
    }
}

impl RapidApiClient {
    /// Searches IMDB for titles and people.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_imdb(&self, request: &ImdbSearchRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("searchTerm", request.search_term.as_str())
            .with("first", request.first.min(MAX_IMDB_RESULTS))
            .with("country", request.country.as_str())
            .with("language", request.language.as_str())
            .with_opt("type", request.search_type.clone());

        let data = self.get(IMDB_SEARCH_URL, params).await?;
        let results = data.get("data").cloned().unwrap_or_else(|| json!([]));
        let count = results.as_array().map_or(0, Vec::len);
        Ok(json!({
            "search_term": request.search_term,
            "count": count,
            "results": results,
        }))
    }

    /// Fetches the overview of one IMDB title.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_title_details(&self, request: &TitleDetailsRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("tconst", request.title_id.as_str())
            .with("country", request.country.as_str())
            .with("language", request.language.as_str());

        let data = self.get(IMDB_TITLE_URL, params).await?;
        Ok(json!({
            "title_id": request.title_id,
            "data": data_or_whole(data),
        }))
    }

    /// Fetches the overview of one IMDB person.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_actor_details(&self, request: &ActorDetailsRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("nconst", request.person_id.as_str())
            .with("first", request.first.min(MAX_IMDB_RESULTS))
            .with("country", request.country.as_str())
            .with("language", request.language.as_str());

        let data = self.get(IMDB_ACTOR_URL, params).await?;
        Ok(json!({
            "person_id": request.person_id,
            "data": data_or_whole(data),
        }))
    }

    /// Searches the Steam store.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn steam_search_games(&self, request: &SteamSearchRequest) -> SwitchyardResult<Value> {
        let page = request.page.to_string();
        let url = steam_url(&["search", &request.term, "page", &page])?;

        let data = self.get(&url, Params::new()).await?;
        Ok(json!({
            "term": request.term,
            "page": request.page,
            "type": request.kind,
            "results": data,
        }))
    }

    /// Fetches details of one Steam application.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn steam_get_app_details(&self, request: &SteamAppRequest) -> SwitchyardResult<Value> {
        let url = steam_url(&["appDetail", &request.app_id])?;

        let data = self.get(&url, Params::new()).await?;
        Ok(json!({
            "app_id": request.app_id,
            "data": data,
        }))
    }

    /// Fetches one page of reviews for a Steam application.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn steam_get_app_reviews(
        &self,
        request: &SteamReviewsRequest,
    ) -> SwitchyardResult<Value> {
        let limit = request.limit.min(MAX_STEAM_REVIEWS);
        let limit_segment = limit.to_string();
        let url = steam_url(&["appReviews", &request.app_id, "limit", &limit_segment, "*"])?;
        let params = Params::new().with_opt("cursor", request.cursor.clone());

        let data = self.get(&url, params).await?;
        Ok(json!({
            "app_id": request.app_id,
            "limit": limit,
            "cursor": request.cursor,
            "reviews": data,
        }))
    }

    /// Searches Spotify.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_spotify(&self, request: &SpotifySearchRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("q", request.query.as_str())
            .with("type", request.search_type.as_str())
            .with("offset", request.offset)
            .with("limit", request.limit)
            .with("numberOfTopResults", request.number_of_top_results)
            .with("gl", request.gl.as_str());

        let data = self.get(SPOTIFY_SEARCH_URL, params).await?;
        let count = data
            .get("tracks")
            .filter(|tracks| tracks.is_object())
            .map_or(0, |tracks| data_array(tracks, "items").len());
        Ok(json!({
            "query": request.query,
            "type": request.search_type,
            "count": count,
            "results": data,
        }))
    }

    /// Fetches one or more Spotify albums.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_spotify_albums(&self, request: &SpotifyIdsRequest) -> SwitchyardResult<Value> {
        let params = Params::new().with("ids", request.ids.as_str());

        let data = self.get(SPOTIFY_ALBUMS_URL, params).await?;
        let albums = data_array(&data, "albums");
        Ok(json!({
            "ids": request.ids,
            "count": albums.len(),
            "albums": albums,
        }))
    }

    /// Fetches one or more Spotify artists.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_spotify_artists(&self, request: &SpotifyIdsRequest) -> SwitchyardResult<Value> {
        let params = Params::new().with("ids", request.ids.as_str());

        let data = self.get(SPOTIFY_ARTISTS_URL, params).await?;
        let artists = data_array(&data, "artists");
        Ok(json!({
            "ids": request.ids,
            "count": artists.len(),
            "artists": artists,
        }))
    }

    /// Fetches the overview of a Spotify artist.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_spotify_artist_overview(
        &self,
        request: &ArtistOverviewRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("id", request.artist_id.as_str())
            .with("gl", request.gl.as_str());

        let data = self.get(SPOTIFY_OVERVIEW_URL, params).await?;
        Ok(json!({
            "id": request.artist_id,
            "overview": data,
        }))
    }

    /// Fetches artists related to a Spotify artist.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_spotify_related_artists(
        &self,
        request: &RelatedArtistsRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new().with("id", request.artist_id.as_str());

        let data = self.get(SPOTIFY_RELATED_URL, params).await?;
        let related = data_array(&data, "artists");
        Ok(json!({
            "id": request.artist_id,
            "count": related.len(),
            "related_artists": related,
        }))
    }

    /// Fetches the albums of a Spotify artist.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_spotify_artist_albums(
        &self,
        request: &ArtistAlbumsRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("id", request.artist_id.as_str())
            .with("offset", request.offset)
            .with("limit", request.limit);

        let data = self.get(SPOTIFY_ARTIST_ALBUMS_URL, params).await?;
        let total = data.get("totalCount").filter(|v| !v.is_null()).cloned();
        let albums = data_or_whole(data);
        let count = album_items(&albums);
        Ok(json!({
            "id": request.artist_id,
            "count": count,
            "total_count": total.unwrap_or_else(|| json!(count)),
            "albums": albums,
        }))
    }
}
