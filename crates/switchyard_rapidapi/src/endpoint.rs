//! Registry of RapidAPI endpoints exposed as tools.

use crate::{
    ActorDetailsRequest, ArtistAlbumsRequest, ArtistOverviewRequest, BusinessDetailsRequest,
    BusinessReviewsRequest, BusinessSearchRequest, HeadlinesRequest, ImdbSearchRequest,
    JobDetailsRequest, JobSearchRequest, LocalHeadlinesRequest, NewsSearchRequest, PriceRequest,
    PropertyDetailsRequest, QuoteRequest, RapidApiClient, RecipeSearchRequest,
    RelatedArtistsRequest, RentalSearchRequest, SpotifyIdsRequest, SpotifySearchRequest,
    SteamAppRequest, SteamReviewsRequest, SteamSearchRequest, StoryCoverageRequest,
    TitleDetailsRequest, TrendsRequest, TweetDetailsRequest, TweetSearchRequest,
    UserProfileRequest, UserSearchRequest, UserTweetsRequest, WebSearchRequest,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use switchyard_error::{InputError, SwitchyardResult};
use tracing::instrument;

/// One RapidAPI binding, named after its tool.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint {
    /// Real-Time News Data search.
    SearchNews,
    /// Top headlines.
    GetHeadlines,
    /// Headlines for a location.
    GetLocalHeadlines,
    /// All coverage of one story.
    GetFullStoryCoverage,
    /// General web search.
    SearchWeb,
    /// Local business search.
    LocalBusinessSearch,
    /// Details of one business.
    GetBusinessDetails,
    /// Reviews of one business.
    GetBusinessReviews,
    /// Latest price of a symbol.
    GetTwelveDataPrice,
    /// Quote for a symbol.
    GetTwelveDataQuote,
    /// JSearch job search.
    SearchJobs,
    /// One job posting.
    GetJobDetails,
    /// Tasty recipe search.
    SearchRecipes,
    /// IMDB search.
    SearchImdb,
    /// Overview of one IMDB title.
    GetTitleDetails,
    /// Overview of one IMDB person.
    GetActorDetails,
    /// Steam store search.
    SteamSearchGames,
    /// Details of one Steam app.
    SteamGetAppDetails,
    /// Reviews of one Steam app.
    SteamGetAppReviews,
    /// Spotify search.
    SearchSpotify,
    /// Spotify albums by id.
    GetSpotifyAlbums,
    /// Spotify artists by id.
    GetSpotifyArtists,
    /// Overview of a Spotify artist.
    GetSpotifyArtistOverview,
    /// Artists related to a Spotify artist.
    GetSpotifyRelatedArtists,
    /// Albums of a Spotify artist.
    GetSpotifyArtistAlbums,
    /// Zillow rental search.
    SearchRentalProperties,
    /// One Zillow property.
    GetPropertyDetails,
    /// Twitter search.
    SearchTweets,
    /// One Twitter profile.
    GetUserProfile,
    /// Recent tweets of a user.
    GetUserTweets,
    /// Trending topics for a location.
    GetTrendingTopics,
    /// One tweet.
    GetTweetDetails,
    /// Twitter account search.
    SearchUsers,
}

impl Endpoint {
    /// Tool name.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Tool description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SearchNews => "Search news articles with the Real-Time News Data API",
            Self::GetHeadlines => "Get top news headlines for a country and language",
            Self::GetLocalHeadlines => "Get local news headlines for a location",
            Self::GetFullStoryCoverage => "Get every article covering one news story",
            Self::SearchWeb => "Run a general-purpose web search",
            Self::LocalBusinessSearch => "Search local businesses (up to 50 results)",
            Self::GetBusinessDetails => "Get detailed information about a business",
            Self::GetBusinessReviews => "Get reviews for a business",
            Self::GetTwelveDataPrice => "Get the latest price for a stock or crypto symbol",
            Self::GetTwelveDataQuote => "Get quote data for a stock or crypto symbol",
            Self::SearchJobs => "Search job listings with the JSearch API",
            Self::GetJobDetails => "Get details of a job posting",
            Self::SearchRecipes => "Search recipes with the Tasty API (up to 40 results)",
            Self::SearchImdb => "Search IMDB for movies, TV shows and people",
            Self::GetTitleDetails => "Get overview details for an IMDB title",
            Self::GetActorDetails => "Get overview details for an IMDB person",
            Self::SteamSearchGames => "Search the Steam store for games",
            Self::SteamGetAppDetails => "Get details for a Steam application",
            Self::SteamGetAppReviews => "Get reviews for a Steam application (up to 200)",
            Self::SearchSpotify => "Search Spotify for tracks, albums, artists and more",
            Self::GetSpotifyAlbums => "Get one or more Spotify albums by id",
            Self::GetSpotifyArtists => "Get one or more Spotify artists by id",
            Self::GetSpotifyArtistOverview => "Get overview information for a Spotify artist",
            Self::GetSpotifyRelatedArtists => "Get artists related to a Spotify artist",
            Self::GetSpotifyArtistAlbums => "Get the albums published by a Spotify artist",
            Self::SearchRentalProperties => "Search Zillow rental listings",
            Self::GetPropertyDetails => "Get details for a Zillow property",
            Self::SearchTweets => "Search tweets (up to 100)",
            Self::GetUserProfile => "Get a Twitter user's profile",
            Self::GetUserTweets => "Get a Twitter user's recent tweets (up to 100)",
            Self::GetTrendingTopics => "Get trending Twitter topics for a WOEID",
            Self::GetTweetDetails => "Get details of one tweet",
            Self::SearchUsers => "Search Twitter accounts (up to 50)",
        }
    }

    /// JSON schema of the tool arguments.
    pub fn input_schema(&self) -> Value {
        let (properties, required) = match self {
            Self::SearchNews => (
                json!({
                    "query": { "type": "string", "description": "Search query" },
                    "limit": { "type": "integer", "default": 10 },
                    "time_published": { "type": "string", "default": "anytime" },
                    "country": { "type": "string", "default": "US" },
                    "lang": { "type": "string", "default": "en" },
                    "source": { "type": "string", "description": "Publisher domain" }
                }),
                vec!["query"],
            ),
            Self::GetHeadlines => (
                json!({
                    "limit": { "type": "integer", "default": 10 },
                    "country": { "type": "string", "default": "US" },
                    "lang": { "type": "string", "default": "en" }
                }),
                vec![],
            ),
            Self::GetLocalHeadlines => (
                json!({
                    "query": { "type": "string", "description": "Location" },
                    "limit": { "type": "integer", "default": 10 },
                    "country": { "type": "string", "default": "US" },
                    "lang": { "type": "string", "default": "en" }
                }),
                vec!["query"],
            ),
            Self::GetFullStoryCoverage => (
                json!({
                    "story_id": { "type": "string" },
                    "sort": { "type": "string", "enum": ["RELEVANCE", "DATE"], "default": "RELEVANCE" }
                }),
                vec!["story_id"],
            ),
            Self::SearchWeb => (
                json!({ "query": { "type": "string", "description": "Search query" } }),
                vec!["query"],
            ),
            Self::LocalBusinessSearch => (
                json!({
                    "query": { "type": "string", "description": "e.g. coffee in Seattle" },
                    "limit": { "type": "integer", "default": 20, "maximum": 50 },
                    "lat": { "type": "number" },
                    "lng": { "type": "number" },
                    "zoom": { "type": "integer", "default": 13 },
                    "language": { "type": "string", "default": "en" },
                    "region": { "type": "string", "default": "us" },
                    "extract_emails_and_contacts": { "type": "boolean", "default": false },
                    "subtypes": { "type": "string" },
                    "verified": { "type": "boolean", "default": false },
                    "business_status": { "type": "string" },
                    "fields": { "type": "string" }
                }),
                vec!["query"],
            ),
            Self::GetBusinessDetails => (
                json!({
                    "business_id": { "type": "string" },
                    "extract_emails_and_contacts": { "type": "boolean" },
                    "extract_share_link": { "type": "boolean" },
                    "fields": { "type": "string" },
                    "region": { "type": "string" },
                    "language": { "type": "string" }
                }),
                vec!["business_id"],
            ),
            Self::GetBusinessReviews => (
                json!({
                    "business_id": { "type": "string" },
                    "limit": { "type": "integer" },
                    "offset": { "type": "integer" },
                    "translate_reviews": { "type": "boolean" },
                    "query": { "type": "string" },
                    "sort_by": { "type": "string" },
                    "fields": { "type": "string" },
                    "region": { "type": "string" }
                }),
                vec!["business_id"],
            ),
            Self::GetTwelveDataPrice => (
                json!({
                    "symbol": { "type": "string", "description": "Ticker, e.g. AAPL" },
                    "format": { "type": "string", "default": "json" },
                    "outputsize": { "type": "integer", "default": 30 }
                }),
                vec!["symbol"],
            ),
            Self::GetTwelveDataQuote => (
                json!({
                    "symbol": { "type": "string", "description": "Ticker, e.g. AAPL" },
                    "interval": { "type": "string", "description": "e.g. 1day, 1h" },
                    "format": { "type": "string", "default": "json" },
                    "outputsize": { "type": "integer", "default": 30 }
                }),
                vec!["symbol", "interval"],
            ),
            Self::SearchJobs => (
                json!({
                    "query": { "type": "string", "description": "e.g. rust developer in Berlin" },
                    "page": { "type": "integer", "default": 1 },
                    "num_pages": { "type": "integer", "default": 1 },
                    "country": { "type": "string", "default": "us" },
                    "date_posted": { "type": "string", "default": "all" },
                    "work_from_home": { "type": "boolean" },
                    "employment_types": { "type": "string" },
                    "job_requirements": { "type": "string" },
                    "radius": { "type": "integer" },
                    "exclude_job_publishers": { "type": "string" },
                    "fields": { "type": "string" }
                }),
                vec!["query"],
            ),
            Self::GetJobDetails => (
                json!({
                    "job_id": { "type": "string" },
                    "country": { "type": "string", "default": "us" },
                    "language": { "type": "string" },
                    "fields": { "type": "string" }
                }),
                vec!["job_id"],
            ),
            Self::SearchRecipes => (
                json!({
                    "query": { "type": "string", "description": "Ingredient or dish" },
                    "offset": { "type": "integer", "default": 0 },
                    "size": { "type": "integer", "default": 10, "maximum": 40 }
                }),
                vec!["query"],
            ),
            Self::SearchImdb => (
                json!({
                    "search_term": { "type": "string", "description": "Title or name" },
                    "search_type": { "type": "string", "description": "e.g. TITLE or NAME" },
                    "first": { "type": "integer", "default": 20, "maximum": 50 },
                    "country": { "type": "string", "default": "US" },
                    "language": { "type": "string", "default": "en-US" }
                }),
                vec!["search_term"],
            ),
            Self::GetTitleDetails => (
                json!({
                    "title_id": { "type": "string", "description": "IMDB id, e.g. tt0111161" },
                    "country": { "type": "string", "default": "US" },
                    "language": { "type": "string", "default": "en-US" }
                }),
                vec!["title_id"],
            ),
            Self::GetActorDetails => (
                json!({
                    "person_id": { "type": "string", "description": "IMDB id, e.g. nm0000151" },
                    "first": { "type": "integer", "default": 20, "maximum": 50 },
                    "country": { "type": "string", "default": "US" },
                    "language": { "type": "string", "default": "en-US" }
                }),
                vec!["person_id"],
            ),
            Self::SteamSearchGames => (
                json!({
                    "term": { "type": "string" },
                    "page": { "type": "integer", "default": 1 },
                    "type": { "type": "string" }
                }),
                vec!["term"],
            ),
            Self::SteamGetAppDetails => (
                json!({ "app_id": { "type": "string" } }),
                vec!["app_id"],
            ),
            Self::SteamGetAppReviews => (
                json!({
                    "app_id": { "type": "string" },
                    "limit": { "type": "integer", "default": 40, "maximum": 200 },
                    "cursor": { "type": "string" }
                }),
                vec!["app_id"],
            ),
            Self::SearchSpotify => (
                json!({
                    "query": { "type": "string" },
                    "search_type": { "type": "string", "default": "multi" },
                    "offset": { "type": "integer", "default": 0 },
                    "limit": { "type": "integer", "default": 10 },
                    "number_of_top_results": { "type": "integer", "default": 5 },
                    "gl": { "type": "string", "default": "US" }
                }),
                vec!["query"],
            ),
            Self::GetSpotifyAlbums | Self::GetSpotifyArtists => (
                json!({ "ids": { "type": "string", "description": "Comma-separated ids" } }),
                vec!["ids"],
            ),
            Self::GetSpotifyArtistOverview => (
                json!({
                    "artist_id": { "type": "string" },
                    "gl": { "type": "string", "default": "US" }
                }),
                vec!["artist_id"],
            ),
            Self::GetSpotifyRelatedArtists => (
                json!({ "artist_id": { "type": "string" } }),
                vec!["artist_id"],
            ),
            Self::GetSpotifyArtistAlbums => (
                json!({
                    "artist_id": { "type": "string" },
                    "offset": { "type": "integer", "default": 0 },
                    "limit": { "type": "integer", "default": 100 }
                }),
                vec!["artist_id"],
            ),
            Self::SearchRentalProperties => (
                json!({
                    "location": { "type": "string", "description": "City, neighborhood or ZIP" },
                    "page": { "type": "integer", "default": 1 },
                    "sort_by": { "type": "string", "default": "relevance" },
                    "price": { "type": "object", "description": "{\"min\": .., \"max\": ..}" },
                    "bedrooms": { "type": "object" },
                    "min_bathrooms": { "type": "integer" },
                    "home_types": { "type": "array", "items": { "type": "string" } },
                    "move_in_date": { "type": "string", "description": "YYYY-MM-DD" },
                    "rental_amenities": { "type": "array", "items": { "type": "string" } },
                    "popular_filters": { "type": "array", "items": { "type": "string" } },
                    "home_size": { "type": "object" },
                    "lot_size": { "type": "object" },
                    "year_built": { "type": "object" },
                    "basement_types": { "type": "array", "items": { "type": "string" } },
                    "amenities": { "type": "array", "items": { "type": "string" } },
                    "views": { "type": "array", "items": { "type": "string" } },
                    "time_on_zillow": { "type": "object" },
                    "keywords": { "type": "array", "items": { "type": "string" } }
                }),
                vec!["location"],
            ),
            Self::GetPropertyDetails => (
                json!({ "zpid": { "type": "string", "description": "Zillow property id" } }),
                vec!["zpid"],
            ),
            Self::SearchTweets => (
                json!({
                    "query": { "type": "string" },
                    "limit": { "type": "integer", "default": 20, "maximum": 100 },
                    "section": { "type": "string", "enum": ["top", "latest"], "default": "top" },
                    "min_retweets": { "type": "integer", "default": 0 },
                    "min_likes": { "type": "integer", "default": 0 }
                }),
                vec!["query"],
            ),
            Self::GetUserProfile => (
                json!({ "username": { "type": "string" } }),
                vec!["username"],
            ),
            Self::GetUserTweets => (
                json!({
                    "username": { "type": "string" },
                    "limit": { "type": "integer", "default": 20, "maximum": 100 },
                    "user_id": { "type": "string" },
                    "include_replies": { "type": "boolean", "default": false },
                    "include_pinned": { "type": "boolean", "default": false }
                }),
                vec!["username"],
            ),
            Self::GetTrendingTopics => (
                json!({ "woeid": { "type": "integer", "default": 1 } }),
                vec![],
            ),
            Self::GetTweetDetails => (
                json!({ "tweet_id": { "type": "string" } }),
                vec!["tweet_id"],
            ),
            Self::SearchUsers => (
                json!({
                    "query": { "type": "string" },
                    "limit": { "type": "integer", "default": 20, "maximum": 50 }
                }),
                vec!["query"],
            ),
        };

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Calls the endpoint with tool arguments.
    ///
    /// # Errors
    ///
    /// Returns an input error when the arguments do not deserialize into the
    /// endpoint's request, otherwise the client's HTTP errors.
    #[instrument(skip(client, args), fields(endpoint = %self))]
    pub async fn invoke(&self, client: &RapidApiClient, args: Value) -> SwitchyardResult<Value> {
        match self {
            Self::SearchNews => client.search_news(&parse::<NewsSearchRequest>(args)?).await,
            Self::GetHeadlines => client.get_headlines(&parse::<HeadlinesRequest>(args)?).await,
            Self::GetLocalHeadlines => {
                client
                    .get_local_headlines(&parse::<LocalHeadlinesRequest>(args)?)
                    .await
            }
            Self::GetFullStoryCoverage => {
                client
                    .get_full_story_coverage(&parse::<StoryCoverageRequest>(args)?)
                    .await
            }
            Self::SearchWeb => client.search_web(&parse::<WebSearchRequest>(args)?).await,
            Self::LocalBusinessSearch => {
                client
                    .local_business_search(&parse::<BusinessSearchRequest>(args)?)
                    .await
            }
            Self::GetBusinessDetails => {
                client
                    .get_business_details(&parse::<BusinessDetailsRequest>(args)?)
                    .await
            }
            Self::GetBusinessReviews => {
                client
                    .get_business_reviews(&parse::<BusinessReviewsRequest>(args)?)
                    .await
            }
            Self::GetTwelveDataPrice => {
                client
                    .get_twelve_data_price(&parse::<PriceRequest>(args)?)
                    .await
            }
            Self::GetTwelveDataQuote => {
                client
                    .get_twelve_data_quote(&parse::<QuoteRequest>(args)?)
                    .await
            }
            Self::SearchJobs => client.search_jobs(&parse::<JobSearchRequest>(args)?).await,
            Self::GetJobDetails => client.get_job_details(&parse::<JobDetailsRequest>(args)?).await,
            Self::SearchRecipes => {
                client
                    .search_recipes(&parse::<RecipeSearchRequest>(args)?)
                    .await
            }
            Self::SearchImdb => client.search_imdb(&parse::<ImdbSearchRequest>(args)?).await,
            Self::GetTitleDetails => {
                client
                    .get_title_details(&parse::<TitleDetailsRequest>(args)?)
                    .await
            }
            Self::GetActorDetails => {
                client
                    .get_actor_details(&parse::<ActorDetailsRequest>(args)?)
                    .await
            }
            Self::SteamSearchGames => {
                client
                    .steam_search_games(&parse::<SteamSearchRequest>(args)?)
                    .await
            }
            Self::SteamGetAppDetails => {
                client
                    .steam_get_app_details(&parse::<SteamAppRequest>(args)?)
                    .await
            }
            Self::SteamGetAppReviews => {
                client
                    .steam_get_app_reviews(&parse::<SteamReviewsRequest>(args)?)
                    .await
            }
            Self::SearchSpotify => {
                client
                    .search_spotify(&parse::<SpotifySearchRequest>(args)?)
                    .await
            }
            Self::GetSpotifyAlbums => {
                client
                    .get_spotify_albums(&parse::<SpotifyIdsRequest>(args)?)
                    .await
            }
            Self::GetSpotifyArtists => {
                client
                    .get_spotify_artists(&parse::<SpotifyIdsRequest>(args)?)
                    .await
            }
            Self::GetSpotifyArtistOverview => {
                client
                    .get_spotify_artist_overview(&parse::<ArtistOverviewRequest>(args)?)
                    .await
            }
            Self::GetSpotifyRelatedArtists => {
                client
                    .get_spotify_related_artists(&parse::<RelatedArtistsRequest>(args)?)
                    .await
            }
            Self::GetSpotifyArtistAlbums => {
                client
                    .get_spotify_artist_albums(&parse::<ArtistAlbumsRequest>(args)?)
                    .await
            }
            Self::SearchRentalProperties => {
                client
                    .search_rental_properties(&parse::<RentalSearchRequest>(args)?)
                    .await
            }
            Self::GetPropertyDetails => {
                client
                    .get_property_details(&parse::<PropertyDetailsRequest>(args)?)
                    .await
            }
            Self::SearchTweets => client.search_tweets(&parse::<TweetSearchRequest>(args)?).await,
            Self::GetUserProfile => {
                client
                    .get_user_profile(&parse::<UserProfileRequest>(args)?)
                    .await
            }
            Self::GetUserTweets => {
                client
                    .get_user_tweets(&parse::<UserTweetsRequest>(args)?)
                    .await
            }
            Self::GetTrendingTopics => {
                client
                    .get_trending_topics(&parse::<TrendsRequest>(args)?)
                    .await
            }
            Self::GetTweetDetails => {
                client
                    .get_tweet_details(&parse::<TweetDetailsRequest>(args)?)
                    .await
            }
            Self::SearchUsers => client.search_users(&parse::<UserSearchRequest>(args)?).await,
        }
    }
}

/// Deserializes tool arguments, treating `null` as an empty object.
#[track_caller]
fn parse<T: DeserializeOwned>(args: Value) -> Result<T, InputError> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| InputError::new(format!("Invalid arguments: {}", e)))
}
