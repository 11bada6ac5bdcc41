//! RapidAPI client for Switchyard.
//!
//! [`RapidApiClient`] attaches the RapidAPI key and host headers to every
//! request. Each endpoint module adds typed bindings on top of it: a request
//! struct (deserializable from tool arguments, buildable from Rust) and a
//! client method that shapes the upstream response. [`Endpoint`] enumerates
//! all of them for registration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod endpoint;
mod entertainment;
mod finance;
mod food;
mod jobs;
mod news;
mod realestate;
mod search;
mod social;

pub use client::{RapidApiClient, data_array};
pub use endpoint::Endpoint;
pub use entertainment::{
    ActorDetailsRequest, ActorDetailsRequestBuilder, ArtistAlbumsRequest,
    ArtistAlbumsRequestBuilder, ArtistOverviewRequest, ArtistOverviewRequestBuilder,
    ImdbSearchRequest, ImdbSearchRequestBuilder, MAX_IMDB_RESULTS, MAX_STEAM_REVIEWS,
    RelatedArtistsRequest, RelatedArtistsRequestBuilder, SpotifyIdsRequest,
    SpotifyIdsRequestBuilder, SpotifySearchRequest, SpotifySearchRequestBuilder, SteamAppRequest,
    SteamAppRequestBuilder, SteamReviewsRequest, SteamReviewsRequestBuilder, SteamSearchRequest,
    SteamSearchRequestBuilder, TitleDetailsRequest, TitleDetailsRequestBuilder,
};
pub use finance::{PriceRequest, PriceRequestBuilder, QuoteRequest, QuoteRequestBuilder};
pub use food::{MAX_RECIPES, RecipeSearchRequest, RecipeSearchRequestBuilder};
pub use jobs::{
    JobDetailsRequest, JobDetailsRequestBuilder, JobSearchRequest, JobSearchRequestBuilder,
};
pub use news::{
    HeadlinesRequest, HeadlinesRequestBuilder, LocalHeadlinesRequest,
    LocalHeadlinesRequestBuilder, NewsSearchRequest, NewsSearchRequestBuilder,
    StoryCoverageRequest, StoryCoverageRequestBuilder,
};
pub use realestate::{
    PropertyDetailsRequest, PropertyDetailsRequestBuilder, RentalSearchRequest,
    RentalSearchRequestBuilder,
};
pub use search::{
    BusinessDetailsRequest, BusinessDetailsRequestBuilder, BusinessReviewsRequest,
    BusinessReviewsRequestBuilder, BusinessSearchRequest, BusinessSearchRequestBuilder,
    MAX_BUSINESS_RESULTS, WebSearchRequest, WebSearchRequestBuilder,
};
pub use social::{
    MAX_TWEETS, MAX_USERS, TrendsRequest, TrendsRequestBuilder, TweetDetailsRequest,
    TweetDetailsRequestBuilder, TweetSearchRequest, TweetSearchRequestBuilder,
    UserProfileRequest, UserProfileRequestBuilder, UserSearchRequest, UserSearchRequestBuilder,
    UserTweetsRequest, UserTweetsRequestBuilder,
};
