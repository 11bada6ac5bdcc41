//! Twitter endpoints.

use crate::{RapidApiClient, data_array};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use switchyard_core::Params;
use switchyard_error::SwitchyardResult;

const TWEET_SEARCH_URL: &str = "https://twitter154.p.rapidapi.com/search/search";
const USER_DETAILS_URL: &str = "https://twitter154.p.rapidapi.com/user/details";
const USER_TWEETS_URL: &str = "https://twitter154.p.rapidapi.com/user/tweets";
const TRENDS_URL: &str = "https://twitter154.p.rapidapi.com/trends/";
const TWEET_DETAILS_URL: &str = "https://twitter154.p.rapidapi.com/tweet/details";
const USER_SEARCH_URL: &str = "https://twitter154.p.rapidapi.com/search/users";

/// Upper bound for tweets per request.
pub const MAX_TWEETS: u32 = 100;

/// Upper bound for accounts per user search.
pub const MAX_USERS: u32 = 50;

/// WOEID of the whole world.
const WORLDWIDE_WOEID: i64 = 1;

fn default_limit() -> u32 {
    20
}

fn default_section() -> String {
    "top".to_string()
}

fn default_woeid() -> i64 {
    WORLDWIDE_WOEID
}

/// Arguments of [`RapidApiClient::search_tweets`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct TweetSearchRequest {
    /// Search query.
    query: String,
    /// Maximum tweets, capped at [`MAX_TWEETS`].
    #[serde(default = "default_limit")]
    #[builder(default = "default_limit()")]
    limit: u32,
    /// `top` or `latest`.
    #[serde(default = "default_section")]
    #[builder(default = "default_section()")]
    section: String,
    /// Minimum retweet count.
    #[serde(default)]
    #[builder(default)]
    min_retweets: u32,
    /// Minimum like count.
    #[serde(default)]
    #[builder(default)]
    min_likes: u32,
}

/// Arguments of [`RapidApiClient::get_user_profile`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct UserProfileRequest {
    /// Handle without the `@`.
    username: String,
}

/// Arguments of [`RapidApiClient::get_user_tweets`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct UserTweetsRequest {
    /// Handle without the `@`.
    username: String,
    /// Maximum tweets, capped at [`MAX_TWEETS`].
    #[serde(default = "default_limit")]
    #[builder(default = "default_limit()")]
    limit: u32,
    /// Numeric user id, faster than a handle lookup.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    user_id: Option<String>,
    #[serde(default)]
    #[builder(default)]
    include_replies: bool,
    #[serde(default)]
    #[builder(default)]
    include_pinned: bool,
}

/// Arguments of [`RapidApiClient::get_trending_topics`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
pub struct TrendsRequest {
    /// Yahoo! Where On Earth id; 1 is worldwide.
    #[serde(default = "default_woeid")]
    #[builder(default = "default_woeid()")]
    woeid: i64,
}

/// Arguments of [`RapidApiClient::get_tweet_details`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct TweetDetailsRequest {
    /// Tweet id.
    tweet_id: String,
}

/// Arguments of [`RapidApiClient::search_users`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct UserSearchRequest {
    /// Search query.
    query: String,
    /// Maximum accounts, capped at [`MAX_USERS`].
    #[serde(default = "default_limit")]
    #[builder(default = "default_limit()")]
    limit: u32,
}

impl RapidApiClient {
    /// Searches tweets.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_tweets(&self, request: &TweetSearchRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("query", request.query.as_str())
            .with("section", request.section.as_str())
            .with("min_retweets", request.min_retweets)
            .with("min_likes", request.min_likes)
            .with("limit", request.limit.min(MAX_TWEETS));

        let data = self.get(TWEET_SEARCH_URL, params).await?;
        let tweets = data_array(&data, "results");
        Ok(json!({
            "query": request.query,
            "count": tweets.len(),
            "tweets": tweets,
        }))
    }

    /// Fetches a user profile.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_user_profile(&self, request: &UserProfileRequest) -> SwitchyardResult<Value> {
        let params = Params::new().with("username", request.username.as_str());

        let profile = self.get(USER_DETAILS_URL, params).await?;
        Ok(json!({
            "username": request.username,
            "profile": profile,
        }))
    }

    /// Fetches a user's recent tweets.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_user_tweets(&self, request: &UserTweetsRequest) -> SwitchyardResult<Value> {
        let limit = request.limit.min(MAX_TWEETS);
        let params = Params::new()
            .with("username", request.username.as_str())
            .with("limit", limit)
            .with("include_replies", request.include_replies)
            .with("include_pinned", request.include_pinned)
            .with_opt("user_id", request.user_id.clone());

        let data = self.get(USER_TWEETS_URL, params).await?;
        let tweets = data_array(&data, "results");
        Ok(json!({
            "username": request.username,
            "count": tweets.len(),
            "tweets": tweets,
            "params": {
                "limit": limit,
                "user_id": request.user_id,
                "include_replies": request.include_replies,
                "include_pinned": request.include_pinned,
            },
        }))
    }

    /// Fetches trending topics for a location.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_trending_topics(&self, request: &TrendsRequest) -> SwitchyardResult<Value> {
        let params = Params::new().with("woeid", request.woeid);

        let trends = match self.get(TRENDS_URL, params).await? {
            Value::Null => json!([]),
            trends => trends,
        };
        let count = trends.as_array().map(Vec::len);
        Ok(json!({
            "woeid": request.woeid,
            "count": count,
            "trends": trends,
        }))
    }

    /// Fetches one tweet.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_tweet_details(&self, request: &TweetDetailsRequest) -> SwitchyardResult<Value> {
        let params = Params::new().with("tweet_id", request.tweet_id.as_str());

        let tweet = self.get(TWEET_DETAILS_URL, params).await?;
        Ok(json!({
            "tweet_id": request.tweet_id,
            "tweet": tweet,
        }))
    }

    /// Searches accounts.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_users(&self, request: &UserSearchRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("query", request.query.as_str())
            .with("limit", request.limit.min(MAX_USERS));

        let data = self.get(USER_SEARCH_URL, params).await?;
        let users = data_array(&data, "results");
        Ok(json!({
            "query": request.query,
            "count": users.len(),
            "users": users,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_search_defaults() {
        let request: TweetSearchRequest =
            serde_json::from_value(json!({ "query": "rustlang" })).unwrap();
        assert_eq!(request.limit(), &20);
        assert_eq!(request.section(), "top");
        assert_eq!(request.min_likes(), &0);
    }

    #[test]
    fn test_trends_default_to_worldwide() {
        let request: TrendsRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.woeid(), &1);
        assert_eq!(TrendsRequestBuilder::default().build().unwrap().woeid(), &1);
    }
}
