//! Declarative table of the Last.fm methods exposed as tools.
//!
//! Each entry names the tool, the API method, how it is sent and which
//! arguments it takes. Argument conversion lives here too, so every method
//! shares one set of rules for absent, empty and mistyped values.

use crate::CallKind;
use serde_json::Value;
use switchyard_core::Params;
use switchyard_error::InputError;

/// Wire type of a method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ParamType {
    /// Free text.
    Text,
    /// Integer (page, limit, unix timestamps).
    Integer,
    /// A Last.fm 0/1 switch such as `autocorrect`. Accepts a boolean or an
    /// integer and is always sent as `"1"` or `"0"`.
    Switch,
}

/// One parameter of a Last.fm method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Argument name as exposed to tool callers.
    pub arg: &'static str,
    /// Parameter name on the wire.
    pub wire: &'static str,
    /// Wire type.
    pub ty: ParamType,
    /// Whether the call fails without it.
    pub required: bool,
}

impl ParamSpec {
    const fn new(arg: &'static str, ty: ParamType, required: bool) -> Self {
        Self {
            arg,
            wire: arg,
            ty,
            required,
        }
    }

    /// Renames the parameter on the wire.
    const fn on_wire(mut self, wire: &'static str) -> Self {
        self.wire = wire;
        self
    }
}

const fn text(arg: &'static str) -> ParamSpec {
    ParamSpec::new(arg, ParamType::Text, true)
}

const fn opt_text(arg: &'static str) -> ParamSpec {
    ParamSpec::new(arg, ParamType::Text, false)
}

const fn int(arg: &'static str) -> ParamSpec {
    ParamSpec::new(arg, ParamType::Integer, true)
}

const fn opt_int(arg: &'static str) -> ParamSpec {
    ParamSpec::new(arg, ParamType::Integer, false)
}

const fn switch(arg: &'static str) -> ParamSpec {
    ParamSpec::new(arg, ParamType::Switch, false)
}

const SK: ParamSpec = opt_text("sk");
const PAGE: ParamSpec = opt_int("page");
const LIMIT: ParamSpec = opt_int("limit");
const AUTOCORRECT: ParamSpec = switch("autocorrect");
const FROM: ParamSpec = opt_int("from_timestamp").on_wire("from");
const TO: ParamSpec = opt_int("to_timestamp").on_wire("to");

/// A Last.fm method exposed as a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSpec {
    /// Tool name, e.g. `album_get_info`.
    pub tool: &'static str,
    /// API method, e.g. `album.getinfo`.
    pub method: &'static str,
    /// Read or signed write.
    pub kind: CallKind,
    /// Human-readable description for tool discovery.
    pub description: &'static str,
    /// Accepted parameters.
    pub params: &'static [ParamSpec],
}

const fn read(
    tool: &'static str,
    method: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
) -> MethodSpec {
    MethodSpec {
        tool,
        method,
        kind: CallKind::Read,
        description,
        params,
    }
}

const fn write(
    tool: &'static str,
    method: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
) -> MethodSpec {
    MethodSpec {
        tool,
        method,
        kind: CallKind::Write,
        description,
        params,
    }
}

/// Every Last.fm method exposed as a tool.
pub static METHODS: &[MethodSpec] = &[
    // Album
    write(
        "album_add_tags",
        "album.addtags",
        "album.addTags: Tag an album (requires auth)",
        &[text("artist"), text("album"), text("tags"), SK],
    ),
    read(
        "album_get_info",
        "album.getinfo",
        "album.getInfo: Get album metadata & tracks",
        &[
            opt_text("artist"),
            opt_text("album"),
            opt_text("mbid"),
            AUTOCORRECT,
            opt_text("username"),
            opt_text("lang"),
        ],
    ),
    read(
        "album_get_tags",
        "album.gettags",
        "album.getTags: Get a user's tags for an album",
        &[
            opt_text("artist"),
            opt_text("album"),
            opt_text("mbid"),
            AUTOCORRECT,
            opt_text("user"),
        ],
    ),
    read(
        "album_get_top_tags",
        "album.gettoptags",
        "album.getTopTags: Get top tags for an album",
        &[opt_text("artist"), opt_text("album"), opt_text("mbid"), AUTOCORRECT],
    ),
    write(
        "album_remove_tag",
        "album.removetag",
        "album.removeTag: Remove a tag from an album (requires auth)",
        &[text("artist"), text("album"), text("tag"), SK],
    ),
    read(
        "album_search",
        "album.search",
        "album.search: Search for albums",
        &[text("album"), LIMIT, PAGE],
    ),
    // Artist
    write(
        "artist_add_tags",
        "artist.addtags",
        "artist.addTags: Tag an artist (requires auth)",
        &[text("artist"), text("tags"), SK],
    ),
    read(
        "artist_get_correction",
        "artist.getcorrection",
        "artist.getCorrection: Get canonical correction for artist name",
        &[text("artist")],
    ),
    read(
        "artist_get_info",
        "artist.getinfo",
        "artist.getInfo: Get artist info",
        &[
            opt_text("artist"),
            opt_text("mbid"),
            opt_text("lang"),
            AUTOCORRECT,
            opt_text("username"),
        ],
    ),
    read(
        "artist_get_similar",
        "artist.getsimilar",
        "artist.getSimilar: Get similar artists",
        &[opt_text("artist"), opt_text("mbid"), AUTOCORRECT, LIMIT],
    ),
    read(
        "artist_get_tags",
        "artist.gettags",
        "artist.getTags: Get a user's tags for an artist",
        &[opt_text("artist"), opt_text("mbid"), opt_text("user"), AUTOCORRECT],
    ),
    read(
        "artist_get_top_albums",
        "artist.gettopalbums",
        "artist.getTopAlbums: Top albums by artist",
        &[opt_text("artist"), opt_text("mbid"), AUTOCORRECT, PAGE, LIMIT],
    ),
    read(
        "artist_get_top_tags",
        "artist.gettoptags",
        "artist.getTopTags: Top tags for artist",
        &[opt_text("artist"), opt_text("mbid"), AUTOCORRECT],
    ),
    read(
        "artist_get_top_tracks",
        "artist.gettoptracks",
        "artist.getTopTracks: Top tracks by artist",
        &[opt_text("artist"), opt_text("mbid"), AUTOCORRECT, PAGE, LIMIT],
    ),
    write(
        "artist_remove_tag",
        "artist.removetag",
        "artist.removeTag: Remove tag from artist (requires auth)",
        &[text("artist"), text("tag"), SK],
    ),
    read(
        "artist_search",
        "artist.search",
        "artist.search: Search for artists",
        &[text("artist"), LIMIT, PAGE],
    ),
    // Auth
    write(
        "auth_get_mobile_session",
        "auth.getmobilesession",
        "auth.getMobileSession: Exchange username/password for session (mobile)",
        &[text("username"), text("password")],
    ),
    write(
        "auth_get_session",
        "auth.getsession",
        "auth.getSession: Exchange token for session",
        &[text("token")],
    ),
    read(
        "auth_get_token",
        "auth.gettoken",
        "auth.getToken: Get an unauthorized token",
        &[],
    ),
    // Chart
    read(
        "chart_get_top_artists",
        "chart.gettopartists",
        "chart.getTopArtists: Global top artists",
        &[PAGE, LIMIT],
    ),
    read(
        "chart_get_top_tags",
        "chart.gettoptags",
        "chart.getTopTags: Global top tags",
        &[PAGE, LIMIT],
    ),
    read(
        "chart_get_top_tracks",
        "chart.gettoptracks",
        "chart.getTopTracks: Global top tracks",
        &[PAGE, LIMIT],
    ),
    // Geo
    read(
        "geo_get_top_artists",
        "geo.gettopartists",
        "geo.getTopArtists: Top artists by country",
        &[text("country"), PAGE, LIMIT],
    ),
    read(
        "geo_get_top_tracks",
        "geo.gettoptracks",
        "geo.getTopTracks: Top tracks by country/metro",
        &[text("country"), opt_text("location"), PAGE, LIMIT],
    ),
    // Library
    read(
        "library_get_artists",
        "library.getartists",
        "library.getArtists: Artists in a user's library",
        &[text("user"), PAGE, LIMIT],
    ),
    // Tag
    read(
        "tag_get_info",
        "tag.getinfo",
        "tag.getInfo: Tag metadata and wiki",
        &[text("tag"), opt_text("lang")],
    ),
    read(
        "tag_get_similar",
        "tag.getsimilar",
        "tag.getSimilar: Similar tags",
        &[text("tag")],
    ),
    read(
        "tag_get_top_albums",
        "tag.gettopalbums",
        "tag.getTopAlbums: Top albums for a tag",
        &[text("tag"), PAGE, LIMIT],
    ),
    read(
        "tag_get_top_artists",
        "tag.gettopartists",
        "tag.getTopArtists: Top artists for a tag",
        &[text("tag"), PAGE, LIMIT],
    ),
    read(
        "tag_get_top_tags",
        "tag.gettoptags",
        "tag.getTopTags: Global top tags",
        &[],
    ),
    read(
        "tag_get_top_tracks",
        "tag.gettoptracks",
        "tag.getTopTracks: Top tracks for a tag",
        &[text("tag"), PAGE, LIMIT],
    ),
    read(
        "tag_get_weekly_chart_list",
        "tag.getweeklychartlist",
        "tag.getWeeklyChartList: Weekly chart date ranges for a tag",
        &[text("tag")],
    ),
    // Track
    write(
        "track_add_tags",
        "track.addtags",
        "track.addTags: Tag a track (requires auth)",
        &[text("artist"), text("track"), text("tags"), SK],
    ),
    read(
        "track_get_correction",
        "track.getcorrection",
        "track.getCorrection: Canonical correction for track",
        &[text("artist"), text("track")],
    ),
    read(
        "track_get_info",
        "track.getinfo",
        "track.getInfo: Track info",
        &[
            opt_text("artist"),
            opt_text("track"),
            opt_text("mbid"),
            AUTOCORRECT,
            opt_text("username"),
        ],
    ),
    read(
        "track_get_similar",
        "track.getsimilar",
        "track.getSimilar: Similar tracks",
        &[
            opt_text("artist"),
            opt_text("track"),
            opt_text("mbid"),
            AUTOCORRECT,
            LIMIT,
        ],
    ),
    read(
        "track_get_tags",
        "track.gettags",
        "track.getTags: User's tags for a track",
        &[
            opt_text("artist"),
            opt_text("track"),
            opt_text("mbid"),
            opt_text("user"),
            AUTOCORRECT,
        ],
    ),
    read(
        "track_get_top_tags",
        "track.gettoptags",
        "track.getTopTags: Top tags for a track",
        &[opt_text("artist"), opt_text("track"), opt_text("mbid"), AUTOCORRECT],
    ),
    write(
        "track_love",
        "track.love",
        "track.love: Mark a track as loved (requires auth)",
        &[text("artist"), text("track"), SK],
    ),
    write(
        "track_remove_tag",
        "track.removetag",
        "track.removeTag: Remove a tag from a track (requires auth)",
        &[text("artist"), text("track"), text("tag"), SK],
    ),
    write(
        "track_scrobble",
        "track.scrobble",
        "track.scrobble: Add a scrobble (requires auth)",
        &[
            text("artist"),
            text("track"),
            int("timestamp"),
            opt_text("album"),
            opt_text("album_artist").on_wire("albumArtist"),
            opt_int("track_number").on_wire("trackNumber"),
            opt_text("mbid"),
            opt_int("duration"),
            SK,
        ],
    ),
    read(
        "track_search",
        "track.search",
        "track.search: Search for tracks",
        &[text("track"), opt_text("artist"), LIMIT, PAGE],
    ),
    write(
        "track_unlove",
        "track.unlove",
        "track.unlove: Unmark loved (requires auth)",
        &[text("artist"), text("track"), SK],
    ),
    write(
        "track_update_now_playing",
        "track.updatenowplaying",
        "track.updateNowPlaying: Set now playing (requires auth)",
        &[
            text("artist"),
            text("track"),
            opt_text("album"),
            opt_text("album_artist").on_wire("albumArtist"),
            opt_int("track_number").on_wire("trackNumber"),
            opt_int("duration"),
            opt_text("mbid"),
            SK,
        ],
    ),
    // User
    read(
        "user_get_friends",
        "user.getfriends",
        "user.getFriends: Get a user's friends",
        &[
            text("user"),
            switch("recent_tracks").on_wire("recenttracks"),
            PAGE,
            LIMIT,
        ],
    ),
    read(
        "user_get_info",
        "user.getinfo",
        "user.getInfo: Get user profile info",
        &[opt_text("user")],
    ),
    read(
        "user_get_loved_tracks",
        "user.getlovedtracks",
        "user.getLovedTracks: Loved tracks by user",
        &[text("user"), PAGE, LIMIT],
    ),
    read(
        "user_get_personal_tags",
        "user.getpersonaltags",
        "user.getPersonalTags: Personal tags for a type (artist/album/track)",
        &[
            text("user"),
            text("tag"),
            text("tagging_type").on_wire("taggingtype"),
        ],
    ),
    read(
        "user_get_recent_tracks",
        "user.getrecenttracks",
        "user.getRecentTracks: Recent tracks listened by user",
        &[text("user"), PAGE, LIMIT, FROM, TO],
    ),
    read(
        "user_get_top_albums",
        "user.gettopalbums",
        "user.getTopAlbums: User's top albums",
        &[text("user"), opt_text("period"), PAGE, LIMIT],
    ),
    read(
        "user_get_top_artists",
        "user.gettopartists",
        "user.getTopArtists: User's top artists",
        &[text("user"), opt_text("period"), PAGE, LIMIT],
    ),
    read(
        "user_get_top_tags",
        "user.gettoptags",
        "user.getTopTags: User's top tags",
        &[text("user")],
    ),
    read(
        "user_get_top_tracks",
        "user.gettoptracks",
        "user.getTopTracks: User's top tracks",
        &[text("user"), opt_text("period"), PAGE, LIMIT],
    ),
    read(
        "user_get_weekly_album_chart",
        "user.getweeklyalbumchart",
        "user.getWeeklyAlbumChart: Weekly album chart for user",
        &[text("user"), FROM, TO],
    ),
    read(
        "user_get_weekly_artist_chart",
        "user.getweeklyartistchart",
        "user.getWeeklyArtistChart: Weekly artist chart for user",
        &[text("user"), FROM, TO],
    ),
    read(
        "user_get_weekly_chart_list",
        "user.getweeklychartlist",
        "user.getWeeklyChartList: Available weekly chart ranges for user",
        &[text("user")],
    ),
    read(
        "user_get_weekly_track_chart",
        "user.getweeklytrackchart",
        "user.getWeeklyTrackChart: Weekly track chart for user",
        &[text("user"), FROM, TO],
    ),
];

/// Looks up a method by tool name.
pub fn find_method(tool: &str) -> Option<&'static MethodSpec> {
    METHODS.iter().find(|spec| spec.tool == tool)
}

impl MethodSpec {
    /// Converts tool arguments into request parameters.
    ///
    /// Arguments may use either the tool name or the wire name of a
    /// parameter. Absent, `null` and empty-text arguments are skipped;
    /// unknown arguments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when a required argument is missing or an
    /// argument has the wrong type.
    #[track_caller]
    pub fn params_from_args(&self, args: &Value) -> Result<Params, InputError> {
        let mut params = Params::new();

        for spec in self.params {
            let raw = args
                .get(spec.arg)
                .or_else(|| args.get(spec.wire))
                .filter(|v| !v.is_null());

            let Some(raw) = raw else {
                if spec.required {
                    return Err(InputError::missing(spec.arg));
                }
                continue;
            };

            match spec.ty {
                ParamType::Text => {
                    let text = match raw {
                        Value::String(s) => s.trim().to_string(),
                        Value::Number(n) => n.to_string(),
                        _ => return Err(InputError::invalid(spec.arg, "a string")),
                    };
                    if text.is_empty() {
                        if spec.required {
                            return Err(InputError::missing(spec.arg));
                        }
                        continue;
                    }
                    params.insert(spec.wire, text);
                }
                ParamType::Integer => {
                    let number = raw
                        .as_i64()
                        .or_else(|| raw.as_str().and_then(|s| s.trim().parse().ok()))
                        .ok_or_else(|| InputError::invalid(spec.arg, "an integer"))?;
                    params.insert(spec.wire, number);
                }
                ParamType::Switch => {
                    let on = match raw {
                        Value::Bool(b) => *b,
                        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
                        Value::String(s) => match s.trim() {
                            "1" | "true" => true,
                            "0" | "false" => false,
                            _ => return Err(InputError::invalid(spec.arg, "a boolean or 0/1")),
                        },
                        _ => return Err(InputError::invalid(spec.arg, "a boolean or 0/1")),
                    };
                    params.insert(spec.wire, i64::from(on));
                }
            }
        }

        Ok(params)
    }

    /// Parameters the call cannot go without.
    pub fn required(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_family() {
        let count = |prefix: &str| {
            METHODS
                .iter()
                .filter(|m| m.method.starts_with(prefix))
                .count()
        };
        assert_eq!(count("album."), 6);
        assert_eq!(count("artist."), 10);
        assert_eq!(count("auth."), 3);
        assert_eq!(count("chart."), 3);
        assert_eq!(count("geo."), 2);
        assert_eq!(count("library."), 1);
        assert_eq!(count("tag."), 7);
        assert_eq!(count("track."), 12);
        assert_eq!(count("user."), 14);
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names: HashSet<_> = METHODS.iter().map(|m| m.tool).collect();
        assert_eq!(names.len(), METHODS.len());
    }

    #[test]
    fn test_write_methods_accept_session_override() {
        for spec in METHODS
            .iter()
            .filter(|m| m.kind == CallKind::Write && !m.method.starts_with("auth."))
        {
            assert!(
                spec.params.iter().any(|p| p.wire == "sk"),
                "{} should accept sk",
                spec.tool
            );
        }
    }

    #[test]
    fn test_params_from_args_renames_to_wire() {
        let spec = find_method("track_scrobble").unwrap();
        let params = spec
            .params_from_args(&json!({
                "artist": "Cher",
                "track": "Believe",
                "timestamp": 1700000000,
                "album_artist": "Cher",
                "track_number": 1
            }))
            .unwrap();

        let wire = params.to_wire();
        assert_eq!(wire.get("albumArtist"), Some("Cher"));
        assert_eq!(wire.get("trackNumber"), Some("1"));
        assert_eq!(wire.get("timestamp"), Some("1700000000"));
        assert!(!wire.contains("album_artist"));
    }

    #[test]
    fn test_params_from_args_requires_mandatory_args() {
        let spec = find_method("track_love").unwrap();
        let err = spec
            .params_from_args(&json!({ "artist": "Cher" }))
            .unwrap_err();
        assert!(err.message.contains("track"));

        let err = spec
            .params_from_args(&json!({ "artist": "Cher", "track": "  " }))
            .unwrap_err();
        assert!(err.message.contains("track"));
    }

    #[test]
    fn test_optional_empty_text_is_skipped() {
        let spec = find_method("album_get_info").unwrap();
        let params = spec
            .params_from_args(&json!({ "artist": "Cher", "album": "", "mbid": null }))
            .unwrap();
        assert_eq!(params.names(), vec!["artist"]);
    }

    #[test]
    fn test_switch_canonical_representation() {
        let spec = find_method("artist_get_info").unwrap();

        for (input, expected) in [
            (json!(true), "1"),
            (json!(false), "0"),
            (json!(1), "1"),
            (json!(0), "0"),
            (json!("true"), "1"),
        ] {
            let params = spec
                .params_from_args(&json!({ "artist": "Cher", "autocorrect": input }))
                .unwrap();
            assert_eq!(params.to_wire().get("autocorrect"), Some(expected));
        }

        assert!(
            spec.params_from_args(&json!({ "autocorrect": "maybe" }))
                .is_err()
        );
    }

    #[test]
    fn test_integer_accepts_numeric_strings() {
        let spec = find_method("chart_get_top_artists").unwrap();
        let params = spec
            .params_from_args(&json!({ "page": "2", "limit": 50 }))
            .unwrap();
        let wire = params.to_wire();
        assert_eq!(wire.get("page"), Some("2"));
        assert_eq!(wire.get("limit"), Some("50"));

        assert!(spec.params_from_args(&json!({ "page": "two" })).is_err());
    }

    #[test]
    fn test_wire_name_is_accepted_as_argument() {
        let spec = find_method("user_get_recent_tracks").unwrap();
        let params = spec
            .params_from_args(&json!({ "user": "rj", "from": 100, "to_timestamp": 200 }))
            .unwrap();
        let wire = params.to_wire();
        assert_eq!(wire.get("from"), Some("100"));
        assert_eq!(wire.get("to"), Some("200"));
    }
}
