//! # Routing
//!
//! Screens redirect through a [`Navigator`] instead of talking to the browser
//! router directly, and read navigation parameters from [`QueryParams`].

use std::collections::BTreeMap;

/// Query key carrying the navigation event
pub const EVENT_PARAM: &str = "event";

/// Query value set by the mint flow when it redirects to the dashboard
pub const MINT_EVENT: &str = "mint";

/// Application screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Connect,
    Dashboard,
}

impl Route {
    pub fn all() -> [Route; 3] {
        [Route::Home, Route::Connect, Route::Dashboard]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Connect => "/connect",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Route for a path, ignoring any query string and trailing slash.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split('?').next().unwrap_or(path);
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Route::all().into_iter().find(|route| route.path() == path)
    }
}

/// Navigation collaborator.
///
/// Navigation replaces the current history entry, so a redirect cannot be
/// undone with the back button.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Decoded query-string parameters of the current navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Parse `a=1&b=2` (a leading `?` is accepted). Keys without `=` map to an
    /// empty value; on duplicate keys the first occurrence wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = BTreeMap::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params
                .entry(decode(key))
                .or_insert_with(|| decode(value));
        }
        Self(params)
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// True when the navigation came from a successful mint (`event=mint`).
    pub fn is_mint_redirect(&self) -> bool {
        self.get(EVENT_PARAM) == Some(MINT_EVENT)
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn test_route_parse_ignores_query_and_slash() {
        assert_eq!(Route::parse("/dashboard?event=mint"), Some(Route::Dashboard));
        assert_eq!(Route::parse("/connect/"), Some(Route::Connect));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/mint"), None);
    }

    #[test]
    fn test_query_params_parse() {
        let params = QueryParams::parse("?event=mint&name=Pyro%20claw&flag&event=other");

        assert_eq!(params.get("event"), Some("mint"));
        assert_eq!(params.get("name"), Some("Pyro claw"));
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_mint_redirect_flag() {
        assert!(QueryParams::parse("event=mint").is_mint_redirect());
        assert!(!QueryParams::parse("event=other").is_mint_redirect());
        assert!(!QueryParams::parse("event=MINT").is_mint_redirect());
        assert!(!QueryParams::parse("").is_mint_redirect());
        assert!(QueryParams::from_pairs([("event", "mint")]).is_mint_redirect());
    }
}
