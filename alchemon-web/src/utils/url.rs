//! Query parameter helpers

use leptos_router::params::ParamsMap;
use lib_core::routing::{QueryParams, EVENT_PARAM};

/// The dashboard's view of the router query (`?event=...`).
pub fn dashboard_query(params: &ParamsMap) -> QueryParams {
    let event = params.get(EVENT_PARAM);
    QueryParams::from_pairs(event.as_deref().map(|value| (EVENT_PARAM, value)))
}
