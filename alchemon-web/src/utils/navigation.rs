//! Router adapter for the core [`Navigator`] trait

use lib_core::routing::{Navigator, Route};
use leptos_router::NavigateOptions;

/// Navigates with the function returned by `use_navigate()`.
///
/// Redirects replace the history entry so back-navigation does not return to
/// the page that redirected.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    fn navigate(&self, route: Route) {
        log::debug!("navigating to {}", route.path());
        (self.navigate)(
            route.path(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }
}
