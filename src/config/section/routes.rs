//! `[routes]` configuration: which site sections are enabled.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! "/" = true
//! "/about" = true
//! "/blog" = true
//! "/work" = false
//! ```
//!
//! Keys are checked against [`Route`] when the file is parsed, so a typo
//! such as `"/blgo"` fails loading instead of silently hiding a section.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Known site routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Route {
    Home,
    About,
    Work,
    Blog,
    Gallery,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Work,
        Route::Blog,
        Route::Gallery,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Work => "/work",
            Route::Blog => "/blog",
            Route::Gallery => "/gallery",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Route::ALL.iter().map(|r| r.as_str()).collect();
                format!("unknown route `{s}`, expected one of: {}", known.join(", "))
            })
    }
}

/// Enabled flag per route. Routes missing from the table are disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, bool>",
    into = "BTreeMap<String, bool>"
)]
pub struct RouteTable(BTreeMap<Route, bool>);

impl RouteTable {
    #[inline]
    pub fn is_enabled(&self, route: Route) -> bool {
        self.0.get(&route).copied().unwrap_or(false)
    }

    /// Enabled routes in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Route> + '_ {
        self.0
            .iter()
            .filter_map(|(route, enabled)| enabled.then_some(*route))
    }
}

impl FromIterator<(Route, bool)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (Route, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<BTreeMap<String, bool>> for RouteTable {
    type Error = String;

    fn try_from(raw: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(key, enabled)| key.parse::<Route>().map(|route| (route, enabled)))
            .collect()
    }
}

impl From<RouteTable> for BTreeMap<String, bool> {
    fn from(table: RouteTable) -> Self {
        table
            .0
            .into_iter()
            .map(|(route, enabled)| (route.as_str().to_owned(), enabled))
            .collect()
    }
}
