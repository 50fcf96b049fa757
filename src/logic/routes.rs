//! Route Table Selection
//!
//! The front end is served from more than one hostname. The dedicated score
//! host only ever shows the score view; every other host gets the full map
//! application.
//!
//! # Route Tables
//!
//! | Host      | Path     | View  |
//! |-----------|----------|-------|
//! | `sco.re`  | `/`      | Score |
//! | any other | `/score` | Score |
//! |           | `/:poi`  | Poi   |
//! |           | `/`      | Home  |
//!
//! Routes are matched in table order, first match wins.

use serde::Serialize;
use tracing::debug;

use crate::types::View;

/// Hostname that serves only the score view.
pub const SCORE_HOST: &str = "sco.re";

/// One path pattern and the view it renders.
///
/// A pattern segment starting with `:` captures one non-empty path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

const SCORE_ONLY_ROUTES: &[Route] = &[Route {
    path: "/",
    view: View::Score,
}];

const APP_ROUTES: &[Route] = &[
    Route {
        path: "/score",
        view: View::Score,
    },
    Route {
        path: "/:poi",
        view: View::Poi,
    },
    Route {
        path: "/",
        view: View::Home,
    },
];

/// Result of matching a request path against a route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub route: Route,
    /// Captured `:name` segments, percent-decoded, in pattern order
    pub params: Vec<(String, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Route table for the given hostname.
///
/// Hostnames compare case-insensitively and ignore a `:port` suffix.
pub fn routes_for_host(hostname: &str) -> &'static [Route] {
    let host = hostname.split(':').next().unwrap_or_default();
    if host.eq_ignore_ascii_case(SCORE_HOST) {
        debug!(hostname, "score-only route table");
        SCORE_ONLY_ROUTES
    } else {
        debug!(hostname, "full application route table");
        APP_ROUTES
    }
}

/// First route in `routes` matching `path`.
///
/// A query string or fragment is ignored, as is a trailing slash on
/// non-root paths. Captured segments are percent-decoded; a segment that
/// does not decode to UTF-8 is kept as written.
pub fn match_route(routes: &[Route], path: &str) -> Option<RouteMatch> {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let wanted = segments(path);

    routes.iter().find_map(|route| {
        let pattern = segments(route.path);
        if pattern.len() != wanted.len() {
            return None;
        }

        let mut params = Vec::new();
        for (pat, seg) in pattern.iter().zip(&wanted) {
            match pat.strip_prefix(':') {
                Some(name) => {
                    let value = percent_decode(seg).unwrap_or_else(|| seg.to_string());
                    params.push((name.to_string(), value));
                }
                None if pat == seg => {}
                None => return None,
            }
        }

        Some(RouteMatch {
            route: *route,
            params,
        })
    })
}

/// Percent-decodes one path segment.
fn percent_decode(input: &str) -> Option<String> {
    let mut result = Vec::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch == '%' {
            let hex: String = [chars.next()?, chars.next()?].iter().collect();
            // from_str_radix alone would accept a leading '+'
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            result.push(u8::from_str_radix(&hex, 16).ok()?);
        } else {
            let mut buf = [0u8; 4];
            result.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8(result).ok()
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
