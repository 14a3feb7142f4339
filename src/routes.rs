// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application routes and the authorization guard.
//!
//! The guard is stateless: it looks at the session every time a route is
//! entered or drawn and either allows it or names the route to show instead.

use crate::model::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    /// Sign-in page, the entry point.
    Login,
    /// Register and lookup tabs.
    Tracks,
    /// Detail view for one ISRC code.
    TrackDetail(String),
}

impl Route {
    pub(crate) fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Access {
    Allow,
    RedirectTo(Route),
}

/// Decides whether `route` may be shown for `session`.
pub(crate) fn authorize(session: &Session, route: &Route) -> Access {
    if route.is_protected() && !session.is_authenticated {
        Access::RedirectTo(Route::Login)
    } else {
        Access::Allow
    }
}

/// The route that will actually be shown when `route` is requested.
pub(crate) fn resolve(session: &Session, route: Route) -> Route {
    match authorize(session, &route) {
        Access::Allow => route,
        Access::RedirectTo(target) => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(is_authenticated: bool) -> Session {
        Session {
            username: "alice".to_string(),
            password: "secret".to_string(),
            is_authenticated,
        }
    }

    #[test]
    fn protected_routes_require_authentication() {
        let routes = [Route::Tracks, Route::TrackDetail("USRC17607839".to_string())];

        for route in routes {
            assert_eq!(authorize(&session(true), &route), Access::Allow);
            assert_eq!(authorize(&session(false), &route), Access::RedirectTo(Route::Login));
        }
    }

    #[test]
    fn login_is_always_allowed() {
        assert_eq!(authorize(&session(false), &Route::Login), Access::Allow);
        assert_eq!(authorize(&session(true), &Route::Login), Access::Allow);
    }

    #[test]
    fn credentials_alone_do_not_authorize() {
        // Typed-in credentials that were never accepted
        let unverified = session(false);
        assert_eq!(
            resolve(&unverified, Route::Tracks),
            Route::Login
        );
        assert_eq!(resolve(&session(true), Route::Tracks), Route::Tracks);
    }
}
