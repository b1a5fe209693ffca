use log::debug;

use crate::session::DynSessionStore;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
    Signup,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Anonymous,
}

/// Where a navigation attempt ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allow(Route),
    Redirect(Route),
}

impl Navigation {
    pub fn target(&self) -> Route {
        match self {
            Navigation::Allow(route) | Navigation::Redirect(route) => *route,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Dashboard,
    Logout,
    Login,
    Signup,
}

///
/// Gates protected routes on token presence alone. The token is never
/// inspected, so an expired one still reads as authenticated.
///
pub struct RouteGuard {
    session: DynSessionStore,
}

impl RouteGuard {
    pub fn new(session: DynSessionStore) -> Self {
        RouteGuard { session }
    }

    pub fn auth_state(&self) -> AuthState {
        match self.session.get_token() {
            Some(_) => AuthState::Authenticated,
            None => AuthState::Anonymous,
        }
    }

    pub fn evaluate(&self, route: Route) -> Navigation {
        if route.is_protected() && self.auth_state() == AuthState::Anonymous {
            debug!("Anonymous navigation to {} redirected to login", route.path());
            return Navigation::Redirect(Route::Login);
        }
        Navigation::Allow(route)
    }

    /// Links offered in the navigation bar for the current state
    pub fn nav_links(&self) -> Vec<NavLink> {
        match self.auth_state() {
            AuthState::Authenticated => vec![NavLink::Dashboard, NavLink::Logout],
            AuthState::Anonymous => vec![NavLink::Login, NavLink::Signup],
        }
    }
}
