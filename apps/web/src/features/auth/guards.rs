//! Route-transition access control. One guard wraps the whole route tree
//! and evaluates the destination's access rules against the session before
//! the matched page renders. This is a UX guard; the API still enforces
//! authorization on every request.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::features::auth::session::use_session;
use crate::features::auth::types::Session;
use crate::routes::registry::{RouteAccess, RouteId, route_table};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Outcome of evaluating a route's access rules against a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Decides whether the session may enter a route. Public routes are always
/// reachable, even with a live session. Protected routes need a session,
/// and when the route lists required roles, holding any one of them is
/// enough. Routes with no classification fall through open.
pub fn check_access(access: &RouteAccess, session: &Session) -> NavDecision {
    if access.is_public {
        return NavDecision::Allow;
    }

    if access.requires_auth {
        if !session.is_authenticated() {
            return NavDecision::RedirectToLogin;
        }
        if !access.required_roles.is_empty()
            && !session.has_any_role(access.required_roles.iter().copied())
        {
            return NavDecision::RedirectToUnauthorized;
        }
    }

    NavDecision::Allow
}

#[component]
pub fn NavigationGuard(children: ChildrenFn) -> impl IntoView {
    let store = use_session();
    let session = store.session();
    let location = use_location();

    let decision = Signal::derive(move || {
        let path = location.pathname.get();
        let access = route_table().access(RouteId::from_path(&path));
        session.with(|session| check_access(&access, session))
    });

    let navigate = use_navigate();
    Effect::new(move |_| match decision.get() {
        NavDecision::Allow => {}
        NavDecision::RedirectToLogin => {
            log::debug!("Redirecting unauthenticated visitor to login");
            navigate(RouteId::Login.path(), Default::default());
        }
        NavDecision::RedirectToUnauthorized => {
            log::debug!("Redirecting visitor without the required role");
            navigate(RouteId::Unauthorized.path(), Default::default());
        }
    });

    // A 401 anywhere tears the session down and raises the flag; land the
    // user on the login page no matter where they were.
    let expired = store.session_expired;
    let navigate_on_expiry = use_navigate();
    Effect::new(move |_| {
        if expired.get() {
            expired.set(false);
            navigate_on_expiry(RouteId::Login.path(), Default::default());
        }
    });

    view! {
        <Show when=move || decision.get() == NavDecision::Allow>
            {children()}
        </Show>
    }
}
