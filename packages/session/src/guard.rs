//! Route-access guard.
//!
//! A pure function of the current session and a route's declared role set.
//! The routing layer interprets the decision; nothing here renders or
//! navigates, which keeps the logic testable without mounting a view.

use crate::role::Role;
use crate::routes;
use crate::session::SessionState;

/// Outcome of evaluating a protected route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Restoration is still in flight; show a placeholder and never redirect,
    /// so a page refresh cannot flash-redirect to login.
    Suspend,
    /// No authenticated session.
    RedirectToLogin,
    /// Authenticated, but the role is not allowed on this route.
    RedirectToFallback,
    /// The session satisfies the route's requirements.
    Render,
}

impl RouteDecision {
    /// Redirect target, if this decision navigates away.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            RouteDecision::RedirectToLogin => Some(routes::LOGIN),
            RouteDecision::RedirectToFallback => Some(routes::HOME),
            RouteDecision::Suspend | RouteDecision::Render => None,
        }
    }
}

/// Decide whether a route guarded by `allowed_roles` may render.
///
/// Rules are evaluated in order, first match wins:
/// 1. session still loading → [`RouteDecision::Suspend`]
/// 2. not authenticated → [`RouteDecision::RedirectToLogin`]
/// 3. non-empty `allowed_roles` not containing the session role →
///    [`RouteDecision::RedirectToFallback`]
/// 4. otherwise → [`RouteDecision::Render`]
///
/// An empty `allowed_roles` admits any authenticated user.
pub fn route_decision(state: &SessionState, allowed_roles: &[Role]) -> RouteDecision {
    if state.loading {
        return RouteDecision::Suspend;
    }
    if !state.is_authenticated() {
        return RouteDecision::RedirectToLogin;
    }
    match state.role() {
        Some(role) if allowed_roles.is_empty() || allowed_roles.contains(&role) => {
            RouteDecision::Render
        }
        _ => RouteDecision::RedirectToFallback,
    }
}
