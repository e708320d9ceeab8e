use session::{routes, Role};

use crate::Route;

mod layout;
pub use layout::AppLayout;

mod protected;
pub use protected::ProtectedRoute;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod student_dashboard;
pub use student_dashboard::StudentDashboard;

mod admin_dashboard;
pub use admin_dashboard::{AdminDashboard, AdminUsers};

mod not_found;
pub use not_found::NotFound;

/// Typed landing destination for a role, backed by the session crate's
/// resolver so the route table and the resolver cannot drift apart.
pub(crate) fn landing_target(role: Option<Role>) -> Route {
    routes::landing_route(role)
        .parse()
        .unwrap_or(Route::Login {})
}
