mod admin;
mod admin_login;
mod dashboard;
mod health;
mod login;
mod not_found;
mod register;

pub(crate) use admin::AdminPage;
pub(crate) use admin_login::AdminLoginPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use health::HealthPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Relative navigation targets, centralized so links and redirects stay in
/// sync.
pub(crate) mod paths {
    pub const LANDING: &str = "/";
    pub const ADMIN_LOGIN: &str = "/admin-login";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
    pub const ADMIN: &str = "/admin";
    pub const HEALTH: &str = "/health";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/admin-login") view=AdminLoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/admin") view=AdminPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
