use crate::features::auth::{
    client,
    state::{use_auth, AuthContext},
    types::UserType,
};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{hooks::use_navigate, NavigateOptions};

/// Redirects to the landing page unless the stored session verifies.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    verify_on_mount(auth, navigate.clone());

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            // UX-only guard; real access control must live on the API.
            navigate(paths::LANDING, Default::default());
        }
    });

    view! { {children()} }
}

/// Redirects to the landing page unless the stored session verifies and
/// carries the admin role.
#[component]
pub fn RequireAdmin(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    verify_on_mount(auth, navigate.clone());

    Effect::new(move |_| {
        let is_admin = auth
            .session
            .get()
            .map(|session| session.user_type == UserType::Admin)
            .unwrap_or(false);
        if !is_admin {
            navigate(paths::LANDING, Default::default());
        }
    });

    view! { {children()} }
}

/// One-shot backend verification. An invalid session may already have been
/// cleared by the check, so the context is refreshed before redirecting.
fn verify_on_mount(auth: AuthContext, navigate: impl Fn(&str, NavigateOptions) + 'static) {
    spawn_local(async move {
        if !client::verify_session(&auth.store()).await {
            auth.refresh();
            navigate(paths::LANDING, Default::default());
        }
    });
}
