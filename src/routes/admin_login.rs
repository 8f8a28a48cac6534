//! Administrator sign-in form. Same exchange as the user form against the
//! admin endpoint; a success navigates straight to the admin page without
//! surfacing the server's message.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, state::use_auth, types::Credentials};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move { client::admin_login(&credentials).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    auth.set_session(session);
                    navigate(paths::ADMIN, Default::default());
                }
                Err(err) => {
                    if err.is_transport() {
                        log::error!("admin login request failed: {err}");
                    }
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        login_action.dispatch(Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Administrator sign-in"
                </h1>
                <div class="mb-5">
                    <label class=Theme::LABEL for="admin-username">
                        "Username"
                    </label>
                    <input
                        id="admin-username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="admin-password">
                        "Password"
                    </label>
                    <input
                        id="admin-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                </div>
                            }
                        })
                }}
                <div class="mt-6">
                    <A href=(paths::LANDING) {..} class=Theme::FORM_LINK>
                        "Back to user sign-in"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}
