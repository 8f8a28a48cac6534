//! Registration form. Empty fields are rejected locally before any network
//! call; otherwise the server's message is surfaced whether the attempt was
//! accepted or not. An accepted registration clears the form and returns to
//! the sign-in page after a short pause.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{
    client::{self, Registration},
    types::Credentials,
};
use crate::routes::paths;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Pause before returning to the sign-in page after a successful
/// registration, long enough to read the confirmation.
const REDIRECT_DELAY_MS: u32 = 1_500;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move { client::register(&credentials).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(Registration::Accepted { message }) => {
                    set_notice.set(Some(message));
                    set_username.set(String::new());
                    set_password.set(String::new());
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate(paths::LANDING, Default::default());
                    });
                }
                Ok(Registration::Rejected { message }) => {
                    set_error.set(Some(message));
                }
                Err(err) => {
                    if err.is_transport() {
                        log::error!("registration request failed: {err}");
                    }
                    set_error.set(Some(err.user_message()));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_notice.set(None);

        let username_value = username.get_untracked();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        register_action.dispatch(Credentials {
            username: username_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create account"
                </h1>
                <div class="mb-5">
                    <label class=Theme::LABEL for="register-username">
                        "Username"
                    </label>
                    <input
                        id="register-username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        prop:value=username
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="register-password">
                        "Password"
                    </label>
                    <input
                        id="register-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        prop:value=password
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Create account"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    notice
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Success message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
                <div class="mt-6">
                    <A href=(paths::LANDING) {..} class=Theme::FORM_LINK>
                        "Already have an account? Sign in"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}
