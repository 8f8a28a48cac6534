//! Landing page with the user sign-in form. Credentials are not validated
//! locally; the backend answers with a message either way. A successful login
//! persists the session and moves on to the dashboard, carrying the server's
//! message along as a one-shot flash.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, state::use_auth, types::Credentials};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let flash = auth.take_flash();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move { client::login(&credentials).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(success) => {
                    auth.set_session(success.session);
                    auth.set_flash(success.message);
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(err) => {
                    if err.is_transport() {
                        log::error!("login request failed: {err}");
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
                    "Sign in"
                </h1>
                {flash
                    .map(|message| {
                        view! {
                            <div class="mb-5">
                                <Alert kind=AlertKind::Info message=message />
                            </div>
                        }
                    })}
                <div class="mb-5">
                    <label class=Theme::LABEL for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
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
                <div class="mt-6 flex justify-between">
                    <A href=(paths::REGISTER) {..} class=Theme::FORM_LINK>
                        "Create an account"
                    </A>
                    <A href=(paths::ADMIN_LOGIN) {..} class=Theme::FORM_LINK>
                        "Administrator sign-in"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}
