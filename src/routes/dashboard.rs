//! Signed-in user's dashboard. Verification runs in the guard; the greeting
//! itself comes from the backend so an expired token surfaces here too.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{client::Authorized, state::use_auth, RequireAuth};
use crate::features::dashboard::client;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let flash = auth.take_flash();
    let greeting =
        LocalResource::new(move || async move { client::fetch_user_dashboard(&auth.store()).await });

    view! {
        <AppShell>
            <RequireAuth children=ToChildren::to_children(move || {
                let flash = flash.clone();
                view! {
                    <div class="max-w-2xl mx-auto space-y-6">
                        {flash
                            .map(|message| {
                                view! { <Alert kind=AlertKind::Success message=message /> }
                            })}
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Dashboard"
                        </h1>
                        <div class=Theme::CARD>
                            <Suspense fallback=move || view! { <Spinner /> }>
                                {move || match greeting.get() {
                                    Some(Ok(Authorized::Granted(data))) => {
                                        view! {
                                            <div class="space-y-2">
                                                <p class="text-lg text-gray-900 dark:text-white">
                                                    {data.message.clone()}
                                                </p>
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    "Signed in as " {data.username.clone()}
                                                </p>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    Some(Ok(Authorized::SessionExpired)) => {
                                        view! { <div></div> }.into_any()
                                    }
                                    Some(Err(err)) => {
                                        view! {
                                            <Alert kind=AlertKind::Error message=err.user_message() />
                                        }
                                            .into_any()
                                    }
                                    None => view! { <Spinner /> }.into_any(),
                                }}
                            </Suspense>
                        </div>
                    </div>
                }
            }) />
        </AppShell>
    }
}
