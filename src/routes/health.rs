//! Backend status panel plus the web bundle's own build information. The
//! endpoint is public, so the page works signed out.

use crate::app_lib::{build_info, get_json, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
struct HealthResponse {
    status: String,
    database: String,
    #[serde(default)]
    message: String,
}

#[component]
pub fn HealthPage() -> impl IntoView {
    let health =
        LocalResource::new(move || async move { get_json::<HealthResponse>("/health").await });

    view! {
        <AppShell>
            <div class="max-w-md mx-auto space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Status"
                </h1>
                <div class=Theme::CARD>
                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match health.get() {
                            Some(Ok(data)) => {
                                view! {
                                    <dl class="space-y-3 text-sm">
                                        <div class="flex justify-between">
                                            <dt class="text-gray-500 dark:text-gray-400">"Backend"</dt>
                                            <dd class="font-medium text-gray-900 dark:text-white">
                                                {data.status.clone()}
                                            </dd>
                                        </div>
                                        <div class="flex justify-between">
                                            <dt class="text-gray-500 dark:text-gray-400">"Database"</dt>
                                            <dd class="font-medium text-gray-900 dark:text-white">
                                                {data.database.clone()}
                                            </dd>
                                        </div>
                                        <p class="text-gray-500 dark:text-gray-400">
                                            {data.message.clone()}
                                        </p>
                                    </dl>
                                }
                                    .into_any()
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
                <div class=Theme::CARD>
                    <dl class="space-y-3 text-sm">
                        <div class="flex justify-between">
                            <dt class="text-gray-500 dark:text-gray-400">"Web version"</dt>
                            <dd class="font-medium text-gray-900 dark:text-white">
                                {build_info::version()}
                            </dd>
                        </div>
                        <div class="flex justify-between">
                            <dt class="text-gray-500 dark:text-gray-400">"Commit"</dt>
                            <dd class="font-mono text-xs text-gray-900 dark:text-white">
                                {build_info::git_commit_hash()}
                            </dd>
                        </div>
                    </dl>
                </div>
            </div>
        </AppShell>
    }
}
