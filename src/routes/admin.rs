//! Admin page with platform stats and the registered-user list. The guard
//! checks the stored role; the backend still rejects non-admin tokens on
//! every call.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{client::Authorized, state::use_auth, RequireAdmin};
use crate::features::dashboard::client;
use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let overview =
        LocalResource::new(
            move || async move { client::fetch_admin_dashboard(&auth.store()).await },
        );
    let users = LocalResource::new(move || async move { client::list_users(&auth.store()).await });

    view! {
        <AppShell>
            <RequireAdmin children=ToChildren::to_children(move || view! {
                <div class="max-w-3xl mx-auto space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Admin"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Platform overview and registered users."
                        </p>
                    </div>

                    <div class=Theme::CARD>
                        <Suspense fallback=move || view! { <Spinner /> }>
                            {move || match overview.get() {
                                Some(Ok(Authorized::Granted(data))) => {
                                    view! {
                                        <div class="space-y-2">
                                            <p class="text-lg text-gray-900 dark:text-white">
                                                {data.message.clone()}
                                            </p>
                                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                                {format!(
                                                    "{} registered users · signed in as {}",
                                                    data.user_count,
                                                    data.admin,
                                                )}
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

                    <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    <th
                                        scope="col"
                                        class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider"
                                    >
                                        "Username"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                <Suspense fallback=move || view! {
                                    <tr>
                                        <td class="px-6 py-12 text-center">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }>
                                    {move || match users.get() {
                                        Some(Ok(Authorized::Granted(list))) if list.is_empty() => {
                                            view! {
                                                <tr>
                                                    <td class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                        "No users found."
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                        Some(Ok(Authorized::Granted(list))) => {
                                            view! {
                                                <For
                                                    each=move || list.clone()
                                                    key=|username| username.clone()
                                                    children=|username| {
                                                        view! {
                                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                                    {username}
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                />
                                            }
                                                .into_any()
                                        }
                                        Some(Ok(Authorized::SessionExpired)) => {
                                            view! { <tr><td></td></tr> }.into_any()
                                        }
                                        Some(Err(err)) => {
                                            view! {
                                                <tr>
                                                    <td class="px-6 py-4">
                                                        <Alert kind=AlertKind::Error message=err.user_message() />
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        }
                                        None => view! {
                                            <tr>
                                                <td class="px-6 py-12 text-center">
                                                    <Spinner />
                                                </td>
                                            </tr>
                                        }
                                            .into_any(),
                                    }}
                                </Suspense>
                            </tbody>
                        </table>
                    </div>
                </div>
            }) />
        </AppShell>
    }
}
