//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup and the mobile menu toggle so routes can focus
//! on content. Navigation remains client-side; the backend enforces real
//! access control.

use crate::app_lib::build_info;
use crate::features::auth::{client, state::use_auth, types::UserType};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_location, hooks::use_navigate};

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_landing = move || location.pathname.get() == paths::LANDING;

    let navigate = use_navigate();
    let on_sign_out = move |_| {
        set_menu_open.set(false);
        let navigate = navigate.clone();
        spawn_local(async move {
            client::logout(&auth.store()).await;
            auth.clear_session();
            auth.set_flash("Logged out successfully".to_string());
            navigate(paths::LANDING, Default::default());
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=(paths::LANDING)
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="material-symbols-outlined text-blue-700 dark:text-blue-500">
                            "door_front"
                        </span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Foyer"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        data-collapse-toggle="navbar-default"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700 md:items-center">
                            {move || {
                                auth.session.get().map(|session| {
                                    let href = session.user_type.home_path();
                                    let label = match session.user_type {
                                        UserType::User => "Dashboard",
                                        UserType::Admin => "Admin",
                                    };
                                    view! {
                                        <li>
                                            <A
                                                href=(href)
                                                {..}
                                                class=NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {label}
                                            </A>
                                        </li>
                                    }
                                })
                            }}
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <Show
                                                when=on_landing
                                                fallback=move || {
                                                    view! {
                                                        <A
                                                            href=(paths::LANDING)
                                                            {..}
                                                            class=NAV_LINK
                                                            on:click=move |_| set_menu_open.set(false)
                                                        >
                                                            "Sign In"
                                                        </A>
                                                    }
                                                }
                                            >
                                                <A
                                                    href=(paths::REGISTER)
                                                    {..}
                                                    class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Register"
                                                </A>
                                            </Show>
                                        }
                                    }
                                >
                                    <button
                                        type="button"
                                        class=NAV_LINK
                                        on:click=on_sign_out.clone()
                                    >
                                        "Sign Out"
                                    </button>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-500">
                <span>
                    {format!("Foyer {} ({})", build_info::version(), build_info::git_commit_hash())}
                </span>
                " · "
                <A href=(paths::HEALTH) {..} class="hover:text-blue-600 dark:hover:text-blue-400">
                    "status"
                </A>
            </footer>
        </div>
    }
}
