//! Auth session state and context for the frontend. The provider hydrates
//! state from client-side storage on mount and exposes derived signals for
//! guards and routes. The context also carries a one-shot flash message so a
//! page can leave a note for the page it navigates to (login success text,
//! logout confirmation).

use crate::features::auth::session::{Session, SessionStore};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    store: SessionStore,
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
    flash: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(
        store: SessionStore,
        session: RwSignal<Option<Session>>,
        flash: RwSignal<Option<String>>,
    ) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            store,
            session,
            is_authenticated,
            flash,
        }
    }

    /// The storage service backing this context.
    pub fn store(&self) -> SessionStore {
        self.store
    }

    /// Persists a new session and updates the in-memory state.
    pub fn set_session(&self, session: Session) {
        self.store.save(&session);
        self.session.set(Some(session));
    }

    /// Clears both the persisted and the in-memory session.
    pub fn clear_session(&self) {
        self.store.clear();
        self.session.set(None);
    }

    /// Re-reads the persisted session, picking up changes made outside the
    /// context (verification clearing, expired-token wipes).
    pub fn refresh(&self) {
        self.session.set(self.store.load());
    }

    /// Queues a one-shot message for the next page to display.
    pub fn set_flash(&self, message: String) {
        self.flash.set(Some(message));
    }

    /// Takes the pending one-shot message, leaving none behind.
    pub fn take_flash(&self) -> Option<String> {
        let message = self.flash.get_untracked();
        if message.is_some() {
            self.flash.set(None);
        }
        message
    }
}

/// Provides auth context hydrated from client-side storage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = SessionStore::new();
    let session = RwSignal::new(store.load());
    let flash = RwSignal::new(None);
    let auth = AuthContext::new(store, session, flash);
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        AuthContext::new(SessionStore::new(), RwSignal::new(None), RwSignal::new(None))
    })
}
