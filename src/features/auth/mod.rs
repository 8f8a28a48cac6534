//! Auth feature module covering credential login, registration, logout, and
//! session verification. It keeps authentication logic out of the UI and must
//! stay aligned with backend endpoint expectations. This module touches the
//! stored bearer token and must avoid logging token material.
//!
//! Flow Overview: Login posts credentials and persists the returned token
//! together with the username and role. Guarded routes re-verify the token on
//! mount. A rejected token clears the stored session and returns the browser
//! to the landing page.

pub(crate) mod client;
mod guards;
pub(crate) mod session;
pub(crate) mod state;
pub(crate) mod types;

pub(crate) use guards::{RequireAdmin, RequireAuth};
