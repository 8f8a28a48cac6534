//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! ### Login
//!
//! 1. The form POSTs credentials to `/login` (or `/admin-login` for
//!    operators) and receives a bearer token on success.
//! 2. The token, username, and role are persisted together in client-side
//!    storage and attached as `Authorization: Bearer` to later requests.
//!
//! ### Session Lifecycle
//!
//! Guarded routes re-check the stored token against `/verify-session` on
//! mount. A 401 on any authenticated call wipes the stored session and sends
//! the browser back to the landing page; logout does the same after a
//! best-effort `/logout` call.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not log token
//! material, and callers must keep it out of messages they surface.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod theme;

pub(crate) use api::get_json;
pub(crate) use errors::AppError;
