//! Client-side core of the StageHub internship-management portal.
//!
//! Role-specific dashboards (student, employer, placement staff, program
//! manager) are rendered by a host UI; everything they compute or dispatch
//! lives here: per-domain state stores, the typed HTTP service layer with
//! bearer-token injection, durable client-side storage and the pure
//! presentation utilities (offer filtering, viewport variant selection).
//!
//! Control flow is always view → store action → service call → HTTP response
//! → store state patch. Stores own their slice of state exclusively;
//! cross-store access is read-only.

pub mod app;
pub mod core;
pub mod features;
pub mod shared;

pub use app::{init_tracing, AppContext};
pub use crate::core::error::{AppError, ErrorKind, Result, StoreError};
