//! A dead simple regex-based HTTP request router with pluggable response
//! makers.
//!
//! ```
//! use lath::{Params, Router};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut router = Router::new();
//!
//! router.register_route("/post/{post_id}/comment/{comment_id}", "GET", |params: Params| {
//! 	format!("post {} comment {}", params["post_id"], params["comment_id"])
//! })?;
//!
//! let result = router.dispatch("GET", "/post/123/comment/456", Params::new());
//! assert!(result.handled);
//! assert_eq!(result.data.unwrap(), "post 123 comment 456");
//! # Ok(())
//! # }
//! ```
//!
//! Path segments written as `{name}` match one or more non-`/` characters and
//! are handed to the handler by name, merged over any ambient (query string or
//! body) parameters passed to `dispatch`. Routes are tried in registration
//! order and only the first match runs.
//!
//! Handler return values are opaque to the router; the [`response`] module
//! turns them into transport-ready JSON or HTML bodies.

/// Turns a `{name}`-style route pattern into an anchored path matcher.
pub mod pattern;

/// Renders handler output into JSON or HTML bodies and writes them out.
pub mod response;

/// Various types for defining routes and route handlers.
pub mod route;

/// Contains the core router: route registration and dispatch.
pub mod router;

pub use pattern::*;
pub use response::*;
pub use route::*;
pub use router::*;
