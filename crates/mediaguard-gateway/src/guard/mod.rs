//! Request guard: normalizes the media path, resolves the caller, and asks
//! the policy registry before the wrapped handler runs.
//!
//! Denials are answered exactly like a missing file so restricted paths
//! cannot be told apart from absent ones.

pub mod middleware;
pub mod path;

pub use middleware::{error_response, not_found, secure_media_path};
pub use path::media_path;
