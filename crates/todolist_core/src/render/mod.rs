//! Rendering collaborators that turn a `StoreView` into user-visible output.
//!
//! # Responsibility
//! - Produce HTML markup and plain-text listings from store state.
//! - Treat task text as untrusted input on every output path.

pub mod html;
pub mod text;
