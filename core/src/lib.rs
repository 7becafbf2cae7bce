//! Containers for safe value handling.
//!
//! - [`Optional`] models a value that may be absent, collapsing every kind of absence into one canonical state.
//! - [`Outcome`] models a fallible computation that either succeeds with a value or fails with a typed payload.
//!
//! Both are immutable after construction and compose through combinators that return new instances. They can be nested
//! in each other and flattened back with `flat_map`, `flatten` and `transpose`.

pub mod optional;
pub mod outcome;
pub mod thrown;
pub mod app;

pub use optional::Optional;
pub use outcome::Outcome;
pub use thrown::Thrown;
