//! Ownership-kind protocol for the deepvec container family.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! capability triad every element type must supply — deep copy, deep free,
//! nullify — and the three-way classification ([`Kind`]) that tells a
//! container how much of that triad is real work:
//!
//! - **Scalar-small / scalar-large:** trivial types. Copy is bitwise, free
//!   and nullify are no-ops. Declared with [`scalar_small!`] /
//!   [`scalar_large!`].
//! - **Owning-composite:** types that recursively own heap resources,
//!   typically a nested container. These implement [`Element`] by hand (or
//!   get it for free when the type *is* a container).
//!
//! The container crate consumes these traits generically, so the protocol
//! is monomorphized per element type with no runtime dispatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kind;

pub use kind::{Element, Kind, Scalar};
