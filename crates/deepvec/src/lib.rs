//! Growable arrays with explicit deep-ownership semantics.
//!
//! [`DeepVec<T>`] is a geometric-doubling dynamic array whose element types
//! declare how they are owned — scalar-small, scalar-large, or
//! owning-composite — via the [`Element`] trait from `deepvec-core`. The
//! payoff is arbitrary nesting: `DeepVec<DeepVec<DeepVec<Range>>>` works
//! through a single generic `Element` impl, with every element copied,
//! moved, or released exactly once.
//!
//! # Architecture
//!
//! ```text
//! DeepVec<T: Element> (operation surface, vec.rs)
//! ├── RawBuf<T> (growth/capacity manager, raw.rs — bounded unsafe)
//! └── T::{deep_copy, deep_free, nullify} (per-kind ownership protocol)
//!     └── recurses into DeepVec's own Element impl when T is a container
//! ```
//!
//! # Ownership rules
//!
//! - Appending by value ([`DeepVec::push`]) is a move; the source is gone.
//! - Appending by reference ([`DeepVec::push_copy`]) deep-copies.
//! - [`DeepVec::filled`] consumes its template (slot 0 takes the relocated
//!   original, the rest are deep copies).
//! - [`DeepVec::deep_free`] recursively releases and resets to
//!   canonical-empty; `Drop` does the same, so plain RAII never leaks.
//! - The copy-returning accessor ([`DeepVec::get`]) and growth-by-resize
//!   ([`DeepVec::resize`]) exist only for [`Scalar`] elements; composite
//!   elements are reached through borrows, which removes the
//!   aliased-shallow-copy double-free hazard at the type level.
//!
//! # Safety
//!
//! This crate contains bounded `unsafe`, confined to `raw.rs` (allocation)
//! and `vec.rs` (slot initialization and the live-prefix slice views), each
//! block with a `// SAFETY:` comment. Everything else is `#![deny(unsafe_code)]`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
mod raw;
pub mod vec;

pub use deepvec_core::{scalar_large, scalar_small, Element, Kind, Scalar};
pub use error::VecError;
pub use vec::DeepVec;
