//! # Polybox: Polymorphic Values Without Mandatory Boxing
//!
//! [`Poly`] holds any concrete implementation of a trait *by value*: small
//! payloads live in a configurable inline buffer, large ones fall back to
//! the heap automatically. Lifecycle operations (clone, assignment,
//! destruction, type queries) are routed through a per-payload-type
//! dispatch table rather than the trait's own vtable, which is what lets
//! `Poly` behave like a first-class value: cloneable, assignable with an
//! in-place fast path, and usable as the payload of a zero-overhead
//! optional.
//!
//! ## Core Concept
//!
//! `Box<dyn Trait>` always heap-allocates and is move-only. `Poly<dyn
//! Trait>` keeps payloads up to the chosen capacity inline, clones through
//! the payload's own `Clone`, and reassigns in place when the source and
//! destination hold the same concrete type.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! polybox = "0.3"
//! ```
//!
//! ```rust
//! use polybox::{poly, Poly};
//! use polybox::space::S4;
//!
//! trait Shape {
//!     fn area(&self) -> f64;
//! }
//!
//! #[derive(Clone)]
//! struct Circle {
//!     radius: f64,
//! }
//!
//! impl Shape for Circle {
//!     fn area(&self) -> f64 {
//!         core::f64::consts::PI * self.radius * self.radius
//!     }
//! }
//!
//! #[derive(Clone)]
//! struct Grid {
//!     cells: [f64; 32],
//! }
//!
//! impl Shape for Grid {
//!     fn area(&self) -> f64 {
//!         self.cells.iter().sum()
//!     }
//! }
//!
//! // Small payloads are stored inline
//! let small: Poly<dyn Shape, S4> = poly!(Circle { radius: 1.0 });
//! assert!(!small.is_heap());
//!
//! // Large payloads automatically use heap allocation
//! let large: Poly<dyn Shape, S4> = poly!(Grid { cells: [1.0; 32] });
//! assert!(large.is_heap());
//!
//! // Use like a value: clone it, compare behavior through the trait
//! let copy = small.clone();
//! assert_eq!(copy.area(), small.area());
//! ```
//!
//! ## Assignment Semantics
//!
//! Assigning one `Poly` onto another with [`Clone::clone_from`] picks the
//! cheapest correct path: when both sides hold the same concrete type the
//! payload is assigned in place (a heap-resident payload keeps its
//! allocation and address); otherwise the old payload is destroyed and
//! the new one is clone-constructed. [`poly_emplace!`] always destroys
//! and reconstructs, even on a same-type replacement.
//!
//! ## Packed Optionals
//!
//! An unset `Poly` (see [`Poly::unset`]) reserves its null dispatch-table
//! state, and [`PackedOption`] uses that state as its own "none" marker
//! through the [`IntrusiveUnset`] trait. The result is an optional with
//! no extra discriminant:
//!
//! ```rust
//! use core::any::Any;
//! use core::mem::size_of;
//! use polybox::{PackedOption, Poly};
//!
//! assert_eq!(
//!     size_of::<PackedOption<Poly<dyn Any>>>(),
//!     size_of::<Poly<dyn Any>>(),
//! );
//! ```
//!
//! ## Configuration
//!
//! ### Feature Flags
//!
//! - **`std`** (enabled by default)
//!   - Links to the standard library
//!   - Disable for `#![no_std]` environments: `default-features = false`
//!     (the heap fallback still requires `alloc`)
//!
//! - **`nightly`** (optional, requires nightly)
//!   - Uses the unstable pointer-metadata API instead of the stable
//!     layout-based fallback checked by the build script
//!
//! ### Custom Space Types
//!
//! The second type parameter only contributes its size and alignment:
//!
//! ```rust
//! use polybox::Poly;
//!
//! // Custom 128-byte capacity
//! type MySpace = [u8; 128];
//!
//! let value: Poly<[u8; 100], MySpace> = Poly::new([0; 100]);
//! assert!(!value.is_heap()); // Fits in custom space
//! ```
//!
//! **Important**: space alignment matters! A payload whose alignment
//! exceeds the space's is heap-allocated regardless of its size.
//!
//! ## Payload Requirements
//!
//! Every payload type must be `Clone + 'static`: the dispatch table
//! registered at construction time carries the payload's clone and
//! assignment operations, and its identity token requires `'static`.
//! Trait-object and slice payloads are created with the [`poly!`] macro,
//! which captures the unsize coercion at the call site on stable Rust.
//!
//! ## Type Queries
//!
//! `Poly` knows its payload's concrete type without `Base: Any`:
//!
//! ```rust
//! use core::any::Any;
//! use polybox::{poly, Poly};
//! use polybox::space::S2;
//!
//! let value: Poly<dyn Any, S2> = poly!(42u32);
//!
//! assert!(value.is::<u32>());
//! match value.downcast::<u32>() {
//!     Ok(num) => assert_eq!(num, 42),
//!     Err(original) => panic!("not a u32: {:?}", original.type_id()),
//! }
//! ```

#![cfg_attr(feature = "nightly", feature(set_ptr_value))]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(stable_features)]
#![deny(missing_docs)]
#![deny(clippy::as_conversions)]

extern crate alloc;

mod packed;
mod polymorphic;
pub mod space;
mod sptr;
mod storage;
mod vtable;

pub use crate::packed::IntrusiveUnset;
pub use crate::packed::PackedOption;
pub use crate::polymorphic::Poly;
