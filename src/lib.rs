//! # HandleBox: Opaque Handles with Small-Buffer Optimization
//!
//! [`Handle`] is a value-semantic wrapper that hides an arbitrary "body" type
//! behind a fixed-size, opaque footprint (the classic opaque-pointer /
//! "pimpl" pattern), while avoiding a heap allocation whenever the body is
//! small enough to fit directly in that footprint.
//!
//! ## Core Concept
//!
//! A plain `Box` always heap-allocates. [`Handle`] instead commits to a
//! footprint type up front: bodies that fit the footprint (by size *and*
//! alignment) live in-place, larger bodies are transparently boxed behind the
//! same footprint. The decision is made per `(body, footprint)` pair at
//! compile time; there is no runtime tag and no per-instance branch left
//! after monomorphization.
//!
//! ## Quick Start
//!
//! Add HandleBox to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! handlebox = "0.1"
//! ```
//!
//! Basic usage:
//!
//! ```rust
//! use handlebox::Handle;
//! use handlebox::space::S4;
//!
//! // Small bodies are stored directly inside the handle
//! let mut counter: Handle<u64, S4> = Handle::new();
//! assert!(!counter.is_heap());
//! *counter += 1;
//! assert_eq!(*counter, 1);
//!
//! // Large bodies automatically fall back to the heap
//! let buffer: Handle<[u64; 32], S4> = Handle::new();
//! assert!(buffer.is_heap());
//! ```
//!
//! ## Moved-From Handles
//!
//! [`Handle::take`] moves the body out and leaves the source handle in a
//! moved-from state. A moved-from handle may still be dropped, cloned, or
//! reassigned; only dereferencing it is an error:
//!
//! ```rust
//! use handlebox::Handle;
//! use handlebox::space::S4;
//!
//! let mut original: Handle<[u64; 32], S4> = Handle::new();
//! let moved = original.take();
//! assert!(original.is_vacant());
//!
//! // Cloning a moved-from handle is well-defined: the clone is vacant too.
//! let copy = original.clone();
//! assert!(copy.is_vacant());
//! assert_eq!(moved[0], 0);
//! ```
//!
//! ## Configuration
//!
//! ### Feature Flags
//!
//! - **`std`** (enabled by default)
//!   - Links to the standard library
//!   - Disable for `#![no_std]` environments: `default-features = false`
//!
//! ### No-std Usage
//!
//! HandleBox works in `#![no_std]` environments (an allocator is still
//! required for oversized bodies):
//!
//! ```toml
//! [dependencies]
//! handlebox = { version = "0.1", default-features = false }
//! ```
//!
//! ### Custom Footprint Types
//!
//! Any type can serve as a footprint; only its size and alignment matter:
//!
//! ```rust
//! use handlebox::Handle;
//!
//! type Wide = [usize; 16];
//!
//! let handle: Handle<[u64; 12], Wide> = Handle::new();
//! assert!(!handle.is_heap());
//! ```
//!
//! **Important**: footprint alignment matters! A body whose alignment exceeds
//! the footprint's is boxed even when its size would fit:
//!
//! ```rust
//! use handlebox::Handle;
//! use handlebox::space::S8;
//!
//! #[repr(align(64))]
//! #[derive(Clone, Default)]
//! struct Overaligned([u8; 8]);
//!
//! // 64 bytes fit `S8`, but the 64-byte alignment does not.
//! let handle: Handle<Overaligned, S8> = Handle::new();
//! assert!(handle.is_heap());
//! ```
//!
//! ## Body Contract
//!
//! A body must be [`Semiregular`]: default-constructible and copyable.
//! Bodies are created through their `Default` impl only. The handle
//! deliberately offers no forwarding constructors, keeping the body fully
//! opaque at the construction site.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::as_conversions)]

extern crate alloc;

mod handle;
mod layout;
pub mod space;
mod traits;

pub use crate::handle::Handle;
pub use crate::traits::Semiregular;
