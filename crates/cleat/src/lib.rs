// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Cleat
//!
//! Phantom-tagged strong typedefs with compile-time conversion policies.
//! A [`Strong<T, Tag>`](strong::Strong) wraps an underlying `T` and borrows
//! its entire runtime behavior, while the inert `Tag` type makes two
//! wrappers over the same `T` mutually non-interchangeable. Construction
//! and assignment are admitted only through value-preserving conversions;
//! lossy sources, implicit conversions, dereference access and
//! named-argument ergonomics are opt-in per tag.
//!
//! ## Modules
//!
//! - `strong`: The wrapper itself, its accessor family (`get`, `set`,
//!   `into_inner`, `take`, `replace`), the admission entry points
//!   (`new`, `from_value`, `from_parts`) and the probe-able
//!   [`Admits`](strong::Admits) relation.
//! - `capability`: Opt-in marker traits implemented on tags
//!   ([`AllowLossy`](capability::AllowLossy),
//!   [`ImplicitFrom`](capability::ImplicitFrom),
//!   [`DerefAccess`](capability::DerefAccess),
//!   [`NamedArg`](capability::NamedArg)) and the wrapper impls they gate.
//!
//! The compile-time machinery (the [`satisfies!`] probe and the
//! [`is_narrowing!`] conversion detector) lives in `cleat-core` and is
//! re-exported here.
//!
//! ## Usage
//!
//! ```rust
//! use cleat::strong::{Strong, StrongTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct WidthTag;
//! impl StrongTag for WidthTag { const NAME: &'static str = "Width"; }
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct HeightTag;
//! impl StrongTag for HeightTag { const NAME: &'static str = "Height"; }
//!
//! type Width = Strong<i32, WidthTag>;
//! type Height = Strong<i32, HeightTag>;
//!
//! let w = Width::from_value(640_i16);
//! let h = Height::from_value(480_i16);
//! assert_eq!(*w.get(), 640);
//! assert_eq!(*h.get(), 480);
//! assert_eq!(format!("{}", w), "Width(640)");
//!
//! // Same underlying type, different tags: not interchangeable, and a
//! // narrowing source (u32 -> i32) is not admitted at all.
//! use cleat::{satisfies, strong::Admits};
//! assert!(satisfies!(Width: Admits<(i16,)>));
//! assert!(!satisfies!(Width: Admits<(u32,)>));
//! assert!(!satisfies!(Width: Admits<(Height,)>));
//! ```

pub mod capability;
pub mod strong;

pub use capability::{AdmitsLossy, AllowLossy, DerefAccess, ImplicitFrom, NamedArg};
pub use cleat_core::construct::FromParts;
pub use cleat_core::{is_narrowing, satisfies};
pub use strong::{Admits, Strong, StrongTag};
