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

//! # Cleat Core
//!
//! Compile-time decision procedures for the Cleat strong-typedef toolkit.
//! Everything in this crate resolves during type checking: trait probes that
//! never fail to answer, a detector for narrowing (information-losing) value
//! conversions, and a constructibility relation for multi-argument
//! construction. There is no runtime state and no runtime error path.
//!
//! ## Modules
//!
//! - `probe`: The [`satisfies!`] macro, a total compile-time predicate that
//!   reports whether a concrete type satisfies an arbitrary trait bound as a
//!   `bool` constant instead of a compile error.
//! - `narrow`: The [`is_narrowing!`] macro and its three underlying relations
//!   (`Fundamental`, `CastableFrom`, `LosslessFrom`), classifying scalar
//!   conversions as value-preserving or narrowing.
//! - `construct`: The `FromParts` relation, extending single-value `From`
//!   conversions to tuples of constructor arguments.
//!
//! ## Purpose
//!
//! Higher-level crates gate their interfaces on these relations: a wrapper
//! can refuse a lossy constructor argument at compile time, and test suites
//! can assert that an impl does *not* exist without tripping a compile error.
//!
//! Refer to each module for detailed APIs and examples.

pub mod construct;
pub mod narrow;
pub mod probe;
