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

//! # Compile-Time Trait Probing
//!
//! The [`satisfies!`](crate::satisfies) macro turns "does this type satisfy
//! this bound?" into a `bool` constant instead of a compile error. An
//! unsatisfied bound normally
//! aborts compilation, which makes it impossible to *branch* on trait
//! membership or to assert that an impl is absent. `satisfies!` answers the
//! question totally: `true` when the bound holds, `false` otherwise, and it
//! never fails to compile for a well-formed type and bound.
//!
//! ## Mechanism
//!
//! The macro expands to a block declaring a local probe struct, a blanket
//! trait supplying an associated constant `SATISFIED = false`, and an
//! inherent impl on the probe, bounded by the queried bound, supplying
//! `SATISFIED = true`. Associated-item resolution prefers the inherent
//! constant when its bounds hold and falls back to the trait constant when
//! they do not, so reading `SATISFIED` yields the verdict. Everything is
//! resolved during type checking; the result is usable in `const` items and
//! `const` assertions.
//!
//! ## Usage
//!
//! ```rust
//! use cleat_core::satisfies;
//!
//! assert!(satisfies!(u32: Copy));
//! assert!(!satisfies!(String: Copy));
//!
//! const SLICE_IS_SEND: bool = satisfies!([u8]: Send);
//! assert!(SLICE_IS_SEND);
//! ```

/// Reports whether a concrete type satisfies a trait bound, as a `bool`.
///
/// The first argument is a type, the second (after the colon) an arbitrary
/// bound: a single trait, a `+`-separated list, or a generic trait with type
/// arguments. Unsized types (`str`, `[u8]`, `dyn` trait objects) may be
/// probed. The expansion is a constant expression.
///
/// The verdict reflects what is provable for the *named* type where the
/// macro is written. Inside a generic function, probing a type parameter
/// reports the bounds declared on that parameter, not the properties of each
/// later instantiation; pass concrete types to interrogate concrete impls.
///
/// # Examples
///
/// ```rust
/// use cleat_core::satisfies;
///
/// assert!(satisfies!(u64: Send + Sync + Copy));
/// assert!(satisfies!(String: From<&'static str>));
/// assert!(!satisfies!(u8: From<u16>));
/// assert!(!satisfies!(str: Sized));
/// ```
#[macro_export]
macro_rules! satisfies {
    ($probe:ty: $($bound:tt)+) => {{
        #[allow(dead_code)]
        trait SatisfiesFallback {
            const SATISFIED: bool = false;
        }
        impl<X: ?Sized> SatisfiesFallback for X {}

        #[allow(dead_code)]
        struct SatisfiesProbe<X: ?Sized>(::core::marker::PhantomData<X>);

        #[allow(dead_code)]
        impl<X: ?Sized + $($bound)+> SatisfiesProbe<X> {
            const SATISFIED: bool = true;
        }

        <SatisfiesProbe<$probe>>::SATISFIED
    }};
}
