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

//! # Narrowing-Conversion Detection
//!
//! The [`is_narrowing!`](crate::is_narrowing) macro classifies a scalar
//! conversion as narrowing (potentially information-losing) or
//! value-preserving, entirely at compile time. `is_narrowing!(i64 => i32)`
//! is `true`: some `i64` values do not survive the trip.
//! `is_narrowing!(i32 => i64)` is `false`: every `i32` value does.
//!
//! ## Decision procedure
//!
//! Three relations are consulted, in order:
//!
//! 1. Both sides must be [`Fundamental`] scalar types (`bool`, `char`, the
//!    integer types, `f32`, `f64`). Anything else reports `false`.
//! 2. A value conversion must exist at all, i.e. the destination must be
//!    [`CastableFrom`] the source (the `as`-cast domain, via
//!    [`num_traits::AsPrimitive`]). A pair with no conversion, such as
//!    `i32 => bool`, reports `false` rather than failing to compile.
//! 3. The conversion is narrowing exactly when it is not value-preserving,
//!    i.e. when the destination is not [`LosslessFrom`] the source. The
//!    lossless grid is the standard library's own `From` between primitives,
//!    which exists precisely for exact conversions.
//!
//! References (`&T`, `&mut T`, with or without named lifetimes) are stripped
//! from both sides before judgment, so `is_narrowing!(&i64 => &i32)` equals
//! `is_narrowing!(i64 => i32)`.
//!
//! ## Consequences worth knowing
//!
//! - Same-width signed/unsigned pairs narrow in *both* directions: each side
//!   has values the other cannot represent.
//! - `usize`/`isize` follow the standard library's portability stance: only
//!   conversions lossless on every supported platform count as lossless, so
//!   `u32 => usize` is narrowing even though it preserves values on 64-bit
//!   targets.
//! - "No conversion exists" and "conversion is safe" both report `false`.
//!   Callers that need to distinguish the two can probe
//!   [`CastableFrom`] separately with [`satisfies!`](crate::satisfies).
//! - Unsized types (`str`, `[u8]`, `dyn` objects) are ordinary queries: no
//!   gate is satisfied and the verdict is `false`, never a compile error.
//!
//! ## Usage
//!
//! ```rust
//! use cleat_core::is_narrowing;
//!
//! assert!(is_narrowing!(i64 => i32));
//! assert!(!is_narrowing!(i32 => i64));
//! assert!(is_narrowing!(u32 => i32));
//! assert!(is_narrowing!(i32 => u32));
//! assert!(!is_narrowing!(&u8 => &u16));
//!
//! const LOSSY: bool = is_narrowing!(f64 => f32);
//! assert!(LOSSY);
//! ```

use num_traits::AsPrimitive;

/// Marker for Rust's fundamental scalar types.
///
/// Implemented for `bool`, `char`, the twelve integer types and the two
/// float types, and nothing else. Compound types, references, raw pointers
/// and library types are all non-fundamental; narrowing analysis does not
/// apply to them.
///
/// # Examples
///
/// ```rust
/// use cleat_core::narrow::Fundamental;
/// use cleat_core::satisfies;
///
/// assert!(satisfies!(u64: Fundamental));
/// assert!(satisfies!(char: Fundamental));
/// assert!(!satisfies!(String: Fundamental));
/// assert!(!satisfies!(*const u8: Fundamental));
/// ```
pub trait Fundamental {}

macro_rules! impl_fundamental_for {
    ($t:ty) => {
        impl Fundamental for $t {}
    };
}

impl_fundamental_for!(bool);
impl_fundamental_for!(char);
impl_fundamental_for!(i8);
impl_fundamental_for!(u8);
impl_fundamental_for!(i16);
impl_fundamental_for!(u16);
impl_fundamental_for!(i32);
impl_fundamental_for!(u32);
impl_fundamental_for!(i64);
impl_fundamental_for!(u64);
impl_fundamental_for!(i128);
impl_fundamental_for!(u128);
impl_fundamental_for!(isize);
impl_fundamental_for!(usize);
impl_fundamental_for!(f32);
impl_fundamental_for!(f64);

/// Value-preserving constructibility: `T: LosslessFrom<F>` holds whenever
/// `T: From<F>` does.
///
/// Between primitives, the standard library provides `From` exactly for the
/// conversions that cannot lose information, which makes this relation the
/// authority for the "not narrowing" verdict. The blanket impl also covers
/// user conversions (`String: LosslessFrom<&str>`), which is harmless: the
/// detector only consults it for fundamental pairs.
///
/// `F` is `?Sized`: an unsized source (`str`, `[u8]`, `dyn` objects) is a
/// well-formed query that no impl satisfies.
pub trait LosslessFrom<F: ?Sized> {}

impl<F, T> LosslessFrom<F> for T where T: From<F> {}

/// Convertibility at all: `T: CastableFrom<F>` holds whenever `F as T` is a
/// legal cast, possibly lossy ([`num_traits::AsPrimitive`]).
///
/// This is the well-formedness gate of the narrowing detector. Pairs outside
/// the cast domain (`i32 => bool`, `f64 => char`) are not convertible and
/// therefore never narrowing.
///
/// `F` is `?Sized`: an unsized source is a well-formed query that no impl
/// satisfies.
///
/// # Examples
///
/// ```rust
/// use cleat_core::narrow::CastableFrom;
/// use cleat_core::satisfies;
///
/// assert!(satisfies!(i32: CastableFrom<f64>));
/// assert!(satisfies!(u8: CastableFrom<char>));
/// assert!(!satisfies!(bool: CastableFrom<i32>));
/// ```
pub trait CastableFrom<F: ?Sized> {}

impl<F, T> CastableFrom<F> for T
where
    F: AsPrimitive<T>,
    T: Copy + 'static,
{
}

/// Reports whether converting the left type into the right type narrows,
/// as a `bool` constant.
///
/// Write the two types separated by `=>`. References on either side are
/// stripped before judgment, nested forms (`&&T`, `&mut &T`) included. See
/// the [module docs](self) for the full decision procedure.
///
/// # Examples
///
/// ```rust
/// use cleat_core::is_narrowing;
///
/// // Width changes.
/// assert!(is_narrowing!(i64 => i16));
/// assert!(!is_narrowing!(i16 => i64));
///
/// // Signedness changes narrow both ways.
/// assert!(is_narrowing!(u8 => i8));
/// assert!(is_narrowing!(i8 => u8));
///
/// // Floats.
/// assert!(is_narrowing!(f64 => i64));
/// assert!(!is_narrowing!(i32 => f64));
///
/// // Non-scalar or non-convertible pairs are never narrowing.
/// assert!(!is_narrowing!(String => f64));
/// assert!(!is_narrowing!(i32 => bool));
/// ```
#[macro_export]
macro_rules! is_narrowing {
    // Reference stripping, source side first. Adjacent ampersands lex as a
    // single `&&` token that literal `&` arms cannot match, so the doubled
    // forms carry their own arms (stripping two layers at once); recursion
    // handles deeper nesting and then the destination side.
    (&& mut $($rest:tt)+) => {
        $crate::is_narrowing!($($rest)+)
    };
    (&& $lt:lifetime mut $($rest:tt)+) => {
        $crate::is_narrowing!($($rest)+)
    };
    (&& $lt:lifetime $($rest:tt)+) => {
        $crate::is_narrowing!($($rest)+)
    };
    (&& $($rest:tt)+) => {
        $crate::is_narrowing!($($rest)+)
    };
    (& mut $($rest:tt)+) => {
        $crate::is_narrowing!($($rest)+)
    };
    (& $lt:lifetime mut $($rest:tt)+) => {
        $crate::is_narrowing!($($rest)+)
    };
    (& $lt:lifetime $($rest:tt)+) => {
        $crate::is_narrowing!($($rest)+)
    };
    (& $($rest:tt)+) => {
        $crate::is_narrowing!($($rest)+)
    };
    // Destination side.
    ($from:ty => && mut $($rest:tt)+) => {
        $crate::is_narrowing!($from => $($rest)+)
    };
    ($from:ty => && $lt:lifetime mut $($rest:tt)+) => {
        $crate::is_narrowing!($from => $($rest)+)
    };
    ($from:ty => && $lt:lifetime $($rest:tt)+) => {
        $crate::is_narrowing!($from => $($rest)+)
    };
    ($from:ty => && $($rest:tt)+) => {
        $crate::is_narrowing!($from => $($rest)+)
    };
    ($from:ty => & mut $($rest:tt)+) => {
        $crate::is_narrowing!($from => $($rest)+)
    };
    ($from:ty => & $lt:lifetime mut $($rest:tt)+) => {
        $crate::is_narrowing!($from => $($rest)+)
    };
    ($from:ty => & $lt:lifetime $($rest:tt)+) => {
        $crate::is_narrowing!($from => $($rest)+)
    };
    ($from:ty => & $($rest:tt)+) => {
        $crate::is_narrowing!($from => $($rest)+)
    };
    // Bare pair: fundamental on both sides, convertible at all, and not
    // value-preserving.
    ($from:ty => $to:ty) => {
        ($crate::satisfies!($from: $crate::narrow::Fundamental)
            && $crate::satisfies!($to: $crate::narrow::Fundamental)
            && $crate::satisfies!($to: $crate::narrow::CastableFrom<$from>)
            && !$crate::satisfies!($to: $crate::narrow::LosslessFrom<$from>))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satisfies;

    #[test]
    fn test_identity_is_not_narrowing() {
        assert!(!is_narrowing!(i32 => i32));
        assert!(!is_narrowing!(u64 => u64));
        assert!(!is_narrowing!(f64 => f64));
        assert!(!is_narrowing!(char => char));
        assert!(!is_narrowing!(bool => bool));
    }

    #[test]
    fn test_widening_same_signedness_is_not_narrowing() {
        assert!(!is_narrowing!(i8 => i16));
        assert!(!is_narrowing!(i16 => i32));
        assert!(!is_narrowing!(i32 => i64));
        assert!(!is_narrowing!(i64 => i128));
        assert!(!is_narrowing!(u8 => u16));
        assert!(!is_narrowing!(u8 => u128));
        assert!(!is_narrowing!(u16 => i32));
        assert!(!is_narrowing!(u32 => i64));
    }

    #[test]
    fn test_shrinking_is_narrowing() {
        assert!(is_narrowing!(i64 => i32));
        assert!(is_narrowing!(i32 => i8));
        assert!(is_narrowing!(i64 => u16));
        assert!(is_narrowing!(u128 => u8));
        assert!(is_narrowing!(i128 => i64));
        assert!(!is_narrowing!(u16 => i64));
    }

    #[test]
    fn test_sign_flip_narrows_both_ways() {
        assert!(is_narrowing!(u8 => i8));
        assert!(is_narrowing!(i8 => u8));
        assert!(is_narrowing!(u32 => i32));
        assert!(is_narrowing!(i32 => u32));
        assert!(is_narrowing!(u64 => i64));
        assert!(is_narrowing!(i64 => u64));
    }

    #[test]
    fn test_float_conversions() {
        assert!(!is_narrowing!(f32 => f64));
        assert!(is_narrowing!(f64 => f32));
        assert!(is_narrowing!(f64 => i64));
        assert!(is_narrowing!(f32 => i32));
        // Exactly representable integer ranges are not narrowing.
        assert!(!is_narrowing!(i32 => f64));
        assert!(!is_narrowing!(u16 => f32));
        // Too wide for the mantissa.
        assert!(is_narrowing!(i64 => f64));
        assert!(is_narrowing!(u32 => f32));
        assert!(is_narrowing!(i32 => f32));
    }

    #[test]
    fn test_bool_and_char() {
        assert!(!is_narrowing!(bool => i32));
        assert!(!is_narrowing!(i32 => bool));
        assert!(!is_narrowing!(u8 => char));
        assert!(is_narrowing!(char => u8));
        assert!(!is_narrowing!(char => u32));
        assert!(is_narrowing!(char => i32));
        assert!(!is_narrowing!(i32 => char));
        assert!(!is_narrowing!(f64 => char));
        assert!(!is_narrowing!(f64 => bool));
    }

    #[test]
    fn test_pointer_width_integers() {
        assert!(!is_narrowing!(u16 => usize));
        assert!(is_narrowing!(u32 => usize));
        assert!(is_narrowing!(usize => u64));
        assert!(!is_narrowing!(u8 => isize));
        assert!(is_narrowing!(isize => i16));
    }

    #[test]
    fn test_non_fundamental_pairs_are_not_narrowing() {
        assert!(!is_narrowing!(String => f64));
        assert!(!is_narrowing!(f64 => String));
        assert!(!is_narrowing!(Vec<u8> => u8));
        assert!(!is_narrowing!((i32, i32) => i32));
        assert!(!is_narrowing!(i64 => Box<i32>));
    }

    #[test]
    fn test_references_are_stripped() {
        assert!(is_narrowing!(&i64 => &i32));
        assert!(is_narrowing!(&mut i64 => i32));
        assert!(is_narrowing!(i64 => &mut i32));
        assert!(!is_narrowing!(&i32 => &i64));
        assert!(is_narrowing!(&'static i64 => &'static i32));
        assert!(is_narrowing!(&mut &i64 => i32));
        assert!(!is_narrowing!(&String => &f64));
    }

    #[test]
    fn test_doubled_references_are_stripped() {
        // `&&` reaches the matcher as one token.
        assert!(is_narrowing!(&&i64 => &&i32));
        assert!(!is_narrowing!(&&u8 => &&u16));
        assert!(is_narrowing!(&&mut i64 => i32));
        assert!(is_narrowing!(i64 => &&mut i32));
        assert!(is_narrowing!(&&'static i64 => &&'static i32));
        assert!(is_narrowing!(&&&i64 => i32));
    }

    #[test]
    fn test_unsized_pairs_report_false() {
        assert!(!is_narrowing!(str => str));
        assert!(!is_narrowing!(&str => &str));
        assert!(!is_narrowing!(str => i32));
        assert!(!is_narrowing!(i32 => str));
        assert!(!is_narrowing!([u8] => u8));
        assert!(!is_narrowing!(&[u8] => &u8));
        assert!(!is_narrowing!(dyn Send => i32));
    }

    #[test]
    fn test_usable_in_const_context() {
        const SHRINK: bool = is_narrowing!(i64 => i32);
        const WIDEN: bool = is_narrowing!(i32 => i64);
        assert!(SHRINK);
        assert!(!WIDEN);
    }

    const _: () = assert!(is_narrowing!(i64 => i16));
    const _: () = assert!(!is_narrowing!(i16 => i64));

    #[test]
    fn test_relations_probe_directly() {
        assert!(satisfies!(i32: Fundamental));
        assert!(!satisfies!(String: Fundamental));
        assert!(satisfies!(i64: LosslessFrom<i32>));
        assert!(!satisfies!(i32: LosslessFrom<i64>));
        assert!(satisfies!(i32: CastableFrom<i64>));
        assert!(!satisfies!(bool: CastableFrom<i32>));
        assert!(!satisfies!(char: CastableFrom<f64>));
    }
}
