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

//! # Multi-Argument Constructibility
//!
//! `From` covers construction from a single value. [`FromParts`] extends the
//! idea to an argument *bundle*: a tuple holding everything a constructor
//! needs, so that "is this type buildable from these arguments?" stays a
//! plain trait bound that generic code and compile-time probes can consume.
//!
//! Three families of impls ship with the crate:
//!
//! - a bridge from one-element bundles to `From`, so `(value,)` admits
//!   exactly what `From` admits;
//! - `()` for default construction;
//! - fill-style constructors for the common collection shapes, `String`
//!   from `(count, fill_char)` and `Vec<T>` from `(count, element)`.
//!
//! User types implement the trait directly for whatever bundle shapes their
//! constructors take.

/// Construction from a tuple of constructor arguments.
///
/// `T: FromParts<Parts>` means a `T` can be built from the argument bundle
/// `Parts`. One-element bundles defer to `From`; larger bundles are
/// whatever the implementing type declares.
///
/// # Examples
///
/// ```rust
/// use cleat_core::construct::FromParts;
///
/// let n = i64::from_parts((7_i32,));
/// assert_eq!(n, 7);
///
/// let s = String::from_parts((3_usize, '#'));
/// assert_eq!(s, "###");
/// ```
///
/// Implementing the trait for an own type:
///
/// ```rust
/// use cleat_core::construct::FromParts;
///
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// impl FromParts<(&'static str, u16)> for Endpoint {
///     fn from_parts((host, port): (&'static str, u16)) -> Self {
///         Self {
///             host: host.to_string(),
///             port,
///         }
///     }
/// }
///
/// let ep = Endpoint::from_parts(("localhost", 8080));
/// assert_eq!(ep.host, "localhost");
/// assert_eq!(ep.port, 8080);
/// ```
pub trait FromParts<Parts>: Sized {
    /// Builds a value from the argument bundle.
    fn from_parts(parts: Parts) -> Self;
}

impl<T, A> FromParts<(A,)> for T
where
    T: From<A>,
{
    #[inline]
    fn from_parts(parts: (A,)) -> Self {
        Self::from(parts.0)
    }
}

impl<T> FromParts<()> for T
where
    T: Default,
{
    #[inline]
    fn from_parts(_parts: ()) -> Self {
        Self::default()
    }
}

impl FromParts<(usize, char)> for String {
    fn from_parts((count, fill): (usize, char)) -> Self {
        std::iter::repeat(fill).take(count).collect()
    }
}

impl<T: Clone> FromParts<(usize, T)> for Vec<T> {
    fn from_parts((count, element): (usize, T)) -> Self {
        vec![element; count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_bridge_follows_from() {
        let n = i64::from_parts((42_i32,));
        assert_eq!(n, 42);

        let s = String::from_parts(("tide",));
        assert_eq!(s, "tide");
    }

    #[test]
    fn test_unit_bundle_uses_default() {
        let n = i32::from_parts(());
        assert_eq!(n, 0);

        let s = String::from_parts(());
        assert!(s.is_empty());
    }

    #[test]
    fn test_string_from_count_and_fill() {
        let s = String::from_parts((4_usize, '#'));
        assert_eq!(s, "####");

        let empty = String::from_parts((0_usize, 'x'));
        assert_eq!(empty, "");
    }

    #[test]
    fn test_vec_from_count_and_element() {
        // Qualified form: `Vec` has an unstable inherent `from_parts`.
        let v = <Vec<i32> as FromParts<_>>::from_parts((3_usize, 7_i32));
        assert_eq!(v, vec![7, 7, 7]);

        let none = <Vec<u8> as FromParts<_>>::from_parts((0_usize, 1_u8));
        assert!(none.is_empty());
    }

    #[test]
    fn test_custom_bundle_shape() {
        struct Rgb(u8, u8, u8);

        impl FromParts<(u8, u8, u8)> for Rgb {
            fn from_parts((r, g, b): (u8, u8, u8)) -> Self {
                Self(r, g, b)
            }
        }

        let c = Rgb::from_parts((1, 2, 3));
        assert_eq!(c.0, 1);
        assert_eq!(c.1, 2);
        assert_eq!(c.2, 3);
    }
}
