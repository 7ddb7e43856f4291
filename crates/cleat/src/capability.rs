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

//! # Tag Capabilities
//!
//! By default a [`Strong<T, Tag>`](crate::strong::Strong) is deliberately
//! austere: construction only from value-preserving sources, no implicit
//! conversions in either direction, no access to `T`'s methods without
//! going through `get`. Each capability in this module is a marker trait
//! implemented on the *tag* that switches on one additional slice of
//! interface for every wrapper carrying that tag:
//!
//! - [`AllowLossy`]: lossy construction and reassignment (`from_lossy`,
//!   `set_lossy`) with `as`-cast semantics, plus the probe-able
//!   [`AdmitsLossy`] relation.
//! - [`ImplicitFrom`]: `From<T>`, so plain `value.into()` and generic
//!   `impl Into<...>` call sites work.
//! - [`DerefAccess`]: `Deref`/`DerefMut` (method forwarding and reference
//!   coercion to `T`), plus `AsRef`/`AsMut`/`Borrow`/`BorrowMut`.
//! - [`NamedArg`]: the `arg` constructor, turning a wrapper alias into a
//!   call-site parameter label.
//!
//! Capabilities are independent; a tag opts into any subset:
//!
//! ```rust
//! use cleat::capability::{AllowLossy, DerefAccess};
//! use cleat::strong::{Strong, StrongTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct SampleTag;
//! impl StrongTag for SampleTag { const NAME: &'static str = "Sample"; }
//! impl AllowLossy for SampleTag {}
//! impl DerefAccess for SampleTag {}
//!
//! type Sample = Strong<i16, SampleTag>;
//!
//! let s = Sample::from_lossy(70_000_i32); // wraps: 70_000 as i16
//! assert_eq!(*s, 4_464);
//! assert_eq!(s.leading_zeros(), 3);       // i16 method through Deref
//! ```

use crate::strong::Strong;
use num_traits::AsPrimitive;

/// Opts a tag into lossy construction and reassignment.
///
/// Wrappers whose tag implements `AllowLossy` gain
/// [`from_lossy`](Strong::from_lossy) and [`set_lossy`](Strong::set_lossy),
/// which accept any source in the `as`-cast domain of the underlying type.
/// The cast semantics are exactly those of `as`: integer casts wrap,
/// float-to-integer casts drop the fraction and saturate at the bounds,
/// integer-to-float casts round.
///
/// # Examples
///
/// ```rust
/// use cleat::capability::AllowLossy;
/// use cleat::strong::{Strong, StrongTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct RawCountTag;
/// impl StrongTag for RawCountTag { const NAME: &'static str = "RawCount"; }
/// impl AllowLossy for RawCountTag {}
///
/// type RawCount = Strong<i32, RawCountTag>;
///
/// let c = RawCount::from_lossy(u32::MAX);
/// assert_eq!(*c.get(), -1);
/// ```
pub trait AllowLossy {}

/// Opts a tag into implicit construction from the underlying type.
///
/// Wrappers whose tag implements `ImplicitFrom` gain `From<T>`, enabling
/// `value.into()` and generic `impl Into<...>` parameters. The reverse
/// direction never becomes implicit; unwrapping stays explicit through
/// `get`/`into_inner` (or reference coercion under [`DerefAccess`]).
///
/// # Examples
///
/// ```rust
/// use cleat::capability::ImplicitFrom;
/// use cleat::strong::{Strong, StrongTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct OffsetTag;
/// impl StrongTag for OffsetTag { const NAME: &'static str = "Offset"; }
/// impl ImplicitFrom for OffsetTag {}
///
/// type Offset = Strong<i64, OffsetTag>;
///
/// let o: Offset = 42_i64.into();
/// assert_eq!(*o.get(), 42);
/// ```
pub trait ImplicitFrom {}

/// Opts a tag into dereference access to the underlying value.
///
/// Wrappers whose tag implements `DerefAccess` gain `Deref` and `DerefMut`,
/// so `T`'s methods are callable directly on the wrapper and `&wrapper`
/// coerces where `&T` is expected. `AsRef`, `AsMut`, `Borrow` and
/// `BorrowMut` come along with it; the `Borrow` contract holds because
/// equality, ordering and hashing of the wrapper forward to `T` exactly.
///
/// # Examples
///
/// ```rust
/// use cleat::capability::DerefAccess;
/// use cleat::strong::{Strong, StrongTag};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// struct NoteTag;
/// impl StrongTag for NoteTag { const NAME: &'static str = "Note"; }
/// impl DerefAccess for NoteTag {}
///
/// type Note = Strong<String, NoteTag>;
///
/// let mut n = Note::from_value("hello");
/// n.push_str(", world");
/// assert_eq!(n.len(), 12);
/// ```
pub trait DerefAccess {}

/// Opts a tag into named-argument ergonomics.
///
/// Wrappers whose tag implements `NamedArg` gain the associated constructor
/// [`arg`](Strong::arg), so a wrapper alias doubles as a parameter label at
/// call sites. Admission follows the same value-preserving rule as
/// [`from_value`](Strong::from_value).
///
/// # Examples
///
/// ```rust
/// use cleat::capability::NamedArg;
/// use cleat::strong::{Strong, StrongTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct StartTag;
/// impl StrongTag for StartTag { const NAME: &'static str = "Start"; }
/// impl NamedArg for StartTag {}
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct LenTag;
/// impl StrongTag for LenTag { const NAME: &'static str = "Len"; }
/// impl NamedArg for LenTag {}
///
/// type Start = Strong<i64, StartTag>;
/// type Len = Strong<i64, LenTag>;
///
/// fn window_end(start: Start, len: Len) -> i64 {
///     start.get() + len.get()
/// }
///
/// let end = window_end(Start::arg(4_i32), Len::arg(10_i32));
/// assert_eq!(end, 14);
/// ```
pub trait NamedArg {}

/// The lossy admission relation, probe-able at compile time.
///
/// `Strong<T, Tag>: AdmitsLossy<A>` holds exactly when the tag allows lossy
/// sources and `A` is castable to `T`. The mirror of
/// [`Admits`](crate::strong::Admits) for the opt-in entry points.
///
/// # Examples
///
/// ```rust
/// use cleat::capability::{AdmitsLossy, AllowLossy};
/// use cleat::satisfies;
/// use cleat::strong::{Strong, StrongTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct RawTag;
/// impl StrongTag for RawTag { const NAME: &'static str = "Raw"; }
/// impl AllowLossy for RawTag {}
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct StrictTag;
/// impl StrongTag for StrictTag { const NAME: &'static str = "Strict"; }
///
/// assert!(satisfies!(Strong<i32, RawTag>: AdmitsLossy<u32>));
/// assert!(!satisfies!(Strong<i32, StrictTag>: AdmitsLossy<u32>));
/// ```
pub trait AdmitsLossy<A> {}

impl<T, Tag, A> AdmitsLossy<A> for Strong<T, Tag>
where
    T: Copy + 'static,
    Tag: AllowLossy,
    A: AsPrimitive<T>,
{
}

impl<T, Tag> Strong<T, Tag>
where
    T: Copy + 'static,
    Tag: AllowLossy,
{
    /// Creates a new `Strong` from any castable source, with `as`-cast
    /// semantics. Only available when the tag implements [`AllowLossy`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat::capability::AllowLossy;
    /// # use cleat::strong::{Strong, StrongTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct RawCountTag;
    /// impl StrongTag for RawCountTag { const NAME: &'static str = "RawCount"; }
    /// impl AllowLossy for RawCountTag {}
    ///
    /// type RawCount = Strong<i32, RawCountTag>;
    ///
    /// let truncated = RawCount::from_lossy(3.9_f64);
    /// assert_eq!(*truncated.get(), 3);
    /// ```
    #[inline]
    pub fn from_lossy<A>(value: A) -> Self
    where
        A: AsPrimitive<T>,
    {
        Self::new(value.as_())
    }

    /// Reassigns the underlying value from any castable source, with
    /// `as`-cast semantics. Only available when the tag implements
    /// [`AllowLossy`].
    #[inline]
    pub fn set_lossy<A>(&mut self, value: A)
    where
        A: AsPrimitive<T>,
    {
        *self = Self::new(value.as_());
    }
}

impl<T, Tag> Strong<T, Tag>
where
    Tag: NamedArg,
{
    /// Builds the wrapper as a labeled call-site argument. Only available
    /// when the tag implements [`NamedArg`]; admission follows
    /// [`from_value`](Strong::from_value).
    #[inline]
    pub fn arg<A>(value: A) -> Self
    where
        T: From<A>,
    {
        Self::from_value(value)
    }
}

impl<T, Tag> From<T> for Strong<T, Tag>
where
    Tag: ImplicitFrom,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, Tag> std::ops::Deref for Strong<T, Tag>
where
    Tag: DerefAccess,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, Tag> std::ops::DerefMut for Strong<T, Tag>
where
    Tag: DerefAccess,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T, Tag> AsRef<T> for Strong<T, Tag>
where
    Tag: DerefAccess,
{
    #[inline]
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T, Tag> AsMut<T> for Strong<T, Tag>
where
    Tag: DerefAccess,
{
    #[inline]
    fn as_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T, Tag> std::borrow::Borrow<T> for Strong<T, Tag>
where
    Tag: DerefAccess,
{
    #[inline]
    fn borrow(&self) -> &T {
        self.get()
    }
}

impl<T, Tag> std::borrow::BorrowMut<T> for Strong<T, Tag>
where
    Tag: DerefAccess,
{
    #[inline]
    fn borrow_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strong::StrongTag;
    use cleat_core::satisfies;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct RawCountTag;

    impl StrongTag for RawCountTag {
        const NAME: &'static str = "RawCount";
    }

    impl AllowLossy for RawCountTag {}

    type RawCount = Strong<i32, RawCountTag>;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct StrictCountTag;

    impl StrongTag for StrictCountTag {
        const NAME: &'static str = "StrictCount";
    }

    type StrictCount = Strong<i32, StrictCountTag>;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct OffsetTag;

    impl StrongTag for OffsetTag {
        const NAME: &'static str = "Offset";
    }

    impl ImplicitFrom for OffsetTag {}

    type Offset = Strong<i64, OffsetTag>;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct NoteTag;

    impl StrongTag for NoteTag {
        const NAME: &'static str = "Note";
    }

    impl DerefAccess for NoteTag {}

    type Note = Strong<String, NoteTag>;

    #[test]
    fn test_from_lossy_uses_cast_semantics() {
        let c = RawCount::from_lossy(7_u32);
        assert_eq!(*c.get(), 7);

        let wrapped = RawCount::from_lossy(u32::MAX);
        assert_eq!(*wrapped.get(), -1);

        let fraction_dropped = RawCount::from_lossy(3.9_f64);
        assert_eq!(*fraction_dropped.get(), 3);

        let saturated = RawCount::from_lossy(f64::INFINITY);
        assert_eq!(*saturated.get(), i32::MAX);
    }

    #[test]
    fn test_set_lossy() {
        let mut c = RawCount::new(0);
        c.set_lossy(300_i64);
        assert_eq!(*c.get(), 300);

        c.set_lossy(u64::MAX);
        assert_eq!(*c.get(), -1);
    }

    #[test]
    fn test_lossy_admission_probes() {
        assert!(satisfies!(RawCount: AdmitsLossy<u32>));
        assert!(satisfies!(RawCount: AdmitsLossy<f64>));
        assert!(satisfies!(RawCount: AdmitsLossy<i16>));

        assert!(!satisfies!(StrictCount: AdmitsLossy<u32>));
        assert!(!satisfies!(StrictCount: AdmitsLossy<f64>));

        // Outside the cast domain even a lossy tag admits nothing.
        assert!(!satisfies!(RawCount: AdmitsLossy<String>));
    }

    #[test]
    fn test_implicit_from_enables_into_call_sites() {
        let o: Offset = 42_i64.into();
        assert_eq!(*o.get(), 42);

        fn consume(v: impl Into<Offset>) -> i64 {
            *v.into().get()
        }
        assert_eq!(consume(7_i64), 7);
    }

    #[test]
    fn test_implicit_from_stays_one_directional() {
        assert!(satisfies!(Offset: From<i64>));
        assert!(!satisfies!(i64: From<Offset>));
        assert!(!satisfies!(StrictCount: From<i32>));
    }

    #[test]
    fn test_deref_access_forwards_methods() {
        let mut n = Note::from_value("hello");
        assert_eq!(n.len(), 5);

        n.push_str(", world");
        assert_eq!(&*n, "hello, world");

        fn takes_str(s: &str) -> usize {
            s.len()
        }
        assert_eq!(takes_str(&n), 12);
    }

    #[test]
    fn test_borrow_enables_raw_key_lookup() {
        use std::collections::HashMap;

        let mut m: HashMap<Note, u32> = HashMap::new();
        m.insert(Note::from_value("alpha"), 1);

        assert_eq!(m.get(&Note::from_value("alpha")), Some(&1));
        assert_eq!(m.get(&String::from("alpha")), Some(&1));
    }

    #[test]
    fn test_named_arguments_at_call_sites() {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        struct AgeTag;

        impl StrongTag for AgeTag {
            const NAME: &'static str = "Age";
        }

        impl NamedArg for AgeTag {}

        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        struct NameTag;

        impl StrongTag for NameTag {
            const NAME: &'static str = "Name";
        }

        impl NamedArg for NameTag {}

        type Age = Strong<u32, AgeTag>;
        type Name = Strong<String, NameTag>;

        fn describe(age: Age, name: Name) -> String {
            format!("{} is {}", name.get(), age.get())
        }

        let line = describe(Age::arg(30_u8), Name::arg("Ada"));
        assert_eq!(line, "Ada is 30");
    }

    #[test]
    fn test_capabilities_compose() {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        struct ScoreTag;

        impl StrongTag for ScoreTag {
            const NAME: &'static str = "Score";
        }

        impl AllowLossy for ScoreTag {}
        impl ImplicitFrom for ScoreTag {}
        impl DerefAccess for ScoreTag {}

        type Score = Strong<i16, ScoreTag>;

        let s: Score = 5_i16.into();
        let t = Score::from_lossy(70_000_i32);
        assert_eq!(*t, 4_464);
        assert!(*s < *t);
        assert!(satisfies!(Score: AdmitsLossy<f32>));
    }
}
