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

//! # Strong Typedefs (Zero-Cost)
//!
//! Phantom-tagged wrappers around arbitrary underlying types to prevent
//! mixing values from different domains (e.g., widths vs. heights, row
//! handles vs. column handles). `Strong<T, Tag>` carries an inert tag type
//! that encodes intent at the type level while compiling down to a
//! transparent `T` (no runtime overhead).
//!
//! ## Motivation
//!
//! An `i32` that means "width" and an `i32` that means "height" are the same
//! type to the compiler, so swapped arguments go unnoticed. Distinct tags
//! make them distinct types. On top of that, construction and assignment are
//! *policed*: a wrapper only accepts sources whose conversion to the
//! underlying type preserves the value. Lossy sources are rejected at
//! compile time unless the tag opts in (see
//! [`AllowLossy`](crate::capability::AllowLossy)).
//!
//! ## Highlights
//!
//! - `StrongTag` defines a human-readable `NAME` used for `Display`/`Debug`.
//! - `new` takes exactly `T`; `from_value` widens to any value-preserving
//!   source; `from_parts` builds from multi-argument bundles; `set`
//!   reassigns under the same rules.
//! - [`Admits`] mirrors the admission rules as a probe-able trait, so tests
//!   can assert a source is *not* accepted.
//! - Comparison, hashing, cloning and default forward to `T` with no bound
//!   on the tag: wrapping does not change a type's trait shape.
//! - Zero-cost: `#[repr(transparent)]` over `T`.
//!
//! ## Usage
//!
//! ```rust
//! use cleat::strong::{Strong, StrongTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct MetersTag;
//! impl StrongTag for MetersTag { const NAME: &'static str = "Meters"; }
//!
//! type Meters = Strong<i32, MetersTag>;
//!
//! let m = Meters::from_value(120_i16);
//! assert_eq!(*m.get(), 120);
//! assert_eq!(format!("{}", m), "Meters(120)");
//! ```

use cleat_core::construct::FromParts;

/// A trait to tag strong typedefs with a name for debugging and display
/// purposes.
///
/// # Examples
///
/// ```rust
/// # use cleat::strong::StrongTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MyTag;
///
/// impl StrongTag for MyTag {
///     const NAME: &'static str = "MyValue";
/// }
/// ```
pub trait StrongTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed wrapper that binds an underlying value of type `T` to a
/// specific tag type `Tag`.
///
/// Two wrappers over the same `T` with different tags are unrelated types:
/// they cannot be compared, assigned to one another, or passed where the
/// other is expected. The wrapper is `#[repr(transparent)]`, so it has the
/// size, alignment and niches of `T`.
///
/// Construction follows the admission rules described in the
/// [module docs](self): `new` for exactly `T`, [`Strong::from_value`] for
/// value-preserving sources, [`Strong::from_parts`] for argument bundles.
///
/// # Examples
///
/// ```rust
/// # use cleat::strong::{Strong, StrongTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct RowTag;
///
/// impl StrongTag for RowTag {
///     const NAME: &'static str = "Row";
/// }
///
/// type Row = Strong<usize, RowTag>;
///
/// let r = Row::new(5);
/// assert_eq!(*r.get(), 5);
/// ```
#[repr(transparent)]
pub struct Strong<T, Tag> {
    value: T,
    _marker: std::marker::PhantomData<Tag>,
}

impl<T, Tag> Strong<T, Tag> {
    /// Creates a new `Strong` from a value of exactly the underlying type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat::strong::{Strong, StrongTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct MyTag;
    ///
    /// impl StrongTag for MyTag {
    ///     const NAME: &'static str = "MyValue";
    /// }
    ///
    /// type MyValue = Strong<i64, MyTag>;
    ///
    /// const FIVE: MyValue = MyValue::new(5);
    /// assert_eq!(*FIVE.get(), 5);
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: std::marker::PhantomData,
        }
    }

    /// Creates a new `Strong` from any source the underlying type can be
    /// built from without loss.
    ///
    /// The bound `T: From<A>` is the admission rule: between primitives the
    /// standard library provides `From` exactly for value-preserving
    /// conversions, so a narrowing source (say `u32` toward `i32`) simply
    /// does not satisfy the bound. Tags that want lossy sources opt in via
    /// [`AllowLossy`](crate::capability::AllowLossy) and
    /// [`from_lossy`](Strong::from_lossy).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat::strong::{Strong, StrongTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct MyTag;
    ///
    /// impl StrongTag for MyTag {
    ///     const NAME: &'static str = "MyValue";
    /// }
    ///
    /// type MyValue = Strong<i32, MyTag>;
    ///
    /// let widened = MyValue::from_value(7_i16);
    /// assert_eq!(*widened.get(), 7);
    /// ```
    #[inline(always)]
    pub fn from_value<A>(value: A) -> Self
    where
        T: From<A>,
    {
        Self::new(T::from(value))
    }

    /// Creates a new `Strong` from a bundle of constructor arguments.
    ///
    /// Bundles are admitted on constructibility alone ([`FromParts`]); no
    /// narrowing check applies, since single-value conversion rules do not
    /// generalize to multi-argument construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat::strong::{Strong, StrongTag};
    ///
    /// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    /// struct LabelTag;
    ///
    /// impl StrongTag for LabelTag {
    ///     const NAME: &'static str = "Label";
    /// }
    ///
    /// type Label = Strong<String, LabelTag>;
    ///
    /// let ruler = Label::from_parts((4_usize, '-'));
    /// assert_eq!(ruler.get(), "----");
    /// ```
    #[inline(always)]
    pub fn from_parts<P>(parts: P) -> Self
    where
        T: FromParts<P>,
    {
        Self::new(T::from_parts(parts))
    }

    /// Returns a shared reference to the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat::strong::{Strong, StrongTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct MyTag;
    ///
    /// impl StrongTag for MyTag {
    ///     const NAME: &'static str = "MyValue";
    /// }
    ///
    /// type MyValue = Strong<i32, MyTag>;
    ///
    /// let v = MyValue::new(9);
    /// assert_eq!(*v.get(), 9);
    /// ```
    #[inline(always)]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the underlying value.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the wrapper and returns the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat::strong::{Strong, StrongTag};
    ///
    /// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    /// struct LabelTag;
    ///
    /// impl StrongTag for LabelTag {
    ///     const NAME: &'static str = "Label";
    /// }
    ///
    /// type Label = Strong<String, LabelTag>;
    ///
    /// let l = Label::from_value("quay");
    /// let inner: String = l.into_inner();
    /// assert_eq!(inner, "quay");
    /// ```
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Reassigns the underlying value from a value-preserving source.
    ///
    /// Same admission rule as [`Strong::from_value`]. Lossy reassignment is
    /// available as [`set_lossy`](Strong::set_lossy) on tags that opt in.
    #[inline]
    pub fn set<A>(&mut self, value: A)
    where
        T: From<A>,
    {
        self.value = T::from(value);
    }

    /// Moves the underlying value out, leaving `T::default()` behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat::strong::{Strong, StrongTag};
    ///
    /// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    /// struct LabelTag;
    ///
    /// impl StrongTag for LabelTag {
    ///     const NAME: &'static str = "Label";
    /// }
    ///
    /// type Label = Strong<String, LabelTag>;
    ///
    /// let mut l = Label::from_value("berth");
    /// let inner = l.take();
    /// assert_eq!(inner, "berth");
    /// assert_eq!(l.get(), "");
    /// ```
    #[inline]
    pub fn take(&mut self) -> T
    where
        T: Default,
    {
        std::mem::take(&mut self.value)
    }

    /// Replaces the underlying value, returning the previous one.
    #[inline]
    pub fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }
}

/// The admission relation, probe-able at compile time.
///
/// `Strong<T, Tag>: Admits<Parts>` holds exactly when the wrapper accepts
/// the argument bundle `Parts` through [`Strong::from_parts`] (and, for
/// one-element bundles, [`Strong::from_value`]). Combined with
/// [`satisfies!`](crate::satisfies), this turns "this constructor must
/// not exist" into a testable assertion instead of a compile error.
///
/// # Examples
///
/// ```rust
/// use cleat::satisfies;
/// use cleat::strong::{Admits, Strong, StrongTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct WidthTag;
/// impl StrongTag for WidthTag { const NAME: &'static str = "Width"; }
///
/// type Width = Strong<i32, WidthTag>;
///
/// assert!(satisfies!(Width: Admits<(i16,)>));
/// assert!(!satisfies!(Width: Admits<(u32,)>)); // narrowing source withheld
/// ```
pub trait Admits<Parts> {}

impl<T, Tag, Parts> Admits<Parts> for Strong<T, Tag> where T: FromParts<Parts> {}

impl<T, Tag> Clone for Strong<T, Tag>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T, Tag> Copy for Strong<T, Tag> where T: Copy {}

impl<T, Tag> PartialEq for Strong<T, Tag>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T, Tag> Eq for Strong<T, Tag> where T: Eq {}

impl<T, Tag> PartialOrd for Strong<T, Tag>
where
    T: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T, Tag> Ord for Strong<T, Tag>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T, Tag> std::hash::Hash for Strong<T, Tag>
where
    T: std::hash::Hash,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, Tag> Default for Strong<T, Tag>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, Tag> std::fmt::Debug for Strong<T, Tag>
where
    T: std::fmt::Debug,
    Tag: StrongTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", Tag::NAME, self.value)
    }
}

impl<T, Tag> std::fmt::Display for Strong<T, Tag>
where
    T: std::fmt::Display,
    Tag: StrongTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", Tag::NAME, self.value)
    }
}

// Wrapping must not change layout; checked for a spread of underlying
// types, including the niche of a pointer-like payload.
const _: () = {
    enum LayoutTag {}

    assert!(std::mem::size_of::<Strong<bool, LayoutTag>>() == std::mem::size_of::<bool>());
    assert!(std::mem::size_of::<Strong<i32, LayoutTag>>() == std::mem::size_of::<i32>());
    assert!(std::mem::size_of::<Strong<f64, LayoutTag>>() == std::mem::size_of::<f64>());
    assert!(std::mem::size_of::<Strong<String, LayoutTag>>() == std::mem::size_of::<String>());
    assert!(
        std::mem::size_of::<Strong<Strong<u8, LayoutTag>, LayoutTag>>()
            == std::mem::size_of::<u8>()
    );
    assert!(std::mem::align_of::<Strong<i64, LayoutTag>>() == std::mem::align_of::<i64>());
    assert!(std::mem::align_of::<Strong<String, LayoutTag>>() == std::mem::align_of::<String>());
    assert!(
        std::mem::size_of::<Option<Strong<Box<u8>, LayoutTag>>>()
            == std::mem::size_of::<Box<u8>>()
    );
};
