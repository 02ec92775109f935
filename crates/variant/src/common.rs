//! Common supertypes for variant alternatives.
//!
//! Rust has no subtyping between concrete types and trait objects, so "`T` is
//! a subtype of `C`" is spelled [`Widen<C>`]: a borrow of `T` viewed as `C`.
//! Every `'static` type widens to `dyn Any`, which is what the untyped
//! accessor (`as_any`) relies on. Widening to a trait object is declared with
//! [`impl_widen!`](crate::impl_widen).

use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

/// `Self` can be viewed as the supertype `C` without case analysis.
pub trait Widen<C: ?Sized> {
    fn widen(&self) -> &C;
}

impl<T: Any> Widen<dyn Any> for T {
    #[inline]
    fn widen(&self) -> &(dyn Any + 'static) {
        self
    }
}

/// A sum type whose every alternative widens to `C`.
///
/// The returned reference points at the held value itself: it is the same
/// address a handler sees when matching on `as_ref()`.
pub trait Common<C: ?Sized> {
    fn common(&self) -> &C;
}

/// Implements [`Widen`] from each listed type to a trait-object supertype.
///
/// ```
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// struct Square(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 { self.0 * self.0 }
/// }
///
/// variant::impl_widen!(dyn Shape: Square);
///
/// use variant::Widen;
/// let square = Square(2.0);
/// let shape = Widen::<dyn Shape>::widen(&square);
/// assert_eq!(shape.area(), 4.0);
/// ```
#[macro_export]
macro_rules! impl_widen {
    ($common:ty: $($ty:ty),+ $(,)?) => {
        const _: () = {
            // Inside an alias a bare trait object defaults to `'static`,
            // matching the bound in the impl header.
            type CommonType = $common;
            $(
                impl $crate::Widen<CommonType> for $ty {
                    #[inline]
                    fn widen(&self) -> &CommonType {
                        self
                    }
                }
            )+
        };
    };
}

/// A variant `V` whose alternatives are all bounded by the common type `C`.
///
/// The bound is checked once, at construction; afterwards the value can be
/// read as a `C` without matching, or matched through [`WithCommon::variant`].
pub struct WithCommon<C: ?Sized, V> {
    variant: V,
    common: PhantomData<fn() -> *const C>,
}

impl<C: ?Sized, V: Common<C>> WithCommon<C, V> {
    pub fn new(variant: V) -> Self {
        Self { variant, common: PhantomData }
    }

    /// The held value widened to `C`.
    #[inline]
    pub fn common(&self) -> &C {
        Common::<C>::common(&self.variant)
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    pub fn into_variant(self) -> V {
        self.variant
    }
}

impl<C: ?Sized, V: Common<C>> From<V> for WithCommon<C, V> {
    fn from(variant: V) -> Self {
        Self::new(variant)
    }
}

impl<C: ?Sized, V: Clone> Clone for WithCommon<C, V> {
    fn clone(&self) -> Self {
        Self { variant: self.variant.clone(), common: PhantomData }
    }
}

impl<C: ?Sized, V: Copy> Copy for WithCommon<C, V> {}

impl<C: ?Sized, V: fmt::Debug> fmt::Debug for WithCommon<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WithCommon").field(&self.variant).finish()
    }
}
