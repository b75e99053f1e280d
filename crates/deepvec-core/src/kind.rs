//! The [`Kind`] descriptor, the [`Element`] capability trait, and the
//! scalar declaration macros.

/// How a type participates in the ownership protocol.
///
/// Every element type declares exactly one kind via [`Element::KIND`]. The
/// kind is a monomorphization-time constant, so containers can compile out
/// the release walk for scalar elements entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Trivial type, cheap enough to pass around by value.
    ScalarSmall,
    /// Trivial type declared large, signalling that callers should prefer
    /// handing it around by reference over copying it by value. Under
    /// monomorphization both scalar kinds behave identically inside a
    /// container; the distinction is declarative.
    ScalarLarge,
    /// Recursively owns heap resources (typically a nested container).
    /// Copy must be deep, free must be deep, and nullify must reset to
    /// canonical-empty without releasing.
    OwningComposite,
}

impl Kind {
    /// Whether this kind's free and nullify operations are no-ops.
    pub const fn is_scalar(self) -> bool {
        matches!(self, Kind::ScalarSmall | Kind::ScalarLarge)
    }
}

/// The capability triad every element type must supply.
///
/// # Contract
///
/// An owning-composite value must, at all times, be either *live-owning* or
/// exactly *canonical-empty* — never a dangling intermediate. On top of
/// that:
///
/// - [`deep_copy`](Element::deep_copy) returns a recursively independent
///   duplicate sharing no storage with `self` at any nesting depth.
/// - [`deep_free`](Element::deep_free) recursively releases everything the
///   value owns, then resets it to canonical-empty. It must be idempotent
///   on canonical-empty values and must leave the value safe to drop.
/// - [`nullify`](Element::nullify) resets the value to canonical-empty
///   *without* releasing anything. It is only correct to call on a value
///   whose ownership has already been transferred elsewhere; on a
///   live-owning value it leaks.
/// - Values must be relocatable by raw byte copy: no pointers into their
///   own storage. Ownership is expressed as pointers to separately
///   allocated storage, which is what lets a container reallocate its
///   backing buffer with a plain byte move.
///
/// Scalar types get the trivial triad (bitwise copy, no-op free/nullify)
/// from [`scalar_small!`] or [`scalar_large!`].
pub trait Element: Sized {
    /// The ownership kind of this type.
    const KIND: Kind;

    /// Produce a recursively independent duplicate of `self`.
    fn deep_copy(&self) -> Self;

    /// Recursively release everything `self` owns, then reset `self` to
    /// canonical-empty. Idempotent on canonical-empty.
    fn deep_free(&mut self);

    /// Reset `self` to canonical-empty without releasing anything.
    ///
    /// For use after the value's ownership has been relocated elsewhere.
    fn nullify(&mut self);
}

/// Marker for the scalar kinds.
///
/// Gates the container operations that are only offered for trivial
/// element types: the copy-returning accessor and growth-by-resize.
/// `Default` supplies the fill value for resize growth.
pub trait Scalar: Element + Copy + Default {}

/// Declare one or more `Copy + Default` types as scalar-small elements.
///
/// Derives the trivial [`Element`] triad (bitwise copy, no-op free and
/// nullify) plus the [`Scalar`] marker.
///
/// ```
/// #[derive(Clone, Copy, Default, PartialEq, Debug)]
/// struct Cell(u16);
///
/// deepvec_core::scalar_small!(Cell);
/// ```
#[macro_export]
macro_rules! scalar_small {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::kind::Element for $t {
            const KIND: $crate::kind::Kind = $crate::kind::Kind::ScalarSmall;

            #[inline]
            fn deep_copy(&self) -> Self {
                *self
            }

            #[inline]
            fn deep_free(&mut self) {}

            #[inline]
            fn nullify(&mut self) {}
        }

        impl $crate::kind::Scalar for $t {}
    )+};
}

/// Declare one or more `Copy + Default` types as scalar-large elements.
///
/// Identical derivation to [`scalar_small!`]; the kind constant records
/// that the type was declared large (see [`Kind::ScalarLarge`]).
///
/// ```
/// #[derive(Clone, Copy, Default, PartialEq, Debug)]
/// struct Range {
///     start: i64,
///     end: i64,
/// }
///
/// deepvec_core::scalar_large!(Range);
/// ```
#[macro_export]
macro_rules! scalar_large {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::kind::Element for $t {
            const KIND: $crate::kind::Kind = $crate::kind::Kind::ScalarLarge;

            #[inline]
            fn deep_copy(&self) -> Self {
                *self
            }

            #[inline]
            fn deep_free(&mut self) {}

            #[inline]
            fn nullify(&mut self) {}
        }

        impl $crate::kind::Scalar for $t {}
    )+};
}

// Primitive scalar declarations, so users never have to.
scalar_small!(i8, i16, i32, i64, i128, isize);
scalar_small!(u8, u16, u32, u64, u128, usize);
scalar_small!(f32, f64, bool, char, ());

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Default, PartialEq, Debug)]
    struct Pair {
        a: u64,
        b: u64,
    }

    scalar_large!(Pair);

    /// An owning-composite test type: a boxed payload with an explicit
    /// canonical-empty state (`None`).
    #[derive(Default, PartialEq, Debug)]
    struct Node(Option<Box<i32>>);

    impl Element for Node {
        const KIND: Kind = Kind::OwningComposite;

        fn deep_copy(&self) -> Self {
            Node(self.0.clone())
        }

        fn deep_free(&mut self) {
            self.0 = None;
        }

        fn nullify(&mut self) {
            if let Some(b) = self.0.take() {
                std::mem::forget(b);
            }
        }
    }

    #[test]
    fn primitive_kinds_are_scalar_small() {
        assert_eq!(<i32 as Element>::KIND, Kind::ScalarSmall);
        assert_eq!(<f64 as Element>::KIND, Kind::ScalarSmall);
        assert!(<u8 as Element>::KIND.is_scalar());
    }

    #[test]
    fn scalar_large_macro_records_kind() {
        assert_eq!(<Pair as Element>::KIND, Kind::ScalarLarge);
        assert!(<Pair as Element>::KIND.is_scalar());
    }

    #[test]
    fn owning_composite_is_not_scalar() {
        assert!(!<Node as Element>::KIND.is_scalar());
    }

    #[test]
    fn scalar_triad_is_trivial() {
        let mut x = 42i32;
        assert_eq!(x.deep_copy(), 42);
        x.deep_free();
        assert_eq!(x, 42);
        x.nullify();
        assert_eq!(x, 42);
    }

    #[test]
    fn scalar_large_triad_is_trivial() {
        let mut p = Pair { a: 1, b: 2 };
        assert_eq!(p.deep_copy(), p);
        p.deep_free();
        assert_eq!(p, Pair { a: 1, b: 2 });
    }

    #[test]
    fn composite_deep_copy_is_independent() {
        let original = Node(Some(Box::new(7)));
        let mut copy = original.deep_copy();
        assert_eq!(copy, original);
        **copy.0.as_mut().unwrap() = 9;
        assert_eq!(original, Node(Some(Box::new(7))));
    }

    #[test]
    fn composite_deep_free_reaches_canonical_empty_and_is_idempotent() {
        let mut n = Node(Some(Box::new(7)));
        n.deep_free();
        assert_eq!(n, Node(None));
        n.deep_free();
        assert_eq!(n, Node(None));
    }

    #[test]
    fn nullify_on_canonical_empty_is_a_no_op() {
        let mut n = Node(None);
        n.nullify();
        assert_eq!(n, Node(None));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scalar_deep_copy_is_identity(x in any::<i64>()) {
                prop_assert_eq!(x.deep_copy(), x);
            }

            #[test]
            fn scalar_free_and_nullify_preserve_value(mut x in any::<u32>()) {
                let before = x;
                x.deep_free();
                x.nullify();
                prop_assert_eq!(x, before);
            }

            #[test]
            fn composite_copy_then_free_leaves_source_intact(v in any::<i32>()) {
                let source = Node(Some(Box::new(v)));
                let mut copy = source.deep_copy();
                copy.deep_free();
                prop_assert_eq!(source, Node(Some(Box::new(v))));
            }
        }
    }
}
