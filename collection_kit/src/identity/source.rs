//! Read-only view of the containers accepted by the comparator.

/// A container that can be viewed as a contiguous ordered sequence.
///
/// `None` views as the empty sequence.
pub trait AsSequence {
    /// Element type.
    type Item;

    /// Borrow the elements in order.
    fn as_sequence(&self) -> &[Self::Item];
}

impl<T> AsSequence for [T] {
    type Item = T;

    fn as_sequence(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsSequence for [T; N] {
    type Item = T;

    fn as_sequence(&self) -> &[T] {
        self
    }
}

impl<T> AsSequence for Vec<T> {
    type Item = T;

    fn as_sequence(&self) -> &[T] {
        self
    }
}

impl<T> AsSequence for Box<[T]> {
    type Item = T;

    fn as_sequence(&self) -> &[T] {
        self
    }
}

impl<S: AsSequence + ?Sized> AsSequence for &S {
    type Item = S::Item;

    fn as_sequence(&self) -> &[S::Item] {
        (**self).as_sequence()
    }
}

impl<S: AsSequence> AsSequence for Option<S> {
    type Item = S::Item;

    fn as_sequence(&self) -> &[S::Item] {
        self.as_ref().map_or(&[][..], AsSequence::as_sequence)
    }
}
