use core::fmt;
use core::mem;

/// Types with a built-in "no value" state that an optional wrapper can
/// borrow instead of carrying its own discriminant.
///
/// The contract is behavioral, not safety-critical: [`IntrusiveUnset::unset`]
/// must produce a value for which [`IntrusiveUnset::is_unset`] answers
/// true, and every properly held value must answer false. A type that
/// breaks this makes [`PackedOption`] give wrong answers, nothing worse.
///
/// [`crate::Poly`] opts in by reserving its null dispatch-table state.
pub trait IntrusiveUnset {
    /// The distinguished value representing absence.
    fn unset() -> Self;

    /// Returns true iff this value is the distinguished absent one.
    fn is_unset(&self) -> bool;
}

/// An optional that stores absence inside the value it wraps.
///
/// For any `T` implementing [`IntrusiveUnset`] this is guaranteed to be
/// exactly as large as `T` itself, which is the point of the exercise:
///
/// ```
/// use core::any::Any;
/// use core::mem::size_of;
/// use polybox::{PackedOption, Poly};
///
/// assert_eq!(
///     size_of::<PackedOption<Poly<dyn Any>>>(),
///     size_of::<Poly<dyn Any>>(),
/// );
/// ```
///
/// The API mirrors a pared-down [`Option`]; call
/// [`PackedOption::into_option`] to reach the full combinator set.
///
/// ```
/// use core::any::Any;
/// use polybox::{poly, PackedOption, Poly};
///
/// let mut slot: PackedOption<Poly<dyn Any>> = PackedOption::none();
/// assert!(slot.is_none());
///
/// slot.set(poly!(42u32));
/// assert!(slot.is_some());
/// assert_eq!(slot.as_ref().unwrap().downcast_ref::<u32>(), Some(&42));
///
/// let taken = slot.take();
/// assert!(taken.is_some());
/// assert!(slot.is_none());
/// ```
#[repr(transparent)]
pub struct PackedOption<T: IntrusiveUnset> {
    value: T,
}

impl<T: IntrusiveUnset> PackedOption<T> {
    /// An empty optional.
    pub fn none() -> Self {
        PackedOption { value: T::unset() }
    }

    /// An optional holding `value`.
    ///
    /// `value` must not be the unset sentinel itself; that is checked in
    /// debug builds only.
    pub fn some(value: T) -> Self {
        debug_assert!(!value.is_unset());
        PackedOption { value }
    }

    /// Returns true if no value is present.
    pub fn is_none(&self) -> bool {
        self.value.is_unset()
    }

    /// Returns true if a value is present.
    pub fn is_some(&self) -> bool {
        !self.value.is_unset()
    }

    /// Borrows the value, if present.
    pub fn as_ref(&self) -> Option<&T> {
        if self.value.is_unset() {
            None
        } else {
            Some(&self.value)
        }
    }

    /// Mutably borrows the value, if present.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        if self.value.is_unset() {
            None
        } else {
            Some(&mut self.value)
        }
    }

    /// Stores `value`, dropping any previous one, and borrows it back.
    pub fn set(&mut self, value: T) -> &mut T {
        debug_assert!(!value.is_unset());
        self.value = value;
        &mut self.value
    }

    /// Stores `value` and returns the previous one, if any.
    pub fn replace(&mut self, value: T) -> Option<T> {
        debug_assert!(!value.is_unset());
        let old = mem::replace(&mut self.value, value);
        if old.is_unset() {
            None
        } else {
            Some(old)
        }
    }

    /// Removes and returns the value, if any, leaving the optional empty.
    pub fn take(&mut self) -> Option<T> {
        let old = mem::replace(&mut self.value, T::unset());
        if old.is_unset() {
            None
        } else {
            Some(old)
        }
    }

    /// Drops the value, if any, leaving the optional empty.
    pub fn reset(&mut self) {
        self.value = T::unset();
    }

    /// Converts into a plain [`Option`].
    pub fn into_option(self) -> Option<T> {
        if self.value.is_unset() {
            None
        } else {
            Some(self.value)
        }
    }
}

impl<T: IntrusiveUnset> Default for PackedOption<T> {
    fn default() -> Self {
        PackedOption::none()
    }
}

impl<T: IntrusiveUnset + Clone> Clone for PackedOption<T> {
    fn clone(&self) -> Self {
        PackedOption {
            value: self.value.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
    }
}

impl<T: IntrusiveUnset> From<Option<T>> for PackedOption<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => PackedOption::some(value),
            None => PackedOption::none(),
        }
    }
}

impl<T: IntrusiveUnset> From<PackedOption<T>> for Option<T> {
    fn from(value: PackedOption<T>) -> Self {
        value.into_option()
    }
}

impl<T: IntrusiveUnset + fmt::Debug> fmt::Debug for PackedOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ref() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: IntrusiveUnset + PartialEq> PartialEq for PackedOption<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_ref(), other.as_ref()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IntrusiveUnset, PackedOption};

    /// A reserved-value integer: `usize::MAX` marks absence.
    #[derive(Clone, Debug, PartialEq)]
    struct Slot(usize);

    impl IntrusiveUnset for Slot {
        fn unset() -> Self {
            Slot(usize::MAX)
        }

        fn is_unset(&self) -> bool {
            self.0 == usize::MAX
        }
    }

    #[test]
    fn test_same_size() {
        assert_eq!(
            core::mem::size_of::<PackedOption<Slot>>(),
            core::mem::size_of::<Slot>()
        );
    }

    #[test]
    fn test_round_trip() {
        let mut slot = PackedOption::none();
        assert!(slot.is_none());
        assert_eq!(slot.take(), None);

        slot.set(Slot(3));
        assert!(slot.is_some());
        assert_eq!(slot.as_ref(), Some(&Slot(3)));

        assert_eq!(slot.replace(Slot(4)), Some(Slot(3)));
        assert_eq!(slot.take(), Some(Slot(4)));
        assert!(slot.is_none());
    }

    #[test]
    fn test_reset() {
        let mut slot = PackedOption::some(Slot(1));
        slot.reset();
        assert!(slot.is_none());
    }

    #[test]
    fn test_option_interop() {
        let slot = PackedOption::from(Some(Slot(9)));
        assert_eq!(slot.into_option(), Some(Slot(9)));

        let slot: PackedOption<Slot> = None.into();
        assert_eq!(slot.into_option(), None);
    }

    #[test]
    fn test_debug() {
        let mut slot = PackedOption::some(Slot(1));
        assert_eq!(format!("{slot:?}"), "Some(Slot(1))");
        slot.reset();
        assert_eq!(format!("{slot:?}"), "None");
    }
}
