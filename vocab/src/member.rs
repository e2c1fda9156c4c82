use std::fmt::{Debug, Display, Formatter};

/// The capability required of vocabulary member types: wrapping a payload,
/// exposing it, and rendering as text.
///
/// [`Member`] implements it directly; domain vocabularies typically define a
/// newtype around a `Member` and delegate both methods to it.
pub trait ValueHolder<T>: Display {
    /// Constructs the member wrapping the given payload.
    fn wrap(value: T) -> Self;

    /// The wrapped payload.
    fn value(&self) -> &T;
}

/// A value-holder wrapping exactly one payload.
///
/// Two members are equal iff their payloads are equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Member<T> {
    value: T,
}

impl<T> Member<T> {
    pub fn new(value: T) -> Member<T> {
        Member { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> From<T> for Member<T> {
    fn from(value: T) -> Self {
        Member::new(value)
    }
}

impl<T: Display> Display for Member<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T: Debug> Debug for Member<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

impl<T: Display> ValueHolder<T> for Member<T> {
    fn wrap(value: T) -> Self {
        Member::new(value)
    }

    fn value(&self) -> &T {
        &self.value
    }
}
