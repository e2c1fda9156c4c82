use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;

use thiserror::Error;
use vocab_collections::Set;

use crate::member::ValueHolder;
use crate::utils::disp_iter;

/// Raised when parsing a payload that no member of the enumeration wraps.
///
/// Carries the candidate member built from the rejected payload, so the caller
/// can still inspect or report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a member of the enumeration")]
pub struct NotAMember<V>(pub V);

/// An immutable, closed collection of vocabulary members.
///
/// Once constructed, no member can be added: construction (directly through
/// [`Enum::new`] or through a [`Builder`](crate::Builder)) copies the member
/// list, so an `Enum` is safe to share for read-only use.
pub struct Enum<V, T> {
    members: Set<V>,
    _payload: PhantomData<T>,
}

impl<V: ValueHolder<T> + Eq + Hash + Clone, T> Enum<V, T> {
    /// Constructs and finalizes an enumeration from the given members.
    /// Duplicated members collapse to one.
    pub fn new(members: impl IntoIterator<Item = V>) -> Enum<V, T> {
        Enum {
            members: members.into_iter().collect(),
            _payload: PhantomData,
        }
    }

    pub fn contains(&self, member: &V) -> bool {
        self.members.contains(member)
    }

    /// Converts a raw payload into the matching member of the enumeration.
    ///
    /// A candidate member is built from the payload and tested for membership,
    /// which supports arbitrary payload types without a reverse index. On
    /// failure the candidate travels with the error.
    pub fn parse(&self, value: T) -> Result<V, NotAMember<V>> {
        let candidate = V::wrap(value);
        if self.contains(&candidate) {
            Ok(candidate)
        } else {
            Err(NotAMember(candidate))
        }
    }

    /// All members of the enumeration, in unspecified order.
    pub fn members(&self) -> Vec<V> {
        self.members.members()
    }

    /// The payload of each member, in unspecified order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.members.iter().map(|m| m.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<V: Clone, T> Clone for Enum<V, T> {
    fn clone(&self) -> Self {
        Enum {
            members: self.members.clone(),
            _payload: PhantomData,
        }
    }
}

impl<V: Eq + Hash + Debug, T> Debug for Enum<V, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.members)
    }
}

impl<V: Eq + Hash + Display, T> Display for Enum<V, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        disp_iter(f, self.members.iter(), ", ")
    }
}
