use std::hash::Hash;
use std::marker::PhantomData;

use crate::enumeration::Enum;
use crate::member::ValueHolder;

/// A staged accumulator of vocabulary members, finalized into an [`Enum`].
///
/// [`Builder::add`] returns the member it records, so a declaration site can
/// register a member and bind a named handle in one expression:
///
/// ```
/// use vocab::{Builder, Member};
///
/// let mut builder = Builder::new();
/// let on = builder.add(Member::new("on"));
/// let off = builder.add(Member::new("off"));
/// let states = builder.build();
///
/// assert!(states.contains(&on));
/// assert!(states.contains(&off));
/// ```
///
/// Finalization consumes the builder, so no member can be added once
/// [`Builder::build`] has run.
pub struct Builder<V, T> {
    members: Vec<V>,
    _payload: PhantomData<T>,
}

impl<V: ValueHolder<T> + Eq + Hash + Clone, T> Builder<V, T> {
    pub fn new() -> Builder<V, T> {
        Builder {
            members: Vec::new(),
            _payload: PhantomData,
        }
    }

    /// Records a member and returns it, so the call site can bind it to a name.
    ///
    /// Registering a member equal to one already recorded is tolerated (the
    /// duplicates collapse in the finalized enumeration) but logged.
    pub fn add(&mut self, member: V) -> V {
        if self.members.contains(&member) {
            tracing::warn!("duplicated member : {}", member);
        }
        self.members.push(member.clone());
        member
    }

    /// Consumes the builder, snapshotting all recorded members into an [`Enum`].
    pub fn build(self) -> Enum<V, T> {
        Enum::new(self.members)
    }
}

impl<V: ValueHolder<T> + Eq + Hash + Clone, T> Default for Builder<V, T> {
    fn default() -> Self {
        Self::new()
    }
}
