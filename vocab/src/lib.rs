//! Closed, named vocabularies over arbitrary payload types.
//!
//! A vocabulary is a fixed collection of members, each wrapping one comparable
//! payload (a [`Member`] or any newtype satisfying [`ValueHolder`]). Members are
//! accumulated through a [`Builder`] and finalized into an immutable [`Enum`],
//! which then answers membership queries and safely parses raw payloads back
//! into members.
//!
//! ```
//! use vocab::{Builder, Member};
//!
//! let mut letters = Builder::new();
//! let a = letters.add(Member::new("a"));
//! let b = letters.add(Member::new("b"));
//! let letters = letters.build();
//!
//! assert!(letters.contains(&a));
//! assert_eq!(letters.parse("b"), Ok(b));
//! assert!(letters.parse("z").is_err());
//! ```

mod builder;
mod enumeration;
mod member;
pub(crate) mod utils;

pub use builder::Builder;
pub use enumeration::{Enum, NotAMember};
pub use member::{Member, ValueHolder};
