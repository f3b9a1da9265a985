//! Hashable values and the small containers built on them.
//!
//! A [`Dict`] is a chained hash table keyed by [`Value`]. [`CounterDict`]
//! layers occurrence counting with positional provenance on top of it, and
//! [`Set`] is a dict whose values are all [`Value::Null`].

pub mod counter_dict;
pub mod dict;
pub mod error;
pub mod hash;
pub mod linked_list;
pub mod set;
pub mod value;

pub use counter_dict::{CounterDict, CounterEntry};
pub use dict::Dict;
pub use error::{CollectionError, Result};
pub use hash::hash;
pub use linked_list::LinkedList;
pub use set::Set;
pub use value::{Value, ValueKind};
