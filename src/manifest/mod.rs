//! Hash list manifest
//!
//! Parses `group-01/hash_list.txt` into ordered entries.

mod hash_list;

pub use hash_list::*;

