//! Sorted views over unordered maps.
//!
//! A `HashMap` has no stable iteration order, so iterating it twice for display, hashing, diffing
//! or JSON output may give two different answers. The sequences in this crate snapshot the
//! entries of a map into a `Vec` of pairs and sort them explicitly, either by key
//! ([`SortedMap`]) or by value ([`SortedByValue`]). The order of a sequence only changes when it is
//! sorted, and it is exactly the order that is iterated and written to JSON.
//!
//! # Examples
//!
//! ```
//! use sortedmap::SortedMap;
//! use std::collections::HashMap;
//!
//! let mut map = HashMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//! map.insert("c", 3);
//!
//! let sorted = SortedMap::from_map(map);
//! assert_eq!(sorted.keys().collect::<Vec<_>>(), [&"a", &"b", &"c"]);
//! assert_eq!(sorted.to_json().unwrap(), r#"{"a":1,"b":2,"c":3}"#);
//! ```

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

mod iter;
mod pair;
mod total;
pub mod json;
pub mod sorted_by_value;
pub mod sorted_map;

pub use self::iter::{IntoIter, Iter, Keys, Values};
pub use self::pair::Pair;
pub use self::sorted_by_value::SortedByValue;
pub use self::sorted_map::SortedMap;
pub use self::total::TotalOrd;
