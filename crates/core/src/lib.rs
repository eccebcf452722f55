//! flagutil-core: list and map values for command-line flags.
//!
//! Both value types parse a single argument with the escaped-delimiter
//! tokenizer in [`escape`] and render back to a canonical form that parses
//! to an equivalent value.
//!
//! # Public API
//!
//! - [`tokenize()`] -- split on a delimiter, honoring `\` escapes
//! - [`StringList`] -- `a,b\,c` style list flag
//! - [`StringMap`] -- `k:v,k2:v2` style map flag
//! - [`FlagValue`] -- the set/get/display capability both implement
//! - [`FlagError`] -- parse error type

pub mod error;
pub mod escape;
pub mod list;
pub mod map;
pub mod value;

pub use error::FlagError;
pub use escape::{escape, join_escaped, tokenize};
pub use list::StringList;
pub use map::StringMap;
pub use value::{FlagContents, FlagValue};
