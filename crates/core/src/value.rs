use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::FlagError;

/// A value that a command-line flag can be parsed into and rendered from.
///
/// Flag frameworks hold values as `Box<dyn FlagValue>` and only need three
/// capabilities:
///
/// - [`FlagValue::set`] parses a user-supplied argument, replacing the
///   current value. On error the current value is left as it was.
/// - [`FlagValue::get`] returns a snapshot of the current value.
/// - [`fmt::Display`] renders the canonical text form, which `set` accepts
///   back.
///
/// `set` takes `&mut self`; a value parsed once at startup can then be
/// shared read-only across threads.
pub trait FlagValue: fmt::Display {
    fn set(&mut self, text: &str) -> Result<(), FlagError>;

    fn get(&self) -> FlagContents;
}

/// Owned snapshot of a flag value, as returned by [`FlagValue::get`].
///
/// Serializes as a JSON array (list) or object (map). Map entries are kept
/// in key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FlagContents {
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl FlagContents {
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FlagContents::List(items) => Some(items),
            FlagContents::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            FlagContents::Map(entries) => Some(entries),
            FlagContents::List(_) => None,
        }
    }
}
