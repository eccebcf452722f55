use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlagError;
use crate::escape::{join_escaped, tokenize};
use crate::value::{FlagContents, FlagValue};

/// Element separator for list flags.
pub const LIST_DELIMITER: char = ',';

/// A comma-separated list flag, e.g. `--cells=zone1,zone2`.
///
/// Write `\,` for a literal comma inside an element and `\\` for a literal
/// backslash. An empty argument is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringList(Vec<String>);

impl StringList {
    pub fn new(items: Vec<String>) -> Self {
        StringList(items)
    }

    /// Parse `text`. Total: every input yields some list.
    pub fn parse(text: &str) -> Self {
        StringList(tokenize(text, LIST_DELIMITER))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl FlagValue for StringList {
    fn set(&mut self, text: &str) -> Result<(), FlagError> {
        *self = StringList::parse(text);
        Ok(())
    }

    fn get(&self) -> FlagContents {
        FlagContents::List(self.0.clone())
    }
}

impl fmt::Display for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_escaped(&self.0, LIST_DELIMITER))
    }
}

impl FromStr for StringList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StringList::parse(s))
    }
}

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        StringList(items)
    }
}

impl From<StringList> for Vec<String> {
    fn from(list: StringList) -> Self {
        list.0
    }
}
