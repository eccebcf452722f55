use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlagError;
use crate::escape::tokenize;
use crate::list::LIST_DELIMITER;
use crate::value::{FlagContents, FlagValue};

/// Separates a key from its value inside one pair.
pub const PAIR_SEPARATOR: char = ':';

/// A `key:value` map flag, e.g. `--labels=env:prod,owner:ops`.
///
/// Pairs are split like a [`crate::StringList`], so `\,` puts a comma in a
/// value. Each pair is then split on its first `:`; keys cannot contain a
/// colon, values can. A repeated key keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringMap(HashMap<String, String>);

impl StringMap {
    pub fn new(entries: HashMap<String, String>) -> Self {
        StringMap(entries)
    }

    pub fn parse(text: &str) -> Result<Self, FlagError> {
        let mut entries = HashMap::new();
        for pair in tokenize(text, LIST_DELIMITER) {
            let Some((key, value)) = pair.split_once(PAIR_SEPARATOR) else {
                return Err(FlagError::MalformedPair { pair });
            };
            entries.insert(key.to_owned(), value.to_owned());
        }
        Ok(StringMap(entries))
    }

    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl FlagValue for StringMap {
    fn set(&mut self, text: &str) -> Result<(), FlagError> {
        *self = StringMap::parse(text)?;
        Ok(())
    }

    fn get(&self) -> FlagContents {
        FlagContents::Map(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl fmt::Display for StringMap {
    /// Only commas in values are escaped; backslashes are written as is,
    /// so values containing them do not survive a round trip. Pairs are
    /// sorted by their rendered form so output does not depend on hash order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .0
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}{}{}",
                    k,
                    PAIR_SEPARATOR,
                    v.replace(LIST_DELIMITER, "\\,")
                )
            })
            .collect();
        parts.sort();
        f.write_str(&parts.join(&LIST_DELIMITER.to_string()))
    }
}

impl FromStr for StringMap {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StringMap::parse(s)
    }
}

impl From<HashMap<String, String>> for StringMap {
    fn from(entries: HashMap<String, String>) -> Self {
        StringMap(entries)
    }
}

impl From<StringMap> for HashMap<String, String> {
    fn from(map: StringMap) -> Self {
        map.0
    }
}
