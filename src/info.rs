use linked_hash_map::LinkedHashMap;
use std::str::FromStr;

/// The INFO column of a data line as `key=value` pairs.
///
/// Segments without an `=` (flags) are dropped. When a key repeats, the last
/// occurrence wins.
#[derive(Debug, PartialEq)]
pub struct InfoFields {
    entries: LinkedHashMap<String, String>,
}

impl InfoFields {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }
}

impl FromStr for InfoFields {
    type Err = anyhow::Error;

    fn from_str(info_str: &str) -> anyhow::Result<Self> {
        let mut entries = LinkedHashMap::new();
        for pair in info_str.split(';') {
            // values may contain `=` themselves, split on the first only
            if let Some(eq_index) = pair.find('=') {
                let (key, value) = pair.split_at(eq_index);
                entries.insert(key.to_string(), value[1..].to_string());
            }
        }
        Ok(InfoFields { entries })
    }
}
