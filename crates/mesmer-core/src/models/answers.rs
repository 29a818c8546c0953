use std::collections::BTreeMap;

/// A set of yes/no answers keyed by question id (1 through 36).
///
/// Collected incrementally by the presentation layer, which owns partial
/// sets. The scoring engine requires all 36 ids to be present before it
/// will compute a result, and verifies this itself.
pub type AnswerSet = BTreeMap<u8, bool>;

/// Deserialize helper for an [`AnswerSet`] embedded in a `#[serde(flatten)]`
/// struct. Flatten buffers the outer struct through serde's internal
/// `Content` representation, which surfaces JSON object keys as strings and
/// cannot recover an integer map key on its own. Recovering the `u8` key from
/// its string form keeps the wire shape (`{"1": true, …}`) byte-identical to
/// the default serialization.
pub mod string_keyed {
    use super::BTreeMap;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<u8, bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, value)| {
                key.parse::<u8>()
                    .map(|key| (key, value))
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }
}
