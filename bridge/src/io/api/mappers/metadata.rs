//! Metadata conversion shared by every mapper that carries a `metadata` field.
use std::collections::HashMap;

/// Copies an optional key/value mapping into an owned map.
///
/// Absent metadata becomes an empty map, so API consumers can rely on the
/// field always being present.
pub fn to_hash_map<I, K, V>(source: Option<I>) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    source
        .map(|entries| {
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect()
        })
        .unwrap_or_default()
}
