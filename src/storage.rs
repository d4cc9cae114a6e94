//! Local Storage Helpers
//!
//! JSON id-array persistence for expansion state. Unparsable or missing
//! entries fall back to empty sets.

use std::collections::HashSet;

/// Encode an id set as a JSON array (sorted for stable output)
pub fn encode_ids(ids: &HashSet<u32>) -> String {
    let mut sorted: Vec<u32> = ids.iter().copied().collect();
    sorted.sort_unstable();
    serde_json::to_string(&sorted).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a JSON id array; None on parse failure
pub fn decode_ids(raw: &str) -> Option<HashSet<u32>> {
    serde_json::from_str::<Vec<u32>>(raw)
        .ok()
        .map(|ids| ids.into_iter().collect())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read an id set from local storage; empty on missing or invalid data
pub fn load_id_set(key: &str) -> HashSet<u32> {
    let Some(storage) = local_storage() else {
        return HashSet::new();
    };
    match storage.get_item(key) {
        Ok(Some(raw)) => decode_ids(&raw).unwrap_or_default(),
        _ => HashSet::new(),
    }
}

/// Write an id set to local storage; write failures are ignored
pub fn save_id_set(key: &str, ids: &HashSet<u32>) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, &encode_ids(ids));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round() {
        let ids: HashSet<u32> = [3, 1, 2].into_iter().collect();
        let decoded = decode_ids(&encode_ids(&ids)).unwrap();
        assert_eq!(decoded, ids);
    }

    #[test]
    fn test_encode_is_sorted() {
        let ids: HashSet<u32> = [9, 4, 7].into_iter().collect();
        assert_eq!(encode_ids(&ids), "[4,7,9]");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_ids("not json").is_none());
        assert!(decode_ids(r#"{"a":1}"#).is_none());
        assert!(decode_ids(r#"["x"]"#).is_none());
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode_ids("[]").unwrap(), HashSet::new());
    }
}
