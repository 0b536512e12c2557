//! Hashing System - SHA-256 Fingerprints
//!
//! Identical requests and results hash identically across runs and hosts.

use sha2::{Digest, Sha256};
use serde::Serialize;

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Compact JSON with every object's keys in sorted order.
///
/// Relies on `serde_json::Map` being a `BTreeMap` (no `preserve_order`), so a
/// round trip through `Value` sorts struct fields at every depth.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&serde_json::to_value(value)?)
}

/// Fingerprint of a computed result (score, elements, text)
pub fn compute_result_hash<T: Serialize>(result: &T) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(result)?;
    Ok(sha256_hex(canonical.as_bytes()))
}

/// request_hash = sha256(canonical_request + ":" + engine_version)
///
/// Tables are compiled in, so the engine version pins them.
pub fn compute_request_hash(
    request: &impl Serialize,
    engine_version: &str,
) -> Result<String, serde_json::Error> {
    let canonical_request = canonical_json(request)?;
    let combined = format!("{}:{}", canonical_request, engine_version);
    Ok(sha256_hex(combined.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_sorted() {
        let obj = json!({"year": 1990, "day": 10, "month": 5});
        let canonical = canonical_json(&obj).unwrap();
        assert_eq!(canonical, r#"{"day":10,"month":5,"year":1990}"#);
    }

    #[test]
    fn test_canonical_json_sorts_struct_fields_at_depth() {
        use crate::record::{BirthRecord, PersonInput};

        let person = PersonInput::named("민지", BirthRecord::new(1990, 5, 10).with_hour(12));
        let canonical = canonical_json(&vec![person]).unwrap();
        assert_eq!(
            canonical,
            r#"[{"day":10,"hour":12,"month":5,"name":"민지","year":1990}]"#
        );
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_request_hash_depends_on_version() {
        let request = json!({"person_a": {"year": 1990}, "person_b": {"year": 1992}});
        let h1 = compute_request_hash(&request, "1.0.0").unwrap();
        let h2 = compute_request_hash(&request, "1.0.0").unwrap();
        let h3 = compute_request_hash(&request, "1.1.0").unwrap();
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert_eq!(h1.len(), 64);
    }
}
