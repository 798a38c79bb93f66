use proptest::prelude::*;

use aurid_types::{IdentityHash, ProfileId, Timestamp};

proptest! {
    /// IdentityHash roundtrip: new -> as_bytes produces the same bytes.
    #[test]
    fn identity_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = IdentityHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// IdentityHash::is_zero is true only for all-zero bytes.
    #[test]
    fn identity_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = IdentityHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// IdentityHash JSON roundtrip.
    #[test]
    fn identity_hash_json_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = IdentityHash::new(bytes);
        let encoded = serde_json::to_string(&hash).unwrap();
        let decoded: IdentityHash = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, hash);
    }

    /// ProfileId display is stable hex of the full id.
    #[test]
    fn profile_id_display_hex(bytes in prop::array::uniform16(0u8..)) {
        let id = ProfileId::new(bytes);
        let shown = id.to_string();
        prop_assert_eq!(shown.len(), 32);
        prop_assert!(shown.chars().all(|c| c.is_ascii_hexdigit()));
    }

    /// Timestamp ordering matches the underlying seconds.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Expiry arithmetic: a timestamp plus a TTL is never before the original.
    #[test]
    fn plus_secs_monotonic(start in 0u64..u64::MAX, ttl in 0u64..1_000_000u64) {
        let t = Timestamp::new(start);
        prop_assert!(t.plus_secs(ttl) >= t);
    }
}
