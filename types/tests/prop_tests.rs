use proptest::prelude::*;

use stakeproof_types::{Amount, BlockHash, OutPoint, TxId};

proptest! {
    /// TxId roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn txid_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = TxId::new(bytes);
        prop_assert_eq!(id.as_bytes(), &bytes);
    }

    /// BlockHash::from_slice accepts exactly the bytes it was given.
    #[test]
    fn block_hash_from_slice_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::from_slice(&bytes).unwrap();
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// is_zero is true only for all-zero bytes.
    #[test]
    fn txid_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        prop_assert_eq!(TxId::new(bytes).is_zero(), bytes == [0u8; 32]);
    }

    /// TxId bincode serialization roundtrip.
    #[test]
    fn txid_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = TxId::new(bytes);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: TxId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// OutPoint bincode serialization roundtrip.
    #[test]
    fn outpoint_bincode_roundtrip(bytes in prop::array::uniform32(0u8..), index in 0u32..) {
        let op = OutPoint::new(TxId::new(bytes), index);
        let encoded = bincode::serialize(&op).unwrap();
        let decoded: OutPoint = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, op);
    }

    /// Only the null outpoint is null.
    #[test]
    fn outpoint_null_is_unique(bytes in prop::array::uniform32(0u8..), index in 0u32..) {
        let op = OutPoint::new(TxId::new(bytes), index);
        prop_assert_eq!(op.is_null(), op == OutPoint::null());
    }

    /// Amount ordering matches raw ordering.
    #[test]
    fn amount_ordering(a in 0u64.., b in 0u64..) {
        prop_assert_eq!(Amount::from_raw(a) <= Amount::from_raw(b), a <= b);
    }

    /// Amount checked_add agrees with u64 checked_add.
    #[test]
    fn amount_checked_add(a in 0u64.., b in 0u64..) {
        let sum = Amount::from_raw(a).checked_add(Amount::from_raw(b));
        prop_assert_eq!(sum.map(|s| s.raw()), a.checked_add(b));
    }
}
