use crate::{
    types::Timestamp,
    value::{
        Value, canonical_cmp,
        hash::{VALUE_HASH_SEED, VALUE_HASH_VERSION, hash_value},
        strict_order_cmp,
    },
};
use std::cmp::Ordering;
use ulid::Ulid;

fn all_variants() -> Vec<Value> {
    vec![
        Value::Blob(vec![1, 2, 3]),
        Value::Bool(true),
        Value::Int(-7),
        Value::Null,
        Value::Text("alpha".to_string()),
        Value::Timestamp(Timestamp::new(1_700_000_000_000)),
        Value::Uint(7),
        Value::Ulid(Ulid::from_parts(1, 1)),
    ]
}

#[test]
fn canonical_rank_order_is_frozen() {
    let ranks: Vec<u8> = all_variants()
        .iter()
        .map(Value::canonical_rank)
        .collect();

    assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn canonical_cmp_orders_mixed_variants_by_rank() {
    let variants = all_variants();

    for (left_rank, left) in variants.iter().enumerate() {
        for (right_rank, right) in variants.iter().enumerate() {
            let expected = left_rank.cmp(&right_rank);
            assert_eq!(
                canonical_cmp(left, right),
                expected,
                "rank ordering must be total for {left:?} vs {right:?}",
            );
        }
    }
}

#[test]
fn canonical_cmp_same_variant_uses_payload_order() {
    assert_eq!(
        canonical_cmp(&Value::Int(-1), &Value::Int(1)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(
            &Value::Text("beta".to_string()),
            &Value::Text("alpha".to_string())
        ),
        Ordering::Greater
    );
    assert_eq!(
        canonical_cmp(
            &Value::Timestamp(Timestamp::new(5)),
            &Value::Timestamp(Timestamp::new(5))
        ),
        Ordering::Equal
    );
}

#[test]
fn strict_order_cmp_rejects_mixed_variants() {
    assert_eq!(strict_order_cmp(&Value::Int(1), &Value::Uint(1)), None);
    assert_eq!(
        strict_order_cmp(&Value::Bool(false), &Value::Bool(true)),
        Some(Ordering::Less)
    );
    assert_eq!(strict_order_cmp(&Value::Null, &Value::Null), Some(Ordering::Equal));
}

#[test]
fn hash_contract_seed_and_version_are_frozen() {
    assert_eq!(VALUE_HASH_SEED, 0);
    assert_eq!(VALUE_HASH_VERSION, 1);
}

#[test]
fn hash_value_is_stable_per_value_and_distinct_across_values() {
    for value in all_variants() {
        assert_eq!(hash_value(&value), hash_value(&value.clone()));
    }

    // Same payload bytes under a different variant tag must not collide.
    assert_ne!(hash_value(&Value::Int(42)), hash_value(&Value::Uint(42)));
    assert_ne!(
        hash_value(&Value::Uint(9)),
        hash_value(&Value::Timestamp(Timestamp::new(9)))
    );
    assert_ne!(
        hash_value(&Value::Text("a".to_string())),
        hash_value(&Value::Text("b".to_string()))
    );
}

#[test]
fn null_is_distinct_from_missing_semantics_helpers() {
    assert!(Value::Null.is_null());
    assert!(!Value::Bool(false).is_null());
}
