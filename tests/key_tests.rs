//! Tests for namespaced keys

use na_item::{Error, MINECRAFT, NamespacedKey};

#[test]
fn test_key_parse() {
    let key: NamespacedKey = "myplugin:items/ruby_sword".parse().unwrap();
    assert_eq!(key.namespace(), "myplugin");
    assert_eq!(key.key(), "items/ruby_sword");
    assert!(!key.is_minecraft());

    let bare: NamespacedKey = "diamond".parse().unwrap();
    assert_eq!(bare.namespace(), MINECRAFT);
    assert!(bare.is_minecraft());
}

#[test]
fn test_key_rejects_invalid() {
    for bad in ["", ":", "a:", ":b", "Upper:case", "name space:key", "ns:key:extra", "ns/x:key"] {
        assert!(
            matches!(bad.parse::<NamespacedKey>(), Err(Error::InvalidKey(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_key_equality_ignores_storage() {
    let constant = NamespacedKey::minecraft("stone");
    let owned = NamespacedKey::new("minecraft", "stone").unwrap();
    assert_eq!(constant, owned);
    assert_eq!(format!("{constant:?}"), "NamespacedKey(minecraft:stone)");
}

#[test]
fn test_key_ordering() {
    let mut keys = vec![
        NamespacedKey::new("b", "a").unwrap(),
        NamespacedKey::new("a", "z").unwrap(),
        NamespacedKey::new("a", "b").unwrap(),
    ];
    keys.sort();
    let keys: Vec<_> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(keys, ["a:b", "a:z", "b:a"]);
}
