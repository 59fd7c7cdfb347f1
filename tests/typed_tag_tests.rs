//! Tests for typed tag slots and the persistent data container

use na_item::{
    DataTypeDescriptor, NamespacedKey, OwnValue, PersistentDataContainer, PersistentDataType,
    TagID, TypedTagKey, TypedTagStore, data_type,
};

fn key(name: &str) -> NamespacedKey {
    NamespacedKey::new("test", name).unwrap()
}

struct Celsius;

impl PersistentDataType for Celsius {
    type Complex = f64;
    const PRIMITIVE: TagID = TagID::Int;

    fn to_primitive(value: f64) -> OwnValue {
        OwnValue::Int((value * 10.0).round() as i32)
    }

    fn from_primitive(value: &OwnValue) -> Option<f64> {
        value.as_int().map(|tenths| tenths as f64 / 10.0)
    }
}

#[test]
fn test_descriptor_identity() {
    assert_eq!(
        DataTypeDescriptor::of::<data_type::Byte>(),
        DataTypeDescriptor::of::<data_type::Byte>()
    );
    assert_ne!(
        DataTypeDescriptor::of::<data_type::Byte>(),
        DataTypeDescriptor::of::<data_type::Boolean>()
    );
    assert_eq!(
        DataTypeDescriptor::of::<data_type::Boolean>().primitive(),
        TagID::Byte
    );
    assert!(DataTypeDescriptor::of::<Celsius>().name().ends_with("Celsius"));
}

#[test]
fn test_store_replaces_slot_in_place() {
    let mut store = TypedTagStore::new();
    store.set_typed::<data_type::Integer>(key("a"), 1);
    store.set_typed::<data_type::String>(key("b"), "x".to_owned());
    store.set_typed::<data_type::Integer>(key("a"), 2);

    assert_eq!(store.len(), 2);
    let slots: Vec<_> = store.iter().map(|(slot, _)| slot.key().key().to_owned()).collect();
    assert_eq!(slots, ["a", "b"]);
    assert_eq!(store.get_typed::<data_type::Integer>(&key("a")), Some(2));
}

#[test]
fn test_store_lookup_needs_matching_descriptor() {
    let mut store = TypedTagStore::new();
    store.set_typed::<data_type::Integer>(key("temp"), 215);
    store.set_typed::<Celsius>(key("temp"), 21.5);

    assert_eq!(store.len(), 2);
    assert_eq!(store.get_typed::<data_type::Integer>(&key("temp")), Some(215));
    assert_eq!(store.get_typed::<Celsius>(&key("temp")), Some(21.5));
    assert_eq!(store.get_typed::<data_type::Long>(&key("temp")), None);
    assert!(store.has(&TypedTagKey::of::<Celsius>(key("temp"))));
    assert!(!store.has(&TypedTagKey::of::<data_type::Short>(key("temp"))));
}

#[test]
fn test_apply_to_later_slot_wins() {
    let mut store = TypedTagStore::new();
    store.set_typed::<data_type::Byte>(key("shared"), 5);
    store.set_typed::<data_type::Boolean>(key("shared"), false);
    store.set_typed::<data_type::Long>(key("other"), 9);

    let mut container = PersistentDataContainer::new();
    container.set::<data_type::String>(&key("existing"), "kept".to_owned());
    store.apply_to(&mut container);

    assert_eq!(container.len(), 3);
    assert_eq!(container.get_raw(&key("shared")), Some(&OwnValue::Byte(0)));
    assert_eq!(container.get::<data_type::Byte>(&key("shared")), Some(0));
    assert_eq!(container.get::<data_type::Boolean>(&key("shared")), Some(false));
    assert_eq!(container.get::<data_type::Long>(&key("other")), Some(9));
    assert_eq!(
        container.get::<data_type::String>(&key("existing")).as_deref(),
        Some("kept")
    );
}

#[test]
fn test_container_reads_by_primitive() {
    let mut container = PersistentDataContainer::new();
    container.set::<data_type::Integer>(&key("level"), 3);

    assert!(container.has::<data_type::Integer>(&key("level")));
    assert!(container.has::<Celsius>(&key("level")));
    assert!(!container.has::<data_type::Short>(&key("level")));
    assert_eq!(container.get::<data_type::Short>(&key("level")), None);
    assert_eq!(container.get::<Celsius>(&key("level")), Some(0.3));
    assert!(container.has_key(&key("level")));
    assert!(!container.has_key(&key("missing")));
}

#[test]
fn test_container_arrays_and_strings() {
    let mut container = PersistentDataContainer::new();
    container.set::<data_type::ByteArray>(&key("bytes"), vec![1, -1]);
    container.set::<data_type::IntegerArray>(&key("ints"), vec![1, 2, 3]);
    container.set::<data_type::LongArray>(&key("longs"), vec![i64::MAX]);
    container.set::<data_type::Float>(&key("float"), 0.5);
    container.set::<data_type::Double>(&key("double"), 0.25);

    assert_eq!(container.get::<data_type::ByteArray>(&key("bytes")), Some(vec![1, -1]));
    assert_eq!(container.get::<data_type::IntegerArray>(&key("ints")), Some(vec![1, 2, 3]));
    assert_eq!(container.get::<data_type::LongArray>(&key("longs")), Some(vec![i64::MAX]));
    assert_eq!(container.get::<data_type::Float>(&key("float")), Some(0.5));
    assert_eq!(container.get::<data_type::Double>(&key("double")), Some(0.25));
}

#[test]
fn test_nested_container() {
    let mut inner = PersistentDataContainer::new();
    inner.set::<data_type::Boolean>(&key("enabled"), true);

    let mut outer = PersistentDataContainer::new();
    outer.set::<data_type::TagContainer>(&key("settings"), inner.clone());

    assert_eq!(
        outer.get_raw(&key("settings")).map(OwnValue::tag_id),
        Some(TagID::Compound)
    );
    let read = outer.get::<data_type::TagContainer>(&key("settings")).unwrap();
    assert_eq!(read, inner);
    assert_eq!(read.get::<data_type::Boolean>(&key("enabled")), Some(true));
}

#[test]
fn test_container_keys_and_remove() {
    let mut container = PersistentDataContainer::new();
    container.set::<data_type::Byte>(&key("one"), 1);
    container.set::<data_type::Byte>(&NamespacedKey::minecraft("two"), 2);

    let keys: Vec<_> = container.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, ["test:one", "minecraft:two"]);

    assert_eq!(container.remove(&key("one")), Some(OwnValue::Byte(1)));
    assert_eq!(container.remove(&key("one")), None);
    assert_eq!(container.len(), 1);
}
