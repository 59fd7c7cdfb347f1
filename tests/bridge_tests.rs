use na_item::{
    Attribute, AttributeModifier, BigEndian, Color, DyeColor, Enchantment, EquipmentSlot, Error,
    FishBucketMeta, FishPattern, ItemFlags, ItemStack, ItemType, LittleEndian, NamespacedKey,
    NbtBridge, OfflinePlayer, Operation, OwnCompound, OwnList, OwnValue, PotionData,
    PotionEffect, PotionEffectType, PotionType, TagBridge, TagID, data_type, read_item,
    write_item,
};
use uuid::Uuid;

fn rich_sword() -> ItemStack {
    let mut item = ItemStack::with_amount(ItemType::DIAMOND_SWORD, 2);
    let meta = item.meta_mut();
    meta.as_damageable_mut().unwrap().set_damage(12);
    meta.set_display_name(Some("Blade".to_owned()));
    meta.set_lore(Some(vec!["one".to_owned(), "two".to_owned()]));
    meta.set_unbreakable(true);
    meta.add_item_flags(ItemFlags::HIDE_ENCHANTS | ItemFlags::HIDE_DYE);
    meta.add_enchant(Enchantment::SHARPNESS, 5, false);
    meta.add_enchant(Enchantment::LOOTING, 7, true);
    meta.set_attribute_modifiers(Some(
        [(
            Attribute::AttackDamage,
            AttributeModifier::with_uuid(Uuid::from_u128(0xDEAD_BEEF), "dmg", 3.5, Operation::AddNumber)
                .in_slot(EquipmentSlot::MainHand),
        )]
        .into_iter()
        .collect(),
    ));
    meta.set_custom_model_data(Some(1001));
    meta.persistent_data_mut()
        .set::<data_type::String>(&NamespacedKey::new("test", "id").unwrap(), "ruby".to_owned());
    item
}

#[test]
fn test_uuid_is_split_most_significant_first() {
    let mut item = ItemStack::new(ItemType::PLAYER_HEAD);
    let uuid = Uuid::from_u128(0x0000_0001_0000_0002_0000_0003_FFFF_FFFF);
    item.meta_mut()
        .as_skull_mut()
        .unwrap()
        .set_owning_player(Some(OfflinePlayer::with_name(uuid, "Alex")));

    let tag = NbtBridge.to_tag(&item).unwrap();
    let owner = tag.get_compound("SkullOwner").unwrap();
    assert_eq!(
        owner.get("Id").and_then(OwnValue::as_int_array),
        Some(&[1, 2, 3, -1][..])
    );
    assert_eq!(owner.get_string("Name"), Some("Alex"));
}

#[test]
fn test_tag_layout() {
    let tag = NbtBridge.to_tag(&rich_sword()).unwrap();

    assert_eq!(tag.get_int("Damage"), Some(12));
    let display = tag.get_compound("display").unwrap();
    assert_eq!(display.get_string("Name"), Some("Blade"));
    assert_eq!(display.get_list("Lore").unwrap().len(), 2);
    assert_eq!(tag.get_byte("Unbreakable"), Some(1));
    assert_eq!(tag.get_int("HideFlags"), Some(1 | 64));
    assert_eq!(tag.get_int("CustomModelData"), Some(1001));

    let enchants = tag.get_list("Enchantments").unwrap();
    assert_eq!(enchants.element_tag_id(), TagID::Compound);
    let first = enchants.get(0).and_then(OwnValue::as_compound).unwrap();
    assert_eq!(first.get_string("id"), Some("minecraft:looting"));
    assert_eq!(first.get_short("lvl"), Some(7));

    let modifiers = tag.get_list("AttributeModifiers").unwrap();
    let modifier = modifiers.get(0).and_then(OwnValue::as_compound).unwrap();
    assert_eq!(modifier.get_string("AttributeName"), Some("generic.attack_damage"));
    assert_eq!(modifier.get_double("Amount"), Some(3.5));
    assert_eq!(modifier.get_int("Operation"), Some(0));
    assert_eq!(modifier.get_string("Slot"), Some("mainhand"));

    let values = tag.get_compound("PublicBukkitValues").unwrap();
    assert_eq!(values.get_string("test:id"), Some("ruby"));
}

#[test]
fn test_default_item_has_minimal_tag() {
    assert!(NbtBridge.to_tag(&ItemStack::new(ItemType::STONE)).unwrap().is_empty());

    let sword = NbtBridge.to_tag(&ItemStack::new(ItemType::IRON_SWORD)).unwrap();
    assert_eq!(sword.len(), 1);
    assert_eq!(sword.get_int("Damage"), Some(0));
}

#[test]
fn test_round_trip_is_lossless() {
    let item = rich_sword();
    let tag = NbtBridge.to_tag(&item).unwrap();
    assert_eq!(NbtBridge.from_tag(tag, &item).unwrap(), item);
}

#[test]
fn test_round_trip_category_items() {
    let mut leather = ItemStack::new(ItemType::LEATHER_HELMET);
    leather
        .meta_mut()
        .as_colorable_mut()
        .unwrap()
        .set_color(Some(Color::rgb(1, 2, 3)));

    let mut potion = ItemStack::new(ItemType::TIPPED_ARROW);
    let meta = potion.meta_mut().as_potion_mut().unwrap();
    meta.set_color(Some(Color::GREEN));
    meta.set_base_potion_data(PotionData::with_variant(PotionType::STRENGTH, false, true).unwrap());
    meta.add_custom_effect(
        PotionEffect::new(PotionEffectType::GLOWING, 200, 300)
            .with_ambient(true)
            .with_icon(false),
        false,
    );

    let mut bucket = ItemStack::new(ItemType::TROPICAL_FISH_BUCKET);
    *bucket.meta_mut().as_fish_bucket_mut().unwrap() =
        FishBucketMeta::new(DyeColor::Cyan, FishPattern::Betty, DyeColor::Pink);

    let mut skull = ItemStack::new(ItemType::PLAYER_HEAD);
    skull
        .meta_mut()
        .as_skull_mut()
        .unwrap()
        .set_owning_player(Some(OfflinePlayer::new(Uuid::from_u128(u128::MAX))));

    for item in [leather, potion, bucket, skull] {
        let tag = NbtBridge.to_tag(&item).unwrap();
        assert_eq!(NbtBridge.from_tag(tag, &item).unwrap(), item);
    }
}

#[test]
fn test_potion_tag_values() {
    let mut potion = ItemStack::new(ItemType::POTION);
    potion
        .meta_mut()
        .as_potion_mut()
        .unwrap()
        .set_base_potion_data(PotionData::with_variant(PotionType::SWIFTNESS, true, false).unwrap());
    let tag = NbtBridge.to_tag(&potion).unwrap();
    assert_eq!(tag.get_string("Potion"), Some("minecraft:long_swiftness"));
    assert!(!tag.contains_key("CustomPotionEffects"));
}

#[test]
fn test_fish_variant_tag() {
    let mut bucket = ItemStack::new(ItemType::TROPICAL_FISH_BUCKET);
    *bucket.meta_mut().as_fish_bucket_mut().unwrap() =
        FishBucketMeta::new(DyeColor::Orange, FishPattern::Stripey, DyeColor::Black);
    let tag = NbtBridge.to_tag(&bucket).unwrap();
    // large body, index 1, orange body, black pattern
    assert_eq!(tag.get_int("BucketVariantTag"), Some(0x0F01_0101));
}

#[test]
fn test_unknown_entries_survive() {
    let mut tag = OwnCompound::new();
    tag.insert("CanDestroy", OwnList::from_values(["minecraft:stone"]).unwrap());
    let mut display = OwnCompound::new();
    display.insert("Name", "Named");
    display.insert("LocName", "item.custom");
    tag.insert("display", display);

    let item = NbtBridge
        .from_tag(tag.clone(), &ItemStack::new(ItemType::PAPER))
        .unwrap();
    assert_eq!(item.meta().display_name(), Some("Named"));
    assert!(item.meta().unhandled().contains_key("CanDestroy"));
    assert_eq!(
        item.meta().unhandled().get_path("display.LocName"),
        Some(&OwnValue::String("item.custom".to_owned()))
    );
    assert_eq!(item.meta().unhandled().get_path("display.Name"), None);

    let back = NbtBridge.to_tag(&item).unwrap();
    assert_eq!(back.get_path("display.Name"), tag.get_path("display.Name"));
    assert_eq!(back.get_path("display.LocName"), tag.get_path("display.LocName"));
    assert_eq!(back.get("CanDestroy"), tag.get("CanDestroy"));
}

#[test]
fn test_category_keys_of_other_kinds_are_unhandled() {
    let mut tag = OwnCompound::new();
    tag.insert("Damage", 4);
    tag.insert("Potion", "minecraft:healing");
    let item = NbtBridge
        .from_tag(tag, &ItemStack::new(ItemType::PLAYER_HEAD))
        .unwrap();
    assert_eq!(item.meta().unhandled().get_int("Damage"), Some(4));
    assert_eq!(item.meta().unhandled().get_string("Potion"), Some("minecraft:healing"));
}

#[test]
fn test_wrong_known_tag_type_is_rejected() {
    let mut tag = OwnCompound::new();
    tag.insert("CustomModelData", "seven");
    let err = NbtBridge
        .from_tag(tag, &ItemStack::new(ItemType::PAPER))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedTag {
            expected: TagID::Int,
            found: TagID::String,
            ..
        }
    ));
}

#[test]
fn test_invalid_known_values_are_rejected() {
    let mut bad_lore = OwnCompound::new();
    let mut display = OwnCompound::new();
    display.insert("Lore", OwnList::from_values([1, 2]).unwrap());
    bad_lore.insert("display", display);

    let mut bad_modifier = OwnCompound::new();
    let mut modifier = OwnCompound::new();
    modifier.insert("AttributeName", "generic.nonsense");
    modifier.insert("Amount", 1.0);
    modifier.insert("Operation", 0);
    modifier.insert("UUID", vec![0, 0, 0, 1]);
    bad_modifier.insert("AttributeModifiers", OwnList::from_values([modifier]).unwrap());

    let mut bad_enchant = OwnCompound::new();
    let mut enchant = OwnCompound::new();
    enchant.insert("id", "Not A Key");
    enchant.insert("lvl", 1i16);
    bad_enchant.insert("Enchantments", OwnList::from_values([enchant]).unwrap());

    let paper = ItemStack::new(ItemType::PAPER);
    assert!(matches!(
        NbtBridge.from_tag(bad_lore, &paper),
        Err(Error::UnexpectedTag { .. })
    ));
    assert!(matches!(
        NbtBridge.from_tag(bad_modifier, &paper),
        Err(Error::InvalidValue { .. })
    ));
    assert!(matches!(
        NbtBridge.from_tag(bad_enchant, &paper),
        Err(Error::InvalidKey(_))
    ));

    let mut bad_variant = OwnCompound::new();
    bad_variant.insert("BucketVariantTag", 0x0000_0009);
    assert!(matches!(
        NbtBridge.from_tag(bad_variant, &ItemStack::new(ItemType::TROPICAL_FISH_BUCKET)),
        Err(Error::InvalidValue { .. })
    ));
}

#[test]
fn test_from_tag_keeps_type_and_amount() {
    let base = ItemStack::with_amount(ItemType::BOW, 3);
    let mut tag = OwnCompound::new();
    tag.insert("Damage", 9);
    let item = NbtBridge.from_tag(tag, &base).unwrap();
    assert_eq!(*item.item_type(), ItemType::BOW);
    assert_eq!(item.amount(), 3);
    assert_eq!(item.meta().as_damageable().unwrap().damage(), 9);
}

#[test]
fn test_whole_item_compound() {
    let item = rich_sword();
    let compound = item.to_nbt().unwrap();
    assert_eq!(compound.get_string("id"), Some("minecraft:diamond_sword"));
    assert_eq!(compound.get_byte("Count"), Some(2));
    assert!(compound.get_compound("tag").is_some());
    assert_eq!(ItemStack::from_nbt(compound).unwrap(), item);

    let bare = ItemStack::new(ItemType::STONE).to_nbt().unwrap();
    assert!(!bare.contains_key("tag"));
}

#[test]
fn test_from_nbt_defaults_and_errors() {
    let mut compound = OwnCompound::new();
    compound.insert("id", "stone");
    let item = ItemStack::from_nbt(compound).unwrap();
    assert_eq!(*item.item_type(), ItemType::STONE);
    assert_eq!(item.amount(), 1);

    assert!(matches!(
        ItemStack::from_nbt(OwnCompound::new()),
        Err(Error::InvalidValue { .. })
    ));

    let mut wrong = OwnCompound::new();
    wrong.insert("id", "stone");
    wrong.insert("Count", 1i32);
    assert!(matches!(
        ItemStack::from_nbt(wrong),
        Err(Error::UnexpectedTag { .. })
    ));
}

#[test]
fn test_binary_item_round_trip() {
    let item = rich_sword();
    let be = write_item::<BigEndian>(&item).unwrap();
    assert_eq!(read_item::<BigEndian>(&be).unwrap(), item);
    let le = write_item::<LittleEndian>(&item).unwrap();
    assert_eq!(read_item::<LittleEndian>(&le).unwrap(), item);
}

#[test]
fn test_read_item_requires_compound_root() {
    let bytes = na_item::write_value::<BigEndian>(&OwnValue::Int(1)).unwrap();
    assert!(matches!(
        read_item::<BigEndian>(&bytes),
        Err(Error::UnexpectedTag { .. })
    ));
}
