//! Tests for category reconciliation

use na_item::reconcile::{CategoryFields, CategoryMutation, apply, plan};
use na_item::{
    CategoryMeta, Color, ColorableMeta, DamageableMeta, DyeColor, Error, FishBucketMeta,
    FishPattern, OfflinePlayer, PotionData, PotionEffect, PotionEffectType, PotionMeta,
    PotionType, SkullMeta,
};
use uuid::Uuid;

fn potion_meta() -> PotionMeta {
    let mut potion = PotionMeta::default();
    potion.set_base_potion_data(PotionData::new(PotionType::HEALING).unwrap());
    potion.add_custom_effect(PotionEffect::new(PotionEffectType::SPEED, 100, 0), false);
    potion
}

#[test]
fn test_unset_fields_plan_nothing() {
    let fields = CategoryFields::default();
    for meta in [
        CategoryMeta::None,
        CategoryMeta::Damageable(DamageableMeta::default()),
        CategoryMeta::Colorable(ColorableMeta::default()),
        CategoryMeta::Skull(SkullMeta::default()),
    ] {
        assert!(plan(&meta, &fields).unwrap().is_empty());
    }
}

#[test]
fn test_captured_fields_plan_nothing() {
    let mut skull = SkullMeta::default();
    skull.set_owning_player(Some(OfflinePlayer::new(Uuid::from_u128(7))));
    let metas = [
        CategoryMeta::Damageable(DamageableMeta::default()),
        CategoryMeta::Colorable(ColorableMeta::default()),
        CategoryMeta::Potion(potion_meta()),
        CategoryMeta::Skull(skull),
        CategoryMeta::FishBucket(FishBucketMeta::new(
            DyeColor::Red,
            FishPattern::Glitter,
            DyeColor::Blue,
        )),
    ];
    for meta in metas {
        let fields = CategoryFields::capture(&meta);
        assert!(plan(&meta, &fields).unwrap().is_empty(), "{meta:?}");
    }
}

#[test]
fn test_damage_plan() {
    let meta = CategoryMeta::Damageable(DamageableMeta::default());
    let fields = CategoryFields {
        damage: Some(25),
        ..Default::default()
    };
    assert_eq!(plan(&meta, &fields).unwrap(), [CategoryMutation::SetDamage(25)]);
}

#[test]
fn test_leather_default_color_is_not_rewritten() {
    let meta = CategoryMeta::Colorable(ColorableMeta::default());
    let fields = CategoryFields {
        color: Some(Color::DEFAULT_LEATHER),
        ..Default::default()
    };
    assert!(plan(&meta, &fields).unwrap().is_empty());

    let fields = CategoryFields {
        color: Some(Color::RED),
        ..Default::default()
    };
    assert_eq!(
        plan(&meta, &fields).unwrap(),
        [CategoryMutation::SetLeatherColor(Color::RED)]
    );
}

#[test]
fn test_potion_requires_base_and_effects() {
    let meta = CategoryMeta::Potion(potion_meta());

    let missing_base = CategoryFields {
        potion_effects: Some(Vec::new()),
        ..Default::default()
    };
    assert!(matches!(
        plan(&meta, &missing_base),
        Err(Error::InvalidBuilderState(_))
    ));

    let missing_effects = CategoryFields {
        base_potion: Some(PotionData::default()),
        ..Default::default()
    };
    assert!(matches!(
        plan(&meta, &missing_effects),
        Err(Error::InvalidBuilderState(_))
    ));
}

#[test]
fn test_potion_plan() {
    let meta = CategoryMeta::Potion(potion_meta());
    let speed = PotionEffect::new(PotionEffectType::SPEED, 400, 1);
    let luck = PotionEffect::new(PotionEffectType::LUCK, 20, 0);
    let fields = CategoryFields {
        color: Some(Color::PURPLE),
        base_potion: Some(PotionData::new(PotionType::HEALING).unwrap()),
        potion_effects: Some(vec![speed.clone(), luck.clone()]),
        ..Default::default()
    };
    assert_eq!(
        plan(&meta, &fields).unwrap(),
        [
            CategoryMutation::SetPotionColor(Color::PURPLE),
            CategoryMutation::AddPotionEffect(speed.clone()),
            CategoryMutation::AddPotionEffect(luck.clone()),
        ]
    );

    let mutations = plan(&meta, &fields).unwrap();
    let mut meta = meta;
    apply(&mut meta, mutations);
    let CategoryMeta::Potion(potion) = &meta else {
        panic!("expected potion");
    };
    assert_eq!(potion.color(), Some(Color::PURPLE));
    assert_eq!(potion.custom_effects(), [speed, luck]);
}

#[test]
fn test_fish_requires_all_fields() {
    let meta = CategoryMeta::FishBucket(FishBucketMeta::default());
    let partial = CategoryFields {
        body_color: Some(DyeColor::Lime),
        pattern: Some(FishPattern::Dasher),
        ..Default::default()
    };
    let Err(Error::InvalidBuilderState(reason)) = plan(&meta, &partial) else {
        panic!("expected invalid builder state");
    };
    assert!(reason.contains("pattern color"));
}

#[test]
fn test_fish_plan_only_changed_fields() {
    let meta = CategoryMeta::FishBucket(FishBucketMeta::default());
    let fields = CategoryFields {
        body_color: Some(DyeColor::White),
        pattern: Some(FishPattern::Dasher),
        pattern_color: Some(DyeColor::Gray),
        ..Default::default()
    };
    assert_eq!(
        plan(&meta, &fields).unwrap(),
        [
            CategoryMutation::SetPattern(FishPattern::Dasher),
            CategoryMutation::SetPatternColor(DyeColor::Gray),
        ]
    );
}

#[test]
fn test_skull_plan() {
    let owner = OfflinePlayer::with_name(Uuid::from_u128(42), "Steve");
    let mut meta = CategoryMeta::Skull(SkullMeta::default());
    let fields = CategoryFields {
        owner: Some(owner.clone()),
        ..Default::default()
    };
    let mutations = plan(&meta, &fields).unwrap();
    assert_eq!(mutations, [CategoryMutation::SetOwner(owner.clone())]);

    apply(&mut meta, mutations);
    assert!(plan(&meta, &fields).unwrap().is_empty());
    let CategoryMeta::Skull(skull) = meta else {
        panic!("expected skull");
    };
    assert_eq!(skull.owning_player(), Some(&owner));
}

#[test]
fn test_fields_for_other_categories_are_ignored() {
    let meta = CategoryMeta::Damageable(DamageableMeta::default());
    let fields = CategoryFields {
        color: Some(Color::BLUE),
        owner: Some(OfflinePlayer::new(Uuid::nil())),
        pattern: Some(FishPattern::Kob),
        ..Default::default()
    };
    assert!(plan(&meta, &fields).unwrap().is_empty());
}

#[test]
fn test_apply_ignores_mismatched_mutations() {
    let mut meta = CategoryMeta::Damageable(DamageableMeta::default());
    apply(
        &mut meta,
        [
            CategoryMutation::SetLeatherColor(Color::RED),
            CategoryMutation::SetBodyColor(DyeColor::Red),
            CategoryMutation::SetDamage(3),
        ],
    );
    let mut expected = DamageableMeta::default();
    expected.set_damage(3);
    assert_eq!(meta, CategoryMeta::Damageable(expected));
}

#[test]
fn test_capture() {
    let mut colorable = ColorableMeta::default();
    colorable.set_color(Some(Color::BLACK));
    let fields = CategoryFields::capture(&CategoryMeta::Colorable(colorable));
    assert_eq!(fields.color, Some(Color::BLACK));
    assert_eq!(fields.damage, None);

    let fields = CategoryFields::capture(&CategoryMeta::Potion(potion_meta()));
    assert_eq!(fields.color, None);
    assert_eq!(fields.base_potion, Some(PotionData::new(PotionType::HEALING).unwrap()));
    assert_eq!(fields.potion_effects.map(|e| e.len()), Some(1));

    assert_eq!(
        CategoryFields::capture(&CategoryMeta::None),
        CategoryFields::default()
    );
}
