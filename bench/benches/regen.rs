use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mimalloc::MiMalloc;
use na_item::{
    BigEndian, Enchantment, ItemBuilder, ItemStack, ItemType, NamespacedKey, data_type,
    read_item, write_item,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn sample_item() -> ItemStack {
    let mut item = ItemStack::new(ItemType::DIAMOND_SWORD);
    let meta = item.meta_mut();
    meta.set_display_name(Some("Bench Blade".to_owned()));
    meta.set_lore(Some(vec!["first".to_owned(), "second".to_owned()]));
    meta.add_enchant(Enchantment::SHARPNESS, 5, false);
    item
}

fn regen(c: &mut Criterion) {
    let base = sample_item();
    let key = NamespacedKey::new("bench", "level").unwrap();

    c.bench_function("regen_typed_tags", |b| {
        b.iter(|| {
            let mut builder = ItemBuilder::new(black_box(base.clone()));
            builder
                .set_durability(12)
                .set_custom_tag::<data_type::Integer>(key.clone(), 3);
            builder.build().unwrap()
        })
    });

    c.bench_function("regen_raw_tags", |b| {
        b.iter(|| {
            let mut builder = ItemBuilder::new(black_box(base.clone()));
            builder
                .set_raw_tag("custom.level", 7)
                .set_raw_tag("custom.owner", "bench");
            builder.build().unwrap()
        })
    });
}

fn codec(c: &mut Criterion) {
    let item = sample_item();
    let bytes = write_item::<BigEndian>(&item).unwrap();

    c.bench_function("write_item", |b| {
        b.iter(|| write_item::<BigEndian>(black_box(&item)).unwrap())
    });
    c.bench_function("read_item", |b| {
        b.iter(|| read_item::<BigEndian>(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, regen, codec);
criterion_main!(benches);
