use std::rc::Rc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grid_inventory::{BasicItem, GridInventory, InventoryShape, ItemRef};

fn mixed_items() -> Vec<ItemRef<BasicItem>> {
    let ell = ["#.", "#.", "##"];
    let zed = ["##.", ".##"];
    (0..24)
        .map(|idx| match idx % 4 {
            0 => BasicItem::filled("potion", 1, 1),
            1 => BasicItem::filled("rifle", 4, 1),
            2 => Rc::new(BasicItem::new(
                "boot",
                InventoryShape::from_rows(&ell).expect("valid shape"),
            )),
            _ => Rc::new(BasicItem::new(
                "zed",
                InventoryShape::from_rows(&zed).expect("valid shape"),
            )),
        })
        .collect()
}

fn auto_placement(c: &mut Criterion) {
    let items = mixed_items();
    c.bench_function("auto_placement_16x8", |b| {
        b.iter(|| {
            let mut inventory = GridInventory::new(16, 8);
            for item in &items {
                black_box(inventory.add(item));
            }
            inventory.len()
        });
    });
}

fn shrink_and_evict(c: &mut Criterion) {
    let items = mixed_items();
    c.bench_function("resize_evict_16x8_to_8x4", |b| {
        b.iter(|| {
            let mut inventory = GridInventory::new(16, 8);
            for item in &items {
                inventory.add(item);
            }
            inventory.resize(black_box(8), black_box(4));
            inventory.len()
        });
    });
}

fn point_lookup(c: &mut Criterion) {
    let items = mixed_items();
    let mut inventory = GridInventory::new(16, 8);
    for item in &items {
        inventory.add(item);
    }
    let cells: Vec<_> = inventory.size().cells().collect();
    c.bench_function("get_at_point_full_scan", |b| {
        b.iter(|| {
            cells
                .iter()
                .filter(|cell| inventory.get_at_point(black_box(**cell)).is_some())
                .count()
        });
    });
}

criterion_group!(benches, auto_placement, shrink_and_evict, point_lookup);
criterion_main!(benches);
