//! Registry tests: handle lifecycle, geometry writes, hit testing.

use multidrag::{ContainerId, ItemRegistry, Rect, Vec2};

fn canvas() -> (ItemRegistry, ContainerId) {
    let mut items = ItemRegistry::new();
    let container = items.add_container(Rect::new(0.0, 0.0, 600.0, 400.0));
    (items, container)
}

#[test]
fn test_add_and_get_item() {
    let (mut items, container) = canvas();
    let bounds = Rect::new(10.0, 20.0, 30.0, 40.0);

    let id = items.add_item(container, bounds);

    assert_eq!(items.len(), 1);
    assert_eq!(items.bounds(id), Some(bounds));
    assert_eq!(items.container_of(id), Some(container));
    assert!(items.contains(id));

    let item = items.get(id).unwrap();
    assert_eq!(item.id, id);
    assert_eq!(item.container, container);
}

#[test]
fn test_removed_handle_stops_resolving() {
    let (mut items, container) = canvas();
    let id = items.add_item(container, Rect::new(0.0, 0.0, 30.0, 30.0));

    assert!(items.remove_item(id));
    assert!(!items.remove_item(id));

    assert!(items.get(id).is_none());
    assert!(items.bounds(id).is_none());
    assert!(!items.contains(id));
    assert!(items.is_empty());
    assert_eq!(items.item_at(Vec2::new(15.0, 15.0)), None);
}

#[test]
fn test_handles_are_not_reused() {
    let (mut items, container) = canvas();
    let first = items.add_item(container, Rect::new(0.0, 0.0, 30.0, 30.0));
    items.remove_item(first);

    let second = items.add_item(container, Rect::new(0.0, 0.0, 30.0, 30.0));

    assert_ne!(first, second);
    assert!(items.get(first).is_none());
    assert!(items.get(second).is_some());
}

#[test]
fn test_set_bounds_and_translate_write_through() {
    let (mut items, container) = canvas();
    let id = items.add_item(container, Rect::new(0.0, 0.0, 30.0, 30.0));

    assert!(items.set_bounds(id, Rect::new(200.0, 200.0, 30.0, 30.0)));
    assert_eq!(items.item_at(Vec2::new(15.0, 15.0)), None);
    assert_eq!(items.item_at(Vec2::new(215.0, 215.0)), Some(id));

    assert!(items.translate(id, Vec2::new(-200.0, -200.0)));
    assert_eq!(items.bounds(id), Some(Rect::new(0.0, 0.0, 30.0, 30.0)));
    assert_eq!(items.item_at(Vec2::new(15.0, 15.0)), Some(id));
}

#[test]
fn test_writes_to_stale_handles_report_failure() {
    let (mut items, container) = canvas();
    let id = items.add_item(container, Rect::new(0.0, 0.0, 30.0, 30.0));
    items.remove_item(id);

    assert!(!items.set_bounds(id, Rect::new(1.0, 1.0, 2.0, 2.0)));
    assert!(!items.translate(id, Vec2::new(5.0, 5.0)));
}

#[test]
fn test_hit_test_prefers_topmost() {
    let (mut items, container) = canvas();
    let below = items.add_item(container, Rect::new(0.0, 0.0, 100.0, 100.0));
    let above = items.add_item(container, Rect::new(50.0, 50.0, 100.0, 100.0));

    // Overlap region hits the most recently added item.
    assert_eq!(items.item_at(Vec2::new(75.0, 75.0)), Some(above));
    assert_eq!(items.item_at(Vec2::new(25.0, 25.0)), Some(below));
    assert_eq!(items.item_at(Vec2::new(400.0, 300.0)), None);
}

#[test]
fn test_items_in_returns_back_to_front() {
    let (mut items, container) = canvas();
    let a = items.add_item(container, Rect::new(0.0, 0.0, 50.0, 50.0));
    let b = items.add_item(container, Rect::new(25.0, 25.0, 50.0, 50.0));
    let far = items.add_item(container, Rect::new(500.0, 300.0, 50.0, 50.0));

    let hits = items.items_in(&Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(hits, vec![a, b]);
    assert!(!hits.contains(&far));
}

#[test]
fn test_items_in_container_filters_by_parent() {
    let (mut items, container) = canvas();
    let other = items.add_container(Rect::new(0.0, 0.0, 200.0, 200.0));

    let a = items.add_item(container, Rect::new(0.0, 0.0, 30.0, 30.0));
    let foreign = items.add_item(other, Rect::new(0.0, 0.0, 30.0, 30.0));
    let b = items.add_item(container, Rect::new(50.0, 0.0, 30.0, 30.0));

    assert_eq!(items.items_in_container(container), vec![a, b]);
    assert_eq!(items.items_in_container(other), vec![foreign]);
}

#[test]
fn test_container_bounds_update() {
    let (mut items, container) = canvas();

    assert_eq!(
        items.container_bounds(container),
        Some(Rect::new(0.0, 0.0, 600.0, 400.0))
    );

    assert!(items.set_container_bounds(container, Rect::new(0.0, 0.0, 800.0, 600.0)));
    assert_eq!(
        items.container_bounds(container),
        Some(Rect::new(0.0, 0.0, 800.0, 600.0))
    );
}

#[test]
fn test_dirty_flag_tracks_mutations() {
    let (mut items, container) = canvas();
    assert!(items.take_dirty());
    assert!(!items.is_dirty());

    let id = items.add_item(container, Rect::new(0.0, 0.0, 30.0, 30.0));
    assert!(items.take_dirty());

    items.translate(id, Vec2::new(1.0, 1.0));
    assert!(items.is_dirty());
    assert!(items.take_dirty());
    assert!(!items.take_dirty());

    items.mark_dirty();
    assert!(items.is_dirty());
}
