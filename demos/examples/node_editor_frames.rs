// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a few editor frames: reset, touch, hit test, select, sweep.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_examples --example node_editor_frames`

use kurbo::{Point, Rect, Vec2};
use understory_node_editor::{
    CanvasView, Config, InputState, Interaction, KeyModifiers, NodeId, Object, ObjectId, Objects,
    SelectOperation, Selection, debug,
};

/// A scene as the host application describes it each frame.
struct Scene {
    nodes: Vec<(NodeId, Rect)>,
}

fn touch_scene(objects: &mut Objects, scene: &Scene) {
    objects.reset();
    for &(id, bounds) in &scene.nodes {
        let node = objects.nodes.get(id);
        node.bounds = bounds;
        node.touch();
    }
}

/// Topmost live node under `pos`, in canvas space.
fn hit_test(objects: &Objects, view: &CanvasView, pos: Point) -> Option<ObjectId> {
    let p = view.to_canvas(pos);
    objects
        .nodes
        .live()
        .filter(|n| n.bounds.contains(p))
        .last()
        .map(Object::id)
}

fn click(
    objects: &Objects,
    view: &CanvasView,
    input: &mut InputState,
    selection: &mut Selection,
    pos: Point,
    modifiers: KeyModifiers,
) {
    input.begin_frame();
    input.mouse_position = pos;
    input.modifiers = modifiers;
    let hit = hit_test(objects, view, pos);
    input.set(Interaction::Hovered, hit);
    input.set(Interaction::Clicked, hit);

    let operation = if modifiers.contains(KeyModifiers::CTRL) {
        SelectOperation::Toggle
    } else if modifiers.contains(KeyModifiers::SHIFT) {
        SelectOperation::Add
    } else {
        SelectOperation::Replace
    };
    let changed = match input.node().clicked {
        Some(node) => selection.select(node.into(), operation),
        None if operation == SelectOperation::Replace => {
            let had_any = !selection.is_empty();
            selection.deselect_all();
            had_any
        }
        None => false,
    };
    println!(
        "click at {} [{}] -> {:?}, changed: {changed}, selection: {:?}",
        debug::point(pos),
        debug::modifiers(modifiers),
        hit.map(|id| id.to_string()),
        selection.objects().iter().map(ToString::to_string).collect::<Vec<_>>()
    );
}

fn main() {
    env_logger::init();

    let config = Config::default();
    let view = CanvasView::new(Vec2::new(20.0, 20.0), 1.0);
    println!("view: {}, grid: {}", debug::view(&view), config.grid_size);

    let mut scene = Scene {
        nodes: vec![
            (NodeId::new(1), Rect::new(0.0, 0.0, 100.0, 60.0)),
            (NodeId::new(2), Rect::new(150.0, 0.0, 250.0, 60.0)),
            (NodeId::new(3), Rect::new(0.0, 120.0, 100.0, 180.0)),
        ],
    };

    let mut objects = Objects::new();
    let mut input = InputState::new();
    let mut selection = Selection::new();

    // Frame 1: select node 1, then add node 2, then toggle node 1 off.
    touch_scene(&mut objects, &scene);
    click(
        &objects,
        &view,
        &mut input,
        &mut selection,
        Point::new(50.0, 40.0),
        KeyModifiers::empty(),
    );
    click(
        &objects,
        &view,
        &mut input,
        &mut selection,
        Point::new(200.0, 40.0),
        KeyModifiers::SHIFT,
    );
    click(
        &objects,
        &view,
        &mut input,
        &mut selection,
        Point::new(50.0, 40.0),
        KeyModifiers::CTRL,
    );
    assert_eq!(selection.objects(), &[ObjectId::from(NodeId::new(2))]);

    // Frame 2: node 2 disappears from the scene.
    scene.nodes.retain(|(id, _)| *id != NodeId::new(2));
    touch_scene(&mut objects, &scene);
    for node in &objects.nodes {
        println!("  {}", debug::object(node.as_object_ref()));
    }

    let swept = objects.sweep();
    selection.retain(|id| !swept.contains(&id));
    println!("swept {} objects, selection now {:?}", swept.len(), selection.objects());
    assert!(selection.is_empty());
    assert_eq!(objects.nodes.count(), 2);

    // Clicking empty canvas with no modifier clears the selection.
    click(
        &objects,
        &view,
        &mut input,
        &mut selection,
        Point::new(500.0, 500.0),
        KeyModifiers::empty(),
    );
}
