// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_node_editor::{
    InputState, Interaction, LinkId, NodeId, Object, ObjectId, Objects, PinId, SelectOperation,
    Selection,
};

const PINS_PER_NODE: usize = 4;

/// Populate `objects` with `n` nodes, their pins, and a link per node, all live.
fn touch_scene(objects: &mut Objects, n: usize) {
    for i in 1..=n {
        let node = objects.nodes.get(NodeId::new(i));
        node.bounds = Rect::new(0.0, 0.0, 120.0, 80.0);
        node.touch();
        for p in 0..PINS_PER_NODE {
            objects.pins.get(PinId::new(i * PINS_PER_NODE + p)).touch();
        }
        objects.links.get(LinkId::new(i)).touch();
    }
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    for &n in &[64usize, 512, 4096] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("reset_touch_n{}", n), |b| {
            let mut objects = Objects::new();
            touch_scene(&mut objects, n);
            b.iter(|| {
                objects.reset();
                touch_scene(&mut objects, n);
                black_box(objects.nodes.count());
            });
        });
        group.bench_function(format!("first_frame_n{}", n), |b| {
            b.iter_batched(
                Objects::new,
                |mut objects| {
                    touch_scene(&mut objects, n);
                    black_box(objects);
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("sweep_half_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut objects = Objects::new();
                    touch_scene(&mut objects, n);
                    objects.reset();
                    touch_scene(&mut objects, n / 2);
                    objects
                },
                |mut objects| black_box(objects.sweep()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    for &n in &[16usize, 128] {
        let ids: Vec<ObjectId> = (1..=n).map(|i| NodeId::new(i).into()).collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("toggle_batch_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut selection = Selection::new();
                    selection.select_many(&ids[..n / 2], SelectOperation::Add);
                    selection
                },
                |mut selection| black_box(selection.select_many(&ids, SelectOperation::Toggle)),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("click_replace_n{}", n), |b| {
            let mut selection = Selection::new();
            let mut input = InputState::new();
            b.iter(|| {
                for &id in &ids {
                    input.begin_frame();
                    input.set(Interaction::Clicked, Some(id));
                    if let Some(clicked) = input.get(Interaction::Clicked) {
                        black_box(selection.select(clicked, SelectOperation::Replace));
                    }
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame, bench_selection);
criterion_main!(benches);
