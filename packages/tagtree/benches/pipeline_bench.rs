use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figtag_scene::{AutoLayout, LayoutMode, NodeKind, NodeProps, Paint, Rgba, Scene, TextStyle};
use figtag_tagtree::{
    build_tag_tree, divide_tag_tree_to_chunks, process_selection,
    remove_unnecessary_props_from_tag_tree, ChunkOptions, UsedComponents,
};

/// A screen with `rows` list items, each holding an avatar, two labels and a badge instance
fn list_screen(rows: usize) -> Scene {
    let mut scene = Scene::new();
    let label = TextStyle {
        font_family: "Inter".to_string(),
        font_size: 14.0,
        font_weight: 400,
        line_height: Some(20.0),
        text_align: None,
    };

    scene
        .append_child("0:1", NodeProps::new("badge", "Badge", NodeKind::Component).with_size(16.0, 16.0))
        .unwrap();
    scene
        .append_child(
            "0:1",
            NodeProps::new("screen", "Screen", NodeKind::Frame)
                .with_size(375.0, 72.0 * rows as f64)
                .with_fill(Paint::solid(Rgba::rgb(1.0, 1.0, 1.0)))
                .with_layout(AutoLayout {
                    mode: LayoutMode::Vertical,
                    item_spacing: 0.0,
                    padding_top: 0.0,
                    padding_right: 0.0,
                    padding_bottom: 0.0,
                    padding_left: 0.0,
                }),
        )
        .unwrap();

    for i in 0..rows {
        let row = format!("row-{}", i);
        scene
            .append_child("screen", NodeProps::new(row.clone(), "Row", NodeKind::Frame).with_bounds(0.0, 72.0 * i as f64, 375.0, 72.0))
            .unwrap();
        scene
            .append_child(&row, NodeProps::new(format!("{}-avatar", row), "Avatar", NodeKind::Ellipse).with_size(40.0, 40.0).with_fill(Paint::image("avatar")))
            .unwrap();
        scene
            .append_child(&row, NodeProps::new(format!("{}-title", row), "Title", NodeKind::Text).with_size(200.0, 20.0).with_text(format!("Item {}", i), label.clone()))
            .unwrap();
        scene
            .append_child(&row, NodeProps::new(format!("{}-subtitle", row), "Subtitle", NodeKind::Text).with_size(200.0, 20.0).with_text("Lorem ipsum dolor sit amet", label.clone()))
            .unwrap();
        scene
            .append_child(&row, NodeProps::new(format!("{}-badge", row), "Badge", NodeKind::Instance).with_size(16.0, 16.0).with_main_component("badge"))
            .unwrap();
    }

    scene
}

fn build_medium_tree(c: &mut Criterion) {
    let scene = list_screen(50);
    let root = scene.node("screen").unwrap();

    c.bench_function("build_tag_tree_50_rows", |b| {
        b.iter(|| {
            let mut used = UsedComponents::new();
            build_tag_tree(black_box(root), &mut used)
        })
    });
}

fn chunk_large_tree(c: &mut Criterion) {
    let scene = list_screen(500);
    let mut used = UsedComponents::new();
    let tree = build_tag_tree(scene.node("screen").unwrap(), &mut used).unwrap();
    let pruned = remove_unnecessary_props_from_tag_tree(&tree);
    let options = ChunkOptions::default();

    c.bench_function("divide_tag_tree_500_rows", |b| {
        b.iter(|| divide_tag_tree_to_chunks(black_box(&pruned), &options))
    });
}

fn full_pipeline(c: &mut Criterion) {
    let scene = list_screen(200);
    let root = scene.node("screen").unwrap();
    let options = ChunkOptions::default();

    c.bench_function("process_selection_200_rows", |b| {
        b.iter(|| process_selection(black_box(root), &options))
    });
}

criterion_group!(benches, build_medium_tree, chunk_large_tree, full_pipeline);
criterion_main!(benches);
