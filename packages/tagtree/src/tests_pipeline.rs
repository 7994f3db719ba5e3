//! End-to-end pipeline tests over JSON-described scenes
//!
//! These tests validate that:
//! - A lone visible rectangle yields one leaf, one original node, one chunk
//! - Fully invisible selections are reported as having no visible nodes
//! - The original tree keeps nodes the tag tree leaves out
//! - Chunks are cut from the pruned tree
use crate::chunker::{join_chunks, ChunkOptions};
use crate::fragments::GQL_FRAGMENT_KEY;
use crate::pipeline::{process_selection, PipelineResult, SelectionSnapshot};
use crate::tag_node::TagType;
use figtag_scene::Scene;

fn run(scene: &Scene, options: &ChunkOptions) -> PipelineResult {
    let node = scene.selected_nodes_or_all_nodes()[0];
    process_selection(node, options).expect("Pipeline failed")
}

fn visible(result: PipelineResult) -> SelectionSnapshot {
    match result {
        PipelineResult::Visible(snapshot) => snapshot,
        PipelineResult::NoVisibleNodes => panic!("Expected visible nodes"),
    }
}

#[test]
fn test_single_visible_rectangle() {
    let scene = Scene::from_json(
        r#"{
            "pages": [{
                "id": "0:1", "name": "Page", "type": "PAGE",
                "children": [
                    { "id": "1:1", "name": "Box", "type": "RECTANGLE", "width": 100, "height": 100 }
                ]
            }],
            "selection": ["1:1"]
        }"#,
    )
    .unwrap();

    let snapshot = visible(run(&scene, &ChunkOptions::default()));

    assert_eq!(snapshot.tag_tree.tag, TagType::Shape);
    assert_eq!(snapshot.tag_tree.node_count(), 1);
    assert_eq!(snapshot.original_tree.node_count(), 1);
    assert!(snapshot.used_component_names.is_empty());
    assert_eq!(snapshot.chunks.len(), 1);
    assert_eq!(
        snapshot.chunks[0].content,
        serde_json::to_string(&snapshot.tag_tree).unwrap()
    );
}

#[test]
fn test_only_invisible_nodes() {
    let scene = Scene::from_json(
        r#"{
            "pages": [{
                "id": "0:1", "name": "Page", "type": "PAGE",
                "children": [{
                    "id": "1:1", "name": "Frame", "type": "FRAME", "width": 100, "height": 100,
                    "children": [
                        { "id": "1:2", "name": "Hidden", "type": "TEXT", "width": 10, "height": 10, "visible": false },
                        { "id": "1:3", "name": "Clear", "type": "RECTANGLE", "width": 10, "height": 10, "opacity": 0 }
                    ]
                }]
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(run(&scene, &ChunkOptions::default()), PipelineResult::NoVisibleNodes);
}

#[test]
fn test_original_tree_keeps_pruned_nodes() {
    let scene = Scene::from_json(
        r#"{
            "pages": [{
                "id": "0:1", "name": "Page", "type": "PAGE",
                "children": [{
                    "id": "1:1", "name": "Frame", "type": "FRAME", "width": 100, "height": 100,
                    "children": [
                        { "id": "1:2", "name": "Shown", "type": "ELLIPSE", "width": 10, "height": 10 },
                        { "id": "1:3", "name": "Hidden", "type": "ELLIPSE", "width": 10, "height": 10, "visible": false }
                    ]
                }]
            }]
        }"#,
    )
    .unwrap();

    let snapshot = visible(run(&scene, &ChunkOptions::default()));

    assert_eq!(snapshot.tag_tree.node_count(), 2);
    assert_eq!(snapshot.original_tree.node_count(), 3);
    assert_eq!(snapshot.original_tree.children[1].name, "Hidden");
}

#[test]
fn test_snapshot_is_pruned_and_chunked() {
    let scene = Scene::from_json(&format!(
        r#"{{
            "pages": [
                {{
                    "id": "0:1", "name": "Components", "type": "PAGE",
                    "children": [{{
                        "id": "9:1", "name": "Badge / Default", "type": "COMPONENT", "width": 20, "height": 20,
                        "pluginData": {{ "{key}": "fragment Badge on User {{ badge }}" }}
                    }}]
                }},
                {{
                    "id": "0:2", "name": "Screens", "type": "PAGE",
                    "children": [{{
                        "id": "1:1", "name": "Profile", "type": "FRAME", "width": 300, "height": 600,
                        "children": [
                            {{ "id": "1:2", "name": "Badge", "type": "INSTANCE", "width": 20, "height": 20, "mainComponentId": "9:1" }},
                            {{ "id": "1:3", "name": "Photo", "type": "RECTANGLE", "width": 100, "height": 100,
                               "fills": [{{ "type": "IMAGE", "imageHash": "abc123" }}] }}
                        ]
                    }}]
                }}
            ],
            "currentPage": "0:2"
        }}"#,
        key = GQL_FRAGMENT_KEY
    ))
    .unwrap();

    let snapshot = visible(run(&scene, &ChunkOptions::new(80)));

    assert_eq!(snapshot.used_component_names, vec!["Badge/Default".to_string()]);
    assert_eq!(
        snapshot.child_fragments,
        vec!["fragment Badge on User { badge }".to_string()]
    );

    let photo = &snapshot.tag_tree.children[1];
    assert_eq!(photo.tag, TagType::Image);
    assert_eq!(photo.id, None);
    assert!(!photo.css.contains_key("-figma-image-hash"));

    assert!(snapshot.chunks.len() > 1);
    assert_eq!(
        join_chunks(&snapshot.chunks),
        serde_json::to_string(&snapshot.tag_tree).unwrap()
    );
}
