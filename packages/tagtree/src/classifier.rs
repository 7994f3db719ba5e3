//! Node classification - visibility, tag type, component identity and styles

use crate::tag_node::TagType;
use figtag_scene::{format_number, LayoutMode, NodeKind, PaintKind, SceneNode};
use std::collections::BTreeMap;

/// Whether a node renders anything at all.
///
/// Pages and the document have no geometry of their own, so the area check
/// only applies to nodes that live on the canvas.
pub fn is_visible(node: &SceneNode<'_>) -> bool {
    if !node.visible() || node.opacity() <= 0.0 {
        return false;
    }

    match node.kind() {
        NodeKind::Document | NodeKind::Page => true,
        _ => node.width() * node.height() > 0.0,
    }
}

/// Map a node to its tag type, or `None` if it is not visible
pub fn classify(node: &SceneNode<'_>) -> Option<TagType> {
    if !is_visible(node) {
        return None;
    }

    let tag = match node.kind() {
        NodeKind::Text => TagType::Text,
        NodeKind::Instance => TagType::Component,
        NodeKind::Frame
        | NodeKind::Group
        | NodeKind::Section
        | NodeKind::Component
        | NodeKind::ComponentSet
        | NodeKind::Page
        | NodeKind::Document => TagType::Container,
        NodeKind::Rectangle | NodeKind::Ellipse | NodeKind::Polygon | NodeKind::Star => {
            if has_image_fill(node) {
                TagType::Image
            } else {
                TagType::Shape
            }
        }
        NodeKind::Vector | NodeKind::Line | NodeKind::BooleanOperation => TagType::Vector,
        NodeKind::Slice | NodeKind::Unknown => TagType::Unknown,
    };

    Some(tag)
}

/// How an instance relates to its reusable definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRole {
    /// Instance of a standalone component (or one whose definition is gone)
    Instance { component_name: String },

    /// Instance of one variant inside a component set
    ComponentSetMember {
        set_name: String,
        variant_name: String,
    },
}

impl ComponentRole {
    /// Resolve the role of an instance node; `None` for anything else
    pub fn resolve(node: &SceneNode<'_>) -> Option<Self> {
        if node.kind() != NodeKind::Instance {
            return None;
        }

        let role = match node.main_component() {
            Some(component) => match component.parent() {
                Some(parent) if parent.kind() == NodeKind::ComponentSet => {
                    ComponentRole::ComponentSetMember {
                        set_name: parent.name().to_string(),
                        variant_name: component.name().to_string(),
                    }
                }
                _ => ComponentRole::Instance {
                    component_name: component.name().to_string(),
                },
            },
            None => ComponentRole::Instance {
                component_name: node.name().to_string(),
            },
        };

        Some(role)
    }

    /// Canonical name with all whitespace removed
    pub fn display_name(&self) -> String {
        let name = match self {
            ComponentRole::Instance { component_name } => component_name,
            ComponentRole::ComponentSetMember { set_name, .. } => set_name,
        };
        name.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

fn has_image_fill(node: &SceneNode<'_>) -> bool {
    node.fills()
        .iter()
        .any(|paint| paint.kind == PaintKind::Image && paint.is_visible())
}

/// Whether a node paints something itself, independent of its children
pub fn has_own_content(node: &SceneNode<'_>) -> bool {
    let has_fill = node.fills().iter().any(|paint| paint.is_visible());
    let has_stroke =
        node.stroke_weight() > 0.0 && node.strokes().iter().any(|paint| paint.is_visible());
    let has_text = node.characters().is_some_and(|text| !text.is_empty());

    has_fill || has_stroke || has_text
}

/// CSS-like style properties for a node
pub fn extract_styles(node: &SceneNode<'_>, tag: TagType) -> BTreeMap<String, String> {
    let mut css = BTreeMap::new();

    if let Some(fill) = node.fills().iter().find(|paint| paint.is_visible()) {
        match fill.kind {
            PaintKind::Solid => {
                if let Some(color) = fill.color {
                    let key = if tag == TagType::Text {
                        "color"
                    } else {
                        "background-color"
                    };
                    css.insert(key.to_string(), color.to_css(fill.opacity));
                }
            }
            PaintKind::Image => {
                css.insert("background-image".to_string(), "url(image)".to_string());
                if let Some(hash) = &fill.image_hash {
                    css.insert("-figma-image-hash".to_string(), hash.clone());
                }
            }
            _ => {}
        }
    }

    if node.stroke_weight() > 0.0 {
        let stroke_color = node
            .strokes()
            .iter()
            .find(|paint| paint.is_visible() && paint.kind == PaintKind::Solid)
            .and_then(|paint| paint.color.map(|color| color.to_css(paint.opacity)));
        if let Some(color) = stroke_color {
            css.insert(
                "border".to_string(),
                format!("{}px solid {}", format_number(node.stroke_weight()), color),
            );
        }
    }

    if node.corner_radius() > 0.0 {
        css.insert(
            "border-radius".to_string(),
            format!("{}px", format_number(node.corner_radius())),
        );
    }

    if node.opacity() < 1.0 {
        css.insert("opacity".to_string(), format_number(node.opacity()));
    }

    if let Some(layout) = node.layout() {
        css.insert("display".to_string(), "flex".to_string());
        let direction = match layout.mode {
            LayoutMode::Horizontal => "row",
            LayoutMode::Vertical => "column",
        };
        css.insert("flex-direction".to_string(), direction.to_string());

        if layout.item_spacing > 0.0 {
            css.insert("gap".to_string(), format!("{}px", format_number(layout.item_spacing)));
        }

        let padding = [
            layout.padding_top,
            layout.padding_right,
            layout.padding_bottom,
            layout.padding_left,
        ];
        if padding.iter().any(|p| *p > 0.0) {
            let value = padding
                .iter()
                .map(|p| format!("{}px", format_number(*p)))
                .collect::<Vec<_>>()
                .join(" ");
            css.insert("padding".to_string(), value);
        }
    }

    if tag == TagType::Text {
        if let Some(style) = node.text_style() {
            css.insert("font-family".to_string(), style.font_family.clone());
            css.insert("font-size".to_string(), format!("{}px", format_number(style.font_size)));
            css.insert("font-weight".to_string(), style.font_weight.to_string());
            if let Some(line_height) = style.line_height {
                css.insert("line-height".to_string(), format!("{}px", format_number(line_height)));
            }
            if let Some(align) = style.text_align {
                css.insert("text-align".to_string(), align.to_css().to_string());
            }
        }
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use figtag_scene::{AutoLayout, NodeProps, Paint, Rgba, Scene, TextAlign, TextStyle};

    fn scene_with(props: Vec<(&str, NodeProps)>) -> Scene {
        let mut scene = Scene::new();
        for (parent, node) in props {
            scene.append_child(parent, node).unwrap();
        }
        scene
    }

    #[test]
    fn test_invisible_nodes() {
        let scene = scene_with(vec![
            ("0:1", NodeProps::new("1", "hidden", NodeKind::Rectangle).with_size(10.0, 10.0).hidden()),
            ("0:1", NodeProps::new("2", "transparent", NodeKind::Rectangle).with_size(10.0, 10.0).with_opacity(0.0)),
            ("0:1", NodeProps::new("3", "flat", NodeKind::Rectangle).with_size(10.0, 0.0)),
            ("0:1", NodeProps::new("4", "ok", NodeKind::Rectangle).with_size(10.0, 10.0)),
        ]);

        assert_eq!(classify(&scene.node("1").unwrap()), None);
        assert_eq!(classify(&scene.node("2").unwrap()), None);
        assert_eq!(classify(&scene.node("3").unwrap()), None);
        assert_eq!(classify(&scene.node("4").unwrap()), Some(TagType::Shape));
    }

    #[test]
    fn test_tag_types() {
        let scene = scene_with(vec![
            ("0:1", NodeProps::new("1", "photo", NodeKind::Rectangle).with_size(10.0, 10.0).with_fill(Paint::image("abc"))),
            ("0:1", NodeProps::new("2", "label", NodeKind::Text).with_size(10.0, 10.0)),
            ("0:1", NodeProps::new("3", "wrap", NodeKind::Group).with_size(10.0, 10.0)),
            ("0:1", NodeProps::new("4", "icon", NodeKind::BooleanOperation).with_size(10.0, 10.0)),
            ("0:1", NodeProps::new("5", "sticky", NodeKind::Unknown).with_size(10.0, 10.0)),
        ]);

        assert_eq!(classify(&scene.node("1").unwrap()), Some(TagType::Image));
        assert_eq!(classify(&scene.node("2").unwrap()), Some(TagType::Text));
        assert_eq!(classify(&scene.node("3").unwrap()), Some(TagType::Container));
        assert_eq!(classify(&scene.node("4").unwrap()), Some(TagType::Vector));
        assert_eq!(classify(&scene.node("5").unwrap()), Some(TagType::Unknown));
    }

    #[test]
    fn test_component_set_member_uses_set_name() {
        let scene = scene_with(vec![
            ("0:1", NodeProps::new("set", "Primary Button", NodeKind::ComponentSet).with_size(100.0, 40.0)),
            ("set", NodeProps::new("variant", "State=Hover", NodeKind::Component).with_size(100.0, 40.0)),
            ("0:1", NodeProps::new("inst", "Button instance", NodeKind::Instance).with_size(100.0, 40.0).with_main_component("variant")),
        ]);

        let role = ComponentRole::resolve(&scene.node("inst").unwrap()).unwrap();
        assert_eq!(
            role,
            ComponentRole::ComponentSetMember {
                set_name: "Primary Button".to_string(),
                variant_name: "State=Hover".to_string(),
            }
        );
        assert_eq!(role.display_name(), "PrimaryButton");
    }

    #[test]
    fn test_standalone_and_detached_instances() {
        let scene = scene_with(vec![
            ("0:1", NodeProps::new("comp", "Avatar  Small", NodeKind::Component).with_size(10.0, 10.0)),
            ("0:1", NodeProps::new("a", "x", NodeKind::Instance).with_size(10.0, 10.0).with_main_component("comp")),
            ("0:1", NodeProps::new("b", "Lonely\tBadge", NodeKind::Instance).with_size(10.0, 10.0).with_main_component("missing")),
        ]);

        let a = ComponentRole::resolve(&scene.node("a").unwrap()).unwrap();
        assert_eq!(a.display_name(), "AvatarSmall");

        let b = ComponentRole::resolve(&scene.node("b").unwrap()).unwrap();
        assert_eq!(b.display_name(), "LonelyBadge");

        assert!(ComponentRole::resolve(&scene.node("comp").unwrap()).is_none());
    }

    #[test]
    fn test_extract_frame_styles() {
        let scene = scene_with(vec![(
            "0:1",
            NodeProps::new("1", "Card", NodeKind::Frame)
                .with_size(200.0, 100.0)
                .with_fill(Paint::solid(Rgba::rgb(1.0, 1.0, 1.0)))
                .with_stroke(Paint::solid(Rgba::rgb(0.0, 0.0, 0.0)), 1.0)
                .with_corner_radius(8.0)
                .with_layout(AutoLayout {
                    mode: LayoutMode::Vertical,
                    item_spacing: 12.0,
                    padding_top: 16.0,
                    padding_right: 16.0,
                    padding_bottom: 16.0,
                    padding_left: 16.0,
                }),
        )]);

        let css = extract_styles(&scene.node("1").unwrap(), TagType::Container);
        assert_eq!(css["background-color"], "#ffffff");
        assert_eq!(css["border"], "1px solid #000000");
        assert_eq!(css["border-radius"], "8px");
        assert_eq!(css["display"], "flex");
        assert_eq!(css["flex-direction"], "column");
        assert_eq!(css["gap"], "12px");
        assert_eq!(css["padding"], "16px 16px 16px 16px");
        assert!(!css.contains_key("opacity"));
    }

    #[test]
    fn test_extract_text_styles() {
        let style = TextStyle {
            font_family: "Inter".to_string(),
            font_size: 14.0,
            font_weight: 600,
            line_height: Some(20.0),
            text_align: Some(TextAlign::Center),
        };
        let scene = scene_with(vec![(
            "0:1",
            NodeProps::new("1", "Title", NodeKind::Text)
                .with_size(80.0, 20.0)
                .with_text("Hello", style)
                .with_fill(Paint::solid(Rgba::rgb(0.2, 0.2, 0.2))),
        )]);

        let css = extract_styles(&scene.node("1").unwrap(), TagType::Text);
        assert_eq!(css["color"], "#333333");
        assert_eq!(css["font-family"], "Inter");
        assert_eq!(css["font-size"], "14px");
        assert_eq!(css["font-weight"], "600");
        assert_eq!(css["line-height"], "20px");
        assert_eq!(css["text-align"], "center");
        assert!(!css.contains_key("background-color"));
    }

    #[test]
    fn test_own_content() {
        let scene = scene_with(vec![
            ("0:1", NodeProps::new("1", "empty", NodeKind::Frame).with_size(10.0, 10.0)),
            ("0:1", NodeProps::new("2", "filled", NodeKind::Frame).with_size(10.0, 10.0).with_fill(Paint::solid(Rgba::rgb(0.0, 0.0, 0.0)))),
        ]);

        assert!(!has_own_content(&scene.node("1").unwrap()));
        assert!(has_own_content(&scene.node("2").unwrap()));
    }
}
