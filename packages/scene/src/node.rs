//! Host node properties as the design tool exposes them to plugins

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Host node type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Page,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Line,
    Vector,
    BooleanOperation,
    Text,
    Slice,
    /// Any host type this crate doesn't know about
    #[serde(other)]
    Unknown,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "DOCUMENT",
            NodeKind::Page => "PAGE",
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Section => "SECTION",
            NodeKind::Component => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Polygon => "POLYGON",
            NodeKind::Star => "STAR",
            NodeKind::Line => "LINE",
            NodeKind::Vector => "VECTOR",
            NodeKind::BooleanOperation => "BOOLEAN_OPERATION",
            NodeKind::Text => "TEXT",
            NodeKind::Slice => "SLICE",
            NodeKind::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RGBA color with channels in the 0..=1 range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_one")]
    pub a: f64,
}

impl Rgba {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS color string, `#rrggbb` when opaque and `rgba(...)` otherwise.
    /// `opacity` is the paint-level opacity multiplied into alpha.
    pub fn to_css(&self, opacity: f64) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let alpha = (self.a * opacity).clamp(0.0, 1.0);

        if alpha >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                format_number(alpha)
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    Image,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Video,
    #[serde(other)]
    Unknown,
}

/// Fill or stroke paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,

    #[serde(default = "default_true")]
    pub visible: bool,

    #[serde(default = "default_one")]
    pub opacity: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
}

impl Paint {
    pub fn solid(color: Rgba) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(color),
            visible: true,
            opacity: 1.0,
            image_hash: None,
        }
    }

    pub fn image(image_hash: impl Into<String>) -> Self {
        Self {
            kind: PaintKind::Image,
            color: None,
            visible: true,
            opacity: 1.0,
            image_hash: Some(image_hash.into()),
        }
    }

    /// Whether this paint contributes anything to the rendered output
    pub fn is_visible(&self) -> bool {
        self.visible && self.opacity > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
}

/// Auto-layout settings of a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    pub mode: LayoutMode,
    #[serde(default)]
    pub item_spacing: f64,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_right: f64,
    #[serde(default)]
    pub padding_bottom: f64,
    #[serde(default)]
    pub padding_left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlign {
    pub fn to_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justified => "justify",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

/// Everything the host knows about a single node, minus its tree links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProps {
    pub id: String,
    pub name: String,

    #[serde(rename = "type")]
    pub kind: NodeKind,

    #[serde(default = "default_true")]
    pub visible: bool,

    #[serde(default = "default_one")]
    pub opacity: f64,

    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,

    #[serde(default)]
    pub stroke_weight: f64,

    #[serde(default)]
    pub corner_radius: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<AutoLayout>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,

    /// For instances: id of the component this is an instance of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component_id: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plugin_data: BTreeMap<String, String>,
}

impl NodeProps {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            visible: true,
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            corner_radius: 0.0,
            layout: None,
            characters: None,
            text_style: None,
            main_component_id: None,
            plugin_data: BTreeMap::new(),
        }
    }

    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_size(self, width: f64, height: f64) -> Self {
        let (x, y) = (self.x, self.y);
        self.with_bounds(x, y, width, height)
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = weight;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_layout(mut self, layout: AutoLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_text(mut self, characters: impl Into<String>, style: TextStyle) -> Self {
        self.characters = Some(characters.into());
        self.text_style = Some(style);
        self
    }

    pub fn with_main_component(mut self, component_id: impl Into<String>) -> Self {
        self.main_component_id = Some(component_id.into());
        self
    }

    pub fn with_plugin_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.plugin_data.insert(key.into(), value.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Render a float without a trailing `.0` for whole numbers
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let rounded = (value * 100.0).round() / 100.0;
        format!("{}", rounded)
    }
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

fn default_font_weight() -> u16 {
    400
}
