//! Render node tree for markup surfaces.
//!
//! Converts a [`RenderModel`] into a tree of labeled nodes (tag, classes,
//! attributes, inline style, text, children) that a host can turn into
//! elements. The tree can also be serialized straight to HTML.

use serde::Serialize;
use std::fmt::Write as _;

use crate::models::{CharCategory, RenderModel};

/// CSS custom property carrying the title size.
pub const TITLE_FONT_SIZE_VAR: &str = "--char-title-font-size";

/// Color used for the "Total" statistic, which has no category.
pub const NORMAL_TEXT_COLOR: &str = "var(--text-normal)";

/// Element kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeTag {
    /// Block container
    Div,
    /// Inline container
    Span,
}

impl NodeTag {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
        }
    }
}

/// A labeled container in the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    /// Element kind
    pub tag: NodeTag,
    /// CSS classes, in order
    pub classes: Vec<String>,
    /// Attributes in insertion order
    pub attributes: Vec<(String, String)>,
    /// Inline style declarations in insertion order
    pub style: Vec<(String, String)>,
    /// Text content, rendered before children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child nodes
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Creates an empty node.
    #[must_use]
    pub fn new(tag: NodeTag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            style: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Creates a `div` with the given classes (space separated).
    #[must_use]
    pub fn div(classes: &str) -> Self {
        Self::new(NodeTag::Div).with_classes(classes)
    }

    /// Creates a `span` with the given classes (space separated).
    #[must_use]
    pub fn span(classes: &str) -> Self {
        Self::new(NodeTag::Span).with_classes(classes)
    }

    /// Adds space-separated classes.
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    /// Sets the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Adds an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Adds an inline style declaration.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends child nodes.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns true if the node carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Looks up an inline style value.
    #[must_use]
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// First node (depth-first, self included) carrying `class`.
    #[must_use]
    pub fn find(&self, class: &str) -> Option<&Self> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(class))
    }

    /// All nodes (depth-first, self included) carrying `class`.
    #[must_use]
    pub fn find_all(&self, class: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect(class, &mut found);
        found
    }

    fn collect<'a>(&'a self, class: &str, found: &mut Vec<&'a Self>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(class, found);
        }
    }

    /// Serializes the tree to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let tag = self.tag.as_str();
        out.push('<');
        out.push_str(tag);

        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        if !self.style.is_empty() {
            let style: Vec<String> = self
                .style
                .iter()
                .map(|(p, v)| format!("{p}: {v}"))
                .collect();
            let _ = write!(out, " style=\"{}\"", escape(&style.join("; ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');

        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }

        let _ = write!(out, "</{tag}>");
    }
}

/// Escapes text for use in HTML content and quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            _ => out.push(c),
        }
    }
    out
}

/// Converts a render model into a node tree.
///
/// Layout: `charview-block` holding, in order, the optional title, the
/// optional color key, the `charview-wrapper` of lines, and the optional
/// statistics panel.
#[must_use]
pub fn to_node_tree(model: &RenderModel) -> RenderNode {
    let mut block = RenderNode::div("charview-block");
    for category in CharCategory::ALL {
        block = block.with_style(
            category.css_variable(),
            model.colors.for_category(category).to_hex(),
        );
    }
    block = block.with_style(TITLE_FONT_SIZE_VAR, model.title_font_size.clone());

    if let Some(title) = &model.title {
        let transform = if model.title_uppercase {
            "uppercase"
        } else {
            "none"
        };
        block = block.with_child(
            RenderNode::div("charview-title")
                .with_text(title.clone())
                .with_style("text-transform", transform),
        );
    }

    if let Some(entries) = &model.color_key {
        let items = entries.iter().map(|entry| {
            RenderNode::div("charview-key-item")
                .with_child(
                    RenderNode::div("charview-key-color")
                        .with_style("background-color", entry.color.to_hex()),
                )
                .with_child(RenderNode::span("charview-key-label").with_text(entry.label))
        });
        block = block.with_child(RenderNode::div("charview-color-key").with_children(items));
    }

    let lines = model.lines.iter().map(|line| {
        let cells = line.iter().map(|cell| {
            RenderNode::div(&format!("charview-char {}", cell.css_class()))
                .with_text(cell.display.clone())
                .with_attr("title", cell.tooltip.to_string())
        });
        RenderNode::div("charview-line").with_children(cells)
    });
    block = block.with_child(RenderNode::div("charview-wrapper").with_children(lines));

    if let Some(stats) = &model.stats {
        let items = stats.items().into_iter().map(|(label, value, category)| {
            let color = category.map_or_else(
                || NORMAL_TEXT_COLOR.to_string(),
                |c| model.colors.for_category(c).to_hex(),
            );
            RenderNode::span("charview-stat-item")
                .with_child(RenderNode::span("").with_text(format!("{label}: ")))
                .with_child(
                    RenderNode::span("")
                        .with_text(value.to_string())
                        .with_style("color", color),
                )
        });
        block = block.with_child(RenderNode::div("charview-stats").with_children(items));
    }

    block
}
