//! Markdown Abstract Syntax Tree
//!
//! This module defines the node vocabulary for representing Markdown
//! documents. The serde form is the mdast interchange shape: every node is a
//! map tagged by `type`, with camelCase tags (`inlineCode`, `tableCell`, ...).

use serde::{Deserialize, Serialize};

/// A Markdown tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Plain text
    Text { value: String },

    /// Inline code span
    InlineCode { value: String },

    /// Raw HTML
    Html { value: String },

    /// Code block with language tag
    Code { lang: String, value: String },

    /// Strong emphasis (bold)
    Strong { children: Vec<Node> },

    /// Emphasis (italic)
    Emphasis { children: Vec<Node> },

    /// Strikethrough (`delete` in mdast)
    Delete { children: Vec<Node> },

    /// Block quote
    Blockquote { children: Vec<Node> },

    /// Paragraph
    Paragraph { children: Vec<Node> },

    /// Root document container
    Root { children: Vec<Node> },

    /// Table cell
    TableCell { children: Vec<Node> },

    /// Table row
    TableRow { children: Vec<Node> },

    /// List item
    ListItem { children: Vec<Node> },

    /// Heading with depth (1 = outermost)
    Heading { depth: u8, children: Vec<Node> },

    /// List (ordered or unordered)
    List { ordered: bool, children: Vec<Node> },

    /// Table with optional per-column alignment
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Vec<Align>>,
        children: Vec<Node>,
    },

    /// Link with URL and title
    Link {
        url: String,
        title: String,
        children: Vec<Node>,
    },

    /// Image with URL and optional title and alt text
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        children: Vec<Node>,
    },

    /// Hard line break
    Break,
}

impl Node {
    /// The mdast `type` tag of this node
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Text { .. } => "text",
            Node::InlineCode { .. } => "inlineCode",
            Node::Html { .. } => "html",
            Node::Code { .. } => "code",
            Node::Strong { .. } => "strong",
            Node::Emphasis { .. } => "emphasis",
            Node::Delete { .. } => "delete",
            Node::Blockquote { .. } => "blockquote",
            Node::Paragraph { .. } => "paragraph",
            Node::Root { .. } => "root",
            Node::TableCell { .. } => "tableCell",
            Node::TableRow { .. } => "tableRow",
            Node::ListItem { .. } => "listItem",
            Node::Heading { .. } => "heading",
            Node::List { .. } => "list",
            Node::Table { .. } => "table",
            Node::Link { .. } => "link",
            Node::Image { .. } => "image",
            Node::Break => "break",
        }
    }

    /// Child nodes, or `None` for leaf variants
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Strong { children }
            | Node::Emphasis { children }
            | Node::Delete { children }
            | Node::Blockquote { children }
            | Node::Paragraph { children }
            | Node::Root { children }
            | Node::TableCell { children }
            | Node::TableRow { children }
            | Node::ListItem { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::Table { children, .. }
            | Node::Link { children, .. }
            | Node::Image { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Mutable access to child nodes, or `None` for leaf variants
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Strong { children }
            | Node::Emphasis { children }
            | Node::Delete { children }
            | Node::Blockquote { children }
            | Node::Paragraph { children }
            | Node::Root { children }
            | Node::TableCell { children }
            | Node::TableRow { children }
            | Node::ListItem { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::Table { children, .. }
            | Node::Link { children, .. }
            | Node::Image { children, .. } => Some(children),
            _ => None,
        }
    }
}

/// Per-column table alignment
///
/// `Unset` is the column with no alignment marker; it serializes as JSON
/// `null` to match the mdast `alignType` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
    Unset,
}

impl Serialize for Align {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Align::Left => serializer.serialize_str("left"),
            Align::Right => serializer.serialize_str("right"),
            Align::Center => serializer.serialize_str("center"),
            Align::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Align {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Align::Unset),
            Some(value) => match value.as_str() {
                "left" => Ok(Align::Left),
                "right" => Ok(Align::Right),
                "center" => Ok(Align::Center),
                other => Err(serde::de::Error::unknown_variant(
                    other,
                    &["left", "right", "center"],
                )),
            },
        }
    }
}
