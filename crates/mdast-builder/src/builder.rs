//! Factory functions for assembling Markdown trees.
//!
//! Each function builds one node kind. Functions that accept children take
//! any [`Children`] shape and normalize it into an ordered sequence. None of
//! them validates string contents; the only constructor that can fail is
//! [`heading`].

use once_cell::sync::Lazy;

use crate::ast::{Align, Node};
use crate::children::Children;
use crate::{BuildError, Result};

/// Hard line break, shared wherever one is needed
pub static BREAK: Node = Node::Break;

/// Thematic break rendered as literal `---` text.
///
/// Deliberately a plain text node rather than a dedicated node type;
/// downstream renderers treat it as ordinary text content.
pub static SEPARATOR: Lazy<Node> = Lazy::new(|| text("---"));

/// Plain text leaf
pub fn text(value: impl Into<String>) -> Node {
    Node::Text {
        value: value.into(),
    }
}

/// Inline code span
pub fn inline_code(value: impl Into<String>) -> Node {
    Node::InlineCode {
        value: value.into(),
    }
}

/// Raw HTML leaf
pub fn html(value: impl Into<String>) -> Node {
    Node::Html {
        value: value.into(),
    }
}

/// Code block with a language tag
pub fn code(lang: impl Into<String>, value: impl Into<String>) -> Node {
    Node::Code {
        lang: lang.into(),
        value: value.into(),
    }
}

/// Strong emphasis (bold)
pub fn strong(children: impl Into<Children>) -> Node {
    Node::Strong {
        children: children.into().normalize(),
    }
}

/// Emphasis (italic)
pub fn emphasis(children: impl Into<Children>) -> Node {
    Node::Emphasis {
        children: children.into().normalize(),
    }
}

/// Strikethrough, producing a `delete` node
pub fn strike(children: impl Into<Children>) -> Node {
    Node::Delete {
        children: children.into().normalize(),
    }
}

/// Block quote
pub fn blockquote(children: impl Into<Children>) -> Node {
    Node::Blockquote {
        children: children.into().normalize(),
    }
}

/// Paragraph
pub fn paragraph(children: impl Into<Children>) -> Node {
    Node::Paragraph {
        children: children.into().normalize(),
    }
}

/// Root document container
pub fn root(children: impl Into<Children>) -> Node {
    Node::Root {
        children: children.into().normalize(),
    }
}

/// Table cell
pub fn table_cell(children: impl Into<Children>) -> Node {
    Node::TableCell {
        children: children.into().normalize(),
    }
}

/// Table row
pub fn table_row(children: impl Into<Children>) -> Node {
    Node::TableRow {
        children: children.into().normalize(),
    }
}

/// List item
pub fn list_item(children: impl Into<Children>) -> Node {
    Node::ListItem {
        children: children.into().normalize(),
    }
}

/// Heading at the given depth (1 = outermost).
///
/// Fails when `depth` is zero; there is no upper bound.
pub fn heading(depth: u8, children: impl Into<Children>) -> Result<Node> {
    if depth == 0 {
        return Err(BuildError::InvalidDepth(depth));
    }
    Ok(Node::Heading {
        depth,
        children: children.into().normalize(),
    })
}

/// List node, ordered exactly when the marker string is `"ordered"`.
///
/// Any other marker, typos included, yields an unordered list.
pub fn list(ordered: &str, children: impl Into<Children>) -> Node {
    Node::List {
        ordered: ordered == "ordered",
        children: children.into().normalize(),
    }
}

/// Table with optional per-column alignment.
///
/// `align` is stored as given; its length is not checked against the columns
/// actually present in the rows.
pub fn table(align: Option<Vec<Align>>, children: impl Into<Children>) -> Node {
    Node::Table {
        align,
        children: children.into().normalize(),
    }
}

/// Link with URL and optional title (defaults to the empty string)
pub fn link(url: impl Into<String>, title: Option<&str>, children: impl Into<Children>) -> Node {
    Node::Link {
        url: url.into(),
        title: title.unwrap_or_default().to_string(),
        children: children.into().normalize(),
    }
}

/// Image with URL and optional title and alt text.
///
/// Unset options stay unset; they are not coerced to empty strings.
pub fn image(
    url: impl Into<String>,
    title: Option<&str>,
    alt: Option<&str>,
    children: impl Into<Children>,
) -> Node {
    Node::Image {
        url: url.into(),
        title: title.map(str::to_string),
        alt: alt.map(str::to_string),
        children: children.into().normalize(),
    }
}

/// Root node opened by a heading at the given depth.
///
/// The remaining children become top-level siblings of the heading rather
/// than being wrapped in an intervening paragraph.
pub fn root_with_title(
    depth: u8,
    title: impl Into<Children>,
    children: impl Into<Children>,
) -> Result<Node> {
    let mut nodes = vec![heading(depth, title)?];
    nodes.extend(children.into().normalize());
    Ok(root(nodes))
}
