//! # mdast-builder
//!
//! Builder functions for Markdown (mdast) syntax trees.
//!
//! This crate only constructs the in-memory tree. Turning a tree into
//! Markdown text is the job of a downstream renderer that understands the
//! mdast vocabulary; the serde representation of [`Node`] is the mdast
//! interchange shape it consumes.
//!
//! ```text
//! builder calls ──▶ ┌──────────────┐
//!                   │ Markdown AST │ ──serde──▶ mdast JSON ──▶ renderer
//!                   └──────────────┘
//! ```
//!
//! Every factory function that takes children accepts them in several shapes
//! (a single node, a sequence, a deferred producer, or nothing) and
//! normalizes whichever was given into an ordered `Vec<Node>`:
//!
//! ```rust
//! use mdast_builder::{paragraph, root_with_title, text};
//!
//! let doc = root_with_title(2, text("Title"), paragraph(text("body")))?;
//! assert_eq!(doc.children().unwrap().len(), 2);
//! # Ok::<(), mdast_builder::BuildError>(())
//! ```

mod ast;
mod builder;
mod children;

pub use ast::{Align, Node};
pub use builder::{
    blockquote, code, emphasis, heading, html, image, inline_code, link, list, list_item,
    paragraph, root, root_with_title, strike, strong, table, table_cell, table_row, text, BREAK,
    SEPARATOR,
};
pub use children::Children;

/// Error type for tree construction
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Heading depth must be a positive integer
    #[error("Invalid depth: {0}")]
    InvalidDepth(u8),
}

pub type Result<T> = std::result::Result<T, BuildError>;
