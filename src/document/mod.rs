//! Markdown document parsing and rendering.
//!
//! This module handles:
//! - Parsing markdown with comrak
//! - Extracting document structure (headings, source anchors)
//! - Rendering to styled lines for the preview pane

mod parser;
mod types;

pub use parser::parse_with_layout;
pub use types::{
    Document, HeadingRef, InlineColor, InlineSpan, InlineStyle, LineType, RenderedLine,
    SourceAnchor,
};
