//! Core document types.

use std::ops::Range;

/// Result of parsing markdown, ready to be assembled into a `Document`.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Rendered lines for display
    pub lines: Vec<RenderedLine>,
    /// Heading references
    pub headings: Vec<HeadingRef>,
    /// Block-level source line -> rendered line anchors
    pub anchors: Vec<SourceAnchor>,
    /// Code blocks for lazy syntax highlighting
    pub code_blocks: Vec<CodeBlockRef>,
}

/// A parsed and rendered markdown document.
///
/// The preview pane draws these lines; the document itself is immutable
/// apart from lazy syntax highlighting, and is rebuilt wholesale whenever
/// the editor buffer changes.
#[derive(Debug, Clone)]
pub struct Document {
    /// Original source text
    source: String,
    /// Rendered lines for display
    lines: Vec<RenderedLine>,
    /// Heading references
    headings: Vec<HeadingRef>,
    /// Block-level source line -> rendered line anchors, ascending
    anchors: Vec<SourceAnchor>,
    /// Code blocks for lazy syntax highlighting
    code_blocks: Vec<CodeBlockRef>,
}

impl Document {
    /// Create an empty document.
    pub const fn empty() -> Self {
        Self {
            source: String::new(),
            lines: Vec::new(),
            headings: Vec::new(),
            anchors: Vec::new(),
            code_blocks: Vec::new(),
        }
    }

    /// Create a new document from parsed results.
    pub(crate) fn from_parsed(source: String, result: ParsedDocument) -> Self {
        Self {
            source,
            lines: result.lines,
            headings: result.headings,
            anchors: result.anchors,
            code_blocks: result.code_blocks,
        }
    }

    /// Get the total number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get all headings.
    pub fn headings(&self) -> &[HeadingRef] {
        &self.headings
    }

    /// Get the source text this document was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get visible lines for rendering, from `offset` to `offset + count`.
    pub fn visible_lines(&self, offset: usize, count: usize) -> Vec<&RenderedLine> {
        self.lines.iter().skip(offset).take(count).collect()
    }

    /// Get a specific rendered line by index.
    pub fn line_at(&self, index: usize) -> Option<&RenderedLine> {
        self.lines.get(index)
    }

    /// Map a zero-based source line to the rendered line of the block
    /// containing it.
    ///
    /// Returns the anchor of the closest block starting at or before the
    /// source line, or `None` for a document without anchors.
    pub fn rendered_line_for_source_line(&self, source_line: usize) -> Option<usize> {
        if self.anchors.is_empty() {
            return None;
        }
        let next = self
            .anchors
            .partition_point(|a| a.source_line <= source_line);
        let idx = next.checked_sub(1).unwrap_or(0);
        Some(self.anchors[idx].rendered_line)
    }

    /// Lazily apply syntax highlighting to code blocks intersecting `range`.
    pub fn ensure_highlight_for_range(&mut self, range: Range<usize>) {
        for block in &mut self.code_blocks {
            if block.highlighted
                || block.line_range.end <= range.start
                || block.line_range.start >= range.end
            {
                continue;
            }

            let highlighted = crate::highlight::highlight_code(
                block.language.as_deref(),
                &block.raw_lines.join("\n"),
            );

            for (line_idx, spans) in
                (block.line_range.start..block.line_range.end).zip(highlighted.into_iter())
            {
                if line_idx >= self.lines.len() {
                    break;
                }
                let trimmed_spans = truncate_spans(&spans, block.content_width);
                let trimmed_len = spans_char_len(&trimmed_spans);
                let padding = " "
                    .repeat(block.content_width.saturating_sub(trimmed_len) + block.right_padding);

                let mut line_spans = Vec::new();
                line_spans.push(InlineSpan::new("│ ".to_string(), InlineStyle::default()));
                line_spans.extend(trimmed_spans);
                line_spans.push(InlineSpan::new(
                    format!("{padding} │"),
                    InlineStyle::default(),
                ));
                let content = spans_to_string(&line_spans);
                self.lines[line_idx] =
                    RenderedLine::with_spans(content, LineType::CodeBlock, line_spans);
            }

            block.highlighted = true;
        }
    }
}

/// Fenced code block pending lazy highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockRef {
    pub line_range: Range<usize>,
    pub language: Option<String>,
    pub raw_lines: Vec<String>,
    pub highlighted: bool,
    pub content_width: usize,
    pub right_padding: usize,
}

/// Mapping from a block's first source line to its first rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceAnchor {
    /// Zero-based line in the markdown source
    pub source_line: usize,
    /// Zero-based line in the rendered document
    pub rendered_line: usize,
}

/// A single rendered line with styling information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// The text content of the line
    content: String,
    /// The type of line (for styling)
    line_type: LineType,
    /// Optional inline-styled spans for rendering
    spans: Vec<InlineSpan>,
}

impl RenderedLine {
    /// Create a new rendered line.
    pub const fn new(content: String, line_type: LineType) -> Self {
        Self {
            content,
            line_type,
            spans: Vec::new(),
        }
    }

    /// Create a new rendered line with inline spans.
    pub const fn with_spans(content: String, line_type: LineType, spans: Vec<InlineSpan>) -> Self {
        Self {
            content,
            line_type,
            spans,
        }
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the line type.
    pub const fn line_type(&self) -> &LineType {
        &self.line_type
    }

    /// Get inline spans, if present.
    pub fn spans(&self) -> Option<&[InlineSpan]> {
        if self.spans.is_empty() {
            None
        } else {
            Some(&self.spans)
        }
    }
}

/// Inline style flags for a text span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub emphasis: bool,
    pub strong: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub link: bool,
    pub fg: Option<InlineColor>,
    pub bg: Option<InlineColor>,
}

/// RGB color for inline styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A styled inline span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    text: String,
    style: InlineStyle,
}

impl InlineSpan {
    pub const fn new(text: String, style: InlineStyle) -> Self {
        Self { text, style }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn style(&self) -> InlineStyle {
        self.style
    }
}

/// Type of a rendered line, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Normal paragraph text
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    /// Code block line
    CodeBlock,
    /// Block quote line
    BlockQuote,
    /// List item with nesting level
    ListItem(usize),
    /// Table row
    Table,
    /// Horizontal rule
    HorizontalRule,
    /// Image placeholder
    Image,
    /// Empty line
    Empty,
}

/// Reference to a heading in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRef {
    /// Heading level (1-6)
    pub level: u8,
    /// Heading text (plain, no formatting)
    pub text: String,
    /// Line number in the rendered document
    pub line: usize,
}

pub(crate) fn spans_to_string(spans: &[InlineSpan]) -> String {
    let mut content = String::new();
    for span in spans {
        content.push_str(span.text());
    }
    content
}

pub(crate) fn spans_char_len(spans: &[InlineSpan]) -> usize {
    spans.iter().map(|s| s.text().chars().count()).sum()
}

pub(crate) fn truncate_spans(spans: &[InlineSpan], max_len: usize) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    let mut remaining = max_len;
    for span in spans {
        if remaining == 0 {
            break;
        }
        let taken: String = span.text().chars().take(remaining).collect();
        let count = taken.chars().count();
        if count > 0 {
            out.push(InlineSpan::new(taken, span.style()));
            remaining -= count;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(text: &str) -> RenderedLine {
        RenderedLine::new(text.to_string(), LineType::Paragraph)
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::empty();
        assert_eq!(doc.line_count(), 0);
        assert!(doc.headings().is_empty());
        assert_eq!(doc.source(), "");
    }

    #[test]
    fn test_rendered_line_accessors() {
        let line = RenderedLine::new("Hello".to_string(), LineType::Paragraph);
        assert_eq!(line.content(), "Hello");
        assert_eq!(*line.line_type(), LineType::Paragraph);
        assert!(line.spans().is_none());
    }

    #[test]
    fn test_visible_lines() {
        let lines = vec![para("one"), para("two"), para("three"), para("four")];
        let doc = Document::from_parsed(
            "source".to_string(),
            ParsedDocument {
                lines,
                ..ParsedDocument::default()
            },
        );

        let visible = doc.visible_lines(1, 2);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].content(), "two");
        assert_eq!(visible[1].content(), "three");
    }

    #[test]
    fn test_visible_lines_beyond_end() {
        let doc = Document::from_parsed(
            "source".to_string(),
            ParsedDocument {
                lines: vec![para("one"), para("two")],
                ..ParsedDocument::default()
            },
        );

        let visible = doc.visible_lines(0, 10);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_anchor_lookup_exact_and_between() {
        let doc = Document::from_parsed(
            String::new(),
            ParsedDocument {
                lines: vec![para(""); 20],
                anchors: vec![
                    SourceAnchor {
                        source_line: 0,
                        rendered_line: 0,
                    },
                    SourceAnchor {
                        source_line: 4,
                        rendered_line: 7,
                    },
                    SourceAnchor {
                        source_line: 9,
                        rendered_line: 15,
                    },
                ],
                ..ParsedDocument::default()
            },
        );

        assert_eq!(doc.rendered_line_for_source_line(0), Some(0));
        assert_eq!(doc.rendered_line_for_source_line(4), Some(7));
        // Source line inside the second block maps to its first rendered line
        assert_eq!(doc.rendered_line_for_source_line(6), Some(7));
        assert_eq!(doc.rendered_line_for_source_line(100), Some(15));
    }

    #[test]
    fn test_anchor_lookup_empty_returns_none() {
        let doc = Document::empty();
        assert_eq!(doc.rendered_line_for_source_line(3), None);
    }

    #[test]
    fn test_truncate_spans_limits_chars() {
        let spans = vec![
            InlineSpan::new("hello ".to_string(), InlineStyle::default()),
            InlineSpan::new("world".to_string(), InlineStyle::default()),
        ];
        let out = truncate_spans(&spans, 8);
        assert_eq!(spans_to_string(&out), "hello wo");
        assert_eq!(spans_char_len(&out), 8);
    }
}
