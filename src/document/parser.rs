//! Markdown parsing with comrak.
//!
//! The AST is flattened into styled, word-wrapped lines for the preview
//! pane. Block nodes also record source-line anchors so the preview can
//! follow the editor cursor.

use anyhow::Result;
use comrak::nodes::{AstNode, NodeValue, TableAlignment};
use comrak::{Arena, Options, parse_document};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::types::{
    CodeBlockRef, Document, HeadingRef, InlineSpan, InlineStyle, LineType, ParsedDocument,
    RenderedLine, SourceAnchor, spans_to_string, truncate_spans,
};

impl Document {
    /// Parse markdown source with a default 80-column layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be rendered.
    pub fn parse(source: &str) -> Result<Self> {
        parse_with_layout(source, 80)
    }

    /// Parse markdown source wrapped to `width` columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be rendered.
    pub fn parse_with_layout(source: &str, width: u16) -> Result<Self> {
        parse_with_layout(source, width)
    }
}

/// Parse markdown source into a Document wrapped to `width` columns.
///
/// # Errors
///
/// Returns an error if the source cannot be rendered.
pub fn parse_with_layout(source: &str, width: u16) -> Result<Document> {
    let arena = Arena::new();
    let options = create_options();
    let root = parse_document(&arena, source, &options);

    let mut out = ParsedDocument::default();
    let wrap_width = width.max(1) as usize;
    process_node(root, &mut out, 0, wrap_width, None);

    Ok(Document::from_parsed(source.to_string(), out))
}

fn create_options() -> Options {
    let mut options = Options::default();

    // GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    options
}

/// Record a block's source position so the preview can be scrolled to it.
fn push_anchor<'a>(node: &'a AstNode<'a>, out: &mut ParsedDocument) {
    let source_line = node.data.borrow().sourcepos.start.line.saturating_sub(1);
    // Anchors must stay ascending; skip blocks sharing a source line.
    if out
        .anchors
        .last()
        .is_some_and(|last| last.source_line >= source_line)
    {
        return;
    }
    out.anchors.push(SourceAnchor {
        source_line,
        rendered_line: out.lines.len(),
    });
}

fn process_node<'a>(
    node: &'a AstNode<'a>,
    out: &mut ParsedDocument,
    depth: usize,
    wrap_width: usize,
    list_marker: Option<String>,
) {
    match &node.data.borrow().value {
        NodeValue::Document => {
            for child in node.children() {
                process_node(child, out, depth, wrap_width, list_marker.clone());
            }
        }

        NodeValue::Heading(heading) => {
            let text = extract_text(node);

            // Keep headings visually separated with two rows above.
            ensure_trailing_empty_lines(&mut out.lines, 2);
            push_anchor(node, out);
            let line_num = out.lines.len();

            out.headings.push(HeadingRef {
                level: heading.level,
                text: text.clone(),
                line: line_num,
            });

            let prefix = "#".repeat(heading.level as usize);
            out.lines.push(RenderedLine::new(
                format!("{prefix} {text}"),
                LineType::Heading(heading.level),
            ));
            out.lines.push(RenderedLine::new(String::new(), LineType::Empty));
        }

        NodeValue::Paragraph => {
            push_anchor(node, out);
            let image_refs = collect_paragraph_images(node);

            if image_refs.is_empty() {
                let spans = collect_inline_spans(node);
                let wrapped = wrap_spans(&spans, wrap_width, "", "");
                for line_spans in wrapped {
                    let content = spans_to_string(&line_spans);
                    out.lines.push(RenderedLine::with_spans(
                        content,
                        LineType::Paragraph,
                        line_spans,
                    ));
                }
            } else {
                // Image-only paragraph: one placeholder line per image.
                for (alt, src) in image_refs {
                    let label = if alt.is_empty() { &src } else { &alt };
                    out.lines.push(RenderedLine::new(
                        format!("[Image: {label}]"),
                        LineType::Image,
                    ));
                }
            }
            out.lines.push(RenderedLine::new(String::new(), LineType::Empty));
        }

        NodeValue::CodeBlock(code_block) => {
            const CODE_RIGHT_PADDING: usize = 3;
            push_anchor(node, out);
            let info = code_block.info.clone();
            let literal = code_block.literal.clone();
            let language = info.split_whitespace().next().filter(|s| !s.is_empty());
            let content_width = literal
                .lines()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0)
                .min(wrap_width.saturating_sub(4).max(1));
            let title = language.unwrap_or("code");
            let label = format!(" {title} ");
            let frame_inner_width = content_width + 2 + CODE_RIGHT_PADDING;
            let top_label_width = frame_inner_width.min(label.chars().count());
            let visible_label: String = label.chars().take(top_label_width).collect();
            let top = format!(
                "┌{}{}┐",
                visible_label,
                "─".repeat(frame_inner_width.saturating_sub(visible_label.chars().count()))
            );
            out.lines.push(RenderedLine::new(top, LineType::CodeBlock));

            let body_start = out.lines.len();
            let raw_lines: Vec<String> = literal.lines().map(ToString::to_string).collect();
            for raw_line in &raw_lines {
                let plain_style = InlineStyle {
                    code: true,
                    ..InlineStyle::default()
                };
                let spans = vec![InlineSpan::new(raw_line.clone(), plain_style)];
                let trimmed_spans = truncate_spans(&spans, content_width);
                let trimmed_len = spans_to_string(&trimmed_spans).chars().count();
                let padding =
                    " ".repeat(content_width.saturating_sub(trimmed_len) + CODE_RIGHT_PADDING);

                let mut line_spans = Vec::new();
                line_spans.push(InlineSpan::new("│ ".to_string(), InlineStyle::default()));
                line_spans.extend(trimmed_spans);
                line_spans.push(InlineSpan::new(
                    format!("{padding} │"),
                    InlineStyle::default(),
                ));
                let content = spans_to_string(&line_spans);
                out.lines.push(RenderedLine::with_spans(
                    content,
                    LineType::CodeBlock,
                    line_spans,
                ));
            }
            let body_end = out.lines.len();

            out.code_blocks.push(CodeBlockRef {
                line_range: body_start..body_end,
                language: language.map(ToString::to_string),
                raw_lines,
                highlighted: false,
                content_width,
                right_padding: CODE_RIGHT_PADDING,
            });

            out.lines.push(RenderedLine::new(
                format!("└{}┘", "─".repeat(frame_inner_width)),
                LineType::CodeBlock,
            ));
            out.lines.push(RenderedLine::new(String::new(), LineType::Empty));
        }

        NodeValue::List(list) => {
            let list_depth = depth + 1;
            let start = list.start;
            let delimiter = match list.delimiter {
                comrak::nodes::ListDelimType::Paren => ')',
                comrak::nodes::ListDelimType::Period => '.',
            };
            let list_len = node.children().count();
            let max_number = start + list_len.saturating_sub(1);
            let number_width = max_number.to_string().len();

            for (index, child) in node.children().enumerate() {
                let base_marker = match list.list_type {
                    comrak::nodes::ListType::Bullet => "•".to_string(),
                    comrak::nodes::ListType::Ordered => {
                        let number = start + index;
                        format!("{number:>number_width$}{delimiter}")
                    }
                };
                let marker = format!("{base_marker} ");
                process_node(child, out, list_depth, wrap_width, Some(marker));
            }
        }

        NodeValue::TaskItem(symbol) => {
            push_anchor(node, out);
            let indent = "  ".repeat(depth.saturating_sub(1));
            let task_marker = if symbol.is_some() { "✓" } else { "□" };
            let marker = format!("{task_marker} ");
            let prefix_first = format!("{indent}{marker}");
            let prefix_next = format!("{}{}", indent, " ".repeat(marker.len()));

            let spans = collect_inline_spans(node);
            let wrapped = wrap_spans(&spans, wrap_width, &prefix_first, &prefix_next);
            for line_spans in wrapped {
                let content = spans_to_string(&line_spans);
                out.lines.push(RenderedLine::with_spans(
                    content,
                    LineType::ListItem(depth),
                    line_spans,
                ));
            }

            for child in node.children() {
                if matches!(child.data.borrow().value, NodeValue::List(_)) {
                    process_node(child, out, depth, wrap_width, None);
                }
            }
        }

        NodeValue::Item(_) => {
            push_anchor(node, out);
            let indent = "  ".repeat(depth.saturating_sub(1));
            let base_marker = list_marker.clone().unwrap_or_else(|| "- ".to_string());
            let prefix_first = format!("{indent}{base_marker}");
            let prefix_next = format!("{}{}", indent, " ".repeat(base_marker.chars().count()));
            let mut rendered_any = false;

            for child in node.children() {
                match &child.data.borrow().value {
                    NodeValue::Paragraph => {
                        if rendered_any {
                            out.lines
                                .push(RenderedLine::new(String::new(), LineType::ListItem(depth)));
                        }
                        let spans = collect_inline_spans(child);
                        let prefix = if rendered_any {
                            &prefix_next
                        } else {
                            &prefix_first
                        };
                        let wrapped = wrap_spans(&spans, wrap_width, prefix, &prefix_next);

                        for line_spans in wrapped {
                            let content = spans_to_string(&line_spans);
                            out.lines.push(RenderedLine::with_spans(
                                content,
                                LineType::ListItem(depth),
                                line_spans,
                            ));
                        }
                        rendered_any = true;
                    }
                    NodeValue::List(_) => {
                        process_node(child, out, depth, wrap_width, None);
                    }
                    _ => {
                        process_node(child, out, depth, wrap_width, None);
                    }
                }
            }

            if !rendered_any {
                let spans = collect_inline_spans(node);
                let wrapped = wrap_spans(&spans, wrap_width, &prefix_first, &prefix_next);
                for line_spans in wrapped {
                    let content = spans_to_string(&line_spans);
                    out.lines.push(RenderedLine::with_spans(
                        content,
                        LineType::ListItem(depth),
                        line_spans,
                    ));
                }
            }
        }

        NodeValue::BlockQuote => {
            push_anchor(node, out);
            render_blockquote(node, &mut out.lines, wrap_width, 1);
            out.lines.push(RenderedLine::new(String::new(), LineType::Empty));
        }

        NodeValue::ThematicBreak => {
            push_anchor(node, out);
            out.lines.push(RenderedLine::new(
                "---".to_string(),
                LineType::HorizontalRule,
            ));
            out.lines.push(RenderedLine::new(String::new(), LineType::Empty));
        }

        NodeValue::Table(_) => {
            push_anchor(node, out);
            for line in render_table(node, wrap_width) {
                out.lines.push(RenderedLine::new(line, LineType::Table));
            }
            out.lines.push(RenderedLine::new(String::new(), LineType::Empty));
        }

        NodeValue::Image(image) => {
            let alt = extract_text(node);
            let src = image.url.clone();
            let label = if alt.is_empty() { &src } else { &alt };
            out.lines.push(RenderedLine::new(
                format!("[Image: {label}]"),
                LineType::Image,
            ));
        }

        _ => {
            // Process children for unhandled nodes
            for child in node.children() {
                process_node(child, out, depth, wrap_width, list_marker.clone());
            }
        }
    }
}

fn ensure_trailing_empty_lines(lines: &mut Vec<RenderedLine>, count: usize) {
    let existing = lines
        .iter()
        .rev()
        .take_while(|line| matches!(line.line_type(), LineType::Empty))
        .count();
    for _ in existing..count {
        lines.push(RenderedLine::new(String::new(), LineType::Empty));
    }
}

fn render_blockquote<'a>(
    node: &'a AstNode<'a>,
    lines: &mut Vec<RenderedLine>,
    wrap_width: usize,
    quote_depth: usize,
) {
    let prefix = quote_prefix(quote_depth);

    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Paragraph => {
                let spans = collect_inline_spans(child);
                let wrapped = wrap_spans(&spans, wrap_width, &prefix, &prefix);
                for line_spans in wrapped {
                    let content = spans_to_string(&line_spans);
                    lines.push(RenderedLine::with_spans(
                        content,
                        LineType::BlockQuote,
                        line_spans,
                    ));
                }
            }
            NodeValue::BlockQuote => {
                render_blockquote(child, lines, wrap_width, quote_depth + 1);
            }
            _ => {
                let text = extract_text(child);
                for raw_line in text.lines() {
                    let spans = vec![InlineSpan::new(raw_line.to_string(), InlineStyle::default())];
                    let wrapped = wrap_spans(&spans, wrap_width, &prefix, &prefix);
                    for line_spans in wrapped {
                        let content = spans_to_string(&line_spans);
                        lines.push(RenderedLine::with_spans(
                            content,
                            LineType::BlockQuote,
                            line_spans,
                        ));
                    }
                }
            }
        }
    }
}

fn quote_prefix(depth: usize) -> String {
    let mut prefix = String::from("  ");
    for _ in 0..depth {
        prefix.push('│');
        prefix.push(' ');
    }
    prefix
}

fn render_table<'a>(table_node: &'a AstNode<'a>, wrap_width: usize) -> Vec<String> {
    let (alignments, mut rows, has_header) = collect_table_rows(table_node);
    if rows.is_empty() {
        return Vec::new();
    }

    let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if num_cols == 0 {
        return Vec::new();
    }

    for row in &mut rows {
        while row.len() < num_cols {
            row.push(String::new());
        }
    }

    let mut col_widths = vec![1_usize; num_cols];
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            col_widths[idx] = col_widths[idx].max(display_width(cell));
        }
    }

    // Keep the table inside available width.
    // Table row width is: 1 + sum(col_width + 3) for all columns.
    let max_table_width = wrap_width.max(4);
    while 1 + col_widths.iter().sum::<usize>() + (3 * num_cols) > max_table_width {
        if let Some((widest_idx, _)) = col_widths.iter().enumerate().max_by_key(|(_, w)| *w) {
            if col_widths[widest_idx] > 1 {
                col_widths[widest_idx] -= 1;
            } else {
                break;
            }
        }
    }

    let top = render_table_border(&col_widths, '┌', '┬', '┐');
    let mid = render_table_border(&col_widths, '├', '┼', '┤');
    let bottom = render_table_border(&col_widths, '└', '┴', '┘');

    let mut lines = Vec::new();
    lines.push(top);
    for (idx, row) in rows.iter().enumerate() {
        lines.push(render_table_row(row, &col_widths, &alignments));
        if has_header && idx == 0 {
            lines.push(mid.clone());
        }
    }
    lines.push(bottom);
    lines
}

fn collect_table_rows<'a>(
    table_node: &'a AstNode<'a>,
) -> (Vec<TableAlignment>, Vec<Vec<String>>, bool) {
    let alignments = match &table_node.data.borrow().value {
        NodeValue::Table(table) => table.alignments.clone(),
        _ => Vec::new(),
    };

    let mut rows = Vec::new();
    let mut has_header = false;
    for row_node in table_node.children() {
        let is_header_row = matches!(row_node.data.borrow().value, NodeValue::TableRow(true));
        if is_header_row {
            has_header = true;
        }
        if !matches!(row_node.data.borrow().value, NodeValue::TableRow(_)) {
            continue;
        }

        let mut row_cells = Vec::new();
        for cell_node in row_node.children() {
            if !matches!(cell_node.data.borrow().value, NodeValue::TableCell) {
                continue;
            }
            let cell = extract_text(cell_node)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            row_cells.push(cell);
        }
        rows.push(row_cells);
    }

    (alignments, rows, has_header)
}

fn render_table_border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let mut out = String::new();
    out.push(left);
    for (idx, width) in widths.iter().enumerate() {
        out.push_str(&"─".repeat(width + 2));
        if idx + 1 < widths.len() {
            out.push(middle);
        }
    }
    out.push(right);
    out
}

fn render_table_row(cells: &[String], widths: &[usize], alignments: &[TableAlignment]) -> String {
    let mut out = String::new();
    out.push('│');
    for idx in 0..widths.len() {
        let content = cells.get(idx).map_or("", String::as_str);
        let content = truncate_text(content, widths[idx]);
        let padding = widths[idx].saturating_sub(display_width(&content));

        out.push(' ');
        match alignments.get(idx).copied().unwrap_or(TableAlignment::None) {
            TableAlignment::Right => {
                out.push_str(&" ".repeat(padding));
                out.push_str(&content);
            }
            TableAlignment::Center => {
                let left = padding / 2;
                let right = padding - left;
                out.push_str(&" ".repeat(left));
                out.push_str(&content);
                out.push_str(&" ".repeat(right));
            }
            TableAlignment::Left | TableAlignment::None => {
                out.push_str(&content);
                out.push_str(&" ".repeat(padding));
            }
        }
        out.push(' ');
        out.push('│');
    }
    out
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    let mut out = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_chars {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    extract_text_recursive(node, &mut text);
    text
}

fn extract_text_recursive<'a>(node: &'a AstNode<'a>, text: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => {
            text.push_str(t);
        }
        NodeValue::Code(c) => {
            text.push('`');
            text.push_str(&c.literal);
            text.push('`');
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => {
            text.push('\n');
        }
        _ => {
            for child in node.children() {
                extract_text_recursive(child, text);
            }
        }
    }
}

fn collect_inline_spans<'a>(node: &'a AstNode<'a>) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    collect_inline_spans_recursive(node, InlineStyle::default(), &mut spans);
    spans
}

fn collect_inline_spans_recursive<'a>(
    node: &'a AstNode<'a>,
    style: InlineStyle,
    spans: &mut Vec<InlineSpan>,
) {
    match &node.data.borrow().value {
        // Nested lists are rendered as their own blocks.
        NodeValue::List(_) | NodeValue::Item(_) => {}
        NodeValue::Text(t) => {
            spans.push(InlineSpan::new(t.clone(), style));
        }
        NodeValue::Code(code) => {
            let code_style = InlineStyle {
                code: true,
                fg: style.fg,
                bg: style.bg,
                ..InlineStyle::default()
            };
            spans.push(InlineSpan::new(code.literal.clone(), code_style));
        }
        NodeValue::Emph => {
            let mut next = style;
            next.emphasis = true;
            for child in node.children() {
                collect_inline_spans_recursive(child, next, spans);
            }
        }
        NodeValue::Strong => {
            let mut next = style;
            next.strong = true;
            for child in node.children() {
                collect_inline_spans_recursive(child, next, spans);
            }
        }
        NodeValue::Strikethrough => {
            let mut next = style;
            next.strikethrough = true;
            for child in node.children() {
                collect_inline_spans_recursive(child, next, spans);
            }
        }
        NodeValue::Link(_) => {
            let mut next = style;
            next.link = true;
            for child in node.children() {
                collect_inline_spans_recursive(child, next, spans);
            }
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => {
            spans.push(InlineSpan::new(" ".to_string(), style));
        }
        _ => {
            for child in node.children() {
                collect_inline_spans_recursive(child, style, spans);
            }
        }
    }
}

/// Collect images from a paragraph that contains nothing but images,
/// returning (alt, src) pairs. A paragraph with any other visible content
/// returns an empty list.
fn collect_paragraph_images<'a>(node: &'a AstNode<'a>) -> Vec<(String, String)> {
    let mut images = Vec::new();
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Image(image) => {
                images.push((extract_text(child), image.url.clone()));
            }
            NodeValue::Text(t) if t.trim().is_empty() => {}
            NodeValue::SoftBreak | NodeValue::LineBreak => {}
            _ => return Vec::new(),
        }
    }
    images
}

fn wrap_spans(
    spans: &[InlineSpan],
    width: usize,
    prefix_first: &str,
    prefix_next: &str,
) -> Vec<Vec<InlineSpan>> {
    let mut tokens: Vec<InlineSpan> = Vec::new();
    for span in spans {
        tokens.extend(split_inline_tokens(span));
    }

    let mut lines: Vec<Vec<InlineSpan>> = Vec::new();
    let mut current: Vec<InlineSpan> = Vec::new();
    let mut current_len = 0usize;
    let mut has_word = false;

    let start_new_line = |prefix: &str,
                          current: &mut Vec<InlineSpan>,
                          current_len: &mut usize,
                          has_word: &mut bool| {
        current.clear();
        if prefix.is_empty() {
            *current_len = 0;
        } else {
            current.push(InlineSpan::new(prefix.to_string(), InlineStyle::default()));
            *current_len = prefix.chars().count();
        }
        *has_word = false;
    };

    start_new_line(prefix_first, &mut current, &mut current_len, &mut has_word);

    for token in tokens {
        let token_len = token.text().chars().count();
        let token_is_ws = token.text().chars().all(char::is_whitespace);

        if current_len + token_len > width && has_word {
            lines.push(current.clone());
            start_new_line(prefix_next, &mut current, &mut current_len, &mut has_word);
        }

        if token_is_ws && !has_word {
            // Drop leading whitespace at wrapped line starts.
            continue;
        }

        current_len += token_len;
        current.push(token);
        if !token_is_ws {
            has_word = true;
        }
    }

    if current.is_empty() && !prefix_first.is_empty() {
        current.push(InlineSpan::new(
            prefix_first.to_string(),
            InlineStyle::default(),
        ));
    }

    lines.push(current);
    lines
}

fn split_inline_tokens(span: &InlineSpan) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut ws_state: Option<bool> = None;

    for ch in span.text().chars() {
        let is_ws = ch.is_whitespace();
        match ws_state {
            Some(state) if state == is_ws => {
                buf.push(ch);
            }
            Some(_) => {
                out.push(InlineSpan::new(std::mem::take(&mut buf), span.style()));
                buf.push(ch);
                ws_state = Some(is_ws);
            }
            None => {
                buf.push(ch);
                ws_state = Some(is_ws);
            }
        }
    }

    if !buf.is_empty() {
        out.push(InlineSpan::new(buf, span.style()));
    }

    out
}
