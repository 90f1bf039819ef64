use std::sync::LazyLock;

use regex::Regex;

use crate::block::{BlockType, Span, SpanKind};
use crate::error::{Error, InlineError};
use crate::html::HtmlNode;
use crate::inline::parse_inline;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HEADING_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6} .+").unwrap());
static ORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

const CONTAINER_TAG: &str = "div";

/// Build the HTML tree for classified blocks, wrapped in a single container.
pub fn build(blocks: &[(BlockType, String)]) -> Result<HtmlNode, Error> {
    let mut children = Vec::with_capacity(blocks.len());

    for (index, (block_type, block)) in blocks.iter().enumerate() {
        let nodes =
            block_to_nodes(*block_type, block).map_err(|source| Error::Inline {
                block: index,
                source,
            })?;
        children.extend(nodes);
    }

    Ok(HtmlNode::parent(CONTAINER_TAG, children))
}

/// Convert an inline span to a leaf node.
pub fn span_to_node(span: Span) -> HtmlNode {
    match span.kind {
        SpanKind::Plain => HtmlNode::text(span.text),
        SpanKind::Bold => HtmlNode::leaf("b", span.text),
        SpanKind::Italic => HtmlNode::leaf("i", span.text),
        SpanKind::Code => HtmlNode::leaf("code", span.text),
        SpanKind::Link => {
            HtmlNode::leaf("a", span.text).with_attribute("href", span.url.unwrap_or_default())
        }
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", span.url.unwrap_or_default())
            .with_attribute("alt", span.text),
    }
}

// Headings may expand to several nodes; every other block type yields one.
fn block_to_nodes(block_type: BlockType, block: &str) -> Result<Vec<HtmlNode>, InlineError> {
    let node = match block_type {
        BlockType::Paragraph => paragraph(block)?,
        BlockType::Heading => return headings(block),
        BlockType::Code => code_block(block),
        BlockType::Quote => quote(block)?,
        BlockType::UnorderedList => list("ul", block, |line| {
            line.strip_prefix("- ").unwrap_or(line).trim().to_string()
        })?,
        BlockType::OrderedList => list("ol", block, |line| {
            ORDERED_MARKER_RE.replace(line, "").trim().to_string()
        })?,
    };
    Ok(vec![node])
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    Ok(parse_inline(text)?.into_iter().map(span_to_node).collect())
}

fn paragraph(block: &str) -> Result<HtmlNode, InlineError> {
    let text = WHITESPACE_RE.replace_all(block, " ");
    Ok(HtmlNode::parent("p", inline_children(text.trim())?))
}

/// Each heading line opens a heading; other lines continue the previous one.
///
/// The first line is always a heading line, as classification requires it.
fn headings(block: &str) -> Result<Vec<HtmlNode>, InlineError> {
    let mut lines = block.split('\n');
    let mut current = heading_part(lines.next().unwrap_or_default());
    let mut parts = Vec::new();

    for line in lines {
        if HEADING_LINE_RE.is_match(line) {
            parts.push(std::mem::replace(&mut current, heading_part(line)));
        } else {
            current.1.push(' ');
            current.1.push_str(line.trim());
        }
    }
    parts.push(current);

    parts
        .into_iter()
        .map(|(level, text)| {
            inline_children(&text).map(|children| HtmlNode::parent(format!("h{level}"), children))
        })
        .collect()
}

/// Level and text of a `#`-prefixed line.
fn heading_part(line: &str) -> (usize, String) {
    let text = line.trim_start_matches('#');
    (line.len() - text.len(), text.trim().to_string())
}

/// Fence lines, info string included, are dropped; the body is kept verbatim.
fn code_block(block: &str) -> HtmlNode {
    let lines: Vec<&str> = block.split('\n').collect();
    let body = match lines.len() {
        0..=2 => String::new(),
        n => lines[1..n - 1].join("\n"),
    };
    let content = format!("{}\n", body.trim_end_matches('\n'));

    let code = HtmlNode::parent("code", vec![HtmlNode::text(content)]);
    HtmlNode::parent("pre", vec![code])
}

fn quote(block: &str) -> Result<HtmlNode, InlineError> {
    let text = block
        .split('\n')
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", inline_children(text.trim())?))
}

fn list(
    tag: &str,
    block: &str,
    strip_marker: impl Fn(&str) -> String,
) -> Result<HtmlNode, InlineError> {
    let items = block
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            inline_children(&strip_marker(line.trim()))
                .map(|children| HtmlNode::parent("li", children))
        })
        .collect::<Result<Vec<_>, InlineError>>()?;
    Ok(HtmlNode::parent(tag, items))
}
