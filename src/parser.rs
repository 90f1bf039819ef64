use std::sync::LazyLock;

use regex::Regex;

use crate::block::BlockType;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6} .+").unwrap());

const FENCE: &str = "```";

/// Split a document into blocks separated by blank lines.
///
/// Each line of a block is trimmed; lines are rejoined with `\n`.
pub fn segment(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.split('\n') {
        let line = line.trim();
        if !line.is_empty() {
            current.push(line);
        } else if !current.is_empty() {
            blocks.push(current.join("\n"));
            current.clear();
        }
    }

    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Determine the structural type of a block.
///
/// Checks run Heading, Code, Quote, UnorderedList, OrderedList; the first match
/// wins and anything else is a paragraph.
pub fn classify(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    if HEADING_RE.is_match(lines[0]) {
        return BlockType::Heading;
    }

    if is_code_fence(&lines) {
        return BlockType::Code;
    }

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }

    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Segment a document and classify every block.
pub fn parse(markdown: &str) -> Vec<(BlockType, String)> {
    segment(markdown)
        .into_iter()
        .map(|block| {
            let block_type = classify(&block);
            log::debug!("classified block as {block_type:?}: {:?}", first_line(&block));
            (block_type, block)
        })
        .collect()
}

fn is_code_fence(lines: &[&str]) -> bool {
    lines.len() >= 2 && lines[0].starts_with(FENCE) && lines[lines.len() - 1] == FENCE
}

fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}

fn first_line(block: &str) -> &str {
    block.split('\n').next().unwrap_or_default()
}
