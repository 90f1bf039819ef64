//! Inline span parsing.
//!
//! Text is split in fixed stages: images, links, code, bold, italic. Each stage
//! only subdivides spans that are still `Plain`, so anything typed by an earlier
//! stage is never rescanned. Images go first so that `![alt](src)` is never
//! read as a link.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::block::{Span, SpanKind};
use crate::error::InlineError;

// Text may hold balanced brackets, e.g. `[docs [v2]]`. Target tolerates a
// single literal parenthesis pair, e.g. `wiki/Foo_(bar)`.
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[((?:[^\[\]]|\[[^\[\]]*\])*)\]\(([^()]*(?:\([^()]*\)[^()]*)?)\)").unwrap()
});
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[((?:[^\[\]]|\[[^\[\]]*\])*)\]\(([^()]*(?:\([^()]*\)[^()]*)?)\)").unwrap()
});

const CODE_DELIMITER: &str = "`";
const BOLD_DELIMITER: &str = "**";
const ITALIC_DELIMITER: &str = "_";

/// Split a text unit into an ordered sequence of typed spans.
///
/// Empty input yields no spans; text without markup yields a single plain span.
pub fn parse_inline(text: &str) -> Result<Vec<Span>, InlineError> {
    let spans = if text.is_empty() {
        Vec::new()
    } else {
        vec![Span::plain(text)]
    };

    let spans = split_pattern(spans, &IMAGE_RE, |caps| {
        Span::image(&caps[1], &caps[2])
    });
    let spans = split_pattern(spans, &LINK_RE, |caps| Span::link(&caps[1], &caps[2]));
    let spans = split_delimiter(spans, CODE_DELIMITER, SpanKind::Code)?;
    let spans = split_delimiter(spans, BOLD_DELIMITER, SpanKind::Bold)?;
    split_delimiter(spans, ITALIC_DELIMITER, SpanKind::Italic)
}

/// Replace every match of `pattern` inside plain spans with the span built by `make`.
///
/// Matches with an empty target are left as plain text.
fn split_pattern(
    spans: Vec<Span>,
    pattern: &Regex,
    make: impl Fn(&Captures) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut last = 0;
        for caps in pattern.captures_iter(&span.text) {
            if caps[2].is_empty() {
                continue;
            }
            let Some(whole) = caps.get(0) else {
                continue;
            };
            push_plain(&mut out, &span.text[last..whole.start()]);
            out.push(make(&caps));
            last = whole.end();
        }
        push_plain(&mut out, &span.text[last..]);
    }

    out
}

/// Split plain spans on a paired delimiter; odd pieces become `kind`.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(InlineError::UnmatchedDelimiter {
                delimiter,
                offset: span.text.rfind(delimiter).unwrap_or_default(),
                text: span.text,
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(Span::styled(piece, piece_kind));
        }
    }

    Ok(out)
}

fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::plain(text));
    }
}
