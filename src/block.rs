/// Kind of an inline text span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed, contiguous piece of inline text.
///
/// `url` is set for `Link` and `Image` spans only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, SpanKind::Plain)
    }

    /// Span of a delimiter-based kind (plain, bold, italic, code).
    pub fn styled(text: impl Into<String>, kind: SpanKind) -> Self {
        debug_assert!(!matches!(kind, SpanKind::Link | SpanKind::Image));
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Structural type of a Markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}
