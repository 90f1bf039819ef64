mod block;
mod builder;
mod config;
mod error;
mod html;
mod inline;
mod parser;
pub mod site;

pub use block::{BlockType, Span, SpanKind};
pub use builder::{build, span_to_node};
pub use config::{Config, ConfigError, PathsConfig, SiteConfig};
pub use error::{Error, InlineError, NodeError};
pub use html::{Attributes, HtmlNode};
pub use inline::parse_inline;
pub use parser::{classify, segment};

/// Split markdown into blocks and classify each one.
pub fn parse(markdown: &str) -> Vec<(BlockType, String)> {
    parser::parse(markdown)
}

/// Convert markdown to an HTML node tree rooted at a `div`.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, Error> {
    build(&parse(markdown))
}

/// Convert markdown to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    Ok(markdown_to_html_node(markdown)?.render())
}
