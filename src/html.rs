use std::fmt;

use crate::error::NodeError;

/// Element attributes, rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn render(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// A node of the generated HTML tree.
///
/// Leaves hold a literal value, parents hold ordered children. Values are
/// emitted verbatim, without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Untagged literal text.
    Text(String),
    Leaf {
        tag: String,
        value: String,
        attributes: Attributes,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Text(value.into())
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        let tag = tag.into();
        debug_assert!(!tag.is_empty(), "leaf tag must not be empty");
        HtmlNode::Leaf {
            tag,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        let tag = tag.into();
        debug_assert!(!tag.is_empty(), "parent tag must not be empty");
        HtmlNode::Parent {
            tag,
            children,
            attributes: Attributes::new(),
        }
    }

    /// Assemble a node from optional parts, rejecting shapes that are neither
    /// a leaf nor a parent.
    pub fn new(
        tag: Option<String>,
        value: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    ) -> Result<Self, NodeError> {
        let tag = tag.filter(|t| !t.is_empty());
        match (tag, value, children) {
            (_, Some(_), Some(_)) => Err(NodeError::ValueWithChildren),
            (None, Some(value), None) => Ok(HtmlNode::Text(value)),
            (Some(tag), Some(value), None) => Ok(HtmlNode::Leaf {
                tag,
                value,
                attributes,
            }),
            (Some(tag), None, Some(children)) => Ok(HtmlNode::Parent {
                tag,
                children,
                attributes,
            }),
            (Some(tag), None, None) => Err(NodeError::MissingChildren(tag)),
            (None, None, Some(_)) => Err(NodeError::MissingTag),
            (None, None, None) => Err(NodeError::MissingValue),
        }
    }

    /// Add an attribute. Untagged text has nowhere to carry one and is returned unchanged.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Text(_) => {}
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.insert(key, value);
            }
        }
        self
    }

    /// Render this node and its descendants to an HTML string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            HtmlNode::Text(value) => out.push_str(value),
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                open_tag(tag, attributes, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                open_tag(tag, attributes, out);
                for child in children {
                    child.render_into(out);
                }
                close_tag(tag, out);
            }
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attributes.render(out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_renders_verbatim() {
        assert_eq!(HtmlNode::text("a < b & c").render(), "a < b & c");
    }

    #[test]
    fn leaf() {
        assert_eq!(HtmlNode::leaf("p", "Hello").render(), "<p>Hello</p>");
    }

    #[test]
    fn leaf_with_attributes_in_insertion_order() {
        let node = HtmlNode::leaf("a", "Click")
            .with_attribute("href", "https://www.google.com")
            .with_attribute("target", "_blank");
        assert_eq!(
            node.render(),
            r#"<a href="https://www.google.com" target="_blank">Click</a>"#
        );
    }

    #[test]
    fn replacing_an_attribute_keeps_its_position() {
        let attributes: Attributes = [("src", "a.png"), ("alt", "x"), ("src", "b.png")]
            .into_iter()
            .collect();
        assert_eq!(attributes.get("src"), Some("b.png"));
        assert_eq!(
            attributes.iter().collect::<Vec<_>>(),
            vec![("src", "b.png"), ("alt", "x")]
        );
    }

    #[test]
    fn parent_with_mixed_children() {
        let node = HtmlNode::parent(
            "p",
            vec![
                HtmlNode::leaf("b", "Bold text"),
                HtmlNode::text("Normal text"),
                HtmlNode::leaf("i", "italic text"),
                HtmlNode::text("Normal text"),
            ],
        );
        assert_eq!(
            node.render(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn nested_parents() {
        let node = HtmlNode::parent(
            "div",
            vec![HtmlNode::parent("span", vec![HtmlNode::leaf("b", "grandchild")])],
        )
        .with_attribute("class", "outer");
        assert_eq!(
            node.render(),
            r#"<div class="outer"><span><b>grandchild</b></span></div>"#
        );
    }

    #[test]
    fn parent_without_children_renders_empty_element() {
        assert_eq!(HtmlNode::parent("ul", vec![]).render(), "<ul></ul>");
    }

    #[test]
    fn display_matches_render() {
        let node = HtmlNode::leaf("code", "x");
        assert_eq!(node.to_string(), node.render());
    }

    #[test]
    fn new_accepts_leaf_and_parent_shapes() {
        let leaf = HtmlNode::new(Some("img".into()), Some(String::new()), None, Attributes::new());
        assert_eq!(leaf, Ok(HtmlNode::leaf("img", "")));

        let parent = HtmlNode::new(Some("div".into()), None, Some(vec![]), Attributes::new());
        assert_eq!(parent, Ok(HtmlNode::parent("div", vec![])));

        let text = HtmlNode::new(None, Some("raw".into()), None, Attributes::new());
        assert_eq!(text, Ok(HtmlNode::text("raw")));
    }

    #[test]
    fn new_rejects_malformed_shapes() {
        assert_eq!(
            HtmlNode::new(None, None, Some(vec![]), Attributes::new()),
            Err(NodeError::MissingTag)
        );
        assert_eq!(
            HtmlNode::new(Some(String::new()), None, Some(vec![]), Attributes::new()),
            Err(NodeError::MissingTag)
        );
        assert_eq!(
            HtmlNode::new(Some("div".into()), None, None, Attributes::new()),
            Err(NodeError::MissingChildren("div".into()))
        );
        assert_eq!(
            HtmlNode::new(None, None, None, Attributes::new()),
            Err(NodeError::MissingValue)
        );
        assert_eq!(
            HtmlNode::new(Some("p".into()), Some("x".into()), Some(vec![]), Attributes::new()),
            Err(NodeError::ValueWithChildren)
        );
    }
}
