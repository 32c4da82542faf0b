//! Minimal typed HTML fragment tree.

use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Escaped on output.
    Text(String),
    /// Written verbatim. Callers own what goes in here.
    Raw(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => fmt::Display::fmt(el, f),
            Node::Text(text) => write_escaped(f, text, false),
            Node::Raw(html) => f.write_str(html),
        }
    }
}

/// An element with ordered attributes. `None` values are boolean attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
    void: bool,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// Element without content or closing tag (`input`, `img`).
    pub fn void(tag: &'static str) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| *n == name)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            match value {
                Some(value) => {
                    write!(f, " {name}=\"")?;
                    write_escaped(f, value, true)?;
                    f.write_char('"')?;
                }
                None => write!(f, " {name}")?,
            }
        }
        f.write_char('>')?;
        if self.void {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str, attr: bool) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if attr => f.write_str("&quot;")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_attributes_in_order() {
        let el = Element::new("td").attr("class", "tableleft").attr("align", "center");
        assert_eq!(el.to_string(), r#"<td class="tableleft" align="center"></td>"#);
    }

    #[test]
    fn void_element_has_no_closing_tag() {
        let el = Element::void("input").attr("type", "checkbox").flag("checked", true);
        assert_eq!(el.to_string(), r#"<input type="checkbox" checked>"#);
        let off = Element::void("input").flag("checked", false);
        assert_eq!(off.to_string(), "<input>");
    }

    #[test]
    fn text_is_escaped_raw_is_not() {
        let el = Element::new("td")
            .child(Node::text("a < b & c"))
            .child(Node::raw("<em>x</em>"));
        assert_eq!(el.to_string(), "<td>a &lt; b &amp; c<em>x</em></td>");
    }

    #[test]
    fn attribute_quotes_are_escaped() {
        let el = Element::void("img").attr("alt", "say \"hi\"");
        assert_eq!(el.to_string(), r#"<img alt="say &quot;hi&quot;">"#);
    }
}
