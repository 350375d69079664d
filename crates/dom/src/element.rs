//! Element construction: tags, attributes, inline style, children.

use tui_arcade_types::Rgb;

/// A node in a view tree: either a text run or a nested element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Inline style record. `fg`/`bg` are set-or-inherit; the flags accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    /// Parse a `prop: value` declaration list separated by `;`.
    ///
    /// Recognized properties: `fg`/`color`, `bg`/`background` (hex colors),
    /// `bold`, `dim` (bare name or `: true`). Unknown properties and
    /// malformed colors are ignored.
    pub fn parse(text: &str) -> Self {
        let mut style = Style::default();
        for decl in text.split(';') {
            let decl = decl.trim();
            if decl.is_empty() {
                continue;
            }
            let (prop, value) = match decl.split_once(':') {
                Some((prop, value)) => (prop.trim(), value.trim()),
                None => (decl, ""),
            };
            match prop {
                "fg" | "color" => style.fg = Rgb::from_hex(value),
                "bg" | "background" => style.bg = Rgb::from_hex(value),
                "bold" => style.bold = value.is_empty() || value == "true",
                "dim" => style.dim = value.is_empty() || value == "true",
                _ => {}
            }
        }
        style
    }

    /// Overlay `other` on top of `self`; colors set in `other` win.
    pub fn merge(&mut self, other: Style) {
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        if other.bg.is_some() {
            self.bg = other.bg;
        }
        self.bold |= other.bold;
        self.dim |= other.dim;
    }
}

/// A tagged element with attributes, inline style, and ordered children.
///
/// Elements are inert data; the painter gives known tags and the geometry
/// attributes `x`/`y`/`w`/`h` their on-screen meaning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub style: Style,
    pub children: Vec<Node>,
    attrs: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            style: Style::default(),
            children: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Merge a style overlay into the element's style.
    pub fn style(mut self, style: Style) -> Self {
        self.style.merge(style);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated direct text children.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let Node::Text(text) = child {
                out.push_str(text);
            }
        }
        out
    }
}

/// Build an element in one call from a tag, attributes, and children.
///
/// The attribute key `style` is parsed as a declaration list and merged into
/// the element's style record rather than stored literally. Children append
/// in order; strings become text nodes, elements attach as-is. No validation
/// of tag names or attribute keys.
pub fn create_element<K, V, A, N, C>(tag: &str, attrs: A, children: C) -> Element
where
    K: AsRef<str> + Into<String>,
    V: ToString,
    A: IntoIterator<Item = (K, V)>,
    N: Into<Node>,
    C: IntoIterator<Item = N>,
{
    let mut element = Element::new(tag);
    for (name, value) in attrs {
        if name.as_ref() == "style" {
            element.style.merge(Style::parse(&value.to_string()));
        } else {
            element = element.attr(name, value);
        }
    }
    for child in children {
        element = element.child(child);
    }
    element
}
