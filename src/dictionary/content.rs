use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const EXAMPLE_LABEL: &str = "Example Sentences";

pub type Style = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Nodes(Vec<Node>),
    Node(Box<Node>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Content {
    /// Child nodes in document order. Bare text has none.
    pub fn nodes(&self) -> &[Node] {
        match self {
            Content::Text(_) => &[],
            Content::Nodes(nodes) => nodes,
            Content::Node(node) => std::slice::from_ref(&**node),
        }
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        match self {
            Content::Text(_) => &mut [],
            Content::Nodes(nodes) => nodes,
            Content::Node(node) => std::slice::from_mut(&mut **node),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Nodes(nodes) => nodes.is_empty(),
            Content::Node(_) => false,
        }
    }

    /// Removes every element matching `predicate` from every node list in the
    /// tree. A single wrapped node is never removed, only descended into.
    pub fn prune(&mut self, predicate: &dyn Fn(&Element) -> bool) {
        if let Content::Nodes(nodes) = self {
            nodes.retain(|node| !matches!(node, Node::Element(element) if predicate(element)));
        }

        for node in self.nodes_mut() {
            if let Node::Element(Element { content: Some(content), .. }) = node {
                content.prune(predicate);
            }
        }
    }
}

impl Element {
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.as_ref()?.get(property)?.as_str()
    }

    /// The element's content when it is a plain string.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        self.content.as_ref().map(Content::nodes).unwrap_or(&[])
    }

    /// A bold `div` holding a plain string: one definition line.
    pub fn is_definition_line(&self) -> bool {
        self.tag == "div" && self.style_value("fontWeight") == Some("bold") && self.text().is_some()
    }

    /// A `details` block whose first child is labelled "Example Sentences".
    pub fn is_example_block(&self) -> bool {
        if self.tag != "details" {
            return false;
        }

        match self.children().first() {
            Some(Node::Element(summary)) => summary.text() == Some(EXAMPLE_LABEL),
            _ => false,
        }
    }

    /// An example block whose `ul` holds at least one `li` with content.
    pub fn is_non_empty_example_block(&self) -> bool {
        if !self.is_example_block() {
            return false;
        }

        let Some(Node::Element(list)) = self.children().get(1) else {
            return false;
        };

        list.tag == "ul"
            && list.children().iter().any(|item| match item {
                Node::Element(item) => {
                    item.tag == "li" && item.content.as_ref().is_some_and(|content| !content.is_empty())
                }
                Node::Text(_) => false,
            })
    }

    /// The italic "Noun" label some banks print above the definition.
    pub fn is_part_of_speech_label(&self) -> bool {
        self.tag == "div" && self.style_value("fontStyle") == Some("italic") && self.text() == Some("Noun")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn element(value: Value) -> Element {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_content_shapes() {
        let text: Content = serde_json::from_value(json!("plain")).unwrap();
        assert_eq!(text, Content::Text("plain".to_owned()));
        assert!(text.nodes().is_empty());

        let single: Content = serde_json::from_value(json!({"tag": "span", "content": "x"})).unwrap();
        assert!(matches!(single, Content::Node(_)));
        assert_eq!(single.nodes().len(), 1);

        let list: Content = serde_json::from_value(json!(["a", {"tag": "br"}])).unwrap();
        assert_eq!(list.nodes().len(), 2);
        assert!(matches!(&list.nodes()[1], Node::Element(e) if e.tag == "br" && e.content.is_none()));
    }

    #[test]
    fn test_unknown_attributes_survive() {
        let value = json!({
            "tag": "a",
            "href": "?query=x",
            "data": {"sc": "ref"},
            "content": "x"
        });

        let parsed = element(value.clone());
        assert_eq!(parsed.attributes.get("href"), Some(&json!("?query=x")));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), value);
    }

    #[test]
    fn test_definition_line() {
        assert!(element(json!({"tag": "div", "style": {"fontWeight": "bold"}, "content": "x"})).is_definition_line());
        assert!(!element(json!({"tag": "span", "style": {"fontWeight": "bold"}, "content": "x"})).is_definition_line());
        assert!(!element(json!({"tag": "div", "style": {"fontWeight": "bold"}, "content": ["x"]})).is_definition_line());
        assert!(!element(json!({"tag": "div", "content": "x"})).is_definition_line());
    }

    #[test]
    fn test_example_block_emptiness() {
        let full = element(json!({
            "tag": "details",
            "content": [
                {"tag": "summary", "content": "Example Sentences"},
                {"tag": "ul", "content": [{"tag": "li", "content": "문장"}]}
            ]
        }));
        assert!(full.is_example_block());
        assert!(full.is_non_empty_example_block());

        let hollow = element(json!({
            "tag": "details",
            "content": [
                {"tag": "summary", "content": "Example Sentences"},
                {"tag": "ul", "content": [{"tag": "li", "content": ""}, {"tag": "li", "content": []}]}
            ]
        }));
        assert!(hollow.is_example_block());
        assert!(!hollow.is_non_empty_example_block());

        let header_only = element(json!({
            "tag": "details",
            "content": [{"tag": "summary", "content": "Example Sentences"}]
        }));
        assert!(header_only.is_example_block());
        assert!(!header_only.is_non_empty_example_block());

        let other = element(json!({
            "tag": "details",
            "content": [{"tag": "summary", "content": "Notes"}]
        }));
        assert!(!other.is_example_block());
    }

    #[test]
    fn test_prune_nested() {
        let mut content: Content = serde_json::from_value(json!([
            {"tag": "div", "style": {"fontStyle": "italic"}, "content": "Noun"},
            {"tag": "div", "content": [
                "keep",
                {"tag": "div", "style": {"fontStyle": "italic"}, "content": "Noun"}
            ]}
        ]))
        .unwrap();

        content.prune(&Element::is_part_of_speech_label);

        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!([{"tag": "div", "content": ["keep"]}])
        );
    }
}
