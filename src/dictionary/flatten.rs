use crate::dictionary::content::{Content, Node};
use crate::dictionary::Definition;

/// Every leaf text of the tree, trimmed, in document order, joined by spaces.
pub fn flatten(content: &Content) -> String {
    let mut parts = Vec::new();
    collect_content(content, &mut parts);
    parts.join(" ")
}

/// Flattens a whole definition list. Plain-text definitions count as leaves.
pub fn flatten_definitions(definitions: &[Definition]) -> String {
    definitions
        .iter()
        .map(|definition| match definition {
            Definition::Text(text) => text.trim().to_owned(),
            Definition::Structured(structured) => flatten(&structured.content),
            Definition::Other(_) => String::new(),
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn collect_content<'a>(content: &'a Content, parts: &mut Vec<&'a str>) {
    match content {
        Content::Text(text) => push_text(text, parts),
        Content::Nodes(nodes) => {
            for node in nodes {
                collect_node(node, parts);
            }
        }
        Content::Node(node) => collect_node(node, parts),
    }
}

fn collect_node<'a>(node: &'a Node, parts: &mut Vec<&'a str>) {
    match node {
        Node::Text(text) => push_text(text, parts),
        Node::Element(element) => {
            if let Some(content) = &element.content {
                collect_content(content, parts);
            }
        }
    }
}

fn push_text<'a>(text: &'a str, parts: &mut Vec<&'a str>) {
    let text = text.trim();
    if !text.is_empty() {
        parts.push(text);
    }
}

/// The first definition line (bold `div` with plain text), looking inside
/// nested `div`s.
pub fn find_definition(content: &Content) -> Option<&str> {
    content.nodes().iter().find_map(|node| match node {
        Node::Element(element) if element.tag == "div" => {
            if element.is_definition_line() {
                element.text()
            } else {
                element.content.as_ref().and_then(find_definition)
            }
        }
        _ => None,
    })
}
