use tracing::trace;

use crate::config::StyleRemap;
use crate::dictionary::content::{Content, Element, Node};
use crate::dictionary::{Definition, Entry};
use crate::{Error, Result};

pub const DEFINITION_PREFIX: &str = "1. ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExampleMode {
    /// Keep the first non-empty example block of an entry, drop the rest.
    #[default]
    KeepFirst,
    /// Drop every example block, at any depth.
    Strip,
}

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Trim text values, unescape literal `\n` and apply `style_remaps`.
    pub whitespace: bool,
    pub trim_term: bool,
    pub examples: ExampleMode,
    /// Drop italic "Noun" label divs.
    pub prune_labels: bool,
    pub style_remaps: Vec<StyleRemap>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            whitespace: false,
            trim_term: false,
            examples: ExampleMode::KeepFirst,
            prune_labels: false,
            style_remaps: StyleRemap::defaults(),
        }
    }
}

/// Normalizes every entry of a bank, failing on the first malformed one.
pub fn normalize_bank(entries: Vec<Entry>, options: &NormalizeOptions) -> Result<Vec<Entry>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| normalize_entry(index, entry, options))
        .collect()
}

/// Normalizes one entry. `index` is only used to name the record in errors.
pub fn normalize_entry(index: usize, mut entry: Entry, options: &NormalizeOptions) -> Result<Entry> {
    if entry.structured_content().is_none() {
        return Err(Error::MissingStructuredContent(index));
    }

    if options.whitespace {
        for definition in &mut entry.definitions {
            if let Definition::Structured(structured) = definition {
                tidy_content(&mut structured.content, &options.style_remaps);
            }
        }
    }

    let content = entry
        .structured_content_mut()
        .ok_or(Error::MissingStructuredContent(index))?;

    if options.examples == ExampleMode::Strip {
        content.prune(&Element::is_example_block);
    }

    clean_blocks(content);

    if options.prune_labels {
        content.prune(&Element::is_part_of_speech_label);
    }

    if options.trim_term {
        let trimmed = entry.term.trim();
        if trimmed.len() != entry.term.len() {
            entry.term = trimmed.to_owned();
        }
    }

    trace!("normalized entry {} '{}'", index, entry.term);

    Ok(entry)
}

fn clean_blocks(content: &mut Content) {
    let mut found_example = false;

    for block in content.nodes_mut() {
        let Node::Element(block) = block else {
            continue;
        };

        if let Some(Content::Nodes(children)) = &mut block.content {
            *children = std::mem::take(children)
                .into_iter()
                .filter_map(|child| clean_child(child, &mut found_example))
                .collect();
        }
    }
}

fn clean_child(child: Node, found_example: &mut bool) -> Option<Node> {
    let mut element = match child {
        Node::Element(element) => element,
        text => return Some(text),
    };

    if element.is_definition_line() {
        if let Some(Content::Text(text)) = &mut element.content {
            ensure_prefix(text);
        }
        return Some(Node::Element(element));
    }

    if element.is_non_empty_example_block() && !*found_example {
        *found_example = true;
        return Some(Node::Element(element));
    }

    if element.is_example_block() {
        return None;
    }

    Some(Node::Element(element))
}

fn ensure_prefix(text: &mut String) {
    if !text.starts_with(DEFINITION_PREFIX) {
        text.insert_str(0, DEFINITION_PREFIX);
    }
}

fn tidy_content(content: &mut Content, remaps: &[StyleRemap]) {
    match content {
        Content::Text(text) => tidy_text(text),
        Content::Nodes(nodes) => {
            for node in nodes {
                tidy_node(node, remaps);
            }
        }
        Content::Node(node) => tidy_node(node, remaps),
    }
}

fn tidy_node(node: &mut Node, remaps: &[StyleRemap]) {
    match node {
        Node::Text(text) => tidy_text(text),
        Node::Element(element) => {
            if let Some(style) = &mut element.style {
                for remap in remaps {
                    remap.apply(style);
                }
            }

            let definition = element.is_definition_line();

            match &mut element.content {
                Some(Content::Text(text)) if definition => tidy_definition(text),
                Some(content) => tidy_content(content, remaps),
                None => {}
            }
        }
    }
}

fn tidy_text(text: &mut String) {
    let unescaped = text.replace("\\n", "\n");
    let trimmed = unescaped.trim();

    if trimmed != text.as_str() {
        *text = trimmed.to_owned();
    }
}

// Only the body after an existing prefix is trimmed, otherwise an empty
// definition "1. " would lose its space and get prefixed again next run.
fn tidy_definition(text: &mut String) {
    let unescaped = text.replace("\\n", "\n");

    let tidied = match unescaped.strip_prefix(DEFINITION_PREFIX) {
        Some(body) => format!("{}{}", DEFINITION_PREFIX, body.trim()),
        None => unescaped.trim().to_owned(),
    };

    if tidied != *text {
        *text = tidied;
    }
}
