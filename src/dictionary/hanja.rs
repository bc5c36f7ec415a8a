use regex::Regex;
use tracing::debug;

use crate::dictionary::content::{Content, Node};
use crate::dictionary::Entry;
use crate::Result;

const BRACKETS: &str = r"[\s〔〕\[\]{}()]";

/// Builds Hanja-headed copies of entries from the annotation span whose
/// colour matches `marker`.
pub struct HanjaDeriver {
    marker: String,
    edges: Regex,
}

impl HanjaDeriver {
    pub fn new(marker: &str) -> Result<Self> {
        let edges = Regex::new(&format!("^{}+|{}+$", BRACKETS, BRACKETS))?;

        Ok(Self {
            marker: marker.to_owned(),
            edges,
        })
    }

    /// The first non-empty marker span text, depth-first.
    pub fn find<'a>(&self, content: &'a Content) -> Option<&'a str> {
        content.nodes().iter().find_map(|node| self.find_in_node(node))
    }

    fn find_in_node<'a>(&self, node: &'a Node) -> Option<&'a str> {
        let Node::Element(element) = node else {
            return None;
        };

        if element.tag == "span" && element.style_value("color") == Some(self.marker.as_str()) {
            if let Some(text) = element.text().filter(|text| !text.is_empty()) {
                return Some(text);
            }
        }

        element.content.as_ref().and_then(|content| self.find(content))
    }

    /// Strips whitespace and brackets from both ends.
    pub fn clean(&self, raw: &str) -> String {
        self.edges.replace_all(raw, "").into_owned()
    }

    pub fn derive(&self, entry: &Entry) -> Option<Entry> {
        let raw = self.find(entry.structured_content()?)?;
        let hanja = self.clean(raw);

        if hanja.is_empty() {
            debug!("skipping '{}': empty Hanja annotation {:?}", entry.term, raw);
            return None;
        }

        let mut derived = entry.clone();
        derived.term = hanja.clone();

        if let Some(content) = derived.structured_content_mut() {
            self.propagate(content, &hanja);
        }

        Some(derived)
    }

    pub fn derive_bank(&self, entries: &[Entry]) -> Vec<Entry> {
        entries.iter().filter_map(|entry| self.derive(entry)).collect()
    }

    // Example blocks are left alone so emphasis inside sentences survives.
    fn propagate(&self, content: &mut Content, hanja: &str) {
        for node in content.nodes_mut() {
            let Node::Element(element) = node else {
                continue;
            };

            if element.is_example_block() {
                continue;
            }

            let headword = element.tag == "span"
                && (element.style_value("fontWeight") == Some("bold")
                    || element.style_value("color") == Some(self.marker.as_str()));

            if headword {
                element.content = Some(Content::Text(hanja.to_owned()));
            } else if let Some(content) = &mut element.content {
                self.propagate(content, hanja);
            }
        }
    }
}
