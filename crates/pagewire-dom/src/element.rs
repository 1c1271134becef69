//! Element data structure

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position of an element in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Lowercase tag name
    tag: String,
    /// Value of the `id` attribute, if any
    id: Option<String>,
    /// Class list in markup order, without duplicates
    classes: Vec<String>,
    /// All attributes except `id` and `class`
    attributes: BTreeMap<String, String>,
    /// Current inner markup (the element's visible label)
    inner_html: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            inner_html: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "id" => self.id = Some(value),
            "class" => {
                for class in value.split_whitespace() {
                    self.add_class(class);
                }
            }
            _ => {
                self.attributes.insert(name, value);
            }
        }
        self
    }

    pub fn with_inner_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was not already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if class.is_empty() || self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        before != self.classes.len()
    }

    /// Look up an attribute. `id` and `class` are answered from their
    /// dedicated fields.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id(),
            "class" => None,
            _ => self.attributes.get(name).map(String::as_str),
        }
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replace the inner markup, returning the previous value.
    pub fn set_inner_html(&mut self, html: impl Into<String>) -> String {
        std::mem::replace(&mut self.inner_html, html.into())
    }
}
