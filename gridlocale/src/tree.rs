//! The language-rooted translation tree produced by the parsers.
//!
//! A [`Tree`] maps language codes (in header column order) to a
//! [`TreeNode`]. A node is either a [`Leaf`] of key/value translations, which
//! the serializer turns into one file, or a branch of named sub-nodes (the
//! domains of the domain-key-value layout), which it descends into.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Translation key → translated value, in first-insertion order.
pub type Leaf = IndexMap<String, String>;

/// One level of the translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Innermost mapping; becomes a file.
    Leaf(Leaf),
    /// Named sub-nodes; becomes a directory level.
    Branch(IndexMap<String, TreeNode>),
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            TreeNode::Leaf(leaf) => Some(leaf),
            TreeNode::Branch(_) => None,
        }
    }

    /// Returns the child named `name` of a branch.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Leaf(_) => None,
            TreeNode::Branch(children) => children.get(name),
        }
    }
}

/// Language code → translations for that language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    languages: IndexMap<String, TreeNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Language codes in header order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn get(&self, language: &str) -> Option<&TreeNode> {
        self.languages.get(language)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, TreeNode> {
        self.languages.iter()
    }

    /// Looks up a translation by language, intermediate path and key, e.g.
    /// `tree.lookup("fr", &["common"], "title")`.
    pub fn lookup(&self, language: &str, path: &[&str], key: &str) -> Option<&str> {
        let mut node = self.get(language)?;
        for segment in path {
            node = node.child(segment)?;
        }
        node.as_leaf()?.get(key).map(String::as_str)
    }

    /// Sets `key` in the leaf of `language`, creating the leaf if needed.
    pub(crate) fn insert_value(&mut self, language: &str, key: &str, value: String) {
        let node = self
            .languages
            .entry(language.to_string())
            .or_insert_with(|| TreeNode::Leaf(Leaf::new()));
        if let TreeNode::Leaf(leaf) = node {
            leaf.insert(key.to_string(), value);
        }
    }

    /// Sets `key` in the `domain` leaf of `language`, creating both levels if
    /// needed. Keys already under the domain are kept.
    pub(crate) fn insert_domain_value(
        &mut self,
        language: &str,
        domain: &str,
        key: &str,
        value: String,
    ) {
        let node = self
            .languages
            .entry(language.to_string())
            .or_insert_with(|| TreeNode::Branch(IndexMap::new()));
        if let TreeNode::Branch(domains) = node {
            let domain_node = domains
                .entry(domain.to_string())
                .or_insert_with(|| TreeNode::Leaf(Leaf::new()));
            if let TreeNode::Leaf(leaf) = domain_node {
                leaf.insert(key.to_string(), value);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a TreeNode);
    type IntoIter = indexmap::map::Iter<'a, String, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, TreeNode)> for Tree {
    fn from_iter<T: IntoIterator<Item = (String, TreeNode)>>(iter: T) -> Self {
        Self {
            languages: iter.into_iter().collect(),
        }
    }
}
