//! The node catalog: an ordered collection of canonical nodes with
//! duplicate detection.
//!
//! Insertion order is load-bearing: group synthesis appends node members
//! in catalog order, and the determinism property depends on it. Exact
//! duplicates (attribute-for-attribute identical nodes) are rejected on
//! insert; two differently configured nodes sharing a name are both kept
//! and left for the validator to flag.

use clashforge_types::Node;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from catalog edits.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An attribute-for-attribute identical node is already present.
    #[error("node `{0}` is already in the catalog with an identical configuration")]
    Duplicate(String),

    /// No node with the given name.
    #[error("no node named `{0}` in the catalog")]
    NotFound(String),
}

/// Ordered collection of canonical nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeCatalog {
    nodes: Vec<Node>,
}

impl NodeCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node, rejecting an exact duplicate.
    ///
    /// A node that merely shares its name with an existing one is
    /// accepted; the validator surfaces the name collision.
    pub fn insert(&mut self, node: Node) -> CatalogResult<()> {
        if self.nodes.contains(&node) {
            return Err(CatalogError::Duplicate(node.name));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Removes the first node with the given name and returns it.
    ///
    /// Replace-by-name is remove followed by insert, composed by the
    /// caller.
    pub fn remove(&mut self, name: &str) -> CatalogResult<Node> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.name == name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        Ok(self.nodes.remove(index))
    }

    /// The first node with the given name, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Node names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.name.as_str())
    }

    /// Names carried by more than one node, each reported once, in first
    /// occurrence order.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for node in &self.nodes {
            let name = node.name.as_str();
            if seen.contains(&name) {
                if !duplicates.contains(&name) {
                    duplicates.push(name);
                }
            } else {
                seen.push(name);
            }
        }
        duplicates
    }
}

impl FromIterator<Node> for NodeCatalog {
    /// Collects nodes, silently dropping exact duplicates.
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for node in iter {
            let _ = catalog.insert(node);
        }
        catalog
    }
}
