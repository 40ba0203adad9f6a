//! Arena-allocated tree used for both the dictionary trie and the tile choice search.
//!
//! Nodes are never freed. Trimming only unlinks a node from its parent, so a trimmed
//! node can still be inspected (or grafted somewhere else) through its `NodeId`.

use serde::{Deserialize, Serialize};

use crate::error::{AnagramError, Result};

/// Stable handle of a node inside a `Tree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Node payloads that can be queried by key/value attribute
pub trait NodeData {
    /// A key paired with the value it must hold
    type Attr;

    /// True if the node holds the attribute's key with exactly that value
    fn matches(&self, attr: &Self::Attr) -> bool;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Node<D> {
    data: D,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree<D> {
    nodes: Vec<Node<D>>,
}

impl<D> Tree<D> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a detached node to the arena. It acts as the root of its own tree
    /// until it gets grafted somewhere.
    pub fn insert(&mut self, data: D) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Number of nodes ever allocated, including trimmed ones
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    /// Panics if the NodeId does not belong to this tree.
    pub fn data(&self, node: NodeId) -> &D {
        &self.nodes[node.0].data
    }

    pub fn data_mut(&mut self, node: NodeId) -> &mut D {
        &mut self.nodes[node.0].data
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Children in the order they were grafted
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes[node.0].children.is_empty()
    }

    /// Appends `child` to the children of `parent`. The child must not already be
    /// part of any tree connected to `parent`; this is not checked.
    pub fn graft(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes[child.0].parent.is_none());
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Detaches the node (and its subtree) from its parent
    pub fn trim(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            let siblings = &mut self.nodes[parent.0].children;
            if let Some(pos) = siblings.iter().position(|&c| c == node) {
                siblings.remove(pos);
            }
        }
    }

    /// Trims every child of the node and returns them
    pub fn trim_children(&mut self, node: NodeId) -> Vec<NodeId> {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for &child in children.iter() {
            self.nodes[child.0].parent = None;
        }
        children
    }

    /// Distance to the furthest parentless ancestor
    pub fn depth(&self, node: NodeId) -> usize {
        self.route_to_root(node).count() - 1
    }

    /// Nodes from `node` up to its root, both included
    pub fn route_to_root(&self, node: NodeId) -> RouteToRoot<'_, D> {
        RouteToRoot {
            tree: self,
            next: Some(node),
        }
    }

    /// Nodes from the root down to `node`, both included
    pub fn route_from_root(&self, node: NodeId) -> Vec<NodeId> {
        let mut route: Vec<NodeId> = self.route_to_root(node).collect();
        route.reverse();
        route
    }

    /// Nodes from `ancestor` down to `node`, both included
    pub fn route_from_ancestor(&self, node: NodeId, ancestor: NodeId) -> Result<Vec<NodeId>> {
        let mut route = self.route_to_ancestor(node, ancestor)?;
        route.reverse();
        Ok(route)
    }

    /// Nodes from `node` up to `ancestor`, both included
    pub fn route_to_ancestor(&self, node: NodeId, ancestor: NodeId) -> Result<Vec<NodeId>> {
        let mut route = Vec::new();
        for n in self.route_to_root(node) {
            route.push(n);
            if n == ancestor {
                return Ok(route);
            }
        }
        Err(AnagramError::NotAnAncestor(ancestor.index(), node.index()))
    }

    /// Pre-order walk of the subtree rooted at `node`, children visited in graft order
    pub fn traverse(&self, node: NodeId) -> Traverse<'_, D> {
        Traverse {
            tree: self,
            stack: vec![node],
        }
    }

    /// Exactly the reverse of `traverse`. Parents always come after their
    /// descendants, but siblings are visited last to first.
    pub fn traverse_post_order(&self, node: NodeId) -> std::iter::Rev<std::vec::IntoIter<NodeId>> {
        self.traverse(node).collect::<Vec<_>>().into_iter().rev()
    }

    /// Every node of the subtree (possibly `node` itself) without children
    pub fn leaves(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.traverse(node).filter(move |&n| self.is_leaf(n))
    }

    /// Cuts away everything below `node` that is not on the vertical path to `leaf`
    pub fn degenerate_to_leaf(&mut self, node: NodeId, leaf: NodeId) -> Result<()> {
        // Find the path before touching anything
        let path = self
            .route_from_ancestor(leaf, node)
            .map_err(|_| AnagramError::NoVerticalPath(node.index(), leaf.index()))?;

        for pair in path.windows(2) {
            let (parent, keep) = (pair[0], pair[1]);
            let doomed: Vec<NodeId> = self
                .children(parent)
                .iter()
                .copied()
                .filter(|&c| c != keep)
                .collect();
            for child in doomed {
                self.trim(child);
            }
        }
        Ok(())
    }
}

impl<D: NodeData> Tree<D> {
    /// Children of `node` holding the given attribute
    pub fn children_by_data<'a>(
        &'a self,
        node: NodeId,
        attr: &'a D::Attr,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(node)
            .iter()
            .copied()
            .filter(move |&c| self.data(c).matches(attr))
    }

    /// Every node of the subtree holding all of the attributes, in pre-order
    pub fn search<'a>(
        &'a self,
        node: NodeId,
        attrs: &'a [D::Attr],
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.traverse(node)
            .filter(move |&n| attrs.iter().all(|attr| self.data(n).matches(attr)))
    }

    /// Trims upwards from a leaf and returns the root of the removed branch.
    /// Climbing stops below the first ancestor that has other children, that
    /// holds the `stop` attribute, or that is the root of the whole tree.
    ///
    /// # Panics
    /// Panics if `leaf` has children.
    pub fn trim_dead_branch(&mut self, leaf: NodeId, stop: Option<&D::Attr>) -> NodeId {
        assert!(
            self.is_leaf(leaf),
            "trim_dead_branch must start from a leaf, node {} has children",
            leaf.index()
        );
        let mut dead = leaf;
        while let Some(parent) = self.parent(dead) {
            if self.children(parent).len() > 1 {
                break;
            }
            if stop.map_or(false, |attr| self.data(parent).matches(attr)) {
                break;
            }
            if self.parent(parent).is_none() {
                break;
            }
            dead = parent;
        }
        self.trim(dead);
        dead
    }
}

impl<D> Default for Tree<D> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RouteToRoot<'a, D> {
    tree: &'a Tree<D>,
    next: Option<NodeId>,
}

impl<'a, D> Iterator for RouteToRoot<'a, D> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.next?;
        self.next = self.tree.parent(curr);
        Some(curr)
    }
}

pub struct Traverse<'a, D> {
    tree: &'a Tree<D>,
    stack: Vec<NodeId>,
}

impl<'a, D> Iterator for Traverse<'a, D> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped first
        self.stack
            .extend(self.tree.children(node).iter().rev().copied());
        Some(node)
    }
}
