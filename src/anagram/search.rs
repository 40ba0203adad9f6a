//! Tile choice search.
//!
//! Walks the dictionary trie and a fresh tree of tile choices in lockstep. Every
//! path from the root of the tile tree spells a prefix of some dictionary word;
//! nodes where a complete, acceptable word ends are flagged. The tree is fully
//! built first and only then pruned of branches that never reach a word.

use tracing::{debug, debug_span};

use super::constraint::SearchConstraints;
use super::dictionary::Dictionary;
use super::tile::Tile;
use crate::tree::{NodeData, NodeId, Tree};

/// Payload of a tile tree node. `tile` indexes the tile table of the owning
/// `TileTree` and is `None` only at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileChoice {
    pub tile: Option<usize>,
    pub is_word: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileChoiceAttr {
    Tile(Option<usize>),
    IsWord(bool),
}

impl NodeData for TileChoice {
    type Attr = TileChoiceAttr;

    fn matches(&self, attr: &TileChoiceAttr) -> bool {
        match *attr {
            TileChoiceAttr::Tile(t) => self.tile == t,
            TileChoiceAttr::IsWord(w) => self.is_word == w,
        }
    }
}

/// Pending expansion: where we are in the trie, where we are in the tile tree
/// and which free tiles are still unused on this path
#[derive(Debug)]
struct Frame {
    letter: NodeId,
    choice: NodeId,
    free: Vec<usize>,
    depth: usize,
}

/// Result of a search. Borrows the tiles it was built from.
#[derive(Debug)]
pub struct TileTree<'a, T> {
    tree: Tree<TileChoice>,
    root: NodeId,
    /// Free tiles first, followed by every fixed tile
    tiles: Vec<&'a T>,
}

impl<'a, T: Tile> TileTree<'a, T> {
    fn new(tiles: Vec<&'a T>) -> Self {
        let mut tree = Tree::new();
        let root = tree.insert(TileChoice {
            tile: None,
            is_word: false,
        });
        Self { tree, root, tiles }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn tree(&self) -> &Tree<TileChoice> {
        &self.tree
    }

    pub fn tile(&self, node: NodeId) -> Option<&'a T> {
        self.tree.data(node).tile.map(|h| self.tiles[h])
    }

    pub fn is_word(&self, node: NodeId) -> bool {
        self.tree.data(node).is_word
    }

    /// Tiles along the path from the root to `node`, root excluded
    pub fn word(&self, node: NodeId) -> Vec<&'a T> {
        self.tree
            .route_from_root(node)
            .into_iter()
            .filter_map(|n| self.tile(n))
            .collect()
    }

    /// Every flagged word in pre-order, restricted to the given tile counts
    pub fn words(&self, min_tiles: Option<usize>, max_tiles: Option<usize>) -> Vec<Vec<&'a T>> {
        self.tree
            .traverse(self.root)
            .filter(|&n| self.is_word(n))
            .map(|n| self.word(n))
            .filter(|w| {
                min_tiles.map_or(true, |min| w.len() >= min)
                    && max_tiles.map_or(true, |max| w.len() <= max)
            })
            .collect()
    }

    /// Removes every branch that ends without a word. Returns the number of
    /// branches cut.
    fn prune(&mut self) -> usize {
        let dead: Vec<NodeId> = self
            .tree
            .leaves(self.root)
            .filter(|&n| !self.is_word(n))
            .collect();
        for &leaf in dead.iter() {
            self.tree
                .trim_dead_branch(leaf, Some(&TileChoiceAttr::IsWord(true)));
        }
        dead.len()
    }
}

/// Builds the pruned tile tree of every dictionary word that can be spelled
/// from `free_tiles` under the given constraints
pub fn search<'a, T: Tile>(
    dictionary: &Dictionary,
    free_tiles: &'a [T],
    constraints: &SearchConstraints<'a, T>,
) -> TileTree<'a, T> {
    let span = debug_span!("tile_search", free = free_tiles.len());
    let _enter = span.enter();

    let mut tiles: Vec<&'a T> = free_tiles.iter().collect();
    let mut fixed: Vec<Option<usize>> = Vec::with_capacity(constraints.fixed_tiles.len());
    for position in 0..constraints.fixed_tiles.len() {
        fixed.push(constraints.fixed_at(position).map(|tile| {
            tiles.push(tile);
            tiles.len() - 1
        }));
    }

    let mut result = TileTree::new(tiles);
    if free_tiles.is_empty() {
        return result;
    }

    let mut stack = vec![Frame {
        letter: dictionary.root(),
        choice: result.root,
        free: (0..free_tiles.len()).collect(),
        depth: 0,
    }];
    let mut expanded = 0usize;

    while let Some(frame) = stack.pop() {
        expanded += 1;
        let pinned = fixed.get(frame.depth).copied().flatten();
        let candidates = match pinned {
            Some(handle) => vec![handle],
            None => frame.free.clone(),
        };

        // Letters already tried from this node, same letters give the same subtree
        let mut tried: Vec<&'a str> = Vec::new();
        for handle in candidates {
            let tile: &'a T = result.tiles[handle];
            if tried.contains(&tile.letters()) {
                continue;
            }
            if constraints.is_wrong_position(tile, frame.depth) {
                continue;
            }
            let letter = match dictionary.walk(frame.letter, tile.letters()) {
                Some(node) => node,
                None => continue,
            };

            let child = result.tree.insert(TileChoice {
                tile: Some(handle),
                is_word: false,
            });
            result.tree.graft(frame.choice, child);

            let n_tiles = frame.depth + 1;
            if dictionary.is_terminal(letter) && constraints.accepts_length(n_tiles) {
                let is_word = constraints.wrong_position_tiles.is_empty()
                    || constraints.contains_misplaced(&result.word(child));
                result.tree.data_mut(child).is_word = is_word;
            }
            tried.push(tile.letters());

            // Fixed tiles never come out of the free pool
            let remaining: Vec<usize> = if pinned.is_some() {
                frame.free.clone()
            } else {
                frame.free.iter().copied().filter(|&h| h != handle).collect()
            };
            if !remaining.is_empty() && constraints.can_extend(n_tiles) {
                stack.push(Frame {
                    letter,
                    choice: child,
                    free: remaining,
                    depth: n_tiles,
                });
            }
        }
    }

    let nodes = result.tree.len();
    let pruned = result.prune();
    debug!(expanded, nodes, pruned, "tile tree built");
    result
}
