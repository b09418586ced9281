use std::collections::BTreeMap;
use std::fmt;

use super::frequency::FrequencyTable;
use super::min_heap::{MinHeap, Weighted};
use crate::error::Error;
use crate::Result;

pub type NodeId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeKind<S> {
    Leaf { symbol: S },
    Inner { left: NodeId, right: NodeId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node<S> {
    weight: usize,
    index: NodeId,
    kind: NodeKind<S>,
}

impl<S: Copy> Node<S> {
    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn index(&self) -> NodeId {
        self.index
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<S> {
        match self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Inner { .. } => None,
        }
    }

    pub fn left(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Inner { left, .. } => Some(left),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Inner { right, .. } => Some(right),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Child reached by following `bit` (`false` = left, `true` = right).
    pub fn child(&self, bit: bool) -> Option<NodeId> {
        if bit {
            self.right()
        } else {
            self.left()
        }
    }
}

impl<S> Weighted for Node<S> {
    fn weight(&self) -> usize {
        self.weight
    }
}

/// Huffman tree stored as an arena of nodes. Leaves occupy the first
/// `leaf_count` slots in ascending symbol order, inner nodes follow in the
/// order they were merged, so the root is always the last node.
#[derive(Clone, Debug)]
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root_index: NodeId,
    leaf_count: usize,
}

impl<S: Copy + Ord> HuffmanTree<S> {
    pub fn build(frequencies: &FrequencyTable<S>) -> Result<HuffmanTree<S>> {
        if frequencies.is_empty() {
            return Err(Error::EmptyInput);
        }
        let leaf_count = frequencies.len();
        let mut nodes: Vec<Node<S>> = Vec::with_capacity(2 * leaf_count - 1);
        let mut heap = MinHeap::with_capacity(leaf_count);

        // create the initial nodeset
        for (&symbol, &weight) in frequencies {
            let node = Node {
                weight,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol },
            };
            heap.insert(node);
            nodes.push(node);
        }
        // merge nodes until one is left
        while heap.len() > 1 {
            let left = heap.extract_min()?;
            let right = heap.extract_min()?;
            let node = Node {
                weight: left.weight + right.weight,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: left.index,
                    right: right.index,
                },
            };
            heap.insert(node);
            nodes.push(node);
        }
        let root_index = heap.extract_min()?.index;
        log::debug!(
            "Built Huffman tree with {} leaves and {} nodes",
            leaf_count,
            nodes.len()
        );
        Ok(HuffmanTree {
            nodes,
            root_index,
            leaf_count,
        })
    }
}

impl<S: Copy> HuffmanTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.nodes[self.root_index]
    }

    pub fn root_index(&self) -> NodeId {
        self.root_index
    }

    pub fn node(&self, index: NodeId) -> Option<&Node<S>> {
        self.nodes.get(index)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total weight, equal to the number of symbols the tree was built from.
    pub fn weight(&self) -> usize {
        self.root().weight
    }

    /// Pre-order walk with an explicit stack, yielding `(node, depth)`.
    /// Left subtrees are visited before right subtrees.
    pub fn walk(&self) -> impl Iterator<Item = (&Node<S>, usize)> + '_ {
        let mut node_index_stack = vec![(self.root_index, 0)];
        std::iter::from_fn(move || {
            let (index, depth) = node_index_stack.pop()?;
            let node = &self.nodes[index];
            if let NodeKind::Inner { left, right } = node.kind {
                node_index_stack.push((right, depth + 1));
                node_index_stack.push((left, depth + 1));
            }
            Some((node, depth))
        })
    }
}

impl<S: Copy + Ord> HuffmanTree<S> {
    /// Depth of every leaf. A root that is itself a leaf has depth 0.
    pub fn leaf_depths(&self) -> BTreeMap<S, usize> {
        self.walk()
            .filter_map(|(node, depth)| node.symbol().map(|symbol| (symbol, depth)))
            .collect()
    }

    /// Sum of `weight * depth` over all leaves.
    pub fn weighted_path_length(&self) -> usize {
        self.walk()
            .filter(|(node, _)| node.is_leaf())
            .map(|(node, depth)| node.weight * depth)
            .sum()
    }
}

pub fn build_tree<S: Copy + Ord>(frequencies: &FrequencyTable<S>) -> Result<HuffmanTree<S>> {
    HuffmanTree::build(frequencies)
}

const INDENT: &str = "  ";
const INNER_NODE_LABEL: &str = "*";

// Tree visualization, one node per line, children indented below their parent
impl<S: Copy + fmt::Display> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, depth) in self.walk() {
            write!(f, "{}", INDENT.repeat(depth))?;
            match node.symbol() {
                Some(symbol) => writeln!(f, "{}: {}", symbol, node.weight)?,
                None => writeln!(f, "{}: {}", INNER_NODE_LABEL, node.weight)?,
            }
        }
        Ok(())
    }
}
