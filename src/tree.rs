//! Greedy construction of the Huffman merge tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::freq::FreqTable;

/// Node of a merge tree.
///
/// Every internal node's frequency is the sum of its children's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A single input symbol.
    Leaf {
        /// The symbol.
        symbol: S,
        /// Its frequency.
        freq: u64,
    },
    /// Two merged subtrees.
    Internal {
        /// Combined frequency of the subtree, widened so sums of `u64`
        /// leaves cannot overflow.
        freq: u128,
        /// Subtree reached with a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached with a `1` bit.
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Frequency of this node's subtree.
    pub fn freq(&self) -> u128 {
        match self {
            Node::Leaf { freq, .. } => u128::from(*freq),
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// The symbol, for leaves.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// An owned merge tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Box<Node<S>>,
}

impl<S> HuffmanTree<S> {
    /// The root node.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total frequency of all symbols.
    pub fn freq(&self) -> u128 {
        self.root.freq()
    }

    /// Number of leaves, i.e. of input symbols.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((node, d)) = stack.pop() {
            match node {
                Node::Leaf { .. } => max = max.max(d),
                Node::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), d + 1));
                    stack.push((left.as_ref(), d + 1));
                }
            }
        }
        max
    }
}

/// Heap entry. `seq` orders nodes of equal frequency: leaves in table order,
/// then merged nodes in creation order.
struct HeapNode<S> {
    freq: u128,
    seq: u64,
    node: Box<Node<S>>,
}

impl<S> Ord for HeapNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for Min-Heap behavior in BinaryHeap (which is max-heap by default)
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for HeapNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for HeapNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for HeapNode<S> {}

/// Build the optimal merge tree for `frequencies`.
///
/// Returns `None` for an empty table. A single symbol yields a tree that is
/// just that leaf. Zero frequencies are ordinary leaves. Merged frequencies
/// are `u128`, so any table of `u64` frequencies builds without overflow.
pub fn build_tree<S: Clone>(frequencies: &FreqTable<S>) -> Option<HuffmanTree<S>> {
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut heap = BinaryHeap::with_capacity(frequencies.len());
    let mut seq = 0u64;
    for (symbol, freq) in frequencies.iter() {
        heap.push(HeapNode {
            freq: u128::from(freq),
            seq,
            node: Box::new(Node::Leaf {
                symbol: symbol.clone(),
                freq,
            }),
        });
        seq += 1;
    }

    loop {
        let left = heap.pop()?;
        let Some(right) = heap.pop() else {
            debug!("Tree construction complete, total frequency {}", left.freq);
            return Some(HuffmanTree { root: left.node });
        };

        let freq = left.freq + right.freq;
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Internal {
                freq,
                left: left.node,
                right: right.node,
            }),
        });
        seq += 1;
    }
}
