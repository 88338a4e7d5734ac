//! Code generation from a merge tree.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::freq::FreqTable;
use crate::tree::{HuffmanTree, Node, build_tree};

/// Mapping from symbol to its binary code, written with `'0'` and `'1'`.
pub type CodeTable<S> = HashMap<S, String>;

/// Read the code of every leaf off the tree.
///
/// A step into a left child appends `0`, a step into a right child appends
/// `1`. A tree that is a single leaf gets the code `"0"`, and an absent tree
/// an empty table. The walk uses an explicit stack, so skewed trees cannot
/// exhaust the call stack.
pub fn generate_codes<S>(tree: Option<&HuffmanTree<S>>) -> CodeTable<S>
where
    S: Eq + Hash + Clone,
{
    let mut table = CodeTable::new();
    let Some(tree) = tree else {
        return table;
    };

    let mut stack = vec![(tree.root(), String::new())];
    while let Some((node, prefix)) = stack.pop() {
        match node {
            Node::Leaf { symbol, freq } => {
                let code = if prefix.is_empty() {
                    String::from("0")
                } else {
                    prefix
                };
                trace!("Assigning code '{}' to leaf of frequency {}", code, freq);
                table.insert(symbol.clone(), code);
            }
            Node::Internal { left, right, .. } => {
                let mut right_prefix = prefix.clone();
                right_prefix.push('1');
                stack.push((right.as_ref(), right_prefix));

                let mut left_prefix = prefix;
                left_prefix.push('0');
                stack.push((left.as_ref(), left_prefix));
            }
        }
    }

    debug!("Code table built with {} entries", table.len());
    table
}

/// Build the tree for `frequencies` and read its codes.
pub fn build_codes<S>(frequencies: &FreqTable<S>) -> CodeTable<S>
where
    S: Eq + Hash + Clone,
{
    generate_codes(build_tree(frequencies).as_ref())
}
