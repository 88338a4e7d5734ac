//! # Huffman codes
//!
//! Optimal prefix-free binary codes for a set of symbols with known
//! frequencies.
//!
//! The work is a strict pipeline of pure functions:
//!
//! ```text
//! FreqTable --build_tree--> HuffmanTree --generate_codes--> CodeTable
//!                                                              |
//!                       weighted_length / verify_prefix_free <-+
//! ```
//!
//! [`build_tree`] repeatedly merges the two lightest nodes, which minimises
//! the weighted length `sum(freq * code_len)` over all prefix-free binary
//! codes (Huffman, 1952). [`generate_codes`] reads codes off the tree (`0`
//! for a left branch, `1` for a right one), and the [`verify`] module checks
//! the result independently.
//!
//! ```
//! use huffman_codes::{FreqTable, build_codes, verify_prefix_free, weighted_length};
//!
//! let freq: FreqTable<&str> = [("A", 45), ("B", 13), ("C", 12), ("D", 16), ("E", 9), ("F", 5)]
//!     .into_iter()
//!     .collect();
//! let codes = build_codes(&freq);
//!
//! assert_eq!(weighted_length(&freq, &codes).unwrap(), 224);
//! assert!(verify_prefix_free(&codes));
//! ```
//!
//! Every call allocates its own tree and table, so independent
//! distributions may be processed on separate threads without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codes;
pub mod error;
pub mod freq;
pub mod tree;
pub mod verify;

pub use codes::{CodeTable, build_codes, generate_codes};
pub use error::{Error, Result};
pub use freq::FreqTable;
pub use tree::{HuffmanTree, Node, build_tree};
pub use verify::{CodeReport, analyze, entropy, verify_prefix_free, weighted_length};
