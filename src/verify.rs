//! Independent checks and metrics over a code table.

use std::fmt::{self, Debug};
use std::hash::Hash;

use log::{debug, warn};

use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::freq::FreqTable;

/// Sum of `freq * code_len` over every symbol of `frequencies`.
///
/// # Errors
/// Returns `Error::MissingCode` if a symbol has no code in `codes`, and
/// `Error::WeightOverflow` if the sum does not fit in a `u128`.
pub fn weighted_length<S>(frequencies: &FreqTable<S>, codes: &CodeTable<S>) -> Result<u128>
where
    S: Eq + Hash + Debug,
{
    let mut total = 0u128;
    for (symbol, freq) in frequencies.iter() {
        let code = codes.get(symbol).ok_or_else(|| Error::MissingCode {
            symbol: format!("{:?}", symbol),
        })?;
        total = u128::from(freq)
            .checked_mul(code.len() as u128)
            .and_then(|w| total.checked_add(w))
            .ok_or(Error::WeightOverflow)?;
    }
    Ok(total)
}

#[derive(Default)]
struct TrieNode {
    children: [Option<usize>; 2],
    terminal: bool,
}

/// Check that no code in `codes` is a prefix of another.
///
/// Codes are inserted bit by bit into a binary trie. Insertion fails when it
/// passes through the end of an earlier code, or ends on a node that already
/// ends a code or has children. An empty table is prefix-free.
///
/// The check is stricter than a plain prefix test: an empty code, or a code
/// containing any character other than `'0'` and `'1'`, is not a valid
/// binary code and makes the whole table fail, even when it is the only
/// entry.
pub fn verify_prefix_free<S: Debug>(codes: &CodeTable<S>) -> bool {
    let mut trie = vec![TrieNode::default()];

    for (symbol, code) in codes {
        if code.is_empty() {
            warn!("Empty code for symbol {:?}", symbol);
            return false;
        }

        let mut cur = 0;
        for c in code.chars() {
            if trie[cur].terminal {
                warn!("A shorter code is a prefix of {:?} ('{}')", symbol, code);
                return false;
            }
            let bit = match c {
                '0' => 0,
                '1' => 1,
                _ => {
                    warn!("Invalid bit {:?} in code of {:?}", c, symbol);
                    return false;
                }
            };
            cur = match trie[cur].children[bit] {
                Some(next) => next,
                None => {
                    let next = trie.len();
                    trie.push(TrieNode::default());
                    trie[cur].children[bit] = Some(next);
                    next
                }
            };
        }

        let node = &mut trie[cur];
        if node.terminal || node.children.iter().any(Option::is_some) {
            warn!("Code of {:?} ('{}') collides with another code", symbol, code);
            return false;
        }
        node.terminal = true;
    }

    debug!("{} codes verified prefix-free ({} trie nodes)", codes.len(), trie.len());
    true
}

/// Shannon entropy of the distribution, in bits per symbol.
///
/// Zero for an empty or all-zero table. This is the lower bound of the
/// average code length of any prefix-free code.
pub fn entropy<S>(frequencies: &FreqTable<S>) -> f64 {
    let total = frequencies.total();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    frequencies
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(_, count)| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum()
}

/// Metrics of a code table against its distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeReport {
    /// Number of codes in the table.
    pub symbols: usize,
    /// Sum of `freq * code_len`.
    pub weighted_length: u128,
    /// Weighted length divided by the total frequency.
    pub average_length: f64,
    /// Shannon entropy of the distribution, in bits per symbol.
    pub entropy: f64,
    /// Result of [`verify_prefix_free`].
    pub prefix_free: bool,
}

impl fmt::Display for CodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} codes, weighted length {}, {:.4} bits/symbol (entropy {:.4}), prefix-free: {}",
            self.symbols, self.weighted_length, self.average_length, self.entropy, self.prefix_free
        )
    }
}

/// Compute every metric of `codes` for `frequencies`.
///
/// # Errors
/// Fails exactly when [`weighted_length`] does.
pub fn analyze<S>(frequencies: &FreqTable<S>, codes: &CodeTable<S>) -> Result<CodeReport>
where
    S: Eq + Hash + Debug,
{
    let weighted_length = weighted_length(frequencies, codes)?;
    let total = frequencies.total();
    let average_length = if total > 0 {
        weighted_length as f64 / total as f64
    } else {
        0.0
    };

    Ok(CodeReport {
        symbols: codes.len(),
        weighted_length,
        average_length,
        entropy: entropy(frequencies),
        prefix_free: verify_prefix_free(codes),
    })
}
