//! Code table derivation: walk the tree and record the path to every leaf.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;

use super::tree::{Node, NodeData};

/// A Huffman code of up to 64 bits. The first bit of the code is the most significant
/// of the `len` low bits of `bits`.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    /// Append one bit (0 for a left branch, 1 for a right branch).
    pub fn push(self, bit: bool) -> Code {
        Code {
            bits: self.bits << 1 | bit as u64,
            len: self.len + 1,
        }
    }

    /// Bit `i` of the code, counting from the first bit.
    pub fn bit(&self, i: u8) -> bool {
        (self.bits >> (self.len - 1 - i)) & 1 == 1
    }

    /// True if self is a prefix of (or equal to) other
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

/// Codes sort as bit strings: "0" < "00" < "01" < "1".
impl Ord for Code {
    fn cmp(&self, other: &Self) -> Ordering {
        let common = self.len.min(other.len);
        let a = if common == 0 { 0 } else { self.bits >> (self.len - common) };
        let b = if common == 0 { 0 } else { other.bits >> (other.len - common) };
        a.cmp(&b).then(self.len.cmp(&other.len))
    }
}

impl PartialOrd for Code {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        (0..self.len).try_for_each(|i| write!(f, "{}", self.bit(i) as u8))
    }
}

/// Symbol to code mapping for every leaf in a tree.
#[derive(Debug, Default, Clone)]
pub struct CodeTable {
    codes: FxHashMap<u8, Code>,
}

impl CodeTable {
    /// Derive the codes breadth first from the root. A tree that is a single leaf
    /// gets the one-bit code "0", since there is no branch to encode.
    pub fn from_tree(root: &Node) -> CodeTable {
        let mut codes = FxHashMap::default();
        let mut queue = VecDeque::new();

        let start = if root.is_leaf() {
            Code::default().push(false)
        } else {
            Code::default()
        };
        queue.push_back((root, start));

        while let Some((node, code)) = queue.pop_front() {
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    queue.push_back((left.as_ref(), code.push(false)));
                    queue.push_back((right.as_ref(), code.push(true)));
                }
                NodeData::Leaf(sym) => {
                    codes.insert(*sym, code);
                }
            }
        }
        CodeTable { codes }
    }

    pub fn get(&self, sym: u8) -> Option<&Code> {
        self.codes.get(&sym)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (code, symbol) pairs sorted by code string, for the statistics listing.
    pub fn sorted(&self) -> Vec<(Code, u8)> {
        let mut list: Vec<(Code, u8)> = self.codes.iter().map(|(&s, &c)| (c, s)).collect();
        list.sort_unstable();
        list
    }
}
