//! Huffman tree construction.
//!
//! The tree is rebuilt from the persisted frequency table on decompression, so the
//! construction has to be fully deterministic. Candidates are ordered by:
//! - weight (frequency), smallest first;
//! - symbol value, smallest first. Internal nodes carry the placeholder symbol 0,
//!   which means a merged node ties with the leaf for symbol 0 on this key;
//! - creation sequence, oldest first. Leaves are numbered in symbol order, and
//!   every merged node takes the next number.
//!
//! The first node extracted in a merge becomes the left child ("0" branch), the
//! second becomes the right child ("1" branch).

use log::trace;

use crate::tools::freq_count::FreqTable;

/// Symbol value given to internal nodes. It only takes part in the ordering.
const NODE_SYM: u8 = 0;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub sym: u8,
    pub seq: u16,
    pub node_data: NodeData,
}

impl Node {
    /// Create a leaf for symbol `sym`
    pub fn leaf(sym: u8, weight: u64, seq: u16) -> Node {
        Node {
            weight,
            sym,
            seq,
            node_data: NodeData::Leaf(sym),
        }
    }

    /// Create an internal node owning both children
    pub fn join(left: Node, right: Node, seq: u16) -> Node {
        Node {
            weight: left.weight + right.weight,
            sym: NODE_SYM,
            seq,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    /// Returns the (left, right) children, or None for a leaf.
    pub fn kids(&self) -> Option<(&Node, &Node)> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some((left, right)),
            NodeData::Leaf(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Number of leaves below (and including) this node.
    pub fn leaves(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaves() + right.leaves(),
            NodeData::Leaf(_) => 1,
        }
    }

    /// Leaf symbol for trace output, None for internal nodes.
    fn node_data_sym(&self) -> Option<u8> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    fn key(&self) -> (u64, u8, u16) {
        (self.weight, self.sym, self.seq)
    }
}

/// Build the Huffman tree for a frequency table. Returns None when no symbol occurs.
/// A single present symbol gives a tree that is just one leaf.
pub fn build_tree(freqs: &FreqTable) -> Option<Node> {
    // One leaf per present symbol, numbered in symbol order.
    let mut tree: Vec<Node> = freqs
        .iter()
        .enumerate()
        .filter(|(_, &f)| f > 0)
        .enumerate()
        .map(|(seq, (sym, &f))| Node::leaf(sym as u8, f as u64, seq as u16))
        .collect();

    // Keep the candidates sorted largest first so the smallest can be popped off the end.
    tree.sort_unstable_by(|a, b| b.key().cmp(&a.key()));
    let mut next_seq = tree.len() as u16;

    while tree.len() > 1 {
        let (left, right) = match (tree.pop(), tree.pop()) {
            (Some(left), Some(right)) => (left, right),
            _ => break,
        };
        trace!(
            "Merging {:?}/{} with {:?}/{} as node {}",
            left.node_data_sym(),
            left.weight,
            right.node_data_sym(),
            right.weight,
            next_seq
        );
        let node = Node::join(left, right, next_seq);
        next_seq += 1;

        // Every key is distinct (seq is unique), so there is exactly one insert position.
        let key = node.key();
        let pos = tree.partition_point(|n| n.key() > key);
        tree.insert(pos, node);
    }
    tree.pop()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::N_SYMBOLS;

    fn table(entries: &[(u8, u32)]) -> FreqTable {
        let mut f = [0_u32; N_SYMBOLS];
        entries.iter().for_each(|&(s, c)| f[s as usize] = c);
        f
    }

    fn leaf_sym(node: &Node) -> u8 {
        match node.node_data {
            NodeData::Leaf(sym) => sym,
            NodeData::Kids(..) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn empty_table_has_no_tree() {
        assert!(build_tree(&[0; N_SYMBOLS]).is_none());
    }

    #[test]
    fn single_symbol_is_a_lone_leaf() {
        let root = build_tree(&table(&[(b'z', 42)])).unwrap();
        assert!(root.is_leaf());
        assert_eq!(leaf_sym(&root), b'z');
        assert_eq!(root.weight, 42);
    }

    #[test]
    fn lowest_frequency_goes_left() {
        // "aaab": 'b' is extracted first
        let root = build_tree(&table(&[(b'a', 3), (b'b', 1)])).unwrap();
        let (left, right) = root.kids().unwrap();
        assert_eq!(leaf_sym(left), b'b');
        assert_eq!(leaf_sym(right), b'a');
        assert_eq!(root.weight, 4);
    }

    #[test]
    fn equal_frequency_tie_broken_by_symbol() {
        // C first, then A wins the tie with B; B (2) then joins the merged node (3).
        let root = build_tree(&table(&[(b'A', 2), (b'B', 2), (b'C', 1)])).unwrap();
        let (left, right) = root.kids().unwrap();
        assert_eq!(leaf_sym(left), b'B');
        let (rl, rr) = right.kids().unwrap();
        assert_eq!(leaf_sym(rl), b'C');
        assert_eq!(leaf_sym(rr), b'A');
    }

    #[test]
    fn internal_node_ties_with_symbol_zero_by_sequence() {
        // 1 + 1 merges into a node of weight 2 with placeholder symbol 0, tying the
        // leaf for symbol 0. The leaf is older, so it is extracted first.
        let root = build_tree(&table(&[(0, 2), (1, 1), (2, 1), (3, 5)])).unwrap();
        let (left, right) = root.kids().unwrap();
        let (ll, lr) = left.kids().unwrap();
        assert_eq!(leaf_sym(ll), 0);
        assert!(!lr.is_leaf());
        assert_eq!(leaf_sym(right), 3);
    }

    #[test]
    fn has_one_leaf_per_symbol() {
        let f: FreqTable = core::array::from_fn(|i| (i as u32 % 7) * 3 + 1);
        let root = build_tree(&f).unwrap();
        assert_eq!(root.leaves(), N_SYMBOLS);
        assert_eq!(root.weight, f.iter().map(|&c| c as u64).sum::<u64>());
    }

    #[test]
    fn construction_is_deterministic() {
        let f = table(&[(1, 4), (9, 4), (17, 4), (33, 4), (65, 8), (200, 1)]);
        assert_eq!(build_tree(&f), build_tree(&f));
    }
}
