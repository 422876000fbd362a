use std::cmp::Ordering;
use std::fmt;

use super::{FrequencyTable, Symbol, SYMBOL_COUNT};
use crate::priority_queue::PriorityQueue;

pub type NodeIndex = usize;

/// Side of its parent a node hangs on, i.e. the bit it contributes to a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Zero,
    One,
}

impl Branch {
    pub fn bit(self) -> char {
        match self {
            Branch::Zero => '0',
            Branch::One => '1',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { zero: NodeIndex, one: NodeIndex },
}

#[derive(Debug, Clone, Copy)]
struct Node {
    frequency: usize,
    parent: Option<NodeIndex>,
    kind: NodeKind,
}

#[derive(Debug, Clone, Copy)]
struct QueuedNode {
    frequency: usize,
    index: NodeIndex,
}

fn compare_frequencies(a: &QueuedNode, b: &QueuedNode) -> Ordering {
    a.frequency.cmp(&b.frequency)
}

/// Huffman tree stored in an arena. Leaves occupy the first slots in
/// ascending symbol order, inner nodes follow in the order they were merged.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    leaf_indices: [Option<NodeIndex>; SYMBOL_COUNT],
    root_index: NodeIndex,
}

impl HuffmanTree {
    /// Greedily merges the two least frequent entries until one root remains.
    ///
    /// Entries of equal frequency are merged in the order they entered the
    /// queue. Leaves enter in ascending symbol order, so the result only
    /// depends on the frequency table. The entry removed first becomes the
    /// zero branch of the new node.
    pub fn new(table: &FrequencyTable) -> HuffmanTree {
        let mut nodes = Vec::with_capacity(2 * table.len());
        let mut leaf_indices = [None; SYMBOL_COUNT];
        let mut queue = PriorityQueue::new(compare_frequencies);

        for symbol_frequency in table.symbol_frequencies() {
            let index = nodes.len();
            nodes.push(Node {
                frequency: symbol_frequency.frequency,
                parent: None,
                kind: NodeKind::Leaf {
                    symbol: symbol_frequency.symbol,
                },
            });
            leaf_indices[symbol_frequency.symbol as usize] = Some(index);
            queue.insert(QueuedNode {
                frequency: symbol_frequency.frequency,
                index,
            });
        }

        while queue.len() > 1 {
            let zero = queue.remove_min();
            let one = queue.remove_min();
            let index = nodes.len();
            let frequency = zero.frequency + one.frequency;
            nodes.push(Node {
                frequency,
                parent: None,
                kind: NodeKind::Inner {
                    zero: zero.index,
                    one: one.index,
                },
            });
            nodes[zero.index].parent = Some(index);
            nodes[one.index].parent = Some(index);
            log::trace!(
                "merged node {} ({}) and node {} ({}) into node {} ({})",
                zero.index,
                zero.frequency,
                one.index,
                one.frequency,
                index,
                frequency
            );
            queue.insert(QueuedNode { frequency, index });
        }

        let root_index = queue.remove_min().index;
        HuffmanTree {
            nodes,
            leaf_indices,
            root_index,
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root_index
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_indices.iter().flatten().count()
    }

    /// Number of inner nodes, one per merge.
    pub fn merge_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    pub fn leaf(&self, symbol: Symbol) -> Option<NodeIndex> {
        self.leaf_indices.get(symbol as usize).copied().flatten()
    }

    /// Leaf node indices in ascending symbol order.
    pub fn leaves(&self) -> impl Iterator<Item = (Symbol, NodeIndex)> + '_ {
        self.leaf_indices
            .iter()
            .copied()
            .enumerate()
            .filter_map(|(symbol, index)| index.map(|index| (symbol as Symbol, index)))
    }

    pub fn frequency(&self, index: NodeIndex) -> usize {
        self.nodes[index].frequency
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index].parent
    }

    pub fn symbol(&self, index: NodeIndex) -> Option<Symbol> {
        match self.nodes[index].kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Inner { .. } => None,
        }
    }

    /// Zero and one child of an inner node, `None` for a leaf.
    pub fn children(&self, index: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
        match self.nodes[index].kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Inner { zero, one } => Some((zero, one)),
        }
    }

    pub fn branch(&self, index: NodeIndex) -> Option<Branch> {
        let parent = self.nodes[index].parent?;
        match self.nodes[parent].kind {
            NodeKind::Inner { zero, .. } if zero == index => Some(Branch::Zero),
            NodeKind::Inner { one, .. } if one == index => Some(Branch::One),
            _ => panic!(
                "node {} names node {} as parent, but is not one of its children",
                index, parent
            ),
        }
    }

    /// Number of nodes on the path from `index` up to the root, both included.
    pub fn depth(&self, index: NodeIndex) -> usize {
        let mut depth = 1;
        let mut current = index;
        while let Some(parent) = self.nodes[current].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Bit pattern of a symbol, first bit first.
    ///
    /// A tree consisting of a single leaf has no branches; that leaf is
    /// assigned the one bit code `0`.
    pub fn code_for(&self, symbol: Symbol) -> Option<Vec<Branch>> {
        let leaf = self.leaf(symbol)?;
        if leaf == self.root_index {
            return Some(vec![Branch::Zero]);
        }
        let mut code = Vec::new();
        let mut current = leaf;
        while let Some(branch) = self.branch(current) {
            code.push(branch);
            current = self.nodes[current].parent?;
        }
        code.reverse();
        Some(code)
    }

    /// Checks that there is exactly one parentless node and that every node
    /// has either no children or two children pointing back at it.
    pub fn is_proper(&self) -> bool {
        let roots = self.nodes.iter().filter(|n| n.parent.is_none()).count();
        if roots != 1 || self.nodes[self.root_index].parent.is_some() {
            return false;
        }
        self.nodes.iter().enumerate().all(|(index, node)| match node.kind {
            NodeKind::Leaf { .. } => true,
            NodeKind::Inner { zero, one } => {
                zero != one
                    && self.nodes[zero].parent == Some(index)
                    && self.nodes[one].parent == Some(index)
                    && node.frequency == self.nodes[zero].frequency + self.nodes[one].frequency
            }
        })
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl Node {
    fn get_string(&self, tree: &HuffmanTree) -> Vec<String> {
        match self.kind {
            NodeKind::Leaf { symbol } => vec![format!("(s:{},f:{})", symbol, self.frequency)],
            NodeKind::Inner { zero, one } => {
                let zero_box = tree.nodes[zero].get_string(tree);
                let one_box = tree.nodes[one].get_string(tree);
                let zero_width = zero_box[0].chars().count();
                let one_width = one_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                let label = format!("{}", self.frequency);
                let label_width = label.chars().count();
                // label midpoint sits on the connector column
                let padding = (zero_width + one_width + 1).saturating_sub(label_width);
                let label_start = zero_width.saturating_sub(label_width / 2).min(padding);
                result.push(format!(
                    "{}{}{}",
                    SPACE.repeat(label_start),
                    label,
                    SPACE.repeat(padding - label_start)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(zero_width),
                    SPACE.repeat(one_width)
                ));

                let zero_pos = center_of(&zero_box[0]);
                let one_pos = center_of(&one_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(zero_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(zero_width - zero_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(one_pos),
                    SPACE.repeat(one_width - one_pos - 1)
                ));

                let zero_depth = zero_box.len();
                let one_depth = one_box.len();
                for i in 0..zero_depth.max(one_depth) {
                    let zero_str = zero_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(zero_width));
                    let one_str = one_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(one_width));
                    result.push(format!("{} {}", zero_str, one_str));
                }
                result
            }
        }
    }
}

fn center_of(line: &str) -> usize {
    let start = line.chars().position(|c| c != ' ').unwrap_or(0);
    (start * 2 + line.trim().chars().count()) / 2
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strs = self.nodes[self.root_index].get_string(self);
        for s in strs.iter() {
            writeln!(f, "{}", s.trim_end())?;
        }
        Ok(())
    }
}
