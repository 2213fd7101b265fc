use serde::{Deserialize, Serialize};

/// Links of one contour into the nesting tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Next contour with the same parent.
    pub next: Option<usize>,
    /// Previous contour with the same parent.
    pub previous: Option<usize>,
    /// First contour directly nested inside this one.
    pub first_child: Option<usize>,
    /// Contour this one is directly nested in.
    pub parent: Option<usize>,
}

/// Nesting tree of a contour list, indexed like the list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    pub fn new(nodes: Vec<HierarchyNode>) -> Self {
        Self { nodes }
    }

    /// Build sibling and child links from each contour's parent.
    ///
    /// Siblings keep the order of the contour list; contours without a parent
    /// are siblings of each other.
    pub fn from_parents(parents: &[Option<usize>]) -> Self {
        let mut nodes = vec![HierarchyNode::default(); parents.len()];
        // Last contour seen per parent slot; index 0 is the top level.
        let mut last_in_group: Vec<Option<usize>> = vec![None; parents.len() + 1];

        for (i, parent) in parents.iter().enumerate() {
            nodes[i].parent = *parent;
            let slot = parent.map_or(0, |p| p + 1);
            match last_in_group[slot] {
                Some(prev) => {
                    nodes[prev].next = Some(i);
                    nodes[i].previous = Some(prev);
                }
                None => {
                    if let Some(p) = parent {
                        nodes[*p].first_child = Some(i);
                    }
                }
            }
            last_in_group[slot] = Some(i);
        }

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HierarchyNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }
}

/// Count the direct children of a contour by following its first-child link
/// and then next-sibling links until exhausted.
///
/// Returns the count and the child indices in traversal order. An index
/// outside the hierarchy has no children.
pub fn contour_child_finder(contour_index: usize, hierarchy: &Hierarchy) -> (usize, Vec<usize>) {
    let mut child_indexes = Vec::new();
    let mut child = hierarchy.get(contour_index).and_then(|n| n.first_child);

    while let Some(index) = child {
        child_indexes.push(index);
        child = hierarchy.get(index).and_then(|n| n.next);
    }

    (child_indexes.len(), child_indexes)
}
