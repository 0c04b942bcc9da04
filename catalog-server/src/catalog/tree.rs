//! Tree Builder
//!
//! Pure transform from flat, parent-first category rows to an owned forest.

use shared::models::{CategoryNode, CategoryTreeRow};
use std::collections::HashMap;

/// Levels exposed by the active category tree (root = level 1)
pub const TREE_DEPTH: usize = 3;

/// Assemble the forest of active categories
///
/// - Roots (`parent_id = None`) become forest entries.
/// - A row whose parent is among the input rows becomes that parent's child.
/// - A row whose parent is missing from the input is dropped, together with
///   its subtree.
/// - Nodes below `max_depth` levels are dropped.
///
/// Root order and child order follow input order.
pub fn build_tree(rows: Vec<CategoryTreeRow>, max_depth: usize) -> Vec<CategoryNode> {
    let index: HashMap<String, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.category.id.clone(), i))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); rows.len()];
    let mut roots = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        match &row.category.parent_id {
            None => roots.push(i),
            Some(parent_id) => {
                if let Some(&parent) = index.get(parent_id) {
                    children[parent].push(i);
                }
            }
        }
    }

    let mut slots: Vec<Option<CategoryTreeRow>> = rows.into_iter().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|i| assemble(i, 1, max_depth, &children, &mut slots))
        .collect()
}

fn assemble(
    i: usize,
    level: usize,
    max_depth: usize,
    children: &[Vec<usize>],
    slots: &mut [Option<CategoryTreeRow>],
) -> Option<CategoryNode> {
    if level > max_depth {
        return None;
    }
    // Each row is consumed once, so malformed input with cycles terminates
    let row = slots[i].take()?;
    let kids: Vec<CategoryNode> = children[i]
        .iter()
        .filter_map(|&c| assemble(c, level + 1, max_depth, children, slots))
        .collect();
    Some(CategoryNode {
        category: row.category,
        product_count: row.product_count,
        children: kids,
    })
}
