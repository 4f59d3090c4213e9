//! Menu Tree Utilities
//!
//! Conversions between the nested menu tree served by the API and the flat,
//! indented rows the editor table works on.

use crate::error::TreeError;
use crate::models::{BulkItem, MenuNode, MenuRow};
use std::collections::{HashMap, HashSet};

/// Depth-first pre-order flattening.
/// Each row records its structural parent, its level (1 at top) and its
/// `order`, falling back to the index among its siblings.
pub fn flatten(nodes: &[MenuNode]) -> Vec<MenuRow> {
    fn collect(nodes: &[MenuNode], parent_id: Option<u64>, level: usize, rows: &mut Vec<MenuRow>) {
        for (idx, node) in nodes.iter().enumerate() {
            rows.push(MenuRow {
                id: node.id,
                title: node.title.clone(),
                url: node.url.clone(),
                parent_id,
                order: node.order.unwrap_or(idx as i64),
                active: node.active,
                post_id: node.post_id,
                level,
            });
            collect(&node.children, Some(node.id), level + 1, rows);
        }
    }

    let mut rows = Vec::new();
    collect(nodes, None, 1, &mut rows);
    rows
}

/// Group rows back into a tree. Siblings are sorted by `order` (stable on
/// ties); rows whose parent is not present become roots.
pub fn rebuild(rows: &[MenuRow]) -> Vec<MenuNode> {
    let ids: HashSet<u64> = rows.iter().map(|r| r.id).collect();

    // parent -> row indices, in row order
    let mut children_map: HashMap<Option<u64>, Vec<usize>> = HashMap::new();
    for (idx, row) in rows.iter().enumerate() {
        let parent = row.parent_id.filter(|p| ids.contains(p) && *p != row.id);
        children_map.entry(parent).or_default().push(idx);
    }
    for children in children_map.values_mut() {
        children.sort_by_key(|&i| rows[i].order);
    }

    fn build(
        parent: Option<u64>,
        rows: &[MenuRow],
        children_map: &HashMap<Option<u64>, Vec<usize>>,
        visited: &mut HashSet<u64>,
    ) -> Vec<MenuNode> {
        let Some(children) = children_map.get(&parent) else {
            return Vec::new();
        };
        let mut nodes = Vec::new();
        for &idx in children {
            let row = &rows[idx];
            if !visited.insert(row.id) {
                continue;
            }
            nodes.push(MenuNode {
                id: row.id,
                title: row.title.clone(),
                url: row.url.clone(),
                post_id: row.post_id,
                parent_id: parent,
                order: Some(row.order),
                active: row.active,
                children: build(Some(row.id), rows, children_map, visited),
            });
        }
        nodes
    }

    let mut visited = HashSet::new();
    let mut roots = build(None, rows, &children_map, &mut visited);

    // Rows caught in a parent loop are never reached from a root
    for row in rows {
        if !visited.contains(&row.id) {
            let mut detached = build(row.parent_id, rows, &children_map, &mut visited);
            for node in &mut detached {
                node.parent_id = None;
            }
            roots.extend(detached);
        }
    }
    roots
}

/// Ids of every row below `id`
pub fn descendants(rows: &[MenuRow], id: u64) -> HashSet<u64> {
    let mut children_map: HashMap<u64, Vec<u64>> = HashMap::new();
    for row in rows {
        if let Some(parent) = row.parent_id {
            children_map.entry(parent).or_default().push(row.id);
        }
    }

    let mut found = HashSet::new();
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        if let Some(children) = children_map.get(&current) {
            for &child in children {
                if child != id && found.insert(child) {
                    stack.push(child);
                }
            }
        }
    }
    found
}

/// Row ids sharing `parent`, in display order
fn siblings(rows: &[MenuRow], parent: Option<u64>) -> Vec<u64> {
    let mut group: Vec<(i64, usize, u64)> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.parent_id == parent)
        .map(|(i, r)| (r.order, i, r.id))
        .collect();
    group.sort();
    group.into_iter().map(|(_, _, id)| id).collect()
}

/// Index of `id` among its siblings
pub fn sibling_position(rows: &[MenuRow], id: u64) -> Option<usize> {
    let parent = rows.iter().find(|r| r.id == id)?.parent_id;
    siblings(rows, parent).iter().position(|&s| s == id)
}

/// Move `id` under `new_parent` at slot `position` of the sibling list as it
/// is currently displayed (`usize::MAX` appends). Both the old and the new
/// sibling groups are renumbered from 0 and levels are recomputed.
pub fn reparent(
    rows: &[MenuRow],
    id: u64,
    new_parent: Option<u64>,
    position: usize,
) -> Result<Vec<MenuRow>, TreeError> {
    let current = rows.iter().find(|r| r.id == id).ok_or(TreeError::UnknownNode(id))?;
    if let Some(parent) = new_parent {
        if !rows.iter().any(|r| r.id == parent) {
            return Err(TreeError::UnknownParent(parent));
        }
        if parent == id || descendants(rows, id).contains(&parent) {
            return Err(TreeError::Cycle { node: id, parent });
        }
    }
    let old_parent = current.parent_id;

    let mut target_group = siblings(rows, new_parent);
    let mut slot = position.min(target_group.len());
    if let Some(old_idx) = target_group.iter().position(|&s| s == id) {
        target_group.remove(old_idx);
        if old_idx < slot {
            slot -= 1;
        }
    }
    target_group.insert(slot.min(target_group.len()), id);

    let mut new_orders: HashMap<u64, i64> = HashMap::new();
    if old_parent != new_parent {
        for (i, sibling) in siblings(rows, old_parent).into_iter().filter(|&s| s != id).enumerate() {
            new_orders.insert(sibling, i as i64);
        }
    }
    for (i, sibling) in target_group.into_iter().enumerate() {
        new_orders.insert(sibling, i as i64);
    }

    let staged: Vec<MenuRow> = rows
        .iter()
        .map(|r| {
            let mut r = r.clone();
            if r.id == id {
                r.parent_id = new_parent;
            }
            if let Some(&order) = new_orders.get(&r.id) {
                r.order = order;
            }
            r
        })
        .collect();

    Ok(flatten(&rebuild(&staged)))
}

/// Project rows onto the bulk-update records
pub fn bulk_items(rows: &[MenuRow]) -> Vec<BulkItem> {
    rows.iter()
        .map(|r| BulkItem {
            id: r.id,
            parent_id: r.parent_id,
            order: r.order,
            post_id: r.post_id,
        })
        .collect()
}

/// Public navigation: inactive entries are hidden along with their subtrees
pub fn active_only(nodes: &[MenuNode]) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter(|n| n.active)
        .map(|n| MenuNode { children: active_only(&n.children), ..n.clone() })
        .collect()
}

#[cfg(test)]
pub(crate) fn make_node(id: u64, order: Option<i64>, children: Vec<MenuNode>) -> MenuNode {
    MenuNode {
        id,
        title: format!("Menu {}", id),
        url: Some(format!("/m/{}", id)),
        post_id: None,
        parent_id: None,
        order,
        active: true,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1 ─┬─ 3 ── 5
    ///    └─ 4
    /// 2
    fn sample() -> Vec<MenuNode> {
        vec![
            make_node(1, None, vec![make_node(3, None, vec![make_node(5, None, vec![])]), make_node(4, None, vec![])]),
            make_node(2, None, vec![]),
        ]
    }

    fn ids(rows: &[MenuRow]) -> Vec<u64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_flatten_preorder_levels() {
        let rows = flatten(&sample());

        assert_eq!(ids(&rows), vec![1, 3, 5, 4, 2]);
        let levels: Vec<usize> = rows.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 2, 1]);
        let parents: Vec<Option<u64>> = rows.iter().map(|r| r.parent_id).collect();
        assert_eq!(parents, vec![None, Some(1), Some(3), Some(1), None]);
        // order falls back to sibling index
        let orders: Vec<i64> = rows.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_flatten_keeps_explicit_order_and_fields() {
        let mut node = make_node(9, Some(7), vec![]);
        node.active = false;
        node.post_id = Some(42);
        let rows = flatten(&[node]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order, 7);
        assert!(!rows[0].active);
        assert_eq!(rows[0].post_id, Some(42));
        assert_eq!(rows[0].url.as_deref(), Some("/m/9"));
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn test_rebuild_round_trip() {
        let rows = flatten(&sample());
        assert_eq!(flatten(&rebuild(&rows)), rows);
    }

    #[test]
    fn test_rebuild_orphan_becomes_root() {
        let mut rows = flatten(&sample());
        rows.retain(|r| r.id != 3);
        let tree = rebuild(&rows);
        let root_ids: Vec<u64> = tree.iter().map(|n| n.id).collect();
        // 5 keeps its order 0, sorting stably after 1
        assert_eq!(root_ids, vec![1, 5, 2]);
        assert_eq!(flatten(&tree).len(), 4);
    }

    #[test]
    fn test_reparent_into_other_branch() {
        let rows = flatten(&sample());
        // 4 goes under 2
        let moved = reparent(&rows, 4, Some(2), 0).unwrap();
        assert_eq!(ids(&moved), vec![1, 3, 5, 2, 4]);
        let four = moved.iter().find(|r| r.id == 4).unwrap();
        assert_eq!(four.parent_id, Some(2));
        assert_eq!(four.level, 2);
        assert_eq!(four.order, 0);
    }

    #[test]
    fn test_reparent_to_root_renumbers_densely() {
        let rows = flatten(&sample());
        // 3 (with child 5) becomes the first root
        let moved = reparent(&rows, 3, None, 0).unwrap();
        assert_eq!(ids(&moved), vec![3, 5, 1, 4, 2]);
        let order_of = |id| moved.iter().find(|r| r.id == id).unwrap().order;
        assert_eq!((order_of(3), order_of(1), order_of(2)), (0, 1, 2));
        // old group: 4 alone under 1
        assert_eq!(order_of(4), 0);
        assert_eq!(moved.iter().find(|r| r.id == 5).unwrap().level, 2);
    }

    #[test]
    fn test_reparent_reorder_within_group() {
        let rows = flatten(&sample());
        // slot 2 of the root list is after 2
        let moved = reparent(&rows, 1, None, 2).unwrap();
        assert_eq!(ids(&moved), vec![2, 1, 3, 5, 4]);
        assert_eq!(sibling_position(&moved, 1), Some(1));
    }

    #[test]
    fn test_reparent_append() {
        let rows = flatten(&sample());
        let moved = reparent(&rows, 2, Some(1), usize::MAX).unwrap();
        assert_eq!(ids(&moved), vec![1, 3, 5, 4, 2]);
        assert_eq!(sibling_position(&moved, 2), Some(2));
    }

    #[test]
    fn test_reparent_rejects_cycles() {
        let rows = flatten(&sample());
        assert_eq!(reparent(&rows, 1, Some(5), 0), Err(TreeError::Cycle { node: 1, parent: 5 }));
        assert_eq!(reparent(&rows, 3, Some(3), 0), Err(TreeError::Cycle { node: 3, parent: 3 }));
        assert_eq!(reparent(&rows, 99, None, 0), Err(TreeError::UnknownNode(99)));
        assert_eq!(reparent(&rows, 2, Some(99), 0), Err(TreeError::UnknownParent(99)));
    }

    #[test]
    fn test_descendants() {
        let rows = flatten(&sample());
        let d = descendants(&rows, 1);
        assert_eq!(d, HashSet::from([3, 4, 5]));
        assert!(descendants(&rows, 2).is_empty());
    }

    #[test]
    fn test_bulk_items_projection() {
        let mut tree = sample();
        tree[1].post_id = Some(8);
        let items = bulk_items(&flatten(&tree));
        assert_eq!(items.len(), 5);
        assert_eq!(items[4], BulkItem { id: 2, parent_id: None, order: 1, post_id: Some(8) });
        assert_eq!(items[2], BulkItem { id: 5, parent_id: Some(3), order: 0, post_id: None });
    }

    #[test]
    fn test_active_only_prunes_subtrees() {
        let mut tree = sample();
        tree[0].children[0].active = false;
        let visible = active_only(&tree);
        let ids: Vec<u64> = flatten(&visible).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4, 2]);
    }
}
