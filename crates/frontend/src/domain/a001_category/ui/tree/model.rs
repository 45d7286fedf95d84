//! Arena storage for the category forest and its expansion state

use contracts::domain::a001_category::{CategoryId, CategoryNode};
use std::collections::{HashMap, HashSet};

/// Поля узла без детей: дети хранятся отдельно списками идентификаторов
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub desc_product_count: i64,
    pub sort_order: i32,
}

impl From<&CategoryNode> for CategoryRecord {
    fn from(node: &CategoryNode) -> Self {
        Self {
            id: node.id,
            name: node.name.clone(),
            slug: node.slug.clone(),
            description: node.description.clone(),
            desc_product_count: node.desc_product_count,
            sort_order: node.sort_order,
        }
    }
}

/// One line of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: CategoryId,
    pub parent_id: Option<CategoryId>,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
}

/// Category forest in arena form.
///
/// Nodes live in a flat map keyed by id; structure is kept as ordered child
/// id lists plus a parent map, so lookups by id are O(1) and the forest can
/// never contain a cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForest {
    nodes: HashMap<CategoryId, CategoryRecord>,
    children: HashMap<CategoryId, Vec<CategoryId>>,
    parents: HashMap<CategoryId, CategoryId>,
    roots: Vec<CategoryId>,
}

impl CategoryForest {
    /// Build the arena from the nested payload.
    ///
    /// A node whose id was already seen is dropped together with its subtree.
    pub fn from_nodes(nodes: Vec<CategoryNode>) -> Self {
        let mut forest = Self::default();

        // Обход в прямом порядке без рекурсии: дети кладутся в стек в обратном
        // порядке, поэтому братья добавляются к родителю в исходной очерёдности.
        let mut stack: Vec<(Option<CategoryId>, CategoryNode)> =
            nodes.into_iter().rev().map(|node| (None, node)).collect();

        while let Some((parent, mut node)) = stack.pop() {
            let id = node.id;
            if forest.nodes.contains_key(&id) {
                log::warn!(
                    "Category {} ({}) appears more than once in the tree, subtree skipped",
                    id,
                    node.slug
                );
                continue;
            }

            let children = std::mem::take(&mut node.children);
            forest.nodes.insert(id, CategoryRecord::from(&node));
            match parent {
                Some(parent_id) => {
                    forest.parents.insert(id, parent_id);
                    forest.children.entry(parent_id).or_default().push(id);
                }
                None => forest.roots.push(id),
            }

            stack.extend(children.into_iter().rev().map(|child| (Some(id), child)));
        }

        forest
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn roots(&self) -> &[CategoryId] {
        &self.roots
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategoryRecord> {
        self.nodes.get(&id)
    }

    pub fn children(&self, id: CategoryId) -> &[CategoryId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parent(&self, id: CategoryId) -> Option<CategoryId> {
        self.parents.get(&id).copied()
    }

    pub fn has_children(&self, id: CategoryId) -> bool {
        !self.children(id).is_empty()
    }

    /// Rows to display: children of collapsed nodes are skipped
    pub fn visible_rows(&self, expansion: &ExpansionState) -> Vec<TreeRow> {
        self.collect_rows(|id| expansion.is_expanded(id))
    }

    /// Every node exactly once, depth-first in display order
    pub fn all_rows(&self) -> Vec<TreeRow> {
        self.collect_rows(|_| true)
    }

    fn collect_rows(&self, descend: impl Fn(CategoryId) -> bool) -> Vec<TreeRow> {
        let mut rows = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(CategoryId, usize)> =
            self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let children = self.children(id);
            let open = descend(id);
            rows.push(TreeRow {
                id,
                parent_id: self.parent(id),
                depth,
                has_children: !children.is_empty(),
                is_expanded: open && !children.is_empty(),
            });
            if open {
                stack.extend(children.iter().rev().map(|&child| (child, depth + 1)));
            }
        }

        rows
    }
}

/// Ids of nodes currently expanded in the tree view.
///
/// Not pruned on reload: ids that disappear simply stop matching anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<CategoryId>,
}

impl ExpansionState {
    /// Flip membership; returns the new state of `id`
    pub fn toggle(&mut self, id: CategoryId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn node(id: CategoryId, slug: &str, children: Vec<CategoryNode>) -> CategoryNode {
        CategoryNode {
            id,
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            description: None,
            desc_product_count: 0,
            sort_order: 0,
            children,
        }
    }

    /// 1 ─┬─ 2 ─┬─ 4 ── 7
    ///    │     └─ 5
    ///    └─ 3
    /// 6
    pub(crate) fn sample_forest() -> Vec<CategoryNode> {
        vec![
            node(
                1,
                "a",
                vec![
                    node(2, "b", vec![node(4, "d", vec![node(7, "g", vec![])]), node(5, "e", vec![])]),
                    node(3, "c", vec![]),
                ],
            ),
            node(6, "f", vec![]),
        ]
    }

    fn ids(rows: &[TreeRow]) -> Vec<CategoryId> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_arena_structure() {
        let forest = CategoryForest::from_nodes(sample_forest());

        assert_eq!(forest.len(), 7);
        assert_eq!(forest.roots(), &[1, 6]);
        assert_eq!(forest.children(1), &[2, 3]);
        assert_eq!(forest.children(2), &[4, 5]);
        assert_eq!(forest.children(6), &[] as &[CategoryId]);
        assert_eq!(forest.parent(7), Some(4));
        assert_eq!(forest.parent(1), None);
        assert_eq!(forest.get(5).map(|r| r.slug.as_str()), Some("e"));
        assert!(forest.get(99).is_none());
    }

    #[test]
    fn test_all_rows_visit_every_node_once_in_order() {
        let forest = CategoryForest::from_nodes(sample_forest());
        let rows = forest.all_rows();

        assert_eq!(ids(&rows), vec![1, 2, 4, 7, 5, 3, 6]);
        let depths: Vec<usize> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3, 2, 1, 0]);

        let mut seen = ids(&rows);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), forest.len());
    }

    #[test]
    fn test_visible_rows_follow_expansion() {
        let forest = CategoryForest::from_nodes(sample_forest());
        let mut expansion = ExpansionState::default();

        assert_eq!(ids(&forest.visible_rows(&expansion)), vec![1, 6]);

        expansion.toggle(1);
        let rows = forest.visible_rows(&expansion);
        assert_eq!(ids(&rows), vec![1, 2, 3, 6]);
        assert!(rows[0].is_expanded);
        assert!(rows[1].has_children && !rows[1].is_expanded);
        assert!(!rows[2].has_children);

        // раскрытый узел внутри свёрнутого предка не показывается
        expansion.toggle(4);
        assert_eq!(ids(&forest.visible_rows(&expansion)), vec![1, 2, 3, 6]);
        expansion.toggle(2);
        assert_eq!(ids(&forest.visible_rows(&expansion)), vec![1, 2, 4, 7, 5, 3, 6]);
    }

    #[test]
    fn test_leaf_is_never_marked_expanded() {
        let forest = CategoryForest::from_nodes(sample_forest());
        let mut expansion = ExpansionState::default();
        expansion.toggle(6);

        let rows = forest.visible_rows(&expansion);
        let leaf = rows.iter().find(|r| r.id == 6).unwrap();
        assert!(!leaf.has_children);
        assert!(!leaf.is_expanded);
    }

    #[test]
    fn test_empty_forest_renders_nothing() {
        let forest = CategoryForest::from_nodes(vec![]);
        assert!(forest.is_empty());
        assert!(forest.all_rows().is_empty());
        assert!(forest.visible_rows(&ExpansionState::default()).is_empty());
    }

    #[test]
    fn test_duplicate_ids_keep_first_occurrence() {
        let forest = CategoryForest::from_nodes(vec![
            node(1, "a", vec![node(2, "b", vec![])]),
            node(2, "dup", vec![node(3, "lost", vec![])]),
        ]);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.get(2).unwrap().slug, "b");
        assert!(forest.get(3).is_none());
        assert_eq!(forest.roots(), &[1]);
    }

    #[test]
    fn test_deep_nesting() {
        let mut chain = node(500, "leaf", vec![]);
        for id in (0..500).rev() {
            chain = node(id, "n", vec![chain]);
        }
        let forest = CategoryForest::from_nodes(vec![chain]);

        let rows = forest.all_rows();
        assert_eq!(rows.len(), 501);
        assert_eq!(rows.last().map(|r| r.depth), Some(500));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut expansion = ExpansionState::default();
        expansion.toggle(3);
        let before = expansion.clone();

        assert!(expansion.toggle(8));
        assert!(!expansion.toggle(8));
        assert_eq!(expansion, before);

        assert!(!expansion.toggle(3));
        assert!(expansion.toggle(3));
        assert_eq!(expansion, before);
    }
}
