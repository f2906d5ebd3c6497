//! Navigation menu building.
//!
//! Turns the flat document collection into an ordered tree of navigation
//! entries. Each `/`-separated slug segment produces one node per path
//! prefix: `guide/setup` yields a `guide` node containing a `guide/setup`
//! node. Prefixes without a document of their own become implicit folders
//! (`has_page = false`); if a document later claims that exact slug, the
//! folder is upgraded in place.
//!
//! ## Ordering
//!
//! Top-level entries follow the configured `menu_order` list: a slug at
//! index *i* sorts before one at index *j* iff *i* < *j*. Unlisted slugs
//! sort after all listed ones, keeping their scan order (the sort is
//! stable). The same comparator applies recursively at every depth, with
//! child entries looked up by their full slug (`"guide/setup"`, not
//! `"setup"`).
//!
//! ## Drafts
//!
//! Draft status is annotated, never filtered — the page shell decides how
//! to display draft entries.
//!
//! `build_menu` is a pure function over its inputs; the tree is rebuilt
//! from scratch on every content load.

use crate::slug::{capitalize_first, display_title, segments};
use crate::types::Document;
use std::collections::HashMap;

/// A node in the navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Display string, first letter capitalized.
    pub title: String,
    /// Full path prefix for this node (synthesized for implicit folders).
    pub slug: String,
    /// Draft flag: the exact-slug document's when one exists, otherwise
    /// inherited from the document that first created this folder node.
    pub draft: bool,
    /// True iff a document exists at exactly this slug.
    pub has_page: bool,
    /// Ordered children (empty for leaves).
    pub children: Vec<MenuItem>,
}

/// Node storage during construction: children are arena indices, and
/// `by_path` maps each full path prefix to its node, so insertion never
/// rescans a sibling list.
struct Arena {
    nodes: Vec<ArenaNode>,
    by_path: HashMap<String, usize>,
    roots: Vec<usize>,
}

struct ArenaNode {
    title: String,
    slug: String,
    draft: bool,
    has_page: bool,
    children: Vec<usize>,
}

impl Arena {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            by_path: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Find or create the node at `prefix`, attaching new nodes under
    /// `parent` (or at the root). New nodes inherit the draft flag of the
    /// document whose path is being walked. Returns the node index.
    fn find_or_create(
        &mut self,
        prefix: &str,
        segment: &str,
        draft: bool,
        parent: Option<usize>,
    ) -> usize {
        if let Some(&idx) = self.by_path.get(prefix) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(ArenaNode {
            title: capitalize_first(segment),
            slug: prefix.to_string(),
            draft,
            has_page: false,
            children: Vec::new(),
        });
        self.by_path.insert(prefix.to_string(), idx);
        match parent {
            Some(p) => self.nodes[p].children.push(idx),
            None => self.roots.push(idx),
        }
        idx
    }
}

/// Build the ordered navigation tree from the document collection.
///
/// `order` is the configured priority list of slugs; see the module docs
/// for the ordering rules. Duplicate slugs are not detected: the
/// last-processed document's title and draft flag win.
pub fn build_menu(documents: &[Document], order: &[String]) -> Vec<MenuItem> {
    let mut arena = Arena::new();

    for doc in documents {
        let parts = segments(&doc.slug);
        let mut parent = None;
        for (i, &part) in parts.iter().enumerate() {
            let prefix = parts[..=i].join("/");
            let idx = arena.find_or_create(&prefix, part, doc.draft, parent);
            if i == parts.len() - 1 {
                // The document claims this exact node: set its title and
                // mark it as a real page (upgrading an implicit folder).
                let node = &mut arena.nodes[idx];
                node.title = display_title(doc.title.as_deref(), &doc.slug);
                node.draft = doc.draft;
                node.has_page = true;
            }
            parent = Some(idx);
        }
    }

    let ranks: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, slug)| (slug.as_str(), i))
        .collect();

    into_sorted_tree(&arena, &arena.roots, &ranks)
}

/// Convert arena indices into owned `MenuItem`s, sorting every sibling
/// list by the order ranks (stable: unranked entries keep scan order).
fn into_sorted_tree(arena: &Arena, indices: &[usize], ranks: &HashMap<&str, usize>) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = indices
        .iter()
        .map(|&idx| {
            let node = &arena.nodes[idx];
            MenuItem {
                title: node.title.clone(),
                slug: node.slug.clone(),
                draft: node.draft,
                has_page: node.has_page,
                children: into_sorted_tree(arena, &node.children, ranks),
            }
        })
        .collect();
    items.sort_by_key(|item| ranks.get(item.slug.as_str()).copied().unwrap_or(usize::MAX));
    items
}

/// Walk the tree depth-first, visiting every item.
pub fn walk<'a>(items: &'a [MenuItem], visit: &mut impl FnMut(&'a MenuItem, usize)) {
    fn inner<'a>(items: &'a [MenuItem], depth: usize, visit: &mut impl FnMut(&'a MenuItem, usize)) {
        for item in items {
            visit(item, depth);
            inner(&item.children, depth + 1, visit);
        }
    }
    inner(items, 0, visit);
}
