//! Side navigation tree.
//!
//! # Architecture
//!
//! Nodes are collected in a flat arena with children tracked by index and a
//! cumulative-id index for find-or-insert. The arena is sorted in place and
//! then converted into nested [`MenuNode`] values.

use std::collections::HashMap;

use docnav_content::{ContentEntry, capitalize_first_letter, filter_entries};
use docnav_i18n::{I18nError, LocaleRegistry, Translator};
use serde::Serialize;

use crate::order::OrderMap;

/// Node of the side navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    /// Display title.
    pub title: String,
    /// Locale-stripped cumulative path (e.g., "guides/pages").
    pub id: String,
    /// Link target; keeps the locale segment for non-default locales.
    pub slug: String,
    /// Whether the node is a draft.
    pub draft: bool,
    /// Child nodes in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Depth of the subtree rooted here (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(MenuNode::depth).max().unwrap_or(0)
    }
}

/// Build the navigation tree of `locale` from unfiltered entries.
///
/// # Errors
///
/// Returns [`I18nError::UnsupportedLocale`] if `locale` is not declared.
pub fn build_menu(
    entries: &[ContentEntry],
    locale: &str,
    order: &OrderMap,
    registry: &LocaleRegistry,
) -> Result<Vec<MenuNode>, I18nError> {
    let t = registry.translate_for(locale)?;
    let filtered = filter_entries(entries, locale, registry.default_locale());
    Ok(build_tree(&filtered, registry.is_default(locale), order, t))
}

/// Build the navigation tree from entries already filtered for `t`'s locale.
pub(crate) fn build_tree(
    entries: &[ContentEntry],
    is_default: bool,
    order: &OrderMap,
    t: Translator<'_>,
) -> Vec<MenuNode> {
    let mut arena = Arena::default();
    // The slug of a non-default locale keeps its locale segment.
    let slug_offset = if is_default { 1 } else { 2 };

    for entry in entries {
        let id_parts: Vec<&str> = entry.id.split('/').collect();
        let slug_parts: Vec<&str> = entry.slug.split('/').collect();
        let mut parent = None;

        for (index, part) in id_parts.iter().enumerate() {
            let id = id_parts[..=index].join("/");
            let is_leaf = index == id_parts.len() - 1;

            let idx = match arena.index.get(&id) {
                Some(&idx) => idx,
                None => {
                    let slug_len = (index + slug_offset).min(slug_parts.len());
                    let title = if is_leaf {
                        String::new()
                    } else {
                        folder_title(t, part)
                    };
                    arena.insert(parent, id, title, slug_parts[..slug_len].join("/"))
                }
            };

            let node = &mut arena.nodes[idx];
            if is_leaf {
                node.title = entry.data.title.clone().unwrap_or_default();
            }
            node.draft = entry.data.draft;
            parent = Some(idx);
        }
    }

    arena.sort(order);
    arena.into_tree()
}

fn folder_title(t: Translator<'_>, segment: &str) -> String {
    t.get(&format!("paths.{segment}"))
        .map_or_else(|| capitalize_first_letter(segment), str::to_owned)
}

struct ArenaNode {
    title: String,
    id: String,
    slug: String,
    draft: bool,
}

#[derive(Default)]
struct Arena {
    nodes: Vec<ArenaNode>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    index: HashMap<String, usize>,
}

impl Arena {
    fn insert(&mut self, parent: Option<usize>, id: String, title: String, slug: String) -> usize {
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(ArenaNode {
            title,
            id,
            slug,
            draft: false,
        });
        self.children.push(Vec::new());
        match parent {
            Some(p) => self.children[p].push(idx),
            None => self.roots.push(idx),
        }
        idx
    }

    /// Stable sort of every sibling list by rank.
    fn sort(&mut self, order: &OrderMap) {
        let nodes = &self.nodes;
        let by_rank = |&idx: &usize| order.rank(&nodes[idx].id);
        self.roots.sort_by_key(by_rank);
        for children in &mut self.children {
            children.sort_by_key(by_rank);
        }
    }

    fn into_tree(mut self) -> Vec<MenuNode> {
        let roots = std::mem::take(&mut self.roots);
        roots.into_iter().map(|idx| self.take(idx)).collect()
    }

    fn take(&mut self, idx: usize) -> MenuNode {
        let children = std::mem::take(&mut self.children[idx]);
        let children = children.into_iter().map(|c| self.take(c)).collect();
        let node = &mut self.nodes[idx];
        MenuNode {
            title: std::mem::take(&mut node.title),
            id: std::mem::take(&mut node.id),
            slug: std::mem::take(&mut node.slug),
            draft: node.draft,
            children,
        }
    }
}
