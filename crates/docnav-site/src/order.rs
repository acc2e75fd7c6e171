//! Curated ordering of menu entries.

use std::collections::HashMap;

/// Rank lookup built from the curated `navigation.order` list.
///
/// Ids not in the list rank after every listed id. Listed ids may carry a
/// `.md` or `.mdx` extension, which is ignored. Lookup is case-sensitive.
#[derive(Clone, Debug, Default)]
pub struct OrderMap {
    ranks: HashMap<String, usize>,
}

impl OrderMap {
    /// Build from ids in preferred order. The first occurrence of an id wins.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks = HashMap::new();
        for (rank, id) in ids.into_iter().enumerate() {
            ranks.entry(normalize(id.as_ref())).or_insert(rank);
        }
        Self { ranks }
    }

    /// Rank of a locale-stripped id; `usize::MAX` when unlisted.
    #[must_use]
    pub fn rank(&self, id: &str) -> usize {
        self.ranks.get(id).copied().unwrap_or(usize::MAX)
    }
}

fn normalize(id: &str) -> String {
    let id = id.trim_matches('/');
    id.strip_suffix(".mdx")
        .or_else(|| id.strip_suffix(".md"))
        .unwrap_or(id)
        .to_owned()
}
