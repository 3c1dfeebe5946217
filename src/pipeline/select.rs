//! Top-N selection by score

use crate::pipeline::enrich::AnimeItem;

/// Outcome of the selection stage.
#[derive(Debug)]
pub struct Selection {
    /// Selected items, highest score first; ties keep source order
    pub items: Vec<AnimeItem>,
    /// Requested selection size
    pub requested: usize,
    /// Items available before truncation
    pub available: usize,
}

impl Selection {
    /// How many items short of the requested size the selection came up.
    /// Zero when enough rows survived cleaning.
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.items.len())
    }
}

/// Keep the `target` highest-scored items in descending score order.
///
/// The sort is stable, so items with equal scores stay in their original
/// source order and the result is deterministic across runs. When fewer
/// than `target` items are available, all of them are returned and the
/// shortfall is observable on the [`Selection`].
pub fn select_top_rated(mut items: Vec<AnimeItem>, target: usize) -> Selection {
    let available = items.len();

    items.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    items.truncate(target);

    Selection {
        items,
        requested: target,
        available,
    }
}
