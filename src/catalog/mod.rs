//! Client-side catalog logic: display formatting and list filtering

mod filter;
mod format;

use crate::clothing::ClothingItem;

pub use filter::{filter_items, CategoryFilter};
pub use format::{classify_formality, format_category, format_confidence_percent, FormalityTier};

/// Display state of a wardrobe list: the loaded items, the active category
/// filter, and the free-text search query.
///
/// The visible subset is recomputed from scratch on every read — there is no
/// memoized result to go stale. Loads replace the whole collection, so when
/// two loads overlap the last one to land wins outright; partial merges
/// never occur.
#[derive(Debug, Clone, Default)]
pub struct WardrobeView {
    items: Vec<ClothingItem>,
    category: CategoryFilter,
    query: String,
}

impl WardrobeView {
    /// Create an empty view showing all categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backing collection wholesale with a freshly loaded one
    pub fn replace_items(&mut self, items: Vec<ClothingItem>) {
        self.items = items;
    }

    /// Set the free-text search query
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Set the active category filter
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// The full backing collection, unfiltered
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    /// The current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The active category filter
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// The currently visible subset, in stored order
    pub fn visible_items(&self) -> Vec<&ClothingItem> {
        filter_items(&self.items, &self.category, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str, color: &str) -> ClothingItem {
        ClothingItem {
            item_id: id.to_string(),
            category: category.to_string(),
            subcategory: None,
            color: Some(color.to_string()),
            brand: None,
            image_url: None,
            metadata: None,
            created_at: None,
        }
    }

    #[test]
    fn inputs_recompute_the_visible_subset() {
        let mut view = WardrobeView::new();
        view.replace_items(vec![
            item("1", "shirt", "Red"),
            item("2", "pants", "Blue"),
            item("3", "shirt", "Blue"),
        ]);

        assert_eq!(view.visible_items().len(), 3);

        view.set_category(CategoryFilter::parse("shirt"));
        assert_eq!(view.visible_items().len(), 2);

        view.set_query("blue");
        let visible = view.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].item_id, "3");

        view.set_category(CategoryFilter::parse("all"));
        assert_eq!(view.visible_items().len(), 2);
    }

    #[test]
    fn a_new_load_replaces_the_previous_one_outright() {
        let mut view = WardrobeView::new();

        // Two loads resolving in sequence: the later one wins completely,
        // nothing from the first survives.
        view.replace_items(vec![item("1", "shirt", "Red"), item("2", "pants", "Blue")]);
        view.replace_items(vec![item("9", "dress", "Green")]);

        let visible = view.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].item_id, "9");
        assert_eq!(view.items().len(), 1);
    }

    #[test]
    fn reads_are_stable_for_identical_state() {
        let mut view = WardrobeView::new();
        view.replace_items(vec![item("1", "shirt", "Red"), item("2", "pants", "Blue")]);
        view.set_query("red");

        assert_eq!(view.visible_items(), view.visible_items());
    }
}
