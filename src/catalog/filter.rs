//! Wardrobe list filtering

use crate::clothing::ClothingItem;

/// Active category filter of a wardrobe view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every category
    #[default]
    All,

    /// Show only items of one category, matched case-insensitively
    Category(String),
}

impl CategoryFilter {
    /// Parse a picker value: the literal `"all"` selects every category,
    /// anything else filters on that exact category.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => wanted.to_lowercase() == category.to_lowercase(),
        }
    }
}

/// Project the visible subset of `items` under a category filter and a
/// free-text query.
///
/// The category filter is an exact match after lower-casing both sides,
/// never a substring match. A trimmed non-empty query must appear as a
/// substring of the lower-cased category, color, or brand; fields an item
/// does not carry are simply not consulted. The relative order of `items`
/// is preserved and nothing is copied or mutated — the result borrows from
/// the input.
pub fn filter_items<'a>(
    items: &'a [ClothingItem],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a ClothingItem> {
    let query = query.trim().to_lowercase();

    items
        .iter()
        .filter(|item| category.matches(&item.category))
        .filter(|item| {
            if query.is_empty() {
                return true;
            }
            item.category.to_lowercase().contains(&query)
                || item
                    .color
                    .as_deref()
                    .is_some_and(|color| color.to_lowercase().contains(&query))
                || item
                    .brand
                    .as_deref()
                    .is_some_and(|brand| brand.to_lowercase().contains(&query))
        })
        .collect()
}
