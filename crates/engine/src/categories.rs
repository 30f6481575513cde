//! Fixed category set.
//!
//! Categories are not stored: transactions reference them by id, and ids
//! that are not in [`CATEGORIES`] are kept as-is and reported as unknown by
//! [`category`].

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// `#RRGGBB`
    pub color: &'static str,
}

impl Category {
    /// Color as an RGB triple, for terminal rendering.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .unwrap_or(0)
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

pub const CATEGORIES: [Category; 10] = [
    Category { id: "food", name: "Food & Dining", icon: "🍔", color: "#FF6B6B" },
    Category { id: "transport", name: "Transport", icon: "🚗", color: "#4ECDC4" },
    Category { id: "shopping", name: "Shopping", icon: "🛍️", color: "#95E1D3" },
    Category { id: "entertainment", name: "Entertainment", icon: "🎬", color: "#FFE66D" },
    Category { id: "bills", name: "Bills & Utilities", icon: "💡", color: "#A8E6CF" },
    Category { id: "health", name: "Health", icon: "⚕️", color: "#FF8B94" },
    Category { id: "education", name: "Education", icon: "📚", color: "#B4A7D6" },
    Category { id: "travel", name: "Travel", icon: "✈️", color: "#FFD3B6" },
    Category { id: "savings", name: "Savings", icon: "💰", color: "#A8DADC" },
    Category { id: "other", name: "Other", icon: "📦", color: "#C7CEEA" },
];

/// Label used wherever a category id does not resolve.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Looks up a category by id.
#[must_use]
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// All category ids in enumeration order.
pub fn category_ids() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|category| category.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_explicit_about_unknown_ids() {
        assert_eq!(category("food").map(|c| c.name), Some("Food & Dining"));
        assert!(category("groceries").is_none());
        assert!(category("").is_none());
    }

    #[test]
    fn rgb_parses_hex_color() {
        let food = category("food").unwrap();
        assert_eq!(food.rgb(), (0xFF, 0x6B, 0x6B));
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = category_ids().collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATEGORIES.len());
    }
}
