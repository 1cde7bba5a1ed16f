//! Static category catalog consulted for display and draft validation.

use serde::Serialize;

/// A spending category with its display label and icon asset reference.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

const CATALOG: &[Category] = &[
    Category {
        id: "savings",
        name: "Savings",
        icon: "icon_savings",
    },
    Category {
        id: "food",
        name: "Food",
        icon: "icon_food",
    },
    Category {
        id: "home",
        name: "Home",
        icon: "icon_home",
    },
    Category {
        id: "misc",
        name: "Miscellaneous",
        icon: "icon_misc",
    },
    Category {
        id: "leisure",
        name: "Leisure",
        icon: "icon_leisure",
    },
    Category {
        id: "health",
        name: "Health",
        icon: "icon_health",
    },
    Category {
        id: "subscriptions",
        name: "Subscriptions",
        icon: "icon_subscriptions",
    },
    Category {
        id: "transport",
        name: "Transport",
        icon: "icon_transport",
    },
];

/// Returns every category in display order.
pub fn categories() -> &'static [Category] {
    CATALOG
}

/// Looks up a category by id.
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|category| category.id == id)
}
