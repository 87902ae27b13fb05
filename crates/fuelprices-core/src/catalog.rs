//! Fixed catalog of bulletin categories published on fuelprices.gr.
//!
//! Each category pairs the directory name used under the storage root with the
//! page (relative to the base URL) that lists its bulletin files.

use std::fmt;

/// One bulletin category and the page that lists its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    /// Directory name under the storage root.
    pub name: &'static str,
    /// Page path relative to the base URL.
    pub page_path: &'static str,
}

pub const WEEKLY: Category = Category {
    name: "weekly",
    page_path: "deltia.view",
};

pub const DAILY_COUNTRY: Category = Category {
    name: "daily_country",
    page_path: "deltia_d.view",
};

pub const DAILY_PREFECTURE: Category = Category {
    name: "daily_prefecture",
    page_path: "deltia_dn.view",
};

/// All categories, in fetch order.
pub const CATALOG: [Category; 3] = [WEEKLY, DAILY_COUNTRY, DAILY_PREFECTURE];

impl Category {
    /// Looks up a category by its directory name.
    pub fn by_name(name: &str) -> Option<Category> {
        CATALOG.iter().copied().find(|c| c.name == name)
    }

    /// Full page URL for this category under `base_url` (no trailing slash expected).
    pub fn page_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url, self.page_path)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
