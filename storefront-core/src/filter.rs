//! Category selection and product filtering
use crate::catalog::{Catalog, Product};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the "no filter" selection as shown on the category bar.
pub const ALL_CATEGORIES_LABEL: &str = "الكل";

/// The active category filter.
///
/// Any label is accepted; one that matches no product simply yields an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    /// Interpret a category bar label. The sentinel maps to [`CategorySelection::All`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES_LABEL,
            Self::Named(label) => label,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Named(label) => product.category == *label,
        }
    }
}

impl From<&str> for CategorySelection {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for CategorySelection {
    fn from(label: String) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            Self::All
        } else {
            Self::Named(label)
        }
    }
}

impl From<CategorySelection> for String {
    fn from(selection: CategorySelection) -> Self {
        match selection {
            CategorySelection::All => ALL_CATEGORIES_LABEL.to_string(),
            CategorySelection::Named(label) => label,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category bar entries: the "all" sentinel followed by the catalog's categories.
#[must_use]
pub fn category_options(catalog: &Catalog) -> Vec<CategorySelection> {
    std::iter::once(CategorySelection::All)
        .chain(
            catalog
                .category_labels()
                .into_iter()
                .map(|label| CategorySelection::Named(label.to_string())),
        )
        .collect()
}

/// Products visible under `selection`, in catalog order.
#[must_use]
pub fn visible_products<'a>(catalog: &'a Catalog, selection: &CategorySelection) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|product| selection.matches(product))
        .collect()
}
