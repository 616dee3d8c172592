//! Portfolio catalog files
//!
//! A JSON array of portfolio items, as rendered into the gallery grid.

use crate::error::SiteError;
use indexmap::IndexSet;
use mlweb_ui::PortfolioItem;
use std::path::Path;

/// Load items from a JSON file
///
/// # Errors
/// - `SiteError::CatalogRead` when the file cannot be read
/// - `SiteError::CatalogFormat` when it is not an item array
pub fn load_portfolio(path: impl AsRef<Path>) -> Result<Vec<PortfolioItem>, SiteError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SiteError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SiteError::CatalogFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Filter categories in order of first appearance
#[must_use]
pub fn categories(items: &[PortfolioItem]) -> Vec<&str> {
    items
        .iter()
        .flat_map(|item| item.categories.iter().map(String::as_str))
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn categories_keep_first_appearance() {
        let items = vec![
            PortfolioItem::new("A", "landing business"),
            PortfolioItem::new("B", "ecommerce landing"),
        ];
        assert_eq!(categories(&items), vec!["landing", "business", "ecommerce"]);
    }

    #[test]
    fn loads_json_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let items = vec![PortfolioItem::new("Hotel Morski", "multilingual")];
        write!(file, "{}", serde_json::to_string(&items).unwrap()).unwrap();

        assert_eq!(load_portfolio(file.path()).unwrap(), items);
    }

    #[test]
    fn malformed_catalog_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"title\": 1}}").unwrap();
        assert!(matches!(
            load_portfolio(file.path()),
            Err(SiteError::CatalogFormat { .. })
        ));
    }
}
