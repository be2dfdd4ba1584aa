use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::MenuItem;

/// Reasons a catalog definition is refused at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Menu item id must be at least 1, got {0}")]
    InvalidId(i32),

    #[error("Duplicate menu item id: {0}")]
    DuplicateId(i32),

    #[error("Menu item {0} has an empty name")]
    EmptyName(i32),

    #[error("Menu item {0} has a negative price")]
    NegativePrice(i32),
}

/// Read-only provider of the restaurant's menu
///
/// The item list is fixed at construction. Clones share the same backing slice,
/// so every caller observes identical content and declaration order.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    items: Arc<[MenuItem]>,
}

impl CatalogProvider {
    /// Build a provider from an explicit item list
    ///
    /// # Validation
    /// - ids are unique and at least 1
    /// - names are non-empty
    /// - prices are non-negative
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            if item.id < 1 {
                return Err(CatalogError::InvalidId(item.id));
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(item.id));
            }
            if item.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(item.id));
            }
        }

        Ok(Self {
            items: items.into(),
        })
    }

    /// The Alimento house menu
    pub fn alimento_menu() -> Result<Self, CatalogError> {
        let items = vec![
            MenuItem::new(1, "CHORIZO JALAPENO", Decimal::from(200), "Pasta", true),
            MenuItem::new(2, "CLASSIC CARBONARA", Decimal::from(220), "Pasta", true),
            MenuItem::new(3, "THICK CUT BACON", Decimal::from(180), "Sandwich", true),
            MenuItem::new(4, "TEQUILA SUNRISE", Decimal::from(120), "Cocktail", true),
            MenuItem::new(5, "MOJITO", Decimal::from(120), "Cocktail", true),
            MenuItem::new(6, "NACHORIZO", Decimal::from(190), "Side", true),
        ];

        Self::new(items)
    }

    /// All menu items in declaration order
    pub fn list_menu_items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up a single menu item by id
    pub fn find_by_id(&self, id: i32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
