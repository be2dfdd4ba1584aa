use rust_decimal::Decimal;
use validator::Validate;

use crate::catalog::CatalogProvider;
use crate::orders::{OrderLineItem, PricePolicy, PricedLineItem, ValidationError};

/// Service for resolving line items against the catalog and totalling them
pub struct PriceCalculator;

impl PriceCalculator {
    /// Calculate subtotal for an order line
    ///
    /// # Returns
    /// `quantity * unit_price`, or `AmountOverflow` if the product leaves the Decimal range
    pub fn calculate_subtotal(quantity: u32, unit_price: Decimal) -> Result<Decimal, ValidationError> {
        unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or(ValidationError::AmountOverflow)
    }

    /// Calculate total price for an order
    ///
    /// # Returns
    /// Exact sum of all subtotals
    pub fn calculate_total(subtotals: &[Decimal]) -> Result<Decimal, ValidationError> {
        subtotals
            .iter()
            .try_fold(Decimal::ZERO, |acc, subtotal| acc.checked_add(*subtotal))
            .ok_or(ValidationError::AmountOverflow)
    }

    /// Resolve every line against the catalog
    ///
    /// # Validation
    /// - quantity is at least 1
    /// - the item exists and is available
    /// - under `RejectMismatch`, a supplied price must equal the catalog price
    ///
    /// Names and prices on the returned lines always come from the catalog.
    pub fn price_line_items(
        catalog: &CatalogProvider,
        items: &[OrderLineItem],
        policy: PricePolicy,
    ) -> Result<Vec<PricedLineItem>, ValidationError> {
        items
            .iter()
            .map(|item| Self::price_line_item(catalog, item, policy))
            .collect()
    }

    fn price_line_item(
        catalog: &CatalogProvider,
        item: &OrderLineItem,
        policy: PricePolicy,
    ) -> Result<PricedLineItem, ValidationError> {
        let invalid_quantity = || ValidationError::InvalidQuantity {
            item_id: item.id,
            quantity: item.quantity,
        };
        if item.validate().is_err() {
            return Err(invalid_quantity());
        }
        let quantity = u32::try_from(item.quantity).map_err(|_| invalid_quantity())?;

        let menu_item = catalog
            .find_by_id(item.id)
            .ok_or(ValidationError::UnknownItem(item.id))?;

        if !menu_item.available {
            return Err(ValidationError::ItemUnavailable(item.id));
        }

        if let Some(supplied) = item.price {
            if supplied != menu_item.price {
                match policy {
                    PricePolicy::RejectMismatch => {
                        return Err(ValidationError::PriceMismatch {
                            item_id: item.id,
                            expected: menu_item.price,
                            supplied,
                        });
                    }
                    PricePolicy::Catalog => {
                        tracing::warn!(
                            "Client price {} for item {} differs from catalog price {}; using catalog",
                            supplied,
                            item.id,
                            menu_item.price
                        );
                    }
                }
            }
        }

        let subtotal = Self::calculate_subtotal(quantity, menu_item.price)?;

        Ok(PricedLineItem {
            id: menu_item.id,
            name: menu_item.name.clone(),
            price: menu_item.price,
            quantity,
            subtotal,
        })
    }
}
