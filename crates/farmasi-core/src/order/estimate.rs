//! Live price estimate for the order form.

use crate::catalog::{find_product, Product};
use crate::ids::ProductId;
use crate::money::Money;
use crate::order::MAX_DISCOUNT_PERCENT;
use serde::Serialize;

/// Price breakdown for one product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimateBreakdown {
    /// Unit price at calculation time.
    pub unit_price: Money,
    pub quantity: u32,
    pub discount_percent: u32,
    /// `unit_price * quantity`.
    pub subtotal: Money,
    /// `subtotal * discount_percent / 100`, rounded half away from zero.
    pub discount: Money,
    /// `subtotal - discount`.
    pub total: Money,
}

impl EstimateBreakdown {
    /// Compute the breakdown for a unit price.
    ///
    /// Discounts above 100% are clamped to 100%.
    pub fn calculate(unit_price: Money, quantity: u32, discount_percent: u32) -> Self {
        let discount_percent = discount_percent.min(MAX_DISCOUNT_PERCENT);
        let subtotal = unit_price.times(quantity);
        let discount = subtotal.percentage(discount_percent);
        Self {
            unit_price,
            quantity,
            discount_percent,
            subtotal,
            discount,
            total: subtotal - discount,
        }
    }

    /// Breakdown for the selected product, resolved against `products`.
    pub fn for_selection(
        products: &[Product],
        selected: Option<ProductId>,
        quantity: u32,
        discount_percent: u32,
    ) -> Option<Self> {
        let product = find_product(products, selected?)?;
        Some(Self::calculate(product.price, quantity, discount_percent))
    }
}

/// Estimated total for the selected product.
///
/// Zero when nothing is selected or the id is not in `products`.
pub fn estimate(
    products: &[Product],
    selected: Option<ProductId>,
    quantity: u32,
    discount_percent: u32,
) -> Money {
    EstimateBreakdown::for_selection(products, selected, quantity, discount_percent)
        .map(|b| b.total)
        .unwrap_or_else(Money::zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: Money) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Obat {}", id),
            stock: 10,
            price,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_estimate_scenario() {
        let products = vec![product(1, Money::from_rupiah(10_000))];
        let total = estimate(&products, Some(ProductId::new(1)), 2, 10);
        assert_eq!(total, Money::from_rupiah(18_000));
    }

    #[test]
    fn test_estimate_zero_without_match() {
        let products = vec![product(1, Money::from_rupiah(10_000))];
        assert!(estimate(&products, Some(ProductId::new(9)), 2, 10).is_zero());
        assert!(estimate(&products, None, 2, 10).is_zero());
        assert!(estimate(&[], Some(ProductId::new(1)), 2, 10).is_zero());
    }

    #[test]
    fn test_estimate_matches_formula() {
        let products = vec![
            product(1, Money::from_rupiah(12_500)),
            product(2, Money::from_sen(333)),
        ];
        for id in [1, 2] {
            let price = find_product(&products, ProductId::new(id)).unwrap().price;
            for q in [0u32, 1, 3, 7] {
                for d in [0u32, 1, 33, 50, 99, 100] {
                    let subtotal = price.times(q);
                    let expected = subtotal - subtotal.percentage(d);
                    assert_eq!(estimate(&products, Some(ProductId::new(id)), q, d), expected);
                }
            }
        }
    }

    #[test]
    fn test_estimate_non_increasing_in_discount() {
        let products = vec![product(1, Money::from_sen(1_999))];
        let mut previous = estimate(&products, Some(ProductId::new(1)), 3, 0);
        for d in 1..=100 {
            let current = estimate(&products, Some(ProductId::new(1)), 3, d);
            assert!(current <= previous, "discount {} raised the estimate", d);
            previous = current;
        }
        assert!(previous.is_zero());
    }

    #[test]
    fn test_estimate_uses_current_price() {
        let mut products = vec![product(1, Money::from_rupiah(10_000))];
        let selected = Some(ProductId::new(1));
        assert_eq!(estimate(&products, selected, 1, 0), Money::from_rupiah(10_000));

        products[0].price = Money::from_rupiah(12_000);
        assert_eq!(estimate(&products, selected, 1, 0), Money::from_rupiah(12_000));
    }

    #[test]
    fn test_breakdown_rounds_discount() {
        // 3.33 * 1 = 3.33 Rp; 50% = 1.665 Rp -> 1.67 Rp
        let b = EstimateBreakdown::calculate(Money::from_sen(333), 1, 50);
        assert_eq!(b.discount.amount_sen(), 167);
        assert_eq!(b.total.amount_sen(), 166);
    }

    #[test]
    fn test_breakdown_clamps_discount() {
        let b = EstimateBreakdown::calculate(Money::from_rupiah(1_000), 1, 150);
        assert_eq!(b.discount_percent, 100);
        assert!(b.total.is_zero());
    }
}
