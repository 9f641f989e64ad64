//! Line-Item Pricing Resolver
//!
//! Maps `(product, sale_type)` to a unit price and `(price, quantity)`
//! to a subtotal for every line of a sale or return, then sums the
//! grand total. Re-run in full on every edit; identical inputs always
//! produce identical output.

use rust_decimal::Decimal;

use crate::models::Product;
use crate::pricing::QuantityFormat;
use crate::types::SaleType;

/// One transient form row: a product selection and a raw quantity string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEntry {
    /// Product reference, unset until the user picks one
    pub product: Option<i64>,
    /// Raw quantity input, possibly empty or invalid
    pub quantity: String,
}

impl LineEntry {
    pub fn new(product: Option<i64>, quantity: impl Into<String>) -> Self {
        Self {
            product,
            quantity: quantity.into(),
        }
    }
}

/// A line augmented with its resolved price and subtotal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub product: Option<i64>,
    pub quantity: String,
    pub price: Decimal,
    pub subtotal: Decimal,
}

impl PricedLine {
    fn zero(entry: &LineEntry) -> Self {
        Self {
            product: entry.product,
            quantity: entry.quantity.clone(),
            price: Decimal::ZERO,
            subtotal: Decimal::ZERO,
        }
    }
}

/// All lines of a document, priced, with their grand total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLines {
    pub lines: Vec<PricedLine>,
    pub total: Decimal,
}

/// Resolve the unit price of a product for a sale type.
///
/// Wholesale applies only when the product offers a wholesale price
/// strictly greater than zero; absent, zero, or negative means "not
/// offered" and retail applies. Retail sales always use the retail
/// price. The same rule governs every flow, creation and edit alike.
pub fn unit_price(product: &Product, sale_type: SaleType) -> Decimal {
    match sale_type {
        SaleType::Mayorista => match product.wholesale_price {
            Some(wholesale) if wholesale > Decimal::ZERO => wholesale,
            _ => product.retail_price,
        },
        SaleType::Minorista => product.retail_price,
    }
}

/// Price a single line against the catalog.
///
/// A line with no product, an invalid quantity, or a product id not in
/// the catalog prices at zero; it never blocks the other lines.
pub fn resolve_line(
    catalog: &[Product],
    sale_type: SaleType,
    format: QuantityFormat,
    entry: &LineEntry,
) -> PricedLine {
    let Some(product_id) = entry.product else {
        return PricedLine::zero(entry);
    };
    let Some(quantity) = format.parse(&entry.quantity) else {
        return PricedLine::zero(entry);
    };
    let Some(product) = catalog.iter().find(|p| p.id == product_id) else {
        return PricedLine::zero(entry);
    };

    let price = unit_price(product, sale_type);
    PricedLine {
        product: entry.product,
        quantity: entry.quantity.clone(),
        price,
        subtotal: price * quantity,
    }
}

/// Price every line and sum the grand total.
pub fn resolve_lines(
    catalog: &[Product],
    sale_type: SaleType,
    format: QuantityFormat,
    entries: &[LineEntry],
) -> PricedLines {
    let lines: Vec<PricedLine> = entries
        .iter()
        .map(|entry| resolve_line(catalog, sale_type, format, entry))
        .collect();
    let total = lines.iter().map(|line| line.subtotal).sum();
    PricedLines { lines, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, retail: &str, wholesale: Option<&str>) -> Product {
        Product {
            id,
            name: format!("Producto {id}"),
            retail_price: retail.parse().unwrap(),
            wholesale_price: wholesale.map(|w| w.parse().unwrap()),
            weight_unit: None,
            category: None,
            brand: None,
            is_active: true,
        }
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_wholesale_price_applies_when_offered() {
        // {retail: 100, wholesale: 80}, mayorista, qty 3 -> 80 * 3 = 240
        let catalog = [product(1, "100", Some("80"))];
        let line = resolve_line(
            &catalog,
            SaleType::Mayorista,
            QuantityFormat::Sale,
            &LineEntry::new(Some(1), "3"),
        );
        assert_eq!(line.price, dec("80"));
        assert_eq!(line.subtotal, dec("240"));
    }

    #[test]
    fn test_retail_ignores_wholesale_price() {
        // Same product, minorista, qty 3 -> 100 * 3 = 300
        let catalog = [product(1, "100", Some("80"))];
        let line = resolve_line(
            &catalog,
            SaleType::Minorista,
            QuantityFormat::Sale,
            &LineEntry::new(Some(1), "3"),
        );
        assert_eq!(line.price, dec("100"));
        assert_eq!(line.subtotal, dec("300"));
    }

    #[test]
    fn test_zero_wholesale_falls_back_to_retail() {
        // {retail: 50, wholesale: 0}, mayorista, qty 2 -> 50 * 2 = 100
        let catalog = [product(1, "50", Some("0"))];
        let line = resolve_line(
            &catalog,
            SaleType::Mayorista,
            QuantityFormat::Sale,
            &LineEntry::new(Some(1), "2"),
        );
        assert_eq!(line.price, dec("50"));
        assert_eq!(line.subtotal, dec("100"));
    }

    #[test]
    fn test_absent_wholesale_falls_back_to_retail() {
        let catalog = [product(1, "50", None)];
        let line = resolve_line(
            &catalog,
            SaleType::Mayorista,
            QuantityFormat::Sale,
            &LineEntry::new(Some(1), "2"),
        );
        assert_eq!(line.price, dec("50"));
    }

    #[test]
    fn test_missing_product_prices_at_zero() {
        // product=null, qty="5" -> price 0, subtotal 0
        let catalog = [product(1, "100", None)];
        let line = resolve_line(
            &catalog,
            SaleType::Minorista,
            QuantityFormat::Sale,
            &LineEntry::new(None, "5"),
        );
        assert_eq!(line.price, Decimal::ZERO);
        assert_eq!(line.subtotal, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_quantity_prices_at_zero() {
        let catalog = [product(1, "100", None)];
        for quantity in ["", "abc", "0", "-3", "1.234"] {
            let line = resolve_line(
                &catalog,
                SaleType::Minorista,
                QuantityFormat::Sale,
                &LineEntry::new(Some(1), quantity),
            );
            assert_eq!(line.subtotal, Decimal::ZERO, "quantity {quantity:?}");
        }
    }

    #[test]
    fn test_unknown_product_prices_at_zero() {
        let catalog = [product(1, "100", None)];
        let line = resolve_line(
            &catalog,
            SaleType::Minorista,
            QuantityFormat::Sale,
            &LineEntry::new(Some(99), "2"),
        );
        assert_eq!(line.price, Decimal::ZERO);
        assert_eq!(line.subtotal, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_line_does_not_block_others() {
        // [{P1, 3}, {P2, "abc"}] -> total is P1's subtotal only
        let catalog = [product(1, "100", None), product(2, "40", None)];
        let entries = [
            LineEntry::new(Some(1), "3"),
            LineEntry::new(Some(2), "abc"),
        ];
        let priced = resolve_lines(
            &catalog,
            SaleType::Minorista,
            QuantityFormat::Sale,
            &entries,
        );
        assert_eq!(priced.lines[0].subtotal, dec("300"));
        assert_eq!(priced.lines[1].subtotal, Decimal::ZERO);
        assert_eq!(priced.total, dec("300"));
    }

    #[test]
    fn test_total_sums_all_subtotals() {
        let catalog = [product(1, "10.50", None), product(2, "3.25", Some("3"))];
        let entries = [
            LineEntry::new(Some(1), "2"),
            LineEntry::new(Some(2), "4.5"),
        ];
        let priced = resolve_lines(
            &catalog,
            SaleType::Mayorista,
            QuantityFormat::Sale,
            &entries,
        );
        // 10.50 * 2 + 3 * 4.5 = 21 + 13.5 = 34.5, exact
        assert_eq!(priced.total, dec("34.5"));
    }

    #[test]
    fn test_fractional_subtotal_is_exact() {
        // No rounding at this stage: 0.333 * 3 = 0.999, not 1.00
        let catalog = [product(1, "0.333", None)];
        let priced = resolve_lines(
            &catalog,
            SaleType::Minorista,
            QuantityFormat::Sale,
            &[LineEntry::new(Some(1), "3")],
        );
        assert_eq!(priced.total, dec("0.999"));
    }

    #[test]
    fn test_idempotent_recomputation() {
        let catalog = [product(1, "100", Some("80")), product(2, "50", Some("0"))];
        let entries = [
            LineEntry::new(Some(1), "3"),
            LineEntry::new(Some(2), "1.5"),
        ];
        let first = resolve_lines(
            &catalog,
            SaleType::Mayorista,
            QuantityFormat::Sale,
            &entries,
        );
        let second = resolve_lines(
            &catalog,
            SaleType::Mayorista,
            QuantityFormat::Sale,
            &entries,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_sale_type_switch_reprices_existing_lines() {
        // Filled line repriced on tier change with no reselection
        let catalog = [product(1, "100", Some("80"))];
        let entries = [LineEntry::new(Some(1), "3")];

        let retail = resolve_lines(
            &catalog,
            SaleType::Minorista,
            QuantityFormat::Sale,
            &entries,
        );
        assert_eq!(retail.total, dec("300"));

        let wholesale = resolve_lines(
            &catalog,
            SaleType::Mayorista,
            QuantityFormat::Sale,
            &entries,
        );
        assert_eq!(wholesale.lines[0].price, dec("80"));
        assert_eq!(wholesale.total, dec("240"));
    }

    #[test]
    fn test_return_format_allows_three_decimals() {
        let catalog = [product(1, "10", Some("8"))];
        let line = resolve_line(
            &catalog,
            SaleType::Mayorista,
            QuantityFormat::Return,
            &LineEntry::new(Some(1), "0.125"),
        );
        assert_eq!(line.price, dec("8"));
        assert_eq!(line.subtotal, dec("1"));
    }
}
