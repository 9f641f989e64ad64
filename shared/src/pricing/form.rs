//! Sale and return form sessions
//!
//! Form-local line state: rows are added, edited, and removed while the
//! user works, priced on every change through the resolver, and turned
//! into a creation payload only once submit-time validation passes.
//! Nothing here persists; the whole session is discarded on submit or
//! navigation.

use thiserror::Error;

use crate::models::{Product, ReturnCreate, ReturnDetailCreate, SaleCreate, SaleDetailCreate};
use crate::pricing::{LineEntry, PricedLines, QuantityFormat, resolve_lines};
use crate::types::{PaymentMethod, SaleType};

/// Submit-time validation failure (line numbers are 1-based, as shown
/// to the user)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Por favor, selecciona un cliente.")]
    MissingCustomer,
    #[error("Por favor, completa todos los campos requeridos en el detalle {0}.")]
    IncompleteLine(usize),
    #[error("La cantidad en el detalle {0} debe ser un número positivo.")]
    InvalidQuantity(usize),
}

/// The editable line rows of a document form
///
/// Always holds at least one row, matching the screens: the last row
/// cannot be deleted, only cleared.
#[derive(Debug, Clone)]
pub struct LineSet {
    format: QuantityFormat,
    lines: Vec<LineEntry>,
}

impl LineSet {
    pub fn new(format: QuantityFormat) -> Self {
        Self {
            format,
            lines: vec![LineEntry::default()],
        }
    }

    /// Replace all rows (used when loading a document for editing)
    pub fn load(&mut self, lines: Vec<LineEntry>) {
        self.lines = if lines.is_empty() {
            vec![LineEntry::default()]
        } else {
            lines
        };
    }

    pub fn lines(&self) -> &[LineEntry] {
        &self.lines
    }

    pub fn format(&self) -> QuantityFormat {
        self.format
    }

    pub fn add_line(&mut self) {
        self.lines.push(LineEntry::default());
    }

    /// Remove a row; out-of-range indexes are ignored, and removing the
    /// last remaining row clears it instead.
    pub fn remove_line(&mut self, index: usize) {
        if index >= self.lines.len() {
            return;
        }
        if self.lines.len() == 1 {
            self.lines[0] = LineEntry::default();
        } else {
            self.lines.remove(index);
        }
    }

    pub fn set_product(&mut self, index: usize, product: Option<i64>) {
        if let Some(line) = self.lines.get_mut(index) {
            line.product = product;
        }
    }

    pub fn set_quantity(&mut self, index: usize, quantity: impl Into<String>) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity.into();
        }
    }

    /// Reset to a single empty row
    pub fn clear(&mut self) {
        self.lines = vec![LineEntry::default()];
    }

    /// Price all rows against the catalog
    pub fn priced(&self, catalog: &[Product], sale_type: SaleType) -> PricedLines {
        resolve_lines(catalog, sale_type, self.format, &self.lines)
    }

    /// Check every row has a product and a valid quantity; yields the
    /// parsed detail payloads on success.
    fn validated_details(&self) -> Result<Vec<(i64, rust_decimal::Decimal)>, FormError> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let number = i + 1;
                let product = line.product.ok_or(FormError::IncompleteLine(number))?;
                if line.quantity.is_empty() {
                    return Err(FormError::IncompleteLine(number));
                }
                let quantity = self
                    .format
                    .parse(&line.quantity)
                    .ok_or(FormError::InvalidQuantity(number))?;
                Ok((product, quantity))
            })
            .collect()
    }
}

/// Sale creation/edit session
#[derive(Debug, Clone)]
pub struct SaleForm {
    customer: Option<i64>,
    sale_type: SaleType,
    payment_method: Option<PaymentMethod>,
    date: Option<String>,
    needs_delivery: bool,
    lines: LineSet,
}

impl Default for SaleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SaleForm {
    pub fn new() -> Self {
        Self {
            customer: None,
            sale_type: SaleType::Minorista,
            payment_method: Some(PaymentMethod::Efectivo),
            date: None,
            needs_delivery: false,
            lines: LineSet::new(QuantityFormat::Sale),
        }
    }

    pub fn customer(&self) -> Option<i64> {
        self.customer
    }

    pub fn sale_type(&self) -> SaleType {
        self.sale_type
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut LineSet {
        &mut self.lines
    }

    /// Selecting a customer keeps the lines; clearing the selection
    /// resets them, since prices may no longer make sense.
    pub fn set_customer(&mut self, customer: Option<i64>) {
        if customer.is_none() && self.customer.is_some() {
            tracing::debug!("customer cleared, resetting sale lines");
            self.lines.clear();
        }
        self.customer = customer;
    }

    /// Switching the tier leaves the rows untouched; the next
    /// [`SaleForm::priced`] call reprices every line under the new type.
    pub fn set_sale_type(&mut self, sale_type: SaleType) {
        self.sale_type = sale_type;
    }

    pub fn set_payment_method(&mut self, payment_method: Option<PaymentMethod>) {
        self.payment_method = payment_method;
    }

    pub fn set_date(&mut self, date: Option<String>) {
        self.date = date;
    }

    pub fn set_needs_delivery(&mut self, needs_delivery: bool) {
        self.needs_delivery = needs_delivery;
    }

    /// Current prices and grand total for display
    pub fn priced(&self, catalog: &[Product]) -> PricedLines {
        self.lines.priced(catalog, self.sale_type)
    }

    /// Submit-time validation; on success the API payload is ready to
    /// post. Prices are not included: the server re-resolves them from
    /// the same rule.
    pub fn validate(&self) -> Result<SaleCreate, FormError> {
        let customer = self.customer.ok_or(FormError::MissingCustomer)?;
        let details = self.lines.validated_details()?;

        Ok(SaleCreate {
            customer,
            sale_type: self.sale_type,
            needs_delivery: self.needs_delivery,
            sale_details: details
                .into_iter()
                .map(|(product, quantity)| SaleDetailCreate { product, quantity })
                .collect(),
            date: self.date.clone(),
            payment_method: self.payment_method,
        })
    }
}

/// Return creation/edit session
///
/// Returns have no tier selector; lines price wholesale-first with the
/// retail fallback, i.e. the wholesale rule of the resolver.
#[derive(Debug, Clone)]
pub struct ReturnForm {
    customer: Option<i64>,
    date: Option<String>,
    lines: LineSet,
}

impl Default for ReturnForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReturnForm {
    pub fn new() -> Self {
        Self {
            customer: None,
            date: None,
            lines: LineSet::new(QuantityFormat::Return),
        }
    }

    pub fn customer(&self) -> Option<i64> {
        self.customer
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut LineSet {
        &mut self.lines
    }

    pub fn set_customer(&mut self, customer: Option<i64>) {
        if customer.is_none() && self.customer.is_some() {
            tracing::debug!("customer cleared, resetting return lines");
            self.lines.clear();
        }
        self.customer = customer;
    }

    pub fn set_date(&mut self, date: Option<String>) {
        self.date = date;
    }

    pub fn priced(&self, catalog: &[Product]) -> PricedLines {
        self.lines.priced(catalog, SaleType::Mayorista)
    }

    pub fn validate(&self) -> Result<ReturnCreate, FormError> {
        let customer = self.customer.ok_or(FormError::MissingCustomer)?;
        let details = self.lines.validated_details()?;

        Ok(ReturnCreate {
            customer,
            date: self.date.clone(),
            return_details: details
                .into_iter()
                .map(|(product, quantity)| ReturnDetailCreate { product, quantity })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Pan francés".into(),
                retail_price: "100".parse().unwrap(),
                wholesale_price: Some("80".parse().unwrap()),
                weight_unit: Some("kg".into()),
                category: None,
                brand: None,
                is_active: true,
            },
            Product {
                id: 2,
                name: "Facturas".into(),
                retail_price: "50".parse().unwrap(),
                wholesale_price: Some("0".parse().unwrap()),
                weight_unit: None,
                category: None,
                brand: None,
                is_active: true,
            },
        ]
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_new_form_has_one_empty_line() {
        let form = SaleForm::new();
        assert_eq!(form.lines().lines().len(), 1);
        assert_eq!(form.priced(&catalog()).total, Decimal::ZERO);
    }

    #[test]
    fn test_edit_and_price_lines() {
        let mut form = SaleForm::new();
        form.set_customer(Some(7));
        form.lines_mut().set_product(0, Some(1));
        form.lines_mut().set_quantity(0, "3");
        form.lines_mut().add_line();
        form.lines_mut().set_product(1, Some(2));
        form.lines_mut().set_quantity(1, "2");

        let priced = form.priced(&catalog());
        assert_eq!(priced.lines[0].subtotal, dec("300"));
        assert_eq!(priced.lines[1].subtotal, dec("100"));
        assert_eq!(priced.total, dec("400"));
    }

    #[test]
    fn test_sale_type_switch_reprices_without_reselection() {
        let mut form = SaleForm::new();
        form.set_customer(Some(7));
        form.lines_mut().set_product(0, Some(1));
        form.lines_mut().set_quantity(0, "3");
        assert_eq!(form.priced(&catalog()).total, dec("300"));

        form.set_sale_type(SaleType::Mayorista);
        let priced = form.priced(&catalog());
        assert_eq!(priced.lines[0].price, dec("80"));
        assert_eq!(priced.total, dec("240"));
    }

    #[test]
    fn test_clearing_customer_resets_lines() {
        let mut form = SaleForm::new();
        form.set_customer(Some(7));
        form.lines_mut().set_product(0, Some(1));
        form.lines_mut().set_quantity(0, "3");

        form.set_customer(None);
        assert_eq!(form.lines().lines(), &[LineEntry::default()]);
    }

    #[test]
    fn test_remove_last_line_clears_instead() {
        let mut form = SaleForm::new();
        form.lines_mut().set_product(0, Some(1));
        form.lines_mut().remove_line(0);
        assert_eq!(form.lines().lines().len(), 1);
        assert_eq!(form.lines().lines()[0], LineEntry::default());
    }

    #[test]
    fn test_validate_requires_customer() {
        let mut form = SaleForm::new();
        form.lines_mut().set_product(0, Some(1));
        form.lines_mut().set_quantity(0, "3");
        assert_eq!(form.validate().unwrap_err(), FormError::MissingCustomer);
    }

    #[test]
    fn test_validate_reports_first_bad_line_one_based() {
        let mut form = SaleForm::new();
        form.set_customer(Some(7));
        form.lines_mut().set_product(0, Some(1));
        form.lines_mut().set_quantity(0, "3");
        form.lines_mut().add_line();
        form.lines_mut().set_product(1, Some(2));
        form.lines_mut().set_quantity(1, "abc");

        assert_eq!(form.validate().unwrap_err(), FormError::InvalidQuantity(2));
    }

    #[test]
    fn test_validate_builds_payload_with_parsed_quantities() {
        let mut form = SaleForm::new();
        form.set_customer(Some(7));
        form.set_sale_type(SaleType::Mayorista);
        form.set_needs_delivery(true);
        form.lines_mut().set_product(0, Some(1));
        form.lines_mut().set_quantity(0, "2.5");

        let payload = form.validate().unwrap();
        assert_eq!(payload.customer, 7);
        assert_eq!(payload.sale_type, SaleType::Mayorista);
        assert!(payload.needs_delivery);
        assert_eq!(payload.sale_details.len(), 1);
        assert_eq!(payload.sale_details[0].quantity, dec("2.5"));
        assert_eq!(payload.payment_method, Some(PaymentMethod::Efectivo));
    }

    #[test]
    fn test_return_form_prices_wholesale_first() {
        let mut form = ReturnForm::new();
        form.set_customer(Some(3));
        form.lines_mut().set_product(0, Some(1));
        form.lines_mut().set_quantity(0, "0.125");
        form.lines_mut().add_line();
        form.lines_mut().set_product(1, Some(2));
        form.lines_mut().set_quantity(1, "2");

        let priced = form.priced(&catalog());
        // Product 1 offers wholesale 80; product 2's zero wholesale
        // falls back to retail 50.
        assert_eq!(priced.lines[0].subtotal, dec("10"));
        assert_eq!(priced.lines[1].subtotal, dec("100"));
        assert_eq!(priced.total, dec("110"));
    }

    #[test]
    fn test_return_form_loads_existing_document() {
        let mut form = ReturnForm::new();
        form.set_customer(Some(3));
        form.lines_mut().load(vec![
            LineEntry::new(Some(1), "1.5"),
            LineEntry::new(Some(2), "4"),
        ]);

        let payload = form.validate().unwrap();
        assert_eq!(payload.return_details.len(), 2);
        assert_eq!(payload.return_details[1].quantity, dec("4"));
    }
}
