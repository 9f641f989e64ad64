//! Line-Item Pricing
//!
//! The one computation every sale/return screen repeats: resolve the
//! unit price of each line from `(product, sale_type)`, derive
//! subtotals, and sum a grand total. Pure over its inputs; malformed
//! lines degrade to zero-valued rows instead of erroring, so a
//! half-filled form still renders a sensible total.
//!
//! Uses rust_decimal so `subtotal = price × quantity` holds exactly;
//! rounding happens only at the display edge (`util::display_amount`).

mod form;
mod quantity;
mod resolver;

pub use form::*;
pub use quantity::*;
pub use resolver::*;
