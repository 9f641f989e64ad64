//! Sale form walkthrough against a running PanaSystem API.
//!
//! Usage:
//!   PANA_API_URL=http://localhost:8000/api \
//!   PANA_USER=admin PANA_PASS=secret \
//!   cargo run --example sale_form

use chrono::Local;
use pana_client::api::{products, sales};
use pana_client::{AuthContext, ClientConfig};
use shared::pricing::SaleForm;
use shared::types::SaleType;
use shared::util::{display_amount, format_date_iso};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let base_url =
        std::env::var("PANA_API_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    let username = std::env::var("PANA_USER").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("PANA_PASS").unwrap_or_default();

    let mut auth = AuthContext::new(ClientConfig::new(base_url));
    let user = auth.login(&username, &password).await?;
    println!("logged in as {} ({})", user.username, user.role.as_str());

    let client = auth.client()?;
    let catalog = products::catalog(&client).await?;
    println!("catalog: {} products", catalog.len());

    let Some(first) = catalog.first() else {
        anyhow::bail!("empty catalog, nothing to sell");
    };

    // Fill a wholesale sale with one line and preview the total
    let mut form = SaleForm::new();
    form.set_customer(Some(1));
    form.set_sale_type(SaleType::Mayorista);
    form.lines_mut().set_product(0, Some(first.id));
    form.lines_mut().set_quantity(0, "3");

    form.set_date(Some(format_date_iso(Local::now())));

    let priced = form.priced(&catalog);
    println!(
        "{} x3 -> unit {} subtotal {} total {}",
        first.name,
        display_amount(priced.lines[0].price),
        display_amount(priced.lines[0].subtotal),
        display_amount(priced.total),
    );

    let payload = form.validate()?;
    let sale = sales::create(&client, &payload).await?;
    println!("created sale #{} total {}", sale.id, display_amount(sale.total));

    auth.logout().await?;
    Ok(())
}
