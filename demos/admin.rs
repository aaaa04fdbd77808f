//! Walks a client through its lifecycle against a throwaway sled database.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example admin
//! ```
use anyhow::Context;
use sermac_admin::{
    client::Client,
    config::Settings,
    error::ClientError,
    sale::Sale,
    service::ClientService,
    store::SledStore,
    telemetry::setup_tracing,
};
use std::sync::Arc;
use tempfile::tempdir;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    // settings are only read here, the configured database is never opened
    let mut settings = Settings::load("sermac.toml")?;
    setup_tracing(&settings.log_filter);

    let scratch = tempdir()?;
    let store = Arc::new(SledStore::open(scratch.path().join("demo.db"))?);

    let service = ClientService::new(store.clone());

    let client = Client::new("76.123.456-7")
        .set_name("Comercial Los Andes")
        .set_address("Av. Matta 1020, Santiago")
        .set_giro("Distribucion de carnes")
        .set_debt(1000.0);
    service.add(&client).context("Client failed on add: ")?;

    // a second add with the same RUT is refused
    if let Err(err) = service.add(&client) {
        error!(error = %err, "Expected duplicate rejection");
    }

    store.record_sale(
        &Sale::new(1001, &client.rut, 200.0)
            .set_product("P-10", "Pechuga de pollo")
            .set_trays(2)
            .set_net_kilos(21.5)
            .on_credit(),
    )?;
    store.record_sale(&Sale::new(1002, &client.rut, 150.0).on_credit())?;
    store.record_sale(&Sale::new(1003, &client.rut, 300.0))?;

    service.adjust_debt(&client.rut, 500.0)?;
    service.adjust_debt(&client.rut, -200.0)?;

    let summary = service.debt_summary(&client.rut)?;
    println!(
        "{}: stored {:.0} + credit {:.0} = total {:.0}",
        summary.rut, summary.stored, summary.credit, summary.total
    );

    match service.delete(&client.rut) {
        Err(ClientError::HasSales { rut, sales }) => {
            println!("{rut} keeps its record, {sales} sale(s) on file")
        }
        other => other?,
    }

    for client in service.list_all()? {
        println!("{:<14} {:<24} debt {:.0}", client.rut, client.name, client.debt);
    }

    let theme = settings.toggle_theme();
    info!(?theme, "Theme switched");
    let saved = scratch.path().join("sermac.toml");
    settings.save(&saved)?;
    info!(path = %saved.display(), "Settings written");
    store.flush()?;

    Ok(())
}
