//! Claims Desk - console frontend
//!
//! Interactive form for recording insurance claims into the local store and
//! browsing them as a table.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin claims-desk
//! ```
//!
//! The store lives in `claims.db` in the working directory. Set `RUST_LOG`
//! to adjust log verbosity (default: info).
//!
//! Every user action maps to exactly one store call; validation and storage
//! failures are printed and control returns to the menu, so no error is
//! fatal to the process.

use std::io::{self, Write};

use chrono::Local;
use tracing_subscriber::EnvFilter;

use domain_claims::{NewClaim, SUGGESTED_VEHICLE_CLASSES};
use infra_store::ClaimStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = ClaimStore::default();
    store.initialize().await?;
    tracing::info!(path = %store.path().display(), "claim store ready");

    loop {
        println!();
        println!("1) Record a claim");
        println!("2) Show all claims");
        println!("3) Clear all claims");
        println!("4) Reset the store");
        println!("q) Quit");

        let Some(choice) = prompt("> ")? else { break };
        match choice.as_str() {
            "1" => record_claim(&store).await?,
            "2" => show_claims(&store).await,
            "3" => clear_claims(&store).await?,
            "4" => reset_store(&store).await?,
            "q" | "Q" => break,
            "" => {}
            other => println!("Unknown choice: {other}"),
        }
    }

    Ok(())
}

/// Prompts for the claim fields, validates, and stores the claim.
///
/// The date field defaults to today and the vehicle class to `Car`.
async fn record_claim(store: &ClaimStore) -> io::Result<()> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let Some(date) = prompt(&format!("Date YYYY-MM-DD [{today}]: "))? else {
        return Ok(());
    };
    let date = if date.is_empty() { today } else { date };

    let classes = SUGGESTED_VEHICLE_CLASSES.join(", ");
    let Some(vehicle_class) = prompt(&format!("Vehicle class ({classes}) [Car]: "))? else {
        return Ok(());
    };
    let vehicle_class = if vehicle_class.is_empty() {
        "Car".to_string()
    } else {
        vehicle_class
    };

    let Some(amount) = prompt("Claim amount: ")? else { return Ok(()) };
    let Some(description) = prompt("Description (optional): ")? else {
        return Ok(());
    };

    match NewClaim::validated(&date, &vehicle_class, &amount, &description) {
        Ok(claim) => match store.add_claim(&claim).await {
            Ok(id) => println!("Claim stored with id {id}."),
            Err(err) => println!("Storage error: {err}"),
        },
        Err(err) => println!("Invalid input: {err}"),
    }
    Ok(())
}

/// Renders every stored claim as a fixed-column table.
async fn show_claims(store: &ClaimStore) {
    match store.list_all().await {
        Ok(claims) if claims.is_empty() => println!("No claims recorded."),
        Ok(claims) => {
            println!(
                "{:<6} {:<12} {:<12} {:>14}  {}",
                "ID", "Date", "Class", "Amount", "Description"
            );
            for claim in &claims {
                println!(
                    "{:<6} {:<12} {:<12} {:>14}  {}",
                    claim.claim_id,
                    claim.date,
                    claim.vehicle_class,
                    claim.claim_amount.to_string(),
                    claim.description
                );
            }
        }
        Err(err) => println!("Storage error: {err}"),
    }
}

/// Deletes every claim after confirmation, keeping the schema.
async fn clear_claims(store: &ClaimStore) -> io::Result<()> {
    let Some(answer) = prompt("Delete every stored claim? [y/N]: ")? else {
        return Ok(());
    };
    if !answer.eq_ignore_ascii_case("y") {
        println!("Aborted.");
        return Ok(());
    }
    match store.clear_all().await {
        Ok(()) => println!("All claims deleted."),
        Err(err) => println!("Storage error: {err}"),
    }
    Ok(())
}

/// Drops and recreates the claims table after confirmation.
async fn reset_store(store: &ClaimStore) -> io::Result<()> {
    let Some(answer) = prompt("Reset the store? All data will be lost. [y/N]: ")? else {
        return Ok(());
    };
    if !answer.eq_ignore_ascii_case("y") {
        println!("Aborted.");
        return Ok(());
    }
    match store.reset().await {
        Ok(()) => println!("Store reset with a fresh schema."),
        Err(err) => println!("Storage error: {err}"),
    }
    Ok(())
}

/// Reads one trimmed line from stdin, `None` on end of input.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
