use anyhow::{Context, Result};
use cartel::{
    CartEngine,
    config::Settings,
    events::quantity_change::QuantityEvent,
    handlers::cart_page::{CartPage, CheckoutGate},
    models::cart_snapshot::CartSnapshot,
    utils::display::TerminalDisplay,
};
use clap::Parser;
use std::fs;
use tracing::{error, info};

fn init_tracing() {
    tracing_subscriber::fmt::init();
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "Adds the rendered cart snapshot (JSON) file path.", required = true)]
    pub cart: String,

    #[arg(long, help = "(Optional) Adds the settings file path.", required = false)]
    pub config: Option<String>,

    #[arg(
        long = "event",
        help = "(Optional) Replays a quantity event: ID:+N, ID:-N, ID:=N or ID=TEXT.",
        required = false
    )]
    pub events: Vec<QuantityEvent>,

    #[arg(
        long,
        help = "(Optional) Sets flag to report whether checkout may proceed.",
        required = false
    )]
    pub checkout: bool,

    #[arg(
        long,
        help = "(Optional) Sets flag to print the final cart as JSON.",
        required = false
    )]
    pub json: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = Settings::load(&args.config)?;

    info!("Starting");

    let raw = fs::read_to_string(&args.cart)
        .with_context(|| format!("Failed to read cart snapshot {}", args.cart))?;
    let snapshot = CartSnapshot::from_json(&raw)
        .with_context(|| format!("Failed to parse cart snapshot {}", args.cart))?;

    let engine = CartEngine::from_snapshot(&snapshot);
    let mut page = CartPage::new(
        engine,
        TerminalDisplay,
        settings.display.item_count_suffix.clone(),
    );
    page.render();

    for event in &args.events {
        if let Err(e) = page.apply(event) {
            error!("Skipping event for {}: {e}", event.item_id());
        }
    }

    let summary = page.engine().summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for item in &summary.items {
            println!(
                "{:<20} {:>3} x {:>10} = {:>12} {}{}",
                item.id,
                item.quantity,
                item.unit_price,
                item.subtotal,
                item.currency,
                if item.pending { " *" } else { "" }
            );
        }
        println!(
            "total {} {} ({} {})",
            summary.grand_total,
            summary.currency,
            summary.item_count,
            settings.display.item_count_suffix
        );
    }

    if args.checkout {
        match page.checkout() {
            CheckoutGate::Proceed => println!("checkout: proceed"),
            CheckoutGate::ConfirmUnsaved { items } => {
                println!("checkout: {}", settings.display.checkout_prompt);
                for id in items {
                    println!("  unsaved: {id}");
                }
            }
        }
    }

    Ok(())
}
