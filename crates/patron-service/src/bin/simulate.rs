//! # Purchase Simulator
//!
//! Seeds an in-memory store with customers and replays deterministic
//! purchases through the full service stack for development.
//!
//! ## Usage
//! ```bash
//! # 8 customers, 240 purchases (default)
//! cargo run -p patron-service --bin simulate
//!
//! # Custom sizes
//! cargo run -p patron-service --bin simulate -- --customers 12 --purchases 1000
//! ```
//!
//! Purchase amounts are derived from an integer seed, so two runs with the
//! same arguments produce the same tier progressions.

use std::env;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use patron_core::{LoyaltyEngine, Money, Tier};
use patron_service::LoyaltyService;
use patron_store::MemoryStore;

/// Customer names for seed data.
const NAMES: &[&str] = &[
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Katherine Johnson",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Donald Knuth",
    "Margaret Hamilton",
    "Tony Hoare",
    "Frances Allen",
    "John Backus",
    "Radia Perlman",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut customers: usize = 8;
    let mut purchases: usize = 240;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--customers" | "-c" => {
                if i + 1 < args.len() {
                    customers = args[i + 1].parse().unwrap_or(8);
                    i += 1;
                }
            }
            "--purchases" | "-p" => {
                if i + 1 < args.len() {
                    purchases = args[i + 1].parse().unwrap_or(240);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Patron Purchase Simulator");
                println!();
                println!("Usage: simulate [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --customers <N>   Number of customers to enroll (default: 8)");
                println!("  -p, --purchases <N>   Number of purchases to replay (default: 240)");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    customers = customers.clamp(1, NAMES.len());

    println!("🏷  Patron Purchase Simulator");
    println!("============================");
    println!("Customers: {}", customers);
    println!("Purchases: {}", purchases);
    println!();

    let store = Arc::new(MemoryStore::new());
    let service = LoyaltyService::new(LoyaltyEngine::default(), store);

    // Enroll customers
    let mut ids = Vec::with_capacity(customers);
    for name in NAMES.iter().take(customers) {
        let account = service.enroll(name).await?;
        ids.push(account.id);
    }
    println!("✓ Enrolled {} customers", ids.len());

    // Replay purchases
    println!();
    println!("Replaying purchases...");

    let mut promotions = 0;
    let start = std::time::Instant::now();

    for seed in 0..purchases {
        let customer_id = &ids[seed % ids.len()];

        let amount = generate_amount(seed);
        let receipt = service.record_purchase(customer_id, amount).await?;

        if receipt.tier_changed {
            promotions += 1;
            println!(
                "  ★ {} promoted to {} at {} points",
                short_id(customer_id),
                receipt.tier,
                receipt.points_balance
            );
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Replayed {} purchases in {:?}", purchases, elapsed);
    println!("  Promotions: {}", promotions);

    // Final standings
    println!();
    println!("Final standings:");
    for account in service.accounts(customers).await? {
        let marker = match account.tier {
            Tier::Platinum => "◆",
            Tier::Gold => "▲",
            Tier::Silver => "●",
            Tier::Bronze => "·",
        };
        println!(
            "  {} {:<20} {:>8} pts  {}",
            marker, account.name, account.points_balance, account.tier
        );
    }

    println!();
    println!("✓ Simulation complete!");

    Ok(())
}

/// Generates a deterministic purchase amount from an integer seed:
/// $5.00 to $500.00 in uneven steps.
fn generate_amount(seed: usize) -> Money {
    let cents = 500 + ((seed as i64 * 7_919) % 49_500);
    Money::from_cents(cents)
}

/// First UUID segment, for compact log lines.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
