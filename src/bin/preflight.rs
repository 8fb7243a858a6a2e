use techgear_api::infra::{config::Config, telemetry};
use techgear_api::DatabaseService;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars (all optional):\n\
           DATABASE_URL, HOST, PORT\n\
         and checks that the database is reachable, has every expected table and no\n\
         trigger on products that writes its own join rows.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = Config::from_env()?;
    println!("> Preflight:");
    println!("  DATABASE_URL={}", config.database_url);
    println!("  listen address={}", config.bind_addr());

    let db = DatabaseService::connect(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", config.database_url, e))?;
    db.ping().await?;
    println!("  Database is reachable.");

    let missing = db.missing_tables().await?;
    let triggers = db.join_row_triggers().await?;
    db.close().await;
    if !missing.is_empty() {
        return Err(anyhow::anyhow!(
            "Database is missing tables: {}",
            missing.join(", ")
        ));
    }
    if !triggers.is_empty() {
        return Err(anyhow::anyhow!(
            "Triggers on products insert their own products_categories rows: {}. \
             Drop them; the API writes the join row itself.",
            triggers.join(", ")
        ));
    }

    println!("> Preflight OK.");
    Ok(())
}
