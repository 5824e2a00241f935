use std::{env, error::Error, fs::File, path::PathBuf, process};

use ledger_core::{
    config::{Config, ConfigManager},
    init,
    ledger::{Ledger, TransactionKind},
    services::{ImportService, NewTransaction, TransactionService},
    storage::{json_backend, JsonStorage, StorageBackend},
};
use uuid::Uuid;

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let storage = JsonStorage::new_default()?;
    let config_manager = ConfigManager::new(storage.base_dir())?;
    let mut config = config_manager.load()?;

    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "new" => {
            let name = next_arg(&mut args, "new <name>");
            let ledger = Ledger::new(name.clone());
            storage.save(&ledger, &name)?;
            config.last_opened_ledger = Some(name.clone());
            config_manager.save(&config)?;
            println!("Created ledger {name}");
        }
        "balance" => {
            let name = resolve_ledger(args.next(), &config);
            let ledger = storage.load(&name)?;
            let balance = ledger.balance();
            println!("Income:  {:.2} {}", balance.income, config.currency);
            println!("Outcome: {:.2} {}", balance.outcome, config.currency);
            println!("Total:   {:.2} {}", balance.total, config.currency);
        }
        "list" => {
            let name = resolve_ledger(args.next(), &config);
            let ledger = storage.load(&name)?;
            for warning in json_backend::ledger_warnings(&ledger) {
                eprintln!("Warning: {warning}");
            }
            for transaction in TransactionService::list(&ledger) {
                let category = ledger
                    .category(transaction.category_id)
                    .map(|category| category.title.as_str())
                    .unwrap_or("?");
                println!(
                    "{}  {:<7}  {:>10.2}  {}  [{}]",
                    transaction.id, transaction.kind, transaction.value, transaction.title,
                    category
                );
            }
        }
        "add" => {
            let title = next_arg(&mut args, "add <title> <income|outcome> <value> <category>");
            let kind: TransactionKind = next_arg(&mut args, "add: missing type").parse()?;
            let value: f64 = next_arg(&mut args, "add: missing value").parse()?;
            let category_title = next_arg(&mut args, "add: missing category");
            let name = resolve_ledger(args.next(), &config);

            let mut ledger = storage.load(&name)?;
            let transaction = TransactionService::create(
                &mut ledger,
                NewTransaction {
                    title,
                    kind,
                    value,
                    category_title,
                },
            )?;
            storage.save(&ledger, &name)?;
            println!("Created transaction {}", transaction.id);
        }
        "delete" => {
            let id: Uuid = next_arg(&mut args, "delete <transaction-id>").parse()?;
            let name = resolve_ledger(args.next(), &config);

            let mut ledger = storage.load(&name)?;
            let removed = TransactionService::remove(&mut ledger, id)?;
            storage.save(&ledger, &name)?;
            println!("Deleted transaction {}", removed.id);
        }
        "import" => {
            let path = PathBuf::from(next_arg(&mut args, "import <csv-path>"));
            let name = resolve_ledger(args.next(), &config);

            let mut ledger = storage.load(&name)?;
            let file = File::open(&path)?;
            let created = ImportService::import(&mut ledger, file)?;
            storage.save(&ledger, &name)?;
            println!("Imported {} transactions from {}", created.len(), path.display());
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn next_arg(args: &mut impl Iterator<Item = String>, usage: &str) -> String {
    args.next().unwrap_or_else(|| {
        eprintln!("Usage: ledger_cli {usage}");
        process::exit(1);
    })
}

fn resolve_ledger(explicit: Option<String>, config: &Config) -> String {
    explicit
        .or_else(|| config.last_opened_ledger.clone())
        .unwrap_or_else(|| {
            eprintln!("No ledger selected. Run `ledger_cli new <name>` first.");
            process::exit(1);
        })
}

fn print_usage() {
    eprintln!("Usage: ledger_cli <command>");
    eprintln!("  new <name>                                   create an empty ledger");
    eprintln!("  balance [ledger]                             show income/outcome/total");
    eprintln!("  list [ledger]                                list transactions");
    eprintln!("  add <title> <income|outcome> <value> <category> [ledger]");
    eprintln!("  delete <transaction-id> [ledger]             remove one transaction");
    eprintln!("  import <csv-path> [ledger]                   bulk-import a CSV file");
}
