use ledger_core::{
    ledger::{Ledger, TransactionKind},
    services::{CategoryResolver, NewTransaction, ServiceError, TransactionService},
};
use uuid::Uuid;

fn request(title: &str, kind: TransactionKind, value: f64, category: &str) -> NewTransaction {
    NewTransaction {
        title: title.into(),
        kind,
        value,
        category_title: category.into(),
    }
}

fn funded_ledger(total: f64) -> Ledger {
    let mut ledger = Ledger::new("Funded");
    TransactionService::create(
        &mut ledger,
        request("Opening", TransactionKind::Income, total, "Seed"),
    )
    .expect("seed income");
    ledger
}

#[test]
fn balance_total_always_equals_income_minus_outcome() {
    let mut ledger = funded_ledger(1000.0);
    TransactionService::create(
        &mut ledger,
        request("Rent", TransactionKind::Outcome, 400.0, "Housing"),
    )
    .unwrap();
    TransactionService::create(
        &mut ledger,
        request("Bonus", TransactionKind::Income, 250.0, "Job"),
    )
    .unwrap();

    let balance = ledger.balance();
    assert_eq!(balance.total, balance.income - balance.outcome);
    assert_eq!(balance.income, 1250.0);
    assert_eq!(balance.outcome, 400.0);
}

#[test]
fn outcome_above_total_fails_and_changes_nothing() {
    let mut ledger = funded_ledger(100.0);
    let before = ledger.balance();

    let err = TransactionService::create(
        &mut ledger,
        request("Splurge", TransactionKind::Outcome, 100.01, "Fun"),
    )
    .expect_err("overdraft");
    assert!(matches!(err, ServiceError::InsufficientFunds { .. }));
    assert_eq!(ledger.balance(), before);
    assert_eq!(ledger.transaction_count(), 1);
    assert!(ledger.category_by_title("Fun").is_none());
}

#[test]
fn outcome_within_total_succeeds_and_reduces_it() {
    let mut ledger = funded_ledger(100.0);
    TransactionService::create(
        &mut ledger,
        request("Groceries", TransactionKind::Outcome, 40.0, "Food"),
    )
    .unwrap();
    assert_eq!(ledger.balance().total, 60.0);
}

#[test]
fn spending_down_to_exactly_zero_is_accepted() {
    let mut ledger = funded_ledger(100.0);
    TransactionService::create(
        &mut ledger,
        request("Everything", TransactionKind::Outcome, 100.0, "Misc"),
    )
    .expect("exact spend-down");
    assert_eq!(ledger.balance().total, 0.0);
}

#[test]
fn resolver_never_duplicates_titles() {
    let mut ledger = Ledger::new("Resolver");
    let titles: Vec<String> = ["Food", "Food", "Bus"]
        .iter()
        .map(|title| title.to_string())
        .collect();
    CategoryResolver::resolve(&mut ledger, &titles).unwrap();
    CategoryResolver::resolve(&mut ledger, &titles).unwrap();
    assert_eq!(ledger.categories.len(), 2);
}

#[test]
fn create_reuses_category_created_by_earlier_create() {
    let mut ledger = funded_ledger(100.0);
    let first = TransactionService::create(
        &mut ledger,
        request("Lunch", TransactionKind::Outcome, 10.0, "Food"),
    )
    .unwrap();
    let second = TransactionService::create(
        &mut ledger,
        request("Dinner", TransactionKind::Outcome, 20.0, "Food"),
    )
    .unwrap();
    assert_eq!(first.category_id, second.category_id);
    assert_eq!(
        ledger
            .categories
            .iter()
            .filter(|category| category.title == "Food")
            .count(),
        1
    );
}

#[test]
fn deleting_unknown_id_fails_without_mutation() {
    let mut ledger = funded_ledger(100.0);
    let before = ledger.balance();

    let err = TransactionService::remove(&mut ledger, Uuid::new_v4()).expect_err("unknown id");
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(ledger.balance(), before);
    assert_eq!(ledger.transaction_count(), 1);
}

#[test]
fn deleting_income_can_not_be_blocked_even_if_total_drops() {
    // Deletion has no funds guard; only writes that add outcome are checked.
    let mut ledger = funded_ledger(100.0);
    let seed = ledger.transactions[0].id;
    TransactionService::remove(&mut ledger, seed).unwrap();
    assert_eq!(ledger.balance().total, 0.0);
}
