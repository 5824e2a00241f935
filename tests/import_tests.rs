use ledger_core::{
    ledger::{Category, Ledger, TransactionKind},
    services::{ImportService, NewTransaction, ServiceError, TransactionService},
};

const HEADER: &str = "title,type,value,category\n";

fn import(ledger: &mut Ledger, body: &str) -> Result<Vec<ledger_core::ledger::Transaction>, ServiceError> {
    let csv = format!("{HEADER}{body}");
    ImportService::import(ledger, csv.as_bytes())
}

#[test]
fn import_against_empty_ledger_commits_rows_and_categories() {
    let mut ledger = Ledger::new("Import");
    let created = import(
        &mut ledger,
        "Salary,income,5000,Job\nRent,outcome,1200,Housing\n",
    )
    .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(ledger.balance().total, 3800.0);
    assert_eq!(ledger.categories.len(), 2);
    assert_eq!(ledger.transaction_count(), 2);
}

#[test]
fn returned_rows_keep_source_order() {
    let mut ledger = Ledger::new("Import");
    let created = import(
        &mut ledger,
        "Salary,income,5000,Job\nRent,outcome,1200,Housing\nBus,outcome,4,Transport\n",
    )
    .unwrap();

    let titles: Vec<&str> = created.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Salary", "Rent", "Bus"]);
    assert_eq!(created[1].kind, TransactionKind::Outcome);
    assert_eq!(ledger.transactions[2].title, "Bus");
}

#[test]
fn in_batch_income_funds_in_batch_outcome() {
    // The funds check runs once on the aggregate delta, so an outcome larger
    // than the starting total passes when the same batch brings the income.
    let mut ledger = Ledger::new("Import");
    import(
        &mut ledger,
        "Salary,income,5000,Job\nRent,outcome,1200,Housing\n",
    )
    .expect("aggregate delta is positive");
}

#[test]
fn net_negative_batch_beyond_total_commits_nothing() {
    let mut ledger = Ledger::new("Import");
    TransactionService::create(
        &mut ledger,
        NewTransaction {
            title: "Opening".into(),
            kind: TransactionKind::Income,
            value: 100.0,
            category_title: "Seed".into(),
        },
    )
    .unwrap();

    let err = import(
        &mut ledger,
        "Bonus,income,50,Job\nRent,outcome,500,Housing\n",
    )
    .expect_err("net delta of -450 exceeds the 100 available");
    assert!(matches!(err, ServiceError::InsufficientFunds { .. }));

    assert_eq!(ledger.transaction_count(), 1);
    assert_eq!(ledger.balance().total, 100.0);
    assert!(ledger.category_by_title("Job").is_none());
    assert!(ledger.category_by_title("Housing").is_none());
}

#[test]
fn malformed_value_aborts_whole_import() {
    let mut ledger = Ledger::new("Import");
    let err = import(
        &mut ledger,
        "Salary,income,5000,Job\nRent,outcome,abc,Housing\n",
    )
    .expect_err("non-numeric value");
    assert!(matches!(err, ServiceError::Parse { line: 3, .. }), "got {err:?}");

    assert_eq!(ledger.transaction_count(), 0);
    assert!(ledger.categories.is_empty());
}

#[test]
fn missing_field_aborts_whole_import() {
    let mut ledger = Ledger::new("Import");
    let err = import(&mut ledger, "Salary,income,5000,Job\nRent,outcome,10\n")
        .expect_err("short row");
    assert!(matches!(err, ServiceError::Parse { .. }));
    assert_eq!(ledger.transaction_count(), 0);
}

#[test]
fn fields_are_trimmed_before_parsing() {
    let mut ledger = Ledger::new("Import");
    let created = import(&mut ledger, " Salary , income , 5000 , Job \n").unwrap();
    assert_eq!(created[0].title, "Salary");
    assert_eq!(created[0].value, 5000.0);
    assert_eq!(ledger.category_by_title("Job").unwrap().title, "Job");
}

#[test]
fn import_reuses_existing_categories() {
    let mut ledger = Ledger::new("Import");
    let existing = ledger.add_category(Category::new("Job"));

    let created = import(
        &mut ledger,
        "Salary,income,5000,Job\nBonus,income,500,Job\nRent,outcome,1200,Housing\n",
    )
    .unwrap();

    assert_eq!(ledger.categories.len(), 2);
    assert_eq!(created[0].category_id, existing);
    assert_eq!(created[1].category_id, existing);
}

#[test]
fn duplicate_titles_within_batch_create_one_category() {
    let mut ledger = Ledger::new("Import");
    import(
        &mut ledger,
        "Lunch,income,10,Food\nDinner,income,20,Food\nBus,income,4,Transport\n",
    )
    .unwrap();
    assert_eq!(ledger.categories.len(), 2);
}

#[test]
fn consecutive_imports_share_categories() {
    let mut ledger = Ledger::new("Import");
    import(&mut ledger, "Salary,income,5000,Job\n").unwrap();
    import(&mut ledger, "Bonus,income,500,Job\n").unwrap();
    assert_eq!(ledger.categories.len(), 1);
    assert_eq!(ledger.transaction_count(), 2);
}
