//! Bulk CSV import: parse, one aggregate funds check, then batch persist.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::ledger::{Ledger, Transaction, TransactionKind};

use super::{funds, CategoryResolver, ServiceError, ServiceResult};

/// Ingests a whole tabular source as a single unit of work.
pub struct ImportService;

/// Everything the parse phase hands to the later phases. Threading this value
/// forward keeps each phase a pure function of its predecessor's output.
#[derive(Debug)]
struct ParsedBatch {
    rows: Vec<ParsedRow>,
    /// Raw titles in row order, duplicates included; the resolver deduplicates.
    category_titles: Vec<String>,
    /// Net effect of the batch on the total: sum(income) - sum(outcome).
    net_delta: f64,
}

#[derive(Debug)]
struct ParsedRow {
    title: String,
    kind: TransactionKind,
    value: f64,
    category_title: String,
}

impl ImportService {
    /// Imports every row of `source` or nothing at all.
    ///
    /// The source must carry a header row followed by `title,type,value,category`
    /// rows. Three phases run strictly in order: parse (side-effect free,
    /// fail-fast on the first malformed row), one funds check against the
    /// aggregate net delta, then category resolution and batch persist. Returns
    /// the created transactions in row order.
    ///
    /// The funds check and the persist are not atomic as a pair across separate
    /// ledger handles; callers serialize conflicting imports themselves.
    pub fn import<R: Read>(ledger: &mut Ledger, source: R) -> ServiceResult<Vec<Transaction>> {
        let batch = Self::parse(source)?;

        if batch.net_delta < 0.0 {
            funds::ensure_sufficient_funds(ledger.balance().total, -batch.net_delta)?;
        }

        let resolved = CategoryResolver::resolve(ledger, &batch.category_titles)?;

        let mut created = Vec::with_capacity(batch.rows.len());
        for row in batch.rows {
            let category_id = resolved[&row.category_title].id;
            let transaction = Transaction::new(row.title, row.kind, row.value, category_id);
            created.push(transaction.clone());
            ledger.add_transaction(transaction);
        }

        tracing::info!(
            imported = created.len(),
            net_delta = batch.net_delta,
            "Import committed."
        );
        Ok(created)
    }

    /// Parse phase: streams the source, trims fields, coerces values, and
    /// accumulates the running net delta. The first malformed row aborts the
    /// whole import rather than leaving an undetected gap in the ledger.
    fn parse<R: Read>(source: R) -> ServiceResult<ParsedBatch> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(source);

        let mut rows = Vec::new();
        let mut category_titles = Vec::new();
        let mut net_delta = 0.0;

        for result in reader.records() {
            let record = result.map_err(|err| ServiceError::Parse {
                line: err.position().map_or(0, |position| position.line()),
                message: err.to_string(),
            })?;
            let line = record.position().map_or(0, |position| position.line());
            let row = Self::parse_row(&record, line)?;

            net_delta += match row.kind {
                TransactionKind::Income => row.value,
                TransactionKind::Outcome => -row.value,
            };
            category_titles.push(row.category_title.clone());
            rows.push(row);
        }

        Ok(ParsedBatch {
            rows,
            category_titles,
            net_delta,
        })
    }

    fn parse_row(record: &StringRecord, line: u64) -> ServiceResult<ParsedRow> {
        let field = |index: usize, name: &str| match record.get(index) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ServiceError::Parse {
                line,
                message: format!("missing {name} field"),
            }),
        };

        let title = field(0, "title")?.to_string();
        let kind = field(1, "type")?
            .parse::<TransactionKind>()
            .map_err(|message| ServiceError::Parse { line, message })?;
        let raw_value = field(2, "value")?;
        let value = raw_value.parse::<f64>().map_err(|_| ServiceError::Parse {
            line,
            message: format!("non-numeric value: {raw_value:?}"),
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(ServiceError::Parse {
                line,
                message: format!("negative value: {raw_value:?}"),
            });
        }
        let category_title = field(3, "category")?.to_string();

        Ok(ParsedRow {
            title,
            kind,
            value,
            category_title,
        })
    }
}
