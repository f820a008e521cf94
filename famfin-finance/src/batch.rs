//! Batch quick add: one quick input per line in, one CSV row per line out.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use famfin_core::TransactionType;
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::quick_add::{QuickAdd, QuickAddRequest};

/// A drafted line, or the error code for a line that didn't parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    /// 1-based line number in the input
    pub line: usize,
    pub amount: Option<f64>,
    pub note: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub transaction_date: Option<NaiveDate>,
    pub error: Option<String>,
}

/// Draft every non-blank line. Blank lines are skipped but still counted.
pub fn draft_lines(
    reader: impl BufRead,
    quick_add: &QuickAdd,
    today: NaiveDate,
) -> Result<Vec<BatchRow>> {
    let mut rows = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", i + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let row = match quick_add.draft(&QuickAddRequest::new(line), today) {
            Ok(d) => BatchRow {
                line: i + 1,
                amount: Some(d.amount),
                note: Some(d.note),
                kind: Some(d.kind),
                transaction_date: Some(d.transaction_date),
                error: None,
            },
            Err(e) => BatchRow {
                line: i + 1,
                amount: None,
                note: None,
                kind: None,
                transaction_date: None,
                error: Some(e.code().to_string()),
            },
        };
        rows.push(row);
    }

    Ok(rows)
}

/// Write rows as CSV with a header.
pub fn write_csv(rows: &[BatchRow], writer: impl Write) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row).context("writing csv row")?;
    }
    wtr.flush().context("flushing csv")?;
    Ok(())
}
