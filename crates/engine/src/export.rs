//! CSV and JSON exports of a user's data.

use std::io::{self, Write};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Transaction, UserProfile, category};

const CSV_HEADER: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

/// `expenses_2026-10-18.csv`
pub fn csv_file_name(today: NaiveDate) -> String {
    format!("expenses_{}.csv", today.format("%Y-%m-%d"))
}

/// `financeflow_data_2026-10-18.json`
pub fn json_file_name(today: NaiveDate) -> String {
    format!("financeflow_data_{}.json", today.format("%Y-%m-%d"))
}

/// Writes `txs` as CSV with every cell quoted.
///
/// Categories are written by display name; ids that do not resolve are
/// written raw.
pub fn write_csv<W: Write>(writer: W, txs: &[Transaction]) -> io::Result<()> {
    let mut out = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);
    out.write_record(CSV_HEADER)?;
    for tx in txs {
        let category_name = category(&tx.category)
            .map(|category| category.name)
            .unwrap_or(tx.category.as_str());
        out.write_record([
            tx.date.format("%Y-%m-%d").to_string().as_str(),
            tx.kind.as_str(),
            category_name,
            tx.description.as_str(),
            tx.amount.major_string().as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub user: Option<UserProfile>,
    pub expenses: Vec<Transaction>,
    pub export_date: DateTime<Utc>,
}

pub fn write_json<W: Write>(
    writer: W,
    user: Option<&UserProfile>,
    txs: &[Transaction],
    exported_at: DateTime<Utc>,
) -> io::Result<()> {
    let snapshot = Snapshot {
        user: user.cloned(),
        expenses: txs.to_vec(),
        export_date: exported_at,
    };
    serde_json::to_writer_pretty(writer, &snapshot)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::{MoneyCents, TransactionKind};

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction {
                id: Uuid::new_v4(),
                kind: TransactionKind::Expense,
                amount: MoneyCents::new(4_550),
                category: "food".to_string(),
                description: "Lunch, with \"friends\"".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            },
            Transaction {
                id: Uuid::new_v4(),
                kind: TransactionKind::Income,
                amount: MoneyCents::from_major(1_000),
                category: "gifts".to_string(),
                description: "Birthday".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 10, 4).unwrap(),
            },
        ]
    }

    #[test]
    fn csv_quotes_every_cell() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "\"Date\",\"Type\",\"Category\",\"Description\",\"Amount\""
        );
        assert_eq!(
            lines[1],
            "\"2026-10-03\",\"expense\",\"Food & Dining\",\"Lunch, with \"\"friends\"\"\",\"45.50\""
        );
        assert_eq!(
            lines[2],
            "\"2026-10-04\",\"income\",\"gifts\",\"Birthday\",\"1000\""
        );
    }

    #[test]
    fn json_snapshot_uses_export_date_key() {
        let mut buf = Vec::new();
        let at = DateTime::parse_from_rfc3339("2026-10-18T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        write_json(&mut buf, None, &sample(), at).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["user"].is_null());
        assert_eq!(value["expenses"].as_array().unwrap().len(), 2);
        assert_eq!(value["exportDate"], "2026-10-18T10:00:00Z");
    }

    #[test]
    fn file_names_carry_the_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(csv_file_name(today), "expenses_2026-10-18.csv");
        assert_eq!(json_file_name(today), "financeflow_data_2026-10-18.json");
    }
}
