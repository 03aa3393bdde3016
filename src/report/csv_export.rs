//! CSV serialization of the daily record sequence
//!
//! The download step serves this content back verbatim; nothing is
//! recomputed between rendering and download.

use std::io::Write;

use csv::Writer;

use crate::error::Result;
use crate::projection::DailyRecord;

/// Header row of the earnings CSV
pub const CSV_HEADER: [&str; 6] = [
    "Date",
    "Balance",
    "Daily Interest",
    "Reinvested Amount",
    "Drawdown Amount",
    "Personal Amount",
];

/// Default filename offered for the download
pub const DEFAULT_CSV_FILENAME: &str = "earnings_data.csv";

/// Write the record sequence as CSV, one row per counted day
pub fn write_records<W: Write>(records: &[DailyRecord], writer: W) -> Result<()> {
    let mut w = Writer::from_writer(writer);
    w.write_record(CSV_HEADER)?;

    for record in records {
        w.write_record(&[
            record.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", record.balance),
            format!("{:.2}", record.interest),
            format!("{:.2}", record.reinvested),
            format!("{:.2}", record.drawdown),
            format!("{:.2}", record.personal),
        ])?;
    }

    w.flush()?;
    Ok(())
}

/// Serialize the record sequence to an in-memory CSV string
pub fn records_to_csv_string(records: &[DailyRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_records(records, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_records() -> Vec<DailyRecord> {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        vec![
            DailyRecord {
                date,
                balance: 1010.0,
                interest: 10.0,
                reinvested: 10.0,
                drawdown: 0.0,
                personal: 0.0,
            },
            DailyRecord {
                date: date.succ_opt().unwrap(),
                balance: 1020.1,
                interest: 10.1,
                reinvested: 10.1,
                drawdown: 0.0,
                personal: 0.0,
            },
        ]
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = records_to_csv_string(&sample_records()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Date,Balance,Daily Interest,Reinvested Amount,Drawdown Amount,Personal Amount"
        );
        assert_eq!(lines.next().unwrap(), "2026-08-06,1010.00,10.00,10.00,0.00,0.00");
        assert_eq!(lines.next().unwrap(), "2026-08-07,1020.10,10.10,10.10,0.00,0.00");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_run_serializes_header_only() {
        let csv = records_to_csv_string(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
