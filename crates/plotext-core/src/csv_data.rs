// File: crates/plotext-core/src/csv_data.rs
// Summary: Load TOHLCV records from exchange-style CSV exports.

use std::io::Read;
use std::path::Path;

use chrono::DateTime;
use thiserror::Error;
use tracing::{debug, warn};

use crate::tohlcv::Tohlcv;

#[derive(Debug, Error)]
pub enum CsvDataError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("no {0} column in CSV header")]
    MissingColumn(&'static str),
}

/// Load a CSV file with a header row. See [`read_tohlcv_csv`].
pub fn load_tohlcv_csv(path: impl AsRef<Path>) -> Result<Vec<Tohlcv>, CsvDataError> {
    let rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "loading tohlcv csv");
    read_records(rdr)
}

/// Read TOHLCV records from CSV text with a header row.
///
/// Columns are matched case-insensitively: time (`time`, `timestamp`,
/// `open_time`, `date`, `datetime`), `open`, `high`, `low`, `close` and
/// `volume` (or their first letters). Open/high/low/close are required;
/// without a time column the row index is used, without a volume column the
/// volume is 0. Rows whose prices do not parse are skipped.
pub fn read_tohlcv_csv<R: Read>(reader: R) -> Result<Vec<Tohlcv>, CsvDataError> {
    read_records(csv::ReaderBuilder::new().has_headers(true).from_reader(reader))
}

fn read_records<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Tohlcv>, CsvDataError> {
    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();

    let i_time = find_column(&headers, &["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = find_column(&headers, &["open", "o"]).ok_or(CsvDataError::MissingColumn("open"))?;
    let i_high = find_column(&headers, &["high", "h"]).ok_or(CsvDataError::MissingColumn("high"))?;
    let i_low = find_column(&headers, &["low", "l"]).ok_or(CsvDataError::MissingColumn("low"))?;
    let i_close = find_column(&headers, &["close", "c", "adj_close", "close_price"]).ok_or(CsvDataError::MissingColumn("close"))?;
    let i_volume = find_column(&headers, &["volume", "v", "vol"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());

        let (Some(o), Some(h), Some(l), Some(c)) = (num(i_open), num(i_high), num(i_low), num(i_close)) else {
            warn!(row, "skipping row with unparsable prices");
            continue;
        };
        let t = i_time
            .and_then(|i| rec.get(i))
            .and_then(parse_time)
            .unwrap_or(row as f64);
        let v = i_volume.and_then(num).unwrap_or(0.0);
        out.push(Tohlcv { t, o, h, l, c, v });
    }
    debug!(records = out.len(), "parsed tohlcv csv");
    Ok(out)
}

fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| names.contains(&h.as_str()))
}

/// Unix seconds from epoch seconds, epoch milliseconds, or RFC 3339.
fn parse_time(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> sec
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0);
        }
        return Some(n as f64);
    }
    if let Ok(x) = s.parse::<f64>() {
        return Some(x);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.timestamp() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_binance_like_export() {
        let text = "open_time,Open,High,Low,Close,Volume\n\
                    1700000000000,1.0,2.0,0.5,1.5,10\n\
                    1700000060000,1.5,2.5,1.0,2.0,12\n";
        let data = read_tohlcv_csv(text.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0], Tohlcv::new(1_700_000_000.0, 1.0, 2.0, 0.5, 1.5, 10.0));
        assert_eq!(data[1].t, 1_700_000_060.0);
    }

    #[test]
    fn falls_back_to_row_index_and_zero_volume() {
        let text = "o,h,l,c\n1,2,0,1\nx,2,0,1\n3,4,2,3\n";
        let data = read_tohlcv_csv(text.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].t, 0.0);
        assert_eq!(data[1].t, 2.0);
        assert_eq!(data[1].v, 0.0);
    }

    #[test]
    fn missing_close_is_an_error() {
        let err = read_tohlcv_csv("open,high,low\n1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CsvDataError::MissingColumn("close")));
    }

    #[test]
    fn parses_rfc3339() {
        assert_eq!(parse_time("2000-01-01T00:00:00Z"), Some(946_684_800.0));
    }
}
