use crate::sources::error::SourceError;
use crate::sources::http::download;
use crate::tabular::record::RawRecord;
use log::{debug, info, warn};
use reqwest::Client;

/// How many non-blank lines are searched for the header row.
const HEADER_SCAN_LINES: usize = 20;
const HEADER_TOKENS: [&str; 2] = ["date", "data"];

/// Downloads header-first CSV tables and turns them into [`RawRecord`]s.
#[derive(Debug, Clone)]
pub struct TabularFetcher {
    client: Client,
}

impl TabularFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and parses the body with [`parse_table`].
    ///
    /// Fails only on transport problems (network, timeout, non-2xx status). Anything
    /// wrong with the content itself shows up as fewer, or no, records.
    pub async fn fetch(&self, url: &str) -> Result<Vec<RawRecord>, SourceError> {
        info!("Downloading table from {}", url);
        let bytes = download(self.client.get(url), url).await?;
        let text = decode_lossy(&bytes);
        let records = parse_table(&text);
        info!("Parsed {} records from {} ({} bytes)", records.len(), url, bytes.len());
        Ok(records)
    }
}

/// Decodes UTF-8, silently dropping byte sequences that are not valid.
fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Parses header-first CSV text that may be preceded by metadata lines.
///
/// Blank lines are ignored. The first of the leading 20 lines that mentions "date" or
/// "data" (any case) is taken as the header row; when none does, the first line is.
/// Rows shorter than the header yield partial records and rows the CSV reader cannot
/// tokenize are skipped.
///
/// # Examples
///
/// ```
/// use hk_weather::parse_table;
///
/// let text = "Daily temperature, Hong Kong Observatory\n\nDate,Mean\n2024-08-01,29.1\n";
/// let records = parse_table(text);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].get("Mean"), Some("29.1"));
/// ```
pub fn parse_table(text: &str) -> Vec<RawRecord> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let header_idx = find_header_row(&lines);
    if header_idx > 0 {
        debug!("Skipping {} leading metadata lines", header_idx);
    }

    let joined = lines[header_idx..].join("\n");
    let effective = joined.strip_prefix('\u{feff}').unwrap_or(&joined);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(effective.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            warn!("Could not read table header row: {}", e);
            return Vec::new();
        }
    };

    reader
        .records()
        .filter_map(|row| match row {
            Ok(row) => Some(RawRecord::from_row(&headers, &row)),
            Err(e) => {
                debug!("Skipping unreadable row: {}", e);
                None
            }
        })
        .collect()
}

fn find_header_row(lines: &[&str]) -> usize {
    lines
        .iter()
        .take(HEADER_SCAN_LINES)
        .position(|line| {
            let lower = line.to_lowercase();
            HEADER_TOKENS.iter().any(|token| lower.contains(token))
        })
        .unwrap_or(0)
}
