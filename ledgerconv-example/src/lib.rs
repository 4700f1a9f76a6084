/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Shared helpers for the LedgerConv examples.

use ledgerconv::prelude::ShapeMap;

/// Schema of the demo account record, as a caller would load it from disk.
pub const ACCOUNT_SCHEMA: &str = r#"{
    "ACCT-BALANCE": { "kind": "packed_decimal", "precision": 11, "scale": 2 },
    "ACCT-RATE":    { "kind": "numeric", "precision": 7, "scale": 4 },
    "ACCT-LIMIT":   { "kind": "numeric", "precision": 9, "scale": 2, "signed": false },
    "ACCT-TERM":    { "kind": "numeric", "precision": 3, "scale": 0, "signed": false },
    "ACCT-NAME":    { "kind": "text", "length": 20 },
    "ACCT-OPENED":  { "kind": "date" }
}"#;

/// Initializes logging from `RUST_LOG`, defaulting to info.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Parses the demo account schema.
///
/// # Errors
/// Returns an error if the schema JSON is invalid.
pub fn account_schema() -> anyhow::Result<ShapeMap> {
    Ok(serde_json::from_str(ACCOUNT_SCHEMA)?)
}

/// Formats bytes as space-separated hex pairs.
#[must_use]
pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
