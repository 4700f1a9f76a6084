//! Date validation example.
//!
//! Runs a handful of legacy `CCYYMMDD` values through the validator and
//! prints the diagnosis kind for each rejection.

use ledgerconv::prelude::*;
use ledgerconv_example::init_logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    let validator = CalendarValidator::new();
    let inputs = [
        Some("20240229"),
        Some("20230229"),
        Some("19000229"),
        Some("20000229"),
        Some("18991231"),
        Some("21001231"),
        Some("20241301"),
        Some("2024-1-1"),
        Some("        "),
        None,
    ];

    for input in inputs {
        match validator.validate(input, "POST-DATE") {
            Ok(date) => {
                let weekday = date.to_naive_date().map(|d| d.format("%A").to_string());
                info!("{input:?} -> {date} {}", weekday.unwrap_or_default());
            }
            Err(err) => info!("{input:?} -> {} ({err})", err.kind()),
        }
    }

    Ok(())
}
