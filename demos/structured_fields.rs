//! Structured attributes example
//!
//! Shows per-entry attributes, persistent logger fields, scoped fields and
//! the process-wide default logger.
//!
//! Run with: cargo run --example structured_fields

use journal_logger::prelude::*;
use journal_logger::{global, info, notice};
use serde::Serialize;

#[derive(Serialize)]
struct Peer {
    host: &'static str,
    port: u16,
}

fn main() -> Result<()> {
    let logger = Logger::builder()
        .min_level(PriorityLevel::INFO)
        .field("service", "billing")
        .build();

    // <6>retrying {"retries":3,"service":"billing"}
    info!(logger, "retrying"; "retries" => 3)?;

    {
        let _request = logger.scoped_field("request_id", "7f3a");
        let peer = Peer {
            host: "db1",
            port: 5432,
        };
        notice!(logger, "connected"; "peer" => FieldValue::serialized(&peer))?;
    }

    let mut stats = LogContext::new();
    for (table, rows) in [("invoices", 1204_u64), ("refunds", 37)] {
        stats.add_field(table, rows);
    }
    logger.log_with_context(PriorityLevel::INFO, "tables synced", stats)?;

    // Non-finite floats cannot be encoded; nothing is written
    if let Err(e) = logger.log_with_context(
        PriorityLevel::WARNING,
        "ratio",
        LogContext::new().with_field("ratio", f64::NAN),
    ) {
        eprintln!("dropped line: {}", e);
    }

    global::set_min_level(PriorityLevel::NOTICE);
    global::notice("global logger ready")?;

    logger.flush()
}
