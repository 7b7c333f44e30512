//! Basic logger usage example
//!
//! Logs at every priority level to standard output. Run it under systemd
//! (or pipe it through `systemd-cat`) to see the journal pick up the levels.
//!
//! Run with: cargo run --example basic_usage
//! Human-readable tags: cargo run --example basic_usage -- --no-journal

use journal_logger::prelude::*;
use journal_logger::{emergency, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    let logger = Logger::builder()
        .min_level_from_env("BASIC_USAGE_LOG_LEVEL")?
        .build();

    if std::env::args().any(|arg| arg == "--no-journal") {
        logger.set_level_renderer(human_renderer());
    }

    // One line per level
    emergency!(logger, "disk at {}%", 97)?;
    logger.alert("replica lag exceeds budget")?;
    logger.critical("payment provider unreachable")?;
    logger.error("request failed")?;
    warning!(logger, "retry {} of {}", 3, 5)?;
    logger.notice("configuration reloaded")?;
    logger.info("service started")?;
    logger.debug("cache primed")?;

    // Raise the threshold: notice and below are dropped
    logger.set_min_level(PriorityLevel::WARNING);
    logger.info("not shown")?;
    logger.warning("still shown")?;

    logger.flush()
}

#[cfg(feature = "console")]
fn human_renderer() -> LevelRenderer {
    Arc::new(journal_logger::render_colored_name)
}

#[cfg(not(feature = "console"))]
fn human_renderer() -> LevelRenderer {
    Arc::new(render_bracketed_name)
}
