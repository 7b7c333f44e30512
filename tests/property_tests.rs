//! Property-based tests for journal_logger using proptest

mod common;

use common::{parse_line, SharedBuffer};
use journal_logger::prelude::*;
use proptest::prelude::*;

fn named_level() -> impl Strategy<Value = PriorityLevel> {
    (0usize..8).prop_map(|i| PriorityLevel::ALL[i])
}

// ============================================================================
// Priority Mapping Tests
// ============================================================================

proptest! {
    /// Every named level survives the trip through the severity scale
    #[test]
    fn test_named_level_round_trip(level in named_level()) {
        prop_assert_eq!(PriorityLevel::from_severity(level.to_severity()), level);
    }

    /// The mapping is total and invertible over the whole integer range
    #[test]
    fn test_raw_round_trip(raw in any::<i32>()) {
        let level = PriorityLevel::from_raw(raw);
        prop_assert_eq!(PriorityLevel::from_severity(level.to_severity()), level);

        let severity = Severity::new(raw);
        prop_assert_eq!(PriorityLevel::from_severity(severity).to_severity(), severity);
    }

    /// Ordering flips between the two scales
    #[test]
    fn test_ordering_is_reversed(a in -1000i32..1000, b in -1000i32..1000) {
        let (pa, pb) = (PriorityLevel::from_raw(a), PriorityLevel::from_raw(b));
        prop_assert_eq!(pa < pb, pa.to_severity() > pb.to_severity());
    }

    /// The default prefix is `<` + decimal + `>`
    #[test]
    fn test_prefix_shape(raw in any::<i32>()) {
        prop_assert_eq!(render_prefix(PriorityLevel::from_raw(raw)), format!("<{}>", raw));
    }

    /// Display and FromStr agree for named levels
    #[test]
    fn test_display_parse_round_trip(level in named_level()) {
        let parsed: PriorityLevel = level.to_string().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

proptest! {
    /// A line is written exactly when the level is at least as severe as the threshold
    #[test]
    fn test_threshold_gate(threshold in named_level(), level in named_level()) {
        let buffer = SharedBuffer::new();
        let logger = Logger::builder()
            .min_level(threshold)
            .writer(buffer.clone())
            .build();

        logger.log(level, "probe").unwrap();

        let expect_written = level.value() <= threshold.value();
        prop_assert_eq!(!buffer.is_empty(), expect_written);
        prop_assert_eq!(logger.enabled(level), expect_written);
    }
}

// ============================================================================
// Line Format Tests
// ============================================================================

proptest! {
    /// Messages without newlines come back unchanged with their priority
    #[test]
    fn test_plain_line_parses(level in named_level(), message in "[a-zA-Z0-9 .,:%-]{0,64}") {
        let buffer = SharedBuffer::new();
        let logger = Logger::builder().writer(buffer.clone()).build();

        logger.log(level, &message).unwrap();

        let contents = buffer.contents();
        prop_assert_eq!(contents.matches('\n').count(), 1);
        let parsed = parse_line(contents.trim_end_matches('\n')).unwrap();
        prop_assert_eq!(parsed.priority, level.value());
        prop_assert_eq!(parsed.message, message);
        prop_assert!(parsed.fields.is_none());
    }

    /// Attribute blocks decode back to the same mapping
    #[test]
    fn test_attributes_decode(
        fields in proptest::collection::btree_map("[a-z_]{1,12}", any::<i64>(), 1..8)
    ) {
        let buffer = SharedBuffer::new();
        let logger = Logger::builder().writer(buffer.clone()).build();

        let context: LogContext = fields.clone().into_iter().collect();
        logger.log_with_context(PriorityLevel::INFO, "fields", context).unwrap();

        let parsed = parse_line(buffer.contents().trim_end()).unwrap();
        let expected: serde_json::Map<String, serde_json::Value> = fields
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::from(v)))
            .collect();
        prop_assert_eq!(parsed.fields, Some(serde_json::Value::Object(expected)));
    }
}
