//! Data structures for captured log events and the final report

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

fn is_zero_address(addr: &Address) -> bool {
    addr.is_zero()
}

/// One captured LOG opcode occurrence.
///
/// Zero-valued fields are omitted from the encoded form; that is a
/// space-saving convention, not a semantic distinction from "absent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Address of the account that executed the instruction.
    #[serde(default, skip_serializing_if = "is_zero_address")]
    pub caller: Address,
    /// First topic operand from the stack.
    #[serde(default, skip_serializing_if = "U256::is_zero")]
    pub topics0: U256,
    /// Referenced memory region, `0x`-hex encoded in 32-byte chunks in
    /// increasing offset order. The last chunk may encode fewer than 32
    /// source bytes; padding happens at extraction, never here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

/// Append-only, insertion-ordered store of captured events.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<LogEvent>,
}

impl EventLog {
    /// Create a new empty event log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event. Entries are never reordered, mutated or deduplicated.
    pub fn push(&mut self, event: LogEvent) {
        self.events.push(event);
    }

    /// All captured events, in capture order.
    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    /// Number of captured events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Serialized shape of the final report.
#[derive(Serialize)]
pub(crate) struct TraceReport<'a> {
    pub event: &'a [LogEvent],
    #[serde(rename = "isFail")]
    pub is_fail: bool,
    pub reason: Option<&'a str>,
}

/// Result of a completed trace session.
///
/// A forced stop still produces a valid report; `interruption` carries
/// the stop reason alongside it so the caller can treat the session as
/// reportable but erroneous. Presence of a report does not imply the
/// absence of an interruption.
#[derive(Debug)]
pub struct TraceOutcome {
    /// JSON-encoded report: `{"event": [...], "isFail": bool, "reason": ...}`.
    pub report: String,
    /// Stop reason, if the session was terminated early.
    pub interruption: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_preserves_insertion_order() {
        let mut log = EventLog::new();
        for i in 0..3u8 {
            log.push(LogEvent {
                caller: Address::repeat_byte(i),
                topics0: U256::from(i),
                data: vec![],
            });
        }
        assert_eq!(log.len(), 3);
        let callers: Vec<_> = log.events().iter().map(|e| e.caller).collect();
        assert_eq!(
            callers,
            vec![
                Address::repeat_byte(0),
                Address::repeat_byte(1),
                Address::repeat_byte(2)
            ]
        );
    }

    #[test]
    fn test_duplicate_events_are_kept() {
        let event = LogEvent {
            caller: Address::repeat_byte(0xaa),
            topics0: U256::from(1),
            data: vec!["0x00".to_string()],
        };
        let mut log = EventLog::new();
        log.push(event.clone());
        log.push(event.clone());
        assert_eq!(log.events(), &[event.clone(), event]);
    }

    #[test]
    fn test_zero_fields_are_omitted_from_json() {
        let empty = LogEvent {
            caller: Address::ZERO,
            topics0: U256::ZERO,
            data: vec![],
        };
        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json, serde_json::json!({}));

        let full = LogEvent {
            caller: Address::repeat_byte(0xaa),
            topics0: U256::from(7),
            data: vec!["0x42".to_string()],
        };
        let json = serde_json::to_value(&full).unwrap();
        assert_eq!(json["data"], serde_json::json!(["0x42"]));
        assert!(json.get("caller").is_some());
        assert!(json.get("topics0").is_some());
    }
}
