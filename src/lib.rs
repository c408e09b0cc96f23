//! EVM Log Tracer - LOG opcode event capture for EVM execution
//!
//! This crate implements a hook-driven tracer for an EVM-style virtual
//! machine. The host VM calls the tracer once per executed instruction;
//! the tracer recognizes the LOG opcode family, pulls the offset/size/topic
//! operands off the evaluation stack, copies the referenced memory region
//! (zero-padded past the logical memory length), and accumulates one event
//! per occurrence. It also tracks whether execution faulted or was stopped
//! early by an external controller, and renders everything into a single
//! JSON report at the end of the session.
//!
//! # Overview
//!
//! The tracer captures, per LOG opcode executed:
//!
//! * The address of the account executing the instruction
//! * The first topic word from the stack
//! * The referenced memory region, hex-encoded in 32-byte chunks
//!
//! # Usage
//!
//! ```
//! use alloy_primitives::{Address, U256};
//! use evm_log_tracer::{LogTracer, OpContext, TracerConfig, OP_LOG1};
//!
//! struct Scope {
//!     address: Address,
//!     stack: Vec<U256>,
//!     memory: Vec<u8>,
//! }
//!
//! impl OpContext for Scope {
//!     fn address(&self) -> Address { self.address }
//!     fn stack_data(&self) -> &[U256] { &self.stack }
//!     fn memory_data(&self) -> &[u8] { &self.memory }
//! }
//!
//! let mut tracer = LogTracer::new(TracerConfig::default());
//! let scope = Scope {
//!     address: Address::repeat_byte(0xaa),
//!     // LOG operands, bottom to top: topic, size, offset
//!     stack: vec![U256::from(7), U256::from(1), U256::ZERO],
//!     memory: vec![0x42],
//! };
//! tracer.on_opcode(0, OP_LOG1, 0, 0, &scope, &[], 1, None);
//! let outcome = tracer.get_result().unwrap();
//! assert!(outcome.interruption.is_none());
//! println!("{}", outcome.report);
//! ```
//!
//! # Limitations
//!
//! * Only the first topic is captured, whichever of LOG1..LOG4 fired.
//! * The `diff_mode` configuration option is accepted but has no effect.

pub mod context;
pub mod memory;
pub mod report;
pub mod tracer;

pub use context::{OpContext, OP_LOG1, OP_LOG4, OP_REVERT};
pub use memory::{copy_padded, RangeError};
pub use report::{EventLog, LogEvent, TraceOutcome};
pub use tracer::{LogTracer, StopHandle, TracerConfig};

/// Result type for tracer operations
pub type Result<T> = anyhow::Result<T>;
