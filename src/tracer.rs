//! Hook-driven LOG opcode tracer
//!
//! The host VM drives execution and calls [`LogTracer::on_opcode`] once per
//! executed instruction on its own thread. The only cross-thread entry
//! point is [`LogTracer::stop`] (or a cloned [`StopHandle`]), used by
//! watchdogs to terminate a session at the first opportune moment.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Deserialize;

use crate::context::{OpContext, OP_LOG1, OP_LOG4, OP_REVERT};
use crate::memory::copy_padded;
use crate::report::{EventLog, LogEvent, TraceOutcome, TraceReport};
use crate::Result;

/// Session options, deserializable from a host-supplied JSON blob.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TracerConfig {
    /// If true, the tracer is expected to report state modifications.
    /// Accepted for wire compatibility; this tracer does not act on it.
    pub diff_mode: bool,
}

/// Failure status of one session. `failed` and `reason` are always
/// updated together under the lock so the result assembler never sees
/// a torn pair.
#[derive(Debug, Default)]
struct Halt {
    failed: bool,
    reason: Option<String>,
}

fn lock(halt: &Mutex<Halt>) -> MutexGuard<'_, Halt> {
    halt.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Cloneable handle for requesting a forced stop from another thread.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
    halt: Arc<Mutex<Halt>>,
}

impl StopHandle {
    /// Terminate the session at the first opportune moment.
    ///
    /// Idempotent; the last caller's reason wins, `failed` stays true
    /// regardless. Safe to call concurrently with an in-flight
    /// [`LogTracer::on_opcode`].
    pub fn stop(&self, reason: impl Display) {
        {
            let mut halt = lock(&self.halt);
            halt.failed = true;
            halt.reason = Some(reason.to_string());
        }
        self.stopped.store(true, Ordering::Release);
    }
}

/// Tracer that captures LOG opcode events from an instruction stream.
///
/// The VM itself is an external collaborator reached through
/// [`OpContext`]; the tracer never drives execution.
#[derive(Debug, Default)]
pub struct LogTracer {
    /// Session options. `diff_mode` is recorded but has no effect here.
    pub config: TracerConfig,
    events: EventLog,
    stop: StopHandle,
}

impl LogTracer {
    /// Create a tracer for one session.
    pub fn new(config: TracerConfig) -> Self {
        tracing::debug!("log tracer created (diff_mode: {})", config.diff_mode);
        Self {
            config,
            events: EventLog::new(),
            stop: StopHandle::default(),
        }
    }

    /// Observe a single executed instruction.
    ///
    /// Called by the host once per instruction, in program order, before
    /// the instruction pops its operands. Must never block; all work here
    /// is bounded in-process buffer manipulation.
    #[allow(clippy::too_many_arguments)]
    pub fn on_opcode(
        &mut self,
        _pc: u64,
        opcode: u8,
        _gas: u64,
        _cost: u64,
        scope: &dyn OpContext,
        _return_data: &[u8],
        _depth: usize,
        _err: Option<&anyhow::Error>,
    ) {
        if self.stop.stopped.load(Ordering::Acquire) {
            return;
        }
        if opcode == OP_REVERT {
            lock(&self.stop.halt).failed = true;
            return;
        }
        if (OP_LOG1..=OP_LOG4).contains(&opcode) {
            let stack = scope.stack_data();
            let caller = scope.address();

            // Operand layout at hook time, top down: offset, size, first
            // topic. Exactly one topic word is read whichever of
            // LOG1..LOG4 fired; the narrowing is intentional.
            let offset = stack[stack.len() - 1];
            let size = stack[stack.len() - 2];
            let topics0 = stack[stack.len() - 3];

            let data = match copy_padded(
                scope.memory_data(),
                offset.as_limbs()[0] as i64,
                size.as_limbs()[0] as i64,
            ) {
                Ok(data) => data,
                Err(err) => {
                    tracing::warn!(
                        "failed to copy log data: {} (opcode: {:#x}, offset: {}, size: {})",
                        err,
                        opcode,
                        offset,
                        size
                    );
                    return;
                }
            };

            let data = hex_chunks(&data);
            self.events.push(LogEvent {
                caller,
                topics0,
                data,
            });
        }
    }

    /// Transaction-start hook. The host invokes it unconditionally;
    /// reserved for future per-transaction bookkeeping.
    pub fn on_tx_start(&mut self) {}

    /// Transaction-end hook. See [`Self::on_tx_start`].
    pub fn on_tx_end(&mut self) {}

    /// Terminate the session at the first opportune moment.
    pub fn stop(&self, reason: impl Display) {
        self.stop.stop(reason);
    }

    /// Handle for stopping this session from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Events captured so far, in program order.
    pub fn events(&self) -> &[LogEvent] {
        self.events.events()
    }

    /// Assemble the final report.
    ///
    /// Returns `Err` only if JSON encoding fails. On success the outcome
    /// carries both the report and, if the session was force-stopped, the
    /// stop reason; a valid report does not imply a clean session.
    pub fn get_result(&self) -> Result<TraceOutcome> {
        let halt = lock(&self.stop.halt);
        let report = serde_json::to_string(&TraceReport {
            event: self.events.events(),
            is_fail: halt.failed,
            reason: halt.reason.as_deref(),
        })?;
        Ok(TraceOutcome {
            report,
            interruption: halt.reason.clone(),
        })
    }
}

/// Hex-encode `data` in 32-byte chunks, increasing offset order. The
/// final chunk may encode fewer than 32 bytes and is not re-padded.
fn hex_chunks(data: &[u8]) -> Vec<String> {
    data.chunks(32)
        .map(|chunk| format!("0x{}", hex::encode(chunk)))
        .collect()
}
