//! Host-side execution context seam
//!
//! The VM owns the interpreter loop; the tracer only ever sees it through
//! this capability trait, handed in on every opcode hook.

use alloy_primitives::{Address, U256};

/// Fault opcode: signals an unrecoverable execution failure.
pub const OP_REVERT: u8 = 0xfd;

/// First opcode of the traced log-emission family.
pub const OP_LOG1: u8 = 0xa1;

/// Last opcode of the traced log-emission family.
pub const OP_LOG4: u8 = 0xa4;

/// Read access to the VM state the tracer needs at an instruction boundary.
///
/// Implemented by the host VM's call scope. All three views refer to the
/// moment just before the observed instruction executes, so the stack
/// still holds the instruction's operands.
pub trait OpContext {
    /// Address of the account executing the current instruction.
    fn address(&self) -> Address;

    /// Evaluation stack contents, bottom to top (top is the last element).
    fn stack_data(&self) -> &[U256];

    /// Linear memory contents up to the current logical memory length.
    fn memory_data(&self) -> &[u8];
}
