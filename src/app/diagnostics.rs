//! Non-fatal shape checks and the fault boundary shared by the engines.
//!
//! Nothing here ever propagates to the caller: a fault is logged and
//! replaced by the fallback the operation documents.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{error, warn};

use tablekit_domain::{HeaderDefinition, RowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Validation,
    Range,
    Runtime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableFault {
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowShape {
        row: usize,
        actual: usize,
        expected: usize,
    },
    #[error("{what} is not a sequence")]
    NotSequence { what: &'static str },
    #[error("{field} {value} is out of range, using {corrected}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        corrected: usize,
    },
    #[error("page {requested} is past the last page, using page {last}")]
    StalePage { requested: usize, last: usize },
    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
    #[error("{0}")]
    Runtime(String),
}

impl TableFault {
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::RowShape { .. } | Self::NotSequence { .. } => FaultKind::Validation,
            Self::OutOfRange { .. } | Self::StalePage { .. } => FaultKind::Range,
            Self::Overflow(_) | Self::Runtime(_) => FaultKind::Runtime,
        }
    }

    /// Logs at the level matching the fault kind.
    pub fn report(&self, context: &str) {
        match self.kind() {
            FaultKind::Validation | FaultKind::Range => warn!(context = %context, "{self}"),
            FaultKind::Runtime => error!(context = %context, "{self}"),
        }
    }
}

/// Logs `fault` and hands back `fallback` unchanged.
pub fn handle_fault<T>(fault: TableFault, fallback: T, context: &str) -> T {
    fault.report(context);
    fallback
}

/// Runs `op`, converting both an `Err` and a panic into `fallback`.
pub fn contain<T>(context: &str, fallback: T, op: impl FnOnce() -> Result<T, TableFault>) -> T {
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(Ok(value)) => value,
        Ok(Err(fault)) => handle_fault(fault, fallback, context),
        Err(payload) => handle_fault(
            TableFault::Runtime(panic_message(payload.as_ref())),
            fallback,
            context,
        ),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// Every row whose length differs from the header count.
pub fn shape_faults(headers: &[HeaderDefinition], rows: &[RowRecord]) -> Vec<TableFault> {
    let expected = headers.len();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.len() != expected)
        .map(|(row, cells)| TableFault::RowShape {
            row,
            actual: cells.len(),
            expected,
        })
        .collect()
}

/// Returns false and warns when any row is misaligned with the headers.
/// Never blocks further processing.
pub fn validate(headers: &[HeaderDefinition], rows: &[RowRecord]) -> bool {
    let faults = shape_faults(headers, rows);
    match faults.first() {
        None => true,
        Some(first) => {
            warn!(
                mismatched_rows = faults.len(),
                total_rows = rows.len(),
                "row/header shape mismatch: {first}"
            );
            false
        }
    }
}
