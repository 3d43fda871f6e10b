//! # Order Submission Flow
//!
//! The submission state machine.
//!
//! ## States
//! ```text
//! ┌──────┐    ┌────────────┐    ┌────────────┐    ┌───────────┐
//! │ Idle │───►│ Validating │───►│ Submitting │───►│ Succeeded │──┐
//! └──────┘    └─────┬──────┘    └─────┬──────┘    └───────────┘  │
//!     ▲             │                 │           ┌───────────┐  │
//!     │             └────────────────►└──────────►│  Failed   │──┤
//!     │                                           └───────────┘  │
//!     └──────────────────────────────────────────────────────────┘
//! ```
//! Validation failures never reach the network; both terminal states
//! return to Idle, re-enabling the submit control and restoring its
//! label. While Submitting the control is disabled — that is the only
//! duplicate-submission guard, matching the fact that in-flight
//! submissions cannot be cancelled.

use serde::Serialize;
use ts_rs::TS;
use tracing::debug;

/// Submit-button label while a submission is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Processando...";

/// Submit-button label at rest.
pub const SUBMIT_IDLE_LABEL: &str = "Fazer Pedido";

/// Phases of the submission state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Precondition failures detected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    NoTableSelected,
    EmptyCart,
}

impl ValidationFailure {
    /// User-facing message for the error toast.
    pub const fn message(&self) -> &'static str {
        match self {
            ValidationFailure::NoTableSelected => "Selecione uma mesa!",
            ValidationFailure::EmptyCart => "Adicione produtos ao carrinho!",
        }
    }
}

/// View state of the submit control, derived from the current phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl Default for SubmitControl {
    fn default() -> Self {
        SubmitControl {
            enabled: true,
            label: SUBMIT_IDLE_LABEL.to_string(),
        }
    }
}

// =============================================================================
// Order Flow
// =============================================================================

/// The submission state machine the controller drives.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFlow {
    phase: SubmitPhase,
}

impl OrderFlow {
    pub fn new() -> Self {
        OrderFlow::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Validates the submission preconditions.
    pub fn validate(
        selected_table: Option<i64>,
        cart_empty: bool,
    ) -> Result<i64, ValidationFailure> {
        let table_id = selected_table.ok_or(ValidationFailure::NoTableSelected)?;
        if cart_empty {
            return Err(ValidationFailure::EmptyCart);
        }
        Ok(table_id)
    }

    /// Idle → Validating. Returns false (and stays put) when a
    /// submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.phase != SubmitPhase::Idle {
            debug!(phase = ?self.phase, "submission already in progress");
            return false;
        }
        self.phase = SubmitPhase::Validating;
        true
    }

    /// Validating → Failed (no network call was made).
    pub fn invalid(&mut self) {
        debug_assert_eq!(self.phase, SubmitPhase::Validating);
        self.phase = SubmitPhase::Failed;
    }

    /// Validating → Submitting.
    pub fn submitting(&mut self) {
        debug_assert_eq!(self.phase, SubmitPhase::Validating);
        self.phase = SubmitPhase::Submitting;
    }

    /// Submitting → Succeeded.
    pub fn succeeded(&mut self) {
        debug_assert_eq!(self.phase, SubmitPhase::Submitting);
        self.phase = SubmitPhase::Succeeded;
    }

    /// Submitting → Failed.
    pub fn failed(&mut self) {
        debug_assert_eq!(self.phase, SubmitPhase::Submitting);
        self.phase = SubmitPhase::Failed;
    }

    /// Terminal → Idle, regardless of outcome.
    pub fn finish(&mut self) {
        self.phase = SubmitPhase::Idle;
    }

    /// Derives the submit control: disabled with a busy label only while
    /// a submission is actually in flight.
    pub fn control(&self) -> SubmitControl {
        match self.phase {
            SubmitPhase::Submitting => SubmitControl {
                enabled: false,
                label: SUBMIT_BUSY_LABEL.to_string(),
            },
            _ => SubmitControl {
                enabled: true,
                label: SUBMIT_IDLE_LABEL.to_string(),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
