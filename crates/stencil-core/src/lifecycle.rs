//! # Render Lifecycle State Machine
//!
//! Tracks one render of one component instance through its validation
//! checkpoints.
//!
//! ## Phases
//!
//! ```text
//! Pending ──▶ ArgsKwargsChecked ──▶ ContextComputed ──▶ DataChecked ──▶ SlotsChecked ──▶ Rendered
//!                                          │                  ▲  │              ▲
//!                                          └──▶ SlotsChecked ─┘  └──────────────┘
//!
//! Aborted (terminal) is reachable from every non-terminal phase.
//! ```
//!
//! `DataChecked` and `SlotsChecked` may complete in either order, but both
//! must complete before `Rendered`.
//!
//! The phase is an enum with validated transitions. Completion of the data
//! and slots checks is tracked by two flags.

use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;

/// A checkpoint in the lifecycle of a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenderPhase {
    /// Render requested; nothing validated yet.
    Pending,
    /// Positional and keyword arguments passed validation.
    ArgsKwargsChecked,
    /// The component produced its context data.
    ContextComputed,
    /// Context data passed validation.
    DataChecked,
    /// Slot content passed validation.
    SlotsChecked,
    /// Output produced (terminal).
    Rendered,
    /// A check or a component step failed (terminal).
    Aborted,
}

impl RenderPhase {
    /// Whether no further transitions are allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rendered | Self::Aborted)
    }

    /// The canonical phase name (e.g. `"ARGS_KWARGS_CHECKED"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::ArgsKwargsChecked => "ARGS_KWARGS_CHECKED",
            Self::ContextComputed => "CONTEXT_COMPUTED",
            Self::DataChecked => "DATA_CHECKED",
            Self::SlotsChecked => "SLOTS_CHECKED",
            Self::Rendered => "RENDERED",
            Self::Aborted => "ABORTED",
        }
    }
}

impl std::fmt::Display for RenderPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase before the transition.
    pub from: RenderPhase,
    /// Phase after the transition.
    pub to: RenderPhase,
    /// Why the render aborted, for transitions into `Aborted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The lifecycle of one render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderLifecycle {
    phase: RenderPhase,
    data_checked: bool,
    slots_checked: bool,
    history: Vec<PhaseTransition>,
}

impl Default for RenderLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLifecycle {
    /// A lifecycle in the `Pending` phase.
    pub fn new() -> Self {
        Self {
            phase: RenderPhase::Pending,
            data_checked: false,
            slots_checked: false,
            history: Vec::new(),
        }
    }

    /// The current phase.
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Ordered log of all transitions.
    pub fn history(&self) -> &[PhaseTransition] {
        &self.history
    }

    /// Move to `next`, rejecting transitions the lifecycle does not allow.
    pub fn advance(&mut self, next: RenderPhase) -> Result<(), LifecycleError> {
        if self.phase.is_terminal() {
            return Err(LifecycleError::Terminal {
                phase: self.phase.to_string(),
            });
        }
        if next == RenderPhase::Aborted {
            self.record(next, Some("aborted".to_string()));
            return Ok(());
        }

        let allowed = match (self.phase, next) {
            (RenderPhase::Pending, RenderPhase::ArgsKwargsChecked) => Ok(()),
            (RenderPhase::ArgsKwargsChecked, RenderPhase::ContextComputed) => Ok(()),
            (RenderPhase::ContextComputed | RenderPhase::SlotsChecked, RenderPhase::DataChecked) => {
                if self.data_checked {
                    Err("data was already checked")
                } else {
                    Ok(())
                }
            }
            (RenderPhase::ContextComputed | RenderPhase::DataChecked, RenderPhase::SlotsChecked) => {
                if self.slots_checked {
                    Err("slots were already checked")
                } else {
                    Ok(())
                }
            }
            (RenderPhase::DataChecked | RenderPhase::SlotsChecked, RenderPhase::Rendered) => {
                if self.data_checked && self.slots_checked {
                    Ok(())
                } else {
                    Err("data and slots must both be checked before rendering")
                }
            }
            _ => Err("transition is not part of the render lifecycle"),
        };

        allowed.map_err(|reason| LifecycleError::InvalidTransition {
            from: self.phase.to_string(),
            to: next.to_string(),
            reason: reason.to_string(),
        })?;

        match next {
            RenderPhase::DataChecked => self.data_checked = true,
            RenderPhase::SlotsChecked => self.slots_checked = true,
            _ => {}
        }
        self.record(next, None);
        Ok(())
    }

    /// Abort the render. No-op if the render already finished.
    pub fn abort(&mut self, reason: impl Into<String>) {
        if !self.phase.is_terminal() {
            self.record(RenderPhase::Aborted, Some(reason.into()));
        }
    }

    fn record(&mut self, to: RenderPhase, reason: Option<String>) {
        self.history.push(PhaseTransition {
            from: self.phase,
            to,
            reason,
        });
        self.phase = to;
    }
}
