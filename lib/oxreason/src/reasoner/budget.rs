//! Session configuration and the shared resource budget.
//!
//! One [`ResourceBudget`] exists per classification and is threaded into
//! every rule family. No rule family owns a counter of its own: every scan
//! pass, wherever it happens, draws from the same pool, so the configured
//! bounds hold for the whole session rather than once per family.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Default global cap on rule-family passes.
///
/// Generous enough for any realistic ontology; a linear hierarchy of tens of
/// thousands of classes closes in well under a hundred passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Configuration for a reasoning session.
#[derive(Debug, Clone)]
pub struct ReasonerConfig {
    /// Global cap on scan passes, shared across all rule families.
    pub max_iterations: usize,
    /// Wall-clock cap for the whole classification.
    pub timeout: Option<Duration>,
    /// Ceiling on the number of facts added to the closure.
    pub max_inferred_axioms: Option<usize>,
    /// Run the consistency checker over the closure after classification.
    pub check_consistency: bool,
    /// Keep the materialized listing of derived axioms.
    pub materialize: bool,
    /// Record the rule family and premises of every derived fact.
    pub track_explanations: bool,
    /// Cooperative cancellation flag, polled as often as the deadline.
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            timeout: None,
            max_inferred_axioms: None,
            check_consistency: false,
            materialize: true,
            track_explanations: false,
            cancel_flag: None,
        }
    }
}

impl ReasonerConfig {
    /// Creates a configuration with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the wall-clock cap.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the inferred-axiom ceiling.
    #[must_use]
    pub fn with_max_inferred_axioms(mut self, max_inferred_axioms: usize) -> Self {
        self.max_inferred_axioms = Some(max_inferred_axioms);
        self
    }

    /// Enables the consistency check.
    #[must_use]
    pub fn with_consistency_check(mut self) -> Self {
        self.check_consistency = true;
        self
    }

    /// Disables retention of the materialized axiom listing; only counts are
    /// reported.
    #[must_use]
    pub fn without_materialization(mut self) -> Self {
        self.materialize = false;
        self
    }

    /// Enables per-fact provenance tracking.
    #[must_use]
    pub fn with_explanations(mut self) -> Self {
        self.track_explanations = true;
        self
    }

    /// Installs a cancellation flag; setting it to `true` stops the session
    /// at the next rule application.
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel_flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(cancel_flag);
        self
    }
}

/// Why the budget stopped a classification early.
///
/// Internal control-flow signal; the controller maps it onto the public
/// status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetExceeded {
    /// The shared pass counter ran out.
    Iterations,
    /// The wall-clock deadline passed.
    Deadline,
    /// The inferred-axiom ceiling was crossed.
    Axioms,
    /// The caller raised the cancellation flag.
    Cancelled,
}

/// The single budget shared by every rule family of one session.
#[derive(Debug)]
pub(crate) struct ResourceBudget {
    max_iterations: usize,
    iterations_used: usize,
    started: Instant,
    timeout: Option<Duration>,
    max_axioms: Option<usize>,
    axioms_so_far: usize,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl ResourceBudget {
    pub(crate) fn new(config: &ReasonerConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            iterations_used: 0,
            started: Instant::now(),
            timeout: config.timeout,
            max_axioms: config.max_inferred_axioms,
            axioms_so_far: 0,
            cancel_flag: config.cancel_flag.clone(),
        }
    }

    /// Draws one scan pass from the shared counter.
    pub(crate) fn begin_pass(&mut self) -> Result<(), BudgetExceeded> {
        if self.iterations_used >= self.max_iterations {
            return Err(BudgetExceeded::Iterations);
        }
        self.iterations_used += 1;
        Ok(())
    }

    /// Polls the deadline and the cancellation flag.
    ///
    /// Called before every individual rule application so the worst-case
    /// overrun is one application.
    pub(crate) fn check_interrupt(&self) -> Result<(), BudgetExceeded> {
        if let Some(timeout) = self.timeout {
            if self.started.elapsed() >= timeout {
                return Err(BudgetExceeded::Deadline);
            }
        }
        if let Some(flag) = &self.cancel_flag {
            if flag.load(Ordering::Relaxed) {
                return Err(BudgetExceeded::Cancelled);
            }
        }
        Ok(())
    }

    /// Charges one inserted fact against the axiom ceiling.
    ///
    /// The fact that crosses the ceiling is already in the closure and stays
    /// there; it is a sound derivation, the session just stops growing.
    pub(crate) fn record_inference(&mut self) -> Result<(), BudgetExceeded> {
        self.axioms_so_far += 1;
        if let Some(max) = self.max_axioms {
            if self.axioms_so_far > max {
                return Err(BudgetExceeded::Axioms);
            }
        }
        Ok(())
    }

    pub(crate) fn iterations_used(&self) -> usize {
        self.iterations_used
    }

    pub(crate) fn axioms_so_far(&self) -> usize {
        self.axioms_so_far
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
