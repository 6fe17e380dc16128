//! Ctrl+C interrupt flag
//!
//! The handler installed in `main` sets the flag; the run checks it once
//! the flow returns so the process exits with the SIGINT code even when
//! the interrupt landed mid-prompt or mid-request. Nothing ever clears
//! it: one interrupt ends the run.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Check whether Ctrl+C was pressed during the run
#[inline]
pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Latch the interrupt (called from the Ctrl+C handler)
#[inline]
pub fn set_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst)
}
