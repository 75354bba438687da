//! Container depth budget.

use crate::error::{CodecError, Result};

/// Counts how many more containers may be entered.
///
/// Starts at the configured maximum, drops by one on every
/// [`enter`](DepthBudget::enter) and rises by one on the matching
/// [`exit`](DepthBudget::exit). Exiting more often than entering is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthBudget {
    remaining: usize,
    max: usize,
}

impl DepthBudget {
    pub fn new(max: usize) -> Self {
        Self {
            remaining: max,
            max,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        if self.remaining == 0 {
            return Err(CodecError::DepthExceeded);
        }
        self.remaining -= 1;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.remaining == self.max {
            return Err(CodecError::UnbalancedContainer);
        }
        self.remaining += 1;
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Current nesting level.
    pub fn depth(&self) -> usize {
        self.max - self.remaining
    }
}
