//! Surrogate id allocation for `file_types` rows.

use repotype_core::types::identifiers::RecordId;

/// Monotonic id counter shared by every pass the owning process runs.
///
/// Starts at 1. Before classifying over an existing table the pass seeds it
/// with `MAX(file_types.id) + 1`; seeding never moves the counter backwards,
/// so ids handed out earlier in the process are never reissued, whichever
/// repository they were issued for.
#[derive(Debug)]
pub struct IdentityAllocator {
    next: i64,
}

impl IdentityAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the current value and advance.
    pub fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        RecordId(id)
    }

    /// Raise the counter to `min_value` if it is lower.
    pub fn seed(&mut self, min_value: i64) {
        if min_value > self.next {
            self.next = min_value;
        }
    }

    /// The value the next `next_id` call will return.
    pub fn peek(&self) -> i64 {
        self.next
    }
}

impl Default for IdentityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
