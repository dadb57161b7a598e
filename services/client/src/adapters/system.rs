//! services/client/src/adapters/system.rs
//!
//! Wall-clock time and UUID v4 ids for the stores.

use chrono::{DateTime, Utc};
use newshaven_core::ports::{Clock, IdGenerator};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 UUIDs, so ids stay unique even when summaries are created in
/// the same instant.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| UuidIdGenerator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
