//! Deferred transitions keyed by the logical clock.
//!
//! Entries remember the generation they were scheduled in. `cancel_all`
//! starts a new generation, so anything queued before a restart can never
//! fire afterwards, even if it was already due.

use bulwark_core::enums::TransitionKind;
use bulwark_core::state::PendingTransitionView;

#[derive(Debug, Clone)]
struct ScheduledTransition {
    due_ms: f64,
    seq: u64,
    generation: u64,
    kind: TransitionKind,
}

#[derive(Debug, Clone, Default)]
pub struct TransitionSchedule {
    entries: Vec<ScheduledTransition>,
    generation: u64,
    next_seq: u64,
}

impl TransitionSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `kind` to fire once the logical clock reaches `due_ms`.
    pub fn schedule(&mut self, due_ms: f64, kind: TransitionKind) {
        self.entries.push(ScheduledTransition {
            due_ms,
            seq: self.next_seq,
            generation: self.generation,
            kind,
        });
        self.next_seq += 1;
    }

    /// Invalidate every pending transition.
    pub fn cancel_all(&mut self) {
        self.generation += 1;
        self.entries.clear();
    }

    /// Remove and return the transitions due at `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<TransitionKind> {
        let generation = self.generation;
        let mut due: Vec<ScheduledTransition> = Vec::new();
        self.entries.retain(|entry| {
            if entry.generation != generation {
                return false;
            }
            if entry.due_ms <= now_ms {
                due.push(entry.clone());
                return false;
            }
            true
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|entry| entry.kind).collect()
    }

    /// The earliest live pending transition.
    pub fn next(&self) -> Option<PendingTransitionView> {
        self.entries
            .iter()
            .filter(|entry| entry.generation == self.generation)
            .min_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|entry| PendingTransitionView {
                kind: entry.kind,
                due_ms: entry.due_ms,
            })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_fires_early() {
        let mut schedule = TransitionSchedule::new();
        schedule.schedule(2000.0, TransitionKind::AdvanceStage);
        assert!(schedule.drain_due(1999.9).is_empty());
        assert_eq!(schedule.drain_due(2000.0), vec![TransitionKind::AdvanceStage]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_due_entries_fire_in_time_order() {
        let mut schedule = TransitionSchedule::new();
        schedule.schedule(500.0, TransitionKind::Resume);
        schedule.schedule(100.0, TransitionKind::AdvanceStage);
        assert_eq!(
            schedule.next().map(|p| p.kind),
            Some(TransitionKind::AdvanceStage)
        );
        assert_eq!(
            schedule.drain_due(1000.0),
            vec![TransitionKind::AdvanceStage, TransitionKind::Resume]
        );
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut schedule = TransitionSchedule::new();
        schedule.schedule(100.0, TransitionKind::AdvanceStage);
        schedule.cancel_all();
        assert!(schedule.next().is_none());
        assert!(schedule.drain_due(10_000.0).is_empty());

        // New entries after the cancel still work.
        schedule.schedule(200.0, TransitionKind::Resume);
        assert_eq!(schedule.drain_due(200.0), vec![TransitionKind::Resume]);
    }
}
