//! Unit tests for er-schedule.

use er_core::{EmergencyType, IncidentId, LocationId, Severity};

use crate::{ArrivalStamp, Incident, IncidentScheduler};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn incident(id: u32, severity: Severity) -> Incident {
    Incident::new(IncidentId(id), LocationId(1), EmergencyType::Medical, severity, "")
}

fn drain_ids(q: &mut IncidentScheduler) -> Vec<u32> {
    std::iter::from_fn(|| q.dequeue_next().ok()).map(|i| i.id.0).collect()
}

// ── ArrivalStamp ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival {
    use std::collections::HashSet;
    use std::thread;

    use crate::ArrivalStamp;

    #[test]
    fn stamps_strictly_increase() {
        let a = ArrivalStamp::next();
        let b = ArrivalStamp::next();
        let c = ArrivalStamp::next();
        assert!(a < b && b < c);
    }

    #[test]
    fn stamps_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| (0..250).map(|_| ArrivalStamp::next()).collect::<Vec<_>>()))
            .collect();
        let all: Vec<ArrivalStamp> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }
}

// ── IncidentScheduler ─────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use super::*;
    use crate::ScheduleError;

    #[test]
    fn empty_queue() {
        let mut q = IncidentScheduler::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.peek_next().is_none());
        assert!(matches!(q.dequeue_next(), Err(ScheduleError::EmptyQueue)));
    }

    #[test]
    fn severity_dominates_then_fifo() {
        // Low, High, Medium, High → High(2), High(4), Medium(3), Low(1)
        let mut q = IncidentScheduler::new();
        q.enqueue(incident(1, Severity::Low));
        q.enqueue(incident(2, Severity::High));
        q.enqueue(incident(3, Severity::Medium));
        q.enqueue(incident(4, Severity::High));
        assert_eq!(drain_ids(&mut q), vec![2, 4, 3, 1]);
    }

    #[test]
    fn fifo_within_one_severity() {
        let mut q = IncidentScheduler::new();
        for id in 1..=20 {
            q.enqueue(incident(id, Severity::Medium));
        }
        assert_eq!(drain_ids(&mut q), (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn enqueue_assigns_stamp_when_missing() {
        let mut q = IncidentScheduler::new();
        q.enqueue(incident(1, Severity::Low));
        let out = q.dequeue_next().unwrap();
        assert!(out.arrival.is_some());
    }

    #[test]
    fn enqueue_keeps_existing_stamp() {
        let mut q = IncidentScheduler::new();
        let late = ArrivalStamp(100);
        let early = ArrivalStamp(5);
        q.enqueue(incident(1, Severity::High).with_arrival(late));
        q.enqueue(incident(2, Severity::High).with_arrival(early));
        let first = q.dequeue_next().unwrap();
        assert_eq!(first.id, IncidentId(2));
        assert_eq!(first.arrival, Some(early));
        assert_eq!(q.dequeue_next().unwrap().arrival, Some(late));
    }

    #[test]
    fn equal_prestamped_keys_fall_back_to_enqueue_order() {
        let mut q = IncidentScheduler::new();
        let stamp = ArrivalStamp(7);
        q.enqueue(incident(1, Severity::Low).with_arrival(stamp));
        q.enqueue(incident(2, Severity::Low).with_arrival(stamp));
        assert_eq!(q.len(), 2);
        assert_eq!(drain_ids(&mut q), vec![1, 2]);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q = IncidentScheduler::new();
        q.enqueue(incident(1, Severity::Low));
        q.enqueue(incident(2, Severity::High));
        assert_eq!(q.peek_next().unwrap().id, IncidentId(2));
        assert_eq!(q.peek_next().unwrap().id, IncidentId(2));
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue_next().unwrap().id, IncidentId(2));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn iter_pending_matches_dequeue_order() {
        let mut q = IncidentScheduler::new();
        q.enqueue(incident(1, Severity::Medium));
        q.enqueue(incident(2, Severity::Low));
        q.enqueue(incident(3, Severity::High));
        let listed: Vec<u32> = q.iter_pending().map(|i| i.id.0).collect();
        assert_eq!(q.len(), 3);
        assert_eq!(listed, drain_ids(&mut q));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use er_core::CoreError;

    use super::*;
    use crate::{load_incidents_reader, ScheduleError};

    const FEED: &str = "\
id,location_id,kind,severity,description
1,12,medical,high,cardiac arrest
2,7,fire,3,\"smoke, second floor\"
3,4,Medical,Medium,
";

    #[test]
    fn loads_in_file_order() {
        let incidents = load_incidents_reader(Cursor::new(FEED)).unwrap();
        assert_eq!(incidents.len(), 3);
        assert_eq!(incidents[0].id, IncidentId(1));
        assert_eq!(incidents[0].location, LocationId(12));
        assert_eq!(incidents[0].severity, Severity::High);
        assert_eq!(incidents[1].kind, EmergencyType::Fire);
        assert_eq!(incidents[1].severity, Severity::Low);
        assert_eq!(incidents[1].description, "smoke, second floor");
        assert_eq!(incidents[2].severity, Severity::Medium);
        assert!(incidents.iter().all(|i| i.arrival.is_none()));
    }

    #[test]
    fn unrecognized_severity_rejected() {
        let feed = "id,location_id,kind,severity,description\n1,1,fire,urgent,x\n";
        let err = load_incidents_reader(Cursor::new(feed)).unwrap_err();
        assert!(matches!(err, ScheduleError::Core(CoreError::InvalidSeverity(_))));
    }

    #[test]
    fn unrecognized_kind_rejected() {
        let feed = "id,location_id,kind,severity,description\n1,1,flood,high,x\n";
        let err = load_incidents_reader(Cursor::new(feed)).unwrap_err();
        assert!(matches!(err, ScheduleError::Core(CoreError::InvalidEmergencyType(_))));
    }

    #[test]
    fn malformed_id_is_parse_error() {
        let feed = "id,location_id,kind,severity,description\nabc,1,fire,high,x\n";
        let err = load_incidents_reader(Cursor::new(feed)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }
}
