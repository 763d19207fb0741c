use std::collections::HashMap;

use crate::core::types::{STATUS_ACTIVE, Worker};

/// Mapping from worker id to display name, restricted to active
/// workers. Eligibility checks and name lookups both go through this.
pub type ActiveWorkerIndex = HashMap<i64, String>;

pub fn active_worker_index(workers: &[Worker]) -> ActiveWorkerIndex {
    workers
        .iter()
        .filter(|w| w.status == STATUS_ACTIVE)
        .map(|w| (w.id, w.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::active_worker_index;
    use crate::core::types::Worker;

    fn worker(id: i64, name: &str, status: i64) -> Worker {
        Worker {
            id,
            name: name.to_string(),
            status,
        }
    }

    #[test]
    fn keeps_only_active_workers() {
        let workers = vec![
            worker(1, "Alice", 0),
            worker(2, "Bob", 0),
            worker(3, "Cara", 1),
        ];
        let index = active_worker_index(&workers);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&1).map(String::as_str), Some("Alice"));
        assert_eq!(index.get(&2).map(String::as_str), Some("Bob"));
        assert!(!index.contains_key(&3));
    }

    #[test]
    fn empty_roster_yields_empty_index() {
        assert!(active_worker_index(&[]).is_empty());
    }
}
