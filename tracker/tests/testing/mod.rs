#![allow(dead_code)]

use datamap::Storage;
use std::time::Duration;
use tracker::api::Event;
use tracker::completion::{Completion, CompletionDomain};
use tracker::patches::{Patch, PatchState, Patches, PatchesDomain};
use tracker::time::Timestamp;
use tracker::DailyTreeRuns;

pub const T0: Timestamp = Timestamp(1_700_000_000_000);

pub fn seconds(value: u64) -> Duration {
    Duration::from_secs(value)
}

pub fn hours(value: u64) -> Duration {
    Duration::from_secs(value * 60 * 60)
}

pub fn memory_storage() -> Storage {
    let storage = Storage::open_in_memory().unwrap();
    storage.setup_configuration().unwrap();
    storage
}

pub struct PatchesTestScenario {
    domain: PatchesDomain,
    now: Timestamp,
    events: Vec<Patches>,
}

impl PatchesTestScenario {
    pub fn new(tracked: &[Patch]) -> Self {
        Self {
            domain: PatchesDomain::new(tracked.iter().copied()),
            now: T0,
            events: vec![],
        }
    }

    pub fn at(mut self, elapsed: Duration) -> Self {
        self.now = T0.plus(elapsed);
        self
    }

    pub fn given_patch_state(mut self, patch: Patch, raw_value: i32) -> Self {
        self.domain
            .handle_raw_state(patch, raw_value, self.now)
            .unwrap();
        self
    }

    pub fn given_tick(mut self) -> Self {
        self.domain.update(self.now);
        self
    }

    pub fn when_patch_state(mut self, patch: Patch, raw_value: i32) -> Self {
        self.events = self
            .domain
            .handle_raw_state(patch, raw_value, self.now)
            .unwrap_or_default();
        self
    }

    pub fn when_tick(mut self) -> Self {
        self.events = self.domain.update(self.now);
        self
    }

    pub fn then_events_should_be(self, expected: Vec<Patches>) -> Self {
        assert_eq!(self.events, expected, "at {}", self.now);
        self
    }

    pub fn then_no_events(self) -> Self {
        self.then_events_should_be(vec![])
    }

    pub fn then_patch_should_be(self, patch: Patch, expected: PatchState) -> Self {
        assert_eq!(self.domain.get_patch(patch).unwrap(), &expected);
        self
    }

    pub fn then_run_notified_should_be(self, expected: bool) -> Self {
        assert_eq!(self.domain.is_run_notified(), expected);
        self
    }
}

pub struct CompletionTestScenario {
    domain: CompletionDomain,
    now: Timestamp,
    events: Vec<Completion>,
}

impl CompletionTestScenario {
    pub fn new(tracked: &[Patch]) -> Self {
        Self {
            domain: CompletionDomain::new(tracked.iter().copied()),
            now: T0,
            events: vec![],
        }
    }

    pub fn given_completed_ago(mut self, patch: Patch, ago: Duration) -> Self {
        self.domain.load_records(vec![(patch, self.now.minus(ago))]);
        self
    }

    pub fn when_session_starts(mut self) -> Self {
        self.events = self.domain.start_session(self.now);
        self
    }

    pub fn when_broadcast(mut self, text: &str) -> Self {
        self.events = self.domain.detect_completions(text, self.now);
        self
    }

    pub fn then_events_should_be(self, expected: Vec<Completion>) -> Self {
        assert_eq!(self.events, expected);
        self
    }

    pub fn then_completed_should_be(self, patch: Patch, expected: bool) -> Self {
        assert_eq!(self.domain.is_completed(patch, self.now), expected, "{:?}", patch);
        self
    }
}

pub fn messages(events: &[Event]) -> Vec<String> {
    events.iter().filter_map(Event::message).collect()
}

pub fn session(storage: Storage, tracked: &[Patch]) -> DailyTreeRuns {
    let mut runs = DailyTreeRuns::new(storage, tracked);
    runs.start_up().unwrap();
    runs
}
