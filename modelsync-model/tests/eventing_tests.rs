use modelsync_model::{Eventing, Events};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

/// Helper: create a shared call-log that listeners append to.
fn make_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

fn logger(log: &Arc<Mutex<Vec<String>>>, entry: &str) -> Box<dyn Fn() + Send + Sync> {
    let log = Arc::clone(log);
    let entry = entry.to_string();
    Box::new(move || log.lock().unwrap().push(entry.clone()))
}

// ── on / trigger ─────────────────────────────────────────────────

#[test]
fn trigger_calls_registered_callback() {
    let mut events = Eventing::new();
    let log = make_log();
    events.on("change", logger(&log, "a"));

    events.trigger("change");

    assert_eq!(*log.lock().unwrap(), vec!["a"]);
}

#[test]
fn callbacks_fire_in_registration_order() {
    let mut events = Eventing::new();
    let log = make_log();
    events.on("change", logger(&log, "a"));
    events.on("change", logger(&log, "b"));
    events.on("change", logger(&log, "c"));

    events.trigger("change");

    assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn trigger_only_runs_matching_event() {
    let mut events = Eventing::new();
    let log = make_log();
    events.on("change", logger(&log, "change"));
    events.on("save", logger(&log, "save"));

    events.trigger("save");

    assert_eq!(*log.lock().unwrap(), vec!["save"]);
}

#[test]
fn trigger_unregistered_event_is_noop() {
    let events = Eventing::new();
    events.trigger("nothing-here");
    assert_eq!(events.listener_count("nothing-here"), 0);
}

#[test]
fn repeated_trigger_runs_callbacks_each_time() {
    let mut events = Eventing::new();
    let log = make_log();
    events.on("change", logger(&log, "a"));

    events.trigger("change");
    events.trigger("change");

    assert_eq!(log.lock().unwrap().len(), 2);
}

#[test]
fn event_names_are_free_form() {
    let mut events = Eventing::new();
    let log = make_log();
    events.on("", logger(&log, "empty"));
    events.on("user:saved / ok", logger(&log, "odd"));

    events.trigger("");
    events.trigger("user:saved / ok");

    assert_eq!(*log.lock().unwrap(), vec!["empty", "odd"]);
}

// ── off ──────────────────────────────────────────────────────────

#[test]
fn off_removes_only_that_listener() {
    let mut events = Eventing::new();
    let log = make_log();
    events.on("change", logger(&log, "a"));
    let b = events.on("change", logger(&log, "b"));

    assert!(events.off("change", b));
    events.trigger("change");

    assert_eq!(*log.lock().unwrap(), vec!["a"]);
    assert_eq!(events.listener_count("change"), 1);
}

#[test]
fn double_off_is_safe() {
    let mut events = Eventing::new();
    let log = make_log();
    let id = events.on("change", logger(&log, "a"));

    assert!(events.off("change", id));
    assert!(!events.off("change", id));
    assert!(!events.off("other", id));
}

#[test]
fn listener_ids_are_unique_across_events() {
    let mut events = Eventing::new();
    let log = make_log();
    let a = events.on("x", logger(&log, "a"));
    let b = events.on("y", logger(&log, "b"));
    assert_ne!(a, b);
}

// ── Isolation ────────────────────────────────────────────────────

fn explode() {
    panic!("listener failure");
}

#[test]
fn panicking_callback_does_not_stop_the_rest() {
    let mut events = Eventing::new();
    let log = make_log();
    events.on("change", logger(&log, "before"));
    events.on("change", Box::new(explode));
    events.on("change", logger(&log, "after"));

    events.trigger("change");

    assert_eq!(*log.lock().unwrap(), vec!["before", "after"]);
}

// ── Ordering property ────────────────────────────────────────────

proptest! {
    #[test]
    fn trigger_runs_each_callback_once_in_order(count in 0usize..20) {
        let mut events = Eventing::new();
        let log = make_log();
        for i in 0..count {
            events.on("e", logger(&log, &i.to_string()));
        }

        events.trigger("e");

        let expected: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        prop_assert_eq!(log.lock().unwrap().clone(), expected);
    }
}
