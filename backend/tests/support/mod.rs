#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use festival_schedule::models::{
    ClockTime, Piece, Registration, RegistrationKind, RegistrationStatus,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores variables on unwind and serializes access to process-global
/// env vars, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Path of the sample registrations export shipped with the crate.
pub fn sample_registrations_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/registrations.sample.json")
}

pub fn at(hour: u32, minute: u32) -> ClockTime {
    ClockTime::from_hm(hour, minute).unwrap()
}

pub fn piece(name: &str, section_label: &str) -> Piece {
    Piece {
        name: name.to_string(),
        artist: String::new(),
        section_label: section_label.to_string(),
    }
}

/// A paid individual registration with one piece.
pub fn individual(id: &str, exact_age: u32, section_label: &str) -> Registration {
    Registration {
        id: id.to_string(),
        kind: RegistrationKind::Individual,
        participant_name: format!("Solist {}", id),
        age_category: String::new(),
        exact_age: Some(exact_age),
        teacher_or_coordinator: String::new(),
        institution: String::new(),
        pieces: vec![piece(&format!("Piesa {}", id), section_label)],
        status: RegistrationStatus::Paid,
    }
}

/// A confirmed group registration.
pub fn group(id: &str, age_category: &str, pieces: Vec<Piece>) -> Registration {
    Registration {
        id: id.to_string(),
        kind: RegistrationKind::Group,
        participant_name: format!("Grup {}", id),
        age_category: age_category.to_string(),
        exact_age: None,
        teacher_or_coordinator: String::new(),
        institution: String::new(),
        pieces,
        status: RegistrationStatus::Confirmed,
    }
}

pub fn with_status(mut registration: Registration, status: RegistrationStatus) -> Registration {
    registration.status = status;
    registration
}
