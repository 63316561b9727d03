//! Shared helpers for unit tests across the crate.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::fmt::Debug;
use std::sync::Once;

use crate::Sequence;

static TRACING: Once = Once::new();

/// Installs a tracing subscriber once per test binary when `RUST_LOG` is set.
pub(crate) fn init_tracing() {
    TRACING.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;
        use tracing_subscriber::{fmt, EnvFilter};

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_test_writer())
            .with(EnvFilter::from_default_env())
            .try_init();
    });
}

/// Collects a sequence, panicking on a traversal error.
pub(crate) fn list<T: 'static>(sequence: &Sequence<T>) -> Vec<T> {
    init_tracing();
    sequence.to_list().unwrap()
}

/// Asserts that two traversals of `sequence` both yield `expected`.
#[track_caller]
pub(crate) fn assert_twice<T>(sequence: &Sequence<T>, expected: &[T])
where
    T: PartialEq + Debug + 'static,
{
    assert_eq!(list(sequence), expected, "first traversal");
    assert_eq!(list(sequence), expected, "second traversal");
}
