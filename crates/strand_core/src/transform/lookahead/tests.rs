use super::*;
use pretty_assertions::assert_eq;

#[test]
fn removal_is_granted_once_per_yield() {
    let mut removal = Removal::default();
    assert_eq!(removal.take(), Err(nothing_to_remove()));
    removal.yielded();
    assert_eq!(removal.take(), Ok(()));
    assert_eq!(removal.take(), Err(nothing_to_remove()));
}

#[test]
fn a_pull_after_the_yield_revokes_removal() {
    let mut removal = Removal::default();
    removal.yielded();
    removal.pulled();
    assert_eq!(removal.take(), Err(remove_after_lookahead()));
    assert_eq!(removal.take(), Err(remove_after_lookahead()));
    removal.yielded();
    assert_eq!(removal.take(), Ok(()));
}
