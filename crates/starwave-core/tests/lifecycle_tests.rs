// Host-side tests for mount/unmount sequencing around an async init.

use starwave_core::{MountGate, MountOutcome, MountRequest};

fn start(gate: &mut MountGate) -> starwave_core::MountTicket {
    match gate.request_mount() {
        MountRequest::Start(ticket) => ticket,
        other => panic!("expected a fresh init, got {other:?}"),
    }
}

#[test]
fn mount_installs_once() {
    let mut gate = MountGate::default();
    let ticket = start(&mut gate);
    assert!(gate.is_mounting());
    assert_eq!(gate.finish(ticket), MountOutcome::Install);
    assert!(gate.is_mounted());
    assert_eq!(gate.request_mount(), MountRequest::Mounted);
}

#[test]
fn unmount_during_init_discards() {
    let mut gate = MountGate::default();
    let ticket = start(&mut gate);
    assert!(!gate.unmount());
    assert!(!gate.is_current(ticket));
    assert_eq!(gate.finish(ticket), MountOutcome::Discard);
    assert!(!gate.is_mounted());
    assert!(!gate.is_mounting());
}

#[test]
fn remount_during_init_restarts_under_new_ticket() {
    let mut gate = MountGate::default();
    let first = start(&mut gate);
    gate.unmount();
    assert_eq!(gate.request_mount(), MountRequest::Busy);

    let MountOutcome::Restart(second) = gate.finish(first) else {
        panic!("last call was mount; the scene must come back");
    };
    assert!(gate.is_current(second));
    assert!(gate.is_mounting());
    assert_eq!(gate.finish(second), MountOutcome::Install);
    assert!(gate.is_mounted());
}

#[test]
fn last_call_wins_when_unmount_follows_remount() {
    let mut gate = MountGate::default();
    let ticket = start(&mut gate);
    gate.unmount();
    gate.request_mount();
    gate.unmount();
    assert_eq!(gate.finish(ticket), MountOutcome::Discard);
    assert!(matches!(gate.request_mount(), MountRequest::Start(_)));
}

#[test]
fn repeated_mount_during_init_installs_once() {
    let mut gate = MountGate::default();
    let ticket = start(&mut gate);
    assert_eq!(gate.request_mount(), MountRequest::Busy);
    assert_eq!(gate.finish(ticket), MountOutcome::Install);
    assert_eq!(gate.request_mount(), MountRequest::Mounted);
}

#[test]
fn failed_init_releases_or_retries() {
    let mut gate = MountGate::default();
    let ticket = start(&mut gate);
    assert_eq!(gate.fail(ticket), None);
    assert!(!gate.is_mounting());

    let ticket = start(&mut gate);
    gate.unmount();
    gate.request_mount();
    let retry = gate.fail(ticket).expect("a mount is still owed");
    assert_eq!(gate.finish(retry), MountOutcome::Install);
}

#[test]
fn unmount_reports_installed_scene() {
    let mut gate = MountGate::default();
    let ticket = start(&mut gate);
    gate.finish(ticket);
    assert!(gate.unmount());
    assert!(!gate.unmount());
}
