// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the check-in screen against a scripted camera.

use goalsy_checkin::application::port::DeviceError;
use goalsy_checkin::config::CheckInSettings;
use goalsy_checkin::diagnostics::{DiagnosticsCollector, DiagnosticsHandle};
use goalsy_checkin::domain::capture::{CaptureSession, Facing, PartialCapturePolicy, SettleDelay};
use goalsy_checkin::domain::interaction::{PanOffset, ZoomScale};
use goalsy_checkin::infrastructure::{CameraCall, ScriptedCamera};
use goalsy_checkin::ui::checkin::{
    CheckIn, CloseReason, GestureEvent, InteractionState, Message, Phase, SequenceOutcome,
    ViewModel,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

struct Harness {
    camera: Rc<ScriptedCamera>,
    check_in: CheckIn<ScriptedCamera>,
    closes: Rc<RefCell<Vec<CloseReason>>>,
}

fn harness_with(camera: ScriptedCamera, settings: CheckInSettings) -> Harness {
    let camera = Rc::new(camera);
    let closes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&closes);
    let check_in = CheckIn::new(
        Rc::clone(&camera),
        &settings,
        DiagnosticsHandle::disconnected(),
        move |reason| sink.borrow_mut().push(reason),
    );
    Harness {
        camera,
        check_in,
        closes,
    }
}

fn harness(camera: ScriptedCamera) -> Harness {
    harness_with(camera, CheckInSettings::default())
}

fn tap_secondary(check_in: &CheckIn<ScriptedCamera>) {
    check_in.update(Message::Gesture(GestureEvent::SecondaryDown));
    check_in.update(Message::Gesture(GestureEvent::SecondaryUp));
}

fn primary_uri(check_in: &CheckIn<ScriptedCamera>) -> String {
    match check_in.view() {
        ViewModel::Review { primary, .. } => primary.uri().to_owned(),
        other => panic!("expected review, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn capture_swap_and_retake_scenario() {
    let h = harness(ScriptedCamera::new().then_ok("B1").then_ok("F1"));

    let outcome = h.check_in.capture().await;
    assert!(matches!(outcome, SequenceOutcome::Completed(_)));
    assert!(matches!(h.check_in.phase(), Phase::Reviewing(_)));
    assert!(!h.check_in.interaction().swapped());
    assert_eq!(primary_uri(&h.check_in), "B1");

    tap_secondary(&h.check_in);
    assert!(h.check_in.interaction().swapped());
    assert_eq!(primary_uri(&h.check_in), "F1");

    h.check_in.update(Message::Retake);
    assert_eq!(h.check_in.phase(), Phase::Capturing);
    assert_eq!(h.check_in.session(), CaptureSession::default());
}

#[tokio::test(start_paused = true)]
async fn back_failure_scenario() {
    let h = harness(ScriptedCamera::new().then_fail(DeviceError::PermissionRevoked));

    let outcome = h.check_in.capture().await;
    assert!(matches!(outcome, SequenceOutcome::Failed { .. }));
    assert_eq!(h.check_in.phase(), Phase::Capturing);
    let session = h.check_in.session();
    assert!(!session.busy);
    assert_eq!(session.attempt_count, 1);
    assert!(session.back.is_none());

    // The shutter is usable again right away
    assert!(matches!(
        h.check_in.view(),
        ViewModel::Camera {
            capture_enabled: true,
            ..
        }
    ));
    assert!(matches!(
        h.check_in.capture().await,
        SequenceOutcome::Completed(_)
    ));
}

#[tokio::test(start_paused = true)]
async fn rapid_triggers_run_exactly_one_sequence() {
    let h = harness(ScriptedCamera::new());
    let check_in = &h.check_in;

    let watcher = async {
        let mut busy_samples = Vec::new();
        for _ in 0..15 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            busy_samples.push(check_in.is_busy());
        }
        busy_samples
    };
    let (a, b, c, d, samples) = tokio::join!(
        check_in.capture(),
        check_in.capture(),
        check_in.capture(),
        check_in.capture(),
        watcher
    );

    let outcomes = [a, b, c, d];
    let completed = outcomes
        .iter()
        .filter(|o| matches!(o, SequenceOutcome::Completed(_)))
        .count();
    let skipped = outcomes
        .iter()
        .filter(|o| **o == SequenceOutcome::Skipped)
        .count();
    assert_eq!(completed, 1);
    assert_eq!(skipped, 3);
    assert_eq!(h.camera.captures().len(), 2);
    assert!(samples.iter().take(14).all(|busy| *busy));
    assert!(!check_in.is_busy());
    assert_eq!(check_in.session().attempt_count, 1);
}

#[tokio::test(start_paused = true)]
async fn front_capture_follows_switch_and_settle_delay() {
    let settle = SettleDelay::new(900);
    let h = harness_with(
        ScriptedCamera::new(),
        CheckInSettings {
            settle_delay: settle,
            ..CheckInSettings::default()
        },
    );
    let _ = h.check_in.capture().await;

    let calls = h.camera.calls();
    let switch_index = calls
        .iter()
        .position(|call| *call == CameraCall::SetFacing(Facing::Front))
        .expect("switch to front");
    let captures: Vec<(usize, Facing, tokio::time::Instant)> = calls
        .iter()
        .enumerate()
        .filter_map(|(i, call)| match call {
            CameraCall::Capture { facing, at } => Some((i, *facing, *at)),
            _ => None,
        })
        .collect();

    let (back_index, back_facing, back_at) = captures[0];
    let (front_index, front_facing, front_at) = captures[1];
    assert_eq!(back_facing, Facing::Back);
    assert_eq!(front_facing, Facing::Front);
    assert!(back_index < switch_index && switch_index < front_index);
    assert!(front_at - back_at >= settle.as_duration());
    assert_eq!(h.camera.facing(), Facing::Back);
}

#[tokio::test(start_paused = true)]
async fn review_requires_both_photos() {
    let h = harness(
        ScriptedCamera::new()
            .then_ok("B1")
            .then_fail(DeviceError::Timeout),
    );
    let outcome = h.check_in.capture().await;
    assert!(matches!(
        outcome,
        SequenceOutcome::Failed {
            error: DeviceError::Timeout,
            ..
        }
    ));
    assert_eq!(h.check_in.phase(), Phase::Capturing);
    // Both photos are dropped on failure by default
    assert!(h.check_in.session().back.is_none());
}

#[tokio::test(start_paused = true)]
async fn keep_back_policy_reuses_back_photo() {
    let h = harness_with(
        ScriptedCamera::new()
            .then_ok("B1")
            .then_fail(DeviceError::Busy)
            .then_ok("F2"),
        CheckInSettings {
            partial_capture: PartialCapturePolicy::KeepBack,
            ..CheckInSettings::default()
        },
    );
    let _ = h.check_in.capture().await;
    assert_eq!(h.check_in.phase(), Phase::Capturing);

    let _ = h.check_in.capture().await;
    let Phase::Reviewing(pair) = h.check_in.phase() else {
        panic!("expected review");
    };
    assert_eq!(pair.back.uri(), "B1");
    assert_eq!(pair.front.uri(), "F2");
}

#[tokio::test(start_paused = true)]
async fn pinch_values_are_clamped() {
    let h = harness(ScriptedCamera::new());
    let _ = h.check_in.capture().await;

    for raw in [-5.0, 0.0, 0.99, 1.0, 1.7, 3.0, 3.01, 100.0, f32::INFINITY] {
        h.check_in
            .update(Message::Gesture(GestureEvent::PinchChanged(raw)));
        let ViewModel::Review { scale, .. } = h.check_in.view() else {
            panic!("expected review");
        };
        assert!((1.0..=3.0).contains(&scale), "raw {raw} gave {scale}");
    }
}

#[tokio::test(start_paused = true)]
async fn secondary_visibility_across_zoom_and_long_press() {
    let h = harness(ScriptedCamera::new());
    let _ = h.check_in.capture().await;
    let start = Instant::now();

    let visible = |h: &Harness| h.check_in.interaction().secondary_visible();

    // neither
    assert!(visible(&h));

    // long-press only
    h.check_in
        .update(Message::Gesture(GestureEvent::PrimaryDown(start)));
    assert!(h.check_in.wants_ticks());
    h.check_in
        .update(Message::Tick(start + Duration::from_millis(500)));
    assert!(!visible(&h));

    // both
    h.check_in
        .update(Message::Gesture(GestureEvent::PinchChanged(2.0)));
    assert!(!visible(&h));

    // zoom only
    h.check_in.update(Message::Gesture(GestureEvent::PrimaryUp));
    assert!(h.check_in.interaction().zoom().is_zoomed());
    assert!(!visible(&h));

    // back to neither once the pinch settles
    let end = start + Duration::from_millis(600);
    h.check_in
        .update(Message::Gesture(GestureEvent::PinchEnded(end)));
    h.check_in
        .update(Message::Tick(end + Duration::from_millis(300)));
    assert_eq!(h.check_in.interaction().zoom(), ZoomScale::NEUTRAL);
    assert!(visible(&h));
    assert!(!h.check_in.wants_ticks());
}

#[tokio::test(start_paused = true)]
async fn double_tap_restores_primary() {
    let h = harness(ScriptedCamera::new().then_ok("B1").then_ok("F1"));
    let _ = h.check_in.capture().await;

    tap_secondary(&h.check_in);
    assert_eq!(primary_uri(&h.check_in), "F1");
    tap_secondary(&h.check_in);
    assert_eq!(primary_uri(&h.check_in), "B1");
    assert!(!h.check_in.interaction().swapped());
}

#[tokio::test(start_paused = true)]
async fn retake_resets_everything() {
    let h = harness(ScriptedCamera::new());
    let _ = h.check_in.capture().await;

    tap_secondary(&h.check_in);
    h.check_in
        .update(Message::Gesture(GestureEvent::PinchChanged(2.5)));
    h.check_in
        .update(Message::Gesture(GestureEvent::PanChanged(PanOffset::new(
            20.0, 10.0,
        ))));
    h.check_in
        .update(Message::Gesture(GestureEvent::PrimaryDown(Instant::now())));

    h.check_in.update(Message::Retake);
    assert_eq!(h.check_in.phase(), Phase::Capturing);
    assert_eq!(h.check_in.session(), CaptureSession::default());
    assert_eq!(h.check_in.interaction(), InteractionState::default());
    assert!(!h.check_in.wants_ticks());

    // A second round works from a clean slate
    assert!(matches!(
        h.check_in.capture().await,
        SequenceOutcome::Completed(_)
    ));
    assert_eq!(h.check_in.session().attempt_count, 1);
}

#[tokio::test(start_paused = true)]
async fn confirm_and_cancel_hand_control_back() {
    let h = harness(ScriptedCamera::new().then_ok("B1").then_ok("F1"));
    let _ = h.check_in.capture().await;
    h.check_in.update(Message::Confirm);

    let closes = h.closes.borrow();
    assert_eq!(closes.len(), 1);
    assert!(matches!(&closes[0], CloseReason::Confirmed(pair) if pair.back.uri() == "B1"));
    assert_eq!(h.check_in.update(Message::Cancel), goalsy_checkin::ui::checkin::Effect::None);
}

#[tokio::test(start_paused = true)]
async fn diagnostics_record_the_session() {
    let mut collector = DiagnosticsCollector::default();
    let camera = Rc::new(
        ScriptedCamera::new()
            .then_fail(DeviceError::Busy)
            .then_ok("B1")
            .then_ok("F1"),
    );
    let check_in = CheckIn::new(
        Rc::clone(&camera),
        &CheckInSettings::default(),
        collector.handle(),
        |_| {},
    );

    let _ = check_in.capture().await;
    let _ = check_in.capture().await;
    tap_secondary(&check_in);
    check_in.update(Message::Confirm);
    collector.process_pending();

    let summary = collector.summary();
    assert_eq!(summary.failed_sequences, 1);
    assert_eq!(summary.completed_sequences, 1);
    assert_eq!(collector.iter().filter(|e| e.is_failure()).count(), 1);
}
