// SPDX-License-Identifier: MPL-2.0
//! Application root state and navigation between home and the check-in.
//!
//! The `App` struct owns the diagnostics collector and the settings, creates
//! a fresh check-in screen on demand and takes control back when the screen
//! closes. The close handoff travels through a channel so the screen never
//! needs a reference to its parent.

mod message;
mod screen;

pub use message::Message;
pub use screen::Screen;

use crate::application::port::CaptureDevice;
use crate::config::CheckInSettings;
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::capture::CapturedPair;
use crate::ui::checkin::{self, CheckIn, CloseReason};
use std::fmt;
use std::rc::Rc;
use tokio::sync::mpsc;

/// Root application state.
pub struct App<D> {
    device: Rc<D>,
    settings: CheckInSettings,
    screen: Screen,
    check_in: Option<Rc<CheckIn<D>>>,
    /// Pair handed over by the last confirmed check-in.
    last_check_in: Option<CapturedPair>,
    diagnostics: DiagnosticsCollector,
    close_tx: mpsc::UnboundedSender<CloseReason>,
    close_rx: mpsc::UnboundedReceiver<CloseReason>,
}

impl<D> fmt::Debug for App<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_last_check_in", &self.last_check_in.is_some())
            .finish_non_exhaustive()
    }
}

impl<D: CaptureDevice> App<D> {
    #[must_use]
    pub fn new(device: Rc<D>, settings: CheckInSettings) -> Self {
        let (close_tx, close_rx) = mpsc::unbounded_channel();
        Self {
            device,
            diagnostics: DiagnosticsCollector::new(settings.diagnostics_capacity),
            settings,
            screen: Screen::Home,
            check_in: None,
            last_check_in: None,
            close_tx,
            close_rx,
        }
    }

    pub fn update(&mut self, message: Message) -> checkin::Effect {
        let effect = match message {
            Message::StartCheckIn => self.start_check_in(),
            Message::CheckIn(message) => match &self.check_in {
                Some(check_in) => check_in.update(message),
                None => checkin::Effect::None,
            },
            Message::Tick(now) => match &self.check_in {
                Some(check_in) if check_in.wants_ticks() => {
                    check_in.update(checkin::Message::Tick(now))
                }
                _ => checkin::Effect::None,
            },
        };
        self.sync();
        effect
    }

    fn start_check_in(&mut self) -> checkin::Effect {
        if self.screen == Screen::CheckIn {
            return checkin::Effect::None;
        }
        let close_tx = self.close_tx.clone();
        let check_in = CheckIn::new(
            Rc::clone(&self.device),
            &self.settings,
            self.diagnostics.handle(),
            move |reason| {
                // The receiver lives as long as the app.
                let _ = close_tx.send(reason);
            },
        );
        log::info!("check-in started");
        self.check_in = Some(Rc::new(check_in));
        self.screen = Screen::CheckIn;
        checkin::Effect::Changed
    }

    /// Applies pending close handoffs and drains diagnostics.
    ///
    /// Hosts call this after awaiting a capture or permission request, since
    /// those complete outside [`App::update`].
    pub fn sync(&mut self) {
        while let Ok(reason) = self.close_rx.try_recv() {
            match reason {
                CloseReason::Confirmed(pair) => {
                    log::info!("check-in confirmed ({} / {})", pair.back, pair.front);
                    self.last_check_in = Some(pair);
                }
                CloseReason::Cancelled => log::info!("check-in cancelled"),
            }
            self.check_in = None;
            self.screen = Screen::Home;
        }
        self.diagnostics.process_pending();
    }

    /// The active check-in screen, shared so async work can run on it.
    #[must_use]
    pub fn check_in(&self) -> Option<Rc<CheckIn<D>>> {
        self.check_in.clone()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn last_check_in(&self) -> Option<&CapturedPair> {
        self.last_check_in.as_ref()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn settings(&self) -> &CheckInSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ScriptedCamera;
    use crate::ui::checkin::Phase;

    fn app() -> App<ScriptedCamera> {
        App::new(
            Rc::new(ScriptedCamera::new().then_ok("B1").then_ok("F1")),
            CheckInSettings::default(),
        )
    }

    #[test]
    fn starts_on_home() {
        let app = app();
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.check_in().is_none());
    }

    #[test]
    fn start_check_in_opens_screen_once() {
        let mut app = app();
        assert_eq!(app.update(Message::StartCheckIn), checkin::Effect::Changed);
        let first = app.check_in().expect("screen");
        assert_eq!(app.update(Message::StartCheckIn), checkin::Effect::None);
        assert!(Rc::ptr_eq(&first, &app.check_in().expect("screen")));
        assert_eq!(first.phase(), Phase::Capturing);
    }

    #[test]
    fn cancel_returns_home_without_pair() {
        let mut app = app();
        app.update(Message::StartCheckIn);
        app.update(Message::CheckIn(checkin::Message::Cancel));
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.last_check_in().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_keeps_pair_and_records_diagnostics() {
        let mut app = app();
        app.update(Message::StartCheckIn);
        let check_in = app.check_in().expect("screen");
        let _ = check_in.capture().await;
        app.update(Message::CheckIn(checkin::Message::Confirm));

        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(app.last_check_in().map(|p| p.back.uri()), Some("B1"));
        let summary = app.diagnostics().summary();
        assert_eq!(summary.completed_sequences, 1);
    }
}
