// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::checkin;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    StartCheckIn,
    CheckIn(checkin::Message),
    /// Frame tick from the host's animation clock.
    Tick(Instant),
}
