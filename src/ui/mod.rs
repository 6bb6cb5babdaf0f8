// SPDX-License-Identifier: MPL-2.0
//! User interface layer: screen controllers and their interaction state.

pub mod checkin;
pub mod state;
