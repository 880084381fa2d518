// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Event and timer runtime the page script runs inside

mod event;
mod timers;

pub use event::{Dialog, DialogKind, DispatchOutcome, ReplayStep, UiEvent};
pub use timers::TimerQueue;
