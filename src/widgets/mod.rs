// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Presentation widgets driven by page events

mod carousel;
mod nav;
mod scroll;

pub use carousel::Carousel;
pub use nav::NavToggle;
pub use scroll::ScrollWatcher;
