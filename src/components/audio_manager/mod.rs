//! Audio Manager - media element control and instrumentation shared by the
//! player components. Browser side effects stay in `media`; everything else
//! is plain state that can be exercised without a DOM.

// Bounded newest-first event log.
mod event_log;
// Listener set with symmetric attach/detach.
mod listeners;
// Element lookup, transport commands and property reads.
mod media;
// Instrumented media lifecycle signals.
mod media_signals;
// Playback state transitions.
mod playback_state;

pub use event_log::*;
pub use listeners::*;
pub use media::*;
pub use media_signals::*;
pub use playback_state::*;
