// Symmetric attach/detach of the media signal listener set.
use std::rc::Rc;

use super::{MediaSignal, SignalDetail, MEDIA_SIGNALS};

/// Callback invoked for every instrumented signal occurrence.
pub type SignalHandler = Rc<dyn Fn(MediaSignal, SignalDetail)>;

/// Something media signals can be subscribed on.
pub trait SignalTarget {
    type Handle;

    /// Register `handler` for `signal`; `None` if the target refused it.
    fn subscribe(&self, signal: MediaSignal, handler: SignalHandler) -> Option<Self::Handle>;

    fn unsubscribe(&self, signal: MediaSignal, handle: &Self::Handle);
}

/// Counts from a single rebind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebindReport {
    pub removed: usize,
    pub attached: usize,
}

/// The live listener set for one media element. At most one full set is
/// attached at a time; rebinding always detaches the previous set first.
pub struct ListenerSet<T: SignalTarget> {
    target: Option<T>,
    attached: Vec<(MediaSignal, T::Handle)>,
}

impl<T: SignalTarget> Default for ListenerSet<T> {
    fn default() -> Self {
        Self {
            target: None,
            attached: Vec::new(),
        }
    }
}

impl<T: SignalTarget> ListenerSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every listener from the current target, then attach a fresh
    /// set to `target`.
    pub fn rebind(&mut self, target: T, handler: SignalHandler) -> RebindReport {
        let removed = self.detach_all();

        for signal in MEDIA_SIGNALS {
            if let Some(handle) = target.subscribe(signal, handler.clone()) {
                self.attached.push((signal, handle));
            }
        }
        self.target = Some(target);

        RebindReport {
            removed,
            attached: self.attached.len(),
        }
    }

    /// Remove every listener and forget the target. Returns how many were removed.
    pub fn detach_all(&mut self) -> usize {
        let removed = self.attached.len();
        if let Some(target) = self.target.take() {
            for (signal, handle) in self.attached.drain(..) {
                target.unsubscribe(signal, &handle);
            }
        }
        self.attached.clear();
        removed
    }

    #[cfg(test)]
    pub fn active(&self) -> usize {
        self.attached.len()
    }

    #[cfg(test)]
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }
}

impl<T: SignalTarget> Drop for ListenerSet<T> {
    fn drop(&mut self) {
        self.detach_all();
    }
}
