//! Breakpoint observer: one viewport store, many subscribers.

use super::source::{ListenerId, ViewportSource};
use super::viewport::{Viewport, ViewportSnapshot};
use crate::shared::config::BreakpointThresholds;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn(ViewportSnapshot)>;

struct Inner {
    source: Rc<dyn ViewportSource>,
    thresholds: BreakpointThresholds,
    snapshot: Cell<ViewportSnapshot>,
    subscribers: RefCell<BTreeMap<u64, Callback>>,
    next_id: Cell<u64>,
    registration: Cell<Option<ListenerId>>,
}

/// Single source of truth for the viewport size and its breakpoint.
///
/// Holds one host listener while it has at least one subscriber and releases
/// it when the last [`Subscription`] is dropped. Subscribers only read; the
/// snapshot is written by [`BreakpointObserver::refresh`] alone.
#[derive(Clone)]
pub struct BreakpointObserver {
    inner: Rc<Inner>,
}

impl BreakpointObserver {
    /// `initial` is published until the first measurement.
    pub fn new(
        source: Rc<dyn ViewportSource>,
        thresholds: BreakpointThresholds,
        initial: Viewport,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                source,
                thresholds,
                snapshot: Cell::new(ViewportSnapshot::classify(initial, &thresholds)),
                subscribers: RefCell::new(BTreeMap::new()),
                next_id: Cell::new(0),
                registration: Cell::new(None),
            }),
        }
    }

    pub fn get_snapshot(&self) -> ViewportSnapshot {
        self.inner.snapshot.get()
    }

    pub fn touch_capable(&self) -> bool {
        self.inner.source.touch_capable()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Registers `callback` for snapshot changes and takes a fresh measurement.
    ///
    /// The subscription ends when the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(ViewportSnapshot) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .insert(id, Rc::new(callback));

        self.observe();
        self.refresh();

        Subscription {
            id,
            observer: Rc::downgrade(&self.inner),
        }
    }

    /// Ensures exactly one host listener is registered.
    fn observe(&self) {
        if self.inner.registration.get().is_some() {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let listener = Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                BreakpointObserver { inner }.refresh();
            }
        });
        let id = self.inner.source.add_listener(listener);
        self.inner.registration.set(Some(id));
    }

    /// Re-measures the viewport and notifies subscribers if anything changed.
    ///
    /// Only the latest measurement matters; intermediate sizes that were never
    /// measured are never published.
    pub fn refresh(&self) {
        let Some(viewport) = self.inner.source.measure() else {
            return;
        };
        let next = ViewportSnapshot::classify(viewport, &self.inner.thresholds);
        let previous = self.inner.snapshot.replace(next);
        if previous == next {
            return;
        }
        if previous.breakpoint != next.breakpoint {
            log::debug!(
                "breakpoint {} -> {} at {}px",
                previous.breakpoint.as_str(),
                next.breakpoint.as_str(),
                viewport.width
            );
        }

        // Callbacks may subscribe or unsubscribe; call them outside the borrow.
        let callbacks: Vec<Callback> = self.inner.subscribers.borrow().values().cloned().collect();
        for callback in callbacks {
            callback(next);
        }
    }
}

impl Inner {
    fn unsubscribe(&self, id: u64) {
        let now_empty = {
            let mut subscribers = self.subscribers.borrow_mut();
            subscribers.remove(&id);
            subscribers.is_empty()
        };
        if now_empty {
            if let Some(listener) = self.registration.take() {
                self.source.remove_listener(listener);
            }
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(listener) = self.registration.take() {
            self.source.remove_listener(listener);
        }
    }
}

/// Guard for one subscriber. Dropping it unsubscribes exactly once.
pub struct Subscription {
    id: u64,
    observer: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.observer.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::responsive::breakpoint::Breakpoint;
    use crate::shared::responsive::source::testing::SpyViewportSource;

    fn observer(spy: &Rc<SpyViewportSource>) -> BreakpointObserver {
        BreakpointObserver::new(
            spy.clone(),
            BreakpointThresholds::default(),
            Viewport::default(),
        )
    }

    #[test]
    fn test_default_before_first_measurement() {
        let spy = SpyViewportSource::with_viewport(375, 812);
        let observer = observer(&spy);
        assert_eq!(observer.get_snapshot().breakpoint, Breakpoint::Lg);
        assert_eq!(spy.active_listeners(), 0);
    }

    #[test]
    fn test_subscribe_measures_immediately() {
        let spy = SpyViewportSource::with_viewport(375, 812);
        let observer = observer(&spy);
        let _sub = observer.subscribe(|_| {});
        assert_eq!(observer.get_snapshot().viewport, Viewport::new(375, 812));
        assert_eq!(observer.get_snapshot().breakpoint, Breakpoint::Sm);
    }

    #[test]
    fn test_listener_released_after_unmount() {
        let spy = SpyViewportSource::with_viewport(1280, 800);
        let observer = observer(&spy);

        let sub = observer.subscribe(|_| {});
        assert_eq!(spy.active_listeners(), 1);
        drop(sub);

        assert_eq!(spy.active_listeners(), 0);
        assert_eq!(spy.registrations.get(), 1);
        assert_eq!(spy.releases.get(), 1);
        assert_eq!(observer.subscriber_count(), 0);
    }

    #[test]
    fn test_one_host_listener_for_many_subscribers() {
        let spy = SpyViewportSource::with_viewport(1280, 800);
        let observer = observer(&spy);

        let a = observer.subscribe(|_| {});
        let b = observer.subscribe(|_| {});
        assert_eq!(spy.active_listeners(), 1);

        drop(a);
        assert_eq!(spy.active_listeners(), 1);
        drop(b);
        assert_eq!(spy.active_listeners(), 0);

        // Re-mounting registers again and releases again.
        let c = observer.subscribe(|_| {});
        drop(c);
        assert_eq!(spy.registrations.get(), 2);
        assert_eq!(spy.releases.get(), 2);
        assert_eq!(spy.active_listeners(), 0);
    }

    #[test]
    fn test_publishes_to_all_subscribers() {
        let spy = SpyViewportSource::with_viewport(1280, 800);
        let observer = observer(&spy);
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));

        let _a = observer.subscribe({
            let seen = seen_a.clone();
            move |s| seen.borrow_mut().push(s.breakpoint)
        });
        let _b = observer.subscribe({
            let seen = seen_b.clone();
            move |s| seen.borrow_mut().push(s.breakpoint)
        });

        spy.resize(700, 900);
        assert_eq!(seen_a.borrow().last(), Some(&Breakpoint::Sm));
        assert_eq!(seen_b.borrow().last(), Some(&Breakpoint::Sm));
    }

    #[test]
    fn test_unchanged_measurement_does_not_notify() {
        let spy = SpyViewportSource::with_viewport(1280, 800);
        let observer = observer(&spy);
        let calls = Rc::new(Cell::new(0));
        let _sub = observer.subscribe({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });
        let after_subscribe = calls.get();

        spy.fire();
        spy.fire();
        assert_eq!(calls.get(), after_subscribe);
    }

    #[test]
    fn test_height_change_is_published() {
        let spy = SpyViewportSource::with_viewport(1280, 800);
        let observer = observer(&spy);
        let _sub = observer.subscribe(|_| {});
        spy.resize(1280, 600);
        assert_eq!(observer.get_snapshot().viewport.height, 600);
        assert_eq!(observer.get_snapshot().breakpoint, Breakpoint::Xl);
    }

    #[test]
    fn test_coalesced_events_use_latest_width() {
        let spy = SpyViewportSource::with_viewport(1280, 800);
        let observer = observer(&spy);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = observer.subscribe({
            let seen = seen.clone();
            move |s| seen.borrow_mut().push(s.viewport.width)
        });
        seen.borrow_mut().clear();

        spy.resize_silently(500, 800);
        spy.resize_silently(900, 800);
        spy.resize(1600, 800);
        assert_eq!(*seen.borrow(), vec![1600]);
        assert_eq!(observer.get_snapshot().breakpoint, Breakpoint::Xxl);
    }

    #[test]
    fn test_dropping_observer_releases_listener() {
        let spy = SpyViewportSource::with_viewport(1280, 800);
        let sub = {
            let observer = observer(&spy);
            observer.subscribe(|_| {})
        };
        assert_eq!(spy.active_listeners(), 0);
        drop(sub);
        assert_eq!(spy.registrations.get(), 1);
        assert_eq!(spy.releases.get(), 1);
    }
}
