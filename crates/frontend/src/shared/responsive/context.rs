//! Leptos glue: provides the observer through context and exposes it to
//! components as signals.

use super::observer::{BreakpointObserver, Subscription};
use super::policy::{PolicyCache, ResponsivePolicy};
use super::source::{ViewportSource, WindowViewportSource};
use super::viewport::ViewportSnapshot;
use crate::shared::config::UiConfig;
use leptos::prelude::*;
use std::rc::Rc;

/// Responsive state shared through context.
#[derive(Clone, Copy)]
pub struct ResponsiveContext {
    observer: StoredValue<BreakpointObserver, LocalStorage>,
    /// Probed once; touch support does not change at runtime.
    pub touch_capable: bool,
    pub config: UiConfig,
}

impl ResponsiveContext {
    pub fn new(observer: BreakpointObserver, config: UiConfig) -> Self {
        let touch_capable = observer.touch_capable();
        Self {
            observer: StoredValue::new_local(observer),
            touch_capable,
            config,
        }
    }

    fn observer(&self) -> BreakpointObserver {
        self.observer.get_value()
    }
}

/// Creates the window-backed observer and provides it to descendants.
pub fn provide_responsive(config: UiConfig) -> ResponsiveContext {
    provide_responsive_with(Rc::new(WindowViewportSource::new()), config)
}

/// Same as [`provide_responsive`] with an explicit viewport source.
pub fn provide_responsive_with(source: Rc<dyn ViewportSource>, config: UiConfig) -> ResponsiveContext {
    let observer = BreakpointObserver::new(source, config.breakpoints, config.viewport.into());
    let ctx = ResponsiveContext::new(observer, config);
    log::info!("responsive context ready, touch={}", ctx.touch_capable);
    provide_context(ctx);
    ctx
}

pub fn use_responsive_context() -> ResponsiveContext {
    use_context::<ResponsiveContext>()
        .expect("ResponsiveContext not found. Call provide_responsive in the app root.")
}

/// Viewport snapshot of the calling component.
///
/// Subscribes once and unsubscribes when the component's owner is cleaned up.
pub fn use_breakpoints() -> Signal<ViewportSnapshot> {
    let observer = use_responsive_context().observer();
    let snapshot = RwSignal::new(observer.get_snapshot());

    let subscription: Subscription = observer.subscribe(move |next| snapshot.set(next));
    let guard = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        guard.try_update_value(|sub| sub.take());
    });

    snapshot.into()
}

/// Device-class flags of the calling component, recomputed only when the
/// breakpoint changes.
pub fn use_responsive() -> Memo<ResponsivePolicy> {
    let touch = use_responsive_context().touch_capable;
    let snapshot = use_breakpoints();
    let cache = StoredValue::new_local(PolicyCache::default());

    Memo::new(move |_| {
        let breakpoint = snapshot.get().breakpoint;
        cache
            .try_update_value(|c| *c.resolve(breakpoint, touch))
            .unwrap_or_else(|| ResponsivePolicy::derive(breakpoint, touch))
    })
}
