//! Responsive layout engine.
//!
//! - `breakpoint`/`viewport`: width tiers and what gets measured
//! - `source`: host resize notifications and touch detection
//! - `observer`: the viewport store with scoped subscriptions
//! - `policy`: device-class flags and their memoization
//! - `context`: Leptos context and `use_*` hooks

pub mod breakpoint;
pub mod context;
pub mod observer;
pub mod policy;
pub mod source;
pub mod viewport;

pub use breakpoint::Breakpoint;
pub use context::{provide_responsive, provide_responsive_with, use_breakpoints, use_responsive, use_responsive_context, ResponsiveContext};
pub use observer::{BreakpointObserver, Subscription};
pub use policy::{DeviceClass, PolicyCache, ResponsivePolicy};
pub use source::{ListenerId, ViewportSource, WindowViewportSource};
pub use viewport::{Viewport, ViewportSnapshot};
