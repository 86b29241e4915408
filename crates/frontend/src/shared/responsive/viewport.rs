use super::breakpoint::Breakpoint;
use crate::shared::config::{BreakpointThresholds, ViewportConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

impl From<ViewportConfig> for Viewport {
    fn from(config: ViewportConfig) -> Self {
        Self::new(config.width, config.height)
    }
}

/// What the observer publishes: the measured viewport and its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSnapshot {
    pub viewport: Viewport,
    pub breakpoint: Breakpoint,
}

impl ViewportSnapshot {
    pub fn classify(viewport: Viewport, thresholds: &BreakpointThresholds) -> Self {
        Self {
            viewport,
            breakpoint: Breakpoint::from_width(viewport.width, thresholds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_lg() {
        let snapshot = ViewportSnapshot::default();
        assert_eq!(snapshot.viewport, Viewport::new(1024, 768));
        assert_eq!(snapshot.breakpoint, Breakpoint::Lg);
        assert_eq!(
            ViewportSnapshot::classify(Viewport::default(), &BreakpointThresholds::default()),
            snapshot
        );
    }
}
