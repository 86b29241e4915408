use crate::shared::config::BreakpointThresholds;

/// Named viewport-width tier, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Breakpoint {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    /// Lower bound (inclusive) of this tier in pixels.
    pub fn min_width(&self, thresholds: &BreakpointThresholds) -> u32 {
        match self {
            Self::Sm => thresholds.sm,
            Self::Md => thresholds.md,
            Self::Lg => thresholds.lg,
            Self::Xl => thresholds.xl,
            Self::Xxl => thresholds.xxl,
        }
    }

    /// Largest tier whose lower bound does not exceed `width`; `Sm` below all
    /// bounds. Bounds are inclusive, so `width == md` is already `Md`.
    pub fn from_width(width: u32, thresholds: &BreakpointThresholds) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| width >= bp.min_width(thresholds))
            .unwrap_or(Self::Sm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(width: u32) -> Breakpoint {
        Breakpoint::from_width(width, &BreakpointThresholds::default())
    }

    #[test]
    fn test_below_smallest_threshold_is_sm() {
        assert_eq!(bp(0), Breakpoint::Sm);
        assert_eq!(bp(320), Breakpoint::Sm);
        assert_eq!(bp(639), Breakpoint::Sm);
    }

    #[test]
    fn test_exact_thresholds_are_inclusive() {
        assert_eq!(bp(640), Breakpoint::Sm);
        assert_eq!(bp(767), Breakpoint::Sm);
        assert_eq!(bp(768), Breakpoint::Md);
        assert_eq!(bp(1023), Breakpoint::Md);
        assert_eq!(bp(1024), Breakpoint::Lg);
        assert_eq!(bp(1279), Breakpoint::Lg);
        assert_eq!(bp(1280), Breakpoint::Xl);
        assert_eq!(bp(1535), Breakpoint::Xl);
        assert_eq!(bp(1536), Breakpoint::Xxl);
        assert_eq!(bp(3840), Breakpoint::Xxl);
    }

    #[test]
    fn test_monotonic_in_width() {
        let mut previous = bp(0);
        for width in 1..=2000 {
            let current = bp(width);
            assert!(current >= previous, "width {width}: {current:?} < {previous:?}");
            previous = current;
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = BreakpointThresholds {
            sm: 500,
            md: 600,
            lg: 900,
            xl: 1200,
            xxl: 1800,
        };
        assert_eq!(Breakpoint::from_width(650, &thresholds), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1799, &thresholds), Breakpoint::Xl);
    }
}
