use super::breakpoint::Breakpoint;
use std::rc::Rc;

/// UI decision flags derived from the breakpoint and touch support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsivePolicy {
    pub breakpoint: Breakpoint,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_small_screen: bool,
    pub is_large_desktop: bool,
    /// Independent of the breakpoint.
    pub is_touch_device: bool,
}

impl ResponsivePolicy {
    pub fn derive(breakpoint: Breakpoint, touch_capable: bool) -> Self {
        let is_mobile = breakpoint == Breakpoint::Sm;
        let is_tablet = breakpoint == Breakpoint::Md;
        Self {
            breakpoint,
            is_mobile,
            is_tablet,
            is_desktop: matches!(breakpoint, Breakpoint::Lg | Breakpoint::Xl | Breakpoint::Xxl),
            is_small_screen: is_mobile || is_tablet,
            is_large_desktop: breakpoint == Breakpoint::Xxl,
            is_touch_device: touch_capable,
        }
    }

    pub fn device_class(&self) -> DeviceClass {
        if self.is_mobile {
            DeviceClass::Mobile
        } else if self.is_tablet {
            DeviceClass::Tablet
        } else if self.is_large_desktop {
            DeviceClass::LargeDesktop
        } else {
            DeviceClass::Desktop
        }
    }
}

impl Default for ResponsivePolicy {
    fn default() -> Self {
        Self::derive(Breakpoint::default(), false)
    }
}

/// Key for the discrete layout lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
    LargeDesktop,
}

/// Memoizes [`ResponsivePolicy::derive`] on `(breakpoint, touch)`.
///
/// Returns the same `Rc` while the key is unchanged, so identity comparisons
/// downstream stay stable.
#[derive(Debug, Default)]
pub struct PolicyCache {
    entry: Option<((Breakpoint, bool), Rc<ResponsivePolicy>)>,
    computations: usize,
}

impl PolicyCache {
    pub fn resolve(&mut self, breakpoint: Breakpoint, touch_capable: bool) -> Rc<ResponsivePolicy> {
        let key = (breakpoint, touch_capable);
        if let Some((cached_key, policy)) = &self.entry {
            if *cached_key == key {
                return policy.clone();
            }
        }
        self.computations += 1;
        let policy = Rc::new(ResponsivePolicy::derive(breakpoint, touch_capable));
        self.entry = Some((key, policy.clone()));
        policy
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// How many times `derive` actually ran.
    pub fn computations(&self) -> usize {
        self.computations
    }
}
