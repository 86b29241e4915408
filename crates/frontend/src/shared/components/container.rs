//! Page container whose padding and width step with the device class.

use crate::shared::responsive::{use_responsive, DeviceClass};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSpacing {
    pub padding: &'static str,
    pub max_width: &'static str,
}

impl ContainerSpacing {
    /// Fixed lookup, no interpolation between classes.
    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Mobile => Self {
                padding: "12px 16px",
                max_width: "100%",
            },
            DeviceClass::Tablet => Self {
                padding: "16px 24px",
                max_width: "768px",
            },
            DeviceClass::Desktop => Self {
                padding: "24px 32px",
                max_width: "1280px",
            },
            DeviceClass::LargeDesktop => Self {
                padding: "32px 48px",
                max_width: "1536px",
            },
        }
    }

    pub fn style(&self) -> String {
        format!(
            "padding: {}; max-width: {}; margin: 0 auto; width: 100%;",
            self.padding, self.max_width
        )
    }
}

#[component]
pub fn ResponsiveContainer(children: Children) -> impl IntoView {
    let policy = use_responsive();
    let style = move || ContainerSpacing::for_class(policy.get().device_class()).style();

    view! {
        <div class="responsive-container" style=style>
            {children()}
        </div>
    }
}

/// Columns of a card grid per device class.
pub fn grid_columns(class: DeviceClass) -> u32 {
    match class {
        DeviceClass::Mobile => 1,
        DeviceClass::Tablet => 2,
        DeviceClass::Desktop => 3,
        DeviceClass::LargeDesktop => 4,
    }
}

#[component]
pub fn ResponsiveGrid(children: Children) -> impl IntoView {
    let policy = use_responsive();
    let style = move || {
        format!(
            "display: grid; gap: 16px; grid-template-columns: repeat({}, minmax(0, 1fr));",
            grid_columns(policy.get().device_class())
        )
    };

    view! {
        <div class="responsive-grid" style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::responsive::{Breakpoint, ResponsivePolicy};

    #[test]
    fn test_spacing_steps_per_class() {
        let mobile = ContainerSpacing::for_class(DeviceClass::Mobile);
        assert_eq!(mobile.max_width, "100%");
        let large = ContainerSpacing::for_class(DeviceClass::LargeDesktop);
        assert_eq!(large.padding, "32px 48px");
        assert!(large.style().contains("max-width: 1536px"));
    }

    #[test]
    fn test_xl_uses_default_desktop_spacing() {
        let xl = ResponsivePolicy::derive(Breakpoint::Xl, false).device_class();
        let lg = ResponsivePolicy::derive(Breakpoint::Lg, false).device_class();
        assert_eq!(ContainerSpacing::for_class(xl), ContainerSpacing::for_class(lg));
    }

    #[test]
    fn test_grid_columns_increase_with_width() {
        let columns: Vec<u32> = Breakpoint::ALL
            .into_iter()
            .map(|bp| grid_columns(ResponsivePolicy::derive(bp, false).device_class()))
            .collect();
        assert_eq!(columns, vec![1, 2, 3, 3, 4]);
    }
}
