pub mod input;
pub mod select;
pub mod textarea;

pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

/// Class list for a form control, flagging it when its value is invalid.
pub fn control_class(base: &str, invalid: bool, extra: &str) -> String {
    let mut class = base.to_string();
    if invalid {
        class.push(' ');
        class.push_str(base);
        class.push_str("--invalid");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_class() {
        assert_eq!(control_class("form__input", false, ""), "form__input");
        assert_eq!(
            control_class("form__input", true, ""),
            "form__input form__input--invalid"
        );
        assert_eq!(
            control_class("form__select", true, "wide"),
            "form__select form__select--invalid wide"
        );
    }
}
