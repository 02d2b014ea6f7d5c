/// Labeled text field with optional validation error beneath it.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    /// Replace the value with one `*` per character.
    pub masked: bool,
}

impl<'a> Input<'a> {
    #[must_use]
    pub const fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            error: None,
            masked: false,
        }
    }

    #[must_use]
    pub const fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    #[must_use]
    pub const fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        let shown = if self.value.is_empty() {
            String::from("(empty)")
        } else if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        };

        match self.error {
            Some(error) => format!("{}: {shown}\n  ! {error}", self.label),
            None => format!("{}: {shown}", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Input;

    #[test]
    fn renders_label_and_value() {
        assert_eq!(Input::new("Email", "a@b.co").render(), "Email: a@b.co");
    }

    #[test]
    fn masks_secret_values() {
        assert_eq!(
            Input::new("Password", "abc").masked().render(),
            "Password: ***"
        );
    }

    #[test]
    fn shows_error_under_field() {
        let rendered = Input::new("Email", "")
            .error(Some("Email is required"))
            .render();
        assert_eq!(rendered, "Email: (empty)\n  ! Email is required");
    }
}
