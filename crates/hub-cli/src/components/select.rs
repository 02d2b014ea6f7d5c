/// Labeled choice among fixed options; the chosen one is bracketed.
#[derive(Debug, Clone, Copy)]
pub struct Select<'a> {
    pub label: &'a str,
    pub options: &'a [&'a str],
    pub selected: Option<&'a str>,
    pub error: Option<&'a str>,
}

impl<'a> Select<'a> {
    #[must_use]
    pub const fn new(label: &'a str, options: &'a [&'a str], selected: Option<&'a str>) -> Self {
        Self {
            label,
            options,
            selected,
            error: None,
        }
    }

    #[must_use]
    pub const fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        let choices = self
            .options
            .iter()
            .map(|option| {
                if self.selected == Some(*option) {
                    format!("[{option}]")
                } else {
                    (*option).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        match self.error {
            Some(error) => format!("{}: {choices}\n  ! {error}", self.label),
            None => format!("{}: {choices}", self.label),
        }
    }
}
