/// Top bar of every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navbar {
    /// Brand only.
    Plain,
    /// Link back to the landing view.
    Back,
    /// Logout action, shown on the dashboard.
    Logout,
}

const BRAND: &str = "TechHub";

impl Navbar {
    #[must_use]
    pub fn render(self) -> String {
        let action = match self {
            Self::Plain => return BRAND.to_string(),
            Self::Back => "< back: techhub auth login",
            Self::Logout => "logout: techhub auth logout",
        };
        format!("{BRAND}    {action}")
    }
}
