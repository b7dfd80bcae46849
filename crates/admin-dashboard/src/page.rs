//! Pages shown below the top bar

/// Pages of the dashboard
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    /// Landing page with the dashboard overview
    #[default]
    Dashboard,
}

impl Page {
    /// Heading shown at the top of the page
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "DASHBOARD",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Page::Dashboard => "Welcome to your dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_is_landing_page() {
        assert_eq!(Page::default(), Page::Dashboard);
    }

    #[test]
    fn test_dashboard_header_text() {
        assert_eq!(Page::Dashboard.title(), "DASHBOARD");
        assert_eq!(Page::Dashboard.subtitle(), "Welcome to your dashboard");
    }
}
