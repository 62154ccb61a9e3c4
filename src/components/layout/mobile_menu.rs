//! Mobile menu toggle state

/// Open/closed state of a header's compact menu panel
///
/// The only transition back to `Open` is an explicit toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self == MobileMenu::Open
    }

    /// Flip the state, returning the new value
    pub fn toggle(&mut self) -> MobileMenu {
        *self = match self {
            MobileMenu::Closed => MobileMenu::Open,
            MobileMenu::Open => MobileMenu::Closed,
        };
        *self
    }

    /// Close the menu; returns whether the state changed
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = MobileMenu::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(MobileMenu::default(), MobileMenu::Closed);
    }

    #[test]
    fn test_toggle_flips_once_per_call() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.toggle(), MobileMenu::Open);
        assert_eq!(menu.toggle(), MobileMenu::Closed);
        assert_eq!(menu.toggle(), MobileMenu::Open);
    }

    #[test]
    fn test_close_reports_change() {
        let mut menu = MobileMenu::Open;
        assert!(menu.close());
        assert!(!menu.close());
        assert_eq!(menu, MobileMenu::Closed);
    }
}
