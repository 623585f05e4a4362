//! Small enums shared across the app module.

/// Which part of the browse screen receives key input when no overlay is
/// open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Forum list / recent posts navigation
    #[default]
    Browse,
    /// Header search box
    Search,
}

/// Entries in the nav drawer (the mobile-menu analog).
pub const NAV_ENTRIES: &[&str] = &["Home", "Forums", "Recent Posts", "Members", "About"];
