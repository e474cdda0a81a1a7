//! Navigation entries and the active-route matcher.

/// Icon identifiers for navigation entries. The UI maps each to an SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Briefcase,
    Search,
    BookOpen,
    Dashboard,
    Users,
    UserCheck,
    Message,
    Settings,
    FileText,
    Bell,
    Shield,
    Folder,
    Calendar,
    Clock,
    Package,
}

/// A single entry in a menu, sidebar or bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
    /// Optional count rendered as a badge next to the label.
    pub badge: Option<u32>,
}

/// An entry is active only when its path equals the current location exactly.
pub fn is_active(current: &str, item_path: &str) -> bool {
    current == item_path
}

/// The first entry whose path matches the current location.
pub fn active_item<'a>(items: &'a [NavItem], current: &str) -> Option<&'a NavItem> {
    items.iter().find(|item| is_active(current, item.path))
}

/// Label of the active entry, used as the dashboard header title.
pub fn page_title(items: &[NavItem], current: &str) -> Option<&'static str> {
    active_item(items, current).map(|item| item.label)
}
