use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdCalendar, LdClock, LdFileText, LdFolder, LdHome,
    LdLayoutDashboard, LdMessageSquare, LdPackage, LdSearch, LdSettings, LdShield, LdUserCheck,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::NavIcon;

/// Lucide glyph for a navigation icon.
#[component]
pub fn NavGlyph(icon: NavIcon, #[props(default = 18)] size: u32) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon::<LdHome> { icon: LdHome, width: size, height: size } },
        NavIcon::Briefcase => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: size, height: size } },
        NavIcon::Search => rsx! { Icon::<LdSearch> { icon: LdSearch, width: size, height: size } },
        NavIcon::BookOpen => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: size, height: size } },
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        NavIcon::UserCheck => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: size, height: size } },
        NavIcon::Message => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: size, height: size } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        NavIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        NavIcon::Bell => rsx! { Icon::<LdBell> { icon: LdBell, width: size, height: size } },
        NavIcon::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
        NavIcon::Folder => rsx! { Icon::<LdFolder> { icon: LdFolder, width: size, height: size } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        NavIcon::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
        NavIcon::Package => rsx! { Icon::<LdPackage> { icon: LdPackage, width: size, height: size } },
    }
}
