//! Static site content: every menu, category list and marketing blurb the UI
//! renders lives here, in one place.

use crate::nav::{NavIcon, NavItem};
use crate::paths;

/// Category tile on the homepage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeCategory {
    pub label: &'static str,
    pub icon: NavIcon,
    pub open_jobs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// Star rating out of five.
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub published_on: &'static str,
    pub read_minutes: u32,
}

/// All static tables, grouped so view code never re-declares a list.
#[derive(Debug)]
pub struct SiteContent {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub marketing_nav: &'static [NavItem],
    pub employer_sidebar: &'static [NavItem],
    pub employer_mobile_nav: &'static [NavItem],
    pub admin_sidebar: &'static [NavItem],
    /// Labels assigned to listing cards by position.
    pub job_categories: &'static [&'static str],
    pub home_categories: &'static [HomeCategory],
    pub testimonials: &'static [Testimonial],
    pub blog_posts: &'static [BlogPost],
}

const fn item(
    id: &'static str,
    label: &'static str,
    icon: NavIcon,
    path: &'static str,
    badge: Option<u32>,
) -> NavItem {
    NavItem {
        id,
        label,
        icon,
        path,
        badge,
    }
}

pub static SITE: SiteContent = SiteContent {
    brand: "InnoSphere",
    tagline: "Việc làm theo giờ, kết nối nhanh giữa doanh nghiệp và người lao động",
    marketing_nav: &[
        item("home", "Trang chủ", NavIcon::Home, paths::HOME, None),
        item("jobs", "Việc làm", NavIcon::Briefcase, paths::JOBS, None),
        item("blog", "Blog", NavIcon::BookOpen, paths::BLOG, None),
    ],
    employer_sidebar: &[
        item("dashboard", "Tổng quan", NavIcon::Dashboard, paths::EMPLOYER_DASHBOARD, None),
        item("jobs", "Tin tuyển dụng", NavIcon::Briefcase, paths::EMPLOYER_JOBS, None),
        item("candidates", "Ứng viên", NavIcon::UserCheck, paths::EMPLOYER_CANDIDATES, Some(12)),
        item("messages", "Tin nhắn", NavIcon::Message, paths::EMPLOYER_MESSAGES, Some(3)),
        item(
            "business-info",
            "Thông tin doanh nghiệp",
            NavIcon::FileText,
            paths::EMPLOYER_BUSINESS_INFO,
            None,
        ),
        item("settings", "Cài đặt", NavIcon::Settings, paths::EMPLOYER_SETTINGS, None),
    ],
    employer_mobile_nav: &[
        item("dashboard", "Tổng quan", NavIcon::Dashboard, paths::EMPLOYER_DASHBOARD, None),
        item("jobs", "Tin đăng", NavIcon::Briefcase, paths::EMPLOYER_JOBS, None),
        item("candidates", "Ứng viên", NavIcon::UserCheck, paths::EMPLOYER_CANDIDATES, Some(12)),
        item("messages", "Tin nhắn", NavIcon::Message, paths::EMPLOYER_MESSAGES, Some(3)),
    ],
    admin_sidebar: &[
        item("dashboard", "Bảng điều khiển", NavIcon::Dashboard, paths::ADMIN_DASHBOARD, None),
        item("users", "Người dùng", NavIcon::Users, paths::ADMIN_USERS, None),
        item("jobs", "Duyệt tin", NavIcon::Folder, paths::ADMIN_JOBS, Some(5)),
        item("reports", "Báo cáo", NavIcon::Shield, paths::ADMIN_REPORTS, None),
    ],
    job_categories: &["Phục vụ", "Pha chế", "Bán hàng", "Giao hàng", "Thu ngân"],
    home_categories: &[
        HomeCategory { label: "Nhà hàng - Khách sạn", icon: NavIcon::Package, open_jobs: 128 },
        HomeCategory { label: "Bán lẻ", icon: NavIcon::Briefcase, open_jobs: 96 },
        HomeCategory { label: "Giao nhận", icon: NavIcon::Clock, open_jobs: 74 },
        HomeCategory { label: "Sự kiện", icon: NavIcon::Calendar, open_jobs: 41 },
        HomeCategory { label: "Văn phòng", icon: NavIcon::FileText, open_jobs: 37 },
        HomeCategory { label: "Chăm sóc khách hàng", icon: NavIcon::Message, open_jobs: 52 },
    ],
    testimonials: &[
        Testimonial {
            author: "Nguyễn Minh Anh",
            role: "Sinh viên, Hà Nội",
            quote: "Mình tìm được ca làm buổi tối chỉ sau một ngày đăng ký, lịch học không bị ảnh hưởng.",
            rating: 5,
        },
        Testimonial {
            author: "Trần Quốc Bảo",
            role: "Chủ quán cà phê, Đà Nẵng",
            quote: "Những ngày cao điểm tôi tuyển đủ người trong vài giờ, không cần qua trung gian.",
            rating: 5,
        },
        Testimonial {
            author: "Lê Thu Hà",
            role: "Quản lý cửa hàng, TP. Hồ Chí Minh",
            quote: "Hồ sơ ứng viên rõ ràng, lịch làm việc minh bạch nên việc sắp ca dễ hơn nhiều.",
            rating: 4,
        },
    ],
    blog_posts: &[
        BlogPost {
            slug: "cach-viet-tin-tuyen-dung-theo-gio",
            title: "Cách viết tin tuyển dụng theo giờ thu hút ứng viên",
            excerpt: "Mức lương rõ ràng, khung giờ cụ thể và mô tả ngắn gọn là ba yếu tố quyết định.",
            published_on: "2024-05-12",
            read_minutes: 5,
        },
        BlogPost {
            slug: "quyen-loi-lao-dong-ban-thoi-gian",
            title: "Quyền lợi của người lao động bán thời gian",
            excerpt: "Những điều cần biết về hợp đồng, bảo hiểm và thời giờ làm việc khi làm theo ca.",
            published_on: "2024-04-28",
            read_minutes: 7,
        },
        BlogPost {
            slug: "chuan-bi-cho-ca-lam-dau-tien",
            title: "Chuẩn bị cho ca làm đầu tiên",
            excerpt: "Đến sớm, hỏi rõ quy trình và ghi nhớ tên quản lý ca: bí quyết tạo ấn tượng tốt.",
            published_on: "2024-04-02",
            read_minutes: 4,
        },
    ],
};
