//! Site navigation

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        name: "Home",
        path: "/",
    },
    NavLink {
        name: "About Us",
        path: "/about",
    },
    NavLink {
        name: "Rooms & Facilities",
        path: "/rooms-facilities",
    },
    NavLink {
        name: "Gallery",
        path: "/gallery",
    },
    NavLink {
        name: "Contact Us",
        path: "/contact",
    },
];

/// Home is active only on `/`; other links on any path they prefix
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    if link_path == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(link_path)
    }
}
