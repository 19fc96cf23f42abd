//! Technology Carousel
//!
//! The logo strip is the technology list rendered twice back to back, so a
//! CSS translate of -50% loops without a visible seam.

use std::time::Duration;

/// One logo in the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TECHNOLOGIES: [Technology; 8] = [
    Technology { name: "HTML5", icon: "img/html-5.png" },
    Technology { name: "React", icon: "img/physics.png" },
    Technology { name: "Node.js", icon: "img/node-js.png" },
    Technology { name: "NestJS", icon: "img/nest js.jpg" },
    Technology { name: "TypeScript", icon: "img/typescript.png" },
    Technology { name: "JavaScript", icon: "img/js.png" },
    Technology { name: "CSS3", icon: "img/css-3.png" },
    Technology { name: "MongoDB", icon: "img/icons8-mongo-db-48.png" },
];

/// One full pass of the strip
pub const ANIMATION_DURATION: Duration = Duration::from_secs(20);

/// Icons worth preloading before the strip scrolls into view
pub fn critical_icons() -> impl Iterator<Item = &'static str> {
    TECHNOLOGIES.iter().take(3).map(|t| t.icon)
}

/// Items of the carousel track, in render order
pub fn track_items() -> impl Iterator<Item = &'static Technology> {
    TECHNOLOGIES.iter().chain(TECHNOLOGIES.iter())
}

/// Value for the track's `animation-duration` style
pub fn animation_duration_css() -> String {
    format!("{}s", ANIMATION_DURATION.as_secs())
}
