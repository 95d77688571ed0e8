//! Static portfolio content. Defined once at module load, never mutated.

/// A portfolio project card.
#[derive(Debug, Clone, Copy)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// Accent color for the card title, sRGB bytes.
    pub accent: [u8; 3],
}

/// A skill with a 0-100 proficiency.
#[derive(Debug, Clone, Copy)]
pub struct SkillRecord {
    pub name: &'static str,
    pub level: u8,
    pub icon: &'static str,
}

pub const NAME: &str = "Purva Borse";
pub const TAGLINE: &str = "Computer Science Student at SRM";

pub const ABOUT: &[&str] = &[
    "I'm a passionate full-stack developer with a love for creating immersive \
     digital experiences. With expertise in modern technologies and a keen eye \
     for design, I transform ideas into reality through code.",
    "When I'm not coding, you can find me exploring the latest in AI, 3D \
     graphics, and emerging technologies. I believe in the power of technology \
     to solve real-world problems and create meaningful connections.",
];

pub const CONTACT_BLURB: &str = "Let's collaborate on something amazing! I'm \
     always open to discussing new opportunities and interesting projects.";

pub const EMAIL_URL: &str = "mailto:purva@example.com";
pub const GITHUB_URL: &str = "https://github.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com";

pub const FOOTER: &str = "© 2026 Purva Borse";

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Gradient Boosted Dyslexia Detection Framework",
        summary: "Machine learning pipeline using gradient boosted decision \
                  trees with SMOTE oversampling for accurate dyslexia \
                  detection. Outperformed five baselines with strong clinical \
                  potential.",
        tags: &["Python", "Scikit-learn", "SMOTE", "Pandas"],
        accent: [186, 104, 200],
    },
    ProjectRecord {
        title: "Food Court Management System",
        summary: "Modular food court system with JWT-based authentication, \
                  real-time order tracking over WebSockets, and role-based \
                  access for multiple user types.",
        tags: &["Spring Boot", "MySQL", "JavaScript", "HTML/CSS"],
        accent: [79, 195, 247],
    },
    ProjectRecord {
        title: "Courier Platform with Real-Time Tracking",
        summary: "Backend with REST APIs and live status updates for courier \
                  operations. Indexing and caching cut response times by 40%.",
        tags: &["Flask", "SQL Server", "REST API", "JavaScript"],
        accent: [77, 182, 172],
    },
    ProjectRecord {
        title: "Interactive Portfolio",
        summary: "This application: portfolio sections rendered over an \
                  animated decorative 3D background, with two switchable \
                  visual skins.",
        tags: &["Rust", "wgpu", "egui"],
        accent: [255, 138, 101],
    },
];

pub static SKILLS: &[SkillRecord] = &[
    SkillRecord { name: "Java", level: 95, icon: "⌨" },
    SkillRecord { name: "Python", level: 95, icon: "⌨" },
    SkillRecord { name: "C++", level: 90, icon: "⌨" },
    SkillRecord { name: "C", level: 85, icon: "⌨" },
    SkillRecord { name: "JavaScript", level: 90, icon: "⌨" },
    SkillRecord { name: "HTML/CSS", level: 95, icon: "⚡" },
    SkillRecord { name: "React", level: 90, icon: "⚡" },
    SkillRecord { name: "Flask", level: 85, icon: "⚡" },
    SkillRecord { name: "Django", level: 85, icon: "⚡" },
    SkillRecord { name: "Spring Boot", level: 80, icon: "⚡" },
    SkillRecord { name: "REST API", level: 80, icon: "⚡" },
    SkillRecord { name: "SQL", level: 90, icon: "⚡" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_within_percentage_range() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
    }

    #[test]
    fn projects_have_tags_and_text() {
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.summary.is_empty());
            assert!(!project.tags.is_empty());
        }
    }

    #[test]
    fn outbound_links_are_opaque_strings() {
        assert!(EMAIL_URL.starts_with("mailto:"));
        assert!(GITHUB_URL.starts_with("https://"));
        assert!(LINKEDIN_URL.starts_with("https://"));
    }
}
