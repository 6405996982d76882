//! Static page content
//!
//! Everything the page displays is authored here at compile time and is
//! immutable for the session.

/// Icons the page draws
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Glyph {
    Code,
    Globe,
    Cpu,
    Rocket,
    Github,
    Linkedin,
    Instagram,
    Mail,
    ArrowUpRight,
    Menu,
    Close,
    Sun,
    Moon,
}

/// Who the page is about
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Profile {
    pub name: &'static str,
    /// Wordmark shown in the nav bar, followed by an accent dot
    pub brand: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub bio: &'static [&'static str],
    pub email: &'static str,
    pub portrait_path: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Manvanth Gowda M",
    brand: "MANVANTH",
    headline: "Engineering Technical Excellence",
    summary: "Manvanth Gowda M is a Computer Science Engineer crafting high-performance \
              digital environments where technical precision meets creative motion.",
    bio: &[
        "a passionate Computer Science Engineering student with a deep interest in the \
         intersection of technology and creativity.",
        "My journey is driven by a curiosity to understand how things work and a desire to \
         build tools that solve real-world problems. Whether it's crafting high-performance \
         backends or designing fluid, interactive interfaces, I aim for excellence in every \
         line of code.",
        "Based in India, I'm constantly exploring new technologies and pushing the boundaries \
         of what's possible in software development.",
    ],
    email: "appumanu3214@gmail.com",
    portrait_path: "/assets/portrait.jpg",
};

/// Decorative status readouts. None of them reflect real state.
pub const SYSTEM_PHASE: &str = "v4.0.2 Stable";
pub const SYSTEM_STATUS: &str = "System Online";
pub const PROJECT_STATUS: &str = "Live v1.0";
pub const FRAME_TAG: &str = "MANVANTH_GOWDA_M_SYSTEMS";

/// A group of skills shown on one tilt card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SkillGroup {
    pub glyph: Glyph,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        glyph: Glyph::Code,
        title: "Languages",
        skills: &["JavaScript", "TypeScript", "Python", "Java", "C++"],
    },
    SkillGroup {
        glyph: Glyph::Globe,
        title: "Frontend",
        skills: &["React", "Next.js", "Tailwind CSS", "Framer Motion", "Three.js"],
    },
    SkillGroup {
        glyph: Glyph::Cpu,
        title: "Backend",
        skills: &["Node.js", "Express", "MongoDB", "PostgreSQL", "Firebase"],
    },
    SkillGroup {
        glyph: Glyph::Rocket,
        title: "Tools",
        skills: &["Git", "Docker", "VS Code", "Figma", "Postman"],
    },
];

/// A showcased project
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    /// Human-readable stack, e.g. "React • Node.js"
    pub tech: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Reshme Info",
        description: "A comprehensive digital platform providing essential information and \
                      resources for the sericulture industry.",
        tech: "React • Node.js",
        link: "https://github.com/Manvanth-Gowda-M/Reshme_Info",
    },
    Project {
        name: "Prompt Enhancer",
        description: "An intelligent tool designed to refine and optimize AI prompts for better \
                      generative results.",
        tech: "Python • OpenAI",
        link: "https://github.com/Manvanth-Gowda-M/Prompt-enhancer",
    },
    Project {
        name: "Fusion BOT X",
        description: "A high-performance multi-purpose automation bot with advanced integration \
                      capabilities.",
        tech: "Node.js • API",
        link: "https://github.com/Manvanth-Gowda-M/FusionbotX-",
    },
    Project {
        name: "NutriGuide",
        description: "A smart nutrition tracking and guidance application built to promote \
                      healthier lifestyle choices.",
        tech: "Flutter • Firebase",
        link: "https://github.com/NextGenXplorer/NutriGuideFLU",
    },
];

/// Outbound profile link in the contact section
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub glyph: Glyph,
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Web links open in a new tab; mail links do not.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        glyph: Glyph::Github,
        label: "GitHub",
        href: "https://github.com/Manvanth-Gowda-M",
    },
    SocialLink {
        glyph: Glyph::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/manvanth-gowda-m-50288039b",
    },
    SocialLink {
        glyph: Glyph::Instagram,
        label: "Instagram",
        href: "https://www.instagram.com/manvanth.gowda.m/",
    },
    SocialLink {
        glyph: Glyph::Mail,
        label: "Email",
        href: "mailto:appumanu3214@gmail.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_names_are_unique() {
        let mut names: Vec<&str> = PROJECTS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PROJECTS.len());
    }

    #[test]
    fn every_skill_group_has_skills() {
        assert_eq!(SKILL_GROUPS.len(), 4);
        assert!(SKILL_GROUPS.iter().all(|g| !g.skills.is_empty()));
    }

    #[test]
    fn email_link_matches_profile() {
        let email = SOCIAL_LINKS.iter().find(|l| l.glyph == Glyph::Mail).unwrap();
        assert_eq!(email.href, PROFILE.mailto());
        assert!(!email.opens_new_tab());
        assert!(SOCIAL_LINKS.iter().filter(|l| l.opens_new_tab()).count() == 3);
    }

    #[test]
    fn project_links_are_https() {
        assert!(PROJECTS.iter().all(|p| p.link.starts_with("https://")));
    }
}
