//! Static site content
//!
//! Everything the page displays is declared here as plain data and read during
//! render. Nothing is mutated at runtime.

use super::navigation::SectionId;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashSet;

/// Owner details shown in the hero, contact card and footer
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "M Rohit",
    role: "Full Stack Developer",
    tagline: "Futuristic Full-Stack Developer",
    email: "mrohit582003@gmail.com",
    phone: "+91 9778566699",
    location: "Hyderabad, Telangana, India",
};

/// Hosted 3D scene embedded in the hero
pub const HERO_SCENE_URL: &str = "https://my.spline.design/genkubgreetingrobot-buV0ROAvvbrnsrJgjoNuMZ9z/";
pub const HERO_SCENE_TITLE: &str = "3D Robot Animation";

/// Profile picture shown in the about section
pub const PROFILE_IMAGE: &str = "/assets/profile.svg";

/// A card in one of the horizontal showcase carousels
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShowcaseEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: Option<&'static str>,
    /// Site-relative image path
    pub image: &'static str,
    /// Technology or skill tags, in display order
    pub tags: &'static [&'static str],
    /// Source repository, when public
    pub source_url: Option<&'static str>,
    /// Live demo or certificate link
    pub live_url: &'static str,
}

pub const PROJECTS: [ShowcaseEntry; 3] = [
    ShowcaseEntry {
        id: 1,
        title: "Knowtify - Internal Docs QA Agent",
        description: Some(
            "Internal documentation QA agent that helps developers find answers to their questions.",
        ),
        image: "/assets/projects/knowtify.svg",
        tags: &["TypeScript", "Python", "CSS", "Javascript"],
        source_url: Some("https://github.com/MRohit-2003/Knowtify"),
        live_url: "https://knowtify-tau.vercel.app/",
    },
    ShowcaseEntry {
        id: 2,
        title: "THE NEXUS",
        description: Some("AI powered blog website with modern design and smooth interactions."),
        image: "/assets/projects/nexus.svg",
        tags: &["React", "Node.js", "Express", "MongoDB"],
        source_url: Some("https://github.com/MRohit-2003/THE-NEXUS"),
        live_url: "https://the-nexus-three.vercel.app/",
    },
    ShowcaseEntry {
        id: 3,
        title: "Portfolio Website",
        description: Some(
            "Portfolio website for M Rohit with modern design and smooth interactions.",
        ),
        image: "/assets/projects/portfolio.svg",
        tags: &["React", "Javascript", "Typescript", "CSS"],
        source_url: Some("https://github.com/MRohit-2003/Portfolio-M-Rohit"),
        live_url: "https://mrohit.netlify.app/",
    },
];

pub const ACHIEVEMENTS: [ShowcaseEntry; 11] = [
    ShowcaseEntry {
        id: 1,
        title: "Google AI Essentials",
        description: None,
        image: "/assets/achievements/google-ai-essentials.svg",
        tags: &["React", "GSAP", "Three.js", "TypeScript"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1ksGHqCgwd_mtNrn6jYVUMJQrwwBz3VbE/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 2,
        title: "OCI Certified AI Foundations Associate",
        description: None,
        image: "/assets/achievements/oci-ai-foundations.svg",
        tags: &["Next.js", "Stripe", "Prisma", "Tailwind"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1ReBCnpvzFROfI_tXY6aOSr6GtIqHmezI/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 3,
        title: "Postman API Fundamentals Student Expert",
        description: None,
        image: "/assets/achievements/postman-api.svg",
        tags: &["React", "Framer Motion", "GSAP", "CSS"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1y0G6LI0G-3rvWybBgovdGW2QbAyGuL4c/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 4,
        title: "Social Summer of Code 2025",
        description: None,
        image: "/assets/achievements/ssoc-2025.svg",
        tags: &["React Native", "Firebase", "Redux", "Expo"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1ivVIqdWJUDJVV7EOqvCxe14ErWrSH56D/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 5,
        title: "Microsoft Azure Fundamentals: Describe Cloud Concepts",
        description: None,
        image: "/assets/achievements/azure-fundamentals-1.svg",
        tags: &["Cloud Concepts", "Microsoft Azure"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1NbmY2ol1-hUY7N0bKGIZQqpOTFjd9AIl/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 6,
        title: "Microsoft Azure Fundamentals: Describe Azure Management and Governance",
        description: None,
        image: "/assets/achievements/azure-fundamentals-2.svg",
        tags: &["Management and Governance", "Microsoft Azure"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1jDQwkOxtIOFtcFJPPIrF-YMd3GjZuWuz/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 7,
        title: "Microsoft Azure Fundamentals: Describe Azure Architecture and Services",
        description: None,
        image: "/assets/achievements/azure-fundamentals-3.svg",
        tags: &["Architecture and Services", "Microsoft Azure"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1GiijXPK4q2o63FlX9qF5vCFYgtlYoxvv/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 8,
        title: "Responsible and Safe AI Systems",
        description: None,
        image: "/assets/achievements/responsible-ai.svg",
        tags: &[
            "Security and Responsibility",
            "Ethical AI Practices",
            "Limitations of AI",
        ],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1TKlgFJRjJy1daWZXHuxuYLleMOiTmk63/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 9,
        title: "Data Processing and Visualization",
        description: None,
        image: "/assets/achievements/data-processing-visualization.svg",
        tags: &["Data Processing", "Data Visualization"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1zcxTJcygCNh_07NuDZOkgMcvcA2emECw/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 10,
        title: "Exploratory Data Analysis",
        description: None,
        image: "/assets/achievements/exploratory-data-analysis.svg",
        tags: &["Exploratory Data Analysis", "Data Visualization"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1jzfuxOE0K4flsWdqit1CbJwek_34J06j/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 11,
        title: "Acquiring Data",
        description: None,
        image: "/assets/achievements/acquiring-data.svg",
        tags: &["Data Acquisition", "Data Integration"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/16YkZiec4UKRDaSE7vNXhLdNRUG5Pq9m2/view?usp=sharing",
    },
];

pub const ACTIVITIES: [ShowcaseEntry; 6] = [
    ShowcaseEntry {
        id: 1,
        title: "Summer Internship",
        description: None,
        image: "/assets/activities/internship.svg",
        tags: &["React", "Node.js", "HTML", "CSS", "JavaScript"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1RWRGNNu_n0vvaC5ZkCenw7sk8ciWdQ4y/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 2,
        title: "AI Agent Hackathon",
        description: None,
        image: "/assets/activities/ai-agent-hackathon.svg",
        tags: &["Python", "React", "Node.js", "HTML", "CSS", "JavaScript"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1PYW4op8V1qZwm16bs1_BNzIamPEKEnXa/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 3,
        title: "Joy of Computing",
        description: None,
        image: "/assets/activities/iit-ropar.svg",
        tags: &["AI", "Drone Technology"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1VtnI3__jMZohQhnOVdUIIUSDNwf42KOw/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 4,
        title: "DSA Mastermind",
        description: None,
        image: "/assets/activities/dsa-mastermind.svg",
        tags: &["DSA"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1kWeZMCzpIFgAGcaSUymR-TYKy90DmWRv/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 5,
        title: "AlgoQuiz",
        description: None,
        image: "/assets/activities/algo-quiz.svg",
        tags: &["DSA"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1yqtHuJsr4qgg82kGNMWDzisZPGcOMRUb/view?usp=sharing",
    },
    ShowcaseEntry {
        id: 6,
        title: "Be10x",
        description: Some("Gaming platform with social features and real-time multiplayer."),
        image: "/assets/activities/be10x.svg",
        tags: &["AI TOOLS"],
        source_url: None,
        live_url: "https://drive.google.com/file/d/1_vS-4siOjMLRhe3_R08wYYvdD20aUMrS/view?usp=sharing",
    },
];

/// The three horizontal carousels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Showcase {
    Projects,
    Achievements,
    Activities,
}

impl Showcase {
    pub const ALL: [Showcase; 3] = [
        Showcase::Projects,
        Showcase::Achievements,
        Showcase::Activities,
    ];

    pub fn entries(self) -> &'static [ShowcaseEntry] {
        match self {
            Showcase::Projects => &PROJECTS,
            Showcase::Achievements => &ACHIEVEMENTS,
            Showcase::Activities => &ACTIVITIES,
        }
    }

    pub fn section(self) -> SectionId {
        match self {
            Showcase::Projects => SectionId::Projects,
            Showcase::Achievements => SectionId::Achievements,
            Showcase::Activities => SectionId::Activities,
        }
    }

    /// Heading as (plain lead-in, highlighted part)
    pub fn heading(self) -> (&'static str, &'static str) {
        match self {
            Showcase::Projects => ("Featured ", "Projects"),
            Showcase::Achievements => ("My ", "Achievements"),
            Showcase::Activities => ("", "Internships, Workshops, Quizzes & Hackathons"),
        }
    }

    /// Project cards link to both demo and source; the others have one "View" link
    pub fn shows_source(self) -> bool {
        matches!(self, Showcase::Projects)
    }

    /// Certificates open in a new tab
    pub fn opens_new_tab(self) -> bool {
        matches!(self, Showcase::Achievements)
    }
}

/// Skill tile in the about section
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Icon name, see `ui::icon::icons`
    pub icon: &'static str,
    /// Tailwind text colour class
    pub color: &'static str,
}

pub const SKILLS: [Skill; 8] = [
    Skill { name: "HTML5", icon: "file-html", color: "text-orange-400" },
    Skill { name: "CSS3", icon: "file-css", color: "text-blue-400" },
    Skill { name: "JavaScript", icon: "file-js", color: "text-yellow-400" },
    Skill { name: "React", icon: "file-code", color: "text-cyan-400" },
    Skill { name: "MongoDB", icon: "leaf", color: "text-green-400" },
    Skill { name: "Design", icon: "palette", color: "text-purple-400" },
    Skill { name: "Backend", icon: "database", color: "text-red-400" },
    Skill { name: "API", icon: "globe", color: "text-indigo-400" },
];

/// Outbound social profile
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        icon: "github",
        href: "https://github.com/MRohit-2003",
    },
    SocialLink {
        label: "LinkedIn",
        icon: "linkedin",
        href: "https://linkedin.com/in/m-rohit-138a76246",
    },
    SocialLink {
        label: "Twitter",
        icon: "twitter",
        href: "https://twitter.com",
    },
];

/// True when no two entries share an id
pub fn has_unique_ids(entries: &[ShowcaseEntry]) -> bool {
    let mut seen = HashSet::with_capacity(entries.len());
    entries.iter().all(|entry| seen.insert(entry.id))
}

/// schema.org `Person` document for the page's JSON-LD block
pub fn structured_data(site_url: &str) -> Value {
    let same_as = SOCIAL_LINKS
        .iter()
        .map(|link| link.href)
        .collect::<Vec<_>>();
    let known_for = PROJECTS
        .iter()
        .map(|project| json!({ "@type": "CreativeWork", "name": project.title, "url": project.live_url }))
        .collect::<Vec<_>>();

    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "jobTitle": PROFILE.role,
        "email": format!("mailto:{}", PROFILE.email),
        "url": site_url,
        "address": { "@type": "PostalAddress", "addressLocality": PROFILE.location },
        "sameAs": same_as,
        "knowsAbout": SKILLS.iter().map(|s| s.name).collect::<Vec<_>>(),
        "subjectOf": known_for,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_in_every_collection() {
        assert!(has_unique_ids(&PROJECTS));
        assert!(has_unique_ids(&ACHIEVEMENTS));
        assert!(has_unique_ids(&ACTIVITIES));
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let duplicated = [PROJECTS[0], PROJECTS[1], PROJECTS[0]];
        assert!(!has_unique_ids(&duplicated));
        assert!(has_unique_ids(&[]));
    }

    #[test]
    fn test_every_entry_has_tags_and_link() {
        for entry in PROJECTS.iter().chain(&ACHIEVEMENTS).chain(&ACTIVITIES) {
            assert!(!entry.tags.is_empty(), "{} has no tags", entry.title);
            assert!(entry.live_url.starts_with("https://"), "{}", entry.title);
            assert!(entry.image.starts_with("/assets/"), "{}", entry.title);
        }
    }

    #[test]
    fn test_images_ship_with_the_site() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let images = PROJECTS
            .iter()
            .chain(&ACHIEVEMENTS)
            .chain(&ACTIVITIES)
            .map(|entry| entry.image)
            .chain([PROFILE_IMAGE]);
        for image in images {
            let file = public.join(image.trim_start_matches('/'));
            assert!(file.is_file(), "missing asset {}", file.display());
        }
    }

    #[test]
    fn test_projects_link_to_source() {
        assert!(PROJECTS.iter().all(|p| p.source_url.is_some()));
        assert!(ACHIEVEMENTS.iter().all(|a| a.source_url.is_none()));
    }

    #[test]
    fn test_showcase_sections() {
        assert_eq!(Showcase::Projects.entries().len(), 3);
        assert_eq!(Showcase::Achievements.entries().len(), 11);
        assert_eq!(Showcase::Activities.entries().len(), 6);
        assert_eq!(Showcase::Activities.section().anchor(), "activities");
        assert!(Showcase::Projects.shows_source());
        assert!(!Showcase::Achievements.shows_source());
    }

    #[test]
    fn test_structured_data() {
        let doc = structured_data("https://mrohit.netlify.app/");
        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["name"], "M Rohit");
        assert_eq!(doc["email"], "mailto:mrohit582003@gmail.com");
        assert_eq!(doc["sameAs"].as_array().map(Vec::len), Some(3));
        assert_eq!(doc["subjectOf"][1]["name"], "THE NEXUS");
        assert_eq!(doc["knowsAbout"][0], "HTML5");
    }
}
