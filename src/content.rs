//! Everything the page says about its owner. Plain `'static` data, no behavior.

use crate::scroll::SectionId;

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub photo: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "BATTU ARAVIND KUMAR",
    role: "Full Stack Developer & Tech Lead",
    organization: "Placements and Career Tutelage (PACT)",
    photo: "https://res.cloudinary.com/dfghtpoxp/image/upload/v1744737775/PassPort_Image_less_azniec.jpg",
    email: "akaravindkumar67@gmail.com",
    location: "Ongole, Andhra Pradesh, India",
};

pub const ABOUT: [&str; 2] = [
    "Hello! I'm BATTU ARAVIND KUMAR, a CSE graduate from Kalasalingam University, passionate about technology, leadership, and mentoring. Hailing from Andhra Pradesh, I thrive on organizing and inspiring peer learning.",
    "As the Founder & Lead of PACT, I've driven initiatives like mock interviews and upskilling programs. I've proudly led teams to the SIH 2023 Grand Finale and the IDE Bootcamp, earning recognition from AICTE & MIC. Skilled in Java, SQL, and Web Development, I also enjoy motivating others, public speaking, and exploring teaching techniques.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    GitHub,
    LinkedIn,
    Mail,
    Profile,
}

impl Social {
    /// Icon font class for the link glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Social::GitHub => "devicon-github-plain",
            Social::LinkedIn => "devicon-linkedin-plain",
            Social::Mail => "extra-email",
            Social::Profile => "extra-link",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Social::GitHub => "GitHub Profile",
            Social::LinkedIn => "LinkedIn Profile",
            Social::Mail => "Send Email",
            Social::Profile => "Unikcon Profile",
        }
    }
}

pub struct SocialLink {
    pub kind: Social,
    pub href: &'static str,
}

const GITHUB: SocialLink = SocialLink {
    kind: Social::GitHub,
    href: "https://github.com/aravindkumar67",
};
const LINKEDIN: SocialLink = SocialLink {
    kind: Social::LinkedIn,
    href: "https://www.linkedin.com/in/battu-aravind-kumar-02906a23b",
};
const MAIL: SocialLink = SocialLink {
    kind: Social::Mail,
    href: "mailto:akaravindkumar67@gmail.com",
};
const UNIKCON: SocialLink = SocialLink {
    kind: Social::Profile,
    href: "https://unikcon.ai/profile/aravindkumar",
};

/// Links shown in the hero and the footer.
pub static SOCIALS: [SocialLink; 3] = [GITHUB, LINKEDIN, MAIL];
/// Links shown beside the contact form.
pub static CONTACT_SOCIALS: [SocialLink; 4] = [GITHUB, LINKEDIN, MAIL, UNIKCON];

pub struct ContactInfo {
    pub icon: &'static str,
    pub text: &'static str,
}

pub static CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        icon: "extra-email",
        text: PROFILE.email,
    },
    ContactInfo {
        icon: "extra-location",
        text: PROFILE.location,
    },
    ContactInfo {
        icon: "extra-link",
        text: "unikcon.ai/profile/aravindkumar",
    },
];

pub const CONTACT_BLURB: &str = "Feel free to reach out for collaborations or just a friendly hello. You can also schedule an interview, get your resume reviewed, or have an audio call through Unikcon.ai.";

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: [Experience; 3] = [
    Experience {
        title: "Founder and Lead",
        company: "Placements and Career Tutelage (PACT)",
        period: "Dec 2024 - May 2025",
        highlights: &[
            "Founded and led PACT initiative to enhance student placement readiness",
            "Orchestrated comprehensive training programs and mock interviews",
            "Led a team of 40 members, improving placement success rates",
            "Established industry partnerships for guest lectures",
        ],
    },
    Experience {
        title: "Student Advisor",
        company: "KARE ACM-W CHAPTER",
        period: "June 2024 - Dec 2024",
        highlights: &[
            "Mentored students in professional development",
            "Organized workshops on emerging technologies",
            "Facilitated networking and knowledge sharing",
            "Promoted diversity in computing",
        ],
    },
    Experience {
        title: "Mentor and Trainer",
        company: "Personal Mentoring",
        period: "Dec 2024 - Present",
        highlights: &[
            "Mentoring 50+ students in technical skills",
            "Conducting mock interviews and coding sessions",
            "Developing structured learning paths",
            "Creating placement preparation resources",
        ],
    },
];

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub link: Option<&'static str>,
}

pub static ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        title: "Placement Success",
        description: "Placed in 4 companies: LTIMindtree, Capgemini, TCS, and L&T Technology Services",
        icon: "extra-star",
        link: Some("https://www.linkedin.com/posts/battu-aravind-kumar-02906a23b_dear-all-happy-to-share-the-triple-offer-activity-7275006847911174145-Hm_t"),
    },
    Achievement {
        title: "Team Lead - SIH 2023",
        description: "Led team to Top 5 position among 700+ teams in Smart India Hackathon Senior Grand Finale 2023",
        icon: "extra-trophy",
        link: Some("https://www.linkedin.com/posts/battu-aravind-kumar-02906a23b_kalasalingam-smartindiahackathon-grandfinale-activity-7169933731376381953-4AtN"),
    },
    Achievement {
        title: "Team Lead - IDE Bootcamp",
        description: "Led team to Best Performing Team Award in Innovation Design and Entrepreneurship bootcamp by AICTE & MIC",
        icon: "extra-award",
        link: Some("https://www.linkedin.com/posts/cse-kare_dear-all-our-iii-year-cse-students-participated-activity-7192165558501441537-4T6u"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

impl Skill {
    /// Inline width for the proficiency bar.
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

pub const SKILLS: [Skill; 8] = [
    Skill { name: "Java", level: 90 },
    Skill { name: "Python", level: 85 },
    Skill { name: "JavaScript", level: 80 },
    Skill { name: "DSA", level: 85 },
    Skill { name: "SQL", level: 90 },
    Skill { name: "Spring & Spring Boot", level: 85 },
    Skill { name: "Java Swing", level: 80 },
    Skill { name: "HTML/CSS", level: 90 },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub image: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "WildGuard: Automated Barrier System",
        description: "Developed a real-time animal detection system using MobileNetV2 CNN, trained on 111,226+ augmented images. Integrated IoT-based response mechanisms for wildlife conservation.",
        tags: &["Deep Learning", "Python", "YOLO", "IoT", "Ultrasonic Sensors"],
        link: "https://github.com/aravindkumar67/WildGuard",
        image: "https://res.cloudinary.com/dfghtpoxp/image/upload/v1744738224/wildguard_tjw7nx.png",
    },
    Project {
        title: "Water Footprint Calculator",
        description: "Digital platform for calculating water footprints in daily usage items, helping users understand and reduce their water consumption.",
        tags: &["Web Development", "JavaScript", "React"],
        link: "https://aquametrics4all.onrender.com/",
        image: "https://res.cloudinary.com/dfghtpoxp/image/upload/v1744738223/SIH_2023_logo_wwq7bi.webp",
    },
    Project {
        title: "Tic-Tac-Toe Game",
        description: "Developed a feature-rich Tic-Tac-Toe game with MySQL database integration for player profile management and persistent gameplay.",
        tags: &["Java", "JavaFX", "MySQL", "JDBC"],
        link: "https://github.com/aravindkumar67/Tic-Tac-toe-Game-using-JavaFX-",
        image: "https://res.cloudinary.com/dfghtpoxp/image/upload/v1744738223/tic_tac_toe_ldxcmf.jpg",
    },
    Project {
        title: "Electricity Billing System",
        description: "Developed a comprehensive electricity billing system with user interface for managing and calculating electricity consumption.",
        tags: &["Java", "Swing", "File Handling"],
        link: "https://github.com/aravindkumar67/Electricity-Billing-System-Using-FIle-Handling",
        image: "https://res.cloudinary.com/dfghtpoxp/image/upload/v1744738223/Electricity-Bill-Management-System_ib9jmt.webp",
    },
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Technology in Computer Science",
    school: "Kalasalingam Academy of Research and Education",
    period: "2021 - 2025",
    grade: "CGPA: 9.16/10",
    highlights: &[
        "Given 10+ hands-on seminars",
        "Published 2 research works",
        "Led teams in national level hackathons and bootcamps",
        "Active participation in extra and co-curricular activities",
    ],
};

pub struct Interest {
    pub title: &'static str,
    pub icon: &'static str,
}

pub static INTERESTS: [Interest; 6] = [
    Interest { title: "Mentoring", icon: "extra-users" },
    Interest { title: "Public Speaking", icon: "extra-mic" },
    Interest { title: "Coding", icon: "extra-code" },
    Interest { title: "Leadership", icon: "extra-award" },
    Interest { title: "Organizing", icon: "extra-terminal" },
    Interest { title: "Learning", icon: "extra-graduation" },
];

pub struct Publication {
    pub title: &'static str,
    pub description: &'static str,
}

pub static PUBLICATIONS: [Publication; 2] = [
    Publication {
        title: "WildGuard: Automated Barrier System for Animal Attack Prevention",
        description: "Published in SCOPUS-indexed journal. Research paper on automated wildlife detection and prevention system using deep learning and IoT.",
    },
    Publication {
        title: "IoT-Based Pulse Rate Monitoring System with Anomaly Detection and Automated Alerts",
        description: "Published in SCOPUS-indexed journal. Applied for patent and secured 4 Lakhs funding. Research on healthcare monitoring system.",
    },
];

/// Heading text for each section that has one.
pub fn section_title(id: SectionId) -> &'static str {
    match id {
        SectionId::Home => "Home",
        SectionId::About => "About Me",
        SectionId::Experience => "Professional Experience",
        SectionId::Achievements => "Key Achievements",
        SectionId::Skills => "Technical Skills",
        SectionId::Projects => "Featured Projects",
        SectionId::Education => "Education",
        SectionId::Interests => "Hobbies & Interests",
        SectionId::Publications => "Publications",
        SectionId::Contact => "Get In Touch",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} out of range", skill.name);
            assert_eq!(skill.bar_style(), format!("width: {}%", skill.level));
        }
        let over = Skill {
            name: "over",
            level: 140,
        };
        assert_eq!(over.bar_style(), "width: 100%");
    }

    #[test]
    fn test_links_are_absolute() {
        let links = PROJECTS
            .iter()
            .map(|p| p.link)
            .chain(ACHIEVEMENTS.iter().filter_map(|a| a.link))
            .chain(CONTACT_SOCIALS.iter().map(|s| s.href));
        for link in links {
            assert!(
                link.starts_with("https://") || link.starts_with("mailto:"),
                "bad link {link}"
            );
        }
    }

    #[test]
    fn test_projects_have_images_and_tags() {
        for p in PROJECTS.iter() {
            assert!(p.image.starts_with("https://"));
            assert!(!p.tags.is_empty());
        }
    }

    #[test]
    fn test_section_titles_unique() {
        let mut titles = SectionId::ALL.map(section_title).to_vec();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), SectionId::ALL.len());
    }
}
