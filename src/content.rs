use std::str::FromStr;

use crate::error::UnknownSection;
use crate::icons::Icon;

/// Sections reachable from the navigation bar, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    About,
    Experience,
    Impact,
    Education,
}

impl NavTarget {
    pub const ALL: [NavTarget; 4] = [
        NavTarget::About,
        NavTarget::Experience,
        NavTarget::Impact,
        NavTarget::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::About => "About",
            NavTarget::Experience => "Experience",
            NavTarget::Impact => "Impact",
            NavTarget::Education => "Education",
        }
    }

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            NavTarget::About => "about",
            NavTarget::Experience => "experience",
            NavTarget::Impact => "impact",
            NavTarget::Education => "education",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            NavTarget::About => "#about",
            NavTarget::Experience => "#experience",
            NavTarget::Impact => "#impact",
            NavTarget::Education => "#education",
        }
    }
}

impl FromStr for NavTarget {
    type Err = UnknownSection;

    /// Accepts a section id with or without the leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        NavTarget::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(u8);

impl Percent {
    /// Panics on out-of-range values, which fails the build when used in a
    /// `const` or `static` initializer.
    pub const fn new(value: u8) -> Self {
        assert!(value <= 100, "percent must be within 0..=100");
        Self(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// CSS width of a bar filled to this percentage of its track.
    pub fn width_style(self) -> String {
        format!("{}%", self.0)
    }
}

/// Side of the timeline spine an entry's content sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    Left,
    #[default]
    Right,
}

impl From<&str> for Alignment {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("left") {
            Self::Left
        } else {
            Self::Right
        }
    }
}

#[derive(Debug)]
pub struct StatTile {
    pub icon: Icon,
    pub icon_class: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub subtext: &'static str,
    /// Entrance delay in seconds.
    pub delay: f64,
}

#[derive(Debug)]
pub struct SkillLevel {
    pub label: &'static str,
    pub percent: Percent,
    /// Tailwind background class of the filled bar.
    pub color: &'static str,
}

#[derive(Debug)]
pub struct TimelineEntry {
    pub date_range: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub tags: &'static [&'static str],
    pub summary: &'static str,
    pub achievements: &'static [&'static str],
    pub icon: Icon,
    pub alignment: Alignment,
    pub delay: f64,
}

#[derive(Debug)]
pub struct ProjectCard {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub stats: &'static [&'static str],
    pub icon: Icon,
    pub link: Option<&'static str>,
}

#[derive(Debug)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub year_range: &'static str,
    pub details: &'static str,
    /// Tailwind border class of the card's accent stripe.
    pub accent: &'static str,
}

#[derive(Debug)]
pub struct SocialLink {
    pub href: &'static str,
    pub icon: Icon,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub job_title: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn same_as(&self) -> [&'static str; 2] {
        [self.linkedin, self.github]
    }
}

pub static PROFILE: Profile = Profile {
    name: "Hrishikesh Kumar",
    initials: "HK",
    job_title: "Product Strategy & Innovation",
    email: "hrishikeshkumar16@gmail.com",
    linkedin: "https://www.linkedin.com/in/glint-hk/",
    github: "https://github.com/glint-hk",
};

pub static STAT_TILES: &[StatTile] = &[
    StatTile {
        icon: Icon::TrendingUp,
        icon_class: "text-green-400",
        value: "$1M+",
        label: "Revenue Impact",
        subtext: "Carrier Security",
        delay: 0.2,
    },
    StatTile {
        icon: Icon::Users,
        icon_class: "text-blue-400",
        value: "550+",
        label: "Developers Scaled",
        subtext: "AI Implementation",
        delay: 0.4,
    },
    StatTile {
        icon: Icon::Zap,
        icon_class: "text-yellow-400",
        value: "2k+",
        label: "Hours Saved",
        subtext: "Automation",
        delay: 0.6,
    },
    StatTile {
        icon: Icon::Award,
        icon_class: "text-purple-400",
        value: "6 Awards",
        label: "in 34 Months",
        subtext: "with Fast-Track Promotion",
        delay: 0.8,
    },
];

pub static SKILLS: &[SkillLevel] = &[
    SkillLevel {
        label: "Product Strategy & Roadmapping",
        percent: Percent::new(100),
        color: "bg-cyan-500",
    },
    SkillLevel {
        label: "AI & Digital Transformation",
        percent: Percent::new(100),
        color: "bg-purple-500",
    },
    SkillLevel {
        label: "Stakeholder Management",
        percent: Percent::new(100),
        color: "bg-pink-500",
    },
    SkillLevel {
        label: "Data Analytics & IoT",
        percent: Percent::new(100),
        color: "bg-blue-500",
    },
];

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        date_range: "Apr 2025 - Jun 2025",
        role: "Senior Engineer",
        company: "Carrier (ELP)",
        tags: &["Leadership", "Migration", "$3T Client"],
        summary: "Promoted to Senior Engineer (Top 4% of cohort) in record time.",
        achievements: &[
            "Led strategic migration of security system for a $3T client, enabling 25% faster transition.",
            "Recognized for leadership in product delivery and digital transformation.",
        ],
        icon: Icon::Award,
        alignment: Alignment::Right,
        delay: 0.0,
    },
    TimelineEntry {
        date_range: "Aug 2024 - Apr 2025",
        role: "Engineer - AI & Product",
        company: "Carrier",
        tags: &["AI", "Scaling", "Internal Tools"],
        summary: "Focused on scaling internal tools and AI integration.",
        achievements: &[
            "Scaled intelligent AI assistant to 550+ developers, reducing query resolution time by 40%.",
            "Created UI for LLM Q&A tools, directly impacting engineering velocity.",
        ],
        icon: Icon::Cpu,
        alignment: Alignment::Left,
        delay: 0.2,
    },
    TimelineEntry {
        date_range: "Aug 2022 - Jul 2024",
        role: "Management Trainee (ELP)",
        company: "Carrier",
        tags: &["$1M Revenue", "GoI Project", "IoT"],
        summary: "Selected for the prestigious Engineering Leadership Program.",
        achievements: &[
            "$1M Revenue Impact: Revamped legacy product to replace obsolete infrastructure.",
            "Engineered cloud automation saving 2,000+ hours annually.",
            "Designed IoT dashboard for GoI ULIP cold chain plan (15% savings).",
        ],
        icon: Icon::Zap,
        alignment: Alignment::Right,
        delay: 0.4,
    },
    TimelineEntry {
        date_range: "Dec 2021 - Jan 2022",
        role: "Intern",
        company: "NITI Aayog",
        tags: &["Public Sector", "Strategy", "AIM"],
        summary: "Public sector strategy and innovation.",
        achievements: &[
            "Contributed to Atal Innovation Mission (AIM) AIC portal enhancements.",
            "Collaborated with senior leadership on user experience strategy.",
        ],
        icon: Icon::Briefcase,
        alignment: Alignment::Left,
        delay: 0.6,
    },
];

pub static PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        title: "Cassava Leaf Disease Detection",
        category: "AI Research (Springer)",
        description: "First author of a research paper published in Springer (PCCDS). Developed an AI ensemble model achieving 90.75% accuracy.",
        stats: &["600+ Access", "15 Citations"],
        icon: Icon::BookOpen,
        link: Some("https://link.springer.com/chapter/10.1007/978-981-19-8742-7_15"),
    },
    ProjectCard {
        title: "Toastmasters Revival",
        category: "Leadership",
        description: "As Chartering President, relaunched a 5-year dormant club. Achieved 100% member retention and 95%+ satisfaction scores.",
        stats: &["25+ New Members", "Contest Winner"],
        icon: Icon::Users,
        link: None,
    },
    ProjectCard {
        title: "GoI ULIP Dashboard",
        category: "Product Design",
        description: "Designed an end-to-end IoT dashboard for the Government of India's ULIP cold chain plan, enabling operational savings.",
        stats: &["15% Savings", "IoT Integration"],
        icon: Icon::TrendingUp,
        link: None,
    },
];

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "IIM Lucknow",
        degree: "Master of Business Administration (MBA)",
        year_range: "2025 - 2027",
        details: "Team SynapsE Executive Member (IT & Analytics). Focus on Product Strategy & Marketing.",
        accent: "border-cyan-500/50",
    },
    EducationEntry {
        institution: "NIT Andhra Pradesh",
        degree: "B.Tech, Computer Science",
        year_range: "2018 - 2022",
        details: "80.8%. Entrepreneurship Cell Executive. Google Cloud Certified Architect.",
        accent: "border-slate-700",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://www.linkedin.com/in/glint-hk/",
        icon: Icon::Linkedin,
        label: "LinkedIn",
    },
    SocialLink {
        href: "mailto:hrishikeshkumar16@gmail.com",
        icon: Icon::Mail,
        label: "Email",
    },
    SocialLink {
        href: "https://github.com/glint-hk",
        icon: Icon::Github,
        label: "Github",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets() {
        let labels = NavTarget::ALL.map(NavTarget::label);
        assert_eq!(labels, ["About", "Experience", "Impact", "Education"]);
        for target in NavTarget::ALL {
            assert_eq!(target.href(), format!("#{}", target.id()));
            assert_eq!(target.id(), target.label().to_lowercase());
        }
    }

    #[test]
    fn test_nav_target_parse() {
        assert_eq!("about".parse::<NavTarget>(), Ok(NavTarget::About));
        assert_eq!("#impact".parse::<NavTarget>(), Ok(NavTarget::Impact));
        assert_eq!("Education".parse::<NavTarget>(), Ok(NavTarget::Education));
        assert_eq!(
            "#blog".parse::<NavTarget>(),
            Err(UnknownSection("#blog".to_string()))
        );
    }

    #[test]
    fn test_percent_bounds() {
        assert_eq!(Percent::new(0).get(), 0);
        assert_eq!(Percent::new(100).get(), 100);
    }

    #[test]
    #[should_panic]
    fn test_percent_new_rejects_out_of_range() {
        let _ = Percent::new(150);
    }

    #[test]
    fn test_percent_width_for_every_value() {
        for v in 0..=100u8 {
            let p = Percent::new(v);
            assert_eq!(p.width_style(), format!("{v}%"));
        }
    }

    #[test]
    fn test_alignment_parse_falls_back_to_right() {
        assert_eq!(Alignment::from("left"), Alignment::Left);
        assert_eq!(Alignment::from(" LEFT "), Alignment::Left);
        assert_eq!(Alignment::from("right"), Alignment::Right);
        assert_eq!(Alignment::from("center"), Alignment::Right);
        assert_eq!(Alignment::from(""), Alignment::Right);
        assert_eq!(Alignment::default(), Alignment::Right);
    }

    #[test]
    fn test_timeline_alternates_in_given_data() {
        let sides = TIMELINE.iter().map(|e| e.alignment).collect::<Vec<_>>();
        assert_eq!(
            sides,
            [
                Alignment::Right,
                Alignment::Left,
                Alignment::Right,
                Alignment::Left
            ]
        );
        for entry in TIMELINE {
            assert!(!entry.achievements.is_empty());
            assert!(!entry.tags.is_empty());
        }
    }

    #[test]
    fn test_only_publication_has_link() {
        let linked = PROJECTS
            .iter()
            .filter(|p| p.link.is_some())
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(linked, ["Cassava Leaf Disease Detection"]);
        let ulip = PROJECTS
            .iter()
            .find(|p| p.title == "GoI ULIP Dashboard")
            .expect("ULIP card should exist");
        assert!(ulip.link.is_none());
    }

    #[test]
    fn test_fixed_counts() {
        assert_eq!(STAT_TILES.len(), 4);
        assert_eq!(EDUCATION.len(), 2);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert!(STAT_TILES.windows(2).all(|w| w[0].delay < w[1].delay));
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:hrishikeshkumar16@gmail.com");
        assert!(SOCIAL_LINKS.iter().any(|l| l.href == PROFILE.mailto()));
        for url in PROFILE.same_as() {
            assert!(SOCIAL_LINKS.iter().any(|l| l.href == url));
        }
    }
}
