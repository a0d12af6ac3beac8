//! Literal page content.
//!
//! Everything rendered on the page comes from the collections in this module.
//! They are plain `static` slices so components can borrow them for the
//! lifetime of the program without cloning.

/// Display name used by the hero and footer.
pub const OWNER_NAME: &str = "Alex Chen";
pub const OWNER_INITIALS: &str = "CD";
pub const BRAND: &str = "CyberDev";
pub const EMAIL: &str = "alex.chen@cyberdev.com";
pub const PHONE_DISPLAY: &str = "+1 (555) 123-4567";
pub const PHONE_HREF: &str = "tel:+15551234567";
pub const LOCATION: &str = "San Francisco, CA";

/// The three neon colors every category tag resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    CyberBlue,
    CyberGreen,
    CyberMagenta,
}

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Self::CyberBlue => "text-cyber-blue",
            Self::CyberGreen => "text-cyber-green",
            Self::CyberMagenta => "text-cyber-magenta",
        }
    }

    pub fn border_class(self) -> &'static str {
        match self {
            Self::CyberBlue => "border-cyber-blue",
            Self::CyberGreen => "border-cyber-green",
            Self::CyberMagenta => "border-cyber-magenta",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            Self::CyberBlue => "bg-cyber-blue",
            Self::CyberGreen => "bg-cyber-green",
            Self::CyberMagenta => "bg-cyber-magenta",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::CyberBlue => "#00f0ff",
            Self::CyberGreen => "#39ff14",
            Self::CyberMagenta => "#ff00ff",
        }
    }

    /// Comma separated RGB channels, for building `rgba(...)` values.
    pub fn rgb(self) -> &'static str {
        match self {
            Self::CyberBlue => "0, 240, 255",
            Self::CyberGreen => "57, 255, 20",
            Self::CyberMagenta => "255, 0, 255",
        }
    }

    pub fn glow(self, spread_px: u32, alpha: f32) -> String {
        format!("box-shadow: 0 0 {spread_px}px rgba({}, {alpha})", self.rgb())
    }

    pub fn bar_gradient(self) -> String {
        format!("background: linear-gradient(90deg, {}, #ffffff)", self.hex())
    }
}

/// Icon glyphs, rendered through the lucide icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Award,
    Briefcase,
    Building,
    Cloud,
    Code,
    Database,
    Download,
    ExternalLink,
    GitBranch,
    Github,
    GraduationCap,
    Heart,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Monitor,
    Phone,
    Rocket,
    Send,
    Server,
    Shield,
    Target,
    Terminal,
    Twitter,
    User,
    X,
    Zap,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Award => "icon-award",
            Self::Briefcase => "icon-briefcase",
            Self::Building => "icon-building",
            Self::Cloud => "icon-cloud",
            Self::Code => "icon-code",
            Self::Database => "icon-database",
            Self::Download => "icon-download",
            Self::ExternalLink => "icon-external-link",
            Self::GitBranch => "icon-git-branch",
            Self::Github => "icon-github",
            Self::GraduationCap => "icon-graduation-cap",
            Self::Heart => "icon-heart",
            Self::Linkedin => "icon-linkedin",
            Self::Mail => "icon-mail",
            Self::MapPin => "icon-map-pin",
            Self::Menu => "icon-menu",
            Self::MessageSquare => "icon-message-square",
            Self::Monitor => "icon-monitor",
            Self::Phone => "icon-phone",
            Self::Rocket => "icon-rocket",
            Self::Send => "icon-send",
            Self::Server => "icon-server",
            Self::Shield => "icon-shield",
            Self::Target => "icon-target",
            Self::Terminal => "icon-terminal",
            Self::Twitter => "icon-twitter",
            Self::User => "icon-user",
            Self::X => "icon-x",
            Self::Zap => "icon-zap",
        }
    }
}

/// Two-tone heading, gradient rule and blurb that open a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTitle {
    pub lead: &'static str,
    pub lead_class: &'static str,
    pub tail: &'static str,
    pub tail_class: &'static str,
    pub rule: &'static str,
    pub blurb: &'static str,
}

pub const ABOUT_TITLE: SectionTitle = SectionTitle {
    lead: "About",
    lead_class: "neon-blue",
    tail: "Me",
    tail_class: "text-cyber-magenta",
    rule: "from-cyber-blue to-cyber-magenta",
    blurb: "A passionate DevOps engineer specializing in cloud architecture and automation, bridging the gap between development and operations in the digital frontier.",
};

pub const JOURNEY_TITLE: SectionTitle = SectionTitle {
    lead: "My",
    lead_class: "neon-green",
    tail: "Journey",
    tail_class: "text-cyber-magenta",
    rule: "from-cyber-green to-cyber-magenta",
    blurb: "From curious student to cloud architect - every milestone shaped my expertise in the ever-evolving DevOps landscape.",
};

pub const PROJECTS_TITLE: SectionTitle = SectionTitle {
    lead: "Featured",
    lead_class: "neon-blue",
    tail: "Projects",
    tail_class: "text-cyber-green",
    rule: "from-cyber-blue to-cyber-green",
    blurb: "Cutting-edge DevOps solutions that push the boundaries of cloud infrastructure and automation technologies.",
};

pub const SERVICES_TITLE: SectionTitle = SectionTitle {
    lead: "DevOps",
    lead_class: "neon-magenta",
    tail: "Services",
    tail_class: "text-cyber-blue",
    rule: "from-cyber-magenta to-cyber-blue",
    blurb: "Transform your infrastructure with cutting-edge DevOps solutions designed for the cyberpunk era of cloud computing.",
};

pub const CONTACT_TITLE: SectionTitle = SectionTitle {
    lead: "Initialize",
    lead_class: "neon-green",
    tail: "Contact",
    tail_class: "text-cyber-blue",
    rule: "from-cyber-green to-cyber-blue",
    blurb: "Ready to build the future? Let's connect and discuss how we can transform your infrastructure together.",
};

pub const SERVICES_PITCH: &str =
    "Let's discuss your project and build something extraordinary together.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        anchor: "#home",
    },
    NavLink {
        label: "About",
        anchor: "#about",
    },
    NavLink {
        label: "Journey",
        anchor: "#journey",
    },
    NavLink {
        label: "Projects",
        anchor: "#projects",
    },
    NavLink {
        label: "Services",
        anchor: "#services",
    },
    NavLink {
        label: "Contact",
        anchor: "#contact",
    },
];

/// A decorative icon floating over the hero backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingIcon {
    pub icon: Icon,
    pub accent: Accent,
    pub delay_secs: f32,
}

impl FloatingIcon {
    /// Absolute placement of the `index`th icon, as `left`/`top` percentages.
    pub fn position(index: usize) -> (u32, u32) {
        let index = index as u32;
        (10 + index * 15, 20 + (index % 2) * 20)
    }
}

pub static HERO_ICONS: &[FloatingIcon] = &[
    FloatingIcon {
        icon: Icon::Cloud,
        accent: Accent::CyberBlue,
        delay_secs: 0.2,
    },
    FloatingIcon {
        icon: Icon::Server,
        accent: Accent::CyberMagenta,
        delay_secs: 0.4,
    },
    FloatingIcon {
        icon: Icon::GitBranch,
        accent: Accent::CyberGreen,
        delay_secs: 0.6,
    },
    FloatingIcon {
        icon: Icon::Database,
        accent: Accent::CyberBlue,
        delay_secs: 0.8,
    },
    FloatingIcon {
        icon: Icon::Shield,
        accent: Accent::CyberMagenta,
        delay_secs: 1.0,
    },
    FloatingIcon {
        icon: Icon::Zap,
        accent: Accent::CyberGreen,
        delay_secs: 1.2,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
    pub icon: Icon,
    pub accent: Accent,
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "AWS Cloud Services",
        level: 85,
        icon: Icon::Cloud,
        accent: Accent::CyberBlue,
    },
    Skill {
        name: "CI/CD Pipelines",
        level: 90,
        icon: Icon::GitBranch,
        accent: Accent::CyberGreen,
    },
    Skill {
        name: "Infrastructure as Code",
        level: 80,
        icon: Icon::Code,
        accent: Accent::CyberMagenta,
    },
    Skill {
        name: "Container Orchestration",
        level: 75,
        icon: Icon::Server,
        accent: Accent::CyberBlue,
    },
    Skill {
        name: "Security & Compliance",
        level: 70,
        icon: Icon::Shield,
        accent: Accent::CyberGreen,
    },
    Skill {
        name: "Database Management",
        level: 85,
        icon: Icon::Database,
        accent: Accent::CyberMagenta,
    },
];

pub static CERTIFICATIONS: &[&str] = &[
    "AWS Cloud Practitioner",
    "AWS Solutions Architect Associate",
    "Docker Certified Associate",
    "Kubernetes Administrator (CKA)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneKind {
    Work,
    Certification,
    Education,
}

impl MilestoneKind {
    pub fn icon(self) -> Icon {
        match self {
            Self::Work => Icon::Briefcase,
            Self::Certification => Icon::Award,
            Self::Education => Icon::GraduationCap,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Certification => "Certification",
            Self::Education => "Education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub kind: MilestoneKind,
    pub icon: Icon,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub accent: Accent,
}

/// Career milestones, newest first. The literal order is the display order.
pub static MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2024",
        title: "Senior DevOps Engineer",
        organization: "CyberTech Solutions",
        kind: MilestoneKind::Work,
        icon: Icon::Briefcase,
        description: "Leading cloud migration projects and implementing advanced CI/CD pipelines for enterprise clients.",
        achievements: &[
            "Reduced deployment time by 75%",
            "Implemented multi-region disaster recovery",
            "Led team of 5 junior engineers",
        ],
        accent: Accent::CyberBlue,
    },
    Milestone {
        year: "2023",
        title: "AWS Solutions Architect Associate",
        organization: "Amazon Web Services",
        kind: MilestoneKind::Certification,
        icon: Icon::Award,
        description: "Achieved advanced AWS certification, demonstrating expertise in designing distributed systems.",
        achievements: &[
            "Scored 920/1000 on certification exam",
            "Specialized in serverless architectures",
            "Expert in cost optimization strategies",
        ],
        accent: Accent::CyberGreen,
    },
    Milestone {
        year: "2022",
        title: "DevOps Engineer",
        organization: "StartupLab Inc.",
        kind: MilestoneKind::Work,
        icon: Icon::Rocket,
        description: "Built scalable infrastructure from ground up, enabling rapid growth and deployment automation.",
        achievements: &[
            "Implemented Infrastructure as Code",
            "Set up monitoring and alerting systems",
            "Achieved 99.9% uptime SLA",
        ],
        accent: Accent::CyberMagenta,
    },
    Milestone {
        year: "2021",
        title: "Cloud Practitioner Certification",
        organization: "Amazon Web Services",
        kind: MilestoneKind::Certification,
        icon: Icon::Award,
        description: "First step into cloud computing, establishing foundation in AWS services and best practices.",
        achievements: &[
            "Comprehensive understanding of AWS ecosystem",
            "Cloud security fundamentals",
            "Cost management expertise",
        ],
        accent: Accent::CyberBlue,
    },
    Milestone {
        year: "2020",
        title: "Systems Administrator",
        organization: "TechCorp Ltd.",
        kind: MilestoneKind::Work,
        icon: Icon::Briefcase,
        description: "Managed on-premises infrastructure and began automation journey with scripting and monitoring.",
        achievements: &[
            "Automated 80% of routine tasks",
            "Implemented backup and recovery systems",
            "Reduced server downtime by 60%",
        ],
        accent: Accent::CyberGreen,
    },
    Milestone {
        year: "2019",
        title: "Bachelor of Computer Science",
        organization: "Cyber University",
        kind: MilestoneKind::Education,
        icon: Icon::GraduationCap,
        description: "Graduated with honors, specializing in distributed systems and network security.",
        achievements: &[
            "Summa Cum Laude (GPA: 3.9/4.0)",
            "Thesis on container orchestration",
            "President of DevOps Student Club",
        ],
        accent: Accent::CyberMagenta,
    },
];

/// A project category. `all` is not a category; see [`crate::gallery::Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cloud,
    Cicd,
    Security,
    Monitoring,
    Database,
    Infrastructure,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Cloud,
        Self::Cicd,
        Self::Security,
        Self::Monitoring,
        Self::Database,
        Self::Infrastructure,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Cicd => "cicd",
            Self::Security => "security",
            Self::Monitoring => "monitoring",
            Self::Database => "database",
            Self::Infrastructure => "infrastructure",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cloud => "Cloud",
            Self::Cicd => "CI/CD",
            Self::Security => "Security",
            Self::Monitoring => "Monitoring",
            Self::Database => "Database",
            Self::Infrastructure => "Infrastructure",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Cloud => Icon::Cloud,
            Self::Cicd => Icon::GitBranch,
            Self::Security => Icon::Shield,
            Self::Monitoring => Icon::Monitor,
            Self::Database => Icon::Database,
            Self::Infrastructure => Icon::Server,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Production,
    Beta,
    Development,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Beta => "Beta",
            Self::Development => "Development",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Self::Production => Accent::CyberGreen,
            Self::Beta => Accent::CyberBlue,
            Self::Development => Accent::CyberMagenta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: Category,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub repository: &'static str,
    pub demo: &'static str,
    pub status: ProjectStatus,
    pub icon: Icon,
}

impl Project {
    /// Technologies shown as chips on the card.
    pub const TECH_PREVIEW: usize = 3;
    /// Features listed on the card.
    pub const FEATURE_PREVIEW: usize = 2;

    pub fn tech_preview(&self) -> &'static [&'static str] {
        &self.technologies[..self.technologies.len().min(Self::TECH_PREVIEW)]
    }

    /// Number of technologies left out of [`Self::tech_preview`].
    pub fn hidden_tech_count(&self) -> usize {
        self.technologies.len().saturating_sub(Self::TECH_PREVIEW)
    }

    pub fn feature_preview(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(Self::FEATURE_PREVIEW)]
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Multi-Cloud Infrastructure Platform",
        description: "Enterprise-grade infrastructure automation platform supporting AWS, Azure, and GCP with unified management dashboard.",
        image: "https://images.pexels.com/photos/1181673/pexels-photo-1181673.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Cloud,
        technologies: &["Terraform", "AWS", "Azure", "Kubernetes", "Helm"],
        features: &[
            "Multi-cloud resource management",
            "Cost optimization algorithms",
            "Automated disaster recovery",
            "Real-time monitoring dashboard",
        ],
        repository: "https://github.com",
        demo: "https://demo.com",
        status: ProjectStatus::Production,
        icon: Icon::Cloud,
    },
    Project {
        id: 2,
        title: "Serverless CI/CD Pipeline",
        description: "Fully serverless continuous integration and deployment pipeline with automatic scaling and cost optimization.",
        image: "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Cicd,
        technologies: &["AWS Lambda", "CodePipeline", "Docker", "GitHub Actions"],
        features: &[
            "Zero-infrastructure maintenance",
            "Automatic parallel testing",
            "Blue-green deployments",
            "Rollback mechanisms",
        ],
        repository: "https://github.com",
        demo: "https://demo.com",
        status: ProjectStatus::Production,
        icon: Icon::GitBranch,
    },
    Project {
        id: 3,
        title: "Container Security Scanner",
        description: "Advanced container vulnerability scanner with ML-powered threat detection and automated remediation suggestions.",
        image: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Security,
        technologies: &["Go", "Docker", "Kubernetes", "PostgreSQL", "Redis"],
        features: &[
            "Real-time vulnerability scanning",
            "ML-based threat detection",
            "Compliance reporting",
            "Integration with CI/CD pipelines",
        ],
        repository: "https://github.com",
        demo: "https://demo.com",
        status: ProjectStatus::Beta,
        icon: Icon::Shield,
    },
    Project {
        id: 4,
        title: "Microservices Monitoring Suite",
        description: "Comprehensive monitoring and observability platform for microservices architectures with distributed tracing.",
        image: "https://images.pexels.com/photos/1181677/pexels-photo-1181677.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Monitoring,
        technologies: &["Prometheus", "Grafana", "Jaeger", "Elasticsearch", "Kafka"],
        features: &[
            "Distributed tracing",
            "Custom metrics dashboards",
            "Intelligent alerting",
            "Performance analytics",
        ],
        repository: "https://github.com",
        demo: "https://demo.com",
        status: ProjectStatus::Production,
        icon: Icon::Monitor,
    },
    Project {
        id: 5,
        title: "Database Automation Toolkit",
        description: "Automated database provisioning, backup, and scaling toolkit for multi-database environments.",
        image: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Database,
        technologies: &["Python", "Ansible", "PostgreSQL", "MongoDB", "Redis"],
        features: &[
            "Automated provisioning",
            "Intelligent backup strategies",
            "Performance optimization",
            "Multi-database support",
        ],
        repository: "https://github.com",
        demo: "https://demo.com",
        status: ProjectStatus::Production,
        icon: Icon::Database,
    },
    Project {
        id: 6,
        title: "Edge Computing Orchestrator",
        description: "Distributed edge computing management platform with automatic workload placement and optimization.",
        image: "https://images.pexels.com/photos/1181304/pexels-photo-1181304.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Infrastructure,
        technologies: &["Kubernetes", "Docker", "MQTT", "InfluxDB", "Node.js"],
        features: &[
            "Edge node management",
            "Workload orchestration",
            "Latency optimization",
            "IoT device integration",
        ],
        repository: "https://github.com",
        demo: "https://demo.com",
        status: ProjectStatus::Development,
        icon: Icon::Server,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub icon: Icon,
    pub accent: Accent,
    pub price: &'static str,
}

pub static SERVICES: &[Service] = &[
    Service {
        title: "Cloud Architecture",
        description: "Design and implement scalable, secure cloud infrastructure on AWS, Azure, and GCP with cost optimization.",
        features: &[
            "Multi-cloud strategy development",
            "Serverless architecture design",
            "Cost optimization analysis",
            "Migration planning & execution",
        ],
        icon: Icon::Cloud,
        accent: Accent::CyberBlue,
        price: "From $150/hr",
    },
    Service {
        title: "CI/CD Pipeline Setup",
        description: "Build robust continuous integration and deployment pipelines with automated testing and deployment.",
        features: &[
            "Pipeline architecture design",
            "Automated testing integration",
            "Blue-green deployments",
            "Rollback strategies",
        ],
        icon: Icon::GitBranch,
        accent: Accent::CyberGreen,
        price: "From $120/hr",
    },
    Service {
        title: "Infrastructure as Code",
        description: "Implement infrastructure automation using Terraform, CloudFormation, and other IaC tools.",
        features: &[
            "Terraform/CloudFormation templates",
            "Infrastructure versioning",
            "Environment standardization",
            "Automated provisioning",
        ],
        icon: Icon::Database,
        accent: Accent::CyberMagenta,
        price: "From $130/hr",
    },
    Service {
        title: "Monitoring & Observability",
        description: "Set up comprehensive monitoring, logging, and alerting systems for proactive issue resolution.",
        features: &[
            "Custom dashboards & metrics",
            "Distributed tracing setup",
            "Alert management",
            "Performance optimization",
        ],
        icon: Icon::Monitor,
        accent: Accent::CyberBlue,
        price: "From $110/hr",
    },
    Service {
        title: "Security & Compliance",
        description: "Implement security best practices and ensure compliance with industry standards and regulations.",
        features: &[
            "Security audit & assessment",
            "Compliance implementation",
            "Access control setup",
            "Vulnerability scanning",
        ],
        icon: Icon::Shield,
        accent: Accent::CyberGreen,
        price: "From $140/hr",
    },
    Service {
        title: "Container Orchestration",
        description: "Deploy and manage containerized applications using Kubernetes, Docker Swarm, and other platforms.",
        features: &[
            "Kubernetes cluster setup",
            "Container optimization",
            "Service mesh implementation",
            "Auto-scaling configuration",
        ],
        icon: Icon::Server,
        accent: Accent::CyberMagenta,
        price: "From $125/hr",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfoItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub static CONTACT_INFO: &[ContactInfoItem] = &[
    ContactInfoItem {
        label: "Email",
        value: EMAIL,
        href: "mailto:alex.chen@cyberdev.com",
        icon: Icon::Mail,
        accent: Accent::CyberBlue,
    },
    ContactInfoItem {
        label: "Phone",
        value: PHONE_DISPLAY,
        href: PHONE_HREF,
        icon: Icon::Phone,
        accent: Accent::CyberGreen,
    },
    ContactInfoItem {
        label: "Location",
        value: LOCATION,
        href: "#",
        icon: Icon::MapPin,
        accent: Accent::CyberMagenta,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

impl SocialLink {
    /// `mailto:` and `tel:` links stay in the current browsing context.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        icon: Icon::Github,
        accent: Accent::CyberBlue,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: Icon::Linkedin,
        accent: Accent::CyberGreen,
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
        icon: Icon::Twitter,
        accent: Accent::CyberMagenta,
    },
];

pub static FOOTER_SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        icon: Icon::Github,
        accent: Accent::CyberBlue,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: Icon::Linkedin,
        accent: Accent::CyberBlue,
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
        icon: Icon::Twitter,
        accent: Accent::CyberBlue,
    },
    SocialLink {
        label: "Email",
        href: "mailto:alex.chen@cyberdev.com",
        icon: Icon::Mail,
        accent: Accent::CyberBlue,
    },
];

/// Footer quick links; the hero anchor is reached through the brand and "Back to Top".
pub fn quick_links() -> impl Iterator<Item = &'static NavLink> {
    NAV_LINKS.iter().filter(|link| link.anchor != "#home")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn project_ids_are_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn every_category_has_a_project() {
        for category in Category::ALL {
            assert!(
                PROJECTS.iter().any(|p| p.category == category),
                "no project in {}",
                category.id()
            );
        }
    }

    #[test]
    fn tech_preview_reports_overflow() {
        let platform = &PROJECTS[0];
        assert_eq!(platform.tech_preview(), &["Terraform", "AWS", "Azure"]);
        assert_eq!(platform.hidden_tech_count(), 2);

        let pipeline = &PROJECTS[1];
        assert_eq!(pipeline.hidden_tech_count(), 1);
        assert_eq!(pipeline.feature_preview().len(), 2);
    }

    #[test]
    fn floating_icons_alternate_rows() {
        assert_eq!(FloatingIcon::position(0), (10, 20));
        assert_eq!(FloatingIcon::position(1), (25, 40));
        assert_eq!(FloatingIcon::position(5), (85, 40));
    }

    #[test]
    fn quick_links_skip_home() {
        let anchors = quick_links().map(|l| l.anchor).collect::<Vec<_>>();
        assert_eq!(
            anchors,
            ["#about", "#journey", "#projects", "#services", "#contact"]
        );
    }

    #[test]
    fn only_web_profiles_are_external() {
        assert!(SOCIAL_LINKS.iter().all(SocialLink::is_external));
        let email = FOOTER_SOCIAL_LINKS.last().unwrap();
        assert!(!email.is_external());
    }

    #[test]
    fn accent_glow_uses_rgb_channels() {
        assert_eq!(
            Accent::CyberGreen.glow(20, 0.1),
            "box-shadow: 0 0 20px rgba(57, 255, 20, 0.1)"
        );
    }

    const TITLES: [SectionTitle; 5] = [
        ABOUT_TITLE,
        JOURNEY_TITLE,
        PROJECTS_TITLE,
        SERVICES_TITLE,
        CONTACT_TITLE,
    ];

    #[test]
    fn title_rules_run_from_lead_to_tail_color() {
        for title in TITLES {
            let lead = title.lead_class.trim_start_matches("neon-");
            let tail = title.tail_class.trim_start_matches("text-");
            assert_eq!(title.rule, format!("from-cyber-{lead} to-{tail}"), "{}", title.tail);
        }
    }

    #[test]
    fn neon_classes_are_styled() {
        let css = include_str!("../input.css");
        for title in TITLES {
            let selector = format!(".{} {{", title.lead_class);
            assert!(css.contains(&selector), "{selector} missing from input.css");
        }
    }

    #[test]
    fn section_titles_keep_their_copy() {
        assert_eq!((CONTACT_TITLE.lead, CONTACT_TITLE.tail), ("Initialize", "Contact"));
        assert_eq!((SERVICES_TITLE.lead, SERVICES_TITLE.tail), ("DevOps", "Services"));
        assert_eq!(JOURNEY_TITLE.tail_class, "text-cyber-magenta");
        assert!(CONTACT_TITLE.blurb.starts_with("Ready to build the future?"));
        assert!(PROJECTS_TITLE.blurb.starts_with("Cutting-edge DevOps solutions"));
    }
}
