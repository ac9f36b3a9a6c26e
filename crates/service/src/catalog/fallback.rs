//! Built-in catalog served when the store is unreachable or has no matching rows.
//!
//! It is an independent copy: nothing keeps it in sync with the store.

use super::domain::{ProjectRecord, ServiceDetails, ServiceRecord};

/// Immutable in-process dataset with the same shape as the API output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    services: Vec<ServiceRecord>,
    projects: Vec<ProjectRecord>,
}

impl StaticCatalog {
    pub fn new(services: Vec<ServiceRecord>, projects: Vec<ProjectRecord>) -> Self {
        Self { services, projects }
    }

    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn service_by_slug(&self, slug: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.slug == slug)
    }

    /// Projects whose service reference is exactly the service's id.
    pub fn projects_for_service(&self, service: &ServiceRecord) -> Vec<ProjectRecord> {
        self.projects
            .iter()
            .filter(|p| p.service_id.as_deref() == Some(service.id.as_str()))
            .cloned()
            .collect()
    }

    /// Projects for a slug; empty when no static service has that slug.
    pub fn projects_for_slug(&self, slug: &str) -> Vec<ProjectRecord> {
        self.service_by_slug(slug)
            .map(|s| self.projects_for_service(s))
            .unwrap_or_default()
    }

    pub fn project_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The dataset shipped with the site.
    pub fn builtin() -> Self {
        Self::new(builtin_services(), builtin_projects())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const GRADIENT: &str = "from-[#3480cb] to-[#52b9fd]";

struct ServiceSeed {
    id: &'static str,
    slug: &'static str,
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    features: [&'static str; 3],
    overview: &'static str,
    process: [&'static str; 4],
    technologies: &'static [&'static str],
    timeline: &'static str,
    deliverables: [&'static str; 4],
}

const SERVICE_SEEDS: &[ServiceSeed] = &[
    ServiceSeed {
        id: "1",
        slug: "web",
        title: "Website Development",
        icon: "code",
        description: "Enterprise-grade web applications built with modern frameworks, optimized for performance, scalability, and user experience.",
        features: ["React & Next.js", "Performance Optimized", "Scalable Architecture"],
        overview: "Build scalable, high-performance web applications using cutting-edge technologies and industry best practices.",
        process: [
            "Discovery & Planning",
            "Architecture Design",
            "Development & Testing",
            "Deployment & Optimization",
        ],
        technologies: &["React/Next.js", "Node.js", "TypeScript", "GraphQL", "AWS/Azure"],
        timeline: "4-12 weeks",
        deliverables: [
            "Responsive Web Application",
            "Source Code",
            "Documentation",
            "Deployment Guide",
        ],
    },
    ServiceSeed {
        id: "2",
        slug: "mobile",
        title: "Mobile Application",
        icon: "smartphone",
        description: "Native and cross-platform mobile solutions delivering exceptional user experiences across iOS and Android platforms.",
        features: ["Cross-Platform", "Native Performance", "App Store Ready"],
        overview: "Create native and cross-platform mobile applications with exceptional user experience and performance.",
        process: [
            "UX Research",
            "Prototype Development",
            "Native Development",
            "App Store Deployment",
        ],
        technologies: &["React Native", "Flutter", "iOS SDK", "Android SDK", "Firebase"],
        timeline: "6-16 weeks",
        deliverables: [
            "Mobile Application",
            "App Store Listing",
            "Analytics Setup",
            "Maintenance Plan",
        ],
    },
    ServiceSeed {
        id: "3",
        slug: "software",
        title: "Software Development",
        icon: "settings",
        description: "Custom software solutions engineered to solve complex business challenges with reliability and scalability.",
        features: ["Custom Solutions", "Enterprise Architecture", "Legacy Integration"],
        overview: "Custom software solutions engineered to solve complex business challenges with reliability and scalability.",
        process: [
            "Requirements Gathering",
            "System Architecture",
            "Agile Development",
            "Quality Assurance",
        ],
        technologies: &["Java", "Python", ".NET", "PostgreSQL", "Microservices"],
        timeline: "8-24 weeks",
        deliverables: [
            "Custom Software",
            "Source Code",
            "System Architecture Documentation",
            "User Training",
        ],
    },
    ServiceSeed {
        id: "4",
        slug: "ai",
        title: "AI & Automation",
        icon: "bot",
        description: "Intelligent automation solutions and machine learning implementations to optimize operations and drive efficiency.",
        features: ["Machine Learning", "Process Automation", "Intelligent Analytics"],
        overview: "Implement intelligent automation and machine learning solutions to optimize business processes.",
        process: ["Process Analysis", "AI Model Development", "Integration", "Training & Support"],
        technologies: &["Python", "TensorFlow", "OpenAI API", "Azure AI", "Automation Tools"],
        timeline: "8-20 weeks",
        deliverables: ["AI Model", "Automation Scripts", "Integration Guide", "Training Materials"],
    },
    ServiceSeed {
        id: "5",
        slug: "consulting",
        title: "Consulting",
        icon: "lightbulb",
        description: "Strategic technology consulting and digital transformation guidance to accelerate business growth and innovation.",
        features: ["Digital Strategy", "Technology Roadmap", "Innovation Planning"],
        overview: "Strategic technology consulting to guide digital transformation and innovation initiatives.",
        process: [
            "Business Analysis",
            "Technology Assessment",
            "Strategy Development",
            "Implementation Roadmap",
        ],
        technologies: &[
            "Enterprise Architecture",
            "Digital Strategy",
            "Innovation Framework",
            "Change Management",
        ],
        timeline: "2-6 weeks",
        deliverables: [
            "Strategic Report",
            "Technology Roadmap",
            "Implementation Plan",
            "ROI Analysis",
        ],
    },
    ServiceSeed {
        id: "6",
        slug: "digital-marketing",
        title: "Digital Marketing",
        icon: "paintbrush",
        description: "Data-driven marketing strategies and campaigns to boost online presence and drive measurable business growth.",
        features: ["SEO & SEM", "Social Media Marketing", "Analytics & ROI Tracking"],
        overview: "Comprehensive digital marketing strategies designed to increase brand visibility, generate qualified leads, and drive measurable business growth.",
        process: [
            "Market Research & Competitor Analysis",
            "Target Audience & Persona Development",
            "Multi-Channel Strategy Development",
            "Campaign Implementation & Optimization",
        ],
        technologies: &[
            "Google Analytics 4",
            "Google Ads & Facebook Ads",
            "HubSpot CRM",
            "Mailchimp & Klaviyo",
            "SEMrush & Ahrefs",
        ],
        timeline: "2-6 weeks",
        deliverables: [
            "Digital Marketing Strategy",
            "Campaign Setup & Launch",
            "Analytics Dashboard",
            "Monthly Performance Reports",
        ],
    },
];

fn builtin_services() -> Vec<ServiceRecord> {
    SERVICE_SEEDS
        .iter()
        .map(|s| ServiceRecord {
            id: s.id.to_string(),
            slug: s.slug.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            icon: Some(s.icon.to_string()),
            gradient: Some(GRADIENT.to_string()),
            features: strings(&s.features),
            details: Some(ServiceDetails {
                overview: s.overview.to_string(),
                process: strings(&s.process),
                technologies: strings(s.technologies),
                timeline: s.timeline.to_string(),
                deliverables: strings(&s.deliverables),
            }),
        })
        .collect()
}

struct ProjectSeed {
    id: &'static str,
    service_id: &'static str,
    title: &'static str,
    description: &'static str,
    brief: &'static str,
    image_prefix: &'static str,
    tags: &'static [&'static str],
    features: &'static [&'static str],
    video_url: Option<&'static str>,
    live_url: &'static str,
}

const STACK: &[&str] = &["React", "Node.js", "MongoDB", "Tailwind CSS"];

const PROJECT_SEEDS: &[ProjectSeed] = &[
    ProjectSeed {
        id: "10",
        service_id: "1",
        title: "Prototype for Real-Time Hospital-Blood Bank Coordination Platform",
        description: "A Smart System for Efficient Blood Request Management and Rapid Emergency Response",
        brief: "A web-based healthcare logistics platform connecting hospitals and blood banks with real-time request, delivery and coordination.",
        image_prefix: "images/1",
        tags: STACK,
        features: &[
            "Role-Based Dashboards for Hospitals, Blood Banks, Drivers, and Admins",
            "Blood Bank management system with inventory tracking",
            "Real-time delivery tracking and status updates",
        ],
        video_url: Some("https://www.youtube.com/embed/cfXZBSW-RSI"),
        live_url: "https://example.com",
    },
    ProjectSeed {
        id: "5",
        service_id: "1",
        title: "Professional Restaurant Website Design Prototype",
        description: "Enhancing Online Presence and Customer Engagement for Restaurants",
        brief: "A fully responsive restaurant website prototype with clean aesthetics, intuitive navigation and mobile-first layout.",
        image_prefix: "images/2",
        tags: STACK,
        features: &[
            "Menu section with categorized items rendered from reusable components",
            "Contact & reservation forms with an embedded map",
            "Mobile-first responsive design",
        ],
        video_url: Some("https://www.youtube.com/embed/9hA-mSbXZh4"),
        live_url: "https://restaurant-website-deploy-7emo.vercel.app",
    },
    ProjectSeed {
        id: "11",
        service_id: "1",
        title: "Smart QR-Based Restaurant Menu and Management App",
        description: "Digitizing Dining Experiences with Contactless Menus and Streamlined Management",
        brief: "A digital menu system for customers and restaurant owners, with an admin panel overseeing multiple restaurants.",
        image_prefix: "images/3",
        tags: STACK,
        features: &[
            "QR code table ordering",
            "Real-time order display on the owner dashboard and kitchen display",
            "Multi-restaurant management through the admin panel",
        ],
        video_url: Some("https://www.youtube.com/embed/DzWkxU0Y1SY"),
        live_url: "https://example.com",
    },
    ProjectSeed {
        id: "1",
        service_id: "4",
        title: "eclean.live",
        description: "AI based SaaS platform for hygiene and cleaning",
        brief: "An AI-powered SaaS platform for facility management with real-time monitoring, predictive analytics and workflow automation.",
        image_prefix: "images/4",
        tags: STACK,
        features: &[
            "Real-time monitoring of cleanliness status and task completion",
            "Predictive maintenance and scheduling",
            "Multi-location management with centralized control",
        ],
        video_url: None,
        live_url: "https://eclean.live",
    },
];

fn builtin_projects() -> Vec<ProjectRecord> {
    PROJECT_SEEDS
        .iter()
        .map(|p| ProjectRecord {
            id: p.id.to_string(),
            title: p.title.to_string(),
            description: p.description.to_string(),
            brief_description: Some(p.brief.to_string()),
            image: Some(format!("{}.1.png", p.image_prefix)),
            images: (1..=4).map(|i| format!("{}.{}.png", p.image_prefix, i)).collect(),
            service_id: Some(p.service_id.to_string()),
            service_slug: None,
            category: None,
            service_name: None,
            tags: strings(p.tags),
            features: strings(p.features),
            video_url: p.video_url.map(str::to_string),
            live_url: Some(p.live_url.to_string()),
        })
        .collect()
}
