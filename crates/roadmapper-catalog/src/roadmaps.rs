//! Curated roadmap content
//!
//! Order here is the catalog declaration order and decides substring
//! tie-breaks in skill resolution.

use roadmapper_types::{Difficulty, Roadmap, RoadmapStep};

pub(crate) fn curated_roadmaps() -> Vec<Roadmap> {
    vec![
        web_development(),
        data_science(),
        digital_marketing(),
        mobile_development(),
        cybersecurity(),
    ]
}

fn web_development() -> Roadmap {
    Roadmap::new(
        "web-development",
        "Full-Stack Web Development",
        "Complete path to becoming a full-stack web developer with modern technologies",
        Difficulty::Beginner,
        "6-8 months",
    )
    .with_tags(["Frontend", "Backend", "JavaScript", "React", "Node.js"])
    .with_steps(vec![
        RoadmapStep::new("HTML & CSS Fundamentals", "2-3 weeks")
            .with_description("Learn the building blocks of web pages")
            .with_resources(["MDN Web Docs", "freeCodeCamp HTML/CSS", "CSS-Tricks"]),
        RoadmapStep::new("JavaScript Basics", "4-6 weeks")
            .with_description("Master the programming language of the web")
            .with_resources(["JavaScript.info", "Eloquent JavaScript", "MDN JavaScript Guide"])
            .with_prerequisites(["HTML & CSS Fundamentals"]),
        RoadmapStep::new("React Framework", "6-8 weeks")
            .with_description("Build interactive user interfaces with React")
            .with_resources(["React Official Docs", "React Tutorial", "React DevTools"])
            .with_prerequisites(["JavaScript Basics"]),
        RoadmapStep::new("Backend with Node.js", "8-10 weeks")
            .with_description("Create server-side applications and APIs")
            .with_resources(["Node.js Docs", "Express.js Guide", "RESTful API Design"])
            .with_prerequisites(["JavaScript Basics"]),
        RoadmapStep::new("Database Integration", "3-4 weeks")
            .with_description("Store and manage application data")
            .with_resources(["MongoDB University", "PostgreSQL Tutorial", "SQL Basics"])
            .with_prerequisites(["Backend with Node.js"]),
    ])
}

fn data_science() -> Roadmap {
    Roadmap::new(
        "data-science",
        "Data Science & Analytics",
        "Journey from beginner to data scientist with Python and machine learning",
        Difficulty::Intermediate,
        "8-12 months",
    )
    .with_tags(["Python", "Statistics", "Machine Learning", "Data Analysis"])
    .with_steps(vec![
        RoadmapStep::new("Python Programming", "4-6 weeks")
            .with_description("Learn Python fundamentals for data science")
            .with_resources([
                "Python.org Tutorial",
                "Automate the Boring Stuff",
                "Python Crash Course",
            ]),
        RoadmapStep::new("Statistics & Mathematics", "6-8 weeks")
            .with_description("Build mathematical foundation for data science")
            .with_resources(["Khan Academy Statistics", "StatQuest YouTube", "Think Stats"])
            .with_prerequisites(["Python Programming"]),
        RoadmapStep::new("Data Analysis with Pandas", "4-5 weeks")
            .with_description("Master data manipulation and analysis")
            .with_resources([
                "Pandas Documentation",
                "10 Minutes to Pandas",
                "Python for Data Analysis",
            ])
            .with_prerequisites(["Python Programming"]),
        RoadmapStep::new("Data Visualization", "3-4 weeks")
            .with_description("Create compelling data visualizations")
            .with_resources(["Matplotlib Docs", "Seaborn Tutorial", "Plotly Dash"])
            .with_prerequisites(["Data Analysis with Pandas"]),
        RoadmapStep::new("Machine Learning", "10-12 weeks")
            .with_description("Build predictive models and algorithms")
            .with_resources([
                "Scikit-learn",
                "Coursera ML Course",
                "Hands-On Machine Learning",
            ])
            .with_prerequisites(["Statistics & Mathematics", "Data Analysis with Pandas"]),
    ])
}

fn digital_marketing() -> Roadmap {
    Roadmap::new(
        "digital-marketing",
        "Digital Marketing Mastery",
        "Comprehensive guide to modern digital marketing strategies",
        Difficulty::Beginner,
        "4-6 months",
    )
    .with_tags(["SEO", "Social Media", "Content Marketing", "Analytics"])
    .with_steps(vec![
        RoadmapStep::new("Digital Marketing Fundamentals", "2-3 weeks")
            .with_description("Understanding the digital marketing landscape")
            .with_resources([
                "Google Digital Marketing Course",
                "HubSpot Academy",
                "Marketing Land",
            ]),
        RoadmapStep::new("Content Marketing Strategy", "4-5 weeks")
            .with_description("Create engaging content that converts")
            .with_resources([
                "Content Marketing Institute",
                "Copyblogger",
                "CoSchedule Blog",
            ])
            .with_prerequisites(["Digital Marketing Fundamentals"]),
        RoadmapStep::new("Search Engine Optimization", "5-6 weeks")
            .with_description("Optimize for search engines and drive organic traffic")
            .with_resources(["Moz SEO Guide", "Google Search Console", "Ahrefs Academy"])
            .with_prerequisites(["Content Marketing Strategy"]),
        RoadmapStep::new("Social Media Marketing", "3-4 weeks")
            .with_description("Build brand presence across social platforms")
            .with_resources(["Facebook Blueprint", "Hootsuite Academy", "Buffer Blog"])
            .with_prerequisites(["Digital Marketing Fundamentals"]),
        // "SEO" names no step title; kept as authored
        RoadmapStep::new("Analytics & Optimization", "4-5 weeks")
            .with_description("Measure performance and optimize campaigns")
            .with_resources([
                "Google Analytics Academy",
                "Google Tag Manager",
                "Hotjar Academy",
            ])
            .with_prerequisites(["SEO", "Social Media Marketing"]),
    ])
}

fn mobile_development() -> Roadmap {
    Roadmap::new(
        "mobile-development",
        "Mobile App Development",
        "Build native and cross-platform mobile applications",
        Difficulty::Intermediate,
        "7-10 months",
    )
    .with_tags(["React Native", "iOS", "Android", "Mobile UI/UX"])
    .with_steps(vec![
        RoadmapStep::new("Mobile Development Fundamentals", "2-3 weeks")
            .with_description("Understanding mobile platforms and development approaches")
            .with_resources([
                "Mobile Development Overview",
                "iOS vs Android",
                "App Store Guidelines",
            ]),
        RoadmapStep::new("JavaScript & React Basics", "6-8 weeks")
            .with_description("Master the foundation for React Native development")
            .with_resources(["JavaScript.info", "React Documentation", "ES6+ Features"])
            .with_prerequisites(["Mobile Development Fundamentals"]),
        RoadmapStep::new("React Native Framework", "8-10 weeks")
            .with_description("Build cross-platform mobile apps with React Native")
            .with_resources([
                "React Native Docs",
                "Expo Documentation",
                "React Native Navigation",
            ])
            .with_prerequisites(["JavaScript & React Basics"]),
        RoadmapStep::new("Mobile UI/UX Design", "4-5 weeks")
            .with_description("Design intuitive mobile user interfaces")
            .with_resources([
                "Material Design",
                "iOS Human Interface Guidelines",
                "Mobile Design Patterns",
            ])
            .with_prerequisites(["React Native Framework"]),
        RoadmapStep::new("App Deployment & Store Publishing", "2-3 weeks")
            .with_description("Deploy apps to App Store and Google Play")
            .with_resources([
                "App Store Connect",
                "Google Play Console",
                "App Deployment Guide",
            ])
            .with_prerequisites(["Mobile UI/UX Design"]),
    ])
}

fn cybersecurity() -> Roadmap {
    Roadmap::new(
        "cybersecurity",
        "Cybersecurity Specialist",
        "Protect digital assets and systems from cyber threats",
        Difficulty::Advanced,
        "10-15 months",
    )
    .with_tags([
        "Network Security",
        "Ethical Hacking",
        "Risk Assessment",
        "Compliance",
    ])
    .with_steps(vec![
        RoadmapStep::new("IT & Networking Fundamentals", "6-8 weeks")
            .with_description("Build strong foundation in IT infrastructure")
            .with_resources([
                "CompTIA Network+",
                "Cisco Networking Basics",
                "TCP/IP Guide",
            ]),
        RoadmapStep::new("Security Principles & Frameworks", "4-6 weeks")
            .with_description("Learn core security concepts and methodologies")
            .with_resources([
                "CISSP Study Guide",
                "NIST Cybersecurity Framework",
                "ISO 27001",
            ])
            .with_prerequisites(["IT & Networking Fundamentals"]),
        RoadmapStep::new("Ethical Hacking & Penetration Testing", "8-10 weeks")
            .with_description("Learn to think like an attacker to better defend")
            .with_resources([
                "CEH Study Materials",
                "Metasploit Unleashed",
                "OWASP Testing Guide",
            ])
            .with_prerequisites(["Security Principles & Frameworks"]),
        RoadmapStep::new("Incident Response & Forensics", "6-8 weeks")
            .with_description("Handle security incidents and investigate breaches")
            .with_resources([
                "SANS Incident Response",
                "Digital Forensics Guide",
                "Volatility Framework",
            ])
            .with_prerequisites(["Ethical Hacking & Penetration Testing"]),
        RoadmapStep::new("Security Management & Compliance", "4-6 weeks")
            .with_description("Manage security programs and ensure compliance")
            .with_resources([
                "CISM Study Guide",
                "GDPR Compliance",
                "Security Risk Management",
            ])
            .with_prerequisites(["Incident Response & Forensics"]),
    ])
}
