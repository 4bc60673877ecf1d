//! Static content the views render. Nothing here is ever mutated.

use crate::components::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillRecord {
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub techs: &'static [&'static str],
    /// Proficiency in percent.
    pub level: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub techs: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub image: &'static str,
    pub source_link: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrengthRecord {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: String,
    pub caption: &'static str,
}

pub const SKILLS: &[SkillRecord] = &[
    SkillRecord {
        name: "Machine Learning",
        icon: Icon::Brain,
        description: "Building predictive models and data analysis solutions",
        techs: &["Python", "Pandas", "NumPy", "Scikit-learn", "Matplotlib"],
        level: Some(85),
    },
    SkillRecord {
        name: "Frontend Development",
        icon: Icon::Globe,
        description: "Creating responsive and interactive web applications",
        techs: &["React", "JavaScript", "HTML/CSS", "Tailwind CSS", "JSON"],
        level: Some(80),
    },
    SkillRecord {
        name: "Programming",
        icon: Icon::Code,
        description: "Strong foundation in multiple programming languages",
        techs: &["Python", "JavaScript", "C++", "C"],
        level: Some(75),
    },
    SkillRecord {
        name: "Data Analysis",
        icon: Icon::Database,
        description: "Extracting insights from complex datasets",
        techs: &["Pandas", "NumPy", "Data Visualization", "Statistical Analysis"],
        level: Some(78),
    },
    SkillRecord {
        name: "Design Tools",
        icon: Icon::Palette,
        description: "Creating visually appealing designs and presentations",
        techs: &["Canva", "UI/UX Principles", "Visual Design"],
        level: Some(70),
    },
];

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Web Series Recommender",
        description: "An intelligent recommendation system that suggests web series based on user \
                      preferences using machine learning algorithms. Features collaborative \
                      filtering and content-based recommendations.",
        category: "Machine Learning",
        techs: &["Python", "Pandas", "Scikit-learn", "Flask", "HTML/CSS"],
        highlights: &[
            "Collaborative Filtering",
            "Content-Based Filtering",
            "User Interface",
            "Data Processing",
        ],
        image: "https://images.pexels.com/photos/1040160/pexels-photo-1040160.jpeg?auto=compress&cs=tinysrgb&w=800",
        source_link: "https://github.com/samiksha-chandel/Web-Series-Recommender",
    },
    ProjectRecord {
        title: "Ames House Price Predictor",
        description: "A comprehensive machine learning model that predicts house prices based on \
                      various features like location, size, amenities. Includes data \
                      preprocessing and model evaluation.",
        category: "Machine Learning",
        techs: &["Python", "Pandas", "NumPy", "Scikit-learn", "Matplotlib"],
        highlights: &[
            "Regression Analysis",
            "Feature Engineering",
            "Data Visualization",
            "Model Optimization",
        ],
        image: "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg?auto=compress&cs=tinysrgb&w=800",
        source_link: "https://github.com/samiksha-chandel/Ames-House-Price-Predictor",
    },
    ProjectRecord {
        title: "Scientific Calculator",
        description: "A feature-rich scientific calculator built with modern web technologies. \
                      Supports complex mathematical operations, scientific functions, and has an \
                      intuitive user interface.",
        category: "Web Development",
        techs: &["JavaScript", "React", "HTML/CSS", "Tailwind CSS"],
        highlights: &[
            "Complex Calculations",
            "Responsive Design",
            "Error Handling",
            "Modern UI",
        ],
        image: "https://images.pexels.com/photos/5699456/pexels-photo-5699456.jpeg?auto=compress&cs=tinysrgb&w=800",
        source_link: "https://github.com/samiksha-chandel/Scientific-Calculator",
    },
];

pub const STRENGTHS: &[StrengthRecord] = &[
    StrengthRecord {
        icon: Icon::Brain,
        title: "Fresh Perspective",
        description: "Eager to learn and adapt to new technologies",
    },
    StrengthRecord {
        icon: Icon::Zap,
        title: "Quick Learner",
        description: "Fast at picking up new concepts and tools",
    },
    StrengthRecord {
        icon: Icon::TrendingUp,
        title: "Growth Mindset",
        description: "Constantly improving and seeking challenges",
    },
];

pub const LEARNING_GOALS: &[&str] = &[
    "Deep Learning & Neural Networks",
    "Advanced Data Science Techniques",
    "MLOps & Model Deployment",
    "Computer Vision Applications",
    "Natural Language Processing",
];

pub const OPPORTUNITIES: &[&str] = &[
    "Machine Learning Internships",
    "Data Science Opportunities",
    "Research Assistant Positions",
    "AI/ML Project Collaborations",
];

pub const JOURNEY: &[&str] = &[
    "I'm a computer science student passionate about the intersection of technology and \
     intelligence. My journey into machine learning began with curiosity about how computers can \
     learn and make decisions.",
    "Through hands-on projects and continuous learning, I've developed skills in Python, data \
     analysis, and web development. I'm particularly interested in recommendation systems, \
     predictive modeling, and creating user-friendly interfaces for complex algorithms.",
    "I'm eager to apply my knowledge in a real-world setting and contribute to innovative ML \
     solutions that can make a positive impact.",
];

/// Headline numbers on the home page.
pub fn stats() -> [Stat; 3] {
    [
        Stat {
            value: PROJECTS.len().to_string(),
            caption: "Major Projects",
        },
        Stat {
            value: format!("{}+", SKILLS.len()),
            caption: "Tech Skills",
        },
        Stat {
            value: "ML".to_string(),
            caption: "Focused",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_is_a_percentage() {
        for skill in SKILLS {
            if let Some(level) = skill.level {
                assert!(level <= 100, "{} at {level}%", skill.name);
            }
        }
    }

    #[test]
    fn project_stat_tracks_project_list() {
        let stats = stats();
        assert_eq!(stats[0].value, PROJECTS.len().to_string());
        assert_eq!(stats[1].value, "5+");
    }

    #[test]
    fn projects_link_to_github() {
        for project in PROJECTS {
            assert!(
                project.source_link.starts_with("https://github.com/"),
                "{}",
                project.title
            );
            assert!(project.image.starts_with("https://"));
            assert!(!project.highlights.is_empty());
            assert!(!project.techs.is_empty());
        }
    }

    #[test]
    fn titles_are_unique() {
        let mut titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }
}
