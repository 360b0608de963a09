pub mod tech;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use tech::TechCategory;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid portfolio content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// Hero section: who this is and where to find them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Heading colour for a skill group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub tone: Tone,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

/// Hobby tab, including the photo carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobby {
    pub title: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Everything rendered on the page. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub footer: String,
    pub profile: Profile,
    pub about: About,
    pub hobby: Hobby,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl Portfolio {
    /// Load content from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let portfolio: Portfolio = toml::from_str(&content).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        portfolio.validate()?;
        tracing::info!(
            "Loaded {} projects and {} photos from {}",
            portfolio.projects.len(),
            portfolio.hobby.photos.len(),
            path.display()
        );
        Ok(portfolio)
    }

    /// Reject content the page cannot render meaningfully
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".into()));
        }

        if let Some(pos) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(ContentError::Invalid(format!("project #{} has no title", pos + 1)));
        }

        if let Some(cat) = self.about.skills.iter().find(|c| c.name.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "skill group with {} skills has no name",
                cat.skills.len()
            )));
        }

        Ok(())
    }

    /// Sample content shipped with the binary
    pub fn builtin() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            footer: "© 2025 Sam Rivera. All rights reserved.".into(),
            profile: Profile {
                name: "Sam Rivera".into(),
                role: "Full Stack Web Developer".into(),
                tagline: "Full-stack developer (MERN) | Open to freelance & full-time opportunities | Let's build something awesome.".into(),
                links: vec![
                    Link::new("GitHub", "https://github.com/example"),
                    Link::new("LinkedIn", "https://www.linkedin.com/in/example/"),
                    Link::new("Resume", "https://example.com/resume.pdf"),
                ],
            },
            about: About {
                paragraphs: strings(&[
                    "I'm a full-stack web developer focused on responsive, real-time web applications built with MongoDB, Express.js, React and Node.js.",
                    "I've built hands-on projects like a real-time chat application and modern, responsive websites with authentication, dark mode and mobile-first design.",
                    "I'm open to full-time roles, freelance work and collaborations where clean code and creative problem-solving matter.",
                ]),
                skills: vec![
                    SkillCategory {
                        name: "Frontend".into(),
                        tone: Tone::Blue,
                        skills: strings(&[
                            "HTML", "CSS", "JavaScript", "React.js", "TypeScript", "Next.js",
                            "Bootstrap", "TailwindCSS", "DaisyUI",
                        ]),
                    },
                    SkillCategory {
                        name: "Backend".into(),
                        tone: Tone::Green,
                        skills: strings(&["Node.js", "Express.js", "Django"]),
                    },
                    SkillCategory {
                        name: "Authentication & State".into(),
                        tone: Tone::Purple,
                        skills: strings(&["JWT", "Zustand", "RESTful API", "Django Rest Framework"]),
                    },
                    SkillCategory {
                        name: "Other Tools".into(),
                        tone: Tone::Orange,
                        skills: strings(&["Git", "Nginx", "RabbitMQ", "Socket.io"]),
                    },
                ],
            },
            hobby: Hobby {
                title: "Photography".into(),
                paragraphs: strings(&[
                    "A hobbyist photographer capturing everyday moments: streets, light and mood.",
                    "Self-taught and still experimenting with composition, lighting and post-processing.",
                ]),
                photos: strings(&[
                    "hobby-carousel/photo1.jpg",
                    "hobby-carousel/photo2.jpg",
                    "hobby-carousel/photo3.jpg",
                    "hobby-carousel/photo4.jpg",
                    "hobby-carousel/photo5.jpg",
                ]),
                handle: Some(Link::new("@example", "https://www.instagram.com/example")),
            },
            projects: vec![
                Project {
                    title: "Chat Application".into(),
                    description: "A real-time chat application with user authentication, online status and instant messaging over Socket.io. Built on the MERN stack with dark mode and a responsive UI.".into(),
                    image: Some("projects/chat-app.jpg".into()),
                    live_demo: Some("https://chat.example.com".into()),
                    source: Some("https://github.com/example/chat-app".into()),
                    technologies: strings(&["React", "Node.js", "Socket.io", "Express.js", "MongoDB"]),
                },
                Project {
                    title: "Portfolio Website".into(),
                    description: "A responsive personal portfolio showcasing skills, projects and contact details, with dark mode and a clean, minimal UI.".into(),
                    image: Some("projects/portfolio.jpg".into()),
                    live_demo: Some("https://example.com".into()),
                    source: Some("https://github.com/example/portfolio".into()),
                    technologies: strings(&["Next.js", "TailwindCSS", "React", "TypeScript"]),
                },
                Project {
                    title: "Weather Dashboard".into(),
                    description: "Interactive weather dashboard with location-based forecasts and charts fed by the OpenWeather API.".into(),
                    image: Some("projects/weather-dashboard.jpeg".into()),
                    live_demo: Some("https://weather.example.com".into()),
                    source: Some("https://github.com/example/weather-app".into()),
                    technologies: strings(&["React", "TailwindCSS", "OpenWeather API", "Chart.js"]),
                },
                Project {
                    title: "E-Commerce Platform".into(),
                    description: "An e-commerce storefront with real-time inventory management and a responsive admin dashboard.".into(),
                    image: Some("projects/ecommerce.jpg".into()),
                    live_demo: Some("https://shop.example.com".into()),
                    source: Some("https://github.com/example/ecommerce-platform".into()),
                    technologies: strings(&["React", "Node.js", "MongoDB", "Express.js", "Redux"]),
                },
            ],
            contact: Contact {
                blurb: "I'm always open to discussing new opportunities and interesting projects.".into(),
                phone: Some("+1 555 010 0100".into()),
                email: Some("hello@example.com".into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_is_valid() {
        let portfolio = Portfolio::builtin();
        assert!(portfolio.validate().is_ok());
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.hobby.photos.len(), 5);
        assert_eq!(portfolio.about.skills.len(), 4);
    }

    #[test]
    fn test_content_serialization() {
        let portfolio = Portfolio::builtin();
        let serialized = toml::to_string_pretty(&portfolio).unwrap();
        let deserialized: Portfolio = toml::from_str(&serialized).unwrap();

        assert_eq!(portfolio.projects.len(), deserialized.projects.len());
        assert_eq!(portfolio.profile.links, deserialized.profile.links);
        assert_eq!(deserialized.about.skills[2].tone, Tone::Purple);
    }

    #[test]
    fn test_from_file_minimal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[profile]
name = "Ada"
role = "Engineer"
tagline = "Builds things"

[about]
paragraphs = ["Hello"]

[hobby]
title = "Film"
paragraphs = []

[[projects]]
title = "Engine"
description = "Analytical"
technologies = ["Brass"]

[contact]
blurb = "Write me"
"#
        )
        .unwrap();

        let portfolio = Portfolio::from_file(file.path()).unwrap();
        assert_eq!(portfolio.projects.len(), 1);
        assert!(portfolio.hobby.photos.is_empty());
        assert!(portfolio.contact.email.is_none());
        assert!(portfolio.footer.is_empty());
    }

    #[test]
    fn test_example_file_parses() {
        let portfolio: Portfolio =
            toml::from_str(include_str!("../../portfolio.example.toml")).unwrap();
        assert!(portfolio.validate().is_ok());
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.hobby.photos.len(), 3);
        assert!(portfolio.projects[1].live_demo.is_none());
        assert_eq!(portfolio.about.skills[1].tone, Tone::Orange);
    }

    #[test]
    fn test_from_file_missing() {
        let err = Portfolio::from_file(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn test_from_file_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[profile\nname = ").unwrap();
        let err = Portfolio::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_validate_rejects_untitled_project() {
        let mut portfolio = Portfolio::builtin();
        portfolio.projects[1].title = "  ".into();
        let err = portfolio.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid portfolio content: project #2 has no title");
    }
}
