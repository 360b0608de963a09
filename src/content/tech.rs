/// Colour family for a technology tag on a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Auth,
    Realtime,
    State,
    Tools,
    Other,
}

const FRONTEND: &[&str] = &[
    "React", "Next.js", "TailwindCSS", "TypeScript", "JavaScript", "HTML", "CSS", "Vue",
    "Angular", "Framer Motion", "Chart.js", "D3.js",
];
const BACKEND: &[&str] = &["Node.js", "Express.js", "Django", "Flask", "Spring", "NestJS"];
const DATABASE: &[&str] = &["MongoDB", "PostgreSQL", "MySQL", "Redis", "SQLite"];
const AUTH: &[&str] = &["JWT", "OAuth", "Auth0", "Firebase Auth"];
const REALTIME: &[&str] = &["Socket.io", "WebSocket", "RabbitMQ", "Redis"];
const STATE: &[&str] = &["Redux", "Zustand", "MobX", "Context API"];
const TOOLS: &[&str] = &["Git", "Docker", "Nginx", "AWS", "Stripe", "OpenWeather API"];

impl TechCategory {
    /// Classify a technology by exact name. Earlier groups win, so "Redis"
    /// is a database rather than realtime.
    pub fn classify(tech: &str) -> Self {
        let groups: [(&[&str], TechCategory); 7] = [
            (FRONTEND, TechCategory::Frontend),
            (BACKEND, TechCategory::Backend),
            (DATABASE, TechCategory::Database),
            (AUTH, TechCategory::Auth),
            (REALTIME, TechCategory::Realtime),
            (STATE, TechCategory::State),
            (TOOLS, TechCategory::Tools),
        ];

        groups
            .iter()
            .find(|(names, _)| names.contains(&tech))
            .map(|(_, category)| *category)
            .unwrap_or(TechCategory::Other)
    }
}
