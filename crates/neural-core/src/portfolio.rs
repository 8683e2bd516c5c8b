//! Static personal data shown by the terminal and the portfolio view.
//!
//! The built-in record set is used unless a JSON file with the same shape is
//! supplied. Data is read once at startup and never mutated afterwards.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use super::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactData {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// A contact rendered as a link: display label, shown text, open target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink<'a> {
    pub label: &'static str,
    pub shown: &'a str,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub contact: ContactData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl ProjectData {
    pub fn demo_link(&self) -> Option<&str> {
        non_empty(self.demo_url.as_deref())
    }

    pub fn source_link(&self) -> Option<&str> {
        non_empty(self.github_url.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillData {
    pub id: String,
    pub name: String,
    pub category: String,
    pub level: u8,
}

impl SkillData {
    /// Ten-cell bar, one filled cell per full ten percent.
    pub fn bar(&self) -> String {
        let filled = usize::from(self.level.min(100) / 10);
        format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationKind {
    College,
    School,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EducationKind,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub about: AboutData,
    pub projects: Vec<ProjectData>,
    pub skills: Vec<SkillData>,
    pub education: Vec<EducationData>,
}

impl PortfolioData {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Data {
            path: None,
            source,
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Data {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Non-empty contacts, email first. Email opens through `mailto:`.
    pub fn contact_links(&self) -> Vec<ContactLink<'_>> {
        let contact = &self.about.contact;
        [
            ("EMAIL", contact.email.as_str(), format!("mailto:{}", contact.email)),
            ("GITHUB", contact.github.as_str(), contact.github.clone()),
            ("LINKEDIN", contact.linkedin.as_str(), contact.linkedin.clone()),
        ]
        .into_iter()
        .filter(|(_, shown, _)| !shown.trim().is_empty())
        .map(|(label, shown, target)| ContactLink {
            label,
            shown,
            target,
        })
        .collect()
    }

    /// Every link of the full portfolio view in display order: contacts,
    /// then each project's demo and source.
    pub fn link_targets(&self) -> Vec<String> {
        let mut targets: Vec<String> = self
            .contact_links()
            .into_iter()
            .map(|link| link.target)
            .collect();
        for project in &self.projects {
            targets.extend(project.demo_link().map(str::to_string));
            targets.extend(project.source_link().map(str::to_string));
        }
        targets
    }

    /// Skills in `category`, in declaration order.
    pub fn skills_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a SkillData> + 'a {
        self.skills
            .iter()
            .filter(move |skill| skill.category == category)
    }

    /// Distinct skill categories in first-seen order.
    pub fn skill_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for skill in &self.skills {
            if !categories.contains(&skill.category.as_str()) {
                categories.push(skill.category.as_str());
            }
        }
        categories
    }

    pub fn builtin() -> Self {
        Self {
            about: AboutData {
                name: "Mohammad Talha Shaikh".to_string(),
                title: "Full Stack Developer | AI Expert".to_string(),
                bio: "Specialize in building fast, user-centric web apps with AI integration and Chrome extensions that solve real problems. From backend logic to frontend polish, I bring ideas to life with clean code and smart design.".to_string(),
                contact: ContactData {
                    email: "stalha423@gmail.com".to_string(),
                    github: "https://github.com/TalhaShaikhcodes".to_string(),
                    linkedin: "https://www.linkedin.com/in/talha-shaikh-62a7791b4/".to_string(),
                },
            },
            projects: vec![
                ProjectData {
                    id: "project-1".to_string(),
                    title: "Amazon P&L Simplifier Tool".to_string(),
                    description: "A frontend-only web tool (in progress) designed to help Amazon sellers simplify their profit & loss tracking. Users can upload CSV reports. The app processes and visualizes this data into SKU-wise insights, cost breakdowns, and summary calculations.".to_string(),
                    technologies: strings(&["React", "Tailwind CSS", "(Planned: Node.js", "Express", "Supabase)"]),
                    category: "web".to_string(),
                    featured: true,
                    demo_url: None,
                    github_url: Some("https://github.com/TalhaShaikhcodes/amazon-pnl-tool".to_string()),
                },
                ProjectData {
                    id: "project-2".to_string(),
                    title: "MVP Forge – Personal Developer Agency Site".to_string(),
                    description: "A sleek, high-performance landing page built for my personal developer agency, MVP Forge. The site showcases my services, features a modern responsive UI with a custom animated navbar, and includes Cal.com integration for seamless meeting bookings. Designed for clarity, speed, and conversion.".to_string(),
                    technologies: strings(&["Vite", "TypeScript", "React", "Tailwind CSS", "Cal.com API"]),
                    category: "web".to_string(),
                    featured: true,
                    demo_url: Some("https://mvp-forge.com".to_string()),
                    github_url: Some("https://github.com/TalhaShaikhcodes/MVP-Forge".to_string()),
                },
                ProjectData {
                    id: "project-3".to_string(),
                    title: "TabMap - Chrome Extension".to_string(),
                    description: "TabMap is a Chrome extension that visualizes your browsing journey as a glowing mind map. It tracks tab-to-tab navigation in real time and displays it using an interactive graph with favicons, glowing directional arrows, and navigation counts. Perfect for visual thinkers, researchers, and productivity nerds.".to_string(),
                    technologies: strings(&["JavaScript", "D3.js", "Chrome Extensions API", "HTML/CSS"]),
                    category: "chrome extension".to_string(),
                    featured: false,
                    demo_url: Some("https://chromewebstore.google.com/detail/kopdmafgnkedogkgfhpgjdhbgdmjmpco?utm_source=item-share-cb".to_string()),
                    github_url: None,
                },
            ],
            skills: vec![
                skill("java", "Java", "languages", 95),
                skill("js", "JavaScript", "languages", 90),
                skill("js", "HTML/CSS/JS", "frontend", 95),
                skill("ts", "TypeScript", "languages", 90),
                skill("python", "Python", "languages", 85),
                skill("nextjs", "Next.js", "frontend", 90),
                skill("react", "React", "frontend", 95),
                skill("bootstrap", "Bootstrap", "frontend", 90),
                skill("node", "Node.js", "backend", 85),
                skill("express", "Express.js", "backend", 85),
                skill("fastapi", "Python FastAPI", "backend", 85),
                skill("springboot", "Spring Boot", "backend", 80),
                skill("git", "Git", "tools", 90),
                skill("n8n", "n8n Automation", "tools", 90),
                skill("ai-tools", "AI Tools", "tools", 95),
            ],
            education: vec![
                EducationData {
                    id: "college".to_string(),
                    kind: EducationKind::College,
                    institution: "Sinhgad Institute of Technology & Science".to_string(),
                    course: Some("B.E. in IT".to_string()),
                    percentage: None,
                    subjects: None,
                    location: "Pune".to_string(),
                },
                EducationData {
                    id: "school".to_string(),
                    kind: EducationKind::School,
                    institution: "St.Joseph's Convent School".to_string(),
                    course: None,
                    percentage: Some("10th: 94.4%  12th: 80%".to_string()),
                    subjects: Some("PCM".to_string()),
                    location: "Jalgaon".to_string(),
                },
            ],
        }
    }
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn skill(id: &str, name: &str, category: &str, level: u8) -> SkillData {
    SkillData {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        level,
    }
}
