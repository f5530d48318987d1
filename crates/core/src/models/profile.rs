use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-rated proficiency in one skill, 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    pub skill: String,
    pub level: u8,
}

impl SkillRating {
    pub fn new(skill: impl Into<String>, level: u8) -> Self {
        Self {
            skill: skill.into(),
            level: level.min(100),
        }
    }
}

/// Fixed skill table shown on the portfolio page, in table order.
pub const SKILLS: [(&str, u8); 8] = [
    ("Python", 90),
    ("CASA", 85),
    ("Altair/Matplotlib", 80),
    ("Git", 75),
    ("Pandas", 88),
    ("SQL", 70),
    ("Linux", 78),
    ("Multi-wavelength", 82),
];

/// Navigation tabs of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileTab {
    Home,
    Education,
    Skills,
    Research,
    Projects,
    Contact,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 6] = [
        ProfileTab::Home,
        ProfileTab::Education,
        ProfileTab::Skills,
        ProfileTab::Research,
        ProfileTab::Projects,
        ProfileTab::Contact,
    ];
}

impl std::fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileTab::Home => write!(f, "Home"),
            ProfileTab::Education => write!(f, "Education"),
            ProfileTab::Skills => write!(f, "Skills"),
            ProfileTab::Research => write!(f, "Research"),
            ProfileTab::Projects => write!(f, "Projects"),
            ProfileTab::Contact => write!(f, "Contact"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

/// Static content of the research portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePage {
    pub hero: Hero,
    pub tabs: Vec<ProfileTab>,
    pub summary: String,
    pub focus_areas: Vec<String>,
    pub availability: String,
    pub education: Vec<String>,
    pub research_interests: Vec<String>,
    pub projects: Vec<Project>,
    pub links: Vec<ExternalLink>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self {
            hero: Hero {
                name: "Comfort Mankele".into(),
                tagline: "Astrophysics Researcher • Radio Astronomy • Data Science".into(),
                location: "Pretoria, South Africa".into(),
                last_updated: "Feb 2026".into(),
            },
            tabs: ProfileTab::ALL.to_vec(),
            summary: "MSc (Astrophysics and Space Science) student at the University of \
                      Pretoria, specializing in radio astronomy and multi-wavelength data analysis."
                .into(),
            focus_areas: strings(&[
                "Developing data reduction and calibration pipelines",
                "Imaging NenuFAR measurement sets",
                "Radio galaxy spectral index mapping",
                "Multi-wavelength overlays (radio, optical, X-ray)",
                "FITS cube processing",
            ]),
            availability: "Open to research collaborations and data projects.".into(),
            education: strings(&[
                "BSc Honours in Astrophysics, University of Pretoria",
                "BSc Astrophysics & Space Science, University of Pretoria",
            ]),
            research_interests: strings(&[
                "Radio galaxy spectral index mapping",
                "Multi-wavelength image overlays",
                "Flux extraction pipelines",
                "Interactive astronomy dashboards",
                "Machine learning in astrophysics",
            ]),
            projects: vec![
                Project {
                    title: "Radio Galaxy Spectral Index Dashboard".into(),
                    highlights: strings(&[
                        "FITS image processing",
                        "Spectral index heatmaps",
                        "Radio contours",
                        "Streamlit dashboard",
                    ]),
                },
                Project {
                    title: "Multi-wavelength Visualisation Toolkit".into(),
                    highlights: strings(&[
                        "Overlay radio, optical and X-ray images for galaxy studies.",
                    ]),
                },
            ],
            links: vec![
                ExternalLink {
                    label: "GitHub".into(),
                    url: "https://github.com/ComfortMankele".into(),
                },
                ExternalLink {
                    label: "LinkedIn".into(),
                    url: "https://www.linkedin.com/in/comfort-mankele/".into(),
                },
            ],
        }
    }
}

impl ProfilePage {
    /// Footer line for the given calendar year.
    pub fn footer(&self, year: i32) -> String {
        format!("© {year} {} • Streamlit Portfolio", self.hero.name)
    }
}

/// Free-text fields of the demo contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Local acknowledgment of an accepted contact form. Nothing is sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAcknowledgment {
    pub receipt_id: Uuid,
    pub message: String,
}
