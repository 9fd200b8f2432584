//! # Portfolio Content
//!
//! Hand-authored page data. Everything is `'static` so the whole portfolio
//! is a single constant; the renderer borrows it.

use crate::core::section::Section;

pub struct Portfolio {
    pub owner: Owner,
    pub about: &'static str,
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub certifications: &'static [Certification],
    pub contact: Contact,
    pub footer: &'static str,
}

pub struct Owner {
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub links: &'static [Link],
    pub call_to_action: &'static str,
}

pub struct Link {
    pub label: &'static str,
    pub target: &'static str,
}

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
    pub link: Option<Link>,
}

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub grade: &'static str,
    pub period: &'static str,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
    pub link: Link,
}

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
}

pub struct Contact {
    /// Placeholders of the (unsubmittable) contact form.
    pub form_fields: &'static [&'static str],
    pub submit_label: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub links: &'static [Link],
}

/// Page blocks in the order they're laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSection {
    Hero,
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Contact,
    Footer,
}

impl PageSection {
    pub const ORDER: [PageSection; 9] = [
        PageSection::Hero,
        PageSection::About,
        PageSection::Experience,
        PageSection::Education,
        PageSection::Skills,
        PageSection::Projects,
        PageSection::Certifications,
        PageSection::Contact,
        PageSection::Footer,
    ];

    /// The nav entry that jumps here, if any.
    pub fn anchor(self) -> Option<Section> {
        match self {
            PageSection::Hero => Some(Section::Home),
            PageSection::About => Some(Section::About),
            PageSection::Experience => Some(Section::Experience),
            PageSection::Education => Some(Section::Education),
            PageSection::Skills => Some(Section::Skills),
            PageSection::Projects => Some(Section::Projects),
            PageSection::Contact => Some(Section::Contact),
            PageSection::Certifications | PageSection::Footer => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageSection::Hero => "Home",
            PageSection::About => "About Me",
            PageSection::Experience => "Experience",
            PageSection::Education => "Education",
            PageSection::Skills => "Skills",
            PageSection::Projects => "Projects",
            PageSection::Certifications => "Certifications",
            PageSection::Contact => "Get In Touch",
            PageSection::Footer => "",
        }
    }
}

const LINKEDIN: &str = "https://www.linkedin.com/in/hruthik-pavarala-94595a25b";

pub static PORTFOLIO: Portfolio = Portfolio {
    owner: Owner {
        short_name: "Hruthik Pavarala",
        full_name: "Hruthik Krishna Pavarala",
        headline: "Information Technology Student",
        tagline: "Passionate about AI, Machine Learning, and Web Development",
        links: &[
            Link { label: "Email", target: "mailto:hruthik733@gmail.com" },
            Link { label: "LinkedIn", target: LINKEDIN },
            Link { label: "GitHub", target: "https://github.com/hruthik733" },
            Link { label: "+91-7671978733", target: "tel:+917671978733" },
        ],
        call_to_action: "View My Projects",
    },
    about: "I am an enthusiastic IT student with a strong background in Python, Java, and C++, \
        complemented by hands-on experience in data analysis and model development. My passion \
        lies in exploring emerging technologies, particularly AI and large language models, to \
        address real-world challenges. I am committed to staying current with the latest tech \
        trends and continuously improving my skills.",
    experience: &[Experience {
        role: "Web Developer Intern",
        company: "Chitti Motors Private Limited, Vijayawada",
        period: "February, 2025 - Present",
        summary: "Chitti Motors is an electric cycle startup focused on innovative, eco-friendly \
            mobility solutions.",
        details: &[
            "Dynamic 3D Visualization: Enables users to input their height and view a \
             proportionally scaled 3D human model alongside the electric cycle for accurate \
             size assessment",
            "Augmented Reality Integration: Allows users to project the 3D cycle model into \
             real-world environments using their device camera for an immersive experience",
        ],
        link: Some(Link {
            label: "Live Demo",
            target: "https://chitti-e6996.web.app/pages/vr-view.html",
        }),
    }],
    education: &[
        Education {
            degree: "B.Tech in Information Technology",
            school: "Velagapudi Ramakrishna Siddhartha Engineering College, Kanuru",
            grade: "CGPA: 8.52",
            period: "August, 2022 - May, 2026",
        },
        Education {
            degree: "Intermediate M.P.C",
            school: "Narayana Junior College, Vijayawada",
            grade: "Grade: 94%",
            period: "April, 2020 - March, 2022",
        },
        Education {
            degree: "High School",
            school: "Viswabharathi EM High School, Gudiwada",
            grade: "Grade: 99%",
            period: "April, 2019 - March, 2020",
        },
    ],
    skills: &[
        SkillCategory {
            name: "Programming Languages & Databases",
            skills: &["Python", "Java", "C++", "MySQL", "OOP", "DSA"],
        },
        SkillCategory {
            name: "Machine Learning & AI",
            skills: &[
                "TensorFlow",
                "PyTorch",
                "OpenCV",
                "Chatbots",
                "Deep Learning",
                "Ollama Models",
            ],
        },
    ],
    projects: &[
        Project {
            title: "Pneumonia Detection from Chest X-rays",
            period: "August, 2024 - December, 2024",
            summary: "Developed an ensemble model combining VGG19, EfficientNetB0, and \
                DenseNet121 for pneumonia detection.",
            details: &[
                "Developed an ensemble model achieving 93% accuracy for pneumonia detection",
                "Leveraged Grad-CAM to generate heatmaps for precise localization of affected \
                 lung regions",
                "Optimized performance using the Adam optimizer and fine-tuned model weights",
            ],
            link: Link {
                label: "GitHub Repository",
                target: "https://github.com/hruthik733/Pneumonia_detection_using_feature_level_ensemble",
            },
        },
        Project {
            title: "MoviesNow - Personal Movie Collection Platform",
            period: "December, 2024 - January, 2025",
            summary: "MoviesNow is a personal movie review web application that allows users to \
                log and review movies.",
            details: &[
                "Integrated Google Firebase authentication and Firestore as a real-time database",
                "Developed a feature-rich admin panel for managing movie collections",
                "Integrated the OMDb API to fetch detailed movie information",
            ],
            link: Link {
                label: "Live Demo",
                target: "https://movieshub-4u.web.app/",
            },
        },
    ],
    certifications: &[
        Certification { name: "The Joy of Computing using Python", issuer: "NPTEL" },
        Certification {
            name: "PCAP: Programming Essentials in Python",
            issuer: "OPENEDG PYTHON INSTITUTE",
        },
        Certification { name: "CPA: Programming Essentials in C++", issuer: "C++ INSTITUTE" },
        Certification { name: "Introduction to Generative AI", issuer: "GOOGLE CLOUD" },
    ],
    contact: Contact {
        form_fields: &["Name", "Email", "Message"],
        submit_label: "Send Message",
        email: "hruthik733@gmail.com",
        location: "Vijayawada",
        links: &[Link { label: "LinkedIn", target: LINKEDIN }],
    },
    footer: "© 2024 Hruthik Pavarala. All rights reserved.",
};
