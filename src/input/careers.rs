//! Built-in career skill presets

/// A named list of skills. Order is kept, repeats included.
#[derive(Debug, Clone, Copy)]
pub struct CareerPreset {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

impl CareerPreset {
    pub fn skill_list(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.to_string()).collect()
    }
}

pub const CAREER_PRESETS: &[CareerPreset] = &[
    CareerPreset {
        name: "AI Engineer",
        skills: &[
            "AI",
            "Machine Learning",
            "Deep Learning",
            "Computer Vision",
            "Natural Language Processing",
            "Reinforcement Learning",
            "Generative AI",
            "Prompt Engineering",
            "LLMs",
            "NLP",
            "CV",
            "RL",
            "Generative AI",
            "Prompt Engineering",
            "LLMs",
        ],
    },
    CareerPreset {
        name: "AI Engineer (Detailed)",
        skills: &[
            "Python Programming",
            "Machine Learning Algorithms",
            "Deep Learning (CNNs, RNNs, Transformers)",
            "Data Structures & Algorithms",
            "Mathematics for AI (Linear Algebra, Calculus, Probability, Statistics)",
            "Model Training & Evaluation (Accuracy, Precision, Recall, F1-score)",
            "Data Preprocessing & Cleaning",
            "Natural Language Processing (NLP)",
            "Computer Vision",
            "AI Frameworks & Libraries (TensorFlow, PyTorch, Scikit-learn, Keras)",
            "Version Control (Git & GitHub)",
            "Cloud Platforms (AWS, GCP, Azure)",
            "Model Deployment (APIs, Flask/FastAPI, Docker)",
        ],
    },
    CareerPreset {
        name: "Frontend Engineer",
        skills: &[
            "HTML",
            "CSS",
            "JavaScript",
            "React",
            "UI/UX Design",
            "Responsive Design",
            "DOM Manipulation",
            "React Components",
            "UI Kits",
            "Event Handling",
            "Arrays",
            "Strings",
            "RESTful APIs",
            "Authentication",
            "Data Structures",
        ],
    },
    CareerPreset {
        name: "Backend Engineer",
        skills: &["Python", "Django", "Flask", "Express", "Node.js"],
    },
    CareerPreset {
        name: "Data Scientist",
        skills: &[
            "Python",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Seaborn",
            "Scikit-learn",
            "TensorFlow",
            "Keras",
            "PyTorch",
            "SQL",
            "NoSQL",
            "Statistics",
            "Machine Learning",
        ],
    },
    CareerPreset {
        name: "Cyber Security Engineer",
        skills: &[
            "Cybersecurity",
            "Network Security",
            "Web Security",
            "Cloud Security",
            "Cybersecurity",
            "Ethical Hacking",
            "Cryptography",
        ],
    },
    CareerPreset {
        name: "Game Developer",
        skills: &[
            "Game Development",
            "Unity",
            "Unreal Engine",
            "Game Design",
            "Game Programming",
            "C#",
            "Game Physics",
        ],
    },
];

/// Case-insensitive lookup by preset name
pub fn find_career(name: &str) -> Option<&'static CareerPreset> {
    let wanted = name.trim();
    CAREER_PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(wanted))
}

pub fn career_names() -> Vec<&'static str> {
    CAREER_PRESETS.iter().map(|preset| preset.name).collect()
}
