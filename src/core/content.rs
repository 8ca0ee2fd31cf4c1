use super::display::MAX_PROFICIENCY;

/// Self-reported skill strength, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Proficiency(u8);

impl Proficiency {
    pub fn new(level: u8) -> Option<Self> {
        (1..=MAX_PROFICIENCY).contains(&level).then_some(Self(level))
    }

    const fn level_const(level: u8) -> Self {
        assert!(level >= 1 && level <= MAX_PROFICIENCY);
        Self(level)
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

#[derive(Debug)]
pub struct Skill {
    pub name: &'static str,
    pub glyph: &'static str,
    pub proficiency: Proficiency,
}

#[derive(Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Email,
}

impl SocialIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SocialIcon::Github => "GH",
            SocialIcon::Linkedin => "in",
            SocialIcon::Email => "@",
        }
    }
}

#[derive(Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: SocialIcon,
}

#[derive(Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

const fn skill(name: &'static str, glyph: &'static str, level: u8) -> Skill {
    Skill {
        name,
        glyph,
        proficiency: Proficiency::level_const(level),
    }
}

pub const BRAND: &str = "Portfolio";
pub const EMAIL: &str = "vitorabreufjb@hotmail.com";

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &[
            skill("React", "⚛", 5),
            skill("React Native", "📱", 5),
            skill("JavaScript", "JS", 5),
            skill("TypeScript", "TS", 4),
            skill("HTML5", "🌐", 5),
            skill("CSS3", "🎨", 5),
            skill("Tailwind CSS", "🌊", 5),
            skill("Expo", "📲", 4),
        ],
    },
    SkillCategory {
        name: "Backend & Databases",
        skills: &[
            skill("Firebase", "🔥", 5),
            skill("Node.js", "🟢", 4),
            skill("Firestore", "🗄", 5),
            skill("Firebase Auth", "🔐", 5),
            skill("Cloud Functions", "☁", 4),
            skill("RESTful APIs", "🔄", 4),
        ],
    },
    SkillCategory {
        name: "Mobile & DevOps",
        skills: &[
            skill("Xcode", "🍎", 4),
            skill("Android Studio", "🤖", 4),
            skill("App Store Connect", "📱", 4),
            skill("Google Play Console", "🎮", 4),
            skill("OneSignal", "🔔", 4),
            skill("Git", "📂", 4),
        ],
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/vitororigens",
        icon: SocialIcon::Github,
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/vitor-abreu2",
        icon: SocialIcon::Linkedin,
    },
    SocialLink {
        name: "Email",
        url: "mailto:vitorabreufjb@hotmail.com",
        icon: SocialIcon::Email,
    },
];

pub static SERVICES: &[Service] = &[
    Service {
        title: "Desenvolvimento Web",
        description: "Construção de aplicações web modernas e performáticas com React, Tailwind CSS e Firebase.",
    },
    Service {
        title: "Desenvolvimento Mobile",
        description: "Criação de aplicativos mobile nativos com React Native, Expo e integração com lojas.",
    },
    Service {
        title: "Backend & Firebase",
        description: "Implementação de backends escaláveis utilizando Firebase, API REST e autenticação.",
    },
    Service {
        title: "Publicação de Apps",
        description: "Processo completo de publicação de aplicativos nas lojas App Store e Google Play.",
    },
];

pub static CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Localização",
        value: "Brasil",
    },
    ContactDetail {
        label: "Email",
        value: EMAIL,
    },
    ContactDetail {
        label: "Telefone",
        value: "(+55) 61 9 9996-3966",
    },
];

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "Sou um desenvolvedor fullstack especializado em criar experiências digitais excepcionais. Com profundo conhecimento em React, React Native e Firebase, tenho ajudado empresas a transformar suas ideias em aplicações web e mobile de alta qualidade.",
    "Minha experiência inclui o desenvolvimento completo de aplicativos - desde a concepção até a publicação nas lojas App Store e Google Play. Trabalho com tecnologias como Xcode, Android Studio, OneSignal para notificações e implemento designs responsivos com Tailwind CSS.",
    "Estou sempre em busca de novos desafios e oportunidades para expandir meu conhecimento e criar soluções inovadoras que resolvam problemas reais.",
];
