#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainDef {
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DEFAULT_RATING: u8 = 3;
pub const DOMAIN_COUNT: usize = 9;

const BUILTIN_DOMAINS: &[DomainDef; DOMAIN_COUNT] = &[
    DomainDef {
        id: "psychological_wellbeing",
        name: "Psychological well-being",
        label: "Bienestar psicológico",
        prompt: "How satisfied do you feel emotionally and mentally?",
    },
    DomainDef {
        id: "health",
        name: "Health",
        label: "Salud",
        prompt: "How healthy do you consider yourself right now?",
    },
    DomainDef {
        id: "education",
        name: "Education",
        label: "Educación",
        prompt: "How satisfied are you with your access to education or learning?",
    },
    DomainDef {
        id: "time_use",
        name: "Time use",
        label: "Uso del tiempo",
        prompt: "How balanced does your time feel between work, rest and leisure?",
    },
    DomainDef {
        id: "community_vitality",
        name: "Community vitality",
        label: "Vitalidad comunitaria",
        prompt: "How connected do you feel to your community and social surroundings?",
    },
    DomainDef {
        id: "cultural_diversity",
        name: "Cultural diversity",
        label: "Diversidad cultural",
        prompt: "How much do you enjoy and take part in cultural activities or traditions?",
    },
    DomainDef {
        id: "ecological_resilience",
        name: "Ecological resilience",
        label: "Resiliencia ecológica",
        prompt: "How responsible are you towards the environment and nature?",
    },
    DomainDef {
        id: "living_standards",
        name: "Living standards",
        label: "Nivel de vida",
        prompt: "How satisfied are you with your material conditions (income, housing)?",
    },
    DomainDef {
        id: "good_governance",
        name: "Good governance",
        label: "Gobernanza",
        prompt: "How much do you trust the institutions and rules of your society?",
    },
];

pub fn builtin_domains() -> &'static [DomainDef; DOMAIN_COUNT] {
    BUILTIN_DOMAINS
}
