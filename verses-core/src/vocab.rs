//! Display vocabulary for moods, eras and fact categories.
//!
//! Raw values in the documents are free text. These tables map the
//! recognised ones to display metadata; anything else falls back to the
//! raw string.

use regex::Regex;
use std::sync::OnceLock;

/// Display metadata for a known mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodInfo {
    pub key: &'static str,
    pub emoji: &'static str,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

pub const DEFAULT_MOOD_EMOJI: &str = "📖";

const MOODS: &[MoodInfo] = &[
    MoodInfo {
        key: "меланхоличное",
        emoji: "🌙",
        title: Some("Меланхолия"),
        description: Some("Стихи, наполненные грустью, тоской и раздумьями о бренности бытия"),
    },
    MoodInfo {
        key: "радостное",
        emoji: "☀️",
        title: Some("Радость"),
        description: Some("Светлые, жизнеутверждающие произведения, воспевающие счастье и красоту"),
    },
    MoodInfo {
        key: "философское",
        emoji: "🤔",
        title: None,
        description: None,
    },
    MoodInfo {
        key: "созерцательное",
        emoji: "🤔",
        title: Some("Философия"),
        description: Some("Глубокие размышления о смысле жизни, природе человека и мироздании"),
    },
    MoodInfo {
        key: "романтичное",
        emoji: "💕",
        title: Some("Романтика"),
        description: Some("Стихи о любви, страсти и нежных чувствах"),
    },
    MoodInfo {
        key: "патриотичное",
        emoji: "🇷🇺",
        title: None,
        description: None,
    },
    MoodInfo {
        key: "таинственное",
        emoji: "🌟",
        title: Some("Мистика"),
        description: Some("Таинственные, загадочные стихи с элементами мистики и символизма"),
    },
    MoodInfo {
        key: "ностальгичное",
        emoji: "🕰️",
        title: Some("Ностальгия"),
        description: Some("Произведения о воспоминаниях, прошлом и ушедших временах"),
    },
    MoodInfo {
        key: "страстное",
        emoji: "🔥",
        title: Some("Страсть"),
        description: Some("Эмоционально насыщенные произведения о сильных чувствах"),
    },
    MoodInfo {
        key: "напряженное",
        emoji: "⚡",
        title: Some("Напряжение"),
        description: Some("Стихи, создающие атмосферу ожидания и внутреннего конфликта"),
    },
    MoodInfo {
        key: "трагичное",
        emoji: "😢",
        title: Some("Трагедия"),
        description: Some("Произведения о горе, потерях и драматических событиях"),
    },
    MoodInfo {
        key: "героическое",
        emoji: "🏆",
        title: Some("Героизм"),
        description: Some("Стихи о подвигах, мужестве и величии человеческого духа"),
    },
    MoodInfo {
        key: "надеющееся",
        emoji: "✨",
        title: Some("Надежда"),
        description: Some("Оптимистичные произведения, вселяющие веру в лучшее"),
    },
    MoodInfo {
        key: "беспокойное",
        emoji: "🌊",
        title: Some("Беспокойство"),
        description: Some("Стихи, передающие тревогу, волнение и внутреннее напряжение"),
    },
    MoodInfo {
        key: "легкомысленное",
        emoji: "🌈",
        title: Some("Легкомыслие"),
        description: Some("Беззаботные, игривые произведения с лёгким настроением"),
    },
    MoodInfo {
        key: "пророческое",
        emoji: "🔮",
        title: Some("Пророчество"),
        description: Some("Провидческие стихи о будущем, предупреждения и предсказания"),
    },
];

/// Look up a known mood
pub fn mood_info(mood: &str) -> Option<&'static MoodInfo> {
    MOODS.iter().find(|m| m.key == mood)
}

pub fn mood_emoji(mood: &str) -> &'static str {
    mood_info(mood).map(|m| m.emoji).unwrap_or(DEFAULT_MOOD_EMOJI)
}

/// Display title for a mood, the raw value when it has none
pub fn mood_title(mood: &str) -> &str {
    mood_info(mood).and_then(|m| m.title).unwrap_or(mood)
}

/// A closed range of years, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    pub start: i32,
    pub end: i32,
}

impl Era {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Parse an era key such as `"1800-1850"`
    pub fn parse(key: &str) -> Option<Self> {
        let caps = era_regex().captures(key)?;
        let start = caps.get(1)?.as_str().parse().ok()?;
        let end = caps.get(2)?.as_str().parse().ok()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Named era with this exact range, if any
    pub fn info(&self) -> Option<&'static EraInfo> {
        ERAS.iter().find(|e| e.era == *self)
    }
}

static ERA_REGEX: OnceLock<Regex> = OnceLock::new();

fn era_regex() -> &'static Regex {
    ERA_REGEX.get_or_init(|| Regex::new(r"^\s*(\d+)\s*-\s*(\d+)\s*$").unwrap())
}

/// Display metadata for a named era
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraInfo {
    pub key: &'static str,
    pub era: Era,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ERAS: &[EraInfo] = &[
    EraInfo {
        key: "1800-1850",
        era: Era { start: 1800, end: 1850 },
        title: "Золотой век русской поэзии (1800-1850)",
        description: "Эпоха Пушкина, Лермонтова, романтизма и становления русской классики",
    },
    EraInfo {
        key: "1850-1900",
        era: Era { start: 1850, end: 1900 },
        title: "Эпоха реализма (1850-1900)",
        description: "Время Некрасова, Тютчева, развития реалистической поэзии",
    },
    EraInfo {
        key: "1900-1920",
        era: Era { start: 1900, end: 1920 },
        title: "Серебряный век (1900-1920)",
        description: "Расцвет символизма, акмеизма, футуризма. Блок, Ахматова, Маяковский",
    },
    EraInfo {
        key: "1920-1950",
        era: Era { start: 1920, end: 1950 },
        title: "Советский период (1920-1950)",
        description: "Эпоха социалистического реализма, военная лирика",
    },
    EraInfo {
        key: "1950-2000",
        era: Era { start: 1950, end: 2000 },
        title: "Современная поэзия (1950-2000)",
        description: "Оттепель, шестидесятники, авторская песня, постмодернизм",
    },
];

pub fn era_info(key: &str) -> Option<&'static EraInfo> {
    ERAS.iter().find(|e| e.key == key)
}

const FACT_CATEGORIES: &[(&str, &str)] = &[
    ("history", "История"),
    ("creative", "Творчество"),
    ("biography", "Биография"),
    ("poet", "О поэтах"),
    ("literature", "О литературе"),
    ("interesting", "Интересное"),
    ("talent", "Таланты"),
];

/// Display name of a fact category, the raw value when unknown
pub fn category_name(category: &str) -> &str {
    FACT_CATEGORIES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, name)| *name)
        .unwrap_or(category)
}
