//! Pure transforms from fetched or static data to what the cards print.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, TimeZone};

pub const DEFAULT_LANGUAGE_COLOR: &str = "#8F8F8F";

/// Topics shown on a card before collapsing into "+N".
pub const MAX_TOPICS: usize = 3;

pub const MAX_PROFICIENCY: u8 = 5;

/// Roughly two lines of small text on a two-column project card.
pub const DESCRIPTION_MAX_CHARS: usize = 110;

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("Swift", "#F05138"),
    ("Kotlin", "#A97BFF"),
    ("Dart", "#00B4AB"),
    ("Go", "#00ADD8"),
    ("Rust", "#DEA584"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
];

const MONTHS_PT_BR: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.",
    "dez.",
];

pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// Parses `#rrggbb`. Anything else yields the neutral gray.
pub fn hex_color(hex: &str) -> iced::Color {
    let parsed = hex
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6)
        .and_then(|digits| u32::from_str_radix(digits, 16).ok());

    match parsed {
        Some(rgb) => iced::Color::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        None => iced::Color::from_rgb8(0x8F, 0x8F, 0x8F),
    }
}

/// Short Brazilian Portuguese calendar date, e.g. "15 de mar. de 2024", in
/// whatever zone `date` carries. Cards pass the viewer's local zone.
pub fn format_date<Tz: TimeZone>(date: DateTime<Tz>) -> String {
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Cuts `text` to at most `max_chars` characters, ending on a word boundary
/// with an ellipsis when anything was dropped.
pub fn clamp_description(text: &str, max_chars: usize) -> Cow<'_, str> {
    let text = text.trim();
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return Cow::Borrowed(text);
    };

    // Leave room for the ellipsis itself.
    let head = match text[..cut].char_indices().last() {
        Some((last, _)) => &text[..last],
        None => "",
    };
    let head = match head.rfind(char::is_whitespace) {
        Some(space) if space > head.len() / 2 => &head[..space],
        _ => head,
    };
    Cow::Owned(format!("{}…", head.trim_end()))
}

#[derive(Debug, PartialEq, Eq)]
pub struct TopicPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl TopicPreview<'_> {
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

pub fn topic_preview(topics: &[String]) -> TopicPreview<'_> {
    let shown = &topics[..topics.len().min(MAX_TOPICS)];
    TopicPreview {
        shown,
        hidden: topics.len() - shown.len(),
    }
}

pub fn proficiency_label(level: u8) -> &'static str {
    match level {
        1 => "Iniciante",
        2 => "Básico",
        3 => "Intermediário",
        4 => "Avançado",
        5 => "Especialista",
        _ => "Intermediário",
    }
}

/// Filled share of a proficiency bar, in `0.0..=1.0`.
pub fn proficiency_ratio(level: u8) -> f32 {
    f32::from(level.min(MAX_PROFICIENCY)) / f32::from(MAX_PROFICIENCY)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn known_and_unknown_languages() {
        assert_eq!(language_color("Rust"), "#DEA584");
        assert_eq!(language_color("C#"), "#178600");
        assert_eq!(language_color("COBOL"), DEFAULT_LANGUAGE_COLOR);
        assert_eq!(language_color("rust"), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn hex_colors_parse() {
        let rust = hex_color("#DEA584");
        assert_eq!(rust, iced::Color::from_rgb8(0xDE, 0xA5, 0x84));
        assert_eq!(hex_color("garbage"), hex_color(DEFAULT_LANGUAGE_COLOR));
    }

    #[test]
    fn dates_use_pt_br_short_months() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 0).unwrap();
        assert_eq!(format_date(date), "5 de mar. de 2024");
        let date = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_date(date), "31 de dez. de 2023");
    }

    #[test]
    fn dates_follow_the_zone_they_carry() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 0).unwrap();
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_date(date.with_timezone(&brasilia)), "5 de mar. de 2024");
        assert_eq!(format_date(date.with_timezone(&tokyo)), "6 de mar. de 2024");
    }

    #[test]
    fn long_descriptions_are_clamped() {
        let long: String = "Aplicativo de finanças pessoais "
            .repeat(11)
            .chars()
            .take(350)
            .collect();
        assert_eq!(long.chars().count(), 350);

        let clamped = clamp_description(&long, DESCRIPTION_MAX_CHARS);
        assert!(matches!(clamped, Cow::Owned(_)));
        assert!(clamped.chars().count() <= DESCRIPTION_MAX_CHARS);
        assert!(clamped.ends_with('…'));
        assert!(!clamped.ends_with(" …"));
        assert!(long.starts_with(clamped.trim_end_matches('…')));
    }

    #[test]
    fn short_descriptions_pass_through() {
        let short = "Portfólio pessoal";
        assert!(matches!(
            clamp_description(short, DESCRIPTION_MAX_CHARS),
            Cow::Borrowed("Portfólio pessoal")
        ));

        let exact = "a".repeat(DESCRIPTION_MAX_CHARS);
        assert_eq!(clamp_description(&exact, DESCRIPTION_MAX_CHARS), exact.as_str());

        let unbroken = "x".repeat(200);
        let clamped = clamp_description(&unbroken, 10);
        assert_eq!(clamped, format!("{}…", "x".repeat(9)));
    }

    #[test]
    fn topics_collapse_after_three() {
        let topics: Vec<String> = ["a", "b", "c", "d", "e"].map(String::from).to_vec();
        let preview = topic_preview(&topics);
        assert_eq!(preview.shown, &topics[..3]);
        assert_eq!(preview.overflow_label().as_deref(), Some("+2"));

        let few: Vec<String> = vec!["x".into()];
        let preview = topic_preview(&few);
        assert_eq!(preview.shown.len(), 1);
        assert_eq!(preview.overflow_label(), None);

        assert_eq!(topic_preview(&[]).hidden, 0);
    }

    #[test]
    fn proficiency_labels_and_bars() {
        assert_eq!(proficiency_label(1), "Iniciante");
        assert_eq!(proficiency_label(4), "Avançado");
        assert_eq!(proficiency_label(5), "Especialista");
        assert_eq!(proficiency_label(0), "Intermediário");
        assert_eq!(proficiency_label(9), "Intermediário");
        assert_eq!(proficiency_ratio(5), 1.0);
        assert!((proficiency_ratio(2) - 0.4).abs() < f32::EPSILON);
    }
}
