//! In-page anchors, the vertical layout they resolve against, and the eased
//! scroll that moves the page between them.

use std::time::{Duration, Instant};

/// Space kept above a section when jumping to it, so the floating header
/// does not cover its title.
pub const HEADER_OFFSET: f32 = 80.0;

/// Scroll distance after which the header switches to its solid style.
pub const HEADER_SOLID_AFTER: f32 = 50.0;

pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

pub const HERO_HEIGHT: f32 = 640.0;
pub const SECTION_PADDING: f32 = 64.0;
pub const SECTION_INTRO_HEIGHT: f32 = 120.0;
pub const STATUS_HEIGHT: f32 = 160.0;

pub const PROJECT_COLUMNS: usize = 2;
pub const PROJECT_CARD_HEIGHT: f32 = 230.0;

pub const SKILL_COLUMNS: usize = 4;
pub const SKILL_CARD_HEIGHT: f32 = 150.0;
pub const CATEGORY_HEADER_HEIGHT: f32 = 56.0;
pub const CATEGORY_PADDING: f32 = 24.0;

pub const ABOUT_HEIGHT: f32 = 980.0;
pub const CONTACT_HEIGHT: f32 = 900.0;

pub const GRID_GAP: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Skills,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::About,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Projects => "#projects",
            Section::Skills => "#skills",
            Section::About => "#about",
            Section::Contact => "#contact",
        }
    }

    /// Accepts the anchor with or without its leading `#`.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let name = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| &s.anchor()[1..] == name)
    }

    /// Header navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    /// Footer navigation label.
    pub fn footer_label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projetos",
            Section::Skills => "Habilidades",
            Section::About => "Sobre",
            Section::Contact => "Contato",
        }
    }
}

/// Rows needed to lay `items` out in `columns` columns.
pub fn grid_rows(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}

fn grid_height(items: usize, columns: usize, cell: f32) -> f32 {
    let rows = grid_rows(items, columns) as f32;
    if rows == 0.0 {
        return 0.0;
    }
    rows * cell + (rows - 1.0) * GRID_GAP
}

/// Fixed heights of every section. The page renders each section at exactly
/// this height, which is what makes anchor offsets computable.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    heights: [f32; 5],
}

impl PageLayout {
    /// `project_cards` is `None` while the list is not showing cards.
    pub fn new(project_cards: Option<usize>, skill_counts: &[usize]) -> Self {
        Self {
            heights: [
                HERO_HEIGHT,
                Self::projects_height(project_cards),
                Self::skills_height(skill_counts),
                ABOUT_HEIGHT,
                CONTACT_HEIGHT,
            ],
        }
    }

    pub fn projects_height(cards: Option<usize>) -> f32 {
        let body = match cards {
            Some(n) if n > 0 => grid_height(n, PROJECT_COLUMNS, PROJECT_CARD_HEIGHT),
            _ => STATUS_HEIGHT,
        };
        SECTION_PADDING * 2.0 + SECTION_INTRO_HEIGHT + body
    }

    pub fn category_height(skills: usize) -> f32 {
        CATEGORY_PADDING * 2.0
            + CATEGORY_HEADER_HEIGHT
            + grid_height(skills, SKILL_COLUMNS, SKILL_CARD_HEIGHT)
    }

    pub fn skills_height(skill_counts: &[usize]) -> f32 {
        let categories: f32 = skill_counts.iter().map(|n| Self::category_height(*n)).sum();
        let gaps = skill_counts.len().saturating_sub(1) as f32 * GRID_GAP * 2.0;
        SECTION_PADDING * 2.0 + SECTION_INTRO_HEIGHT + categories + gaps
    }

    pub fn height(&self, section: Section) -> f32 {
        self.heights[section as usize]
    }

    pub fn top(&self, section: Section) -> f32 {
        self.heights[..section as usize].iter().sum()
    }

    /// Scroll position that brings `section` into view below the header.
    pub fn anchor_offset(&self, section: Section) -> f32 {
        (self.top(section) - HEADER_OFFSET).max(0.0)
    }

    /// Section whose band contains the line just below the header.
    pub fn section_at(&self, scroll_y: f32) -> Section {
        let probe = scroll_y + HEADER_OFFSET;
        let mut top = 0.0;
        for section in Section::ALL {
            top += self.height(section);
            if probe < top {
                return section;
            }
        }
        Section::Contact
    }
}

/// A cubic ease-out glide between two scroll positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
    pub duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: SCROLL_DURATION,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn position(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
