// SPDX-License-Identifier: MPL-2.0
//! Vertical geometry of the portfolio page.
//!
//! Every section and card is rendered with a fixed height, so their
//! positions inside the scrollable content are known without measuring the
//! widget tree. The scroll effects use these regions to compute visibility,
//! and smooth scrolling uses them to find a section's target offset.

/// Height of the fixed navigation bar drawn over the page.
pub const NAVBAR_HEIGHT: f32 = 64.0;

pub const HERO_HEIGHT: f32 = 640.0;
pub const SECTION_PADDING: f32 = 80.0;
pub const SECTION_HEADER: f32 = 96.0;
pub const GRID_GAP: f32 = 24.0;
pub const ABOUT_TEXT_HEIGHT: f32 = 200.0;
pub const CONTACT_BODY_HEIGHT: f32 = 760.0;
pub const FOOTER_HEIGHT: f32 = 96.0;

/// A card grid: column count and row height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub columns: usize,
    pub card_height: f32,
}

impl Grid {
    pub const STATS: Grid = Grid {
        columns: 4,
        card_height: 120.0,
    };
    pub const SKILLS: Grid = Grid {
        columns: 3,
        card_height: 150.0,
    };
    pub const PROJECTS: Grid = Grid {
        columns: 2,
        card_height: 220.0,
    };

    #[must_use]
    pub fn rows(self, count: usize) -> usize {
        count.div_ceil(self.columns.max(1))
    }

    /// Total height of a grid holding `count` cards.
    #[must_use]
    pub fn height(self, count: usize) -> f32 {
        let rows = self.rows(count);
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.card_height + (rows - 1) as f32 * GRID_GAP
    }

    /// Offset of the card at `index` from the top of the grid.
    #[must_use]
    pub fn card_offset(self, index: usize) -> f32 {
        let row = index / self.columns.max(1);
        row as f32 * (self.card_height + GRID_GAP)
    }
}

/// Sections of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Anchor name used by navigation links.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

/// Vertical extent inside the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    /// Fraction of this region that lies inside `[top, bottom)`.
    #[must_use]
    pub fn visible_ratio(self, top: f32, bottom: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let overlap = self.bottom().min(bottom) - self.top.max(top);
        (overlap.max(0.0) / self.height).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Stat,
    Skill,
    Project,
}

/// A revealable card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub kind: CardKind,
    pub index: usize,
}

impl CardId {
    #[must_use]
    pub fn new(kind: CardKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Positions of every section and card.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    sections: Vec<(SectionId, Region)>,
    cards: Vec<(CardId, Region)>,
    total_height: f32,
}

impl PageLayout {
    /// Lays out a page with the given number of cards in each grid.
    #[must_use]
    pub fn new(stats: usize, skills: usize, projects: usize) -> Self {
        let mut sections = Vec::with_capacity(SectionId::ALL.len());
        let mut cards = Vec::with_capacity(stats + skills + projects);
        let mut cursor = 0.0;

        sections.push((SectionId::Home, Region::new(cursor, HERO_HEIGHT)));
        cursor += HERO_HEIGHT;

        let mut push_grid_section =
            |id: SectionId, cursor: &mut f32, lead: f32, kind: CardKind, grid: Grid, count: usize| {
                let body_top = *cursor + SECTION_PADDING + SECTION_HEADER + lead;
                for index in 0..count {
                    cards.push((
                        CardId::new(kind, index),
                        Region::new(body_top + grid.card_offset(index), grid.card_height),
                    ));
                }
                let height = section_height(lead + grid.height(count));
                sections.push((id, Region::new(*cursor, height)));
                *cursor += height;
            };

        let about_lead = ABOUT_TEXT_HEIGHT + GRID_GAP;
        push_grid_section(
            SectionId::About,
            &mut cursor,
            about_lead,
            CardKind::Stat,
            Grid::STATS,
            stats,
        );
        push_grid_section(
            SectionId::Skills,
            &mut cursor,
            0.0,
            CardKind::Skill,
            Grid::SKILLS,
            skills,
        );
        push_grid_section(
            SectionId::Projects,
            &mut cursor,
            0.0,
            CardKind::Project,
            Grid::PROJECTS,
            projects,
        );

        let contact_height = section_height(CONTACT_BODY_HEIGHT);
        sections.push((SectionId::Contact, Region::new(cursor, contact_height)));
        cursor += contact_height;

        Self {
            sections,
            cards,
            total_height: cursor + FOOTER_HEIGHT,
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, Region)> + '_ {
        self.sections.iter().copied()
    }

    pub fn cards(&self) -> impl Iterator<Item = (CardId, Region)> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<Region> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, region)| *region)
    }

    /// Full scrollable height, footer included.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Largest scroll offset for a viewport of the given height.
    #[must_use]
    pub fn max_offset(&self, viewport_height: f32) -> f32 {
        (self.total_height - viewport_height).max(0.0)
    }
}

/// Height of a titled section whose body is `body` pixels tall.
#[must_use]
pub fn section_height(body: f32) -> f32 {
    SECTION_PADDING * 2.0 + SECTION_HEADER + body
}
