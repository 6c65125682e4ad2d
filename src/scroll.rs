use std::fmt;
use std::str::FromStr;

/// Distance above a section's top at which it starts counting as active.
pub const SPY_OFFSET: f64 = 150.0;
/// Height of the fixed navbar, subtracted from smooth-scroll targets.
pub const NAVBAR_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Achievements,
    Skills,
    Projects,
    Education,
    Interests,
    Publications,
    Contact,
}

/// Sections shown in the navbar, in page order.
pub const NAV_SECTIONS: [SectionId; 9] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Experience,
    SectionId::Achievements,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Education,
    SectionId::Interests,
    SectionId::Contact,
];

/// Sections listed under the footer's quick links.
pub const QUICK_LINKS: [SectionId; 8] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Experience,
    SectionId::Achievements,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Education,
    SectionId::Contact,
];

impl SectionId {
    pub const ALL: [SectionId; 10] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Achievements,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Interests,
        SectionId::Publications,
        SectionId::Contact,
    ];

    /// The DOM id of the rendered `<section>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Achievements => "achievements",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Interests => "interests",
            SectionId::Publications => "publications",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Layout snapshot of one section, taken at scroll time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Half-open band `[top - 150, top + height - 150)`.
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top - SPY_OFFSET && offset < self.top + self.height - SPY_OFFSET
    }
}

/// First section, in document order, whose band contains `offset`.
pub fn active_section<'a, I>(offset: f64, sections: I) -> Option<SectionId>
where
    I: IntoIterator<Item = &'a SectionBounds>,
{
    sections
        .into_iter()
        .find(|s| s.contains(offset))
        .map(|s| s.id)
}

/// Absolute page offset to scroll to so the element sits just below the navbar.
///
/// `rect_top` is the element's viewport-relative top, `page_offset` the
/// current vertical scroll position.
pub fn scroll_target(rect_top: f64, page_offset: f64) -> f64 {
    rect_top + page_offset - NAVBAR_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        // contiguous sections, 800px each
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| SectionBounds::new(*id, i as f64 * 800.0, 800.0))
            .collect()
    }

    #[test]
    fn test_band_boundaries() {
        let about = SectionBounds::new(SectionId::About, 1000.0, 600.0);
        assert!(about.contains(850.0));
        assert!(!about.contains(849.9));
        assert!(about.contains(1449.9));
        assert!(!about.contains(1450.0));
    }

    #[test]
    fn test_active_section_by_offset() {
        let sections = layout();
        assert_eq!(active_section(0.0, &sections), Some(SectionId::Home));
        assert_eq!(active_section(649.0, &sections), Some(SectionId::Home));
        assert_eq!(active_section(650.0, &sections), Some(SectionId::About));
        assert_eq!(active_section(6250.0, &sections), Some(SectionId::Publications));
        assert_eq!(active_section(7050.0, &sections), Some(SectionId::Contact));
    }

    #[test]
    fn test_no_section_clears_active() {
        let sections = layout();
        // past the end of the last band
        assert_eq!(active_section(10.0 * 800.0, &sections), None);
        assert_eq!(active_section(0.0, &Vec::<SectionBounds>::new()), None);
        // a gap between sections
        let gapped = [
            SectionBounds::new(SectionId::Home, 0.0, 400.0),
            SectionBounds::new(SectionId::About, 1000.0, 400.0),
        ];
        assert_eq!(active_section(500.0, &gapped), None);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let overlapping = [
            SectionBounds::new(SectionId::Skills, 0.0, 1000.0),
            SectionBounds::new(SectionId::Projects, 200.0, 1000.0),
        ];
        assert_eq!(active_section(300.0, &overlapping), Some(SectionId::Skills));
        assert_eq!(active_section(900.0, &overlapping), Some(SectionId::Projects));
    }

    #[test]
    fn test_at_most_one_active_for_sweep() {
        let sections = layout();
        let mut offset = -200.0;
        while offset < 9000.0 {
            let matching = sections.iter().filter(|s| s.contains(offset)).count();
            assert!(matching <= 1, "offset {offset} matched {matching} sections");
            match active_section(offset, &sections) {
                Some(id) => {
                    let s = sections.iter().find(|s| s.id == id).unwrap();
                    assert!(s.contains(offset));
                }
                None => assert_eq!(matching, 0),
            }
            offset += 37.5;
        }
    }

    #[test]
    fn test_section_id_round_trip_str() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
            assert_eq!(id.to_string(), id.as_str());
        }
        assert_eq!(
            "footer".parse::<SectionId>(),
            Err(UnknownSection("footer".to_string()))
        );
    }

    #[test]
    fn test_unknown_section_is_an_error() {
        let err = "footer".parse::<SectionId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section footer");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_nav_lists() {
        assert!(!NAV_SECTIONS.contains(&SectionId::Publications));
        assert!(!QUICK_LINKS.contains(&SectionId::Interests));
        assert!(QUICK_LINKS.iter().all(|id| NAV_SECTIONS.contains(id)));
    }

    #[test]
    fn test_scroll_target_accounts_for_navbar() {
        assert_eq!(scroll_target(500.0, 1200.0), 1620.0);
        assert_eq!(scroll_target(-300.0, 1200.0), 820.0);
        assert_eq!(scroll_target(0.0, 0.0), -80.0);
    }
}
