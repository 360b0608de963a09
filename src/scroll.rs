//! Page sections and scroll position tracking
//!
//! Every section is one viewport tall, so the section under the top edge of
//! the viewport is just `offset / viewport_height`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Contact => 3,
        }
    }

    /// Section at `index`, saturating at the last one
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About Me",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    offset: u32,
    viewport_height: u32,
    /// Rows below the last section (footer)
    trailer: u32,
}

impl ScrollTracker {
    pub fn new(viewport_height: u16, trailer: u16) -> Self {
        Self {
            offset: 0,
            viewport_height: u32::from(viewport_height),
            trailer: u32::from(trailer),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Height of one section, never 0
    pub fn section_height(&self) -> u32 {
        self.viewport_height.max(1)
    }

    pub fn content_height(&self) -> u32 {
        self.section_height() * Section::ALL.len() as u32 + self.trailer
    }

    pub fn max_offset(&self) -> u32 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    pub fn current_section(&self) -> Section {
        Section::from_index((self.offset / self.section_height()) as usize)
    }

    /// Fraction of the page scrolled past, in [0, 1]
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            return 0.0;
        }
        (f64::from(self.offset) / f64::from(max)).clamp(0.0, 1.0)
    }

    /// Viewport resized; keep the same section at the top
    pub fn set_viewport_height(&mut self, height: u16) {
        let section = self.current_section();
        self.viewport_height = u32::from(height);
        self.scroll_to(section);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = i64::from(self.offset) + i64::from(delta);
        self.offset = target.clamp(0, i64::from(self.max_offset())) as u32;
    }

    pub fn scroll_to(&mut self, section: Section) {
        let target = section.index() as u32 * self.section_height();
        self.offset = target.min(self.max_offset());
    }

    pub fn scroll_to_next(&mut self) {
        self.scroll_to(self.current_section().next());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_section_follows_offset() {
        let mut scroll = ScrollTracker::new(20, 3);
        assert_eq!(scroll.current_section(), Section::Home);
        scroll.scroll_by(19);
        assert_eq!(scroll.current_section(), Section::Home);
        scroll.scroll_by(1);
        assert_eq!(scroll.current_section(), Section::About);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.current_section(), Section::Contact);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut scroll = ScrollTracker::new(20, 3);
        scroll.scroll_by(-5);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(10_000);
        assert_eq!(scroll.offset(), 63);
    }

    #[test]
    fn test_progress() {
        let mut scroll = ScrollTracker::new(10, 0);
        assert_eq!(scroll.progress(), 0.0);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.progress(), 1.0);
        scroll.scroll_to(Section::About);
        assert!((scroll.progress() - 10.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_to_next_saturates() {
        let mut scroll = ScrollTracker::new(10, 2);
        for expected in [Section::About, Section::Projects, Section::Contact, Section::Contact] {
            scroll.scroll_to_next();
            assert_eq!(scroll.current_section(), expected);
        }
    }

    #[test]
    fn test_zero_height_viewport() {
        let mut scroll = ScrollTracker::new(0, 0);
        assert_eq!(scroll.section_height(), 1);
        scroll.scroll_to(Section::Projects);
        assert_eq!(scroll.current_section(), Section::Projects);
    }

    #[test]
    fn test_resize_keeps_section() {
        let mut scroll = ScrollTracker::new(20, 3);
        scroll.scroll_to(Section::Projects);
        scroll.set_viewport_height(30);
        assert_eq!(scroll.offset(), 60);
        assert_eq!(scroll.current_section(), Section::Projects);
    }

    #[test]
    fn test_section_labels_and_order() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "About Me", "Projects", "Contact"]);
        assert_eq!(Section::Home.previous(), Section::Home);
        assert_eq!(Section::from_index(99), Section::Contact);
    }
}
