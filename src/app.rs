use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::AppConfig;
use crate::content::{Portfolio, Project};
use crate::gallery::{self, Autoplay, Carousel, Paginator};
use crate::scroll::{ScrollTracker, Section};
use crate::theme::Theme;

/// Rows taken by the progress bar, nav bar and status line
pub const CHROME_ROWS: u16 = 3;

/// Rows below the contact section
pub const FOOTER_ROWS: u16 = 3;

/// Rows scrolled per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// How long status messages stay up
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Menu,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutTab {
    Skills,
    Hobby,
}

/// Something clickable drawn on the last frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Section(Section),
    ThemeToggle,
    MenuToggle,
    Tab(AboutTab),
    PreviousPage,
    NextPage,
    Card(usize),
    PreviousPhoto,
    NextPhoto,
    Photo(usize),
    Link(String),
}

/// Click targets collected while drawing, in draw order
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    targets: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: Target) {
        if area.width > 0 && area.height > 0 {
            self.targets.push((area, target));
        }
    }

    /// Move targets drawn off-screen at (0, 0) to (dx, dy), keeping only
    /// the parts that land inside `clip`
    pub fn absorb(&mut self, other: HitMap, dx: u16, dy: i64, clip: Rect) {
        for (area, target) in other.targets {
            let top = (i64::from(area.y) + dy).max(i64::from(clip.y));
            let bottom = (i64::from(area.y) + dy + i64::from(area.height)).min(i64::from(clip.bottom()));
            if bottom <= top {
                continue;
            }
            let moved = Rect::new(area.x.saturating_add(dx), top as u16, area.width, (bottom - top) as u16);
            self.push(moved.intersection(clip), target);
        }
    }

    /// Topmost target under (column, row); later pushes are drawn on top
    pub fn at(&self, column: u16, row: u16) -> Option<&Target> {
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, target)| target)
    }
}

pub struct App {
    pub portfolio: Portfolio,
    pub config: AppConfig,

    pub dark_mode: bool,
    pub theme: Theme,
    pub popup: Popup,
    pub about_tab: AboutTab,

    // Mobile menu (only offered below the medium breakpoint)
    pub menu_selected: usize,

    // Viewport
    pub columns: u16,
    pub rows: u16,
    pub scroll: ScrollTracker,

    // Projects section
    pub projects: Paginator,
    pub selected_card: usize,

    // Hobby photos
    pub photos: Carousel,
    autoplay: Option<Autoplay>,

    // Status message (shown in the status line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,

    hits: HitMap,
}

impl App {
    pub fn new(portfolio: Portfolio, config: AppConfig, columns: u16, rows: u16) -> Self {
        let width = gallery::viewport_width(columns, config.cell_width_px);
        let projects = Paginator::new(portfolio.projects.len(), width, config.breakpoints);
        let photos = Carousel::new(portfolio.hobby.photos.len());
        let dark_mode = config.dark_mode;
        let theme = Theme::for_mode(dark_mode, config.accent.as_deref());

        Self {
            portfolio,
            dark_mode,
            theme,
            popup: Popup::None,
            about_tab: AboutTab::Skills,
            menu_selected: 0,
            columns,
            rows,
            scroll: ScrollTracker::new(rows.saturating_sub(CHROME_ROWS), FOOTER_ROWS),
            projects,
            selected_card: 0,
            photos,
            autoplay: None,
            status_message: None,
            status_message_time: None,
            hits: HitMap::default(),
            config,
        }
    }

    /// Arm the photo autoplay timer. Must be called inside the tokio runtime;
    /// the timer is cancelled when the app is dropped.
    pub fn mount(&mut self) {
        if self.autoplay.is_none() && !self.photos.is_empty() {
            let autoplay = Autoplay::start(Duration::from_millis(self.config.autoplay_interval_ms));
            tracing::info!(
                "Photo autoplay every {}ms over {} photos",
                autoplay.period().as_millis(),
                self.photos.len()
            );
            self.autoplay = Some(autoplay);
        }
    }

    /// Disarm the autoplay timer
    pub fn unmount(&mut self) {
        if let Some(mut autoplay) = self.autoplay.take() {
            autoplay.stop();
        }
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.as_ref().is_some_and(Autoplay::is_running)
    }

    #[cfg(test)]
    fn autoplay_task(&self) -> Option<tokio::task::AbortHandle> {
        self.autoplay.as_ref().and_then(Autoplay::task)
    }

    /// Viewport width in pixels
    pub fn viewport_width(&self) -> u32 {
        gallery::viewport_width(self.columns, self.config.cell_width_px)
    }

    /// Below the medium breakpoint: nav links collapse into the menu
    pub fn is_narrow(&self) -> bool {
        self.viewport_width() < self.config.breakpoints.medium
    }

    pub fn page_height(&self) -> u16 {
        self.rows.saturating_sub(CHROME_ROWS)
    }

    pub fn current_section(&self) -> Section {
        self.scroll.current_section()
    }

    /// Project cards on the current page
    pub fn current_projects(&self) -> &[Project] {
        self.projects.current_slice(&self.portfolio.projects)
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.current_projects().get(self.selected_card)
    }

    pub fn current_photo(&self) -> Option<&str> {
        self.portfolio
            .hobby
            .photos
            .get(self.photos.index())
            .map(String::as_str)
    }

    /// Set a status message (auto-clears after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    pub fn set_hit_map(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::for_mode(self.dark_mode, self.config.accent.as_deref());
        tracing::debug!("Dark mode {}", if self.dark_mode { "on" } else { "off" });
    }

    pub fn toggle_menu(&mut self) {
        if self.popup == Popup::Menu {
            self.popup = Popup::None;
        } else if self.is_narrow() {
            self.menu_selected = self.current_section().index();
            self.popup = Popup::Menu;
        }
    }

    pub fn toggle_about_tab(&mut self) {
        self.about_tab = match self.about_tab {
            AboutTab::Skills => AboutTab::Hobby,
            AboutTab::Hobby => AboutTab::Skills,
        };
    }

    pub fn go_to(&mut self, section: Section) {
        self.scroll.scroll_to(section);
        if self.popup == Popup::Menu {
            self.popup = Popup::None;
        }
    }

    pub fn next_page(&mut self) {
        self.projects.next();
        self.selected_card = 0;
    }

    pub fn previous_page(&mut self) {
        self.projects.previous();
        self.selected_card = 0;
    }

    /// Cycle the highlighted card on the current page
    pub fn select_next_card(&mut self) {
        let on_page = self.current_projects().len();
        if on_page > 0 {
            self.selected_card = (self.selected_card + 1) % on_page;
        }
    }

    pub fn next_photo(&mut self) {
        self.photos.next();
    }

    pub fn previous_photo(&mut self) {
        self.photos.previous();
    }

    pub fn jump_to_photo(&mut self, index: usize) {
        self.photos.jump_to(index);
    }

    /// Apply `fired` autoplay ticks
    pub fn on_autoplay_tick(&mut self, fired: usize) {
        for _ in 0..fired {
            self.photos.tick();
        }
    }

    /// Terminal resized: recompute page size and section height
    pub fn on_resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;

        if self.projects.resize(self.viewport_width()) {
            self.selected_card = 0;
        }
        self.scroll.set_viewport_height(self.page_height());

        if !self.is_narrow() && self.popup == Popup::Menu {
            self.popup = Popup::None;
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle popups first
        if self.popup != Popup::None {
            return self.handle_popup_key(key);
        }

        self.handle_normal_key(key).await
    }

    async fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        let page = i32::from(self.page_height().max(1));

        match key.code {
            // Section navigation
            KeyCode::Tab => self.go_to(self.current_section().next()),
            KeyCode::BackTab => self.go_to(self.current_section().previous()),
            KeyCode::Char('n') => self.scroll.scroll_to_next(),

            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => self.scroll.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll.scroll_by(page),
            KeyCode::PageUp => self.scroll.scroll_by(-page),
            KeyCode::Home => self.scroll.scroll_to_top(),
            KeyCode::End => self.scroll.scroll_to_bottom(),

            // Project pages
            KeyCode::Right | KeyCode::Char(']') => self.next_page(),
            KeyCode::Left | KeyCode::Char('[') => self.previous_page(),
            KeyCode::Char('c') => self.select_next_card(),
            KeyCode::Char('o') => {
                let url = self.selected_project().and_then(|p| p.live_demo.clone());
                self.open_link(url, "live demo").await?;
            }
            KeyCode::Char('g') => {
                let url = self.selected_project().and_then(|p| p.source.clone());
                self.open_link(url, "source").await?;
            }

            // Photos
            KeyCode::Char('.') | KeyCode::Char('>') => self.next_photo(),
            KeyCode::Char(',') | KeyCode::Char('<') => self.previous_photo(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if !self.photos.jump_to(index) {
                    self.set_status(format!("No photo {}", index + 1));
                }
            }

            // Page chrome
            KeyCode::Char('t') => self.toggle_about_tab(),
            KeyCode::Char('d') => self.toggle_dark_mode(),
            KeyCode::Char('m') => self.toggle_menu(),

            // Help (? or h)
            KeyCode::Char('?') | KeyCode::Char('h') => self.popup = Popup::Help,

            _ => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.popup {
            Popup::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Enter | KeyCode::Char('q')) {
                    self.popup = Popup::None;
                }
            }
            Popup::Menu => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.menu_selected = (self.menu_selected + 1) % Section::ALL.len();
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.menu_selected = self
                        .menu_selected
                        .checked_sub(1)
                        .unwrap_or(Section::ALL.len() - 1);
                }
                KeyCode::Enter => self.go_to(Section::from_index(self.menu_selected)),
                KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => self.popup = Popup::None,
                _ => {}
            },
            Popup::None => {}
        }
        Ok(())
    }

    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::ScrollDown if self.popup == Popup::None => self.scroll.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp if self.popup == Popup::None => self.scroll.scroll_by(-WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.hits.at(mouse.column, mouse.row).cloned() {
                    self.click(target).await?;
                } else if self.popup != Popup::None {
                    self.popup = Popup::None;
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn click(&mut self, target: Target) -> Result<()> {
        match target {
            Target::Section(section) => self.go_to(section),
            Target::ThemeToggle => self.toggle_dark_mode(),
            Target::MenuToggle => self.toggle_menu(),
            Target::Tab(tab) => self.about_tab = tab,
            Target::PreviousPage => self.previous_page(),
            Target::NextPage => self.next_page(),
            Target::Card(index) => self.selected_card = index,
            Target::PreviousPhoto => self.previous_photo(),
            Target::NextPhoto => self.next_photo(),
            Target::Photo(index) => self.jump_to_photo(index),
            Target::Link(url) => self.open_link(Some(url), "link").await?,
        }
        Ok(())
    }

    async fn open_link(&mut self, url: Option<String>, what: &str) -> Result<()> {
        match url {
            Some(url) => {
                crate::links::open(&url).await?;
                self.set_status(format!("Opened {}", url));
            }
            None => self.set_status(format!("No {} for this project", what)),
        }
        Ok(())
    }

    /// Periodic housekeeping, called from the event loop
    pub fn tick(&mut self) {
        let fired = self.autoplay.as_mut().map(Autoplay::drain).unwrap_or(0);
        if fired > 0 {
            self.on_autoplay_tick(fired);
        }

        // Clear status message after timeout
        if let Some(time) = self.status_message_time {
            if time.elapsed() >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}
