mod components;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

use crate::app::{AboutTab, App, HitMap, Popup, Target, FOOTER_ROWS};
use crate::scroll::Section;
use crate::theme::Theme;
use components::{Button, button_row, gradient_title, indicator_dots, progress_bar, prose, section_heading, skill_tags, tech_tags};

/// Draw one frame and return the click targets it produced
pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let area = f.area();
    let theme = &app.theme;
    let mut hits = HitMap::default();

    f.buffer_mut().set_style(area, Style::default().bg(theme.bg).fg(theme.text));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scroll progress
            Constraint::Length(1), // Nav bar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status line
        ])
        .split(area);

    progress_bar(f.buffer_mut(), chunks[0], app.scroll.progress(), theme);
    draw_nav(f, app, chunks[1], &mut hits);
    draw_page(f.buffer_mut(), app, chunks[2], &mut hits);
    draw_status_line(f, app, chunks[3]);

    // Draw popups on top
    match app.popup {
        Popup::None => {}
        Popup::Menu => draw_menu(f, app, chunks[2], &mut hits),
        Popup::Help => {
            // Nothing under the popup is clickable; a click closes it
            hits = HitMap::default();
            draw_help_popup(f, theme);
        }
    }

    hits
}

fn draw_nav(f: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &app.theme;
    let brand = Line::from(vec![
        Span::styled(" </> ", Style::default().fg(theme.accent)),
        Span::styled(
            app.portfolio.profile.name.as_str(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(brand), area);

    // Right side, laid out from the right edge: theme toggle, menu toggle, links
    let mut right = area.x + area.width;

    let toggle = if app.dark_mode { " ☀ " } else { " ☾ " };
    right = right.saturating_sub(4);
    f.buffer_mut().set_string(right, area.y, toggle, Style::default().fg(theme.warning));
    hits.push(Rect::new(right, area.y, 3, 1), Target::ThemeToggle);

    if app.is_narrow() {
        let style = if app.popup == Popup::Menu {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        right = right.saturating_sub(4);
        f.buffer_mut().set_string(right, area.y, " ≡ ", style);
        hits.push(Rect::new(right, area.y, 3, 1), Target::MenuToggle);
        return;
    }

    let current = app.current_section();
    for section in Section::ALL.iter().rev() {
        let label = format!(" {} ", section.label());
        let width = label.chars().count() as u16;
        if right < area.x + width + 20 {
            break;
        }
        right -= width + 1;
        let style = if *section == current {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_dim)
        };
        f.buffer_mut().set_string(right, area.y, &label, style);
        hits.push(Rect::new(right, area.y, width, 1), Target::Section(*section));
    }
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    // Priority: status message > key hints for the current section
    let line = if let Some(ref status) = app.status_message {
        Line::from(Span::styled(status.as_str(), Style::default().fg(theme.warning)))
    } else {
        let hints: Vec<(&str, &str)> = match app.current_section() {
            Section::Home => vec![("n", "Next"), ("Tab", "Sections"), ("d", "Theme"), ("?", "Help"), ("q", "Quit")],
            Section::About => vec![("t", "Tab"), (",/.", "Photo"), ("1-9", "Jump"), ("d", "Theme"), ("?", "Help")],
            Section::Projects => vec![("←/→", "Page"), ("c", "Card"), ("o", "Demo"), ("g", "Source"), ("?", "Help")],
            Section::Contact => vec![("Home", "Top"), ("Tab", "Sections"), ("d", "Theme"), ("?", "Help"), ("q", "Quit")],
        };

        // Responsive: show fewer hints on narrow terminals
        let max_hints = if area.width < 50 { 3 } else if area.width < 70 { 4 } else { hints.len() };

        let spans: Vec<Span> = hints
            .iter()
            .take(max_hints)
            .flat_map(|(key, action)| {
                vec![
                    Span::styled(*key, Style::default().fg(theme.accent)),
                    Span::styled(format!(" {} │ ", action), Style::default().fg(theme.text_dim)),
                ]
            })
            .collect();
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the scrolled page: every section is drawn off-screen at full
/// viewport height and the visible rows are copied into the frame.
fn draw_page(buf: &mut Buffer, app: &App, area: Rect, hits: &mut HitMap) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let height = area.height;
    let offset = i64::from(app.scroll.offset());

    for section in Section::ALL {
        let top = i64::from(section.index() as u32 * app.scroll.section_height()) - offset;
        blit_block(buf, area, top, height, hits, |sbuf, sarea, shits| match section {
            Section::Home => draw_home(sbuf, sarea, app, shits),
            Section::About => draw_about(sbuf, sarea, app, shits),
            Section::Projects => draw_projects(sbuf, sarea, app, shits),
            Section::Contact => draw_contact(sbuf, sarea, app, shits),
        });
    }

    let footer_top = i64::from(app.scroll.section_height()) * Section::ALL.len() as i64 - offset;
    blit_block(buf, area, footer_top, FOOTER_ROWS, hits, |sbuf, sarea, shits| {
        draw_footer(sbuf, sarea, app, shits)
    });

    if !app.is_narrow() && app.viewport_width() >= app.config.breakpoints.large {
        draw_scroll_guide(buf, app, area, hits);
    }
}

/// Draw a block of `height` rows whose top edge sits `top` rows below the
/// page's top edge (negative when scrolled past), clipped to `area`.
fn blit_block<F>(buf: &mut Buffer, area: Rect, top: i64, height: u16, hits: &mut HitMap, draw: F)
where
    F: FnOnce(&mut Buffer, Rect, &mut HitMap),
{
    let bottom = top + i64::from(height);
    if bottom <= 0 || top >= i64::from(area.height) || height == 0 {
        return;
    }

    let local = Rect::new(0, 0, area.width, height);
    let mut scratch = Buffer::empty(local);
    let mut local_hits = HitMap::default();
    draw(&mut scratch, local, &mut local_hits);

    for row in 0..height {
        let y = top + i64::from(row);
        if y < 0 || y >= i64::from(area.height) {
            continue;
        }
        for col in 0..area.width {
            let src = scratch[(col, row)].clone();
            buf[(area.x + col, area.y + y as u16)] = src;
        }
    }

    hits.absorb(local_hits, area.x, i64::from(area.y) + top, area);
}

fn fill(buf: &mut Buffer, area: Rect, theme: &Theme, alt: bool) {
    let bg = if alt { theme.bg_alt } else { theme.bg };
    buf.set_style(area, Style::default().bg(bg).fg(theme.text));
}

/// Inner content area with horizontal padding
fn padded(area: Rect) -> Rect {
    let pad = if area.width > 100 { area.width / 10 } else { 2.min(area.width / 2) };
    Rect::new(area.x + pad, area.y, area.width - pad * 2, area.height)
}

fn draw_home(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    let profile = &app.portfolio.profile;
    fill(buf, area, theme, false);
    let inner = padded(area);

    let (text_area, avatar_area) = if app.is_narrow() {
        (inner, None)
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);
        (cols[0], Some(cols[1]))
    };

    let lines = vec![
        gradient_title(&profile.name, theme),
        Line::from(Span::styled(
            profile.role.as_str(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(profile.tagline.as_str(), Style::default().fg(theme.text_dim))),
    ];
    let text_height = wrapped_height(
        &[profile.name.as_str(), profile.role.as_str(), "", profile.tagline.as_str()],
        text_area.width,
    )
    .min(text_area.height);
    let text = Paragraph::new(lines).wrap(Wrap { trim: true });

    // Vertically center text + a blank row + the buttons
    let block_height = text_height + 2;
    let top = text_area.y + text_area.height.saturating_sub(block_height) / 2;
    text.render(Rect::new(text_area.x, top, text_area.width, text_height), buf);

    let buttons_y = top + text_height + 1;
    if buttons_y < area.y + area.height {
        let buttons = profile
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let button = Button::new(link.label.clone(), Target::Link(link.url.clone()));
                if i + 1 == profile.links.len() { button.primary() } else { button }
            })
            .collect();
        button_row(buf, Rect::new(text_area.x, buttons_y, text_area.width, 1), buttons, theme, hits, false);
    }

    if let Some(avatar_area) = avatar_area {
        draw_avatar(buf, avatar_area, &profile.name, theme);
    }

    if area.height > 2 {
        let hint = Line::from(Span::styled("▼  n", Style::default().fg(theme.text_dim)));
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, area.y + area.height - 1, area.width, 1), buf);
    }
}

/// Rows needed to show `lines` wrapped at `width`. Counts characters, so
/// word wrapping can take a row more than this on long lines.
fn wrapped_height(lines: &[&str], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.chars().count().div_ceil(width).max(1) as u16)
        .sum()
}

/// Round-ish frame with the profile initials
fn draw_avatar(buf: &mut Buffer, area: Rect, name: &str, theme: &Theme) {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();

    let size_w = 14.min(area.width);
    let size_h = 7.min(area.height);
    if size_w < 6 || size_h < 3 {
        return;
    }
    let frame = Rect::new(
        area.x + (area.width - size_w) / 2,
        area.y + (area.height - size_h) / 2,
        size_w,
        size_h,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_bright));
    let inner = block.inner(frame);
    block.render(frame, buf);

    let label = Line::from(Span::styled(
        initials,
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ));
    let y = inner.y + inner.height / 2;
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .render(Rect::new(inner.x, y, inner.width, 1), buf);
}

fn draw_about(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    fill(buf, area, theme, true);
    let inner = padded(area);
    if inner.height < 4 {
        section_heading(buf, inner, Section::About.label(), theme);
        return;
    }

    section_heading(buf, Rect { y: inner.y + 1, height: 2, ..inner }, Section::About.label(), theme);

    // Tab strip
    let tabs = [(AboutTab::Skills, "Skills"), (AboutTab::Hobby, app.portfolio.hobby.title.as_str())];
    let strip_width: u16 = tabs.iter().map(|(_, label)| label.chars().count() as u16 + 4).sum();
    let mut x = inner.x + inner.width.saturating_sub(strip_width) / 2;
    let tab_y = inner.y + 3;
    for (tab, label) in tabs {
        let text = format!("  {}  ", label);
        let width = text.chars().count() as u16;
        let style = if app.about_tab == tab {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_dim).bg(theme.bg_selected)
        };
        buf.set_stringn(x, tab_y, &text, (inner.x + inner.width).saturating_sub(x) as usize, style);
        hits.push(Rect::new(x, tab_y, width.min((inner.x + inner.width).saturating_sub(x)), 1), Target::Tab(tab));
        x += width;
    }

    let body = Rect::new(inner.x, tab_y + 2, inner.width, inner.height.saturating_sub(5));
    match app.about_tab {
        AboutTab::Skills => draw_skills_tab(buf, body, app),
        AboutTab::Hobby => draw_hobby_tab(buf, body, app, hits),
    }
}

fn split_body(app: &App, body: Rect) -> (Rect, Rect) {
    if app.is_narrow() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);
        (rows[0], rows[1])
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Length(2), Constraint::Percentage(50)])
            .split(body);
        (cols[0], cols[2])
    }
}

fn draw_skills_tab(buf: &mut Buffer, body: Rect, app: &App) {
    let theme = &app.theme;
    let (left, right) = split_body(app, body);

    prose(&app.portfolio.about.paragraphs, theme).render(left, buf);

    let mut lines = Vec::new();
    for (i, category) in app.portfolio.about.skills.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let color = theme.tone(category.tone);
        lines.push(Line::from(Span::styled(
            category.name.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(skill_tags(&category.skills, color));
    }
    Paragraph::new(lines).wrap(Wrap { trim: true }).render(right, buf);
}

fn draw_hobby_tab(buf: &mut Buffer, body: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    let hobby = &app.portfolio.hobby;
    let (left, right) = split_body(app, body);

    // Handle button sits on the last row of the column
    let reserved = if hobby.handle.is_some() { 2 } else { 0 };
    prose(&hobby.paragraphs, theme).render(Rect { height: left.height.saturating_sub(reserved), ..left }, buf);

    if let Some(ref handle) = hobby.handle {
        if left.height > reserved {
            let y = left.y + left.height - 1;
            button_row(
                buf,
                Rect::new(left.x, y, left.width, 1),
                vec![Button::new(handle.label.clone(), Target::Link(handle.url.clone()))],
                theme,
                hits,
                false,
            );
        }
    }

    draw_carousel(buf, right, app, hits);
}

/// Photo frame with previous/next arrows and indicator dots
fn draw_carousel(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    if area.height < 3 || area.width < 10 {
        return;
    }

    let count = app.photos.len();
    let title = if count == 0 {
        " No photos ".to_string()
    } else {
        format!(" Photo {} of {} ", app.photos.index() + 1, count)
    };

    let frame = Rect { height: area.height - 1, ..area };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.inactive));
    let inner = block.inner(frame);
    block.render(frame, buf);

    if let Some(photo) = app.current_photo() {
        let name = photo.rsplit('/').next().unwrap_or(photo);
        let lines = vec![
            Line::from(Span::styled("▣", Style::default().fg(theme.accent_bright))),
            Line::from(Span::styled(name, Style::default().fg(theme.text))),
        ];
        let y = inner.y + inner.height.saturating_sub(2) / 2;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, y, inner.width, inner.height.min(2)), buf);

        // Arrows on the frame's side borders
        let mid = frame.y + frame.height / 2;
        buf.set_string(frame.x, mid, "‹", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));
        buf.set_string(frame.x + frame.width - 1, mid, "›", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));
        hits.push(Rect::new(frame.x, mid, 1, 1), Target::PreviousPhoto);
        hits.push(Rect::new(frame.x + frame.width - 1, mid, 1, 1), Target::NextPhoto);
    }

    let dots = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    indicator_dots(buf, dots, count, app.photos.index(), theme, hits);
}

fn draw_projects(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    fill(buf, area, theme, false);
    let inner = padded(area);
    if inner.height < 4 {
        section_heading(buf, inner, Section::Projects.label(), theme);
        return;
    }
    section_heading(buf, Rect { y: inner.y + 1, height: 2, ..inner }, Section::Projects.label(), theme);

    let total = app.projects.total_pages();
    let pager_rows = if total > 1 { 2 } else { 0 };
    let cards_area = Rect::new(
        inner.x,
        inner.y + 4,
        inner.width,
        inner.height.saturating_sub(4 + pager_rows),
    );

    let cards = app.current_projects();
    if cards.is_empty() {
        let empty = Line::from(Span::styled("No projects yet", Style::default().fg(theme.text_dim)));
        Paragraph::new(empty).alignment(Alignment::Center).render(cards_area, buf);
    } else {
        let per_page = app.projects.page_size() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..per_page).map(|_| Constraint::Ratio(1, per_page)).collect::<Vec<_>>())
            .spacing(1)
            .split(cards_area);

        for (i, project) in cards.iter().enumerate() {
            draw_card(buf, columns[i], app, i, project, hits);
        }
    }

    let label = format!("  {} of {}  ", app.projects.page_index() + 1, total);
    let label_width = label.chars().count() as u16;
    let width = label_width + 2;
    if total > 1 && inner.width >= width {
        let y = inner.y + inner.height - 1;
        let x = inner.x + inner.width.saturating_sub(width) / 2;
        let arrow = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        buf.set_string(x, y, "‹", arrow);
        buf.set_string(x + 1, y, &label, Style::default().fg(theme.text_dim));
        buf.set_string(x + 1 + label_width, y, "›", arrow);
        hits.push(Rect::new(x, y, 1, 1), Target::PreviousPage);
        hits.push(Rect::new(x + 1 + label_width, y, 1, 1), Target::NextPage);
    }
}

fn draw_card(
    buf: &mut Buffer,
    area: Rect,
    app: &App,
    index: usize,
    project: &crate::content::Project,
    hits: &mut HitMap,
) {
    let theme = &app.theme;
    let selected = index == app.selected_card;
    hits.push(area, Target::Card(index));

    let border = if selected { theme.accent } else { theme.inactive };
    let title_style = if selected {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", project.title), title_style))
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    let mut lines = Vec::new();
    if let Some(ref image) = project.image {
        lines.push(Line::from(Span::styled(format!("▣ {}", image), Style::default().fg(theme.text_dim))));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(project.description.as_str(), Style::default().fg(theme.text))));
    lines.push(Line::from(""));
    lines.push(tech_tags(&project.technologies, theme));

    let body = Rect { height: inner.height.saturating_sub(1), ..inner };
    Paragraph::new(lines).wrap(Wrap { trim: true }).render(body, buf);

    let mut buttons = Vec::new();
    if let Some(ref url) = project.live_demo {
        buttons.push(Button::new("Live Demo", Target::Link(url.clone())).primary());
    }
    if let Some(ref url) = project.source {
        buttons.push(Button::new("GitHub", Target::Link(url.clone())));
    }
    let y = inner.y + inner.height - 1;
    button_row(buf, Rect::new(inner.x, y, inner.width, 1), buttons, theme, hits, false);
}

fn draw_contact(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    let contact = &app.portfolio.contact;
    fill(buf, area, theme, true);
    let inner = padded(area);

    let top = inner.y + inner.height.saturating_sub(9) / 2;
    section_heading(buf, Rect::new(inner.x, top, inner.width, 2.min(inner.height)), "Get in touch", theme);

    let blurb_y = top + 3;
    if blurb_y >= inner.y + inner.height {
        return;
    }
    Paragraph::new(Line::from(Span::styled(contact.blurb.as_str(), Style::default().fg(theme.text_dim))))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(Rect::new(inner.x, blurb_y, inner.width, 2.min(inner.y + inner.height - blurb_y)), buf);

    let mut rows = Vec::new();
    if let Some(ref phone) = contact.phone {
        rows.push(("☎", phone.clone(), None));
    }
    if let Some(ref email) = contact.email {
        rows.push(("✉", email.clone(), Some(format!("mailto:{}", email))));
    }

    let mut y = blurb_y + 3;
    for (icon, value, link) in rows {
        if y >= inner.y + inner.height {
            break;
        }
        let text = format!("{}  {}", icon, value);
        let width = (text.chars().count() as u16).min(inner.width);
        let x = inner.x + (inner.width - width) / 2;
        buf.set_stringn(x, y, &text, width as usize, Style::default().fg(theme.text));
        buf.set_string(x, y, icon, Style::default().fg(theme.accent));
        if let Some(url) = link {
            hits.push(Rect::new(x, y, width, 1), Target::Link(url));
        }
        y += 2;
    }
}

fn draw_footer(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let theme = &app.theme;
    fill(buf, area, theme, false);

    let rule = "─".repeat(area.width as usize);
    buf.set_string(area.x, area.y, &rule, Style::default().fg(theme.inactive));

    if area.height > 1 {
        Paragraph::new(Line::from(Span::styled(
            app.portfolio.footer.as_str(),
            Style::default().fg(theme.text_dim),
        )))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    }

    if area.height > 2 {
        let buttons = app
            .portfolio
            .profile
            .links
            .iter()
            .filter(|link| link.label != "Resume")
            .map(|link| Button::new(link.label.clone(), Target::Link(link.url.clone())))
            .collect();
        button_row(buf, Rect::new(area.x, area.y + 2, area.width, 1), buttons, theme, hits, true);
    }
}

/// Dots on the right edge, one per section
fn draw_scroll_guide(buf: &mut Buffer, app: &App, area: Rect, hits: &mut HitMap) {
    let theme = &app.theme;
    let count = Section::ALL.len() as u16;
    let height = count * 2 - 1;
    if area.height < height || area.width < 4 {
        return;
    }

    let x = area.x + area.width - 2;
    let mut y = area.y + (area.height - height) / 2;
    let current = app.current_section();
    for section in Section::ALL {
        let (symbol, style) = if section == current {
            ("◆", Style::default().fg(theme.accent))
        } else {
            ("◇", Style::default().fg(theme.inactive))
        };
        buf.set_string(x, y, symbol, style);
        hits.push(Rect::new(x, y, 1, 1), Target::Section(section));
        y += 2;
    }
}

fn draw_menu(f: &mut Frame, app: &App, page: Rect, hits: &mut HitMap) {
    let theme = &app.theme;
    let height = (Section::ALL.len() as u16 + 2).min(page.height);
    let area = Rect::new(page.x, page.y, page.width, height);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.inactive))
        .style(Style::default().bg(theme.bg_alt));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let current = app.current_section();
    for (i, section) in Section::ALL.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let marker = if i == app.menu_selected { "▸ " } else { "  " };
        let style = if *section == current {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else if i == app.menu_selected {
            Style::default().fg(theme.text).bg(theme.bg_selected)
        } else {
            Style::default().fg(theme.text_dim)
        };
        let row = Rect::new(inner.x, y, inner.width, 1);
        f.render_widget(Paragraph::new(Line::from(Span::styled(format!("{}{}", marker, section.label()), style))), row);
        hits.push(row, Target::Section(*section));
    }
}

fn draw_help_popup(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 95 } else { 70 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(theme.accent_bright).add_modifier(Modifier::BOLD)))
    };
    let entry = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), Style::default().fg(theme.accent)),
            Span::styled(what, Style::default().fg(theme.text)),
        ])
    };

    let help_text = vec![
        heading("═══ Page ═══"),
        entry("Tab/S-Tab", "Next / previous section"),
        entry("n", "Scroll to the next section"),
        entry("↑/↓ j/k", "Scroll one line"),
        entry("PgUp/PgDn", "Scroll one screen"),
        entry("Home/End", "Top / bottom of the page"),
        entry("m", "Section menu (narrow terminals)"),
        entry("d", "Toggle dark mode"),
        Line::from(""),
        heading("═══ Projects ═══"),
        entry("←/→ [/]", "Previous / next page"),
        entry("c", "Select next card on the page"),
        entry("o", "Open the live demo"),
        entry("g", "Open the source repository"),
        Line::from(""),
        heading("═══ About ═══"),
        entry("t", "Switch Skills / hobby tab"),
        entry(",/.", "Previous / next photo"),
        entry("1-9", "Jump to photo"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Mouse: ", Style::default().fg(theme.text_dim)),
            Span::styled("click links, arrows, dots and sections", Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme.text_dim)),
            Span::styled("?", Style::default().fg(theme.accent)),
            Span::styled("/", Style::default().fg(theme.text_dim)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" to close, ", Style::default().fg(theme.text_dim)),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::styled(" to quit", Style::default().fg(theme.text_dim)),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" folio help ", Style::default().fg(theme.accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.bg_alt)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::Portfolio;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> (String, HitMap) {
        let backend = TestBackend::new(app.columns, app.rows);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        (screen, hits)
    }

    fn app(columns: u16, rows: u16) -> App {
        App::new(Portfolio::builtin(), AppConfig::default(), columns, rows)
    }

    #[test]
    fn test_home_renders_profile() {
        let app = app(160, 40);
        let (screen, hits) = render(&app);
        assert!(screen.contains("Full Stack Web Developer"));
        assert!(screen.contains("[ GitHub ]"));
        assert!(screen.contains("Projects"));
        assert!(hits.at(159 - 2, 1).is_some());
    }

    #[test]
    fn test_projects_page_shows_slice() {
        let mut app = app(160, 40);
        app.go_to(Section::Projects);
        let (screen, _) = render(&app);
        assert!(screen.contains("Chat Application"));
        assert!(screen.contains("Weather Dashboard"));
        assert!(!screen.contains("E-Commerce Platform"));
        assert!(screen.contains("1 of 2"));

        app.next_page();
        let (screen, _) = render(&app);
        assert!(screen.contains("E-Commerce Platform"));
        assert!(screen.contains("2 of 2"));
    }

    #[test]
    fn test_carousel_dots_are_clickable() {
        let mut app = app(160, 40);
        app.go_to(Section::About);
        app.toggle_about_tab();
        app.jump_to_photo(1);
        let (screen, hits) = render(&app);
        assert!(screen.contains("Photo 2 of 5"));
        assert!(screen.contains("photo2.jpg"));

        let dots = (0..app.rows)
            .flat_map(|y| (0..app.columns).map(move |x| (x, y)))
            .filter(|&(x, y)| matches!(hits.at(x, y), Some(Target::Photo(_))))
            .count();
        assert_eq!(dots, 5);
    }

    #[test]
    fn test_narrow_layout_shows_menu_toggle() {
        let mut app = app(50, 30);
        let (screen, hits) = render(&app);
        assert!(screen.contains("≡"));
        assert!(!screen.contains("About Me"));
        assert_eq!(hits.at(43, 1), Some(&Target::MenuToggle));

        app.toggle_menu();
        let (screen, _) = render(&app);
        assert!(screen.contains("About Me"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        for (w, h) in [(1, 1), (5, 3), (20, 4), (12, 10)] {
            let mut app = app(w, h);
            render(&app);
            app.scroll.scroll_to_bottom();
            app.popup = Popup::Help;
            render(&app);
        }
    }
}
