//! Reusable UI component helpers
//!
//! Buttons, tag chips, carousel indicators and headings shared by the page
//! sections. Anything clickable registers itself in the frame's `HitMap`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::{HitMap, Target};
use crate::content::TechCategory;
use crate::theme::Theme;

/// A clickable `[ label ]` button
pub struct Button {
    pub label: String,
    pub target: Target,
    pub primary: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, target: Target) -> Self {
        Self {
            label: label.into(),
            target,
            primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    fn span(&self, theme: &Theme) -> Span<'static> {
        let style = if self.primary {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent)
        };
        Span::styled(format!("[ {} ]", self.label), style)
    }
}

/// Lay buttons out left to right on one row, wrapping is not attempted:
/// buttons that do not fit are dropped.
pub fn button_row(
    buf: &mut Buffer,
    area: Rect,
    buttons: Vec<Button>,
    theme: &Theme,
    hits: &mut HitMap,
    centered: bool,
) {
    if area.height == 0 {
        return;
    }

    let spans: Vec<(Span, Target)> = buttons
        .into_iter()
        .map(|b| (b.span(theme), b.target))
        .collect();

    let gap = 2u16;
    let mut fitted = Vec::new();
    let mut total = 0u16;
    for (span, target) in spans {
        let width = span.width() as u16;
        let needed = if fitted.is_empty() { width } else { width + gap };
        if total + needed > area.width {
            break;
        }
        total += needed;
        fitted.push((span, target, width));
    }

    let mut x = if centered {
        area.x + (area.width - total) / 2
    } else {
        area.x
    };
    for (span, target, width) in fitted {
        buf.set_span(x, area.y, &span, width);
        hits.push(Rect::new(x, area.y, width, 1), target);
        x += width + gap;
    }
}

/// Technology chips coloured by category
pub fn tech_tags<'a>(technologies: &'a [String], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(technologies.len() * 2);
    for tech in technologies {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let color = theme.tech(TechCategory::classify(tech));
        spans.push(Span::styled(format!("‹{}›", tech), Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Plain skill chips in a single colour
pub fn skill_tags<'a>(skills: &'a [String], color: ratatui::style::Color) -> Line<'a> {
    let mut spans = Vec::with_capacity(skills.len() * 2);
    for skill in skills {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("‹{}›", skill), Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Row of carousel dots, the active one filled. Each dot jumps to its photo.
pub fn indicator_dots(
    buf: &mut Buffer,
    area: Rect,
    count: usize,
    active: usize,
    theme: &Theme,
    hits: &mut HitMap,
) {
    if count == 0 || area.height == 0 {
        return;
    }

    // "● " per dot, last one without the trailing space
    let width = count.saturating_mul(2) - 1;
    if width > usize::from(area.width) {
        let label = format!("{}/{}", active + 1, count);
        let line = Line::from(Span::styled(label, Style::default().fg(theme.text_dim)));
        Paragraph::new(line).alignment(Alignment::Center).render(area, buf);
        return;
    }

    let mut x = area.x + (area.width - width as u16) / 2;
    for index in 0..count {
        let (symbol, style) = if index == active {
            ("●", Style::default().fg(theme.accent))
        } else {
            ("○", Style::default().fg(theme.inactive))
        };
        buf.set_string(x, area.y, symbol, style);
        hits.push(Rect::new(x, area.y, 1, 1), Target::Photo(index));
        x += 2;
    }
}

/// Two-tone bold heading, standing in for the gradient text on the web page
pub fn gradient_title<'a>(text: &'a str, theme: &Theme) -> Line<'a> {
    let split = text
        .char_indices()
        .nth(text.chars().count() / 2)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (head, tail) = text.split_at(split);
    Line::from(vec![
        Span::styled(head, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(tail, Style::default().fg(theme.accent_bright).add_modifier(Modifier::BOLD)),
    ])
}

/// Centered section heading with a short divider below. Uses two rows.
pub fn section_heading(buf: &mut Buffer, area: Rect, title: &str, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    Paragraph::new(gradient_title(title, theme))
        .alignment(Alignment::Center)
        .render(Rect { height: 1, ..area }, buf);

    if area.height > 1 {
        let divider = Line::from(Span::styled("────────", Style::default().fg(theme.accent)));
        Paragraph::new(divider)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    }
}

/// Wrapped paragraphs separated by blank lines
pub fn prose<'a>(paragraphs: &'a [String], theme: &Theme) -> Paragraph<'a> {
    let mut lines = Vec::new();
    for (i, text) in paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(text.as_str(), Style::default().fg(theme.text_dim))));
    }
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Thin bar showing how far down the page the viewport is
pub fn progress_bar(buf: &mut Buffer, area: Rect, progress: f64, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let filled = ((f64::from(area.width) * progress.clamp(0.0, 1.0)).round()) as u16;
    for x in 0..area.width {
        let style = if x < filled {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.inactive)
        };
        buf.set_string(area.x + x, area.y, "━", style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_button_row_registers_hits() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();

        button_row(
            &mut buf,
            area,
            vec![
                Button::new("GitHub", Target::NextPage),
                Button::new("Resume", Target::PreviousPage).primary(),
                Button::new("Way too long to fit here", Target::NextPhoto),
            ],
            &theme,
            &mut hits,
            false,
        );

        assert!(row(&buf, 0).starts_with("[ GitHub ]  [ Resume ]"));
        assert_eq!(hits.at(3, 0), Some(&Target::NextPage));
        assert_eq!(hits.at(13, 0), Some(&Target::PreviousPage));
        assert_eq!(hits.at(25, 0), None);
    }

    #[test]
    fn test_indicator_dots() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 9, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();

        indicator_dots(&mut buf, area, 5, 2, &theme, &mut hits);
        assert_eq!(row(&buf, 0), "○ ○ ● ○ ○");
        assert_eq!(hits.at(4, 0), Some(&Target::Photo(2)));
        assert_eq!(hits.at(8, 0), Some(&Target::Photo(4)));
        assert_eq!(hits.at(1, 0), None);
    }

    #[test]
    fn test_indicator_dots_fall_back_to_counter() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();

        indicator_dots(&mut buf, area, 5, 0, &theme, &mut hits);
        assert_eq!(row(&buf, 0), " 1/5 ");
        assert_eq!(hits.at(2, 0), None);
    }

    #[test]
    fn test_indicator_dots_huge_count_uses_counter() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();

        indicator_dots(&mut buf, area, 32_769, 0, &theme, &mut hits);
        assert!(row(&buf, 0).contains("1/32769"));
        assert_eq!(hits.at(20, 0), None);
    }

    #[test]
    fn test_progress_bar_fill() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        progress_bar(&mut buf, area, 0.5, &theme);
        assert_eq!(buf[(4, 0)].fg, theme.accent);
        assert_eq!(buf[(5, 0)].fg, theme.inactive);
    }

    #[test]
    fn test_gradient_title_splits_on_chars() {
        let theme = Theme::light();
        let line = gradient_title("Café", &theme);
        assert_eq!(line.spans[0].content, "Ca");
        assert_eq!(line.spans[1].content, "fé");
    }
}
