//! The scrolling portfolio page.
//!
//! Sections append styled lines to a [`Page`] laid out for the content
//! width. Rendering copies the visible window into the frame buffer and
//! reports where the clickable parts ended up on screen.

use std::collections::{HashMap, HashSet};

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line};

use folio_config::constants::{INITIAL_SHOW_COUNT, MAX_CONTENT_WIDTH};
use folio_portfolio::PortfolioData;
use folio_widgets::PlaybackState;

use crate::sections;
use crate::styles::Styles;

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Skills,
    Github,
    Spotify,
    Experience,
    Education,
    Projects,
    Blog,
    Achievements,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 10] = [
        SectionId::Hero,
        SectionId::Skills,
        SectionId::Github,
        SectionId::Spotify,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Blog,
        SectionId::Achievements,
        SectionId::Footer,
    ];

    /// Lists that start collapsed to [`INITIAL_SHOW_COUNT`] items.
    pub fn has_show_more(self) -> bool {
        matches!(
            self,
            SectionId::Experience | SectionId::Education | SectionId::Blog
        )
    }

    /// Lists whose entries open one at a time.
    pub fn has_expandable_entries(self) -> bool {
        matches!(self, SectionId::Experience | SectionId::Education)
    }

    /// Sections with a header that keyboard focus can land on.
    pub fn is_focusable(self) -> bool {
        !matches!(self, SectionId::Hero | SectionId::Footer)
    }
}

/// What a click on a region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    ModeToggle,
    Settings,
    ShowMore(SectionId),
    Expand(SectionId, usize),
}

/// Clickable region in page coordinates (row, column relative to the
/// content column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub row: usize,
    pub x: u16,
    pub width: u16,
    pub target: HitTarget,
}

/// Clickable region on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenHit {
    pub area: Rect,
    pub target: HitTarget,
}

impl ScreenHit {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }

    /// Center cell of the region.
    pub fn center(&self) -> (u16, u16) {
        (
            self.area.x + self.area.width / 2,
            self.area.y + self.area.height / 2,
        )
    }
}

/// Laid-out page content.
#[derive(Debug, Default)]
pub struct Page {
    width: u16,
    lines: Vec<Line<'static>>,
    hits: Vec<Hit>,
    anchors: Vec<(SectionId, usize)>,
}

impl Page {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Sections that made it onto the page, in order.
    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.anchors.iter().map(|(id, _)| *id)
    }

    /// First row of `id`, if it is on the page.
    pub fn section_row(&self, id: SectionId) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, row)| *row)
    }

    pub fn max_scroll(&self, viewport_height: u16) -> usize {
        self.height().saturating_sub(viewport_height as usize)
    }

    pub(crate) fn begin_section(&mut self, id: SectionId) {
        self.anchors.push((id, self.lines.len()));
    }

    pub(crate) fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub(crate) fn push_blank(&mut self, style: Style) {
        self.lines.push(Line::default().style(style));
    }

    /// Mark a region on the most recently pushed line.
    pub(crate) fn hit(&mut self, x: u16, width: u16, target: HitTarget) {
        let row = self.lines.len().saturating_sub(1);
        self.hits.push(Hit {
            row,
            x,
            width,
            target,
        });
    }

    /// Draw rows `scroll..` into `area`, centering the content column.
    ///
    /// Returns the clickable regions that are visible.
    pub fn render(&self, area: Rect, buf: &mut Buffer, scroll: usize, fill: Style) -> Vec<ScreenHit> {
        buf.set_style(area, fill);
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let width = self.width.min(area.width);
        let left = area.x + (area.width - width) / 2;

        for (offset, line) in self
            .lines
            .iter()
            .skip(scroll)
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + offset as u16;
            buf.set_style(Rect::new(left, y, width, 1), line.style);
            buf.set_line(left, y, line, width);
        }

        let visible = scroll..scroll + area.height as usize;
        self.hits
            .iter()
            .filter(|hit| visible.contains(&hit.row) && hit.x < width)
            .map(|hit| ScreenHit {
                area: Rect::new(
                    left + hit.x,
                    area.y + (hit.row - scroll) as u16,
                    hit.width.min(width - hit.x),
                    1,
                ),
                target: hit.target,
            })
            .collect()
    }
}

/// Interaction state of the page that survives rebuilding it.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub scroll: usize,
    pub focus: Option<SectionId>,
    pub role_index: usize,
    pub marquee_offset: usize,
    pub quote_index: usize,
    show_all: HashSet<SectionId>,
    expanded: HashMap<SectionId, usize>,
}

impl PageState {
    pub fn new(quote_index: usize) -> Self {
        Self {
            quote_index,
            ..Self::default()
        }
    }

    pub fn is_showing_all(&self, id: SectionId) -> bool {
        self.show_all.contains(&id)
    }

    /// Flip "show more" for `id`. Returns `false` for sections without it.
    pub fn toggle_show_all(&mut self, id: SectionId) -> bool {
        if !id.has_show_more() {
            return false;
        }
        if !self.show_all.remove(&id) {
            self.show_all.insert(id);
        }
        // a hidden entry can not stay open
        if let Some(&open) = self.expanded.get(&id) {
            if open >= INITIAL_SHOW_COUNT && !self.is_showing_all(id) {
                self.expanded.remove(&id);
            }
        }
        true
    }

    /// How many of `total` entries of `id` are listed.
    pub fn visible_count(&self, id: SectionId, total: usize) -> usize {
        if id.has_show_more() && !self.is_showing_all(id) {
            total.min(INITIAL_SHOW_COUNT)
        } else {
            total
        }
    }

    pub fn expanded(&self, id: SectionId) -> Option<usize> {
        self.expanded.get(&id).copied()
    }

    /// Open entry `index` of `id`, closing any other; opening it again closes it.
    pub fn toggle_expanded(&mut self, id: SectionId, index: usize) -> bool {
        if !id.has_expandable_entries() {
            return false;
        }
        if self.expanded.get(&id) == Some(&index) {
            self.expanded.remove(&id);
        } else {
            self.expanded.insert(id, index);
        }
        true
    }

    /// Open the entry after the current one in the focused section, wrapping
    /// back to none after the last visible entry.
    pub fn expand_next(&mut self, id: SectionId, visible: usize) -> bool {
        if !id.has_expandable_entries() || visible == 0 {
            return false;
        }
        match self.expanded(id) {
            Some(i) if i + 1 >= visible => {
                self.expanded.remove(&id);
            }
            Some(i) => {
                self.expanded.insert(id, i + 1);
            }
            None => {
                self.expanded.insert(id, 0);
            }
        }
        true
    }

    /// Move focus to the next section in `available`, wrapping.
    pub fn focus_next(&mut self, available: &[SectionId]) {
        if available.is_empty() {
            self.focus = None;
            return;
        }
        let next = match self.focus.and_then(|f| available.iter().position(|s| *s == f)) {
            Some(i) => (i + 1) % available.len(),
            None => 0,
        };
        self.focus = Some(available[next]);
    }

    pub fn scroll_by(&mut self, delta: isize, max_scroll: usize) {
        let next = self.scroll as isize + delta;
        self.scroll = next.clamp(0, max_scroll as isize) as usize;
    }

    pub fn clamp_scroll(&mut self, max_scroll: usize) {
        self.scroll = self.scroll.min(max_scroll);
    }

    pub fn advance_role(&mut self, role_count: usize) {
        if role_count > 0 {
            self.role_index = (self.role_index + 1) % role_count;
        }
    }

    pub fn advance_marquee(&mut self, step: usize) {
        self.marquee_offset = self.marquee_offset.wrapping_add(step);
    }
}

/// Everything a section needs to lay itself out.
pub struct PageContext<'a> {
    pub styles: &'a Styles,
    pub data: &'a PortfolioData,
    pub github_user: Option<&'a str>,
    pub playback: Option<&'a PlaybackState>,
    pub show_settings_button: bool,
}

/// Content column width for a terminal `width`.
pub fn content_width(width: u16) -> u16 {
    width.min(MAX_CONTENT_WIDTH)
}

/// Lay out every section for a viewport `width` columns wide.
pub fn build_page(ctx: &PageContext<'_>, state: &PageState, width: u16) -> Page {
    let mut page = Page::new(content_width(width));
    for id in SectionId::ALL {
        sections::render_section(id, ctx, state, &mut page);
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn sample_page() -> Page {
        let mut page = Page::new(20);
        page.begin_section(SectionId::Hero);
        for i in 0..10 {
            page.push(Line::from(format!("row {}", i)));
        }
        page.hit(2, 5, HitTarget::ModeToggle);
        page.begin_section(SectionId::Footer);
        page.push(Line::from("end"));
        page
    }

    #[test]
    fn test_page_geometry() {
        let page = sample_page();
        assert_eq!(page.height(), 11);
        assert_eq!(page.max_scroll(4), 7);
        assert_eq!(page.section_row(SectionId::Footer), Some(10));
        assert_eq!(page.section_row(SectionId::Blog), None);
    }

    #[test]
    fn test_render_scrolls_and_maps_hits() {
        let page = sample_page();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        let hits = page.render(area, &mut buf, 7, Style::default().bg(Color::Black));

        // content column is centered: (30 - 20) / 2 = 5
        assert_eq!(buf[(5, 0)].symbol(), "r");
        assert_eq!(buf[(9, 0)].symbol(), "7");
        assert_eq!(buf[(5, 3)].symbol(), "e");
        assert_eq!(buf[(0, 0)].bg, Color::Black);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].area, Rect::new(7, 2, 5, 1));
        assert!(hits[0].contains(8, 2));
        assert!(!hits[0].contains(12, 2));
    }

    #[test]
    fn test_hits_outside_window_are_dropped() {
        let page = sample_page();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        assert!(page.render(area, &mut buf, 0, Style::default()).is_empty());
    }

    #[test]
    fn test_show_more_caps_lists() {
        let mut state = PageState::default();
        assert_eq!(state.visible_count(SectionId::Experience, 7), INITIAL_SHOW_COUNT);
        assert_eq!(state.visible_count(SectionId::Experience, 2), 2);
        assert_eq!(state.visible_count(SectionId::Projects, 7), 7);

        assert!(state.toggle_show_all(SectionId::Experience));
        assert_eq!(state.visible_count(SectionId::Experience, 7), 7);
        assert!(!state.toggle_show_all(SectionId::Projects));
    }

    #[test]
    fn test_one_entry_open_at_a_time() {
        let mut state = PageState::default();
        state.toggle_expanded(SectionId::Education, 1);
        state.toggle_expanded(SectionId::Education, 2);
        assert_eq!(state.expanded(SectionId::Education), Some(2));

        state.toggle_expanded(SectionId::Education, 2);
        assert_eq!(state.expanded(SectionId::Education), None);
        assert!(!state.toggle_expanded(SectionId::Blog, 0));
    }

    #[test]
    fn test_collapsing_closes_hidden_entry() {
        let mut state = PageState::default();
        state.toggle_show_all(SectionId::Experience);
        state.toggle_expanded(SectionId::Experience, INITIAL_SHOW_COUNT + 1);
        state.toggle_show_all(SectionId::Experience);
        assert_eq!(state.expanded(SectionId::Experience), None);
    }

    #[test]
    fn test_expand_next_wraps() {
        let mut state = PageState::default();
        state.expand_next(SectionId::Experience, 2);
        assert_eq!(state.expanded(SectionId::Experience), Some(0));
        state.expand_next(SectionId::Experience, 2);
        assert_eq!(state.expanded(SectionId::Experience), Some(1));
        state.expand_next(SectionId::Experience, 2);
        assert_eq!(state.expanded(SectionId::Experience), None);
    }

    #[test]
    fn test_focus_and_scroll() {
        let mut state = PageState::default();
        let available = [SectionId::Hero, SectionId::Blog];
        state.focus_next(&available);
        assert_eq!(state.focus, Some(SectionId::Hero));
        state.focus_next(&available);
        state.focus_next(&available);
        assert_eq!(state.focus, Some(SectionId::Hero));

        state.scroll_by(-3, 10);
        assert_eq!(state.scroll, 0);
        state.scroll_by(25, 10);
        assert_eq!(state.scroll, 10);
    }
}
