//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`], a string buffer that knows the theme,
//! the terminal width, and whether ANSI styling is wanted. Frames are built
//! line by line and written to the terminal in one go by the binary, which
//! keeps rendering testable.
//!
//! All widths and highlight ranges are in characters, not bytes.

use crate::ui::theme::Theme;

/// Line-oriented frame buffer.
#[derive(Debug)]
pub struct Canvas<'a> {
    out: String,
    theme: &'a Theme,
    cols: usize,
    color: bool,
    lines: usize,
}

impl<'a> Canvas<'a> {
    /// Creates an empty canvas. With `color == false` every style call is a no-op.
    #[must_use]
    pub fn new(theme: &'a Theme, cols: usize, color: bool) -> Self {
        Self {
            out: String::new(),
            theme,
            cols,
            color,
            lines: 0,
        }
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Terminal width in columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Lines finished so far.
    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Sets the foreground color.
    pub fn fg(&mut self, hex: &str) -> &mut Self {
        if self.color {
            self.out.push_str(&Theme::fg(hex));
        }
        self
    }

    /// Sets the background color.
    pub fn bg(&mut self, hex: &str) -> &mut Self {
        if self.color {
            self.out.push_str(&Theme::bg(hex));
        }
        self
    }

    pub fn bold(&mut self) -> &mut Self {
        if self.color {
            self.out.push_str(Theme::bold());
        }
        self
    }

    pub fn dim(&mut self) -> &mut Self {
        if self.color {
            self.out.push_str(Theme::dim());
        }
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        if self.color {
            self.out.push_str(Theme::reset());
        }
        self
    }

    /// Appends unstyled text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    /// Appends `n` spaces.
    pub fn pad(&mut self, n: usize) -> &mut Self {
        self.out.extend(std::iter::repeat(' ').take(n));
        self
    }

    /// Ends the current line, resetting styles first.
    pub fn newline(&mut self) -> &mut Self {
        self.reset();
        self.out.push('\n');
        self.lines += 1;
        self
    }

    /// Writes `text` centered on its own line.
    pub fn centered(&mut self, text: &str) -> &mut Self {
        let text = truncate(text, self.cols);
        let len = text.chars().count();
        let left = self.cols.saturating_sub(len) / 2;
        let right = self.cols.saturating_sub(left + len);
        self.pad(left).text(&text).pad(right);
        self.newline()
    }

    /// Draws a horizontal rule in `color`.
    pub fn rule(&mut self, color: &str) -> &mut Self {
        let line = "─".repeat(self.cols);
        self.fg(color).text(&line);
        self.newline()
    }

    /// Writes `text` with the character `ranges` highlighted.
    ///
    /// On a selected row the highlight is skipped so the selection colors stay
    /// intact.
    pub fn highlighted(&mut self, text: &str, ranges: &[(usize, usize)], is_selected: bool) -> &mut Self {
        if ranges.is_empty() || is_selected || !self.color {
            return self.text(text);
        }

        let chars: Vec<char> = text.chars().collect();
        let mut pos = 0;
        for &(start, end) in ranges {
            let start = start.min(chars.len());
            let end = end.min(chars.len());
            if start < pos || start >= end {
                continue;
            }
            let before: String = chars[pos..start].iter().collect();
            let matched: String = chars[start..end].iter().collect();
            let colors = &self.theme.colors;
            let (fg, bg, normal) = (
                colors.match_highlight_fg.clone(),
                colors.match_highlight_bg.clone(),
                colors.text_normal.clone(),
            );
            self.text(&before).fg(&fg).bg(&bg).text(&matched).reset().fg(&normal);
            pos = end;
        }
        let rest: String = chars[pos..].iter().collect();
        self.text(&rest)
    }

    /// Consumes the canvas, returning the frame.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// # Examples
///
/// ```
/// use spacex_explorer::ui::helpers::truncate;
///
/// assert_eq!(truncate("Starlink-15 (v1.0)", 10), "Starlin...");
/// assert_eq!(truncate("CRS-20", 10), "CRS-20");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Character ranges where `needle` occurs in `text`, ignoring case.
///
/// Matches are non-overlapping and scanned left to right. An empty needle
/// matches nothing.
///
/// # Examples
///
/// ```
/// use spacex_explorer::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Starlink-5 Starlink", "STAR"), vec![(0, 4), (11, 15)]);
/// assert!(match_ranges("CRS-20", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let hay: Vec<char> = text.chars().collect();
    let pat: Vec<char> = needle.chars().collect();
    if pat.is_empty() || pat.len() > hay.len() {
        return vec![];
    }

    let same = |a: char, b: char| a == b || a.to_lowercase().eq(b.to_lowercase());

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + pat.len() <= hay.len() {
        if hay[i..i + pat.len()].iter().zip(&pat).all(|(&a, &b)| same(a, b)) {
            ranges.push((i, i + pat.len()));
            i += pat.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Greedy word wrap to `width` characters per line.
///
/// Words longer than a line are hard-split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }
        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_canvas_has_no_escapes() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme, 10, false);
        canvas.bold().fg("#ffffff").text("hi").newline();
        canvas.centered("mid");

        assert_eq!(canvas.lines(), 2);
        assert_eq!(canvas.finish(), "hi\n   mid    \n");
    }

    #[test]
    fn rule_spans_the_width() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme, 6, false);
        canvas.rule("#45475a").centered("too long for six");

        assert_eq!(canvas.finish(), "──────\ntoo...\n");
    }

    #[test]
    fn highlight_wraps_matches_in_color() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme, 40, true);
        canvas.highlighted("Starlink", &[(0, 4)], false);
        let out = canvas.finish();

        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
        assert!(out.ends_with("link"));
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Ünïcödé launch", 7), "Ünïc...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap("Engine failure at 33 seconds and loss of vehicle", 16);
        assert_eq!(lines, vec!["Engine failure", "at 33 seconds", "and loss of", "vehicle"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap("   ", 10).is_empty());
    }
}
