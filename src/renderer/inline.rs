//! Inline Presenter - Draws a column of elements where the cursor sits
//!
//! The first `draw` prints one line per element and remembers what it wrote.
//! Every later `draw` moves back up over the block and rewrites only the
//! lines whose element text changed, which keeps terminal I/O small while
//! scramble workers update their elements dozens of times per second.

use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::element::TextElement;

/// Draws animated elements in place, one line each.
pub struct InlinePresenter {
    elements: Vec<TextElement>,
    previous: Vec<Option<String>>,
    max_width: Option<u16>,
    drawn: bool,
}

impl InlinePresenter {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            previous: Vec::new(),
            max_width: None,
            drawn: false,
        }
    }

    /// Truncate lines to `width` display cells (with a trailing ellipsis).
    pub fn with_max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Add an element as the next line of the block.
    pub fn push(&mut self, element: &TextElement) {
        self.elements.push(element.clone());
        self.previous.push(None);
    }

    /// Number of lines the block occupies.
    pub fn line_count(&self) -> usize {
        self.elements.len()
    }

    /// Forget what was drawn; the next `draw` rewrites every line.
    pub fn invalidate(&mut self) {
        for slot in &mut self.previous {
            *slot = None;
        }
    }

    /// Draw the block, rewriting only changed lines.
    ///
    /// Returns whether anything was written besides cursor movement.
    pub fn draw(&mut self, out: &mut impl Write) -> io::Result<bool> {
        if self.elements.is_empty() {
            return Ok(false);
        }

        if !self.drawn {
            for (i, element) in self.elements.iter().enumerate() {
                let line = self.fit(&element.text());
                queue!(out, Print(&line), Print("\r\n"))?;
                self.previous[i] = Some(line);
            }
            self.drawn = true;
            out.flush()?;
            return Ok(true);
        }

        let mut changed = false;
        queue!(out, MoveToPreviousLine(self.elements.len() as u16))?;
        for (i, element) in self.elements.iter().enumerate() {
            let line = self.fit(&element.text());
            if self.previous[i].as_deref() != Some(line.as_str()) {
                queue!(
                    out,
                    MoveToColumn(0),
                    Clear(ClearType::UntilNewLine),
                    Print(&line)
                )?;
                self.previous[i] = Some(line);
                changed = true;
            }
            queue!(out, MoveToNextLine(1))?;
        }
        out.flush()?;
        Ok(changed)
    }

    fn fit(&self, text: &str) -> String {
        match self.max_width {
            Some(width) => truncate_to_width(text, width),
            None => text.to_string(),
        }
    }
}

impl Default for InlinePresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate `text` to at most `width` display cells, appending an ellipsis
/// when anything was cut.
pub fn truncate_to_width(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= width as usize {
        return text.to_string();
    }

    // Leave one cell for the ellipsis.
    let target = width.saturating_sub(1) as usize;
    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello", 4), "hel…");
        assert_eq!(truncate_to_width("", 5), "");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn test_truncate_counts_display_cells() {
        // Fullwidth characters occupy two cells each.
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
        assert_eq!(truncate_to_width("日本語", 5), "日本…");
    }

    #[test]
    fn test_first_draw_writes_all_lines() {
        let a = TextElement::new("alpha");
        let b = TextElement::new("beta");
        let mut presenter = InlinePresenter::new();
        presenter.push(&a);
        presenter.push(&b);

        let mut out = Vec::new();
        assert!(presenter.draw(&mut out).unwrap());

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("alpha"));
        assert!(written.contains("beta"));
        assert_eq!(presenter.line_count(), 2);
    }

    #[test]
    fn test_unchanged_frame_rewrites_nothing() {
        let el = TextElement::new("static");
        let mut presenter = InlinePresenter::new();
        presenter.push(&el);

        let mut out = Vec::new();
        presenter.draw(&mut out).unwrap();

        let mut out = Vec::new();
        assert!(!presenter.draw(&mut out).unwrap());
        assert!(!String::from_utf8_lossy(&out).contains("static"));
    }

    #[test]
    fn test_changed_line_is_redrawn() {
        let el = TextElement::new("before");
        let mut presenter = InlinePresenter::new();
        presenter.push(&el);

        let mut out = Vec::new();
        presenter.draw(&mut out).unwrap();

        el.set_text("after");
        let mut out = Vec::new();
        assert!(presenter.draw(&mut out).unwrap());
        assert!(String::from_utf8_lossy(&out).contains("after"));
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let el = TextElement::new("text");
        let mut presenter = InlinePresenter::new();
        presenter.push(&el);

        let mut out = Vec::new();
        presenter.draw(&mut out).unwrap();

        presenter.invalidate();
        let mut out = Vec::new();
        assert!(presenter.draw(&mut out).unwrap());
        assert!(String::from_utf8_lossy(&out).contains("text"));
    }

    #[test]
    fn test_empty_presenter_draws_nothing() {
        let mut presenter = InlinePresenter::new();
        let mut out = Vec::new();
        assert!(!presenter.draw(&mut out).unwrap());
        assert!(out.is_empty());
    }
}
