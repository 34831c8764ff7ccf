//! Bar geometry and the text renderer.
//!
//! [`Layout`] is the classic 800x500 window geometry:
//! element `i` with value `v` out of `n` becomes a rectangle of height
//! `v / n * height`, standing on the bottom edge, `width / n` wide with
//! `padding` pixels between neighbours. [`TextRenderer`] uses the same
//! layout with one column per element and one pixel per text row.

use std::io::{self, Write};

use sortviz_core::StepEffect;

/// An axis-aligned rectangle in layout units, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Drawing surface dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Layout {
    /// The classic window: 800x500 with one pixel of padding.
    #[cfg(test)]
    pub const WINDOW: Self = Self {
        width: 800,
        height: 500,
        padding: 1,
    };

    /// One bar per value in `values`, scaled against `max`.
    ///
    /// Heights are truncated toward zero, as are bar widths, so a surface
    /// narrower than the element count yields zero-width bars.
    pub fn bars(&self, values: &[u32], max: u32) -> Vec<Bar> {
        if values.is_empty() || max == 0 {
            return Vec::new();
        }
        let n = values.len() as u64;
        let bar_w = (u64::from(self.width) / n) as u32;
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let h = (u64::from(v.min(max)) * u64::from(self.height) / u64::from(max)) as u32;
                Bar {
                    x: self.padding / 2 + i as u32 * bar_w,
                    y: self.height - h,
                    w: bar_w.saturating_sub(self.padding),
                    h,
                }
            })
            .collect()
    }
}

/// Draws a snapshot as rows of block characters.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    rows: u32,
}

impl TextRenderer {
    const FILL: char = '#';
    const HIGHLIGHT: char = '@';
    const EMPTY: char = ' ';

    pub fn new(rows: usize) -> Self {
        Self {
            rows: u32::try_from(rows.max(1)).unwrap_or(u32::MAX),
        }
    }

    /// Render `values` (a permutation of `1..=max`) into lines of text.
    ///
    /// The element written by `effect`, if any, is drawn with a distinct
    /// character.
    pub fn lines(&self, values: &[u32], effect: Option<StepEffect>) -> Vec<String> {
        let max = values.iter().copied().max().unwrap_or(0);
        let layout = Layout {
            width: values.len() as u32,
            height: self.rows,
            padding: 0,
        };
        let bars = layout.bars(values, max);
        let hot = effect.and_then(|e| e.written_index());
        (0..self.rows)
            .map(|row| {
                bars.iter()
                    .enumerate()
                    .map(|(i, bar)| {
                        if row < bar.y {
                            Self::EMPTY
                        } else if hot == Some(i) {
                            Self::HIGHLIGHT
                        } else {
                            Self::FILL
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Write one frame, homing the cursor first so frames overdraw.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        values: &[u32],
        effect: Option<StepEffect>,
        status: &str,
    ) -> io::Result<()> {
        write!(out, "\x1b[H\x1b[2J")?;
        for line in self.lines(values, effect) {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{status}")?;
        out.flush()
    }
}
