//! Colour palettes for the board and HUD.

use ratatui::style::Color;

/// One Dark block and UI colours, with alternate palettes for
/// accessibility.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Block colours for symbol codes 1.. (index 0..=5): green, yellow,
    /// red, blue, magenta, cyan.
    pub blocks: [Color; 6],
    /// Playfield background.
    pub bg: Color,
    /// Grid / border.
    pub div_line: Color,
    /// Text (score, multiplier).
    pub main_fg: Color,
    /// Highlight / titles.
    pub title: Color,
    /// Swap cursor outline.
    pub cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::onedark()
    }
}

impl Theme {
    /// Hardcoded One Dark defaults.
    pub fn onedark() -> Self {
        Self {
            blocks: [
                Color::Rgb(0x98, 0xC3, 0x79), // green
                Color::Rgb(0xE5, 0xC0, 0x7B), // yellow
                Color::Rgb(0xE0, 0x6C, 0x75), // red
                Color::Rgb(0x61, 0xAF, 0xEF), // blue
                Color::Rgb(0xC6, 0x78, 0xDD), // magenta
                Color::Rgb(0x56, 0xB6, 0xC2), // cyan
            ],
            bg: Color::Rgb(0x31, 0x35, 0x3F),
            div_line: Color::Rgb(0x3F, 0x44, 0x4F),
            main_fg: Color::Rgb(0xAB, 0xB2, 0xBF),
            title: Color::Rgb(0xE5, 0xC0, 0x7B),
            cursor: Color::Rgb(0xE5, 0xC0, 0x7B),
        }
    }

    pub fn for_palette(palette: crate::Palette) -> Self {
        let mut theme = Self::onedark();
        theme.apply_palette(palette);
        theme
    }

    /// Override block colours for high-contrast or colorblind use.
    pub fn apply_palette(&mut self, palette: crate::Palette) {
        match palette {
            crate::Palette::Normal => {}
            crate::Palette::HighContrast => {
                // Distinct saturated colours on dark bg.
                self.blocks = [
                    Color::Rgb(0x00, 0xFF, 0x00),
                    Color::Rgb(0xFF, 0xFF, 0x00),
                    Color::Rgb(0xFF, 0x00, 0x00),
                    Color::Rgb(0x00, 0x88, 0xFF),
                    Color::Rgb(0xFF, 0x00, 0xFF),
                    Color::Rgb(0x00, 0xFF, 0xFF),
                ];
            }
            crate::Palette::Colorblind => {
                // Avoid red/green alone.
                self.blocks = [
                    Color::Rgb(0x00, 0x77, 0xBB), // blue
                    Color::Rgb(0xEE, 0x77, 0x33), // orange
                    Color::Rgb(0x00, 0x99, 0x88), // teal
                    Color::Rgb(0xCC, 0x33, 0x11), // red
                    Color::Rgb(0xEE, 0x33, 0x77), // magenta
                    Color::Rgb(0xBB, 0xBB, 0x00), // yellow
                ];
            }
        }
    }

    /// Colour for a non-empty symbol code (1..).
    #[inline]
    pub fn block_color(&self, code: u8) -> Color {
        debug_assert!(code != 0);
        self.blocks[(code as usize - 1) % 6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_colors_cycle_from_code_one() {
        let theme = Theme::default();
        assert_eq!(theme.block_color(1), theme.blocks[0]);
        assert_eq!(theme.block_color(6), theme.blocks[5]);
        assert_eq!(theme.block_color(7), theme.blocks[0]);
    }

    #[test]
    fn palettes_change_block_colors_only() {
        let normal = Theme::for_palette(crate::Palette::Normal);
        let high = Theme::for_palette(crate::Palette::HighContrast);
        assert_ne!(normal.blocks, high.blocks);
        assert_eq!(normal.bg, high.bg);
        assert_eq!(normal.main_fg, high.main_fg);
    }
}
