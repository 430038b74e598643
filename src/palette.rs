use crate::cell::{CellState, N_STATES};

/// A color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffffff);
    pub const GREEN: Color = Color(0xff00ff00);
    pub const RED: Color = Color(0xffff0000);
    pub const GREY: Color = Color(0xff808080);
    pub const CYAN: Color = Color(0xff00ffff);
    pub const LIGHT_CYAN: Color = Color(0xffe0ffff);
    pub const YELLOW: Color = Color(0xffffff00);

    pub fn argb(self) -> u32 {
        self.0
    }
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }
    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// Maps cell states to the colors they are drawn with. Cells know nothing about colors;
/// the draw step looks them up here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; N_STATES],
    pub grid_lines: Color,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            colors: [
                Color::WHITE,
                Color::GREEN,
                Color::RED,
                Color::GREY,
                Color::CYAN,
                Color::LIGHT_CYAN,
                Color::YELLOW,
            ],
            grid_lines: Color(0xaad3d3d3),
        }
    }
}

impl Palette {
    pub fn color(&self, state: CellState) -> Color {
        self.colors[state as usize]
    }
    pub fn set(&mut self, state: CellState, color: Color) {
        self.colors[state as usize] = color;
    }
}
