// Procedural textures. Grid and wall pattern are rasterised here; text needs a
// 2D canvas and is produced by the web layer from the same key.

/// Generation parameters; equal keys yield identical pixels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Grid {
        size: u32,
        divisions: u32,
    },
    WallPattern,
    Text {
        text: String,
        font_px: u32,
        color: String,
        width: u32,
        height: u32,
    },
}

impl TextureKey {
    pub fn text(text: &str, font_px: u32, color: &str) -> Self {
        TextureKey::Text {
            text: text.to_string(),
            font_px,
            color: color.to_string(),
            width: TEXT_CANVAS_WIDTH,
            height: TEXT_CANVAS_HEIGHT,
        }
    }

    /// Tiling textures sample with a repeating address mode.
    pub fn repeats(&self) -> bool {
        !matches!(self, TextureKey::Text { .. })
    }
}

pub const TEXT_CANVAS_WIDTH: u32 = 512;
pub const TEXT_CANVAS_HEIGHT: u32 = 128;
pub const GRID_SIZE: u32 = 512;
pub const GRID_DIVISIONS: u32 = 16;
pub const GRID_BACKGROUND: &str = "#f5f3ef";
pub const GRID_LINE: &str = "#d7d2cb";
pub const PATTERN_TILE: u32 = 120;
pub const PATTERN_BACKGROUND: &str = "#f3f0eb";
pub const PATTERN_FRAME: &str = "#d8d3cd";
pub const PATTERN_CROSS: &str = "#e4e0da";

#[derive(Clone, Debug, PartialEq)]
pub struct TexturePixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>, // tightly packed, row-major, sRGB
}

impl TexturePixels {
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            rgba.extend_from_slice(&[color[0], color[1], color[2], 255]);
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }

    fn set(&mut self, x: u32, y: u32, color: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.rgba[i..i + 4].copy_from_slice(&[color[0], color[1], color[2], 255]);
    }

    fn hline(&mut self, y: u32, thickness: u32, color: [u8; 3]) {
        for yy in y..y + thickness {
            for x in 0..self.width {
                self.set(x, yy, color);
            }
        }
    }

    fn vline(&mut self, x: u32, thickness: u32, color: [u8; 3]) {
        for xx in x..x + thickness {
            for y in 0..self.height {
                self.set(xx, y, color);
            }
        }
    }

    fn rect_outline(&mut self, from: u32, to: u32, thickness: u32, color: [u8; 3]) {
        for t in 0..thickness {
            for i in from..=to {
                self.set(i, from + t, color);
                self.set(i, to - t, color);
                self.set(from + t, i, color);
                self.set(to - t, i, color);
            }
        }
    }
}

/// Floor grid: light field with a 2 px line every `size / divisions` px.
pub fn grid_pixels(size: u32, divisions: u32) -> TexturePixels {
    let bg = parse_hex_rgb(GRID_BACKGROUND).unwrap_or([245, 243, 239]);
    let line = parse_hex_rgb(GRID_LINE).unwrap_or([215, 210, 203]);
    let mut px = TexturePixels::filled(size, size, bg);
    let step = (size / divisions.max(1)).max(1);
    let mut at = 0;
    while at <= size {
        px.hline(at.saturating_sub(1), 2, line);
        px.vline(at.saturating_sub(1), 2, line);
        at += step;
    }
    px
}

/// Wall tile: framed square with a faint centre cross.
pub fn wall_pattern_pixels() -> TexturePixels {
    let bg = parse_hex_rgb(PATTERN_BACKGROUND).unwrap_or([243, 240, 235]);
    let frame = parse_hex_rgb(PATTERN_FRAME).unwrap_or([216, 211, 205]);
    let cross = parse_hex_rgb(PATTERN_CROSS).unwrap_or([228, 224, 218]);
    let n = PATTERN_TILE;
    let mut px = TexturePixels::filled(n, n, bg);
    px.hline(n / 2, 1, cross);
    px.vline(n / 2, 1, cross);
    px.rect_outline(10, n - 10, 2, frame);
    px
}

/// Rasterises keys that need no browser; text keys return `None`.
pub fn procedural_pixels(key: &TextureKey) -> Option<TexturePixels> {
    match key {
        TextureKey::Grid { size, divisions } => Some(grid_pixels(*size, *divisions)),
        TextureKey::WallPattern => Some(wall_pattern_pixels()),
        TextureKey::Text { .. } => None,
    }
}

pub fn parse_hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let h = hex.strip_prefix('#')?;
    let expanded: String = match h.len() {
        3 => h.chars().flat_map(|c| [c, c]).collect(),
        6 => h.to_string(),
        _ => return None,
    };
    let v = u32::from_str_radix(&expanded, 16).ok()?;
    Some([(v >> 16) as u8, (v >> 8) as u8, v as u8])
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `#rrggbb` → linear RGB for shading; unparseable input reads as magenta.
pub fn hex_to_linear(hex: &str) -> [f32; 3] {
    let rgb = parse_hex_rgb(hex).unwrap_or([255, 0, 255]);
    rgb.map(|c| srgb_to_linear(c as f32 / 255.0))
}

/// Per-node memo: the value is rebuilt only when the key changes.
#[derive(Debug)]
pub struct TextureSlot<T> {
    key: Option<TextureKey>,
    value: Option<T>,
}

impl<T> Default for TextureSlot<T> {
    fn default() -> Self {
        Self {
            key: None,
            value: None,
        }
    }
}

impl<T> TextureSlot<T> {
    pub fn resolve(&mut self, key: &TextureKey, make: impl FnOnce(&TextureKey) -> Option<T>) -> Option<&T> {
        if self.key.as_ref() != Some(key) {
            self.value = make(key);
            self.key = Some(key.clone());
        }
        self.value.as_ref()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }
}
