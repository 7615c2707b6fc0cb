/// Concrete terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Theme color, authored either directly in sRGB or in Oklch (perceptually
/// uniform, so lightness steps between widget surfaces read evenly).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

/// Per-cell text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            underline: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Color roles used by the combobox renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Backdrop behind the widget.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Field row background.
    pub field: Color,
    /// Placeholder text shown while nothing is selected.
    pub placeholder: Color,
    /// Chip background.
    pub chip: Color,
    /// Chip label text.
    pub chip_text: Color,
    /// Chip dismiss control.
    pub dismiss: Color,
    /// Dropdown background.
    pub dropdown: Color,
    /// Highlighted dropdown row background.
    pub highlight: Color,
    /// Highlighted dropdown row text.
    pub highlight_text: Color,
    /// "No results found" and other secondary text.
    pub muted: Color,
    /// Text cursor cell background while the field has focus.
    pub cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::oklch(0.15, 0.01, 250.0),
            foreground: Color::oklch(0.93, 0.0, 0.0),
            field: Color::oklch(0.22, 0.02, 250.0),
            placeholder: Color::oklch(0.55, 0.01, 250.0),
            chip: Color::oklch(0.4, 0.08, 250.0),
            chip_text: Color::oklch(0.95, 0.02, 250.0),
            dismiss: Color::oklch(0.62, 0.2, 25.0),
            dropdown: Color::oklch(0.19, 0.015, 250.0),
            highlight: Color::oklch(0.45, 0.1, 250.0),
            highlight_text: Color::oklch(0.97, 0.01, 250.0),
            muted: Color::oklch(0.55, 0.01, 250.0),
            cursor: Color::oklch(0.8, 0.02, 250.0),
        }
    }
}
