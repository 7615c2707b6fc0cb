#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Hit regions recorded while rendering one frame of the widget.
///
/// The layout is rebuilt on every render. A closed dropdown contributes no
/// regions at all, so pointer events can never reach a stale row.
#[derive(Debug, Clone, Default)]
pub struct ComboboxLayout {
    /// The field row: chips plus the editable input area.
    pub field: Rect,
    /// Dismiss control of each rendered chip, with its option id,
    /// in selection order.
    pub dismissals: Vec<(String, Rect)>,
    /// The dropdown area. `None` while closed or when nothing fits.
    pub list: Option<Rect>,
    /// Visible dropdown rows, top to bottom. Empty while closed and for the
    /// "No results found" placeholder row.
    pub rows: Vec<Rect>,
    /// Filtered-view index of the first visible row.
    pub row_offset: usize,
}

impl ComboboxLayout {
    /// Whether the point falls inside the widget boundary (field or open
    /// dropdown). Everything else counts as "outside".
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.field.contains(x, y) || self.list.is_some_and(|list| list.contains(x, y))
    }

    /// The option id of the chip dismiss control at the point, if any.
    pub fn dismiss_at(&self, x: u16, y: u16) -> Option<&str> {
        self.dismissals
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| id.as_str())
    }

    /// The filtered-view index of the dropdown row at the point, if any.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.rows
            .iter()
            .position(|rect| rect.contains(x, y))
            .map(|visible| self.row_offset + visible)
    }
}
