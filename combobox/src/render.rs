use crate::buffer::{Buffer, Cell};
use crate::layout::{ComboboxLayout, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::theme::{Rgb, TextStyle, Theme};
use crate::widget::Combobox;

/// Dropdown height cap; taller filtered views scroll.
pub const MAX_VISIBLE_ROWS: u16 = 8;

/// Paint every cell of `rect` with the background color.
pub fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            buf.set(x, y, Cell::new(' ').with_bg(bg));
        }
    }
}

/// Draw `text` at (x, y), clipped at column `max_x`. Wide characters get a
/// continuation cell. Returns the column after the last drawn character.
pub fn draw_text(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    max_x: u16,
    text: &str,
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
) -> u16 {
    let mut x = x;
    for ch in text.chars() {
        let width = char_width(ch).max(1) as u16;
        if x + width > max_x {
            break;
        }
        buf.set(x, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
        if width == 2 {
            let mut cont = Cell::new(' ').with_fg(fg).with_bg(bg);
            cont.wide_continuation = true;
            buf.set(x + 1, y, cont);
        }
        x += width;
    }
    x
}

/// Render the widget into `area` and return the hit regions for this frame.
///
/// The field row always renders; the dropdown renders below it only while
/// open, so a closed dropdown leaves no trace in the returned layout.
pub fn render_combobox(
    combobox: &Combobox,
    area: Rect,
    theme: &Theme,
    buf: &mut Buffer,
) -> ComboboxLayout {
    let mut layout = ComboboxLayout::default();
    if area.is_empty() {
        return layout;
    }

    let field = Rect::new(area.x, area.y, area.width, 1);
    layout.field = field;
    render_field(combobox, field, theme, buf, &mut layout);

    if combobox.is_open() && area.height > 1 {
        render_dropdown(combobox, area, theme, buf, &mut layout);
    }

    layout
}

fn render_field(
    combobox: &Combobox,
    field: Rect,
    theme: &Theme,
    buf: &mut Buffer,
    layout: &mut ComboboxLayout,
) {
    fill_rect(buf, field, theme.field.to_rgb());

    let y = field.y;
    let max_x = field.right().saturating_sub(1);
    let mut x = field.x + 1;

    // Chips in insertion order, each with a one-cell dismiss control.
    for option in combobox.selected() {
        let remaining = max_x.saturating_sub(x) as usize;
        // label + surrounding space + dismiss + trailing gap
        if remaining < 5 {
            break;
        }
        let label = truncate_to_width(&option.label, remaining - 4);
        let chip_bg = theme.chip.to_rgb();
        let chip_fg = theme.chip_text.to_rgb();

        x = draw_text(buf, x, y, max_x, " ", chip_fg, chip_bg, TextStyle::new());
        x = draw_text(buf, x, y, max_x, &label, chip_fg, chip_bg, TextStyle::new());
        x = draw_text(buf, x, y, max_x, " ", chip_fg, chip_bg, TextStyle::new());
        let dismiss_x = x;
        x = draw_text(
            buf,
            x,
            y,
            max_x,
            "×",
            theme.dismiss.to_rgb(),
            chip_bg,
            TextStyle::new().bold(),
        );
        layout
            .dismissals
            .push((option.id.clone(), Rect::new(dismiss_x, y, 1, 1)));
        x += 1; // gap between chips, field background
    }

    // Input area: placeholder while nothing is selected and nothing typed,
    // otherwise the query with its cursor kept in view.
    let remaining = max_x.saturating_sub(x) as usize;
    let field_bg = theme.field.to_rgb();
    let show_placeholder =
        combobox.selected().is_empty() && combobox.query().is_empty();

    if show_placeholder {
        let placeholder = truncate_to_width(combobox.placeholder_text(), remaining);
        draw_text(
            buf,
            x,
            y,
            max_x,
            &placeholder,
            theme.placeholder.to_rgb(),
            field_bg,
            TextStyle::new().dim(),
        );
    } else if remaining > 0 {
        let chars: Vec<char> = combobox.query().chars().collect();
        let cursor = combobox.query_cursor().min(chars.len());

        // Drop leading characters until the cursor fits in the window.
        let mut start = 0;
        while start < cursor {
            let width: usize = chars[start..cursor].iter().map(|c| char_width(*c).max(1)).sum();
            if width < remaining {
                break;
            }
            start += 1;
        }

        let visible: String = chars[start..].iter().collect();
        draw_text(
            buf,
            x,
            y,
            max_x,
            &visible,
            theme.foreground.to_rgb(),
            field_bg,
            TextStyle::new(),
        );

        if combobox.is_focused() {
            let before: usize = chars[start..cursor].iter().map(|c| char_width(*c).max(1)).sum();
            let cursor_x = x + before as u16;
            if cursor_x < max_x {
                let ch = chars.get(cursor).copied().unwrap_or(' ');
                buf.set(
                    cursor_x,
                    y,
                    Cell::new(ch)
                        .with_fg(field_bg)
                        .with_bg(theme.cursor.to_rgb()),
                );
            }
        }
        return;
    }

    // Cursor over the placeholder (or an empty input) while focused.
    if combobox.is_focused() && x < max_x {
        let ch = buf.get(x, y).map(|cell| cell.char).unwrap_or(' ');
        buf.set(
            x,
            y,
            Cell::new(ch).with_fg(field_bg).with_bg(theme.cursor.to_rgb()),
        );
    }
}

fn render_dropdown(
    combobox: &Combobox,
    area: Rect,
    theme: &Theme,
    buf: &mut Buffer,
    layout: &mut ComboboxLayout,
) {
    let filtered = combobox.filtered();
    let avail = (area.height - 1).min(MAX_VISIBLE_ROWS);
    if avail == 0 {
        return;
    }

    if filtered.is_empty() {
        // Placeholder row: visible but never a hit region.
        let list = Rect::new(area.x, area.y + 1, area.width, 1);
        fill_rect(buf, list, theme.dropdown.to_rgb());
        draw_text(
            buf,
            list.x + 1,
            list.y,
            list.right().saturating_sub(1),
            "No results found",
            theme.muted.to_rgb(),
            theme.dropdown.to_rgb(),
            TextStyle::new().dim(),
        );
        layout.list = Some(list);
        return;
    }

    let visible = (filtered.len() as u16).min(avail);
    // Shift the window so the highlighted row is always on screen.
    let offset = match combobox.highlighted() {
        Some(h) if h >= visible as usize => h + 1 - visible as usize,
        _ => 0,
    };
    layout.row_offset = offset;

    let list = Rect::new(area.x, area.y + 1, area.width, visible);
    layout.list = Some(list);

    for (row, option) in filtered.iter().skip(offset).take(visible as usize).enumerate() {
        let y = list.y + row as u16;
        let row_rect = Rect::new(list.x, y, list.width, 1);
        let is_highlighted = combobox.highlighted() == Some(offset + row);

        let (bg, fg) = if is_highlighted {
            (theme.highlight.to_rgb(), theme.highlight_text.to_rgb())
        } else {
            (theme.dropdown.to_rgb(), theme.foreground.to_rgb())
        };

        fill_rect(buf, row_rect, bg);
        let label = truncate_to_width(&option.label, row_rect.width.saturating_sub(2) as usize);
        draw_text(
            buf,
            row_rect.x + 1,
            y,
            row_rect.right().saturating_sub(1),
            &label,
            fg,
            bg,
            TextStyle::new(),
        );
        layout.rows.push(row_rect);
    }

    if offset + (visible as usize) < filtered.len() {
        log::trace!(
            "dropdown showing {}..{} of {}",
            offset,
            offset + visible as usize,
            filtered.len()
        );
    }
}
