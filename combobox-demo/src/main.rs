mod data;

use std::fs::File;
use std::io;

use combobox::{
    draw_text, fill_rect, render_combobox, translate, Combobox, Event, Key, Rect, Terminal,
    TextStyle, Theme,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> io::Result<()> {
    let log_file = File::create("combobox-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let options = data::countries();
    let mut combobox = Combobox::new(&options)
        .placeholder("Search countries...")
        .multi_select(true)
        .on_change(|selection| {
            let labels: Vec<&str> = selection.iter().map(|o| o.label.as_str()).collect();
            log::info!("selection changed: [{}]", labels.join(", "));
        });
    combobox.focus();

    let theme = Theme::default();
    let mut term = Terminal::new()?;

    loop {
        let (width, height) = term.size();
        let buf = term.frame()?;

        let background = theme.background.to_rgb();
        fill_rect(buf, Rect::new(0, 0, width, height), background);

        let fg = theme.foreground.to_rgb();
        let muted = theme.muted.to_rgb();
        draw_text(
            buf,
            2,
            1,
            width,
            "Select Countries (multi-select)",
            fg,
            background,
            TextStyle::new().bold(),
        );
        draw_text(
            buf,
            2,
            2,
            width,
            "Type to filter, arrows to navigate, Enter to select, click × to remove",
            muted,
            background,
            TextStyle::new().dim(),
        );
        draw_text(
            buf,
            2,
            3,
            width,
            "Esc closes, Esc again (or q) quits",
            muted,
            background,
            TextStyle::new().dim(),
        );

        if height > 2 {
            let labels: Vec<&str> = combobox.selected().iter().map(|o| o.label.as_str()).collect();
            let summary = if labels.is_empty() {
                "Selected: (none)".to_string()
            } else {
                format!("Selected: {}", labels.join(", "))
            };
            draw_text(buf, 2, height - 2, width, &summary, fg, background, TextStyle::new());
        }

        let area = Rect::new(
            2,
            5,
            width.saturating_sub(4).min(48),
            height.saturating_sub(8),
        );
        let layout = render_combobox(&combobox, area, &theme, buf);

        term.flush_frame()?;

        let raw = term.poll(None)?;
        for event in translate(&raw) {
            if let Event::Key { key, modifiers } = event {
                if key == Key::Char('c') && modifiers.ctrl {
                    return Ok(());
                }
                if !combobox.is_focused() && matches!(key, Key::Escape | Key::Char('q')) {
                    return Ok(());
                }
            }
            combobox.handle_event(&event, &layout);
        }
    }
}
