use crate::event::{Event, Key, Modifiers};
use crate::layout::ComboboxLayout;
use crate::options::{filtered_view, ComboOption};
use crate::state::ComboboxState;

/// A searchable selection control: an editable field with chips for the
/// current selection and a dropdown of matching unselected options.
///
/// The widget borrows the host's option slice and owns everything else:
/// search query, open flag, highlight, selection. Feed it translated
/// [`Event`]s together with the [`ComboboxLayout`] from the last render; it
/// invokes the change callback after every add or remove.
pub struct Combobox<'a> {
    options: &'a [ComboOption],
    placeholder: String,
    multi_select: bool,
    state: ComboboxState,
    on_change: Option<Box<dyn FnMut(&[ComboOption]) + 'a>>,
}

impl<'a> Combobox<'a> {
    pub fn new(options: &'a [ComboOption]) -> Self {
        Self {
            options,
            placeholder: "Select an option...".to_string(),
            multi_select: false,
            state: ComboboxState::default(),
            on_change: None,
        }
    }

    /// Text shown in the input area while the selection is empty.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// When true, selecting appends; when false, selecting replaces.
    pub fn multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    /// Initial selection. Duplicate ids are dropped, keeping the first
    /// occurrence; in single-select mode only the first entry is kept.
    pub fn default_value(mut self, initial: Vec<ComboOption>) -> Self {
        let mut selected: Vec<ComboOption> = Vec::new();
        for option in initial {
            if selected.iter().any(|s| s.id == option.id) {
                continue;
            }
            selected.push(option);
            if !self.multi_select {
                break;
            }
        }
        self.state.selected = selected;
        self
    }

    /// Callback invoked with the full new selection after every add/remove.
    pub fn on_change(mut self, f: impl FnMut(&[ComboOption]) + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    // Accessors used by the renderer, tests, and the host.

    pub fn selected(&self) -> &[ComboOption] {
        &self.state.selected
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    pub fn query(&self) -> &str {
        &self.state.query.text
    }

    pub fn query_cursor(&self) -> usize {
        self.state.query.cursor
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    /// The current filtered view: unselected options matching the query,
    /// recomputed on demand (never cached).
    pub fn filtered(&self) -> Vec<&'a ComboOption> {
        filtered_view(self.options, &self.state.selected, &self.state.query.text)
    }

    /// Give the field focus, opening the dropdown.
    pub fn focus(&mut self) {
        self.state.focused = true;
        self.state.open = true;
    }

    /// Release field focus and close the dropdown.
    pub fn blur(&mut self) {
        self.state.focused = false;
        self.state.open = false;
    }

    /// Apply one input event. `layout` must come from the most recent render
    /// so pointer coordinates resolve against what is on screen. Returns true
    /// if the selection changed (the callback has already been invoked).
    pub fn handle_event(&mut self, event: &Event, layout: &ComboboxLayout) -> bool {
        match event {
            Event::Key { key, modifiers } if self.state.focused => {
                self.handle_key(*key, *modifiers)
            }
            Event::Click { x, y, .. } => self.handle_click(*x, *y, layout),
            Event::MouseMove { x, y } => {
                // The layout may predate a query edit earlier in the same
                // batch; only accept indices valid in the current view.
                if let Some(index) = layout.row_at(*x, *y) {
                    if index < self.filtered().len() {
                        self.state.highlighted = Some(index);
                    }
                }
                false
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.state.query.insert(c);
                self.state.query_edited();
            }
            Key::Backspace if modifiers.none() => {
                if self.state.query.delete_back() {
                    self.state.query_edited();
                }
            }
            Key::Delete if modifiers.none() => {
                if self.state.query.delete_forward() {
                    self.state.query_edited();
                }
            }
            // Cursor-only movement: the filtered view is unchanged, so the
            // highlight survives.
            Key::Left if !modifiers.ctrl => self.state.query.move_left(),
            Key::Right if !modifiers.ctrl => self.state.query.move_right(),
            Key::Home if !modifiers.ctrl => self.state.query.move_to_start(),
            Key::End if !modifiers.ctrl => self.state.query.move_to_end(),

            Key::Down => self.state.navigate_down(self.filtered().len()),
            Key::Up => self.state.navigate_up(self.filtered().len()),

            Key::Enter => {
                if self.state.open {
                    if let Some(index) = self.state.highlighted {
                        let picked = self.filtered().get(index).map(|o| (*o).clone());
                        if let Some(option) = picked {
                            return self.select(option);
                        }
                    }
                }
            }

            Key::Escape => {
                self.state.open = false;
                self.state.focused = false;
            }
            Key::Tab | Key::BackTab => {
                self.state.open = false;
            }
            _ => {}
        }
        false
    }

    fn handle_click(&mut self, x: u16, y: u16, layout: &ComboboxLayout) -> bool {
        // Chip dismissal consumes the click outright: it must not fall
        // through to the field's focus/open handling below.
        if let Some(id) = layout.dismiss_at(x, y) {
            let id = id.to_string();
            return self.remove(&id);
        }

        if let Some(index) = layout.row_at(x, y) {
            let picked = self.filtered().get(index).map(|o| (*o).clone());
            if let Some(option) = picked {
                return self.select(option);
            }
            return false;
        }

        if layout.field.contains(x, y) {
            self.focus();
            return false;
        }

        // Inside the widget but on nothing interactive (the "No results
        // found" row): consumed, no state change.
        if layout.contains(x, y) {
            return false;
        }

        // Outside the widget boundary: close, keep query and selection.
        self.state.open = false;
        false
    }

    /// Select an option and notify the host. Returns true if the selection
    /// changed.
    pub fn select(&mut self, option: ComboOption) -> bool {
        let label = option.label.clone();
        if !self.state.select(option, self.multi_select) {
            return false;
        }
        log::debug!("selected {label:?}, {} total", self.state.selected.len());
        self.notify();
        true
    }

    /// Remove a selected option by id and notify the host. Returns true if
    /// the selection changed.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.state.remove(id) {
            return false;
        }
        log::debug!("removed {id:?}, {} remain", self.state.selected.len());
        self.notify();
        true
    }

    fn notify(&mut self) {
        if let Some(on_change) = &mut self.on_change {
            on_change(&self.state.selected);
        }
    }
}
