use crate::options::ComboOption;

/// Single-line search query: text content plus cursor position in chars.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    pub text: String,
    pub cursor: usize,
}

impl QueryInput {
    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor < char_count {
            self.cursor += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// The widget's transient interaction state plus the selection it owns.
///
/// `highlighted` is `None` when no dropdown row is highlighted. It is cleared
/// whenever an input of the filtered view changes (query edit, select,
/// remove), so a stale index can never point past the new list's bounds.
#[derive(Debug, Default)]
pub struct ComboboxState {
    pub open: bool,
    pub focused: bool,
    pub query: QueryInput,
    pub highlighted: Option<usize>,
    pub selected: Vec<ComboOption>,
}

impl ComboboxState {
    /// A query edit opens the dropdown and invalidates the highlight.
    pub fn query_edited(&mut self) {
        self.open = true;
        self.highlighted = None;
    }

    /// Advance the highlight, clamped to the last row. From `None` the first
    /// row becomes highlighted. A closed dropdown opens without moving the
    /// highlight; an empty list is a no-op.
    pub fn navigate_down(&mut self, filtered_len: usize) {
        if !self.open {
            self.open = true;
            return;
        }
        if filtered_len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < filtered_len => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    /// Move the highlight up, floored at the first row. The floor applies
    /// even from `None`: ArrowUp with nothing highlighted lands on row 0,
    /// matching the widget's long-standing behavior. An empty list is a
    /// no-op.
    pub fn navigate_up(&mut self, filtered_len: usize) {
        if filtered_len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        });
    }

    /// Add an option to the selection (append when `multi`, replace
    /// otherwise), clear the query, and close the dropdown. Returns false if
    /// the id is already selected, leaving everything untouched.
    pub fn select(&mut self, option: ComboOption, multi: bool) -> bool {
        if self.selected.iter().any(|s| s.id == option.id) {
            return false;
        }
        if multi {
            self.selected.push(option);
        } else {
            self.selected = vec![option];
        }
        self.query.clear();
        self.open = false;
        self.highlighted = None;
        true
    }

    /// Remove a selected option by id. Leaves the query and open flag alone;
    /// the highlight is invalidated because the filtered view regains the
    /// option. Returns false if the id was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|option| option.id != id);
        if self.selected.len() == before {
            return false;
        }
        self.highlighted = None;
        true
    }
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
