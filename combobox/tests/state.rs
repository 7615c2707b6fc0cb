use std::cell::RefCell;

use combobox::{Combobox, ComboOption, ComboboxLayout, Event, Key, Modifiers};

fn options() -> Vec<ComboOption> {
    vec![
        ComboOption::new("us", "United States"),
        ComboOption::new("uk", "United Kingdom"),
        ComboOption::new("ca", "Canada"),
        ComboOption::new("de", "Germany"),
    ]
}

fn key(k: Key) -> Event {
    Event::Key {
        key: k,
        modifiers: Modifiers::new(),
    }
}

fn press(cb: &mut Combobox, k: Key) {
    cb.handle_event(&key(k), &ComboboxLayout::default());
}

fn type_str(cb: &mut Combobox, s: &str) {
    for c in s.chars() {
        press(cb, Key::Char(c));
    }
}

#[test]
fn typing_opens_and_filters() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();
    type_str(&mut cb, "uni");

    assert_eq!(cb.query(), "uni");
    assert!(cb.is_open());
    let labels: Vec<&str> = cb.filtered().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["United States", "United Kingdom"]);
    assert_eq!(cb.highlighted(), None);
}

#[test]
fn down_down_enter_selects_second_match() {
    let opts = options();
    let calls: RefCell<Vec<Vec<ComboOption>>> = RefCell::new(Vec::new());
    let mut cb = Combobox::new(&opts)
        .multi_select(true)
        .on_change(|sel| calls.borrow_mut().push(sel.to_vec()));
    cb.focus();

    type_str(&mut cb, "uni");
    press(&mut cb, Key::Down);
    assert_eq!(cb.highlighted(), Some(0));
    press(&mut cb, Key::Down);
    assert_eq!(cb.highlighted(), Some(1));
    press(&mut cb, Key::Enter);

    let selected: Vec<&str> = cb.selected().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(selected, vec!["uk"]);
    assert_eq!(cb.query(), "");
    assert!(!cb.is_open());
    assert_eq!(cb.highlighted(), None);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1, "exactly one callback per selection");
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[0][0].id, "uk");
}

#[test]
fn single_select_replaces_instead_of_appending() {
    let opts = options();
    let mut cb = Combobox::new(&opts).multi_select(false);

    assert!(cb.select(opts[0].clone()));
    assert!(cb.select(opts[1].clone()));

    let selected: Vec<&str> = cb.selected().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(selected, vec!["uk"]);
}

#[test]
fn multi_select_appends_in_selection_order() {
    let opts = options();
    let mut cb = Combobox::new(&opts).multi_select(true);

    assert!(cb.select(opts[2].clone()));
    assert!(cb.select(opts[0].clone()));

    let selected: Vec<&str> = cb.selected().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(selected, vec!["ca", "us"]);
}

#[test]
fn selecting_a_selected_id_is_a_noop() {
    let opts = options();
    let calls = RefCell::new(0usize);
    let mut cb = Combobox::new(&opts)
        .multi_select(true)
        .on_change(|_| *calls.borrow_mut() += 1);

    assert!(cb.select(opts[0].clone()));
    assert!(!cb.select(opts[0].clone()));

    assert_eq!(cb.selected().len(), 1);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn enter_with_nothing_highlighted_is_a_noop() {
    let opts = options();
    let calls = RefCell::new(0usize);
    let mut cb = Combobox::new(&opts).on_change(|_| *calls.borrow_mut() += 1);
    cb.focus();

    type_str(&mut cb, "uni");
    press(&mut cb, Key::Enter);

    assert!(cb.selected().is_empty());
    assert_eq!(cb.query(), "uni");
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn navigate_down_opens_before_it_moves() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();
    press(&mut cb, Key::Tab);
    assert!(!cb.is_open());

    // First Down only opens; highlight stays unset.
    press(&mut cb, Key::Down);
    assert!(cb.is_open());
    assert_eq!(cb.highlighted(), None);

    press(&mut cb, Key::Down);
    assert_eq!(cb.highlighted(), Some(0));
}

#[test]
fn navigate_down_clamps_at_last_row() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();

    let last = cb.filtered().len() - 1;
    for _ in 0..20 {
        press(&mut cb, Key::Down);
    }
    assert_eq!(cb.highlighted(), Some(last));
}

#[test]
fn navigate_up_floors_at_zero_even_from_none() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();

    // Literal floor-at-zero: Up with nothing highlighted lands on row 0.
    press(&mut cb, Key::Up);
    assert_eq!(cb.highlighted(), Some(0));

    press(&mut cb, Key::Up);
    assert_eq!(cb.highlighted(), Some(0));
}

#[test]
fn navigation_over_empty_view_is_a_noop() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();
    type_str(&mut cb, "zzz");
    assert!(cb.filtered().is_empty());

    press(&mut cb, Key::Down);
    press(&mut cb, Key::Up);
    assert_eq!(cb.highlighted(), None);

    press(&mut cb, Key::Enter);
    assert!(cb.selected().is_empty());
}

#[test]
fn highlight_resets_when_the_view_changes() {
    let opts = options();
    let mut cb = Combobox::new(&opts).multi_select(true);
    cb.focus();

    type_str(&mut cb, "u");
    press(&mut cb, Key::Down);
    assert_eq!(cb.highlighted(), Some(0));

    // Typing another character changes the filtered view.
    press(&mut cb, Key::Char('n'));
    assert_eq!(cb.highlighted(), None);

    // So does removing a chip.
    press(&mut cb, Key::Down);
    cb.select(opts[0].clone());
    cb.remove("us");
    assert_eq!(cb.highlighted(), None);
}

#[test]
fn backspace_edits_the_query_and_reopens() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();
    type_str(&mut cb, "un");
    press(&mut cb, Key::Tab);
    assert!(!cb.is_open());

    press(&mut cb, Key::Backspace);
    assert_eq!(cb.query(), "u");
    assert!(cb.is_open());
}

#[test]
fn remove_keeps_query_and_open_flag() {
    let opts = options();
    let calls = RefCell::new(0usize);
    let mut cb = Combobox::new(&opts)
        .multi_select(true)
        .on_change(|_| *calls.borrow_mut() += 1);
    cb.focus();

    cb.select(opts[0].clone());
    type_str(&mut cb, "ca");
    let open_before = cb.is_open();

    assert!(cb.remove("us"));
    assert_eq!(cb.query(), "ca");
    assert_eq!(cb.is_open(), open_before);
    assert_eq!(*calls.borrow(), 2);

    // The removed option is eligible again.
    let mut cb2 = Combobox::new(&opts).multi_select(true);
    cb2.select(opts[0].clone());
    cb2.remove("us");
    assert!(cb2.filtered().iter().any(|o| o.id == "us"));
}

#[test]
fn remove_of_unknown_id_is_a_noop() {
    let opts = options();
    let calls = RefCell::new(0usize);
    let mut cb = Combobox::new(&opts).on_change(|_| *calls.borrow_mut() += 1);

    assert!(!cb.remove("nope"));
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn escape_closes_and_releases_focus() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();
    type_str(&mut cb, "ger");

    press(&mut cb, Key::Escape);
    assert!(!cb.is_open());
    assert!(!cb.is_focused());
    // Query and selection survive.
    assert_eq!(cb.query(), "ger");

    // Unfocused widget ignores keys entirely.
    press(&mut cb, Key::Char('x'));
    assert_eq!(cb.query(), "ger");
}

#[test]
fn tab_closes_the_dropdown_only() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();
    type_str(&mut cb, "can");

    press(&mut cb, Key::Tab);
    assert!(!cb.is_open());
    assert_eq!(cb.query(), "can");
    assert!(cb.selected().is_empty());
}

#[test]
fn default_value_seeds_the_selection() {
    let opts = options();
    let cb = Combobox::new(&opts)
        .multi_select(true)
        .default_value(vec![opts[1].clone(), opts[2].clone(), opts[1].clone()]);

    let selected: Vec<&str> = cb.selected().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(selected, vec!["uk", "ca"], "duplicate ids are dropped");
    assert!(!cb.filtered().iter().any(|o| o.id == "uk"));
}

#[test]
fn single_select_default_value_keeps_first_entry() {
    let opts = options();
    let cb = Combobox::new(&opts).default_value(vec![opts[0].clone(), opts[1].clone()]);

    let selected: Vec<&str> = cb.selected().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(selected, vec!["us"]);
}

#[test]
fn cursor_movement_does_not_touch_the_highlight() {
    let opts = options();
    let mut cb = Combobox::new(&opts);
    cb.focus();
    type_str(&mut cb, "uni");
    press(&mut cb, Key::Down);
    assert_eq!(cb.highlighted(), Some(0));

    press(&mut cb, Key::Left);
    press(&mut cb, Key::Home);
    press(&mut cb, Key::Right);
    press(&mut cb, Key::End);
    assert_eq!(cb.highlighted(), Some(0));
    assert_eq!(cb.query(), "uni");
}

#[test]
fn empty_option_list_never_panics() {
    let opts: Vec<ComboOption> = Vec::new();
    let mut cb = Combobox::new(&opts);
    cb.focus();

    type_str(&mut cb, "abc");
    press(&mut cb, Key::Down);
    press(&mut cb, Key::Up);
    press(&mut cb, Key::Enter);

    assert!(cb.filtered().is_empty());
    assert!(cb.selected().is_empty());
}
