pub mod buffer;
pub mod event;
pub mod layout;
pub mod options;
pub mod render;
pub mod state;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod widget;

pub use buffer::{Buffer, Cell};
pub use event::{translate, Event, Key, Modifiers, MouseButton};
pub use layout::{ComboboxLayout, Rect};
pub use options::{filtered_view, ComboOption};
pub use render::{draw_text, fill_rect, render_combobox};
pub use terminal::Terminal;
pub use theme::{Color, Rgb, TextStyle, Theme};
pub use widget::Combobox;
