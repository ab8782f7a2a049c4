pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod select;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable, is_within};
pub use layout::{LayoutResult, Rect};
pub use select::{option_row, SelectEvent, SelectOption, SelectProps, SelectState};
pub use terminal::Terminal;
pub use types::*;
