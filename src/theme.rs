//! Color palette shared by the render modules

pub mod input {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const TITLE: Color = Color::Cyan;
}

pub mod list {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::DarkGray;
    pub const BORDER_ACTIVE: Color = Color::Cyan;
    pub const BACKGROUND: Color = Color::Black;
    pub const ITEM_FG: Color = Color::White;
    pub const ITEM_SELECTED_FG: Color = Color::Black;
    pub const ITEM_SELECTED_BG: Color = Color::Cyan;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const MATCH_FG: Color = Color::Yellow;
    pub const MATCH_MODIFIER: Modifier = Modifier::UNDERLINED;
    pub const MESSAGE_FG: Color = Color::DarkGray;
}

pub mod footer {
    use ratatui::style::Color;

    pub const HINT: Color = Color::DarkGray;
    pub const NOTICE: Color = Color::Yellow;
}
