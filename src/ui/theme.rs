use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub bar: Color,         // Untouched bars
    pub compare: Color,     // Elements being compared
    pub swap: Color,        // Elements being swapped
    pub settled: Color,     // Highlighted / sorted elements
    pub tree_divide: Color, // Merge tree nodes while splitting
    pub tree_merge: Color,  // Merge tree nodes while merging
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub label: Color, // Node labels and addresses
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),
    bar: Color::Rgb(137, 180, 250),
    compare: Color::Rgb(249, 226, 175), // Yellow
    swap: Color::Rgb(243, 139, 168),    // Red
    settled: Color::Rgb(166, 227, 161), // Green
    tree_divide: Color::Rgb(148, 226, 213),
    tree_merge: Color::Rgb(245, 194, 231),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
    label: Color::Rgb(148, 226, 213),
};
