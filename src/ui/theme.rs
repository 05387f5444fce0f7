use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar: Color,          // Idle array bars
    pub bar_comparing: Color, // Bars under comparison
    pub bar_swapping: Color,  // Bars being written
    pub bar_sorted: Color,    // Finalized bars
    pub bar_pivot: Color,     // Active quicksort pivot
    pub node: Color,          // Structure node boxes
    pub node_head: Color,     // Root/front/top node
    pub node_selected: Color, // Selected node
    pub edge: Color,          // Connectors between nodes
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(137, 180, 250),          // Blue at rest
    bar_comparing: Color::Rgb(249, 226, 175), // Yellow while comparing
    bar_swapping: Color::Rgb(243, 139, 168),  // Red while moving
    bar_sorted: Color::Rgb(166, 227, 161),    // Green once final
    bar_pivot: Color::Rgb(245, 194, 231),     // Pink pivot
    node: Color::Rgb(205, 214, 244),
    node_head: Color::Rgb(137, 180, 250),
    node_selected: Color::Rgb(249, 226, 175),
    edge: Color::Rgb(108, 112, 134),
};
