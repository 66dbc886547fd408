//! Clark palette - the blue visual identity shared by all rendered output.

use ratatui::style::Color;

// ============================================================
// BRAND COLORS
// ============================================================

/// Primary blue - main accent color
pub const BLUE_PRIMARY: Color = Color::Rgb(59, 130, 246); // #3B82F6

/// Light blue - secondary accent
pub const SKY_BLUE: Color = Color::Rgb(125, 211, 252); // #7DD3FC

/// Deep blue - links and interactive elements
pub const DEEP_BLUE: Color = Color::Rgb(37, 99, 235); // #2563EB

// ============================================================
// BACKGROUND COLORS
// ============================================================

/// Surface level 0 - darkest surface (code blocks, table headers)
pub const SURFACE_0: Color = Color::Rgb(24, 24, 27); // #18181B

/// Surface level 1 - mid surface (inline code)
pub const SURFACE_1: Color = Color::Rgb(39, 39, 42); // #27272A

// ============================================================
// TEXT COLORS
// ============================================================

/// Primary text
pub const TEXT: Color = Color::Rgb(244, 244, 245); // #F4F4F5

/// Dimmed text - timestamps, URLs, notes
pub const TEXT_DIM: Color = Color::Rgb(161, 161, 170); // #A1A1AA

/// Muted text - borders and background elements
pub const TEXT_MUTED: Color = Color::Rgb(113, 113, 122); // #71717A

// ============================================================
// SEMANTIC COLORS
// ============================================================

/// Borders around tables and code blocks
pub const BORDER: Color = Color::Rgb(82, 82, 91); // #52525B

/// Success green - the user's own messages
pub const SUCCESS: Color = Color::Rgb(34, 197, 94); // #22C55E
