//! FILENAME: core/model/src/constants.rs
//! PURPOSE: Process-wide static lookup tables for the dashboard.
//! CONTEXT: Color assignments per dimension value, the subcategory→category
//! hierarchy, and the state→region mapping for the map. All tables are
//! immutable and initialized once on first access; there is no runtime
//! mutation anywhere. Absence of a key is never an error — lookups return
//! `None` and chart consumers fall back to `COLOR_FALLBACK_GRAY`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// ============================================================================
// BASE PALETTE
// ============================================================================

/// Dark blue: Technology, West region, Corporate segment.
pub const COLOR_DARK_BLUE: &str = "#0b2d79";
/// Medium blue: Office Supplies, South region, Consumer segment.
pub const COLOR_MEDIUM_BLUE: &str = "#1470e6";
/// Purple: Furniture, East region, Home Office segment.
pub const COLOR_PURPLE: &str = "#9852d9";
/// Pink: Central region, Same Day shipping.
pub const COLOR_PINK: &str = "#e43fdd";
/// Fallback for dimension values outside the static tables.
pub const COLOR_FALLBACK_GRAY: &str = "#6c757d";

// ============================================================================
// DIMENSION → COLOR TABLES
// ============================================================================

static CATEGORY_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Technology", COLOR_DARK_BLUE),
        ("Office Supplies", COLOR_MEDIUM_BLUE),
        ("Furniture", COLOR_PURPLE),
    ])
});

static SEGMENT_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Consumer", COLOR_MEDIUM_BLUE),
        ("Corporate", COLOR_DARK_BLUE),
        ("Home Office", COLOR_PURPLE),
    ])
});

static REGION_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("West", COLOR_DARK_BLUE),
        ("South", COLOR_MEDIUM_BLUE),
        ("East", COLOR_PURPLE),
        ("Central", COLOR_PINK),
    ])
});

static SHIP_MODE_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Standard Class", COLOR_MEDIUM_BLUE),
        ("Second Class", COLOR_DARK_BLUE),
        ("First Class", COLOR_PURPLE),
        ("Same Day", COLOR_PINK),
    ])
});

// ============================================================================
// HIERARCHY TABLES
// ============================================================================

static SUBCATEGORY_TO_CATEGORY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Technology
        ("Phones", "Technology"),
        ("Copiers", "Technology"),
        ("Accessories", "Technology"),
        ("Machines", "Technology"),
        // Office Supplies
        ("Paper", "Office Supplies"),
        ("Binders", "Office Supplies"),
        ("Art", "Office Supplies"),
        ("Storage", "Office Supplies"),
        ("Appliances", "Office Supplies"),
        ("Labels", "Office Supplies"),
        ("Fasteners", "Office Supplies"),
        ("Envelopes", "Office Supplies"),
        ("Supplies", "Office Supplies"),
        // Furniture
        ("Chairs", "Furniture"),
        ("Tables", "Furniture"),
        ("Furnishings", "Furniture"),
        ("Bookcases", "Furniture"),
    ])
});

static STATE_TO_REGION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // West
        ("California", "West"),
        ("Oregon", "West"),
        ("Washington", "West"),
        ("Nevada", "West"),
        ("Arizona", "West"),
        ("Utah", "West"),
        ("Colorado", "West"),
        ("New Mexico", "West"),
        ("Wyoming", "West"),
        ("Montana", "West"),
        ("Idaho", "West"),
        ("Alaska", "West"),
        ("Hawaii", "West"),
        // South
        ("Texas", "South"),
        ("Oklahoma", "South"),
        ("Louisiana", "South"),
        ("Arkansas", "South"),
        ("Mississippi", "South"),
        ("Alabama", "South"),
        ("Tennessee", "South"),
        ("Kentucky", "South"),
        ("Florida", "South"),
        ("Georgia", "South"),
        ("South Carolina", "South"),
        ("North Carolina", "South"),
        ("Virginia", "South"),
        ("West Virginia", "South"),
        ("Maryland", "South"),
        ("Delaware", "South"),
        ("District of Columbia", "South"),
        // East
        ("New York", "East"),
        ("Pennsylvania", "East"),
        ("New Jersey", "East"),
        ("Connecticut", "East"),
        ("Massachusetts", "East"),
        ("Rhode Island", "East"),
        ("Vermont", "East"),
        ("New Hampshire", "East"),
        ("Maine", "East"),
        // Central (Midwest)
        ("Ohio", "Central"),
        ("Michigan", "Central"),
        ("Indiana", "Central"),
        ("Illinois", "Central"),
        ("Wisconsin", "Central"),
        ("Minnesota", "Central"),
        ("Iowa", "Central"),
        ("Missouri", "Central"),
        ("Kansas", "Central"),
        ("Nebraska", "Central"),
        ("South Dakota", "Central"),
        ("North Dakota", "Central"),
    ])
});

// ============================================================================
// LOOKUP HELPERS
// ============================================================================

/// Color for a product category, if mapped.
pub fn category_color(category: &str) -> Option<&'static str> {
    CATEGORY_COLORS.get(category).copied()
}

/// Color for a customer segment, if mapped.
pub fn segment_color(segment: &str) -> Option<&'static str> {
    SEGMENT_COLORS.get(segment).copied()
}

/// Color for a region, if mapped.
pub fn region_color(region: &str) -> Option<&'static str> {
    REGION_COLORS.get(region).copied()
}

/// Color for a ship mode, if mapped.
pub fn ship_mode_color(ship_mode: &str) -> Option<&'static str> {
    SHIP_MODE_COLORS.get(ship_mode).copied()
}

/// Parent category for a subcategory, if mapped.
pub fn subcategory_category(subcategory: &str) -> Option<&'static str> {
    SUBCATEGORY_TO_CATEGORY.get(subcategory).copied()
}

/// Subcategories inherit their parent category's color; unmapped
/// subcategories get the fallback gray.
pub fn subcategory_color(subcategory: &str) -> &'static str {
    subcategory_category(subcategory)
        .and_then(category_color)
        .unwrap_or(COLOR_FALLBACK_GRAY)
}

/// Region a US state belongs to, if mapped.
pub fn state_region(state: &str) -> Option<&'static str> {
    STATE_TO_REGION.get(state).copied()
}
