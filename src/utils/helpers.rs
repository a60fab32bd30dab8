//! Helper utility functions for timer labels

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Quantity suffix as written in crop labels: "Potato x2", "Kale x1.5"
    static ref QUANTITY_PATTERN: Regex = Regex::new(r"x(\d+\.?\d*)").unwrap();
}

/// Crop name part of a label: the text before the first `" x"`
pub fn crop_name(label: &str) -> &str {
    label.split(" x").next().unwrap_or(label)
}

/// Quantity following an `x` in a label; 1 when absent or unparseable
pub fn parse_quantity(label: &str) -> f64 {
    QUANTITY_PATTERN
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(1.0)
}

/// Render a quantity without a trailing `.0` for whole numbers
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        let rounded = format!("{:.2}", quantity);
        rounded.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Crop label with its quantity suffix
pub fn crop_label(name: &str, quantity: f64) -> String {
    format!("{} x{}", name, format_quantity(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_name() {
        assert_eq!(crop_name("Potato x3"), "Potato");
        assert_eq!(crop_name("Potato"), "Potato");
        assert_eq!(crop_name("Sweet Potato x1 (2 plots)"), "Sweet Potato");
        assert_eq!(crop_name(""), "");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("Potato x3"), 3.0);
        assert_eq!(parse_quantity("Kale x1.5"), 1.5);
        assert_eq!(parse_quantity("Potato"), 1.0);
        assert_eq!(parse_quantity("Potato xabc"), 1.0);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(1.333333), "1.33");
        assert_eq!(crop_label("Carrot", 1.0), "Carrot x1");
    }
}
