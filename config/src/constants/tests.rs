//! Tests for the clearance configuration builder.

use super::*;

/// Ensures default clearance values are sane and positive.
#[test]
fn default_clearance_is_valid() {
    let cfg = ClearanceConfig::default();
    assert!(cfg.plate_margin > 0.0);
    assert!(cfg.head_min_size.iter().all(|v| *v > 0.0));
    assert_eq!(
        ClearanceConfig::new(
            cfg.plate_margin,
            [cfg.head_min_x, cfg.head_max_x, cfg.head_min_y, cfg.head_max_y],
            cfg.head_min_size
        ),
        Ok(cfg)
    );
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ClearanceConfig::new(-0.5, [1.0; 4], [1.0; 2]).unwrap_err(),
        ConfigError::InvalidMargin(-0.5)
    );
    assert_eq!(
        ClearanceConfig::new(1.0, [1.0, -2.0, 1.0, 1.0], [1.0; 2]).unwrap_err(),
        ConfigError::InvalidHeadExtent(-2.0)
    );
    assert_eq!(
        ClearanceConfig::new(1.0, [1.0; 4], [1.0, f64::INFINITY]).unwrap_err(),
        ConfigError::InvalidHeadMinSize(f64::INFINITY)
    );
}

#[test]
fn zero_lengths_are_accepted() {
    let cfg = ClearanceConfig::new(0.0, [0.0; 4], [0.0; 2]).expect("zero is valid");
    assert_eq!(cfg.plate_margin, 0.0);
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidMargin(-1.0).to_string().contains("plate margin"));
    assert!(ConfigError::InvalidHeadExtent(-1.0).to_string().contains("head extent"));
}
