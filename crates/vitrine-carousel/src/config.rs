//! Carousel configuration
//!
//! Options arrive from the page as a camelCase JSON object. Missing keys take
//! their defaults, unknown keys are rejected, and [`CarouselConfig::validate`]
//! runs once before any state is built.

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Viewport width (px) below which the carousel switches to its mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 800.0;

/// Fraction of the viewport a drag must cover to commit a navigation
pub const DRAG_COMMIT_RATIO: f64 = 0.2;

/// Configuration for creating a carousel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CarouselConfig {
    /// Number of items to scroll per navigation
    pub slides_to_scroll: u32,
    /// Number of items visible at once
    pub slides_visible: u32,
    /// Wrap to the other end when running past either end
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Pad both ends with clones so the carousel scrolls forever
    pub infinite: bool,
    /// Build one indicator per page
    pub pagination: bool,
    /// Build previous/next buttons
    pub navigation: bool,
    /// Advance automatically on a timer
    pub auto_scroll: bool,
    /// Auto-scroll interval in milliseconds
    pub auto_scroll_time: u32,
    /// Pause added to every auto-scroll interval, in milliseconds
    pub break_time: u32,
    /// Interpret pointer and touch drags as navigation
    pub drag: bool,
    /// Accessible label of the previous button
    pub prev_label: String,
    /// Accessible label of the next button
    pub next_label: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            slides_visible: 1,
            looping: false,
            infinite: false,
            pagination: false,
            navigation: true,
            auto_scroll: false,
            auto_scroll_time: 2000,
            break_time: 1000,
            drag: true,
            prev_label: "Précédent".to_string(),
            next_label: "Suivant".to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse options from a JSON document, then validate them
    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        let config: CarouselConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject option combinations that cannot produce a working carousel
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.looping && self.infinite {
            return Err(CarouselError::LoopAndInfinite);
        }
        if self.slides_to_scroll == 0 {
            return Err(CarouselError::InvalidValue {
                field: "slidesToScroll",
                value: self.slides_to_scroll,
            });
        }
        if self.slides_visible == 0 {
            return Err(CarouselError::InvalidValue {
                field: "slidesVisible",
                value: self.slides_visible,
            });
        }
        Ok(())
    }

    /// Clones needed on each end in infinite mode (0 otherwise)
    pub fn offset(&self) -> usize {
        if self.infinite {
            (self.slides_visible + self.slides_to_scroll) as usize
        } else {
            0
        }
    }

    /// Full auto-scroll period: interval plus break
    pub fn auto_scroll_period_ms(&self) -> f64 {
        f64::from(self.auto_scroll_time) + f64::from(self.break_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.slides_to_scroll, 1);
        assert_eq!(config.slides_visible, 1);
        assert!(!config.looping);
        assert!(!config.infinite);
        assert!(!config.pagination);
        assert!(config.navigation);
        assert!(!config.auto_scroll);
        assert_eq!(config.auto_scroll_time, 2000);
        assert_eq!(config.break_time, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_camel_case_and_defaults() {
        let config = CarouselConfig::from_json(
            r#"{"slidesToScroll": 2, "slidesVisible": 3, "loop": true, "autoScroll": true}"#,
        )
        .unwrap();
        assert_eq!(config.slides_to_scroll, 2);
        assert_eq!(config.slides_visible, 3);
        assert!(config.looping);
        assert!(config.auto_scroll);
        assert!(config.navigation);
        assert_eq!(config.break_time, 1000);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = CarouselConfig::from_json("{}").unwrap();
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CarouselConfig::from_json(r#"{"slidesToShow": 2}"#).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidOptions(_)));
    }

    #[test]
    fn test_loop_and_infinite_rejected() {
        let err = CarouselConfig::from_json(r#"{"loop": true, "infinite": true}"#).unwrap_err();
        assert_eq!(err, CarouselError::LoopAndInfinite);
    }

    #[test]
    fn test_zero_counts_rejected() {
        let config = CarouselConfig {
            slides_visible: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(CarouselError::InvalidValue { field: "slidesVisible", value: 0 })
        );

        let config = CarouselConfig {
            slides_to_scroll: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidValue { field: "slidesToScroll", .. })
        ));
    }

    #[test]
    fn test_offset_only_in_infinite_mode() {
        let mut config = CarouselConfig {
            slides_visible: 3,
            slides_to_scroll: 2,
            ..Default::default()
        };
        assert_eq!(config.offset(), 0);
        config.infinite = true;
        assert_eq!(config.offset(), 5);
    }

    #[test]
    fn test_auto_scroll_period() {
        let config = CarouselConfig::default();
        assert!((config.auto_scroll_period_ms() - 3000.0).abs() < 0.001);
    }
}
