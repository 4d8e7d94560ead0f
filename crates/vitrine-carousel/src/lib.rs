//! Carousel engine for Vitrine
//!
//! This crate provides the positional core of an image carousel:
//! - Slide collection with infinite-mode clone padding
//! - Index clamping and loop wrap-around
//! - Seam repair for endless scrolling
//! - Drag gesture interpretation
//! - Responsive breakpoint handling
//! - Auto-scroll scheduling
//!
//! ## Architecture
//!
//! - [`math`]: Pointer geometry and track percentages
//! - [`input`]: Drag state machine and keyboard mapping
//! - [`controls`]: Navigation and pagination state derived from moves
//! - [`surface`]: The style-writing seam between engine and DOM
//!
//! ## Example
//!
//! ```rust
//! use vitrine_carousel::{Carousel, CarouselConfig, RecordingSurface};
//!
//! let config = CarouselConfig { looping: true, ..Default::default() };
//! let mut carousel = Carousel::new(
//!     config,
//!     vec!["a", "b", "c"],
//!     |slide| *slide,
//!     |_| RecordingSurface::new(),
//!     1280.0,
//!     0.0,
//! )
//! .unwrap();
//!
//! carousel.prev(0.0);
//! assert_eq!(carousel.current_item(), 2);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: The auto-scroll schedule takes injected timestamps
//! 3. **Surface Seam**: The engine writes styles only through [`Surface`]

pub mod controls;
pub mod input;
pub mod math;
pub mod surface;

mod config;
mod engine;
mod error;
mod events;
mod schedule;
mod slides;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod web;

// Re-export core types for convenience
pub use config::{CarouselConfig, DRAG_COMMIT_RATIO, MOBILE_BREAKPOINT_PX};
pub use controls::{NavigationState, Pagination};
pub use engine::Carousel;
pub use error::CarouselError;
pub use events::{MoveCallback, MoveEvent, MoveSubscribers};
pub use input::{DragDecision, DragInterpreter, InputResult, NavKey, PointerSample, PointerSource};
pub use math::Point;
pub use schedule::AutoScroll;
pub use slides::SlideCollection;
pub use surface::{RecordingSurface, Surface, SurfaceOp};
