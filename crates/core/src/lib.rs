//! Places photographs on fixed-size, solid-color canvases ("mats").
//!
//! The image is scaled uniformly to sit inside a border, centered (or
//! raised slightly), on a background that is white, black, or the image's
//! own mean color moved to a chosen luminance.

pub mod color;
pub mod imaging;
pub mod matting;
pub mod pipeline;
pub mod shared;
