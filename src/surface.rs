//! Draw contract between the engine and a rendering backend.
//!
//! Coordinates are playfield pixels.  Implementations decide how (and
//! whether) to map them onto their own grid.

use crate::entities::{FallingObject, Lane};

pub trait Surface {
    type Error;

    /// Basket centered at (`x`, `y`) in `lane`.
    fn draw_basket(&mut self, lane: Lane, x: f64, y: f64) -> Result<(), Self::Error>;

    fn draw_object(&mut self, object: &FallingObject) -> Result<(), Self::Error>;

    /// Overlay text anchored at its left edge.
    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}
