//! Carousel index arithmetic
//!
//! Two steppers share the [`Steppable`] seam so that [`Autoplay`] can drive
//! either of them:
//! - [`CyclicStepper`]: one visible slide, wraps at both ends
//! - [`WindowedSlider`]: several visible cards, index is the left-most card

mod autoplay;
mod cyclic;
mod windowed;

pub use autoplay::Autoplay;
#[cfg(feature = "runtime")]
pub use autoplay::AutoplayTimer;
pub use cyclic::CyclicStepper;
pub use windowed::{OverflowPolicy, WindowedSlider};

/// Anything with a current index that can be moved forward and backward.
pub trait Steppable {
    /// Current index
    fn index(&self) -> usize;

    /// Move forward one position, returning the new index
    fn step_forward(&mut self) -> usize;

    /// Move backward one position, returning the new index
    fn step_backward(&mut self) -> usize;
}
