//! Shared storefront components

mod breadcrumbs;
mod cards;
mod carousel;
mod footer;
mod forms;
mod header;

pub use breadcrumbs::Breadcrumbs;
pub use cards::*;
pub use carousel::{CardSlider, HeroCarousel, TestimonialCarousel};
pub use footer::Footer;
pub use forms::*;
pub use header::Header;
