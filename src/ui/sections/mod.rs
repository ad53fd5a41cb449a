//! Page sections, in document order

mod about;
mod contact;
mod footer;
mod hero;
mod showcase;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use showcase::ShowcaseSection;
