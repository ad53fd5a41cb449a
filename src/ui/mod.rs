pub mod common;
pub mod dom;
pub mod icon;
pub mod motion;
pub mod navigation;
pub mod pages;
pub mod preloader;
pub mod sections;
pub mod styles;

pub use icon::{Icon, icons};
pub use pages::{NotFoundPage, PortfolioPage};
