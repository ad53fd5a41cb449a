//! Framework-independent page model: content, motion, navigation, loading and
//! the contact form

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod loading;
pub mod motion;
pub mod navigation;
pub mod particles;
#[cfg(test)]
mod tests;

pub use contact::{ContactFlow, ContactForm, Field, FieldError, FieldErrors, SubmitError, SubmitState};
pub use content::{PROFILE, Profile, Showcase, ShowcaseEntry};
pub use loading::{LoadingGate, PreloaderPhase, ScrollLock};
pub use navigation::{MenuState, NavLink, SectionId, SectionScroller};
