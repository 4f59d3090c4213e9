//! UI Components
//!
//! Reusable Leptos components.

use leptos::prelude::window;

mod banner;
mod delete_confirm_button;
mod footer;
mod home_sections;
mod image_slide;
mod layout;
mod navbar;
mod pager_controls;
mod post_picker;
mod require_session;
mod sidebar;
mod slideshow;

pub use banner::{flash_href, FlashBanner};
pub use delete_confirm_button::DeleteConfirmButton;
pub use footer::Footer;
pub use home_sections::{Features, HeroBanner, Highlights, NewsAndUpdates};
pub use image_slide::ImageSlide;
pub use layout::{AdminLayout, PublicLayout};
pub use navbar::Navbar;
pub use pager_controls::{NumberedPager, StepPager};
pub use post_picker::PostPicker;
pub use require_session::RequireSession;
pub use sidebar::Sidebar;
pub use slideshow::Slideshow;

/// Blocking browser alert
pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}
