pub mod composer;
pub mod result_card;
pub mod social_links;
pub mod status_pill;
pub mod theme_switcher;

pub use composer::Composer;
pub use result_card::ResultCard;
pub use social_links::{SocialLinks, configured_links};
pub use status_pill::StatusPill;
pub use theme_switcher::ThemeSwitcher;
