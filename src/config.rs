//! Fixed values of the page contract: the element ids and selectors the
//! handlers look for, and the pixel thresholds the scroll effects run on.

pub const LANG_STORAGE_KEY: &str = "portfolioLang";

pub const LANG_TOGGLE_ID: &str = "langToggle";
pub const LANG_LABEL_ID: &str = "langLabel";
pub const MOBILE_TOGGLE_ID: &str = "mobileToggle";

pub const HEADER_SELECTOR: &str = ".header";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
pub const SECTION_SELECTOR: &str = "section[id]";
pub const BILINGUAL_SELECTOR: &str = "[data-en][data-fr]";

// Content cards that fade in as they scroll into view.
pub const CARD_SELECTOR: &str = ".info-card, .timeline-item, .skill-category, .project-card, .education-card, .contact-card";

// Navigation chrome hidden while printing.
pub const PRINT_CHROME_SELECTOR: &str = ".nav-menu, .mobile-toggle, .lang-toggle";

/// Height of the fixed header, subtracted from smooth-scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// Scroll depth past which the header casts a shadow.
pub const HEADER_SHADOW_THRESHOLD_PX: f64 = 20.0;
/// Cards reveal once their top clears this margin above the viewport bottom.
pub const REVEAL_MARGIN_PX: f64 = 100.0;
/// Lookahead applied to section tops when picking the active section.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

pub const HEADER_SHADOW: &str = "0 2px 8px rgba(0, 0, 0, 0.1)";
