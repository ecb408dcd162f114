use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselTiming {
    /// How long the transition lock is held after an index change.
    pub transition_ms: u32,
    pub auto_advance_ms: u32,
}

pub const CAROUSEL_TIMING: CarouselTiming = CarouselTiming {
    transition_ms: 500,
    auto_advance_ms: 6000,
};

/// Window scroll offset after which the header switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

pub const COMPANY_NAME: &str = "Bookright Limited";
pub const BRAND: &str = "Bookright";
pub const PHONE_DISPLAY: &str = "+254 714 126 920";
pub const PHONE_HREF: &str = "tel:+254714126920";
pub const EMAIL: &str = "info@bookright.co.ke";
pub const EMAIL_HREF: &str = "mailto:info@bookright.co.ke";
pub const ADDRESS_LINES: [&str; 2] = [
    "Rattansi Educational Trust Building,",
    "Koinange Street, Nairobi, Kenya",
];
pub const BUSINESS_HOURS: &str = "Mon - Fri: 8:00 AM - 5:00 PM";
pub const MAPS_URL: &str = "https://maps.google.com";
