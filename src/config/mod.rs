//! Configuration module

mod site;

pub use site::AnalyticsConfig;
pub use site::CommentsConfig;
pub use site::GiscusConfig;
pub use site::NavLink;
pub use site::SiteConfig;
