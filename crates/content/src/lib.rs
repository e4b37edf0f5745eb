//! Campaign content assembly: one builder per artifact (Instagram carousel,
//! Facebook video script, Twitter thread, mosque poster, analytics plan),
//! the [`CampaignPackage`] that bundles them, and the report renderers.

pub mod analytics;
pub mod assembler;
pub mod carousel;
pub mod package;
pub mod poster;
pub mod render;
pub mod thread;
pub mod video;

pub use analytics::{AnalyticsConfig, Goal, GoalTarget, PlatformAnalytics, TrackingUrl};
pub use assembler::ContentPackageAssembler;
pub use carousel::CarouselSlide;
pub use package::{BudgetTable, CampaignPackage};
pub use poster::PosterSpec;
pub use render::{to_json, write_text};
pub use thread::ThreadTweet;
pub use video::{VideoScene, VideoScript};
