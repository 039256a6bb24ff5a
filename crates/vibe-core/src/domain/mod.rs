//! # Vibe Core - Domain Module
//! 
//! Domain entities for the dance-school platform.

pub mod organization_node;
pub mod organization_role;
pub mod menu_item;
pub mod dance_style;
pub mod level;
pub mod dance_profession;
pub mod course;
pub mod event;
pub mod product;
pub mod site_config;

// Re-export all entities and enums
pub use organization_node::{OrganizationNode, NodeType, VisualSource, PlanetType, OrbitShape};
pub use organization_role::OrganizationRole;
pub use menu_item::MenuItem;
pub use dance_style::DanceStyle;
pub use level::Level;
pub use dance_profession::DanceProfession;
pub use course::{Course, Schedule};
pub use event::{Event, EventPass, EventType};
pub use product::Product;
pub use site_config::{SiteConfiguration, extract_video_id, SITE_CONFIG_KEY};
