// ============================================================================
// Vibe Core - Organization Node Entity
// File: crates/vibe-core/src/domain/organization_node.rs
// Description: Club / branch / event hierarchy rendered as a planetary system
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use vibe_shared::types::{new_id, Timestamps};
use vibe_shared::utils::{is_valid_hex_color, is_valid_slug};

use crate::error::DomainError;
use crate::tree::{EntityKind, OnParentDelete, TreeEntity, TreePolicy};

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeType {
    Root,
    Branch,
    Event,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Root => "ROOT",
            NodeType::Branch => "BRANCH",
            NodeType::Event => "EVENT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ROOT" => Some(NodeType::Root),
            "BRANCH" => Some(NodeType::Branch),
            "EVENT" => Some(NodeType::Event),
            _ => None,
        }
    }
}

impl Default for NodeType {
    fn default() -> Self {
        NodeType::Branch
    }
}

/// Where the 3D visual of a node comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualSource {
    Preset,
    Glb,
    Gif,
}

impl VisualSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualSource::Preset => "preset",
            VisualSource::Glb => "glb",
            VisualSource::Gif => "gif",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "preset" => Some(VisualSource::Preset),
            "glb" => Some(VisualSource::Glb),
            "gif" => Some(VisualSource::Gif),
            _ => None,
        }
    }
}

impl Default for VisualSource {
    fn default() -> Self {
        VisualSource::Preset
    }
}

/// Parametric planet preset, used when the visual source is `preset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetType {
    Wire,
    Dotted,
    Glass,
    Chrome,
    Network,
    Star,
}

impl PlanetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetType::Wire => "wire",
            PlanetType::Dotted => "dotted",
            PlanetType::Glass => "glass",
            PlanetType::Chrome => "chrome",
            PlanetType::Network => "network",
            PlanetType::Star => "star",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "wire" => Some(PlanetType::Wire),
            "dotted" => Some(PlanetType::Dotted),
            "glass" => Some(PlanetType::Glass),
            "chrome" => Some(PlanetType::Chrome),
            "network" => Some(PlanetType::Network),
            "star" => Some(PlanetType::Star),
            _ => None,
        }
    }
}

impl Default for PlanetType {
    fn default() -> Self {
        PlanetType::Glass
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitShape {
    Circle,
    Squircle,
}

impl OrbitShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbitShape::Circle => "circle",
            OrbitShape::Squircle => "squircle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "circle" => Some(OrbitShape::Circle),
            "squircle" => Some(OrbitShape::Squircle),
            _ => None,
        }
    }
}

impl Default for OrbitShape {
    fn default() -> Self {
        OrbitShape::Circle
    }
}

/// Organization Node entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrganizationNode {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Node name must be between 1 and 100 characters"))]
    pub name: String,

    pub slug: String,

    #[serde(rename = "parent")]
    pub parent_id: Option<Uuid>,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[validate(length(max = 200, message = "Video URL too long"))]
    pub video_url: String,

    pub description: String,

    // 3D configuration
    pub visual_source: VisualSource,
    pub planet_type: PlanetType,
    pub model_3d: Option<String>,
    pub planet_texture: Option<String>,
    pub planet_color: String,
    pub orbit_radius: f64,
    pub orbit_speed: f64,
    pub planet_scale: f64,
    pub rotation_speed: f64,
    pub orbit_phase: f64,
    pub orbit_shape: OrbitShape,
    pub orbit_roundness: f64,
    pub is_visible_3d: bool,

    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl OrganizationNode {
    pub fn new(
        name: String,
        slug: String,
        node_type: NodeType,
        parent_id: Option<Uuid>,
    ) -> Result<Self, DomainError> {
        let node = Self {
            id: new_id(),
            name: name.trim().to_string(),
            slug: slug.trim().to_lowercase(),
            parent_id,
            node_type,
            video_url: String::new(),
            description: String::new(),
            visual_source: VisualSource::default(),
            planet_type: PlanetType::default(),
            model_3d: None,
            planet_texture: None,
            planet_color: "#7c3aed".to_string(),
            orbit_radius: 5.0,
            orbit_speed: 0.15,
            planet_scale: 0.8,
            rotation_speed: 1.0,
            orbit_phase: 0.0,
            orbit_shape: OrbitShape::default(),
            orbit_roundness: 1.0,
            is_visible_3d: true,
            timestamps: Timestamps::now(),
        };

        node.check()?;
        Ok(node)
    }

    /// Field validation plus the slug and color formats.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        if !is_valid_slug(&self.slug) {
            return Err(DomainError::ValidationError(format!("Invalid slug: {}", self.slug)));
        }
        if !is_valid_hex_color(&self.planet_color) {
            return Err(DomainError::ValidationError(format!(
                "Invalid planet color: {}",
                self.planet_color
            )));
        }
        Ok(())
    }
}

impl TreeEntity for OrganizationNode {
    const KIND: EntityKind = EntityKind::OrganizationNode;
    const ON_PARENT_DELETE: OnParentDelete = OnParentDelete::SetNull;

    fn id(&self) -> Uuid {
        self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    fn set_parent_id(&mut self, parent_id: Option<Uuid>) {
        self.parent_id = parent_id;
        self.timestamps.touch();
    }

    fn policy() -> TreePolicy<Self> {
        TreePolicy::all_by_name()
    }
}
