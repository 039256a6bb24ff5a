//! Reference content loaded by `SeedService`.

use std::f64::consts::PI;

use crate::domain::{EventType, NodeType, PlanetType};

pub(crate) struct MenuSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub order: i32,
    pub children: &'static [MenuSeed],
}

const fn leaf(name: &'static str, slug: &'static str, url: &'static str, icon: &'static str, order: i32) -> MenuSeed {
    MenuSeed { name, slug, url, icon, order, children: &[] }
}

pub(crate) const MENU: &[MenuSeed] = &[
    MenuSeed {
        name: "Cours",
        slug: "cours",
        url: "/cours",
        icon: "GraduationCap",
        order: 1,
        children: &[
            leaf("Liste & Planning", "cours-planning", "/cours/planning", "Calendar", 1),
            leaf("Filtres (Ville, Niveau)", "cours-filtres", "/cours/filtres", "Filter", 2),
            leaf("Détails des programmes", "cours-programmes", "/cours/programmes", "FileText", 3),
            leaf("Inscription", "cours-inscription", "/cours/inscription", "UserPlus", 4),
        ],
    },
    MenuSeed {
        name: "Formations",
        slug: "formations",
        url: "/formations",
        icon: "BookOpen",
        order: 2,
        children: &[
            leaf("Contenu éducatif en ligne", "formations-contenu", "/formations/contenu", "Monitor", 1),
            leaf("Catégories", "formations-categories", "/formations/categories", "FolderTree", 2),
            leaf("Vidéothèque", "formations-videotheque", "/formations/videotheque", "Video", 3),
        ],
    },
    MenuSeed {
        name: "Trainings",
        slug: "trainings",
        url: "/trainings",
        icon: "Dumbbell",
        order: 3,
        children: &[
            leaf("Sessions libres", "trainings-sessions", "/trainings/sessions", "Clock", 1),
            leaf("Organisation adhérents", "trainings-adherents", "/trainings/adherents", "Users", 2),
        ],
    },
    MenuSeed {
        name: "Artistes",
        slug: "artistes",
        url: "/artistes",
        icon: "Star",
        order: 4,
        children: &[
            leaf("Annuaire", "artistes-annuaire", "/artistes/annuaire", "BookUser", 1),
            leaf("Profils & Bios", "artistes-profils", "/artistes/profils", "User", 2),
            leaf("Booking", "artistes-booking", "/artistes/booking", "CalendarCheck", 3),
            leaf("Avis & Notes", "artistes-avis", "/artistes/avis", "MessageSquare", 4),
        ],
    },
    MenuSeed {
        name: "Théorie",
        slug: "theorie",
        url: "/theorie",
        icon: "Library",
        order: 5,
        children: &[
            leaf("Cours théoriques", "theorie-cours", "/theorie/cours", "BookOpenCheck", 1),
            leaf("Quiz de connaissances", "theorie-quiz", "/theorie/quiz", "CircleHelp", 2),
            leaf("Suivi de progression", "theorie-progression", "/theorie/progression", "TrendingUp", 3),
        ],
    },
    MenuSeed {
        name: "Care",
        slug: "care",
        url: "/care",
        icon: "Heart",
        order: 6,
        children: &[
            leaf("Soins & Récupération", "care-soins", "/care/soins", "Sparkles", 1),
            leaf("Nos Praticiens", "care-praticiens", "/care/praticiens", "Stethoscope", 2),
            leaf("Réservation", "care-reservation", "/care/reservation", "CalendarPlus", 3),
        ],
    },
    MenuSeed {
        name: "Shop",
        slug: "shop",
        url: "/shop",
        icon: "ShoppingBag",
        order: 7,
        children: &[
            leaf("Pulls & Sweats", "shop-pulls", "/shop/pulls", "Shirt", 1),
            leaf("T-shirts", "shop-tshirts", "/shop/tshirts", "Shirt", 2),
            leaf("Chaussures", "shop-chaussures", "/shop/chaussures", "Footprints", 3),
            leaf("Vins & Spiritueux", "shop-vins", "/shop/vins", "Wine", 4),
        ],
    },
    MenuSeed {
        name: "Projets",
        slug: "projets",
        url: "/projets",
        icon: "Rocket",
        order: 8,
        children: &[
            leaf("Programme d'incubation", "projets-incubation", "/projets/incubation", "Lightbulb", 1),
            leaf("Autres initiatives", "projets-initiatives", "/projets/initiatives", "Sparkle", 2),
        ],
    },
    MenuSeed {
        name: "Organisation",
        slug: "organisation",
        url: "/organisation",
        icon: "Network",
        order: 9,
        children: &[
            leaf("Structure", "organisation-structure", "/organisation/structure", "Building2", 1),
            leaf("Pôles", "organisation-poles", "/organisation/poles", "Boxes", 2),
        ],
    },
];

pub(crate) struct PlanetSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub node_type: NodeType,
    pub description: &'static str,
    pub planet_type: PlanetType,
    pub planet_color: &'static str,
    pub orbit_radius: f64,
    pub orbit_speed: f64,
    pub planet_scale: f64,
    pub rotation_speed: f64,
    pub orbit_phase: f64,
}

/// Top of the organization tree.
pub(crate) const ORGANIZATION_ROOT: (&str, &str) = ("Capital of Fusion", "coff");

/// The school, directly under the root; the remaining planets orbit it.
pub(crate) const SCHOOL: PlanetSeed = PlanetSeed {
    name: "BachataVibe",
    slug: "bachatavibe",
    node_type: NodeType::Branch,
    description: "Nœud racine - École de Bachata",
    planet_type: PlanetType::Glass,
    planet_color: "#7c3aed",
    orbit_radius: 3.0,
    orbit_speed: 0.3,
    planet_scale: 0.8,
    rotation_speed: 1.2,
    orbit_phase: 0.0,
};

pub(crate) const PLANETS: &[PlanetSeed] = &[
    PlanetSeed {
        name: "Cours",
        slug: "cours",
        node_type: NodeType::Branch,
        description: "Cours de Bachata",
        planet_type: PlanetType::Chrome,
        planet_color: "#06b6d4",
        orbit_radius: 5.0,
        orbit_speed: 0.25,
        planet_scale: 0.6,
        rotation_speed: 0.8,
        orbit_phase: PI,
    },
    PlanetSeed {
        name: "Événements",
        slug: "evenements",
        node_type: NodeType::Event,
        description: "Événements et soirées",
        planet_type: PlanetType::Wire,
        planet_color: "#f59e0b",
        orbit_radius: 7.0,
        orbit_speed: 0.2,
        planet_scale: 0.9,
        rotation_speed: 0.8,
        orbit_phase: PI / 2.0,
    },
    PlanetSeed {
        name: "Boutique",
        slug: "boutique",
        node_type: NodeType::Branch,
        description: "Boutique en ligne",
        planet_type: PlanetType::Dotted,
        planet_color: "#ec4899",
        orbit_radius: 9.0,
        orbit_speed: 0.15,
        planet_scale: 0.7,
        rotation_speed: 1.2,
        orbit_phase: PI * 1.5,
    },
    PlanetSeed {
        name: "Communauté",
        slug: "communaute",
        node_type: NodeType::Branch,
        description: "Réseau social et communauté",
        planet_type: PlanetType::Network,
        planet_color: "#10b981",
        orbit_radius: 11.0,
        orbit_speed: 0.12,
        planet_scale: 1.0,
        rotation_speed: 0.6,
        orbit_phase: PI / 4.0,
    },
    PlanetSeed {
        name: "À propos",
        slug: "apropos",
        node_type: NodeType::Branch,
        description: "Informations sur l'école",
        planet_type: PlanetType::Star,
        planet_color: "#8b5cf6",
        orbit_radius: 13.0,
        orbit_speed: 0.1,
        planet_scale: 0.85,
        rotation_speed: 1.0,
        orbit_phase: PI * 1.25,
    },
];

/// `(name, slug, sub-styles)`
pub(crate) const DANCE_STYLES: &[(&str, &str, &[(&str, &str)])] = &[(
    "Bachata",
    "bachata",
    &[("Bachata Sensual", "bachata-sensual"), ("Bachata Moderna", "bachata-moderna")],
)];

/// `(name, slug, order, color)`
pub(crate) const LEVELS: &[(&str, &str, i32, &str)] = &[
    ("Débutant", "debutant", 1, "#3b82f6"),
    ("Intermédiaire", "intermediaire", 2, "#10b981"),
    ("Avancé", "avance", 3, "#ef4444"),
];

/// A weekly slot: `(day_of_week, (start h, m), (end h, m), location)`.
pub(crate) type SlotSeed = (i16, (u32, u32), (u32, u32), &'static str);

/// Courses reference their style, level and organization node by slug.
pub(crate) struct CourseSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub style: &'static str,
    pub level: &'static str,
    pub node: &'static str,
    pub schedules: &'static [SlotSeed],
}

pub(crate) const COURSES: &[CourseSeed] = &[CourseSeed {
    name: "Bachata Débutant - Lundi",
    slug: "bachata-debutant-lundi",
    description: "Apprenez les bases de la Bachata dans une ambiance conviviale. \
                  Pas de base, tours simples et connexion.",
    style: "bachata",
    level: "debutant",
    node: "bachatavibe",
    schedules: &[(0, (19, 30), (20, 30), "Studio Vibe")],
}];

/// Dates are relative to the day the seed runs.
pub(crate) struct EventSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub event_type: EventType,
    pub description: &'static str,
    pub starts_in_days: i64,
    pub duration_days: i64,
    pub location_name: &'static str,
    pub node: &'static str,
    /// `(name, price_cents, quantity_available)`
    pub passes: &'static [(&'static str, i64, i32)],
}

pub(crate) const EVENTS: &[EventSeed] = &[EventSeed {
    name: "Bachata Vibe Festival 2026",
    slug: "bachata-vibe-festival-2026",
    event_type: EventType::Festival,
    description: "Le plus gros festival de Bachata de l'année. Workshops avec les meilleurs \
                  profs internationaux, soirées mémorables et shows.",
    starts_in_days: 60,
    duration_days: 3,
    location_name: "Hôtel de Ville, Lyon",
    node: "bachatavibe",
    passes: &[("Full Pass Early Bird", 8_900, 50), ("Full Pass Regular", 12_000, 200)],
}];

/// `(name, slug, description, price_cents, stock)`
pub(crate) const PRODUCTS: &[(&str, &str, &str, i64, i32)] = &[
    (
        "T-Shirt BachataVibe V4",
        "tshirt-bachatavibe-v4",
        "T-shirt premium 100% coton bio. Coupe moderne.",
        2_500,
        100,
    ),
    ("Hoodie Fusion Black", "hoodie-fusion-black", "Hoodie ultra-confort pour vos workshops.", 4_500, 50),
    (
        "Chaussures de Danse Pro",
        "chaussures-danse-pro",
        "Spécialement conçues pour le pivot et le confort.",
        8_900,
        20,
    ),
    ("Pack de Stickers Cosmic", "stickers-cosmic", "Brillez avec nos stickers holographiques.", 500, 500),
];
