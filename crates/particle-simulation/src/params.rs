//! Theme parameters for the six page backdrops

use glam::Vec2;
use particle_physics::{DOT_REPULSION_STRENGTH, REPULSION_STRENGTH};
use particle_shapes::{palette, Color, Dash, ShapeKind, Tint};
use std::fmt;
use std::str::FromStr;

/// Everything that distinguishes one backdrop from another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeParams {
    pub name: &'static str,
    /// Number of particles spawned once the surface is laid out
    pub population: usize,
    /// Pointer interaction radius in pixels
    pub pointer_radius: f32,
    /// Maximum distance at which two particles are linked
    pub connection_radius: f32,
    /// Spawn velocity bound: each axis is drawn from `[-speed/2, speed/2)`
    pub speed: f32,
    /// Particle size range `[min, max)`
    pub size_range: (f32, f32),
    /// Multiplier on the pointer falloff
    pub repulsion_strength: f32,
    /// Shape kinds drawn uniformly at spawn
    pub kinds: &'static [ShapeKind],

    // Connection lines
    pub link_color: Color,
    pub link_alpha: f32,
    pub link_width: f32,
    pub link_dash: Option<Dash>,
    /// Offset added to both endpoints of every link
    pub link_anchor: Vec2,
}

impl Default for ThemeParams {
    fn default() -> Self {
        HOME
    }
}

const HOME_KINDS: &[ShapeKind] = &[
    ShapeKind::Dot(Tint::Blue),
    ShapeKind::Dot(Tint::Violet),
    ShapeKind::Dot(Tint::Emerald),
    ShapeKind::Dot(Tint::White),
];

const ALU_KINDS: &[ShapeKind] = &[
    ShapeKind::LogicAnd,
    ShapeKind::LogicOr,
    ShapeKind::LogicXor,
    ShapeKind::LogicNot,
    ShapeKind::BitOne,
    ShapeKind::BitZero,
];

const ECE_KINDS: &[ShapeKind] = &[
    ShapeKind::Resistor,
    ShapeKind::Capacitor,
    ShapeKind::Diode,
    ShapeKind::SchematicAnd,
    ShapeKind::SchematicNot,
    ShapeKind::SchematicOr,
];

const DRONE_KINDS: &[ShapeKind] = &[
    ShapeKind::Drone,
    ShapeKind::Parcel,
    ShapeKind::LocationPin,
    ShapeKind::MedicalCross,
];

const SENTIMENT_KINDS: &[ShapeKind] = &[ShapeKind::Smile, ShapeKind::Frown, ShapeKind::Neutral];

const ROUTINE_KINDS: &[ShapeKind] = &[
    ShapeKind::Clock,
    ShapeKind::Calendar,
    ShapeKind::VideoCall,
    ShapeKind::ChainLink,
    ShapeKind::Envelope,
];

pub const HOME: ThemeParams = ThemeParams {
    name: "home",
    population: 60,
    pointer_radius: 150.0,
    connection_radius: 120.0,
    speed: 0.5,
    size_range: (1.0, 3.0),
    repulsion_strength: DOT_REPULSION_STRENGTH,
    kinds: HOME_KINDS,
    link_color: palette::SLATE_400,
    link_alpha: 0.1,
    link_width: 0.5,
    link_dash: None,
    link_anchor: Vec2::ZERO,
};

pub const ALU: ThemeParams = ThemeParams {
    name: "alu",
    population: 35,
    pointer_radius: 180.0,
    connection_radius: 150.0,
    speed: 0.35,
    size_range: (14.0, 22.0),
    repulsion_strength: REPULSION_STRENGTH,
    kinds: ALU_KINDS,
    link_color: palette::BLUE_500,
    link_alpha: 0.1,
    link_width: 1.0,
    link_dash: None,
    link_anchor: Vec2::ZERO,
};

pub const ECE: ThemeParams = ThemeParams {
    name: "ece",
    population: 40,
    pointer_radius: 180.0,
    connection_radius: 150.0,
    speed: 0.3,
    size_range: (20.0, 30.0),
    repulsion_strength: REPULSION_STRENGTH,
    kinds: ECE_KINDS,
    link_color: palette::SLATE_400,
    link_alpha: 0.15,
    link_width: 1.0,
    link_dash: None,
    link_anchor: Vec2::ZERO,
};

pub const DRONE: ThemeParams = ThemeParams {
    name: "drone",
    population: 25,
    pointer_radius: 200.0,
    connection_radius: 180.0,
    speed: 0.5,
    size_range: (15.0, 25.0),
    repulsion_strength: REPULSION_STRENGTH,
    kinds: DRONE_KINDS,
    link_color: palette::SKY_TRACE,
    link_alpha: 0.1,
    link_width: 1.0,
    link_dash: Some(Dash::new(5.0, 5.0)),
    link_anchor: Vec2::ZERO,
};

pub const SENTIMENT: ThemeParams = ThemeParams {
    name: "sentiment",
    population: 40,
    pointer_radius: 180.0,
    connection_radius: 140.0,
    speed: 0.4,
    size_range: (14.0, 22.0),
    repulsion_strength: REPULSION_STRENGTH,
    kinds: SENTIMENT_KINDS,
    link_color: palette::WHITE,
    link_alpha: 0.05,
    link_width: 1.0,
    link_dash: None,
    // Emoticons are anchored at their left baseline
    link_anchor: Vec2::new(10.0, -5.0),
};

pub const ROUTINE: ThemeParams = ThemeParams {
    name: "routine",
    population: 20,
    pointer_radius: 200.0,
    connection_radius: 160.0,
    speed: 0.3,
    size_range: (14.0, 22.0),
    repulsion_strength: REPULSION_STRENGTH,
    kinds: ROUTINE_KINDS,
    link_color: palette::PERIWINKLE,
    link_alpha: 0.1,
    link_width: 1.0,
    link_dash: None,
    link_anchor: Vec2::ZERO,
};

/// The page a backdrop belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Theme {
    /// Landing page: plain colored dots
    #[default]
    Home,
    /// Arithmetic logic unit project: logic gates and bits
    Alu,
    /// Electronics: schematic components
    Ece,
    /// Delivery drones
    Drone,
    /// Sentiment analysis: emoticons
    Sentiment,
    /// Scheduling assistant
    Routine,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Home,
        Theme::Alu,
        Theme::Ece,
        Theme::Drone,
        Theme::Sentiment,
        Theme::Routine,
    ];

    pub const fn params(self) -> ThemeParams {
        match self {
            Theme::Home => HOME,
            Theme::Alu => ALU,
            Theme::Ece => ECE,
            Theme::Drone => DRONE,
            Theme::Sentiment => SENTIMENT,
            Theme::Routine => ROUTINE,
        }
    }

    pub const fn name(self) -> &'static str {
        self.params().name
    }

    /// Theme bound to a 1-based number key.
    pub fn from_number(n: usize) -> Option<Theme> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}
