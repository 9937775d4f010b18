use serde::{Deserialize, Serialize};

/// The kind of transportation infrastructure being assessed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    BikeLane,
    ProtectedBikeLane,
    CycleTrack,
    Sidewalk,
    PedestrianPlaza,
    BusLane,
    BrtCorridor,
    CompleteStreet,
    TransitHub,
    RoadDiet,
}

impl ProjectType {
    pub const ALL: [ProjectType; 10] = [
        ProjectType::BikeLane,
        ProjectType::ProtectedBikeLane,
        ProjectType::CycleTrack,
        ProjectType::Sidewalk,
        ProjectType::PedestrianPlaza,
        ProjectType::BusLane,
        ProjectType::BrtCorridor,
        ProjectType::CompleteStreet,
        ProjectType::TransitHub,
        ProjectType::RoadDiet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::BikeLane => "Bike Lane",
            ProjectType::ProtectedBikeLane => "Protected Bike Lane",
            ProjectType::CycleTrack => "Cycle Track",
            ProjectType::Sidewalk => "Sidewalk Expansion",
            ProjectType::PedestrianPlaza => "Pedestrian Plaza",
            ProjectType::BusLane => "Bus Lane",
            ProjectType::BrtCorridor => "BRT Corridor",
            ProjectType::CompleteStreet => "Complete Street",
            ProjectType::TransitHub => "Transit Hub",
            ProjectType::RoadDiet => "Road Diet",
        }
    }
}

/// The land-use context of the project
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    #[default]
    Urban,
    Suburban,
    Rural,
    Mixed,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Urban,
        Location::Suburban,
        Location::Rural,
        Location::Mixed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Location::Urban => "Urban Core",
            Location::Suburban => "Suburban",
            Location::Rural => "Rural",
            Location::Mixed => "Mixed Context",
        }
    }
}

/// The climate region, which drives tree sequestration rates
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    Northeast,
    Midwest,
    South,
    West,
    Pacific,
    International,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Northeast,
        Region::Midwest,
        Region::South,
        Region::West,
        Region::Pacific,
        Region::International,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::West => "West",
            Region::Pacific => "Pacific",
            Region::International => "International",
        }
    }
}

/// A travel mode of a [`crate::ModalSplit`]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Car,
    Transit,
    Bike,
    Walk,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Car, Mode::Transit, Mode::Bike, Mode::Walk];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Car => "Car",
            Mode::Transit => "Transit",
            Mode::Bike => "Bicycle",
            Mode::Walk => "Walking",
        }
    }
}
