//! Compass directions and the axis each one is measured along.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeographicalOrientation {
    Latitude,
    Longitude,
}

impl CardinalDirection {
    /// North/South map to the longitude axis, East/West to latitude.
    pub fn orientation(self) -> GeographicalOrientation {
        match self {
            CardinalDirection::North | CardinalDirection::South => {
                GeographicalOrientation::Longitude
            }
            CardinalDirection::East | CardinalDirection::West => GeographicalOrientation::Latitude,
        }
    }
}

impl From<CardinalDirection> for GeographicalOrientation {
    fn from(direction: CardinalDirection) -> Self {
        direction.orientation()
    }
}
