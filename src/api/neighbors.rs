use crate::api::region::Region;
use crate::util::error::GeohashError;
use serde::{Deserialize, Serialize};

/// Compass direction of a neighboring cell.
///
/// Declaration order is the order neighbors are produced in: latitude
/// offset outermost (south to north), longitude offset innermost (west to
/// east).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    SouthWest,
    South,
    SouthEast,
    West,
    East,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// `(dlat, dlng)` in cells.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::SouthWest => (-1, -1),
            Direction::South => (-1, 0),
            Direction::SouthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (1, -1),
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
        }
    }
}

/// The eight cells around a geohash.
///
/// A slot is empty when that neighbor does not exist, e.g. north of a cell
/// touching the north pole.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbors {
    slots: [Option<Region>; 8],
}

impl Neighbors {
    pub fn get(&self, direction: Direction) -> Option<&Region> {
        self.slots[direction as usize].as_ref()
    }

    /// Every direction with its region, in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<&Region>)> {
        Direction::ALL
            .into_iter()
            .zip(self.slots.iter().map(Option::as_ref))
    }

    /// Regions that exist, in [`Direction::ALL`] order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.slots.iter().flatten()
    }

    /// Hashes of the regions that exist, in [`Direction::ALL`] order.
    pub fn hashes(&self) -> Vec<&str> {
        self.regions().map(|r| r.hash.as_str()).collect()
    }

    /// Number of neighbors that exist.
    pub fn len(&self) -> usize {
        self.regions().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_slots(self) -> [Option<Region>; 8] {
        self.slots
    }
}

/// Moves `origin` one step in every direction and re-encodes each moved
/// center with `reencode`.
///
/// `step_lat` and `step_lng` are the full cell height and width. A direction
/// whose moved bounds cannot be validated, or whose center fails to
/// re-encode, is left empty without affecting the others.
pub(crate) fn find_neighbors<F>(
    origin: &Region,
    step_lat: f64,
    step_lng: f64,
    reencode: F,
) -> Neighbors
where
    F: Fn(f64, f64) -> Result<Region, GeohashError>,
{
    let slots = Direction::ALL.map(|direction| {
        let (dlat, dlng) = direction.offset();
        let moved = origin
            .bounds
            .translate(f64::from(dlat) * step_lat, f64::from(dlng) * step_lng);

        let neighbor = moved.normalized().and_then(|bounds| {
            let (lat, lng) = bounds.center(origin.precision);
            reencode(lat, lng)
        });
        match neighbor {
            Ok(region) => Some(region),
            Err(e) => {
                log::debug!("No {:?} neighbor for {:?}: {}", direction, origin.hash, e);
                None
            }
        }
    });

    Neighbors { slots }
}
