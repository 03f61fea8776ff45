//! Map viewport geometry for a set of issues. Rendering is someone else's job.

use crate::issue::{Coordinates, Issue};
use serde::{Deserialize, Serialize};

/// City centre used when there is nothing to frame.
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(18.5204, 73.8567);

/// Fraction of the span added on each side when framing markers.
pub const DEFAULT_BOUNDS_PAD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl Bounds {
    pub fn contains(&self, c: Coordinates) -> bool {
        c.lat >= self.south_west.lat
            && c.lat <= self.north_east.lat
            && c.lng >= self.south_west.lng
            && c.lng <= self.north_east.lng
    }
}

/// First issue's position, or the default centre.
pub fn map_center(issues: &[Issue]) -> Coordinates {
    issues.first().map(|i| i.coordinates).unwrap_or(DEFAULT_CENTER)
}

/// Smallest box around every issue, grown by `pad` × span per side.
pub fn map_bounds(issues: &[Issue], pad: f64) -> Option<Bounds> {
    let first = issues.first()?.coordinates;
    let (mut min, mut max) = (first, first);
    for c in issues.iter().map(|i| i.coordinates) {
        min.lat = min.lat.min(c.lat);
        min.lng = min.lng.min(c.lng);
        max.lat = max.lat.max(c.lat);
        max.lng = max.lng.max(c.lng);
    }

    let dlat = (max.lat - min.lat) * pad;
    let dlng = (max.lng - min.lng) * pad;
    Some(Bounds {
        south_west: Coordinates::new(min.lat - dlat, min.lng - dlng),
        north_east: Coordinates::new(max.lat + dlat, max.lng + dlng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn empty_set_centres_on_city() {
        assert_eq!(map_center(&[]), DEFAULT_CENTER);
        assert!(map_bounds(&[], DEFAULT_BOUNDS_PAD).is_none());
    }

    #[test]
    fn padded_bounds_contain_every_issue() {
        let issues = seed::issues();
        let tight = map_bounds(&issues, 0.0).unwrap();
        let padded = map_bounds(&issues, DEFAULT_BOUNDS_PAD).unwrap();

        assert_eq!(tight.south_west.lat, 18.5006);
        assert_eq!(tight.north_east.lng, 73.9138);
        assert!(padded.south_west.lat < tight.south_west.lat);
        assert!(padded.north_east.lng > tight.north_east.lng);
        for issue in &issues {
            assert!(padded.contains(issue.coordinates), "{} outside bounds", issue.id);
        }
    }

    #[test]
    fn single_issue_bounds_collapse_to_point() {
        let seeded = seed::issues();
        let issues = &seeded[..1];
        let b = map_bounds(issues, DEFAULT_BOUNDS_PAD).unwrap();
        assert_eq!(b.south_west, b.north_east);
        assert_eq!(map_center(issues), issues[0].coordinates);
    }
}
