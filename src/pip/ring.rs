//! Ray-casting test for a single ring.

use crate::models::Coordinate;

/// Even-odd ray-casting test against one ring.
///
/// The ring is implicitly closed (last vertex joins the first). Comparisons
/// are exact: a point on an edge or vertex gets whatever the crossing
/// arithmetic yields for that vertex order. An empty ring contains nothing.
pub fn ring_contains(ring: &[Coordinate], point: Coordinate) -> bool {
    let Some(&last) = ring.last() else {
        return false;
    };

    let t_lon = point.longitude;
    let t_lat = point.latitude;

    let mut inside = false;
    let mut prev = last;
    for &cur in ring {
        let crosses = ((cur.longitude > t_lon) != (prev.longitude > t_lon))
            && (t_lat
                < (prev.latitude - cur.latitude) * (t_lon - cur.longitude)
                    / (prev.longitude - cur.longitude)
                    + cur.latitude);
        if crosses {
            inside = !inside;
        }
        prev = cur;
    }

    inside
}
