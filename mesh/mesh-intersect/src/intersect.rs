//! Signed-area intersection test and whole-shape query.

use nalgebra::{Point3, Vector3};
use tracing::trace;

use mesh_types::{Shape, Triangle};

use crate::Instrument;

/// Signed area of edge `(x1, x2)` relative to the line through `origin`
/// with direction `direction`.
///
/// Computes `0.5 * dot(cross(x1 - origin, x2 - origin), direction)` — the
/// signed volume of the tetrahedron spanned by the edge and the line
/// direction. The sign says which side of the line the edge falls on; the
/// triangle test below accepts either consistent sign, so winding does not
/// matter.
#[inline]
#[must_use]
pub fn signed_area(
    x1: &Point3<f64>,
    x2: &Point3<f64>,
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
) -> f64 {
    0.5 * (x1 - origin).cross(&(x2 - origin)).dot(direction)
}

/// Intersection of the line `(origin, direction)` with a triangle.
///
/// The line pierces the triangle when the three edge signed areas share a
/// sign (all ≤ 0 or all ≥ 0); the intersection point is then the
/// barycentric combination of the corners weighted by the opposite-edge
/// areas.
///
/// Returns `None` when the signs disagree, and also when the area sum is
/// zero — a line parallel to the triangle's plane or a degenerate
/// triangle — rather than dividing by zero.
///
/// # Example
///
/// ```
/// use mesh_intersect::triangle_line_intersection;
/// use mesh_types::{Point3, Triangle, Vector3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
/// );
///
/// // Straight up through the interior
/// let hit = triangle_line_intersection(&tri, &Point3::new(0.25, 0.25, 0.0), &Vector3::z());
/// assert!(hit.is_some());
///
/// // Well outside the plane-projected bounds
/// let miss = triangle_line_intersection(&tri, &Point3::new(5.0, 5.0, 0.0), &Vector3::z());
/// assert!(miss.is_none());
/// ```
#[must_use]
pub fn triangle_line_intersection(
    tri: &Triangle,
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
) -> Option<Point3<f64>> {
    let a1 = signed_area(&tri.v1, &tri.v2, origin, direction);
    let a2 = signed_area(&tri.v2, &tri.v0, origin, direction);
    let a3 = signed_area(&tri.v0, &tri.v1, origin, direction);

    let all_non_positive = a1 <= 0.0 && a2 <= 0.0 && a3 <= 0.0;
    let all_non_negative = a1 >= 0.0 && a2 >= 0.0 && a3 >= 0.0;
    if !(all_non_positive || all_non_negative) {
        return None;
    }

    let sum = a1 + a2 + a3;
    if sum == 0.0 {
        // Line parallel to the triangle plane, or degenerate triangle.
        return None;
    }

    let num = tri.v0.coords * a1 + tri.v1.coords * a2 + tri.v2.coords * a3;
    Some(Point3::from(num / sum))
}

/// Find the intersection of an instrument with a shape.
///
/// Every triangle is tested; among the hits, the winner is the one whose
/// intersection point lies closest to the instrument's
/// [forward reference point](Instrument::forward_reference). This selects
/// the near-side or far-side hit consistently with the instrument's
/// declared direction instead of the hit nearest the probe origin.
///
/// O(triangle count) per query; ties keep the first hit encountered.
///
/// # Example
///
/// ```
/// use mesh_intersect::{find_intersection, Instrument};
/// use mesh_types::{seeds, Point3, Vector3};
///
/// let cube = seeds::cube();
/// let probe = Instrument::new(Point3::origin(), Vector3::z(), 1);
///
/// // From the cube's center, probing +Z forward, the hit is on the +z face.
/// let hit = find_intersection(&cube, &probe);
/// assert!(hit.is_some_and(|p| (p.z - 1.0).abs() < 1e-10));
/// ```
#[must_use]
pub fn find_intersection(shape: &Shape, instrument: &Instrument) -> Option<Point3<f64>> {
    let reference = instrument.forward_reference();

    let mut best: Option<Point3<f64>> = None;
    let mut best_distance = f64::INFINITY;

    for tri in shape.triangles() {
        if let Some(point) = triangle_line_intersection(&tri, &instrument.point, &instrument.slope)
        {
            let distance = (reference - point).norm();
            if distance < best_distance {
                best = Some(point);
                best_distance = distance;
            }
        }
    }

    trace!(
        hit = best.is_some(),
        triangles = shape.face_count(),
        "intersection query"
    );

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn xy_triangle(z: f64) -> Triangle {
        Triangle::new(
            Point3::new(-1.0, -1.0, z),
            Point3::new(1.0, -1.0, z),
            Point3::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn miss_outside_projected_bounds() {
        let tri = xy_triangle(0.0);
        let hit = triangle_line_intersection(&tri, &Point3::new(10.0, 10.0, -1.0), &Vector3::z());
        assert!(hit.is_none());
    }

    #[test]
    fn centroid_hit_along_normal() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );
        let centroid = tri.centroid();
        let normal = tri.normal();
        assert!(normal.is_some());
        let normal = normal.map_or(Vector3::zeros(), |n| n);

        // Cast from below the plane, straight along the normal through the centroid
        let origin = centroid - normal;
        let hit = triangle_line_intersection(&tri, &origin, &normal);
        assert!(hit.is_some());
        let p = hit.map_or(Point3::origin(), |p| p);
        assert_relative_eq!(p.x, centroid.x, epsilon = 1e-10);
        assert_relative_eq!(p.y, centroid.y, epsilon = 1e-10);
        assert_relative_eq!(p.z, centroid.z, epsilon = 1e-10);
    }

    #[test]
    fn winding_does_not_matter() {
        let tri = xy_triangle(1.0);
        let flipped = Triangle::new(tri.v0, tri.v2, tri.v1);
        let origin = Point3::new(0.0, 0.0, 0.0);

        assert!(triangle_line_intersection(&tri, &origin, &Vector3::z()).is_some());
        assert!(triangle_line_intersection(&flipped, &origin, &Vector3::z()).is_some());
    }

    #[test]
    fn parallel_line_is_no_hit() {
        // Line lies in the triangle's plane: all signed areas are zero,
        // the barycentric denominator vanishes, and the test must decline
        // instead of dividing.
        let tri = xy_triangle(0.0);
        let hit = triangle_line_intersection(&tri, &Point3::new(0.0, 0.0, 0.0), &Vector3::x());
        assert!(hit.is_none());
    }

    #[test]
    fn degenerate_triangle_is_no_hit() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        let hit = triangle_line_intersection(&tri, &Point3::new(0.5, -1.0, 0.0), &Vector3::z());
        assert!(hit.is_none());
    }

    #[test]
    fn direction_sign_selects_forward_hit() {
        // Two parallel triangles pierced by the same line; the direction
        // sign decides which one is "forward".
        let near = xy_triangle(0.0);
        let far = xy_triangle(5.0);
        let mut shape = Shape::new();
        for tri in [near, far] {
            let base = u32::try_from(shape.vertices.len()).unwrap_or(0);
            shape.vertices.extend(tri.vertices());
            shape.faces.push([base, base + 1, base + 2]);
        }

        let origin = Point3::new(0.0, -0.5, -1.0);

        let forward = Instrument::new(origin, Vector3::z(), 1);
        let hit = find_intersection(&shape, &forward);
        assert!(hit.is_some_and(|p| (p.z - 5.0).abs() < 1e-10));

        let backward = Instrument::new(origin, Vector3::z(), -1);
        let hit = find_intersection(&shape, &backward);
        assert!(hit.is_some_and(|p| p.z.abs() < 1e-10));
    }

    #[test]
    fn empty_shape_has_no_intersection() {
        let shape = Shape::new();
        let probe = Instrument::default();
        assert!(find_intersection(&shape, &probe).is_none());
    }

    #[test]
    fn cube_center_probe_hits_plus_z_face() {
        let cube = mesh_types::seeds::cube();
        let probe = Instrument::new(Point3::origin(), Vector3::z(), 1);
        let hit = find_intersection(&cube, &probe);
        assert!(hit.is_some());
        let p = hit.map_or(Point3::origin(), |p| p);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-10);
    }
}
