//! Spherical geometry for route legs: distances, courses and cross-track projection.
//!
//! All functions take coordinates in decimal degrees and work on a sphere of
//! radius [`EARTH_RADIUS_M`]. Distances are returned in meters.

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Segments shorter than this are treated as a single point.
const ZERO_LENGTH_M: f64 = 1e-6;

/// Calculate distance between two points in meters using Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Calculate the initial course from point 1 to point 2 in radians.
/// Returns course in radians, 0 = north, π/2 = east. Coincident points give 0.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let x = delta_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    x.atan2(y)
}

/// Point reached by flying `distance_m` along the great circle that leaves
/// (`lat`, `lon`) on initial course `course_rad` (0 = north, π/2 = east).
/// Returns (lat, lon) in degrees, longitude normalized to [-180, 180).
pub fn destination_point(lat: f64, lon: f64, distance_m: f64, course_rad: f64) -> (f64, f64) {
    let angular_dist = distance_m / EARTH_RADIUS_M;
    let (sin_phi1, cos_phi1) = lat.to_radians().sin_cos();
    let (sin_dist, cos_dist) = angular_dist.sin_cos();

    let sin_phi2 =
        (sin_phi1 * cos_dist + cos_phi1 * sin_dist * course_rad.cos()).clamp(-1.0, 1.0);
    let dlambda = (course_rad.sin() * sin_dist * cos_phi1).atan2(cos_dist - sin_phi1 * sin_phi2);

    let lon2 = (lon + dlambda.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    (sin_phi2.asin().to_degrees(), lon2)
}

/// Projection of a point onto the great circle through a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossTrack {
    /// Signed perpendicular distance in meters. Positive is right of the
    /// course from segment start to segment end, negative is left.
    pub distance_m: f64,
    /// Distance in meters from the segment start to the foot of the
    /// perpendicular. Negative when the foot lies behind the start.
    pub along_track_m: f64,
    /// Segment length in meters.
    pub segment_length_m: f64,
    /// True if the foot of the perpendicular lies on the segment.
    pub valid: bool,
}

/// Calculate the cross-track distance from a point to a great-circle segment.
///
/// The projection is `valid` only when its along-track position lies within
/// `[-tolerance_m, segment_length + tolerance_m]`. A zero-length segment never
/// yields a valid projection; `distance_m` then holds the direct distance to
/// the segment start.
///
/// # Arguments
/// * `point_lat`, `point_lon` - The point to project
/// * `seg_start_lat`, `seg_start_lon` - Segment start
/// * `seg_end_lat`, `seg_end_lon` - Segment end
/// * `tolerance_m` - Slack applied to both segment ends for the validity check
pub fn cross_track_distance(
    point_lat: f64,
    point_lon: f64,
    seg_start_lat: f64,
    seg_start_lon: f64,
    seg_end_lat: f64,
    seg_end_lon: f64,
    tolerance_m: f64,
) -> CrossTrack {
    let segment_length_m =
        haversine_distance(seg_start_lat, seg_start_lon, seg_end_lat, seg_end_lon);
    let start_to_point_m = haversine_distance(seg_start_lat, seg_start_lon, point_lat, point_lon);

    if segment_length_m < ZERO_LENGTH_M {
        return CrossTrack {
            distance_m: start_to_point_m,
            along_track_m: 0.0,
            segment_length_m,
            valid: false,
        };
    }

    let angular_dist = start_to_point_m / EARTH_RADIUS_M;
    let course_to_point = bearing(seg_start_lat, seg_start_lon, point_lat, point_lon);
    let course_of_segment = bearing(seg_start_lat, seg_start_lon, seg_end_lat, seg_end_lon);
    let delta = course_to_point - course_of_segment;

    let xtd = (angular_dist.sin() * delta.sin()).clamp(-1.0, 1.0).asin();
    // tan(atd) = tan(d13) * cos(delta); atan2 keeps precision near the segment ends
    let atd = (angular_dist.sin() * delta.cos()).atan2(angular_dist.cos());

    let along_track_m = atd * EARTH_RADIUS_M;
    let valid = along_track_m >= -tolerance_m && along_track_m <= segment_length_m + tolerance_m;

    CrossTrack {
        distance_m: xtd * EARTH_RADIUS_M,
        along_track_m,
        segment_length_m,
        valid,
    }
}
