//! Navigation geometry and CPA/TCPA kernel.
//!
//! Equirectangular range/bearing and a linear-velocity closest-approach
//! solver, operating on [`Pcs`] (position/course/speed) records. No great-
//! circle (geodesic) accuracy is attempted — this trades precision over
//! long baselines for the closed-form simplicity appropriate to
//! collision-avoidance ranges.

/// Earth radius in nautical miles, used by the equirectangular approximation.
pub const EARTH_RADIUS_NM: f64 = 3440.0;

fn rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

fn deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// A position/course/speed record: our own vessel's, or an observed
/// target's. `ns`/`es` are the derived north/east speed components (degrees
/// per hour), cached at construction time so repeated [`Pcs::at`] calls
/// don't re-derive trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pcs {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub cog: Option<f64>,
    pub sog: Option<f64>,
    ns: Option<f64>,
    es: Option<f64>,
}

impl Pcs {
    /// Builds a PCS record, deriving `ns`/`es` whenever `cog`, `sog` and
    /// `lat` are all present.
    pub fn new(lat: Option<f64>, lon: Option<f64>, cog: Option<f64>, sog: Option<f64>) -> Self {
        let (ns, es) = match (cog, sog, lat) {
            (Some(cog), Some(sog), Some(lat)) => {
                let cog_rad = rad(cog);
                let lat_rad = rad(lat);
                let ns = sog / 60.0 * cog_rad.cos();
                let es = sog / 60.0 * cog_rad.sin() / lat_rad.cos().abs();
                (Some(ns), Some(es))
            }
            _ => (None, None),
        };
        Pcs {
            lat,
            lon,
            cog,
            sog,
            ns,
            es,
        }
    }

    /// North speed component, degrees per hour.
    pub fn ns(&self) -> Option<f64> {
        self.ns
    }

    /// East speed component, degrees per hour. (Not `ns` — see the
    /// source's historical copy-paste bug this crate avoids.)
    pub fn es(&self) -> Option<f64> {
        self.es
    }

    /// Linear-motion position estimate at `t` hours from now: `(lon, lat)`.
    /// Absent iff either coordinate is absent.
    pub fn at(&self, t: f64) -> Option<(f64, f64)> {
        let lon = self.lon?;
        let lat = self.lat?;
        let ns = self.ns.unwrap_or(0.0);
        let es = self.es.unwrap_or(0.0);
        Some((lon + es * t, lat + ns * t))
    }
}

/// Equirectangular range between two lat/lon points, in nautical miles.
pub fn range(a_lat: f64, a_lon: f64, b_lat: f64, b_lon: f64) -> f64 {
    let a_lat_r = rad(a_lat);
    let b_lat_r = rad(b_lat);
    let x = (rad(b_lon) - rad(a_lon)) * ((a_lat_r + b_lat_r) / 2.0).cos();
    let y = b_lat_r - a_lat_r;
    EARTH_RADIUS_NM * (x * x + y * y).sqrt()
}

/// Initial bearing from `a` to `b`, in degrees true, normalised to `[0, 360)`.
pub fn bearing(a_lat: f64, a_lon: f64, b_lat: f64, b_lon: f64) -> f64 {
    let a_lat_r = rad(a_lat);
    let b_lat_r = rad(b_lat);
    let delta_lon = rad(b_lon - a_lon);
    let y = delta_lon.sin() * b_lat_r.cos();
    let x = a_lat_r.cos() * b_lat_r.sin() - a_lat_r.sin() * b_lat_r.cos() * delta_lon.cos();
    (360.0 + deg(y.atan2(x))) % 360.0
}

/// Time (hours) until closest point of approach between `us` and `them`.
/// Absent if `us.cog` is absent or either position is absent. Divergent
/// courses produce a negative TCPA (closest approach was in the past).
pub fn tcpa(us: &Pcs, them: &Pcs) -> Option<f64> {
    us.cog?;
    let (us_lon, us_lat) = us.at(0.0)?;
    let (them_lon, them_lat) = them.at(0.0)?;
    let dv_e = us.es.unwrap_or(0.0) - them.es.unwrap_or(0.0);
    let dv_n = us.ns.unwrap_or(0.0) - them.ns.unwrap_or(0.0);
    let dv_sq = dv_e * dv_e + dv_n * dv_n;
    if dv_sq == 0.0 {
        return Some(0.0);
    }
    let d_lon = us_lon - them_lon;
    let d_lat = us_lat - them_lat;
    Some(-(d_lon * dv_e + d_lat * dv_n) / dv_sq)
}

/// Distance between `us` and `them` at time `t` (hours from now), in
/// nautical miles. Absent if `us.cog` is absent or `t` is absent.
pub fn distance(us: &Pcs, them: &Pcs, t: Option<f64>) -> Option<f64> {
    us.cog?;
    let t = t?;
    let (us_lon, us_lat) = us.at(t)?;
    let (them_lon, them_lat) = them.at(t)?;
    let d_lon = us_lon - them_lon;
    let d_lat = us_lat - them_lat;
    Some((d_lon * d_lon + d_lat * d_lat).sqrt() * 60.0)
}

/// Closest point of approach, in nautical miles, evaluated at `t` (or at
/// `tcpa(us, them)` if `t` is `None`).
pub fn cpa(us: &Pcs, them: &Pcs, t: Option<f64>) -> Option<f64> {
    distance(us, them, t.or_else(|| tcpa(us, them)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::f64_close;

    #[test]
    fn range_of_point_to_itself_is_zero() {
        assert!(range(50.1, -1.3, 50.1, -1.3).abs() < 1e-9);
    }

    #[test]
    fn bearing_of_point_to_itself_is_zero() {
        assert_eq!(bearing(50.1, -1.3, 50.1, -1.3), 0.0);
    }

    #[test]
    fn range_matches_known_value() {
        f64_close(range(50.1, -1.3, 50.4, -1.6), 20.0, 0.1);
    }

    #[test]
    fn bearing_matches_known_value() {
        f64_close(bearing(50.1, -1.3, 50.4, -1.6), 330.7, 0.5);
    }

    #[test]
    fn bearing_is_reciprocal_for_small_separations() {
        let fwd = bearing(50.0, -1.0, 50.01, -1.01);
        let back = bearing(50.01, -1.01, 50.0, -1.0);
        let diff = (fwd + 180.0 - back).rem_euclid(360.0);
        assert!(diff < 1.0, "expected near-180 reciprocal, got diff {}", diff);
    }

    #[test]
    fn tcpa_of_identical_track_is_zero() {
        let us = Pcs::new(Some(50.0), Some(-1.0), Some(90.0), Some(10.0));
        assert_eq!(tcpa(&us, &us), Some(0.0));
    }

    #[test]
    fn tcpa_absent_without_own_course() {
        let us = Pcs::new(Some(50.0), Some(-1.0), None, None);
        let them = Pcs::new(Some(50.1), Some(-1.0), Some(180.0), Some(10.0));
        assert_eq!(tcpa(&us, &them), None);
        assert_eq!(distance(&us, &them, Some(0.0)), None);
    }

    #[test]
    fn collision_course_converges_near_zero_cpa() {
        let us = Pcs::new(Some(50.0), Some(-1.0), Some(0.0), Some(10.0));
        let them = Pcs::new(Some(50.1), Some(-1.0), Some(180.0), Some(10.0));
        let t = tcpa(&us, &them).unwrap();
        f64_close(t, 0.3, 0.05);
        let closest = cpa(&us, &them, None).unwrap();
        f64_close(closest, 0.0, 0.5);
    }
}
