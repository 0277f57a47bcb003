//! Problem instance: facilities, satellites and the precomputed
//! connection-cost matrix.
//!
//! # Text format
//!
//! ```text
//! M S
//! x y opening_cost      (M lines, one per facility)
//! x y                   (S lines, one per satellite)
//! ```
//!
//! Values are whitespace-separated; tokens past the expected count on a
//! line are ignored.

use std::path::Path;
use std::str::FromStr;

use crate::cost::connection_cost;
use crate::error::{InstanceError, Result};

/// A coordinate pair in the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An immutable two-tier facility location instance.
///
/// The `M × S` connection-cost matrix is computed once at construction and
/// stored row-major (one row per facility).
#[derive(Debug, Clone)]
pub struct Instance {
    opening_costs: Vec<f64>,
    facilities: Vec<Point>,
    satellites: Vec<Point>,
    connection: Vec<f64>,
}

impl Instance {
    /// Builds an instance from raw data.
    ///
    /// Fails if there are no facilities, if `opening_costs` and
    /// `facilities` differ in length, if any value is non-finite, if an
    /// opening cost is negative, or if some facility-satellite distance
    /// overflows to infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_facility::instance::{Instance, Point};
    ///
    /// let instance = Instance::new(
    ///     vec![1.0, 100.0],
    ///     vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    ///     vec![Point::new(3.0, 4.0)],
    /// )
    /// .unwrap();
    /// assert_eq!(instance.facility_count(), 2);
    /// assert!((instance.connection_cost(0, 0) - 5.0).abs() < 1e-12);
    /// ```
    pub fn new(
        opening_costs: Vec<f64>,
        facilities: Vec<Point>,
        satellites: Vec<Point>,
    ) -> Result<Self> {
        if facilities.is_empty() {
            return Err(InstanceError::NoFacilities);
        }
        if opening_costs.len() != facilities.len() {
            return Err(InstanceError::LengthMismatch {
                what: "opening costs",
                expected: facilities.len(),
                actual: opening_costs.len(),
            });
        }
        for (index, (cost, point)) in opening_costs.iter().zip(&facilities).enumerate() {
            if !cost.is_finite() || !point.is_finite() {
                return Err(InstanceError::NonFinite {
                    what: "facility",
                    index,
                });
            }
            if *cost < 0.0 {
                return Err(InstanceError::NegativeCost { index, cost: *cost });
            }
        }
        if let Some(index) = satellites.iter().position(|p| !p.is_finite()) {
            return Err(InstanceError::NonFinite {
                what: "satellite",
                index,
            });
        }

        let connection: Vec<f64> = facilities
            .iter()
            .flat_map(|f| satellites.iter().map(move |s| connection_cost(*f, *s)))
            .collect();
        if let Some(at) = connection.iter().position(|d| !d.is_finite()) {
            return Err(InstanceError::UnboundedDistance {
                facility: at / satellites.len(),
                satellite: at % satellites.len(),
            });
        }

        Ok(Self {
            opening_costs,
            facilities,
            satellites,
            connection,
        })
    }

    /// Reads and parses an instance file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    /// Number of main facilities (`M`).
    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    /// Number of satellites (`S`).
    pub fn satellite_count(&self) -> usize {
        self.satellites.len()
    }

    /// Opening cost of one facility.
    pub fn opening_cost(&self, facility: usize) -> f64 {
        self.opening_costs[facility]
    }

    /// Opening costs of all facilities, indexed by facility.
    pub fn opening_costs(&self) -> &[f64] {
        &self.opening_costs
    }

    /// Facility coordinates.
    pub fn facilities(&self) -> &[Point] {
        &self.facilities
    }

    /// Satellite coordinates.
    pub fn satellites(&self) -> &[Point] {
        &self.satellites
    }

    /// Precomputed distance between `facility` and `satellite`.
    pub fn connection_cost(&self, facility: usize, satellite: usize) -> f64 {
        self.connection[facility * self.satellites.len() + satellite]
    }

    /// Row of the connection matrix for one facility.
    pub fn connection_row(&self, facility: usize) -> &[f64] {
        let s = self.satellites.len();
        &self.connection[facility * s..(facility + 1) * s]
    }
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (_, header) = lines
            .by_ref()
            .find(|(_, l)| !l.trim().is_empty())
            .ok_or(InstanceError::MissingHeader)?;
        let mut tokens = header.split_whitespace();
        let mut count = |name: &str| -> Result<usize> {
            let token = tokens
                .next()
                .ok_or_else(|| InstanceError::InvalidHeader(format!("missing {name}")))?;
            token
                .parse()
                .map_err(|_| InstanceError::InvalidHeader(format!("{name} = `{token}`")))
        };
        let m = count("facility count")?;
        let s = count("satellite count")?;
        if m == 0 {
            return Err(InstanceError::NoFacilities);
        }

        // Header counts are untrusted; grow past this as lines arrive.
        const PREALLOC: usize = 1024;
        let mut opening_costs = Vec::with_capacity(m.min(PREALLOC));
        let mut facilities = Vec::with_capacity(m.min(PREALLOC));
        for _ in 0..m {
            let [x, y, c] = next_values::<3>(&mut lines, "facility line `x y cost`")?;
            facilities.push(Point::new(x, y));
            opening_costs.push(c);
        }

        let mut satellites = Vec::with_capacity(s.min(PREALLOC));
        for _ in 0..s {
            let [x, y] = next_values::<2>(&mut lines, "satellite line `x y`")?;
            satellites.push(Point::new(x, y));
        }

        Instance::new(opening_costs, facilities, satellites)
    }
}

fn next_values<'a, const N: usize>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    expected: &'static str,
) -> Result<[f64; N]> {
    let (line, text) = lines
        .next()
        .ok_or(InstanceError::MissingLine { expected })?;
    let mut values = [0.0; N];
    let mut tokens = text.split_whitespace();
    for (found, slot) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or(InstanceError::MissingValues {
            line,
            expected: N,
            found,
        })?;
        *slot = token.parse().map_err(|_| InstanceError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "2 3\n0 0 1\n10 0 100\n3 4\n0 1\n-1 0\n";

    #[test]
    fn test_parse_small_instance() {
        let instance: Instance = SMALL.parse().unwrap();
        assert_eq!(instance.facility_count(), 2);
        assert_eq!(instance.satellite_count(), 3);
        assert_eq!(instance.opening_costs(), &[1.0, 100.0]);
        assert_eq!(instance.facilities()[1], Point::new(10.0, 0.0));
        assert_eq!(instance.satellites()[2], Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_connection_matrix_precomputed() {
        let instance: Instance = SMALL.parse().unwrap();
        assert!((instance.connection_cost(0, 0) - 5.0).abs() < 1e-12);
        assert!((instance.connection_cost(0, 1) - 1.0).abs() < 1e-12);
        assert!((instance.connection_cost(1, 2) - 11.0).abs() < 1e-12);
        assert_eq!(instance.connection_row(1).len(), 3);
        assert_eq!(instance.connection_row(1)[2], instance.connection_cost(1, 2));
    }

    #[test]
    fn test_parse_ignores_trailing_tokens_and_blank_tail() {
        let text = "1 1\n0 0 2 extra\n1 1 ignored\n\n\n";
        let instance: Instance = text.parse().unwrap();
        assert_eq!(instance.opening_cost(0), 2.0);
        assert_eq!(instance.satellites()[0], Point::new(1.0, 1.0));
    }

    #[test]
    fn test_parse_zero_satellites() {
        let instance: Instance = "1 0\n0 0 3\n".parse().unwrap();
        assert_eq!(instance.satellite_count(), 0);
        assert!(instance.connection_row(0).is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<Instance>(),
            Err(InstanceError::MissingHeader)
        ));
        assert!(matches!(
            "2\n".parse::<Instance>(),
            Err(InstanceError::InvalidHeader(_))
        ));
        assert!(matches!(
            "0 3\n".parse::<Instance>(),
            Err(InstanceError::NoFacilities)
        ));
        assert!(matches!(
            "2 0\n0 0 1\n".parse::<Instance>(),
            Err(InstanceError::MissingLine { .. })
        ));
        assert!(matches!(
            "1 1\n0 0\n1 1\n".parse::<Instance>(),
            Err(InstanceError::MissingValues {
                line: 2,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            "1 1\n0 zero 1\n1 1\n".parse::<Instance>(),
            Err(InstanceError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_new_rejects_bad_data() {
        assert!(matches!(
            Instance::new(vec![], vec![], vec![]),
            Err(InstanceError::NoFacilities)
        ));
        assert!(matches!(
            Instance::new(vec![1.0], vec![Point::new(0.0, 0.0); 2], vec![]),
            Err(InstanceError::LengthMismatch { .. })
        ));
        assert!(matches!(
            Instance::new(vec![f64::NAN], vec![Point::new(0.0, 0.0)], vec![]),
            Err(InstanceError::NonFinite { index: 0, .. })
        ));
        assert!(matches!(
            Instance::new(
                vec![1.0],
                vec![Point::new(0.0, 0.0)],
                vec![Point::new(0.0, 0.0), Point::new(f64::INFINITY, 0.0)]
            ),
            Err(InstanceError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn test_huge_header_counts_fail_without_allocating() {
        assert!(matches!(
            "1 18446744073709551615\n0 0 1\n".parse::<Instance>(),
            Err(InstanceError::MissingLine { .. })
        ));
        assert!(matches!(
            "100000000000 0\n0 0 1\n".parse::<Instance>(),
            Err(InstanceError::MissingLine { .. })
        ));
    }

    #[test]
    fn test_new_rejects_overflowing_distance() {
        let err = Instance::new(
            vec![1.0, 1.0],
            vec![Point::new(1e308, 0.0), Point::new(1e308, 1.0)],
            vec![Point::new(-1e308, 0.0)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InstanceError::UnboundedDistance {
                facility: 0,
                satellite: 0
            }
        ));
    }

    #[test]
    fn test_new_rejects_negative_opening_cost() {
        assert!(matches!(
            Instance::new(
                vec![2.0, -0.5],
                vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
                vec![Point::new(0.0, 1.0)]
            ),
            Err(InstanceError::NegativeCost { index: 1, .. })
        ));
        assert!("1 1\n0 0 -3\n1 1\n".parse::<Instance>().is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Instance::load("/nonexistent/instance_A_4_6.txt").unwrap_err();
        assert!(matches!(err, InstanceError::Io(_)));
    }
}
