/// A range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is within [min, max), i.e. strictly before the end.
    pub fn contains_before_max(&self, x: f64) -> bool {
        self.min <= x && x < self.max
    }

    /// Every non-negative ray parameter: the part of a ray in front of its origin.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f64::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_contains_before_max() {
        let interval = Interval::new(0.0, 10.0);

        assert!(interval.contains_before_max(0.0));
        assert!(interval.contains_before_max(9.999));
        assert!(!interval.contains_before_max(10.0));
        assert!(!interval.contains_before_max(-0.1));
    }

    #[test]
    fn test_interval_forward() {
        let forward = Interval::FORWARD;

        assert!(forward.contains(0.0));
        assert!(forward.contains(1e300));
        assert!(!forward.contains(-1e-12));
        assert!(!forward.contains(f64::NAN));
    }
}
