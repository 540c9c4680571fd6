//! Wind representation and resolution along a runway.

use serde::{Deserialize, Serialize};

/// A reported wind: direction the wind blows *from* [° true] and speed [kt].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub direction_deg: f64,
    pub speed_kt: f64,
}

/// Wind resolved against a runway heading. Headwind and tailwind are
/// non-negative magnitudes; at most one of them is non-zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindComponents {
    pub headwind_kt: f64,
    pub tailwind_kt: f64,
    /// Signed, positive from the right.
    pub crosswind_kt: f64,
}

impl Wind {
    pub fn new(direction_deg: f64, speed_kt: f64) -> Self {
        Self { direction_deg, speed_kt }
    }

    /// Signed component along the runway [kt]; positive is a headwind.
    pub fn headwind(&self, runway_heading_deg: f64) -> f64 {
        let rad = (self.direction_deg - runway_heading_deg).to_radians();
        self.speed_kt * rad.cos()
    }

    /// Crosswind component [kt]; positive from the right.
    pub fn crosswind(&self, runway_heading_deg: f64) -> f64 {
        let rad = (self.direction_deg - runway_heading_deg).to_radians();
        self.speed_kt * rad.sin()
    }

    /// Resolve into headwind/tailwind magnitudes and crosswind.
    pub fn components(&self, runway_heading_deg: f64) -> WindComponents {
        let along = self.headwind(runway_heading_deg);
        WindComponents {
            headwind_kt: along.max(0.0),
            tailwind_kt: (-along).max(0.0),
            crosswind_kt: self.crosswind(runway_heading_deg),
        }
    }
}
