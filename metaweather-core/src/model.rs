use std::fmt;

/// Identifier the weather service assigns to a place (its "woeid").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(u64);

impl LocationId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current conditions, taken from the first consolidated weather record.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub state_name: String,
    pub wind_direction_compass: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub wind_speed: f64,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather: {}, wind direction: {}, wind speed: {:.2}, min temperature: {:.2}, max temperature: {:.2}",
            self.state_name,
            self.wind_direction_compass,
            round_cents(self.wind_speed),
            round_cents(self.min_temp),
            round_cents(self.max_temp),
        )
    }
}

/// Round half away from zero at the second decimal.
///
/// Values too large to scale have no fractional part left to round.
fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() { scaled.round() / 100.0 } else { value }
}
