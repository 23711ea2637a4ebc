// Airfare pricing
use serde::Deserialize;

pub const COST_PER_MILE: f64 = 0.10;
pub const COST_PER_BAG: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AirfareRates {
    pub per_mile: f64,
    pub per_bag: f64,
}

impl Default for AirfareRates {
    fn default() -> Self {
        Self {
            per_mile: COST_PER_MILE,
            per_bag: COST_PER_BAG,
        }
    }
}

impl AirfareRates {
    /// Total cost of a trip: `(distance * per_mile + checked_bags * per_bag) * travelers`.
    ///
    /// Each traveler pays for the miles and for the checked bags, so
    /// 2 bags, 2000 miles and 3 travelers come to 750.0 at the default rates.
    /// The result is not rounded.
    pub fn quote(&self, checked_bags: u32, distance: u32, travelers: u32) -> f64 {
        let ticket_cost = f64::from(distance) * self.per_mile;
        let bag_cost = f64::from(checked_bags) * self.per_bag;
        (ticket_cost + bag_cost) * f64::from(travelers)
    }
}

/// Airfare at the standard rates, see [`AirfareRates::quote`]
pub fn calculate_airfare(checked_bags: u32, distance: u32, travelers: u32) -> f64 {
    AirfareRates::default().quote(checked_bags, distance, travelers)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Trip {
    pub checked_bags: u32,
    pub distance: u32,
    pub travelers: u32,
}

impl Trip {
    #[cfg(test)]
    pub fn new(checked_bags: u32, distance: u32, travelers: u32) -> Self {
        Self {
            checked_bags,
            distance,
            travelers,
        }
    }

    pub fn airfare(&self, rates: &AirfareRates) -> f64 {
        if *rates == AirfareRates::default() {
            calculate_airfare(self.checked_bags, self.distance, self.travelers)
        } else {
            rates.quote(self.checked_bags, self.distance, self.travelers)
        }
    }
}
