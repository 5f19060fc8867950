//! Fuel consumption and cost curve.

use crate::domain::{TripInfo, Vehicle};

use super::config::CostConfig;

/// Round to 2 decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Estimates consumption and price for a trip at each ladder speed.
#[derive(Debug, Clone)]
pub struct CostEstimator<'a> {
    config: &'a CostConfig,
}

impl<'a> CostEstimator<'a> {
    pub fn new(config: &'a CostConfig) -> Self {
        Self { config }
    }

    /// Litres used over `distance_km` at `speed`, unrounded.
    pub fn consumption(&self, vehicle: &Vehicle, distance_km: f64, speed: f64) -> f64 {
        let efficiency = self.config.efficiency.get(vehicle.engine_type);
        let speed_factor = self.config.speed_model.factor(speed, vehicle.engine_size);

        vehicle.average_consumption * efficiency * speed_factor * distance_km / 100.0
    }

    /// One [`TripInfo`] per configured speed, in ladder order.
    pub fn estimate_trip(&self, vehicle: &Vehicle, distance_km: f64) -> Vec<TripInfo> {
        let price_per_litre = self.config.price_per_litre.get(vehicle.engine_type);

        self.config
            .speed_ladder
            .iter()
            .map(|&speed| {
                let consumption = self.consumption(vehicle, distance_km, speed);
                TripInfo {
                    speed,
                    average_consumption: round2(consumption),
                    distance: distance_km,
                    total_price: round2(consumption * price_per_litre),
                }
            })
            .collect()
    }
}
