use crate::Kinetics::arrhenius::ArrheniusParams;
use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::ktp::{KpEntry, RateSurface, TempGrid, ktp};
use crate::settings::RateSettings;
use approx::abs_diff_eq;
use log::debug;
use std::collections::HashMap;

/////////////////////////PRESSURE DEPENDENT KINETICS (PLOG)///////////////////////////////////////////////////////////////
// Arrhenius parameters tabulated at several pressures; k is interpolated linearly in log10(k) vs log10(P)
#[derive(Debug, Clone, PartialEq)]
pub struct PlogStruct {
    /// (pressure, Arrhenius parameters) sorted by ascending pressure
    table: Vec<(f64, ArrheniusParams)>,
}

impl PlogStruct {
    pub fn new(mut table: Vec<(f64, ArrheniusParams)>) -> Result<Self, KineticsError> {
        if table.is_empty() {
            return Err(KineticsError::config("PLOG table is empty"));
        }
        if let Some((p, _)) = table.iter().find(|(p, _)| !(p.is_finite() && *p > 0.0)) {
            return Err(KineticsError::config(format!(
                "PLOG pressure {} is not a positive number",
                p
            )));
        }
        table.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { table })
    }

    /// PLOG tables in mechanism JSON dumps are keyed by pressure strings: {"1.0": [A, n, Ea], ...}
    pub fn from_map(map: &HashMap<String, Vec<f64>>) -> Result<Self, KineticsError> {
        let mut table = Vec::with_capacity(map.len());
        for (p_str, params) in map {
            let p = p_str.trim().parse::<f64>().map_err(|e| {
                KineticsError::config(format!("Error converting PLOG pressure '{}' to f64: {}", p_str, e))
            })?;
            table.push((p, ArrheniusParams::try_from(params.as_slice())?));
        }
        Self::new(table)
    }

    pub fn table(&self) -> &[(f64, ArrheniusParams)] {
        &self.table
    }

    pub fn p_min(&self) -> f64 {
        self.table[0].0
    }

    pub fn p_max(&self) -> f64 {
        self.table[self.table.len() - 1].0
    }

    pub fn in_range(&self, pressure: f64) -> bool {
        self.p_min() <= pressure && pressure <= self.p_max()
    }

    /// k(T) at one pressure inside the tabulated range
    pub fn plog_one_pressure(
        &self,
        temps: &[f64],
        pressure: f64,
        settings: &RateSettings,
    ) -> Result<Vec<f64>, KineticsError> {
        let (t_ref, rc) = (settings.t_ref, settings.rc_cal);
        // the tabulated pressure is used as is when the requested one coincides with it; last match wins
        let defined = self
            .table
            .iter()
            .filter(|(p, _)| abs_diff_eq!(*p, pressure, epsilon = settings.plog_tolerance))
            .last();
        if let Some((_, params)) = defined {
            return Ok(params.k_vec(temps, t_ref, rc));
        }

        let bracket = self
            .table
            .windows(2)
            .find(|w| w[0].0 < pressure && pressure < w[1].0)
            .ok_or_else(|| {
                KineticsError::config(format!(
                    "No PLOG pressures bracket the pressure {}",
                    pressure
                ))
            })?;
        let (p_low, params_low) = bracket[0];
        let (p_high, params_high) = bracket[1];
        let pres_term =
            (pressure.log10() - p_low.log10()) / (p_high.log10() - p_low.log10());

        let kt_low = params_low.k_vec(temps, t_ref, rc);
        let kt_high = params_high.k_vec(temps, t_ref, rc);
        let ktps = kt_low
            .iter()
            .zip(kt_high.iter())
            .map(|(k_low, k_high)| {
                let logkt = k_low.log10() + (k_high.log10() - k_low.log10()) * pres_term;
                10.0_f64.powf(logkt)
            })
            .collect();
        Ok(ktps)
    }

    /// k(T,P) surface; pressures outside the tabulated range are left out, and there is no high-pressure limit
    pub fn plog(
        &self,
        pressures: &[f64],
        temps: &TempGrid,
        settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError> {
        let mut kp = Vec::with_capacity(pressures.len());
        for (idx, &pressure) in pressures.iter().enumerate() {
            if !self.in_range(pressure) {
                debug!(
                    "pressure {} is outside the PLOG range [{}, {}], skipped",
                    pressure,
                    self.p_min(),
                    self.p_max()
                );
                continue;
            }
            let t = temps.temps_for(idx)?;
            let kts = self.plog_one_pressure(t, pressure, settings)?;
            kp.push(KpEntry { idx, pressure, kts });
        }
        ktp(kp, temps, None)
    }
}
