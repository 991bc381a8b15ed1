use crate::Kinetics::arrhenius::ArrheniusParams;
use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::ktp::{KpEntry, RateSurface, TempGrid, ktp};
use crate::settings::RateSettings;
use serde::{Deserialize, Serialize};

/// Convert the pressure of a gas (atm) to its concentration [M] ~ P/RT (mol/cm^3), ideal gas
pub fn p_to_m(pressure: f64, temp: f64, rc_atm: f64) -> f64 {
    pressure / (rc_atm * temp)
}

/// Reduced pressure Pr = (k_low/k_high)*[M]*collid_factor at one pressure, for each temperature
pub fn pr_term(
    highp_kts: &[f64],
    lowp_kts: &[f64],
    temps: &[f64],
    pressure: f64,
    collid_factor: f64,
    rc_atm: f64,
) -> Vec<f64> {
    highp_kts
        .iter()
        .zip(lowp_kts.iter())
        .zip(temps.iter())
        .map(|((k_high, k_low), &t)| (k_low / k_high) * p_to_m(pressure, t, rc_atm) * collid_factor)
        .collect()
}

/////////////////////////TROE BROADENING///////////////////////////////////////////////////////////////
/// Troe parameters: alpha, T***, T* and the commonly omitted T**
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TroeParams {
    pub alpha: f64,
    pub ts3: f64,
    pub ts1: f64,
    pub ts2: Option<f64>,
}

impl TroeParams {
    pub fn new(alpha: f64, ts3: f64, ts1: f64, ts2: Option<f64>) -> Self {
        Self { alpha, ts3, ts1, ts2 }
    }

    /// Fcent = (1-alpha)*exp(-T/T***) + alpha*exp(-T/T*) [+ exp(-T**/T)]
    pub fn f_cent(&self, temp: f64) -> f64 {
        let mut f_cent =
            (1.0 - self.alpha) * f64::exp(-temp / self.ts3) + self.alpha * f64::exp(-temp / self.ts1);
        if let Some(ts2) = self.ts2 {
            f_cent += f64::exp(-ts2 / temp);
        }
        f_cent
    }
}

impl TryFrom<&[f64]> for TroeParams {
    type Error = KineticsError;
    fn try_from(troe: &[f64]) -> Result<Self, Self::Error> {
        match troe {
            [alpha, ts3, ts1] => Ok(Self::new(*alpha, *ts3, *ts1, None)),
            [alpha, ts3, ts1, ts2] => Ok(Self::new(*alpha, *ts3, *ts1, Some(*ts2))),
            _ => Err(KineticsError::config(format!(
                "Troe parameters should contain 3 or 4 values, got {}",
                troe.len()
            ))),
        }
    }
}

/// F broadening factor of the Troe expression at one reduced pressure and temperature
pub fn f_broadening_term(pr: f64, troe: &TroeParams, temp: f64) -> f64 {
    let log_f_cent = troe.f_cent(temp).log10();
    let c_val = -0.4 - 0.67 * log_f_cent;
    let n_val = 0.75 - 1.27 * log_f_cent;
    let d_val = 0.14;
    let log_pr_c = pr.log10() + c_val;
    let val = (log_pr_c / (n_val - d_val * log_pr_c)).powi(2);
    let log_f = log_f_cent / (1.0 + val);
    10.0_f64.powf(log_f)
}

/// k(T) of the Lindemann expression at one pressure: k = k_high*(Pr/(1+Pr))
pub fn lindemann_one_pressure(
    highp_kts: &[f64],
    lowp_kts: &[f64],
    temps: &[f64],
    pressure: f64,
    collid_factor: f64,
    rc_atm: f64,
) -> Vec<f64> {
    let pr = pr_term(highp_kts, lowp_kts, temps, pressure, collid_factor, rc_atm);
    highp_kts
        .iter()
        .zip(pr.iter())
        .map(|(k_high, pr)| k_high * (pr / (1.0 + pr)))
        .collect()
}

/// k(T) of the Troe expression at one pressure: k = k_high*(Pr/(1+Pr))*F
pub fn troe_one_pressure(
    highp_kts: &[f64],
    lowp_kts: &[f64],
    temps: &[f64],
    pressure: f64,
    troe: &TroeParams,
    collid_factor: f64,
    rc_atm: f64,
) -> Vec<f64> {
    let pr = pr_term(highp_kts, lowp_kts, temps, pressure, collid_factor, rc_atm);
    highp_kts
        .iter()
        .zip(pr.iter())
        .zip(temps.iter())
        .map(|((k_high, &pr), &t)| k_high * (pr / (1.0 + pr)) * f_broadening_term(pr, troe, t))
        .collect()
}

/////////////////////////FALLOFF KINETICS///////////////////////////////////////////////////////////////
// Lindemann: low- and high-pressure limits blended by the reduced pressure
#[derive(Debug, Clone, PartialEq)]
pub struct LindemannStruct {
    pub high: ArrheniusParams,
    pub low: ArrheniusParams,
}

impl LindemannStruct {
    pub fn new(high: ArrheniusParams, low: ArrheniusParams) -> Self {
        Self { high, low }
    }
    /// k(T,P) surface with the high-pressure limit appended
    pub fn lindemann(
        &self,
        pressures: &[f64],
        temps: &TempGrid,
        settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError> {
        let mut kp = Vec::with_capacity(pressures.len());
        for (idx, &pressure) in pressures.iter().enumerate() {
            let t = temps.temps_for(idx)?;
            let highp_kts = self.high.k_vec(t, settings.t_ref, settings.rc_cal);
            let lowp_kts = self.low.k_vec(t, settings.t_ref, settings.rc_cal);
            let kts = lindemann_one_pressure(
                &highp_kts,
                &lowp_kts,
                t,
                pressure,
                settings.collid_factor,
                settings.rc_atm,
            );
            kp.push(KpEntry { idx, pressure, kts });
        }
        ktp(kp, temps, Some((&self.high, settings.t_ref, settings.rc_cal)))
    }
}

// Troe: Lindemann form multiplied by the broadening factor F
#[derive(Debug, Clone, PartialEq)]
pub struct TroeStruct {
    pub high: ArrheniusParams,
    pub low: ArrheniusParams,
    pub troe: TroeParams,
}

impl TroeStruct {
    pub fn new(high: ArrheniusParams, low: ArrheniusParams, troe: TroeParams) -> Self {
        Self { high, low, troe }
    }
    /// k(T,P) surface with the high-pressure limit appended
    pub fn troe(
        &self,
        pressures: &[f64],
        temps: &TempGrid,
        settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError> {
        let mut kp = Vec::with_capacity(pressures.len());
        for (idx, &pressure) in pressures.iter().enumerate() {
            let t = temps.temps_for(idx)?;
            let highp_kts = self.high.k_vec(t, settings.t_ref, settings.rc_cal);
            let lowp_kts = self.low.k_vec(t, settings.t_ref, settings.rc_cal);
            let kts = troe_one_pressure(
                &highp_kts,
                &lowp_kts,
                t,
                pressure,
                &self.troe,
                settings.collid_factor,
                settings.rc_atm,
            );
            kp.push(KpEntry { idx, pressure, kts });
        }
        ktp(kp, temps, Some((&self.high, settings.t_ref, settings.rc_cal)))
    }
}
