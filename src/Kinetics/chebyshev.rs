use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::ktp::{KpEntry, RateSurface, TempGrid, ktp};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Chebyshev polynomial of the first kind T_n(x), by the three-term recurrence
/// (valid also outside [-1, 1])
pub fn chebyt(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let (mut t_prev, mut t) = (1.0, x);
            for _ in 1..n {
                let t_next = 2.0 * x * t - t_prev;
                t_prev = t;
                t = t_next;
            }
            t
        }
    }
}

/// raw Chebyshev record as it comes from a mechanism: coefficient rows and validity bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChebyshevData {
    pub alpha_elm: Vec<Vec<f64>>,
    pub t_limits: [f64; 2],
    pub p_limits: [f64; 2],
}

/////////////////////////CHEBYSHEV KINETICS///////////////////////////////////////////////////////////////
// log10(k) = sum_j sum_k alpha[j][k]*T_j(tau)*T_k(pi), rows j - temperature, columns k - pressure
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevStruct {
    pub alpha: DMatrix<f64>,
    pub tmin: f64,
    pub tmax: f64,
    pub pmin: f64,
    pub pmax: f64,
}

impl ChebyshevStruct {
    pub fn new(alpha: DMatrix<f64>, t_limits: [f64; 2], p_limits: [f64; 2]) -> Result<Self, KineticsError> {
        let [tmin, tmax] = t_limits;
        let [pmin, pmax] = p_limits;
        if alpha.nrows() == 0 || alpha.ncols() == 0 {
            return Err(KineticsError::config("Chebyshev coefficient matrix is empty"));
        }
        // reduced coordinates take 1/T and log10(P) of the limits
        if [tmin, tmax, pmin, pmax].iter().any(|x| !(x.is_finite() && *x > 0.0)) {
            return Err(KineticsError::config(format!(
                "Chebyshev limits must be positive: T in [{}, {}], P in [{}, {}]",
                tmin, tmax, pmin, pmax
            )));
        }
        if tmin == tmax || pmin == pmax {
            return Err(KineticsError::config(format!(
                "Degenerate Chebyshev limits: T in [{}, {}], P in [{}, {}]",
                tmin, tmax, pmin, pmax
            )));
        }
        Ok(Self {
            alpha,
            tmin,
            tmax,
            pmin,
            pmax,
        })
    }

    pub fn from_data(data: &ChebyshevData) -> Result<Self, KineticsError> {
        let nrows = data.alpha_elm.len();
        let ncols = data.alpha_elm.first().map_or(0, |row| row.len());
        if data.alpha_elm.iter().any(|row| row.len() != ncols) {
            return Err(KineticsError::config(
                "Rows of the Chebyshev coefficient matrix differ in length",
            ));
        }
        let alpha = DMatrix::from_fn(nrows, ncols, |j, k| data.alpha_elm[j][k]);
        Self::new(alpha, data.t_limits, data.p_limits)
    }

    /// reduced temperature in [-1, 1] for tmin <= T <= tmax
    pub fn reduced_temp(&self, temp: f64) -> f64 {
        (2.0 / temp - 1.0 / self.tmin - 1.0 / self.tmax) / (1.0 / self.tmax - 1.0 / self.tmin)
    }

    /// reduced pressure in [-1, 1] for pmin <= P <= pmax
    pub fn reduced_pressure(&self, pressure: f64) -> f64 {
        (2.0 * pressure.log10() - self.pmin.log10() - self.pmax.log10())
            / (self.pmax.log10() - self.pmin.log10())
    }

    pub fn chebyshev_one_pressure(&self, temps: &[f64], pressure: f64) -> Vec<f64> {
        let cpress = self.reduced_pressure(pressure);
        let pressure_terms: Vec<f64> = (0..self.alpha.ncols()).map(|k| chebyt(k, cpress)).collect();
        temps
            .iter()
            .map(|&temp| {
                let ctemp = self.reduced_temp(temp);
                let mut logktp = 0.0;
                for j in 0..self.alpha.nrows() {
                    let t_j = chebyt(j, ctemp);
                    for (k, t_k) in pressure_terms.iter().enumerate() {
                        logktp += self.alpha[(j, k)] * t_j * t_k;
                    }
                }
                10.0_f64.powf(logktp)
            })
            .collect()
    }

    /// k(T,P) surface over all requested pressures, without a high-pressure limit
    pub fn chebyshev(&self, pressures: &[f64], temps: &TempGrid) -> Result<RateSurface, KineticsError> {
        let mut kp = Vec::with_capacity(pressures.len());
        for (idx, &pressure) in pressures.iter().enumerate() {
            let t = temps.temps_for(idx)?;
            kp.push(KpEntry {
                idx,
                pressure,
                kts: self.chebyshev_one_pressure(t, pressure),
            });
        }
        ktp(kp, temps, None)
    }
}
