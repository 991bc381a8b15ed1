use crate::Kinetics::kinetics_errors::KineticsError;
use serde::{Deserialize, Serialize};

/////////////////////////ARRHENIUS EXPRESSION///////////////////////////////////////////////////////////////
// k = A*(T/T_ref)^n*exp(-Ea/(R*T)), Ea in cal/mol, R in cal/(mol*K)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusParams {
    /// pre-exponential factor (molar basis)
    pub A: f64,
    /// temperature exponent
    pub n: f64,
    /// activation energy, cal/mol
    pub Ea: f64,
}

impl ArrheniusParams {
    pub fn new(A: f64, n: f64, Ea: f64) -> Self {
        Self { A, n, Ea }
    }

    pub fn k_const(&self, temp: f64, t_ref: f64, rc: f64) -> f64 {
        self.A * (temp / t_ref).powf(self.n) * f64::exp(-self.Ea / (rc * temp))
    }

    pub fn k_vec(&self, temps: &[f64], t_ref: f64, rc: f64) -> Vec<f64> {
        temps.iter().map(|&t| self.k_const(t, t_ref, rc)).collect()
    }
}

impl TryFrom<&[f64]> for ArrheniusParams {
    type Error = KineticsError;
    fn try_from(params: &[f64]) -> Result<Self, Self::Error> {
        match params {
            [A, n, Ea] => Ok(Self::new(*A, *n, *Ea)),
            _ => Err(KineticsError::shape(format!(
                "Number of Arrhenius parameters is {}, but it should be 3",
                params.len()
            ))),
        }
    }
}

/// Calculates T-dependent rate constants k(T) from a raw list of Arrhenius parameters [A, n, Ea].
/// Fails with ShapeError if the list does not contain exactly 3 numbers.
pub fn arrhenius(
    params: &[f64],
    temps: &[f64],
    t_ref: f64,
    rc: f64,
) -> Result<Vec<f64>, KineticsError> {
    let params = ArrheniusParams::try_from(params)?;
    Ok(params.k_vec(temps, t_ref, rc))
}

/////////////////////////ELEMENTARY KINETICS///////////////////////////////////////////////////////////////
// the single Arrhenius family: pressure independent, so its surface holds only the high-pressure key
#[derive(Debug, Clone, PartialEq)]
pub struct ElementaryStruct {
    pub high: ArrheniusParams,
}

impl ElementaryStruct {
    pub fn new(high: ArrheniusParams) -> Self {
        Self { high }
    }
}
