use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::ktp::{PressureKey, RateSurface, TempGrid, check_p_t};
use crate::Kinetics::rate_models::{ParamBundle, eval_param_tup};
use crate::settings::RateSettings;
use log::{info, warn};
use std::collections::HashMap;

/// Adds the rates of two surfaces into a new one.
/// An empty accumulator adopts `new` as is. Otherwise every key of the accumulator is kept: rate constants
/// are added elementwise where `new` has the same key and zeros are added where it does not.
/// Keys found only in `new` are NOT carried into the result.
pub fn add_ktp_dcts(acc: &RateSurface, new: &RateSurface) -> Result<RateSurface, KineticsError> {
    if acc.is_empty() {
        return Ok(new.clone());
    }
    let dropped: Vec<&PressureKey> = new.keys().filter(|key| !acc.contains_key(key)).collect();
    if !dropped.is_empty() {
        warn!(
            "pressures {:?} are absent from the accumulated rate constants and are dropped",
            dropped.iter().map(|k| k.to_string()).collect::<Vec<String>>()
        );
    }
    let mut added = RateSurface::new();
    for (key, (temps, kts1)) in acc.iter() {
        let added_kts: Vec<f64> = match new.get(key) {
            Some((_, kts2)) => {
                if kts2.len() != kts1.len() {
                    return Err(KineticsError::shape(format!(
                        "Cannot add rate constants at pressure {}: {} values vs {} values",
                        key,
                        kts1.len(),
                        kts2.len()
                    )));
                }
                kts1.iter().zip(kts2.iter()).map(|(k1, k2)| k1 + k2).collect()
            }
            None => kts1.clone(),
        };
        added.insert(*key, temps.clone(), added_kts)?;
    }
    Ok(added)
}

/// Sums the surfaces of all parameter bundles of one reaction, folding in bundle order.
pub fn eval_rxn_params(
    param_tups: &[ParamBundle],
    pressures: &[f64],
    temps: &TempGrid,
    settings: &RateSettings,
) -> Result<RateSurface, KineticsError> {
    let mut ktp_dct = RateSurface::new();
    for param_tup in param_tups {
        let new_ktp_dct = eval_param_tup(param_tup, pressures, temps, settings)?;
        ktp_dct = add_ktp_dcts(&ktp_dct, &new_ktp_dct)?;
    }
    Ok(ktp_dct)
}

/// Evaluates every reaction of `rxn_param_dct` and returns reaction -> combined k(T,P) surface.
/// The pressure and temperature arrays are checked once, before any reaction is processed.
pub fn eval_rxn_param_dct(
    rxn_param_dct: &HashMap<String, Vec<ParamBundle>>,
    pressures: &[f64],
    temps: &TempGrid,
    settings: &RateSettings,
) -> Result<HashMap<String, RateSurface>, KineticsError> {
    check_p_t(pressures, temps)?;
    info!(
        "evaluating k(T,P) of {} reactions at {} pressures, temperature grid of rank {}",
        rxn_param_dct.len(),
        pressures.len(),
        temps.rank()
    );
    let mut rxn_ktp_dct = HashMap::with_capacity(rxn_param_dct.len());
    for (rxn, param_tups) in rxn_param_dct {
        let ktp_dct = eval_rxn_params(param_tups, pressures, temps, settings)
            .map_err(|e| e.with_context(&format!("reaction '{}'", rxn)))?;
        rxn_ktp_dct.insert(rxn.clone(), ktp_dct);
    }
    Ok(rxn_ktp_dct)
}
