//! # Parameter bundles and functional families
//!
//! A [`ParamBundle`] is the raw record of everything known about one kinetic expression of a reaction channel:
//! high-pressure and low-pressure Arrhenius parameters, Troe parameters, a PLOG table and a Chebyshev record.
//! [`RateModel::from_bundle`] inspects which slots are filled and builds exactly one functional family,
//! checked in the order
//! 1. Chebyshev
//! 2. PLOG
//! 3. Troe (needs high- and low-pressure parameters)
//! 4. Lindemann (low-pressure parameters without Troe, needs high-pressure parameters)
//! 5. single Arrhenius (high-pressure parameters only)
//!
//! A bundle with none of the slots filled is a ConfigError.
//!
//! # Examples
//! ```
//! use KiTP::Kinetics::rate_models::{ParamBundle, RateModel, KtpEvaluator};
//! use KiTP::Kinetics::ktp::{PressureKey, TempGrid};
//! use KiTP::settings::RateSettings;
//! let bundle = ParamBundle::arrhenius(vec![1.0e13, 0.0, 0.0]);
//! let model = RateModel::from_bundle(&bundle).unwrap();
//! assert_eq!(model.family(), "arrhenius");
//! let temps = TempGrid::Shared(vec![500.0, 1000.0]);
//! let surface = model.eval_ktp(&[1.0, 10.0], &temps, &RateSettings::default()).unwrap();
//! assert_eq!(surface.get(&PressureKey::HighPressureLimit).unwrap().1, &[1.0e13, 1.0e13]);
//! ```
use crate::Kinetics::arrhenius::{ArrheniusParams, ElementaryStruct};
use crate::Kinetics::chebyshev::{ChebyshevData, ChebyshevStruct};
use crate::Kinetics::falloff::{LindemannStruct, TroeParams, TroeStruct};
use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::ktp::{RateSurface, TempGrid, ktp};
use crate::Kinetics::plog::PlogStruct;
use crate::settings::RateSettings;
use enum_dispatch::enum_dispatch;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// raw parameters of one kinetic expression; fields follow the order (high, low, troe, cheb, plog)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamBundle {
    /// high-pressure (or the only) Arrhenius parameters [A, n, Ea]
    pub high: Option<Vec<f64>>,
    /// low-pressure Arrhenius parameters [A, n, Ea]
    pub low: Option<Vec<f64>>,
    /// [alpha, T***, T*] or [alpha, T***, T*, T**]
    pub troe: Option<Vec<f64>>,
    pub cheb: Option<ChebyshevData>,
    /// pressure (atm, as string) -> [A, n, Ea]
    pub plog: Option<HashMap<String, Vec<f64>>>,
}

impl ParamBundle {
    pub fn new(
        high: Option<Vec<f64>>,
        low: Option<Vec<f64>>,
        troe: Option<Vec<f64>>,
        cheb: Option<ChebyshevData>,
        plog: Option<HashMap<String, Vec<f64>>>,
    ) -> Self {
        Self {
            high,
            low,
            troe,
            cheb,
            plog,
        }
    }
    pub fn arrhenius(high: Vec<f64>) -> Self {
        Self {
            high: Some(high),
            ..Self::default()
        }
    }
    pub fn lindemann(high: Vec<f64>, low: Vec<f64>) -> Self {
        Self {
            high: Some(high),
            low: Some(low),
            ..Self::default()
        }
    }
    pub fn troe(high: Vec<f64>, low: Vec<f64>, troe: Vec<f64>) -> Self {
        Self {
            high: Some(high),
            low: Some(low),
            troe: Some(troe),
            ..Self::default()
        }
    }
    pub fn plog(table: &[(f64, Vec<f64>)]) -> Self {
        let plog = table
            .iter()
            .map(|(p, params)| (p.to_string(), params.clone()))
            .collect();
        Self {
            plog: Some(plog),
            ..Self::default()
        }
    }
    pub fn chebyshev(alpha_elm: Vec<Vec<f64>>, t_limits: [f64; 2], p_limits: [f64; 2]) -> Self {
        Self {
            cheb: Some(ChebyshevData {
                alpha_elm,
                t_limits,
                p_limits,
            }),
            ..Self::default()
        }
    }
}

/// evaluation of a functional family over a pressure list and a temperature grid
#[enum_dispatch]
pub trait KtpEvaluator {
    fn eval_ktp(
        &self,
        pressures: &[f64],
        temps: &TempGrid,
        settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError>;
}

/// the five functional families
#[enum_dispatch(KtpEvaluator)]
#[derive(Debug, Clone, PartialEq)]
pub enum RateModel {
    Chebyshev(ChebyshevStruct),
    Plog(PlogStruct),
    Troe(TroeStruct),
    Lindemann(LindemannStruct),
    Elementary(ElementaryStruct),
}

impl KtpEvaluator for ChebyshevStruct {
    fn eval_ktp(
        &self,
        pressures: &[f64],
        temps: &TempGrid,
        _settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError> {
        self.chebyshev(pressures, temps)
    }
}

impl KtpEvaluator for PlogStruct {
    fn eval_ktp(
        &self,
        pressures: &[f64],
        temps: &TempGrid,
        settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError> {
        self.plog(pressures, temps, settings)
    }
}

impl KtpEvaluator for TroeStruct {
    fn eval_ktp(
        &self,
        pressures: &[f64],
        temps: &TempGrid,
        settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError> {
        self.troe(pressures, temps, settings)
    }
}

impl KtpEvaluator for LindemannStruct {
    fn eval_ktp(
        &self,
        pressures: &[f64],
        temps: &TempGrid,
        settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError> {
        self.lindemann(pressures, temps, settings)
    }
}

// pressure independent: the surface holds only the high-pressure key
impl KtpEvaluator for ElementaryStruct {
    fn eval_ktp(
        &self,
        _pressures: &[f64],
        temps: &TempGrid,
        settings: &RateSettings,
    ) -> Result<RateSurface, KineticsError> {
        ktp(Vec::new(), temps, Some((&self.high, settings.t_ref, settings.rc_cal)))
    }
}

fn required_arrhenius(params: &Option<Vec<f64>>, msg: &str) -> Result<ArrheniusParams, KineticsError> {
    let params = params
        .as_deref()
        .ok_or_else(|| KineticsError::config(msg))?;
    ArrheniusParams::try_from(params)
}

impl RateModel {
    /// Selects the functional family of a bundle (Chebyshev > PLOG > Troe > Lindemann > Arrhenius)
    /// and validates the parameters it needs.
    pub fn from_bundle(bundle: &ParamBundle) -> Result<Self, KineticsError> {
        if let Some(cheb) = &bundle.cheb {
            return Ok(RateModel::Chebyshev(ChebyshevStruct::from_data(cheb)?));
        }
        if let Some(plog) = &bundle.plog {
            return Ok(RateModel::Plog(PlogStruct::from_map(plog)?));
        }
        if let Some(troe) = &bundle.troe {
            let high = required_arrhenius(
                &bundle.high,
                "Troe parameters are included, but the high-P parameters are absent",
            )?;
            let low = required_arrhenius(
                &bundle.low,
                "Troe and high-P parameters are included, but the low-P parameters are absent",
            )?;
            let troe = TroeParams::try_from(troe.as_slice())?;
            return Ok(RateModel::Troe(TroeStruct::new(high, low, troe)));
        }
        if let Some(low) = &bundle.low {
            let high = required_arrhenius(
                &bundle.high,
                "Low-P parameters are included, but the high-P parameters are absent",
            )?;
            let low = ArrheniusParams::try_from(low.as_slice())?;
            return Ok(RateModel::Lindemann(LindemannStruct::new(high, low)));
        }
        let high = required_arrhenius(&bundle.high, "bundle contains no usable parameters")?;
        Ok(RateModel::Elementary(ElementaryStruct::new(high)))
    }

    pub fn family(&self) -> &'static str {
        match self {
            RateModel::Chebyshev(_) => "chebyshev",
            RateModel::Plog(_) => "plog",
            RateModel::Troe(_) => "troe",
            RateModel::Lindemann(_) => "lindemann",
            RateModel::Elementary(_) => "arrhenius",
        }
    }

    /// families with a defined high-pressure limit entry in their surface
    pub fn has_high_limit(&self) -> bool {
        matches!(
            self,
            RateModel::Troe(_) | RateModel::Lindemann(_) | RateModel::Elementary(_)
        )
    }
}

/// Evaluates k(T,P) of one parameter bundle.
pub fn eval_param_tup(
    bundle: &ParamBundle,
    pressures: &[f64],
    temps: &TempGrid,
    settings: &RateSettings,
) -> Result<RateSurface, KineticsError> {
    let model = RateModel::from_bundle(bundle)?;
    debug!("parameter bundle evaluated as {}", model.family());
    model.eval_ktp(pressures, temps, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::ktp::PressureKey;
    use approx::assert_relative_eq;

    fn full_bundle() -> ParamBundle {
        ParamBundle::new(
            Some(vec![4.65e12, 0.44, 0.0]),
            Some(vec![6.366e20, -1.72, 524.8]),
            Some(vec![0.5, 1.0e-30, 1.0e30]),
            Some(ChebyshevData {
                alpha_elm: vec![vec![8.0]],
                t_limits: [300.0, 2500.0],
                p_limits: [0.01, 100.0],
            }),
            Some(HashMap::from([("1.0".to_string(), vec![1.0e10, 0.0, 0.0])])),
        )
    }

    #[test]
    fn test_precedence() {
        let mut bundle = full_bundle();
        assert_eq!(RateModel::from_bundle(&bundle).unwrap().family(), "chebyshev");
        bundle.cheb = None;
        assert_eq!(RateModel::from_bundle(&bundle).unwrap().family(), "plog");
        bundle.plog = None;
        assert_eq!(RateModel::from_bundle(&bundle).unwrap().family(), "troe");
        bundle.troe = None;
        assert_eq!(RateModel::from_bundle(&bundle).unwrap().family(), "lindemann");
        bundle.low = None;
        assert_eq!(RateModel::from_bundle(&bundle).unwrap().family(), "arrhenius");
        bundle.high = None;
        assert!(matches!(
            RateModel::from_bundle(&bundle),
            Err(KineticsError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_falloff_parameters() {
        let troe_without_low = ParamBundle::new(
            Some(vec![1.0, 0.0, 0.0]),
            None,
            Some(vec![0.5, 100.0, 1000.0]),
            None,
            None,
        );
        assert!(matches!(
            RateModel::from_bundle(&troe_without_low),
            Err(KineticsError::ConfigError(_))
        ));
        let troe_without_high = ParamBundle::new(
            None,
            Some(vec![1.0, 0.0, 0.0]),
            Some(vec![0.5, 100.0, 1000.0]),
            None,
            None,
        );
        assert!(matches!(
            RateModel::from_bundle(&troe_without_high),
            Err(KineticsError::ConfigError(_))
        ));
        let lindemann_without_high = ParamBundle::new(None, Some(vec![1.0, 0.0, 0.0]), None, None, None);
        assert!(matches!(
            RateModel::from_bundle(&lindemann_without_high),
            Err(KineticsError::ConfigError(_))
        ));
        assert!(matches!(
            RateModel::from_bundle(&ParamBundle::default()),
            Err(KineticsError::ConfigError(_))
        ));
    }

    #[test]
    fn test_bad_arrhenius_length_is_shape_error() {
        let bundle = ParamBundle::arrhenius(vec![1.0, 0.0]);
        assert!(matches!(
            RateModel::from_bundle(&bundle),
            Err(KineticsError::ShapeError(_))
        ));
    }

    #[test]
    fn test_arrhenius_surface_has_only_high_key() {
        let bundle = ParamBundle::arrhenius(vec![1.0e13, 0.0, 0.0]);
        let temps = TempGrid::Shared(vec![500.0, 1000.0]);
        let surface = eval_param_tup(&bundle, &[1.0, 10.0], &temps, &RateSettings::default()).unwrap();
        let keys: Vec<PressureKey> = surface.keys().cloned().collect();
        assert_eq!(keys, vec![PressureKey::HighPressureLimit]);
        assert_eq!(surface.high().unwrap(), (&[500.0, 1000.0][..], &[1.0e13, 1.0e13][..]));
    }

    #[test]
    fn test_falloff_families_have_high_limit() {
        let temps = TempGrid::Shared(vec![800.0, 1600.0]);
        let settings = RateSettings::default();
        let high = vec![4.65e12, 0.44, 0.0];
        for bundle in [
            ParamBundle::troe(high.clone(), vec![6.366e20, -1.72, 524.8], vec![0.5, 1.0e-30, 1.0e30]),
            ParamBundle::lindemann(high.clone(), vec![6.366e20, -1.72, 524.8]),
        ] {
            let model = RateModel::from_bundle(&bundle).unwrap();
            assert!(model.has_high_limit());
            let surface = model.eval_ktp(&[0.1, 1.0], &temps, &settings).unwrap();
            let (t, k) = surface.high().unwrap();
            let expected = crate::Kinetics::arrhenius::arrhenius(&high, t, 1.0, settings.rc_cal).unwrap();
            for (ki, ei) in k.iter().zip(expected.iter()) {
                assert_relative_eq!(*ki, *ei, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn test_bundle_from_json() {
        let json = serde_json::json!({
            "high": null,
            "low": null,
            "troe": null,
            "cheb": null,
            "plog": {"0.1": [1.0e10, 0.0, 0.0], "10.0": [1.0e12, 0.0, 0.0]}
        });
        let bundle: ParamBundle = serde_json::from_value(json).unwrap();
        let model = RateModel::from_bundle(&bundle).unwrap();
        assert_eq!(model.family(), "plog");
        assert!(!model.has_high_limit());
        let surface = model
            .eval_ktp(&[1.0], &TempGrid::Shared(vec![1000.0]), &RateSettings::default())
            .unwrap();
        let (_, k) = surface.get(&PressureKey::Finite(1.0)).unwrap();
        assert_relative_eq!(k[0], 1.0e11, max_relative = 1e-12);

        let only_high: ParamBundle = serde_json::from_str(r#"{"high": [2.0, 0.0, 0.0]}"#).unwrap();
        assert_eq!(only_high, ParamBundle::arrhenius(vec![2.0, 0.0, 0.0]));
    }
}
