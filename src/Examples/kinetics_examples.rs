use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::ktp::{RateSurface, TempGrid};
use crate::Kinetics::rate_models::{KtpEvaluator, ParamBundle, RateModel};
use crate::Kinetics::rates::eval_rxn_param_dct;
use crate::settings::RateSettings;
use log::error;
use std::collections::HashMap;

/// FALLOFF REACTION: Troe expression of H + O2 (+M) <=> HO2 (+M) at several pressures
pub fn troe_example(settings: &RateSettings) -> Result<RateSurface, KineticsError> {
    let bundle = ParamBundle::troe(
        vec![4.65e12, 0.44, 0.0],
        vec![6.366e20, -1.72, 524.8],
        vec![0.5, 1.0e-30, 1.0e30],
    );
    let model = RateModel::from_bundle(&bundle)?;
    let temps = TempGrid::Shared(vec![500.0, 1000.0, 1500.0, 2000.0]);
    let surface = model.eval_ktp(&[0.01, 1.0, 100.0], &temps, settings)?;
    println!("{} rate constants of H + O2 (+M) <=> HO2 (+M)", model.family());
    Ok(surface)
}

/// DUPLICATE REACTION: two PLOG channels of the same reaction are summed, next to a Chebyshev reaction
pub fn duplicate_plog_example(
    settings: &RateSettings,
) -> Result<HashMap<String, RateSurface>, KineticsError> {
    let channel1 = ParamBundle::plog(&[
        (0.1, vec![1.0e10, 0.8, 4000.0]),
        (1.0, vec![3.0e11, 0.6, 3000.0]),
        (10.0, vec![5.0e12, 0.5, 2000.0]),
    ]);
    let channel2 = ParamBundle::plog(&[
        (0.1, vec![2.0e9, 1.1, 1000.0]),
        (1.0, vec![4.0e9, 1.0, 1500.0]),
        (10.0, vec![8.0e9, 0.9, 1800.0]),
    ]);
    let rxn_param_dct = HashMap::from([
        ("CH3+OH=CH2OH+H".to_string(), vec![channel1, channel2]),
        (
            "CH3+CH3=C2H6".to_string(),
            vec![ParamBundle::chebyshev(
                vec![vec![12.1, 0.3], vec![-0.4, 0.05]],
                [290.0, 3000.0],
                [0.001, 100.0],
            )],
        ),
    ]);
    let temps = TempGrid::PerPressure(vec![
        vec![800.0, 1000.0, 1200.0],
        vec![900.0, 1100.0, 1300.0],
        vec![1000.0, 1200.0, 1400.0],
    ]);
    eval_rxn_param_dct(&rxn_param_dct, &[0.3, 3.0, 30.0], &temps, settings)
}

pub fn kin_examples(kintask: usize) {
    //
    let settings = RateSettings::default();
    match kintask {
        0 => match troe_example(&settings) {
            Ok(surface) => surface.pretty_print(),
            Err(e) => error!("{}", e),
        },
        1 => match duplicate_plog_example(&settings) {
            Ok(rxn_ktp_dct) => {
                for (rxn, surface) in rxn_ktp_dct.iter() {
                    println!("reaction: {}", rxn);
                    surface.pretty_print();
                }
            }
            Err(e) => error!("{}", e),
        },
        _ => {
            println!("Wrong task number");
        }
    }
}
