/// error kinds of the rate constant calculator: ShapeError and ConfigError
pub mod kinetics_errors;
/// Arrhenius expression k = A*(T/T_ref)^n*exp(-Ea/RT) and the pressure independent (elementary) family
pub mod arrhenius;
/// eng
/// Pressure falloff: reduced pressure Pr = (k0/k_inf)*[M], Lindemann form k = k_inf*Pr/(1+Pr)
/// and Troe form with the broadening factor F. Both surfaces carry the high-pressure limit under
/// the reserved key.
/// ru
/// Спад давления: приведенное давление Pr = (k0/k_inf)*[M], форма Линдемана k = k_inf*Pr/(1+Pr)
/// и форма Трое с фактором уширения F. Обе поверхности содержат предел высокого давления под
/// зарезервированным ключом.
pub mod falloff;
/// PLOG: Arrhenius parameters tabulated at discrete pressures, log-log interpolation between them.
/// Pressures outside the table are omitted from the surface.
pub mod plog;
/// Chebyshev expression: log10(k) as a double sum of Chebyshev polynomials in reduced T and P
pub mod chebyshev;
/// rate constant surface k(T,P): pressure keys, temperature grid, surface assembler and the check of grids
pub mod ktp;
/// parameter bundles and selection of their functional family
///
///  # Examples
/// ```
/// use KiTP::Kinetics::rate_models::{ParamBundle, eval_param_tup};
/// use KiTP::Kinetics::ktp::{PressureKey, TempGrid};
/// use KiTP::settings::RateSettings;
/// let bundle = ParamBundle::plog(&[(0.1, vec![1.0e10, 0.0, 0.0]), (10.0, vec![1.0e12, 0.0, 0.0])]);
/// let temps = TempGrid::Shared(vec![1000.0]);
/// let surface = eval_param_tup(&bundle, &[0.01, 1.0], &temps, &RateSettings::default()).unwrap();
/// // 0.01 atm is outside the PLOG table
/// assert_eq!(surface.len(), 1);
/// assert!(surface.get(&PressureKey::Finite(1.0)).is_some());
/// ```
pub mod rate_models;
/// eng
/// Summation of all parameter bundles of a reaction (duplicate reactions, PLOG + Arrhenius channels)
/// into one rate constant surface, and evaluation of a whole set of reactions.
/// ru
/// Суммирование всех наборов параметров реакции (дублирующие реакции, каналы PLOG + Аррениус)
/// в одну поверхность константы скорости и расчет целого набора реакций.
///
///  # Examples
/// ```
/// use KiTP::Kinetics::rate_models::ParamBundle;
/// use KiTP::Kinetics::rates::eval_rxn_param_dct;
/// use KiTP::Kinetics::ktp::{PressureKey, TempGrid};
/// use KiTP::settings::RateSettings;
/// use std::collections::HashMap;
/// let rxn_param_dct = HashMap::from([(
///     "H+O2=OH+O".to_string(),
///     vec![ParamBundle::arrhenius(vec![1.0e13, 0.0, 0.0]), ParamBundle::arrhenius(vec![2.0e13, 0.0, 0.0])],
/// )]);
/// let temps = TempGrid::Shared(vec![500.0, 1000.0]);
/// let result = eval_rxn_param_dct(&rxn_param_dct, &[1.0, 10.0], &temps, &RateSettings::default()).unwrap();
/// let (_, kts) = result["H+O2=OH+O"].get(&PressureKey::HighPressureLimit).unwrap();
/// assert_eq!(kts, &[3.0e13, 3.0e13]);
/// ```
pub mod rates;
