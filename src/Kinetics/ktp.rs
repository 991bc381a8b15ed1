//! # Rate constant surface k(T,P)
//!
//! A surface maps a pressure key to a pair (temperatures, rate constants). Pressure keys are
//! either finite pressures (atm) or the reserved high-pressure limit, which sorts after every
//! finite pressure. Temperatures come from a [`TempGrid`]: one sequence shared by all pressures
//! or one sequence per requested pressure.
use crate::Kinetics::arrhenius::ArrheniusParams;
use crate::Kinetics::kinetics_errors::KineticsError;
use prettytable::{Cell, Row, Table};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::hash::{Hash, Hasher};

/// key of the rate constant surface
#[derive(Debug, Clone, Copy)]
pub enum PressureKey {
    Finite(f64),
    HighPressureLimit,
}

impl From<f64> for PressureKey {
    fn from(p: f64) -> Self {
        PressureKey::Finite(p)
    }
}

impl PartialEq for PressureKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PressureKey {}

impl PartialOrd for PressureKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PressureKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PressureKey::Finite(a), PressureKey::Finite(b)) => a.total_cmp(b),
            (PressureKey::Finite(_), PressureKey::HighPressureLimit) => Ordering::Less,
            (PressureKey::HighPressureLimit, PressureKey::Finite(_)) => Ordering::Greater,
            (PressureKey::HighPressureLimit, PressureKey::HighPressureLimit) => Ordering::Equal,
        }
    }
}

impl Hash for PressureKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PressureKey::Finite(p) => {
                0u8.hash(state);
                p.to_bits().hash(state);
            }
            PressureKey::HighPressureLimit => 1u8.hash(state),
        }
    }
}

impl fmt::Display for PressureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressureKey::Finite(p) => write!(f, "{}", p),
            PressureKey::HighPressureLimit => write!(f, "high"),
        }
    }
}

// keys are written as strings so that a surface is a valid JSON object: "1.5" or "high"
impl Serialize for PressureKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PressureKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PressureKeyVisitor;

        impl<'de> Visitor<'de> for PressureKeyVisitor {
            type Value = PressureKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a pressure or the string 'high'")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<PressureKey, E> {
                if s == "high" {
                    return Ok(PressureKey::HighPressureLimit);
                }
                s.parse::<f64>()
                    .map(PressureKey::Finite)
                    .map_err(|_| E::custom(format!("Unknown pressure key: {}", s)))
            }

            fn visit_f64<E: de::Error>(self, p: f64) -> Result<PressureKey, E> {
                Ok(PressureKey::Finite(p))
            }

            fn visit_i64<E: de::Error>(self, p: i64) -> Result<PressureKey, E> {
                Ok(PressureKey::Finite(p as f64))
            }

            fn visit_u64<E: de::Error>(self, p: u64) -> Result<PressureKey, E> {
                Ok(PressureKey::Finite(p as f64))
            }
        }

        deserializer.deserialize_any(PressureKeyVisitor)
    }
}

/////////////////////////TEMPERATURE GRID///////////////////////////////////////////////////////////////
/// Temperatures shared by all pressures (rank 1) or given separately for every pressure (rank 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TempGrid {
    Shared(Vec<f64>),
    PerPressure(Vec<Vec<f64>>),
}

impl TempGrid {
    pub fn rank(&self) -> usize {
        match self {
            TempGrid::Shared(_) => 1,
            TempGrid::PerPressure(_) => 2,
        }
    }

    /// temperatures used for the pressure with index `idx` in the requested pressure list
    pub fn temps_for(&self, idx: usize) -> Result<&[f64], KineticsError> {
        match self {
            TempGrid::Shared(temps) => Ok(temps.as_slice()),
            TempGrid::PerPressure(rows) => rows.get(idx).map(|row| row.as_slice()).ok_or_else(|| {
                KineticsError::shape(format!(
                    "No temperature row for pressure index {}, grid has {} rows",
                    idx,
                    rows.len()
                ))
            }),
        }
    }

    /// temperatures of the high-pressure limit: the shared row, or the last row of a per-pressure grid
    pub fn high_limit_temps(&self) -> Result<&[f64], KineticsError> {
        match self {
            TempGrid::Shared(temps) => Ok(temps.as_slice()),
            TempGrid::PerPressure(rows) => rows
                .last()
                .map(|row| row.as_slice())
                .ok_or_else(|| KineticsError::shape("Temperature grid has no rows")),
        }
    }

    /// Builds a grid from a JSON array, inspecting its nesting depth.
    /// A flat array of numbers is rank 1, an array of arrays of numbers is rank 2,
    /// anything else (scalars, deeper nesting, mixed or ragged rows) is a ShapeError.
    pub fn from_json(value: &Value) -> Result<Self, KineticsError> {
        fn number(v: &Value) -> Option<f64> {
            v.as_f64()
        }
        let outer = value
            .as_array()
            .ok_or_else(|| KineticsError::shape("The dimensionality of temps is 0; it should be either 1 or 2"))?;
        if outer.iter().all(|v| v.is_number()) {
            let temps = outer.iter().filter_map(number).collect();
            return Ok(TempGrid::Shared(temps));
        }
        let mut rows = Vec::with_capacity(outer.len());
        for row in outer {
            let row = row.as_array().ok_or_else(|| {
                KineticsError::shape("Temperature array mixes numbers and sequences")
            })?;
            if !row.iter().all(|v| v.is_number()) {
                return Err(KineticsError::shape(
                    "The dimensionality of temps is larger than 2; it should be either 1 or 2",
                ));
            }
            rows.push(row.iter().filter_map(number).collect::<Vec<f64>>());
        }
        if let Some(first) = rows.first() {
            let len = first.len();
            if rows.iter().any(|r| r.len() != len) {
                return Err(KineticsError::shape("Rows of the 2-D temperature array differ in length"));
            }
        }
        Ok(TempGrid::PerPressure(rows))
    }
}

impl From<Vec<f64>> for TempGrid {
    fn from(temps: Vec<f64>) -> Self {
        TempGrid::Shared(temps)
    }
}

impl From<Vec<Vec<f64>>> for TempGrid {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        TempGrid::PerPressure(rows)
    }
}

/// Enforces the rules on pressure and temperature arrays:
/// a 2-D grid needs one row per pressure, and every row must hold as many temperatures as there are pressures.
pub fn check_p_t(pressures: &[f64], temps: &TempGrid) -> Result<(), KineticsError> {
    if let TempGrid::PerPressure(rows) = temps {
        let len_pressures = pressures.len();
        if rows.len() != len_pressures {
            return Err(KineticsError::shape(format!(
                "# of pressures is {}, while # of temperature arrays is {}",
                len_pressures,
                rows.len()
            )));
        }
        for row in rows {
            if row.len() != len_pressures {
                return Err(KineticsError::shape(format!(
                    "# of pressures is {}, while # of temps in each array is {}",
                    len_pressures,
                    row.len()
                )));
            }
        }
    }
    Ok(())
}

/////////////////////////RATE CONSTANT SURFACE///////////////////////////////////////////////////////////////
type SurfaceMap = BTreeMap<PressureKey, (Vec<f64>, Vec<f64>)>;

/// temperatures and rate constants per pressure key, always of equal length;
/// deserialization goes through [`RateSurface::insert`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SurfaceMap", into = "SurfaceMap")]
pub struct RateSurface {
    entries: SurfaceMap,
}

impl RateSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts temperatures and rate constants under `key`; an existing key is overwritten.
    pub fn insert(
        &mut self,
        key: PressureKey,
        temps: Vec<f64>,
        kts: Vec<f64>,
    ) -> Result<(), KineticsError> {
        if temps.len() != kts.len() {
            return Err(KineticsError::shape(format!(
                "At pressure {} there are {} temperatures but {} rate constants",
                key,
                temps.len(),
                kts.len()
            )));
        }
        self.entries.insert(key, (temps, kts));
        Ok(())
    }

    pub fn get(&self, key: &PressureKey) -> Option<(&[f64], &[f64])> {
        self.entries
            .get(key)
            .map(|(t, k)| (t.as_slice(), k.as_slice()))
    }

    pub fn high(&self) -> Option<(&[f64], &[f64])> {
        self.get(&PressureKey::HighPressureLimit)
    }

    pub fn contains_key(&self, key: &PressureKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &PressureKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PressureKey, (Vec<f64>, Vec<f64>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// prints the surface as a table: one row per temperature, one column per pressure key
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        for (key, (temps, kts)) in self.entries.iter() {
            table.add_row(Row::new(vec![Cell::new(&format!("P = {}", key))]));
            let header_row = vec![Cell::new("T, K"), Cell::new("k")];
            table.add_row(Row::new(header_row));
            for (t, k) in temps.iter().zip(kts.iter()) {
                let row = vec![Cell::new(&t.to_string()), Cell::new(&format!("{:.6e}", k))];
                table.add_row(Row::new(row));
            }
        }
        table.printstd();
    }
}

impl TryFrom<SurfaceMap> for RateSurface {
    type Error = KineticsError;
    fn try_from(entries: SurfaceMap) -> Result<Self, Self::Error> {
        let mut surface = RateSurface::new();
        for (key, (temps, kts)) in entries {
            surface.insert(key, temps, kts)?;
        }
        Ok(surface)
    }
}

impl From<RateSurface> for SurfaceMap {
    fn from(surface: RateSurface) -> Self {
        surface.entries
    }
}

impl<'a> IntoIterator for &'a RateSurface {
    type Item = (&'a PressureKey, &'a (Vec<f64>, Vec<f64>));
    type IntoIter = btree_map::Iter<'a, PressureKey, (Vec<f64>, Vec<f64>)>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/////////////////////////SURFACE ASSEMBLER///////////////////////////////////////////////////////////////
/// k(T) computed at one requested pressure; `idx` is the position of the pressure in the request
#[derive(Debug, Clone)]
pub struct KpEntry {
    pub idx: usize,
    pub pressure: f64,
    pub kts: Vec<f64>,
}

/// Normalizes per-pressure k(T) arrays into a surface. If `highp` is given, the high-pressure limit
/// is evaluated and stored under the reserved key.
pub fn ktp(
    kp: Vec<KpEntry>,
    temps: &TempGrid,
    highp: Option<(&ArrheniusParams, f64, f64)>,
) -> Result<RateSurface, KineticsError> {
    match temps {
        TempGrid::Shared(shared) => ktp_shared_grid(kp, shared, highp),
        TempGrid::PerPressure(rows) => ktp_per_pressure_grid(kp, rows, highp),
    }
}

/// surface for a temperature array shared by all pressures
pub fn ktp_shared_grid(
    kp: Vec<KpEntry>,
    temps: &[f64],
    highp: Option<(&ArrheniusParams, f64, f64)>,
) -> Result<RateSurface, KineticsError> {
    let mut surface = RateSurface::new();
    for entry in kp {
        surface.insert(PressureKey::Finite(entry.pressure), temps.to_vec(), entry.kts)?;
    }
    if let Some((high, t_ref, rc)) = highp {
        let kts = high.k_vec(temps, t_ref, rc);
        surface.insert(PressureKey::HighPressureLimit, temps.to_vec(), kts)?;
    }
    Ok(surface)
}

/// surface for a grid with its own temperature array per pressure;
/// the high-pressure limit uses the last temperature array
pub fn ktp_per_pressure_grid(
    kp: Vec<KpEntry>,
    rows: &[Vec<f64>],
    highp: Option<(&ArrheniusParams, f64, f64)>,
) -> Result<RateSurface, KineticsError> {
    let mut surface = RateSurface::new();
    for entry in kp {
        let temps = rows.get(entry.idx).ok_or_else(|| {
            KineticsError::shape(format!(
                "No temperature row for pressure {} (index {})",
                entry.pressure, entry.idx
            ))
        })?;
        surface.insert(PressureKey::Finite(entry.pressure), temps.clone(), entry.kts)?;
    }
    if let Some((high, t_ref, rc)) = highp {
        let temps = rows
            .last()
            .ok_or_else(|| KineticsError::shape("Temperature grid has no rows"))?;
        let kts = high.k_vec(temps, t_ref, rc);
        surface.insert(PressureKey::HighPressureLimit, temps.clone(), kts)?;
    }
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RC_CAL;
    use serde_json::json;

    #[test]
    fn test_key_ordering() {
        let mut keys = vec![
            PressureKey::HighPressureLimit,
            PressureKey::Finite(10.0),
            PressureKey::Finite(0.1),
            PressureKey::Finite(1.0),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                PressureKey::Finite(0.1),
                PressureKey::Finite(1.0),
                PressureKey::Finite(10.0),
                PressureKey::HighPressureLimit,
            ]
        );
        assert!(PressureKey::Finite(1.0e30) < PressureKey::HighPressureLimit);
    }

    #[test]
    fn test_key_serialization() {
        let mut surface = RateSurface::new();
        surface
            .insert(PressureKey::Finite(1.0), vec![300.0], vec![2.0])
            .unwrap();
        surface
            .insert(PressureKey::HighPressureLimit, vec![300.0], vec![5.0])
            .unwrap();
        let value = serde_json::to_value(&surface).unwrap();
        assert_eq!(value, json!({"1": [[300.0], [2.0]], "high": [[300.0], [5.0]]}));
        let back: RateSurface = serde_json::from_value(value).unwrap();
        assert_eq!(back, surface);
    }

    #[test]
    fn test_deserialize_rejects_length_mismatch() {
        let res = serde_json::from_str::<RateSurface>(r#"{"1": [[300.0, 400.0], [1.0]]}"#);
        assert!(res.is_err());
        let res = serde_json::from_value::<RateSurface>(json!({"high": [[300.0], [1.0, 2.0]]}));
        assert!(res.is_err());
        let surface: RateSurface = serde_json::from_str(r#"{"1": [[300.0, 400.0], [1.0, 2.0]]}"#).unwrap();
        assert_eq!(surface.get(&PressureKey::Finite(1.0)).unwrap().1, &[1.0, 2.0]);
    }

    #[test]
    fn test_insert_rejects_length_mismatch() {
        let mut surface = RateSurface::new();
        let res = surface.insert(PressureKey::Finite(1.0), vec![300.0, 400.0], vec![1.0]);
        assert!(matches!(res, Err(KineticsError::ShapeError(_))));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_check_p_t() {
        let pressures = [1.0, 10.0];
        assert!(check_p_t(&pressures, &TempGrid::Shared(vec![300.0, 400.0, 500.0])).is_ok());
        let ok = TempGrid::PerPressure(vec![vec![300.0, 400.0], vec![500.0, 600.0]]);
        assert!(check_p_t(&pressures, &ok).is_ok());
        let wrong_len = TempGrid::PerPressure(vec![vec![300.0, 400.0, 500.0], vec![500.0, 600.0, 700.0]]);
        assert!(matches!(
            check_p_t(&pressures, &wrong_len),
            Err(KineticsError::ShapeError(_))
        ));
        let wrong_rows = TempGrid::PerPressure(vec![vec![300.0, 400.0]]);
        assert!(matches!(
            check_p_t(&pressures, &wrong_rows),
            Err(KineticsError::ShapeError(_))
        ));
    }

    #[test]
    fn test_grid_from_json() {
        let grid = TempGrid::from_json(&json!([300.0, 400.0])).unwrap();
        assert_eq!(grid, TempGrid::Shared(vec![300.0, 400.0]));
        assert_eq!(grid.rank(), 1);
        let grid = TempGrid::from_json(&json!([[300.0, 400.0], [500, 600]])).unwrap();
        assert_eq!(grid.rank(), 2);
        assert_eq!(grid.temps_for(1).unwrap(), &[500.0, 600.0]);
        for bad in [json!(300.0), json!([[[300.0]]]), json!([300.0, [400.0]]), json!([[1.0], [1.0, 2.0]])] {
            assert!(matches!(
                TempGrid::from_json(&bad),
                Err(KineticsError::ShapeError(_))
            ));
        }
    }

    #[test]
    fn test_assembler_shared_and_per_pressure() {
        let high = ArrheniusParams::new(2.0, 0.0, 0.0);
        let kp = vec![
            KpEntry { idx: 0, pressure: 1.0, kts: vec![1.0, 1.0] },
            KpEntry { idx: 1, pressure: 10.0, kts: vec![3.0, 3.0] },
        ];
        let shared = TempGrid::Shared(vec![300.0, 400.0]);
        let surface = ktp(kp.clone(), &shared, Some((&high, 1.0, RC_CAL))).unwrap();
        assert_eq!(surface.len(), 3);
        assert_eq!(surface.high().unwrap(), (&[300.0, 400.0][..], &[2.0, 2.0][..]));

        let rows = TempGrid::PerPressure(vec![vec![300.0, 400.0], vec![800.0, 900.0]]);
        let surface = ktp(kp, &rows, Some((&high, 1.0, RC_CAL))).unwrap();
        let (temps, kts) = surface.get(&PressureKey::Finite(10.0)).unwrap();
        assert_eq!(temps, &[800.0, 900.0]);
        assert_eq!(kts, &[3.0, 3.0]);
        // the high-pressure limit follows the last temperature row
        assert_eq!(surface.high().unwrap().0, &[800.0, 900.0]);
    }

    #[test]
    fn test_assembler_without_high_limit() {
        let kp = vec![KpEntry { idx: 0, pressure: 1.0, kts: vec![1.0] }];
        let surface = ktp(kp, &TempGrid::Shared(vec![300.0]), None).unwrap();
        assert!(surface.high().is_none());
        assert_eq!(surface.len(), 1);
    }
}
