use super::{RefrigerantData, Table};

/// Saturation table for R134a.
///
/// Columns: `T` [°C], `P` [kPa], `h_f`, `h_g` [kJ/kg], `ρ_l`, `ρ_v` [kg/m³],
/// `cp_l`, `cp_v` [kJ/kg·K], `μ_l`, `μ_v` [µPa·s], `k_l`, `k_v` [mW/m·K].
const ROWS: [[f64; 12]; 11] = [
    [-20.0, 132.7, 173.6, 386.6, 1358.0, 6.78, 1.293, 0.816, 332.0, 10.0, 101.0, 9.9],
    [-10.0, 200.6, 186.7, 392.7, 1327.0, 10.0, 1.316, 0.854, 289.0, 10.4, 96.6, 10.6],
    [0.0, 293.0, 200.0, 398.6, 1295.0, 14.43, 1.341, 0.897, 254.0, 10.8, 92.0, 11.5],
    [10.0, 414.9, 213.6, 404.3, 1261.0, 20.23, 1.370, 0.946, 224.0, 11.2, 87.5, 12.4],
    [20.0, 571.7, 227.5, 409.8, 1225.0, 27.78, 1.405, 1.001, 198.0, 11.6, 83.0, 13.5],
    [30.0, 770.2, 241.7, 414.8, 1187.0, 37.54, 1.446, 1.065, 175.0, 12.1, 78.6, 14.5],
    [40.0, 1016.6, 256.4, 419.4, 1147.0, 50.09, 1.498, 1.145, 155.0, 12.6, 74.2, 15.8],
    [50.0, 1318.1, 271.6, 423.4, 1102.0, 66.27, 1.566, 1.246, 137.0, 13.2, 69.9, 17.3],
    [60.0, 1681.8, 287.5, 426.6, 1053.0, 87.38, 1.660, 1.387, 120.0, 14.0, 65.5, 19.1],
    [70.0, 2116.2, 304.3, 428.7, 996.0, 115.6, 1.804, 1.602, 104.0, 14.9, 61.1, 21.4],
    [80.0, 2632.8, 322.4, 429.0, 928.0, 155.0, 2.065, 1.983, 88.0, 16.2, 56.6, 24.6],
];

pub(super) const DATA: RefrigerantData = RefrigerantData {
    table: Table::new(&ROWS),
    critical_pressure: 4059.0,
    ideal_gas_cp: 0.85,
};
