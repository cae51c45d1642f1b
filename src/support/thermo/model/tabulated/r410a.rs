use super::{RefrigerantData, Table};

/// Saturation table for R410A, bubble-point liquid and dew-point vapor.
///
/// Columns as in the R134a table.
const ROWS: [[f64; 12]; 9] = [
    [-20.0, 399.0, 172.5, 414.6, 1276.0, 16.0, 1.39, 1.05, 223.0, 11.3, 115.0, 10.9],
    [-10.0, 573.0, 186.0, 417.3, 1242.0, 22.6, 1.42, 1.12, 196.0, 11.7, 109.0, 11.7],
    [0.0, 798.0, 200.0, 419.6, 1206.0, 31.0, 1.46, 1.21, 172.0, 12.2, 103.0, 12.6],
    [10.0, 1085.0, 214.5, 421.3, 1167.0, 41.8, 1.51, 1.33, 152.0, 12.7, 97.5, 13.7],
    [20.0, 1444.0, 229.6, 422.1, 1125.0, 55.7, 1.58, 1.50, 134.0, 13.3, 92.0, 15.0],
    [30.0, 1885.0, 245.5, 421.9, 1079.0, 73.6, 1.68, 1.73, 118.0, 14.0, 86.5, 16.6],
    [40.0, 2420.0, 262.5, 420.2, 1026.0, 97.2, 1.84, 2.07, 103.0, 14.9, 81.0, 18.7],
    [50.0, 3062.0, 281.0, 416.2, 963.0, 129.7, 2.12, 2.65, 89.0, 16.1, 75.0, 21.6],
    [60.0, 3826.0, 302.0, 408.0, 881.0, 178.0, 2.75, 3.9, 75.0, 17.8, 69.0, 26.0],
];

pub(super) const DATA: RefrigerantData = RefrigerantData {
    table: Table::new(&ROWS),
    critical_pressure: 4901.0,
    ideal_gas_cp: 0.82,
};
