//! Shared fixtures for integration tests.

#![allow(dead_code)]

use nalgebra::DMatrix;

/// Response column of the 100-observation reference regression.
pub const REFERENCE_Y: [f64; 100] = [
    0.3488717, 0.2668857, 0.1366463, 0.0285569, 0.8689333, 0.3508549, 0.0711051, 0.323368,
    0.5551032, 0.875991, 0.2047095, 0.8927587, 0.5844658, 0.3697791, 0.8506309, 0.3913819,
    0.1196613, 0.7542434, 0.6950234, 0.6866152, 0.9319346, 0.4548882, 0.0674011, 0.3379889,
    0.9748848, 0.7264384, 0.0454151, 0.7459667, 0.4961259, 0.7167162, 0.859742, 0.1340756,
    0.4884419, 0.8712187, 0.7664683, 0.2512555, 0.1663648, 0.7437958, 0.9805113, 0.7295772,
    0.9011049, 0.2643649, 0.8856509, 0.882112, 0.748933, 0.9196262, 0.6934533, 0.2154026,
    0.8285888, 0.0442154, 0.8630378, 0.3526046, 0.7720399, 0.5861199, 0.3227766, 0.1729307,
    0.8053644, 0.3060019, 0.2190997, 0.724731, 0.6964867, 0.9119344, 0.6795634, 0.3549416,
    0.73897, 0.1874017, 0.3146128, 0.1375693, 0.6537739, 0.2701319, 0.8998394, 0.5734232,
    0.1114704, 0.4145227, 0.0030522, 0.6659978, 0.3462876, 0.0780235, 0.1275814, 0.2297006,
    0.3295547, 0.4144089, 0.0360847, 0.0843811, 0.0098762, 0.3200437, 0.005197, 0.2275435,
    0.851468, 0.9820066, 0.0324792, 0.9874847, 0.894106, 0.9684734, 0.2392203, 0.6927336,
    0.4884359, 0.4376452, 0.5858005, 0.3787092,
];

/// First non-constant regressor of the reference regression.
pub const REFERENCE_X1: [f64; 100] = [
    0.6880603, 0.9794578, 0.6701937, 0.5948808, 0.7970893, 0.7835853, 0.6546342, 0.0968891,
    0.6885059, 0.872496, 0.5296353, 0.8302209, 0.9339853, 0.1749891, 0.5536171, 0.5346152,
    0.7767794, 0.1288747, 0.2775184, 0.4242016, 0.1359006, 0.3325624, 0.4675523, 0.5160881,
    0.066943, 0.0722964, 0.6817465, 0.0880495, 0.1327082, 0.8745816, 0.2468877, 0.043255,
    0.3764437, 0.7677861, 0.7551366, 0.4476188, 0.4087105, 0.2977743, 0.6794177, 0.7124024,
    0.5662265, 0.1778325, 0.113999, 0.5955869, 0.6251604, 0.634899, 0.9944572, 0.7497677,
    0.1736788, 0.6107705, 0.5754215, 0.3678161, 0.3005246, 0.007538, 0.6701369, 0.4241406,
    0.9537622, 0.0867478, 0.8949648, 0.5890286, 0.4005832, 0.6654902, 0.4198386, 0.7472054,
    0.7190143, 0.8464647, 0.7908313, 0.1900222, 0.3869604, 0.2387134, 0.3447002, 0.7795682,
    0.7484396, 0.2303784, 0.1677032, 0.9180508, 0.3138996, 0.9019141, 0.0774052, 0.6341382,
    0.8147295, 0.8788922, 0.0259935, 0.17993, 0.5778896, 0.4081415, 0.6155495, 0.174577,
    0.3617646, 0.1338996, 0.0013631, 0.2571, 0.6517417, 0.9252081, 0.8233367, 0.9229402,
    0.7480426, 0.5214148, 0.4022151, 0.8681989,
];

/// Second non-constant regressor of the reference regression.
pub const REFERENCE_X2: [f64; 100] = [
    0.2726605, 0.7239472, 0.7955464, 0.8925074, 0.7078791, 0.365269, 0.9310499, 0.6216809,
    0.8004354, 0.4798372, 0.142948, 0.8343448, 0.3431251, 0.5906867, 0.32953, 0.6996295,
    0.8142969, 0.3429726, 0.1079681, 0.9671743, 0.1285523, 0.7578536, 0.25003, 0.9269138,
    0.7118431, 0.1796715, 0.4506519, 0.1946068, 0.7135741, 0.2453114, 0.7672456, 0.3653557,
    0.2706914, 0.9911318, 0.6851298, 0.5027668, 0.6903818, 0.8636012, 0.0404633, 0.1842219,
    0.4198807, 0.6475499, 0.9103145, 0.6809221, 0.8568827, 0.0642018, 0.8390664, 0.6208202,
    0.4041756, 0.9786366, 0.3627681, 0.3138244, 0.6380712, 0.1869937, 0.5053477, 0.5276305,
    0.7853414, 0.4717338, 0.2299842, 0.7976828, 0.1649395, 0.932945, 0.3999315, 0.9881987,
    0.9287856, 0.6640378, 0.0368038, 0.3336498, 0.7824295, 0.0170049, 0.2278204, 0.5782465,
    0.7533595, 0.8570072, 0.9322746, 0.324447, 0.1637711, 0.958201, 0.6008608, 0.9733476,
    0.2363827, 0.6764786, 0.1459103, 0.2966402, 0.8219558, 0.3213928, 0.4164997, 0.0236964,
    0.3125404, 0.9322619, 0.0502046, 0.6221892, 0.6189114, 0.9028944, 0.3830579, 0.3513705,
    0.6978495, 0.7828125, 0.8312564, 0.8498105,
];

/// `(Y, X)` with X laid out as `[x1, x2, 1]`.
pub fn reference_regression() -> (DMatrix<f64>, DMatrix<f64>) {
    let y = DMatrix::from_column_slice(100, 1, &REFERENCE_Y);
    let mut columns = Vec::with_capacity(300);
    columns.extend_from_slice(&REFERENCE_X1);
    columns.extend_from_slice(&REFERENCE_X2);
    columns.extend(std::iter::repeat(1.0).take(100));
    let x = DMatrix::from_column_slice(100, 3, &columns);
    (y, x)
}
