//! Minimax coefficient tables of the restricted-domain approximations.
//!
//! Polynomial tables are lowest degree first. Rational tables list the
//! numerator followed by the denominator without its unit constant term; their
//! numerator degree is recorded next to the table in [`Real`](crate::Real).
//! Each table was fitted for relative error over the interval documented on the
//! matching `Real` constant.

#![allow(clippy::excessive_precision)]

/// Binary32 tables.
pub mod binary32 {
    pub const EXP2WC: [f32; 7] = [
        1.0,
        0.6931471825,
        0.2402264774,
        0.05550328642,
        0.009618473239,
        0.001339996699,
        0.0001534993062,
    ];

    /// Numerator degree 3.
    pub const EXPM1WC: [f32; 6] = [
        1.0,
        0.1667540818,
        0.03334082663,
        0.002774271183,
        -0.3332459331,
        0.03329722956,
    ];

    pub const LOG2WC: [f32; 4] = [2.885390043, 0.9617988467, 0.5767140388, 0.4317435324];

    pub const SINWC: [f32; 4] = [1.0, -0.1666665077, 0.008332016878, -0.0001950185106];

    pub const COSWC: [f32; 5] = [
        1.0,
        -0.5,
        0.04166661203,
        -0.001388652949,
        2.43727045e-05,
    ];

    /// Numerator degree 3.
    pub const ATANWC: [f32; 7] = [
        1.0,
        1.130967259,
        0.2873919308,
        0.008971271105,
        1.464300513,
        0.5754945278,
        0.0507780984,
    ];

    /// Numerator degree 3.
    pub const ERFWC: [f32; 7] = [
        1.128379226,
        0.1140402332,
        0.03365939483,
        6.894098988e-06,
        0.4343988597,
        0.074629426,
        0.005252580624,
    ];

    /// Numerator degree 5.
    pub const ERFCWC: [f32; 11] = [
        0.5641896129,
        2.431079149,
        6.260219097,
        8.525938988,
        5.530305386,
        -0.004407215398,
        4.308976173,
        11.59592533,
        17.2670536,
        14.83873081,
        5.498717308,
    ];
}

/// Binary64 tables.
pub mod binary64 {
    pub const EXP2WC: [f64; 12] = [
        1.0,
        0.6931471805599453,
        0.24022650695910155,
        0.05550410866481996,
        0.00961812910758829,
        0.0013333558146782093,
        0.00015403530462564886,
        1.5252733497208434e-05,
        1.3215433066552413e-06,
        1.0178195114471846e-07,
        7.074109320569294e-09,
        4.4357078140165523e-10,
    ];

    /// Numerator degree 5.
    pub const EXPM1WC: [f64; 11] = [
        1.0,
        0.045461003951309,
        0.030301282652494477,
        0.0012626551493311038,
        0.0001262210229682678,
        3.0041737072391915e-06,
        -0.454538996048691,
        0.09090411401017331,
        -0.010099569180973919,
        0.0006311114471217232,
        -1.8025358588933474e-05,
    ];

    pub const LOG2WC: [f64; 8] = [
        2.8853900817779268,
        0.9617966939259899,
        0.5770780163454505,
        0.4121985858551227,
        0.3205985335325956,
        0.26233442136852453,
        0.2209113820546663,
        0.2136754848252165,
    ];

    pub const SINWC: [f64; 7] = [
        1.0,
        -0.16666666666666616,
        0.008333333333319998,
        -0.0001984126982839936,
        2.755731329815515e-06,
        -2.5050705723122816e-08,
        1.58941297404008e-10,
    ];

    pub const COSWC: [f64; 8] = [
        1.0,
        -0.5,
        0.04166666666666643,
        -0.0013888888888858957,
        2.480158728289765e-05,
        -2.7557312865271797e-07,
        2.0875555096318168e-09,
        -1.1352120945401512e-11,
    ];

    /// Numerator degree 6.
    pub const ATANWC: [f64; 13] = [
        1.0,
        2.504896790087736,
        2.281547151836768,
        0.9200214488354304,
        0.15893559643735305,
        0.009336816982012577,
        8.042061951379693e-05,
        2.8382301234210665,
        3.027623859644015,
        1.5044405202163094,
        0.34924133311311034,
        0.0329303721389502,
        0.000824218146389796,
    ];

    /// Numerator degree 5.
    pub const ERFWC: [f64; 11] = [
        1.1283791670955126,
        0.14350833432948884,
        0.045483833928352625,
        0.0018774728616214361,
        0.00019688709437230804,
        7.781342397797464e-08,
        0.46051428324300286,
        0.09381375938112119,
        0.010693215614164355,
        0.0006925120717280904,
        2.081088611738351e-05,
    ];

    /// Numerator degree 10.
    pub const ERFCWC: [f64; 21] = [
        0.5641895835477309,
        8.76323008663557,
        70.61136561276254,
        370.2030745315692,
        1368.5752068615684,
        3666.1856446766583,
        7091.482046607432,
        9560.322273970352,
        8203.333687999608,
        3465.5191702091097,
        1.39969464291166e-05,
        15.532420913420578,
        125.65538689864394,
        663.9340754982508,
        2487.8140900573762,
        6818.462563227123,
        13720.865585558995,
        19885.62804986062,
        19763.7124587396,
        12113.752563073964,
        3465.519335821016,
    ];
}
