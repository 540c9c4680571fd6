//! Shipped regression coefficients, least-squares fit offline to the embedded
//! tables. `shipped_fits_match_refitting_the_tables` keeps them in step.
//!
//! Term order as in [`Quadratic::features`].

use crate::regression::Quadratic;

pub mod g1 {
    use crate::regression::Quadratic;

    pub const TAKEOFF_GROUND_ROLL: Quadratic = Quadratic::new(
        4.9209587585e+02,
        [
            -1.6729761905e-01, -8.1058832908e-02, -9.2833758503e+00,
            6.6333333333e-05, 2.4132142857e-05, 2.9063492063e-03,
            1.1117931548e-06, 2.6725056689e-04, -3.6375661376e-05,
        ],
    );
    pub const TAKEOFF_TOTAL_DISTANCE: Quadratic = Quadratic::new(
        1.3434525935e+03,
        [
            -2.3514285714e-01, -1.1770934311e-01, -1.3456660998e+01,
            9.5500000000e-05, 3.5021428571e-05, 4.2134920635e-03,
            1.6132812500e-06, 3.8724489796e-04, -5.9523809524e-05,
        ],
    );
    pub const TAKEOFF_CLIMB_GRADIENT: Quadratic = Quadratic::new(
        2.1200000000e+03,
        [
            -1.6000000000e-01, -3.5000000000e-02, -5.0000000000e+00,
            0.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
        ],
    );
    pub const TAKEOFF_CLIMB_RATE: Quadratic = Quadratic::new(
        4.4148202062e+03,
        [
            -3.3265029762e-01, -8.2918665497e-02, -1.0414253827e+01,
            -6.2500000000e-08, -1.0714285714e-09, -5.9523809524e-07,
            1.2555803571e-09, -2.1258503401e-08, 2.4801587302e-06,
        ],
    );
    pub const LANDING_100_GROUND_ROLL: Quadratic = Quadratic::new(
        -8.9315270800e-01,
        [
            2.0060962669e-01, -1.8453595663e-03, -3.5088963733e-01,
            -3.7518037518e-07, 5.3208171486e-06, 6.4957560063e-04,
            4.2162698413e-09, 7.2448979592e-05, 4.9603174603e-05,
        ],
    );
    pub const LANDING_100_TOTAL_DISTANCE: Quadratic = Quadratic::new(
        7.1507900290e+02,
        [
            3.3427518096e-01, -3.0515671349e-03, -5.8418103596e-01,
            3.3670033670e-08, 9.0436627823e-06, 1.1030211480e-03,
            2.4801587302e-10, 1.2374149660e-04, 3.9682539683e-05,
        ],
    );
    pub const LANDING_50_GROUND_ROLL: Quadratic = Quadratic::new(
        6.5776395654e+00,
        [
            2.4193740309e-01, -2.2095929157e-03, -4.6843473190e-01,
            -2.1164021164e-07, 6.5030930801e-06, 8.0008631852e-04,
            -4.4642857143e-09, 8.8897959184e-05, 8.9285714286e-05,
        ],
    );
    pub const LANDING_50_TOTAL_DISTANCE: Quadratic = Quadratic::new(
        7.7166629982e+02,
        [
            4.0700567392e-01, -3.8656524669e-03, -7.7152766645e-01,
            7.2150072150e-08, 1.1061070350e-05, 1.3579197238e-03,
            2.4801587302e-10, 1.5131972789e-04, -7.9365079365e-05,
        ],
    );
    pub const LANDING_50_ICE_GROUND_ROLL: Quadratic = Quadratic::new(
        -3.4243611667e+00,
        [
            3.1574864419e-01, 5.8235550640e-04, -5.6696026951e-01,
            -5.0505050505e-08, 7.7614372033e-06, 1.0318731118e-03,
            -2.6041666667e-09, 1.1619047619e-04, -2.7777777778e-04,
        ],
    );
    pub const LANDING_50_ICE_TOTAL_DISTANCE: Quadratic = Quadratic::new(
        7.4342946911e+02,
        [
            5.3680110993e-01, 1.1803309776e-03, -9.7281470292e-01,
            -5.7720057720e-08, 1.3140483384e-05, 1.7577039275e-03,
            3.3482142857e-09, 1.9800000000e-04, 8.3333333333e-04,
        ],
    );
}

pub mod g2_plus {
    use crate::regression::Quadratic;

    pub const TAKEOFF_GROUND_ROLL: Quadratic = Quadratic::new(
        4.3793530329e+02,
        [
            -1.4877678571e-01, -7.3002561650e-02, -8.3513747166e+00,
            5.9541666667e-05, 2.1723214286e-05, 2.6148809524e-03,
            1.0020461310e-06, 2.4061224490e-04, -8.5978835979e-05,
        ],
    );
    pub const TAKEOFF_TOTAL_DISTANCE: Quadratic = Quadratic::new(
        1.2112660856e+03,
        [
            -2.0723809524e-01, -1.0379282526e-01, -1.1842342215e+01,
            8.4166666667e-05, 3.0875000000e-05, 3.7103174603e-03,
            1.4216889881e-06, 3.4125283447e-04, 3.6375661376e-05,
        ],
    );
    pub const TAKEOFF_CLIMB_GRADIENT: Quadratic = Quadratic::new(
        2.1800000000e+03,
        [
            -1.6000000000e-01, -3.5000000000e-02, -5.0000000000e+00,
            0.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
        ],
    );
    pub const TAKEOFF_CLIMB_RATE: Quadratic = Quadratic::new(
        4.5433464073e+03,
        [
            -3.3398065476e-01, -8.2894623724e-02, -1.0419844813e+01,
            6.2500000000e-08, -6.0714285714e-09, 5.9523809524e-07,
            5.5803571429e-10, 1.7431972789e-07, -2.4801587302e-06,
        ],
    );
    pub const LANDING_100_GROUND_ROLL: Quadratic = Quadratic::new(
        1.0126813794e+01,
        [
            1.9012506303e-01, -1.6901418347e-03, -3.3670301807e-01,
            7.6960076960e-08, 5.1611278953e-06, 6.3130484822e-04,
            -5.2083333333e-09, 7.0625850340e-05, -1.4880952381e-04,
        ],
    );
    pub const LANDING_100_TOTAL_DISTANCE: Quadratic = Quadratic::new(
        6.9334473761e+02,
        [
            3.2459665930e-01, -2.9569790832e-03, -6.1457287749e-01,
            -1.4430014430e-08, 8.7601064595e-06, 1.0762624083e-03,
            3.7202380952e-09, 1.2099319728e-04, 1.7857142857e-04,
        ],
    );
    pub const LANDING_50_GROUND_ROLL: Quadratic = Quadratic::new(
        1.7096988806e+01,
        [
            2.3031182273e-01, -2.1885118448e-03, -4.2105332566e-01,
            2.3569023569e-07, 6.3106747231e-06, 7.7138541217e-04,
            -4.9603174603e-10, 8.5904761905e-05, -7.9365079365e-05,
        ],
    );
    pub const LANDING_50_TOTAL_DISTANCE: Quadratic = Quadratic::new(
        7.5138828561e+02,
        [
            3.9356139223e-01, -3.7180232717e-03, -7.4867263018e-01,
            2.0683020683e-07, 1.0725291325e-05, 1.3161127895e-03,
            -1.9841269841e-09, 1.4663945578e-04, -1.9841269841e-05,
        ],
    );
    pub const LANDING_50_ICE_GROUND_ROLL: Quadratic = Quadratic::new(
        -3.4956052759e+00,
        [
            3.0619796694e-01, 5.2998453460e-04, -5.7597995492e-01,
            -2.1645021645e-08, 7.5244928787e-06, 1.0062940584e-03,
            2.9761904762e-09, 1.1271428571e-04, -1.3888888889e-04,
        ],
    );
    pub const LANDING_50_ICE_TOTAL_DISTANCE: Quadratic = Quadratic::new(
        7.2850890901e+02,
        [
            5.1766154096e-01, 1.0057342469e-03, -9.3422457200e-01,
            2.5252525253e-07, 1.2776111351e-05, 1.7048841893e-03,
            7.4404761905e-10, 1.8966666667e-04, 4.1666666667e-04,
        ],
    );
}

pub const VREF_UP: Quadratic = Quadratic::new(
    4.3800000000e+01,
    [
        1.5314285714e-02, 0.0, 0.0,
        -5.7142857143e-07, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
);
pub const VREF_UP_ICE: Quadratic = Quadratic::new(
    6.0600000000e+01,
    [
        1.3457142857e-02, 0.0, 0.0,
        -2.8571428571e-07, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
);
pub const VREF_50: Quadratic = Quadratic::new(
    5.1000000000e+01,
    [
        8.0000000000e-03, 0.0, 0.0,
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
);
pub const VREF_50_ICE: Quadratic = Quadratic::new(
    3.8400000000e+01,
    [
        1.7571428571e-02, 0.0, 0.0,
        -8.5714285714e-07, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
);
pub const VREF_100: Quadratic = Quadratic::new(
    3.1800000000e+01,
    [
        1.3314285714e-02, 0.0, 0.0,
        -5.7142857143e-07, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
);
pub const ENROUTE_CLIMB_GRADIENT: Quadratic = Quadratic::new(
    1.1500000000e+03,
    [
        -1.0000000000e-01, -2.0000000000e-02, -2.5000000000e+00,
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
);
pub const ENROUTE_CLIMB_RATE: Quadratic = Quadratic::new(
    2.7901118470e+03,
    [
        -1.5599111111e-01, -2.2358761905e-02, -6.0096666667e+00,
        -7.9555555556e-06, -3.1328888889e-06, -2.0066666667e-04,
        -6.3309523810e-07, -5.2533333333e-05, -3.2467532468e-06,
    ],
);
pub const ENROUTE_CLIMB_SPEED: Quadratic = Quadratic::new(
    1.4720000000e+02,
    [
        4.0000000000e-03, -1.5200000000e-03, 0.0,
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
);
pub const ICE_ENROUTE_CLIMB_GRADIENT: Quadratic = Quadratic::new(
    7.8433835714e+02,
    [
        -6.9886285714e-02, -1.3985500000e-02, -1.7536035714e+00,
        0.0, -2.0000000000e-09, 9.1428571429e-07,
        -3.5714285714e-10, -4.2857142857e-08, 4.4642857143e-05,
    ],
);
pub const ICE_ENROUTE_CLIMB_RATE: Quadratic = Quadratic::new(
    2.0292110714e+03,
    [
        -1.1981380952e-01, -1.5764404762e-02, -4.4897321429e+00,
        -5.8333333333e-06, -2.4220000000e-06, -1.4114285714e-04,
        -4.9226190476e-07, -4.2842857143e-05, 8.0357142857e-05,
    ],
);
pub const ICE_ENROUTE_CLIMB_SPEED: Quadratic = Quadratic::new(
    1.5720000000e+02,
    [
        4.0000000000e-03, -1.5200000000e-03, 0.0,
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
    ],
);
pub const TIME_TO_CLIMB: Quadratic = Quadratic::new(
    1.3911303511e+00,
    [
        -2.7990740741e-04, -3.8912533069e-04, -8.4688888889e-02,
        2.7777777778e-09, 1.7703703704e-07, 1.4616666667e-05,
        1.0807291667e-08, 5.5560515873e-06, 1.0822510823e-06,
    ],
);
pub const FUEL_TO_CLIMB: Quadratic = Quadratic::new(
    8.2880910293e+00,
    [
        -1.5713425926e-03, -2.4260722553e-03, -5.2900902778e-01,
        -1.3888888889e-09, 1.1002050265e-06, 9.1341666667e-05,
        6.6992187500e-08, 3.4452876984e-05, -6.0876623377e-07,
    ],
);
pub const DISTANCE_TO_CLIMB: Quadratic = Quadratic::new(
    9.6925871813e+00,
    [
        -1.7989351852e-03, -2.5280282738e-03, -3.3549583333e-01,
        4.1666666667e-09, 7.0396164021e-07, 5.3400000000e-05,
        7.7766410384e-08, 2.2060267857e-05, 2.2997835498e-06,
    ],
);
