// @generated by `cargo xtask grammar generate`. Do not edit by hand.
//
// LALR(1) automaton for the Volt template grammar.
// 274 states, 114 rules, 3555 action entries, 633 goto entries.

pub const STATE_COUNT: usize = 274;

pub static ACTION_ROWS: [u16; 275] = [
    0, 3, 18, 30, 34, 35, 36, 40, 44, 48, 52, 56, 60, 64, 68, 72,
    76, 80, 84, 88, 92, 96, 100, 104, 108, 112, 116, 128, 140, 141, 142, 143,
    144, 145, 157, 158, 170, 182, 184, 185, 186, 198, 210, 222, 235, 247, 283, 319,
    355, 391, 427, 463, 499, 527, 563, 567, 595, 623, 627, 629, 630, 631, 632, 661,
    662, 691, 719, 720, 721, 725, 729, 765, 801, 837, 873, 903, 932, 934, 936, 964,
    968, 980, 992, 1004, 1016, 1028, 1040, 1053, 1065, 1077, 1089, 1101, 1113, 1125, 1137, 1149,
    1161, 1173, 1185, 1197, 1209, 1221, 1233, 1245, 1246, 1259, 1272, 1284, 1287, 1291, 1292, 1304,
    1316, 1318, 1321, 1324, 1325, 1329, 1333, 1345, 1349, 1352, 1355, 1367, 1379, 1415, 1451, 1487,
    1515, 1551, 1587, 1623, 1659, 1672, 1708, 1744, 1780, 1816, 1852, 1888, 1924, 1960, 1996, 2032,
    2068, 2104, 2140, 2176, 2212, 2248, 2284, 2320, 2332, 2334, 2363, 2392, 2420, 2421, 2457, 2487,
    2516, 2518, 2520, 2556, 2559, 2560, 2589, 2617, 2618, 2621, 2623, 2625, 2641, 2644, 2647, 2650,
    2678, 2681, 2684, 2713, 2715, 2727, 2763, 2799, 2800, 2801, 2802, 2838, 2841, 2853, 2865, 2901,
    2918, 2930, 2933, 2945, 2949, 2952, 2958, 2959, 2960, 2961, 2977, 2993, 2996, 3000, 3016, 3032,
    3068, 3104, 3140, 3141, 3170, 3172, 3173, 3174, 3203, 3206, 3234, 3237, 3239, 3241, 3243, 3245,
    3247, 3249, 3251, 3253, 3256, 3260, 3261, 3262, 3278, 3279, 3280, 3316, 3319, 3323, 3326, 3338,
    3354, 3357, 3373, 3376, 3380, 3384, 3385, 3389, 3393, 3396, 3399, 3427, 3428, 3431, 3432, 3448,
    3452, 3468, 3484, 3487, 3491, 3507, 3511, 3512, 3513, 3514, 3517, 3518, 3522, 3526, 3530, 3546,
    3550, 3551, 3555,
];

pub static ACTION_SYMBOLS: [u8; 3555] = [
    1, 3, 5, 2, 46, 48, 49, 51, 53, 54, 56, 58, 60, 61, 63, 64,
    66, 67, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 0, 1,
    3, 5, 0, 0, 0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5,
    0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5,
    0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5,
    0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5,
    0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5, 0, 1, 3, 5,
    0, 1, 3, 5, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43,
    24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 2, 40, 40, 40,
    40, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 39, 24, 25,
    31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37,
    38, 39, 40, 41, 42, 43, 42, 43, 2, 2, 24, 25, 31, 32, 34, 37,
    38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41,
    42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25,
    31, 32, 33, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34,
    37, 38, 39, 40, 41, 42, 43, 2, 4, 6, 7, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2,
    4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36,
    37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2,
    4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36,
    37, 46, 62, 4, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 34, 36, 2,
    4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36,
    37, 46, 62, 0, 1, 3, 5, 2, 7, 8, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 34, 36, 2, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 34, 36, 0,
    1, 3, 5, 6, 7, 45, 34, 2, 2, 7, 8, 10, 11, 12, 13, 14,
    15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 32, 34, 36, 37, 2, 2, 7, 8, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    34, 36, 62, 2, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 34, 36, 2,
    2, 0, 1, 3, 5, 0, 1, 3, 5, 2, 4, 6, 7, 8, 9, 10,
    11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6,
    7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
    23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46,
    62, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34,
    35, 36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14,
    15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 32, 33, 34, 35, 36, 37, 46, 62, 6, 7, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 36, 6, 7, 8, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 36, 6, 33, 6, 33, 7, 8, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 34, 35, 36, 0, 1, 3, 5, 24, 25, 31, 32, 34, 37, 38, 39,
    40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43,
    24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32,
    34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39,
    40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43,
    24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 44, 24, 25, 31,
    32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38,
    39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42,
    43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31,
    32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38,
    39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42,
    43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31,
    32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38,
    39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42,
    43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31,
    32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38,
    39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42,
    43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 7, 9, 24,
    25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34,
    35, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39,
    40, 41, 42, 43, 1, 3, 5, 0, 1, 3, 5, 40, 24, 25, 31, 32,
    34, 37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39,
    40, 41, 42, 43, 35, 40, 1, 3, 5, 1, 3, 5, 2, 0, 1, 3,
    5, 0, 1, 3, 5, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42,
    43, 0, 1, 3, 5, 1, 3, 5, 1, 3, 5, 24, 25, 31, 32, 34,
    37, 38, 39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40,
    41, 42, 43, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 34, 36, 2, 4, 6, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2,
    4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36,
    37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 24, 25, 31, 32, 34,
    37, 38, 39, 40, 41, 42, 43, 44, 2, 4, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62,
    2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
    36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62,
    2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
    36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62,
    2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
    36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62,
    2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
    36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62,
    24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 37, 40, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 36, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 36, 7, 8, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 36, 9, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14,
    15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 32, 33, 34, 35, 36, 37, 46, 62, 6, 7, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 34, 35, 36, 6, 7, 8, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 34, 35, 36, 6, 35, 6, 35, 2, 4, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 1, 3, 5, 7,
    2, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
    23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 34, 36, 46, 2, 7, 8,
    10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 34, 36, 2, 6, 35, 45, 6, 35, 6,
    35, 2, 46, 48, 49, 51, 53, 54, 56, 57, 58, 60, 61, 63, 64, 66,
    67, 1, 3, 5, 1, 3, 5, 1, 3, 5, 2, 7, 8, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 34, 36, 1, 3, 5, 1, 3, 5, 6, 7, 8, 10,
    11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 34, 36, 6, 33, 24, 25, 31, 32, 34,
    37, 38, 39, 40, 41, 42, 43, 2, 4, 6, 7, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 33,
    33, 33, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17,
    18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33,
    34, 35, 36, 37, 46, 62, 33, 37, 40, 24, 25, 31, 32, 34, 37, 38,
    39, 40, 41, 42, 43, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42,
    43, 2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34,
    35, 36, 37, 46, 62, 2, 46, 47, 48, 49, 50, 51, 53, 54, 56, 58,
    60, 61, 63, 64, 66, 67, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41,
    42, 43, 1, 3, 5, 24, 25, 31, 32, 34, 37, 38, 39, 40, 41, 42,
    43, 0, 1, 3, 5, 1, 3, 5, 37, 38, 39, 41, 42, 43, 40, 2,
    2, 2, 46, 48, 49, 51, 53, 54, 56, 57, 58, 60, 61, 63, 64, 66,
    67, 2, 46, 48, 49, 51, 53, 54, 56, 58, 59, 60, 61, 63, 64, 66,
    67, 1, 3, 5, 0, 1, 3, 5, 2, 46, 48, 49, 51, 53, 54, 56,
    58, 60, 61, 63, 64, 65, 66, 67, 2, 46, 48, 49, 51, 53, 54, 56,
    58, 60, 61, 63, 64, 65, 66, 67, 2, 4, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62, 2, 4, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 46, 62,
    2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
    36, 37, 46, 62, 33, 6, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17,
    18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 34,
    35, 36, 6, 35, 2, 2, 2, 7, 8, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    34, 36, 46, 1, 3, 5, 2, 7, 8, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
    34, 36, 1, 3, 5, 6, 35, 6, 35, 6, 35, 6, 35, 6, 35, 6,
    35, 6, 35, 6, 35, 1, 3, 5, 0, 1, 3, 5, 2, 2, 2, 46,
    48, 49, 51, 53, 54, 56, 58, 59, 60, 61, 63, 64, 66, 67, 2, 2,
    2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
    36, 37, 46, 62, 1, 3, 5, 0, 1, 3, 5, 1, 3, 5, 24, 25,
    31, 32, 34, 37, 38, 39, 40, 41, 42, 43, 2, 46, 48, 49, 51, 52,
    53, 54, 56, 58, 60, 61, 63, 64, 66, 67, 1, 3, 5, 2, 46, 48,
    49, 51, 53, 54, 55, 56, 58, 60, 61, 63, 64, 66, 67, 1, 3, 5,
    0, 1, 3, 5, 0, 1, 3, 5, 2, 0, 1, 3, 5, 0, 1, 3,
    5, 1, 3, 5, 1, 3, 5, 2, 7, 8, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31,
    32, 34, 36, 2, 1, 3, 5, 2, 2, 46, 48, 49, 51, 53, 54, 55,
    56, 58, 60, 61, 63, 64, 66, 67, 0, 1, 3, 5, 2, 46, 48, 49,
    50, 51, 53, 54, 56, 58, 60, 61, 63, 64, 66, 67, 2, 46, 48, 49,
    51, 52, 53, 54, 56, 58, 60, 61, 63, 64, 66, 67, 1, 3, 5, 0,
    1, 3, 5, 2, 46, 48, 49, 51, 52, 53, 54, 56, 58, 60, 61, 63,
    64, 66, 67, 0, 1, 3, 5, 2, 2, 2, 1, 3, 5, 2, 0, 1,
    3, 5, 0, 1, 3, 5, 0, 1, 3, 5, 2, 46, 48, 49, 51, 52,
    53, 54, 56, 58, 60, 61, 63, 64, 66, 67, 0, 1, 3, 5, 2, 0,
    1, 3, 5,
];

pub static ACTION_VALUES: [u16; 3555] = [
    1, 2, 3, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37,
    38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 32824, 32824,
    32824, 32824, 65535, 32768, 32769, 1, 2, 3, 32771, 32771, 32771, 32771, 32772, 32772, 32772, 32772,
    32773, 32773, 32773, 32773, 32774, 32774, 32774, 32774, 32775, 32775, 32775, 32775, 32776, 32776, 32776, 32776,
    32777, 32777, 32777, 32777, 32778, 32778, 32778, 32778, 32779, 32779, 32779, 32779, 32780, 32780, 32780, 32780,
    32781, 32781, 32781, 32781, 32782, 32782, 32782, 32782, 32783, 32783, 32783, 32783, 32784, 32784, 32784, 32784,
    32785, 32785, 32785, 32785, 32786, 32786, 32786, 32786, 32787, 32787, 32787, 32787, 32788, 32788, 32788, 32788,
    32810, 32810, 32810, 32810, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51,
    40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 57, 58, 59, 60,
    61, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 63, 40, 41,
    42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45,
    46, 47, 48, 49, 50, 51, 66, 67, 68, 69, 40, 41, 42, 43, 44, 45,
    46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49,
    50, 51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41,
    42, 43, 73, 44, 45, 46, 74, 48, 49, 50, 51, 40, 41, 42, 43, 44,
    45, 46, 47, 48, 49, 50, 51, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876,
    32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876,
    32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32878, 32878, 32878, 32878, 32878,
    32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878,
    32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32878, 32877,
    32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877,
    32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877,
    32877, 32877, 32877, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875,
    32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875,
    32875, 32875, 32875, 32875, 32875, 32875, 32875, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879,
    32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879,
    32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32879, 32881, 32881, 32881, 32881, 32881,
    32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881,
    32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32881, 32880,
    32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880,
    32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880, 32880,
    32880, 32880, 32880, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91,
    92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 32868,
    32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868,
    32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868, 32868,
    32868, 32868, 32868, 32770, 32770, 32770, 32770, 107, 80, 81, 82, 83, 84, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103,
    104, 105, 106, 108, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91,
    92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 32792,
    32792, 32792, 32792, 109, 110, 111, 112, 113, 114, 80, 81, 82, 83, 84, 85, 86,
    87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102,
    103, 104, 105, 106, 115, 116, 117, 80, 81, 82, 83, 84, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104,
    105, 106, 118, 119, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91,
    92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 120,
    121, 32822, 32822, 32822, 32822, 32823, 32823, 32823, 32823, 32826, 32826, 32826, 32826, 32826, 32826, 32826,
    32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826, 32826,
    32826, 32826, 32826, 32826, 32826, 104, 32826, 105, 32826, 106, 32826, 32826, 32826, 32825, 32825, 32825,
    32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825,
    32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 32825, 104, 32825, 105, 32825, 106, 32825, 32825,
    32825, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853,
    32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 32853, 104, 32853, 105,
    32853, 106, 32853, 32853, 32853, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855,
    32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855,
    32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32855, 32877, 32877, 32877, 122, 32877, 32877, 32877,
    32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877,
    32877, 32877, 32877, 32877, 32877, 32877, 32877, 32867, 80, 81, 82, 83, 84, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103,
    104, 32867, 105, 106, 123, 124, 32865, 32865, 80, 81, 82, 83, 84, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103,
    104, 105, 125, 106, 32811, 32811, 32811, 32811, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51,
    40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43,
    44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51,
    40, 41, 132, 43, 44, 45, 46, 47, 48, 49, 50, 51, 133, 40, 41, 42,
    43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46,
    47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42,
    43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46,
    47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42,
    43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46,
    47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42,
    43, 44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46,
    47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 151, 152, 40,
    41, 42, 43, 44, 153, 46, 47, 154, 49, 50, 51, 40, 41, 42, 43, 44,
    157, 45, 46, 158, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 1, 2, 3, 32791, 32791, 32791, 32791, 164, 40, 41, 42, 43,
    44, 45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 167, 168, 171, 2, 3, 1, 2, 3, 174, 32816, 32816, 32816,
    32816, 32817, 32817, 32817, 32817, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 32819, 32819, 32819, 32819, 1, 2, 3, 1, 2, 3, 40, 41, 42, 43, 44,
    45, 46, 47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 74, 48,
    49, 50, 51, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856,
    32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856, 32856,
    32856, 32856, 32856, 32856, 32856, 32856, 32856, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854,
    32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854,
    32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32854, 32851, 32851, 32851, 32851, 32851,
    32851, 32851, 32851, 32851, 32851, 32851, 32851, 32851, 32851, 32851, 32851, 32851, 32851, 32851, 95, 96,
    97, 98, 99, 100, 101, 102, 32851, 104, 32851, 105, 32851, 106, 32851, 32851, 32851, 80,
    81, 180, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95,
    96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 32838, 32838, 32838, 80, 32838,
    32838, 32838, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96,
    97, 98, 99, 100, 101, 102, 103, 104, 32838, 105, 32838, 106, 32838, 32838, 32838, 32837,
    32837, 32837, 80, 32837, 32837, 32837, 32837, 84, 85, 86, 87, 88, 89, 90, 91, 92,
    93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104, 32837, 105, 32837, 106,
    32837, 32837, 32837, 32835, 32835, 32835, 80, 32835, 32835, 32835, 32835, 32835, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104,
    32835, 105, 32835, 106, 32835, 32835, 32835, 32834, 32834, 32834, 80, 32834, 32834, 32834, 32834, 32834,
    32834, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100,
    101, 102, 103, 104, 32834, 105, 32834, 106, 32834, 32834, 32834, 40, 41, 42, 43, 44,
    45, 46, 47, 48, 49, 50, 51, 181, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841,
    32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841,
    32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32841, 32842, 32842, 32842, 32842,
    32842, 32842, 32842, 32842, 32842, 32842, 32842, 32842, 32842, 32842, 32842, 32842, 32842, 32842, 32842, 95,
    96, 97, 98, 99, 100, 101, 102, 32842, 104, 32842, 105, 32842, 106, 32842, 32842, 32842,
    32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839, 32839,
    32839, 32839, 32839, 95, 96, 97, 98, 99, 100, 101, 102, 32839, 104, 32839, 105, 32839,
    106, 32839, 32839, 32839, 32843, 32843, 32843, 32843, 32843, 32843, 32843, 32843, 32843, 32843, 32843, 32843,
    32843, 32843, 32843, 32843, 32843, 32843, 32843, 95, 96, 97, 98, 99, 100, 101, 102, 32843,
    104, 32843, 105, 32843, 106, 32843, 32843, 32843, 32844, 32844, 32844, 32844, 32844, 32844, 32844, 32844,
    32844, 32844, 32844, 32844, 32844, 32844, 32844, 32844, 32844, 32844, 32844, 95, 96, 97, 98, 99,
    100, 101, 102, 32844, 104, 32844, 105, 32844, 106, 32844, 32844, 32844, 32845, 32845, 32845, 32845,
    32845, 32845, 32845, 32845, 32845, 32845, 32845, 32845, 32845, 32845, 32845, 32845, 32845, 32845, 32845, 95,
    96, 97, 98, 99, 100, 101, 102, 32845, 104, 32845, 105, 32845, 106, 32845, 32845, 32845,
    32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846, 32846,
    32846, 32846, 32846, 95, 96, 97, 98, 99, 100, 101, 102, 32846, 104, 32846, 105, 32846,
    106, 32846, 32846, 32846, 32847, 32847, 32847, 32847, 32847, 32847, 32847, 32847, 32847, 32847, 32847, 32847,
    32847, 32847, 32847, 32847, 32847, 32847, 32847, 95, 96, 97, 98, 99, 100, 101, 102, 32847,
    104, 32847, 105, 32847, 106, 32847, 32847, 32847, 32849, 32849, 32849, 32849, 32849, 32849, 32849, 32849,
    32849, 32849, 32849, 32849, 32849, 32849, 32849, 32849, 32849, 32849, 32849, 95, 96, 97, 98, 99,
    100, 101, 102, 32849, 104, 32849, 105, 32849, 106, 32849, 32849, 32849, 32848, 32848, 32848, 32848,
    32848, 32848, 32848, 32848, 32848, 32848, 32848, 32848, 32848, 32848, 32848, 32848, 32848, 32848, 32848, 95,
    96, 97, 98, 99, 100, 101, 102, 32848, 104, 32848, 105, 32848, 106, 32848, 32848, 32848,
    32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836, 32836,
    32836, 32836, 32836, 32836, 96, 97, 98, 99, 100, 101, 102, 32836, 104, 32836, 105, 32836,
    106, 32836, 32836, 32836, 32828, 32828, 32828, 32828, 32828, 32828, 32828, 32828, 32828, 32828, 32828, 32828,
    32828, 32828, 32828, 32828, 32828, 32828, 32828, 32828, 32828, 32828, 98, 99, 100, 101, 102, 32828,
    104, 32828, 105, 32828, 106, 32828, 32828, 32828, 32827, 32827, 32827, 32827, 32827, 32827, 32827, 32827,
    32827, 32827, 32827, 32827, 32827, 32827, 32827, 32827, 32827, 32827, 32827, 32827, 32827, 32827, 98, 99,
    100, 101, 102, 32827, 104, 32827, 105, 32827, 106, 32827, 32827, 32827, 32829, 32829, 32829, 32829,
    32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829,
    32829, 32829, 32829, 32829, 32829, 32829, 32829, 32829, 104, 32829, 105, 32829, 106, 32829, 32829, 32829,
    32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831,
    32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 32831, 104, 32831, 105, 32831,
    106, 32831, 32831, 32831, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833,
    32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833, 32833,
    104, 32833, 105, 32833, 106, 32833, 32833, 32833, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830,
    32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830, 32830,
    32830, 32830, 32830, 32830, 104, 32830, 105, 32830, 106, 32830, 32830, 32830, 32832, 32832, 32832, 32832,
    32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832,
    32832, 32832, 32832, 32832, 32832, 32832, 32832, 32832, 104, 32832, 105, 32832, 106, 32832, 32832, 32832,
    40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 183, 184, 32876, 32876,
    32862, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876,
    32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32876, 32875, 32875, 32863, 32875, 32875,
    32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875,
    32875, 32875, 32875, 32875, 32875, 32875, 32875, 32875, 80, 81, 82, 83, 84, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103,
    104, 186, 105, 106, 187, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870,
    32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870,
    32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32870, 32877, 32877, 32877, 188, 32877, 32877, 32877,
    32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877, 32877,
    32877, 32877, 32877, 32877, 32877, 32877, 32877, 32873, 80, 81, 82, 83, 84, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103,
    104, 105, 32873, 106, 189, 190, 32872, 32872, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850,
    32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850,
    32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 32850, 191, 2, 3, 192,
    193, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94,
    95, 96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 194, 195, 80, 81,
    82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97,
    98, 99, 100, 101, 102, 103, 104, 105, 106, 196, 32802, 32802, 197, 198, 199, 32801,
    32801, 25, 26, 27, 28, 29, 30, 31, 32, 200, 33, 34, 35, 36, 37, 38,
    39, 201, 2, 3, 202, 2, 3, 1, 2, 3, 204, 80, 81, 82, 83, 84,
    85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100,
    101, 102, 103, 104, 105, 106, 205, 2, 3, 206, 2, 3, 32866, 80, 81, 82,
    83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98,
    99, 100, 101, 102, 103, 104, 32866, 105, 106, 32864, 32864, 40, 41, 42, 43, 44,
    45, 46, 47, 48, 49, 50, 51, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840,
    32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840,
    32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32840, 32852, 32852, 32852, 32852, 32852,
    32852, 32852, 32852, 32852, 32852, 32852, 32852, 32852, 32852, 32852, 32852, 32852, 32852, 32852, 95, 96,
    97, 98, 99, 100, 101, 102, 32852, 104, 32852, 105, 32852, 106, 32852, 32852, 32852, 32862,
    32863, 208, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857,
    32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857, 32857,
    32857, 32857, 32857, 32857, 32857, 32857, 209, 183, 184, 40, 41, 42, 43, 44, 45, 46,
    47, 48, 49, 50, 51, 40, 41, 42, 43, 44, 45, 46, 158, 48, 49, 50,
    51, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869,
    32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869, 32869,
    32869, 32869, 32869, 32869, 32869, 25, 26, 213, 27, 28, 214, 29, 30, 31, 32, 33,
    34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49,
    50, 51, 1, 2, 3, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 32797, 32797, 32797, 32797, 1, 2, 3, 219, 220, 221, 222, 223, 224, 168, 227,
    228, 25, 26, 27, 28, 29, 30, 31, 32, 229, 33, 34, 35, 36, 37, 38,
    39, 25, 26, 27, 28, 29, 30, 31, 32, 33, 230, 34, 35, 36, 37, 38,
    39, 231, 2, 3, 32818, 32818, 32818, 32818, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 232, 38, 39, 25, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 233, 38, 39, 32858, 32858, 32858, 80, 81, 32858, 82, 83,
    84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99,
    100, 101, 102, 103, 104, 32858, 105, 32858, 106, 32858, 32858, 32858, 32859, 32859, 32859, 32859,
    32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859,
    32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859, 32859,
    32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860,
    32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860, 32860,
    32860, 32860, 32860, 32860, 234, 32874, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89,
    90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104, 105,
    32874, 106, 32871, 32871, 235, 236, 237, 80, 81, 82, 83, 84, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104,
    105, 106, 238, 239, 2, 3, 240, 80, 81, 82, 83, 84, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103, 104,
    105, 106, 241, 2, 3, 32804, 32804, 32806, 32806, 32805, 32805, 32807, 32807, 32809, 32809, 32808,
    32808, 32803, 32803, 32800, 32800, 1, 2, 3, 32813, 32813, 32813, 32813, 243, 244, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 245, 34, 35, 36, 37, 38, 39, 246, 247,
    32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861,
    32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861, 32861,
    32861, 32861, 32861, 32861, 1, 2, 3, 32789, 32789, 32789, 32789, 1, 2, 3, 40, 41,
    42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 25, 26, 27, 28, 29, 251,
    30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 1, 2, 3, 25, 26, 27,
    28, 29, 30, 31, 253, 32, 33, 34, 35, 36, 37, 38, 39, 254, 2, 3,
    32812, 32812, 32812, 32812, 32814, 32814, 32814, 32814, 255, 32821, 32821, 32821, 32821, 32820, 32820, 32820,
    32820, 256, 2, 3, 257, 2, 3, 258, 80, 81, 82, 83, 84, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102, 103,
    104, 105, 106, 259, 260, 2, 3, 261, 25, 26, 27, 28, 29, 30, 31, 262,
    32, 33, 34, 35, 36, 37, 38, 39, 32815, 32815, 32815, 32815, 25, 26, 27, 28,
    263, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 25, 26, 27, 28,
    29, 264, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 1, 2, 3, 32793,
    32793, 32793, 32793, 25, 26, 27, 28, 29, 266, 30, 31, 32, 33, 34, 35, 36,
    37, 38, 39, 32798, 32798, 32798, 32798, 267, 268, 269, 270, 2, 3, 271, 32799, 32799,
    32799, 32799, 32790, 32790, 32790, 32790, 32795, 32795, 32795, 32795, 25, 26, 27, 28, 29, 272,
    30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 32794, 32794, 32794, 32794, 273, 32796,
    32796, 32796, 32796,
];

pub static GOTO_ROWS: [u16; 275] = [
    0, 21, 21, 23, 23, 23, 23, 41, 41, 41, 41, 41, 41, 41, 41, 41,
    41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 43, 45, 45, 45, 45,
    45, 45, 47, 47, 49, 51, 51, 51, 51, 53, 55, 57, 61, 63, 63, 63,
    63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63,
    63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63, 63,
    63, 65, 67, 69, 71, 73, 75, 77, 79, 81, 83, 85, 87, 89, 91, 93,
    95, 97, 99, 101, 103, 105, 107, 109, 109, 112, 116, 118, 137, 137, 137, 139,
    141, 143, 162, 181, 181, 181, 181, 183, 183, 202, 221, 223, 226, 226, 226, 226,
    226, 226, 226, 226, 226, 228, 228, 228, 228, 228, 228, 228, 228, 228, 228, 228,
    228, 228, 228, 228, 228, 228, 228, 228, 230, 231, 231, 231, 231, 231, 231, 231,
    231, 231, 231, 231, 249, 249, 249, 249, 249, 249, 249, 249, 249, 267, 285, 304,
    304, 322, 340, 340, 340, 342, 342, 342, 342, 342, 342, 342, 343, 345, 348, 348,
    348, 350, 369, 371, 371, 390, 391, 392, 392, 392, 392, 392, 410, 410, 410, 410,
    410, 410, 410, 410, 410, 410, 410, 410, 410, 428, 428, 446, 446, 446, 446, 446,
    446, 446, 446, 446, 465, 465, 465, 465, 465, 465, 465, 465, 484, 484, 503, 505,
    505, 524, 524, 542, 542, 542, 542, 542, 542, 560, 578, 578, 578, 596, 596, 596,
    596, 596, 596, 615, 615, 615, 615, 615, 615, 615, 633, 633, 633, 633, 633, 633,
    633, 633, 633,
];

pub static GOTO_SYMBOLS: [u8; 633] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 28, 3, 4, 5, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 28, 21, 28, 21, 28, 21,
    28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 25, 27, 28, 21, 28, 21,
    28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 28, 21,
    28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 28, 21,
    28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 28, 21, 26, 28,
    21, 28, 29, 30, 21, 28, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 28, 21, 28, 22, 23, 2,
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 28, 2, 3, 4, 5, 6, 7, 8, 9, 10,
    11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 2, 3, 4, 5, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 28, 21,
    27, 28, 21, 28, 21, 28, 26, 3, 4, 5, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 3, 4, 5, 6, 7, 8, 9,
    10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 3, 4, 5, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 2, 3, 4,
    5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 28, 26, 21, 28, 21, 28, 30, 21, 28, 2, 3,
    4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 28, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14,
    15, 16, 17, 18, 19, 20, 24, 23, 3, 4, 5, 6, 7, 8, 9, 10,
    11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 3, 4, 5, 6, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 3, 4, 5, 6,
    7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 2, 3,
    4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13,
    14, 15, 16, 17, 18, 19, 20, 21, 28, 2, 3, 4, 5, 6, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 3, 4, 5, 6,
    7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 3, 4,
    5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13,
    14, 15, 16, 17, 18, 19, 20, 3, 4, 5, 6, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20,
];

pub static GOTO_STATES: [u16; 633] = [
    4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 52, 53, 54, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 55, 53, 56, 53, 62, 53, 64,
    53, 65, 53, 70, 53, 71, 53, 72, 53, 75, 76, 77, 53, 78, 53, 126,
    53, 127, 53, 128, 53, 129, 53, 130, 53, 131, 53, 134, 53, 135, 53, 136,
    53, 137, 53, 138, 53, 139, 53, 140, 53, 141, 53, 142, 53, 143, 53, 144,
    53, 145, 53, 146, 53, 147, 53, 148, 53, 149, 53, 150, 53, 155, 156, 53,
    159, 53, 160, 161, 162, 53, 163, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 165, 53, 166, 53, 169, 170, 172,
    7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
    23, 24, 173, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 175, 53, 176, 7, 8, 9, 10, 11, 12, 13, 14,
    15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 177, 7, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 178, 53, 75,
    179, 53, 72, 53, 182, 53, 185, 54, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 54, 8, 9, 10, 11, 12, 13,
    14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 54, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 203, 7, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    54, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
    23, 24, 54, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 207, 53, 210, 211, 53, 159, 53, 212, 215, 53, 216, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 217, 53, 218, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    19, 20, 21, 22, 23, 24, 225, 226, 54, 8, 9, 10, 11, 12, 13, 14,
    15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 54, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 54, 8, 9, 10,
    11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 242, 7,
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 248, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 249, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17,
    18, 19, 20, 21, 22, 23, 24, 250, 53, 252, 7, 8, 9, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 54, 8, 9, 10,
    11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 54, 8,
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    54, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
    23, 24, 54, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 265, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17,
    18, 19, 20, 21, 22, 23, 24, 54, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24,
];
