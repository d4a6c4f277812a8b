//! Small hetero-atom templates shared by the unit tests.
//!
//! `GROWN_TEMPLATE` is `INITIAL_TEMPLATE` after replacing hydrogen `_H8_` (index 16)
//! with carbon `_C8_` (index 17).

pub(crate) const INITIAL_TEMPLATE: &str = "\
* LIGAND DATABASE FILE (OPLS2005)
*
MBEZ     5    3    4    3    0
   1     0 M  CT   _C1_     0    1.0000    0.0000    0.0000
   2     1 M  CA   _C2_     0    1.5100  109.4700    0.0000
   3     2 M  OH   _O3_     0    1.3640  120.0000  180.0000
   4     3 S  HO   _H4_     0    0.9450  113.0000    0.0000
  16     2 S  HA   _H8_     0    1.0800  120.0000 -180.0000
NBON
   1   1.7500   0.0660  -0.1800   1.9750   0.0050   0.0000   0.0000
   2   1.7750   0.0700  -0.1150   1.9500   0.0050   0.0000   0.0000
   3   1.5350   0.1700  -0.5850   1.6000   0.0050   0.0000   0.0000
   4   0.0000   0.0000   0.4350   0.6500   0.0000   0.0000   0.0000
  16   1.2100   0.0300   0.1150   1.4250   0.0050   0.0000   0.0000
BOND
   1    2  317.000    1.510
   2    3  450.000    1.364
   3    4  553.000    0.945
   2   16  367.000    1.080
THET
   1    2    3   70.000  120.000
   1    2   16   35.000  120.000
END
";

pub(crate) const GROWN_TEMPLATE: &str = "\
* LIGAND DATABASE FILE (OPLS2005)
*
PYJZ     5    3    4    3    0
   1     0 M  CT   _C1_     0    1.0000    0.0000    0.0000
   2     1 M  CA   _C2_     0    1.5100  109.4700    0.0000
   3     2 M  OH   _O3_     0    1.3640  120.0000  180.0000
   4     3 S  HO   _H4_     0    0.9450  113.0000    0.0000
REMARK fragment attached at _C2_
  17     2 S  CT   _C8_     0    1.5100  120.0000 -180.0000
NBON
   1   1.7500   0.0660  -0.1800   1.9750   0.0050   0.0000   0.0000
   2   1.7750   0.0700  -0.0500   1.9500   0.0050   0.0000   0.0000
   3   1.5350   0.1700  -0.5850   1.6000   0.0050   0.0000   0.0000
   4   0.0000   0.0000   0.4350   0.6500   0.0000   0.0000   0.0000
  17   1.7500   0.0660  -0.1200   1.9750   0.0050   0.0000   0.0000
BOND
   1    2  317.000    1.510
   2    3  450.000    1.364
   3    4  553.000    0.945
   2   17  317.000    1.510
THET
   1    2    3   70.000  120.000
   1    2   17   63.000  120.000
END
";
