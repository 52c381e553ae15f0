//! Size rules for zip containers

use serde::{Deserialize, Serialize};

/// How a zip container rounds half of its children's total size
///
/// Only odd totals are affected: an even total halves exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZipRounding {
    /// Ties go to the even neighbour (2.5 -> 2, 1.5 -> 2)
    #[default]
    HalfToEven,
    /// Ties go up (2.5 -> 3, 0.5 -> 1)
    HalfUp,
}

impl ZipRounding {
    /// Returns `total / 2` rounded with this mode
    pub fn halve(&self, total: u64) -> u64 {
        let half = total / 2;
        if total % 2 == 0 {
            return half;
        }
        match self {
            ZipRounding::HalfToEven => {
                if half % 2 == 0 {
                    half
                } else {
                    half + 1
                }
            }
            ZipRounding::HalfUp => half + 1,
        }
    }
}
