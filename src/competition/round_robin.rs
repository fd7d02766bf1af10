// The round robin format: what each outcome is worth in the group table.
use serde::{Deserialize, Serialize};

use crate::types::Points;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    pub points_for_win: Points,
    pub points_for_ot_win: Points,
    pub points_for_ot_loss: Points,
    pub points_for_loss: Points,
}

// IIHF three-point system.
impl Default for RoundRobin {
    fn default() -> Self {
        Self::build(3, 2, 1, 0)
    }
}

impl RoundRobin {
    pub fn build(points_for_win: Points, points_for_ot_win: Points, points_for_ot_loss: Points, points_for_loss: Points) -> Self {
        Self {
            points_for_win,
            points_for_ot_win,
            points_for_ot_loss,
            points_for_loss,
        }
    }

    // Points handed out per decisive game are the same whether it ends in regulation or not.
    pub fn is_balanced(&self) -> bool {
        u32::from(self.points_for_win) + u32::from(self.points_for_loss)
            == u32::from(self.points_for_ot_win) + u32::from(self.points_for_ot_loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_point_system() {
        let rr = RoundRobin::default();
        assert_eq!(rr, RoundRobin::build(3, 2, 1, 0));
        assert!(rr.is_balanced());
    }

    #[test]
    fn two_point_system_is_not_balanced() {
        assert!(!RoundRobin::build(2, 2, 1, 0).is_balanced());
    }

    #[test]
    fn huge_point_values_do_not_overflow_the_balance_check() {
        assert!(RoundRobin::build(u16::MAX, u16::MAX, 1, 1).is_balanced());
        assert!(!RoundRobin::build(u16::MAX, 1, 1, u16::MAX).is_balanced());
    }
}
