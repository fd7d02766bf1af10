// Custom types that are widely used are defined here.

// Store ID types.
pub type TeamId = u8;
pub type GameId = u16;
pub type RequestId = u16;
pub type MovementLogId = u16;
pub type ScheduleItemId = u8;
pub type VenueId = u8;
pub type StaffId = u16;
pub type VehicleId = u16;
pub type AlertId = u16;

// Goal and game counters. Two bytes is plenty for a group stage.
pub type Count = u16;
pub type Points = u16;
pub type GoalDifference = i32;
