//! Pure progression rules.
//!
//! # Responsibility
//! - Map cumulative XP onto the leveling curve.
//! - Compute daily streak transitions.
//! - Evaluate the badge catalog against user stats.
//!
//! # Invariants
//! - Functions here never touch the task store or logging.
//! - The only mutation is `evaluate_badges` appending to `User::badges`.

pub mod badges;
pub mod leveling;
pub mod streak;
