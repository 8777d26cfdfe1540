//! Salary computation for the attendance payroll engine.
//!
//! This module turns attendance records and a wage configuration into pay:
//! per record ([`compute_daily_salary`]) and per record list
//! ([`compute_salary`]). Both are pure functions of their inputs.

mod daily_pay;
mod salary;

pub use daily_pay::{DailyPay, compute_daily_salary, daily_pay_breakdown, presence_pay};
pub use salary::compute_salary;
