//! Phones Entity Module
//!
//! 전화번호 레코드와 사용 기록을 정의합니다.

pub mod phone_number;
pub mod phone_usage;

pub use phone_number::{PhoneCapability, PhoneNumber, PhoneNumberStatus};
pub use phone_usage::{PhoneUsage, PhoneUsageType};
