//! 전화 서비스 요청/응답 DTO

pub mod analytics;
pub mod request;
pub mod response;

pub use analytics::{PhoneUsageAnalytics, TOP_NUMBERS_LIMIT};
pub use request::{
    DEFAULT_COUNTRY_CODE, PhoneNumberListQuery, PhoneNumberUpdateRequest, PhoneProvisionRequest,
    PhoneUsageListQuery, PurchasePhoneNumberRequest,
};
pub use response::{
    PHONE_NUMBER_STATUS_PURCHASED, PhoneNumberListResponse, PhoneNumberResponse,
    PhoneProvisionResponse, PhoneUsageListResponse, PhoneUsageResponse,
    PurchasePhoneNumberResponse,
};
