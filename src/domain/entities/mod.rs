//! # Domain Entities Module
//!
//! 각 서비스가 소유하는 내부 레코드(internal record)를 정의합니다.
//! 내부 레코드는 민감 필드(비밀번호 해시, Stripe/Twilio 식별자 등)를 포함한
//! 전체 필드 집합이며, 클라이언트에게는 항상 응답 DTO로 투영된 형태만 전달됩니다.
//!
//! ## 엔티티 계열
//!
//! | 엔티티 | 식별자 | 삭제/종료 방식 |
//! |--------|--------|----------------|
//! | [`users::User`] | 불투명 문자열 | `deleted_at` 소프트 삭제 |
//! | [`organizations::Organization`] | UUID | `deleted_at` 소프트 삭제 |
//! | [`subscriptions::Subscription`] | 불투명 문자열 | `canceled` 종료 상태 |
//! | [`phones::PhoneNumber`] | UUID | `released` 종료 상태 |
//!
//! ## 부분 업데이트 병합 규칙
//!
//! 모든 `*UpdateRequest`는 선택 필드로만 구성되며 [`ApplyUpdate`]로 엔티티에 병합됩니다.
//!
//! 1. 요청 전체를 먼저 검증합니다. 필드 하나라도 잘못되면 엔티티는 전혀 바뀌지 않습니다.
//! 2. 값이 있는(`Some`) 필드만 덮어씁니다. `None`은 "변경 없음"이지 "지우기"가 아닙니다.
//! 3. 실제로 적용된 필드가 있으면 `updated_at`을 정확히 한 번 갱신합니다.
//!
//! ```rust,ignore
//! use atlas_shared::domain::entities::ApplyUpdate;
//!
//! let changed = user.apply_update(UserUpdateRequest {
//!     role: Some("admin".to_string()),
//!     ..Default::default()
//! })?;
//! assert!(changed);
//! ```

use chrono::{DateTime, Utc};

use crate::errors::AppResult;

pub mod organizations;
pub mod phones;
pub mod subscriptions;
pub mod users;

pub use organizations::Organization;
pub use phones::{PhoneCapability, PhoneNumber, PhoneNumberStatus, PhoneUsage, PhoneUsageType};
pub use subscriptions::{Subscription, SubscriptionStatus, SubscriptionTier};
pub use users::User;

/// 스키마가 정해지지 않은 키-값 묶음 (`settings`, `configuration`, `metadata`)
///
/// 값은 null/bool/number/string/array/object의 태그드 유니온이며,
/// 투영 과정에서 그대로 보존됩니다.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// 부분 업데이트 요청을 엔티티에 병합하는 trait
///
/// 구현체는 "전부 아니면 전무" 규칙을 지켜야 합니다. 검증 실패 시 `Err`를 반환하고
/// 엔티티는 호출 전과 동일해야 합니다.
pub trait ApplyUpdate<R> {
    /// 지정한 시각을 `updated_at`으로 사용해 병합합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 하나 이상의 필드가 적용됨
    /// * `Ok(false)` - 적용할 필드가 없음 (`updated_at` 유지)
    /// * `Err(AppError)` - 검증 실패, 엔티티 변경 없음
    fn apply_update_at(&mut self, request: R, now: DateTime<Utc>) -> AppResult<bool>;

    /// 현재 시각으로 병합합니다.
    fn apply_update(&mut self, request: R) -> AppResult<bool> {
        self.apply_update_at(request, Utc::now())
    }
}
