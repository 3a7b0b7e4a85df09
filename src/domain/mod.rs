//! # Domain Layer Module
//!
//! 서비스 경계에서 주고받는 데이터 계약과 그 위의 순수 변환 규칙을 담는 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 각 서비스가 소유하는 내부 레코드 (민감 필드 포함)
//! ├── DTOs          - 요청/응답 계약, 응답 봉투, 페이지네이션, 헬스 체크
//! └── Models        - 인증 클레임, 리프레시 토큰, 웹훅 페이로드
//! ```
//!
//! ## 변환 규칙
//!
//! | 규칙 | 위치 | 설명 |
//! |------|------|------|
//! | 투영 | `dto::*::response` | 엔티티 → 클라이언트 안전 응답 (`From`/`TryFrom`) |
//! | 병합 | [`entities::ApplyUpdate`] | 부분 수정 요청 → 엔티티 (전부 적용 또는 전부 거부) |
//! | 페이지네이션 | [`dto::common::Pagination`] | `page`/`limit` 정규화와 `total_pages` 계산 |
//!
//! 모든 변환은 입출력이 없는 순수 함수이며, 시간은 호출 측이 `now`로 주입합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use atlas_shared::domain::dto::users::{UserResponse, UserUpdateRequest};
//! use atlas_shared::domain::entities::{ApplyUpdate, User};
//!
//! let mut user = User::create(create_request, Utc::now())?;
//! user.apply_update(UserUpdateRequest { role: Some("admin".into()), ..Default::default() })?;
//! let response = UserResponse::from(&user);
//! ```

pub mod dto;
pub mod entities;
pub mod models;
