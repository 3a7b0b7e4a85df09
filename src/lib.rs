//! # Atlas Shared Contracts
//!
//! atlas 마이크로서비스(인증, 사용자, 구독, 전화, 이메일, 조직)가 공유하는
//! 서비스 계약과 데이터 전송 타입 라이브러리입니다.
//!
//! ## 주요 구성
//!
//! - **서비스 계약**: 각 서비스의 원격 연산을 `async` trait으로 선언 ([`contracts`])
//! - **데이터 전송 타입**: 요청/응답/도메인 레코드와 `ApiResponse` 봉투 ([`domain`])
//! - **투영**: 내부 레코드를 민감 필드가 제거된 응답으로 변환
//! - **부분 업데이트 병합**: "없음은 변경 없음" 규칙의 전부-아니면-전무 병합
//! - **페이지네이션**: `page`/`limit` 정규화와 `total_pages` 계산
//!
//! ## 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │         contracts (Service Client Traits)    │
//! ├──────────────────────────────────────────────┤
//! │  domain::dto       ← 요청/응답, 봉투, 헬스   │
//! │  domain::entities  ← 내부 레코드, 병합       │
//! │  domain::models    ← 토큰 클레임, 웹훅       │
//! ├──────────────────────────────────────────────┤
//! │  errors (AppError)  │  config (Pagination)   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 네트워크 전송, 인증 로직, 영속성은 이 크레이트의 범위가 아닙니다.
//! 로그는 `log` 파사드로만 남기며 로거 설치는 애플리케이션의 몫입니다.

pub mod config;
pub mod contracts;
pub mod domain;
pub mod errors;
