//! 인증 관련 도메인 모델

pub mod claims;
pub mod refresh_token;

pub use claims::{SessionInfo, TokenClaims, TokenType};
pub use refresh_token::RefreshToken;
