//! 인증 서비스 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{
    ChangePasswordRequest, EmailVerificationSendRequest, ForgotPasswordRequest,
    GoogleOAuthRequest, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest, ResetPasswordRequest,
};
pub use response::{
    AuthError, AuthErrorCode, AuthResponse, AuthTokens, BEARER_TOKEN_TYPE, GoogleOAuthResponse,
};
