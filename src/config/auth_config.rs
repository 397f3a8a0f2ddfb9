//! 인증 관련 설정

use std::env;

/// 허용하는 최대 토큰 유효 기간(초): 1년
pub const MAX_EXPIRATION_SECONDS: i64 = 365 * 24 * 60 * 60;

/// JSON Web Token (JWT) 관련 설정
///
/// 액세스 토큰 하나만 발급하며, 리프레시 토큰은 없습니다.
/// 기본 유효 기간은 5분입니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 HMAC 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// export JWT_SECRET="..."
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰 유효 기간(초). 기본값: 300
    ///
    /// ```bash
    /// export JWT_EXPIRATION_SECONDS="900"
    /// ```
    pub fn expiration_seconds() -> i64 {
        Self::parse_expiration(env::var("JWT_EXPIRATION_SECONDS").ok().as_deref())
    }

    fn parse_expiration(raw: Option<&str>) -> i64 {
        raw.and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|secs| *secs > 0)
            .map(|secs| secs.min(MAX_EXPIRATION_SECONDS))
            .unwrap_or(300)
    }
}
