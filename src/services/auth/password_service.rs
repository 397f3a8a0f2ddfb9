//! 비밀번호 해싱 서비스
//!
//! bcrypt로 평문 비밀번호를 해시하고 검증합니다. 솔트는 bcrypt가 해시마다 생성합니다.

use log::debug;

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

/// bcrypt 비밀번호 해셔
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// 주어진 bcrypt cost로 생성합니다. 테스트에서는 4를 사용합니다.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 cost 설정(`BCRYPT_COST`)으로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 해싱 실패
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        let start_time = std::time::Instant::now();

        let hashed = bcrypt::hash(plaintext, self.cost).context("비밀번호 해싱 실패")?;

        debug!("Password hashing took: {:?}", start_time.elapsed());
        Ok(hashed)
    }

    /// 평문이 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 잘못된 경우도 불일치로 취급하지 않고 에러를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해시 파싱 실패
    pub fn verify(&self, plaintext: &str, hashed: &str) -> AppResult<bool> {
        bcrypt::verify(plaintext, hashed).context("비밀번호 검증 실패")
    }
}
