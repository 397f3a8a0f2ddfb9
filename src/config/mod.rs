//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! 설정 구조체는 상태를 갖지 않으며, 호출 시점에 환경 변수를 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 환경, Rate Limiting, CORS 설정
//! - [`auth_config`] - JWT 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 (mongodb | memory)
//! export STORE_BACKEND="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="blog_dev"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_SECONDS="300"
//! export BCRYPT_COST="10"
//!
//! # 기타
//! export ENVIRONMENT="development"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
