//! # pagamentos
//!
//! 결제 기록(키 + 금액)을 받아 PostgreSQL `pagamentos` 테이블에 저장하고
//! 생성된 id를 돌려주는 HTTP 서비스입니다.
//!
//! 바이너리(`main.rs`)는 설정 로딩, 로깅 초기화, 스키마 초기화, 서버 실행만 담당하고
//! 실제 로직은 이 라이브러리의 모듈들에 있습니다.
//! 덕분에 `tests/`의 통합 테스트에서도 같은 라우터를 그대로 사용할 수 있습니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
