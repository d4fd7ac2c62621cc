//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `payment`: 결제 기록과 요청/응답 구조체
//!
//! `pub use payment::*;`로 재공개하여
//! `crate::models::PaymentRequest`처럼 짧게 접근할 수 있게 합니다.

pub mod payment;

pub use payment::*;
