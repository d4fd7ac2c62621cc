//! # 결제 API 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 읽기
//! 4. PostgreSQL 연결 + `pagamentos` 테이블 준비 (실패하면 즉시 종료)
//! 5. 라우터 구성 후 HTTP 서버 시작
//! 6. Ctrl+C / SIGTERM을 받으면 진행 중인 요청을 마치고 연결 풀을 닫음

// ── 외부 크레이트 및 모듈에서 필요한 항목 가져오기 ──
use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use pagamentos::{
    config::Config,                        // 환경변수 기반 설정
    db::{self, PgPaymentStore},            // 스키마 초기화 + PostgreSQL 저장소
    routes::{create_router, AppState},     // 라우터 구성과 공유 상태
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

// #[tokio::main]: 비동기 런타임(Tokio)을 만들고 그 안에서 main을 실행하는 매크로
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일에서 DATABASE_URL, PORT 등을 읽어옵니다.
    // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // registry()에 필터와 포맷터를 레이어처럼 쌓아올립니다.
    tracing_subscriber::registry()
        .with(
            // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagamentos=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 로그를 터미널에 출력하는 포맷터 레이어
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩 ──
    // `?`: 설정 값이 잘못됐으면 StartupError::Config를 그대로 main 밖으로 전파합니다.
    let config = Config::from_env()?;
    tracing::info!("Starting pagamentos server on {}", config.listen_addr());

    // ── 4단계: PostgreSQL 연결 + 스키마 초기화 ──
    // 스키마 초기화는 서버가 요청을 받기 전에 끝나야 합니다.
    // 실패하면 로그를 남기고 `?`가 에러를 main 밖으로 올려 0이 아닌 코드로 종료됩니다.
    // 재시도는 하지 않습니다.
    let pool = db::init_db(&config).await.inspect_err(|e| {
        tracing::error!("Database initialization failed: {}", e);
    })?;

    // ── 5단계: 애플리케이션 상태(State) 생성 ──
    // PgPool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
    // 원본 `pool`은 종료 시 close()를 호출하기 위해 남겨둡니다.
    let state = AppState::new(PgPaymentStore::new(pool.clone()));

    // ── 6단계: API 라우터 설정 ──
    let app = create_router(state);

    // ── 7단계: 서버 시작 ──
    // TcpListener::bind(): 지정된 주소에서 연결을 받기 시작합니다.
    // 포트가 이미 사용 중이면 여기서 에러가 나고 프로세스가 종료됩니다.
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // with_graceful_shutdown(): 종료 시그널을 받으면 새 연결을 멈추고
    // 진행 중인 요청이 끝날 때까지 기다린 뒤 반환합니다.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // ── 8단계: 정리 ──
    // 풀의 모든 연결을 닫습니다.
    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// SIGTERM 또는 Ctrl+C를 기다립니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C signal, initiating graceful shutdown..."),
        _ = terminate => tracing::info!("Received SIGTERM signal, initiating graceful shutdown..."),
    }
}
