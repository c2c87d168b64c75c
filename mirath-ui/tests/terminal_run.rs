use std::{
    cell::RefCell,
    io::{self, Write},
    path::PathBuf,
    rc::Rc,
};

use axum::{
    Json, Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use mirath_core::ServiceConfig;
use mirath_ui::app::{self, Job};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Writer whose contents stay readable after the presentation is dropped.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Splits the estate evenly between husband and mother when both are sent.
async fn calculate(Json(body): Json<Value>) -> impl IntoResponse {
    let Some(estate) = body["estate"].as_f64() else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "قيمة التركة مطلوبة" })));
    };
    if estate <= 1.0 {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "التركة صغيرة جداً" })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "labels": ["الزوج", "الأم"],
            "values": [estate / 2.0, estate / 2.0],
            "explanation": ["للزوج النصف", "للأم الباقي"],
        })),
    )
}

async fn spawn_service() -> String {
    let app = Router::new()
        .route("/calculate", post(calculate))
        .route(
            "/pdf",
            post(|| async { ([(header::CONTENT_TYPE, "application/pdf")], b"%PDF-1.4".to_vec()) }),
        );
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mirath-ui-{}-{name}", std::process::id()))
}

fn job(
    base_url: &str,
    estate: &str,
) -> Job {
    Job {
        service: ServiceConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        },
        assignments: vec![
            format!("estate={estate}"),
            "deceased_gender=أنثى".to_string(),
            "husband=true".to_string(),
            "mother=true".to_string(),
        ],
        download_dir: scratch_dir("unused"),
        ..Default::default()
    }
}

#[tokio::test]
async fn prints_explanation_chart_and_summary() {
    let base = spawn_service().await;
    let out = SharedBuf::default();

    let page = app::run(&job(&base, "100000"), &app::build_registry(), out.clone())
        .await
        .expect("run");

    let text = out.text();
    assert!(text.contains("• للزوج النصف"), "{text}");
    assert!(text.contains("الزوج: 50000.00"), "{text}");
    assert!(text.contains("#667eea"), "{text}");
    assert!(text.contains("50.00%"), "{text}");
    assert!(text.contains("الإجمالي"), "{text}");
    assert!(text.contains("100000.00"), "{text}");
    assert!(text.contains("100.00%"), "{text}");
    assert_eq!(page.live_charts(), 0);
    assert!(page.saved_files().is_empty());
}

#[tokio::test]
async fn export_saves_report_under_fixed_name() {
    let base = spawn_service().await;
    let dir = scratch_dir("export");
    let job = Job {
        export: true,
        download_dir: dir.clone(),
        ..job(&base, "100000")
    };

    let page = app::run(&job, &app::build_registry(), io::sink())
        .await
        .expect("run");

    let path = dir.join("تقرير_المواريث.pdf");
    assert_eq!(page.saved_files(), vec![path.clone()]);
    assert_eq!(std::fs::read(&path).expect("report"), b"%PDF-1.4".to_vec());
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn service_error_is_shown_and_returned() {
    let base = spawn_service().await;
    let out = SharedBuf::default();

    let result = app::run(&job(&base, "1"), &app::build_registry(), out.clone()).await;

    assert!(result.is_err());
    assert!(out.text().contains("التركة صغيرة جداً"), "{}", out.text());
}

#[tokio::test]
async fn export_still_runs_after_a_failed_calculation() {
    let base = spawn_service().await;
    let dir = scratch_dir("export-after-failure");
    let out = SharedBuf::default();
    let job = Job {
        export: true,
        download_dir: dir.clone(),
        ..job(&base, "1")
    };

    let result = app::run(&job, &app::build_registry(), out.clone()).await;

    assert!(result.is_err());
    assert!(out.text().contains("التركة صغيرة جداً"), "{}", out.text());
    let path = dir.join("تقرير_المواريث.pdf");
    assert_eq!(std::fs::read(&path).expect("report"), b"%PDF-1.4".to_vec());
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn invalid_estate_never_reaches_the_service() {
    // Nothing listens here; a request would fail with a transport error.
    let out = SharedBuf::default();

    let result = app::run(&job("http://127.0.0.1:9", "abc"), &app::build_registry(), out.clone()).await;

    assert!(result.is_err());
    assert!(out.text().contains("قيمة التركة"), "{}", out.text());
}

#[tokio::test]
async fn unknown_backend_is_reported() {
    let job = Job {
        service: ServiceConfig {
            backend: "grpc".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let err = app::run(&job, &app::build_registry(), io::sink())
        .await
        .err()
        .expect("unknown backend");

    assert!(err.to_string().contains("grpc"), "{err}");
}
