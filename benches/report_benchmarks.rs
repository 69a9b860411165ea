//! Performance benchmarks for the HR portal reports.
//!
//! Covers the monthly time-tracking report and the CSV exports, both as
//! direct service calls and through the HTTP router, across store sizes.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use hr_portal::api::{AppState, create_router};
use hr_portal::calculation::{DEFAULT_HOURLY_RATE, monthly_hours, wages};
use hr_portal::models::{NewEmployee, YearMonth};
use hr_portal::notify::LogNotifier;
use hr_portal::service::{PortalService, ServiceOptions};
use hr_portal::storage::PortalStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a service holding `employees` employees with `days` closed
/// sessions each, spread over February and March 2024.
fn create_seeded_service(employees: usize, days: usize) -> (PortalService, String) {
    let service = PortalService::open(
        PortalStore::in_memory(),
        Arc::new(LogNotifier),
        ServiceOptions::default(),
    )
    .expect("Failed to open service");
    let session = service.login("admin123").expect("Failed to log in");

    let first_day = Utc.with_ymd_and_hms(2024, 2, 15, 9, 0, 0).unwrap();
    for i in 0..employees {
        let employee = service
            .add_employee(
                &session,
                NewEmployee {
                    name: format!("Employee {:04}", i),
                    position: "Engineer".to_string(),
                    salary: Decimal::new(5000, 0),
                },
                first_day.date_naive(),
            )
            .expect("Failed to add employee");

        for day in 0..days {
            let start = first_day + Duration::days(day as i64);
            service.check_in(&employee.id, start).unwrap();
            service
                .check_out(&employee.id, start + Duration::minutes(8 * 60 + 30))
                .unwrap();
        }
    }

    let token = session.token().to_string();
    (service, token)
}

fn march() -> YearMonth {
    YearMonth::new(2024, 3).unwrap()
}

/// Benchmark: monthly hours and wages for one employee with a month of data.
fn bench_monthly_hours(c: &mut Criterion) {
    let (service, token) = create_seeded_service(1, 30);
    let session = service.authorize(&token).unwrap();
    let employee = service.list_employees(&session).unwrap().remove(0);

    c.bench_function("monthly_hours_30_days", |b| {
        b.iter(|| {
            let hours = monthly_hours(black_box(&employee), march()).unwrap();
            black_box(wages(hours, DEFAULT_HOURLY_RATE).unwrap())
        })
    });
}

/// Benchmark: time-tracking report at increasing store sizes.
fn bench_report_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_tracking_report");

    for employees in [1, 10, 50, 100].iter() {
        let (service, token) = create_seeded_service(*employees, 20);
        let session = service.authorize(&token).unwrap();

        group.throughput(Throughput::Elements(*employees as u64));
        group.bench_with_input(BenchmarkId::new("employees", employees), employees, |b, _| {
            b.iter(|| black_box(service.time_tracking(&session, march()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: CSV exports for 100 employees.
fn bench_exports(c: &mut Criterion) {
    let (service, token) = create_seeded_service(100, 20);
    let session = service.authorize(&token).unwrap();

    let mut group = c.benchmark_group("csv_export");
    group.throughput(Throughput::Elements(100));

    group.bench_function("time_tracking_100", |b| {
        b.iter(|| black_box(service.export_time_tracking(&session, march()).unwrap()))
    });
    group.bench_function("employees_100", |b| {
        b.iter(|| black_box(service.export_employees(&session).unwrap()))
    });

    group.finish();
}

/// Benchmark: time-tracking report through the HTTP router.
fn bench_report_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (service, token) = create_seeded_service(50, 20);
    let router = create_router(AppState::new(service));
    let authorization = format!("Bearer {}", token);

    c.bench_function("time_tracking_endpoint_50", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/admin/time-tracking?month=2024-03")
                        .header("Authorization", authorization.as_str())
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_monthly_hours,
    bench_report_scaling,
    bench_exports,
    bench_report_endpoint,
);
criterion_main!(benches);
