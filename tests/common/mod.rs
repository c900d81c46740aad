use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

use readplan_core::clock::FixedClock;
use readplan_core::db;
use readplan_core::events::MockTrackerEventSink;
use readplan_core::tracker::{TrackerService, TrackerStateRepository};

/// Everything a lifecycle test needs. The database lives in a temporary
/// directory that is removed when the context is dropped.
pub struct TestContext {
    pub service: TrackerService,
    pub pool: Arc<db::DbPool>,
    pub clock: Arc<FixedClock>,
    pub sink: Arc<MockTrackerEventSink>,
    _db_dir: TempDir,
}

/// Noon on the given local day, expressed in UTC. Timestamps built this way
/// project back onto the same local day on any machine, whatever its
/// timezone offset.
pub fn local_noon(date: NaiveDate) -> DateTime<Utc> {
    Local
        .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

pub fn day(year: i32, month: u32, day_of_month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day_of_month).unwrap()
}

pub fn setup_tracker(today: NaiveDate) -> TestContext {
    let db_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = db::init(db_dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    let clock = Arc::new(FixedClock::new(local_noon(today)));
    let sink = Arc::new(MockTrackerEventSink::new());
    let repository = Arc::new(TrackerStateRepository::new(pool.clone()));
    let service = TrackerService::new(repository, sink.clone(), clock.clone())
        .expect("Failed to create tracker service");

    TestContext {
        service,
        pool,
        clock,
        sink,
        _db_dir: db_dir,
    }
}

/// Builds a second service over the same database, the way a fresh process
/// launch would.
pub fn reopen_tracker(context: &TestContext) -> TrackerService {
    let repository = Arc::new(TrackerStateRepository::new(context.pool.clone()));
    TrackerService::new(
        repository,
        Arc::new(MockTrackerEventSink::new()),
        context.clock.clone(),
    )
    .expect("Failed to reopen tracker service")
}
