//! Database fixtures for the query and seeded route tests.
//!
//! The tests run against `TEST_DATABASE_URL` and are skipped when it is not set.
//! Every test gets its own connection inside a transaction that is never committed.
//! The fixtures use fixed ids, so one test holds the database at a time.

use std::env;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::MigrationHarness;
use serde_json::json;

use motorsport_data_api::modules::helpers::roles::PersonRole;
use motorsport_data_api::modules::store::MIGRATIONS;
use motorsport_data_api::schema::*;

static DATABASE: Mutex<()> = Mutex::new(());

/// the migrated test database, held until dropped
pub struct Migrated {
    pub url: String,
    _lock: MutexGuard<'static, ()>,
}

pub struct TestDb {
    pub conn: PgConnection,
    _database: Migrated,
}

/// # take the test database and apply the migrations
/// `None` when `TEST_DATABASE_URL` is not set.
pub fn migrated() -> Option<Migrated> {
    let url = env::var("TEST_DATABASE_URL").ok()?;

    let lock = DATABASE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut conn = PgConnection::establish(&url).expect("test database is reachable");
    conn.run_pending_migrations(MIGRATIONS).expect("migrations apply");

    Some(Migrated { url, _lock: lock })
}

/// # open a seeded connection
/// `None` when `TEST_DATABASE_URL` is not set.
pub fn seeded() -> Option<TestDb> {
    let database = migrated()?;

    let mut conn = PgConnection::establish(&database.url).expect("test database is reachable");
    begin_seeded(&mut conn).expect("fixtures insert");

    Some(TestDb { conn, _database: database })
}

/// starts the never committed transaction and inserts the fixtures into it
pub fn begin_seeded(conn: &mut PgConnection) -> QueryResult<()> {
    conn.begin_test_transaction()?;
    seed(conn)
}

pub fn decimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("valid decimal")
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(13, 0, 0))
        .expect("valid date")
}

fn seed(conn: &mut PgConnection) -> QueryResult<()> {
    diesel::insert_into(series::table)
        .values(&vec![
            (series::id.eq("s1"), series::description.eq(Some("Cup"))),
            (series::id.eq("s2"), series::description.eq(None::<&str>)),
        ])
        .execute(conn)?;

    diesel::insert_into(race_tracks::table)
        .values((
            race_tracks::id.eq("pir"),
            race_tracks::site.eq("Phoenix International Raceway"),
            race_tracks::circuit_name.eq("Oval"),
            race_tracks::city.eq("Avondale"),
            race_tracks::state.eq(Some("AZ")),
            race_tracks::country.eq("USA"),
        ))
        .execute(conn)?;

    // inserted out of date order on purpose
    let schedule = [
        ("r2", 2, "Subway Fresh Fit 500", 2013, at(2013, 3, 3), "s1"),
        ("r1", 1, "Daytona 500", 2013, at(2013, 2, 24), "s1"),
        ("r0", 1, "Daytona 500", 2012, at(2012, 2, 27), "s1"),
        ("r9", 1, "Other Opener", 2013, at(2013, 2, 23), "s2"),
    ];
    for (id, round, name, season, date, series_id) in schedule {
        diesel::insert_into(races::table)
            .values((
                races::id.eq(id),
                races::round.eq(round),
                races::name.eq(name),
                races::season.eq(season),
                races::race_track_id.eq("pir"),
                races::date.eq(date),
                races::laps.eq(312),
                races::length.eq(decimal("1")),
                races::distance.eq(decimal("312")),
                races::series_id.eq(series_id),
            ))
            .execute(conn)?;
    }

    for (id, name) in [("p1", "Driver One"), ("p2", "Driver Two"), ("p3", "Chief Three"), ("o1", "Owner One")] {
        diesel::insert_into(people::table)
            .values((people::id.eq(id), people::name.eq(name), people::country.eq("USA")))
            .execute(conn)?;
    }

    diesel::insert_into(teams::table)
        .values((
            teams::id.eq("t1"),
            teams::name.eq("Team One"),
            teams::alias.eq("t-one"),
            teams::owner_id.eq("o1"),
        ))
        .execute(conn)?;

    diesel::insert_into(vehicles::table)
        .values(&vec![
            (
                vehicles::id.eq(10),
                vehicles::number.eq(48),
                vehicles::owner_id.eq(Some("o1")),
                vehicles::metadata.eq(json!({"make": "Chevrolet", "engine": "R07"})),
            ),
            (
                vehicles::id.eq(11),
                vehicles::number.eq(24),
                vehicles::owner_id.eq(None::<&str>),
                vehicles::metadata.eq(json!({})),
            ),
        ])
        .execute(conn)?;

    // results: r2 is the 2013 round 2 race, r0 the 2012 opener
    for (id, race_id, vehicle_id, position) in [(1, "r2", 10, 1), (2, "r2", 11, 2), (3, "r0", 11, 1)] {
        diesel::insert_into(race_results::table)
            .values((
                race_results::id.eq(id),
                race_results::race_id.eq(race_id),
                race_results::team_id.eq("t1"),
                race_results::vehicle_id.eq(vehicle_id),
                race_results::sponsor.eq("Lowe's"),
                race_results::grid.eq(position + 2),
                race_results::position.eq(position),
                race_results::laps.eq(312),
                race_results::status.eq("running"),
                race_results::laps_led.eq(45),
                race_results::points.eq(47),
                race_results::money.eq(decimal("1250000")),
            ))
            .execute(conn)?;
    }

    for (id, result_id, person_id, role) in [
        (1, 1, "p1", PersonRole::Driver),
        (2, 1, "p3", PersonRole::CrewChief),
        (3, 2, "p2", PersonRole::Driver),
        (4, 3, "p2", PersonRole::Driver),
    ] {
        diesel::insert_into(race_results_people::table)
            .values((
                race_results_people::id.eq(id),
                race_results_people::race_result_id.eq(result_id),
                race_results_people::person_id.eq(person_id),
                race_results_people::type_.eq(role),
            ))
            .execute(conn)?;
    }

    for (id, session, lap_time) in [(1, 1, "26.1"), (2, 2, "25.987")] {
        diesel::insert_into(qualifying_results::table)
            .values((
                qualifying_results::id.eq(id),
                qualifying_results::race_id.eq("r2"),
                qualifying_results::team_id.eq("t1"),
                qualifying_results::vehicle_id.eq(10),
                qualifying_results::session.eq(session),
                qualifying_results::position.eq(1),
                qualifying_results::lap_time.eq(decimal(lap_time)),
            ))
            .execute(conn)?;
    }

    diesel::insert_into(qualifying_results_people::table)
        .values((
            qualifying_results_people::qualifying_result_id.eq(2),
            qualifying_results_people::person_id.eq("p1"),
            qualifying_results_people::type_.eq(PersonRole::Driver),
        ))
        .execute(conn)?;

    // practice: vehicle 11 in session 1, vehicle 10 in session 2
    for (id, session, vehicle_id, position, lap_time) in [(1, 1, 11, 2, "26.4"), (2, 2, 10, 1, "25.9")] {
        diesel::insert_into(practice_results::table)
            .values((
                practice_results::id.eq(id),
                practice_results::race_id.eq("r2"),
                practice_results::team_id.eq("t1"),
                practice_results::vehicle_id.eq(vehicle_id),
                practice_results::session.eq(session),
                practice_results::position.eq(position),
                practice_results::lap_time.eq(decimal(lap_time)),
            ))
            .execute(conn)?;
    }

    diesel::insert_into(practice_results_people::table)
        .values(&vec![
            (
                practice_results_people::practice_result_id.eq(1),
                practice_results_people::person_id.eq("p2"),
                practice_results_people::type_.eq(PersonRole::Driver),
            ),
            (
                practice_results_people::practice_result_id.eq(2),
                practice_results_people::person_id.eq("p1"),
                practice_results_people::type_.eq(PersonRole::Driver),
            ),
            (
                practice_results_people::practice_result_id.eq(2),
                practice_results_people::person_id.eq("p3"),
                practice_results_people::type_.eq(PersonRole::CrewChief),
            ),
        ])
        .execute(conn)?;

    diesel::insert_into(race_entry_types::table)
        .values(&vec![
            (race_entry_types::id.eq(1), race_entry_types::entry_type.eq("entry")),
            (race_entry_types::id.eq(2), race_entry_types::entry_type.eq("qualifying")),
        ])
        .execute(conn)?;

    diesel::insert_into(race_entries::table)
        .values((
            race_entries::id.eq(1),
            race_entries::race_id.eq("r2"),
            race_entries::team_id.eq("t1"),
            race_entries::vehicle_id.eq(10),
            race_entries::entry_type_id.eq(1),
        ))
        .execute(conn)?;

    diesel::insert_into(race_entries_people::table)
        .values(&vec![
            (
                race_entries_people::race_entry_id.eq(1),
                race_entries_people::person_id.eq("p3"),
                race_entries_people::type_.eq(PersonRole::CrewChief),
            ),
            (
                race_entries_people::race_entry_id.eq(1),
                race_entries_people::person_id.eq("p2"),
                race_entries_people::type_.eq(PersonRole::CrewChief),
            ),
        ])
        .execute(conn)?;

    diesel::insert_into(driver_standings::table)
        .values((
            driver_standings::driver_id.eq("p1"),
            driver_standings::vehicle_id.eq(10),
            driver_standings::series_id.eq("s1"),
            driver_standings::season.eq(2013),
            driver_standings::position.eq(1),
            driver_standings::points.eq(1250),
            driver_standings::poles.eq(2),
            driver_standings::wins.eq(5),
            driver_standings::starts.eq(36),
            driver_standings::dnfs.eq(1),
            driver_standings::top5.eq(14),
            driver_standings::top10.eq(23),
        ))
        .execute(conn)?;

    diesel::insert_into(team_standings::table)
        .values((
            team_standings::id.eq(1),
            team_standings::team_id.eq("t1"),
            team_standings::vehicle_id.eq(10),
            team_standings::series_id.eq("s1"),
            team_standings::season.eq(2013),
            team_standings::position.eq(2),
            team_standings::points.eq(1190),
            team_standings::poles.eq(1),
            team_standings::wins.eq(3),
            team_standings::starts.eq(36),
            team_standings::dnfs.eq(2),
            team_standings::top5.eq(11),
            team_standings::top10.eq(20),
        ))
        .execute(conn)?;

    diesel::insert_into(owner_standings::table)
        .values((
            owner_standings::id.eq(1),
            owner_standings::vehicle_id.eq(10),
            owner_standings::series_id.eq("s1"),
            owner_standings::season.eq(2013),
            owner_standings::position.eq(1),
            owner_standings::points.eq(1300),
            owner_standings::poles.eq(2),
            owner_standings::wins.eq(5),
            owner_standings::starts.eq(36),
            owner_standings::dnfs.eq(1),
            owner_standings::top5.eq(14),
            owner_standings::top10.eq(23),
        ))
        .execute(conn)?;

    diesel::insert_into(race_standings::table)
        .values((
            race_standings::race_id.eq("r2"),
            race_standings::race_time.eq(NaiveTime::from_hms_opt(3, 7, 32).expect("valid time")),
            race_standings::caution_flags.eq(6),
            race_standings::caution_flag_laps.eq(22),
            race_standings::lead_changes.eq(7),
            race_standings::pole_speed.eq(decimal("138.5")),
            race_standings::avg_speed.eq(decimal("101.2")),
            race_standings::victory_margin.eq(decimal("0.164")),
        ))
        .execute(conn)?;

    Ok(())
}
