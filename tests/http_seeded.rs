mod common;

use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};

use motorsport_data_api::build_rocket;
use motorsport_data_api::modules::store::Store;

/// every pooled connection gets its own never committed transaction holding the fixtures
#[derive(Debug)]
struct SeededTransaction;

impl CustomizeConnection<PgConnection, r2d2::Error> for SeededTransaction {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), r2d2::Error> {
        common::begin_seeded(conn).map_err(r2d2::Error::QueryError)
    }
}

/// a client over a single seeded connection, `None` without a test database
fn seeded_client() -> Option<(Client, common::Migrated)> {
    let database = common::migrated()?;

    let pool = Pool::builder()
        .max_size(1)
        .connection_timeout(Duration::from_secs(10))
        .connection_customizer(Box::new(SeededTransaction))
        .build(ConnectionManager::<PgConnection>::new(&database.url))
        .expect("seeded pool opens");

    let client = Client::tracked(build_rocket(Store::from_pool(pool))).expect("valid rocket instance");
    Some((client, database))
}

macro_rules! client_or_skip {
    () => {
        match seeded_client() {
            Some(seeded) => seeded,
            None => {
                eprintln!("TEST_DATABASE_URL is not set, skipping");
                return;
            }
        }
    };
}

fn get_body(client: &Client, uri: &str) -> String {
    let response = client.get(uri.to_string()).dispatch();

    assert_eq!(response.status(), Status::Ok, "{uri}");
    assert_eq!(response.content_type(), Some(ContentType::JSON), "{uri}");
    response.into_string().expect("response has a body")
}

fn get_json(client: &Client, uri: &str) -> Value {
    serde_json::from_str(&get_body(client, uri)).expect("body is json")
}

#[test]
fn race_results_of_a_round_are_served_with_nested_records() {
    let (client, _database) = client_or_skip!();

    let owner = json!({"id": "o1", "name": "Owner One", "country": "USA"});
    let body = get_json(&client, "/api/v1.0/s1/2013/raceresults/2");

    assert_eq!(
        body,
        json!({"raceresults": [
            {
                "race": {"id": "r2", "name": "Subway Fresh Fit 500"},
                "team": {"id": "t1", "name": "Team One", "alias": "t-one", "owner": owner},
                "vehicle": {
                    "id": 10,
                    "number": 48,
                    "owner": owner,
                    "vehicle_metadata": {"make": "Chevrolet", "engine": "R07"},
                },
                "sponsor": "Lowe's",
                "grid": 3,
                "position": 1,
                "laps": 312,
                "status": "running",
                "laps_led": 45,
                "points": 47,
                "money": "1250000.00",
                "driver": {"id": "p1", "name": "Driver One", "country": "USA"},
                "crew-chief": {"id": "p3", "name": "Chief Three", "country": "USA"},
            },
            {
                "race": {"id": "r2", "name": "Subway Fresh Fit 500"},
                "team": {"id": "t1", "name": "Team One", "alias": "t-one", "owner": owner},
                "vehicle": {"id": 11, "number": 24, "owner": null, "vehicle_metadata": {}},
                "sponsor": "Lowe's",
                "grid": 4,
                "position": 2,
                "laps": 312,
                "status": "running",
                "laps_led": 45,
                "points": 47,
                "money": "1250000.00",
                "driver": {"id": "p2", "name": "Driver Two", "country": "USA"},
            },
        ]})
    );

    assert_eq!(get_json(&client, "/api/v1.0/s1/2013/raceresults/3"), json!({"raceresults": []}));
}

#[test]
fn repeated_requests_answer_with_the_same_bytes() {
    let (client, _database) = client_or_skip!();

    for uri in [
        "/api/v1.0/s1/2013/raceresults/2",
        "/api/v1.0/s1/2013/races",
        "/api/v1.0/s1/vehicles",
    ] {
        let first = get_body(&client, uri);
        let second = get_body(&client, uri);
        assert_eq!(first, second, "{uri}");
    }
}

#[test]
fn team_and_owner_standings_are_served_for_a_season() {
    let (client, _database) = client_or_skip!();

    let teams = get_json(&client, "/api/v1.0/s1/2013/teamstandings");
    let teams = teams["teamstandings"].as_array().expect("a list of team standings");
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["team"]["id"], json!("t1"));
    assert_eq!(teams[0]["team"]["owner"]["id"], json!("o1"));
    assert_eq!(teams[0]["vehicle"]["id"], json!(10));
    assert_eq!(teams[0]["series"], json!("s1"));
    assert_eq!(teams[0]["points"], json!(1190));

    let owners = get_json(&client, "/api/v1.0/s1/2013/ownerstandings");
    let owners = owners["ownerstandings"].as_array().expect("a list of owner standings");
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0]["vehicle"]["owner"]["name"], json!("Owner One"));
    assert_eq!(owners[0]["position"], json!(1));
    assert_eq!(owners[0]["points"], json!(1300));

    assert_eq!(get_json(&client, "/api/v1.0/s1/2012/teamstandings"), json!({"teamstandings": []}));
}

#[test]
fn practice_results_carry_their_people_and_narrow_to_a_session() {
    let (client, _database) = client_or_skip!();

    let all = get_json(&client, "/api/v1.0/s1/2013/practiceresults/2");
    let all = all["practiceresults"].as_array().expect("a list of practice results");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["session"], json!(1));
    assert_eq!(all[0]["lap_time"], json!("26.400"));
    assert_eq!(all[0]["driver"]["id"], json!("p2"));
    assert!(all[0].get("crew-chief").is_none());
    assert_eq!(all[1]["driver"]["id"], json!("p1"));
    assert_eq!(all[1]["crew-chief"]["id"], json!("p3"));

    let second = get_json(&client, "/api/v1.0/s1/2013/practiceresults/2/2");
    assert_eq!(second["practiceresults"].as_array().map(Vec::len), Some(1));
    assert_eq!(second["practiceresults"][0]["vehicle"]["id"], json!(10));

    assert_eq!(
        get_json(&client, "/api/v1.0/s1/2013/practiceresults/2/3"),
        json!({"practiceresults": []})
    );
}

#[test]
fn vehicles_are_narrowed_to_a_series() {
    let (client, _database) = client_or_skip!();

    let ids = |body: Value| -> Vec<Value> {
        body["vehicles"]
            .as_array()
            .map(|vehicles| vehicles.iter().map(|vehicle| vehicle["id"].clone()).collect())
            .unwrap_or_default()
    };

    assert_eq!(ids(get_json(&client, "/api/v1.0/s1/vehicles")), vec![json!(10), json!(11)]);
    assert_eq!(ids(get_json(&client, "/api/v1.0/s1/2012/vehicles")), vec![json!(11)]);
    assert!(ids(get_json(&client, "/api/v1.0/s2/vehicles")).is_empty());
}
