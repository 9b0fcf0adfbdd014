use bigdecimal::BigDecimal;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::modules::helpers::filters::RoundKey;
use crate::modules::helpers::roles::PersonRole;
use crate::modules::models::person::{LinkedPeople, Person};
use crate::modules::models::race::Race;
use crate::modules::models::team::Team;
use crate::modules::models::vehicle::Vehicle;
use crate::schema::{people, race_results, race_results_people, races, teams, vehicles};

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = race_results, check_for_backend(diesel::pg::Pg))]
pub struct RaceResult {
    pub id: i32,
    pub race_id: String,
    pub team_id: String,
    pub vehicle_id: i32,
    pub sponsor: String,
    pub grid: i32,
    pub position: i32,
    pub laps: i32,
    pub status: String,
    pub laps_led: i32,
    pub points: i32,
    pub money: BigDecimal,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(RaceResult))]
#[diesel(table_name = race_results_people, check_for_backend(diesel::pg::Pg))]
pub struct RaceResultPerson {
    pub id: i32,
    pub race_result_id: i32,
    pub person_id: String,
    pub type_: PersonRole,
}

/// a race result with the race, team and vehicle it belongs to
pub type RaceResultRow = (RaceResult, Race, Team, Vehicle);

impl RaceResult {
    /// # get the results of a round
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `key` - the series, season and round of the race
    ///
    /// ## Returns
    /// * `Vec<RaceResultRow>` - the results ordered by id
    pub fn for_round(conn: &mut PgConnection, key: &RoundKey) -> QueryResult<Vec<RaceResultRow>> {
        race_results::table
            .inner_join(races::table)
            .inner_join(teams::table)
            .inner_join(vehicles::table)
            .filter(races::series_id.eq(&key.series))
            .filter(races::season.eq(key.season))
            .filter(races::round.eq(key.round))
            .order(race_results::id.asc())
            .select((
                RaceResult::as_select(),
                Race::as_select(),
                Team::as_select(),
                Vehicle::as_select(),
            ))
            .load(conn)
    }
}

impl RaceResultPerson {
    /// # get the people of race results
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `results` - the results to get the people of
    ///
    /// ## Returns
    /// * `Vec<LinkedPeople>` - the people of every result, in the order of `results`.
    ///   the people of a result are in the order they were linked.
    pub fn for_results(conn: &mut PgConnection, results: &[RaceResult]) -> QueryResult<Vec<LinkedPeople>> {
        let links: Vec<(RaceResultPerson, Person)> = RaceResultPerson::belonging_to(results)
            .inner_join(people::table)
            .order(race_results_people::id.asc())
            .select((RaceResultPerson::as_select(), Person::as_select()))
            .load(conn)?;

        Ok(links
            .grouped_by(results)
            .into_iter()
            .map(|group| group.into_iter().map(|(link, person)| (link.type_, person)).collect())
            .collect())
    }
}
