use bigdecimal::BigDecimal;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::modules::helpers::filters::{RoundKey, Session};
use crate::modules::helpers::roles::PersonRole;
use crate::modules::models::person::{LinkedPeople, Person};
use crate::modules::models::race::Race;
use crate::modules::models::team::Team;
use crate::modules::models::vehicle::Vehicle;
use crate::schema::{people, qualifying_results, qualifying_results_people, races, teams, vehicles};

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = qualifying_results, check_for_backend(diesel::pg::Pg))]
pub struct QualifyingResult {
    pub id: i32,
    pub race_id: String,
    pub team_id: String,
    pub vehicle_id: i32,
    pub session: i32,
    pub position: i32,
    pub lap_time: BigDecimal,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(QualifyingResult))]
#[diesel(table_name = qualifying_results_people, check_for_backend(diesel::pg::Pg))]
pub struct QualifyingResultPerson {
    pub id: i32,
    pub qualifying_result_id: i32,
    pub person_id: String,
    pub type_: PersonRole,
}

pub type QualifyingResultRow = (QualifyingResult, Race, Team, Vehicle);

impl QualifyingResult {
    /// # get the qualifying results of a round
    /// all sessions are returned unless the session filter names one.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `key` - the series, season and round of the race
    /// * `session` - the session to narrow to
    ///
    /// ## Returns
    /// * `Vec<QualifyingResultRow>` - the results ordered by id
    pub fn for_round(
        conn: &mut PgConnection,
        key: &RoundKey,
        session: Session,
    ) -> QueryResult<Vec<QualifyingResultRow>> {
        let mut query = qualifying_results::table
            .inner_join(races::table)
            .inner_join(teams::table)
            .inner_join(vehicles::table)
            .filter(races::series_id.eq(key.series.clone()))
            .filter(races::season.eq(key.season))
            .filter(races::round.eq(key.round))
            .order(qualifying_results::id.asc())
            .select((
                QualifyingResult::as_select(),
                Race::as_select(),
                Team::as_select(),
                Vehicle::as_select(),
            ))
            .into_boxed();

        if let Some(number) = session.number() {
            query = query.filter(qualifying_results::session.eq(number));
        }

        query.load(conn)
    }
}

impl QualifyingResultPerson {
    /// # get the people of qualifying results
    /// grouped per result in the order of `results`.
    pub fn for_results(conn: &mut PgConnection, results: &[QualifyingResult]) -> QueryResult<Vec<LinkedPeople>> {
        let links: Vec<(QualifyingResultPerson, Person)> = QualifyingResultPerson::belonging_to(results)
            .inner_join(people::table)
            .order(qualifying_results_people::id.asc())
            .select((QualifyingResultPerson::as_select(), Person::as_select()))
            .load(conn)?;

        Ok(links
            .grouped_by(results)
            .into_iter()
            .map(|group| group.into_iter().map(|(link, person)| (link.type_, person)).collect())
            .collect())
    }
}
