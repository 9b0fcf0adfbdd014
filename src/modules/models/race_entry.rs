use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::modules::helpers::filters::EntryKey;
use crate::modules::helpers::roles::PersonRole;
use crate::modules::models::person::{LinkedPeople, Person};
use crate::modules::models::race::Race;
use crate::modules::models::team::Team;
use crate::modules::models::vehicle::Vehicle;
use crate::schema::{people, race_entries, race_entries_people, race_entry_types, races, teams, vehicles};

/// # Kind of entry list, e.g. `entry` or `qualifying`
#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = race_entry_types, check_for_backend(diesel::pg::Pg))]
pub struct RaceEntryType {
    pub id: i32,
    pub entry_type: String,
}

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = race_entries, check_for_backend(diesel::pg::Pg))]
pub struct RaceEntry {
    pub id: i32,
    pub race_id: String,
    pub team_id: String,
    pub vehicle_id: i32,
    pub entry_type_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(RaceEntry))]
#[diesel(table_name = race_entries_people, check_for_backend(diesel::pg::Pg))]
pub struct RaceEntryPerson {
    pub id: i32,
    pub race_entry_id: i32,
    pub person_id: String,
    pub type_: PersonRole,
}

pub type RaceEntryRow = (RaceEntry, Race, Team, Vehicle, RaceEntryType);

impl RaceEntry {
    /// # get the entries of a round with the given entry type
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `key` - the series, season, round and entry type
    ///
    /// ## Returns
    /// * `Vec<RaceEntryRow>` - the entries ordered by id
    pub fn for_key(conn: &mut PgConnection, key: &EntryKey) -> QueryResult<Vec<RaceEntryRow>> {
        race_entries::table
            .inner_join(races::table)
            .inner_join(teams::table)
            .inner_join(vehicles::table)
            .inner_join(race_entry_types::table)
            .filter(races::series_id.eq(&key.round.series))
            .filter(races::season.eq(key.round.season))
            .filter(races::round.eq(key.round.round))
            .filter(race_entry_types::entry_type.eq(&key.entry_type))
            .order(race_entries::id.asc())
            .select((
                RaceEntry::as_select(),
                Race::as_select(),
                Team::as_select(),
                Vehicle::as_select(),
                RaceEntryType::as_select(),
            ))
            .load(conn)
    }
}

impl RaceEntryPerson {
    /// # get the people of race entries
    /// grouped per entry in the order of `entries`.
    pub fn for_entries(conn: &mut PgConnection, entries: &[RaceEntry]) -> QueryResult<Vec<LinkedPeople>> {
        let links: Vec<(RaceEntryPerson, Person)> = RaceEntryPerson::belonging_to(entries)
            .inner_join(people::table)
            .order(race_entries_people::id.asc())
            .select((RaceEntryPerson::as_select(), Person::as_select()))
            .load(conn)?;

        Ok(links
            .grouped_by(entries)
            .into_iter()
            .map(|group| group.into_iter().map(|(link, person)| (link.type_, person)).collect())
            .collect())
    }
}
