use std::collections::HashMap;

use diesel::pg::PgConnection;
use diesel::QueryResult;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::modules::helpers::general::Helpers;
use crate::modules::models::person::Person;
use crate::modules::models::race::Race;
use crate::modules::models::team::Team;
use crate::modules::models::vehicle::Vehicle;

/// answer of every list route, a 500 when storage fails
pub type ApiResult<T> = Result<Json<ResourceList<T>>, Status>;

/// # Body of every list response
/// a single key naming the resource, holding the records in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList<T> {
    pub key: &'static str,
    pub items: Vec<T>,
}

impl<T> ResourceList<T> {
    pub fn new(key: &'static str, items: Vec<T>) -> ResourceList<T> {
        ResourceList { key, items }
    }

    pub fn empty(key: &'static str) -> ResourceList<T> {
        ResourceList { key, items: vec![] }
    }
}

impl<T: Serialize> Serialize for ResourceList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.items)?;
        map.end()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiPerson {
    pub id: String,
    pub name: String,
    pub country: String,
}

impl From<&Person> for ApiPerson {
    fn from(person: &Person) -> Self {
        ApiPerson {
            id: person.id.clone(),
            name: person.name.clone(),
            country: person.country.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiTeam {
    pub id: String,
    pub name: String,
    pub alias: String,
    pub owner: Option<ApiPerson>,
}

impl ApiTeam {
    pub fn new(team: &Team, owners: &Owners) -> ApiTeam {
        ApiTeam {
            id: team.id.clone(),
            name: team.name.clone(),
            alias: team.alias.clone(),
            owner: owners.get(Some(&team.owner_id)),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiVehicle {
    pub id: i32,
    pub number: i32,
    pub owner: Option<ApiPerson>,
    pub vehicle_metadata: serde_json::Value,
}

impl ApiVehicle {
    pub fn new(vehicle: &Vehicle, owners: &Owners) -> ApiVehicle {
        ApiVehicle {
            id: vehicle.id,
            number: vehicle.number,
            owner: owners.get(vehicle.owner_id.as_deref()),
            vehicle_metadata: vehicle.metadata.clone(),
        }
    }
}

/// short form of a race used inside results and entries
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiRaceRef {
    pub id: String,
    pub name: String,
}

impl From<&Race> for ApiRaceRef {
    fn from(race: &Race) -> Self {
        ApiRaceRef {
            id: race.id.clone(),
            name: race.name.clone(),
        }
    }
}

/// # Owners of teams and vehicles, by person id
pub struct Owners {
    people: HashMap<String, ApiPerson>,
}

impl Owners {
    /// # load the owners of the given teams and vehicles
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `teams` - the teams whose owners are needed
    /// * `vehicles` - the vehicles whose owners are needed
    ///
    /// ## Returns
    /// * `Owners` - every owner that was found
    pub fn load<'a, T, V>(conn: &mut PgConnection, teams: T, vehicles: V) -> QueryResult<Owners>
    where
        T: IntoIterator<Item = &'a Team>,
        V: IntoIterator<Item = &'a Vehicle>,
    {
        let ids = Owners::ids_of(teams, vehicles);
        if ids.is_empty() {
            return Ok(Owners::from_people(&[]));
        }

        let people = Person::get_by_ids(conn, &ids)?;
        Ok(Owners::from_people(&people))
    }

    pub fn from_people(people: &[Person]) -> Owners {
        Owners {
            people: people
                .iter()
                .map(|person| (person.id.clone(), ApiPerson::from(person)))
                .collect(),
        }
    }

    /// the owner with the given id, `None` when there is no owner or it was not loaded
    pub fn get(&self, id: Option<&str>) -> Option<ApiPerson> {
        id.and_then(|id| self.people.get(id)).cloned()
    }

    fn ids_of<'a, T, V>(teams: T, vehicles: V) -> Vec<String>
    where
        T: IntoIterator<Item = &'a Team>,
        V: IntoIterator<Item = &'a Vehicle>,
    {
        let team_owners = teams.into_iter().map(|team| team.owner_id.clone());
        let vehicle_owners = vehicles.into_iter().filter_map(|vehicle| vehicle.owner_id.clone());

        Helpers::unique(team_owners.chain(vehicle_owners))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn person(id: &str) -> Person {
        Person {
            id: id.to_string(),
            name: format!("Person {id}"),
            country: "USA".to_string(),
        }
    }

    #[test]
    fn list_serializes_under_a_single_key() {
        let list = ResourceList::new("drivers", vec![ApiPerson::from(&person("d1"))]);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({"drivers": [{"id": "d1", "name": "Person d1", "country": "USA"}]})
        );

        let empty: ResourceList<ApiPerson> = ResourceList::empty("driverstandings");
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"driverstandings":[]}"#);
    }

    #[test]
    fn team_and_vehicle_nest_their_owner() {
        let owners = Owners::from_people(&[person("o1")]);

        let team = Team {
            id: "t1".to_string(),
            name: "Team 1".to_string(),
            alias: "team1".to_string(),
            owner_id: "o1".to_string(),
        };
        let vehicle = Vehicle {
            id: 7,
            number: 24,
            owner_id: None,
            metadata: json!({"make": "Ford"}),
        };

        assert_eq!(
            serde_json::to_value(ApiTeam::new(&team, &owners)).unwrap(),
            json!({
                "id": "t1",
                "name": "Team 1",
                "alias": "team1",
                "owner": {"id": "o1", "name": "Person o1", "country": "USA"},
            })
        );
        assert_eq!(
            serde_json::to_value(ApiVehicle::new(&vehicle, &owners)).unwrap(),
            json!({"id": 7, "number": 24, "owner": null, "vehicle_metadata": {"make": "Ford"}})
        );
    }

    #[test]
    fn owner_ids_are_collected_once() {
        let team = Team {
            id: "t1".to_string(),
            name: "Team 1".to_string(),
            alias: "team1".to_string(),
            owner_id: "o1".to_string(),
        };
        let vehicles = vec![
            Vehicle { id: 1, number: 1, owner_id: Some("o2".to_string()), metadata: json!({}) },
            Vehicle { id: 2, number: 2, owner_id: Some("o1".to_string()), metadata: json!({}) },
            Vehicle { id: 3, number: 3, owner_id: None, metadata: json!({}) },
        ];

        assert_eq!(Owners::ids_of([&team], &vehicles), vec!["o1".to_string(), "o2".to_string()]);
    }
}
