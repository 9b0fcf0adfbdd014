use std::fmt;
use std::io::Write;
use std::str::FromStr;

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use log::warn;
use serde::Serialize;

use crate::modules::models::person::LinkedPeople;
use crate::modules::projections::ApiPerson;
use crate::schema::sql_types::PersonTypes;

/// # Role a person holds on a result or entry
/// stored in the `person_types` enum of the association tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsExpression, FromSqlRow)]
#[diesel(sql_type = PersonTypes)]
pub enum PersonRole {
    Driver,
    TeamOwner,
    CrewChief,
    VehicleOwner,
    TeamPrincipal,
    TechnicalChief,
    RaceEngineer,
}

impl PersonRole {
    pub const ALL: [PersonRole; 7] = [
        PersonRole::Driver,
        PersonRole::TeamOwner,
        PersonRole::CrewChief,
        PersonRole::VehicleOwner,
        PersonRole::TeamPrincipal,
        PersonRole::TechnicalChief,
        PersonRole::RaceEngineer,
    ];

    /// the label used in the database and as the key of the person in a response
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonRole::Driver => "driver",
            PersonRole::TeamOwner => "team-owner",
            PersonRole::CrewChief => "crew-chief",
            PersonRole::VehicleOwner => "vehicle-owner",
            PersonRole::TeamPrincipal => "team-principal",
            PersonRole::TechnicalChief => "technical-chief",
            PersonRole::RaceEngineer => "race-engineer",
        }
    }

    /// the key of a list of people holding this role, e.g. `crew-chiefs`
    pub fn plural(&self) -> &'static str {
        match self {
            PersonRole::Driver => "drivers",
            PersonRole::TeamOwner => "team-owners",
            PersonRole::CrewChief => "crew-chiefs",
            PersonRole::VehicleOwner => "vehicle-owners",
            PersonRole::TeamPrincipal => "team-principals",
            PersonRole::TechnicalChief => "technical-chiefs",
            PersonRole::RaceEngineer => "race-engineers",
        }
    }
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PersonRole {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        PersonRole::ALL
            .into_iter()
            .find(|role| role.as_str() == label)
            .ok_or_else(|| format!("unknown person type: {label}"))
    }
}

impl ToSql<PersonTypes, Pg> for PersonRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<PersonTypes, Pg> for PersonRole {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let label = std::str::from_utf8(bytes.as_bytes())?;
        Ok(label.parse::<PersonRole>()?)
    }
}

/// # People attached to a single result or entry, one slot per role
/// flattened into the record that owns it so every filled role appears as a sibling key
/// of `race`, `team` and `vehicle`. empty roles are left out of the response.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct RoleAssignments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<ApiPerson>,
    #[serde(rename = "team-owner", skip_serializing_if = "Option::is_none")]
    pub team_owner: Option<ApiPerson>,
    #[serde(rename = "crew-chief", skip_serializing_if = "Option::is_none")]
    pub crew_chief: Option<ApiPerson>,
    #[serde(rename = "vehicle-owner", skip_serializing_if = "Option::is_none")]
    pub vehicle_owner: Option<ApiPerson>,
    #[serde(rename = "team-principal", skip_serializing_if = "Option::is_none")]
    pub team_principal: Option<ApiPerson>,
    #[serde(rename = "technical-chief", skip_serializing_if = "Option::is_none")]
    pub technical_chief: Option<ApiPerson>,
    #[serde(rename = "race-engineer", skip_serializing_if = "Option::is_none")]
    pub race_engineer: Option<ApiPerson>,
}

impl RoleAssignments {
    /// # build the assignments from association rows
    /// the rows are applied in the given order. when two rows share a role the later
    /// one replaces the earlier one.
    ///
    /// ## Arguments
    /// * `rows` - the role and person of every association row of one result
    ///
    /// ## Returns
    /// * `RoleAssignments` - one person per filled role
    pub fn from_rows<I>(rows: I) -> RoleAssignments
    where
        I: IntoIterator<Item = (PersonRole, ApiPerson)>,
    {
        let mut assignments = RoleAssignments::default();

        for (role, person) in rows {
            let incoming = person.id.clone();
            if let Some(replaced) = assignments.assign(role, person) {
                warn!(target:"helpers/roles:from_rows", "{} {} replaced by {}", role, replaced.id, incoming);
            }
        }

        assignments
    }

    /// # build the assignments of every result or entry
    ///
    /// ## Arguments
    /// * `groups` - the linked people of each result, in order
    ///
    /// ## Returns
    /// * `Vec<RoleAssignments>` - one entry per group, in the same order
    pub fn for_groups(groups: Vec<LinkedPeople>) -> Vec<RoleAssignments> {
        groups
            .into_iter()
            .map(|people| {
                RoleAssignments::from_rows(people.iter().map(|(role, person)| (*role, ApiPerson::from(person))))
            })
            .collect()
    }

    /// # put a person in a role
    ///
    /// ## Returns
    /// * `Option<ApiPerson>` - the person that held the role before
    pub fn assign(&mut self, role: PersonRole, person: ApiPerson) -> Option<ApiPerson> {
        self.slot_mut(role).replace(person)
    }

    pub fn get(&self, role: PersonRole) -> Option<&ApiPerson> {
        match role {
            PersonRole::Driver => self.driver.as_ref(),
            PersonRole::TeamOwner => self.team_owner.as_ref(),
            PersonRole::CrewChief => self.crew_chief.as_ref(),
            PersonRole::VehicleOwner => self.vehicle_owner.as_ref(),
            PersonRole::TeamPrincipal => self.team_principal.as_ref(),
            PersonRole::TechnicalChief => self.technical_chief.as_ref(),
            PersonRole::RaceEngineer => self.race_engineer.as_ref(),
        }
    }

    fn slot_mut(&mut self, role: PersonRole) -> &mut Option<ApiPerson> {
        match role {
            PersonRole::Driver => &mut self.driver,
            PersonRole::TeamOwner => &mut self.team_owner,
            PersonRole::CrewChief => &mut self.crew_chief,
            PersonRole::VehicleOwner => &mut self.vehicle_owner,
            PersonRole::TeamPrincipal => &mut self.team_principal,
            PersonRole::TechnicalChief => &mut self.technical_chief,
            PersonRole::RaceEngineer => &mut self.race_engineer,
        }
    }
}
