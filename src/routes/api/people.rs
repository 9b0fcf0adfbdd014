//! Lists of the people that held a role, e.g. `/api/v1.0/<series>/crew-chiefs`.
//!
//! Every role gets the same three routes, so they are built from one handler
//! instead of written out per role.

use diesel::pg::PgConnection;
use log::error;
use rocket::http::{Method, Status};
use rocket::route::{Handler, Outcome};
use rocket::serde::json::Json;
use rocket::{Data, Request, Route};

use crate::macros::database_error_handeler::db_handle_get_error_http;
use crate::modules::helpers::filters::Scope;
use crate::modules::helpers::roles::PersonRole;
use crate::modules::models::person::Person;
use crate::modules::projections::{ApiPerson, ApiResult, ResourceList};
use crate::modules::store::Store;
use crate::routes::api::version::ApiVersion;

/// how many filter segments sit between the version and the resource name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    All,
    Series,
    Season,
}

impl Depth {
    pub const ALL: [Depth; 3] = [Depth::All, Depth::Series, Depth::Season];

    pub fn path(&self, role: PersonRole) -> String {
        match self {
            Depth::All => format!("/<version>/{}", role.plural()),
            Depth::Series => format!("/<version>/<series>/{}", role.plural()),
            Depth::Season => format!("/<version>/<series>/<season>/{}", role.plural()),
        }
    }

    /// `/<version>/<series>/x` overlaps `/<version>/racestandings/<race_id>`
    fn rank(&self) -> Option<isize> {
        match self {
            Depth::Series => Some(2),
            _ => None,
        }
    }

    fn scope(&self, req: &Request<'_>) -> Option<Scope> {
        let segment = |n: usize| req.routed_segment(n).unwrap_or_default();

        match self {
            Depth::All => Scope::resolve(None, None),
            Depth::Series => Scope::resolve(Some(segment(1)), None),
            Depth::Season => Scope::resolve(Some(segment(1)), Some(segment(2))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PeopleHandler {
    role: PersonRole,
    depth: Depth,
}

impl PeopleHandler {
    pub fn new(role: PersonRole, depth: Depth) -> PeopleHandler {
        PeopleHandler { role, depth }
    }

    fn list(&self, req: &Request<'_>) -> ApiResult<ApiPerson> {
        let key = self.role.plural();

        let version = ApiVersion::parse(req.routed_segment(0).unwrap_or_default());
        if !version.is_supported() {
            return Ok(Json(ResourceList::empty(key)));
        }

        let Some(scope) = self.depth.scope(req) else {
            return Ok(Json(ResourceList::empty(key)));
        };

        let Some(store) = req.rocket().state::<Store>() else {
            error!(target:"routes/api/people:list", "no store is managed by this instance");
            return Err(Status::InternalServerError);
        };

        let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/people:list", "connection");
        let connection: &mut PgConnection = &mut pooled;

        let people = db_handle_get_error_http!(
            Person::with_role(connection, self.role, &scope),
            "routes/api/people:list",
            key
        );

        Ok(Json(ResourceList::new(key, people.iter().map(ApiPerson::from).collect())))
    }
}

#[rocket::async_trait]
impl Handler for PeopleHandler {
    async fn handle<'r>(&self, req: &'r Request<'_>, _data: Data<'r>) -> Outcome<'r> {
        Outcome::from(req, self.list(req))
    }
}

/// # the routes of every role at every depth
pub fn routes() -> Vec<Route> {
    PersonRole::ALL
        .into_iter()
        .flat_map(|role| {
            Depth::ALL.into_iter().map(move |depth| {
                let mut route = Route::ranked(depth.rank(), Method::Get, &depth.path(role), PeopleHandler::new(role, depth));
                route.name = Some(format!("people:{}", role.plural()).into());
                route
            })
        })
        .collect()
}
