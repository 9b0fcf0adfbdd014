pub mod store;
pub mod projections;

pub mod models {
    pub mod person;
    pub mod team;
    pub mod vehicle;
    pub mod race;

    pub mod race_entry;
    pub mod race_result;
    pub mod qualifying_result;
    pub mod practice_result;
    pub mod standing;
}

pub mod helpers {
    pub mod config;
    pub mod logging;

    pub mod filters;
    pub mod roles;

    pub mod math;
    pub mod general;
}
