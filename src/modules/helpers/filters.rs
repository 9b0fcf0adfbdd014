//! Path filters shared by the list routes.
//!
//! Filters narrow from the top down: series, then season, then round (or entry
//! type and round), then session. Season and round live on the race, so every
//! query that uses them joins through to `races`. A resolver returns `None` when
//! the path can not match anything (a missing key or a season that is not a
//! number) and the route then answers with an empty list.

fn present(segment: &str) -> Option<&str> {
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

fn number(segment: &str) -> Option<i32> {
    present(segment)?.parse::<i32>().ok()
}

/// # How far a driver, team or vehicle list is narrowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Series(String),
    Season { series: String, season: i32 },
}

impl Scope {
    pub fn resolve(series: Option<&str>, season: Option<&str>) -> Option<Scope> {
        let series = series.map(present);
        let season = season.map(present);

        match (series, season) {
            (None, None) => Some(Scope::All),
            (Some(Some(series)), None) => Some(Scope::Series(series.to_string())),
            (Some(Some(series)), Some(Some(season))) => Some(Scope::Season {
                series: series.to_string(),
                season: season.parse().ok()?,
            }),
            _ => None,
        }
    }

    pub fn series(&self) -> Option<&str> {
        match self {
            Scope::All => None,
            Scope::Series(series) => Some(series),
            Scope::Season { series, .. } => Some(series),
        }
    }

    pub fn season(&self) -> Option<i32> {
        match self {
            Scope::Season { season, .. } => Some(*season),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonKey {
    pub series: String,
    pub season: i32,
}

impl SeasonKey {
    pub fn resolve(series: &str, season: &str) -> Option<SeasonKey> {
        Some(SeasonKey {
            series: present(series)?.to_string(),
            season: number(season)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundKey {
    pub series: String,
    pub season: i32,
    pub round: i32,
}

impl RoundKey {
    pub fn resolve(series: &str, season: &str, round: &str) -> Option<RoundKey> {
        let key = SeasonKey::resolve(series, season)?;

        Some(RoundKey {
            series: key.series,
            season: key.season,
            round: number(round)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKey {
    pub round: RoundKey,
    pub entry_type: String,
}

impl EntryKey {
    pub fn resolve(series: &str, season: &str, entry_type: &str, round: &str) -> Option<EntryKey> {
        Some(EntryKey {
            round: RoundKey::resolve(series, season, round)?,
            entry_type: present(entry_type)?.to_string(),
        })
    }
}

/// # Session layer of qualifying and practice results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Any,
    Only(i32),
}

impl Session {
    pub fn resolve(session: Option<&str>) -> Option<Session> {
        match session {
            None => Some(Session::Any),
            Some(session) => number(session).map(Session::Only),
        }
    }

    pub fn number(&self) -> Option<i32> {
        match self {
            Session::Any => None,
            Session::Only(session) => Some(*session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_has_three_modes() {
        assert_eq!(Scope::resolve(None, None), Some(Scope::All));
        assert_eq!(Scope::resolve(Some("s1"), None), Some(Scope::Series("s1".to_string())));
        assert_eq!(
            Scope::resolve(Some("s1"), Some("2013")),
            Some(Scope::Season { series: "s1".to_string(), season: 2013 })
        );
    }

    #[test]
    fn scope_without_a_usable_series_matches_nothing() {
        assert_eq!(Scope::resolve(None, Some("2013")), None);
        assert_eq!(Scope::resolve(Some(""), None), None);
        assert_eq!(Scope::resolve(Some("s1"), Some("last-year")), None);
    }

    #[test]
    fn scope_exposes_its_filter_values() {
        let scope = Scope::resolve(Some("s1"), Some("2012")).unwrap();
        assert_eq!(scope.series(), Some("s1"));
        assert_eq!(scope.season(), Some(2012));
        assert_eq!(Scope::All.series(), None);
        assert_eq!(Scope::Series("s1".to_string()).season(), None);
    }

    #[test]
    fn required_keys_must_all_be_present() {
        assert_eq!(
            SeasonKey::resolve("s1", "2013"),
            Some(SeasonKey { series: "s1".to_string(), season: 2013 })
        );
        assert_eq!(SeasonKey::resolve("", "2013"), None);
        assert_eq!(SeasonKey::resolve("s1", ""), None);
        assert_eq!(RoundKey::resolve("s1", "2013", "two"), None);
        assert_eq!(EntryKey::resolve("s1", "2013", "", "2"), None);
    }

    #[test]
    fn entry_key_keeps_the_round_and_label() {
        let key = EntryKey::resolve("s1", "2013", "qualifying", "2").unwrap();
        assert_eq!(key.round, RoundKey { series: "s1".to_string(), season: 2013, round: 2 });
        assert_eq!(key.entry_type, "qualifying");
    }

    #[test]
    fn session_is_optional_but_must_be_a_number() {
        assert_eq!(Session::resolve(None), Some(Session::Any));
        assert_eq!(Session::resolve(Some("2")), Some(Session::Only(2)));
        assert_eq!(Session::resolve(Some("final")), None);
        assert_eq!(Session::Any.number(), None);
        assert_eq!(Session::Only(3).number(), Some(3));
    }
}
