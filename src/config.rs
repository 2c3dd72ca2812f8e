// src/config.rs
use std::net::{IpAddr, SocketAddr};

/// One physical room the hotel has. The roster never changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not valid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// | Env Var        | Default                          |
/// |----------------|----------------------------------|
/// | `FRONTDESK_DB` | `frontdesk.sqlite3`              |
/// | `HOST`         | `127.0.0.1`                      |
/// | `PORT`         | `3000`                           |
/// | `MAX_WORKERS`  | `8`                              |
/// | `HOTEL_ID`     | `main`                           |
/// | `DESK_USER`    | `front-desk`                     |
/// | `ROOM_ROSTER`  | `101,102,103,104,105,106,107`    |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_workers: usize,
    pub hotel_id: String,
    /// Tag written on enquiries logged from this desk.
    pub desk_user: String,
    pub roster: Vec<RosterEntry>,
}

const DEFAULT_ROSTER: &str = "101,102,103,104,105,106,107";

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| std::env::var(name).unwrap_or_else(|_| default.into());

        let host = var("HOST", "127.0.0.1")
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "HOST",
                reason: e.to_string(),
            })?;

        let port = var("PORT", "3000")
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "PORT",
                reason: e.to_string(),
            })?;

        let max_workers = var("MAX_WORKERS", "8")
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "MAX_WORKERS",
                reason: e.to_string(),
            })?;

        let hotel_id = var("HOTEL_ID", "main");
        if hotel_id.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "HOTEL_ID",
                reason: "must not be empty".into(),
            });
        }

        Ok(Self {
            db_path: var("FRONTDESK_DB", "frontdesk.sqlite3"),
            host,
            port,
            max_workers,
            hotel_id,
            desk_user: var("DESK_USER", "front-desk"),
            roster: parse_roster(&var("ROOM_ROSTER", DEFAULT_ROSTER))?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn roster_entry(&self, room_id: &str) -> Option<&RosterEntry> {
        self.roster.iter().find(|r| r.id == room_id)
    }

    /// Defaults with a different database file; used by tests.
    #[cfg(test)]
    pub fn for_db(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            max_workers: 1,
            hotel_id: "test-hotel".into(),
            desk_user: "front-desk".into(),
            roster: parse_roster(DEFAULT_ROSTER).unwrap_or_default(),
        }
    }
}

/// `101:Garden Suite,102` -> `[(101, Garden Suite), (102, Room 102)]`
pub fn parse_roster(raw: &str) -> Result<Vec<RosterEntry>, ConfigError> {
    let mut roster: Vec<RosterEntry> = Vec::new();

    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (id, name) = match item.split_once(':') {
            Some((id, name)) => (id.trim().to_string(), name.trim().to_string()),
            None => (item.to_string(), format!("Room {item}")),
        };

        if id.is_empty() || name.is_empty() {
            return Err(ConfigError::Invalid {
                var: "ROOM_ROSTER",
                reason: format!("bad entry '{item}'"),
            });
        }
        if roster.iter().any(|r| r.id == id) {
            return Err(ConfigError::Invalid {
                var: "ROOM_ROSTER",
                reason: format!("room {id} listed twice"),
            });
        }

        roster.push(RosterEntry { id, name });
    }

    if roster.is_empty() {
        return Err(ConfigError::Invalid {
            var: "ROOM_ROSTER",
            reason: "no rooms".into(),
        });
    }

    Ok(roster)
}
