use crate::config::AppConfig;
use crate::db::Database;
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Where "today" comes from. Tests pin it.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(at) => *at,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Everything a request handler needs, shared by all workers.
#[derive(Debug, Clone)]
pub struct App {
    pub db: Database,
    pub config: AppConfig,
    pub clock: Clock,
}

impl App {
    pub fn new(config: AppConfig, clock: Clock) -> Self {
        Self {
            db: Database::new(config.db_path.clone()),
            config,
            clock,
        }
    }

    pub fn hotel_id(&self) -> &str {
        &self.config.hotel_id
    }
}
