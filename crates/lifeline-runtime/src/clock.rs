use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn now_local(&self) -> DateTime<Local> {
        self.now().with_timezone(&Local)
    }

    fn today(&self) -> NaiveDate {
        self.now_local().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
