use chrono::{Local, NaiveDate, NaiveDateTime};

/// Where "today" comes from: the form date and the submission date both read it.
///
/// Dates are wall-clock dates in the operator's time zone, so the clock works
/// on naive local time rather than UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Local,
    Fixed(NaiveDateTime),
}

impl Clock {
    #[must_use]
    pub fn local() -> Self {
        Self::Local
    }

    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::Local => Local::now().naive_local(),
            Clock::Fixed(at) => *at,
        }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall-clock instant used by tests: 14/11/2023 22:13:20.
///
/// # Panics
///
/// Never in practice; the literal date is valid.
#[must_use]
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 11, 14)
        .and_then(|date| date.and_hms_opt(22, 13, 20))
        .expect("literal test date is valid")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
