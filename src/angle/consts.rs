pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;
