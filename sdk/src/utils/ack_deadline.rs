use crate::error::PubSubError;
use humantime::format_duration;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    time::Duration,
};

pub const DEFAULT_ACK_DEADLINE_SECS: u64 = 20;
pub const MIN_ACK_DEADLINE_SECS: u64 = 10;
pub const MAX_ACK_DEADLINE_SECS: u64 = 600;

/// Time window a subscriber has to acknowledge a delivered message before
/// the service redelivers it. Whole seconds only, 10s up to 10min.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckDeadline {
    duration: Duration,
}

impl AckDeadline {
    pub fn new(duration: Duration) -> Result<Self, PubSubError> {
        let secs = duration.as_secs();
        if duration.subsec_nanos() != 0
            || !(MIN_ACK_DEADLINE_SECS..=MAX_ACK_DEADLINE_SECS).contains(&secs)
        {
            return Err(PubSubError::InvalidAckDeadline(format!(
                "{}, expected whole seconds between {MIN_ACK_DEADLINE_SECS}s and {MAX_ACK_DEADLINE_SECS}s",
                format_duration(duration)
            )));
        }

        Ok(Self { duration })
    }

    pub fn as_secs(&self) -> u32 {
        self.duration.as_secs() as u32
    }

    pub fn as_human_time_string(&self) -> String {
        format!("{}", format_duration(self.duration))
    }
}

impl Default for AckDeadline {
    fn default() -> Self {
        AckDeadline {
            duration: Duration::from_secs(DEFAULT_ACK_DEADLINE_SECS),
        }
    }
}

impl FromStr for AckDeadline {
    type Err = PubSubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let duration = match s.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => humantime::parse_duration(&s)
                .map_err(|error| PubSubError::InvalidAckDeadline(format!("{s}: {error}")))?,
        };
        AckDeadline::new(duration)
    }
}

impl Display for AckDeadline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_human_time_string())
    }
}
