use crate::models::team::Venue;
use serde::{Deserialize, Serialize};

/// One jury panel, identified by the venue it evaluates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuryAssignment {
    pub venue: Venue,
    /// Position of the venue in the jury resource, starting at 0
    pub ordinal: usize,
}

impl JuryAssignment {
    pub fn new(venue: Venue, ordinal: usize) -> Self {
        Self { venue, ordinal }
    }

    /// Number shown on the card, "JURY TEAM n"
    pub fn team_number(&self) -> usize {
        self.ordinal + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_number_is_one_based() {
        let jury = JuryAssignment::new(Venue::IotLab, 0);
        assert_eq!(jury.team_number(), 1);
        assert_eq!(JuryAssignment::new(Venue::StartupStudio, 2).team_number(), 3);
    }
}
