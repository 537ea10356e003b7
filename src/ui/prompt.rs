//! Ranking board prompts

use std::fmt;

use crate::domain::cooldown::RemainingTime;

/// Modal prompt the board asks the host to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Confirmation before the vote is submitted
    ConfirmVote { school_name: String },
    /// Shown when a tap lands during the cooldown
    CooldownRemaining { remaining: RemainingTime },
}

impl Prompt {
    pub const CONFIRM_LABEL: &'static str = "Voter";
    pub const COOLDOWN_TITLE: &'static str = "Temps de refroidissement";

    pub fn title(&self) -> String {
        match self {
            Prompt::ConfirmVote { school_name } => {
                format!("Êtes-vous sûr de vouloir voter pour {school_name} ?")
            }
            Prompt::CooldownRemaining { .. } => Self::COOLDOWN_TITLE.to_string(),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Prompt::ConfirmVote { .. } => None,
            Prompt::CooldownRemaining { remaining } => {
                Some(format!("Vous pourrez revoter dans : {remaining}"))
            }
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())?;
        if let Some(message) = self.message() {
            write!(f, "\n{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_names_the_school() {
        let prompt = Prompt::ConfirmVote {
            school_name: "Lycée C".to_string(),
        };
        assert_eq!(prompt.title(), "Êtes-vous sûr de vouloir voter pour Lycée C ?");
        assert_eq!(prompt.message(), None);
    }

    #[test]
    fn cooldown_prompt_shows_minutes_and_seconds() {
        let prompt = Prompt::CooldownRemaining {
            remaining: RemainingTime::from_secs(29),
        };
        assert_eq!(prompt.title(), "Temps de refroidissement");
        assert_eq!(prompt.message().as_deref(), Some("Vous pourrez revoter dans : 00:29"));
        assert_eq!(
            prompt.to_string(),
            "Temps de refroidissement\nVous pourrez revoter dans : 00:29"
        );
    }
}
