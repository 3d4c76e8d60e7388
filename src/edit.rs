//! Title/date edit flow
//!
//! `Idle -> Editing -> (Committed | Cancelled) -> Idle`. The dialog binds its
//! widgets to the draft; nothing touches the active config until commit.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::CountdownConfig;

/// Values being edited in the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditFlow {
    #[default]
    Idle,
    Editing(Draft),
}

impl EditFlow {
    /// Enter editing with a draft prefilled from `current`.
    /// Restarting while already editing discards the old draft.
    pub fn begin(&mut self, current: &CountdownConfig) {
        debug!(title = %current.title, target_date = %current.target_date, "Opening title/date editor");
        *self = EditFlow::Editing(Draft {
            title: current.title.clone(),
            date: current.target_date,
        });
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditFlow::Editing(_))
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            EditFlow::Editing(draft) => Some(draft),
            EditFlow::Idle => None,
        }
    }

    /// Finish editing and produce the new config (title trimmed, blank -> default)
    pub fn commit(&mut self) -> Option<CountdownConfig> {
        match std::mem::take(self) {
            EditFlow::Editing(draft) => {
                let config = CountdownConfig::new(&draft.title, draft.date);
                info!(title = %config.title, target_date = %config.target_date, "Committed countdown edit");
                Some(config)
            }
            EditFlow::Idle => None,
        }
    }

    /// Discard the draft
    pub fn cancel(&mut self) {
        if self.is_editing() {
            info!("Cancelled countdown edit");
        }
        *self = EditFlow::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_begin_prefills_from_current() {
        let current = CountdownConfig::new("Launch", date(2026, 12, 1));
        let mut flow = EditFlow::default();
        flow.begin(&current);

        assert!(flow.is_editing());
        let draft = flow.draft_mut().unwrap();
        assert_eq!(draft.title, "Launch");
        assert_eq!(draft.date, date(2026, 12, 1));
    }

    #[test]
    fn test_commit_trims_title() {
        let mut flow = EditFlow::default();
        flow.begin(&CountdownConfig::default());
        {
            let draft = flow.draft_mut().unwrap();
            draft.title = "  Graduation ".to_string();
            draft.date = date(2027, 6, 5);
        }

        let config = flow.commit().unwrap();
        assert_eq!(config, CountdownConfig::new("Graduation", date(2027, 6, 5)));
        assert_eq!(flow, EditFlow::Idle);
    }

    #[test]
    fn test_commit_blank_title_uses_default() {
        let mut flow = EditFlow::default();
        flow.begin(&CountdownConfig::new("Old", date(2026, 1, 1)));
        flow.draft_mut().unwrap().title = "   ".to_string();

        assert_eq!(flow.commit().unwrap().title, "Countdown");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let current = CountdownConfig::new("Keep", date(2026, 1, 1));
        let mut flow = EditFlow::default();
        flow.begin(&current);
        flow.draft_mut().unwrap().title = "Changed".to_string();
        flow.cancel();

        assert_eq!(flow, EditFlow::Idle);
        assert!(flow.draft_mut().is_none());
        assert_eq!(flow.commit(), None);
    }

    #[test]
    fn test_commit_when_idle_is_none() {
        let mut flow = EditFlow::Idle;
        assert_eq!(flow.commit(), None);
        assert!(!flow.is_editing());
    }
}
