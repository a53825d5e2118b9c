use crate::state::color_system::ColorSystem;

/// The color system plus the mission it currently belongs to.
#[derive(Debug, Default)]
pub struct MissionSession {
    pub mission: Option<String>,
    pub colors: ColorSystem,
}

impl MissionSession {
    /// Switch to `mission`, wiping point colors and ordinals if it differs
    /// from the current one. Returns whether the caches were cleared.
    pub fn enter_mission(&mut self, mission: &str) -> bool {
        if self.mission.as_deref() == Some(mission) {
            return false;
        }
        let switched = self.mission.is_some();
        if switched {
            tracing::info!(
                "Mission changed from {:?} to {mission:?}",
                self.mission.as_deref().unwrap_or_default()
            );
            self.colors.clear_all_caches();
        }
        self.mission = Some(mission.to_owned());
        switched
    }

    pub fn clear(&mut self) {
        self.mission = None;
        self.colors.clear_all_caches();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mission_does_not_clear() {
        let mut session = MissionSession::default();
        session.colors.assign_ordinals(&["a"]);
        assert!(!session.enter_mission("M-1"));
        assert_eq!(session.colors.get_ordinal("a"), Some(1));
    }

    #[test]
    fn same_mission_keeps_caches() {
        let mut session = MissionSession::default();
        session.enter_mission("M-1");
        session.colors.assign_ordinals(&["a"]);
        assert!(!session.enter_mission("M-1"));
        assert_eq!(session.colors.get_ordinal("a"), Some(1));
    }

    #[test]
    fn switching_mission_clears() {
        let mut session = MissionSession::default();
        session.enter_mission("M-1");
        session.colors.assign_ordinals(&["a"]);
        session.colors.resolve_color("a");
        assert!(session.enter_mission("M-2"));
        assert_eq!(session.colors.stats().colors, 0);
        assert_eq!(session.colors.get_ordinal("a"), None);
        assert_eq!(session.mission.as_deref(), Some("M-2"));
    }

    #[test]
    fn clear_forgets_mission() {
        let mut session = MissionSession::default();
        session.enter_mission("M-1");
        session.clear();
        assert_eq!(session.mission, None);
        assert!(!session.enter_mission("M-1"));
    }
}
