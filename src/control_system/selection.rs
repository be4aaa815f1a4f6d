use std::sync::{Arc, Mutex};

use crate::simulation_engine::light::{LightId, TrafficLight};

/// Tracks which single light is selected for the detail panel.
///
/// Selection is set by click events from the map collaborator and never
/// cleared automatically; it tracks the updated entity by id across ticks.
/// The id is stored without existence checks, so a stale id simply resolves
/// to no light.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Arc<Mutex<Option<LightId>>>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`. Re-selecting the same id is idempotent; there is no
    /// deselect operation.
    pub fn select(&self, id: LightId) {
        *self.selected.lock().unwrap() = Some(id);
    }

    pub fn current(&self) -> Option<LightId> {
        *self.selected.lock().unwrap()
    }

    /// Looks up the selected light in a registry snapshot. `None` when
    /// nothing is selected or the id has no matching entity.
    pub fn resolve<'a>(&self, lights: &'a [TrafficLight]) -> Option<&'a TrafficLight> {
        let selected = self.current()?;
        lights.iter().find(|light| light.id == selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation_engine::lights::create_lights;

    #[test]
    fn select_then_current_returns_the_id() {
        let selection = SelectionController::new();
        assert_eq!(selection.current(), None);
        selection.select(LightId(3));
        assert_eq!(selection.current(), Some(LightId(3)));
    }

    #[test]
    fn reselecting_is_idempotent_and_overwriting_wins() {
        let selection = SelectionController::new();
        selection.select(LightId(3));
        selection.select(LightId(3));
        assert_eq!(selection.current(), Some(LightId(3)));
        selection.select(LightId(9));
        assert_eq!(selection.current(), Some(LightId(9)));
    }

    #[test]
    fn resolve_finds_the_selected_light() {
        let lights = create_lights().unwrap();
        let selection = SelectionController::new();
        selection.select(LightId(5));
        let light = selection.resolve(&lights).unwrap();
        assert_eq!(light.intersection, "Lombard St & Hyde St");
    }

    #[test]
    fn stale_id_resolves_to_no_light() {
        let lights = create_lights().unwrap();
        let selection = SelectionController::new();
        selection.select(LightId(999));
        assert_eq!(selection.current(), Some(LightId(999)));
        assert!(selection.resolve(&lights).is_none());
    }

    #[test]
    fn clones_share_the_same_selection() {
        let selection = SelectionController::new();
        let handle = selection.clone();
        handle.select(LightId(4));
        assert_eq!(selection.current(), Some(LightId(4)));
    }
}
