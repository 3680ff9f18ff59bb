//! State carried from one scenario to the next within a single run

/// Values produced by earlier scenarios for later ones
///
/// One instance per run. Only the create scenario writes the id; edit reads
/// it and delete reads then clears it.
#[derive(Debug, Default)]
pub struct RunState {
    created_food_id: Option<String>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the id returned by a successful create
    pub fn record_created(&mut self, id: String) {
        self.created_food_id = Some(id);
    }

    /// Id of the food created in this run, if any. Empty ids count as unset.
    pub fn created_food_id(&self) -> Option<&str> {
        self.created_food_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Forget the created id once the entity is gone
    pub fn clear_created(&mut self) -> Option<String> {
        self.created_food_id.take()
    }
}
