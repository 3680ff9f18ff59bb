//! The ordered Food CRUD scenarios
//!
//! Order matters: create stores the new id in [`RunState`], edit and delete
//! consume it. Scenarios must run one after another in [`ORDERED`] order.

use reqwest::StatusCode;

use crate::api::protocol::{
    food_delete, food_edit, ApiResponse, NewFood, PatchOperation, FOOD_ALL, FOOD_CREATE,
};
use crate::api::Session;
use crate::common::Result;

use super::outcome::{body_contains, parse_body, status_is, Check, ScenarioOutcome};
use super::state::RunState;

/// Id the service is known not to have
pub const NONEXISTENT_FOOD_ID: &str = "1234";

pub const EDIT_SUCCESS: &str = "Successfully edited";
pub const DELETE_SUCCESS: &str = "Deleted successfully!";
pub const EDIT_NOT_FOUND: &str = "No food revues...";
pub const DELETE_NOT_FOUND: &str = "Unable to delete this food revue!";

const MISSING_FOOD_ID: &str = "Food ID not available. Create scenario may have failed.";

/// One step of the suite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Create,
    EditTitle,
    ListAll,
    Delete,
    CreateInvalid,
    EditNonexistent,
    DeleteNonexistent,
}

/// Execution order of the suite
pub const ORDERED: [Scenario; 7] = [
    Scenario::Create,
    Scenario::EditTitle,
    Scenario::ListAll,
    Scenario::Delete,
    Scenario::CreateInvalid,
    Scenario::EditNonexistent,
    Scenario::DeleteNonexistent,
];

impl Scenario {
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Create => "create",
            Scenario::EditTitle => "edit_title",
            Scenario::ListAll => "list_all",
            Scenario::Delete => "delete",
            Scenario::CreateInvalid => "create_invalid",
            Scenario::EditNonexistent => "edit_nonexistent",
            Scenario::DeleteNonexistent => "delete_nonexistent",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Create => "Creating a food returns 201 and its id",
            Scenario::EditTitle => "Renaming the created food returns 200",
            Scenario::ListAll => "Listing foods returns a non-empty array",
            Scenario::Delete => "Deleting the created food returns 200",
            Scenario::CreateInvalid => "Creating a food without name or description returns 400",
            Scenario::EditNonexistent => "Editing an unknown food returns 404",
            Scenario::DeleteNonexistent => "Deleting an unknown food returns 400",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Scenario::Create | Scenario::CreateInvalid => "POST",
            Scenario::EditTitle | Scenario::EditNonexistent => "PATCH",
            Scenario::ListAll => "GET",
            Scenario::Delete | Scenario::DeleteNonexistent => "DELETE",
        }
    }

    /// Request path, with `{id}` standing for the created food
    pub fn path_template(self) -> String {
        match self {
            Scenario::Create | Scenario::CreateInvalid => FOOD_CREATE,
            Scenario::EditTitle => food_edit("{id}"),
            Scenario::ListAll => FOOD_ALL,
            Scenario::Delete => food_delete("{id}"),
            Scenario::EditNonexistent => food_edit(NONEXISTENT_FOOD_ID),
            Scenario::DeleteNonexistent => food_delete(NONEXISTENT_FOOD_ID),
        }
        .to_string()
    }

    pub fn expected_status(self) -> StatusCode {
        match self {
            Scenario::Create => StatusCode::CREATED,
            Scenario::EditTitle | Scenario::ListAll | Scenario::Delete => StatusCode::OK,
            Scenario::CreateInvalid | Scenario::DeleteNonexistent => StatusCode::BAD_REQUEST,
            Scenario::EditNonexistent => StatusCode::NOT_FOUND,
        }
    }

    /// Whether the scenario needs the id stored by [`Scenario::Create`]
    pub fn requires_created_food(self) -> bool {
        matches!(self, Scenario::EditTitle | Scenario::Delete)
    }

    /// Execute the scenario
    ///
    /// `Err` means the request itself failed; contract breaks come back as
    /// [`ScenarioOutcome::Fail`].
    pub async fn run(self, session: &Session, state: &mut RunState) -> Result<ScenarioOutcome> {
        match self {
            Scenario::Create => create(session, state).await,
            Scenario::EditTitle => edit_title(session, state).await,
            Scenario::ListAll => list_all(session).await,
            Scenario::Delete => delete(session, state).await,
            Scenario::CreateInvalid => create_invalid(session).await,
            Scenario::EditNonexistent => edit_nonexistent(session).await,
            Scenario::DeleteNonexistent => delete_nonexistent(session).await,
        }
    }
}

async fn create(session: &Session, state: &mut RunState) -> Result<ScenarioOutcome> {
    let food = NewFood::new("New Food", "Delicious new food item", "");
    let response = session.post(FOOD_CREATE, &food).await?;

    let check: Check<String> = status_is(&response, StatusCode::CREATED).and_then(|()| {
        let parsed: ApiResponse = parse_body(&response)?;
        match parsed.food_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err("Food ID should not be null or empty".to_string()),
        }
    });

    Ok(match check {
        Ok(id) => {
            tracing::debug!(food_id = %id, "Created food");
            state.record_created(id);
            ScenarioOutcome::Pass
        }
        Err(reason) => ScenarioOutcome::fail(reason),
    })
}

async fn edit_title(session: &Session, state: &RunState) -> Result<ScenarioOutcome> {
    let Some(id) = state.created_food_id() else {
        return Ok(ScenarioOutcome::skipped(MISSING_FOOD_ID));
    };

    let changes = [PatchOperation::replace("/name", "Updated food name")];
    let response = session.patch(food_edit(id), &changes).await?;

    Ok(status_is(&response, StatusCode::OK)
        .and_then(|()| body_contains(&response, EDIT_SUCCESS))
        .into())
}

async fn list_all(session: &Session) -> Result<ScenarioOutcome> {
    let response = session.get(FOOD_ALL).await?;

    Ok(status_is(&response, StatusCode::OK)
        .and_then(|()| {
            let foods: Vec<serde_json::Value> = parse_body(&response)?;
            if foods.is_empty() {
                Err("Expected a non-empty list of foods, got []".to_string())
            } else {
                Ok(())
            }
        })
        .into())
}

async fn delete(session: &Session, state: &mut RunState) -> Result<ScenarioOutcome> {
    let Some(id) = state.created_food_id().map(str::to_string) else {
        return Ok(ScenarioOutcome::skipped(MISSING_FOOD_ID));
    };

    let response = session.delete(food_delete(&id)).await?;
    if response.status == StatusCode::OK {
        state.clear_created();
    }

    Ok(status_is(&response, StatusCode::OK)
        .and_then(|()| {
            let parsed: ApiResponse = parse_body(&response)?;
            match parsed.msg.as_deref() {
                Some(DELETE_SUCCESS) => Ok(()),
                Some(other) => Err(format!(
                    "Expected msg '{}', got '{}'",
                    DELETE_SUCCESS, other
                )),
                None => Err("Response data is null".to_string()),
            }
        })
        .into())
}

async fn create_invalid(session: &Session) -> Result<ScenarioOutcome> {
    let food = NewFood::new("", "", "");
    let response = session.post(FOOD_CREATE, &food).await?;

    Ok(status_is(&response, StatusCode::BAD_REQUEST).into())
}

async fn edit_nonexistent(session: &Session) -> Result<ScenarioOutcome> {
    let changes = [PatchOperation::replace("/name", "NonExistentFood")];
    let response = session
        .patch(food_edit(NONEXISTENT_FOOD_ID), &changes)
        .await?;

    Ok(status_is(&response, StatusCode::NOT_FOUND)
        .and_then(|()| body_contains(&response, EDIT_NOT_FOUND))
        .into())
}

async fn delete_nonexistent(session: &Session) -> Result<ScenarioOutcome> {
    let response = session.delete(food_delete(NONEXISTENT_FOOD_ID)).await?;

    Ok(status_is(&response, StatusCode::BAD_REQUEST)
        .and_then(|()| body_contains(&response, DELETE_NOT_FOUND))
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_fixed() {
        let names: Vec<_> = ORDERED.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "create",
                "edit_title",
                "list_all",
                "delete",
                "create_invalid",
                "edit_nonexistent",
                "delete_nonexistent"
            ]
        );
    }

    #[test]
    fn test_dependents_come_after_create() {
        let create_pos = ORDERED.iter().position(|s| *s == Scenario::Create).unwrap();
        for (pos, scenario) in ORDERED.iter().enumerate() {
            if scenario.requires_created_food() {
                assert!(pos > create_pos, "{} runs before create", scenario.name());
            }
        }
    }

    #[test]
    fn test_expected_statuses() {
        let statuses: Vec<u16> = ORDERED.iter().map(|s| s.expected_status().as_u16()).collect();
        assert_eq!(statuses, [201, 200, 200, 200, 400, 404, 400]);
    }

    #[test]
    fn test_path_templates() {
        assert_eq!(Scenario::EditTitle.path_template(), "/api/Food/Edit/{id}");
        assert_eq!(
            Scenario::DeleteNonexistent.path_template(),
            "/api/Food/Delete/1234"
        );
    }
}
