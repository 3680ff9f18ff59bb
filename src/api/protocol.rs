//! Wire types and endpoint paths of the Foody API

use serde::{Deserialize, Serialize};

/// Login endpoint, called without a bearer token
pub const AUTHENTICATION: &str = "/api/User/Authentication";

/// Response field carrying the bearer token
pub const ACCESS_TOKEN_FIELD: &str = "accessToken";

/// Request target: a fixed route plus an optional trailing id
///
/// The id is appended as a single path segment when the URL is built, so
/// characters such as `/`, `?` and `#` in it are percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub route: &'static str,
    pub id: Option<&'a str>,
}

impl<'a> Endpoint<'a> {
    pub const fn route(route: &'static str) -> Self {
        Self { route, id: None }
    }

    pub const fn with_id(route: &'static str, id: &'a str) -> Self {
        Self {
            route,
            id: Some(id),
        }
    }
}

impl std::fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}/{}", self.route, id),
            None => f.write_str(self.route),
        }
    }
}

/// Food creation endpoint
pub const FOOD_CREATE: Endpoint<'static> = Endpoint::route("/api/Food/Create");

/// Endpoint listing every food entry
pub const FOOD_ALL: Endpoint<'static> = Endpoint::route("/api/Food/All");

const FOOD_EDIT: &str = "/api/Food/Edit";
const FOOD_DELETE: &str = "/api/Food/Delete";

/// Endpoint for editing a food entry
pub fn food_edit(id: &str) -> Endpoint<'_> {
    Endpoint::with_id(FOOD_EDIT, id)
}

/// Endpoint for deleting a food entry
pub fn food_delete(id: &str) -> Endpoint<'_> {
    Endpoint::with_id(FOOD_DELETE, id)
}

/// Body of the login request
#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of a create request
#[derive(Serialize, Debug, Clone)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    /// Picture URL, may be empty
    pub url: String,
}

impl NewFood {
    pub fn new(name: &str, description: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        }
    }
}

/// One JSON-patch style edit
#[derive(Serialize, Debug, Clone)]
pub struct PatchOperation {
    pub path: String,
    pub op: String,
    pub value: String,
}

impl PatchOperation {
    /// A `replace` operation on the given document path
    pub fn replace(path: &str, value: &str) -> Self {
        Self {
            path: path.to_string(),
            op: "replace".to_string(),
            value: value.to_string(),
        }
    }
}

/// Common response envelope returned by create/edit/delete
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub food_id: Option<String>,
}
