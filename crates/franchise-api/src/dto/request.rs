//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use franchise_core::error::AppError;
use franchise_core::types::TaskId;
use franchise_entity::checklist::{ChecklistStatus, TaskInput, TaskStatus, UpdateChecklist};
use franchise_entity::user::{UpdateUser, UserRole};
use franchise_service::{NewChecklist, RegisterInput};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plain password; the length policy is enforced by the service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Role within the tenant.
    pub role: UserRole,
    /// Tenant the account belongs to.
    #[validate(length(min = 1, message = "Tenant ID is required"))]
    pub tenant_id: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            role: req.role,
            tenant_id: req.tenant_id,
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token.
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Update profile request. Omitted or empty fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// First name.
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    /// Last name.
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    /// Phone number.
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    /// Avatar URL.
    #[validate(length(max = 2048))]
    pub avatar: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateUser {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
            avatar: req.avatar,
        }
    }
}

/// Task as supplied by clients when creating or replacing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TaskRequest {
    /// Existing task id; omitted for new tasks.
    pub id: Option<TaskId>,
    /// Task title.
    #[validate(length(min = 1, max = 255, message = "Task title is required"))]
    pub title: String,
    /// Task description.
    pub description: Option<String>,
    /// Task status (defaults to pending).
    pub status: Option<TaskStatus>,
    /// Position within the checklist.
    pub order: Option<i32>,
}

impl From<TaskRequest> for TaskInput {
    fn from(req: TaskRequest) -> Self {
        Self {
            id: req.id,
            title: req.title,
            description: req.description,
            status: req.status,
            order: req.order,
        }
    }
}

/// Create checklist request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateChecklistRequest {
    /// Title.
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Initial tasks.
    #[serde(default)]
    #[validate(nested)]
    pub tasks: Vec<TaskRequest>,
}

impl From<CreateChecklistRequest> for NewChecklist {
    fn from(req: CreateChecklistRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            tasks: req.tasks.into_iter().map(TaskInput::from).collect(),
        }
    }
}

/// Partial checklist update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateChecklistRequest {
    /// New title; empty leaves the current one.
    #[validate(length(max = 255, message = "Title is too long"))]
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Requested status; see [`UpdateChecklist`].
    pub status: Option<ChecklistStatus>,
    /// Replacement task set.
    #[validate(nested)]
    pub tasks: Option<Vec<TaskRequest>>,
}

impl From<UpdateChecklistRequest> for UpdateChecklist {
    fn from(req: UpdateChecklistRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            tasks: req
                .tasks
                .map(|tasks| tasks.into_iter().map(TaskInput::from).collect()),
        }
    }
}

/// Query parameters for the dealer directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealerQuery {
    /// Role filter (`dealer` when omitted).
    #[serde(rename = "type")]
    pub role: Option<String>,
}

impl DealerQuery {
    /// Parse the role filter; an empty value counts as omitted.
    pub fn role(&self) -> Result<Option<UserRole>, AppError> {
        self.role
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(|r| r.parse::<UserRole>().map_err(|e| e.titled("Invalid dealer type")))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_bad_email() {
        let req = RegisterRequest {
            email: "not-an-email".into(),
            password: "12345678".into(),
            role: UserRole::Dealer,
            tenant_id: "t1".into(),
            first_name: None,
            last_name: None,
            phone: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nested_task_titles_are_validated() {
        let req = CreateChecklistRequest {
            title: "Opening".into(),
            description: None,
            tasks: vec![TaskRequest::default()],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_tasks_array_is_kept_as_replacement() {
        let req: UpdateChecklistRequest = serde_json::from_str(r#"{"tasks": []}"#).unwrap();
        let update = UpdateChecklist::from(req);
        assert_eq!(update.tasks.map(|t| t.len()), Some(0));
        assert!(update.title.is_none());
    }

    #[test]
    fn test_update_allows_empty_title() {
        let req = UpdateChecklistRequest {
            title: Some(String::new()),
            description: Some("new".into()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_dealer_query_accepts_franchiser_alias() {
        let q: DealerQuery = serde_json::from_str(r#"{"type": "franchiser"}"#).unwrap();
        assert_eq!(q.role().unwrap(), Some(UserRole::FranchiseOwner));

        let q = DealerQuery {
            role: Some("admin".into()),
        };
        assert!(q.role().is_err());
        assert_eq!(DealerQuery::default().role().unwrap(), None);
    }
}
