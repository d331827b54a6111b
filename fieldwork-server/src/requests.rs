//! Typed request commands, one strict schema per endpoint.
//!
//! Each command decodes from the raw JSON body: unknown keys reject the
//! request outright, then every field rule runs so all violations are
//! reported together. Create commands require their domain fields; update
//! commands treat everything as optional but still enforce per-field format
//! rules when a value is present.

use chrono::{DateTime, Utc};
use serde_json::Value;

use fieldwork_core::{InspectorId, JobStatus, Timezone};

use crate::errors::AppError;
use crate::validation::{
    FieldErrors, check_email, check_max_len, is_blank, opt_i64, opt_string,
    reject_unknown_fields, require_non_blank, require_object,
};

const TOO_LONG_255: &str =
    "This value is too long. It should have 255 characters or less.";
const TOO_LONG_1000: &str =
    "This value is too long. It should have 1000 characters or less.";
const NOT_BLANK: &str = "This value should not be blank.";

fn parse_timezone(
    raw: &Option<String>,
    blank_message: Option<&str>,
    errors: &mut FieldErrors,
) -> Option<Timezone> {
    let raw = raw.as_deref()?;
    if is_blank(raw) {
        if let Some(message) = blank_message {
            errors.add("timezone", message);
        }
        return None;
    }
    match Timezone::from_iana(raw) {
        Some(tz) => Some(tz),
        None => {
            errors.add("timezone", "Invalid timezone");
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct InspectorCreateRequest {
    pub name: String,
    pub email: String,
    pub timezone: Timezone,
}

impl InspectorCreateRequest {
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        let map = require_object(body)?;
        reject_unknown_fields(map, &["name", "email", "timezone"])?;

        let mut errors = FieldErrors::new();
        let name = opt_string(map, "name", &mut errors);
        let email = opt_string(map, "email", &mut errors);
        let timezone_raw = opt_string(map, "timezone", &mut errors);

        require_non_blank(&name, "name", "Name is required", &mut errors);
        check_max_len(
            &name,
            "name",
            255,
            "Name cannot exceed 255 characters",
            &mut errors,
        );
        require_non_blank(&email, "email", "Email is required", &mut errors);
        check_email(&email, "email", &mut errors);
        require_non_blank(&timezone_raw, "timezone", "Timezone is required", &mut errors);
        let timezone = parse_timezone(&timezone_raw, None, &mut errors);

        errors.into_result()?;
        match (name, email, timezone) {
            (Some(name), Some(email), Some(timezone)) => Ok(Self {
                name,
                email,
                timezone,
            }),
            _ => Err(AppError::internal("validated inspector fields missing")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InspectorUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<Timezone>,
}

impl InspectorUpdateRequest {
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        let map = require_object(body)?;
        reject_unknown_fields(map, &["name", "email", "timezone"])?;

        let mut errors = FieldErrors::new();
        let name = opt_string(map, "name", &mut errors);
        let email = opt_string(map, "email", &mut errors);
        let timezone_raw = opt_string(map, "timezone", &mut errors);

        check_max_len(
            &name,
            "name",
            255,
            "Name cannot exceed 255 characters",
            &mut errors,
        );
        check_email(&email, "email", &mut errors);
        let timezone =
            parse_timezone(&timezone_raw, Some("Timezone cannot be blank"), &mut errors);

        errors.into_result()?;
        Ok(Self {
            name,
            email,
            timezone,
        })
    }
}

#[derive(Debug, Clone)]
pub struct JobCreateRequest {
    pub title: String,
    pub description: String,
}

impl JobCreateRequest {
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        let map = require_object(body)?;
        reject_unknown_fields(map, &["title", "description"])?;

        let mut errors = FieldErrors::new();
        let title = opt_string(map, "title", &mut errors);
        let description = opt_string(map, "description", &mut errors);

        require_non_blank(&title, "title", NOT_BLANK, &mut errors);
        check_max_len(&title, "title", 255, TOO_LONG_255, &mut errors);
        require_non_blank(&description, "description", NOT_BLANK, &mut errors);
        check_max_len(&description, "description", 1000, TOO_LONG_1000, &mut errors);

        errors.into_result()?;
        match (title, description) {
            (Some(title), Some(description)) => Ok(Self { title, description }),
            _ => Err(AppError::internal("validated job fields missing")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<JobStatus>,
}

impl JobUpdateRequest {
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        let map = require_object(body)?;
        reject_unknown_fields(map, &["title", "description", "status"])?;

        let mut errors = FieldErrors::new();
        let title = opt_string(map, "title", &mut errors);
        let description = opt_string(map, "description", &mut errors);
        let status_raw = opt_string(map, "status", &mut errors);

        check_max_len(&title, "title", 255, TOO_LONG_255, &mut errors);
        check_max_len(&description, "description", 1000, TOO_LONG_1000, &mut errors);
        let status = match status_raw.as_deref() {
            None => None,
            Some(raw) => match JobStatus::from_str_exact(raw) {
                Some(status) => Some(status),
                None => {
                    errors.add("status", "Invalid job status");
                    None
                }
            },
        };

        errors.into_result()?;
        Ok(Self {
            title,
            description,
            status,
        })
    }
}

#[derive(Debug, Clone)]
pub struct JobAssignRequest {
    pub inspector_id: InspectorId,
    pub scheduled_at: DateTime<Utc>,
}

impl JobAssignRequest {
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        let map = require_object(body)?;
        reject_unknown_fields(map, &["inspector_id", "scheduled_at"])?;

        let mut errors = FieldErrors::new();
        let inspector_id = opt_i64(map, "inspector_id", &mut errors);
        let scheduled_raw = opt_string(map, "scheduled_at", &mut errors);

        if inspector_id.is_none() && !errors.contains("inspector_id") {
            errors.add("inspector_id", NOT_BLANK);
        }
        require_non_blank(&scheduled_raw, "scheduled_at", NOT_BLANK, &mut errors);
        let scheduled_at = match scheduled_raw.as_deref() {
            Some(raw) if !is_blank(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(_) => {
                    errors.add("scheduled_at", "This value is not a valid datetime.");
                    None
                }
            },
            _ => None,
        };

        errors.into_result()?;
        match (inspector_id, scheduled_at) {
            (Some(inspector_id), Some(scheduled_at)) => Ok(Self {
                inspector_id: InspectorId(inspector_id),
                scheduled_at,
            }),
            _ => Err(AppError::internal("validated assign fields missing")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobCompleteRequest {
    pub assessment: String,
}

impl JobCompleteRequest {
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        let map = require_object(body)?;
        reject_unknown_fields(map, &["assessment"])?;

        let mut errors = FieldErrors::new();
        let assessment = opt_string(map, "assessment", &mut errors);

        require_non_blank(&assessment, "assessment", NOT_BLANK, &mut errors);
        check_max_len(&assessment, "assessment", 255, TOO_LONG_255, &mut errors);

        errors.into_result()?;
        match assessment {
            Some(assessment) => Ok(Self { assessment }),
            None => Err(AppError::internal("validated assessment missing")),
        }
    }
}
