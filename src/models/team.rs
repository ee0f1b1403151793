//! Team members.

use serde::{Deserialize, Serialize};

use crate::http::HttpContext;
use crate::macros::{api_response, model_builder};
use crate::models::Error;

/// Filter criteria for a team member search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchTeamMembersFilter {
    /// Restrict results to members assigned to these locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<String>>,

    /// Restrict results to `ACTIVE` or `INACTIVE` members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

model_builder! {
    model = SearchTeamMembersFilter,
    builder = SearchTeamMembersFilterBuilder,
    required = {},
    optional = {
        location_ids: Vec<String>,
        status: String,
    },
    clearable = {},
}

/// Query wrapper for a team member search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchTeamMembersQuery {
    /// Filter criteria; an empty query matches everything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchTeamMembersFilter>,
}

model_builder! {
    model = SearchTeamMembersQuery,
    builder = SearchTeamMembersQueryBuilder,
    required = {},
    optional = {
        filter: SearchTeamMembersFilter,
    },
    clearable = {},
}

/// Request body for searching team members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchTeamMembersRequest {
    /// Search criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<SearchTeamMembersQuery>,

    /// Page size cap, 1 to 25
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Continuation token from a previous response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

model_builder! {
    model = SearchTeamMembersRequest,
    builder = SearchTeamMembersRequestBuilder,
    required = {},
    optional = {
        query: SearchTeamMembersQuery,
        limit: i32,
        cursor: String,
    },
    clearable = {},
}

/// A member of the seller's team.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamMember {
    /// Server-assigned member identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Caller-defined reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// Whether this member owns the Square account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,

    /// Current status, `ACTIVE` or `INACTIVE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Phone number in E.164 format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Creation timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

model_builder! {
    model = TeamMember,
    builder = TeamMemberBuilder,
    required = {},
    optional = {
        id: String,
        reference_id: String,
        is_owner: bool,
        status: String,
        given_name: String,
        family_name: String,
        email_address: String,
        phone_number: String,
        created_at: String,
        updated_at: String,
    },
    clearable = {},
}

/// Response body for searching team members.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchTeamMembersResponse {
    /// Matching team members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<TeamMember>>,

    /// Continuation token; absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

api_response!(SearchTeamMembersResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_wire_shape() {
        let request = SearchTeamMembersRequest::builder()
            .query(
                SearchTeamMembersQuery::builder()
                    .filter(
                        SearchTeamMembersFilter::builder()
                            .location_ids(vec!["0G5P3VGACMMQZ".to_string()])
                            .status("ACTIVE")
                            .build(),
                    )
                    .build(),
            )
            .limit(10)
            .build();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["query"]["filter"]["location_ids"],
            serde_json::json!(["0G5P3VGACMMQZ"])
        );
        assert_eq!(json["query"]["filter"]["status"], "ACTIVE");
        assert_eq!(json["limit"], 10);
        assert!(json.get("cursor").is_none());
    }
}
