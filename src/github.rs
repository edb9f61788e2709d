//! GitHub GraphQL client for the contribution calendar.
//!
//! Issues exactly one authenticated query and flattens the nested
//! `weeks -> contributionDays` structure into a flat list of days.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::error::{FetchError, FetchResult};

const ENDPOINT: &str = "https://api.github.com/graphql";

// GitHub rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!("gitgarden/", env!("CARGO_PKG_VERSION"));

const QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

/// One calendar date's recorded contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// The flattened contribution calendar for one user.
#[derive(Debug)]
pub struct ContributionCalendar {
    /// Total over the whole range, as reported by the API.
    pub total: u32,
    pub days: Vec<ContributionDay>,
}

// Response types matching the GraphQL schema.
// The API also sends a per-day `color`; we derive our own palette, so
// it is left out of the schema here and ignored during deserialization.

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<User>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: CalendarNode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarNode {
    total_contributions: u32,
    weeks: Vec<Week>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Week {
    contribution_days: Vec<DayNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayNode {
    contribution_count: u32,
    date: NaiveDate,
}

/// Fetch the contribution calendar for `username` with one GraphQL query.
pub async fn fetch_contributions(
    username: &str,
    token: &str,
) -> FetchResult<ContributionCalendar> {
    let client = reqwest::Client::new();

    let response = client
        .post(ENDPOINT)
        .bearer_auth(token)
        .header("User-Agent", USER_AGENT)
        .json(&json!({ "query": QUERY, "variables": { "username": username } }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status { status, body });
    }

    let body: GraphQlResponse = response.json().await?;
    flatten(username, body)
}

/// Collapse the GraphQL response into a flat day list.
/// A null `user` (login not found) is an UnknownUser error.
fn flatten(username: &str, response: GraphQlResponse) -> FetchResult<ContributionCalendar> {
    if let Some(errors) = response.errors {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(FetchError::GraphQl(messages.join("; ")));
    }

    let user = response
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| FetchError::UnknownUser(username.to_string()))?;

    let calendar = user.contributions_collection.contribution_calendar;

    let days = calendar
        .weeks
        .into_iter()
        .flat_map(|week| week.contribution_days)
        .map(|day| ContributionDay {
            date: day.date,
            count: day.contribution_count,
        })
        .collect();

    Ok(ContributionCalendar {
        total: calendar.total_contributions,
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GraphQlResponse {
        serde_json::from_str(json).expect("response JSON should parse")
    }

    #[test]
    fn test_flatten_weeks_into_days() {
        let response = parse(
            r##"{
                "data": {
                    "user": {
                        "contributionsCollection": {
                            "contributionCalendar": {
                                "totalContributions": 7,
                                "weeks": [
                                    {
                                        "contributionDays": [
                                            {"contributionCount": 3, "date": "2024-03-14", "color": "#40c463"},
                                            {"contributionCount": 0, "date": "2024-03-15", "color": "#ebedf0"}
                                        ]
                                    },
                                    {
                                        "contributionDays": [
                                            {"contributionCount": 4, "date": "2024-03-16", "color": "#40c463"}
                                        ]
                                    }
                                ]
                            }
                        }
                    }
                }
            }"##,
        );

        let calendar = flatten("octocat", response).expect("flatten should succeed");

        assert_eq!(calendar.total, 7);
        assert_eq!(calendar.days.len(), 3);
        assert_eq!(
            calendar.days[0],
            ContributionDay {
                date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
                count: 3,
            }
        );
        assert_eq!(calendar.days[2].count, 4);
    }

    #[test]
    fn test_graphql_errors_become_fetch_errors() {
        let response = parse(
            r#"{
                "data": {"user": null},
                "errors": [{"message": "Could not resolve to a User with the login of 'nobody'."}]
            }"#,
        );

        let err = flatten("nobody", response).unwrap_err();
        assert!(matches!(err, FetchError::GraphQl(_)));
        assert!(err.to_string().contains("Could not resolve"));
    }

    #[test]
    fn test_null_user_is_unknown_user() {
        let response = parse(r#"{"data": {"user": null}}"#);

        let err = flatten("ghost", response).unwrap_err();
        assert!(matches!(err, FetchError::UnknownUser(name) if name == "ghost"));
    }

    #[test]
    fn test_malformed_response_fails_to_parse() {
        let result: Result<GraphQlResponse, _> =
            serde_json::from_str(r#"{"data": {"user": {"contributionsCollection": {}}}}"#);
        assert!(result.is_err());
    }
}
