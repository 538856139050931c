use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LogProgressRequest {
    pub path_id: Uuid,
    pub milestone_id: Option<Uuid>,
    pub resource_id: Option<Uuid>,
    pub hours_spent: f64,
    pub notes: Option<String>,
    pub confidence_level: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct TotalHoursResponse {
    pub total_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let req: LogProgressRequest = serde_json::from_str(
            r#"{"path_id": "00000000-0000-0000-0000-000000000001", "hours_spent": 2.5}"#,
        )
        .unwrap();
        assert!(req.milestone_id.is_none());
        assert!(req.resource_id.is_none());
        assert!(req.notes.is_none());
        assert!(req.confidence_level.is_none());
        assert_eq!(req.hours_spent, 2.5);
    }
}
