use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, MarkAttendanceRequest, MessageResponse},
};

impl ApiClient {
    /// List attendance records, newest first as the backend orders them.
    /// `employee_id` narrows the listing server-side.
    pub async fn list_attendance(
        &self,
        employee_id: Option<&str>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self.http_client().get(format!("{}/attendance", base_url));
        if let Some(employee_id) = employee_id {
            request = request.query(&[("employee_id", employee_id)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Create-or-update for the `(employee_id, date)` pair; the upsert lives
    /// on the backend, the client just posts the intent.
    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendanceRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/attendance", base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
