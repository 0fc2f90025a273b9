use super::{
    client::{encode_path_segment, ApiClient},
    types::{ApiError, Employee, MessageResponse, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/employees", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/employees", base_url))
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

    /// Deletion cascades to the employee's attendance records on the backend.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!(
                "{}/employees/{}",
                base_url,
                encode_path_segment(employee_id)
            ))
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
