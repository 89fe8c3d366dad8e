use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use super::model::{LeadSubmission, ProjectType};

/// Tokens identifying the EmailJS account, template and service a lead is relayed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// The five values handed to the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(rename = "projectType")]
    pub project_type: ProjectType,
    pub message: String,
}

impl TemplateParams {
    pub fn new(submission: &LeadSubmission, project_type: ProjectType) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            company: submission.company.clone(),
            project_type,
            message: submission.message.clone(),
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("gateway rejected the email with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl GatewayError {
    /// Short category for logs; the detail may echo user input.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Transport(_) => "transport",
            GatewayError::Rejected { .. } => "rejected",
            GatewayError::Encode(_) => "encode",
        }
    }
}

/// Outbound transactional email service.
#[allow(async_fn_in_trait)]
pub trait EmailGateway {
    async fn send(&self, params: &TemplateParams) -> Result<(), GatewayError>;
}

pub struct EmailJsGateway {
    config: GatewayConfig,
}

impl EmailJsGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    pub fn body(&self, params: &TemplateParams) -> Result<serde_json::Value, GatewayError> {
        serde_json::to_value(SendEmailRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        })
        .map_err(|e| GatewayError::Encode(e.to_string()))
    }
}

impl EmailGateway for EmailJsGateway {
    async fn send(&self, params: &TemplateParams) -> Result<(), GatewayError> {
        let body = self.body(params)?;
        let request = Request::post(&self.config.endpoint)
            .json(&body)
            .map_err(|e| GatewayError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TemplateParams {
        TemplateParams {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            company: "Acme".to_string(),
            project_type: ProjectType::ECommerce,
            message: "hi".to_string(),
        }
    }

    fn gateway() -> EmailJsGateway {
        EmailJsGateway::new(GatewayConfig {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "key_z".to_string(),
        })
    }

    #[test]
    fn template_params_carry_exactly_five_fields() {
        let value = serde_json::to_value(params()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["company", "email", "message", "name", "projectType"]);
        assert_eq!(object["projectType"], "E-commerce");
    }

    #[test]
    fn body_uses_emailjs_field_names() {
        let body = gateway().body(&params()).unwrap();
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "key_z");
        assert_eq!(body["template_params"]["name"], "A");
        assert_eq!(body["template_params"]["projectType"], "E-commerce");
    }

    #[test]
    fn error_kind_hides_detail() {
        let err = GatewayError::Rejected { status: 400, body: "a@b.com is invalid".into() };
        assert_eq!(err.kind(), "rejected");
        assert_eq!(GatewayError::Transport("dns".into()).kind(), "transport");
    }
}
