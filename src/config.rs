use crate::lead::gateway::GatewayConfig;

const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_SERVICE_ID: &str = "service_r6b880u";
const DEFAULT_TEMPLATE_ID: &str = "template_a992h1c";
const DEFAULT_PUBLIC_KEY: &str = "6phxnlcUaWnx1TlYO";

/// Local storage key holding the visitor's chosen language.
pub const LOCALE_STORAGE_KEY: &str = "folada.locale";

pub const CONTACT_EMAIL: &str = "hello@folada.ge";

#[cfg(debug_assertions)]
pub fn get_log_level() -> log::Level {
    log::Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> log::Level {
    log::Level::Info
}

/// EmailJS settings, overridable at build time through the environment.
pub fn get_gateway_config() -> GatewayConfig {
    GatewayConfig {
        endpoint: option_env!("EMAILJS_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT).to_string(),
        service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or(DEFAULT_SERVICE_ID).to_string(),
        template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or(DEFAULT_TEMPLATE_ID).to_string(),
        public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or(DEFAULT_PUBLIC_KEY).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_config_has_all_tokens() {
        let config = get_gateway_config();
        assert!(config.endpoint.starts_with("https://"));
        assert!(!config.service_id.is_empty());
        assert!(!config.template_id.is_empty());
        assert!(!config.public_key.is_empty());
    }
}
