use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    adapters::email::{
        log_only::LogOnlyEmailSender, resend::ResendEmailSender, smtp::SmtpEmailSender,
    },
    application::{ports::email_sender::EmailSender, use_cases::notification::EmailNotifier},
    domain::entities::email_provider::EmailProvider,
    infra::{
        config::{DEFAULT_LOG_ONLY_ADMIN_EMAIL, EmailConfig, SmtpConfig},
        error::InfraError,
    },
};

/// Builds the waitlist notifier for the configured provider.
///
/// All provider-specific configuration is checked here, once, so a
/// misconfigured deployment fails at startup with a descriptive message
/// instead of on every signup.
pub fn build_notifier(config: &EmailConfig) -> Result<EmailNotifier, InfraError> {
    let sender = build_email_sender(config)?;

    let admin_email = if config.provider.is_outbound() {
        config
            .admin_recipient()
            .ok_or_else(|| misconfigured(config.provider, "ADMIN_EMAIL or FROM_EMAIL is not configured"))?
    } else {
        config
            .admin_email
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_ONLY_ADMIN_EMAIL.to_string())
    };

    tracing::info!(
        provider = %config.provider,
        admin_email = %admin_email,
        "Waitlist notifications configured"
    );

    Ok(EmailNotifier::new(sender, config.sender(), admin_email))
}

/// Instantiates the delivery channel for `config.provider`.
pub fn build_email_sender(config: &EmailConfig) -> Result<Arc<dyn EmailSender>, InfraError> {
    match config.provider {
        EmailProvider::None => Ok(Arc::new(LogOnlyEmailSender::new())),
        EmailProvider::Resend => {
            let api_key = config
                .resend_api_key
                .as_ref()
                .map(clone_secret)
                .ok_or_else(|| misconfigured(EmailProvider::Resend, "RESEND_API_KEY is not configured"))?;
            Ok(Arc::new(ResendEmailSender::new(api_key)))
        }
        EmailProvider::Smtp => Ok(Arc::new(build_smtp_sender(&config.smtp)?)),
    }
}

fn build_smtp_sender(smtp: &SmtpConfig) -> Result<SmtpEmailSender, InfraError> {
    let (Some(host), Some(port), Some(user), Some(password)) =
        (&smtp.host, &smtp.port, &smtp.user, &smtp.password)
    else {
        return Err(misconfigured(
            EmailProvider::Smtp,
            "SMTP environment variables are not fully configured",
        ));
    };

    let port: u16 = port
        .parse()
        .map_err(|_| misconfigured(EmailProvider::Smtp, "SMTP_PORT must be a valid port number"))?;

    SmtpEmailSender::new(host, port, user.clone(), clone_secret(password))
        .map_err(|e| misconfigured(EmailProvider::Smtp, &e.to_string()))
}

fn clone_secret(secret: &SecretString) -> SecretString {
    SecretString::new(secret.expose_secret().into())
}

fn misconfigured(provider: EmailProvider, reason: &str) -> InfraError {
    InfraError::EmailConfig {
        provider,
        reason: reason.to_string(),
    }
}
