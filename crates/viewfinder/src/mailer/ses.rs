//! SES-backed mailer for login codes.

use async_trait::async_trait;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client;

use viewfinder_core::auth::LOGIN_CODE_TTL_MINUTES;
use viewfinder_core::mailer::{Mailer, MailerError, Result};

use crate::config::Config;

const SUBJECT: &str = "Your login code";

/// Mailer sending the fixed login-code message via SES.
///
/// The message is a static dual-part (text + HTML) template with the code
/// as its only substitution point. Send failures are logged with their
/// transport detail and collapsed to the generic [`MailerError::Send`].
#[derive(Debug, Clone)]
pub struct SesMailer {
    client: Client,
    sender: String,
}

impl SesMailer {
    /// Creates a new mailer with the given client and sender address from
    /// the configuration.
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            sender: config.sender_email.clone(),
        }
    }

    /// Creates a new mailer from environment configuration, using the AWS
    /// SDK default credential chain.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), &Config::from_env())
    }
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send_login_code(&self, recipient: &str, code: &str) -> Result<()> {
        let charset = "UTF-8";
        let subject = Content::builder()
            .data(SUBJECT)
            .charset(charset)
            .build()
            .map_err(|e| MailerError::Message(e.to_string()))?;
        let text = Content::builder()
            .data(render_text(code))
            .charset(charset)
            .build()
            .map_err(|e| MailerError::Message(e.to_string()))?;
        let html = Content::builder()
            .data(render_html(code))
            .charset(charset)
            .build()
            .map_err(|e| MailerError::Message(e.to_string()))?;

        let message = Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).html(html).build())
            .build();
        let destination = Destination::builder().to_addresses(recipient).build();

        self.client
            .send_email()
            .from_email_address(&self.sender)
            .destination(destination)
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, recipient, "failed to send login code email");
                MailerError::Send
            })?;

        Ok(())
    }
}

/// Plain-text part of the login-code message.
fn render_text(code: &str) -> String {
    format!(
        "Your verification code is: {code}\n\n\
         This code will expire in {LOGIN_CODE_TTL_MINUTES} minutes.\n\n\
         If you didn't request this, please ignore this email."
    )
}

/// HTML part of the login-code message.
fn render_html(code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <style>
      body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif; line-height: 1.6; color: #333; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
      .code-box {{ background: #f5f5f5; border: 2px solid #e0e0e0; border-radius: 8px; padding: 20px; text-align: center; margin: 30px 0; }}
      .code {{ font-size: 32px; font-weight: bold; letter-spacing: 8px; color: #000; font-family: monospace; }}
      .footer {{ color: #666; font-size: 14px; margin-top: 30px; }}
    </style>
  </head>
  <body>
    <div class="container">
      <h2>Your login code</h2>
      <p>Enter this verification code to access the admin dashboard:</p>
      <div class="code-box">
        <div class="code">{code}</div>
      </div>
      <p><strong>This code will expire in {LOGIN_CODE_TTL_MINUTES} minutes.</strong></p>
      <div class="footer">
        <p>If you didn't request this code, please ignore this email.</p>
      </div>
    </div>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_embeds_code_and_ttl() {
        let text = render_text("123456");
        assert!(text.contains("Your verification code is: 123456"));
        assert!(text.contains("expire in 10 minutes"));
    }

    #[test]
    fn test_render_html_embeds_code_once() {
        let html = render_html("987654");
        assert_eq!(html.matches("987654").count(), 1);
        assert!(html.contains(r#"<div class="code">987654</div>"#));
        assert!(html.contains("expire in 10 minutes"));
    }
}
