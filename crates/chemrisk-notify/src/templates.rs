use serde::Serialize;

/// The three canned notification emails the application sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    SubscriptionConfirmation,
    SatisfactionSurvey,
    BillingReminder,
}

impl NotificationKind {
    /// Parse the wire `type` field.
    pub fn parse(s: &str) -> Option<NotificationKind> {
        match s {
            "subscription_confirmation" => Some(NotificationKind::SubscriptionConfirmation),
            "satisfaction_survey" => Some(NotificationKind::SatisfactionSurvey),
            "billing_reminder" => Some(NotificationKind::BillingReminder),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::SubscriptionConfirmation => "subscription_confirmation",
            NotificationKind::SatisfactionSurvey => "satisfaction_survey",
            NotificationKind::BillingReminder => "billing_reminder",
        }
    }
}

/// A rendered email ready for delivery.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub subject: String,
    pub html: String,
}

/// Render the template for a notification kind. `user_name` and `plan_name`
/// are optional; fallbacks keep the copy readable when they are absent.
pub fn render(
    kind: NotificationKind,
    user_name: Option<&str>,
    plan_name: Option<&str>,
) -> EmailMessage {
    let name = user_name.unwrap_or("cher utilisateur");
    let plan = plan_name.unwrap_or("votre formule");

    match kind {
        NotificationKind::SubscriptionConfirmation => EmailMessage {
            subject: format!("Bienvenue sur ChemRisk AI — {plan} activée"),
            html: format!(
                "<h1>Merci {name} !</h1>\
                 <p>Votre abonnement <strong>{plan}</strong> est actif. Vous avez \
                 désormais accès à l'analyse de risques chimiques complète : \
                 classification GHS, alertes d'incompatibilité et tableaux RAMPE.</p>\
                 <p>Bonne analyse,<br>L'équipe ChemRisk AI</p>"
            ),
        },
        NotificationKind::SatisfactionSurvey => EmailMessage {
            subject: "Votre avis sur ChemRisk AI".to_string(),
            html: format!(
                "<h1>Bonjour {name},</h1>\
                 <p>Vous utilisez ChemRisk AI depuis quelques semaines. \
                 Deux minutes pour nous dire ce qui fonctionne — et ce qui ne \
                 fonctionne pas ?</p>\
                 <p><a href=\"https://chemrisk.app/survey\">Répondre au questionnaire</a></p>\
                 <p>Merci,<br>L'équipe ChemRisk AI</p>"
            ),
        },
        NotificationKind::BillingReminder => EmailMessage {
            subject: format!("Rappel : échéance de facturation — {plan}"),
            html: format!(
                "<h1>Bonjour {name},</h1>\
                 <p>Le prochain prélèvement pour <strong>{plan}</strong> aura lieu \
                 dans 3 jours. Aucune action n'est requise si votre moyen de \
                 paiement est à jour.</p>\
                 <p><a href=\"https://chemrisk.app/account/billing\">Gérer ma facturation</a></p>\
                 <p>L'équipe ChemRisk AI</p>"
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(
            NotificationKind::parse("subscription_confirmation"),
            Some(NotificationKind::SubscriptionConfirmation)
        );
        assert_eq!(
            NotificationKind::parse("satisfaction_survey"),
            Some(NotificationKind::SatisfactionSurvey)
        );
        assert_eq!(
            NotificationKind::parse("billing_reminder"),
            Some(NotificationKind::BillingReminder)
        );
        assert_eq!(NotificationKind::parse("password_reset"), None);
        assert_eq!(NotificationKind::parse(""), None);
    }

    #[test]
    fn test_round_trip_as_str() {
        for kind in [
            NotificationKind::SubscriptionConfirmation,
            NotificationKind::SatisfactionSurvey,
            NotificationKind::BillingReminder,
        ] {
            assert_eq!(NotificationKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_render_interpolates_fields() {
        let message = render(
            NotificationKind::SubscriptionConfirmation,
            Some("Marie"),
            Some("Formule Pro"),
        );
        assert!(message.subject.contains("Formule Pro"));
        assert!(message.html.contains("Marie"));
    }

    #[test]
    fn test_render_fallbacks_when_fields_absent() {
        let message = render(NotificationKind::BillingReminder, None, None);
        assert!(message.html.contains("cher utilisateur"));
        assert!(message.subject.contains("votre formule"));
    }
}
