use chrono::{DateTime, Utc};

use crate::storage::{Lead, NewLead};
use migration::entities::lead;

/// 将 Sea-ORM Model 转换为 Lead
pub fn model_to_lead(model: lead::Model) -> Lead {
    Lead {
        id: model.id,
        created_at: model.created_at,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        phone: model.phone,
        zip: model.zip,
        ip: model.ip,
        user_agent: model.user_agent,
        page_url: model.page_url,
        consent_text: model.consent_text,
        brand: model.brand,
        domain: model.domain,
        submitted_at: model.submitted_at,
    }
}

/// 将 NewLead 转换为待插入的 ActiveModel，id 由数据库生成
pub fn new_lead_to_active_model(lead: &NewLead, created_at: DateTime<Utc>) -> lead::ActiveModel {
    use sea_orm::ActiveValue::*;

    lead::ActiveModel {
        id: NotSet,
        created_at: Set(created_at),
        first_name: Set(lead.first_name.clone()),
        last_name: Set(lead.last_name.clone()),
        email: Set(lead.email.clone()),
        phone: Set(lead.phone.clone()),
        zip: Set(lead.zip.clone()),
        ip: Set(Some(lead.ip.clone())),
        user_agent: Set(lead.user_agent.clone()),
        page_url: Set(lead.page_url.clone()),
        consent_text: Set(lead.consent_text.clone()),
        brand: Set(lead.brand.clone()),
        domain: Set(lead.domain.clone()),
        submitted_at: Set(lead.submitted_at.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn sample_new_lead() -> NewLead {
        NewLead {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-1234".to_string(),
            zip: "90210".to_string(),
            ip: "unknown".to_string(),
            user_agent: None,
            page_url: Some("https://gomejorinsurance.com/".to_string()),
            consent_text: "I agree".to_string(),
            brand: "Go Mejor Insurance".to_string(),
            domain: "gomejorinsurance.com".to_string(),
            submitted_at: Some("2024-01-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_active_model_leaves_id_to_database() {
        let now = Utc::now();
        let active = new_lead_to_active_model(&sample_new_lead(), now);
        assert!(matches!(active.id, ActiveValue::NotSet));
        assert!(matches!(active.user_agent, ActiveValue::Set(None)));
        if let ActiveValue::Set(created_at) = active.created_at {
            assert_eq!(created_at, now);
        } else {
            panic!("created_at should be set");
        }
        if let ActiveValue::Set(ip) = active.ip {
            assert_eq!(ip.as_deref(), Some("unknown"));
        } else {
            panic!("ip should be set");
        }
    }

    #[test]
    fn test_model_to_lead_keeps_fields() {
        let now = Utc::now();
        let model = lead::Model {
            id: 7,
            created_at: now,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-1234".to_string(),
            zip: "90210".to_string(),
            ip: Some("203.0.113.9".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            page_url: None,
            consent_text: "I agree".to_string(),
            brand: "Go Mejor Insurance".to_string(),
            domain: "gomejorinsurance.com".to_string(),
            submitted_at: None,
        };

        let lead = model_to_lead(model);
        assert_eq!(lead.id, 7);
        assert_eq!(lead.created_at, now);
        assert_eq!(lead.ip.as_deref(), Some("203.0.113.9"));
        assert_eq!(lead.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert!(lead.submitted_at.is_none());
    }
}
