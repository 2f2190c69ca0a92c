//! Lead intake from the "join us" form.
//!
//! ```text
//! POST /join-us business_name=..&contact_person=..&phone=..&monthly_volume=250
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;

use crate::domain::{Error, LeadValidationError, NewLead};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::invalid_field;
use crate::inbound::http::flash::{FlashLevel, copy};
use crate::inbound::http::redirect::see_other;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Form body for `POST /join-us`. Missing fields arrive blank and fail
/// validation with a field-specific error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LeadRequest {
    pub business_name: String,
    pub contact_person: String,
    pub phone: String,
    pub monthly_volume: String,
}

impl TryFrom<&LeadRequest> for NewLead {
    type Error = LeadValidationError;

    fn try_from(value: &LeadRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            &value.business_name,
            &value.contact_person,
            &value.phone,
            &value.monthly_volume,
        )
    }
}

fn map_lead_validation_error(err: LeadValidationError) -> Error {
    let field = match err {
        LeadValidationError::EmptyBusinessName
        | LeadValidationError::BusinessNameTooLong { .. } => "business_name",
        LeadValidationError::EmptyContactPerson
        | LeadValidationError::ContactPersonTooLong { .. } => "contact_person",
        LeadValidationError::EmptyPhone | LeadValidationError::PhoneTooLong { .. } => "phone",
        LeadValidationError::InvalidMonthlyVolume => "monthly_volume",
    };
    invalid_field(field, err)
}

/// Record a new lead, thank the visitor and send them home.
#[post("/join-us")]
pub async fn submit_lead(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LeadRequest>,
) -> ApiResult<HttpResponse> {
    let lead = NewLead::try_from(&*form).map_err(map_lead_validation_error)?;
    state.leads.submit(&lead).await?;
    session.push_flash(FlashLevel::Success, copy::LEAD_RECEIVED)?;
    Ok(see_other("/"))
}

#[cfg(test)]
mod tests {
    use crate::domain::{Lead, LeadId};
    use crate::inbound::http::test_utils::{MockPorts, location, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::{DateTime, Utc};
    use rstest::rstest;
    use serde_json::Value;

    #[actix_web::test]
    async fn valid_lead_is_stored_and_acknowledged() {
        let mut ports = MockPorts::default();
        ports
            .leads
            .expect_submit()
            .withf(|lead| {
                lead.business_name() == "Falafel Express"
                    && lead.contact_person() == "Noa"
                    && lead.phone() == "050-1234567"
                    && lead.monthly_volume() == 250
            })
            .times(1)
            .return_once(|lead| {
                Ok(Lead {
                    id: LeadId::new(1),
                    business_name: lead.business_name().to_owned(),
                    contact_person: lead.contact_person().to_owned(),
                    phone: lead.phone().to_owned(),
                    monthly_volume: lead.monthly_volume(),
                    created_at: DateTime::<Utc>::UNIX_EPOCH,
                })
            });
        let app = test::init_service(test_app(ports)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/join-us")
                .set_form([
                    ("business_name", "Falafel Express"),
                    ("contact_person", "Noa"),
                    ("phone", "050-1234567"),
                    ("monthly_volume", "250"),
                ])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/");
    }

    #[rstest]
    #[case("", "250", "business_name")]
    #[case("Falafel Express", "lots", "monthly_volume")]
    #[case("Falafel Express", "-5", "monthly_volume")]
    #[actix_web::test]
    async fn invalid_leads_are_rejected(
        #[case] business: &str,
        #[case] volume: &str,
        #[case] field: &str,
    ) {
        let mut ports = MockPorts::default();
        ports.leads.expect_submit().never();
        let app = test::init_service(test_app(ports)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/join-us")
                .set_form([
                    ("business_name", business),
                    ("contact_person", "Noa"),
                    ("phone", "050-1234567"),
                    ("monthly_volume", volume),
                ])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], field);
    }
}
