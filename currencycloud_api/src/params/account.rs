use super::common::{Params, Search, SearchCommon};

/// Parameters for creating a sub-account.
pub struct AccountCreateParams {
    pub account_name: String,
    pub legal_entity_type: String,
    pub your_reference: Option<String>,
    pub status: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub spread_table: Option<String>,
    pub identification_type: Option<String>,
    pub identification_value: Option<String>,
    pub api_trading: Option<bool>,
    pub online_trading: Option<bool>,
    pub phone_trading: Option<bool>,
    pub terms_and_conditions_accepted: Option<bool>,
}

impl AccountCreateParams {
    /// Creates the required parameter set for `POST /v2/accounts/create`.
    ///
    /// `legal_entity_type` is `individual` or `company`.
    pub fn new(account_name: &str, legal_entity_type: &str) -> Self {
        Self {
            account_name: account_name.to_string(),
            legal_entity_type: legal_entity_type.to_string(),
            your_reference: None,
            status: None,
            street: None,
            city: None,
            state_or_province: None,
            postal_code: None,
            country: None,
            spread_table: None,
            identification_type: None,
            identification_value: None,
            api_trading: None,
            online_trading: None,
            phone_trading: None,
            terms_and_conditions_accepted: None,
        }
    }

    pub fn with_your_reference(mut self, your_reference: &str) -> Self {
        self.your_reference = Some(your_reference.to_string());
        self
    }
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_street(mut self, street: &str) -> Self {
        self.street = Some(street.to_string());
        self
    }
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }
    pub fn with_state_or_province(mut self, state_or_province: &str) -> Self {
        self.state_or_province = Some(state_or_province.to_string());
        self
    }
    pub fn with_postal_code(mut self, postal_code: &str) -> Self {
        self.postal_code = Some(postal_code.to_string());
        self
    }
    /// Two-letter ISO 3166-1 country code.
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }
    pub fn with_spread_table(mut self, spread_table: &str) -> Self {
        self.spread_table = Some(spread_table.to_string());
        self
    }
    pub fn with_identification_type(mut self, identification_type: &str) -> Self {
        self.identification_type = Some(identification_type.to_string());
        self
    }
    pub fn with_identification_value(mut self, identification_value: &str) -> Self {
        self.identification_value = Some(identification_value.to_string());
        self
    }
    pub fn with_api_trading(mut self, api_trading: bool) -> Self {
        self.api_trading = Some(api_trading);
        self
    }
    pub fn with_online_trading(mut self, online_trading: bool) -> Self {
        self.online_trading = Some(online_trading);
        self
    }
    pub fn with_phone_trading(mut self, phone_trading: bool) -> Self {
        self.phone_trading = Some(phone_trading);
        self
    }
    pub fn with_terms_and_conditions_accepted(
        mut self,
        terms_and_conditions_accepted: bool,
    ) -> Self {
        self.terms_and_conditions_accepted = Some(terms_and_conditions_accepted);
        self
    }
}

impl Params for AccountCreateParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("account_name", self.account_name.clone()),
            ("legal_entity_type", self.legal_entity_type.clone()),
        ];
        add_optional_account_pairs(
            &mut pairs,
            &OptionalAccountFields {
                your_reference: &self.your_reference,
                status: &self.status,
                street: &self.street,
                city: &self.city,
                state_or_province: &self.state_or_province,
                postal_code: &self.postal_code,
                country: &self.country,
                spread_table: &self.spread_table,
                identification_type: &self.identification_type,
                identification_value: &self.identification_value,
                api_trading: self.api_trading,
                online_trading: self.online_trading,
                phone_trading: self.phone_trading,
                terms_and_conditions_accepted: self.terms_and_conditions_accepted,
            },
        );
        pairs
    }
}

/// Parameters for updating an existing account. Every field is optional;
/// omitted fields are left unchanged by the API.
#[derive(Default)]
pub struct AccountUpdateParams {
    pub account_name: Option<String>,
    pub legal_entity_type: Option<String>,
    pub your_reference: Option<String>,
    pub status: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub spread_table: Option<String>,
    pub identification_type: Option<String>,
    pub identification_value: Option<String>,
    pub api_trading: Option<bool>,
    pub online_trading: Option<bool>,
    pub phone_trading: Option<bool>,
    pub terms_and_conditions_accepted: Option<bool>,
}

impl AccountUpdateParams {
    pub fn with_account_name(mut self, account_name: &str) -> Self {
        self.account_name = Some(account_name.to_string());
        self
    }
    pub fn with_legal_entity_type(mut self, legal_entity_type: &str) -> Self {
        self.legal_entity_type = Some(legal_entity_type.to_string());
        self
    }
    pub fn with_your_reference(mut self, your_reference: &str) -> Self {
        self.your_reference = Some(your_reference.to_string());
        self
    }
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_street(mut self, street: &str) -> Self {
        self.street = Some(street.to_string());
        self
    }
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }
    pub fn with_state_or_province(mut self, state_or_province: &str) -> Self {
        self.state_or_province = Some(state_or_province.to_string());
        self
    }
    pub fn with_postal_code(mut self, postal_code: &str) -> Self {
        self.postal_code = Some(postal_code.to_string());
        self
    }
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }
    pub fn with_spread_table(mut self, spread_table: &str) -> Self {
        self.spread_table = Some(spread_table.to_string());
        self
    }
    pub fn with_identification_type(mut self, identification_type: &str) -> Self {
        self.identification_type = Some(identification_type.to_string());
        self
    }
    pub fn with_identification_value(mut self, identification_value: &str) -> Self {
        self.identification_value = Some(identification_value.to_string());
        self
    }
    pub fn with_api_trading(mut self, api_trading: bool) -> Self {
        self.api_trading = Some(api_trading);
        self
    }
    pub fn with_online_trading(mut self, online_trading: bool) -> Self {
        self.online_trading = Some(online_trading);
        self
    }
    pub fn with_phone_trading(mut self, phone_trading: bool) -> Self {
        self.phone_trading = Some(phone_trading);
        self
    }
    pub fn with_terms_and_conditions_accepted(
        mut self,
        terms_and_conditions_accepted: bool,
    ) -> Self {
        self.terms_and_conditions_accepted = Some(terms_and_conditions_accepted);
        self
    }
}

impl Params for AccountUpdateParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(account_name) = &self.account_name {
            pairs.push(("account_name", account_name.clone()));
        }
        if let Some(legal_entity_type) = &self.legal_entity_type {
            pairs.push(("legal_entity_type", legal_entity_type.clone()));
        }
        add_optional_account_pairs(
            &mut pairs,
            &OptionalAccountFields {
                your_reference: &self.your_reference,
                status: &self.status,
                street: &self.street,
                city: &self.city,
                state_or_province: &self.state_or_province,
                postal_code: &self.postal_code,
                country: &self.country,
                spread_table: &self.spread_table,
                identification_type: &self.identification_type,
                identification_value: &self.identification_value,
                api_trading: self.api_trading,
                online_trading: self.online_trading,
                phone_trading: self.phone_trading,
                terms_and_conditions_accepted: self.terms_and_conditions_accepted,
            },
        );
        pairs
    }
}

// Create and update share the same optional field set on the wire.
struct OptionalAccountFields<'a> {
    your_reference: &'a Option<String>,
    status: &'a Option<String>,
    street: &'a Option<String>,
    city: &'a Option<String>,
    state_or_province: &'a Option<String>,
    postal_code: &'a Option<String>,
    country: &'a Option<String>,
    spread_table: &'a Option<String>,
    identification_type: &'a Option<String>,
    identification_value: &'a Option<String>,
    api_trading: Option<bool>,
    online_trading: Option<bool>,
    phone_trading: Option<bool>,
    terms_and_conditions_accepted: Option<bool>,
}

fn add_optional_account_pairs(
    pairs: &mut Vec<(&'static str, String)>,
    fields: &OptionalAccountFields<'_>,
) {
    if let Some(your_reference) = fields.your_reference {
        pairs.push(("your_reference", your_reference.clone()));
    }
    if let Some(status) = fields.status {
        pairs.push(("status", status.clone()));
    }
    if let Some(street) = fields.street {
        pairs.push(("street", street.clone()));
    }
    if let Some(city) = fields.city {
        pairs.push(("city", city.clone()));
    }
    if let Some(state_or_province) = fields.state_or_province {
        pairs.push(("state_or_province", state_or_province.clone()));
    }
    if let Some(postal_code) = fields.postal_code {
        pairs.push(("postal_code", postal_code.clone()));
    }
    if let Some(country) = fields.country {
        pairs.push(("country", country.clone()));
    }
    if let Some(spread_table) = fields.spread_table {
        pairs.push(("spread_table", spread_table.clone()));
    }
    if let Some(identification_type) = fields.identification_type {
        pairs.push(("identification_type", identification_type.clone()));
    }
    if let Some(identification_value) = fields.identification_value {
        pairs.push(("identification_value", identification_value.clone()));
    }
    if let Some(api_trading) = fields.api_trading {
        pairs.push(("api_trading", api_trading.to_string()));
    }
    if let Some(online_trading) = fields.online_trading {
        pairs.push(("online_trading", online_trading.to_string()));
    }
    if let Some(phone_trading) = fields.phone_trading {
        pairs.push(("phone_trading", phone_trading.to_string()));
    }
    if let Some(terms_and_conditions_accepted) = fields.terms_and_conditions_accepted {
        pairs.push((
            "terms_and_conditions_accepted",
            terms_and_conditions_accepted.to_string(),
        ));
    }
}

/// Filters for `GET /v2/accounts/find`.
#[derive(Default)]
pub struct AccountSearchParams {
    pub common: SearchCommon,
    pub account_name: Option<String>,
    pub brand: Option<String>,
    pub your_reference: Option<String>,
    pub status: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub spread_table: Option<String>,
}

impl Params for AccountSearchParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        self.common.add_to_pairs(&mut pairs);
        if let Some(account_name) = &self.account_name {
            pairs.push(("account_name", account_name.clone()));
        }
        if let Some(brand) = &self.brand {
            pairs.push(("brand", brand.clone()));
        }
        if let Some(your_reference) = &self.your_reference {
            pairs.push(("your_reference", your_reference.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(street) = &self.street {
            pairs.push(("street", street.clone()));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(state_or_province) = &self.state_or_province {
            pairs.push(("state_or_province", state_or_province.clone()));
        }
        if let Some(postal_code) = &self.postal_code {
            pairs.push(("postal_code", postal_code.clone()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(spread_table) = &self.spread_table {
            pairs.push(("spread_table", spread_table.clone()));
        }
        pairs
    }
}

impl Search for AccountSearchParams {
    fn get_common(&mut self) -> &mut SearchCommon {
        &mut self.common
    }
}

impl AccountSearchParams {
    pub fn with_account_name(mut self, account_name: &str) -> Self {
        self.account_name = Some(account_name.to_string());
        self
    }
    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }
    pub fn with_your_reference(mut self, your_reference: &str) -> Self {
        self.your_reference = Some(your_reference.to_string());
        self
    }
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_street(mut self, street: &str) -> Self {
        self.street = Some(street.to_string());
        self
    }
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }
    pub fn with_state_or_province(mut self, state_or_province: &str) -> Self {
        self.state_or_province = Some(state_or_province.to_string());
        self
    }
    pub fn with_postal_code(mut self, postal_code: &str) -> Self {
        self.postal_code = Some(postal_code.to_string());
        self
    }
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }
    pub fn with_spread_table(mut self, spread_table: &str) -> Self {
        self.spread_table = Some(spread_table.to_string());
        self
    }
}
