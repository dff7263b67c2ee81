use crate::domain::models::{Customer, CustomerAddress, CustomerCompany, LegacyUser};

/// Reshape a legacy user into a [`Customer`].
///
/// A missing `address` or `company` yields a nested record whose fields are
/// all `None`.
pub fn to_customer(legacy: &LegacyUser) -> Customer {
    let address = legacy.address.as_ref();
    let company = legacy.company.as_ref();

    Customer {
        id: legacy.id,
        name: legacy.name.clone(),
        username: legacy.username.clone(),
        email: legacy.email.clone(),
        phone: legacy.phone.clone(),
        website: legacy.website.clone(),
        address: CustomerAddress {
            street: address.and_then(|a| a.street.clone()),
            suite: address.and_then(|a| a.suite.clone()),
            city: address.and_then(|a| a.city.clone()),
            zipcode: address.and_then(|a| a.zipcode.clone()),
        },
        company: CustomerCompany {
            name: company.and_then(|c| c.name.clone()),
            catch_phrase: company.and_then(|c| c.catch_phrase.clone()),
            bs: company.and_then(|c| c.bs.clone()),
        },
    }
}
