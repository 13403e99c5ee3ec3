//! Typed contract for the phone-catalogue tables of the backing store.
//!
//! Nothing in the destination page reads or writes these tables. The types
//! describe row shapes and write payloads for a future data-access layer.

#![allow(dead_code)]

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Column-level link from a child table to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: &'static str,
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

/// A named table with its read shape and write payloads.
pub trait Table {
    const NAME: &'static str;
    const FOREIGN_KEYS: &'static [ForeignKey];

    type Row: DeserializeOwned + Serialize;
    type Insert: Serialize;
    type Update: Serialize + Default;
}

pub const TABLE_NAMES: [&str; 5] = [
    MobileBrands::NAME,
    Mobiles::NAME,
    MobilePrices::NAME,
    Reviews::NAME,
    Profiles::NAME,
];

// ============================================================================
// mobile_brands
// ============================================================================

pub struct MobileBrands;

impl Table for MobileBrands {
    const NAME: &'static str = "mobile_brands";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[];

    type Row = MobileBrand;
    type Insert = NewMobileBrand;
    type Update = MobileBrandUpdate;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MobileBrand {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMobileBrand {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
}

impl NewMobileBrand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            logo_url: None,
            created_at: None,
        }
    }
}

/// `Some(None)` on a nullable column writes SQL null; `None` leaves it untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MobileBrandUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<Option<String>>,
}

// ============================================================================
// mobiles
// ============================================================================

pub struct Mobiles;

impl Table for Mobiles {
    const NAME: &'static str = "mobiles";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[ForeignKey {
        name: "mobiles_brand_id_fkey",
        column: "brand_id",
        references_table: MobileBrands::NAME,
        references_column: "id",
    }];

    type Row = Mobile;
    type Insert = NewMobile;
    type Update = MobileUpdate;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mobile {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub model: String,
    pub battery: Option<String>,
    pub camera: Option<String>,
    pub display_size: Option<String>,
    pub image_url: Option<String>,
    pub launch_date: Option<String>,
    pub operating_system: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Hardware description columns shared by insert and row shapes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MobileSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMobile {
    pub brand_id: Uuid,
    pub model: String,
    #[serde(flatten)]
    pub specs: MobileSpecs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
}

impl NewMobile {
    pub fn new(brand_id: Uuid, model: impl Into<String>) -> Self {
        Self {
            brand_id,
            model: model.into(),
            specs: MobileSpecs::default(),
            id: None,
            created_at: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MobileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_size: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Option<String>>,
}

// ============================================================================
// mobile_prices
// ============================================================================

pub struct MobilePrices;

impl Table for MobilePrices {
    const NAME: &'static str = "mobile_prices";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[ForeignKey {
        name: "mobile_prices_mobile_id_fkey",
        column: "mobile_id",
        references_table: Mobiles::NAME,
        references_column: "id",
    }];

    type Row = MobilePrice;
    type Insert = NewMobilePrice;
    type Update = MobilePriceUpdate;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MobilePrice {
    pub id: Uuid,
    pub mobile_id: Uuid,
    pub price: f64,
    pub retailer: String,
    pub city: Option<String>,
    pub is_current: Option<bool>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMobilePrice {
    pub mobile_id: Uuid,
    pub price: f64,
    pub retailer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
}

impl NewMobilePrice {
    pub fn new(mobile_id: Uuid, price: f64, retailer: impl Into<String>) -> Self {
        Self {
            mobile_id,
            price,
            retailer: retailer.into(),
            city: None,
            is_current: None,
            id: None,
            created_at: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MobilePriceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current: Option<Option<bool>>,
}

// ============================================================================
// reviews
// ============================================================================

pub struct Reviews;

impl Table for Reviews {
    const NAME: &'static str = "reviews";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[ForeignKey {
        name: "reviews_mobile_id_fkey",
        column: "mobile_id",
        references_table: Mobiles::NAME,
        references_column: "id",
    }];

    type Row = Review;
    type Insert = NewReview;
    type Update = ReviewUpdate;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub mobile_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub rating: f64,
    pub pros: Option<Vec<String>>,
    pub cons: Option<Vec<String>>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewReview {
    pub mobile_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pros: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pros: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cons: Option<Option<Vec<String>>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

// ============================================================================
// profiles
// ============================================================================

pub struct Profiles;

impl Table for Profiles {
    const NAME: &'static str = "profiles";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[];

    type Row = Profile;
    type Insert = NewProfile;
    type Update = ProfileUpdate;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub city: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Profiles share their id with the auth user, so it is required on insert.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProfile {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
}

impl NewProfile {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            username: None,
            full_name: None,
            city: None,
            created_at: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<Option<String>>,
}

/// Foreign keys of `T` that point at `parent`.
pub fn references<T: Table>(parent: &str) -> impl Iterator<Item = &'static ForeignKey> + '_ {
    T::FOREIGN_KEYS
        .iter()
        .filter(move |fk| fk.references_table == parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn table_names_match_the_store() {
        assert_eq!(
            TABLE_NAMES,
            ["mobile_brands", "mobiles", "mobile_prices", "reviews", "profiles"]
        );
    }

    #[test]
    fn children_reference_their_parents() {
        assert_eq!(references::<Mobiles>("mobile_brands").count(), 1);
        assert_eq!(references::<MobilePrices>("mobiles").count(), 1);
        assert_eq!(references::<Reviews>("mobiles").next().map(|fk| fk.column), Some("mobile_id"));
        assert_eq!(references::<Reviews>("profiles").count(), 0);
        assert!(MobileBrands::FOREIGN_KEYS.is_empty());
        assert!(Profiles::FOREIGN_KEYS.is_empty());
    }

    #[test]
    fn insert_omits_unset_optional_fields() {
        let mobile_id = Uuid::nil();
        let payload = serde_json::to_value(NewMobilePrice::new(mobile_id, 89_999.0, "PriceOye")).unwrap();
        assert_eq!(
            payload,
            json!({
                "mobile_id": "00000000-0000-0000-0000-000000000000",
                "price": 89999.0,
                "retailer": "PriceOye"
            })
        );
    }

    #[test]
    fn insert_flattens_mobile_specs() {
        let mut insert = NewMobile::new(Uuid::nil(), "Galaxy A55");
        insert.specs.ram = Some("8GB".into());
        let payload = serde_json::to_value(&insert).unwrap();
        assert_eq!(payload["model"], "Galaxy A55");
        assert_eq!(payload["ram"], "8GB");
        assert!(payload.get("camera").is_none());
        assert!(payload.get("specs").is_none());
    }

    #[test]
    fn update_distinguishes_untouched_from_null() {
        let update = MobileBrandUpdate {
            logo_url: Some(None),
            ..MobileBrandUpdate::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "logo_url": null }));
        assert_eq!(
            serde_json::to_value(MobileBrandUpdate::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn insert_timestamps_use_rfc3339() {
        let mut brand = NewMobileBrand::new("Infinix");
        brand.created_at = Some(datetime!(2024-05-01 10:30:00 UTC));
        let payload = serde_json::to_value(&brand).unwrap();
        assert_eq!(payload["created_at"], "2024-05-01T10:30:00Z");
    }

    #[test]
    fn review_update_can_move_a_review_to_another_mobile() {
        let mobile_id = Uuid::from_u128(0x0b0f5a77_0d0e_4b6b_8a8b_1f2e3d4c5b6a);
        let update = ReviewUpdate {
            mobile_id: Some(mobile_id),
            ..ReviewUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "mobile_id": "0b0f5a77-0d0e-4b6b-8a8b-1f2e3d4c5b6a" })
        );
    }

    #[test]
    fn updates_may_rewrite_id_and_created_at() {
        let update = ProfileUpdate {
            id: Some(Uuid::nil()),
            created_at: Some(datetime!(2024-01-02 03:04:05 UTC)),
            ..ProfileUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "created_at": "2024-01-02T03:04:05Z"
            })
        );
    }

    #[test]
    fn profile_insert_requires_only_the_id() {
        let payload = serde_json::to_value(NewProfile::new(Uuid::nil())).unwrap();
        assert_eq!(payload, json!({ "id": "00000000-0000-0000-0000-000000000000" }));
    }

    #[test]
    fn review_row_deserializes_from_table_json() {
        let row: Review = serde_json::from_value(json!({
            "id": "6f1c1f3e-8d53-4c1d-9d59-3c2b0a6a0f11",
            "mobile_id": "0b0f5a77-0d0e-4b6b-8a8b-1f2e3d4c5b6a",
            "user_id": "1a2b3c4d-5e6f-4a1b-8c2d-3e4f5a6b7c8d",
            "title": "Solid battery",
            "content": "Lasts two days.",
            "rating": 4,
            "pros": ["battery"],
            "cons": null,
            "created_at": "2024-03-10T08:00:00+05:00",
            "updated_at": "2024-03-11T09:15:00+05:00"
        }))
        .unwrap();
        assert_eq!(row.rating, 4.0);
        assert_eq!(row.pros, Some(vec!["battery".to_string()]));
        assert_eq!(row.cons, None);
        assert!(row.updated_at > row.created_at);
    }
}
