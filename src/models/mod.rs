use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown for listings submitted without any pictures
pub const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80";

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Land,
    Commercial,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "apartment" => Some(PropertyType::Apartment),
            "house" => Some(PropertyType::House),
            "condo" => Some(PropertyType::Condo),
            "land" => Some(PropertyType::Land),
            "commercial" => Some(PropertyType::Commercial),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the listing is for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sale" => Some(ListingType::Sale),
            "rent" => Some(ListingType::Rent),
            _ => None,
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Contact details copied onto the listing when it was submitted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Total price for sales, monthly amount for rentals
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    /// Square feet
    pub size: f64,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub location: Location,
    pub listed_date: DateTime<Utc>,
    pub seller: Seller,
}

impl Property {
    /// Build the stored record for a submission.
    pub fn from_new(new: NewProperty, id: String, listed_date: DateTime<Utc>) -> Self {
        let images = if new.images.is_empty() {
            vec![DEFAULT_IMAGE.to_string()]
        } else {
            new.images
        };

        Self {
            id,
            title: new.title,
            description: new.description,
            price: new.price,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            size: new.size,
            property_type: new.property_type,
            listing_type: new.listing_type,
            features: new.features,
            images,
            location: new.location,
            listed_date,
            seller: new.seller,
        }
    }

    /// Price as shown on a card: `$450,000` for sales, `$2,500/mo` for rentals.
    pub fn price_label(&self) -> String {
        let amount = format_amount(self.price);
        match self.listing_type {
            ListingType::Sale => format!("${}", amount),
            ListingType::Rent => format!("${}/mo", amount),
        }
    }
}

/// A listing as submitted, before the store assigns `id` and `listedDate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub size: f64,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub location: Location,
    pub seller: Seller,
}

fn format_amount(value: f64) -> String {
    let total_cents = (value * 100.0).round() as u64;
    let digits = (total_cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let cents = total_cents % 100;
    if cents > 0 {
        grouped.push_str(&format!(".{:02}", cents));
    }
    grouped
}
