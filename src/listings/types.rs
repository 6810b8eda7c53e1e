use crate::models::{ListingType, Property, PropertyType};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

/// Value meaning "any" for the type selectors
pub const ALL: &str = "all";

/// Errors raised while turning a query string into criteria
#[derive(Error, Debug, PartialEq)]
pub enum CriteriaError {
    #[error("Invalid number for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("Unknown listing type: {0}")]
    UnknownListingType(String),
}

/// Search criteria for listing queries.
///
/// Every field is optional and `None` places no constraint on that dimension.
/// Dimensions are combined with AND; the location text matches if any of
/// city, state, address or zip code contains it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// At least this many bedrooms
    pub min_bedrooms: Option<u32>,
    /// At least this many bathrooms
    pub min_bathrooms: Option<f64>,
    /// City, state, address or zip code fragment
    pub location: Option<String>,
}

impl SearchCriteria {
    /// Parse criteria from a URL query string such as
    /// `?propertyType=house&minPrice=100000&location=Miami`.
    ///
    /// Unknown keys and empty values are ignored, `all` clears a type selector.
    pub fn from_query(query: &str) -> Result<Self, CriteriaError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut criteria = Self::default();

        for (key, raw) in form_urlencoded::parse(query.as_bytes()) {
            // location text is matched as given, surrounding spaces included
            if key == "location" {
                if !raw.is_empty() {
                    criteria.location = Some(raw.into_owned());
                }
                continue;
            }

            let value = raw.trim();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "propertyType" if value == ALL => criteria.property_type = None,
                "propertyType" => {
                    criteria.property_type = Some(
                        PropertyType::parse(value)
                            .ok_or_else(|| CriteriaError::UnknownPropertyType(value.to_string()))?,
                    )
                }
                "listingType" if value == ALL => criteria.listing_type = None,
                "listingType" => {
                    criteria.listing_type = Some(
                        ListingType::parse(value)
                            .ok_or_else(|| CriteriaError::UnknownListingType(value.to_string()))?,
                    )
                }
                "minPrice" => criteria.min_price = Some(parse_number("minPrice", value)?),
                "maxPrice" => criteria.max_price = Some(parse_number("maxPrice", value)?),
                "bedrooms" => {
                    // bedrooms are whole, so "at least 1.5" is "at least 2"
                    let bedrooms = parse_number("bedrooms", value)?;
                    criteria.min_bedrooms = Some(bedrooms.ceil() as u32);
                }
                "bathrooms" => criteria.min_bathrooms = Some(parse_number("bathrooms", value)?),
                _ => {}
            }
        }

        Ok(criteria)
    }

    /// Serialize back into a query string, skipping unset dimensions.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            serializer.append_pair("location", location);
        }
        if let Some(property_type) = self.property_type {
            serializer.append_pair("propertyType", property_type.as_str());
        }
        if let Some(listing_type) = self.listing_type {
            serializer.append_pair("listingType", listing_type.as_str());
        }
        if let Some(min_price) = self.min_price {
            serializer.append_pair("minPrice", &min_price.to_string());
        }
        if let Some(max_price) = self.max_price {
            serializer.append_pair("maxPrice", &max_price.to_string());
        }
        if let Some(bedrooms) = self.min_bedrooms {
            serializer.append_pair("bedrooms", &bedrooms.to_string());
        }
        if let Some(bathrooms) = self.min_bathrooms {
            serializer.append_pair("bathrooms", &bathrooms.to_string());
        }

        serializer.finish()
    }

    /// True when no dimension is constrained
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.listing_type.is_none()
            && active(self.min_price).is_none()
            && active(self.max_price).is_none()
            && self.min_bedrooms.filter(|b| *b > 0).is_none()
            && active(self.min_bathrooms).is_none()
            && self.location_needle().is_none()
    }

    /// Check a single listing against every active dimension.
    ///
    /// Zero bounds count as unset.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(property_type) = self.property_type {
            if property.property_type != property_type {
                return false;
            }
        }

        if let Some(listing_type) = self.listing_type {
            if property.listing_type != listing_type {
                return false;
            }
        }

        if let Some(min_price) = active(self.min_price) {
            if property.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = active(self.max_price) {
            if property.price > max_price {
                return false;
            }
        }

        if let Some(min_bedrooms) = self.min_bedrooms.filter(|b| *b > 0) {
            if property.bedrooms < min_bedrooms {
                return false;
            }
        }

        if let Some(min_bathrooms) = active(self.min_bathrooms) {
            if property.bathrooms < min_bathrooms {
                return false;
            }
        }

        if let Some(needle) = self.location_needle() {
            let lower = needle.to_lowercase();
            let location = &property.location;
            let hit = location.city.to_lowercase().contains(&lower)
                || location.state.to_lowercase().contains(&lower)
                || location.zip_code.contains(needle)
                || location.address.to_lowercase().contains(&lower);
            if !hit {
                return false;
            }
        }

        true
    }

    fn location_needle(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }
}

fn active(bound: Option<f64>) -> Option<f64> {
    bound.filter(|v| *v != 0.0)
}

fn parse_number(key: &'static str, value: &str) -> Result<f64, CriteriaError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .ok_or_else(|| CriteriaError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
